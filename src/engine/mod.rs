/// Validation Engine — decides a guess against the catalog and
/// issues the reward on a match.
///
/// The engine owns the full transition logic of a request once the
/// HTTP layer has parsed it: parameter presence, signature gate,
/// catalog lookup, normalized comparison, reward issuance. Each call
/// is independent and synchronous; the only shared state is the
/// read-only catalog borrowed from the hosting process.

use chrono::Utc;

use crate::error::ValidateError;
use crate::models::{Catalog, ValidationRequest};
use crate::signature;
use crate::text;
use crate::voucher;

/// Outcome of a fully processed request.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The guess did not match — a normal negative outcome.
    Miss,
    /// The guess matched; a reward was issued.
    Match(Reward),
}

/// Discount payload issued on a successful match.
#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    /// Discount percentage from the catalog record.
    pub discount: f64,
    /// Freshly generated redemption code.
    pub code: String,
    /// Absolute expiry, epoch milliseconds.
    pub expires_at: i64,
}

/// The core validator, built per request from injected dependencies.
pub struct Validator<'a> {
    catalog: &'a Catalog,
    secret: Option<String>,
}

impl<'a> Validator<'a> {
    /// Create a validator over a loaded catalog and the optional
    /// signing secret.
    pub fn new(catalog: &'a Catalog, secret: Option<String>) -> Self {
        Validator { catalog, secret }
    }

    /// Run a request through the decision chain.
    ///
    /// Checks run in order — parameters, signature, lookup, match —
    /// and the first failure terminates the request. A non-matching
    /// guess is a `Verdict::Miss`, not an error.
    pub fn validate(&self, request: &ValidationRequest) -> Result<Verdict, ValidateError> {
        let id = request.id.as_deref().unwrap_or_default();
        let guess = request.guess.as_deref().unwrap_or_default();
        if id.is_empty() || guess.is_empty() {
            return Err(ValidateError::MissingParams);
        }

        if !signature::verify(id, request.sig.as_deref(), self.secret.as_deref()) {
            tracing::warn!(id, "rejected request with invalid signature");
            return Err(ValidateError::InvalidSignature);
        }

        let record = self.catalog.get(id).ok_or(ValidateError::UnknownId)?;

        let guess_norm = text::normalize(guess);
        let matched = record
            .accepted_phrases()
            .any(|phrase| text::normalize(phrase) == guess_norm);
        if !matched {
            tracing::debug!(id, "guess did not match any accepted phrase");
            return Ok(Verdict::Miss);
        }

        let code = voucher::generate_code(id);
        let expires_at = voucher::expires_at(record.valid_days, Utc::now());
        tracing::debug!(id, code = %code, "guess matched, issued discount code");

        Ok(Verdict::Match(Reward {
            discount: record.discount,
            code,
            expires_at,
        }))
    }
}
