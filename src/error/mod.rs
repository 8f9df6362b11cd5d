//! Error taxonomy for the validation endpoint.

use http::StatusCode;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Everything that can terminate a validation request short of a verdict.
///
/// A non-matching guess is NOT an error — it is a normal negative
/// verdict reported with HTTP 200 (see `engine::Verdict::Miss`).
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Request used a verb other than POST (or the OPTIONS pre-flight).
    #[error("Only POST")]
    MethodNotAllowed,

    /// Body was parseable but `id` or `guess` is missing/empty.
    #[error("Missing parameters: id, guess")]
    MissingParams,

    /// A secret is configured and the provided signature did not check out.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The id is not present in the catalog.
    #[error("ID not registered")]
    UnknownId,

    /// The catalog asset could not be loaded.
    #[error("Internal error")]
    Catalog(#[from] CatalogError),
}

impl ValidateError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingParams => StatusCode::BAD_REQUEST,
            Self::InvalidSignature => StatusCode::UNAUTHORIZED,
            Self::UnknownId => StatusCode::NOT_FOUND,
            Self::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Diagnostic detail for the response body.
    ///
    /// Only internal errors carry one; the message stays short and never
    /// includes secrets or backtraces.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Catalog(source) => Some(source.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_match_wire_contract() {
        assert_eq!(ValidateError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ValidateError::MissingParams.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ValidateError::InvalidSignature.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ValidateError::UnknownId.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_only_internal_errors_carry_detail() {
        assert!(ValidateError::MissingParams.detail().is_none());
        assert!(ValidateError::InvalidSignature.detail().is_none());
        assert!(ValidateError::UnknownId.detail().is_none());

        let err = ValidateError::from(CatalogError::Read {
            path: "data/catalog.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = err.detail().expect("internal error carries detail");
        assert!(detail.contains("data/catalog.json"), "detail was {detail}");
    }
}
