//! Redemption code generation and expiry arithmetic.
//!
//! Codes are human-facing voucher tokens, not security credentials:
//! uniqueness is probabilistic (no issuance ledger exists) and the
//! random suffix needs no cryptographic strength.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Program prefix stamped on every issued code.
pub const CODE_PREFIX: &str = "SOFKA";

/// Length of the random suffix.
const SUFFIX_LEN: usize = 6;

/// Uppercase alphanumeric alphabet for the suffix.
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produce a redemption code for a matched id: `SOFKA-<id>-<suffix>`.
///
/// Each call draws an independent 6-character uppercase alphanumeric
/// suffix from the thread-local RNG.
pub fn generate_code(id: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{CODE_PREFIX}-{id}-{suffix}")
}

/// Absolute expiry for a code issued at `issued_at`, as epoch milliseconds.
pub fn expires_at(valid_days: i64, issued_at: DateTime<Utc>) -> i64 {
    (issued_at + Duration::days(valid_days)).timestamp_millis()
}
