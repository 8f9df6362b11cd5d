//! Optional HMAC gate for catalog ids.
//!
//! Ids are printed inside QR codes on the product labels. When a
//! secret is configured, each QR also carries `sig`, the hex-encoded
//! HMAC-SHA256 of the id, so scanned requests can be told apart from
//! ids typed in by hand. With no secret configured the gate is open.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Compute the hex-encoded HMAC-SHA256 signature of `id` under `secret`.
///
/// This is the forward computation the `sign_ids` tool embeds into QR
/// codes; [`verify`] recomputes it on every signed request.
pub fn sign(id: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a provided signature against the configured secret.
///
/// - No secret (or an empty one) configured: always passes.
/// - Secret configured but id or signature absent/empty: fails.
/// - Otherwise the recomputed digest must equal `sig`, compared in
///   constant time.
pub fn verify(id: &str, sig: Option<&str>, secret: Option<&str>) -> bool {
    let secret = match secret {
        Some(secret) if !secret.is_empty() => secret,
        _ => return true,
    };
    let Some(sig) = sig else {
        return false;
    };
    if id.is_empty() || sig.is_empty() {
        return false;
    }

    let expected = sign(id, secret);
    if expected.len() != sig.len() {
        return false;
    }
    expected.as_bytes().ct_eq(sig.as_bytes()).into()
}
