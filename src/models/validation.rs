use serde::{Deserialize, Serialize};

use crate::engine::Reward;

/// API request body for the /api/validate endpoint.
///
/// All fields are optional at the serde layer: an empty or partial body
/// must reach the engine, which reports missing parameters as a 400
/// rather than a deserialization failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ValidationRequest {
    /// Catalog identifier, usually scanned from a QR code.
    #[serde(default)]
    pub id: Option<String>,
    /// The customer's free-text guess for the scent.
    #[serde(default)]
    pub guess: Option<String>,
    /// Optional HMAC signature of `id` (present when signing is enabled).
    #[serde(default)]
    pub sig: Option<String>,
}

/// API response body for the /api/validate endpoint.
///
/// A miss is just `{"ok": false}`; reward fields are only present on a
/// match and are never serialized as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    /// Whether the guess matched the catalog record.
    pub ok: bool,
    /// Discount percentage granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Issued redemption code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Expiry of the code as an epoch-millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl ValidationResponse {
    /// Negative outcome: the guess did not match.
    pub fn miss() -> Self {
        ValidationResponse {
            ok: false,
            discount: None,
            code: None,
            expires_at: None,
        }
    }

    /// Positive outcome carrying the issued reward.
    pub fn matched(reward: &Reward) -> Self {
        ValidationResponse {
            ok: true,
            discount: Some(reward.discount),
            code: Some(reward.code.clone()),
            expires_at: Some(reward.expires_at),
        }
    }
}

/// JSON error body shared by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, user-safe error message.
    pub error: String,
    /// Diagnostic detail, present on internal errors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
