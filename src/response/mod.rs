//! HTTP response shaping shared by the API handlers.
//!
//! Every response — including errors and the pre-flight — carries the
//! same header set: JSON content type, no caching, and the permissive
//! cross-origin headers the frontend relies on.

use serde::Serialize;
use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::error::ValidateError;
use crate::models::ErrorResponse;

fn with_default_headers(builder: http::response::Builder) -> http::response::Builder {
    builder
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Cache-Control", "no-store")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
}

/// Serialize `payload` as the JSON body of a `status` response.
pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;
    Ok(with_default_headers(Response::builder().status(status)).body(Body::Text(body))?)
}

/// Empty 200 for the CORS pre-flight.
pub fn preflight() -> Result<Response<Body>, Error> {
    Ok(with_default_headers(Response::builder().status(StatusCode::OK)).body(Body::Empty)?)
}

/// Error response for a terminal failure state.
pub fn failure(err: &ValidateError) -> Result<Response<Body>, Error> {
    json(
        err.status_code(),
        &ErrorResponse {
            error: err.to_string(),
            detail: err.detail(),
        },
    )
}

/// 500 with a short diagnostic, for failures outside the taxonomy
/// (e.g. a body that is not valid JSON).
pub fn internal(detail: &str) -> Result<Response<Body>, Error> {
    json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorResponse {
            error: "Internal error".to_string(),
            detail: Some(detail.to_string()),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_text(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(text) => text.clone(),
            Body::Empty => String::new(),
            Body::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    #[test]
    fn test_every_response_carries_cors_and_no_store() {
        let response = preflight().expect("preflight builds");
        let headers = response.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
        assert_eq!(headers["Cache-Control"], "no-store");
        assert_eq!(headers["Content-Type"], "application/json; charset=utf-8");
    }

    #[test]
    fn test_preflight_is_empty_200() {
        let response = preflight().expect("preflight builds");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(matches!(response.body(), Body::Empty));
    }

    #[test]
    fn test_failure_maps_status_and_message() {
        let response = failure(&ValidateError::UnknownId).expect("failure builds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(&response), r#"{"error":"ID not registered"}"#);
    }

    #[test]
    fn test_internal_includes_detail() {
        let response = internal("boom").expect("internal builds");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value =
            serde_json::from_str(&body_text(&response)).expect("body is JSON");
        assert_eq!(body["error"], "Internal error");
        assert_eq!(body["detail"], "boom");
    }
}
