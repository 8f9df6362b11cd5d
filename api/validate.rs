use std::sync::OnceLock;

use aroma_quest_api::catalog::{self, CatalogError};
use aroma_quest_api::config;
use aroma_quest_api::engine::{Validator, Verdict};
use aroma_quest_api::error::ValidateError;
use aroma_quest_api::models::{Catalog, ValidationRequest, ValidationResponse};
use aroma_quest_api::response;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

/// Process-wide catalog cache: populated on the first request an
/// instance serves, read-only afterwards. Owned here by the hosting
/// process and lent to the engine per call.
static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    aroma_quest_api::init_tracing();
    run(handler).await
}

/// POST /api/validate — check a scent guess against the catalog and
/// issue a time-limited discount code on a match.
///
/// Accepts `{id, guess, sig?}`; answers the OPTIONS pre-flight with an
/// empty 200 and rejects every other verb with 405. A wrong guess is a
/// 200 `{ok:false}`, not an error.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() == http::Method::OPTIONS {
        return response::preflight();
    }
    if *req.method() != http::Method::POST {
        return response::failure(&ValidateError::MethodNotAllowed);
    }

    let request = match parse_body(req.body()) {
        Ok(request) => request,
        // A body that is not JSON at all is a parse exception, not a
        // missing-parameter request.
        Err(err) => return response::internal(&format!("invalid request body: {err}")),
    };

    let catalog = match cached_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "catalog unavailable");
            return response::failure(&ValidateError::from(err));
        }
    };

    let validator = Validator::new(catalog, config::hmac_secret());
    match validator.validate(&request) {
        Ok(Verdict::Match(reward)) => {
            response::json(StatusCode::OK, &ValidationResponse::matched(&reward))
        }
        Ok(Verdict::Miss) => response::json(StatusCode::OK, &ValidationResponse::miss()),
        Err(err) => response::failure(&err),
    }
}

/// Decode the request body. An empty body is treated as an empty
/// request so the engine can report the missing parameters as a 400.
fn parse_body(body: &Body) -> Result<ValidationRequest, serde_json::Error> {
    match body {
        Body::Empty => Ok(ValidationRequest::default()),
        Body::Text(text) if text.trim().is_empty() => Ok(ValidationRequest::default()),
        Body::Text(text) => serde_json::from_str(text),
        Body::Binary(bytes) => serde_json::from_slice(bytes),
    }
}

fn cached_catalog() -> Result<&'static Catalog, CatalogError> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let loaded = catalog::load(&config::catalog_path())?;
    Ok(CATALOG.get_or_init(|| loaded))
}
