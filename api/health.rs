use aroma_quest_api::{catalog, config, version};
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    aroma_quest_api::init_tracing();
    run(handler).await
}

/// GET /api/health — liveness probe.
///
/// Also reads the catalog asset so a broken deployment is visible
/// before the first customer scans a QR code.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let payload = match catalog::load(&config::catalog_path()) {
        Ok(catalog) => json!({
            "status": "ok",
            "version": version(),
            "scents": catalog.len(),
        }),
        Err(err) => json!({
            "status": "degraded",
            "version": version(),
            "detail": err.to_string(),
        }),
    };

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
