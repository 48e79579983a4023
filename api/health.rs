use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use votd_api::version;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(handler).await
}

/// GET /api/health — liveness probe for the deployment.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let payload = json!({
        "status": "ok",
        "service": "votd-api",
        "version": version(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
