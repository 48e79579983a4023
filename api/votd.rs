use std::sync::Mutex;

use chrono::{Local, Utc};
use log::error;
use once_cell::sync::Lazy;
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

use votd_api::cache::VerseCache;
use votd_api::client::{api_key_from_env, YouVersionClient};
use votd_api::handler::{query_param, resolve_day, verse_for_day, SHARED_CACHE_CONTROL};

/// Process-wide cache slot. Lives as long as this function instance; the
/// platform may recycle the instance at any time, silently resetting it.
static CACHE: Lazy<Mutex<VerseCache>> = Lazy::new(|| Mutex::new(VerseCache::new()));

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(handler).await
}

/// GET /api/votd — Serve the verse of the day.
///
/// Accepts an optional `?day=N` day-of-year override; otherwise the day is
/// derived from the server's local date. Success responses carry a
/// shared-cache header so the CDN holds each day's response for an hour.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::GET {
        let error = json!({
            "error": "Method not allowed",
            "message": "Use GET to fetch the verse of the day"
        });
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header("Content-Type", "application/json")
            .body(Body::Text(error.to_string()))?);
    }

    let day = resolve_day(
        query_param(req.uri().query(), "day"),
        Local::now().date_naive(),
    );
    let now_ms = Utc::now().timestamp_millis();
    let source = api_key_from_env().map(YouVersionClient::new);

    match verse_for_day(day, now_ms, &CACHE, source.as_ref()).await {
        Ok(envelope) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Cache-Control", SHARED_CACHE_CONTROL)
            .body(Body::Text(serde_json::to_string(&envelope)?))?),
        Err(err) => {
            error!("votd request for day {day} failed: {err}");
            let body = json!({ "error": err.to_string() });
            Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Body::Text(body.to_string()))?)
        }
    }
}
