//! Upstream client for the YouVersion Platform API.
//!
//! Two sequential, dependent calls per miss: look up the passage id for a
//! day-of-year, then fetch the passage content for that id. Both calls sit
//! behind the [`VerseSource`] trait so the orchestration can be exercised
//! with canned responses.

use async_trait::async_trait;
use log::info;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Base URL for the YouVersion Platform API.
const API_BASE_URL: &str = "https://api.youversion.com/v1";

/// Fixed content edition: 111 = NIV (licensed).
/// 206 = World English Bible (public domain) is the known alternative.
pub const BIBLE_ID: &str = "111";

/// Request header carrying the app key.
const APP_KEY_HEADER: &str = "X-YVP-App-Key";

/// Environment variable holding the YouVersion Platform app key.
pub const API_KEY_ENV: &str = "YOUVERSION_API_KEY";

/// Reads the app key from the environment. An unset or empty value means
/// the service is not configured to call upstream at all.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}

/// Everything that can go wrong serving a verse request.
///
/// All variants collapse to a 500 response at the handler boundary; the
/// distinction exists for logs and tests, not for callers.
#[derive(Debug, Error)]
pub enum VotdError {
    /// The app key is not configured. Detected before any network call.
    #[error("Server config error")]
    MissingApiKey,

    /// Transport-level failure from the HTTP client.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Either upstream endpoint answered with a non-success status.
    #[error("{endpoint} Endpoint Error: {status}")]
    UpstreamStatus { endpoint: &'static str, status: u16 },

    /// The verse-of-the-day response carried no passage id in any
    /// supported shape.
    #[error("No passage_id found for day {day}")]
    MissingPassageId { day: u32 },
}

/// The two upstream lookups a verse fetch depends on.
#[async_trait]
pub trait VerseSource {
    /// Raw verse-of-the-day response for a day-of-year.
    async fn verse_of_the_day(&self, day: u32) -> Result<Value, VotdError>;

    /// Raw passage-content response for a passage id.
    async fn passage(&self, passage_id: &str) -> Result<Value, VotdError>;
}

/// Production [`VerseSource`] backed by the YouVersion Platform API.
#[derive(Debug, Clone)]
pub struct YouVersionClient {
    client: Client,
    api_key: String,
}

impl YouVersionClient {
    /// Creates a client with a fresh connection pool.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    async fn get_json(&self, url: &str, endpoint: &'static str) -> Result<Value, VotdError> {
        let response = self
            .client
            .get(url)
            .header(APP_KEY_HEADER, &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VotdError::UpstreamStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl VerseSource for YouVersionClient {
    async fn verse_of_the_day(&self, day: u32) -> Result<Value, VotdError> {
        let url = format!("{API_BASE_URL}/verse_of_the_days/{day}");
        info!("Fetching passage id for day {day} from {url}");
        self.get_json(&url, "VOTD").await
    }

    async fn passage(&self, passage_id: &str) -> Result<Value, VotdError> {
        let url = format!("{API_BASE_URL}/bibles/{BIBLE_ID}/passages/{passage_id}");
        info!("Fetching passage text for {passage_id}");
        self.get_json(&url, "Passage").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_response_bodies() {
        // These Display strings are what callers see in the `error` field.
        assert_eq!(VotdError::MissingApiKey.to_string(), "Server config error");
        assert_eq!(
            VotdError::UpstreamStatus { endpoint: "VOTD", status: 502 }.to_string(),
            "VOTD Endpoint Error: 502"
        );
        assert_eq!(
            VotdError::UpstreamStatus { endpoint: "Passage", status: 404 }.to_string(),
            "Passage Endpoint Error: 404"
        );
        assert_eq!(
            VotdError::MissingPassageId { day: 45 }.to_string(),
            "No passage_id found for day 45"
        );
    }

    #[test]
    fn test_api_key_from_env_requires_non_empty_value() {
        // Serialized through a single test to avoid env races with itself.
        std::env::remove_var(API_KEY_ENV);
        assert_eq!(api_key_from_env(), None);

        std::env::set_var(API_KEY_ENV, "");
        assert_eq!(api_key_from_env(), None);

        std::env::set_var(API_KEY_ENV, "test-key");
        assert_eq!(api_key_from_env().as_deref(), Some("test-key"));

        std::env::remove_var(API_KEY_ENV);
    }
}
