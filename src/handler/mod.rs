//! Request orchestration for the verse-of-the-day endpoint.
//!
//! Control flow is strictly linear: resolve the day, check the cache, and
//! on a miss run the two dependent upstream fetches, reshape, store, and
//! return. The cache slot and the upstream source are both injected; the
//! process-global instances live in the `api/votd` binary.

use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use log::info;

use crate::cache::VerseCache;
use crate::client::{VerseSource, VotdError, BIBLE_ID};
use crate::extract;
use crate::models::verse::{Verse, VerseEnvelope};

/// `Cache-Control` sent on every success path: intermediary caches hold the
/// response for an hour while browsers revalidate.
pub const SHARED_CACHE_CONTROL: &str = "public, max-age=0, s-maxage=3600";

/// Returns the raw value of `name` from a query string, if present.
pub fn query_param<'a>(query: Option<&'a str>, name: &str) -> Option<&'a str> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Resolves the day-of-year for a request.
///
/// An explicit `day` query parameter wins; otherwise the ordinal of
/// `today` (1 = Jan 1). A parameter that does not parse as an integer is
/// ignored and the clock-derived value applies.
pub fn resolve_day(query_day: Option<&str>, today: NaiveDate) -> u32 {
    query_day
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or_else(|| today.ordinal())
}

/// Runs the two dependent upstream fetches and reshapes the result.
///
/// Fails on the first non-success status, so the passage lookup is never
/// attempted when the day lookup fails.
pub async fn fetch_verse<S: VerseSource>(day: u32, source: &S) -> Result<Verse, VotdError> {
    let votd_body = source.verse_of_the_day(day).await?;
    let passage_id =
        extract::passage_id(&votd_body).ok_or(VotdError::MissingPassageId { day })?;

    let passage_body = source.passage(&passage_id).await?;

    Ok(Verse {
        text: extract::verse_text(&passage_body),
        human_reference: extract::human_reference(&passage_body, &passage_id),
        url: format!("https://www.bible.com/bible/{BIBLE_ID}/{passage_id}"),
    })
}

/// Serves the verse for `day`, consulting `cache` before going upstream.
///
/// `source` is `None` when no app key is configured; that surfaces as a
/// config error on a miss, before any network call. The lock is never held
/// across the fetches, so two racing misses may both fetch and both store
/// (last writer wins). Nothing is stored on failure.
pub async fn verse_for_day<S: VerseSource>(
    day: u32,
    now_ms: i64,
    cache: &Mutex<VerseCache>,
    source: Option<&S>,
) -> Result<VerseEnvelope, VotdError> {
    let cached = {
        let slot = cache.lock().expect("cache mutex poisoned");
        slot.lookup(day, now_ms).cloned()
    };
    if let Some(verse) = cached {
        info!("Serving day {day} from in-memory cache");
        return Ok(VerseEnvelope { verse });
    }

    let source = source.ok_or(VotdError::MissingApiKey)?;
    let verse = fetch_verse(day, source).await?;

    cache
        .lock()
        .expect("cache mutex poisoned")
        .store(day, verse.clone(), now_ms);

    Ok(VerseEnvelope { verse })
}
