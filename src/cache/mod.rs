//! Single-slot in-process cache for the verse of the day.
//!
//! Holds at most one `(day, Verse)` pair at a time. An entry is served only
//! while it is younger than one hour AND the request asks for the same day;
//! a different day always forces a refetch regardless of age. The slot is
//! overwritten only by a successful fetch, so a failed request leaves prior
//! contents untouched.
//!
//! Timestamps are caller-supplied epoch milliseconds so tests control the
//! clock instead of relying on process-wide time.

use crate::models::verse::Verse;

/// How long a stored verse stays fresh, in milliseconds (one hour).
pub const FRESHNESS_WINDOW_MS: i64 = 60 * 60 * 1000;

/// The single cache slot. One instance per process, injected into the
/// handler rather than reached as hidden global state.
#[derive(Debug, Default)]
pub struct VerseCache {
    day: Option<u32>,
    payload: Option<Verse>,
    stored_at_ms: i64,
}

impl VerseCache {
    /// Creates an empty cache slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached verse if it was stored for `day` and is still
    /// fresh at `now_ms`. Any other combination is a miss.
    pub fn lookup(&self, day: u32, now_ms: i64) -> Option<&Verse> {
        let payload = self.payload.as_ref()?;
        if self.day != Some(day) {
            return None;
        }
        if now_ms - self.stored_at_ms >= FRESHNESS_WINDOW_MS {
            return None;
        }
        Some(payload)
    }

    /// Overwrites the slot with a freshly fetched verse for `day`.
    pub fn store(&mut self, day: u32, verse: Verse, now_ms: i64) {
        self.day = Some(day);
        self.payload = Some(verse);
        self.stored_at_ms = now_ms;
    }

    /// Day currently held in the slot, if any.
    pub fn stored_day(&self) -> Option<u32> {
        self.day
    }
}
