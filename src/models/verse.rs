use serde::{Deserialize, Serialize};

/// A verse of the day, fully reshaped and ready to serve.
///
/// Built once from the two upstream responses and never mutated;
/// the cache and the response body both hold this exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse text as returned by the content provider.
    pub text: String,
    /// Human-readable reference (e.g., "Matthew 15:13").
    pub human_reference: String,
    /// Link to the passage on bible.com.
    pub url: String,
}

/// Success response body: the verse wrapped under a `verse` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEnvelope {
    pub verse: Verse,
}
