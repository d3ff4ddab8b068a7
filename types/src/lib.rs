//! Shared data types for Celestial Insights
//!
//! This crate contains serializable types that are shared between the
//! platform-neutral logic crate (celestial-core) and the WASM frontend
//! (app-ui).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// UI language, selected once at startup from the client's locale
/// preferences. Only English and Spanish are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// BCP-47 primary subtag for this language.
    pub fn subtag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// English name of the language, used when mandating the output
    /// language of a generated reading.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Birth Data
// ─────────────────────────────────────────────────────────────────────────────

/// Validated birth details handed to the analysis call.
///
/// `location` is always a resolved suggestion (`"City, Country"`),
/// never raw free text; the form enforces this before construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    /// Calendar date, as entered (`YYYY-MM-DD` from a date input).
    pub date: String,
    /// Local clock time, as entered (`HH:MM` from a time input).
    pub time: String,
    /// Resolved display name of the birth place.
    pub location: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Location Suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// One autocomplete candidate returned by the remote location search.
///
/// The wire format uses camelCase (`fullName`), matching the JSON the
/// model is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSuggestion {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    /// Canonical `"City, Country"` display and storage form.
    #[serde(default)]
    pub full_name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Persisted Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// The only state persisted across sessions: whether the visitor has
/// accepted the cookie/privacy notice.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub consent_given: bool,
}
