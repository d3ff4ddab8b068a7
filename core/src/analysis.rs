//! Analysis request classification and failure taxonomy.
//!
//! The remote model returns one free-text markdown string. The only
//! structure layered on top is a sentinel prefix the image prompt
//! mandates for unreadable charts; everything else is either a reading
//! or a transport-level failure.

use celestial_types::BirthData;
use thiserror::Error;

use crate::locale::Strings;

/// Sentinel the image prompt instructs the model to reply with when
/// the uploaded image is not a recognizable natal chart. Matched as a
/// prefix of the trimmed response.
pub const REJECTION_SENTINEL: &str = "INVALID_CHART_IMAGE";

/// What the user submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    /// Validated manual birth details.
    Chart(BirthData),
    /// An uploaded chart image, base64-encoded.
    Image { mime_type: String, data: String },
}

impl AnalysisInput {
    /// Manual input additionally triggers the best-effort illustration
    /// call after a successful reading.
    pub fn wants_illustration(&self) -> bool {
        matches!(self, AnalysisInput::Chart(_))
    }
}

/// A classified, non-error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A markdown reading, stored verbatim for the renderer.
    Reading(String),
    /// The model flagged the image as not a readable chart.
    Rejected,
}

/// Classify a raw response. Sentinel detection is a plain prefix check
/// on the trimmed text; the service contract offers nothing stronger.
pub fn classify(raw: &str) -> Outcome {
    if raw.trim_start().starts_with(REJECTION_SENTINEL) {
        Outcome::Rejected
    } else {
        Outcome::Reading(raw.to_string())
    }
}

/// Fold the best-effort illustration call's result into the session.
///
/// The image attaches only while a reading is still on display; a
/// failed generation yields `None`. The reading is borrowed, never
/// written: no illustration outcome can alter or clear it.
pub fn attach_illustration(reading: Option<&str>, generated: Option<String>) -> Option<String> {
    reading.and(generated)
}

/// Hard failures of the analysis call. Domain rejections are an
/// [`Outcome`], not an error; validation never reaches this layer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("service call failed: {0}")]
    Transport(String),
    #[error("the service returned no text")]
    EmptyResponse,
}

impl AnalysisError {
    /// The localized message shown for this failure. Both variants
    /// collapse to the generic message; the distinction only matters
    /// for logging.
    pub fn message<'a>(&self, strings: &'a Strings) -> &'a str {
        strings.error_generic
    }
}

/// Guidance shown after a domain rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionHint {
    /// First rejection: ask for a clearer image.
    ChartUnreadable,
    /// Repeat rejection: suggest switching to manual entry.
    SwitchToManual,
}

impl RejectionHint {
    pub fn message<'a>(&self, strings: &'a Strings) -> &'a str {
        match self {
            RejectionHint::ChartUnreadable => strings.rejection_first,
            RejectionHint::SwitchToManual => strings.rejection_again,
        }
    }
}

/// Linear two-state escalation over consecutive rejections.
///
/// Not a retry policy: nothing is ever re-submitted automatically, the
/// streak only picks which hint the user sees next.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectionStreak {
    count: u32,
}

impl RejectionStreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejection and return the hint to display.
    pub fn record(&mut self) -> RejectionHint {
        self.count += 1;
        if self.count >= 2 {
            RejectionHint::SwitchToManual
        } else {
            RejectionHint::ChartUnreadable
        }
    }

    /// A successful reading or an input-mode change breaks the streak.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_types::Language;

    #[test]
    fn test_classify_reading() {
        let outcome = classify("# Your Chart\n\nThe stars align.");
        assert_eq!(outcome, Outcome::Reading("# Your Chart\n\nThe stars align.".into()));
    }

    #[test]
    fn test_classify_sentinel_prefix() {
        assert_eq!(classify("INVALID_CHART_IMAGE"), Outcome::Rejected);
        assert_eq!(classify("  \nINVALID_CHART_IMAGE: no wheel found"), Outcome::Rejected);
    }

    #[test]
    fn test_sentinel_mentioned_mid_text_is_a_reading() {
        let raw = "The phrase INVALID_CHART_IMAGE would only appear for bad uploads.";
        assert!(matches!(classify(raw), Outcome::Reading(_)));
    }

    #[test]
    fn test_failed_illustration_leaves_reading_untouched() {
        let reading = Some("# Your Celestial Blueprint".to_string());
        assert_eq!(attach_illustration(reading.as_deref(), None), None);
        assert_eq!(reading.as_deref(), Some("# Your Celestial Blueprint"));
    }

    #[test]
    fn test_illustration_attaches_only_while_reading_shown() {
        let url = "data:image/png;base64,QUJD".to_string();
        let reading = Some("# Your Celestial Blueprint".to_string());
        assert_eq!(
            attach_illustration(reading.as_deref(), Some(url.clone())),
            Some(url.clone())
        );
        // The session moved on before generation finished.
        assert_eq!(attach_illustration(None, Some(url)), None);
    }

    #[test]
    fn test_streak_escalates_once() {
        let mut streak = RejectionStreak::new();
        assert_eq!(streak.record(), RejectionHint::ChartUnreadable);
        assert_eq!(streak.record(), RejectionHint::SwitchToManual);
        // Stays directive on further failures.
        assert_eq!(streak.record(), RejectionHint::SwitchToManual);
    }

    #[test]
    fn test_streak_reset_returns_to_soft_hint() {
        let mut streak = RejectionStreak::new();
        streak.record();
        streak.record();
        streak.reset();
        assert_eq!(streak.record(), RejectionHint::ChartUnreadable);
    }

    #[test]
    fn test_hint_messages_localized() {
        let es = Strings::for_language(Language::Es);
        assert_eq!(RejectionHint::ChartUnreadable.message(es), es.rejection_first);
        assert_eq!(RejectionHint::SwitchToManual.message(es), es.rejection_again);
    }

    #[test]
    fn test_error_message_is_generic() {
        let en = Strings::for_language(Language::En);
        let err = AnalysisError::Transport("connection reset".into());
        assert_eq!(err.message(en), en.error_generic);
        assert_eq!(AnalysisError::EmptyResponse.message(en), en.error_generic);
    }
}
