//! Location autocomplete support.
//!
//! The UI component owns the debounce timer; this module owns the
//! pure parts: query gating, lenient parsing of the model's JSON, and
//! the sequence guard that keeps a stale response from overwriting a
//! fresher one.

use celestial_types::LocationSuggestion;
use tracing::debug;

/// Queries shorter than this (trimmed) never reach the remote service.
pub const MIN_QUERY_LEN: usize = 3;

/// Upper bound on suggestions shown in the autocomplete list.
pub const MAX_SUGGESTIONS: usize = 5;

/// Debounce delay between the last keystroke and the remote call.
pub const DEBOUNCE_MS: u32 = 600;

/// Whether a query is long enough to search for.
pub fn query_ready(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Parse the model's response into suggestions, best-effort.
///
/// The model is asked for a bare JSON array of
/// `{city, country, fullName}` objects but may wrap it in code fences.
/// Anything unparseable, and any entry without a `fullName`, degrades
/// to fewer (possibly zero) suggestions; this never errors because
/// autocomplete is a convenience, not a required path.
pub fn parse_suggestions(raw: &str) -> Vec<LocationSuggestion> {
    let body = strip_code_fence(raw.trim());
    let parsed: Vec<LocationSuggestion> = match serde_json::from_str(body) {
        Ok(list) => list,
        Err(err) => {
            debug!("discarding unparseable location suggestions: {err}");
            return Vec::new();
        }
    };
    parsed
        .into_iter()
        .filter(|s| !s.full_name.trim().is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Strip a surrounding ```/```json fence if present.
fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

/// Whether a debounce timer armed for `armed` should still fire: the
/// field must hold exactly the text the timer captured. Anything that
/// rewrites the field in the meantime (further typing, clearing, or a
/// chosen suggestion committing its full name) fails this check and
/// the timer issues no search.
pub fn debounce_current(field: &str, armed: &str) -> bool {
    field == armed
}

/// Monotonic request counter that discards stale responses.
///
/// Each issued search is stamped with `begin()`; when its response
/// arrives, `try_commit` accepts it only if it belongs to the newest
/// request issued so far. Responses for superseded queries return
/// `false` and must be dropped by the caller, regardless of arrival
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceGuard {
    issued: u64,
    committed: u64,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new outgoing request. Issuing supersedes every earlier
    /// request immediately, before their responses come back.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Try to apply the response for request `seq`.
    pub fn try_commit(&mut self, seq: u64) -> bool {
        if seq < self.issued || seq <= self.committed {
            debug!("dropping stale search response (seq {seq}, newest {})", self.issued);
            return false;
        }
        self.committed = seq;
        true
    }

    /// Invalidate every request issued so far (field cleared, location
    /// resolved, or the owning component is going away).
    pub fn cancel_pending(&mut self) {
        self.committed = self.issued;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_gated() {
        assert!(!query_ready(""));
        assert!(!query_ready("ab"));
        assert!(!query_ready("  ab  "));
        assert!(query_ready("abc"));
        assert!(query_ready("  río "));
    }

    #[test]
    fn test_parse_plain_array() {
        let raw = r#"[
            {"city": "Lima", "country": "Peru", "fullName": "Lima, Peru"},
            {"city": "Lima", "country": "Ohio, USA", "fullName": "Lima, Ohio, USA"}
        ]"#;
        let parsed = parse_suggestions(raw);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].full_name, "Lima, Peru");
    }

    #[test]
    fn test_parse_fenced_array() {
        let raw = "```json\n[{\"city\":\"Quito\",\"country\":\"Ecuador\",\"fullName\":\"Quito, Ecuador\"}]\n```";
        let parsed = parse_suggestions(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].city, "Quito");
    }

    #[test]
    fn test_parse_garbage_degrades_to_empty() {
        assert!(parse_suggestions("I could not find any places.").is_empty());
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions("{\"city\": \"not an array\"}").is_empty());
    }

    #[test]
    fn test_entries_without_full_name_dropped() {
        let raw = r#"[{"city": "X", "country": "Y", "fullName": ""}, {"fullName": "Y, Z"}]"#;
        let parsed = parse_suggestions(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].full_name, "Y, Z");
    }

    #[test]
    fn test_suggestions_capped_at_five() {
        let entries: Vec<String> = (0..8)
            .map(|i| format!("{{\"city\":\"C{i}\",\"country\":\"K\",\"fullName\":\"C{i}, K\"}}"))
            .collect();
        let raw = format!("[{}]", entries.join(","));
        assert_eq!(parse_suggestions(&raw).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_choosing_a_suggestion_invalidates_armed_timer() {
        // Typing "par" arms a timer; before it fires the user picks a
        // suggestion, which writes the full name into the field. The
        // timer's snapshot no longer matches, so no search goes out
        // for the superseded fragment.
        assert!(debounce_current("par", "par"));
        assert!(!debounce_current("Paris, Île-de-France, France", "par"));
    }

    #[test]
    fn test_sequence_guard_drops_late_stale_response() {
        let mut guard = SequenceGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        // Second query's response lands first and wins.
        assert!(guard.try_commit(second));
        // First query's response arrives late and is dropped.
        assert!(!guard.try_commit(first));
    }

    #[test]
    fn test_sequence_guard_drops_superseded_even_in_arrival_order() {
        let mut guard = SequenceGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        // First query's response arrives before the second's, but a
        // newer query was already issued, so it must never be shown.
        assert!(!guard.try_commit(first));
        assert!(guard.try_commit(second));
    }

    #[test]
    fn test_sequence_guard_in_order() {
        let mut guard = SequenceGuard::new();
        let first = guard.begin();
        assert!(guard.try_commit(first));
        let second = guard.begin();
        assert!(guard.try_commit(second));
    }

    #[test]
    fn test_cancel_pending_drops_in_flight() {
        let mut guard = SequenceGuard::new();
        let seq = guard.begin();
        guard.cancel_pending();
        assert!(!guard.try_commit(seq));

        // A fresh request after cancellation still works.
        let next = guard.begin();
        assert!(guard.try_commit(next));
    }
}
