//! Birth data form state.
//!
//! The draft tracks the three fields plus whether the location was
//! committed from a suggestion. Typing in the location field only ever
//! updates the search text; the committed location is set exclusively
//! by choosing a suggestion, so an unconfirmed place name can never be
//! submitted.

use celestial_types::{BirthData, LocationSuggestion};

use crate::locale::Strings;

/// In-progress form state, mutated field-by-field by user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthDraft {
    pub date: String,
    pub time: String,
    /// Committed location value. Only set via [`BirthDraft::choose`].
    location: String,
    /// Raw text currently in the location input, used for searching.
    search_text: String,
    resolved: bool,
}

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
    pub location: Option<&'static str>,
}

impl BirthDraft {
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    /// User typed in the location field. Any previously resolved
    /// location is invalidated and must be re-chosen.
    pub fn edit_location(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.location.clear();
        self.resolved = false;
    }

    /// User picked a suggestion from the autocomplete list.
    pub fn choose(&mut self, suggestion: &LocationSuggestion) {
        self.location = suggestion.full_name.clone();
        self.search_text = suggestion.full_name.clone();
        self.resolved = true;
    }

    /// Text to show in the location input.
    pub fn location_text(&self) -> &str {
        &self.search_text
    }

    pub fn location_resolved(&self) -> bool {
        self.resolved
    }

    /// Validate the draft and package it for analysis.
    ///
    /// Each missing field gets its own message; a typed-but-unconfirmed
    /// location counts as missing.
    pub fn validate(&self, strings: &Strings) -> Result<BirthData, ValidationErrors> {
        let errors = ValidationErrors {
            date: self.date.trim().is_empty().then_some(strings.error_date_required),
            time: self.time.trim().is_empty().then_some(strings.error_time_required),
            location: (!self.resolved).then_some(strings.error_location_unresolved),
        };
        if errors.date.is_some() || errors.time.is_some() || errors.location.is_some() {
            return Err(errors);
        }
        Ok(BirthData {
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            location: self.location.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_types::Language;

    fn strings() -> &'static Strings {
        Strings::for_language(Language::En)
    }

    fn suggestion() -> LocationSuggestion {
        LocationSuggestion {
            city: "Buenos Aires".into(),
            country: "Argentina".into(),
            full_name: "Buenos Aires, Argentina".into(),
        }
    }

    #[test]
    fn test_empty_draft_reports_all_fields() {
        let draft = BirthDraft::default();
        let errors = draft.validate(strings()).unwrap_err();
        assert!(errors.date.is_some());
        assert!(errors.time.is_some());
        assert!(errors.location.is_some());
    }

    #[test]
    fn test_each_missing_field_has_own_message() {
        let mut draft = BirthDraft::default();
        draft.set_date("1990-06-15");
        draft.choose(&suggestion());
        let errors = draft.validate(strings()).unwrap_err();
        assert!(errors.date.is_none());
        assert!(errors.location.is_none());
        assert_eq!(errors.time, Some(strings().error_time_required));
    }

    #[test]
    fn test_typed_location_is_not_resolved() {
        let mut draft = BirthDraft::default();
        draft.set_date("1990-06-15");
        draft.set_time("08:30");
        draft.edit_location("Buenos Aires, Argentina");
        let errors = draft.validate(strings()).unwrap_err();
        assert_eq!(errors.location, Some(strings().error_location_unresolved));
    }

    #[test]
    fn test_full_draft_validates() {
        let mut draft = BirthDraft::default();
        draft.set_date("1990-06-15");
        draft.set_time("08:30");
        draft.choose(&suggestion());
        let data = draft.validate(strings()).unwrap();
        assert_eq!(data.date, "1990-06-15");
        assert_eq!(data.time, "08:30");
        assert_eq!(data.location, "Buenos Aires, Argentina");
    }

    #[test]
    fn test_editing_after_choose_requires_reselection() {
        let mut draft = BirthDraft::default();
        draft.set_date("1990-06-15");
        draft.set_time("08:30");
        draft.choose(&suggestion());
        assert!(draft.location_resolved());

        draft.edit_location("Buenos Aires, Arg");
        assert!(!draft.location_resolved());
        assert!(draft.validate(strings()).is_err());

        draft.choose(&suggestion());
        assert!(draft.validate(strings()).is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let mut draft = BirthDraft::default();
        draft.set_date("   ");
        draft.set_time("\t");
        draft.choose(&suggestion());
        let errors = draft.validate(strings()).unwrap_err();
        assert!(errors.date.is_some());
        assert!(errors.time.is_some());
    }
}
