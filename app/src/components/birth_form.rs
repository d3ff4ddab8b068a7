//! Birth data entry form.
//!
//! Owns the draft and its validation state. The location field only
//! commits through the autocomplete; submission hands a validated
//! `BirthData` to the parent and never fires with missing fields.

use dioxus::prelude::*;

use celestial_core::birth_data::{BirthDraft, ValidationErrors};
use celestial_core::locale::Strings;
use celestial_types::{BirthData, Language, LocationSuggestion};

use super::LocationSearch;

/// Props for the BirthForm component
#[derive(Props, Clone, PartialEq)]
pub struct BirthFormProps {
    /// Fired with validated birth data on successful submission.
    pub on_submit: EventHandler<BirthData>,
}

#[component]
pub fn BirthForm(props: BirthFormProps) -> Element {
    let language = use_context::<Language>();
    let strings = Strings::for_language(language);

    let mut draft = use_signal(BirthDraft::default);
    let mut errors = use_signal(ValidationErrors::default);

    let on_submit = props.on_submit;
    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        match draft.read().validate(strings) {
            Ok(data) => {
                errors.set(ValidationErrors::default());
                on_submit.call(data);
            }
            Err(found) => errors.set(found),
        }
    };

    rsx! {
        form { class: "birth-form", onsubmit: handle_submit,
            div { class: "form-grid",
                div { class: "form-field",
                    label { "{strings.label_date}" }
                    input {
                        r#type: "date",
                        value: "{draft.read().date}",
                        oninput: move |e| draft.write().set_date(e.value()),
                    }
                    if let Some(message) = errors.read().date {
                        p { class: "field-error", "{message}" }
                    }
                }
                div { class: "form-field",
                    label { "{strings.label_time}" }
                    input {
                        r#type: "time",
                        value: "{draft.read().time}",
                        oninput: move |e| draft.write().set_time(e.value()),
                    }
                    if let Some(message) = errors.read().time {
                        p { class: "field-error", "{message}" }
                    }
                }
            }
            div { class: "form-field",
                label { "{strings.label_location}" }
                LocationSearch {
                    value: draft.read().location_text().to_string(),
                    resolved: draft.read().location_resolved(),
                    error: errors.read().location.map(str::to_string),
                    on_edit: move |text: String| draft.write().edit_location(text),
                    on_choose: move |s: LocationSuggestion| draft.write().choose(&s),
                }
            }
            div { class: "form-actions",
                button { r#type: "submit", class: "primary-button", "{strings.generate_chart}" }
            }
        }
    }
}
