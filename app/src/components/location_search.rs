//! Debounced location autocomplete field.
//!
//! Typing restarts a 600ms timer; only the most recent timer issues a
//! search, and a sequence guard makes sure a slow response for an old
//! query can never overwrite suggestions for a newer one. Search
//! failures silently degrade to an empty list: autocomplete is a
//! convenience, the form's resolved-location check is the gate.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use celestial_core::locale::Strings;
use celestial_core::search::{DEBOUNCE_MS, SequenceGuard, debounce_current, query_ready};
use celestial_types::{Language, LocationSuggestion};

use crate::api::{self, ServiceConfig};

/// Props for the LocationSearch component
#[derive(Props, Clone, PartialEq)]
pub struct LocationSearchProps {
    /// Current text in the field (owned by the form draft).
    pub value: String,
    /// Whether the current value came from a chosen suggestion.
    pub resolved: bool,
    /// Field-level validation message, if any.
    pub error: Option<String>,
    /// Raw text edits (clears the resolved state upstream).
    pub on_edit: EventHandler<String>,
    /// A suggestion was picked.
    pub on_choose: EventHandler<LocationSuggestion>,
}

#[component]
pub fn LocationSearch(props: LocationSearchProps) -> Element {
    let config = use_context::<ServiceConfig>();
    let language = use_context::<Language>();
    let strings = Strings::for_language(language);

    let on_edit = props.on_edit;
    let on_choose = props.on_choose;

    // Mirror of the newest input text, read back after the debounce
    // delay to let only the last timer proceed.
    let mut latest = use_signal(String::new);
    let mut suggestions = use_signal(Vec::<LocationSuggestion>::new);
    let mut searching = use_signal(|| false);
    let mut searched = use_signal(|| false);
    let mut open = use_signal(|| false);
    let mut guard = use_signal(SequenceGuard::new);

    // A response landing after unmount must not be applied.
    use_drop(move || guard.write().cancel_pending());

    let mut reset_list = move || {
        guard.write().cancel_pending();
        suggestions.set(Vec::new());
        searching.set(false);
        searched.set(false);
        open.set(false);
    };

    let on_input = move |e: FormEvent| {
        let text = e.value();
        on_edit.call(text.clone());
        latest.set(text.clone());

        if !query_ready(&text) {
            reset_list();
            return;
        }

        let config = config.clone();
        spawn(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if !debounce_current(latest.read().as_str(), &text) {
                return;
            }

            let seq = guard.write().begin();
            searching.set(true);
            open.set(true);

            let found = api::search_locations(&config, &text, language).await;
            if guard.write().try_commit(seq) {
                suggestions.set(found);
                searching.set(false);
                searched.set(true);
            }
        });
    };

    let input_class = if props.resolved {
        "location-input location-input--resolved"
    } else {
        "location-input"
    };

    rsx! {
        div { class: "location-search",
            input {
                r#type: "text",
                class: "{input_class}",
                placeholder: "{strings.location_placeholder}",
                value: "{props.value}",
                oninput: on_input,
            }
            if let Some(message) = props.error.as_ref() {
                p { class: "field-error", "{message}" }
            }
            if open() {
                div { class: "suggestion-list",
                    if searching() {
                        div { class: "suggestion-status", "{strings.searching}" }
                    } else if suggestions.read().is_empty() && searched() {
                        div { class: "suggestion-status", "{strings.no_matches}" }
                    } else {
                        for suggestion in suggestions.read().iter() {
                            button {
                                key: "{suggestion.full_name}",
                                r#type: "button",
                                class: "suggestion-item",
                                // mousedown so the pick wins over the input losing focus
                                onmousedown: {
                                    let picked = suggestion.clone();
                                    move |e: Event<MouseData>| {
                                        e.prevent_default();
                                        // Committing the full name here also
                                        // disarms any timer still waiting on
                                        // the typed fragment.
                                        latest.set(picked.full_name.clone());
                                        reset_list();
                                        on_choose.call(picked.clone());
                                    }
                                },
                                "{suggestion.full_name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
