//! PWA install help modal.

use dioxus::prelude::*;

use celestial_core::locale::Strings;
use celestial_types::Language;

/// Props for the HelpModal component
#[derive(Props, Clone, PartialEq)]
pub struct HelpModalProps {
    pub on_close: EventHandler<()>,
}

#[component]
pub fn HelpModal(props: HelpModalProps) -> Element {
    let language = use_context::<Language>();
    let strings = Strings::for_language(language);
    let on_close = props.on_close;

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
            div { class: "modal-card",
                h2 { class: "modal-title", "{strings.help_title}" }
                p { class: "modal-body", "{strings.help_body}" }
                button {
                    class: "primary-button modal-close",
                    onclick: move |_| on_close.call(()),
                    "{strings.help_close}"
                }
            }
        }
    }
}
