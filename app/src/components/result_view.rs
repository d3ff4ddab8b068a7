//! Rendered reading with export affordances.
//!
//! Maps the core markdown blocks onto styled elements. The wrapping
//! div carries a stable id so the PDF exporter can rasterize exactly
//! the report region.

use dioxus::prelude::*;

use celestial_core::locale::Strings;
use celestial_core::markdown::{self, Block, Inline};
use celestial_types::Language;

/// Element id handed to the PDF exporter.
pub const REPORT_REGION_ID: &str = "report-region";

/// Props for the ResultView component
#[derive(Props, Clone, PartialEq)]
pub struct ResultViewProps {
    /// Raw markdown reading from the service.
    pub content: String,
    /// Generated illustration data URL, when the best-effort call
    /// produced one.
    pub illustration: Option<String>,
    pub is_exporting: bool,
    pub on_export: EventHandler<()>,
    pub on_new_consultation: EventHandler<()>,
}

fn inline_runs(runs: &[Inline]) -> Element {
    rsx! {
        for (i, run) in runs.iter().enumerate() {
            {
                match run {
                    Inline::Bold(text) => rsx! {
                        strong { key: "{i}", class: "reading-bold", "{text}" }
                    },
                    Inline::Text(text) => rsx! {
                        span { key: "{i}", "{text}" }
                    },
                }
            }
        }
    }
}

fn block_element(index: usize, block: &Block) -> Element {
    match block {
        Block::Heading { level: 1, text } => rsx! {
            h1 { key: "{index}", class: "reading-h1", "{text}" }
        },
        Block::Heading { level: 2, text } => rsx! {
            h2 { key: "{index}", class: "reading-h2", "{text}" }
        },
        Block::Heading { text, .. } => rsx! {
            h3 { key: "{index}", class: "reading-h3", "{text}" }
        },
        Block::ListItem(runs) => rsx! {
            div { key: "{index}", class: "reading-item",
                span { class: "reading-bullet", "•" }
                span { {inline_runs(runs)} }
            }
        },
        Block::Spacer => rsx! {
            div { key: "{index}", class: "reading-spacer" }
        },
        Block::Paragraph(runs) => rsx! {
            p { key: "{index}", {inline_runs(runs)} }
        },
    }
}

#[component]
pub fn ResultView(props: ResultViewProps) -> Element {
    let language = use_context::<Language>();
    let strings = Strings::for_language(language);

    let blocks = markdown::render(&props.content);
    let on_export = props.on_export;
    let on_new_consultation = props.on_new_consultation;

    let export_label = if props.is_exporting {
        strings.exporting
    } else {
        strings.download_pdf
    };

    rsx! {
        div { class: "result-panel",
            div { id: REPORT_REGION_ID, class: "report-region",
                if let Some(src) = props.illustration.as_ref() {
                    img { class: "illustration", src: "{src}", alt: "" }
                }
                div { class: "reading",
                    for (index, block) in blocks.iter().enumerate() {
                        {block_element(index, block)}
                    }
                }
            }
            div { class: "result-actions",
                button {
                    class: "secondary-button",
                    disabled: props.is_exporting,
                    onclick: move |_| on_export.call(()),
                    "{export_label}"
                }
                button {
                    class: "link-button",
                    onclick: move |_| on_new_consultation.call(()),
                    "{strings.new_consultation}"
                }
            }
        }
    }
}
