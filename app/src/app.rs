//! Application root: session state and the analysis orchestration.
//!
//! One logical thread of control; every remote call suspends at an
//! `await` and re-checks the session epoch before applying its result,
//! so a slow response for an abandoned consultation is discarded
//! rather than shown.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, warn};

use celestial_core::analysis::{AnalysisInput, Outcome, RejectionStreak, attach_illustration};
use celestial_core::locale::{Strings, detect_language};
use celestial_types::Language;

use crate::api::{self, ServiceConfig};
use crate::components::{
    BirthForm, CookieBanner, HelpModal, ImageUpload, REPORT_REGION_ID, ResultView, ToastFrame,
    ToastSeverity, UploadedImage, use_toast_provider,
};
use crate::export::{self, ShareOutcome};

static CSS: Asset = asset!("/assets/styles.css");

/// How the user is providing their chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Image,
    Manual,
}

/// Read the browser's ordered locale preferences.
fn detect_ui_language() -> Language {
    let Some(window) = web_sys::window() else {
        return Language::default();
    };
    let tags: Vec<String> =
        serde_wasm_bindgen::from_value(window.navigator().languages().into()).unwrap_or_default();
    detect_language(&tags)
}

pub fn App() -> Element {
    let config = use_context_provider(ServiceConfig::default);
    let language = use_context_provider(detect_ui_language);
    let strings = Strings::for_language(language);
    let mut toasts = use_toast_provider();

    let mut mode = use_signal(|| InputMode::Image);
    let mut image = use_signal(|| None::<UploadedImage>);
    let mut loading = use_signal(|| false);
    let mut result = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut illustration = use_signal(|| None::<String>);
    let mut streak = use_signal(RejectionStreak::new);
    let mut copied = use_signal(|| false);
    let mut is_exporting = use_signal(|| false);
    let mut show_help = use_signal(|| false);
    // Bumped whenever the session moves on; in-flight responses from
    // an older epoch are discarded instead of applied.
    let mut epoch = use_signal(|| 0u64);

    let start_analysis = move |input: AnalysisInput| {
        // One analysis at a time per session.
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        result.set(None);
        illustration.set(None);

        let session = epoch();
        let config = config.clone();
        spawn(async move {
            let outcome = api::analyze_chart(&config, &input, language).await;
            if epoch() != session {
                debug!("discarding analysis response from a superseded session");
                loading.set(false);
                return;
            }

            let mut reading_stored = false;
            match outcome {
                Ok(Outcome::Reading(text)) => {
                    streak.write().reset();
                    result.set(Some(text));
                    reading_stored = true;
                }
                Ok(Outcome::Rejected) => {
                    let hint = streak.write().record();
                    error.set(Some(hint.message(strings).to_string()));
                }
                Err(err) => {
                    warn!("analysis failed: {err}");
                    error.set(Some(err.message(strings).to_string()));
                }
            }
            loading.set(false);
            export::scroll_to_top();

            // Best-effort illustration, after the reading is already
            // on screen; its failure leaves the reading untouched.
            if reading_stored && input.wants_illustration() {
                if let AnalysisInput::Chart(birth) = &input {
                    let generated = api::generate_illustration(&config, birth).await;
                    if epoch() == session {
                        let attached = attach_illustration(result.read().as_deref(), generated);
                        if let Some(url) = attached {
                            illustration.set(Some(url));
                        }
                    }
                }
            }
        });
    };

    // The start closure owns a ServiceConfig, so it is Clone rather
    // than Copy; each submission path gets its own handle.
    let mut analyze_image = {
        let mut start = start_analysis.clone();
        move |_: ()| {
            if let Some(uploaded) = image() {
                start(AnalysisInput::Image {
                    mime_type: uploaded.mime_type,
                    data: uploaded.data,
                });
            }
        }
    };
    let mut analyze_manual = {
        let mut start = start_analysis;
        move |birth| start(AnalysisInput::Chart(birth))
    };

    let mut switch_mode = move |next: InputMode| {
        mode.set(next);
        result.set(None);
        error.set(None);
        streak.write().reset();
        *epoch.write() += 1;
    };

    let new_consultation = move |_| {
        result.set(None);
        error.set(None);
        image.set(None);
        illustration.set(None);
        streak.write().reset();
        *epoch.write() += 1;
        export::scroll_to_top();
    };

    let share = move |_| {
        spawn(async move {
            match export::share_or_copy(strings.title, strings.subtitle).await {
                ShareOutcome::Copied => {
                    copied.set(true);
                    TimeoutFuture::new(2000).await;
                    copied.set(false);
                }
                ShareOutcome::Failed => {
                    toasts.show(strings.copy_failed, ToastSeverity::Warning);
                }
                ShareOutcome::Shared | ShareOutcome::Dismissed => {}
            }
        });
    };

    let export_pdf = move |_| {
        if is_exporting() {
            return;
        }
        is_exporting.set(true);
        spawn(async move {
            if export::download_pdf(REPORT_REGION_ID).await.is_err() {
                toasts.show(strings.export_failed, ToastSeverity::Warning);
            }
            is_exporting.set(false);
        });
    };

    let current_mode = mode();
    let current_result = result();
    let current_error = error();
    let has_result = current_result.is_some();
    let is_loading = loading();
    let share_label = if copied() { strings.link_copied } else { strings.share_app };

    rsx! {
        link { rel: "stylesheet", href: CSS }
        main { class: "container",
            header { class: "app-header",
                h1 { class: "app-title", "{strings.title}" }
                p { class: "app-subtitle", "{strings.subtitle}" }
            }

            if !has_result && !is_loading {
                div { class: "mode-switcher",
                    button {
                        class: if current_mode == InputMode::Image { "mode-button mode-button--active" } else { "mode-button" },
                        onclick: move |_| switch_mode(InputMode::Image),
                        "{strings.mode_image}"
                    }
                    button {
                        class: if current_mode == InputMode::Manual { "mode-button mode-button--active" } else { "mode-button" },
                        onclick: move |_| switch_mode(InputMode::Manual),
                        "{strings.mode_manual}"
                    }
                }

                div { class: "input-panel",
                    if current_mode == InputMode::Image {
                        ImageUpload {
                            image: image(),
                            on_select: move |uploaded: UploadedImage| {
                                image.set(Some(uploaded));
                                error.set(None);
                            },
                            on_clear: move |_| image.set(None),
                            on_analyze: move |_| analyze_image(()),
                        }
                    } else {
                        BirthForm {
                            on_submit: move |birth| analyze_manual(birth),
                        }
                    }
                }
            }

            if let Some(message) = current_error.as_ref() {
                div { class: "error-banner", "{message}" }
            }

            if is_loading {
                div { class: "loading-state",
                    div { class: "loading-rings" }
                    p { class: "loading-caption", "{strings.loading_caption}" }
                }
            }

            if let Some(content) = current_result.as_ref() {
                ResultView {
                    content: content.clone(),
                    illustration: illustration(),
                    is_exporting: is_exporting(),
                    on_export: export_pdf,
                    on_new_consultation: new_consultation,
                }
            }
        }

        footer { class: "app-footer",
            button {
                class: if copied() { "footer-button footer-button--copied" } else { "footer-button" },
                onclick: share,
                "{share_label}"
            }
            button {
                class: "footer-button",
                onclick: move |_| show_help.set(true),
                "{strings.help_open}"
            }
        }

        if show_help() {
            HelpModal { on_close: move |_| show_help.set(false) }
        }

        CookieBanner {}
        ToastFrame {}
    }
}
