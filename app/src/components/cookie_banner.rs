//! Cookie-consent banner.
//!
//! Shown after a short delay unless the persisted consent flag is
//! already set; accepting writes the flag through the storage boundary
//! so the banner never reappears.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use celestial_core::locale::Strings;
use celestial_types::Language;

use crate::storage;

const BANNER_DELAY_MS: u32 = 1500;

#[component]
pub fn CookieBanner() -> Element {
    let language = use_context::<Language>();
    let strings = Strings::for_language(language);

    let mut consent_given = use_signal(|| storage::load_preferences().consent_given);
    let mut delayed_in = use_signal(|| false);

    use_future(move || async move {
        TimeoutFuture::new(BANNER_DELAY_MS).await;
        delayed_in.set(true);
    });

    if consent_given() || !delayed_in() {
        return rsx! {};
    }

    rsx! {
        div { class: "cookie-banner",
            p { class: "cookie-text", "{strings.cookie_notice}" }
            button {
                class: "primary-button",
                onclick: move |_| {
                    storage::record_consent();
                    consent_given.set(true);
                },
                "{strings.cookie_accept}"
            }
        }
    }
}
