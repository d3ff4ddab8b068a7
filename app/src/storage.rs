//! Durable preference storage.
//!
//! The single piece of cross-session state is the cookie-consent flag.
//! It is read once at startup and written through one setter; nothing
//! else touches local storage.

use celestial_types::Preferences;
use tracing::warn;

const CONSENT_KEY: &str = "celestial_consent";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read persisted preferences. Missing or inaccessible storage reads
/// as defaults (no consent recorded).
pub fn load_preferences() -> Preferences {
    let consent_given = local_storage()
        .and_then(|storage| storage.get_item(CONSENT_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false);
    Preferences { consent_given }
}

/// Persist the visitor's acceptance of the cookie notice.
pub fn record_consent() {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(CONSENT_KEY, "true").is_err() {
                warn!("could not persist consent flag");
            }
        }
        None => warn!("local storage unavailable, consent not persisted"),
    }
}
