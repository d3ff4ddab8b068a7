//! Toast notifications for soft, non-blocking notices.
//!
//! Export and clipboard failures, and the share confirmation, surface
//! here; nothing shown as a toast ever blocks the primary flow.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Severity of a notice, which only affects styling and how long it
/// stays on screen.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Informational confirmation - 4 second duration
    Notice,
    /// Degraded-path warning (export/copy failure) - 6 second duration
    Warning,
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Global toast manager, accessed via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show a notice. At most four are kept; the oldest is dropped.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= 4 {
                toasts.remove(0);
            }
            toasts.push(Toast { id, message: message.into(), severity });
        }

        let mut toasts_signal = self.toasts;
        let duration = match severity {
            ToastSeverity::Notice => 4000,
            ToastSeverity::Warning => 6000,
        };

        spawn(async move {
            TimeoutFuture::new(duration).await;
            toasts_signal.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the toast provider at the app root, before any children
/// that might show notices.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Renders all active toasts; place once at the end of the layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Notice => "toast toast-notice",
                        ToastSeverity::Warning => "toast toast-warning",
                    },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
