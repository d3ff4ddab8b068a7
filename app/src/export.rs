//! Platform export/share boundary.
//!
//! Thin wrappers over opaque browser capabilities: rasterizing the
//! report region to a PDF (via a page-level helper script), the share
//! sheet, and clipboard copy. All of these are asynchronous, all
//! report success/failure, and every failure degrades to a soft
//! user-visible notice upstream.

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Provided by index.html; wraps `html2pdf` with the app's page
    /// options and saves the result under the given filename.
    #[wasm_bindgen(js_namespace = window, js_name = exportReportPdf, catch)]
    async fn export_report_pdf(element_id: &str, filename: &str) -> Result<JsValue, JsValue>;
}

/// Date-stamped download name for the report.
pub fn report_filename() -> String {
    format!(
        "Celestial_Insights_Report_{}.pdf",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

/// Rasterize the report region and save it as a PDF.
pub async fn download_pdf(element_id: &str) -> Result<(), String> {
    export_report_pdf(element_id, &report_filename())
        .await
        .map(|_| ())
        .map_err(|err| {
            warn!("pdf export failed: {err:?}");
            format!("{err:?}")
        })
}

/// How a share attempt concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet handled it.
    Shared,
    /// The user dismissed the share sheet; not a failure.
    Dismissed,
    /// The app link was copied to the clipboard instead.
    Copied,
    /// Neither sharing nor copying worked.
    Failed,
}

/// Canonical app URL (origin + path, no query or fragment).
pub fn page_url() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let path = location.pathname().unwrap_or_default();
    format!("{origin}{path}")
}

/// Invoke the platform share sheet, falling back to clipboard copy
/// when sharing is unsupported or fails for any reason other than the
/// user closing the sheet.
pub async fn share_or_copy(title: &str, text: &str) -> ShareOutcome {
    let url = page_url();

    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share"))
            .unwrap_or(false);
        if supported {
            let data = web_sys::ShareData::new();
            data.set_title(title);
            data.set_text(text);
            data.set_url(&url);
            match wasm_bindgen_futures::JsFuture::from(navigator.share_with_data(&data)).await {
                Ok(_) => return ShareOutcome::Shared,
                Err(err) => {
                    if error_name(&err).as_deref() == Some("AbortError") {
                        return ShareOutcome::Dismissed;
                    }
                    debug!("share sheet failed, falling back to copy: {err:?}");
                }
            }
        }
    }

    copy_link(&url).await
}

async fn copy_link(url: &str) -> ShareOutcome {
    let Some(window) = web_sys::window() else {
        return ShareOutcome::Failed;
    };
    let clipboard = window.navigator().clipboard();
    match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(url)).await {
        Ok(_) => ShareOutcome::Copied,
        Err(err) => {
            warn!("clipboard copy failed: {err:?}");
            ShareOutcome::Failed
        }
    }
}

fn error_name(err: &JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()?
        .as_string()
}

/// Bring the result or error banner into view after a request settles.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
