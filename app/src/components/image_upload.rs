//! Chart image upload.
//!
//! Reads the chosen file, base64-encodes it for the analysis payload
//! and keeps a data URL for the preview. A read failure just leaves
//! the picker in place.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use dioxus::prelude::*;
use tracing::warn;

use celestial_core::locale::Strings;
use celestial_types::Language;

/// An uploaded chart image, ready for analysis and preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub mime_type: String,
    /// Base64 payload sent with the analysis request.
    pub data: String,
    /// `data:` URL for the `<img>` preview.
    pub preview: String,
}

/// Props for the ImageUpload component
#[derive(Props, Clone, PartialEq)]
pub struct ImageUploadProps {
    pub image: Option<UploadedImage>,
    pub on_select: EventHandler<UploadedImage>,
    pub on_clear: EventHandler<()>,
    pub on_analyze: EventHandler<()>,
}

#[component]
pub fn ImageUpload(props: ImageUploadProps) -> Element {
    let language = use_context::<Language>();
    let strings = Strings::for_language(language);

    let on_select = props.on_select;
    let on_clear = props.on_clear;
    let on_analyze = props.on_analyze;
    let handle_file = move |e: FormEvent| {
        let Some(file) = e.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let mime_type = match file.content_type() {
                        Some(mime) if !mime.is_empty() => mime,
                        _ => "image/png".to_string(),
                    };
                    let data = BASE64.encode(&bytes);
                    let preview = format!("data:{mime_type};base64,{data}");
                    on_select.call(UploadedImage { mime_type, data, preview });
                }
                Err(err) => warn!("could not read chart image: {err:?}"),
            }
        });
    };

    rsx! {
        if let Some(image) = props.image.as_ref() {
            div { class: "upload-preview",
                img { class: "chart-preview", src: "{image.preview}", alt: "Birth Chart" }
                button {
                    class: "preview-clear",
                    r#type: "button",
                    onclick: move |_| on_clear.call(()),
                    "×"
                }
                div { class: "form-actions",
                    button {
                        class: "primary-button",
                        r#type: "button",
                        onclick: move |_| on_analyze.call(()),
                        "{strings.decode_image}"
                    }
                }
            }
        } else {
            div { class: "upload-dropzone",
                h2 { class: "upload-heading", "{strings.upload_heading}" }
                p { class: "upload-hint", "{strings.upload_hint}" }
                label { class: "primary-button",
                    "{strings.select_image}"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "hidden-input",
                        onchange: handle_file,
                    }
                }
            }
        }
    }
}
