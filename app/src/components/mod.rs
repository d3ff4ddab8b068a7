//! UI components for the Celestial Insights frontend.

mod birth_form;
mod cookie_banner;
mod help_modal;
mod image_upload;
mod location_search;
mod result_view;
mod toast;

pub use birth_form::BirthForm;
pub use cookie_banner::CookieBanner;
pub use help_modal::HelpModal;
pub use image_upload::{ImageUpload, UploadedImage};
pub use location_search::LocationSearch;
pub use result_view::{REPORT_REGION_ID, ResultView};
pub use toast::{ToastFrame, ToastSeverity, use_toast, use_toast_provider};
