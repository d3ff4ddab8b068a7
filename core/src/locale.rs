//! UI language detection and localized strings.
//!
//! The language is picked once at startup from the browser's ordered
//! locale preferences and memoized for the session; everything the user
//! can read goes through the [`Strings`] table for that language.

use celestial_types::Language;

/// Pick the UI language from an ordered list of locale tags.
///
/// The first tag whose primary subtag matches a supported language wins
/// (`"es-AR"` → `Es`, `"en_US"` → `En`). Falls back to English when
/// nothing matches.
pub fn detect_language<S: AsRef<str>>(preferred: &[S]) -> Language {
    for tag in preferred {
        let primary = tag
            .as_ref()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => return Language::En,
            "es" => return Language::Es,
            _ => {}
        }
    }
    Language::En
}

/// Every user-facing message, in one place per language.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,

    // Mode switcher
    pub mode_image: &'static str,
    pub mode_manual: &'static str,

    // Image upload
    pub upload_heading: &'static str,
    pub upload_hint: &'static str,
    pub select_image: &'static str,
    pub decode_image: &'static str,

    // Birth data form
    pub label_date: &'static str,
    pub label_time: &'static str,
    pub label_location: &'static str,
    pub location_placeholder: &'static str,
    pub generate_chart: &'static str,
    pub error_date_required: &'static str,
    pub error_time_required: &'static str,
    pub error_location_unresolved: &'static str,

    // Location search
    pub searching: &'static str,
    pub no_matches: &'static str,

    // Analysis lifecycle
    pub loading_caption: &'static str,
    pub error_generic: &'static str,
    pub rejection_first: &'static str,
    pub rejection_again: &'static str,

    // Result actions
    pub download_pdf: &'static str,
    pub exporting: &'static str,
    pub export_failed: &'static str,
    pub new_consultation: &'static str,

    // Share / copy
    pub share_app: &'static str,
    pub link_copied: &'static str,
    pub copy_failed: &'static str,

    // Cookie banner
    pub cookie_notice: &'static str,
    pub cookie_accept: &'static str,

    // Help modal
    pub help_open: &'static str,
    pub help_title: &'static str,
    pub help_body: &'static str,
    pub help_close: &'static str,
}

const EN: Strings = Strings {
    title: "Celestial Insights",
    subtitle: "Natal Chart AI Interpretation",

    mode_image: "Visual Chart",
    mode_manual: "Birth Details",

    upload_heading: "Cosmic Vision",
    upload_hint: "Scan your natal chart image for an instant reading.",
    select_image: "Select Image",
    decode_image: "Decode Image",

    label_date: "Birth Date",
    label_time: "Birth Time (Exact)",
    label_location: "Birth Location (City, Country)",
    location_placeholder: "e.g. Buenos Aires, Argentina",
    generate_chart: "Generate Chart",
    error_date_required: "Please enter your birth date.",
    error_time_required: "Please enter your birth time.",
    error_location_unresolved: "Please pick your birth place from the suggestions.",

    searching: "Searching…",
    no_matches: "No matching places found.",

    loading_caption: "Consulting the Records…",
    error_generic: "Something went wrong while consulting the stars. Please try again.",
    rejection_first: "That image does not look like a readable birth chart. Try a clearer image.",
    rejection_again: "The chart still cannot be read. Try entering your birth details manually instead.",

    download_pdf: "Download PDF Report",
    exporting: "Generating…",
    export_failed: "The PDF could not be generated. Please try again.",
    new_consultation: "New Consultation",

    share_app: "Share App",
    link_copied: "Link copied!",
    copy_failed: "The link could not be copied. Please copy the URL manually.",

    cookie_notice: "This app stores a single preference cookie. No personal data is kept.",
    cookie_accept: "Got it",

    help_open: "Install",
    help_title: "Take the App With You",
    help_body: "Open your browser menu and choose \"Install app\" or \"Add to Home Screen\".",
    help_close: "Understood",
};

const ES: Strings = Strings {
    title: "Celestial Insights",
    subtitle: "Interpretación de Carta Natal con IA",

    mode_image: "Carta Visual",
    mode_manual: "Datos de Nacimiento",

    upload_heading: "Visión Cósmica",
    upload_hint: "Escanea la imagen de tu carta natal para una lectura instantánea.",
    select_image: "Seleccionar Imagen",
    decode_image: "Descifrar Imagen",

    label_date: "Fecha de Nacimiento",
    label_time: "Hora de Nacimiento (Exacta)",
    label_location: "Lugar de Nacimiento (Ciudad, País)",
    location_placeholder: "ej. Buenos Aires, Argentina",
    generate_chart: "Generar Carta",
    error_date_required: "Por favor ingresa tu fecha de nacimiento.",
    error_time_required: "Por favor ingresa tu hora de nacimiento.",
    error_location_unresolved: "Por favor elige tu lugar de nacimiento de las sugerencias.",

    searching: "Buscando…",
    no_matches: "No se encontraron lugares.",

    loading_caption: "Consultando los Registros…",
    error_generic: "Algo salió mal al consultar las estrellas. Inténtalo de nuevo.",
    rejection_first: "Esa imagen no parece una carta natal legible. Prueba con una imagen más clara.",
    rejection_again: "La carta sigue sin poder leerse. Prueba ingresando tus datos de nacimiento manualmente.",

    download_pdf: "Descargar Reporte PDF",
    exporting: "Generando…",
    export_failed: "Hubo un error al generar el PDF. Inténtalo de nuevo.",
    new_consultation: "Nueva Consulta",

    share_app: "Compartir App",
    link_copied: "¡Copiado!",
    copy_failed: "No se pudo copiar el enlace. Por favor, copia la URL manualmente.",

    cookie_notice: "Esta app guarda una única cookie de preferencias. No se conservan datos personales.",
    cookie_accept: "Entendido",

    help_open: "Instalar",
    help_title: "Lleva la App Contigo",
    help_body: "Abre el menú de tu navegador y elige \"Instalar aplicación\" o \"Añadir a pantalla de inicio\".",
    help_close: "Entendido",
};

impl Strings {
    /// The string table for a language.
    pub fn for_language(language: Language) -> &'static Strings {
        match language {
            Language::En => &EN,
            Language::Es => &ES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_first_supported_wins() {
        assert_eq!(detect_language(&["es-AR", "en-US"]), Language::Es);
        assert_eq!(detect_language(&["en-GB", "es"]), Language::En);
    }

    #[test]
    fn test_detect_skips_unsupported() {
        assert_eq!(detect_language(&["fr-FR", "de", "es-MX"]), Language::Es);
    }

    #[test]
    fn test_detect_underscore_and_case() {
        assert_eq!(detect_language(&["ES_es"]), Language::Es);
        assert_eq!(detect_language(&["EN"]), Language::En);
    }

    #[test]
    fn test_detect_defaults_to_english() {
        assert_eq!(detect_language(&["fr", "ja"]), Language::En);
        assert_eq!(detect_language::<&str>(&[]), Language::En);
    }

    #[test]
    fn test_string_tables_differ() {
        let en = Strings::for_language(Language::En);
        let es = Strings::for_language(Language::Es);
        assert_ne!(en.error_generic, es.error_generic);
        assert_ne!(en.label_date, es.label_date);
    }
}
