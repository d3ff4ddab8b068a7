//! Generative service client module
//!
//! Provides type-safe wrappers around the remote `generateContent`
//! calls, centralizing all service communication: chart analysis,
//! location autocomplete, and best-effort illustration generation.

use celestial_core::analysis::{AnalysisError, AnalysisInput, Outcome, classify};
use celestial_core::{prompt, search};
use celestial_core::wire::{GenerateContentRequest, GenerateContentResponse};
use celestial_types::{BirthData, Language, LocationSuggestion};
use tracing::{debug, warn};

/// Remote service settings, provided once via context at app root.
///
/// The API key is baked in at build time; models and endpoint are
/// fixed but kept here so tests and future config sources have a
/// single seam to go through. The HTTP client lives here too and is
/// shared by every call (cloning a `reqwest::Client` shares the same
/// underlying pool).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    client: reqwest::Client,
    pub endpoint: String,
    pub api_key: String,
    /// Model used for readings and location search.
    pub text_model: String,
    /// Model used for the illustrative image.
    pub image_model: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: option_env!("GEMINI_API_KEY").unwrap_or("").to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image-preview".to_string(),
        }
    }
}

/// POST one `generateContent` request and parse the response envelope.
async fn generate(
    config: &ServiceConfig,
    model: &str,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, AnalysisError> {
    let url = format!("{}/models/{}:generateContent", config.endpoint, model);
    let response = config
        .client
        .post(&url)
        .header("x-goog-api-key", &config.api_key)
        .json(request)
        .send()
        .await
        .map_err(|e| AnalysisError::Transport(e.to_string()))?
        .error_for_status()
        .map_err(|e| AnalysisError::Transport(e.to_string()))?;
    response
        .json()
        .await
        .map_err(|e| AnalysisError::Transport(e.to_string()))
}

/// Run the primary analysis call and classify the response.
pub async fn analyze_chart(
    config: &ServiceConfig,
    input: &AnalysisInput,
    language: Language,
) -> Result<Outcome, AnalysisError> {
    let request = match input {
        AnalysisInput::Chart(birth) => {
            GenerateContentRequest::text(prompt::chart_reading(birth, language))
        }
        AnalysisInput::Image { mime_type, data } => GenerateContentRequest::image_with_prompt(
            mime_type.clone(),
            data.clone(),
            prompt::image_reading(language),
        ),
    };
    let response = generate(config, &config.text_model, &request).await?;
    let text = response.first_text().ok_or(AnalysisError::EmptyResponse)?;
    Ok(classify(&text))
}

/// Query place suggestions for the autocomplete field.
///
/// Best-effort: any transport or parse failure degrades to an empty
/// list, never a user-visible error.
pub async fn search_locations(
    config: &ServiceConfig,
    query: &str,
    language: Language,
) -> Vec<LocationSuggestion> {
    let request = GenerateContentRequest::json(prompt::location_search(query, language));
    match generate(config, &config.text_model, &request).await {
        Ok(response) => response
            .first_text()
            .map(|text| search::parse_suggestions(&text))
            .unwrap_or_default(),
        Err(err) => {
            warn!("location search failed, degrading to no suggestions: {err}");
            Vec::new()
        }
    }
}

/// Request the illustrative image for a manual reading.
///
/// Returns a displayable data URL, or `None` on any failure: this call
/// must never perturb an already-set reading.
pub async fn generate_illustration(config: &ServiceConfig, birth: &BirthData) -> Option<String> {
    let request = GenerateContentRequest::image_generation(prompt::illustration(birth));
    match generate(config, &config.image_model, &request).await {
        Ok(response) => response
            .first_inline_image()
            .map(|image| format!("data:{};base64,{}", image.mime_type, image.data)),
        Err(err) => {
            debug!("illustration generation failed, continuing without: {err}");
            None
        }
    }
}
