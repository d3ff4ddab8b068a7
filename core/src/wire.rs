//! Wire types for the generative-language REST API.
//!
//! Minimal serde shapes for `models/{model}:generateContent`: text
//! parts, inline image data, and the generation config knobs this app
//! actually uses (JSON response mode for location search, image
//! modality for illustrations).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content part: text, inline data, or both absent (ignored).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded payload with its mime type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part { text: Some(text.into()), inline_data: None }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part {
            text: None,
            inline_data: Some(InlineData { mime_type: mime_type.into(), data: data.into() }),
        }
    }
}

impl GenerateContentRequest {
    /// Plain text-in, text-out request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self::from_parts(vec![Part::text(prompt)])
    }

    /// An uploaded image followed by its instruction text.
    pub fn image_with_prompt(
        mime_type: impl Into<String>,
        data: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self::from_parts(vec![Part::inline_data(mime_type, data), Part::text(prompt)])
    }

    /// Text request constrained to a JSON response body.
    pub fn json(prompt: impl Into<String>) -> Self {
        let mut request = Self::text(prompt);
        request.generation_config = Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_modalities: None,
        });
        request
    }

    /// Text request asking for an image back.
    pub fn image_generation(prompt: impl Into<String>) -> Self {
        let mut request = Self::text(prompt);
        request.generation_config = Some(GenerationConfig {
            response_mime_type: None,
            response_modalities: Some(vec!["IMAGE".to_string()]),
        });
        request
    }

    fn from_parts(parts: Vec<Part>) -> Self {
        GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when the
    /// response carries no text at all.
    pub fn first_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }

    /// First inline image of the first candidate, if any.
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_shape() {
        let request = GenerateContentRequest::text("hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_image_request_part_order() {
        let request = GenerateContentRequest::image_with_prompt("image/png", "QUJD", "read this");
        let json = serde_json::to_value(&request).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "QUJD");
        assert_eq!(parts[1]["text"], "read this");
    }

    #[test]
    fn test_json_mode_config() {
        let request = GenerateContentRequest::json("list places");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_image_generation_modality() {
        let request = GenerateContentRequest::image_generation("draw a chart");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn test_parse_text_response() {
        let raw = r##"{"candidates":[{"content":{"parts":[{"text":"# Reading"},{"text":" body"}]}}]}"##;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("# Reading body"));
        assert!(response.first_inline_image().is_none());
    }

    #[test]
    fn test_parse_image_response() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"QUJD"}}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.first_text().is_none());
        assert_eq!(response.first_inline_image().unwrap().data, "QUJD");
    }

    #[test]
    fn test_empty_response_tolerated() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }
}
