//! Prompt construction for the generative service.
//!
//! The prompts are the only alignment contract between the free-text
//! model and the renderer: they mandate the report structure (title
//! header, restated source data, headers/lists/bold only) and the
//! output language, so downstream parsing can stay heuristic.

use celestial_types::{BirthData, Language};

use crate::analysis::REJECTION_SENTINEL;
use crate::search::MAX_SUGGESTIONS;

const PERSONA: &str = "Act as a world-class expert astrologer with deep knowledge in \
Western Natal Astrology. Use a mystical yet professional and empowering tone. \
Format the output with clear headers and bullet points. Use Markdown for styling, \
limited to '#'/'##'/'###' headers, '-' bullet lists and '**bold**' emphasis. \
Begin the report with a single '#' title header.";

fn language_mandate(language: Language) -> String {
    format!("Write the entire report in {}.", language.english_name())
}

/// Instruction for a reading from manual birth details.
pub fn chart_reading(birth: &BirthData, language: Language) -> String {
    format!(
        "{PERSONA}\n{}\n\
        The user has provided their birth details:\n\
        - Date: {}\n\
        - Time: {}\n\
        - Location: {}\n\n\
        Restate these details near the top of the report. Based on them:\n\
        1. Calculate/Estimate the Big Three (Sun, Moon, and Rising sign).\n\
        2. Provide a deep interpretation of the personality based on the signs and likely house placements.\n\
        3. Discuss the energetic signature of this birth time.\n\
        4. Provide sections on:\n\
           - Core Essence (Sun)\n\
           - Emotional Landscape (Moon)\n\
           - The Mask You Wear (Rising)\n\
           - Destined Path & Career\n\
           - Relationship Needs",
        language_mandate(language),
        birth.date,
        birth.time,
        birth.location,
    )
}

/// Instruction accompanying an uploaded chart image.
pub fn image_reading(language: Language) -> String {
    format!(
        "{PERSONA}\n{}\n\
        Analyze the provided birth chart image. State what chart the image shows \
        near the top of the report, then:\n\
        1. Identify the Big Three: Sun, Moon, and Rising signs.\n\
        2. Describe core personality traits.\n\
        3. Look for major aspects between personal planets.\n\
        4. Provide insights into Career, Relationships, and Life Purpose.\n\n\
        If the image is not a readable astrological birth chart, reply with \
        exactly the token {REJECTION_SENTINEL} and nothing else.",
        language_mandate(language),
    )
}

/// Instruction for the location autocomplete. Demands bare JSON so the
/// response can be parsed by [`crate::search::parse_suggestions`].
pub fn location_search(query: &str, language: Language) -> String {
    format!(
        "List up to {MAX_SUGGESTIONS} real cities or towns matching the partial \
        place name \"{}\". Respond with only a JSON array of objects with keys \
        \"city\", \"country\" and \"fullName\", where fullName is \"City, Country\" \
        with names written in {}. No prose, no code fences.",
        query.trim(),
        language.english_name(),
    )
}

/// Descriptive prompt for the best-effort illustrative image.
pub fn illustration(birth: &BirthData) -> String {
    format!(
        "A beautiful mystical illustration of a western astrology natal chart \
        wheel for a person born on {} at {} in {}. Deep midnight blue and gold, \
        ornate zodiac symbols around the wheel, stars and constellations, \
        no text or lettering.",
        birth.date, birth.time, birth.location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> BirthData {
        BirthData {
            date: "1990-06-15".into(),
            time: "08:30".into(),
            location: "Buenos Aires, Argentina".into(),
        }
    }

    #[test]
    fn test_chart_reading_interpolates_fields() {
        let prompt = chart_reading(&birth(), Language::En);
        assert!(prompt.contains("1990-06-15"));
        assert!(prompt.contains("08:30"));
        assert!(prompt.contains("Buenos Aires, Argentina"));
        assert!(prompt.contains("Restate these details"));
    }

    #[test]
    fn test_language_mandate_follows_detection() {
        assert!(chart_reading(&birth(), Language::Es).contains("in Spanish"));
        assert!(image_reading(Language::En).contains("in English"));
    }

    #[test]
    fn test_image_prompt_carries_sentinel_contract() {
        let prompt = image_reading(Language::En);
        assert!(prompt.contains(REJECTION_SENTINEL));
    }

    #[test]
    fn test_location_search_names_query_and_shape() {
        let prompt = location_search("  buen ", Language::Es);
        assert!(prompt.contains("\"buen\""));
        assert!(prompt.contains("fullName"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_illustration_mentions_birth_fields() {
        let prompt = illustration(&birth());
        assert!(prompt.contains("1990-06-15"));
        assert!(prompt.contains("Buenos Aires"));
    }
}
