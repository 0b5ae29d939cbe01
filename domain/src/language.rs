use serde::{Deserialize, Serialize};

use crate::DomainError;

/// The five languages the interpreter supports. The set is compiled in and
/// not configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
}

pub const SUPPORTED_LANGUAGES: [Language; 5] = [
    Language::Korean,
    Language::Vietnamese,
    Language::English,
    Language::Chinese,
    Language::Japanese,
];

impl Language {
    /// ISO 639-1 code understood by the transcription and synthesis services.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::Vietnamese => "vi",
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    /// Display name used in translation instructions.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Korean => "Korean",
            Language::Vietnamese => "Vietnamese",
            Language::English => "English",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Language::Korean),
            "vi" => Ok(Language::Vietnamese),
            "en" => Ok(Language::English),
            "zh" => Ok(Language::Chinese),
            "ja" => Ok(Language::Japanese),
            other => Err(DomainError::InvalidLanguage(other.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_registry() {
        for language in SUPPORTED_LANGUAGES {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let error = Language::from_code("de").expect_err("german is not supported");
        assert!(matches!(error, DomainError::InvalidLanguage(code) if code == "de"));
    }

    #[test]
    fn code_parsing_ignores_case_and_whitespace() {
        assert_eq!(Language::from_code(" KO ").unwrap(), Language::Korean);
    }
}
