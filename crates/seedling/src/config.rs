//! Generator configuration.
//!
//! Every field has a default, so a configuration document only needs to
//! name what it changes:
//!
//! ```
//! use seedling::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "paragraphs": { "html": true } }"#)?;
//! assert!(config.paragraphs.html);
//! assert_eq!(config.paragraphs.count, 1);
//! # Ok::<(), seedling::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use seedling_sampling::version::VersionCeilings;
use seedling_text::alphabet::Alphabet;
use seedling_text::options::{ParagraphOptions, PhraseOptions, SentenceOptions};
use seedling_text::selector::DEFAULT_REJECTION_LIMIT;

use crate::error::Error;

/// Named character pools usable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetPreset {
    /// Letters and digits.
    #[default]
    General,
    /// Letters only.
    Alpha,
    /// Letters and digits without confusable glyphs.
    Unambiguous,
    /// Decimal digits.
    Digits,
    /// Lowercase hexadecimal digits.
    Hex,
}

impl AlphabetPreset {
    /// Builds the alphabet this preset names.
    #[must_use]
    pub fn alphabet(self) -> Alphabet {
        match self {
            Self::General => Alphabet::general(),
            Self::Alpha => Alphabet::alpha(),
            Self::Unambiguous => Alphabet::unambiguous(),
            Self::Digits => Alphabet::digits(),
            Self::Hex => Alphabet::hex(),
        }
    }
}

/// Default shape of sampled strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOptions {
    /// Shortest length, inclusive.
    pub min_len: usize,
    /// Longest length, inclusive.
    pub max_len: usize,
    /// Character pool.
    pub alphabet: AlphabetPreset,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            min_len: 8,
            max_len: 16,
            alphabet: AlphabetPreset::General,
        }
    }
}

/// Defaults applied by a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Ceilings for version components the caller leaves open.
    pub version_ceilings: VersionCeilings,
    /// Consecutive discarded bytes tolerated while sampling strings.
    pub rejection_limit: RejectionLimit,
    /// Default string shape.
    pub string: StringOptions,
    /// Default phrase shape.
    pub phrase: PhraseOptions,
    /// Default sentence shape.
    pub sentence: SentenceOptions,
    /// Default paragraph shape.
    pub paragraphs: ParagraphOptions,
}

/// Consecutive-discard cap for the unbiased selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RejectionLimit(pub u32);

impl Default for RejectionLimit {
    fn default() -> Self {
        Self(DEFAULT_REJECTION_LIMIT)
    }
}

impl GeneratorConfig {
    /// Parses a configuration from JSON, filling absent fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `json` is malformed or a field has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config = serde_json::from_str(json)?;
        tracing::debug!(?config, "parsed generator configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.rejection_limit, RejectionLimit(64));
        assert_eq!(config.string.min_len, 8);
        assert_eq!(config.string.max_len, 16);
        assert_eq!(config.version_ceilings.build, 9999);
    }

    #[test]
    fn test_nested_fields_override_individually() {
        let config = GeneratorConfig::from_json(
            r#"{
                "rejection_limit": 8,
                "string": { "alphabet": "hex" },
                "version_ceilings": { "major": 5 },
                "sentence": { "max_words": 20 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.rejection_limit, RejectionLimit(8));
        assert_eq!(config.string.alphabet, AlphabetPreset::Hex);
        assert_eq!(config.string.max_len, 16);
        assert_eq!(config.version_ceilings.major, 5);
        assert_eq!(config.version_ceilings.minor, 100);
        assert_eq!(config.sentence.min_words, 4);
        assert_eq!(config.sentence.max_words, 20);
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let result = GeneratorConfig::from_json(r#"{ "string": { "alphabet": "emoji" } }"#);
        match result.unwrap_err() {
            Error::Config(_) => {}
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_presets_build_matching_alphabets() {
        assert_eq!(AlphabetPreset::General.alphabet(), Alphabet::general());
        assert_eq!(AlphabetPreset::Alpha.alphabet().len(), 52);
        assert_eq!(AlphabetPreset::Unambiguous.alphabet().len(), 56);
        assert_eq!(AlphabetPreset::Digits.alphabet().len(), 10);
        assert_eq!(AlphabetPreset::Hex.alphabet().len(), 16);
    }
}
