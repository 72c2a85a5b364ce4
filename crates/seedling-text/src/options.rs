//! Shape options for synthesized text.

use serde::{Deserialize, Serialize};

/// Options for [`phrase`](crate::synth::phrase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseOptions {
    /// Fewest words, at least 2.
    pub min_words: usize,
    /// Most words, at least 2.
    pub max_words: usize,
    /// Title-case the first word.
    pub title_first: bool,
    /// Title-case every word. Implies `title_first`.
    pub title_all: bool,
}

impl Default for PhraseOptions {
    fn default() -> Self {
        Self {
            min_words: 2,
            max_words: 4,
            title_first: false,
            title_all: false,
        }
    }
}

/// Options for [`sentence`](crate::synth::sentence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceOptions {
    /// Fewest words, at least 3.
    pub min_words: usize,
    /// Most words, at least 3.
    pub max_words: usize,
}

impl Default for SentenceOptions {
    fn default() -> Self {
        Self {
            min_words: 4,
            max_words: 12,
        }
    }
}

/// Options for [`paragraphs`](crate::synth::paragraphs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphOptions {
    /// Number of paragraphs, at least 1.
    pub count: usize,
    /// Fewest sentences per paragraph, at least 1.
    pub min_sentences: usize,
    /// Most sentences per paragraph, at least 1.
    pub max_sentences: usize,
    /// Fewest words per sentence, at least 3.
    pub min_sentence_words: usize,
    /// Most words per sentence, at least 3.
    pub max_sentence_words: usize,
    /// Wrap each paragraph in `<p>` tags instead of separating them with a
    /// blank line.
    pub html: bool,
}

impl Default for ParagraphOptions {
    fn default() -> Self {
        let sentence = SentenceOptions::default();
        Self {
            count: 1,
            min_sentences: 3,
            max_sentences: 6,
            min_sentence_words: sentence.min_words,
            max_sentence_words: sentence.max_words,
            html: false,
        }
    }
}

impl ParagraphOptions {
    /// The per-sentence options these paragraph options imply.
    #[must_use]
    pub fn sentence(&self) -> SentenceOptions {
        SentenceOptions {
            min_words: self.min_sentence_words,
            max_words: self.max_sentence_words,
        }
    }
}
