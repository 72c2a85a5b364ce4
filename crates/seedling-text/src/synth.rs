//! Pseudo-text synthesis from the lexicon.
//!
//! All counts (words per phrase or sentence, sentences per paragraph) are
//! drawn through the range sampler so the same bounds rules apply.

use seedling_core::error::SamplingError;
use seedling_core::range::Range;
use seedling_core::rng::UniformSource;
use seedling_sampling::numeric::count;
use tracing::instrument;

use crate::lexicon::LEXICON;
use crate::options::{ParagraphOptions, PhraseOptions, SentenceOptions};

/// Fewest words a phrase may have.
pub const PHRASE_MIN_WORDS: usize = 2;

/// Fewest words a sentence may have.
pub const SENTENCE_MIN_WORDS: usize = 3;

/// Fixed opener prefixed to the first paragraph of every call.
pub const OPENER: &str = "Lorem ipsum dolor sit amet.";

/// Upper-cases the first non-whitespace character of `text`.
///
/// Uses Unicode case mapping, independent of locale.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = true;
    for c in text.chars() {
        if pending && !c.is_whitespace() {
            out.extend(c.to_uppercase());
            pending = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Picks one lexicon word, optionally title-cased.
#[must_use]
pub fn word(rng: &mut dyn UniformSource, title: bool) -> String {
    let entry = lexicon_entry(rng);
    if title {
        title_case(entry)
    } else {
        entry.to_owned()
    }
}

/// Builds a space-separated run of words.
///
/// `title_all` title-cases every word; otherwise `title_first` title-cases
/// only the first.
///
/// # Errors
///
/// Returns `SamplingError::WordCountInvalid` if either bound is below 2, or
/// `SamplingError::RangeInvalid` if `min_words > max_words`.
pub fn phrase(rng: &mut dyn UniformSource, options: &PhraseOptions) -> Result<String, SamplingError> {
    check_word_bounds(options.min_words, options.max_words, PHRASE_MIN_WORDS)?;
    let words = count(rng, Range::new(options.min_words, options.max_words))?;

    let parts: Vec<String> = (0..words)
        .map(|index| word(rng, options.title_all || (index == 0 && options.title_first)))
        .collect();
    Ok(parts.join(" "))
}

/// Builds a sentence: a title-cased first word, lowercase words after it,
/// and a closing period.
///
/// # Errors
///
/// Returns `SamplingError::WordCountInvalid` if either bound is below 3, or
/// `SamplingError::RangeInvalid` if `min_words > max_words`.
pub fn sentence(
    rng: &mut dyn UniformSource,
    options: &SentenceOptions,
) -> Result<String, SamplingError> {
    check_word_bounds(options.min_words, options.max_words, SENTENCE_MIN_WORDS)?;
    let words = count(rng, Range::new(options.min_words, options.max_words))?;

    let mut out = String::new();
    for index in 0..words {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(&word(rng, index == 0));
    }
    out.push('.');
    Ok(out)
}

/// Builds one or more paragraphs of sentences.
///
/// The first paragraph always opens with [`OPENER`]. A single sentence count
/// is drawn per call and every paragraph gets that many sentences. With
/// `html` each paragraph is wrapped in `<p>…</p>` and paragraphs are joined
/// by a newline; otherwise paragraphs are separated by one blank line.
///
/// All bounds are validated before anything is drawn.
///
/// # Errors
///
/// Returns `SamplingError::ParagraphCountInvalid` if `count` is zero,
/// `SamplingError::SentenceCountInvalid` if a sentence bound is zero,
/// `SamplingError::WordCountInvalid` if a sentence word bound is below 3, and
/// `SamplingError::RangeInvalid` for reversed bounds.
#[instrument(level = "trace", skip(rng))]
pub fn paragraphs(
    rng: &mut dyn UniformSource,
    options: &ParagraphOptions,
) -> Result<String, SamplingError> {
    if options.count < 1 {
        return Err(SamplingError::ParagraphCountInvalid {
            count: options.count,
        });
    }
    if options.min_sentences < 1 || options.max_sentences < 1 {
        return Err(SamplingError::SentenceCountInvalid {
            min: options.min_sentences,
            max: options.max_sentences,
        });
    }
    let sentence_options = options.sentence();
    check_word_bounds(
        sentence_options.min_words,
        sentence_options.max_words,
        SENTENCE_MIN_WORDS,
    )?;
    if sentence_options.min_words > sentence_options.max_words {
        return Err(SamplingError::range_invalid(
            sentence_options.min_words,
            sentence_options.max_words,
        ));
    }

    let sentences = count(
        rng,
        Range::new(options.min_sentences, options.max_sentences),
    )?;

    let mut blocks = Vec::with_capacity(options.count);
    for index in 0..options.count {
        let mut parts = Vec::with_capacity(sentences + 1);
        if index == 0 {
            parts.push(OPENER.to_owned());
        }
        for _ in 0..sentences {
            parts.push(sentence(rng, &sentence_options)?);
        }
        let body = parts.join(" ");
        blocks.push(if options.html {
            format!("<p>{body}</p>")
        } else {
            body
        });
    }

    let separator = if options.html { "\n" } else { "\n\n" };
    Ok(blocks.join(separator))
}

fn check_word_bounds(min: usize, max: usize, floor: usize) -> Result<(), SamplingError> {
    if min < floor || max < floor {
        tracing::debug!(min, max, floor, "rejected word count bounds");
        return Err(SamplingError::WordCountInvalid { min, max, floor });
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn lexicon_entry(rng: &mut dyn UniformSource) -> &'static str {
    LEXICON[rng.next_below(LEXICON.len() as u64) as usize]
}
