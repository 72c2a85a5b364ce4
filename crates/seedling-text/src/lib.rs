//! Seedling — strings and pseudo-text.
//!
//! Responsible for sampling strings from character pools without modulo
//! bias, and for composing filler words, phrases, sentences and paragraphs
//! from a fixed lexicon.

pub mod alphabet;
pub mod lexicon;
pub mod options;
pub mod selector;
pub mod synth;
