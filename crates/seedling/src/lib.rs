//! Seedling — random fixture values and filler text.
//!
//! [`Generator`] bundles the random sources, a clock and a
//! [`GeneratorConfig`] behind one handle with a method per value kind. The
//! [`system`] module offers the same operations as free functions over the
//! process-wide sources for callers that never need to inject anything.
//!
//! ```no_run
//! use seedling::Generator;
//!
//! let mut generator = Generator::system();
//! let name = generator.phrase()?;
//! let address = generator.ipv4_address();
//! # Ok::<(), seedling::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod system;

pub use config::{AlphabetPreset, GeneratorConfig, RejectionLimit, StringOptions};
pub use error::Error;
pub use generator::Generator;

pub use seedling_core::clock::{Clock, SystemClock};
pub use seedling_core::error::SamplingError;
pub use seedling_core::range::Range;
pub use seedling_core::rng::{
    OsByteSource, RngSource, SecureByteSource, SharedSource, StdRngSource, ThreadUniformSource,
    UniformSource,
};
pub use seedling_sampling::geo::Coordinate;
pub use seedling_sampling::version::{Version, VersionCeilings};
pub use seedling_text::alphabet::Alphabet;
pub use seedling_text::options::{ParagraphOptions, PhraseOptions, SentenceOptions};
