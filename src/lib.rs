//! Dead simple character-level text generation using sliding window statistics.
//!
//! A [`LanguageModel`] scans a training text with a window of `W` consecutive characters
//! and counts, for every distinct window it meets, which character comes next and how
//! often. Generating text is then a walk over those counts: the trailing `W` characters
//! of the output so far select a [`ContextDistribution`], a uniform draw in `[0, 1)`
//! picks the next character at the first crossing of the cumulative probabilities, and
//! the loop repeats until the requested length is reached. A window the model has never
//! seen stops generation early; the text produced so far is returned as-is.
//!
//! Models can be seeded for byte-identical reruns, or left unseeded for production
//! variability. See [`LanguageModel::new()`].
//!
//! # Features
//!
//! `chargram` comes with some features that you can disable (or enable) at will. They are:
//!
//! - `inline-more` - Passes `inline-more` on to [`hashbrown`], trading compile time for
//! a bit of runtime speed. Enabled by default.
//! - `serde` - Derives `Serialize` and `Deserialize` for [`CharRecord`] and
//! [`ContextDistribution`].

pub mod distribution;
pub mod error;
pub mod model;

pub use distribution::{CharRecord, ContextDistribution};
pub use error::Error;
pub use model::LanguageModel;
