//! See the top level crate documentation for information about the [`LanguageModel`]
//! type.

use core::fmt;

use hashbrown::HashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distribution::ContextDistribution;
use crate::error::Error;

/// Character-level sliding window language model.
///
/// The model maps every window of [`window_length()`](Self::window_length)
/// consecutive characters it saw during training to a [`ContextDistribution`] of the
/// characters that followed it. Training only ever grows the map; generation only
/// reads it (and advances the owned random source).
///
/// ```
/// use chargram::LanguageModel;
///
/// let mut model = LanguageModel::new(2, Some(7)).unwrap();
/// model.train("abcabcabc");
///
/// // Every context in this corpus has a single outcome, so the draws never
/// // matter and generation is fully determined.
/// assert_eq!(model.generate("ab", 7).unwrap(), "abcabca");
/// ```
#[derive(Debug)]
pub struct LanguageModel {
    /// Fixed context length, set at construction.
    window_length: usize,
    /// Maps each observed window to the distribution of its successors.
    map: HashMap<String, ContextDistribution>,
    rng: StdRng,
}

impl LanguageModel {
    /// Creates an empty model that predicts the next character from the preceding
    /// `window_length` ones.
    ///
    /// Passing `Some(seed)` makes runs reproducible: identically trained models
    /// generate byte-identical text for identical arguments. Good for debugging.
    /// With `None` the random source is seeded from entropy instead, and repeated
    /// runs drift apart. Good for production.
    ///
    /// # Errors
    ///
    /// [`Error::WindowLength`] when `window_length` is zero.
    pub fn new(window_length: usize, seed: Option<u64>) -> Result<Self, Error> {
        if window_length == 0 {
            return Err(Error::WindowLength(window_length));
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            window_length,
            map: HashMap::new(),
            rng,
        })
    }

    /// The fixed context length this model was built with.
    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Number of distinct contexts observed so far.
    pub fn context_count(&self) -> usize {
        self.map.len()
    }

    /// Whether the model has seen any training input long enough to matter.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The learned distribution for `context`, if that exact window ever occurred
    /// in training.
    pub fn distribution(&self, context: &str) -> Option<&ContextDistribution> {
        self.map.get(context)
    }

    /// Iterates over every context the model knows, in no particular order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Feeds a corpus into the model.
    ///
    /// Every window of `window_length` consecutive characters contributes one
    /// observation: the character right after it. Counts accumulate across calls,
    /// so training twice on the same corpus doubles them. A corpus no longer than
    /// the window contributes nothing, which is not an error.
    pub fn train(&mut self, corpus: &str) {
        let chars: Vec<char> = corpus.chars().collect();
        for window in chars.windows(self.window_length + 1) {
            let context: String = window[..self.window_length].iter().collect();
            let next = window[self.window_length];
            let dist = self.map.entry(context).or_default();
            dist.record_occurrence(next);
            dist.recompute_probabilities();
        }
        tracing::debug!(
            "trained on {} characters, {} contexts known",
            chars.len(),
            self.map.len()
        );
    }

    /// Generates text from the learned statistics.
    ///
    /// Starts from `seed_text` and keeps appending sampled characters until the
    /// output holds `target_length` characters. Each step looks up the trailing
    /// window of the output so far; a window the model has never seen stops
    /// generation early, and the output produced up to that point is returned.
    /// That early stop is the documented contract, not a failure. A seed already
    /// at or past `target_length` comes back unchanged.
    ///
    /// Lengths are counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// [`Error::SeedTooShort`] when `seed_text` holds fewer than
    /// [`window_length()`](Self::window_length) characters, since the first lookup
    /// needs a full window.
    pub fn generate(&mut self, seed_text: &str, target_length: usize) -> Result<String, Error> {
        let mut window: Vec<char> = seed_text.chars().collect();
        let mut produced = window.len();
        if produced < self.window_length {
            return Err(Error::SeedTooShort {
                required: self.window_length,
                actual: produced,
            });
        }
        // Only the trailing window is ever looked up.
        window.drain(..produced - self.window_length);

        let mut output = String::from(seed_text);
        while produced < target_length {
            let context: String = window.iter().collect();
            let dist = match self.map.get(&context) {
                Some(dist) => dist,
                None => {
                    tracing::debug!("unseen context {:?}, stopping early", context);
                    break;
                }
            };
            let draw: f64 = self.rng.gen();
            let next = match dist.sample(draw) {
                Some(next) => next,
                None => break,
            };
            output.push(next);
            produced += 1;
            window.remove(0);
            window.push(next);
        }
        Ok(output)
    }
}

impl fmt::Display for LanguageModel {
    /// Debugging dump: one `context : (records)` line per known context, in map
    /// order. Nothing parses this back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (context, dist) in &self.map {
            writeln!(f, "{context} : {dist}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained(window_length: usize, seed: u64, corpus: &str) -> LanguageModel {
        let mut model = LanguageModel::new(window_length, Some(seed)).unwrap();
        model.train(corpus);
        model
    }

    #[test]
    fn zero_window_length_is_rejected() {
        assert_eq!(
            LanguageModel::new(0, None).unwrap_err(),
            Error::WindowLength(0)
        );
    }

    #[test]
    fn single_outcome_contexts_generate_deterministically() {
        let mut model = trained(2, 1, "abcabcabc");
        let dist = model.distribution("ab").unwrap();
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.find('c').unwrap().count, 3);
        assert_eq!(dist.find('c').unwrap().probability, 1.0);
        assert_eq!(model.generate("ab", 7).unwrap(), "abcabca");
    }

    #[test]
    fn short_corpus_trains_nothing() {
        let mut model = trained(3, 1, "ab");
        assert!(model.is_empty());
        assert_eq!(model.context_count(), 0);
        // The seed fills a window, nothing matches it, so it comes back alone.
        assert_eq!(model.generate("abc", 5).unwrap(), "abc");
    }

    #[test]
    fn too_short_seed_is_flagged() {
        let mut model = trained(3, 1, "ab");
        assert_eq!(
            model.generate("ab", 5).unwrap_err(),
            Error::SeedTooShort {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let corpus = "the quick brown fox jumps over the lazy dog and the quick cat";
        let mut first = trained(3, 99, corpus);
        let mut second = trained(3, 99, corpus);
        assert_eq!(
            first.generate("the", 40).unwrap(),
            second.generate("the", 40).unwrap()
        );
    }

    #[test]
    fn fresh_models_learn_identical_counts() {
        let corpus = "mississippi";
        // Different RNG seeds; training does not touch the random source.
        let first = trained(2, 1, corpus);
        let second = trained(2, 2, corpus);
        assert_eq!(first.context_count(), second.context_count());
        for context in first.contexts() {
            let a = first.distribution(context).unwrap();
            let b = second.distribution(context).unwrap();
            assert_eq!(a.len(), b.len());
            for record in a.iter() {
                assert_eq!(b.find(record.character).unwrap().count, record.count);
            }
        }
    }

    #[test]
    fn training_twice_doubles_every_count() {
        let corpus = "mississippi";
        let once = trained(2, 1, corpus);
        let mut twice = trained(2, 1, corpus);
        twice.train(corpus);
        for context in once.contexts() {
            let single = once.distribution(context).unwrap();
            let double = twice.distribution(context).unwrap();
            assert_eq!(single.len(), double.len());
            for record in single.iter() {
                assert_eq!(
                    double.find(record.character).unwrap().count,
                    record.count * 2
                );
            }
        }
    }

    #[test]
    fn probabilities_are_normalized_for_every_context() {
        let model = trained(2, 5, "she sells seashells by the seashore");
        assert!(!model.is_empty());
        for context in model.contexts() {
            let dist = model.distribution(context).unwrap();
            let sum: f64 = dist.iter().map(|r| r.probability).sum();
            assert!((sum - 1.0).abs() < 1e-9, "context {context:?} sums to {sum}");
            let mut previous = 0.0;
            for record in dist.iter() {
                assert!(record.count >= 1);
                assert!(record.cumulative_probability >= previous);
                previous = record.cumulative_probability;
            }
            assert!((previous - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn unknown_context_stops_generation_early() {
        let mut model = trained(2, 1, "abcd");
        // "cd" never appears as a context, so the output runs out after "d".
        let text = model.generate("ab", 10).unwrap();
        assert_eq!(text, "abcd");
        assert!(text.len() >= 2);
    }

    #[test]
    fn long_seed_is_returned_unchanged() {
        let mut model = trained(2, 1, "abcabc");
        assert_eq!(model.generate("abcdef", 3).unwrap(), "abcdef");
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        let mut model = trained(1, 3, "ααβ");
        let dist = model.distribution("α").unwrap();
        assert_eq!(dist.len(), 2);
        let text = model.generate("α", 4).unwrap();
        assert!(text.starts_with('α'));
        assert!(text.chars().count() <= 4);
    }

    #[test]
    fn dump_lists_every_context_with_its_records() {
        let model = trained(2, 1, "abab");
        let dump = model.to_string();
        assert!(dump.contains("ab : (a 1 1 1)"));
        assert!(dump.contains("ba : (b 1 1 1)"));
        assert_eq!(dump.lines().count(), 2);
    }
}
