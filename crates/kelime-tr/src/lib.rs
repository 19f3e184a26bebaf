//! Turkish morphological analysis for kelime.
//!
//! Words are analyzed by a wave search over a hand-written morphotactics
//! graph: dictionary items produce stem transitions, the search consumes
//! the rest of the input along suffix transitions, and every path that
//! ends on a terminal state with nothing left is a reading.
//!
//! # Architecture
//!
//! - [`lexicon`] -- Dictionary items, the text dictionary format, attribute
//!   inference
//! - [`morphotactics`] -- The grammar graph, surface templates, transition
//!   conditions
//! - [`analysis`] -- Stem generation, the surface index, the wave search
//!   and its results
//!
//! The usual entry point is [`TurkishMorphology`]:
//!
//! ```
//! use kelime_tr::TurkishMorphology;
//!
//! let morphology = TurkishMorphology::from_lines(vec!["ev", "kitap"]);
//! let result = morphology.analyze("evlerde").unwrap();
//! assert!(result.is_known());
//! ```

pub mod analysis;
pub mod handle;
pub mod lexicon;
pub mod morphotactics;

pub use analysis::{AnalysisError, SingleAnalysis, WordAnalysis};
pub use handle::TurkishMorphology;
pub use lexicon::{DictionaryItem, LexiconError, RootLexicon};
pub use morphotactics::TurkishMorphotactics;
