// Analysis: stem transitions, the search engine and its results.

pub mod path;
pub mod result;
pub mod search;
pub mod stem_generator;
pub mod stem_index;
pub mod trace;

use thiserror::Error;

pub use path::{SearchPath, SurfaceMorpheme};
pub use result::{MorphemeData, SingleAnalysis, WordAnalysis};
pub use search::RuleBasedAnalyzer;
pub use stem_generator::StemTransition;
pub use stem_index::StemTransitionIndex;
pub use trace::{AnalysisTrace, NoTrace, TraceSink};

/// Errors raised during analysis of a single word.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input contains a character outside the Turkish letter table.
    #[error("input contains foreign character `{ch}`")]
    ForeignCharacter { ch: char },
    /// A harmony vowel could not be realized because the preceding surface
    /// provides no harmony context. Points at a broken dictionary entry.
    #[error("cannot realize template `{template}` entering {state}: no harmony context")]
    SurfaceRealization { template: String, state: &'static str },
}
