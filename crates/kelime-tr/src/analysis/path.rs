// Search paths over the morphotactics graph.

use std::sync::Arc;

use kelime_core::attributes::{AttributeSet, PhoneticAttribute};

use crate::lexicon::DictionaryItem;
use crate::morphotactics::{MorphotacticsGraph, StateId};

use super::stem_generator::StemTransition;

/// One visited state and the input it consumed. Epsilon steps record an
/// empty surface.
#[derive(Debug, Clone)]
pub struct SurfaceMorpheme {
    pub state: StateId,
    pub surface: String,
}

/// A partial analysis: a stem plus the suffix surfaces matched so far.
///
/// Paths never mutate during the search. Advancing a path forks a copy with
/// one more history entry, so sibling branches cannot observe each other.
#[derive(Debug, Clone)]
pub struct SearchPath {
    stem: Arc<StemTransition>,
    /// Consumed part of the input.
    head: String,
    /// Remaining part of the input.
    tail: String,
    current_state: StateId,
    history: Vec<SurfaceMorpheme>,
    attributes: AttributeSet<PhoneticAttribute>,
    terminal: bool,
    contains_derivation: bool,
    contains_suffix_with_surface: bool,
}

impl SearchPath {
    /// The path a stem transition seeds: its surface is consumed, the rest
    /// of the input is the tail.
    pub fn initial(stem: Arc<StemTransition>, tail: &str, graph: &MorphotacticsGraph) -> SearchPath {
        let state = stem.to;
        let terminal = graph.state(state).terminal;
        SearchPath {
            head: stem.surface.clone(),
            tail: tail.to_string(),
            current_state: state,
            history: vec![SurfaceMorpheme { state, surface: stem.surface.clone() }],
            attributes: stem.attributes,
            terminal,
            contains_derivation: false,
            contains_suffix_with_surface: false,
            stem,
        }
    }

    /// Forks this path over a transition whose surface has been realized
    /// and whose resulting attributes have been computed.
    pub fn fork(
        &self,
        to: StateId,
        surface: String,
        attributes: AttributeSet<PhoneticAttribute>,
        graph: &MorphotacticsGraph,
    ) -> SearchPath {
        let target = graph.state(to);
        let mut history = self.history.clone();
        let mut head = self.head.clone();
        head.push_str(&surface);
        let tail = self.tail[surface.len()..].to_string();
        let surfaced = !surface.is_empty();
        history.push(SurfaceMorpheme { state: to, surface });
        SearchPath {
            stem: Arc::clone(&self.stem),
            head,
            tail,
            current_state: to,
            history,
            attributes,
            terminal: target.terminal,
            contains_derivation: self.contains_derivation || target.derivative,
            contains_suffix_with_surface: self.contains_suffix_with_surface || surfaced,
        }
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// State visited just before the current one, if any.
    pub fn previous_state(&self) -> Option<StateId> {
        let len = self.history.len();
        (len >= 2).then(|| self.history[len - 2].state)
    }

    pub fn history(&self) -> &[SurfaceMorpheme] {
        &self.history
    }

    pub fn phonetic_attributes(&self) -> AttributeSet<PhoneticAttribute> {
        self.attributes
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn contains_derivation(&self) -> bool {
        self.contains_derivation
    }

    pub fn contains_suffix_with_surface(&self) -> bool {
        self.contains_suffix_with_surface
    }

    pub fn stem_transition(&self) -> &Arc<StemTransition> {
        &self.stem
    }

    pub fn dictionary_item(&self) -> &Arc<DictionaryItem> {
        &self.stem.item
    }

    /// Human-readable form for diagnostics:
    /// `(kitap_Noun)(kitab:noun_S + a:dat_ST) rem:`
    pub fn describe(&self, graph: &MorphotacticsGraph) -> String {
        let mut out = format!("({})(", self.dictionary_item().id);
        for (i, entry) in self.history.iter().enumerate() {
            if i > 0 {
                out.push_str(" + ");
            }
            if !entry.surface.is_empty() {
                out.push_str(&entry.surface);
                out.push(':');
            }
            out.push_str(graph.state(entry.state).name);
        }
        out.push_str(") rem:");
        out.push_str(&self.tail);
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
