// Morphotactics: morphemes, states and suffix transitions.
//
// The grammar is a directed graph. States carry a morpheme and terminality;
// transitions carry a surface template and an optional condition. States and
// transitions live in arenas owned by the graph and are addressed by index
// newtypes, so a transition is a pair of `u32`s plus its template and
// condition, and path objects stay small.

pub mod conditions;
pub mod template;
pub mod turkish;

use std::fmt;
use std::sync::Arc;

use kelime_core::alphabet;
use kelime_core::attributes::PhoneticAttribute;
use kelime_core::pos::PrimaryPos;

pub use conditions::Condition;
pub use template::{TemplateToken, tokenize};
pub use turkish::TurkishMorphotactics;

/// A morpheme: the label a state attaches to the surfaces it consumes.
///
/// Morphemes are interned as `Arc` and compared by id. Several states may
/// share one morpheme (`a3sg` in the noun and pronoun paradigms).
#[derive(Debug)]
pub struct Morpheme {
    pub id: String,
    pub name: String,
    pub pos: Option<PrimaryPos>,
    pub derivational: bool,
}

impl Morpheme {
    pub fn new(name: &str, id: &str) -> Arc<Morpheme> {
        Arc::new(Morpheme {
            id: id.to_string(),
            name: name.to_string(),
            pos: None,
            derivational: false,
        })
    }

    pub fn with_pos(name: &str, id: &str, pos: PrimaryPos) -> Arc<Morpheme> {
        Arc::new(Morpheme {
            id: id.to_string(),
            name: name.to_string(),
            pos: Some(pos),
            derivational: false,
        })
    }

    pub fn derivational(name: &str, id: &str) -> Arc<Morpheme> {
        Arc::new(Morpheme {
            id: id.to_string(),
            name: name.to_string(),
            pos: None,
            derivational: true,
        })
    }
}

impl PartialEq for Morpheme {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Morpheme {}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Index of a state in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) u32);

/// Index of a transition in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub(crate) u32);

/// A node of the morphotactics graph.
#[derive(Debug)]
pub struct MorphemeState {
    /// Unique state name, e.g. `noun_S`, `nom_ST`.
    pub name: &'static str,
    pub morpheme: Arc<Morpheme>,
    /// A search path may be accepted while resting on a terminal state.
    pub terminal: bool,
    /// Crossing into a derivative state starts a new morpheme group.
    pub derivative: bool,
    /// Outgoing transitions in insertion order. Order is part of the
    /// grammar: result ordering and pruning depend on it.
    pub outgoing: Vec<TransitionId>,
}

/// An edge of the morphotactics graph.
#[derive(Debug, Clone)]
pub struct SuffixTransition {
    pub from: StateId,
    pub to: StateId,
    /// The template text, kept for diagnostics.
    pub template: String,
    pub tokens: Vec<TemplateToken>,
    pub condition: Option<Condition>,
}

impl SuffixTransition {
    /// True when the transition consumes input (non-epsilon).
    pub fn has_surface(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn last_token(&self) -> Option<&TemplateToken> {
        self.tokens.last()
    }
}

/// Arena-backed morphotactics graph.
#[derive(Debug, Default)]
pub struct MorphotacticsGraph {
    states: Vec<MorphemeState>,
    transitions: Vec<SuffixTransition>,
}

impl MorphotacticsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_state(
        &mut self,
        name: &'static str,
        morpheme: &Arc<Morpheme>,
        terminal: bool,
        derivative: bool,
    ) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(MorphemeState {
            name,
            morpheme: Arc::clone(morpheme),
            terminal,
            derivative,
            outgoing: Vec::new(),
        });
        id
    }

    /// A non-terminal state.
    pub fn non_terminal(&mut self, name: &'static str, morpheme: &Arc<Morpheme>) -> StateId {
        self.add_state(name, morpheme, false, false)
    }

    /// A terminal state; paths may be accepted here.
    pub fn terminal(&mut self, name: &'static str, morpheme: &Arc<Morpheme>) -> StateId {
        self.add_state(name, morpheme, true, false)
    }

    /// A non-terminal derivative state; entering it closes a morpheme group.
    pub fn derivative(&mut self, name: &'static str, morpheme: &Arc<Morpheme>) -> StateId {
        self.add_state(name, morpheme, false, true)
    }

    /// Adds a transition with a surface template.
    ///
    /// Two conditions follow from the template itself and are conjoined
    /// with the explicit one: a template realized with a leading consonant
    /// cannot attach where a vowel is demanded, and one realized with a
    /// leading vowel cannot attach where a consonant is demanded.
    pub fn add(&mut self, from: StateId, to: StateId, template: &str, condition: Option<Condition>) -> TransitionId {
        let mut condition = condition;
        if let Some(auto) = template_condition(template) {
            condition = Some(match condition {
                Some(c) => c.and(auto),
                None => auto,
            });
        }
        self.push_transition(SuffixTransition {
            from,
            to,
            template: template.to_string(),
            tokens: tokenize(template),
            condition,
        })
    }

    /// Adds an epsilon transition.
    pub fn add_empty(&mut self, from: StateId, to: StateId, condition: Option<Condition>) -> TransitionId {
        self.push_transition(SuffixTransition {
            from,
            to,
            template: String::new(),
            tokens: Vec::new(),
            condition,
        })
    }

    fn push_transition(&mut self, transition: SuffixTransition) -> TransitionId {
        let id = TransitionId(self.transitions.len() as u32);
        let from = transition.from;
        self.transitions.push(transition);
        self.states[from.0 as usize].outgoing.push(id);
        id
    }

    /// Copies the outgoing transitions of `from` onto `onto`, skipping those
    /// whose target state carries one of the excluded morphemes. Used for
    /// root states that share a paradigm except for a few connections.
    pub fn copy_outgoing(&mut self, from: StateId, onto: StateId, exclude: &[&Arc<Morpheme>]) {
        let copied: Vec<SuffixTransition> = self
            .state(from)
            .outgoing
            .iter()
            .map(|&t| self.transition(t).clone())
            .filter(|t| !exclude.iter().any(|m| self.state(t.to).morpheme.id == m.id))
            .collect();
        for mut t in copied {
            t.from = onto;
            self.push_transition(t);
        }
    }

    pub fn state(&self, id: StateId) -> &MorphemeState {
        &self.states[id.0 as usize]
    }

    pub fn transition(&self, id: TransitionId) -> &SuffixTransition {
        &self.transitions[id.0 as usize]
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Outgoing transitions of a state in insertion order.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = (TransitionId, &SuffixTransition)> {
        self.state(id).outgoing.iter().map(|&t| (t, self.transition(t)))
    }
}

/// The implicit phonetic condition carried by a surface template.
fn template_condition(template: &str) -> Option<Condition> {
    let lower = alphabet::to_lower(template);
    let mut chars = lower.chars();
    let first = chars.next()?;
    // `+yA`-style templates surface with a vowel when the optional letter
    // is dropped; the letter after the optional one decides.
    if first == '+' {
        let _optional = chars.next();
        return if chars.next().is_some_and(alphabet::is_vowel) {
            Some(Condition::not_have(PhoneticAttribute::ExpectsConsonant))
        } else {
            Some(Condition::not_have(PhoneticAttribute::ExpectsVowel))
        };
    }
    if first == '>' || !alphabet::is_vowel(first) {
        return Some(Condition::not_have(PhoneticAttribute::ExpectsVowel));
    }
    Some(Condition::not_have(PhoneticAttribute::ExpectsConsonant))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
