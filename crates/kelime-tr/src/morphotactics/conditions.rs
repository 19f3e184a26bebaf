// Transition conditions.
//
// A condition is a predicate over the search path that reaches a transition:
// the dictionary item it started from, the phonetic attributes of its last
// surface, and the morpheme states it has visited. Conditions compose with
// `and` / `or` / `not`.
//
// History-scanning predicates treat the path as morpheme groups: a group
// ends where a derivative state was crossed, and the entry at index 0 is
// the stem itself.

use std::sync::Arc;

use kelime_core::attributes::{PhoneticAttribute, RootAttribute};
use kelime_core::pos::SecondaryPos;

use crate::analysis::path::SearchPath;

use super::{Morpheme, MorphotacticsGraph, StateId};

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Last surface of the path carries the attribute.
    HasPhoneticAttribute(PhoneticAttribute),
    /// Dictionary item of the path carries the attribute.
    HasRootAttribute(RootAttribute),
    SecondaryPosIs(SecondaryPos),
    /// Dictionary item id comparisons.
    RootIs(&'static str),
    RootIsAny(Vec<&'static str>),
    RootIsNone(Vec<&'static str>),
    /// Stem surface comparisons, for items with rewritten root surfaces.
    RootSurfaceIs(&'static str),
    RootSurfaceIsAny(Vec<&'static str>),
    /// Input remains to be consumed.
    HasTail,
    /// Some suffix so far has a non-empty surface.
    HasAnySuffixSurface,
    /// No surfaced suffix since the last derivation boundary.
    NoSurfaceAfterDerivation,
    /// The current morpheme group visited one of the states.
    CurrentGroupContainsAny(Vec<StateId>),
    /// Any visited state carries one of the morphemes.
    ContainsMorpheme(Vec<Arc<Morpheme>>),
    PreviousStateIs(StateId),
    PreviousStateIsNot(StateId),
    /// The most recent derivative state crossed is the given one.
    LastDerivationIs(StateId),
    Not(Box<Condition>),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    pub fn has(attr: PhoneticAttribute) -> Condition {
        Condition::HasPhoneticAttribute(attr)
    }

    pub fn not_have(attr: PhoneticAttribute) -> Condition {
        Condition::has(attr).not()
    }

    pub fn has_root_attribute(attr: RootAttribute) -> Condition {
        Condition::HasRootAttribute(attr)
    }

    pub fn not_have_root_attribute(attr: RootAttribute) -> Condition {
        Condition::has_root_attribute(attr).not()
    }

    pub fn not(self) -> Condition {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }

    pub fn and(self, other: Condition) -> Condition {
        match (self, other) {
            (Condition::And(mut left), Condition::And(right)) => {
                left.extend(right);
                Condition::And(left)
            }
            (Condition::And(mut left), right) => {
                left.push(right);
                Condition::And(left)
            }
            (left, Condition::And(mut right)) => {
                right.insert(0, left);
                Condition::And(right)
            }
            (left, right) => Condition::And(vec![left, right]),
        }
    }

    pub fn and_not(self, other: Condition) -> Condition {
        self.and(other.not())
    }

    pub fn or(self, other: Condition) -> Condition {
        match (self, other) {
            (Condition::Or(mut left), Condition::Or(right)) => {
                left.extend(right);
                Condition::Or(left)
            }
            (Condition::Or(mut left), right) => {
                left.push(right);
                Condition::Or(left)
            }
            (left, Condition::Or(mut right)) => {
                right.insert(0, left);
                Condition::Or(right)
            }
            (left, right) => Condition::Or(vec![left, right]),
        }
    }

    pub fn evaluate(&self, path: &SearchPath, graph: &MorphotacticsGraph) -> bool {
        match self {
            Condition::HasPhoneticAttribute(a) => path.phonetic_attributes().contains(*a),
            Condition::HasRootAttribute(a) => path.dictionary_item().attributes.contains(*a),
            Condition::SecondaryPosIs(p) => path.dictionary_item().secondary_pos == *p,
            Condition::RootIs(id) => path.dictionary_item().id == *id,
            Condition::RootIsAny(ids) => {
                ids.iter().any(|id| path.dictionary_item().id == *id)
            }
            Condition::RootIsNone(ids) => {
                !ids.iter().any(|id| path.dictionary_item().id == *id)
            }
            Condition::RootSurfaceIs(surface) => path.stem_transition().surface == *surface,
            Condition::RootSurfaceIsAny(surfaces) => {
                surfaces.iter().any(|s| path.stem_transition().surface == *s)
            }
            Condition::HasTail => !path.tail().is_empty(),
            Condition::HasAnySuffixSurface => path.contains_suffix_with_surface(),
            Condition::NoSurfaceAfterDerivation => {
                for entry in path.history().iter().skip(1).rev() {
                    if graph.state(entry.state).derivative {
                        return true;
                    }
                    if !entry.surface.is_empty() {
                        return false;
                    }
                }
                true
            }
            Condition::CurrentGroupContainsAny(states) => {
                for entry in path.history().iter().skip(1).rev() {
                    if states.contains(&entry.state) {
                        return true;
                    }
                    if graph.state(entry.state).derivative {
                        return false;
                    }
                }
                false
            }
            Condition::ContainsMorpheme(morphemes) => path.history().iter().any(|entry| {
                let m = &graph.state(entry.state).morpheme;
                morphemes.iter().any(|candidate| candidate.id == m.id)
            }),
            Condition::PreviousStateIs(state) => path.previous_state() == Some(*state),
            Condition::PreviousStateIsNot(state) => path.previous_state() != Some(*state),
            Condition::LastDerivationIs(state) => {
                for entry in path.history().iter().skip(1).rev() {
                    if graph.state(entry.state).derivative {
                        return entry.state == *state;
                    }
                }
                false
            }
            Condition::Not(inner) => !inner.evaluate(path, graph),
            Condition::And(all) => all.iter().all(|c| c.evaluate(path, graph)),
            Condition::Or(any) => any.iter().any(|c| c.evaluate(path, graph)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
