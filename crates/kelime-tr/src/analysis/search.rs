// The rule based analyzer: a breadth-first search over the morphotactics
// graph.
//
// Each round advances every live path over the outgoing transitions of its
// current state. A transition applies when its template realizes to a
// prefix of the path's remaining input and its condition holds; applying it
// forks the path. A path whose input is consumed is accepted on a terminal
// state unless its last surface forbids termination.

use std::sync::Arc;

use hashbrown::HashMap;
use kelime_core::alphabet;
use kelime_core::attributes::{AttributeSet, PhoneticAttribute};
use kelime_core::phonetics;
use log::trace;

use crate::morphotactics::{
    MorphotacticsGraph, StateId, SuffixTransition, TemplateToken, TurkishMorphotactics,
};

use super::path::SearchPath;
use super::result::SingleAnalysis;
use super::stem_index::StemTransitionIndex;
use super::trace::{NoTrace, RejectReason, TraceSink};
use super::AnalysisError;

/// Above this many live paths, cyclic branches are pruned.
const PRUNE_THRESHOLD: usize = 30;
/// A pruned path has visited some state more often than this.
const MAX_STATE_REPEAT: usize = 3;

pub struct RuleBasedAnalyzer {
    morphotactics: Arc<TurkishMorphotactics>,
    index: Arc<StemTransitionIndex>,
}

impl RuleBasedAnalyzer {
    pub fn new(morphotactics: Arc<TurkishMorphotactics>, index: Arc<StemTransitionIndex>) -> Self {
        RuleBasedAnalyzer { morphotactics, index }
    }

    pub fn index(&self) -> &Arc<StemTransitionIndex> {
        &self.index
    }

    /// Analyzes a lowercase word. Results follow stem candidate order, so
    /// analyses over shorter stems come first.
    pub fn analyze(&self, input: &str) -> Result<Vec<SingleAnalysis>, AnalysisError> {
        self.analyze_traced(input, &mut NoTrace)
    }

    /// Analysis with every search decision reported to the sink.
    pub fn analyze_traced(
        &self,
        input: &str,
        sink: &mut dyn TraceSink,
    ) -> Result<Vec<SingleAnalysis>, AnalysisError> {
        if let Some(ch) = alphabet::first_foreign_char(input) {
            return Err(AnalysisError::ForeignCharacter { ch });
        }
        let graph = self.morphotactics.graph();
        sink.begin(input);

        let candidates = self.index.prefix_matches(input);
        sink.stem_candidates(&candidates);

        let mut paths: Vec<SearchPath> = candidates
            .into_iter()
            .map(|stem| {
                let tail = &input[stem.surface.len()..];
                SearchPath::initial(stem, tail, graph)
            })
            .collect();
        for p in &paths {
            sink.path_spawned(p, graph);
        }

        let mut results = Vec::new();
        while !paths.is_empty() {
            if paths.len() > PRUNE_THRESHOLD {
                prune_cyclic(&mut paths);
            }
            let mut next = Vec::new();
            for path in &paths {
                if path.tail().is_empty()
                    && path.is_terminal()
                    && !path.phonetic_attributes().contains(PhoneticAttribute::CannotTerminate)
                {
                    sink.path_accepted(path, graph);
                    let analysis = SingleAnalysis::from_path(path, graph);
                    sink.result(&analysis);
                    results.push(analysis);
                    continue;
                }
                let before = next.len();
                self.advance(path, &mut next, sink)?;
                if next.len() == before {
                    sink.path_dead_end(path, graph);
                }
            }
            paths = next;
        }
        Ok(results)
    }

    /// Applies every outgoing transition of the path's state, pushing the
    /// resulting forks.
    fn advance(
        &self,
        path: &SearchPath,
        out: &mut Vec<SearchPath>,
        sink: &mut dyn TraceSink,
    ) -> Result<(), AnalysisError> {
        let graph = self.morphotactics.graph();
        for (_, transition) in graph.outgoing(path.current_state()) {
            if path.tail().is_empty() && transition.has_surface() {
                sink.transition_rejected(path, transition, graph, RejectReason::EmptySurfaceExpected);
                continue;
            }
            let surface = realize_surface(transition, path.phonetic_attributes(), graph)?;
            if !path.tail().starts_with(&surface) {
                sink.transition_rejected(
                    path,
                    transition,
                    graph,
                    RejectReason::SurfaceMismatch(&surface),
                );
                continue;
            }
            if let Some(condition) = &transition.condition
                && !condition.evaluate(path, graph)
            {
                sink.transition_rejected(path, transition, graph, RejectReason::ConditionFailed);
                continue;
            }

            let forked = if transition.has_surface() {
                // When the surface consumes the whole tail no further
                // surface will be realized from these attributes, so the
                // recomputation is skipped.
                let mut attributes = if path.tail() == surface {
                    path.phonetic_attributes()
                } else {
                    phonetics::morphemic_attributes(&surface, path.phonetic_attributes())
                };
                attributes.remove(PhoneticAttribute::CannotTerminate);
                match transition.last_token() {
                    Some(TemplateToken::LastVoiced(_)) => {
                        attributes.insert(PhoneticAttribute::ExpectsConsonant);
                    }
                    Some(TemplateToken::LastNotVoiced(_)) => {
                        attributes.insert(PhoneticAttribute::ExpectsVowel);
                        attributes.insert(PhoneticAttribute::CannotTerminate);
                    }
                    _ => {}
                }
                path.fork(transition.to, surface, attributes, graph)
            } else {
                path.fork(transition.to, String::new(), path.phonetic_attributes(), graph)
            };
            sink.path_spawned(&forked, graph);
            out.push(forked);
        }
        Ok(())
    }
}

/// Realizes a transition's surface template against the attributes of the
/// preceding surface.
pub(crate) fn realize_surface(
    transition: &SuffixTransition,
    previous: AttributeSet<PhoneticAttribute>,
    graph: &MorphotacticsGraph,
) -> Result<String, AnalysisError> {
    use PhoneticAttribute::*;

    let mut out = String::new();
    for (index, token) in transition.tokens.iter().enumerate() {
        let attrs = phonetics::morphemic_attributes(&out, previous);
        match *token {
            TemplateToken::Letter(c)
            | TemplateToken::LastVoiced(c)
            | TemplateToken::LastNotVoiced(c) => out.push(c),
            TemplateToken::Append(c) => {
                if attrs.contains(LastLetterVowel) {
                    out.push(c);
                }
            }
            TemplateToken::DevoiceFirst(c) => {
                out.push(if attrs.contains(LastLetterVoiceless) {
                    alphabet::devoice(c)
                } else {
                    c
                });
            }
            TemplateToken::VowelA { .. } => {
                // a template-initial harmony vowel elides after a vowel
                if index == 0 && previous.contains(LastLetterVowel) {
                    continue;
                }
                if attrs.contains(LastVowelBack) {
                    out.push('a');
                } else if attrs.contains(LastVowelFrontal) {
                    out.push('e');
                } else {
                    return Err(realization_error(transition, graph));
                }
            }
            TemplateToken::VowelI { .. } => {
                if index == 0 && previous.contains(LastLetterVowel) {
                    continue;
                }
                let back = attrs.contains(LastVowelBack);
                let frontal = attrs.contains(LastVowelFrontal);
                let rounded = attrs.contains(LastVowelRounded);
                out.push(match (back, frontal, rounded) {
                    (true, _, false) => 'ı',
                    (true, _, true) => 'u',
                    (_, true, false) => 'i',
                    (_, true, true) => 'ü',
                    _ => return Err(realization_error(transition, graph)),
                });
            }
        }
    }
    Ok(out)
}

fn realization_error(transition: &SuffixTransition, graph: &MorphotacticsGraph) -> AnalysisError {
    AnalysisError::SurfaceRealization {
        template: transition.template.clone(),
        state: graph.state(transition.to).name,
    }
}

/// Drops paths that revisit any state more than [`MAX_STATE_REPEAT`] times.
/// Suffix cycles in the grammar otherwise let garbage input breed paths
/// without bound.
fn prune_cyclic(paths: &mut Vec<SearchPath>) {
    let before = paths.len();
    paths.retain(|path| {
        let mut visits: HashMap<StateId, usize> = HashMap::new();
        for entry in path.history() {
            let count = visits.entry(entry.state).or_insert(0);
            *count += 1;
            if *count > MAX_STATE_REPEAT {
                return false;
            }
        }
        true
    });
    if paths.len() < before {
        trace!("pruned {} cyclic paths", before - paths.len());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
