// Search tracing.
//
// The search loop reports its decisions to a sink. The default sink does
// nothing and costs nothing; `AnalysisTrace` records a step-by-step report
// for debugging dictionaries and the grammar.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::morphotactics::{MorphotacticsGraph, SuffixTransition};

use super::path::SearchPath;
use super::result::SingleAnalysis;
use super::stem_generator::StemTransition;

/// Why a transition did not apply to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason<'a> {
    /// The input is consumed but the transition demands a surface.
    EmptySurfaceExpected,
    /// The realized surface is not a prefix of the remaining input.
    SurfaceMismatch(&'a str),
    /// The transition condition failed.
    ConditionFailed,
}

/// Observer of one search run. All methods default to no-ops.
pub trait TraceSink {
    fn begin(&mut self, _input: &str) {}
    fn stem_candidates(&mut self, _candidates: &[Arc<StemTransition>]) {}
    fn path_spawned(&mut self, _path: &SearchPath, _graph: &MorphotacticsGraph) {}
    fn transition_rejected(
        &mut self,
        _path: &SearchPath,
        _transition: &SuffixTransition,
        _graph: &MorphotacticsGraph,
        _reason: RejectReason<'_>,
    ) {
    }
    fn path_dead_end(&mut self, _path: &SearchPath, _graph: &MorphotacticsGraph) {}
    fn path_accepted(&mut self, _path: &SearchPath, _graph: &MorphotacticsGraph) {}
    fn result(&mut self, _analysis: &SingleAnalysis) {}
}

/// The silent sink used on the regular analysis path.
pub struct NoTrace;

impl TraceSink for NoTrace {}

/// Records a textual report of the whole search.
#[derive(Default)]
pub struct AnalysisTrace {
    lines: Vec<String>,
}

impl AnalysisTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = writeln!(out, "{line}");
        }
        out
    }
}

impl TraceSink for AnalysisTrace {
    fn begin(&mut self, input: &str) {
        self.lines.push(format!("input: {input}"));
    }

    fn stem_candidates(&mut self, candidates: &[Arc<StemTransition>]) {
        self.lines.push(format!("stem candidates: {}", candidates.len()));
        for c in candidates {
            self.lines.push(format!("  {c}"));
        }
    }

    fn path_spawned(&mut self, path: &SearchPath, graph: &MorphotacticsGraph) {
        self.lines.push(format!("spawn {}", path.describe(graph)));
    }

    fn transition_rejected(
        &mut self,
        path: &SearchPath,
        transition: &SuffixTransition,
        graph: &MorphotacticsGraph,
        reason: RejectReason<'_>,
    ) {
        let to = graph.state(transition.to).name;
        let what = match reason {
            RejectReason::EmptySurfaceExpected => "no input left".to_string(),
            RejectReason::SurfaceMismatch(surface) => format!("surface `{surface}` mismatch"),
            RejectReason::ConditionFailed => "condition failed".to_string(),
        };
        self.lines
            .push(format!("reject {} -[{}]-> {to}: {what}", path.describe(graph), transition.template));
    }

    fn path_dead_end(&mut self, path: &SearchPath, graph: &MorphotacticsGraph) {
        self.lines.push(format!("dead end {}", path.describe(graph)));
    }

    fn path_accepted(&mut self, path: &SearchPath, graph: &MorphotacticsGraph) {
        self.lines.push(format!("accept {}", path.describe(graph)));
    }

    fn result(&mut self, analysis: &SingleAnalysis) {
        self.lines.push(format!("result {analysis}"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
