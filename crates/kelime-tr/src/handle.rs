// The user-facing morphology object.
//
// Owns the grammar, the lexicon and the stem index, and normalizes input
// before handing it to the analyzer. The lexicon can be changed at runtime;
// the index takes its own lock, so analysis keeps running while items are
// added or removed.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

use kelime_core::alphabet;

use crate::analysis::{
    AnalysisError, AnalysisTrace, RuleBasedAnalyzer, StemTransitionIndex, WordAnalysis,
};
use crate::lexicon::{DictionaryItem, LexiconError, RootLexicon, loader};
use crate::morphotactics::TurkishMorphotactics;

/// Turkish morphological analyzer over a root lexicon.
pub struct TurkishMorphology {
    morphotactics: Arc<TurkishMorphotactics>,
    lexicon: RwLock<RootLexicon>,
    index: Arc<StemTransitionIndex>,
    analyzer: RuleBasedAnalyzer,
}

impl TurkishMorphology {
    pub fn builder() -> TurkishMorphologyBuilder {
        TurkishMorphologyBuilder { lexicon: RootLexicon::new() }
    }

    /// Builds from in-memory dictionary lines.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::builder().add_lines(lines).build()
    }

    /// Builds from a dictionary file.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        Ok(Self::builder().add_path(path)?.build())
    }

    /// Analyzes one word. The input is lowercased with Turkish casing
    /// rules; the original form is kept on the result.
    pub fn analyze(&self, word: &str) -> Result<WordAnalysis, AnalysisError> {
        let normalized = alphabet::to_lower(word.trim());
        let analyses = self.analyzer.analyze(&normalized)?;
        Ok(WordAnalysis::new(word.to_string(), normalized, analyses))
    }

    /// Analyzes one word and returns the search report next to the result.
    pub fn analyze_with_trace(
        &self,
        word: &str,
    ) -> Result<(WordAnalysis, String), AnalysisError> {
        let normalized = alphabet::to_lower(word.trim());
        let mut trace = AnalysisTrace::new();
        let analyses = self.analyzer.analyze_traced(&normalized, &mut trace)?;
        let word = WordAnalysis::new(word.to_string(), normalized, analyses);
        Ok((word, trace.report()))
    }

    /// Parses one dictionary line and adds the item to the running
    /// analyzer. Replaces an existing item with the same id.
    pub fn add_item(&self, line: &str) -> Result<Arc<DictionaryItem>, LexiconError> {
        let item = Arc::new(loader::parse_line(line)?);
        let mut lexicon = self.lexicon.write();
        if lexicon.contains_id(&item.id) {
            self.index.remove_item(&item.id);
        }
        self.index.add_item(&item)?;
        lexicon.add(Arc::clone(&item));
        debug!("added item `{}`", item.id);
        Ok(item)
    }

    /// Removes an item and its stem transitions. Returns the removed item.
    pub fn remove_item(&self, id: &str) -> Option<Arc<DictionaryItem>> {
        let removed = self.lexicon.write().remove(id);
        if removed.is_some() {
            self.index.remove_item(id);
            debug!("removed item `{id}`");
        }
        removed
    }

    pub fn item_count(&self) -> usize {
        self.lexicon.read().len()
    }

    pub fn morphotactics(&self) -> &Arc<TurkishMorphotactics> {
        &self.morphotactics
    }

    pub fn index(&self) -> &Arc<StemTransitionIndex> {
        &self.index
    }
}

/// Accumulates dictionary sources, then builds the index once.
pub struct TurkishMorphologyBuilder {
    lexicon: RootLexicon,
}

impl TurkishMorphologyBuilder {
    pub fn add_lines<'a, I>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for item in loader::load_lines(lines).iter() {
            self.lexicon.add(Arc::clone(item));
        }
        self
    }

    pub fn add_path(mut self, path: &Path) -> Result<Self, LexiconError> {
        for item in loader::load_path(path)?.iter() {
            self.lexicon.add(Arc::clone(item));
        }
        Ok(self)
    }

    pub fn build(self) -> TurkishMorphology {
        let morphotactics = Arc::new(TurkishMorphotactics::new());
        let index = Arc::new(StemTransitionIndex::build(&self.lexicon, Arc::clone(&morphotactics)));
        info!(
            "morphology ready: {} items, {} stem transitions",
            self.lexicon.len(),
            index.transition_count()
        );
        let analyzer = RuleBasedAnalyzer::new(Arc::clone(&morphotactics), Arc::clone(&index));
        TurkishMorphology {
            morphotactics,
            lexicon: RwLock::new(self.lexicon),
            index,
            analyzer,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_normalized() {
        let morphology = TurkishMorphology::from_lines(vec!["ev", "ırmak [A:NoVoicing]"]);
        let result = morphology.analyze("EV").unwrap();
        assert_eq!(result.input(), "EV");
        assert_eq!(result.normalized(), "ev");
        assert!(result.is_known());
        // dotless I
        let result = morphology.analyze("IRMAK").unwrap();
        assert_eq!(result.normalized(), "ırmak");
        assert!(result.is_known());
    }

    #[test]
    fn test_unknown_word_is_empty_not_error() {
        let morphology = TurkishMorphology::from_lines(vec!["ev"]);
        let result = morphology.analyze("duvar").unwrap();
        assert!(!result.is_known());
    }

    #[test]
    fn test_add_and_remove_item() {
        let morphology = TurkishMorphology::from_lines(vec!["ev"]);
        assert!(!morphology.analyze("kitap").unwrap().is_known());

        let item = morphology.add_item("kitap").unwrap();
        assert_eq!(item.id, "kitap_Noun");
        assert_eq!(morphology.item_count(), 2);
        assert!(morphology.analyze("kitap").unwrap().is_known());
        assert!(morphology.analyze("kitaba").unwrap().is_known());

        let removed = morphology.remove_item("kitap_Noun");
        assert!(removed.is_some());
        assert_eq!(morphology.item_count(), 1);
        assert!(!morphology.analyze("kitap").unwrap().is_known());
        // other items are untouched
        assert!(morphology.analyze("ev").unwrap().is_known());
    }

    #[test]
    fn test_remove_missing_item() {
        let morphology = TurkishMorphology::from_lines(vec!["ev"]);
        assert!(morphology.remove_item("yok_Noun").is_none());
    }

    #[test]
    fn test_trace_mentions_the_input() {
        let morphology = TurkishMorphology::from_lines(vec!["ev"]);
        let (result, report) = morphology.analyze_with_trace("evler").unwrap();
        assert!(result.is_known());
        assert!(report.contains("input: evler"));
        assert!(report.contains("result"));
    }
}
