// Analysis results.
//
// An accepted search path is distilled into a `SingleAnalysis`: the
// dictionary item plus morpheme/surface pairs, partitioned into groups at
// derivation boundaries. The structural `Nom` and `Pnon` steps carry no
// information once a path is accepted and are dropped.

use std::fmt;
use std::sync::Arc;

use kelime_core::pos::PrimaryPos;

use crate::lexicon::DictionaryItem;
use crate::morphotactics::{Morpheme, MorphotacticsGraph};

use super::path::SearchPath;

/// One morpheme of an analysis and the input it consumed.
#[derive(Debug, Clone)]
pub struct MorphemeData {
    pub morpheme: Arc<Morpheme>,
    pub surface: String,
}

/// One complete reading of a word.
#[derive(Debug, Clone)]
pub struct SingleAnalysis {
    item: Arc<DictionaryItem>,
    morphemes: Vec<MorphemeData>,
    /// Indices into `morphemes` where each group starts. Always begins
    /// with 0.
    group_boundaries: Vec<usize>,
}

impl SingleAnalysis {
    /// Condenses an accepted path. Generated `Dummy` items are replaced by
    /// the item they reference.
    pub fn from_path(path: &SearchPath, graph: &MorphotacticsGraph) -> SingleAnalysis {
        let stem_item = path.dictionary_item();
        let item = match (&stem_item.reference, stem_item.is_dummy()) {
            (Some(reference), true) => Arc::clone(reference),
            _ => Arc::clone(stem_item),
        };

        let mut morphemes = Vec::new();
        let mut group_boundaries = vec![0];
        for (i, entry) in path.history().iter().enumerate() {
            let state = graph.state(entry.state);
            if i > 0
                && entry.surface.is_empty()
                && matches!(state.morpheme.id.as_str(), "Nom" | "Pnon")
            {
                continue;
            }
            if i > 0 && state.derivative {
                group_boundaries.push(morphemes.len());
            }
            morphemes.push(MorphemeData {
                morpheme: Arc::clone(&state.morpheme),
                surface: entry.surface.clone(),
            });
        }
        SingleAnalysis { item, morphemes, group_boundaries }
    }

    pub fn dictionary_item(&self) -> &Arc<DictionaryItem> {
        &self.item
    }

    pub fn morphemes(&self) -> &[MorphemeData] {
        &self.morphemes
    }

    /// The matched stem surface.
    pub fn stem(&self) -> &str {
        self.morphemes.first().map(|m| m.surface.as_str()).unwrap_or("")
    }

    /// Everything after the stem.
    pub fn ending(&self) -> String {
        self.morphemes.iter().skip(1).map(|m| m.surface.as_str()).collect()
    }

    /// The whole matched surface.
    pub fn surface_form(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    pub fn group_count(&self) -> usize {
        self.group_boundaries.len()
    }

    /// Morphemes of one group; group 0 starts at the stem.
    pub fn group(&self, index: usize) -> &[MorphemeData] {
        let start = self.group_boundaries[index];
        let end = self
            .group_boundaries
            .get(index + 1)
            .copied()
            .unwrap_or(self.morphemes.len());
        &self.morphemes[start..end]
    }

    pub fn contains_morpheme(&self, id: &str) -> bool {
        self.morphemes.iter().any(|m| m.morpheme.id == id)
    }

    /// Part of speech of the reading: the last morpheme that carries one,
    /// so derivations win over the item's own class.
    pub fn pos(&self) -> PrimaryPos {
        self.morphemes
            .iter()
            .rev()
            .find_map(|m| m.morpheme.pos)
            .unwrap_or(self.item.primary_pos)
    }
}

impl fmt::Display for SingleAnalysis {
    /// `[kitap:Noun] kitab:Noun+A3sg` with `|` between derivation groups.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}", self.item.lemma, self.item.primary_pos)?;
        if self.item.secondary_pos != kelime_core::pos::SecondaryPos::None {
            write!(f, ",{}", self.item.secondary_pos)?;
        }
        write!(f, "] ")?;
        for group in 0..self.group_count() {
            if group > 0 {
                write!(f, "|")?;
            }
            for (i, m) in self.group(group).iter().enumerate() {
                if i > 0 {
                    write!(f, "+")?;
                }
                if m.surface.is_empty() {
                    write!(f, "{}", m.morpheme.id)?;
                } else {
                    write!(f, "{}:{}", m.surface, m.morpheme.id)?;
                }
            }
        }
        Ok(())
    }
}

/// All readings of one input word.
#[derive(Debug, Clone)]
pub struct WordAnalysis {
    input: String,
    normalized: String,
    analyses: Vec<SingleAnalysis>,
}

impl WordAnalysis {
    pub fn new(input: String, normalized: String, analyses: Vec<SingleAnalysis>) -> Self {
        WordAnalysis { input, normalized, analyses }
    }

    /// The word as given.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The lowercased form the search ran on.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn analyses(&self) -> &[SingleAnalysis] {
        &self.analyses
    }

    pub fn is_known(&self) -> bool {
        !self.analyses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SingleAnalysis> {
        self.analyses.iter()
    }
}

impl<'a> IntoIterator for &'a WordAnalysis {
    type Item = &'a SingleAnalysis;
    type IntoIter = std::slice::Iter<'a, SingleAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.analyses.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
//
// End-to-end formatting is covered by the integration tests; these pin the
// group bookkeeping on hand-built paths.

#[cfg(test)]
mod tests {
    use super::*;
    use kelime_core::attributes::AttributeSet;
    use kelime_core::phonetics;
    use kelime_core::pos::SecondaryPos;

    use crate::analysis::stem_generator::StemTransition;
    use crate::morphotactics::{MorphotacticsGraph, StateId};

    struct Fixture {
        graph: MorphotacticsGraph,
        noun_s: StateId,
        a3sg_s: StateId,
        pnon_s: StateId,
        nom_st: StateId,
        dim_s: StateId,
    }

    fn fixture() -> Fixture {
        let mut graph = MorphotacticsGraph::new();
        let noun = Morpheme::with_pos("Noun", "Noun", PrimaryPos::Noun);
        let a3sg = Morpheme::new("ThirdPersonSingular", "A3sg");
        let pnon = Morpheme::new("NoPossession", "Pnon");
        let nom = Morpheme::new("Nominal", "Nom");
        let dim = Morpheme::derivational("Diminutive", "Dim");
        let noun_s = graph.non_terminal("noun_S", &noun);
        let a3sg_s = graph.non_terminal("a3sg_S", &a3sg);
        let pnon_s = graph.non_terminal("pnon_S", &pnon);
        let nom_st = graph.terminal("nom_ST", &nom);
        let dim_s = graph.derivative("dim_S", &dim);
        Fixture { graph, noun_s, a3sg_s, pnon_s, nom_st, dim_s }
    }

    fn stem(fx: &Fixture, line: &str) -> SearchPath {
        let item = Arc::new(crate::lexicon::loader::parse_line(line).unwrap());
        let surface = item.root.clone();
        let attributes = phonetics::word_attributes(&surface);
        let stem = Arc::new(StemTransition { surface, item, attributes, to: fx.noun_s });
        SearchPath::initial(stem, "", &fx.graph)
    }

    fn step(fx: &Fixture, path: &SearchPath, to: StateId, surface: &str) -> SearchPath {
        path.fork(to, surface.to_string(), path.phonetic_attributes(), &fx.graph)
    }

    #[test]
    fn test_nom_pnon_are_dropped() {
        let fx = fixture();
        let path = stem(&fx, "ev");
        let path = step(&fx, &path, fx.a3sg_s, "");
        let path = step(&fx, &path, fx.pnon_s, "");
        let path = step(&fx, &path, fx.nom_st, "");
        let analysis = SingleAnalysis::from_path(&path, &fx.graph);
        assert_eq!(analysis.morphemes().len(), 2);
        assert_eq!(analysis.to_string(), "[ev:Noun] ev:Noun+A3sg");
        assert_eq!(analysis.group_count(), 1);
        assert_eq!(analysis.pos(), PrimaryPos::Noun);
    }

    #[test]
    fn test_derivation_starts_a_group() {
        let fx = fixture();
        let path = stem(&fx, "ev");
        let path = step(&fx, &path, fx.a3sg_s, "");
        let path = step(&fx, &path, fx.pnon_s, "");
        let path = step(&fx, &path, fx.nom_st, "");
        let path = step(&fx, &path, fx.dim_s, "cik");
        let path = step(&fx, &path, fx.a3sg_s, "");
        let analysis = SingleAnalysis::from_path(&path, &fx.graph);
        assert_eq!(analysis.group_count(), 2);
        assert_eq!(analysis.to_string(), "[ev:Noun] ev:Noun+A3sg|cik:Dim+A3sg");
        assert_eq!(analysis.stem(), "ev");
        assert_eq!(analysis.ending(), "cik");
        assert_eq!(analysis.surface_form(), "evcik");
    }

    #[test]
    fn test_dummy_item_resolves_to_reference() {
        let fx = fixture();
        let visible = Arc::new(
            crate::lexicon::loader::parse_line("zeytinyağı [P:Noun; A:CompoundP3sg]").unwrap(),
        );
        let mut bare = crate::lexicon::DictionaryItem::new(
            "zeytinyağ",
            "zeytinyağ",
            PrimaryPos::Noun,
            SecondaryPos::None,
            AttributeSet::from_slice(&[
                kelime_core::attributes::RootAttribute::CompoundP3sgRoot,
                kelime_core::attributes::RootAttribute::Dummy,
            ]),
        );
        bare.reference = Some(Arc::clone(&visible));
        let bare = Arc::new(bare);
        let stem = Arc::new(StemTransition {
            surface: bare.root.clone(),
            item: bare,
            attributes: phonetics::word_attributes("zeytinyağ"),
            to: fx.noun_s,
        });
        let path = SearchPath::initial(stem, "", &fx.graph);
        let analysis = SingleAnalysis::from_path(&path, &fx.graph);
        assert_eq!(analysis.dictionary_item().id, "zeytinyağı_Noun");
    }

    #[test]
    fn test_word_analysis_iteration() {
        let fx = fixture();
        let path = stem(&fx, "ev");
        let path = step(&fx, &path, fx.nom_st, "");
        let single = SingleAnalysis::from_path(&path, &fx.graph);
        let word = WordAnalysis::new("Ev".to_string(), "ev".to_string(), vec![single]);
        assert!(word.is_known());
        assert_eq!(word.len(), 1);
        assert_eq!(word.input(), "Ev");
        assert_eq!(word.normalized(), "ev");
        assert_eq!(word.iter().count(), 1);
    }
}
