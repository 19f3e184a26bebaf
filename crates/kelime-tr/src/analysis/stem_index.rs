// Stem transition index.
//
// Maps stem surfaces to their transitions. Most surfaces carry exactly one
// transition, so a surface is promoted from a single-entry map to a
// multi-entry map only on its first collision. A per-item map supports
// removal without scanning.
//
// The whole index sits behind one read-write lock: lookups take shared
// read access, dictionary mutation takes exclusive write access, and a
// bulk build constructs the maps before the lock exists.

use std::sync::Arc;

use hashbrown::HashMap;
use log::warn;
use parking_lot::RwLock;

use crate::lexicon::{DictionaryItem, LexiconError, RootLexicon};
use crate::morphotactics::TurkishMorphotactics;

use super::stem_generator::{self, StemTransition};

#[derive(Debug, Default)]
struct IndexMaps {
    single: HashMap<String, Arc<StemTransition>>,
    multi: HashMap<String, Vec<Arc<StemTransition>>>,
    by_item: HashMap<String, Vec<Arc<StemTransition>>>,
}

impl IndexMaps {
    fn add(&mut self, transition: Arc<StemTransition>) {
        let surface = transition.surface.clone();
        if let Some(bucket) = self.multi.get_mut(&surface) {
            bucket.push(Arc::clone(&transition));
        } else if let Some(existing) = self.single.remove(&surface) {
            self.multi.insert(surface, vec![existing, Arc::clone(&transition)]);
        } else {
            self.single.insert(surface, Arc::clone(&transition));
        }
        self.by_item.entry(transition.item.id.clone()).or_default().push(transition);
    }

    fn remove_item(&mut self, id: &str) {
        let Some(transitions) = self.by_item.remove(id) else {
            return;
        };
        for transition in transitions {
            let surface = &transition.surface;
            if let Some(bucket) = self.multi.get_mut(surface) {
                bucket.retain(|t| !Arc::ptr_eq(t, &transition));
                match bucket.len() {
                    0 => {
                        self.multi.remove(surface);
                    }
                    1 => {
                        if let Some(last) = self.multi.remove(surface).and_then(|mut b| b.pop()) {
                            self.single.insert(surface.clone(), last);
                        }
                    }
                    _ => {}
                }
            } else if self.single.get(surface).is_some_and(|t| Arc::ptr_eq(t, &transition)) {
                self.single.remove(surface);
            }
        }
    }

    fn matches(&self, surface: &str) -> &[Arc<StemTransition>] {
        if let Some(bucket) = self.multi.get(surface) {
            return bucket;
        }
        if let Some(single) = self.single.get(surface) {
            return std::slice::from_ref(single);
        }
        &[]
    }

    fn len(&self) -> usize {
        self.single.len() + self.multi.values().map(Vec::len).sum::<usize>()
    }
}

/// Surface-indexed stem transitions of the whole lexicon.
pub struct StemTransitionIndex {
    morphotactics: Arc<TurkishMorphotactics>,
    maps: RwLock<IndexMaps>,
}

impl StemTransitionIndex {
    /// Indexes every item of the lexicon. Items whose stems cannot be
    /// generated are logged and skipped.
    pub fn build(lexicon: &RootLexicon, morphotactics: Arc<TurkishMorphotactics>) -> Self {
        let mut maps = IndexMaps::default();
        for item in lexicon.iter() {
            match stem_generator::generate(item, &morphotactics) {
                Ok(transitions) => {
                    for t in transitions {
                        maps.add(t);
                    }
                }
                Err(e) => warn!("cannot index `{}`: {e}", item.id),
            }
        }
        StemTransitionIndex { morphotactics, maps: RwLock::new(maps) }
    }

    /// Generates and indexes the stems of one item.
    pub fn add_item(&self, item: &Arc<DictionaryItem>) -> Result<(), LexiconError> {
        let transitions = stem_generator::generate(item, &self.morphotactics)?;
        let mut maps = self.maps.write();
        for t in transitions {
            maps.add(t);
        }
        Ok(())
    }

    /// Drops every transition generated from the item with the given id.
    pub fn remove_item(&self, id: &str) {
        self.maps.write().remove_item(id);
    }

    /// Transitions whose surface equals the given stem.
    pub fn matches(&self, surface: &str) -> Vec<Arc<StemTransition>> {
        self.maps.read().matches(surface).to_vec()
    }

    /// Transitions whose surface is a non-empty prefix of the input,
    /// shortest first. The lock is taken once for all prefix lengths.
    pub fn prefix_matches(&self, input: &str) -> Vec<Arc<StemTransition>> {
        let maps = self.maps.read();
        let mut result = Vec::new();
        let ends = input.char_indices().map(|(i, _)| i).skip(1).chain([input.len()]);
        for end in ends {
            result.extend_from_slice(maps.matches(&input[..end]));
        }
        result
    }

    /// Transitions generated from one item.
    pub fn item_matches(&self, id: &str) -> Vec<Arc<StemTransition>> {
        self.maps.read().by_item.get(id).cloned().unwrap_or_default()
    }

    pub fn transition_count(&self) -> usize {
        self.maps.read().len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader;

    fn index_of(lines: Vec<&str>) -> StemTransitionIndex {
        let lexicon = loader::load_lines(lines);
        StemTransitionIndex::build(&lexicon, Arc::new(TurkishMorphotactics::new()))
    }

    #[test]
    fn test_build_indexes_all_stems() {
        let index = index_of(vec!["ev", "kitap"]);
        // ev, kitap, kitab
        assert_eq!(index.transition_count(), 3);
        assert_eq!(index.matches("ev").len(), 1);
        assert_eq!(index.matches("kitap").len(), 1);
        assert_eq!(index.matches("kitab").len(), 1);
        assert!(index.matches("kita").is_empty());
    }

    #[test]
    fn test_colliding_surfaces_share_a_bucket() {
        // noun `yüz` (face), verb `yüz` (swim): same surface, two items
        let index = index_of(vec!["yüz [P:Noun; A:NoVoicing]", "yüz [P:Verb; Index:1]"]);
        let matched = index.matches("yüz");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_prefix_matches_walks_all_lengths() {
        let index = index_of(vec!["ev", "evre"]);
        let matched = index.prefix_matches("evrelerde");
        let surfaces: Vec<&str> = matched.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["ev", "evre"]);
    }

    #[test]
    fn test_prefix_matches_with_multibyte_input() {
        let index = index_of(vec!["ağız [A:LastVowelDrop]"]);
        let matched = index.prefix_matches("ağızdan");
        let surfaces: Vec<&str> = matched.iter().map(|t| t.surface.as_str()).collect();
        // modified stem `ağz` and original `ağız` are both prefixes
        assert_eq!(surfaces, vec!["ağz", "ağız"]);
    }

    #[test]
    fn test_add_and_remove_item() {
        let index = index_of(vec!["ev"]);
        let item = Arc::new(loader::parse_line("kitap").unwrap());
        index.add_item(&item).unwrap();
        assert_eq!(index.transition_count(), 3);
        assert_eq!(index.prefix_matches("kitaba").len(), 2);

        index.remove_item("kitap_Noun");
        assert_eq!(index.transition_count(), 1);
        assert!(index.matches("kitap").is_empty());
        assert!(index.matches("kitab").is_empty());
        // unrelated entries survive
        assert_eq!(index.matches("ev").len(), 1);
    }

    #[test]
    fn test_remove_demotes_multi_bucket() {
        let index = index_of(vec!["yüz [P:Noun; A:NoVoicing]", "yüz [P:Verb; Index:1]"]);
        index.remove_item("yüz_Verb_1");
        let matched = index.matches("yüz");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].item.id, "yüz_Noun");
    }

    #[test]
    fn test_add_invalid_item_is_an_error() {
        let index = index_of(vec![]);
        let item = Arc::new(loader::parse_line("sanat [A:Voicing]").unwrap());
        assert!(index.add_item(&item).is_err());
        assert_eq!(index.transition_count(), 0);
    }
}
