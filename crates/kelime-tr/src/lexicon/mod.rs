// Dictionary items and the root lexicon.

pub mod loader;

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use kelime_core::attributes::{AttributeSet, RootAttribute};
use kelime_core::pos::{PrimaryPos, SecondaryPos};
use thiserror::Error;

/// Errors raised while building or mutating the lexicon and its derived
/// stem transitions.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("final letter of `{item}` has no voiced counterpart")]
    ImpossibleVoicing { item: String },
    #[error("cannot drop last vowel of `{item}`")]
    ImpossibleVowelDrop { item: String },
    #[error("no special stem rule registered for `{item}`")]
    UnknownSpecialRoot { item: String },
    #[error("malformed dictionary line `{line}`: {reason}")]
    MalformedLine { line: String, reason: String },
    #[error("cannot read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

/// A dictionary entry: lemma, root surface, part of speech and the lexical
/// attributes that drive stem rewriting and suffix selection.
///
/// Items are identified by `id`, generated as
/// `lemma_PrimaryPos[_SecondaryPos][_index]`. Equality and hashing use the
/// id only, so two loads of the same dictionary line compare equal.
#[derive(Debug, Clone)]
pub struct DictionaryItem {
    /// Citation form (`kitap`, `aramak`).
    pub lemma: String,
    /// Analysis root; for verbs the lemma minus the infinitive ending.
    pub root: String,
    /// Pronunciation, used for harmony when it differs from the root.
    pub pronunciation: String,
    pub primary_pos: PrimaryPos,
    pub secondary_pos: SecondaryPos,
    pub attributes: AttributeSet<RootAttribute>,
    /// Disambiguates homonym entries sharing lemma and pos.
    pub index: u32,
    pub id: String,
    /// For generated `Dummy` items, the visible item they stand in for.
    pub reference: Option<Arc<DictionaryItem>>,
}

impl DictionaryItem {
    pub fn new(
        lemma: impl Into<String>,
        root: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: SecondaryPos,
        attributes: AttributeSet<RootAttribute>,
    ) -> Self {
        Self::with_index(lemma, root, primary_pos, secondary_pos, attributes, 0)
    }

    pub fn with_index(
        lemma: impl Into<String>,
        root: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: SecondaryPos,
        attributes: AttributeSet<RootAttribute>,
        index: u32,
    ) -> Self {
        let lemma = lemma.into();
        let root = root.into();
        let id = generate_id(&lemma, primary_pos, secondary_pos, index);
        DictionaryItem {
            pronunciation: root.clone(),
            lemma,
            root,
            primary_pos,
            secondary_pos,
            attributes,
            index,
            id,
            reference: None,
        }
    }

    pub fn has_attribute(&self, attr: RootAttribute) -> bool {
        self.attributes.contains(attr)
    }

    /// True for generated items (`Dummy` compound roots) that should be
    /// replaced by their reference on output.
    pub fn is_dummy(&self) -> bool {
        self.attributes.contains(RootAttribute::Dummy)
    }
}

/// Builds the canonical item id from its identity fields.
pub fn generate_id(
    lemma: &str,
    primary_pos: PrimaryPos,
    secondary_pos: SecondaryPos,
    index: u32,
) -> String {
    let mut id = format!("{}_{}", lemma, primary_pos.short_form());
    if secondary_pos != SecondaryPos::None {
        id.push('_');
        id.push_str(secondary_pos.short_form());
    }
    if index > 0 {
        id.push('_');
        id.push_str(&index.to_string());
    }
    id
}

impl PartialEq for DictionaryItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DictionaryItem {}

impl std::hash::Hash for DictionaryItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// The root lexicon: all dictionary items, addressable by id and by lemma.
#[derive(Debug, Default)]
pub struct RootLexicon {
    by_id: HashMap<String, Arc<DictionaryItem>>,
    by_lemma: HashMap<String, Vec<Arc<DictionaryItem>>>,
}

impl RootLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. An item with the same id replaces the previous one.
    pub fn add(&mut self, item: Arc<DictionaryItem>) {
        if let Some(previous) = self.by_id.insert(item.id.clone(), Arc::clone(&item)) {
            self.detach_lemma(&previous);
        }
        self.by_lemma.entry(item.lemma.clone()).or_default().push(item);
    }

    /// Removes an item by id. Returns the removed item, if present.
    pub fn remove(&mut self, id: &str) -> Option<Arc<DictionaryItem>> {
        let item = self.by_id.remove(id)?;
        self.detach_lemma(&item);
        Some(item)
    }

    fn detach_lemma(&mut self, item: &Arc<DictionaryItem>) {
        if let Some(items) = self.by_lemma.get_mut(&item.lemma) {
            items.retain(|i| i.id != item.id);
            if items.is_empty() {
                self.by_lemma.remove(&item.lemma);
            }
        }
    }

    pub fn item_by_id(&self, id: &str) -> Option<&Arc<DictionaryItem>> {
        self.by_id.get(id)
    }

    /// All items sharing a lemma, in insertion order.
    pub fn matching_items(&self, lemma: &str) -> &[Arc<DictionaryItem>] {
        self.by_lemma.get(lemma).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DictionaryItem>> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn item(lemma: &str, pos: PrimaryPos) -> Arc<DictionaryItem> {
        Arc::new(DictionaryItem::new(
            lemma,
            lemma,
            pos,
            SecondaryPos::None,
            AttributeSet::new(),
        ))
    }

    #[test]
    fn test_id_generation() {
        let plain = DictionaryItem::new(
            "kitap",
            "kitap",
            PrimaryPos::Noun,
            SecondaryPos::None,
            AttributeSet::new(),
        );
        assert_eq!(plain.id, "kitap_Noun");

        let pron = DictionaryItem::new(
            "ben",
            "ben",
            PrimaryPos::Pronoun,
            SecondaryPos::PersonalPron,
            AttributeSet::new(),
        );
        assert_eq!(pron.id, "ben_Pron_Pers");

        let homonym = DictionaryItem::with_index(
            "yüz",
            "yüz",
            PrimaryPos::Noun,
            SecondaryPos::None,
            AttributeSet::new(),
            1,
        );
        assert_eq!(homonym.id, "yüz_Noun_1");
    }

    #[test]
    fn test_add_and_lookup() {
        let mut lexicon = RootLexicon::new();
        lexicon.add(item("ev", PrimaryPos::Noun));
        lexicon.add(item("ev", PrimaryPos::Adjective));

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains_id("ev_Noun"));
        assert_eq!(lexicon.matching_items("ev").len(), 2);
        assert!(lexicon.matching_items("yok").is_empty());
    }

    #[test]
    fn test_same_id_replaces() {
        let mut lexicon = RootLexicon::new();
        lexicon.add(item("ev", PrimaryPos::Noun));
        lexicon.add(item("ev", PrimaryPos::Noun));
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.matching_items("ev").len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut lexicon = RootLexicon::new();
        lexicon.add(item("ev", PrimaryPos::Noun));
        lexicon.add(item("ev", PrimaryPos::Adjective));

        let removed = lexicon.remove("ev_Noun").unwrap();
        assert_eq!(removed.lemma, "ev");
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.matching_items("ev").len(), 1);
        assert!(lexicon.remove("ev_Noun").is_none());
    }

    #[test]
    fn test_equality_by_id() {
        let a = item("ev", PrimaryPos::Noun);
        let mut b = DictionaryItem::new(
            "ev",
            "ev",
            PrimaryPos::Noun,
            SecondaryPos::None,
            AttributeSet::new(),
        );
        b.attributes.insert(RootAttribute::NoVoicing);
        assert_eq!(*a, b);
    }
}
