// Stem transition generation.
//
// A dictionary item contributes one or two stem transitions: the root
// surface itself and, when a lexical attribute rewrites the stem before
// vowel-initial suffixes, the modified surface (`kitap` / `kitab`). Each
// transition records the phonetic attributes a search path starts with and
// the graph state it enters.

use std::fmt;
use std::sync::Arc;

use kelime_core::alphabet;
use kelime_core::attributes::{AttributeSet, PhoneticAttribute, RootAttribute};
use kelime_core::phonetics;
use kelime_core::pos::PrimaryPos;

use crate::lexicon::{DictionaryItem, LexiconError};
use crate::morphotactics::{StateId, TurkishMorphotactics};

/// Entry point of a search: a stem surface, the item it belongs to, the
/// attribute snapshot to start from and the root state to enter.
#[derive(Debug)]
pub struct StemTransition {
    pub surface: String,
    pub item: Arc<DictionaryItem>,
    pub attributes: AttributeSet<PhoneticAttribute>,
    pub to: StateId,
}

impl fmt::Display for StemTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.surface, self.item.id)
    }
}

impl PartialEq for StemTransition {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface
            && self.item == other.item
            && self.attributes == other.attributes
            && self.to == other.to
    }
}

/// Generates the stem transitions of one dictionary item.
pub fn generate(
    item: &Arc<DictionaryItem>,
    morphotactics: &TurkishMorphotactics,
) -> Result<Vec<Arc<StemTransition>>, LexiconError> {
    use RootAttribute::*;

    if item.has_attribute(Special) {
        return special_stems(item, morphotactics);
    }
    let modifies = [Doubling, LastVowelDrop, ProgressiveVowelDrop, Voicing, InverseHarmony]
        .iter()
        .any(|&a| item.has_attribute(a));
    if modifies {
        modified_stems(item, morphotactics)
    } else {
        let attrs = item_attributes(item);
        Ok(vec![Arc::new(StemTransition {
            surface: item.root.clone(),
            item: Arc::clone(item),
            attributes: attrs,
            to: morphotactics.root_state(item, attrs),
        })])
    }
}

/// Phonetic attributes of the unmodified root. Harmony facts come from the
/// pronunciation, which keeps circumflexed vowels.
fn item_attributes(item: &DictionaryItem) -> AttributeSet<PhoneticAttribute> {
    if item.pronunciation.is_empty() {
        phonetics::word_attributes(&item.root)
    } else {
        phonetics::word_attributes(&item.pronunciation)
    }
}

/// Applies stem-rewriting attributes, producing the original and the
/// modified transition. When the rewrites cancel out, a single transition
/// results.
fn modified_stems(
    item: &Arc<DictionaryItem>,
    morphotactics: &TurkishMorphotactics,
) -> Result<Vec<Arc<StemTransition>>, LexiconError> {
    use PhoneticAttribute::*;

    let mut modified: String = item.root.clone();
    let mut original_attrs = item_attributes(item);
    let mut modified_attrs = original_attrs;
    let mut original_state: Option<StateId> = None;
    let mut modified_state: Option<StateId> = None;

    for attribute in item.attributes.iter() {
        match attribute {
            RootAttribute::Voicing => {
                let last = alphabet::last_char(&modified).ok_or_else(|| {
                    LexiconError::ImpossibleVoicing { item: item.id.clone() }
                })?;
                let voiced =
                    if item.lemma.ends_with("nk") { 'g' } else { alphabet::voice(last) };
                if voiced == last {
                    return Err(LexiconError::ImpossibleVoicing { item: item.id.clone() });
                }
                modified.pop();
                modified.push(voiced);
                modified_attrs.remove(LastLetterVoicelessStop);
                original_attrs.insert(ExpectsConsonant);
                modified_attrs.insert(ExpectsVowel);
                modified_attrs.insert(CannotTerminate);
            }
            RootAttribute::Doubling => {
                let last = alphabet::last_char(&modified).ok_or_else(|| {
                    LexiconError::ImpossibleVowelDrop { item: item.id.clone() }
                })?;
                modified.push(last);
                original_attrs.insert(ExpectsConsonant);
                modified_attrs.insert(ExpectsVowel);
                modified_attrs.insert(CannotTerminate);
            }
            RootAttribute::LastVowelDrop => {
                let last = alphabet::last_letter(&modified)
                    .ok_or_else(|| LexiconError::ImpossibleVowelDrop { item: item.id.clone() })?;
                if last.vowel {
                    modified.pop();
                    modified_attrs.insert(ExpectsConsonant);
                    modified_attrs.insert(CannotTerminate);
                } else {
                    // drop the vowel before the final consonant: ağız -> ağz
                    let mut chars: Vec<char> = modified.chars().collect();
                    if chars.len() < 2 {
                        return Err(LexiconError::ImpossibleVowelDrop { item: item.id.clone() });
                    }
                    chars.remove(chars.len() - 2);
                    modified = chars.into_iter().collect();
                    if item.primary_pos != PrimaryPos::Verb {
                        original_attrs.insert(ExpectsConsonant);
                    }
                    modified_attrs.insert(ExpectsVowel);
                    modified_attrs.insert(CannotTerminate);
                }
                if item.primary_pos == PrimaryPos::Verb {
                    original_state = Some(morphotactics.verb_last_vowel_drop_unmod_root_s);
                    modified_state = Some(morphotactics.verb_last_vowel_drop_mod_root_s);
                }
            }
            RootAttribute::ProgressiveVowelDrop => {
                if modified.chars().count() > 1 {
                    modified.pop();
                    if alphabet::contains_vowel(&modified) {
                        modified_attrs = phonetics::word_attributes(&modified);
                    }
                    modified_attrs.insert(LastLetterDropped);
                }
            }
            RootAttribute::InverseHarmony => {
                original_attrs.insert(LastVowelFrontal);
                original_attrs.remove(LastVowelBack);
                modified_attrs.insert(LastVowelFrontal);
                modified_attrs.remove(LastVowelBack);
            }
            _ => {}
        }
    }

    let original = StemTransition {
        surface: item.root.clone(),
        item: Arc::clone(item),
        attributes: original_attrs,
        to: original_state.unwrap_or_else(|| morphotactics.root_state(item, original_attrs)),
    };
    let modified = StemTransition {
        surface: modified,
        item: Arc::clone(item),
        attributes: modified_attrs,
        to: modified_state.unwrap_or_else(|| morphotactics.root_state(item, modified_attrs)),
    };
    if original == modified {
        return Ok(vec![Arc::new(original)]);
    }
    Ok(vec![Arc::new(original), Arc::new(modified)])
}

/// Stems for items whose surfaces or root states do not follow the regular
/// rules: personal pronouns `ben/sen`, the verbs `demek/yemek/imek`,
/// quantitive pronouns and vowel-dropping place words.
fn special_stems(
    item: &Arc<DictionaryItem>,
    mt: &TurkishMorphotactics,
) -> Result<Vec<Arc<StemTransition>>, LexiconError> {
    use PhoneticAttribute::*;

    let make = |surface: &str, attrs: AttributeSet<PhoneticAttribute>, to: StateId| {
        Arc::new(StemTransition {
            surface: surface.to_string(),
            item: Arc::clone(item),
            attributes: attrs,
            to,
        })
    };
    let plain = |surface: &str| phonetics::word_attributes(surface);

    let stems = match item.id.as_str() {
        "ben_Pron_Pers" | "sen_Pron_Pers" => {
            let modified_surface = if item.id.starts_with("ben") { "ban" } else { "san" };
            let mut original = plain(&item.root);
            original.insert(UnModifiedPronoun);
            let mut modified = plain(modified_surface);
            modified.insert(ModifiedPronoun);
            vec![
                make(&item.root, original, mt.pron_pers_s),
                make(modified_surface, modified, mt.pron_pers_mod_s),
            ]
        }
        "demek_Verb" | "yemek_Verb" => {
            let (original, modified) =
                if item.id.starts_with("demek") { ("de", "di") } else { ("ye", "yi") };
            vec![
                make(original, plain(original), mt.v_de_ye_root_s),
                make(modified, plain(modified), mt.v_de_ye_root_s),
            ]
        }
        "imek_Verb" => {
            vec![make(&item.root, plain(&item.root), mt.imek_root_s)]
        }
        "birbiri_Pron_Quant" | "çoğu_Pron_Quant" | "öbürü_Pron_Quant"
        | "birçoğu_Pron_Quant" => {
            let modified_surface = match item.id.as_str() {
                "birbiri_Pron_Quant" => "birbir",
                "çoğu_Pron_Quant" => "çok",
                "öbürü_Pron_Quant" => "öbür",
                _ => "birçok",
            };
            let mut original = plain(&item.root);
            original.insert(UnModifiedPronoun);
            let mut modified = plain(modified_surface);
            modified.insert(ModifiedPronoun);
            vec![
                make(&item.root, original, mt.pron_quant_s),
                make(modified_surface, modified, mt.pron_quant_modified_s),
            ]
        }
        "içeri_Noun" | "içeri_Adj" | "dışarı_Noun" | "dışarı_Adj" | "yukarı_Noun"
        | "yukarı_Adj" | "ileri_Noun" | "şura_Noun" | "bura_Noun" | "ora_Noun" => {
            let root_for_modified = if item.primary_pos == PrimaryPos::Adjective {
                mt.adj_last_vowel_drop_root_s
            } else {
                mt.noun_last_vowel_drop_root_s
            };
            let mut modified_surface = item.root.clone();
            modified_surface.pop();
            let mut modified = plain(&modified_surface);
            modified.insert(ExpectsConsonant);
            modified.insert(CannotTerminate);
            let original_attrs = plain(&item.root);
            vec![
                make(&item.root, original_attrs, mt.root_state(item, original_attrs)),
                make(&modified_surface, modified, root_for_modified),
            ]
        }
        _ => return Err(LexiconError::UnknownSpecialRoot { item: item.id.clone() }),
    };
    Ok(stems)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader;

    fn mt() -> TurkishMorphotactics {
        TurkishMorphotactics::new()
    }

    fn item_of(line: &str) -> Arc<DictionaryItem> {
        Arc::new(loader::parse_line(line).unwrap())
    }

    #[test]
    fn test_plain_item_has_single_stem() {
        let mt = mt();
        let stems = generate(&item_of("ev"), &mt).unwrap();
        assert_eq!(stems.len(), 1);
        assert_eq!(stems[0].surface, "ev");
        assert!(!stems[0].attributes.contains(PhoneticAttribute::CannotTerminate));
    }

    #[test]
    fn test_voicing_creates_two_stems() {
        let mt = mt();
        let stems = generate(&item_of("kitap"), &mt).unwrap();
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[0].surface, "kitap");
        assert!(stems[0].attributes.contains(PhoneticAttribute::ExpectsConsonant));
        assert_eq!(stems[1].surface, "kitab");
        assert!(stems[1].attributes.contains(PhoneticAttribute::ExpectsVowel));
        assert!(stems[1].attributes.contains(PhoneticAttribute::CannotTerminate));
        // voicing keeps the voiceless classification off the modified stem
        assert!(!stems[1].attributes.contains(PhoneticAttribute::LastLetterVoicelessStop));
    }

    #[test]
    fn test_nk_voices_to_g() {
        let mt = mt();
        let stems = generate(&item_of("renk"), &mt).unwrap();
        assert_eq!(stems[1].surface, "reng");
    }

    #[test]
    fn test_voicing_without_alternation_is_an_error() {
        let mt = mt();
        let item = item_of("sanat [A:Voicing]");
        match generate(&item, &mt) {
            Err(LexiconError::ImpossibleVoicing { item }) => assert_eq!(item, "sanat_Noun"),
            other => panic!("expected ImpossibleVoicing, got {other:?}"),
        }
    }

    #[test]
    fn test_doubling() {
        let mt = mt();
        let stems = generate(&item_of("hak [A:Doubling]"), &mt).unwrap();
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[1].surface, "hakk");
        assert!(stems[1].attributes.contains(PhoneticAttribute::ExpectsVowel));
    }

    #[test]
    fn test_last_vowel_drop_noun() {
        let mt = mt();
        let stems = generate(&item_of("ağız [A:LastVowelDrop]"), &mt).unwrap();
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[0].surface, "ağız");
        assert!(stems[0].attributes.contains(PhoneticAttribute::ExpectsConsonant));
        assert_eq!(stems[1].surface, "ağz");
        assert!(stems[1].attributes.contains(PhoneticAttribute::ExpectsVowel));
    }

    #[test]
    fn test_progressive_vowel_drop_verb() {
        let mt = mt();
        let stems = generate(&item_of("aramak"), &mt).unwrap();
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[0].surface, "ara");
        assert_eq!(stems[1].surface, "ar");
        assert!(stems[1].attributes.contains(PhoneticAttribute::LastLetterDropped));
        assert_eq!(stems[1].to, mt.verb_root_vowel_drop_s);
    }

    #[test]
    fn test_inverse_harmony() {
        let mt = mt();
        let stems = generate(&item_of("saat [A:NoVoicing, InverseHarmony]"), &mt).unwrap();
        assert_eq!(stems.len(), 1);
        assert!(stems[0].attributes.contains(PhoneticAttribute::LastVowelFrontal));
        assert!(!stems[0].attributes.contains(PhoneticAttribute::LastVowelBack));
    }

    #[test]
    fn test_personal_pronoun_stems() {
        let mt = mt();
        let stems = generate(&item_of("ben [P:Pron,Pers; A:Special]"), &mt).unwrap();
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[0].surface, "ben");
        assert!(stems[0].attributes.contains(PhoneticAttribute::UnModifiedPronoun));
        assert_eq!(stems[0].to, mt.pron_pers_s);
        assert_eq!(stems[1].surface, "ban");
        assert!(stems[1].attributes.contains(PhoneticAttribute::ModifiedPronoun));
        assert_eq!(stems[1].to, mt.pron_pers_mod_s);
    }

    #[test]
    fn test_demek_stems() {
        let mt = mt();
        let stems = generate(&item_of("demek [A:Special]"), &mt).unwrap();
        let surfaces: Vec<&str> = stems.iter().map(|s| s.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["de", "di"]);
        assert!(stems.iter().all(|s| s.to == mt.v_de_ye_root_s));
    }

    #[test]
    fn test_place_word_stems() {
        let mt = mt();
        let stems = generate(&item_of("içeri [A:Special]"), &mt).unwrap();
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[1].surface, "içer");
        assert_eq!(stems[1].to, mt.noun_last_vowel_drop_root_s);
        assert!(stems[1].attributes.contains(PhoneticAttribute::CannotTerminate));
    }

    #[test]
    fn test_unknown_special_root() {
        let mt = mt();
        let item = item_of("tuhaf [A:Special]");
        assert!(matches!(
            generate(&item, &mt),
            Err(LexiconError::UnknownSpecialRoot { .. })
        ));
    }

    #[test]
    fn test_compound_head_keeps_single_stem() {
        let mt = mt();
        let stems = generate(&item_of("zeytinyağı [P:Noun; A:CompoundP3sg]"), &mt).unwrap();
        assert_eq!(stems.len(), 1);
        assert_eq!(stems[0].surface, "zeytinyağı");
    }
}
