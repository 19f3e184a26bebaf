// Text dictionary parsing.
//
// One item per line: a word, optionally followed by bracketed metadata.
//
//   kitap
//   aramak
//   ağız [A:LastVowelDrop]
//   ben [P:Pron,Pers; A:Special]
//   yüz [P:Verb; Index:1]
//   zeytinyağı [P:Noun; A:CompoundP3sg; Roots:zeytin-yağ]
//
// Metadata keys: `P` part of speech, `A` lexical attributes, `Pr`
// pronunciation, `Index` homonym index, `Roots` compound root parts.
// Lines starting with `##` are comments.
//
// Most lexical attributes are not written in the dictionary; they are
// inferred from the surface shape of the root (syllable count, final
// letter) after the explicit ones are applied.

use std::path::Path;
use std::sync::Arc;

use kelime_core::alphabet;
use kelime_core::attributes::{AttributeSet, RootAttribute};
use kelime_core::pos::{PrimaryPos, SecondaryPos};
use log::warn;

use super::{DictionaryItem, LexiconError, RootLexicon, generate_id};

/// Loads a lexicon from dictionary lines. Malformed lines are logged and
/// skipped so one bad entry cannot take down a large dictionary.
pub fn load_lines<'a, I>(lines: I) -> RootLexicon
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lexicon = RootLexicon::new();
    // Compound lines reference other entries, so they are resolved after
    // every plain entry is in place.
    let mut compounds: Vec<(DictionaryItem, String)> = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("##") {
            continue;
        }
        match parse_line_full(line) {
            Ok((item, Some(roots))) => compounds.push((item, roots)),
            Ok((item, None)) => lexicon.add(Arc::new(item)),
            Err(e) => warn!("skipping dictionary line: {e}"),
        }
    }
    for (item, roots) in compounds {
        let visible = Arc::new(item);
        lexicon.add(Arc::clone(&visible));
        lexicon.add(compound_root_of(&visible, &roots, &lexicon));
    }
    lexicon
}

/// Loads a lexicon from a dictionary file.
pub fn load_path(path: &Path) -> Result<RootLexicon, LexiconError> {
    let text = std::fs::read_to_string(path)?;
    Ok(load_lines(text.lines()))
}

/// Parses a single dictionary line into an item.
///
/// For compound lines (`Roots:` metadata) this returns the visible head
/// item only; the generated bare root requires lexicon context and is
/// produced by [`load_lines`].
pub fn parse_line(line: &str) -> Result<DictionaryItem, LexiconError> {
    parse_line_full(line).map(|(item, _)| item)
}

pub(crate) fn parse_line_full(
    line: &str,
) -> Result<(DictionaryItem, Option<String>), LexiconError> {
    let line = line.trim();
    let malformed = |reason: &str| LexiconError::MalformedLine {
        line: line.to_string(),
        reason: reason.to_string(),
    };
    if line.is_empty() {
        return Err(malformed("empty line"));
    }

    let (word, meta) = match line.split_once('[') {
        Some((word, rest)) => {
            let meta = rest.strip_suffix(']').ok_or_else(|| malformed("unclosed metadata"))?;
            (word.trim(), meta)
        }
        None => (line, ""),
    };
    if word.is_empty() {
        return Err(malformed("missing word"));
    }

    let mut primary: Option<PrimaryPos> = None;
    let mut secondary: Option<SecondaryPos> = None;
    let mut attributes = AttributeSet::new();
    let mut pronunciation: Option<String> = None;
    let mut index = 0u32;
    let mut roots: Option<String> = None;

    for chunk in meta.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let (key, value) =
            chunk.split_once(':').ok_or_else(|| malformed("metadata chunk without `:`"))?;
        let value = value.trim();
        match key.trim() {
            "P" => {
                for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    // `Ques` names both tables; the primary slot wins when
                    // it is still open.
                    if primary.is_none()
                        && let Some(p) = PrimaryPos::parse(name)
                    {
                        primary = Some(p);
                    } else if let Some(s) = SecondaryPos::parse(name) {
                        secondary = Some(s);
                    } else {
                        return Err(malformed(&format!("unknown part of speech `{name}`")));
                    }
                }
            }
            "A" => {
                for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    let attr = RootAttribute::parse(name)
                        .ok_or_else(|| malformed(&format!("unknown attribute `{name}`")))?;
                    attributes.insert(attr);
                }
            }
            "Pr" => pronunciation = Some(value.to_string()),
            "Index" => {
                index = value.parse().map_err(|_| malformed("bad homonym index"))?;
            }
            "Roots" => roots = Some(value.to_string()),
            other => return Err(malformed(&format!("unknown metadata key `{other}`"))),
        }
    }

    let lowered = alphabet::to_lower(word);
    let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());

    let primary = primary.unwrap_or_else(|| infer_primary_pos(&lowered, capitalized));
    let secondary = secondary.unwrap_or(if capitalized && primary == PrimaryPos::Noun {
        SecondaryPos::ProperNoun
    } else {
        SecondaryPos::None
    });

    // Verbs are cited in the infinitive; the analysis root drops `-mek/-mak`.
    let mut root = lowered.clone();
    if primary == PrimaryPos::Verb
        && root.chars().count() > 3
        && (root.ends_with("mek") || root.ends_with("mak"))
    {
        let cut = root.char_indices().rev().nth(2).map(|(i, _)| i).unwrap_or(0);
        root.truncate(cut);
    }
    let pronunciation = pronunciation.map(|p| alphabet::to_lower(&p)).unwrap_or_else(|| root.clone());
    // Circumflexed vowels stay in the pronunciation but not in the matched
    // surface.
    let root: String = root
        .chars()
        .map(|c| match c {
            'â' => 'a',
            'î' => 'i',
            'û' => 'u',
            other => other,
        })
        .collect();

    infer_attributes(&root, primary, secondary, &mut attributes);
    if roots.is_some() {
        attributes.insert(RootAttribute::CompoundP3sg);
    }

    // Proper nouns keep their capitalized lemma; everything else is stored
    // lowercase.
    let lemma = if secondary == SecondaryPos::ProperNoun { word.to_string() } else { lowered };

    let mut item = DictionaryItem::with_index(lemma, root, primary, secondary, attributes, index);
    item.pronunciation = pronunciation;
    Ok((item, roots))
}

fn infer_primary_pos(word: &str, capitalized: bool) -> PrimaryPos {
    if !capitalized && word.chars().count() > 3 && (word.ends_with("mek") || word.ends_with("mak"))
    {
        PrimaryPos::Verb
    } else {
        PrimaryPos::Noun
    }
}

/// Adds the lexical attributes that follow from the root's shape.
pub(crate) fn infer_attributes(
    root: &str,
    primary: PrimaryPos,
    secondary: SecondaryPos,
    attrs: &mut AttributeSet<RootAttribute>,
) {
    use RootAttribute::*;

    let Some(last) = alphabet::last_letter(root) else {
        return;
    };
    let vowels = alphabet::vowel_count(root);

    if primary == PrimaryPos::Verb {
        if last.vowel {
            attrs.insert(ProgressiveVowelDrop);
            attrs.insert(PassiveIn);
        }
        if vowels > 1 && !attrs.contains(AoristA) {
            attrs.insert(AoristI);
        }
        if vowels == 1 && !attrs.contains(AoristI) {
            attrs.insert(AoristA);
        }
        if last.ch == 'l' {
            attrs.insert(PassiveIn);
        }
        if last.vowel || ((last.ch == 'l' || last.ch == 'r') && vowels > 1) {
            attrs.insert(CausativeT);
        }
    } else if matches!(primary, PrimaryPos::Noun | PrimaryPos::Adjective) {
        if vowels > 1
            && last.stop
            && !attrs.contains(NoVoicing)
            && !attrs.contains(InverseHarmony)
            && secondary != SecondaryPos::ProperNoun
        {
            attrs.insert(Voicing);
        }
        if (root.ends_with("nk") || root.ends_with("og")) && !attrs.contains(NoVoicing) {
            attrs.insert(Voicing);
        }
        if vowels == 1 && last.stop && !attrs.contains(Voicing) {
            attrs.insert(NoVoicing);
        }
    }
}

/// Builds the generated bare root item for a compound head, e.g.
/// `zeytinyağ` for `zeytinyağı [Roots:zeytin-yağ]`. The bare root inherits
/// the lexical attributes of its final part when that part is itself in
/// the lexicon.
fn compound_root_of(
    visible: &Arc<DictionaryItem>,
    roots: &str,
    lexicon: &RootLexicon,
) -> Arc<DictionaryItem> {
    let root_surface: String = roots.chars().filter(|&c| c != '-').collect();
    let last_part = roots.rsplit('-').next().unwrap_or(roots);

    let mut attrs = lexicon
        .matching_items(last_part)
        .iter()
        .filter(|i| i.primary_pos == visible.primary_pos)
        .min_by_key(|i| i.index)
        .map(|i| i.attributes)
        .unwrap_or_else(|| {
            let mut inferred = AttributeSet::new();
            infer_attributes(
                &root_surface,
                visible.primary_pos,
                visible.secondary_pos,
                &mut inferred,
            );
            inferred
        });
    attrs.insert(RootAttribute::CompoundP3sgRoot);
    attrs.insert(RootAttribute::Dummy);
    attrs.remove(RootAttribute::CompoundP3sg);
    // The bare root never voices; `zeytinyağları`, not `zeytinyağarı`.
    attrs.remove(RootAttribute::Voicing);

    let mut index = 0;
    while lexicon.contains_id(&generate_id(
        &root_surface,
        visible.primary_pos,
        visible.secondary_pos,
        index,
    )) {
        index += 1;
    }

    let mut item = DictionaryItem::with_index(
        root_surface.clone(),
        root_surface,
        visible.primary_pos,
        visible.secondary_pos,
        attrs,
        index,
    );
    item.reference = Some(Arc::clone(visible));
    Arc::new(item)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use RootAttribute::*;

    #[test]
    fn test_plain_noun() {
        let item = parse_line("kitap").unwrap();
        assert_eq!(item.id, "kitap_Noun");
        assert_eq!(item.root, "kitap");
        assert_eq!(item.primary_pos, PrimaryPos::Noun);
        // two syllables ending in a voiceless stop: voicing is inferred
        assert!(item.has_attribute(Voicing));
    }

    #[test]
    fn test_monosyllable_stop_gets_no_voicing() {
        let item = parse_line("top").unwrap();
        assert!(item.has_attribute(NoVoicing));
        assert!(!item.has_attribute(Voicing));
    }

    #[test]
    fn test_explicit_no_voicing_wins() {
        let item = parse_line("sanat [A:NoVoicing]").unwrap();
        assert!(item.has_attribute(NoVoicing));
        assert!(!item.has_attribute(Voicing));
    }

    #[test]
    fn test_nk_ending_voices() {
        let item = parse_line("renk").unwrap();
        assert!(item.has_attribute(Voicing));
    }

    #[test]
    fn test_verb_infinitive_strip() {
        let item = parse_line("aramak").unwrap();
        assert_eq!(item.primary_pos, PrimaryPos::Verb);
        assert_eq!(item.lemma, "aramak");
        assert_eq!(item.root, "ara");
        // vowel-final verb root
        assert!(item.has_attribute(ProgressiveVowelDrop));
        assert!(item.has_attribute(PassiveIn));
        assert!(item.has_attribute(CausativeT));
        assert!(item.has_attribute(AoristI));
    }

    #[test]
    fn test_monosyllabic_verb_aorist() {
        let item = parse_line("gitmek [A:Voicing]").unwrap();
        assert_eq!(item.root, "git");
        assert!(item.has_attribute(AoristA));
        assert!(!item.has_attribute(AoristI));
    }

    #[test]
    fn test_pronoun_metadata() {
        let item = parse_line("ben [P:Pron,Pers; A:Special]").unwrap();
        assert_eq!(item.id, "ben_Pron_Pers");
        assert!(item.has_attribute(Special));
    }

    #[test]
    fn test_proper_noun_from_capitalization() {
        let item = parse_line("Ankara").unwrap();
        assert_eq!(item.id, "Ankara_Noun_Prop");
        assert_eq!(item.lemma, "Ankara");
        assert_eq!(item.root, "ankara");
        // proper nouns do not voice in writing
        assert!(!item.has_attribute(Voicing));
    }

    #[test]
    fn test_homonym_index() {
        let item = parse_line("yüz [P:Verb; Index:1]").unwrap();
        assert_eq!(item.id, "yüz_Verb_1");
        assert_eq!(item.index, 1);
    }

    #[test]
    fn test_circumflex_is_dropped_from_root() {
        let item = parse_line("rüzgâr").unwrap();
        assert_eq!(item.root, "rüzgar");
        assert_eq!(item.pronunciation, "rüzgâr");
    }

    #[test]
    fn test_malformed_lines() {
        assert!(parse_line("kitap [P:Noun").is_err());
        assert!(parse_line("kitap [X:Y]").is_err());
        assert!(parse_line("kitap [A:NotAThing]").is_err());
        assert!(parse_line("kitap [P:NotAPos]").is_err());
    }

    #[test]
    fn test_load_lines_skips_bad_entries() {
        let lexicon = load_lines(vec![
            "## comment",
            "",
            "kitap",
            "broken [A:Nope]",
            "ev",
        ]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains_id("kitap_Noun"));
        assert!(lexicon.contains_id("ev_Noun"));
    }

    #[test]
    fn test_compound_creates_bare_root() {
        let lexicon = load_lines(vec![
            "yağ",
            "zeytinyağı [P:Noun; A:CompoundP3sg; Roots:zeytin-yağ]",
        ]);
        let visible = lexicon.item_by_id("zeytinyağı_Noun").unwrap();
        assert!(visible.has_attribute(CompoundP3sg));

        let root = lexicon.item_by_id("zeytinyağ_Noun").unwrap();
        assert!(root.has_attribute(CompoundP3sgRoot));
        assert!(root.has_attribute(Dummy));
        assert!(!root.has_attribute(Voicing));
        assert_eq!(root.reference.as_ref().unwrap().id, "zeytinyağı_Noun");
    }

    #[test]
    fn test_compound_without_registered_part() {
        let lexicon = load_lines(vec!["akşamüstü [P:Noun; A:CompoundP3sg; Roots:akşam-üst]"]);
        let root = lexicon.item_by_id("akşamüst_Noun").unwrap();
        assert!(root.has_attribute(CompoundP3sgRoot));
    }
}
