// Phonetic attribute calculation over surface sequences

use crate::alphabet;
use crate::attributes::{AttributeSet, PhoneticAttribute};

use PhoneticAttribute::*;

/// Computes the phonetic attributes of a surface sequence given the
/// attributes of what precedes it.
///
/// The rules:
///
/// * An empty sequence contributes nothing; the predecessor attributes are
///   returned as-is.
/// * A sequence with a vowel establishes its own harmony context: last
///   letter class, last vowel harmony pair, first letter class.
/// * A vowel-less sequence keeps the predecessor's vowel facts (a suffix
///   like `-m` does not change the harmony context) and marks itself as
///   consonant-final. A satisfied `ExpectsConsonant` is cleared.
/// * In every non-empty case the last letter's voicing class is recorded,
///   with the stop subset (`p ç t k`) flagged separately.
pub fn morphemic_attributes(
    seq: &str,
    predecessor: AttributeSet<PhoneticAttribute>,
) -> AttributeSet<PhoneticAttribute> {
    if seq.is_empty() {
        return predecessor;
    }
    let mut attrs = AttributeSet::new();
    if alphabet::contains_vowel(seq) {
        let last = alphabet::last_letter(seq);
        if last.is_some_and(|l| l.vowel) {
            attrs.insert(LastLetterVowel);
        } else {
            attrs.insert(LastLetterConsonant);
        }
        let last_vowel = match last {
            Some(l) if l.vowel => Some(l),
            _ => alphabet::last_vowel(seq),
        };
        if let Some(v) = last_vowel {
            if v.frontal {
                attrs.insert(LastVowelFrontal);
            } else {
                attrs.insert(LastVowelBack);
            }
            if v.rounded {
                attrs.insert(LastVowelRounded);
            } else {
                attrs.insert(LastVowelUnrounded);
            }
        }
        if alphabet::first_letter(seq).is_some_and(|l| l.vowel) {
            attrs.insert(FirstLetterVowel);
        } else {
            attrs.insert(FirstLetterConsonant);
        }
    } else {
        attrs = predecessor;
        attrs.insert(LastLetterConsonant);
        attrs.insert(FirstLetterConsonant);
        attrs.insert(HasNoVowel);
        attrs.remove(LastLetterVowel);
        attrs.remove(ExpectsConsonant);
    }

    // Unknown characters classify as voiced.
    match alphabet::last_letter(seq) {
        Some(l) if l.voiceless => {
            attrs.insert(LastLetterVoiceless);
            if l.stop {
                attrs.insert(LastLetterVoicelessStop);
            }
        }
        _ => {
            attrs.insert(LastLetterVoiced);
        }
    }
    attrs
}

/// Phonetic attributes of a standalone sequence (no predecessor context).
pub fn word_attributes(seq: &str) -> AttributeSet<PhoneticAttribute> {
    morphemic_attributes(seq, AttributeSet::new())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
