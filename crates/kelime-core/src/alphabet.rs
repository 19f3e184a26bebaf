// Turkish letter table and grapheme-level queries

// ---------------------------------------------------------------------------
// Letter table
// ---------------------------------------------------------------------------

/// Phonetic classification of a single Turkish letter.
///
/// Covers the 29 letters of the Turkish alphabet, the circumflexed vowels
/// `â î û` used in loanword pronunciations, and the foreign letters `q w x`
/// that appear in unadapted borrowings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurkicLetter {
    pub ch: char,
    pub vowel: bool,
    /// Front vowel (`e i ö ü î û`); selects the front alternant in harmony.
    pub frontal: bool,
    /// Rounded vowel (`o ö u ü û`).
    pub rounded: bool,
    /// Voiceless consonant (`ç f h k p s ş t`).
    pub voiceless: bool,
    /// Voiceless stop (`p ç t k`); these alternate with voiced counterparts.
    pub stop: bool,
}

impl TurkicLetter {
    const fn vowel(ch: char, frontal: bool, rounded: bool) -> Self {
        TurkicLetter { ch, vowel: true, frontal, rounded, voiceless: false, stop: false }
    }

    const fn consonant(ch: char, voiceless: bool, stop: bool) -> Self {
        TurkicLetter { ch, vowel: false, frontal: false, rounded: false, voiceless, stop }
    }
}

/// Looks up the letter table entry for a lowercase character.
///
/// Returns `None` for characters outside the table (digits, punctuation,
/// letters of other scripts). Note that `â î û` carry their own harmony
/// class: `â` patterns with back vowels even though it palatalizes the
/// preceding consonant.
pub fn letter(c: char) -> Option<TurkicLetter> {
    let letter = match c {
        'a' => TurkicLetter::vowel('a', false, false),
        'b' => TurkicLetter::consonant('b', false, false),
        'c' => TurkicLetter::consonant('c', false, false),
        'ç' => TurkicLetter::consonant('ç', true, true),
        'd' => TurkicLetter::consonant('d', false, false),
        'e' => TurkicLetter::vowel('e', true, false),
        'f' => TurkicLetter::consonant('f', true, false),
        'g' => TurkicLetter::consonant('g', false, false),
        'ğ' => TurkicLetter::consonant('ğ', false, false),
        'h' => TurkicLetter::consonant('h', true, false),
        'ı' => TurkicLetter::vowel('ı', false, false),
        'i' => TurkicLetter::vowel('i', true, false),
        'j' => TurkicLetter::consonant('j', false, false),
        'k' => TurkicLetter::consonant('k', true, true),
        'l' => TurkicLetter::consonant('l', false, false),
        'm' => TurkicLetter::consonant('m', false, false),
        'n' => TurkicLetter::consonant('n', false, false),
        'o' => TurkicLetter::vowel('o', false, true),
        'ö' => TurkicLetter::vowel('ö', true, true),
        'p' => TurkicLetter::consonant('p', true, true),
        'r' => TurkicLetter::consonant('r', false, false),
        's' => TurkicLetter::consonant('s', true, false),
        'ş' => TurkicLetter::consonant('ş', true, false),
        't' => TurkicLetter::consonant('t', true, true),
        'u' => TurkicLetter::vowel('u', false, true),
        'ü' => TurkicLetter::vowel('ü', true, true),
        'v' => TurkicLetter::consonant('v', false, false),
        'y' => TurkicLetter::consonant('y', false, false),
        'z' => TurkicLetter::consonant('z', false, false),
        'â' => TurkicLetter::vowel('â', false, false),
        'î' => TurkicLetter::vowel('î', true, false),
        'û' => TurkicLetter::vowel('û', true, true),
        'q' => TurkicLetter::consonant('q', false, false),
        'w' => TurkicLetter::consonant('w', false, false),
        'x' => TurkicLetter::consonant('x', false, false),
        _ => return None,
    };
    Some(letter)
}

/// Check whether a character is in the letter table.
pub fn is_turkish_letter(c: char) -> bool {
    letter(c).is_some()
}

/// Check whether a character is a Turkish vowel.
pub fn is_vowel(c: char) -> bool {
    letter(c).is_some_and(|l| l.vowel)
}

/// Returns the first character of `word` that is not in the letter table,
/// or `None` if the whole word is analyzable.
pub fn first_foreign_char(word: &str) -> Option<char> {
    word.chars().find(|&c| letter(c).is_none())
}

// ---------------------------------------------------------------------------
// Consonant voicing
// ---------------------------------------------------------------------------

/// Voice a voiceless stop: `p -> b`, `ç -> c`, `t -> d`, `k -> ğ`, `g -> ğ`.
///
/// Returns the input unchanged for letters without a voiced counterpart;
/// callers that require an alternation detect this by comparing the result
/// with the input. The `nk -> ng` alternation (`renk -> rengi`) needs two
/// letters of context and is handled where the stem is rewritten.
pub fn voice(c: char) -> char {
    match c {
        'p' => 'b',
        'ç' => 'c',
        't' => 'd',
        'k' => 'ğ',
        'g' => 'ğ',
        other => other,
    }
}

/// Devoice a voiced stop: `b -> p`, `c -> ç`, `d -> t`, `g -> k`, `ğ -> k`.
///
/// Returns the input unchanged for letters without a voiceless counterpart.
pub fn devoice(c: char) -> char {
    match c {
        'b' => 'p',
        'c' => 'ç',
        'd' => 't',
        'g' => 'k',
        'ğ' => 'k',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Sequence queries
// ---------------------------------------------------------------------------

/// Last character of a sequence, if any.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Letter table entry for the last character of a sequence.
pub fn last_letter(s: &str) -> Option<TurkicLetter> {
    last_char(s).and_then(letter)
}

/// Letter table entry for the first character of a sequence.
pub fn first_letter(s: &str) -> Option<TurkicLetter> {
    s.chars().next().and_then(letter)
}

/// Last vowel of a sequence, scanning from the end.
pub fn last_vowel(s: &str) -> Option<TurkicLetter> {
    s.chars().rev().find_map(|c| letter(c).filter(|l| l.vowel))
}

/// Check whether a sequence contains at least one vowel.
pub fn contains_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

/// Number of vowels in a sequence. Syllable count for well-formed words.
pub fn vowel_count(s: &str) -> usize {
    s.chars().filter(|&c| is_vowel(c)).count()
}

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Lowercase a single character with Turkish dotted/dotless i rules:
/// `İ -> i` and `I -> ı`. Other characters use Unicode simple lowercasing.
pub fn lower_char(c: char) -> char {
    match c {
        'İ' => 'i',
        'I' => 'ı',
        other => other.to_lowercase().next().unwrap_or(other),
    }
}

/// Lowercase a whole string with Turkish dotted/dotless i rules.
pub fn to_lower(s: &str) -> String {
    s.chars().map(lower_char).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
