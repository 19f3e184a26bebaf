// Primary and secondary part-of-speech categories

use std::fmt;

/// Primary part of speech of a dictionary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Verb,
    Pronoun,
    Adverb,
    Conjunction,
    Interjection,
    Determiner,
    Numeral,
    PostPositive,
    Question,
    Punctuation,
    Unknown,
}

impl PrimaryPos {
    pub const ALL: &'static [Self] = &[
        PrimaryPos::Noun,
        PrimaryPos::Adjective,
        PrimaryPos::Verb,
        PrimaryPos::Pronoun,
        PrimaryPos::Adverb,
        PrimaryPos::Conjunction,
        PrimaryPos::Interjection,
        PrimaryPos::Determiner,
        PrimaryPos::Numeral,
        PrimaryPos::PostPositive,
        PrimaryPos::Question,
        PrimaryPos::Punctuation,
        PrimaryPos::Unknown,
    ];

    /// Short form used in dictionary metadata and item ids.
    pub fn short_form(self) -> &'static str {
        match self {
            PrimaryPos::Noun => "Noun",
            PrimaryPos::Adjective => "Adj",
            PrimaryPos::Verb => "Verb",
            PrimaryPos::Pronoun => "Pron",
            PrimaryPos::Adverb => "Adv",
            PrimaryPos::Conjunction => "Conj",
            PrimaryPos::Interjection => "Interj",
            PrimaryPos::Determiner => "Det",
            PrimaryPos::Numeral => "Num",
            PrimaryPos::PostPositive => "Postp",
            PrimaryPos::Question => "Ques",
            PrimaryPos::Punctuation => "Punc",
            PrimaryPos::Unknown => "Unk",
        }
    }

    /// Parse a short form. Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.short_form() == s)
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

/// Secondary part of speech, refining the primary one. `None` for most items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecondaryPos {
    #[default]
    None,
    ProperNoun,
    Abbreviation,
    Cardinal,
    Ordinal,
    PersonalPron,
    DemonstrativePron,
    QuantitivePron,
    QuestionPron,
    ReflexivePron,
    Time,
    Unknown,
}

impl SecondaryPos {
    pub const ALL: &'static [Self] = &[
        SecondaryPos::None,
        SecondaryPos::ProperNoun,
        SecondaryPos::Abbreviation,
        SecondaryPos::Cardinal,
        SecondaryPos::Ordinal,
        SecondaryPos::PersonalPron,
        SecondaryPos::DemonstrativePron,
        SecondaryPos::QuantitivePron,
        SecondaryPos::QuestionPron,
        SecondaryPos::ReflexivePron,
        SecondaryPos::Time,
        SecondaryPos::Unknown,
    ];

    /// Short form used in dictionary metadata and item ids.
    pub fn short_form(self) -> &'static str {
        match self {
            SecondaryPos::None => "None",
            SecondaryPos::ProperNoun => "Prop",
            SecondaryPos::Abbreviation => "Abbrv",
            SecondaryPos::Cardinal => "Card",
            SecondaryPos::Ordinal => "Ord",
            SecondaryPos::PersonalPron => "Pers",
            SecondaryPos::DemonstrativePron => "Demons",
            SecondaryPos::QuantitivePron => "Quant",
            SecondaryPos::QuestionPron => "Ques",
            SecondaryPos::ReflexivePron => "Reflex",
            SecondaryPos::Time => "Time",
            SecondaryPos::Unknown => "Unk",
        }
    }

    /// Parse a short form. Returns `None` for unknown names.
    ///
    /// `"Ques"` is ambiguous with [`PrimaryPos::Question`]; dictionary
    /// parsing resolves it by slot order, trying the primary table first.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.short_form() == s)
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
