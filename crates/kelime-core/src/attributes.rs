// Phonetic and root attributes with compact bitset storage

use std::fmt;
use std::marker::PhantomData;

// ---------------------------------------------------------------------------
// Attribute kinds
// ---------------------------------------------------------------------------

/// Trait for attribute enums that can be stored in an [`AttributeSet`].
///
/// Implementors must be fieldless enums with fewer than 32 variants.
pub trait AttributeKind: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in bit order.
    const ALL: &'static [Self];

    /// Bit index of this variant.
    fn bit(self) -> u32;
}

/// Phonetic state of a surface sequence: what its last letter and last vowel
/// look like, and what the next surface is required to provide.
///
/// The `Expects*` and `CannotTerminate` members are search-control flags
/// rather than observations; they are attached by stem rewriting and by the
/// surface realizer, and checked by the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticAttribute {
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiced,
    LastLetterVoiceless,
    LastLetterVoicelessStop,
    FirstLetterVowel,
    FirstLetterConsonant,
    HasNoVowel,
    /// The next surface must start with a vowel (set on modified stems).
    ExpectsVowel,
    /// The next surface must start with a consonant (set on unmodified stems).
    ExpectsConsonant,
    /// Surface belongs to a rewritten pronoun root (`ban`, `san`).
    ModifiedPronoun,
    /// Surface belongs to an original pronoun root (`ben`, `sen`).
    UnModifiedPronoun,
    /// The root lost its final vowel (`ağla -> ağl` before `-Iyor`).
    LastLetterDropped,
    /// The search may not accept while this surface is word-final.
    CannotTerminate,
}

impl AttributeKind for PhoneticAttribute {
    const ALL: &'static [Self] = &[
        PhoneticAttribute::LastLetterVowel,
        PhoneticAttribute::LastLetterConsonant,
        PhoneticAttribute::LastVowelFrontal,
        PhoneticAttribute::LastVowelBack,
        PhoneticAttribute::LastVowelRounded,
        PhoneticAttribute::LastVowelUnrounded,
        PhoneticAttribute::LastLetterVoiced,
        PhoneticAttribute::LastLetterVoiceless,
        PhoneticAttribute::LastLetterVoicelessStop,
        PhoneticAttribute::FirstLetterVowel,
        PhoneticAttribute::FirstLetterConsonant,
        PhoneticAttribute::HasNoVowel,
        PhoneticAttribute::ExpectsVowel,
        PhoneticAttribute::ExpectsConsonant,
        PhoneticAttribute::ModifiedPronoun,
        PhoneticAttribute::UnModifiedPronoun,
        PhoneticAttribute::LastLetterDropped,
        PhoneticAttribute::CannotTerminate,
    ];

    fn bit(self) -> u32 {
        self as u32
    }
}

/// Lexical properties of a dictionary item that control which phonological
/// alternations and suffix selections apply to its stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootAttribute {
    /// Final voiceless stop voices before vowels (`kitap -> kitab+a`).
    Voicing,
    /// Suppresses voicing even where surface shape suggests it.
    NoVoicing,
    /// Final consonant doubles before vowels (`hak -> hakk+ı`).
    Doubling,
    /// Last stem vowel drops before vowels (`burun -> burn+u`).
    LastVowelDrop,
    /// Verb loses its final vowel before `-Iyor` (`ağla -> ağlıyor`).
    ProgressiveVowelDrop,
    /// Suffix harmony follows the opposite class (`saat -> saate`).
    InverseHarmony,
    /// Item is the `-sI` compound head (`zeytinyağı`).
    CompoundP3sg,
    /// Generated bare compound root (`zeytinyağ`), only valid before suffixes.
    CompoundP3sgRoot,
    /// Root-to-state mapping is special-cased for this item.
    Special,
    /// Generated item that stands in for another; resolved on output.
    Dummy,
    AoristA,
    AoristI,
    PassiveIn,
    CausativeT,
    ImplicitPlural,
    ImplicitDative,
    ImplicitP1sg,
    ImplicitP2sg,
    /// Kinship noun with fused possessives (`annem` but not `annemsi`).
    FamilyMember,
}

impl AttributeKind for RootAttribute {
    const ALL: &'static [Self] = &[
        RootAttribute::Voicing,
        RootAttribute::NoVoicing,
        RootAttribute::Doubling,
        RootAttribute::LastVowelDrop,
        RootAttribute::ProgressiveVowelDrop,
        RootAttribute::InverseHarmony,
        RootAttribute::CompoundP3sg,
        RootAttribute::CompoundP3sgRoot,
        RootAttribute::Special,
        RootAttribute::Dummy,
        RootAttribute::AoristA,
        RootAttribute::AoristI,
        RootAttribute::PassiveIn,
        RootAttribute::CausativeT,
        RootAttribute::ImplicitPlural,
        RootAttribute::ImplicitDative,
        RootAttribute::ImplicitP1sg,
        RootAttribute::ImplicitP2sg,
        RootAttribute::FamilyMember,
    ];

    fn bit(self) -> u32 {
        self as u32
    }
}

impl RootAttribute {
    /// Name used in dictionary metadata (`A:` chunks).
    pub fn as_str(self) -> &'static str {
        match self {
            RootAttribute::Voicing => "Voicing",
            RootAttribute::NoVoicing => "NoVoicing",
            RootAttribute::Doubling => "Doubling",
            RootAttribute::LastVowelDrop => "LastVowelDrop",
            RootAttribute::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            RootAttribute::InverseHarmony => "InverseHarmony",
            RootAttribute::CompoundP3sg => "CompoundP3sg",
            RootAttribute::CompoundP3sgRoot => "CompoundP3sgRoot",
            RootAttribute::Special => "Special",
            RootAttribute::Dummy => "Dummy",
            RootAttribute::AoristA => "Aorist_A",
            RootAttribute::AoristI => "Aorist_I",
            RootAttribute::PassiveIn => "Passive_In",
            RootAttribute::CausativeT => "Causative_t",
            RootAttribute::ImplicitPlural => "ImplicitPlural",
            RootAttribute::ImplicitDative => "ImplicitDative",
            RootAttribute::ImplicitP1sg => "ImplicitP1sg",
            RootAttribute::ImplicitP2sg => "ImplicitP2sg",
            RootAttribute::FamilyMember => "FamilyMember",
        }
    }

    /// Parse a dictionary metadata name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == name)
    }
}

impl fmt::Display for RootAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Bitset
// ---------------------------------------------------------------------------

/// A set of attributes stored as a `u32` bitmask.
///
/// `Copy` on purpose: search paths and stem rewriting take snapshots of
/// attribute state constantly, and a set must never be shared by accident.
pub struct AttributeSet<T: AttributeKind> {
    bits: u32,
    _kind: PhantomData<T>,
}

impl<T: AttributeKind> AttributeSet<T> {
    /// The empty set.
    pub const fn new() -> Self {
        AttributeSet { bits: 0, _kind: PhantomData }
    }

    /// Set containing exactly the given attributes.
    pub fn from_slice(attrs: &[T]) -> Self {
        let mut set = Self::new();
        for &a in attrs {
            set.insert(a);
        }
        set
    }

    pub fn insert(&mut self, attr: T) {
        self.bits |= 1 << attr.bit();
    }

    pub fn remove(&mut self, attr: T) {
        self.bits &= !(1 << attr.bit());
    }

    pub fn contains(&self, attr: T) -> bool {
        self.bits & (1 << attr.bit()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over set members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = T> {
        let bits = self.bits;
        T::ALL.iter().copied().filter(move |a| bits & (1 << a.bit()) != 0)
    }
}

impl<T: AttributeKind> Default for AttributeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AttributeKind> Clone for AttributeSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: AttributeKind> Copy for AttributeSet<T> {}

impl<T: AttributeKind> PartialEq for AttributeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: AttributeKind> Eq for AttributeSet<T> {}

impl<T: AttributeKind> fmt::Debug for AttributeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: AttributeKind> FromIterator<T> for AttributeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for a in iter {
            set.insert(a);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- bitset tests --

    #[test]
    fn test_insert_remove_contains() {
        let mut set = AttributeSet::new();
        assert!(set.is_empty());
        set.insert(PhoneticAttribute::LastLetterVowel);
        set.insert(PhoneticAttribute::LastVowelBack);
        assert!(set.contains(PhoneticAttribute::LastLetterVowel));
        assert!(set.contains(PhoneticAttribute::LastVowelBack));
        assert!(!set.contains(PhoneticAttribute::LastVowelFrontal));
        assert_eq!(set.len(), 2);
        set.remove(PhoneticAttribute::LastLetterVowel);
        assert!(!set.contains(PhoneticAttribute::LastLetterVowel));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = AttributeSet::new();
        set.insert(RootAttribute::Voicing);
        set.insert(RootAttribute::Voicing);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_copy_semantics() {
        let mut original = AttributeSet::from_slice(&[PhoneticAttribute::LastLetterConsonant]);
        let snapshot = original;
        original.insert(PhoneticAttribute::CannotTerminate);
        assert!(!snapshot.contains(PhoneticAttribute::CannotTerminate));
        assert_ne!(original, snapshot);
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let set = AttributeSet::from_slice(&[
            PhoneticAttribute::FirstLetterConsonant,
            PhoneticAttribute::LastLetterVowel,
            PhoneticAttribute::LastVowelFrontal,
        ]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            vec![
                PhoneticAttribute::LastLetterVowel,
                PhoneticAttribute::LastVowelFrontal,
                PhoneticAttribute::FirstLetterConsonant,
            ]
        );
    }

    #[test]
    fn test_all_variants_fit_in_u32() {
        assert!(PhoneticAttribute::ALL.len() <= 32);
        assert!(RootAttribute::ALL.len() <= 32);
        for (i, a) in PhoneticAttribute::ALL.iter().enumerate() {
            assert_eq!(a.bit() as usize, i);
        }
        for (i, a) in RootAttribute::ALL.iter().enumerate() {
            assert_eq!(a.bit() as usize, i);
        }
    }

    // -- root attribute name tests --

    #[test]
    fn test_root_attribute_parse() {
        assert_eq!(RootAttribute::parse("Voicing"), Some(RootAttribute::Voicing));
        assert_eq!(RootAttribute::parse("Aorist_A"), Some(RootAttribute::AoristA));
        assert_eq!(RootAttribute::parse("Causative_t"), Some(RootAttribute::CausativeT));
        assert_eq!(RootAttribute::parse("NotAnAttribute"), None);
        for a in RootAttribute::ALL {
            assert_eq!(RootAttribute::parse(a.as_str()), Some(*a));
        }
    }
}
