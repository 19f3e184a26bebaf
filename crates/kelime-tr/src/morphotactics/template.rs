// Suffix surface template tokenizer.
//
// A suffix transition carries a template string describing how its surface
// form is produced from the phonetic context of the preceding surface:
//
//   `lAr`    letter `l`, harmony vowel A (a/e), letter `r`
//   `+yA`    optional `y` (only after a vowel), harmony vowel A
//   `+Im`    harmony vowel I dropped after a vowel, letter `m`
//   `>dAn`   `d` devoiced to `t` after a voiceless letter
//   `lI~k`   trailing `k` that may only be followed by a consonant
//   `lI!ğ`   trailing `ğ` that must be followed by a vowel
//
// Templates are tokenized once at graph construction; the search engine
// interprets the tokens against a phonetic attribute set.

/// One unit of a suffix surface template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    /// A literal letter, always emitted.
    Letter(char),
    /// Four-way harmony vowel (ı/i/u/ü). `optional` marks the `+I` form,
    /// which is dropped template-initially after a vowel.
    VowelI { optional: bool },
    /// Two-way harmony vowel (a/e). `optional` marks the `+A` form.
    VowelA { optional: bool },
    /// A letter emitted only when the preceding surface ends with a vowel.
    Append(char),
    /// A letter devoiced when the preceding surface ends voiceless (`>d`).
    DevoiceFirst(char),
    /// A trailing letter that forces the next surface to start with a
    /// consonant (`~k`).
    LastVoiced(char),
    /// A trailing letter that forces the next surface to start with a
    /// vowel and forbids terminating here (`!ğ`).
    LastNotVoiced(char),
}

/// Iterator over the tokens of a template string.
pub struct TemplateTokenizer<'a> {
    rest: std::str::Chars<'a>,
}

impl<'a> TemplateTokenizer<'a> {
    pub fn new(template: &'a str) -> Self {
        TemplateTokenizer { rest: template.chars() }
    }
}

impl Iterator for TemplateTokenizer<'_> {
    type Item = TemplateToken;

    fn next(&mut self) -> Option<TemplateToken> {
        let c = self.rest.next()?;
        let token = match c {
            '+' => match self.rest.next() {
                Some('I') => TemplateToken::VowelI { optional: true },
                Some('A') => TemplateToken::VowelA { optional: true },
                Some(next) => TemplateToken::Append(next),
                // trailing '+' is a template authoring error; emit the sign
                // itself so it can never match real input.
                None => TemplateToken::Letter('+'),
            },
            '>' => TemplateToken::DevoiceFirst(self.rest.next()?),
            '~' => TemplateToken::LastVoiced(self.rest.next()?),
            '!' => TemplateToken::LastNotVoiced(self.rest.next()?),
            'I' => TemplateToken::VowelI { optional: false },
            'A' => TemplateToken::VowelA { optional: false },
            other => TemplateToken::Letter(other),
        };
        Some(token)
    }
}

/// Tokenize a whole template.
pub fn tokenize(template: &str) -> Vec<TemplateToken> {
    TemplateTokenizer::new(template).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use TemplateToken::*;

    #[test]
    fn test_plain_letters_and_harmony_vowels() {
        assert_eq!(
            tokenize("lAr"),
            vec![Letter('l'), VowelA { optional: false }, Letter('r')]
        );
        assert_eq!(
            tokenize("Iyor"),
            vec![VowelI { optional: false }, Letter('y'), Letter('o'), Letter('r')]
        );
    }

    #[test]
    fn test_optional_tokens() {
        assert_eq!(tokenize("+yA"), vec![Append('y'), VowelA { optional: false }]);
        assert_eq!(tokenize("+Im"), vec![VowelI { optional: true }, Letter('m')]);
        assert_eq!(
            tokenize("+ylA"),
            vec![Append('y'), Letter('l'), VowelA { optional: false }]
        );
        assert_eq!(
            tokenize("+sI"),
            vec![Append('s'), VowelI { optional: false }]
        );
    }

    #[test]
    fn test_devoice_first() {
        assert_eq!(
            tokenize(">dAn"),
            vec![DevoiceFirst('d'), VowelA { optional: false }, Letter('n')]
        );
        assert_eq!(
            tokenize(">cI"),
            vec![DevoiceFirst('c'), VowelI { optional: false }]
        );
    }

    #[test]
    fn test_boundary_markers() {
        assert_eq!(
            tokenize("lI~k"),
            vec![Letter('l'), VowelI { optional: false }, LastVoiced('k')]
        );
        assert_eq!(
            tokenize("lI!ğ"),
            vec![Letter('l'), VowelI { optional: false }, LastNotVoiced('ğ')]
        );
        assert_eq!(
            tokenize("+yAcA!ğ"),
            vec![
                Append('y'),
                VowelA { optional: false },
                Letter('c'),
                VowelA { optional: false },
                LastNotVoiced('ğ'),
            ]
        );
    }

    #[test]
    fn test_empty_template() {
        assert!(tokenize("").is_empty());
    }
}
