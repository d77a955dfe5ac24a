//! The per-record view rules inspect.

use crate::engine::TokenTraits;
use crate::greek::letters::lower_bases;
use crate::greek::{AccentClass, Element, PositionIndex, Syllable, index, syllables};
use crate::record::{Record, Tag};

/// A record with its token analysed once for every rule of a stage.
#[derive(Debug, Clone)]
pub(crate) struct Word<'r> {
    pub record: &'r Record,
    pub syllables: Vec<Syllable>,
    pub positions: PositionIndex,
    pub traits: TokenTraits,
}

impl<'r> Word<'r> {
    pub fn new(record: &'r Record) -> Self {
        let syllables = syllables(&record.token);
        let traits = TokenTraits::scan(&syllables);
        Word { record, syllables, positions: index(&record.token), traits }
    }

    pub fn token(&self) -> &str {
        &self.record.token
    }

    pub fn tag(&self) -> &Tag {
        &self.record.tag
    }

    pub fn lemma(&self) -> &str {
        &self.record.lemma
    }

    /// Lowercase base letters of the token.
    pub fn bases(&self) -> String {
        lower_bases(self.token())
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.syllables.iter().flat_map(Syllable::elements)
    }

    pub fn accent_class(&self) -> AccentClass {
        AccentClass::of(&self.syllables)
    }

    pub fn last_vowel(&self) -> Option<usize> {
        self.positions.last_vowel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greek::ElementKind;

    #[test]
    fn word_view() {
        let record = Record::new("Ἀθηνᾶι,", "n-s---fd-", "Ἀθηνᾶ");
        let word = Word::new(&record);
        assert_eq!(word.bases(), "αθηναι");
        assert_eq!(word.syllables.len(), 3);
        assert_eq!(word.elements().last().map(|e| e.kind), Some(ElementKind::AdscriptIota));
        assert_eq!(word.last_vowel(), Some(6));
        assert_eq!(word.accent_class(), AccentClass::Perispomenon);
        assert!(word.traits.contains(TokenTraits::HAS_CIRCUMFLEX));
    }
}
