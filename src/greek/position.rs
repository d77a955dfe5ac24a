//! Base-letter ordinals.
//!
//! Annotations address letters by their 1-based position among the base
//! letters of a token. Breathings, accents, punctuation and combining marks
//! take no position:
//!
//! ```text
//! ἄ ν θ ρ ω π ο ς
//! 1 2 3 4 5 6 7 8
//! ```

use super::letters::{base, is_base_letter, is_vowel, nfc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedLetter {
    /// Character offset in the NFC token.
    pub offset: usize,
    pub letter: char,
    pub base: char,
    pub ordinal: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    letters: Vec<IndexedLetter>,
}

impl PositionIndex {
    pub fn new(token: &str) -> Self {
        let letters = nfc(token)
            .chars()
            .enumerate()
            .filter(|&(_, c)| is_base_letter(c))
            .enumerate()
            .map(|(i, (offset, letter))| IndexedLetter { offset, letter, base: base(letter), ordinal: i + 1 })
            .collect();
        Self { letters }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[IndexedLetter] {
        &self.letters
    }

    /// Ordinal of the letter at character `offset`, `None` off a base letter.
    pub fn ordinal_at(&self, offset: usize) -> Option<usize> {
        self.letters.binary_search_by_key(&offset, |l| l.offset).ok().map(|i| self.letters[i].ordinal)
    }

    pub fn letter(&self, ordinal: usize) -> Option<&IndexedLetter> {
        ordinal.checked_sub(1).and_then(|i| self.letters.get(i))
    }

    pub fn last_vowel(&self) -> Option<usize> {
        self.letters.iter().rev().find(|l| is_vowel(l.base)).map(|l| l.ordinal)
    }
}

pub fn index(token: &str) -> PositionIndex {
    PositionIndex::new(token)
}

pub fn ordinal_of_last_vowel(token: &str) -> Option<usize> {
    index(token).last_vowel()
}
