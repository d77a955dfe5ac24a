//! Accent class of a syllabified word.

use std::fmt;

use super::letters::Diacritics;
use super::syllabify::Syllable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentClass {
    /// Acute on the ultima.
    Oxytone,
    /// Acute on the penult.
    Paroxytone,
    /// Acute on the antepenult.
    Proparoxytone,
    /// Circumflex on the ultima.
    Perispomenon,
    /// Circumflex on the penult.
    Properispomenon,
    /// Grave on the ultima.
    Barytone,
    Unaccented,
    /// Accent placement no single word allows.
    Irregular,
}

impl AccentClass {
    /// Classify by the leftmost accented syllable.
    ///
    /// A later acute on the ultima is the one an enclitic throws back
    /// (`ἄνθρωπός τις`) and does not change the class.
    pub fn of(syllables: &[Syllable]) -> Self {
        let Some((i, accent)) = syllables.iter().enumerate().find_map(|(i, s)| s.accent().map(|a| (i, a))) else {
            return AccentClass::Unaccented;
        };
        let from_end = syllables.len() - 1 - i;
        if accent.contains(Diacritics::CIRCUMFLEX) {
            match from_end {
                0 => AccentClass::Perispomenon,
                1 => AccentClass::Properispomenon,
                _ => AccentClass::Irregular,
            }
        } else if accent.contains(Diacritics::GRAVE) {
            if from_end == 0 { AccentClass::Barytone } else { AccentClass::Irregular }
        } else {
            match from_end {
                0 => AccentClass::Oxytone,
                1 => AccentClass::Paroxytone,
                2 => AccentClass::Proparoxytone,
                _ => AccentClass::Irregular,
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AccentClass::Oxytone => "oxytone",
            AccentClass::Paroxytone => "paroxytone",
            AccentClass::Proparoxytone => "proparoxytone",
            AccentClass::Perispomenon => "perispomenon",
            AccentClass::Properispomenon => "properispomenon",
            AccentClass::Barytone => "barytone",
            AccentClass::Unaccented => "unaccented",
            AccentClass::Irregular => "irregular",
        }
    }
}

impl fmt::Display for AccentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greek::syllables;

    fn class(word: &str) -> AccentClass {
        AccentClass::of(&syllables(word))
    }

    #[test]
    fn classes() {
        assert_eq!(class("ποταμός"), AccentClass::Oxytone);
        assert_eq!(class("λόγος"), AccentClass::Paroxytone);
        assert_eq!(class("ἄνθρωπος"), AccentClass::Proparoxytone);
        assert_eq!(class("ψυχῆς"), AccentClass::Perispomenon);
        assert_eq!(class("αἷμα"), AccentClass::Properispomenon);
        assert_eq!(class("καλὸν"), AccentClass::Barytone);
        assert_eq!(class("και"), AccentClass::Unaccented);
    }

    #[test]
    fn enclitic_accent_is_ignored() {
        assert_eq!(class("ἄνθρωπόσ"), AccentClass::Proparoxytone);
    }
}
