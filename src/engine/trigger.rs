//! Trigger scanning (token pre-classification).
//!
//! Before any rule runs, the syllabified token is scanned once for coarse
//! traits: whether it carries a circumflex and whether it has a dichronon
//! whose length is still open. Rules declare the traits they need in their
//! `requires` mask and are skipped without running their production when the
//! token lacks one.
//!
//! ## Design notes
//!
//! - The scan is a superset check. A rule that passes the mask still has to
//!   find its own evidence.
//! - The scan reads the classified elements, so a dichronon inside a
//!   diphthong does not set `HAS_DICHRONON`.

use crate::greek::letters::{Diacritics, diacritics};
use crate::greek::Syllable;

bitflags::bitflags! {
    /// Coarse traits of a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenTraits: u32 {
        const HAS_CIRCUMFLEX = 1 << 0;
        const HAS_DICHRONON  = 1 << 1;
    }
}

impl TokenTraits {
    pub fn scan(syllables: &[Syllable]) -> Self {
        let mut traits = TokenTraits::empty();

        for element in syllables.iter().flat_map(Syllable::elements) {
            if element.is_true_dichronon() {
                traits |= TokenTraits::HAS_DICHRONON;
            }
            if element.text.chars().any(|c| diacritics(c).contains(Diacritics::CIRCUMFLEX)) {
                traits |= TokenTraits::HAS_CIRCUMFLEX;
            }
        }

        traits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greek::syllables;

    #[test]
    fn scan_reads_circumflex_and_open_dichrona() {
        assert_eq!(
            TokenTraits::scan(&syllables("σφραγῖδα")),
            TokenTraits::HAS_CIRCUMFLEX | TokenTraits::HAS_DICHRONON
        );
        assert_eq!(TokenTraits::scan(&syllables("καλὸν")), TokenTraits::HAS_DICHRONON);
        assert_eq!(TokenTraits::scan(&syllables("λόγος")), TokenTraits::empty());
        assert_eq!(TokenTraits::scan(&syllables("οὐ")), TokenTraits::empty());
    }
}
