use crate::engine::Word;
use crate::greek::Element;
use crate::greek::letters::{Diacritics, base, diacritics};

/// Ordinals of every circumflexed letter that is not the glide of a diphthong.
///
/// In `ἀγγεῖλαι` the circumflex sits on the ι of `ει`, which says nothing
/// about a dichronon, so nothing is returned.
pub fn circumflexed_ordinals(word: &Word<'_>) -> Vec<usize> {
    word.elements()
        .flat_map(|element| {
            let glide_from = if element.kind.is_diphthong() { element.ordinals.start + 1 } else { usize::MAX };
            element
                .indexed_chars()
                .filter_map(move |(c, ordinal)| ordinal.filter(|&o| o < glide_from).map(|o| (c, o)))
        })
        .filter(|&(c, _)| diacritics(c).contains(Diacritics::CIRCUMFLEX))
        .map(|(_, ordinal)| ordinal)
        .collect()
}

/// The last nucleus of the word.
pub fn last_nucleus<'w>(word: &'w Word<'_>) -> Option<&'w Element> {
    word.elements().filter(|e| e.kind.is_nucleus()).last()
}

/// Ordinal of the final nucleus when it is a bare dichronon with base letter `letter`.
pub fn bare_final_vowel(word: &Word<'_>, letter: char) -> Option<usize> {
    let nucleus = last_nucleus(word)?;
    let first = nucleus.text.chars().next()?;
    (nucleus.is_true_dichronon() && base(first) == letter).then_some(nucleus.ordinals.start)
}
