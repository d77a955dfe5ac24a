use crate::engine::Word;
use crate::greek::AccentClass;
use crate::greek::letters::lower_bases;

/// Returns true when the token's base letters end with `ending`.
pub fn token_ends_with(word: &Word<'_>, ending: &str) -> bool {
    word.bases().ends_with(ending)
}

/// Returns true when the lemma's base letters end with one of `endings`.
pub fn lemma_ends_with_any(word: &Word<'_>, endings: &[&str]) -> bool {
    let lemma = lower_bases(word.lemma());
    endings.iter().any(|e| lemma.ends_with(e))
}

/// Returns true when the accent forces a short ultima: circumflex on the
/// penult, or acute on the antepenult.
pub fn short_ultima_accent(word: &Word<'_>) -> bool {
    matches!(word.accent_class(), AccentClass::Properispomenon | AccentClass::Proparoxytone)
}

/// Returns true when the ultima holds a bare dichronon and no earlier syllable does.
pub fn only_ultima_dichronon(word: &Word<'_>) -> bool {
    match word.syllables.split_last() {
        Some((ultima, init)) => ultima.has_true_dichronon() && !init.iter().any(|s| s.has_true_dichronon()),
        None => false,
    }
}
