//! Character-level helpers for polytonic Greek.
//!
//! Diacritics are read from the canonical decomposition of a letter: the first
//! code point is the base letter, every following code point is a combining
//! mark. This covers precomposed Greek Extended glyphs and decomposed input
//! alike, so no per-glyph tables are needed here.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::decompose_canonical;

/// The core Greek alphabet a position index counts (both cases, plus final sigma).
pub const BASE_ALPHABET: &str = "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩαβγδεζηθικλμνξοπρσςτυφχψω";

const VOWELS: &str = "αεηιουωΑΕΗΙΟΥΩ";
const DICHRONA: &str = "αιυΑΙΥ";

bitflags::bitflags! {
    /// Diacritics carried by a single letter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Diacritics: u16 {
        const ACUTE      = 1 << 0;
        const GRAVE      = 1 << 1;
        const CIRCUMFLEX = 1 << 2;
        const SMOOTH     = 1 << 3;
        const ROUGH      = 1 << 4;
        const DIAERESIS  = 1 << 5;
        const SUBSCRIPT  = 1 << 6;
        const MACRON     = 1 << 7;
        const BREVE      = 1 << 8;
    }
}

impl Diacritics {
    /// Any of the three accents.
    pub const ACCENTS: Diacritics =
        Diacritics::ACUTE.union(Diacritics::GRAVE).union(Diacritics::CIRCUMFLEX);

    /// Marks that settle a vowel's length on their own.
    pub const LENGTH_FIXING: Diacritics = Diacritics::CIRCUMFLEX
        .union(Diacritics::SUBSCRIPT)
        .union(Diacritics::MACRON)
        .union(Diacritics::BREVE);
}

fn mark_flag(mark: char) -> Diacritics {
    match mark {
        '\u{0301}' => Diacritics::ACUTE,
        '\u{0300}' => Diacritics::GRAVE,
        '\u{0342}' => Diacritics::CIRCUMFLEX,
        '\u{0313}' => Diacritics::SMOOTH,
        '\u{0314}' => Diacritics::ROUGH,
        '\u{0308}' => Diacritics::DIAERESIS,
        '\u{0345}' => Diacritics::SUBSCRIPT,
        '\u{0304}' => Diacritics::MACRON,
        '\u{0306}' => Diacritics::BREVE,
        _ => Diacritics::empty(),
    }
}

/// Split a letter into its base letter and the diacritics it carries.
///
/// ```text
/// ᾷ  ->  (α, CIRCUMFLEX | SUBSCRIPT)
/// ἄ  ->  (α, SMOOTH | ACUTE)
/// τ  ->  (τ, empty)
/// ```
pub fn decompose(c: char) -> (char, Diacritics) {
    let mut base = None;
    let mut marks = Diacritics::empty();
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        } else {
            marks |= mark_flag(d);
        }
    });
    (base.unwrap_or(c), marks)
}

/// Base letter of `c` with every diacritic stripped.
pub fn base(c: char) -> char {
    decompose(c).0
}

pub fn diacritics(c: char) -> Diacritics {
    decompose(c).1
}

/// True when `c` strips down to a letter of [`BASE_ALPHABET`].
pub fn is_base_letter(c: char) -> bool {
    BASE_ALPHABET.contains(base(c))
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(base(c))
}

pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// True when `c` is an α, ι or υ whose length the spelling leaves open.
///
/// Circumflex and iota subscript imply a long vowel, an explicit macron or
/// breve states the length outright; none of those count.
pub fn is_dichronon(c: char) -> bool {
    let (base, marks) = decompose(c);
    DICHRONA.contains(base) && !marks.intersects(Diacritics::LENGTH_FIXING)
}

pub fn nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Keep only the base letters of `word`: `ᾰ̓ᾱ́ᾰτᾰ` becomes `ααατα`.
pub fn only_bases(word: &str) -> String {
    word.chars().filter(|&c| is_base_letter(c)).map(base).collect()
}

/// Lowercased [`only_bases`], used for ending and prefix comparisons.
pub fn lower_bases(word: &str) -> String {
    only_bases(word).to_lowercase()
}

pub fn has_grave(word: &str) -> bool {
    word.chars().any(|c| diacritics(c).contains(Diacritics::GRAVE) || c == '\u{0300}')
}

/// Replace every grave accent with an acute, returning NFC text.
///
/// `ἱεὶς` becomes `ἱείς`: the oxytone form a barytone was written for.
pub fn grave_to_acute(word: &str) -> String {
    word.nfd().map(|c| if c == '\u{0300}' { '\u{0301}' } else { c }).nfc().collect()
}
