//! Grapheme classification.
//!
//! A preprocessed word is cut into *elements*: the units the syllabifier moves
//! around. An element is a diphthong, a vowel carrying an adscript or subscript
//! iota, a bare vowel, or one consonant of a known class.
//!
//! ```text
//! "ἀγγεῖλαι"
//!    │
//!    ▼
//!  ἀ     γ     γ     εῖ              λ       αι
//!  vowel stop  stop  diphthong_iota  liquid  diphthong_iota
//! ```
//!
//! Classification is maximal munch over one fixed table: the two-letter
//! patterns are tried before the single vowel, so `αι` never splits into two
//! nuclei.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::letters::{is_base_letter, is_combining_mark, is_dichronon, nfc};

/// Characters the source corpus uses as punctuation or editorial markup.
const NOISE: &[char] = &[
    '\n', '\'', '(', ')', ',', '-', '.', '\u{00B7}', '\u{0387}', ';', '\u{037E}', '<', '>', '[', ']', '«', '»',
    '†', '—', '–', '‘', '’', '\u{02BC}', '×', '⏑', '⏓',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    DiphthongUpsilon,
    DiphthongIota,
    AdscriptIota,
    SubscriptIota,
    Stop,
    Liquid,
    Nasal,
    DoubleConsonant,
    Sibilant,
    Vowel,
    /// Anything the table does not recognise; passed through as one character.
    Unclassified,
    WordBreak,
}

impl ElementKind {
    pub fn is_nucleus(self) -> bool {
        matches!(
            self,
            ElementKind::DiphthongUpsilon
                | ElementKind::DiphthongIota
                | ElementKind::AdscriptIota
                | ElementKind::SubscriptIota
                | ElementKind::Vowel
        )
    }

    pub fn is_consonant(self) -> bool {
        matches!(
            self,
            ElementKind::Stop
                | ElementKind::Liquid
                | ElementKind::Nasal
                | ElementKind::DoubleConsonant
                | ElementKind::Sibilant
        )
    }

    /// Two written vowels forming one nucleus, where the second is a glide.
    pub fn is_diphthong(self) -> bool {
        matches!(self, ElementKind::DiphthongUpsilon | ElementKind::DiphthongIota | ElementKind::AdscriptIota)
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::DiphthongUpsilon => "diphthong_upsilon",
            ElementKind::DiphthongIota => "diphthong_iota",
            ElementKind::AdscriptIota => "adscript_iota",
            ElementKind::SubscriptIota => "subscript_iota",
            ElementKind::Stop => "stop",
            ElementKind::Liquid => "liquid",
            ElementKind::Nasal => "nasal",
            ElementKind::DoubleConsonant => "double_consonant",
            ElementKind::Sibilant => "sibilant",
            ElementKind::Vowel => "vowel",
            ElementKind::Unclassified => "unclassified",
            ElementKind::WordBreak => "word_break",
        }
    }
}

/// One classified run of characters.
///
/// `ordinals` is the range of base-letter positions (1-based) the element
/// covers in its token; it is empty for elements with no base letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub ordinals: Range<usize>,
}

impl Element {
    /// Characters paired with the ordinal of each base letter among them.
    pub fn indexed_chars(&self) -> impl Iterator<Item = (char, Option<usize>)> + '_ {
        let mut next = self.ordinals.start;
        self.text.chars().map(move |c| {
            if is_base_letter(c) {
                next += 1;
                (c, Some(next - 1))
            } else {
                (c, None)
            }
        })
    }

    /// A bare α, ι or υ nucleus: not part of a diphthong, no circumflex, no iota subscript.
    pub fn is_true_dichronon(&self) -> bool {
        self.kind == ElementKind::Vowel && self.text.chars().next().is_some_and(is_dichronon)
    }
}

// --- Pattern table ---

const DIPHTHONG_UPSILON: &str = "(?:α|ε|η|ο)(?:υ|ὐ|ὑ|ύ|ὺ|ῦ|ὔ|ὕ|ὒ|ὓ|ὖ|ὗ)";
const DIPHTHONG_IOTA: &str = "(?:α|ε|ο|υ)(?:ι|ἰ|ἱ|ί|ὶ|ῖ|ἴ|ἵ|ἲ|ἳ|ἶ|ἷ)";
const ADSCRIPT_IOTA: &str = "[αηωἀἠὠἁἡὡάήώὰὴὼᾶῆῶὤὥὢὣἄἅἂἃἤἥἣἢἦἧἆἇὧὦ]ι";
const SUBSCRIPT_IOTA: &str = "[ᾄᾂᾆᾀᾅᾃᾇᾁᾴᾲᾷᾳᾔᾒᾖᾐᾕᾓᾗᾑῄῂῃῇᾤᾢᾦᾠᾥᾣᾧᾡῴῲῷῳ]";
const STOP: &str = "[πκτβδγφχθ]";
const LIQUID: &str = "[ρλῥῤ]";
const NASAL: &str = "[μν]";
const DOUBLE_CONSONANT: &str = "[ζξψ]";
const SIBILANT: &str = "[σς]";
const VOWEL: &str = "[αεηιουωἀἁἐἑἠἡἰἱὀὁὐὑὠὡάὰέὲήὴόὸίὶὺύώὼἄἅἔἕὄὅὂὃἤἥἴἵὔὕὤὥἂἃἒἓἢἣἲἳὒὓὢὣᾶῆῖῦῶἇἆἦἧἶἷὖὗὦὧϋϊΐῒΰῢῗῧᾰᾱῐῑῠῡ]";

/// Pattern sources in priority order.
const PATTERN_SOURCES: [(ElementKind, &str); 10] = [
    (ElementKind::DiphthongUpsilon, DIPHTHONG_UPSILON),
    (ElementKind::DiphthongIota, DIPHTHONG_IOTA),
    (ElementKind::AdscriptIota, ADSCRIPT_IOTA),
    (ElementKind::SubscriptIota, SUBSCRIPT_IOTA),
    (ElementKind::Stop, STOP),
    (ElementKind::Liquid, LIQUID),
    (ElementKind::Nasal, NASAL),
    (ElementKind::DoubleConsonant, DOUBLE_CONSONANT),
    (ElementKind::Sibilant, SIBILANT),
    (ElementKind::Vowel, VOWEL),
];

// Sources are normalized so oxia and tonos spellings in the table both match NFC input.
static PATTERNS: Lazy<Vec<(ElementKind, Regex)>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|&(kind, source)| (kind, Regex::new(&format!("^(?:{})", nfc(source))).unwrap()))
        .collect()
});

/// NFC, lowercase and strip corpus punctuation.
///
/// Base letters are never added or removed, so ordinals computed on the
/// result agree with ordinals computed on the raw token.
pub fn preprocess(text: &str) -> String {
    text.to_lowercase().nfc().filter(|c| !NOISE.contains(c)).collect()
}

/// Classify the element starting at byte offset `cursor` of a preprocessed string.
///
/// Returns the kind and the byte length of the longest match, or `None` when
/// no pattern applies there.
pub fn classify_at(text: &str, cursor: usize) -> Option<(ElementKind, usize)> {
    let rest = text.get(cursor..)?;
    PATTERNS.iter().find_map(|(kind, re)| re.find(rest).map(|m| (*kind, m.end())))
}

/// Cut a preprocessed string into elements.
///
/// Whitespace becomes a [`ElementKind::WordBreak`]. A stray combining mark is
/// attached to the element before it; any other unknown character becomes an
/// [`ElementKind::Unclassified`] element and is logged.
pub fn segment(text: &str) -> Vec<Element> {
    let mut elements: Vec<Element> = Vec::new();
    let mut ordinal = 1;
    let mut cursor = 0;

    while let Some(c) = text[cursor..].chars().next() {
        if c.is_whitespace() {
            elements.push(Element { kind: ElementKind::WordBreak, text: c.to_string(), ordinals: ordinal..ordinal });
            cursor += c.len_utf8();
            continue;
        }

        if let Some((kind, len)) = classify_at(text, cursor) {
            let piece = &text[cursor..cursor + len];
            let letters = piece.chars().filter(|&ch| is_base_letter(ch)).count();
            elements.push(Element { kind, text: piece.to_string(), ordinals: ordinal..ordinal + letters });
            ordinal += letters;
            cursor += len;
            continue;
        }

        if is_combining_mark(c) {
            if let Some(prev) = elements.last_mut().filter(|e| e.kind != ElementKind::WordBreak) {
                prev.text.push(c);
                cursor += c.len_utf8();
                continue;
            }
        }

        log::warn!("unclassified character {:?} (U+{:04X}) in {:?}", c, c as u32, text);
        let letters = usize::from(is_base_letter(c));
        elements.push(Element { kind: ElementKind::Unclassified, text: c.to_string(), ordinals: ordinal..ordinal + letters });
        ordinal += letters;
        cursor += c.len_utf8();
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(word: &str) -> Vec<(String, ElementKind)> {
        segment(&preprocess(word)).into_iter().map(|e| (e.text, e.kind)).collect()
    }

    #[test]
    fn diphthongs_win_over_single_vowels() {
        use ElementKind::*;
        assert_eq!(
            kinds("ἀγγεῖλαι"),
            vec![
                ("ἀ".into(), Vowel),
                ("γ".into(), Stop),
                ("γ".into(), Stop),
                ("εῖ".into(), DiphthongIota),
                ("λ".into(), Liquid),
                ("αι".into(), DiphthongIota),
            ]
        );
        assert_eq!(kinds("οὐ")[0].1, DiphthongUpsilon);
    }

    #[test]
    fn adscript_and_subscript_are_single_nuclei() {
        assert_eq!(kinds("ηι"), vec![("ηι".into(), ElementKind::AdscriptIota)]);
        assert_eq!(kinds("ᾳ"), vec![("ᾳ".into(), ElementKind::SubscriptIota)]);
        assert_eq!(kinds("ᾶι")[0].1, ElementKind::AdscriptIota);
    }

    #[test]
    fn consonant_classes() {
        use ElementKind::*;
        let got: Vec<_> = kinds("πρμζσῤ").into_iter().map(|(_, k)| k).collect();
        assert_eq!(got, vec![Stop, Liquid, Nasal, DoubleConsonant, Sibilant, Liquid]);
    }

    #[test]
    fn length_marked_letters_are_vowels() {
        for word in ["ᾰ", "ᾱ", "ῐ", "ῑ", "ῠ", "ῡ"] {
            assert_eq!(kinds(word), vec![(word.to_string(), ElementKind::Vowel)], "{word}");
        }
    }

    #[test]
    fn preprocess_drops_noise_and_lowercases() {
        assert_eq!(preprocess("Ἀθῆναι·"), "ἀθῆναι");
        assert_eq!(preprocess("[λόγος],"), "λόγος");
        assert_eq!(preprocess("ἐστ’"), "ἐστ");
    }

    #[test]
    fn ordinals_cover_base_letters() {
        let elements = segment(&preprocess("παιδεία"));
        let ranges: Vec<_> = elements.iter().map(|e| e.ordinals.clone()).collect();
        assert_eq!(ranges, vec![1..2, 2..4, 4..5, 5..7, 7..8]);
        let chars: Vec<_> = elements[1].indexed_chars().collect();
        assert_eq!(chars, vec![('α', Some(2)), ('ι', Some(3))]);
    }

    #[test]
    fn unknown_characters_pass_through() {
        let elements = segment("λx");
        assert_eq!(elements[1].kind, ElementKind::Unclassified);
        assert_eq!(elements[1].text, "x");
        assert!(elements[1].ordinals.is_empty());
    }

    #[test]
    fn stray_combining_mark_joins_previous_element() {
        let elements = segment("ε\u{0306}ν");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text, "ε\u{0306}");
    }

    #[test]
    fn true_dichronon_excludes_diphthongs_and_circumflex() {
        let elements = segment(&preprocess("αἷμα"));
        assert!(!elements[0].is_true_dichronon());
        assert!(elements.last().is_some_and(Element::is_true_dichronon));
        assert!(!segment("ῖ")[0].is_true_dichronon());
    }
}
