//! Syllabification.
//!
//! Four passes over the classified elements of each word:
//!
//! ```text
//!  segment        ἄ μ μ ι
//!  nucleate       [ἄμμ] [ι]          every nucleus opens a syllable
//!  resyllabify    [ἄμ] [μι]          coda keeps one consonant, the rest move on
//!  merge leading  (no-op here)       a nucleus-less first syllable joins the next
//! ```
//!
//! A single consonant between nuclei always moves to the following onset. A
//! cluster of two or more leaves exactly one consonant behind, so muta cum
//! liquida splits: `πατρός` is `πατ|ρός`.

use std::fmt;

use super::classify::{Element, ElementKind, preprocess, segment};
use super::letters::{Diacritics, diacritics, lower_bases};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    elements: Vec<Element>,
}

impl Syllable {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn text(&self) -> String {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn nucleus(&self) -> Option<&Element> {
        self.elements.iter().find(|e| e.kind.is_nucleus())
    }

    /// Ends in its nucleus, with no coda consonant.
    pub fn is_open(&self) -> bool {
        self.elements.last().is_some_and(|e| e.kind.is_nucleus())
    }

    pub fn has_true_dichronon(&self) -> bool {
        self.elements.iter().any(Element::is_true_dichronon)
    }

    /// Lowercase base letters, diacritics stripped.
    pub fn bases(&self) -> String {
        lower_bases(&self.text())
    }

    pub fn has_mark(&self, mark: Diacritics) -> bool {
        self.elements.iter().flat_map(|e| e.text.chars()).any(|c| diacritics(c).intersects(mark))
    }

    /// The accent written on this syllable, if any.
    pub fn accent(&self) -> Option<Diacritics> {
        self.elements
            .iter()
            .flat_map(|e| e.text.chars())
            .map(|c| diacritics(c) & Diacritics::ACCENTS)
            .find(|d| !d.is_empty())
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            f.write_str(&element.text)?;
        }
        Ok(())
    }
}

/// Syllables of `token` with their classified elements.
///
/// Whitespace-separated words are syllabified independently and concatenated.
pub fn syllables(token: &str) -> Vec<Syllable> {
    let elements = segment(&preprocess(token));
    elements
        .split(|e| e.kind == ElementKind::WordBreak)
        .filter(|word| !word.is_empty())
        .flat_map(syllabify_word)
        .collect()
}

/// Syllable strings of `token`; their concatenation is the preprocessed token.
pub fn syllabify(token: &str) -> Vec<String> {
    syllables(token).iter().map(Syllable::text).collect()
}

fn syllabify_word(elements: &[Element]) -> Vec<Syllable> {
    let mut raw = nucleate(elements);
    if raw.len() > 1 {
        resyllabify(&mut raw);
        merge_leading(&mut raw);
    }
    raw.into_iter().map(|elements| Syllable { elements }).collect()
}

fn nucleate(elements: &[Element]) -> Vec<Vec<Element>> {
    let mut raw: Vec<Vec<Element>> = Vec::new();
    let mut open: Vec<Element> = Vec::new();
    for element in elements {
        if element.kind.is_nucleus() && !open.is_empty() {
            raw.push(std::mem::take(&mut open));
        }
        open.push(element.clone());
    }
    if !open.is_empty() {
        raw.push(open);
    }
    raw
}

fn has_nucleus(elements: &[Element]) -> bool {
    elements.iter().any(|e| e.kind.is_nucleus())
}

fn resyllabify(raw: &mut [Vec<Element>]) {
    for i in 0..raw.len() - 1 {
        if !has_nucleus(&raw[i]) {
            continue;
        }
        let coda = raw[i].iter().rev().take_while(|e| e.kind.is_consonant()).count();
        let moving = match coda {
            0 => continue,
            1 => 1,
            n => n - 1,
        };
        let split = raw[i].len() - moving;
        let onset: Vec<Element> = raw[i].drain(split..).collect();
        raw[i + 1].splice(0..0, onset);
    }
}

fn merge_leading(raw: &mut Vec<Vec<Element>>) {
    if raw.len() > 1 && !has_nucleus(&raw[0]) {
        let leading = raw.remove(0);
        raw[0].splice(0..0, leading);
    }
}
