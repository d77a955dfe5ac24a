//! External sources of vowel lengths.
//!
//! The pipeline only talks to the traits below. The table types are the
//! in-memory implementations the CLI loads from TSV files:
//!
//! ```text
//! lexicon     token<TAB>macrons           ἀγαθός   ^3
//! scansions   token<TAB>pattern           ὄπισθεν  ὄ^,πι_,σθεν^
//! stems       token<TAB>tag<TAB>stem      μεγίστης a-s---fgs  μεγ
//! ```
//!
//! Malformed table lines are skipped with a warning.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::annotation::{Annotation, Length, Marker};
use crate::error::Result;
use crate::greek::letters::nfc;
use crate::greek::syllables;
use crate::record::Tag;

/// Syllable lengths of one scanned occurrence, first syllable first.
pub type Scansion = Vec<Length>;

pub trait LexiconLookup: Sync {
    /// Source label written to records this lexicon annotates.
    fn label(&self) -> &str;
    fn lookup(&self, token: &str) -> Option<Annotation>;
}

pub trait MetricalLookup: Sync {
    /// Every scansion recorded for `token`; empty when the token was never scanned.
    fn scansions(&self, token: &str) -> Vec<Scansion>;
}

pub trait StemLookup: Sync {
    fn stem(&self, token: &str, tag: &Tag) -> Option<String>;
}

fn table_rows(text: &str, columns: usize, table: &str) -> Vec<Vec<String>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| {
            let row: Vec<String> = line.split('\t').map(|c| nfc(c.trim())).collect();
            if row.len() < columns || row[0].is_empty() {
                log::warn!("{} line {}: expected {} columns, skipping {:?}", table, i + 1, columns, line);
                return None;
            }
            Some(row)
        })
        .collect()
}

// --- Lexicon -----------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    label: String,
    entries: HashMap<String, Annotation>,
}

impl Lexicon {
    pub fn new(label: &str) -> Self {
        Lexicon { label: label.to_string(), entries: HashMap::new() }
    }

    /// Add an entry. A token listed twice keeps the first claim on each position.
    pub fn insert(&mut self, token: &str, annotation: Annotation) {
        self.entries.entry(nfc(token)).or_default().merge(&annotation);
    }

    pub fn parse(label: &str, text: &str) -> Self {
        let mut lexicon = Lexicon::new(label);
        for row in table_rows(text, 2, "lexicon") {
            lexicon.insert(&row[0], Annotation::parse_lossy(&row[1]));
        }
        lexicon
    }

    pub fn load(label: &str, path: &Path) -> Result<Self> {
        Ok(Self::parse(label, &fs::read_to_string(path)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexiconLookup for Lexicon {
    fn label(&self) -> &str {
        &self.label
    }

    fn lookup(&self, token: &str) -> Option<Annotation> {
        self.entries.get(token).filter(|a| !a.is_empty()).cloned()
    }
}

// --- Scansions ---------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ScansionTable {
    entries: HashMap<String, Vec<Scansion>>,
}

impl ScansionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str, scansion: Scansion) {
        self.entries.entry(nfc(token)).or_default().push(scansion);
    }

    /// Read a scanned word in `syl^,syl_,...` form into its token and lengths.
    ///
    /// `ὄ^,πι_,σθεν^` gives `("ὄπισθεν", [Short, Long, Short])`. Every syllable
    /// must end in a length symbol.
    pub fn parse_pattern(pattern: &str) -> Option<(String, Scansion)> {
        let mut token = String::new();
        let mut scansion = Scansion::new();
        for syllable in pattern.trim().split(',') {
            let mut chars = syllable.chars();
            let length = chars.next_back().and_then(Length::from_symbol)?;
            let text = chars.as_str();
            if text.is_empty() {
                return None;
            }
            token.push_str(text);
            scansion.push(length);
        }
        Some((nfc(&token), scansion))
    }

    /// Parse `token<TAB>pattern` lines. The pattern's letters must spell the token.
    pub fn parse(text: &str) -> Self {
        let mut table = ScansionTable::new();
        for row in table_rows(text, 2, "scansions") {
            match Self::parse_pattern(&row[1]) {
                Some((spelled, scansion)) if spelled == row[0] => table.insert(&row[0], scansion),
                _ => log::warn!("scansions: pattern {:?} does not scan {:?}, skipping", row[1], row[0]),
            }
        }
        table
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetricalLookup for ScansionTable {
    fn scansions(&self, token: &str) -> Vec<Scansion> {
        self.entries.get(token).cloned().unwrap_or_default()
    }
}

// --- Stems -------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct StemTable {
    entries: HashMap<(String, String), String>,
}

impl StemTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str, tag: &str, stem: &str) {
        self.entries.insert((nfc(token), tag.to_string()), nfc(stem));
    }

    pub fn parse(text: &str) -> Self {
        let mut table = StemTable::new();
        for row in table_rows(text, 3, "stems") {
            table.insert(&row[0], &row[1], &row[2]);
        }
        table
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }
}

impl StemLookup for StemTable {
    fn stem(&self, token: &str, tag: &Tag) -> Option<String> {
        self.entries.get(&(token.to_string(), tag.as_str().to_string())).cloned()
    }
}

// --- Consensus ---------------------------------------------------------------

/// Lengths every scansion of `token` agrees on.
///
/// All scansions must be identical and have as many syllables as the
/// syllabifier finds. Each open syllable whose nucleus is a bare α, ι or υ
/// then gets the scanned length at the nucleus. Closed syllables are long by
/// position and say nothing about the vowel.
pub fn metrical_consensus(token: &str, scansions: &[Scansion]) -> Option<Annotation> {
    let first = scansions.first()?;
    if scansions.iter().any(|s| s != first) {
        log::debug!("scansions of {:?} disagree", token);
        return None;
    }
    let syllables = syllables(token);
    if syllables.len() != first.len() {
        log::debug!("{:?} scanned with {} syllables, syllabified into {}", token, first.len(), syllables.len());
        return None;
    }

    let annotation: Annotation = syllables
        .iter()
        .zip(first)
        .filter(|(syllable, _)| syllable.is_open())
        .filter_map(|(syllable, &length)| {
            let nucleus = syllable.nucleus().filter(|n| n.is_true_dichronon())?;
            Some(Marker::new(nucleus.ordinals.start, length))
        })
        .collect();

    (!annotation.is_empty()).then_some(annotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scansion_pattern() {
        let (token, scansion) = ScansionTable::parse_pattern("ὄ^,πι_,σθεν^").unwrap();
        assert_eq!(token, "ὄπισθεν");
        assert_eq!(scansion, vec![Length::Short, Length::Long, Length::Short]);
        assert!(ScansionTable::parse_pattern("ὄ^,πι,σθεν^").is_none());
        assert!(ScansionTable::parse_pattern("_").is_none());
    }

    #[test]
    fn consensus_marks_open_dichrona() {
        // ἀ|νάγ|κη: only the first α stands in an open syllable
        let scansion = vec![Length::Short, Length::Long, Length::Long];
        let token = "ἀνάγκη";
        assert_eq!(syllables(token).len(), 3);
        let got = metrical_consensus(token, &[scansion.clone(), scansion]).unwrap();
        assert_eq!(got.to_string(), "^1");
    }

    #[test]
    fn consensus_requires_agreement_and_matching_length() {
        let a = vec![Length::Short, Length::Long];
        let b = vec![Length::Long, Length::Long];
        assert!(metrical_consensus("φίλος", &[a.clone(), b]).is_none());
        assert!(metrical_consensus("φίλος", &[vec![Length::Short]]).is_none());
        assert!(metrical_consensus("φίλος", &[]).is_none());
        assert_eq!(metrical_consensus("φίλος", &[a]).unwrap().to_string(), "^2");
    }

    #[test]
    fn tables_from_text() {
        let lexicon = Lexicon::parse("wiktionary", "ἀγαθός\t^3\nbad\nκαλός\t\n");
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.label(), "wiktionary");
        assert_eq!(lexicon.lookup("ἀγαθός").unwrap().to_string(), "^3");
        assert!(lexicon.lookup("καλός").is_none());

        let scansions = ScansionTable::parse("φίλος\tφί^,λος^\nφίλος\tφί_,λος^\nλόγος\tλό^,γοι^\n");
        assert_eq!(scansions.scansions("φίλος").len(), 2);
        assert!(scansions.scansions("λόγος").is_empty());

        let stems = StemTable::parse("μεγίστης\ta-s---fgs\tμεγ\n");
        assert_eq!(stems.stem("μεγίστης", &Tag::new("a-s---fgs")).as_deref(), Some("μεγ"));
        assert_eq!(stems.stem("μεγίστης", &Tag::new("a-s---fds")), None);
    }
}
