//! Annotated records and the five-column TSV they are stored in.
//!
//! ```text
//! token     tag        lemma    macrons  source
//! μέγιστον  a-s---nas  μέγας    ^4       wiktionary
//! ```
//!
//! The header row is carried through untouched. Missing `macrons` and
//! `source` columns read as empty; a line with fewer than three columns or an
//! empty token is skipped and reported.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use regex::Regex;

use crate::annotation::{Annotation, SourceTag};
use crate::error::{RecordError, Result};
use crate::greek::letters::nfc;

/// Minimum number of columns a record line must have.
pub const MIN_COLUMNS: usize = 3;

/// Slots of the 9-character morphology tag, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSlot {
    PartOfSpeech,
    Person,
    Number,
    Tense,
    Mood,
    Voice,
    Gender,
    Case,
    Degree,
}

/// Positional morphology code, e.g. `n-p---fa-` (noun, plural, feminine, accusative).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub const WIDTH: usize = 9;

    pub fn new(tag: impl Into<String>) -> Self {
        Tag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(&self) -> bool {
        self.0.chars().count() == Self::WIDTH
    }

    /// Value of one slot; `None` for the `-` and `.` placeholders or a short tag.
    pub fn slot(&self, slot: TagSlot) -> Option<char> {
        self.0.chars().nth(slot as usize).filter(|c| !matches!(c, '-' | '.'))
    }

    pub fn matches(&self, re: &Regex) -> bool {
        re.is_match(&self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Tag::new(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub token: String,
    pub tag: Tag,
    pub lemma: String,
    pub annotation: Annotation,
    pub source: SourceTag,
}

impl Record {
    /// A record with no annotation yet. Token and lemma are NFC-normalized.
    pub fn new(token: &str, tag: &str, lemma: &str) -> Self {
        Record {
            token: nfc(token),
            tag: Tag::new(tag),
            lemma: nfc(lemma),
            annotation: Annotation::new(),
            source: SourceTag::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: &str) -> Self {
        self.annotation = Annotation::parse_lossy(annotation);
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = SourceTag::parse(source);
        self
    }

    /// Parse one data line; `line` is the 1-based line number used in errors.
    pub fn from_tsv_line(text: &str, line: usize) -> std::result::Result<Self, RecordError> {
        let columns: Vec<&str> = text.trim_end_matches(['\r', '\n']).split('\t').collect();
        if columns.len() < MIN_COLUMNS {
            return Err(RecordError::TooFewColumns { line, expected: MIN_COLUMNS, found: columns.len() });
        }
        if columns[0].trim().is_empty() {
            return Err(RecordError::EmptyToken { line });
        }
        let column = |i: usize| columns.get(i).copied().unwrap_or("");
        Ok(Record::new(columns[0].trim(), columns[1].trim(), columns[2].trim())
            .with_annotation(column(3).trim())
            .with_source(column(4)))
    }

    pub fn to_tsv_line(&self) -> String {
        format!("{}\t{}\t{}\t{}\t{}", self.token, self.tag, self.lemma, self.annotation, self.source)
    }
}

/// What happened while reading a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadReport {
    /// Data lines seen, header excluded.
    pub lines: usize,
    pub skipped: Vec<RecordError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub header: Option<String>,
    pub records: Vec<Record>,
}

impl Corpus {
    /// Parse TSV text. The first line is always the header.
    pub fn parse(text: &str) -> (Self, ReadReport) {
        let mut lines = text.lines();
        let header = lines.next().map(|h| h.trim_end_matches('\r').to_string());
        let mut corpus = Corpus { header, records: Vec::new() };
        let mut report = ReadReport::default();

        for (i, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            report.lines += 1;
            match Record::from_tsv_line(line, i + 2) {
                Ok(record) => corpus.records.push(record),
                Err(err) => {
                    log::warn!("skipping record: {}", err);
                    report.skipped.push(err);
                }
            }
        }

        (corpus, report)
    }

    pub fn read<R: BufRead>(mut reader: R) -> Result<(Self, ReadReport)> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }

    pub fn read_path(path: &Path) -> Result<(Self, ReadReport)> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        if let Some(header) = &self.header {
            writeln!(writer, "{header}")?;
        }
        for record in &self.records {
            writeln!(writer, "{}", record.to_tsv_line())?;
        }
        writer.flush()
    }

    pub fn write_path(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        self.write(io::BufWriter::new(file))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "token\ttag\tlemma\tmacrons\tsource\n\
                          μέγιστον\ta-s---nas\tμέγας\t^4\twiktionary\n\
                          μεγίστης\ta-s---fgs\tμέγας\n\
                          broken\tline\n\
                          \n\
                          \tn-s---mn-\tκενός\n";

    #[test]
    fn parses_records_and_reports_skips() {
        let (corpus, report) = Corpus::parse(SAMPLE);
        assert_eq!(corpus.header.as_deref(), Some("token\ttag\tlemma\tmacrons\tsource"));
        assert_eq!(corpus.records.len(), 2);
        assert_eq!(corpus.records[0].annotation.to_string(), "^4");
        assert_eq!(corpus.records[0].source.to_string(), "wiktionary");
        assert!(corpus.records[1].annotation.is_empty());
        assert_eq!(report.lines, 4);
        assert_eq!(
            report.skipped,
            vec![
                RecordError::TooFewColumns { line: 4, expected: 3, found: 2 },
                RecordError::EmptyToken { line: 6 },
            ]
        );
    }

    #[test]
    fn tag_slots() {
        let tag = Tag::new("n-p---fa-");
        assert!(tag.is_well_formed());
        assert_eq!(tag.slot(TagSlot::PartOfSpeech), Some('n'));
        assert_eq!(tag.slot(TagSlot::Person), None);
        assert_eq!(tag.slot(TagSlot::Number), Some('p'));
        assert_eq!(tag.slot(TagSlot::Gender), Some('f'));
        assert_eq!(tag.slot(TagSlot::Case), Some('a'));
        assert_eq!(tag.slot(TagSlot::Degree), None);
        assert!(!Tag::new("n-p").is_well_formed());
    }

    #[test]
    fn tokens_are_normalized() {
        let record = Record::new("\u{03B1}\u{0301}\u{03BD}", "", "");
        assert_eq!(record.token, "\u{03AC}\u{03BD}");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.tsv");
        let (corpus, _) = Corpus::parse(SAMPLE);
        corpus.write_path(&path).unwrap();

        let (reread, report) = Corpus::read_path(&path).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(reread, corpus);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("μεγίστης\ta-s---fgs\tμέγας\t\t\n"));
    }
}
