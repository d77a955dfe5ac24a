use std::path::PathBuf;

use thiserror::Error;

/// A length marker or annotation string that does not follow `('_' | '^') digits`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("malformed length marker `{0}`")]
    MalformedMarker(String),
    #[error("position {0} is claimed more than once")]
    DuplicatePosition(usize),
}

/// A TSV line that cannot become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line {line}: expected at least {expected} tab-separated columns, found {found}")]
    TooFewColumns { line: usize, expected: usize, found: usize },
    #[error("line {line}: empty token")]
    EmptyToken { line: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown pipeline stage `{0}`")]
    UnknownStage(String),
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("cannot read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
