//! Positional vowel-length annotations.
//!
//! An annotation is a sparse map from base-letter ordinal to [`Length`],
//! serialized as concatenated markers in ascending position:
//!
//! ```text
//! "^1_3^7"   ->   {1: short, 3: long, 7: short}
//! ""         ->   {}
//! ```
//!
//! Insertion never overwrites: the first marker to claim a position keeps it,
//! whatever later sources say. Annotations therefore only grow, and merging an
//! annotation into itself is a no-op.

#[path = "annotation/marker.rs"]
mod marker;
#[path = "annotation/merge.rs"]
mod merge;
#[path = "annotation/source.rs"]
mod source;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AnnotationError;

pub use marker::{Length, Marker};
pub use merge::{insert, merge, position_claimed};
pub use source::SourceTag;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Annotation {
    markers: BTreeMap<usize, Length>,
}

/// Split a serialized annotation into the text before the first marker and the marker-shaped pieces.
fn pieces(s: &str) -> (&str, impl Iterator<Item = &str>) {
    let first = s.find(['_', '^']).unwrap_or(s.len());
    let tail = &s[first..];
    (&s[..first], regex!(r"[_^][^_^]*").find_iter(tail).map(|m| m.as_str()))
}

impl Annotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized annotation, rejecting anything that is not a clean marker sequence.
    pub fn parse(s: &str) -> Result<Self, AnnotationError> {
        let (prefix, markers) = pieces(s);
        if !prefix.is_empty() {
            return Err(AnnotationError::MalformedMarker(prefix.to_string()));
        }
        let mut annotation = Self::new();
        for piece in markers {
            let marker: Marker = piece.parse()?;
            if annotation.position_claimed(marker.position) {
                return Err(AnnotationError::DuplicatePosition(marker.position));
            }
            annotation.markers.insert(marker.position, marker.length);
        }
        Ok(annotation)
    }

    /// Parse what can be parsed; malformed pieces are logged and dropped,
    /// repeated positions keep their first claim.
    pub fn parse_lossy(s: &str) -> Self {
        let (prefix, markers) = pieces(s);
        if !prefix.trim().is_empty() {
            log::warn!("dropping malformed annotation text {:?} in {:?}", prefix, s);
        }
        let mut annotation = Self::new();
        for piece in markers {
            match piece.parse::<Marker>() {
                Ok(marker) => {
                    annotation.insert(marker);
                }
                Err(err) => log::warn!("{} in {:?}", err, s),
            }
        }
        annotation
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<Length> {
        self.markers.get(&position).copied()
    }

    /// True iff `position` already carries a marker, whatever its length.
    pub fn position_claimed(&self, position: usize) -> bool {
        self.markers.contains_key(&position)
    }

    /// Insert `marker` unless its position is already claimed. Returns whether the annotation changed.
    pub fn insert(&mut self, marker: Marker) -> bool {
        match self.markers.get(&marker.position) {
            None => {
                self.markers.insert(marker.position, marker.length);
                true
            }
            Some(&held) => {
                if held != marker.length {
                    log::debug!(
                        "conflicting claim {} on position {} already held as {}",
                        marker,
                        marker.position,
                        Marker::new(marker.position, held)
                    );
                }
                false
            }
        }
    }

    /// Insert every marker of `other` in ascending order. Returns the number of markers added.
    pub fn merge(&mut self, other: &Annotation) -> usize {
        other.markers().filter(|&m| self.insert(m)).count()
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.iter().map(|(&position, &length)| Marker { position, length })
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for marker in self.markers() {
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

impl FromStr for Annotation {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Marker> for Annotation {
    fn from(marker: Marker) -> Self {
        let mut annotation = Self::new();
        annotation.insert(marker);
        annotation
    }
}

impl FromIterator<Marker> for Annotation {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        let mut annotation = Self::new();
        for marker in iter {
            annotation.insert(marker);
        }
        annotation
    }
}
