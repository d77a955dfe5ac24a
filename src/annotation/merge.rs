//! The merge protocol over serialized annotations.
//!
//! These are the string forms of [`Annotation::position_claimed`],
//! [`Annotation::insert`] and [`Annotation::merge`], for callers that hold the
//! TSV column rather than a parsed value. A malformed candidate leaves the
//! annotation untouched.

use super::{Annotation, Marker};

/// True iff the candidate marker's position already carries any marker.
pub fn position_claimed(annotation: &str, candidate: &str) -> bool {
    match candidate.parse::<Marker>() {
        Ok(marker) => Annotation::parse_lossy(annotation).position_claimed(marker.position),
        Err(_) => false,
    }
}

/// Insert one marker, first writer wins. An empty annotation yields the candidate as written.
pub fn insert(annotation: &str, candidate: &str) -> String {
    let marker = match candidate.parse::<Marker>() {
        Ok(marker) => marker,
        Err(err) => {
            log::debug!("ignoring candidate: {}", err);
            return annotation.to_string();
        }
    };
    if annotation.is_empty() {
        return candidate.to_string();
    }
    let mut parsed = Annotation::parse_lossy(annotation);
    if parsed.insert(marker) { parsed.to_string() } else { annotation.to_string() }
}

/// Thread every marker of `candidate`, in order of appearance, through [`insert`].
pub fn merge(annotation: &str, candidate: &str) -> String {
    let mut parsed = Annotation::parse_lossy(annotation);
    let mut changed = false;
    for piece in regex!(r"[_^][^_^]*").find_iter(candidate) {
        match piece.as_str().parse::<Marker>() {
            Ok(marker) => changed |= parsed.insert(marker),
            Err(err) => log::debug!("ignoring candidate: {}", err),
        }
    }
    if changed { parsed.to_string() } else { annotation.to_string() }
}
