//! Barytone inheritance.
//!
//! A final acute turns grave before another word, so `καλὸν` in running text
//! is the same form as the dictionary's `καλόν`. Grave-accented tokens look
//! up their acute spelling in a table built from the record set before the
//! stage starts, and take over that record's markers.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::annotation::Annotation;
use crate::greek::letters::{grave_to_acute, has_grave};
use crate::record::Record;

/// Annotations barytone records inherit, keyed by record index.
///
/// Among several records with the acute spelling the one with the most
/// markers is the donor, the earliest on a tie.
pub(crate) fn inherit(records: &[Record], parallel: bool) -> Vec<(usize, Annotation)> {
    let mut table: HashMap<&str, &Annotation> = HashMap::new();
    for record in records.iter().filter(|r| !r.annotation.is_empty()) {
        table
            .entry(record.token.as_str())
            .and_modify(|held| {
                if record.annotation.len() > held.len() {
                    *held = &record.annotation;
                }
            })
            .or_insert(&record.annotation);
    }

    let lookup = |(i, record): (usize, &Record)| -> Option<(usize, Annotation)> {
        if !has_grave(&record.token) {
            return None;
        }
        let acute = grave_to_acute(&record.token);
        let donor = table.get(acute.as_str())?;
        log::trace!("{} inherits {} from {}", record.token, donor, acute);
        Some((i, (*donor).clone()))
    };

    if parallel {
        records.par_iter().enumerate().filter_map(lookup).collect()
    } else {
        records.iter().enumerate().filter_map(lookup).collect()
    }
}
