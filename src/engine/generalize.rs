//! Cross-form generalization.
//!
//! Forms of one lemma that are spelled alike up to the last syllable share
//! their lengths:
//!
//! ```text
//! μέγιστον  μέ|γισ|τον  ^4       stem με|γισ
//! μεγίστης  με|γίσ|της  (none)   stem με|γισ  → inherits ^4
//! ```
//!
//! Records are grouped by (lemma, syllable count). Inside a group a record
//! merges the annotation of every other record that has strictly more
//! markers, is at least three letters long, and has the same
//! diacritic-stripped syllables except the last. Every group reads the
//! records as they were when the stage began; updates are applied afterwards.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::annotation::Annotation;
use crate::greek::syllables;
use crate::record::Record;
use crate::sources::StemLookup;

const MIN_LETTERS: usize = 3;

struct Profile<'r> {
    lemma: &'r str,
    syllable_count: usize,
    /// Base letters of every syllable but the last.
    stem: Vec<String>,
    morph_stem: Option<String>,
}

fn profile<'r>(record: &'r Record, stems: Option<&dyn StemLookup>) -> Option<Profile<'r>> {
    if record.lemma.is_empty() {
        return None;
    }
    let syllables = syllables(&record.token);
    let (_, init) = syllables.split_last()?;
    if init.is_empty() {
        return None;
    }
    let letters: usize = syllables.iter().map(|s| s.bases().chars().count()).sum();
    if letters < MIN_LETTERS {
        return None;
    }
    let stem: Vec<String> = init.iter().map(|s| s.bases()).collect();
    Some(Profile {
        lemma: &record.lemma,
        syllable_count: syllables.len(),
        stem,
        morph_stem: stems.and_then(|lookup| lookup.stem(&record.token, &record.tag)),
    })
}

fn cognate(a: &Profile<'_>, b: &Profile<'_>) -> bool {
    if a.stem != b.stem {
        return false;
    }
    match (&a.morph_stem, &b.morph_stem) {
        (Some(x), Some(y)) => x == y,
        _ => true,
    }
}

/// Annotations records inherit from better-annotated cognates, keyed by record index.
pub(crate) fn inherit(records: &[Record], stems: Option<&dyn StemLookup>, parallel: bool) -> Vec<(usize, Annotation)> {
    let profiles: Vec<Option<Profile<'_>>> = if parallel {
        records.par_iter().map(|r| profile(r, stems)).collect()
    } else {
        records.iter().map(|r| profile(r, stems)).collect()
    };

    let mut by_key: HashMap<(&str, usize), Vec<usize>> = HashMap::new();
    for (i, p) in profiles.iter().enumerate() {
        if let Some(p) = p {
            by_key.entry((p.lemma, p.syllable_count)).or_default().push(i);
        }
    }
    let mut groups: Vec<Vec<usize>> = by_key.into_values().filter(|g| g.len() > 1).collect();
    groups.sort_unstable_by_key(|g| g[0]);

    let within = |group: &Vec<usize>| -> Vec<(usize, Annotation)> {
        let mut out = Vec::new();
        for &target in group {
            let Some(tp) = &profiles[target] else { continue };
            let held = records[target].annotation.len();
            let mut inherited = Annotation::new();
            for &donor in group {
                if donor == target || records[donor].annotation.len() <= held {
                    continue;
                }
                let Some(dp) = &profiles[donor] else { continue };
                if cognate(tp, dp) {
                    inherited.merge(&records[donor].annotation);
                }
            }
            if !inherited.is_empty() {
                log::trace!("{} inherits {} from cognates of {}", records[target].token, inherited, tp.lemma);
                out.push((target, inherited));
            }
        }
        out
    };

    let mut updates: Vec<(usize, Annotation)> = if parallel {
        groups.par_iter().flat_map_iter(within).collect()
    } else {
        groups.iter().flat_map(within).collect()
    };
    updates.sort_unstable_by_key(|(i, _)| *i);
    updates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_markers_spread_to_less_annotated_forms() {
        let records = vec![
            Record::new("μεγίστης", "a-s---fgs", "μέγας"),
            Record::new("μέγιστον", "a-s---nas", "μέγας").with_annotation("^4"),
        ];
        for parallel in [true, false] {
            let updates = inherit(&records, None, parallel);
            assert_eq!(updates.len(), 1);
            assert_eq!(updates[0].0, 0);
            assert_eq!(updates[0].1.to_string(), "^4");
        }
    }

    #[test]
    fn whole_annotation_is_merged() {
        let records = vec![
            Record::new("μεγίστης", "a-s---fgs", "μέγας"),
            Record::new("μεγίστας", "a-p---fa-", "μέγας").with_annotation("^4_7"),
        ];
        let updates = inherit(&records, None, false);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, 0);
        assert_eq!(updates[0].1.to_string(), "^4_7");
    }

    #[test]
    fn needs_same_lemma_and_syllable_count() {
        let records = vec![
            Record::new("μεγίστης", "a-s---fgs", "μέγας"),
            Record::new("μέγιστον", "a-s---nas", "μέγιστος").with_annotation("^4"),
            Record::new("μεγιστάνων", "n-p---mg-", "μέγας").with_annotation("^4"),
        ];
        assert!(inherit(&records, None, false).is_empty());
    }

    #[test]
    fn equal_counts_do_not_exchange() {
        let records = vec![
            Record::new("μεγίστης", "a-s---fgs", "μέγας").with_annotation("_6"),
            Record::new("μέγιστον", "a-s---nas", "μέγας").with_annotation("^4"),
        ];
        assert!(inherit(&records, None, false).is_empty());
    }

    #[test]
    fn disagreeing_stems_block_inheritance() {
        use crate::sources::StemTable;

        let records = vec![
            Record::new("μεγίστης", "a-s---fgs", "μέγας"),
            Record::new("μέγιστον", "a-s---nas", "μέγας").with_annotation("^4"),
        ];
        let mut stems = StemTable::new();
        stems.insert("μεγίστης", "a-s---fgs", "μεγιστ");
        stems.insert("μέγιστον", "a-s---nas", "μεγ");
        assert!(inherit(&records, Some(&stems), false).is_empty());

        stems.insert("μέγιστον", "a-s---nas", "μεγιστ");
        assert_eq!(inherit(&records, Some(&stems), false).len(), 1);
    }
}
