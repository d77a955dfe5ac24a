use crate::config::Options;
use crate::engine::{Pipeline, RunMetrics};
use crate::record::Record;
use crate::sources::{LexiconLookup, MetricalLookup, StemLookup};

/// Annotation context.
///
/// This holds the external sources the pipeline may consult. Every source is
/// optional; a stage whose source is missing is skipped.
#[derive(Clone, Copy, Default)]
pub struct Context<'a> {
    pub lexicon: Option<&'a dyn LexiconLookup>,
    pub metrical: Option<&'a dyn MetricalLookup>,
    pub stems: Option<&'a dyn StemLookup>,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("lexicon", &self.lexicon.map(|l| l.label()))
            .field("metrical", &self.metrical.is_some())
            .field("stems", &self.stems.is_some())
            .finish()
    }
}

/// Annotate `records` in place with the default stages and no external sources.
///
/// # Example
/// ```
/// use dichrona::{Record, annotate};
///
/// let mut records = vec![Record::new("σφραγῖδα", "n-s---fa-", "σφραγίς")];
/// annotate(&mut records);
/// assert_eq!(records[0].annotation.to_string(), "_6");
/// assert_eq!(records[0].source.to_string(), "circumflex");
/// ```
pub fn annotate(records: &mut [Record]) -> RunMetrics {
    annotate_with(records, &Context::default(), &Options::default())
}

/// Annotate `records` in place using the provided `context` and `options`.
pub fn annotate_with(records: &mut [Record], context: &Context<'_>, options: &Options) -> RunMetrics {
    Pipeline::new(context, options).run(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Annotation, Length};
    use crate::config::Stage;
    use crate::sources::{Lexicon, ScansionTable, StemTable};

    fn rec(token: &str, tag: &str, lemma: &str, annotation: &str) -> Record {
        Record::new(token, tag, lemma).with_annotation(annotation)
    }

    fn annotations(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.annotation.to_string()).collect()
    }

    #[test]
    fn cognate_forms_share_stem_lengths() {
        let mut records =
            vec![rec("μεγίστης", "a-s---fgs", "μέγας", ""), rec("μέγιστον", "a-s---nas", "μέγας", "^4")];
        let metrics = annotate(&mut records);
        assert_eq!(annotations(&records), ["^4", "^4"]);
        assert_eq!(records[0].source.to_string(), "cognate");
        assert!(records[1].source.is_empty());
        assert_eq!(metrics.stage(Stage::Generalize).map(|s| s.updated), Some(1));
    }

    #[test]
    fn cognates_pass_on_final_syllable_markers_too() {
        let mut records =
            vec![rec("μεγίστης", "a-s---fgs", "μέγας", ""), rec("μεγίστας", "a-p---fa-", "μέγας", "^4_7")];
        let options = Options::default().with_stages([Stage::Generalize]);
        annotate_with(&mut records, &Context::default(), &options);
        assert_eq!(annotations(&records), ["^4_7", "^4_7"]);
        assert_eq!(records[0].source.to_string(), "cognate");
    }

    #[test]
    fn stages_run_in_order_and_label_changes() {
        let mut records = vec![
            rec("μοῦσα", "n-s---fn-", "μοῦσα", ""),
            rec("ἀγάλμασι", "n-p---nd-", "ἄγαλμα", ""),
            rec("συνεργάτης", "n-s---mn-", "συνεργάτης", ""),
            rec("λόγος", "n-s---mn-", "λόγος", ""),
        ];
        let metrics = annotate(&mut records);
        assert_eq!(annotations(&records), ["^5", "^8", "^2", ""]);
        assert_eq!(records[0].source.to_string(), "breve_ultima");
        assert_eq!(records[1].source.to_string(), "nominal");
        assert_eq!(records[2].source.to_string(), "prefix");
        assert!(records[3].source.is_empty());

        assert_eq!(metrics.records, 4);
        assert_eq!(metrics.annotated_before, 0);
        assert_eq!(metrics.annotated_after, 3);
        assert_eq!(metrics.stages.len(), 8);
        assert!(metrics.stage(Stage::Lexicon).is_some_and(|s| s.skipped));
        assert_eq!(metrics.stage(Stage::Nominal).map(|s| s.hits("short dative -ι")), Some(1));
    }

    #[test]
    fn earlier_sources_win_disagreements() {
        let mut lexicon = Lexicon::new("wiktionary");
        lexicon.insert("μοῦσα", Annotation::parse("_5").unwrap());
        lexicon.insert("σφραγῖδα", Annotation::parse("^4").unwrap());
        let context = Context { lexicon: Some(&lexicon), ..Context::default() };

        let mut records = vec![rec("μοῦσα", "n-s---fn-", "μοῦσα", ""), rec("σφραγῖδα", "n-s---fa-", "σφραγίς", "")];
        annotate_with(&mut records, &context, &Options::default());
        assert_eq!(annotations(&records), ["_5", "^4_6"]);
        assert_eq!(records[0].source.to_string(), "wiktionary");
        assert_eq!(records[1].source.to_string(), "wiktionary,circumflex");
    }

    #[test]
    fn existing_annotations_are_never_overwritten() {
        let mut records = vec![rec("σφραγῖδα", "n-s---fa-", "σφραγίς", "^6")];
        let metrics = annotate(&mut records);
        assert_eq!(annotations(&records), ["^6"]);
        assert!(records[0].source.is_empty());
        assert_eq!(metrics.markers_added(), 0);
    }

    #[test]
    fn barytone_inherits_from_oxytone() {
        let mut records = vec![rec("καλὸν", "a-s---mas", "καλός", ""), rec("καλόν", "a-s---mas", "καλός", "^2")];
        let options = Options::default().with_stages([Stage::Barytone]);
        annotate_with(&mut records, &Context::default(), &options);
        assert_eq!(annotations(&records), ["^2", "^2"]);
        assert_eq!(records[0].source.to_string(), "barytone");
    }

    #[test]
    fn metrical_stage_uses_consensus() {
        let mut scansions = ScansionTable::new();
        scansions.insert("φίλος", vec![Length::Short, Length::Short]);
        let context = Context { metrical: Some(&scansions), ..Context::default() };
        let options = Options::default().with_stages([Stage::Metrical]);

        let mut records = vec![rec("φίλος", "a-s---mn-", "φίλος", "")];
        annotate_with(&mut records, &context, &options);
        assert_eq!(annotations(&records), ["^2"]);
        assert_eq!(records[0].source.to_string(), "metrical");
    }

    #[test]
    fn stem_lookup_gates_generalization() {
        let mut stems = StemTable::new();
        stems.insert("μεγίστης", "a-s---fgs", "μεγιστ");
        stems.insert("μέγιστον", "a-s---nas", "μεγ");
        let context = Context { stems: Some(&stems), ..Context::default() };

        let mut records =
            vec![rec("μεγίστης", "a-s---fgs", "μέγας", ""), rec("μέγιστον", "a-s---nas", "μέγας", "^4")];
        annotate_with(&mut records, &context, &Options::default());
        assert_eq!(annotations(&records), ["", "^4"]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let build = || {
            vec![
                rec("παιδείας", "n-p---fa-", "παιδεία", ""),
                rec("αἷμα", "n-s---nn-", "αἷμα", ""),
                rec("καλὸν", "a-s---mas", "καλός", ""),
                rec("καλόν", "a-s---mas", "καλός", "^2"),
                rec("μεγίστης", "a-s---fgs", "μέγας", ""),
                rec("μέγιστον", "a-s---nas", "μέγας", "^4"),
                rec("ψυχῆς", "n-s---fg-", "ψυχή", ""),
            ]
        };
        let mut parallel = build();
        let mut sequential = build();
        annotate(&mut parallel);
        annotate_with(&mut sequential, &Context::default(), &Options::default().sequential());
        assert_eq!(parallel, sequential);
    }
}
