use crate::config::Stage;
use crate::engine::Word;
use crate::record::Record;
use crate::rules;

/// Run every rule of `stage` on one record, merging candidates in rule order.
fn run(stage: Stage, token: &str, tag: &str, lemma: &str) -> String {
    let record = Record::new(token, tag, lemma);
    let word = Word::new(&record);
    let mut annotation = record.annotation.clone();
    for rule in rules::for_stage(stage) {
        if let Some(candidate) = rule.apply(&word) {
            annotation.merge(&candidate);
        }
    }
    annotation.to_string()
}

fn check(stage: Stage, cases: &[(&str, &str, &str, &str)]) {
    for &(token, tag, lemma, expected) in cases {
        assert_eq!(run(stage, token, tag, lemma), expected, "{stage} on {token} ({tag}, {lemma})");
    }
}

#[test]
fn circumflex_examples() {
    // (token, tag, lemma, expected)
    let cases = [
        ("σφραγῖδα", "n-s---fa-", "σφραγίς", "_6"),
        ("ψυχῆς", "n-s---fg-", "ψυχή", "_4"),
        ("ἀγγεῖλαι", "v--ana---", "ἀγγέλλω", ""),
        ("οὖν", "d--------", "οὖν", ""),
        ("Ἀθηνᾶι", "n-s---fd-", "Ἀθηνᾶ", "_5"),
        ("ᾆσαι", "v--ana---", "ᾄδω", "_1"),
        ("λόγος", "n-s---mn-", "λόγος", ""),
    ];
    check(Stage::Circumflex, &cases);
}

#[test]
fn breve_ultima_examples() {
    let cases = [
        ("αἷμα", "n-s---nn-", "αἷμα", "^4"),
        ("ποίησις", "n-s---fn-", "ποίησις", "^6"),
        ("λήμματα", "n-p---nn-", "λῆμμα", ""),
        ("ἄγαν", "d--------", "ἄγαν", ""),
        ("δοῦλοι", "n-p---mn-", "δοῦλος", ""),
        ("μοῦσα", "n-s---fn-", "μοῦσα", "^5"),
    ];
    check(Stage::Accent, &cases);
}

#[test]
fn nominal_examples() {
    let cases = [
        // long feminine -ας
        ("παιδείας", "n-p---fa-", "παιδεία", "_7"),
        ("παιδείας", "n-s---fg-", "παιδεία", "_7"),
        ("τιμάς", "n-p---fa-", "τιμή", "_4"),
        ("οὐρείας", "a-p---fa-", "οὔρειος", "_6"),
        ("ὁπλίτας", "n-p---ma-", "ὁπλίτης", ""),
        ("ἐλπίδας", "n-p---fa-", "ἐλπίς", ""),
        // short masculine/neuter -α
        ("ἀγάλματα", "n-p---na-", "ἄγαλμα", "^8"),
        ("σώματα", "n-p---nn-", "σῶμα", "^6"),
        ("χώρα", "n-s---fn-", "χώρα", ""),
        // short dative -ι
        ("ἀγάλμασι", "n-p---nd-", "ἄγαλμα", "^8"),
        ("ἁβροσύνηι", "n-s---fd-", "ἁβροσύνη", ""),
        ("πόλει", "n-s---fd-", "πόλις", ""),
        ("ἀγάλμασι", "n-p---na-", "ἄγαλμα", ""),
    ];
    check(Stage::Nominal, &cases);
}

#[test]
fn prefix_examples() {
    let cases = [
        ("συνεργάτης", "n-s---mn-", "συνεργάτης", "^2"),
        ("σύνδεσμος", "n-s---mn-", "σύνδεσμος", "^2"),
        ("Συνέδριον", "n-s---nn-", "συνέδριον", "^2"),
        ("διασυνδέσεις", "n-p---fa-", "διασύνδεσις", ""),
        ("σῦς", "n-s---mn-", "σῦς", ""),
    ];
    check(Stage::Prefix, &cases);
}

#[test]
fn non_rule_stages_have_no_rules() {
    for stage in [Stage::Lexicon, Stage::Metrical, Stage::Barytone, Stage::Generalize] {
        assert!(rules::for_stage(stage).is_empty(), "{stage}");
    }
}

#[test]
fn rule_names_are_unique() {
    let mut names: Vec<&str> = [Stage::Circumflex, Stage::Accent, Stage::Nominal, Stage::Prefix]
        .into_iter()
        .flat_map(rules::for_stage)
        .map(|r| r.name)
        .collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}
