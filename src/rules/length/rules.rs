use crate::annotation::{Annotation, Marker};
use crate::engine::{TokenTraits, Word};
use crate::greek::letters::is_dichronon;
use crate::Rule;

use crate::rules::length::{
    helpers::{bare_final_vowel, circumflexed_ordinals},
    predicates::{lemma_ends_with_any, only_ultima_dichronon, short_ultima_accent, token_ends_with},
};

/// Prefixes with a known short dichronon, and the ordinal of that vowel.
static SHORT_PREFIXES: &[(&str, usize)] = &[("συν", 2)];

// Rules

/// A circumflex only stands on a long vowel.
fn rule_circumflex() -> Rule {
    rule! {
        name: "circumflexed vowel",
        requires: TokenTraits::HAS_CIRCUMFLEX.bits(),
        prod: |word: &Word| -> Option<Annotation> {
            Some(circumflexed_ordinals(word).into_iter().map(Marker::long).collect())
        },
    }
}

/// Properispomena and proparoxytona have a short ultima. Only fires when the
/// ultima's dichronon is the only open one in the word.
fn rule_breve_ultima() -> Rule {
    rule! {
        name: "short ultima after accent",
        requires: TokenTraits::HAS_DICHRONON.bits(),
        prod: |word: &Word| -> Option<Marker> {
            if !short_ultima_accent(word) || !only_ultima_dichronon(word) {
                return None;
            }
            word.last_vowel().map(Marker::short)
        },
    }
}

fn rule_long_feminine_as() -> Rule {
    rule! {
        name: "long feminine -ας",
        tag: r"^[na].(?:p...fa|s...fg).$",
        requires: TokenTraits::HAS_DICHRONON.bits(),
        prod: |word: &Word| -> Option<Marker> {
            if !token_ends_with(word, "ας") || !lemma_ends_with_any(word, &["η", "α", "ος"]) {
                return None;
            }
            bare_final_vowel(word, 'α').map(Marker::long)
        },
    }
}

fn rule_short_masc_neut_a() -> Rule {
    rule! {
        name: "short masc./neut. -α",
        tag: r"^n.....[mn]..$",
        requires: TokenTraits::HAS_DICHRONON.bits(),
        prod: |word: &Word| -> Option<Marker> {
            if !token_ends_with(word, "α") {
                return None;
            }
            bare_final_vowel(word, 'α').map(Marker::short)
        },
    }
}

fn rule_short_dative_i() -> Rule {
    rule! {
        name: "short dative -ι",
        tag: r"^n......d.$",
        requires: TokenTraits::HAS_DICHRONON.bits(),
        prod: |word: &Word| -> Option<Marker> {
            if !token_ends_with(word, "ι") {
                return None;
            }
            bare_final_vowel(word, 'ι').map(Marker::short)
        },
    }
}

fn rule_short_prefix() -> Rule {
    rule! {
        name: "short prefix vowel",
        prod: |word: &Word| -> Option<Annotation> {
            let bases = word.bases();
            Some(
                SHORT_PREFIXES
                    .iter()
                    .filter(|(prefix, _)| bases.starts_with(prefix))
                    .filter(|&&(_, ordinal)| word.positions.letter(ordinal).is_some_and(|l| is_dichronon(l.letter)))
                    .map(|&(_, ordinal)| Marker::short(ordinal))
                    .collect(),
            )
        },
    }
}

pub fn circumflex() -> Vec<Rule> {
    vec![rule_circumflex()]
}

pub fn accent() -> Vec<Rule> {
    vec![rule_breve_ultima()]
}

pub fn nominal() -> Vec<Rule> {
    vec![rule_long_feminine_as(), rule_short_masc_neut_a(), rule_short_dative_i()]
}

pub fn prefix() -> Vec<Rule> {
    vec![rule_short_prefix()]
}
