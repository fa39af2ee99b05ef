//! The normalization pipeline: Unicode FOL text in, prover-syntax clauses
//! out.
//!
//! Per clause line the order is symbols → quantifier rewrite → case-fold →
//! identifier sanitize; segmentation into sentences runs on the normalized
//! text of a whole premise entry (the segmenter's connective lookahead
//! only knows the ASCII tokens).

use std::collections::BTreeSet;

use log::debug;

pub(crate) mod identifiers;
pub(crate) mod quantifiers;
pub(crate) mod segment;
pub(crate) mod symbols;
pub(crate) mod variables;

use identifiers::sanitize_identifiers;
use quantifiers::rewrite_quantifiers;
use segment::split_sentences;
use symbols::replace_symbols;
use variables::fold_variables;

/// Normalized text of one FOL string (possibly several newline-separated
/// clause lines) together with every variable name bound in it plus the
/// inherited ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedFol {
    pub(crate) text: String,
    pub(crate) vars: BTreeSet<String>,
}

/// Runs the per-line normalization passes over `fol`. Each line is folded
/// with its own bound variables plus `inherited`; `inherited` carries
/// variable names discovered in a prior pass over sibling clauses, so a
/// name bound in the premises is uppercased consistently in the conclusion
/// even where the conclusion leaves it free.
pub(crate) fn normalize_fol(fol: &str, inherited: &BTreeSet<String>) -> NormalizedFol {
    let mut vars = inherited.clone();
    let mut lines = Vec::with_capacity(1);

    for line in fol.split('\n') {
        let line = replace_symbols(line);
        let (bound, line) = rewrite_quantifiers(&line);

        let mut fold_set: BTreeSet<String> = bound.iter().cloned().collect();
        fold_set.extend(inherited.iter().cloned());
        let line = fold_variables(&line, &fold_set);
        let line = sanitize_identifiers(&line);

        vars.extend(bound.iter().cloned());
        lines.push(line);
    }

    NormalizedFol {
        text: lines.join("\n"),
        vars,
    }
}

/// Normalizes and segments each premise entry, returning one clause per
/// entry plus the accumulated variable set for the whole premise pass.
///
/// Two deliberately lossy policies from the source data-handling are kept
/// as-is: an entry that segments into several top-level sentences
/// contributes only its first one, and an entry yielding no complete
/// sentence (unbalanced or paren-free) contributes nothing.
pub(crate) fn premises_to_clauses(entries: &[String]) -> (Vec<String>, BTreeSet<String>) {
    let mut vars = BTreeSet::new();
    let mut clauses = Vec::with_capacity(entries.len());

    for entry in entries {
        let normalized = normalize_fol(entry, &BTreeSet::new());
        vars.extend(normalized.vars);
        let mut sentences = split_sentences(&normalized.text).into_iter();
        match sentences.next() {
            Some(first) => {
                if sentences.next().is_some() {
                    debug!("Premise decomposed into several sentences; keeping the first");
                }
                clauses.push(first);
            }
            None => debug!("Premise yielded no complete sentence, dropped: {}", entry),
        }
    }

    (clauses, vars)
}

/// Normalizes the conclusion against the premises' variable set. No
/// segmentation and no trailing `.` here: the problem assembler wraps the
/// conclusion into a goal clause itself.
pub(crate) fn conclusion_to_clause(fol: &str, premise_vars: &BTreeSet<String>) -> String {
    normalize_fol(fol, premise_vars).text
}
