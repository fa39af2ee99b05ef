//! Combines premise clauses and a conclusion into the two problem texts
//! the dual-query protocol needs.

use itertools::Itertools;

/// The two prover inputs built from one benchmark item. Both share the
/// premise clauses verbatim; only the goal clause differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProblemPair {
    /// Premises plus the negated conclusion as goal: a refutation here
    /// means the premises entail the conclusion.
    pub(crate) positive: String,
    /// Premises plus the bare conclusion as goal: a refutation here means
    /// the premises entail its negation.
    pub(crate) negative: String,
}

/// `premises` are already `.`-terminated clauses; `conclusion` is a bare
/// clause without terminator. Clause order is preserved for determinism.
pub(crate) fn assemble(premises: &[String], conclusion: &str) -> ProblemPair {
    let joined = premises.iter().join("\n");
    ProblemPair {
        positive: format!("{}\n-({}).\n", joined, conclusion),
        negative: format!("{}\n{}.\n", joined, conclusion),
    }
}
