//! The dual-query protocol: two refutation queries against one prover
//! reduce to a three-valued entailment verdict.

use std::fmt::Display;

use anyhow::Result;
use log::info;

use crate::problem::ProblemPair;
use crate::prover::{QueryOutcome, RunQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    True,
    False,
    Uncertain,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Verdict::True => "True",
            Verdict::False => "False",
            Verdict::Uncertain => "Uncertain",
        })
    }
}

impl Verdict {
    pub(crate) fn matches_label(&self, label: &str) -> bool {
        self.to_string() == label
    }
}

/// The raw outcomes of the (at most) two queries. The verdict is always
/// derived from these, never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub(crate) positive: QueryOutcome,
    /// None when the positive query already settled the verdict.
    pub(crate) negative: Option<QueryOutcome>,
}

impl Resolution {
    pub(crate) fn verdict(&self) -> Verdict {
        match (&self.positive, &self.negative) {
            (QueryOutcome::ProofFound, _) => Verdict::True,
            (_, Some(QueryOutcome::ProofFound)) => Verdict::False,
            _ => Verdict::Uncertain,
        }
    }

    /// The prover errors encountered, tagged with the query they came
    /// from, for artifact persistence and the halt-on-error switch.
    pub(crate) fn errors(&self) -> Vec<(QueryKind, &str)> {
        let mut errors = Vec::new();
        if let QueryOutcome::ProverError(text) = &self.positive {
            errors.push((QueryKind::Positive, text.as_str()));
        }
        if let Some(QueryOutcome::ProverError(text)) = &self.negative {
            errors.push((QueryKind::Negative, text.as_str()));
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QueryKind {
    Positive,
    Negative,
}

impl QueryKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Positive => "positive",
            QueryKind::Negative => "negative",
        }
    }
}

/// Runs the protocol: the positive problem (premises + negated
/// conclusion) first; a refutation there settles True and the negative
/// query is never issued. Otherwise the negative problem (premises + bare
/// conclusion) decides between False and Uncertain.
pub(crate) fn resolve(prover: &mut impl RunQuery, problems: &ProblemPair) -> Result<Resolution> {
    let positive = prover.run_query(&problems.positive)?;
    info!("Positive query outcome: {:?}", positive);
    if positive == QueryOutcome::ProofFound {
        return Ok(Resolution {
            positive,
            negative: None,
        });
    }

    let negative = prover.run_query(&problems.negative)?;
    info!("Negative query outcome: {:?}", negative);
    Ok(Resolution {
        positive,
        negative: Some(negative),
    })
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::problem::assemble;
    use crate::prover::{QueryOutcome, RunQuery};

    use super::{resolve, QueryKind, Verdict};

    /// Scripted prover: hands out pre-arranged outcomes and records the
    /// problems it was asked.
    struct ScriptedProver {
        outcomes: Vec<QueryOutcome>,
        asked: Vec<String>,
    }

    impl ScriptedProver {
        fn new(outcomes: Vec<QueryOutcome>) -> Self {
            Self {
                outcomes,
                asked: Vec::new(),
            }
        }
    }

    impl RunQuery for ScriptedProver {
        fn run_query(&mut self, problem: &str) -> Result<QueryOutcome> {
            self.asked.push(problem.to_owned());
            Ok(self.outcomes.remove(0))
        }
    }

    #[test]
    fn refuted_negated_conclusion_is_true_without_second_query() {
        let problems = assemble(&["p(a).".to_owned()], "q(a)");
        let mut prover = ScriptedProver::new(vec![QueryOutcome::ProofFound]);
        let resolution = resolve(&mut prover, &problems).unwrap();
        assert_eq!(resolution.verdict(), Verdict::True);
        assert_eq!(prover.asked, [problems.positive.clone()]);
    }

    #[test]
    fn refuted_conclusion_is_false() {
        let problems = assemble(&["p(a).".to_owned()], "q(a)");
        let mut prover =
            ScriptedProver::new(vec![QueryOutcome::NoProof, QueryOutcome::ProofFound]);
        let resolution = resolve(&mut prover, &problems).unwrap();
        assert_eq!(resolution.verdict(), Verdict::False);
        assert_eq!(
            prover.asked,
            [problems.positive.clone(), problems.negative.clone()]
        );
    }

    #[test]
    fn two_inconclusive_queries_are_uncertain() {
        let problems = assemble(&["p(a).".to_owned()], "q(a)");
        let mut prover = ScriptedProver::new(vec![QueryOutcome::NoProof, QueryOutcome::NoProof]);
        let resolution = resolve(&mut prover, &problems).unwrap();
        assert_eq!(resolution.verdict(), Verdict::Uncertain);
        assert!(resolution.errors().is_empty());
    }

    #[test]
    fn erroring_query_is_uncertain_and_reported() {
        let problems = assemble(&["p(a).".to_owned()], "q(a)");
        let mut prover = ScriptedProver::new(vec![
            QueryOutcome::ProverError("syntax error".to_owned()),
            QueryOutcome::NoProof,
        ]);
        let resolution = resolve(&mut prover, &problems).unwrap();
        assert_eq!(resolution.verdict(), Verdict::Uncertain);
        assert_eq!(
            resolution.errors(),
            [(QueryKind::Positive, "syntax error")]
        );
    }

    #[test]
    fn verdict_strings_match_labels() {
        assert!(Verdict::True.matches_label("True"));
        assert!(Verdict::Uncertain.matches_label("Uncertain"));
        assert!(!Verdict::False.matches_label("True"));
    }
}
