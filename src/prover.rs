//! Harness around the external resolution prover. The prover is a black
//! box invoked as a subprocess and characterized only by its textual
//! outcomes.

use std::fs;
use std::process::Command;

use anyhow::{Context, Result};
use log::{debug, trace};

use crate::config::ProverConfig;

/// What one prover invocation told us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum QueryOutcome {
    /// The clause set was refuted within budget.
    ProofFound,
    /// No refutation within budget, or any unrecognized output. Final for
    /// this query; there are no retries.
    NoProof,
    /// The prover rejected the input; carries the raw output.
    ProverError(String),
}

/// Narrow capability the rest of the pipeline depends on, so nothing
/// outside this module knows about process spawning.
pub(crate) trait RunQuery {
    fn run_query(&mut self, problem: &str) -> Result<QueryOutcome>;
}

/// Subprocess-backed implementation: serializes the problem to the work
/// file and invokes the prover with a print limit and a per-query time
/// budget.
pub(crate) struct GkcProver {
    config: ProverConfig,
}

impl GkcProver {
    pub(crate) fn new(config: ProverConfig) -> Self {
        Self { config }
    }

    pub(crate) fn config(&self) -> &ProverConfig {
        &self.config
    }

    fn write_work_file(&self, problem: &str) -> Result<()> {
        fs::write(&self.config.work_file, problem).with_context(|| {
            format!(
                "Couldn't write prover work file {}",
                self.config.work_file.display()
            )
        })
    }

    /// Convert mode: asks the prover for a JSON-ish rendering of the
    /// clause set. Inspection only, not part of the entailment protocol.
    pub(crate) fn convert_to_json(&mut self, problem: &str) -> Result<String> {
        self.write_work_file(problem)?;
        let output = Command::new(&self.config.cmd)
            .arg("-convert")
            .arg("-json")
            .arg(&self.config.work_file)
            .output()
            .with_context(|| format!("Couldn't execute prover '{}'", self.config.cmd))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl RunQuery for GkcProver {
    fn run_query(&mut self, problem: &str) -> Result<QueryOutcome> {
        trace!("Problem submitted to the prover:\n{}", problem);
        self.write_work_file(problem)?;
        let output = Command::new(&self.config.cmd)
            .arg(&self.config.work_file)
            .arg("-print")
            .arg(self.config.print_limit.to_string())
            .arg("-seconds")
            .arg(self.config.seconds.to_string())
            .output()
            .with_context(|| format!("Couldn't execute prover '{}'", self.config.cmd))?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let outcome = classify_output(&stdout);
        debug!("Prover outcome: {:?}", outcome);
        Ok(outcome)
    }
}

/// Classifies raw prover stdout by its three known literal markers. The
/// "proof not found" check must come first so the longer marker is never
/// shadowed; anything unrecognized counts as inconclusive.
pub(crate) fn classify_output(stdout: &str) -> QueryOutcome {
    if stdout.contains("proof not found") {
        QueryOutcome::NoProof
    } else if stdout.contains("proof found") {
        QueryOutcome::ProofFound
    } else if stdout.contains("error") {
        QueryOutcome::ProverError(stdout.to_owned())
    } else {
        QueryOutcome::NoProof
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_output, QueryOutcome};

    #[test]
    fn proof_found_is_recognized() {
        let out = "result: proof found\nsteps: 4\n";
        assert_eq!(classify_output(out), QueryOutcome::ProofFound);
    }

    #[test]
    fn proof_not_found_is_never_proof_found() {
        let out = "result: proof not found\n";
        assert_eq!(classify_output(out), QueryOutcome::NoProof);
    }

    #[test]
    fn error_output_is_carried_verbatim() {
        let out = "syntax error at line 3\n";
        assert_eq!(
            classify_output(out),
            QueryOutcome::ProverError(out.to_owned())
        );
    }

    #[test]
    fn unrecognized_output_is_inconclusive() {
        assert_eq!(classify_output(""), QueryOutcome::NoProof);
        assert_eq!(classify_output("segfault\n"), QueryOutcome::NoProof);
    }
}
