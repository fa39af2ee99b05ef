#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};

use crate::config::ProverConfig;
use crate::dataset::{read_jsonl, VerdictRecord};
use crate::prover::GkcProver;
use crate::verdict::{resolve, QueryKind};

pub(crate) mod config;
pub(crate) mod dataset;
pub(crate) mod normalize;
pub(crate) mod problem;
pub(crate) mod prover;
pub(crate) mod verdict;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().format_timestamp(None).try_init();
}

/// Classifies FOLIO-style entailment items with an external resolution
/// prover.
#[derive(Debug, Parser)]
struct Cli {
    /// Benchmark JSONL file, one item per line.
    input: PathBuf,

    /// Max number of items to run (non-positive means all).
    #[arg(long, default_value_t = -1)]
    max: i64,

    /// Prover executable.
    #[arg(long, default_value = "gkc")]
    prover: String,

    /// Transient work file handed to the prover.
    #[arg(long, default_value = "tmpfile.txt")]
    work_file: PathBuf,

    /// Per-query wall-clock budget in seconds.
    #[arg(long, default_value_t = 1)]
    seconds: u32,

    /// Max number of proof steps the prover prints.
    #[arg(long, default_value_t = 10)]
    print_limit: u32,

    /// Abort the run on the first prover input error.
    #[arg(long)]
    halt_on_error: bool,

    /// Directory for per-problem error artifacts.
    #[arg(long)]
    error_dir: Option<PathBuf>,

    /// Verdict report output (JSONL); stdout when omitted.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Also dump the prover's JSON rendering of each premise set.
    #[arg(long)]
    dump_json: bool,
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let config = ProverConfig {
        cmd: cli.prover.clone(),
        work_file: cli.work_file.clone(),
        print_limit: cli.print_limit,
        seconds: cli.seconds,
        halt_on_error: cli.halt_on_error,
        error_dir: cli.error_dir.clone(),
    };
    let reports = run_batch(&cli, config)?;
    write_reports(cli.report.as_deref(), &reports)
}

fn run_batch(cli: &Cli, config: ProverConfig) -> Result<Vec<VerdictRecord>> {
    let records = read_jsonl(&cli.input)?;
    let mut prover = GkcProver::new(config);
    let mut reports = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        if cli.max > 0 && idx as i64 >= cli.max {
            break;
        }
        info!("=== problem {} ===", idx);
        if let Some(premises) = &record.premises {
            debug!("Premises: {}", premises.joined());
        }
        if let Some(conclusion) = &record.conclusion {
            debug!("Conclusion: {}", conclusion.joined());
        }

        let (premises_fol, conclusion_fol) = match (&record.premises_fol, &record.conclusion_fol) {
            (Some(p), Some(c)) => (p, c),
            _ => {
                warn!("Item {} lacks FOL fields, skipped", idx);
                continue;
            }
        };

        // The variable set is scoped to this item: premises first, then
        // the conclusion folded against the accumulated names.
        let (premise_clauses, premise_vars) =
            normalize::premises_to_clauses(&premises_fol.entries());
        let conclusion = normalize::conclusion_to_clause(conclusion_fol, &premise_vars);
        debug!("Premise clauses:\n{}", premise_clauses.join("\n"));
        debug!("Conclusion clause: {}", conclusion);

        if cli.dump_json {
            let json = prover.convert_to_json(&premise_clauses.join("\n"))?;
            info!("Premises in the prover's JSON rendering:\n{}", json);
        }

        let problems = problem::assemble(&premise_clauses, &conclusion);
        let resolution = resolve(&mut prover, &problems)?;

        for (kind, text) in resolution.errors() {
            let submitted = match kind {
                QueryKind::Positive => &problems.positive,
                QueryKind::Negative => &problems.negative,
            };
            error!(
                "Prover found an error in input ({} query): {}\nfull prover input:\n{}",
                kind.as_str(),
                text,
                submitted
            );
            if let Some(dir) = &prover.config().error_dir {
                let path = dir.join(format!("error_{}_{}.txt", idx, kind.as_str()));
                fs::write(&path, format!("{}\n{}", text, submitted))
                    .with_context(|| format!("Couldn't write error artifact {}", path.display()))?;
            }
            if prover.config().halt_on_error {
                bail!("Prover reported an input error on item {}", idx);
            }
        }

        let verdict = resolution.verdict();
        match &record.label {
            Some(label) if verdict.matches_label(label) => {
                info!("Label corresponds to prover result.");
            }
            Some(label) => {
                warn!(
                    "Label does not correspond to prover result: gold={}, prover={}",
                    label, verdict
                );
            }
            None => info!("Prover result: {} (no gold label)", verdict),
        }

        reports.push(VerdictRecord {
            problem_id: idx,
            gold: record.label.clone(),
            prover_res: verdict.to_string(),
        });
    }

    Ok(reports)
}

fn write_reports(path: Option<&std::path::Path>, reports: &[VerdictRecord]) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Couldn't create report file {}", path.display()))?;
            for report in reports {
                serde_json::to_writer(&mut file, report)?;
                file.write_all(b"\n")?;
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for report in reports {
                serde_json::to_writer(&mut handle, report)?;
                handle.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
