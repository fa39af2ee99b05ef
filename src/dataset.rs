//! Benchmark record model (one JSON object per input line) and the verdict
//! report written back out.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A FOL field that upstream encodes either as one newline-joined string
/// or as a list of strings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum FolText {
    One(String),
    Many(Vec<String>),
}

impl FolText {
    pub(crate) fn entries(&self) -> Vec<String> {
        match self {
            FolText::One(s) => vec![s.clone()],
            FolText::Many(v) => v.clone(),
        }
    }

    pub(crate) fn joined(&self) -> String {
        match self {
            FolText::One(s) => s.clone(),
            FolText::Many(v) => v.concat(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BenchmarkRecord {
    pub(crate) premises: Option<FolText>,
    #[serde(rename = "premises-FOL")]
    pub(crate) premises_fol: Option<FolText>,
    pub(crate) conclusion: Option<FolText>,
    #[serde(rename = "conclusion-FOL")]
    pub(crate) conclusion_fol: Option<String>,
    pub(crate) label: Option<String>,
}

/// One line of the verdict report.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct VerdictRecord {
    pub(crate) problem_id: usize,
    pub(crate) gold: Option<String>,
    pub(crate) prover_res: String,
}

pub(crate) fn read_jsonl(path: &Path) -> Result<Vec<BenchmarkRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Couldn't open benchmark file {}", path.display()))?;
    let mut records = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: BenchmarkRecord = serde_json::from_str(&line)
            .with_context(|| format!("Malformed benchmark record on line {}", lineno + 1))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{BenchmarkRecord, FolText};

    #[test]
    fn list_valued_premises_fol_deserializes() {
        let line = r#"{"premises": "All men are mortal. Socrates is a man.",
                       "premises-FOL": ["∀x (Man(x) → Mortal(x))", "Man(socrates)"],
                       "conclusion": "Socrates is mortal.",
                       "conclusion-FOL": "Mortal(socrates)",
                       "label": "True"}"#;
        let record: BenchmarkRecord = serde_json::from_str(line).unwrap();
        assert_eq!(
            record.premises_fol.unwrap().entries(),
            ["∀x (Man(x) → Mortal(x))", "Man(socrates)"]
        );
        assert_eq!(record.label.as_deref(), Some("True"));
    }

    #[test]
    fn string_valued_premises_fol_deserializes() {
        let line = r#"{"premises-FOL": "Man(socrates)\nMortal(socrates)",
                       "conclusion-FOL": "Mortal(socrates)"}"#;
        let record: BenchmarkRecord = serde_json::from_str(line).unwrap();
        assert_eq!(
            record.premises_fol,
            Some(FolText::One("Man(socrates)\nMortal(socrates)".to_owned()))
        );
        assert!(record.label.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let line = r#"{"premises-FOL": "P(a)", "conclusion-FOL": "P(a)",
                       "story_id": 17, "example_id": 42}"#;
        assert!(serde_json::from_str::<BenchmarkRecord>(line).is_ok());
    }
}
