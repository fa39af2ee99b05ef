use std::path::PathBuf;

/// Everything the prover harness and the batch loop need to know about the
/// external prover, passed in explicitly at construction time.
#[derive(Debug, Clone)]
pub(crate) struct ProverConfig {
    /// Prover executable name or path.
    pub(crate) cmd: String,
    /// Transient work file handed to the prover; reused across queries
    /// (queries are strictly sequential, so write-then-invoke is atomic
    /// per query).
    pub(crate) work_file: PathBuf,
    /// Maximum number of proof steps the prover prints.
    pub(crate) print_limit: u32,
    /// Wall-clock budget per query, in seconds.
    pub(crate) seconds: u32,
    /// Abort the whole run when the prover reports an input error.
    pub(crate) halt_on_error: bool,
    /// Where to persist per-problem error artifacts, if anywhere.
    pub(crate) error_dir: Option<PathBuf>,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            cmd: "gkc".to_owned(),
            work_file: PathBuf::from("tmpfile.txt"),
            print_limit: 10,
            seconds: 1,
            halt_on_error: false,
            error_dir: None,
        }
    }
}
