use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::error::{PredictError, Result};

/// Produces the raw k-defective clique listing for an edgelist.
pub trait SolverRunner {
  /// Runs to completion, leaving the solver's stdout verbatim in `capture`.
  fn run(&self, edgelist: &Path, k: usize, q: usize, capture: &Path) -> Result<()>;
}

/// The external solver binary, invoked as `<binary> <edgelist> <k> <q>`.
#[derive(Debug, Clone)]
pub struct ProcessSolver {
  binary: PathBuf,
  cwd: PathBuf,
  progress: bool,
}

impl ProcessSolver {
  /// Fails with `MissingBinary` if nothing exists at `binary`.
  pub fn new(binary: &Path, cwd: &Path) -> Result<Self> {
    if !binary.exists() {
      return Err(PredictError::MissingBinary {
        path: binary.to_path_buf(),
      });
    }
    // The child runs in `cwd`, so relative paths must be pinned first.
    let binary = fs::canonicalize(binary).map_err(|e| PredictError::io(binary, e))?;
    Ok(ProcessSolver {
      binary,
      cwd: cwd.to_path_buf(),
      progress: true,
    })
  }

  pub fn with_progress(mut self, progress: bool) -> Self {
    self.progress = progress;
    self
  }

  fn spinner(&self) -> ProgressBar {
    if !self.progress {
      return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
      ProgressStyle::with_template("[solve] {spinner} {elapsed_precise} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
  }
}

impl SolverRunner for ProcessSolver {
  fn run(&self, edgelist: &Path, k: usize, q: usize, capture: &Path) -> Result<()> {
    let edgelist = fs::canonicalize(edgelist).map_err(|e| PredictError::io(edgelist, e))?;
    let out = File::create(capture).map_err(|e| PredictError::io(capture, e))?;

    tracing::info!(
      binary = %self.binary.display(),
      edgelist = %edgelist.display(),
      k,
      q,
      "running solver"
    );
    let pb = self.spinner();
    pb.set_message(format!("k={k} q={q}"));

    let status = Command::new(&self.binary)
      .arg(&edgelist)
      .arg(k.to_string())
      .arg(q.to_string())
      .current_dir(&self.cwd)
      .stdin(Stdio::null())
      .stdout(out)
      .status()
      .map_err(|e| PredictError::io(&self.binary, e));
    pb.finish_and_clear();

    let status = status?;
    if !status.success() {
      return Err(PredictError::SolverExecution {
        binary: self.binary.clone(),
        status,
      });
    }
    tracing::info!(capture = %capture.display(), "solver finished");
    Ok(())
  }
}
