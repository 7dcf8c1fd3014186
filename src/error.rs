use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictError>;

/// Every way a prediction run can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum PredictError {
  #[error("I/O error on {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{path}:{line}: {message}")]
  InputFormat {
    path: PathBuf,
    line: usize,
    message: String,
  },

  #[error("Missing binary: {path}")]
  MissingBinary { path: PathBuf },

  #[error("solver {binary} failed with {status}")]
  SolverExecution { binary: PathBuf, status: ExitStatus },

  #[error(
    "Result file {path} is incomplete (lines={lines}). Did the solver run successfully?"
  )]
  IncompleteResult { path: PathBuf, lines: usize },

  #[error("{path}:{line}: malformed solver output: {message}")]
  ResultFormat {
    path: PathBuf,
    line: usize,
    message: String,
  },

  #[error("clique {clique:?} has {missing} missing pairs, more than k={k}")]
  InvariantViolation {
    clique: Vec<usize>,
    missing: usize,
    k: usize,
  },
}

impl PredictError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    PredictError::Io {
      path: path.into(),
      source,
    }
  }
}
