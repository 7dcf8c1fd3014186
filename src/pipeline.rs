use serde::Serialize;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::adjacency::load_adjacency;
use crate::analyze::analyze;
use crate::decode::parse_result_file;
use crate::error::{PredictError, Result};
use crate::names::load_names;
use crate::report::{write_clique_report, write_predicted_edges};
use crate::solver::{ProcessSolver, SolverRunner};

pub const DEFAULT_OUT_DIR: &str = "output";
pub const DEFAULT_CLIQUES_FILE: &str = "defective_cliques.txt";
pub const DEFAULT_PRED_FILE: &str = "predicted_missing_edges.txt";
pub const DEFAULT_SOLVER: &str = "bin/main_edgelist.out";
const TMP_DIR: &str = "tmp";
const CAPTURE_FILE: &str = "res.txt";
// Intermediate graph the solver leaves in its working directory.
const SOLVER_GRAPH_FILE: &str = "graph.txt";

/// Parameters of one prediction run.
#[derive(Debug, Clone)]
pub struct RunConfig {
  pub edgelist: PathBuf,
  pub mapping: PathBuf,
  pub k: usize,
  pub q: usize,
  pub out_dir: PathBuf,
  pub out_cliques: Option<PathBuf>,
  pub out_pred: Option<PathBuf>,
  pub solver_bin: Option<PathBuf>,
  /// Solver working directory; holds `tmp/` and the default `bin/`.
  pub work_dir: PathBuf,
  pub keep_tmp: bool,
  pub progress: bool,
}

impl RunConfig {
  pub fn new(edgelist: impl Into<PathBuf>, mapping: impl Into<PathBuf>, k: usize, q: usize) -> Self {
    RunConfig {
      edgelist: edgelist.into(),
      mapping: mapping.into(),
      k,
      q,
      out_dir: PathBuf::from(DEFAULT_OUT_DIR),
      out_cliques: None,
      out_pred: None,
      solver_bin: None,
      work_dir: PathBuf::from("."),
      keep_tmp: false,
      progress: true,
    }
  }

  pub fn cliques_path(&self) -> PathBuf {
    self
      .out_cliques
      .clone()
      .unwrap_or_else(|| self.out_dir.join(DEFAULT_CLIQUES_FILE))
  }

  pub fn pred_path(&self) -> PathBuf {
    self
      .out_pred
      .clone()
      .unwrap_or_else(|| self.out_dir.join(DEFAULT_PRED_FILE))
  }

  pub fn solver_path(&self) -> PathBuf {
    self
      .solver_bin
      .clone()
      .unwrap_or_else(|| self.work_dir.join(DEFAULT_SOLVER))
  }

  pub fn tmp_dir(&self) -> PathBuf {
    self.work_dir.join(TMP_DIR)
  }

  pub fn capture_path(&self) -> PathBuf {
    self.tmp_dir().join(CAPTURE_FILE)
  }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
  pub cliques_written: usize,
  pub predicted_missing_edges: usize,
  pub cliques_file: PathBuf,
  pub pred_file: PathBuf,
}

impl fmt::Display for RunSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "cliques_written {}", self.cliques_written)?;
    writeln!(f, "predicted_missing_edges {}", self.predicted_missing_edges)?;
    writeln!(f, "cliques_file {}", self.cliques_file.display())?;
    writeln!(f, "pred_file {}", self.pred_file.display())
  }
}

/// Runs the external solver binary named by `config`, then decodes and reports.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
  let solver = ProcessSolver::new(&config.solver_path(), &config.work_dir)?
    .with_progress(config.progress);
  run_with_solver(config, &solver)
}

pub fn run_with_solver<S: SolverRunner + ?Sized>(config: &RunConfig, solver: &S) -> Result<RunSummary> {
  // 1) Inputs are validated before the solver is started
  let adjacency = load_adjacency(&config.edgelist)?;
  let names = load_names(&config.mapping)?;
  tracing::info!(
    edges = adjacency.edge_count(),
    nodes = adjacency.node_count(),
    names = names.len(),
    "loaded inputs"
  );

  // 2) Solve into tmp/res.txt
  let tmp_dir = config.tmp_dir();
  fs::create_dir_all(&tmp_dir).map_err(|e| PredictError::io(&tmp_dir, e))?;
  let capture = config.capture_path();
  solver.run(&config.edgelist, config.k, config.q, &capture)?;

  // 3) Decode and analyze everything before touching the outputs
  let cliques = parse_result_file(&capture)?;
  tracing::info!(decoded = cliques.len(), "decoded solver output");
  let analysis = analyze(&adjacency, cliques, config.k, config.q)?;
  tracing::info!(
    accepted = analysis.accepted.len(),
    missing_edges = analysis.missing_edges.len(),
    "analysis complete"
  );

  // 4) Reports
  fs::create_dir_all(&config.out_dir).map_err(|e| PredictError::io(&config.out_dir, e))?;
  let cliques_file = config.cliques_path();
  let pred_file = config.pred_path();
  write_report_file(&cliques_file, |w| write_clique_report(w, &analysis.accepted, &names))?;
  write_report_file(&pred_file, |w| write_predicted_edges(w, &analysis.missing_edges, &names))?;

  if !config.keep_tmp {
    cleanup(config);
  }

  Ok(RunSummary {
    cliques_written: analysis.accepted.len(),
    predicted_missing_edges: analysis.missing_edges.len(),
    cliques_file,
    pred_file,
  })
}

pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
  write_report_file(path, |w| {
    serde_json::to_writer_pretty(&mut *w, summary)?;
    writeln!(w)
  })
}

fn write_report_file<F>(path: &Path, render: F) -> Result<()>
where
  F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).map_err(|e| PredictError::io(parent, e))?;
  }
  let file = File::create(path).map_err(|e| PredictError::io(path, e))?;
  let mut writer = BufWriter::new(file);
  render(&mut writer)
    .and_then(|_| writer.flush())
    .map_err(|e| PredictError::io(path, e))
}

/// Best effort: failures are logged and never change the run's outcome.
fn cleanup(config: &RunConfig) {
  remove_quietly(&config.capture_path(), |p| fs::remove_file(p));
  remove_quietly(&config.tmp_dir(), |p| fs::remove_dir_all(p));
  remove_quietly(&config.work_dir.join(SOLVER_GRAPH_FILE), |p| fs::remove_file(p));
}

fn remove_quietly(path: &Path, remove: fn(&Path) -> io::Result<()>) {
  match remove(path) {
    Ok(()) => tracing::debug!(path = %path.display(), "removed temporary file"),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not remove temporary file"),
  }
}
