use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ppi_edge_predict::pipeline::DEFAULT_OUT_DIR;
use ppi_edge_predict::{RunConfig, run, write_summary_json};

/// Predict missing edges in a PPI network using k-defective cliques.
#[derive(Parser, Debug)]
#[command(name = "ppi-edge-predict", version, about)]
struct Cli {
  /// PPI network edgelist (u v per line)
  ppi_edgelist: PathBuf,

  /// Mapping file (line i -> protein name for node i)
  mapping: PathBuf,

  /// k for k-defective clique
  k: usize,

  /// Minimum clique size (q)
  q: usize,

  /// Output directory
  #[arg(long, default_value = DEFAULT_OUT_DIR)]
  out_dir: PathBuf,

  /// Output cliques file [default: <out-dir>/defective_cliques.txt]
  #[arg(long)]
  out_cliques: Option<PathBuf>,

  /// Output predicted edges [default: <out-dir>/predicted_missing_edges.txt]
  #[arg(long)]
  out_pred: Option<PathBuf>,

  /// Solver binary [default: <work-dir>/bin/main_edgelist.out]
  #[arg(long = "bin", env = "PPI_SOLVER_BIN")]
  solver_bin: Option<PathBuf>,

  /// Solver working directory, also home of tmp/
  #[arg(long, env = "PPI_WORK_DIR", default_value = ".")]
  work_dir: PathBuf,

  /// Keep tmp/res.txt for inspection
  #[arg(long)]
  keep_tmp: bool,

  /// Also write the run summary as JSON
  #[arg(long)]
  summary_json: Option<PathBuf>,

  /// Disable the progress spinner
  #[arg(long)]
  no_progress: bool,

  /// Debug-level logging (RUST_LOG takes precedence)
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  fn to_config(&self) -> RunConfig {
    let mut config = RunConfig::new(&self.ppi_edgelist, &self.mapping, self.k, self.q);
    config.out_dir = self.out_dir.clone();
    config.out_cliques = self.out_cliques.clone();
    config.out_pred = self.out_pred.clone();
    config.solver_bin = self.solver_bin.clone();
    config.work_dir = self.work_dir.clone();
    config.keep_tmp = self.keep_tmp;
    config.progress = !self.no_progress;
    config
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let config = cli.to_config();
  let summary = run(&config).with_context(|| {
    format!(
      "predicting missing edges for {} (k={}, q={})",
      config.edgelist.display(),
      config.k,
      config.q
    )
  })?;
  print!("{summary}");

  if let Some(path) = &cli.summary_json {
    write_summary_json(path, &summary)
      .with_context(|| format!("writing summary to {}", path.display()))?;
  }
  Ok(())
}
