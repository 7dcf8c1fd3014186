//! Missing-edge prediction for PPI networks from k-defective clique
//! solver output.
//!
//! The external solver lists k-defective cliques in its own index space.
//! This crate maps them back to original node ids, checks that each clique
//! honours the k bound against the observed network, and reports the node
//! pairs each clique implies are missing interactions.

pub mod adjacency;
pub mod analyze;
pub mod decode;
pub mod error;
pub mod names;
pub mod pipeline;
pub mod report;
pub mod solver;

pub use adjacency::{Adjacency, load_adjacency, read_adjacency};
pub use analyze::{AcceptedClique, Analysis, Edge, analyze, canonical, missing_pairs};
pub use decode::{Clique, SolverMappings, decode_result, invert_permutation, parse_result_file};
pub use error::{PredictError, Result};
pub use names::{NameTable, load_names, read_names};
pub use pipeline::{RunConfig, RunSummary, run, run_with_solver, write_summary_json};
pub use report::{clique_line, write_clique_report, write_predicted_edges};
pub use solver::{ProcessSolver, SolverRunner};
