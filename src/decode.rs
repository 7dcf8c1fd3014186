//! Decoding of the k-defective clique solver's text output.
//!
//! The solver compacts and relabels node ids before searching, and reports
//! cliques in its own index space. Two header lines carry the tables needed
//! to map those indices back:
//!
//! - line 3: `mapping1`, compacted index -> original node id
//! - line 7: `mapping2`, a permutation whose inverse maps clique-local
//!   indices to compacted indices
//!
//! Clique lines start at line 10 and run until a line beginning with `#`.

use std::fs;
use std::path::Path;

use crate::error::{PredictError, Result};

/// Node ids in original-graph numbering, in the order the solver listed them.
pub type Clique = Vec<usize>;

pub const MIN_RESULT_LINES: usize = 11;
const MAPPING1_LINE: usize = 3;
const MAPPING2_LINE: usize = 7;
const FIRST_CLIQUE_LINE: usize = 10;
const SENTINEL: char = '#';

/// Index translation tables for one result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverMappings {
  compacted_to_original: Vec<usize>,
  local_to_compacted: Vec<usize>,
}

impl SolverMappings {
  /// Returns `None` when `raw_mapping2` is not a permutation of `0..len`.
  pub fn new(mapping1: Vec<usize>, raw_mapping2: &[usize]) -> Option<Self> {
    Some(SolverMappings {
      compacted_to_original: mapping1,
      local_to_compacted: invert_permutation(raw_mapping2)?,
    })
  }

  /// `mapping1[mapping2[local]]`, or `None` if either lookup is out of range.
  pub fn translate(&self, local: usize) -> Option<usize> {
    let compacted = *self.local_to_compacted.get(local)?;
    self.compacted_to_original.get(compacted).copied()
  }
}

/// `inverse[perm[i]] = i`. Values out of range or repeated leave a hole,
/// in which case there is no inverse.
pub fn invert_permutation(perm: &[usize]) -> Option<Vec<usize>> {
  let mut inverse = vec![None; perm.len()];
  for (position, &value) in perm.iter().enumerate() {
    *inverse.get_mut(value)? = Some(position);
  }
  inverse.into_iter().collect()
}

pub fn parse_result_file(path: &Path) -> Result<Vec<Clique>> {
  let text = fs::read_to_string(path).map_err(|e| PredictError::io(path, e))?;
  decode_result(&text, path)
}

/// Decodes the full solver output. `source` only labels errors.
pub fn decode_result(text: &str, source: &Path) -> Result<Vec<Clique>> {
  let lines: Vec<&str> = text.lines().collect();
  if lines.len() < MIN_RESULT_LINES {
    return Err(PredictError::IncompleteResult {
      path: source.to_path_buf(),
      lines: lines.len(),
    });
  }

  let mapping1 = parse_indices(lines[MAPPING1_LINE], MAPPING1_LINE, source)?;
  let raw_mapping2 = parse_indices(lines[MAPPING2_LINE], MAPPING2_LINE, source)?;
  let mappings = SolverMappings::new(mapping1, &raw_mapping2).ok_or_else(|| {
    format_error(source, MAPPING2_LINE, "mapping2 is not a permutation".to_string())
  })?;

  let mut cliques = Vec::new();
  for (idx, line) in lines.iter().enumerate().skip(FIRST_CLIQUE_LINE) {
    if line.starts_with(SENTINEL) {
      break;
    }
    if line.trim().is_empty() {
      continue;
    }
    let clique = parse_indices(line, idx, source)?
      .into_iter()
      .map(|local| {
        mappings.translate(local).ok_or_else(|| {
          format_error(source, idx, format!("clique index {local} has no mapping"))
        })
      })
      .collect::<Result<Clique>>()?;
    cliques.push(clique);
  }
  Ok(cliques)
}

fn parse_indices(line: &str, idx: usize, source: &Path) -> Result<Vec<usize>> {
  line
    .split_whitespace()
    .map(|tok| {
      tok
        .parse::<usize>()
        .map_err(|_| format_error(source, idx, format!("{tok:?} is not an index")))
    })
    .collect()
}

// `idx` is 0-based; errors report 1-based lines.
fn format_error(source: &Path, idx: usize, message: String) -> PredictError {
  PredictError::ResultFormat {
    path: source.to_path_buf(),
    line: idx + 1,
    message,
  }
}
