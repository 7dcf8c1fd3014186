use petgraph::graphmap::UnGraphMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PredictError, Result};

/// Observed PPI interactions. Membership is undirected: `contains(u, v)`
/// and `contains(v, u)` always agree.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
  graph: UnGraphMap<usize, ()>,
}

impl Adjacency {
  pub fn from_edges<I>(edges: I) -> Self
  where
    I: IntoIterator<Item = (usize, usize)>,
  {
    let mut graph = UnGraphMap::new();
    for (u, v) in edges {
      graph.add_edge(u, v, ());
    }
    Adjacency { graph }
  }

  pub fn contains(&self, u: usize, v: usize) -> bool {
    self.graph.contains_edge(u, v)
  }

  pub fn edge_count(&self) -> usize {
    self.graph.edge_count()
  }

  pub fn node_count(&self) -> usize {
    self.graph.node_count()
  }
}

pub fn load_adjacency(path: &Path) -> Result<Adjacency> {
  let file = File::open(path).map_err(|e| PredictError::io(path, e))?;
  read_adjacency(BufReader::new(file), path)
}

/// Reads `u v` lines. Blank lines are skipped, everything else must be
/// exactly two non-negative integers.
pub fn read_adjacency<R: BufRead>(reader: R, source: &Path) -> Result<Adjacency> {
  let mut edges = Vec::new();
  for (idx, line) in reader.lines().enumerate() {
    let line = line.map_err(|e| PredictError::io(source, e))?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    edges.push(parse_edge(trimmed).map_err(|message| PredictError::InputFormat {
      path: source.to_path_buf(),
      line: idx + 1,
      message,
    })?);
  }
  Ok(Adjacency::from_edges(edges))
}

fn parse_edge(line: &str) -> std::result::Result<(usize, usize), String> {
  let tokens: Vec<&str> = line.split_whitespace().collect();
  let [u, v] = tokens.as_slice() else {
    return Err(format!("expected `u v`, found {} tokens in {line:?}", tokens.len()));
  };
  let parse = |tok: &str| {
    tok
      .parse::<usize>()
      .map_err(|_| format!("node id {tok:?} is not a non-negative integer"))
  };
  Ok((parse(*u)?, parse(*v)?))
}
