use itertools::Itertools;
use std::collections::BTreeSet;

use crate::adjacency::Adjacency;
use crate::decode::Clique;
use crate::error::{PredictError, Result};

/// Canonical node pair, smaller id first.
pub type Edge = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedClique {
  pub nodes: Clique,
  /// Canonical pairs absent from the network, in enumeration order.
  pub missing: Vec<Edge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
  pub accepted: Vec<AcceptedClique>,
  pub missing_edges: BTreeSet<Edge>,
}

pub fn canonical(u: usize, v: usize) -> Edge {
  if u > v { (v, u) } else { (u, v) }
}

/// Every member pair `(clique[i], clique[j])`, `i < j`, that the network
/// lacks, canonicalised.
pub fn missing_pairs(adjacency: &Adjacency, clique: &[usize]) -> Vec<Edge> {
  clique
    .iter()
    .tuple_combinations()
    .filter(|&(&u, &v)| !adjacency.contains(u, v))
    .map(|(&u, &v)| canonical(u, v))
    .collect()
}

/// Keeps cliques of at least `q` nodes and collects the edges they imply.
/// A kept clique with more than `k` missing pairs aborts the analysis.
pub fn analyze<I>(adjacency: &Adjacency, cliques: I, k: usize, q: usize) -> Result<Analysis>
where
  I: IntoIterator<Item = Clique>,
{
  let mut analysis = Analysis::default();
  for nodes in cliques {
    if nodes.len() < q {
      tracing::debug!(size = nodes.len(), q, "dropping clique below minimum size");
      continue;
    }

    let missing = missing_pairs(adjacency, &nodes);
    if missing.len() > k {
      return Err(PredictError::InvariantViolation {
        clique: nodes,
        missing: missing.len(),
        k,
      });
    }

    analysis.missing_edges.extend(missing.iter().copied());
    analysis.accepted.push(AcceptedClique { nodes, missing });
  }
  Ok(analysis)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn path_graph() -> Adjacency {
    // 1-2-3-4
    Adjacency::from_edges([(1, 2), (2, 3), (3, 4)])
  }

  #[test]
  fn pairs_are_canonical_and_ordered_by_enumeration() {
    let adj = path_graph();
    assert_eq!(missing_pairs(&adj, &[3, 1, 2]), vec![(1, 3)]);
    assert_eq!(missing_pairs(&adj, &[4, 2, 1]), vec![(2, 4), (1, 4)]);
  }

  #[test]
  fn small_cliques_are_dropped() {
    let adj = path_graph();
    let analysis = analyze(&adj, vec![vec![1, 3], vec![1, 2, 3]], 1, 3).unwrap();
    assert_eq!(analysis.accepted.len(), 1);
    assert_eq!(analysis.accepted[0].nodes, vec![1, 2, 3]);
    assert_eq!(analysis.missing_edges, BTreeSet::from([(1, 3)]));
  }

  #[test]
  fn exactly_k_missing_is_accepted() {
    let adj = path_graph();
    let analysis = analyze(&adj, vec![vec![1, 2, 3, 4]], 3, 4).unwrap();
    assert_eq!(analysis.accepted[0].missing, vec![(1, 3), (1, 4), (2, 4)]);
  }

  #[test]
  fn more_than_k_missing_is_fatal() {
    let adj = path_graph();
    let err = analyze(&adj, vec![vec![1, 2, 3, 4]], 2, 4).unwrap_err();
    match err {
      PredictError::InvariantViolation { clique, missing, k } => {
        assert_eq!(clique, vec![1, 2, 3, 4]);
        assert_eq!(missing, 3);
        assert_eq!(k, 2);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn shared_missing_pair_is_deduplicated() {
    let adj = Adjacency::from_edges([(1, 2), (2, 3), (2, 4), (3, 4)]);
    let cliques = vec![vec![1, 2, 3], vec![4, 3, 2, 1]];
    let analysis = analyze(&adj, cliques, 2, 3).unwrap();
    assert_eq!(analysis.accepted[0].missing, vec![(1, 3)]);
    assert_eq!(analysis.accepted[1].missing, vec![(1, 4), (1, 3)]);
    assert_eq!(analysis.missing_edges, BTreeSet::from([(1, 3), (1, 4)]));
  }

  #[test]
  fn complete_clique_has_no_missing_pairs() {
    let adj = Adjacency::from_edges([(0, 1), (0, 2), (1, 2)]);
    let analysis = analyze(&adj, vec![vec![2, 0, 1]], 0, 3).unwrap();
    assert!(analysis.accepted[0].missing.is_empty());
    assert!(analysis.missing_edges.is_empty());
  }
}
