use itertools::Itertools;
use std::io::{self, Write};

use crate::analyze::{AcceptedClique, Edge};
use crate::names::NameTable;

/// `A B C\tmissing:A-C,B-C`
pub fn clique_line(clique: &AcceptedClique, names: &NameTable) -> String {
  let members = clique.nodes.iter().map(|&n| names.name(n)).join(" ");
  let missing = clique
    .missing
    .iter()
    .map(|&(u, v)| format!("{}-{}", names.name(u), names.name(v)))
    .join(",");
  format!("{members}\tmissing:{missing}")
}

pub fn write_clique_report<W: Write>(
  mut writer: W,
  cliques: &[AcceptedClique],
  names: &NameTable,
) -> io::Result<()> {
  for clique in cliques {
    writeln!(writer, "{}", clique_line(clique, names))?;
  }
  writer.flush()
}

/// One `name1 name2` line per edge, in the iteration order of `edges`.
pub fn write_predicted_edges<'a, W, I>(mut writer: W, edges: I, names: &NameTable) -> io::Result<()>
where
  W: Write,
  I: IntoIterator<Item = &'a Edge>,
{
  for &(u, v) in edges {
    writeln!(writer, "{} {}", names.name(u), names.name(v))?;
  }
  writer.flush()
}
