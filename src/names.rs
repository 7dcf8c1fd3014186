use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PredictError, Result};

/// Protein names indexed by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
  names: Vec<String>,
}

impl NameTable {
  pub fn new(names: Vec<String>) -> Self {
    NameTable { names }
  }

  /// Name of `id`, or its decimal form when the table has no entry for it.
  pub fn name(&self, id: usize) -> Cow<'_, str> {
    match self.names.get(id) {
      Some(name) => Cow::Borrowed(name.as_str()),
      None => Cow::Owned(id.to_string()),
    }
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

pub fn load_names(path: &Path) -> Result<NameTable> {
  let file = File::open(path).map_err(|e| PredictError::io(path, e))?;
  read_names(BufReader::new(file), path)
}

/// Node id = position among the non-blank lines.
pub fn read_names<R: BufRead>(reader: R, source: &Path) -> Result<NameTable> {
  let mut names = Vec::new();
  for line in reader.lines() {
    let line = line.map_err(|e| PredictError::io(source, e))?;
    let name = line.trim();
    if !name.is_empty() {
      names.push(name.to_string());
    }
  }
  Ok(NameTable::new(names))
}
