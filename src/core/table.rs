/// Weighted text tables loadable from RON data files.
///
/// Content that is pure data — openers, objects, behaviors — lives in
/// `data/*.ron` and gets drawn through the same weighted-choice path as
/// everything else.
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::dist::weighted_choice;
use crate::core::generator::{GeneratorError, Node};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("missing table: {0}")]
    MissingTable(String),
    #[error("generator error: {0}")]
    Generator(#[from] GeneratorError),
}

/// One weighted alternative in a text table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntry {
    pub weight: f64,
    pub text: String,
}

/// A weighted table of text alternatives.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TextTable {
    pub entries: Vec<TableEntry>,
}

impl TextTable {
    /// Draw one entry proportional to its weight.
    pub fn draw(&self, rng: &mut StdRng) -> Result<&str, GeneratorError> {
        let entries: Vec<(f64, &str)> = self
            .entries
            .iter()
            .map(|e| (e.weight, e.text.as_str()))
            .collect();
        weighted_choice(rng, entries)
    }

    /// Turn the table into a producer node that draws one entry per
    /// occurrence.
    pub fn into_node(self) -> Node {
        Node::try_producer(move |rng| Ok(vec![Node::lit(self.draw(rng)?)]))
    }
}

/// A set of named text tables, usually one RON file per theme.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    tables: FxHashMap<String, TextTable>,
}

impl TableSet {
    /// Load a table set from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TableSet, TableError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a table set from a RON string.
    pub fn parse_ron(input: &str) -> Result<TableSet, TableError> {
        let tables: FxHashMap<String, TextTable> = ron::from_str(input)?;
        Ok(TableSet { tables })
    }

    pub fn get(&self, name: &str) -> Option<&TextTable> {
        self.tables.get(name)
    }

    /// Remove and return a named table, erring if it is absent.
    pub fn take(&mut self, name: &str) -> Result<TextTable, TableError> {
        self.tables
            .remove(name)
            .ok_or_else(|| TableError::MissingTable(name.to_string()))
    }
}
