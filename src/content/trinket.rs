/// Remnant-tech trinkets — salvage from the world before, composed
/// entirely from RON data tables.
use std::path::Path;

use crate::core::generator::{Generator, Node};
use crate::core::table::{TableError, TableSet};

/// Default table file, relative to the crate root.
pub const TRINKET_TABLES: &str = "data/trinket.ron";

/// Build the trinket generator from an already-loaded table set.
///
/// Expects `opener`, `object`, and `behavior` tables; reads as
/// "Opener object that behavior."
pub fn trinket_from_tables(
    mut tables: TableSet,
    seed: Option<u64>,
) -> Result<Generator, TableError> {
    let opener = tables.take("opener")?;
    let object = tables.take("object")?;
    let behavior = tables.take("behavior")?;
    let root = vec![
        opener.into_node(),
        Node::lit(" "),
        object.into_node(),
        Node::lit(" that "),
        behavior.into_node(),
        Node::lit("."),
    ];
    let generator = match seed {
        Some(seed) => Generator::with_seed("Remnant Trinket", root, seed)?,
        None => Generator::new("Remnant Trinket", root),
    };
    Ok(generator)
}

/// Load `data/trinket.ron` and build the trinket generator.
pub fn trinket_generator(seed: Option<u64>) -> Result<Generator, TableError> {
    let tables = TableSet::load_from_ron(Path::new(TRINKET_TABLES))?;
    trinket_from_tables(tables, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &str = r#"{
        "opener": (entries: [(weight: 1.0, text: "Cracked")]),
        "object": (entries: [(weight: 1.0, text: "pager")]),
        "behavior": (entries: [(weight: 1.0, text: "still chirps at dawn")]),
    }"#;

    #[test]
    fn trinket_reads_as_a_sentence() {
        let tables = TableSet::parse_ron(TABLES).unwrap();
        let mut g = trinket_from_tables(tables, Some(3)).unwrap();
        assert_eq!(g.generate().unwrap(), "Cracked pager that still chirps at dawn.");
    }

    #[test]
    fn missing_table_is_reported_by_name() {
        let tables = TableSet::parse_ron(r#"{ "opener": (entries: []) }"#).unwrap();
        let err = trinket_from_tables(tables, Some(3)).unwrap_err();
        assert!(matches!(err, TableError::MissingTable(name) if name == "object"));
    }
}
