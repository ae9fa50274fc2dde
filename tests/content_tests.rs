/// Content integration tests — shape contracts that must hold for every
/// seed, and the data-table loading path.

use std::path::Path;

use flavor_engine::content::adventurer::adventurer_generator;
use flavor_engine::content::location::location_generator;
use flavor_engine::content::names::name_generator;
use flavor_engine::content::trinket::trinket_from_tables;
use flavor_engine::core::table::TableSet;

#[test]
fn adventurer_always_opens_with_faction_and_name() {
    for seed in 0..100u64 {
        let text = adventurer_generator(Some(seed)).unwrap().generate().unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(
            ["Controls Adventurer.", "Crusaders Adventurer.", "Commons Adventurer."]
                .contains(&header),
            "unexpected header: {header}"
        );
        assert!(lines.next().unwrap().starts_with("Name: "));
    }
}

#[test]
fn adventurer_inventory_is_numbered_sequentially() {
    for seed in [0u64, 7, 42, 1_038_085_103] {
        let text = adventurer_generator(Some(seed)).unwrap().generate().unwrap();
        let item_lines: Vec<&str> = text.lines().filter(|l| l.starts_with('\t')).collect();
        assert!(item_lines.len() >= 3, "expected at least 3 items:\n{text}");
        for (i, line) in item_lines.iter().enumerate() {
            let expected = format!("\t{}. ", i + 1);
            assert!(line.starts_with(&expected), "bad numbering: {line}");
        }
    }
}

#[test]
fn adventurer_statline_fields_are_non_negative() {
    for seed in 0..50u64 {
        let text = adventurer_generator(Some(seed)).unwrap().generate().unwrap();
        let stats = text.lines().nth(2).unwrap();
        // "N LIGHT, N HP, N FLESH."
        for field in stats.trim_end_matches('.').split(", ") {
            let number: i64 = field
                .split_whitespace()
                .next()
                .unwrap()
                .parse()
                .unwrap_or_else(|_| panic!("non-numeric statline field: {field}"));
            assert!(number >= 0, "negative stat in {stats}");
        }
    }
}

#[test]
fn location_and_name_generators_are_deterministic() {
    for seed in 0..20u64 {
        let a = location_generator(Some(seed)).unwrap().generate().unwrap();
        let b = location_generator(Some(seed)).unwrap().generate().unwrap();
        assert_eq!(a, b);

        let a = name_generator(Some(seed)).unwrap().generate().unwrap();
        let b = name_generator(Some(seed)).unwrap().generate().unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}

#[test]
fn fixture_tables_build_a_working_trinket() {
    let path = Path::new("tests/fixtures/test_table.ron");
    let tables = TableSet::load_from_ron(path).unwrap();
    let mut g = trinket_from_tables(tables, Some(11)).unwrap();
    let text = g.generate().unwrap();
    assert_eq!(text, "Humming compass that points home.");
}

#[test]
fn shipped_trinket_tables_parse_and_generate() {
    let path = Path::new("data/trinket.ron");
    let tables = TableSet::load_from_ron(path).unwrap();
    let mut g = trinket_from_tables(tables, Some(5)).unwrap();
    let text = g.generate().unwrap();
    assert!(text.ends_with('.'));
    assert!(text.contains(" that "), "missing behavior clause: {text}");
    // Same seed, same trinket.
    let tables = TableSet::load_from_ron(path).unwrap();
    let again = trinket_from_tables(tables, Some(5))
        .unwrap()
        .generate()
        .unwrap();
    assert_eq!(text, again);
}
