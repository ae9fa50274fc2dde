/// Location tables — world sites, hamlet buildings, and the commons
/// jobs their owners work.
use rand::rngs::StdRng;

use crate::content::{foes, names};
use crate::core::dist::pick;
use crate::core::generator::{Generator, GeneratorError, Node};

pub const WORLD_LOCATIONS: &[&str] = &["Ziggurat", "Mareot", "Hell", "Skull Pass"];

pub const COMMONS_JOBS: &[&str] = &[
    "fisher",
    "miller",
    "tanner",
    "chandler",
    "cartwright",
    "gravedigger",
    "ratcatcher",
    "seamstress",
];

pub fn world_location(rng: &mut StdRng) -> &'static str {
    *pick(rng, WORLD_LOCATIONS)
}

pub fn job(rng: &mut StdRng) -> &'static str {
    *pick(rng, COMMONS_JOBS)
}

/// Trailing-s names take a bare apostrophe: "seamstress'" vs. "miller's".
fn possessive(s: &str) -> String {
    if s.ends_with('s') {
        format!("{s}'")
    } else {
        format!("{s}'s")
    }
}

/// One hamlet building; the possessive form names the owner's trade.
pub fn hamlet_building(rng: &mut StdRng) -> String {
    match *pick(rng, &[0u8, 1, 2, 3, 4]) {
        0 => format!("{} house", possessive(job(rng))),
        1 => "pale temple".to_string(),
        2 => "well".to_string(),
        3 => "market".to_string(),
        _ => "inn".to_string(),
    }
}

/// A generator reporting a site, a landmark, its shrine, and the local
/// trouble.
pub fn location_generator(seed: Option<u64>) -> Result<Generator, GeneratorError> {
    let root = vec![
        Node::lit("Site: "),
        Node::producer(|rng: &mut StdRng| vec![Node::lit(world_location(rng))]),
        Node::lit(".\nLandmark: "),
        Node::producer(|rng: &mut StdRng| vec![Node::lit(hamlet_building(rng))]),
        Node::lit(".\nShrine: dedicated to "),
        Node::producer(|rng: &mut StdRng| vec![Node::lit(names::lunar_divinity(rng))]),
        Node::lit(".\nTrouble: "),
        Node::producer(|rng: &mut StdRng| vec![Node::lit(foes::plural_foe(rng))]),
        Node::lit("."),
    ];
    match seed {
        Some(seed) => Generator::with_seed("Location", root, seed),
        None => Ok(Generator::new("Location", root)),
    }
}
