/// Name tables — lunar faction names, divinities, and mundane first
/// names assembled from parts.
use rand::rngs::StdRng;

use crate::core::dist::pick;
use crate::core::generator::{Generator, GeneratorError, Node};

const LUNAR_DIVINITIES: &[&str] = &[
    "Makotli", "Glin", "Sora", "Scintelle", "Xamont", "Cyhtlu", "Hastur", "Saturn", "Ykkoli",
    "Zhmark",
];

const LUNAR_FIRST_OPEN: &[&str] = &[
    "Lacri", "Lace", "Moro", "Seta", "Ala", "Tra", "Tri", "Be", "Di", "Ma", "Pe",
];
const LUNAR_FIRST_MID: &[&str] = &["nast", "mer", "v", "t", "r", "k", "m", "n", "l", "s"];
const LUNAR_FIRST_CLOSE: &[&str] = &["ius", "us", "ion", "or", "a", "ia", "e", "ina", "ira"];

const CONTROLS_SURNAMES: &[&str] = &["Steliad", "Arkelian"];
const CRUSADERS_SURNAMES: &[&str] = &["Floris"];

const ANGLO_WHOLE_NAMES: &[&str] = &[
    "Tom", "Richard", "Harry", "Edward", "Jack", "Paul", "George", "Logan", "Ethan", "Bill",
    "Winston", "Lewis", "Luke", "John", "Peter", "Philip", "Thomas", "Simon", "James", "Andrew",
    "Alex", "Sam", "Ellis", "Kai", "Ash", "Charlie", "Mary", "Eve", "Ashley", "Alice", "Triss",
    "Stacy", "Lucy", "Lily", "Rose", "Elizabeth", "Jessica", "Emma", "Abigail", "Megan", "Sarah",
    "Julia", "Kate", "Karen", "Carol",
];
const ANGLO_PREFIXES: &[&str] = &[
    "A", "Cha", "Ba", "Da", "Ka", "Ke", "Pe", "Ha", "Le", "La", "Cla",
];
const ANGLO_SHORT_SUFFIXES: &[&str] = &[
    "vin", "gan", "rron", "sh", "rryl", "ley", "ya", "cy", "cey",
];
const ANGLO_LONG_SUFFIX_BRIDGE: &[&str] = &["t", "y", "rr", "nn", "s", "sh"];
const ANGLO_LONG_SUFFIX_END: &[&str] = &["on", "in", "ah", "ley", "leigh", "cy", "cey"];

const GRECO_OPEN: &[&str] = &[
    "Lacri", "Lace", "Moro", "Ala", "Tri", "Be", "Di", "Ma", "Pe",
];
const GRECO_MID: &[&str] = &["mer", "v", "t", "c", "m", "n", "l", "s"];
const GRECO_CLOSE: &[&str] = &["ius", "us", "ion", "or", "a", "ia", "ina", "ira"];

pub fn lunar_divinity(rng: &mut StdRng) -> &'static str {
    *pick(rng, LUNAR_DIVINITIES)
}

/// Three-part lunar first name, e.g. "Lacrimera" or "Moroskion".
pub fn lunar_first_name(rng: &mut StdRng) -> String {
    format!(
        "{}{}{}",
        pick(rng, LUNAR_FIRST_OPEN),
        pick(rng, LUNAR_FIRST_MID),
        pick(rng, LUNAR_FIRST_CLOSE)
    )
}

pub fn controls_name(rng: &mut StdRng) -> String {
    format!("{} {}", lunar_first_name(rng), pick(rng, CONTROLS_SURNAMES))
}

pub fn crusaders_name(rng: &mut StdRng) -> String {
    format!("{} {}", lunar_first_name(rng), pick(rng, CRUSADERS_SURNAMES))
}

/// Commons carry no surname.
pub fn commons_name(rng: &mut StdRng) -> String {
    lunar_first_name(rng)
}

/// Anglo first name: either drawn whole or assembled from a prefix and
/// a short or long suffix.
pub fn anglo_first_name(rng: &mut StdRng) -> String {
    if *pick(rng, &[true, false]) {
        (*pick(rng, ANGLO_WHOLE_NAMES)).to_string()
    } else {
        let prefix = pick(rng, ANGLO_PREFIXES);
        if *pick(rng, &[true, false]) {
            format!("{prefix}{}", pick(rng, ANGLO_SHORT_SUFFIXES))
        } else {
            format!(
                "{prefix}{}{}",
                pick(rng, ANGLO_LONG_SUFFIX_BRIDGE),
                pick(rng, ANGLO_LONG_SUFFIX_END)
            )
        }
    }
}

pub fn greco_roman_first_name(rng: &mut StdRng) -> String {
    format!(
        "{}{}{}",
        pick(rng, GRECO_OPEN),
        pick(rng, GRECO_MID),
        pick(rng, GRECO_CLOSE)
    )
}

/// A generator that draws one name, switching style per occurrence.
pub fn name_generator(seed: Option<u64>) -> Result<Generator, GeneratorError> {
    let root = vec![Node::producer(|rng: &mut StdRng| {
        let name = match *pick(rng, &[0u8, 1, 2]) {
            0 => commons_name(rng),
            1 => anglo_first_name(rng),
            _ => greco_roman_first_name(rng),
        };
        vec![Node::lit(name)]
    })];
    match seed {
        Some(seed) => Generator::with_seed("Name", root, seed),
        None => Ok(Generator::new("Name", root)),
    }
}
