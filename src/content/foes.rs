/// Foe tables — the things that trouble hamlets and ambush adventurers.
use rand::rngs::StdRng;

use crate::core::dist::pick;

pub const SINGULAR_HOLY: &[&str] = &["angel", "priest"];
pub const PLURAL_HOLY: &[&str] = &["angels", "priests"];

pub const SINGULAR_UNHOLY: &[&str] = &[
    "satanist",
    "cannibal",
    "vampire",
    "undead",
    "ghost",
    "ghoul",
    "wendigo",
    "skinwalker",
    "automaton",
];
pub const PLURAL_UNHOLY: &[&str] = &[
    "satanists",
    "cannibals",
    "vampires",
    "undead",
    "ghosts",
    "ghouls",
    "wendigos",
    "skinwalkers",
    "automatons",
    "blood beasts",
];

pub const SINGULAR_BEAST: &[&str] = &[
    "shark",
    "bear",
    "dinosaur",
    "giant animal",
    "human-eating worm",
];

pub fn singular_foe(rng: &mut StdRng) -> &'static str {
    let table = *pick(rng, &[SINGULAR_HOLY, SINGULAR_UNHOLY, SINGULAR_BEAST]);
    *pick(rng, table)
}

pub fn plural_foe(rng: &mut StdRng) -> &'static str {
    let table = *pick(rng, &[PLURAL_HOLY, PLURAL_UNHOLY]);
    *pick(rng, table)
}
