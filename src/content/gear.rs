/// Gear statblocks — weapons, armor pieces, rations, and treasure.
///
/// Everything is priced: the spent value drives material tier, damage
/// dice, and armor HP, so a loadout's quality tracks its budget.
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

use crate::core::dist::pick;
use crate::core::generator::Node;

const WEAPON_SHAPES: &[&str] = &[
    "sword", "spear", "axe", "warhammer", "dagger", "halberd", "flail", "shortbow", "glaive",
    "maul",
];

const CRUDE_MATERIALS: &[&str] = &["rusted iron", "splintered oak", "chipped bronze", "pitted copper"];
const SOLID_MATERIALS: &[&str] = &["iron", "oak", "bronze", "steel"];
const FINE_MATERIALS: &[&str] = &["moonsilver", "meteoric steel", "blackened orichalcum", "wyrmbone"];

/// Motifs etched onto expensive weapons.
const ETCHING_THEMES: &[&str] = &[
    "fire", "ice", "cloud", "dark", "light", "sweet", "sour", "wizard", "steampunk", "nature",
];

/// The value threshold above which a weapon earns an etching line.
const ETCHED_VALUE: i64 = 60;

fn weapon_materials(value: i64) -> &'static [&'static str] {
    if value < 10 {
        CRUDE_MATERIALS
    } else if value < ETCHED_VALUE {
        SOLID_MATERIALS
    } else {
        FINE_MATERIALS
    }
}

fn damage_dice(value: i64) -> &'static str {
    match value {
        v if v < 5 => "d4",
        v if v < 20 => "d6",
        v if v < ETCHED_VALUE => "d8",
        v if v < 150 => "d10",
        _ => "d12",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// A weapon statblock worth `value`, as a producer node.
///
/// Expands into material + shape + damage, with a nested etching
/// producer on fine weapons — the deepest producer chain in the crate.
pub fn weapon(value: i64) -> Node {
    Node::producer(move |rng: &mut StdRng| {
        let material = *pick(rng, weapon_materials(value));
        let shape = *pick(rng, WEAPON_SHAPES);
        let mut nodes = vec![Node::lit(format!(
            "{} {shape}, {}",
            capitalize(material),
            damage_dice(value)
        ))];
        if value >= ETCHED_VALUE {
            nodes.push(etching());
        }
        nodes.push(Node::lit(format!(" ({value} GP)")));
        nodes
    })
}

fn etching() -> Node {
    Node::producer(|rng: &mut StdRng| {
        vec![Node::lit(format!(
            ", etched with {} sigils",
            pick(rng, ETCHING_THEMES)
        ))]
    })
}

/// Body locations an armor piece can occupy. A loadout tracks occupancy
/// so a second helm reads as a spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmorSlot {
    Head,
    Body,
    Hands,
    Feet,
    Shield,
}

pub const ARMOR_SLOTS: &[ArmorSlot] = &[
    ArmorSlot::Head,
    ArmorSlot::Body,
    ArmorSlot::Hands,
    ArmorSlot::Feet,
    ArmorSlot::Shield,
];

impl ArmorSlot {
    fn pieces(self) -> &'static [&'static str] {
        match self {
            ArmorSlot::Head => &["helm", "hood", "half-mask"],
            ArmorSlot::Body => &["gambeson", "hauberk", "brigandine"],
            ArmorSlot::Hands => &["gauntlets", "bracers"],
            ArmorSlot::Feet => &["greaves", "hobnailed boots"],
            ArmorSlot::Shield => &["buckler", "kite shield", "tower shield"],
        }
    }
}

fn armor_materials(value: i64) -> &'static [&'static str] {
    if value < 5 {
        &["padded cloth", "boiled leather"]
    } else if value < 15 {
        &["studded leather", "chain", "scale"]
    } else {
        &["plate", "moonsilver-chased plate"]
    }
}

/// An armor piece worth `value`, preferring a free slot.
///
/// Returns the slot it occupies, the HP it grants, and the statblock
/// line. When every slot is taken the piece lands on a random slot as a
/// spare and still counts its HP.
pub fn armor(
    rng: &mut StdRng,
    value: i64,
    used: &FxHashSet<ArmorSlot>,
) -> (ArmorSlot, i64, String) {
    let free: Vec<ArmorSlot> = ARMOR_SLOTS
        .iter()
        .copied()
        .filter(|slot| !used.contains(slot))
        .collect();
    let slot = if free.is_empty() {
        *pick(rng, ARMOR_SLOTS)
    } else {
        *pick(rng, &free)
    };
    let hp = (value / 4).max(1);
    let statblock = format!(
        "{} {} (+{hp} HP).",
        capitalize(*pick(rng, armor_materials(value))),
        pick(rng, slot.pieces())
    );
    (slot, hp, statblock)
}

pub fn ration() -> Node {
    Node::lit("Ration.")
}

/// Treasure denominated in days of room and board.
pub fn treasure(value: i64) -> Node {
    Node::lit(format!("Treasure ({} days R&B).", value.max(1)))
}
