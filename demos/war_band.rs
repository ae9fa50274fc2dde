/// War Band demo — rolls a small expedition roster.
///
/// Run with: cargo run --example war_band

use flavor_engine::content::adventurer::adventurer_generator;
use flavor_engine::content::trinket::trinket_generator;

fn main() {
    // Fixed base seed so the demo prints the same band every time.
    let base = 1_038_085_103u64;

    println!("=== Expedition roster ===\n");
    for offset in 0..5 {
        let mut member = adventurer_generator(Some(base + offset))
            .expect("seed in range");
        member
            .generate_and_report()
            .expect("adventurer generation failed");
    }

    println!("=== Shared salvage ===\n");
    let mut trinket = trinket_generator(Some(base)).expect("trinket tables load");
    trinket
        .generate_and_report()
        .expect("trinket generation failed");
}
