/// Preview — batch generation shell for eyeballing content tables.
///
/// Usage: preview <adventurer|trinket|location|name|weapon> [--seed <n>] [--count <n>]
///
/// Without --seed each report gets a fresh time-derived seed; with it,
/// reports in the same batch use consecutive seeds so a run is
/// reproducible end to end.

use flavor_engine::content::gear;
use flavor_engine::content::{adventurer, location, names, trinket};
use flavor_engine::core::dist::uniform;
use flavor_engine::core::generator::{Generator, Node};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let kind = args[1].clone();
    let mut seed: Option<u64> = None;
    let mut count: u64 = 1;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                i += 1;
                match args[i].parse() {
                    Ok(s) => seed = Some(s),
                    Err(_) => {
                        eprintln!("Invalid seed: {}", args[i]);
                        std::process::exit(1);
                    }
                }
            }
            "--count" if i + 1 < args.len() => {
                i += 1;
                count = args[i].parse().unwrap_or(1);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    for offset in 0..count {
        let batch_seed = seed.map(|s| s + offset);
        let mut generator = match build(&kind, batch_seed) {
            Ok(g) => g,
            Err(message) => {
                eprintln!("{message}");
                std::process::exit(1);
            }
        };
        if let Err(e) = generator.generate_and_report() {
            eprintln!("generation failed: {e}");
            std::process::exit(1);
        }
    }
}

fn build(kind: &str, seed: Option<u64>) -> Result<Generator, String> {
    match kind {
        "adventurer" => adventurer::adventurer_generator(seed).map_err(|e| e.to_string()),
        "trinket" => trinket::trinket_generator(seed).map_err(|e| e.to_string()),
        "location" => location::location_generator(seed).map_err(|e| e.to_string()),
        "name" => names::name_generator(seed).map_err(|e| e.to_string()),
        "weapon" => {
            let root = vec![Node::producer(|rng| {
                let value = uniform(rng, 1, 300);
                vec![gear::weapon(value), Node::lit(".")]
            })];
            match seed {
                Some(s) => Generator::with_seed("Weapon", root, s).map_err(|e| e.to_string()),
                None => Ok(Generator::new("Weapon", root)),
            }
        }
        other => Err(format!("Unknown generator: {other}")),
    }
}

fn print_usage() {
    println!("preview — batch flavor-text generation");
    println!();
    println!("Usage: preview <generator> [--seed <n>] [--count <n>]");
    println!();
    println!("Generators:");
    println!("  adventurer   faction, name, statline, and inventory");
    println!("  trinket      remnant-tech salvage (data/trinket.ron)");
    println!("  location     site, landmark, and local trouble");
    println!("  name         one name, style drawn per run");
    println!("  weapon       a priced weapon statblock");
}
