//! Mochling - Entry Point
//!
//! Interactive loop for raising a mochling from the terminal. Drives the
//! simulation clock with real wall time and exposes the care actions as
//! commands.

use mochling::core::config::SimConfig;
use mochling::core::error::Result;
use mochling::core::types::WallMillis;
use mochling::creature::needs::NeedGauge;
use mochling::creature::pet::{FeedRefusal, Pet};
use mochling::creature::personality::PersonalityKind;
use mochling::items::ingredient::Ingredient;
use mochling::persist::FileStore;
use mochling::sim::clock::{SimEvent, SimSpeed, SimulationClock};

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Virtual creature simulation
#[derive(Parser, Debug)]
#[command(name = "mochling")]
#[command(about = "Raise a virtual creature from the terminal")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for save files
    #[arg(long, default_value = "mochling_data")]
    data_dir: PathBuf,

    /// Simulation speed multiplier (1, 10, 60, 600 or 1000)
    #[arg(long, default_value = "1")]
    speed: SimSpeed,
}

fn now_ms() -> WallMillis {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as WallMillis)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mochling=info".into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(now_ms);
    tracing::info!(seed, "mochling starting");

    let store = FileStore::new(&args.data_dir)?;
    let mut clock = SimulationClock::new(store, seed, SimConfig::default())?;
    clock.set_speed(args.speed);

    // Make up for the time the process was down before the first tick
    for event in clock.catch_up_offline(now_ms()) {
        report_event(&event);
    }

    println!("\n=== MOCHLING ===");
    println!("Commands:");
    println!("  tick / t         - Advance the simulation");
    println!("  run <n>          - Tick every second for n seconds");
    println!("  feed [id]        - Feed an ingredient (default: neutral_basic)");
    println!("  play <kind> <n>  - Finish a minigame with score n%");
    println!("  clean            - Clean up waste");
    println!("  cure             - Give medicine");
    println!("  hatch            - Hatch the egg");
    println!("  revive           - Revive a dead creature");
    println!("  speed <n>        - Change the speed multiplier");
    println!("  status / s       - Show detailed status");
    println!("  save             - Save now");
    println!("  quit / q         - Exit");
    println!();

    loop {
        display_status(clock.pet());

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            clock.save(now_ms())?;
            break;
        }

        if input == "tick" || input == "t" {
            for event in clock.tick(now_ms()) {
                report_event(&event);
            }
            continue;
        }

        if let Some(n) = input.strip_prefix("run ") {
            match n.trim().parse::<u64>() {
                Ok(n) => {
                    println!("Running for {} seconds...", n);
                    for _ in 0..n {
                        std::thread::sleep(std::time::Duration::from_secs(1));
                        for event in clock.tick(now_ms()) {
                            report_event(&event);
                        }
                    }
                }
                Err(_) => println!("Usage: run <seconds>"),
            }
            continue;
        }

        if input == "feed" || input.starts_with("feed ") {
            let identifier = input.strip_prefix("feed").unwrap_or("").trim();
            let ingredient = if identifier.is_empty() {
                Some(Ingredient::neutral())
            } else {
                Ingredient::from_identifier(identifier)
            };
            match ingredient {
                Some(ingredient) => match clock.feed(&ingredient, now_ms()) {
                    Ok(()) => println!("Fed {}.", ingredient.identifier),
                    Err(FeedRefusal::IsEgg) => println!("An egg cannot eat."),
                    Err(FeedRefusal::AlreadyFull) => println!("It is already full."),
                    Err(FeedRefusal::OutOfStock) => println!("None of that in the pantry."),
                },
                None => println!("Unknown ingredient '{}'.", identifier),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("play ") {
            let mut parts = rest.split_whitespace();
            let kind = parts.next().and_then(PersonalityKind::parse);
            let score = parts.next().and_then(|s| s.parse::<u8>().ok());
            match (kind, score) {
                (Some(kind), Some(score)) => {
                    let rewards = clock.play(kind, score, now_ms());
                    if rewards.is_empty() {
                        println!("No game for an egg.");
                    } else {
                        for reward in rewards {
                            println!("Won {}.", reward.identifier);
                        }
                    }
                }
                _ => println!("Usage: play <kind> <score 0-100>"),
            }
            continue;
        }

        if input == "clean" {
            clock.clean_waste(now_ms());
            println!("All clean.");
            continue;
        }

        if input == "cure" {
            clock.cure(now_ms());
            println!("Medicine given.");
            continue;
        }

        if input == "hatch" {
            if clock.hatch(now_ms()) {
                println!("The egg hatched!");
            } else {
                println!("Nothing to hatch.");
            }
            continue;
        }

        if input == "revive" {
            if clock.revive(now_ms()) {
                println!("It lives again.");
            } else {
                println!("Nothing to revive.");
            }
            continue;
        }

        if let Some(speed) = input.strip_prefix("speed ") {
            match speed.trim().parse::<SimSpeed>() {
                Ok(speed) => {
                    clock.set_speed(speed);
                    println!("Speed set to {}.", speed);
                }
                Err(err) => println!("{}", err),
            }
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(clock.pet());
            continue;
        }

        if input == "save" {
            clock.save(now_ms())?;
            println!("Saved.");
            continue;
        }

        println!("Unknown command '{}'.", input);
    }

    tracing::info!("mochling exiting");
    Ok(())
}

fn report_event(event: &SimEvent) {
    match event {
        SimEvent::Pet(pet_event) => println!("* {:?}", pet_event),
        SimEvent::AlertFired(category) => println!("! alert: {:?}", category),
    }
}

fn display_status(pet: &Pet) {
    println!(
        "[{} | hunger {}/3 | fun {}/3 | {}]",
        pet.stage,
        pet.hunger.stars(),
        pet.boredom.stars(),
        if pet.illness.is_ill() { "sick" } else { "well" },
    );
}

fn display_detailed_status(pet: &Pet) {
    println!("Stage:       {}", pet.stage);
    println!(
        "Personality: {}",
        pet.personality
            .as_ref()
            .map(|p| p.label.as_str())
            .unwrap_or("none yet")
    );
    println!("Growth:      {:.0}%", pet.growth_progress() * 100.0);
    println!("Hunger:      {}/3", pet.hunger.stars());
    println!("Fun:         {}/3", pet.boredom.stars());
    println!("Ill:         {}", pet.illness.is_ill());
    println!("Waste:       {}", pet.waste.has_pooped());
    println!("Room:        {}", pet.current_room);
    println!("Memories:    {}", pet.ledger.count());
    println!("Pantry:");
    for (ingredient, quantity) in pet.inventory.list() {
        println!("  {} x{}", ingredient.identifier, quantity);
    }
}
