//! Skirmish demo: two units, a junctioned attack, a strength boost

use junction_arena::catalog::{Attack, Heal, StrengthUp};
use junction_arena::{CombatEvent, CombatUnit, EventLog, EventSink, JunctionAbility, RandDice};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Prints narration as it happens and keeps the log for the JSON artifact.
struct Narrator {
    log: EventLog,
}

impl EventSink for Narrator {
    fn emit(&mut self, event: CombatEvent) {
        println!("{}", event);
        self.log.emit(event);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    println!("Junction Arena Skirmish");
    println!("=======================");
    println!("Seed: {}", seed);
    println!();

    let mut dice = RandDice::new(ChaCha8Rng::seed_from_u64(seed));
    let mut narrator = Narrator {
        log: EventLog::new(),
    };

    let mut arthur = CombatUnit::new("Arthur", 20);
    let mut zora = CombatUnit::new("Zora", 20);

    arthur.junction(JunctionAbility::active(Attack));
    arthur.junction(JunctionAbility::active(Heal));

    arthur
        .perform_ability("attack", &mut [&mut zora], &mut dice, &mut narrator)
        .expect("attack resolves");

    arthur.junction(JunctionAbility::passive(StrengthUp));

    arthur
        .perform_ability("attack", &mut [&mut zora], &mut dice, &mut narrator)
        .expect("boosted attack resolves");

    arthur
        .perform_ability("heal", &mut [&mut zora], &mut dice, &mut narrator)
        .expect("heal resolves");

    println!();
    println!("{}", arthur);
    println!();
    println!("{}", zora);

    let json = narrator.log.to_json().expect("serialize event log");
    std::fs::write("skirmish_events.json", &json).expect("Failed to write output");
    println!("\nEvent log written to skirmish_events.json");
}
