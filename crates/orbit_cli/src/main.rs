//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `orbit_core` linkage.
//! - Print the orbit map derived from the demo dataset.

use chrono::Utc;
use orbit_core::{place_people, seed_demo, EntityStore, SelectedCategory};

fn main() {
    println!("orbit_core version={}", orbit_core::core_version());

    let now = Utc::now();
    let mut store = EntityStore::new();
    if let Err(err) = seed_demo(&mut store, now) {
        eprintln!("demo seed failed: {err}");
        std::process::exit(1);
    }

    let people = store.visible_people(SelectedCategory::All);
    for placement in place_people(&people, store.tasks(), now) {
        println!(
            "{:<16} band={:<6} urgency={:>3} angle={:>5.1} open_tasks={}",
            placement.person.name,
            format!("{:?}", placement.orbit.band).to_lowercase(),
            placement.urgency,
            placement.angle,
            placement.open_tasks
        );
    }
}
