//! Nova Blaster headless runner
//!
//! Drives the simulation with a simple autopilot and logs the status line.
//! Usage: `nova-blaster [seed] [tuning.json] [max_ticks]`

use std::path::Path;

use nova_blaster::sim::{Command, EnemyKind, GameEvent, GameWorld, TickInput, TickStatus};
use nova_blaster::Tuning;

/// Ticks between status log lines
const STATUS_INTERVAL: u64 = 500;
const DEFAULT_MAX_TICKS: u64 = 20_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Nova Blaster (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut tuning = match args.get(1) {
        Some(path) => Tuning::load_or_default(Path::new(path)),
        None => Tuning::default(),
    };
    if let Some(seed) = args.first().and_then(|s| s.parse().ok()) {
        tuning = tuning.with_seed(seed);
    }
    let max_ticks = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS);

    log::info!("Game initialized with seed: {}", tuning.seed);
    let mut world = GameWorld::new(tuning);
    run(&mut world, max_ticks);

    println!("{}", world.status());
    if world.is_game_over() {
        println!("Game over after {} ticks", world.time_ticks());
    } else {
        println!("Stopped after {} ticks", world.time_ticks());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

fn run(world: &mut GameWorld, max_ticks: u64) {
    for _ in 0..max_ticks {
        let input = TickInput {
            command: autopilot(world),
        };
        let status = world.tick(&input);
        for event in world.drain_events() {
            log_event(event);
        }

        match status {
            TickStatus::Continue => {}
            TickStatus::LevelComplete => world.advance_level(),
            TickStatus::PlayerDied => {
                if world.is_game_over() {
                    log::info!("Game over, final score {}", world.score());
                    return;
                }
                world.cleanup();
                world.init();
            }
        }

        if world.time_ticks() % STATUS_INTERVAL == 0 {
            log::info!("{}", world.status());
        }
    }
}

/// Chase the closest enemy's row and shoot once lined up
fn autopilot(world: &GameWorld) -> Option<Command> {
    let player = world.player();
    let target = world
        .entities()
        .iter()
        .filter(|e| !e.is_dead() && e.body.pos.x > player.pos().x)
        .filter_map(|e| e.enemy_kind().map(|kind| (kind, e.body.pos)))
        .min_by(|a, b| a.1.x.total_cmp(&b.1.x))?;

    let (kind, pos) = target;
    let dy = pos.y - player.pos().y;
    if dy > world.tuning().line_of_fire_band {
        Some(Command::Up)
    } else if dy < -world.tuning().line_of_fire_band {
        Some(Command::Down)
    } else if kind == EnemyKind::Dreadnought && player.torpedoes > 0 {
        Some(Command::FireTorpedo)
    } else {
        Some(Command::FireBlaster)
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::LevelFinished => log::info!("Level finished"),
        GameEvent::PickupCollected => log::debug!("Pickup collected"),
        other => log::trace!("{:?}", other),
    }
}
