//! Data-driven game balance
//!
//! Fixed geometry and per-entity stats live in `crate::consts`; everything a
//! designer might want to rebalance between runs lives here and can be
//! overridden from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    /// The tuning file could not be read
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    /// The tuning file is not valid JSON for `Tuning`
    #[error("invalid tuning data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Spawn weight for one enemy variant: `base + per_level * level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnWeight {
    pub base: u32,
    pub per_level: u32,
}

impl SpawnWeight {
    pub const fn new(base: u32, per_level: u32) -> Self {
        Self { base, per_level }
    }

    /// Weight at the given level
    pub fn at(&self, level: u32) -> u32 {
        self.base + self.per_level * level
    }
}

/// Game balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seed for the per-process random stream
    pub seed: u64,

    // === Round ===
    /// Lives at the start of a game
    pub starting_lives: u32,
    /// Stars scattered over the field when a round begins
    pub initial_stars: u32,
    /// A new star enters with odds 1-in-N each tick
    pub star_spawn_odds: i32,

    // === Level progression ===
    /// Kills needed to clear level L: `quota_base + quota_per_level * L`
    pub quota_base: u32,
    pub quota_per_level: u32,
    /// Enemies allowed on screen at level L: `floor(on_screen_base + on_screen_per_level * L)`
    pub on_screen_base: f32,
    pub on_screen_per_level: f32,

    // === Spawn weights ===
    pub drone_weight: SpawnWeight,
    pub gunship_weight: SpawnWeight,
    pub dreadnought_weight: SpawnWeight,

    // === Enemy AI ===
    /// Upper bound of a fresh flight-plan countdown (lower bound is 1)
    pub flight_plan_max_ticks: i32,
    /// Half-height of the lane in which enemies consider attacking
    pub line_of_fire_band: f32,
    /// Speed a gunship drops to once it levels out near the player
    pub gunship_crawl_speed: f32,

    // === Rewards ===
    /// Score granted for collecting any pickup
    pub pickup_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: 42,

            starting_lives: 3,
            initial_stars: 30,
            star_spawn_odds: 15,

            quota_base: 6,
            quota_per_level: 4,
            on_screen_base: 4.0,
            on_screen_per_level: 0.5,

            drone_weight: SpawnWeight::new(60, 0),
            gunship_weight: SpawnWeight::new(20, 5),
            dreadnought_weight: SpawnWeight::new(5, 10),

            flight_plan_max_ticks: 32,
            line_of_fire_band: 4.0,
            gunship_crawl_speed: 1.0,

            pickup_score: 100,
        }
    }
}

impl Tuning {
    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting lives
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a tuning file
    pub fn from_path(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a tuning file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({})", e);
                Self::default()
            }
        }
    }

    /// Kills needed to finish `level`
    pub fn quota(&self, level: u32) -> u32 {
        self.quota_base + self.quota_per_level * level
    }

    /// Enemies allowed on screen at `level`, before the remaining-quota cap
    pub fn max_on_screen(&self, level: u32) -> u32 {
        (self.on_screen_base + self.on_screen_per_level * level as f32).max(0.0) as u32
    }
}
