//! World driver
//!
//! Owns the live population, the player and the round counters, and
//! executes one tick at a time. All cross-entity effects are serialized
//! through here: entities see the rest of the world only via `TickContext`.

use glam::Vec2;

use super::context::TickContext;
use super::enemy::EnemyKind;
use super::entity::Entity;
use super::event::GameEvent;
use super::hull::{DamageCause, DamageOutcome, Damageable};
use super::player::{Command, Player};
use super::projectile::Allegiance;
use super::rng::{self, RandomSource};
use super::spawn;
use crate::consts::*;
use crate::hud::StatusLine;
use crate::tuning::Tuning;

/// Outcome of one tick, reported to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    PlayerDied,
    LevelComplete,
}

/// Input for a single tick: at most one pending command
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub command: Option<Command>,
}

impl TickInput {
    pub fn command(command: Command) -> Self {
        Self {
            command: Some(command),
        }
    }
}

/// Round state shared with entities through `TickContext`
pub struct WorldState {
    pub(crate) player: Player,
    pub(crate) tuning: Tuning,
    pub(crate) score: u64,
    pub(crate) lives: u32,
    pub(crate) level: u32,
    pub(crate) enemies_destroyed: u32,
    pub(crate) enemies_on_screen: u32,
    pub(crate) rng: Box<dyn RandomSource>,
    /// Cues raised since the shell last drained them
    events: Vec<GameEvent>,
    /// Entities created during the current pass
    spawned: Vec<Entity>,
}

impl WorldState {
    pub(crate) fn spawn(&mut self, entity: Entity) {
        self.spawned.push(entity);
    }

    pub(crate) fn cue(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Damage the player; the killing blow deducts exactly one life
    pub(crate) fn damage_player(&mut self, amount: f32, cause: DamageCause) -> DamageOutcome {
        let outcome = self.player.suffer_damage(amount, cause);
        if outcome == DamageOutcome::Destroyed {
            self.lives = self.lives.saturating_sub(1);
            log::info!("Player destroyed, {} lives left", self.lives);
        }
        outcome
    }

    pub(crate) fn enemy_destroyed(&mut self, kind: EnemyKind, pos: Vec2) {
        self.score += kind.profile().score;
        self.enemies_destroyed += 1;
        if let Some(loot) = kind.roll_loot(self.rng.as_mut()) {
            log::debug!("{:?} dropped {:?}", kind, loot);
            self.spawn(Entity::pickup(loot, pos));
        }
        self.spawn(Entity::explosion(pos));
        self.cue(GameEvent::Death);
        log::debug!(
            "{:?} destroyed ({}/{})",
            kind,
            self.enemies_destroyed,
            self.tuning.quota(self.level)
        );
    }

    fn quota_met(&self) -> bool {
        self.enemies_destroyed >= self.tuning.quota(self.level)
    }
}

/// The simulation: population, player and counters
pub struct GameWorld {
    /// Live entities in iteration order
    population: Vec<Entity>,
    state: WorldState,
    next_id: u32,
    time_ticks: u64,
}

impl GameWorld {
    /// Create a world seeded from `tuning.seed`, ready to play level 1
    pub fn new(tuning: Tuning) -> Self {
        let rng = rng::seeded(tuning.seed);
        Self::with_rng(tuning, rng)
    }

    /// Create a world drawing from a caller-supplied random source
    pub fn with_rng(tuning: Tuning, rng: Box<dyn RandomSource>) -> Self {
        let lives = tuning.starting_lives;
        let mut world = Self {
            population: Vec::new(),
            state: WorldState {
                player: Player::new(),
                tuning,
                score: 0,
                lives,
                level: 1,
                enemies_destroyed: 0,
                enemies_on_screen: 0,
                rng,
                events: Vec::new(),
                spawned: Vec::new(),
            },
            next_id: 1,
            time_ticks: 0,
        };
        world.init();
        world
    }

    /// Start (or restart) the current level: fresh player, fresh starfield,
    /// zeroed level counters. Score, lives and level carry over.
    pub fn init(&mut self) {
        self.population.clear();
        self.state.spawned.clear();
        self.state.player = Player::new();
        self.state.enemies_destroyed = 0;
        self.state.enemies_on_screen = 0;

        for _ in 0..self.state.tuning.initial_stars {
            let rng = self.state.rng.as_mut();
            let size = rng.real_in(STAR_MIN_SIZE, STAR_MAX_SIZE);
            let x = rng.int_in(0, VIEW_WIDTH as i32 - 1) as f32;
            let y = rng.int_in(0, VIEW_HEIGHT as i32 - 1) as f32;
            self.add_entity(Entity::star(Vec2::new(x, y), size));
        }

        log::info!(
            "Level {} begins: {} kills needed, {} lives",
            self.state.level,
            self.state.tuning.quota(self.state.level),
            self.state.lives
        );
    }

    /// Release every entity and reset the player
    pub fn cleanup(&mut self) {
        self.population.clear();
        self.state.spawned.clear();
        self.state.enemies_on_screen = 0;
        self.state.player = Player::new();
    }

    /// Move on to the next level after a `LevelComplete`
    pub fn advance_level(&mut self) {
        self.cleanup();
        self.state.level += 1;
        self.init();
    }

    /// No lives left
    pub fn is_game_over(&self) -> bool {
        self.state.lives == 0
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self, input: &TickInput) -> TickStatus {
        self.time_ticks += 1;
        let status = self.run_pass(input);
        log::trace!("tick {} ({:?}): {}", self.time_ticks, status, self.status());
        status
    }

    fn run_pass(&mut self, input: &TickInput) -> TickStatus {
        if self.state.player.is_dead() {
            return TickStatus::PlayerDied;
        }
        if let Some(weapon) = self.state.player.update(input.command) {
            let muzzle = self.state.player.muzzle();
            self.state
                .spawn(Entity::projectile(weapon, Allegiance::Player, muzzle));
            self.state.cue(weapon.fire_cue(Allegiance::Player));
        }

        for index in 0..self.population.len() {
            self.update_entity(index);

            if self.state.player.is_dead() {
                self.end_pass();
                return TickStatus::PlayerDied;
            }
            if self.state.quota_met() {
                self.end_pass();
                return self.finish_level();
            }
        }
        self.end_pass();
        if self.state.quota_met() {
            return self.finish_level();
        }

        self.introduce_star();
        self.introduce_enemy();
        TickStatus::Continue
    }

    /// Run one entity's update with the rest of the population behind a context
    fn update_entity(&mut self, index: usize) {
        let (before, rest) = self.population.split_at_mut(index);
        let Some((entity, after)) = rest.split_first_mut() else {
            return;
        };
        let mut ctx = TickContext::new(&mut self.state, before, after);
        entity.update(&mut ctx);
    }

    fn finish_level(&mut self) -> TickStatus {
        self.state.cue(GameEvent::LevelFinished);
        log::info!(
            "Level {} complete, score {}",
            self.state.level,
            self.state.score
        );
        TickStatus::LevelComplete
    }

    /// Sweep the dead, then admit everything spawned during the pass
    fn end_pass(&mut self) {
        self.compact();
        for entity in std::mem::take(&mut self.state.spawned) {
            self.add_entity(entity);
        }
    }

    /// Remove dead entities, releasing their on-screen enemy slots
    pub fn compact(&mut self) {
        let dead_enemies = self
            .population
            .iter()
            .filter(|e| e.is_dead() && e.is_enemy())
            .count() as u32;
        self.state.enemies_on_screen = self.state.enemies_on_screen.saturating_sub(dead_enemies);
        self.population.retain(|e| !e.is_dead());
    }

    /// Add an entity to the end of the population, returning its id
    pub fn add_entity(&mut self, mut entity: Entity) -> u32 {
        entity.id = self.next_id;
        self.next_id += 1;
        if entity.is_enemy() {
            self.state.enemies_on_screen += 1;
        }
        let id = entity.id;
        self.population.push(entity);
        id
    }

    fn introduce_star(&mut self) {
        let odds = self.state.tuning.star_spawn_odds;
        let rng = self.state.rng.as_mut();
        if rng.one_in(odds) {
            let size = rng.real_in(STAR_MIN_SIZE, STAR_MAX_SIZE);
            let y = rng.int_in(0, VIEW_HEIGHT as i32 - 1) as f32;
            self.add_entity(Entity::star(Vec2::new(VIEW_WIDTH - 1.0, y), size));
        }
    }

    fn introduce_enemy(&mut self) {
        let state = &mut self.state;
        if !spawn::should_add_enemy(
            &state.tuning,
            state.level,
            state.enemies_destroyed,
            state.enemies_on_screen,
        ) {
            return;
        }
        let y = state.rng.int_in(0, VIEW_HEIGHT as i32 - 1) as f32;
        let Some(kind) = spawn::choose_enemy(&state.tuning, state.level, state.rng.as_mut()) else {
            return;
        };
        let level = state.level;
        log::debug!("{:?} enters at y={}", kind, y);
        self.add_entity(Entity::enemy(kind, Vec2::new(VIEW_WIDTH - 1.0, y), level));
    }

    /// Hand accumulated cues to the shell
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Summary for the status bar
    pub fn status(&self) -> StatusLine {
        let player = &self.state.player;
        StatusLine {
            lives: self.state.lives,
            health_pct: player.health_pct(),
            score: self.state.score,
            level: self.state.level,
            energy_pct: player.energy_pct(),
            torpedoes: player.torpedoes,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.population
    }

    pub fn enemy_count(&self) -> usize {
        self.population.iter().filter(|e| e.is_enemy()).count()
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.state.player
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn enemies_destroyed(&self) -> u32 {
        self.state.enemies_destroyed
    }

    pub fn enemies_on_screen(&self) -> u32 {
        self.state.enemies_on_screen
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
