//! Per-update context handed to each entity
//!
//! While one entity updates, the rest of the population is reachable only
//! through this context: the population is split around the updating entity
//! so no entity ever aliases another. Collision queries, spawns, score and
//! counter updates, and cues all go through here.

use glam::Vec2;

use super::collision::bodies_collide;
use super::entity::{Body, Entity};
use super::event::GameEvent;
use super::hull::{DamageCause, DamageOutcome, Damageable};
use super::player::Player;
use super::rng::RandomSource;
use super::world::WorldState;
use crate::tuning::Tuning;

/// Position of another entity in the population, in iteration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor(usize);

pub struct TickContext<'a> {
    state: &'a mut WorldState,
    /// Entities before the updating one
    before: &'a mut [Entity],
    /// Entities after the updating one
    after: &'a mut [Entity],
}

impl<'a> TickContext<'a> {
    pub(crate) fn new(
        state: &'a mut WorldState,
        before: &'a mut [Entity],
        after: &'a mut [Entity],
    ) -> Self {
        Self {
            state,
            before,
            after,
        }
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        self.state.rng.as_mut()
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.state.player
    }

    fn neighbors(&self) -> impl Iterator<Item = &Entity> {
        self.before.iter().chain(self.after.iter())
    }

    fn neighbor_mut(&mut self, Neighbor(index): Neighbor) -> Option<&mut Entity> {
        let split = self.before.len();
        if index < split {
            self.before.get_mut(index)
        } else {
            self.after.get_mut(index - split)
        }
    }

    /// First live enemy colliding with `body`, in population order
    pub fn first_colliding_enemy(&self, body: &Body) -> Option<Neighbor> {
        self.neighbors()
            .position(|e| e.is_enemy() && !e.is_dead() && bodies_collide(body, &e.body))
            .map(Neighbor)
    }

    /// Is the live player colliding with `body`?
    pub fn player_collides(&self, body: &Body) -> bool {
        let player = &self.state.player;
        !player.is_dead() && bodies_collide(body, &player.body)
    }

    /// Is the player ahead of `body` and within the firing lane?
    pub fn player_in_line_of_fire(&self, body: &Body) -> bool {
        let player = &self.state.player.body;
        let band = self.state.tuning.line_of_fire_band;
        body.pos.x > player.pos.x && (body.pos.y - player.pos.y).abs() <= band
    }

    /// Apply a projectile hit to an enemy and resolve kill effects
    pub fn damage_enemy(&mut self, target: Neighbor, amount: f32) -> DamageOutcome {
        let Some(entity) = self.neighbor_mut(target) else {
            return DamageOutcome::Ignored;
        };
        let Some(mut ship) = entity.as_enemy_mut() else {
            return DamageOutcome::Ignored;
        };
        let outcome = ship.suffer_damage(amount, DamageCause::Projectile);
        let kind = ship.enemy.kind;
        let pos = ship.body.pos;

        match outcome {
            DamageOutcome::Destroyed => self.state.enemy_destroyed(kind, pos),
            DamageOutcome::Survived => self.cue(GameEvent::Blast),
            DamageOutcome::Ignored => {}
        }
        outcome
    }

    /// Damage the player; a killing blow costs one life
    pub fn damage_player(&mut self, amount: f32, cause: DamageCause) -> DamageOutcome {
        self.state.damage_player(amount, cause)
    }

    /// Record the death of an enemy at `pos`: score, quota, loot and explosion
    pub fn enemy_destroyed(&mut self, kind: super::enemy::EnemyKind, pos: Vec2) {
        self.state.enemy_destroyed(kind, pos);
    }

    /// Queue an entity; it joins the population after the current pass
    pub fn spawn(&mut self, entity: Entity) {
        self.state.spawn(entity);
    }

    pub fn cue(&mut self, event: GameEvent) {
        self.state.cue(event);
    }

    pub fn add_score(&mut self, points: u64) {
        self.state.score += points;
    }

    pub fn gain_life(&mut self) {
        self.state.lives += 1;
    }
}
