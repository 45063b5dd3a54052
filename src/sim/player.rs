//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::hull::{Damageable, Hull};
use super::projectile::ProjectileKind;
use crate::consts::*;

/// One pending key per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    FireBlaster,
    FireTorpedo,
}

/// The player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub hull: Hull,
    /// Blaster energy, 0..=MAX_BLASTER_ENERGY
    pub energy: u32,
    pub torpedoes: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            body: Body::new(
                Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                Vec2::new(1.0, 0.0),
                PLAYER_STEP,
                PLAYER_SIZE,
            ),
            hull: Hull::new(PLAYER_MAX_HEALTH),
            energy: MAX_BLASTER_ENERGY,
            torpedoes: 0,
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.body.dead
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn health(&self) -> f32 {
        self.hull.hit_points
    }

    /// Health as a whole percentage of full, never below zero
    pub fn health_pct(&self) -> u32 {
        (self.health().max(0.0) * 100.0 / PLAYER_MAX_HEALTH).round() as u32
    }

    pub fn energy_pct(&self) -> u32 {
        self.energy * 100 / MAX_BLASTER_ENERGY
    }

    pub fn add_torpedoes(&mut self, amount: u32) {
        self.torpedoes += amount;
    }

    /// Restore hull; ignored when already near full health
    pub fn repair(&mut self, amount: f32) {
        if self.hull.hit_points <= PLAYER_MAX_HEALTH - amount {
            self.hull.hit_points += amount;
        }
    }

    /// Muzzle position for a forward shot
    pub fn muzzle(&self) -> Vec2 {
        self.body.pos + Vec2::new(PLAYER_MUZZLE_OFFSET, 0.0)
    }

    /// Apply this tick's command and regenerate energy.
    ///
    /// Returns the weapon fired, if any; the caller spawns the projectile.
    pub fn update(&mut self, command: Option<Command>) -> Option<ProjectileKind> {
        if self.is_dead() {
            return None;
        }

        let mut fired = None;
        if let Some(command) = command {
            let pos = self.body.pos;
            match command {
                Command::Up => self.step(pos + Vec2::new(0.0, PLAYER_STEP)),
                Command::Down => self.step(pos - Vec2::new(0.0, PLAYER_STEP)),
                Command::Left => self.step(pos - Vec2::new(PLAYER_STEP, 0.0)),
                Command::Right => self.step(pos + Vec2::new(PLAYER_STEP, 0.0)),
                Command::FireBlaster => {
                    if self.energy >= BLASTER_SHOT_COST {
                        self.energy -= BLASTER_SHOT_COST;
                        fired = Some(ProjectileKind::Bolt);
                    }
                }
                Command::FireTorpedo => {
                    if self.torpedoes > 0 {
                        self.torpedoes -= 1;
                        fired = Some(ProjectileKind::Torpedo);
                    }
                }
            }
        }

        self.energy = (self.energy + 1).min(MAX_BLASTER_ENERGY);
        fired
    }

    /// Steps that would leave the field are refused rather than fatal
    fn step(&mut self, target: Vec2) {
        if crate::in_play_area(target) {
            self.body.move_to(target, false);
        }
    }
}

impl Damageable for Player {
    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn hull_mut(&mut self) -> &mut Hull {
        &mut self.hull
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::hull::{DamageCause, DamageOutcome};
    use proptest::prelude::*;

    #[test]
    fn test_new_player() {
        let p = Player::new();
        assert_eq!(p.pos(), Vec2::new(0.0, 128.0));
        assert_eq!(p.health(), 50.0);
        assert_eq!(p.energy, 30);
        assert_eq!(p.torpedoes, 0);
        assert_eq!(p.health_pct(), 100);
        assert_eq!(p.energy_pct(), 100);
    }

    #[test]
    fn test_movement_clamped_at_edges() {
        let mut p = Player::new();
        p.update(Some(Command::Left));
        assert_eq!(p.pos(), Vec2::new(0.0, 128.0));
        assert!(!p.is_dead());

        p.update(Some(Command::Right));
        p.update(Some(Command::Up));
        assert_eq!(p.pos(), Vec2::new(6.0, 134.0));

        p.body.pos.y = 2.0;
        p.update(Some(Command::Down));
        assert_eq!(p.pos().y, 2.0);

        p.body.pos.y = 252.0;
        p.update(Some(Command::Up));
        assert_eq!(p.pos().y, 252.0);
    }

    #[test]
    fn test_blaster_costs_energy() {
        let mut p = Player::new();
        assert_eq!(p.update(Some(Command::FireBlaster)), Some(ProjectileKind::Bolt));
        // 30 - 5 + 1
        assert_eq!(p.energy, 26);

        p.energy = 4;
        assert_eq!(p.update(Some(Command::FireBlaster)), None);
        assert_eq!(p.energy, 5);
        assert_eq!(p.update(Some(Command::FireBlaster)), Some(ProjectileKind::Bolt));
        assert_eq!(p.energy, 1);
    }

    #[test]
    fn test_torpedo_needs_ammo() {
        let mut p = Player::new();
        assert_eq!(p.update(Some(Command::FireTorpedo)), None);
        p.add_torpedoes(5);
        assert_eq!(p.update(Some(Command::FireTorpedo)), Some(ProjectileKind::Torpedo));
        assert_eq!(p.torpedoes, 4);
    }

    #[test]
    fn test_two_torpedo_hits_leave_player_alive() {
        let mut p = Player::new();
        assert_eq!(p.suffer_damage(8.0, DamageCause::Projectile), DamageOutcome::Survived);
        assert_eq!(p.suffer_damage(8.0, DamageCause::Projectile), DamageOutcome::Survived);
        assert_eq!(p.health(), 34.0);
        assert!(!p.is_dead());
        assert_eq!(p.health_pct(), 68);
    }

    #[test]
    fn test_player_survives_rams_until_health_runs_out() {
        let mut p = Player::new();
        p.hull.hit_points = 15.0;
        assert_eq!(p.suffer_damage(15.0, DamageCause::Ship), DamageOutcome::Destroyed);
        assert!(p.is_dead());
        assert_eq!(p.health_pct(), 0);
    }

    #[test]
    fn test_repair_never_overfills() {
        let mut p = Player::new();
        p.hull.hit_points = 40.0;
        p.repair(REPAIR_AMOUNT);
        assert_eq!(p.health(), 50.0);
        p.hull.hit_points = 45.0;
        p.repair(REPAIR_AMOUNT);
        assert_eq!(p.health(), 45.0);
    }

    #[test]
    fn test_dead_player_does_nothing() {
        let mut p = Player::new();
        p.body.dead = true;
        p.energy = 10;
        assert_eq!(p.update(Some(Command::FireBlaster)), None);
        assert_eq!(p.energy, 10);
    }

    fn any_command() -> impl Strategy<Value = Option<Command>> {
        prop_oneof![
            Just(None),
            Just(Some(Command::Up)),
            Just(Some(Command::Down)),
            Just(Some(Command::Left)),
            Just(Some(Command::Right)),
            Just(Some(Command::FireBlaster)),
            Just(Some(Command::FireTorpedo)),
        ]
    }

    proptest! {
        #[test]
        fn prop_resources_stay_in_bounds(
            commands in prop::collection::vec(any_command(), 0..200),
            ammo in 0u32..4,
        ) {
            let mut p = Player::new();
            p.add_torpedoes(ammo);
            for command in commands {
                p.update(command);
                prop_assert!(p.energy <= MAX_BLASTER_ENERGY);
                prop_assert!(crate::in_play_area(p.pos()));
            }
        }
    }
}
