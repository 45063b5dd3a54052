//! Enemy ships: per-kind profiles and the flight-plan AI
//!
//! Every kind runs the same per-tick skeleton; kinds differ only through the
//! hooks on `EnemyKind` (heading bias, loot policy, weapon, attack odds and
//! the secondary flight adjustment).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::context::TickContext;
use super::entity::{Body, Entity, EnemyMut};
use super::hull::{DamageCause, Damageable, Hull};
use super::pickup::PickupKind;
use super::projectile::{Allegiance, ProjectileKind};
use super::rng::RandomSource;
use crate::consts::*;

/// Enemy variants, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Basic fighter, never drops loot
    Drone,
    /// Drops repairs and torpedoes, may level out into a crawl near the player
    Gunship,
    /// Heavy ship firing torpedoes, may drop an extra life
    Dreadnought,
}

/// Fixed stats for one enemy kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Damage dealt to the player on a ram
    pub damage: f32,
    /// Heading at spawn
    pub heading: Vec2,
    /// Travel distance per tick
    pub speed: f32,
    /// Score for destroying one
    pub score: u64,
    /// Extra level-scaled health shares on top of the standard pool
    pub bonus_health_shares: f32,
    pub weapon: ProjectileKind,
}

const DRONE: EnemyProfile = EnemyProfile {
    damage: 5.0,
    heading: Vec2::new(-1.0, 0.0),
    speed: 2.0,
    score: 250,
    bonus_health_shares: 0.0,
    weapon: ProjectileKind::Bolt,
};

const GUNSHIP: EnemyProfile = EnemyProfile {
    damage: 5.0,
    heading: Vec2::new(-1.0, 0.0),
    speed: 2.0,
    score: 250,
    bonus_health_shares: 0.0,
    weapon: ProjectileKind::Bolt,
};

const DREADNOUGHT: EnemyProfile = EnemyProfile {
    damage: 15.0,
    heading: Vec2::new(-1.0, -1.0),
    speed: 1.75,
    score: 1000,
    bonus_health_shares: 1.0,
    weapon: ProjectileKind::Torpedo,
};

/// Level-scaled health share: `5 * (1 + (level - 1) * 0.1)`
pub fn level_health(level: u32) -> f32 {
    let level = level.max(1) as f32;
    ENEMY_BASE_HEALTH * (1.0 + (level - 1.0) * 0.1)
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Drone, EnemyKind::Gunship, EnemyKind::Dreadnought];

    pub fn profile(self) -> &'static EnemyProfile {
        match self {
            EnemyKind::Drone => &DRONE,
            EnemyKind::Gunship => &GUNSHIP,
            EnemyKind::Dreadnought => &DREADNOUGHT,
        }
    }

    /// Starting hit points at `level`
    pub fn hit_points(self, level: u32) -> f32 {
        let share = level_health(level);
        share * (1.0 + self.profile().bonus_health_shares)
    }

    /// Vertical heading picked when a flight plan expires
    pub fn pick_vertical_heading(self, rng: &mut dyn RandomSource) -> f32 {
        match self {
            EnemyKind::Dreadnought => -1.0,
            EnemyKind::Drone | EnemyKind::Gunship => match rng.int_in(0, 2) {
                0 => 0.0,
                1 => 1.0,
                _ => -1.0,
            },
        }
    }

    /// Attack odds are 1-in-N while the player is in the line of fire.
    /// N shrinks as the level rises.
    pub fn attack_odds(self, level: u32) -> i32 {
        let level = level.max(1) as i32;
        match self {
            EnemyKind::Drone | EnemyKind::Gunship => 20 / level + 5,
            EnemyKind::Dreadnought => 10 / level + 10,
        }
    }

    /// Loot left behind when this kind is destroyed
    pub fn roll_loot(self, rng: &mut dyn RandomSource) -> Option<PickupKind> {
        match self {
            EnemyKind::Drone => None,
            EnemyKind::Gunship => {
                if !rng.one_in(3) {
                    return None;
                }
                if rng.one_in(2) {
                    Some(PickupKind::Repair)
                } else {
                    Some(PickupKind::TorpedoAmmo)
                }
            }
            EnemyKind::Dreadnought => rng.one_in(6).then_some(PickupKind::ExtraLife),
        }
    }

    /// Secondary flight adjustment applied before moving
    fn adjust_flight(self, body: &mut Body, enemy: &mut Enemy, ctx: &mut TickContext<'_>) {
        if self != EnemyKind::Gunship || body.pos.x >= VIEW_WIDTH / 2.0 {
            return;
        }
        let odds = self.attack_odds(ctx.level());
        if ctx.rng().one_in(odds) {
            body.heading.y = 0.0;
            body.distance = ctx.tuning().gunship_crawl_speed;
            enemy.flight_plan = VIEW_WIDTH;
        }
    }
}

/// AI state of an enemy ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hull: Hull,
    /// Ticks left on the current heading
    pub flight_plan: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, level: u32) -> Self {
        Self {
            kind,
            hull: Hull::new(kind.hit_points(level)),
            flight_plan: 0.0,
        }
    }

    pub fn score(&self) -> u64 {
        self.kind.profile().score
    }
}

/// One tick of enemy behavior
pub fn update(body: &mut Body, enemy: &mut Enemy, ctx: &mut TickContext<'_>) {
    if body.dead {
        return;
    }
    if escaped(body) {
        return;
    }
    if ram_player(body, enemy, ctx) {
        return;
    }

    refresh_flight_plan(body, enemy, ctx);
    if try_attack(body, enemy, ctx) {
        return;
    }

    enemy.kind.adjust_flight(body, enemy, ctx);
    body.advance(true);
    enemy.flight_plan -= 1.0;
    if body.dead || escaped(body) {
        return;
    }
    ram_player(body, enemy, ctx);
}

/// Crossed the left edge
fn escaped(body: &mut Body) -> bool {
    if body.pos.x < 0.0 {
        body.dead = true;
    }
    body.dead
}

/// Mutual kill on contact with the player
fn ram_player(body: &mut Body, enemy: &mut Enemy, ctx: &mut TickContext<'_>) -> bool {
    if !ctx.player_collides(body) {
        return false;
    }
    ctx.damage_player(body.damage, DamageCause::Ship);

    let kind = enemy.kind;
    let pos = body.pos;
    EnemyMut { body, enemy }.suffer_damage(0.0, DamageCause::Ship);
    ctx.enemy_destroyed(kind, pos);
    true
}

fn refresh_flight_plan(body: &mut Body, enemy: &mut Enemy, ctx: &mut TickContext<'_>) {
    if body.pos.y >= VIEW_HEIGHT - 1.0 {
        body.heading.y = -1.0;
    } else if body.pos.y <= 0.0 {
        body.heading.y = 1.0;
    }

    if enemy.flight_plan <= 0.0 {
        let max_ticks = ctx.tuning().flight_plan_max_ticks;
        let rng = ctx.rng();
        body.heading.y = enemy.kind.pick_vertical_heading(rng);
        enemy.flight_plan = rng.int_in(1, max_ticks.max(1)) as f32;
    }
}

fn try_attack(body: &Body, enemy: &Enemy, ctx: &mut TickContext<'_>) -> bool {
    if !ctx.player_in_line_of_fire(body) {
        return false;
    }
    let odds = enemy.kind.attack_odds(ctx.level());
    if !ctx.rng().one_in(odds) {
        return false;
    }

    let weapon = enemy.kind.profile().weapon;
    let muzzle = body.pos - Vec2::new(ENEMY_MUZZLE_OFFSET, 0.0);
    ctx.spawn(Entity::projectile(weapon, Allegiance::Enemy, muzzle));
    ctx.cue(weapon.fire_cue(Allegiance::Enemy));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    #[test]
    fn test_level_health_scaling() {
        assert_eq!(level_health(1), 5.0);
        assert!((level_health(3) - 6.0).abs() < 1e-5);
        assert_eq!(EnemyKind::Drone.hit_points(1), 5.0);
        assert_eq!(EnemyKind::Dreadnought.hit_points(1), 10.0);
        assert!((EnemyKind::Gunship.hit_points(11) - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_attack_odds_shrink_with_level() {
        assert_eq!(EnemyKind::Drone.attack_odds(1), 25);
        assert_eq!(EnemyKind::Drone.attack_odds(2), 15);
        assert_eq!(EnemyKind::Drone.attack_odds(30), 5);
        assert_eq!(EnemyKind::Dreadnought.attack_odds(1), 20);
        assert_eq!(EnemyKind::Dreadnought.attack_odds(4), 12);
        // Level zero is clamped
        assert_eq!(EnemyKind::Gunship.attack_odds(0), 25);
    }

    #[test]
    fn test_heading_bias() {
        let mut rng = ScriptedRng::with_ints(&[0, 1, 2]);
        assert_eq!(EnemyKind::Drone.pick_vertical_heading(&mut rng), 0.0);
        assert_eq!(EnemyKind::Gunship.pick_vertical_heading(&mut rng), 1.0);
        assert_eq!(EnemyKind::Drone.pick_vertical_heading(&mut rng), -1.0);
        assert_eq!(EnemyKind::Dreadnought.pick_vertical_heading(&mut rng), -1.0);
    }

    #[test]
    fn test_loot_policies() {
        let mut rng = ScriptedRng::with_ints(&[1]);
        assert_eq!(EnemyKind::Drone.roll_loot(&mut rng), None);

        let mut rng = ScriptedRng::with_ints(&[1, 1]);
        assert_eq!(EnemyKind::Gunship.roll_loot(&mut rng), Some(PickupKind::Repair));
        let mut rng = ScriptedRng::with_ints(&[1, 2]);
        assert_eq!(EnemyKind::Gunship.roll_loot(&mut rng), Some(PickupKind::TorpedoAmmo));
        let mut rng = ScriptedRng::with_ints(&[2]);
        assert_eq!(EnemyKind::Gunship.roll_loot(&mut rng), None);

        let mut rng = ScriptedRng::with_ints(&[1]);
        assert_eq!(EnemyKind::Dreadnought.roll_loot(&mut rng), Some(PickupKind::ExtraLife));
        let mut rng = ScriptedRng::with_ints(&[6]);
        assert_eq!(EnemyKind::Dreadnought.roll_loot(&mut rng), None);
    }

    #[test]
    fn test_profiles() {
        assert_eq!(EnemyKind::Drone.profile().score, 250);
        assert_eq!(EnemyKind::Gunship.profile().score, 250);
        assert_eq!(EnemyKind::Dreadnought.profile().score, 1000);
        assert_eq!(EnemyKind::Dreadnought.profile().weapon, ProjectileKind::Torpedo);
        assert_eq!(Enemy::new(EnemyKind::Drone, 1).flight_plan, 0.0);
    }
}
