//! Entity record and the play-area movement contract

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::context::TickContext;
use super::decoration;
use super::enemy::{self, Enemy, EnemyKind};
use super::hull::{Damageable, Hull};
use super::pickup::{self, PickupKind};
use super::projectile::{self, Allegiance, ProjectileKind};
use crate::consts::*;
use crate::{in_horizontal_bounds, in_play_area};

/// Kinematic state shared by every entity (and the player)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Signed unit deltas; +x points toward the enemy side
    pub heading: Vec2,
    /// Travel distance per tick
    pub distance: f32,
    /// Damage dealt on contact (0 for non-combat entities)
    pub damage: f32,
    /// Visual scale; collision radius derives from it
    pub size: f32,
    /// Cosmetic facing in degrees
    pub facing: f32,
    pub dead: bool,
}

impl Body {
    pub fn new(pos: Vec2, heading: Vec2, distance: f32, size: f32) -> Self {
        Self {
            pos,
            heading,
            distance,
            damage: 0.0,
            size,
            facing: 0.0,
            dead: false,
        }
    }

    pub fn with_damage(mut self, damage: f32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_facing(mut self, facing: f32) -> Self {
        self.facing = facing;
        self
    }

    /// Collision radius (never negative)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.abs() * RADIUS_PER_SIZE
    }

    /// Move to `target` if it is inside the play area, otherwise die in place.
    ///
    /// Ships with `vertical_free` only need to stay inside the horizontal
    /// bounds; they may overshoot vertically while correcting course.
    pub fn move_to(&mut self, target: Vec2, vertical_free: bool) {
        let allowed = if vertical_free {
            in_horizontal_bounds(target.x)
        } else {
            in_play_area(target)
        };
        if allowed {
            self.pos = target;
        } else {
            self.dead = true;
        }
    }

    /// Move one tick along the current heading
    pub fn advance(&mut self, vertical_free: bool) {
        let target = self.pos + self.heading * self.distance;
        self.move_to(target, vertical_free);
    }
}

/// Variant-specific state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Star,
    Explosion { cycle: u8 },
    Enemy(Enemy),
    Projectile(ProjectileKind),
    Pickup(PickupKind),
}

/// A live member of the world population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Assigned by the world when the entity joins the population
    pub id: u32,
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    fn new(body: Body, kind: EntityKind) -> Self {
        Self { id: 0, body, kind }
    }

    /// Background star drifting left
    pub fn star(pos: Vec2, size: f32) -> Self {
        Self::new(
            Body::new(pos, Vec2::new(-1.0, 0.0), STAR_SPEED, size),
            EntityKind::Star,
        )
    }

    /// Growing explosion animation
    pub fn explosion(pos: Vec2) -> Self {
        Self::new(
            Body::new(pos, Vec2::ZERO, 0.0, 1.0),
            EntityKind::Explosion { cycle: 0 },
        )
    }

    /// Enemy ship with hit points scaled to `level`
    pub fn enemy(kind: EnemyKind, pos: Vec2, level: u32) -> Self {
        let profile = kind.profile();
        let body = Body::new(pos, profile.heading, profile.speed, ENEMY_SIZE)
            .with_damage(profile.damage);
        Self::new(body, EntityKind::Enemy(Enemy::new(kind, level)))
    }

    /// Projectile travelling away from its owner
    pub fn projectile(kind: ProjectileKind, owner: Allegiance, pos: Vec2) -> Self {
        let facing = match (kind, owner) {
            (ProjectileKind::Torpedo, Allegiance::Enemy) => 180.0,
            _ => 0.0,
        };
        let body = Body::new(pos, Vec2::new(owner.direction(), 0.0), PROJECTILE_SPEED, PROJECTILE_SIZE)
            .with_damage(kind.damage())
            .with_facing(facing);
        Self::new(body, EntityKind::Projectile(kind))
    }

    /// Reward drifting toward the player's corner
    pub fn pickup(kind: PickupKind, pos: Vec2) -> Self {
        Self::new(
            Body::new(pos, Vec2::new(-1.0, -1.0), PICKUP_SPEED, PICKUP_SIZE),
            EntityKind::Pickup(kind),
        )
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.body.dead
    }

    #[inline]
    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy(_))
    }

    pub fn enemy_kind(&self) -> Option<EnemyKind> {
        match &self.kind {
            EntityKind::Enemy(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Damageable view of an enemy ship
    pub fn as_enemy_mut(&mut self) -> Option<EnemyMut<'_>> {
        match &mut self.kind {
            EntityKind::Enemy(enemy) => Some(EnemyMut {
                body: &mut self.body,
                enemy,
            }),
            _ => None,
        }
    }

    /// Per-tick behavior. Dead entities do nothing.
    pub fn update(&mut self, ctx: &mut TickContext<'_>) {
        if self.body.dead {
            return;
        }
        match &mut self.kind {
            EntityKind::Star => decoration::drift_star(&mut self.body),
            EntityKind::Explosion { cycle } => decoration::animate_explosion(&mut self.body, cycle),
            EntityKind::Enemy(enemy) => enemy::update(&mut self.body, enemy, ctx),
            EntityKind::Projectile(kind) => projectile::update(&mut self.body, *kind, ctx),
            EntityKind::Pickup(kind) => pickup::update(&mut self.body, *kind, ctx),
        }
    }
}

/// Borrowed enemy ship, split into its body and AI state
pub struct EnemyMut<'a> {
    pub body: &'a mut Body,
    pub enemy: &'a mut Enemy,
}

impl Damageable for EnemyMut<'_> {
    fn body_mut(&mut self) -> &mut Body {
        self.body
    }

    fn hull_mut(&mut self) -> &mut Hull {
        &mut self.enemy.hull
    }

    fn dies_on_ram(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_off_screen_kills_without_moving() {
        let mut star = Entity::star(Vec2::new(0.5, 40.0), 0.2);
        star.body.advance(false);
        assert!(star.is_dead());
        assert_eq!(star.body.pos, Vec2::new(0.5, 40.0));
    }

    #[test]
    fn test_enemies_may_leave_vertical_range() {
        let mut ship = Entity::enemy(EnemyKind::Dreadnought, Vec2::new(100.0, 0.5), 1);
        ship.body.advance(true);
        assert!(!ship.is_dead());
        assert!(ship.body.pos.y < 0.0);

        // Non-ships die for the same move
        let mut body = Body::new(Vec2::new(100.0, 0.5), Vec2::new(-1.0, -1.0), 1.75, 1.0);
        body.advance(false);
        assert!(body.dead);
    }

    #[test]
    fn test_radii() {
        assert_eq!(Entity::enemy(EnemyKind::Drone, Vec2::ZERO, 1).body.radius(), 12.0);
        assert_eq!(Entity::pickup(PickupKind::Repair, Vec2::ZERO).body.radius(), 4.0);
        let bolt = Entity::projectile(ProjectileKind::Bolt, Allegiance::Player, Vec2::ZERO);
        assert_eq!(bolt.body.radius(), 4.0);
        assert_eq!(bolt.body.heading.x, 1.0);
        assert_eq!(bolt.body.damage, BOLT_DAMAGE);
    }

    #[test]
    fn test_enemy_view_dies_on_ram() {
        use super::super::hull::{DamageCause, DamageOutcome};

        let mut ship = Entity::enemy(EnemyKind::Dreadnought, Vec2::new(50.0, 50.0), 1);
        let hp_before = match &ship.kind {
            EntityKind::Enemy(e) => e.hull.hit_points,
            _ => unreachable!(),
        };
        let outcome = ship
            .as_enemy_mut()
            .map(|mut view| view.suffer_damage(0.0, DamageCause::Ship));
        assert_eq!(outcome, Some(DamageOutcome::Destroyed));
        assert!(ship.is_dead());
        match &ship.kind {
            EntityKind::Enemy(e) => assert_eq!(e.hull.hit_points, hp_before),
            _ => unreachable!(),
        }
        assert!(Entity::star(Vec2::ZERO, 0.1).as_enemy_mut().is_none());
    }
}
