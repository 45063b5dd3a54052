//! Bolts and torpedoes
//!
//! Ownership is encoded in the sign of the horizontal heading: projectiles
//! moving toward +x were fired by the player and hurt enemies, those moving
//! toward -x were fired by enemies and hurt the player.

use serde::{Deserialize, Serialize};

use super::context::TickContext;
use super::entity::Body;
use super::event::GameEvent;
use super::hull::{DamageCause, DamageOutcome};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Light spinning shot
    Bolt,
    /// Heavy shot
    Torpedo,
}

impl ProjectileKind {
    pub fn damage(self) -> f32 {
        match self {
            ProjectileKind::Bolt => BOLT_DAMAGE,
            ProjectileKind::Torpedo => TORPEDO_DAMAGE,
        }
    }

    /// Bolts tumble as they fly
    pub fn spins(self) -> bool {
        matches!(self, ProjectileKind::Bolt)
    }

    /// Cue played when this weapon is fired
    pub fn fire_cue(self, owner: Allegiance) -> GameEvent {
        match (self, owner) {
            (ProjectileKind::Torpedo, _) => GameEvent::TorpedoShot,
            (ProjectileKind::Bolt, Allegiance::Player) => GameEvent::PlayerShot,
            (ProjectileKind::Bolt, Allegiance::Enemy) => GameEvent::EnemyShot,
        }
    }
}

/// Side that fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allegiance {
    Player,
    Enemy,
}

impl Allegiance {
    /// Horizontal heading of shots fired by this side
    pub fn direction(self) -> f32 {
        match self {
            Allegiance::Player => 1.0,
            Allegiance::Enemy => -1.0,
        }
    }

    /// Owner of a projectile, read from its heading
    pub fn of(body: &Body) -> Self {
        if body.heading.x > 0.0 {
            Allegiance::Player
        } else {
            Allegiance::Enemy
        }
    }
}

/// One tick of projectile flight.
///
/// Hits are checked at the starting position and again at the end of the
/// move; a projectile dies on its first hit so it never delivers twice.
pub fn update(body: &mut Body, kind: ProjectileKind, ctx: &mut TickContext<'_>) {
    if body.dead {
        return;
    }
    if body.pos.x <= 0.0 || body.pos.x > VIEW_WIDTH {
        body.dead = true;
        return;
    }
    if strike(body, ctx) {
        return;
    }

    body.advance(false);
    if kind.spins() {
        body.facing = (body.facing + BOLT_SPIN) % 360.0;
    }
    if !body.dead {
        strike(body, ctx);
    }
}

/// Deliver damage to whatever the projectile overlaps on the opposing side
fn strike(body: &mut Body, ctx: &mut TickContext<'_>) -> bool {
    match Allegiance::of(body) {
        Allegiance::Player => {
            let Some(target) = ctx.first_colliding_enemy(body) else {
                return false;
            };
            ctx.damage_enemy(target, body.damage);
        }
        Allegiance::Enemy => {
            if !ctx.player_collides(body) {
                return false;
            }
            if ctx.damage_player(body.damage, DamageCause::Projectile) == DamageOutcome::Survived {
                ctx.cue(GameEvent::Blast);
            }
        }
    }
    body.dead = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_allegiance_from_heading() {
        let mine = Body::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 8.0, 0.5);
        let theirs = Body::new(Vec2::ZERO, Vec2::new(-1.0, 0.0), 8.0, 0.5);
        assert_eq!(Allegiance::of(&mine), Allegiance::Player);
        assert_eq!(Allegiance::of(&theirs), Allegiance::Enemy);
    }

    #[test]
    fn test_weapon_stats() {
        assert_eq!(ProjectileKind::Bolt.damage(), 2.0);
        assert_eq!(ProjectileKind::Torpedo.damage(), 8.0);
        assert!(ProjectileKind::Bolt.spins());
        assert!(!ProjectileKind::Torpedo.spins());
        assert_eq!(
            ProjectileKind::Torpedo.fire_cue(Allegiance::Enemy),
            GameEvent::TorpedoShot
        );
        assert_eq!(
            ProjectileKind::Bolt.fire_cue(Allegiance::Player),
            GameEvent::PlayerShot
        );
    }
}
