//! Damageable capability shared by the player and enemy ships

use serde::{Deserialize, Serialize};

use super::entity::Body;

/// What delivered a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCause {
    /// Ship-to-ship ram
    Ship,
    /// Bolt or torpedo
    Projectile,
}

/// Result of applying damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was already dead; nothing happened
    Ignored,
    /// Target took the hit and is still alive
    Survived,
    /// This hit killed the target
    Destroyed,
}

/// Hit-point pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    /// May dip below zero on the killing hit
    pub hit_points: f32,
}

impl Hull {
    pub fn new(hit_points: f32) -> Self {
        Self { hit_points }
    }
}

/// Something with a body and a hull that can be shot or rammed.
///
/// `suffer_damage` latches the dead flag in the same call that takes the hull
/// to zero, so no ship is ever alive with non-positive health across a tick.
pub trait Damageable {
    fn body_mut(&mut self) -> &mut Body;
    fn hull_mut(&mut self) -> &mut Hull;

    /// Ships that die outright when they ram something
    fn dies_on_ram(&self) -> bool {
        false
    }

    fn suffer_damage(&mut self, amount: f32, cause: DamageCause) -> DamageOutcome {
        if self.body_mut().dead {
            return DamageOutcome::Ignored;
        }
        if cause == DamageCause::Ship && self.dies_on_ram() {
            self.body_mut().dead = true;
            return DamageOutcome::Destroyed;
        }

        let hull = self.hull_mut();
        hull.hit_points -= amount.abs();
        if hull.hit_points <= 0.0 {
            self.body_mut().dead = true;
            DamageOutcome::Destroyed
        } else {
            DamageOutcome::Survived
        }
    }
}
