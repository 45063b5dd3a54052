//! Nova Blaster - a side-scrolling arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (entities, collisions, spawning, world driver)
//! - `tuning`: Data-driven game balance
//! - `hud`: Once-per-tick status summary for the shell

pub mod hud;
pub mod sim;
pub mod tuning;

pub use hud::StatusLine;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const VIEW_WIDTH: f32 = 256.0;
    pub const VIEW_HEIGHT: f32 = 256.0;

    /// Collision radius per unit of visual size
    pub const RADIUS_PER_SIZE: f32 = 8.0;
    /// Collision threshold is this fraction of the summed radii
    pub const COLLISION_FACTOR: f32 = 0.75;

    /// Player defaults - starts at the left edge, mid height
    pub const PLAYER_START_X: f32 = 0.0;
    pub const PLAYER_START_Y: f32 = 128.0;
    pub const PLAYER_SIZE: f32 = 1.0;
    pub const PLAYER_STEP: f32 = 6.0;
    pub const PLAYER_MAX_HEALTH: f32 = 50.0;
    /// Blaster energy pool, regenerates by one per tick
    pub const MAX_BLASTER_ENERGY: u32 = 30;
    pub const BLASTER_SHOT_COST: u32 = 5;
    /// Forward offset of a player shot from the ship's center
    pub const PLAYER_MUZZLE_OFFSET: f32 = 12.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 1.5;
    /// Backward offset of an enemy shot from the ship's center
    pub const ENEMY_MUZZLE_OFFSET: f32 = 14.0;
    /// Base hit points before level scaling
    pub const ENEMY_BASE_HEALTH: f32 = 5.0;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 0.5;
    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const BOLT_DAMAGE: f32 = 2.0;
    pub const TORPEDO_DAMAGE: f32 = 8.0;
    /// Cosmetic spin of bolts, degrees per tick
    pub const BOLT_SPIN: f32 = 20.0;

    /// Pickup defaults
    pub const PICKUP_SIZE: f32 = 0.5;
    pub const PICKUP_SPEED: f32 = 0.75;
    pub const REPAIR_AMOUNT: f32 = 10.0;
    pub const TORPEDO_PICKUP_AMOUNT: u32 = 5;

    /// Decoration defaults
    pub const STAR_MIN_SIZE: f32 = 0.05;
    pub const STAR_MAX_SIZE: f32 = 0.5;
    pub const STAR_SPEED: f32 = 1.0;
    pub const EXPLOSION_GROWTH: f32 = 1.5;
    pub const EXPLOSION_TICKS: u8 = 4;
}

/// True if `x` lies within the horizontal extent of the play area
#[inline]
pub fn in_horizontal_bounds(x: f32) -> bool {
    (0.0..consts::VIEW_WIDTH).contains(&x)
}

/// True if `y` lies within the vertical extent of the play area
#[inline]
pub fn in_vertical_bounds(y: f32) -> bool {
    (0.0..consts::VIEW_HEIGHT).contains(&y)
}

/// True if `pos` lies inside the play area on both axes
#[inline]
pub fn in_play_area(pos: Vec2) -> bool {
    in_horizontal_bounds(pos.x) && in_vertical_bounds(pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_area_bounds() {
        assert!(in_play_area(Vec2::new(0.0, 0.0)));
        assert!(in_play_area(Vec2::new(255.9, 255.9)));
        assert!(!in_play_area(Vec2::new(256.0, 10.0)));
        assert!(!in_play_area(Vec2::new(10.0, -0.1)));
        assert!(in_horizontal_bounds(128.0));
        assert!(!in_horizontal_bounds(-1.0));
    }
}
