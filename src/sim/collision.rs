//! Circular proximity collision
//!
//! Two bodies collide when the distance between their centers is strictly
//! less than `COLLISION_FACTOR` times the sum of their radii.

use glam::Vec2;

use super::entity::Body;
use crate::consts::COLLISION_FACTOR;

/// Distance below which two circles of the given radii collide
#[inline]
pub fn collision_threshold(r1: f32, r2: f32) -> f32 {
    COLLISION_FACTOR * (r1.abs() + r2.abs())
}

/// Proximity test between two circles
#[inline]
pub fn circles_collide(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    p1.distance(p2) < collision_threshold(r1, r2)
}

/// Proximity test between two bodies
#[inline]
pub fn bodies_collide(a: &Body, b: &Body) -> bool {
    circles_collide(a.pos, a.radius(), b.pos, b.radius())
}
