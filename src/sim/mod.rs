//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall clock
//! - Every random draw comes from the injected `RandomSource`
//! - Stable iteration order (population order, spawns appended after the pass)
//! - No rendering, audio or input dependencies

pub mod collision;
pub mod context;
pub mod decoration;
pub mod enemy;
pub mod entity;
pub mod event;
pub mod hull;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod rng;
pub mod spawn;
pub mod world;

pub use collision::{bodies_collide, circles_collide, collision_threshold};
pub use context::TickContext;
pub use enemy::{Enemy, EnemyKind};
pub use entity::{Body, Entity, EntityKind};
pub use event::GameEvent;
pub use hull::{DamageCause, DamageOutcome, Damageable, Hull};
pub use pickup::PickupKind;
pub use player::{Command, Player};
pub use projectile::{Allegiance, ProjectileKind};
pub use rng::RandomSource;
pub use world::{GameWorld, TickInput, TickStatus};
