//! Fire-and-forget cues raised during a tick
//!
//! The audio shell drains these after each tick; nothing in the simulation
//! reads them back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player fired the blaster
    PlayerShot,
    /// Any ship launched a torpedo
    TorpedoShot,
    /// Enemy fired a bolt
    EnemyShot,
    /// A ship took a non-fatal hit
    Blast,
    /// An enemy ship was destroyed
    Death,
    /// Player collected a pickup
    PickupCollected,
    /// Kill quota met for the level
    LevelFinished,
}
