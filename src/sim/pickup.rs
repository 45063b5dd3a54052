//! Pickups dropped by destroyed enemies

use serde::{Deserialize, Serialize};

use super::context::TickContext;
use super::entity::Body;
use super::event::GameEvent;
use crate::consts::*;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// One more life
    ExtraLife,
    /// Restores hull, never past full health
    Repair,
    /// Adds torpedoes
    TorpedoAmmo,
}

impl PickupKind {
    fn grant(self, ctx: &mut TickContext<'_>) {
        match self {
            PickupKind::ExtraLife => ctx.gain_life(),
            PickupKind::Repair => ctx.player_mut().repair(REPAIR_AMOUNT),
            PickupKind::TorpedoAmmo => ctx.player_mut().add_torpedoes(TORPEDO_PICKUP_AMOUNT),
        }
    }
}

/// One tick of pickup drift
pub fn update(body: &mut Body, kind: PickupKind, ctx: &mut TickContext<'_>) {
    if body.dead {
        return;
    }
    if body.pos.x <= 0.0 || body.pos.y <= 0.0 {
        body.dead = true;
        return;
    }
    if collect(body, kind, ctx) {
        return;
    }

    body.advance(false);
    if !body.dead {
        collect(body, kind, ctx);
    }
}

fn collect(body: &mut Body, kind: PickupKind, ctx: &mut TickContext<'_>) -> bool {
    if !ctx.player_collides(body) {
        return false;
    }
    kind.grant(ctx);
    let bonus = ctx.tuning().pickup_score;
    ctx.add_score(bonus);
    ctx.cue(GameEvent::PickupCollected);
    body.dead = true;
    log::debug!("Collected {:?}", kind);
    true
}
