//! Background stars and explosion animations
//!
//! Purely cosmetic: neither takes part in collisions.

use super::entity::Body;
use crate::consts::{EXPLOSION_GROWTH, EXPLOSION_TICKS};

/// Drift left until the star leaves the field
pub fn drift_star(body: &mut Body) {
    body.advance(false);
}

/// Grow for a fixed number of ticks, then expire
pub fn animate_explosion(body: &mut Body, cycle: &mut u8) {
    if *cycle >= EXPLOSION_TICKS {
        body.dead = true;
    } else {
        body.size *= EXPLOSION_GROWTH;
        *cycle += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::VIEW_WIDTH;
    use crate::sim::entity::{Entity, EntityKind};
    use glam::Vec2;

    #[test]
    fn test_star_drifts_one_unit() {
        let mut star = Entity::star(Vec2::new(VIEW_WIDTH - 1.0, 30.0), 0.3);
        drift_star(&mut star.body);
        assert_eq!(star.body.pos, Vec2::new(VIEW_WIDTH - 2.0, 30.0));
        assert!(!star.is_dead());
    }

    #[test]
    fn test_explosion_lifecycle() {
        let mut boom = Entity::explosion(Vec2::new(50.0, 50.0));
        let EntityKind::Explosion { mut cycle } = boom.kind else {
            unreachable!()
        };
        for _ in 0..4 {
            animate_explosion(&mut boom.body, &mut cycle);
            assert!(!boom.body.dead);
        }
        assert!((boom.body.size - 1.5f32.powi(4)).abs() < 1e-4);
        animate_explosion(&mut boom.body, &mut cycle);
        assert!(boom.body.dead);
    }
}
