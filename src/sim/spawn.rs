//! Level quotas, on-screen caps and weighted enemy selection

use super::enemy::EnemyKind;
use super::rng::RandomSource;
use crate::tuning::Tuning;

/// Should another enemy enter the field?
///
/// The on-screen cap also shrinks to the kills still needed, so the tail of a
/// level is never flooded.
pub fn should_add_enemy(tuning: &Tuning, level: u32, destroyed: u32, on_screen: u32) -> bool {
    let remaining = tuning.quota(level).saturating_sub(destroyed);
    on_screen < tuning.max_on_screen(level).min(remaining)
}

/// Spawn weights at `level`, sorted ascending (stable, so ties keep kind order)
pub fn spawn_weights(tuning: &Tuning, level: u32) -> [(EnemyKind, u32); 3] {
    let mut weights = [
        (EnemyKind::Drone, tuning.drone_weight.at(level)),
        (EnemyKind::Gunship, tuning.gunship_weight.at(level)),
        (EnemyKind::Dreadnought, tuning.dreadnought_weight.at(level)),
    ];
    weights.sort_by_key(|&(_, w)| w);
    weights
}

/// Map a draw in `1..=total` onto the cumulative weight buckets
pub fn pick_weighted(weights: &[(EnemyKind, u32)], draw: u32) -> Option<EnemyKind> {
    let mut boundary = 0;
    for &(kind, weight) in weights {
        boundary += weight;
        if draw <= boundary && weight > 0 {
            return Some(kind);
        }
    }
    None
}

/// Roll a variant for `level`; `None` when every weight is zero
pub fn choose_enemy(tuning: &Tuning, level: u32, rng: &mut dyn RandomSource) -> Option<EnemyKind> {
    let weights = spawn_weights(tuning, level);
    let total: u32 = weights.iter().map(|&(_, w)| w).sum();
    if total == 0 {
        return None;
    }
    let draw = rng.int_in(1, total.min(i32::MAX as u32) as i32) as u32;
    pick_weighted(&weights, draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;
    use crate::tuning::SpawnWeight;

    #[test]
    fn test_level_one_weights() {
        let w = spawn_weights(&Tuning::default(), 1);
        assert_eq!(
            w,
            [
                (EnemyKind::Dreadnought, 15),
                (EnemyKind::Gunship, 25),
                (EnemyKind::Drone, 60)
            ]
        );
    }

    #[test]
    fn test_draw_of_one_picks_first_bucket() {
        let tuning = Tuning::default();
        for level in 1..10 {
            let weights = spawn_weights(&tuning, level);
            let mut rng = ScriptedRng::with_ints(&[1]);
            assert_eq!(choose_enemy(&tuning, level, &mut rng), Some(weights[0].0));
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        let w = spawn_weights(&Tuning::default(), 1);
        assert_eq!(pick_weighted(&w, 15), Some(EnemyKind::Dreadnought));
        assert_eq!(pick_weighted(&w, 16), Some(EnemyKind::Gunship));
        assert_eq!(pick_weighted(&w, 40), Some(EnemyKind::Gunship));
        assert_eq!(pick_weighted(&w, 41), Some(EnemyKind::Drone));
        assert_eq!(pick_weighted(&w, 100), Some(EnemyKind::Drone));
        assert_eq!(pick_weighted(&w, 101), None);
    }

    #[test]
    fn test_tied_weights_stay_reachable() {
        // Level 8: drone 60, gunship 60, dreadnought 85
        let w = spawn_weights(&Tuning::default(), 8);
        assert_eq!(pick_weighted(&w, 60), Some(EnemyKind::Drone));
        assert_eq!(pick_weighted(&w, 61), Some(EnemyKind::Gunship));
        assert_eq!(pick_weighted(&w, 121), Some(EnemyKind::Dreadnought));
    }

    #[test]
    fn test_zero_weights_spawn_nothing() {
        let tuning = Tuning {
            drone_weight: SpawnWeight::new(0, 0),
            gunship_weight: SpawnWeight::new(0, 0),
            dreadnought_weight: SpawnWeight::new(0, 0),
            ..Tuning::default()
        };
        let mut rng = ScriptedRng::new();
        assert_eq!(choose_enemy(&tuning, 3, &mut rng), None);
    }

    #[test]
    fn test_on_screen_cap() {
        let t = Tuning::default();
        // Level 1: cap 4, quota 10
        assert!(should_add_enemy(&t, 1, 0, 3));
        assert!(!should_add_enemy(&t, 1, 0, 4));
        // Two kills left -> at most two on screen
        assert!(should_add_enemy(&t, 1, 8, 1));
        assert!(!should_add_enemy(&t, 1, 8, 2));
        // Quota met -> none
        assert!(!should_add_enemy(&t, 1, 10, 0));
    }
}
