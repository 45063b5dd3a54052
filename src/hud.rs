//! Status line handed to the shell once per tick

use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of the numbers shown above the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub lives: u32,
    pub health_pct: u32,
    pub score: u64,
    pub level: u32,
    pub energy_pct: u32,
    pub torpedoes: u32,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lives: {:>2}  Health: {:>3}%  Score: {:>6}  Level: {:>2}  Blaster: {:>3}%  Torpedoes: {:>2}",
            self.lives, self.health_pct, self.score, self.level, self.energy_pct, self.torpedoes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_format() {
        let line = StatusLine {
            lives: 3,
            health_pct: 100,
            score: 0,
            level: 1,
            energy_pct: 100,
            torpedoes: 0,
        };
        assert_eq!(
            line.to_string(),
            "Lives:  3  Health: 100%  Score:      0  Level:  1  Blaster: 100%  Torpedoes:  0"
        );
    }
}
