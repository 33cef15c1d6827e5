use std::ops::Range;

use rand::Rng;

pub const REWARD_RANGE: Range<i64> = 500..1500;
pub const FINE_RANGE: Range<i64> = 200..700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrimeDraw {
    Success { reward: i64 },
    Caught { fine: i64 },
}

impl CrimeDraw {
    /// Even odds of getting away with it.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Success {
                reward: rng.random_range(REWARD_RANGE),
            }
        } else {
            Self::Caught {
                fine: rng.random_range(FINE_RANGE),
            }
        }
    }
}

/// Balance change for a crime. Fines are clamped so the wallet never goes negative.
pub fn settle(balance: i64, draw: CrimeDraw) -> i64 {
    match draw {
        CrimeDraw::Success { reward } => reward,
        CrimeDraw::Caught { fine } => -fine.min(balance.max(0)),
    }
}
