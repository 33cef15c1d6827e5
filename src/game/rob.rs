use std::ops::Range;

use rand::Rng;

/// Both the robber and the target need at least this much in their wallet.
pub const MIN_BALANCE: i64 = 500;
pub const SUCCESS_CHANCE: f64 = 0.4;
pub const MAX_STEAL_BASE: f64 = 2000.0;
pub const FINE_RANGE: Range<i64> = 500..1500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RobDraw {
    /// `roll` is a uniform sample in [0, 1) scaling the steal.
    Success { roll: f64 },
    Caught { fine: i64 },
}

impl RobDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(SUCCESS_CHANCE) {
            Self::Success {
                roll: rng.random::<f64>(),
            }
        } else {
            Self::Caught {
                fine: rng.random_range(FINE_RANGE),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobOutcome {
    /// Amount moved from the target to the robber.
    Stole(i64),
    /// Fine paid by the robber, already clamped to their wallet.
    Caught(i64),
}

/// Settles a robbery: `floor(roll * min(target * 0.3, 2000)) + 100` on success,
/// a fine clamped to the robber's wallet otherwise.
pub fn settle(robber_balance: i64, target_balance: i64, draw: RobDraw) -> RobOutcome {
    match draw {
        RobDraw::Success { roll } => {
            let base = (target_balance as f64 * 0.3).min(MAX_STEAL_BASE);
            let steal = (roll * base).floor() as i64 + 100;
            RobOutcome::Stole(steal.min(target_balance))
        }
        RobDraw::Caught { fine } => RobOutcome::Caught(fine.min(robber_balance.max(0))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steal_scales_with_target_wallet() {
        assert_eq!(settle(1_000, 1_000, RobDraw::Success { roll: 0.5 }), RobOutcome::Stole(250));
        assert_eq!(settle(1_000, 1_000, RobDraw::Success { roll: 0.0 }), RobOutcome::Stole(100));
    }

    #[test]
    fn steal_base_is_capped() {
        // min(100_000 * 0.3, 2000) = 2000
        assert_eq!(
            settle(1_000, 100_000, RobDraw::Success { roll: 0.5 }),
            RobOutcome::Stole(1_100)
        );
    }

    #[test]
    fn fine_is_clamped_to_robber_wallet() {
        assert_eq!(settle(600, 5_000, RobDraw::Caught { fine: 1_200 }), RobOutcome::Caught(600));
        assert_eq!(settle(2_000, 5_000, RobDraw::Caught { fine: 1_200 }), RobOutcome::Caught(1_200));
    }
}
