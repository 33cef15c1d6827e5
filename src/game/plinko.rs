use rand::Rng;

use super::{Bet, Outcome};

/// Slot multipliers in tenths: 0, 0.5, 1, 1.5, 2, 3, 5, 2, 1.5, 1, 0.5, 0.
pub const SLOT_TENTHS: [i64; 12] = [0, 5, 10, 15, 20, 30, 50, 20, 15, 10, 5, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlinkoDraw {
    pub slot: usize,
}

impl PlinkoDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            slot: rng.random_range(0..SLOT_TENTHS.len()),
        }
    }

    pub fn multiplier_tenths(&self) -> i64 {
        SLOT_TENTHS[self.slot]
    }
}

/// `floor(bet * multiplier) - bet`.
pub fn play(bet: Bet, draw: &PlinkoDraw) -> Outcome {
    let winnings = bet.amount().saturating_mul(draw.multiplier_tenths()) / 10;
    Outcome::from_delta(winnings - bet.amount())
}
