use rand::Rng;

use super::{Bet, Outcome};

const TILES: u32 = 25;
const MINES: u32 = 3;

/// Safe tiles revealed (1 to 22) and whether a mine was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinesDraw {
    pub safe: u32,
    pub hit: bool,
}

impl MinesDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let safe = rng.random_range(1..=TILES - MINES);
        let hit = rng.random_bool(f64::from(MINES) / f64::from(TILES));
        Self { safe, hit }
    }

    /// Multiplier in tenths: `1 + 0.3 * safe`.
    pub fn multiplier_tenths(&self) -> i64 {
        10 + 3 * i64::from(self.safe)
    }
}

/// A mine loses the stake; otherwise pays `floor(bet * (1 + 0.3 * safe)) - bet`.
pub fn play(bet: Bet, draw: &MinesDraw) -> Outcome {
    if draw.hit {
        return Outcome::lost(bet);
    }

    let winnings = bet.amount().saturating_mul(draw.multiplier_tenths()) / 10;
    Outcome::from_delta(winnings - bet.amount())
}
