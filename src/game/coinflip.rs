use rand::Rng;

use super::{Bet, Outcome};
use crate::error::economy::EconomyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn parse(value: Option<&str>) -> Result<Self, EconomyError> {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("heads") => Ok(Self::Heads),
            Some("tails") => Ok(Self::Tails),
            _ => Err(EconomyError::InvalidChoice("heads or tails".to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Heads => "heads",
            Self::Tails => "tails",
        }
    }
}

pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.random_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

/// Even money: the stake is won or lost.
pub fn play(bet: Bet, choice: CoinSide, landed: CoinSide) -> Outcome {
    if choice == landed {
        Outcome::won(bet)
    } else {
        Outcome::lost(bet)
    }
}
