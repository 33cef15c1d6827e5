use rand::Rng;

use super::{Bet, Outcome};
use crate::error::economy::EconomyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaccaratSide {
    Player,
    Banker,
}

impl BaccaratSide {
    pub fn parse(value: Option<&str>) -> Result<Self, EconomyError> {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("player") => Ok(Self::Player),
            Some("banker") => Ok(Self::Banker),
            _ => Err(EconomyError::InvalidChoice("player or banker".to_string())),
        }
    }
}

/// Scores 1 to 9 for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaccaratDraw {
    pub player: u8,
    pub banker: u8,
}

impl BaccaratDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            player: rng.random_range(1..=9),
            banker: rng.random_range(1..=9),
        }
    }
}

/// The chosen side must score strictly higher; a tie loses.
pub fn play(bet: Bet, side: BaccaratSide, draw: &BaccaratDraw) -> Outcome {
    let won = match side {
        BaccaratSide::Player => draw.player > draw.banker,
        BaccaratSide::Banker => draw.banker > draw.player,
    };

    if won {
        Outcome::won(bet)
    } else {
        Outcome::lost(bet)
    }
}
