use rand::Rng;

use super::{Bet, Outcome};
use crate::error::economy::EconomyError;

const EXPECTED_CHOICE: &str = "red, black, green or a number (0-36)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    /// Zero is green, even numbers red, odd numbers black.
    pub fn of(pocket: u8) -> Self {
        if pocket == 0 {
            Self::Green
        } else if pocket % 2 == 0 {
            Self::Red
        } else {
            Self::Black
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouletteBet {
    Number(u8),
    Color(Color),
}

impl RouletteBet {
    pub fn parse(value: Option<&str>) -> Result<Self, EconomyError> {
        let invalid = || EconomyError::InvalidChoice(EXPECTED_CHOICE.to_string());
        let raw = value.ok_or_else(invalid)?.to_ascii_lowercase();

        match raw.as_str() {
            "red" => Ok(Self::Color(Color::Red)),
            "black" => Ok(Self::Color(Color::Black)),
            "green" => Ok(Self::Color(Color::Green)),
            number => match number.parse::<u8>() {
                Ok(n) if n <= 36 => Ok(Self::Number(n)),
                _ => Err(invalid()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouletteDraw {
    pub pocket: u8,
}

impl RouletteDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            pocket: rng.random_range(0..=36),
        }
    }

    pub fn color(&self) -> Color {
        Color::of(self.pocket)
    }
}

/// A straight number pays 35 times the stake, a color twice the stake.
pub fn play(bet: Bet, choice: RouletteBet, draw: &RouletteDraw) -> Outcome {
    let multiplier = match choice {
        RouletteBet::Number(n) if n == draw.pocket => 35,
        RouletteBet::Color(color) if color == draw.color() => 2,
        _ => return Outcome::lost(bet),
    };

    Outcome::from_delta(bet.amount().saturating_mul(multiplier))
}
