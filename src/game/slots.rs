use rand::Rng;

use super::{Bet, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Cherry,
    Lemon,
    Orange,
    Grape,
    Diamond,
    Seven,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Cherry,
        Symbol::Lemon,
        Symbol::Orange,
        Symbol::Grape,
        Symbol::Diamond,
        Symbol::Seven,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Cherry => "🍒",
            Self::Lemon => "🍋",
            Self::Orange => "🍊",
            Self::Grape => "🍇",
            Self::Diamond => "💎",
            Self::Seven => "7️⃣",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotsDraw {
    pub reels: [Symbol; 3],
}

impl SlotsDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut spin = || Symbol::ALL[rng.random_range(0..Symbol::ALL.len())];
        Self {
            reels: [spin(), spin(), spin()],
        }
    }
}

/// Payout multiplier applied to the stake: triples pay 10/7/3, an adjacent pair pays 2.
pub fn multiplier(draw: &SlotsDraw) -> i64 {
    let [a, b, c] = draw.reels;

    if a == b && b == c {
        match a {
            Symbol::Diamond => 10,
            Symbol::Seven => 7,
            _ => 3,
        }
    } else if a == b || b == c {
        2
    } else {
        0
    }
}

/// Winnings minus the stake.
pub fn play(bet: Bet, draw: &SlotsDraw) -> Outcome {
    let winnings = bet.amount().saturating_mul(multiplier(draw));
    Outcome::from_delta(winnings - bet.amount())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameResult;
    use Symbol::*;

    fn draw(reels: [Symbol; 3]) -> SlotsDraw {
        SlotsDraw { reels }
    }

    #[test]
    fn triple_diamond_pays_ten_times() {
        let bet = Bet::new(100).unwrap();
        assert_eq!(play(bet, &draw([Diamond, Diamond, Diamond])).delta, 900);
    }

    #[test]
    fn triple_seven_pays_seven_times() {
        let bet = Bet::new(100).unwrap();
        assert_eq!(play(bet, &draw([Seven, Seven, Seven])).delta, 600);
    }

    #[test]
    fn other_triple_pays_three_times() {
        let bet = Bet::new(100).unwrap();
        assert_eq!(play(bet, &draw([Grape, Grape, Grape])).delta, 200);
    }

    #[test]
    fn adjacent_pair_doubles() {
        let bet = Bet::new(100).unwrap();
        assert_eq!(play(bet, &draw([Cherry, Cherry, Lemon])).delta, 100);
        assert_eq!(play(bet, &draw([Lemon, Cherry, Cherry])).delta, 100);
    }

    #[test]
    fn outer_pair_does_not_count() {
        let bet = Bet::new(100).unwrap();
        let outcome = play(bet, &draw([Cherry, Lemon, Cherry]));
        assert_eq!(outcome.delta, -100);
        assert_eq!(outcome.result, GameResult::Lost);
    }
}
