//! Outcome engine for wager games and randomized earning actions.
//!
//! Every game splits into a draw, the only place randomness is consumed, and a pure
//! settlement that turns a bet, the player's choice and the draw into a balance delta.
//! Tests construct draws directly; production rolls them from an injected RNG.

pub mod baccarat;
pub mod blackjack;
pub mod coinflip;
pub mod crime;
pub mod mines;
pub mod plinko;
pub mod rob;
pub mod roulette;
pub mod slots;
pub mod work;

use rand::Rng;

use crate::{error::economy::EconomyError, model::account::MAX_AMOUNT};

/// A validated, strictly positive stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bet(i64);

impl Bet {
    /// Rejects zero, negative and oversized stakes before any draw happens.
    pub fn new(amount: i64) -> Result<Self, EconomyError> {
        if amount <= 0 || amount > MAX_AMOUNT {
            return Err(EconomyError::InvalidAmount);
        }

        Ok(Self(amount))
    }

    pub fn amount(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
    /// Stake returned unchanged.
    Push,
}

/// Settled result of one round: the signed change to apply to the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub delta: i64,
    pub result: GameResult,
}

impl Outcome {
    pub fn from_delta(delta: i64) -> Self {
        let result = match delta {
            d if d > 0 => GameResult::Won,
            d if d < 0 => GameResult::Lost,
            _ => GameResult::Push,
        };

        Self { delta, result }
    }

    pub fn won(bet: Bet) -> Self {
        Self::from_delta(bet.amount())
    }

    pub fn lost(bet: Bet) -> Self {
        Self::from_delta(-bet.amount())
    }
}

/// A wager game together with the player's choice, if the game takes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wager {
    Slots,
    Coinflip(coinflip::CoinSide),
    Blackjack,
    Roulette(roulette::RouletteBet),
    Baccarat(baccarat::BaccaratSide),
    Plinko,
    Mines,
}

/// The draw a wager was settled against, kept for rendering the reply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    Slots(slots::SlotsDraw),
    Coinflip(coinflip::CoinSide),
    Blackjack(blackjack::BlackjackDraw),
    Roulette(roulette::RouletteDraw),
    Baccarat(baccarat::BaccaratDraw),
    Plinko(plinko::PlinkoDraw),
    Mines(mines::MinesDraw),
}

impl Wager {
    /// Rolls the game's draw and settles the bet against it.
    pub fn play<R: Rng + ?Sized>(self, bet: Bet, rng: &mut R) -> (Draw, Outcome) {
        match self {
            Self::Slots => {
                let draw = slots::SlotsDraw::roll(rng);
                (Draw::Slots(draw), slots::play(bet, &draw))
            }
            Self::Coinflip(side) => {
                let draw = coinflip::roll(rng);
                (Draw::Coinflip(draw), coinflip::play(bet, side, draw))
            }
            Self::Blackjack => {
                let draw = blackjack::BlackjackDraw::roll(rng);
                (Draw::Blackjack(draw), blackjack::play(bet, &draw))
            }
            Self::Roulette(choice) => {
                let draw = roulette::RouletteDraw::roll(rng);
                (Draw::Roulette(draw), roulette::play(bet, choice, &draw))
            }
            Self::Baccarat(side) => {
                let draw = baccarat::BaccaratDraw::roll(rng);
                (Draw::Baccarat(draw), baccarat::play(bet, side, &draw))
            }
            Self::Plinko => {
                let draw = plinko::PlinkoDraw::roll(rng);
                (Draw::Plinko(draw), plinko::play(bet, &draw))
            }
            Self::Mines => {
                let draw = mines::MinesDraw::roll(rng);
                (Draw::Mines(draw), mines::play(bet, &draw))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn bet_rejects_non_positive() {
        assert_eq!(Bet::new(0), Err(EconomyError::InvalidAmount));
        assert_eq!(Bet::new(-10), Err(EconomyError::InvalidAmount));
        assert_eq!(Bet::new(1).map(Bet::amount), Ok(1));
    }

    #[test]
    fn bet_rejects_stakes_above_cap() {
        assert_eq!(Bet::new(MAX_AMOUNT).map(Bet::amount), Ok(MAX_AMOUNT));
        assert_eq!(Bet::new(MAX_AMOUNT + 1), Err(EconomyError::InvalidAmount));
        assert_eq!(Bet::new(i64::MAX), Err(EconomyError::InvalidAmount));
    }

    #[test]
    fn largest_stake_settles_without_overflow() {
        let bet = Bet::new(MAX_AMOUNT).unwrap();

        let straight = roulette::play(
            bet,
            roulette::RouletteBet::Number(7),
            &roulette::RouletteDraw { pocket: 7 },
        );
        assert_eq!(straight.delta, MAX_AMOUNT * 35);

        let mines = mines::play(bet, &mines::MinesDraw { safe: 24, hit: false });
        assert_eq!(mines.delta, MAX_AMOUNT * 82 / 10 - MAX_AMOUNT);
    }

    #[test]
    fn outcome_classifies_delta() {
        assert_eq!(Outcome::from_delta(5).result, GameResult::Won);
        assert_eq!(Outcome::from_delta(-5).result, GameResult::Lost);
        assert_eq!(Outcome::from_delta(0).result, GameResult::Push);
    }

    #[test]
    fn seeded_play_is_reproducible() {
        let bet = Bet::new(100).unwrap();
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);

        for wager in [Wager::Slots, Wager::Blackjack, Wager::Plinko, Wager::Mines] {
            assert_eq!(wager.play(bet, &mut first), wager.play(bet, &mut second));
        }
    }

    #[test]
    fn no_game_loses_more_than_the_stake() {
        let bet = Bet::new(250).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let wagers = [
            Wager::Slots,
            Wager::Coinflip(coinflip::CoinSide::Heads),
            Wager::Blackjack,
            Wager::Roulette(roulette::RouletteBet::Color(roulette::Color::Red)),
            Wager::Baccarat(baccarat::BaccaratSide::Banker),
            Wager::Plinko,
            Wager::Mines,
        ];

        for _ in 0..200 {
            for wager in wagers {
                let (_, outcome) = wager.play(bet, &mut rng);
                assert!(outcome.delta >= -bet.amount());
            }
        }
    }
}
