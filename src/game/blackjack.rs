use rand::Rng;

use super::{Bet, Outcome};

/// Two cards per side, each valued 1 to 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackjackDraw {
    pub player: [u8; 2],
    pub dealer: [u8; 2],
}

impl BlackjackDraw {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut card = || rng.random_range(1..=11u8);
        Self {
            player: [card(), card()],
            dealer: [card(), card()],
        }
    }

    pub fn player_total(&self) -> u8 {
        self.player[0] + self.player[1]
    }

    pub fn dealer_total(&self) -> u8 {
        self.dealer[0] + self.dealer[1]
    }
}

/// Player blackjack beats everything, then dealer blackjack, then the higher total.
/// Ties go to the dealer.
pub fn play(bet: Bet, draw: &BlackjackDraw) -> Outcome {
    let (player, dealer) = (draw.player_total(), draw.dealer_total());

    if player == 21 {
        Outcome::won(bet)
    } else if dealer == 21 {
        Outcome::lost(bet)
    } else if player > dealer {
        Outcome::won(bet)
    } else {
        Outcome::lost(bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(player: [u8; 2], dealer: [u8; 2]) -> BlackjackDraw {
        BlackjackDraw { player, dealer }
    }

    #[test]
    fn player_blackjack_beats_dealer_blackjack() {
        let bet = Bet::new(50).unwrap();
        assert_eq!(play(bet, &draw([10, 11], [11, 10])).delta, 50);
    }

    #[test]
    fn dealer_blackjack_wins() {
        let bet = Bet::new(50).unwrap();
        assert_eq!(play(bet, &draw([9, 9], [10, 11])).delta, -50);
    }

    #[test]
    fn higher_total_wins_and_tie_loses() {
        let bet = Bet::new(50).unwrap();
        assert_eq!(play(bet, &draw([9, 9], [8, 9])).delta, 50);
        assert_eq!(play(bet, &draw([9, 9], [9, 9])).delta, -50);
    }
}
