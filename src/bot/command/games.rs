//! Wager game commands.
//!
//! Every game shares one shape: a bet, an optional choice, one round against the
//! ledger. The table below maps each command to its choice parser.

use rand::{rngs::StdRng, SeedableRng};
use serenity::async_trait;

use crate::{
    error::{economy::EconomyError, AppError},
    game::{
        baccarat::BaccaratSide, coinflip::CoinSide, roulette::RouletteBet, Bet, Draw, GameResult,
        Outcome, Wager,
    },
    service::economy::EconomyService,
    util::{format::format_money, parse::parse_amount},
};

use super::{Command, CommandContext, CommandRegistry, Invocation, Reply};

/// Parses the argument following the bet into a wager.
type ChoiceParser = fn(Option<&str>) -> Result<Wager, EconomyError>;

/// A wager game exposed as a command.
pub struct GameCommand {
    name: &'static str,
    aliases: &'static [&'static str],
    usage: &'static str,
    parse_choice: ChoiceParser,
}

const GAMES: [GameCommand; 7] = [
    GameCommand {
        name: "slots",
        aliases: &[],
        usage: "slots <bet>",
        parse_choice: |_| Ok(Wager::Slots),
    },
    GameCommand {
        name: "coinflip",
        aliases: &["cf"],
        usage: "cf <bet> <heads|tails>",
        parse_choice: |choice| CoinSide::parse(choice).map(Wager::Coinflip),
    },
    GameCommand {
        name: "blackjack",
        aliases: &["bj"],
        usage: "bj <bet>",
        parse_choice: |_| Ok(Wager::Blackjack),
    },
    GameCommand {
        name: "roulette",
        aliases: &[],
        usage: "roulette <bet> <red|black|green|0-36>",
        parse_choice: |choice| RouletteBet::parse(choice).map(Wager::Roulette),
    },
    GameCommand {
        name: "baccarat",
        aliases: &[],
        usage: "baccarat <bet> <player|banker>",
        parse_choice: |choice| BaccaratSide::parse(choice).map(Wager::Baccarat),
    },
    GameCommand {
        name: "plinko",
        aliases: &[],
        usage: "plinko <bet>",
        parse_choice: |_| Ok(Wager::Plinko),
    },
    GameCommand {
        name: "mines",
        aliases: &[],
        usage: "mines <bet>",
        parse_choice: |_| Ok(Wager::Mines),
    },
];

pub fn register(registry: &mut CommandRegistry) {
    for game in GAMES {
        registry.register(Box::new(game));
    }
}

#[async_trait]
impl Command for GameCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn usage(&self) -> &'static str {
        self.usage
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let args = invocation.plain_args();

        let bet = Bet::new(parse_amount(args.first().copied())?)?;
        let wager = (self.parse_choice)(args.get(1).copied())?;

        let mut rng = StdRng::from_os_rng();
        let receipt = EconomyService::new(ctx.db)
            .wager(
                invocation.author_id,
                invocation.guild_id,
                wager,
                bet,
                &mut rng,
            )
            .await?;

        Ok(Reply::Text(render(&receipt.draw, receipt.outcome)))
    }
}

/// Formats a multiplier held in tenths, e.g. `15` as `1.5x`.
fn tenths(value: i64) -> String {
    format!("{}.{}x", value / 10, value % 10)
}

fn settled_line(outcome: Outcome) -> String {
    match outcome.result {
        GameResult::Won => format!("You won **{}**!", format_money(outcome.delta)),
        GameResult::Lost => format!("You lost **{}**!", format_money(-outcome.delta)),
        GameResult::Push => "You broke even!".to_string(),
    }
}

/// Renders the draw and its settlement as the reply text.
pub fn render(draw: &Draw, outcome: Outcome) -> String {
    match draw {
        Draw::Slots(slots) => {
            let reels = slots
                .reels
                .iter()
                .map(|symbol| symbol.emoji())
                .collect::<Vec<_>>()
                .join(" | ");
            format!("🎰 {}\n{}", reels, settled_line(outcome))
        }
        Draw::Coinflip(landed) => format!(
            "🪙 The coin landed on **{}**! {}",
            landed.name(),
            settled_line(outcome)
        ),
        Draw::Blackjack(hand) => {
            let verdict = if hand.player_total() == 21 {
                "🃏 Blackjack!"
            } else if hand.dealer_total() == 21 {
                "🃏 Dealer has Blackjack!"
            } else if outcome.result == GameResult::Won {
                "🃏 You beat the dealer!"
            } else {
                "🃏 Dealer won!"
            };
            format!(
                "Your cards: {} | Dealer: {}\n{} {}",
                hand.player_total(),
                hand.dealer_total(),
                verdict,
                settled_line(outcome)
            )
        }
        Draw::Roulette(spin) => format!(
            "🎡 Roulette: **{}** ({})\n{}",
            spin.pocket,
            spin.color().name(),
            settled_line(outcome)
        ),
        Draw::Baccarat(scores) => format!(
            "🎴 Player: {} | Banker: {}\n{}",
            scores.player,
            scores.banker,
            settled_line(outcome)
        ),
        Draw::Plinko(drop) => format!(
            "🎯 Plinko! Multiplier: **{}**\n{}",
            tenths(drop.multiplier_tenths()),
            settled_line(outcome)
        ),
        Draw::Mines(board) if board.hit => format!(
            "💣 Hit a mine! Lost **{}**!",
            format_money(-outcome.delta)
        ),
        Draw::Mines(board) => format!(
            "💎 Safe! {} ({} after {} tiles)",
            settled_line(outcome),
            tenths(board.multiplier_tenths()),
            board.safe
        ),
    }
}
