use crate::{
    error::{economy::EconomyError, AppError},
    game::{
        coinflip::CoinSide,
        crime::CrimeDraw,
        rob::{RobDraw, RobOutcome},
        Bet, Wager,
    },
    model::account::{Member, MAX_BALANCE},
    service::economy::{EconomyService, DAILY_REWARD},
    util::parse::AmountArg,
};
use rand::{rngs::StdRng, SeedableRng};
use test_utils::{
    builder::TestBuilder,
    factory::{self, account::AccountFactory},
};


const GUILD: u64 = 10;
const NOW: i64 = 1_700_000_000_000;
const HOUR_MS: i64 = 60 * 60 * 1000;

fn member(user_id: u64) -> Member {
    Member {
        user_id,
        bot: false,
    }
}
