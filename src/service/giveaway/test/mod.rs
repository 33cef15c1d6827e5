use crate::{
    data::giveaway::GiveawayRepository,
    error::{giveaway::GiveawayError, AppError},
    model::giveaway::GiveawayOutcome,
    service::giveaway::{
        create::StartGiveaway,
        mock::{bot, user, FetchBehavior, MockPlatform, PlatformCall},
        GiveawayService,
    },
};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;
use test_utils::{
    builder::TestBuilder,
    factory::{self, giveaway::GiveawayFactory},
};

mod force_winner;

const TIMEOUT: Duration = Duration::from_millis(200);
