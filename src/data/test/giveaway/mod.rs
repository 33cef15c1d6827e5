use crate::{
    data::giveaway::GiveawayRepository,
    error::{giveaway::GiveawayError, AppError},
    model::giveaway::CreateGiveawayParam,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, giveaway::GiveawayFactory},
};

mod create;
mod find_open_by_message_id;
mod list_open;
mod mark_ended;
mod set_forced_winner;
