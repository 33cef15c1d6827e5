use crate::{
    data::account::AccountRepository,
    model::account::{BalanceField, CooldownKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust;
mod get_or_create;
mod set_cooldown;
mod top_by_total;
