mod account;
mod giveaway;
