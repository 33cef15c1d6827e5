pub mod giveaway;
