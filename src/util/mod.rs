pub mod cooldown;
pub mod format;
pub mod parse;
