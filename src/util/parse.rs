use crate::{
    error::{economy::EconomyError, internal::InternalError, AppError},
    model::account::MAX_AMOUNT,
};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Amount argument of a deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountArg {
    /// Move everything held on the source side.
    All,
    Exact(i64),
}

/// Parses a strictly positive amount, such as a bet or a transfer.
///
/// Returns `InvalidAmount` for missing, non-numeric, zero, negative or input above
/// `MAX_AMOUNT`.
pub fn parse_amount(value: Option<&str>) -> Result<i64, EconomyError> {
    value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|amount| (1..=MAX_AMOUNT).contains(amount))
        .ok_or(EconomyError::InvalidAmount)
}

/// Parses a positive amount or the keyword `all` (case-insensitive).
pub fn parse_amount_or_all(value: Option<&str>) -> Result<AmountArg, EconomyError> {
    match value {
        Some(raw) if raw.trim().eq_ignore_ascii_case("all") => Ok(AmountArg::All),
        other => parse_amount(other).map(AmountArg::Exact),
    }
}
