//! Segment parsing for inputs that have already been classified.
//!
//! The regexes in [`format`](crate::format) decide *which* format an input is in; these
//! functions extract the numbers. They still check the shape they rely on, and report
//! [`ConvertError::Internal`] instead of panicking if it doesn't hold.

use crate::{AccountNumber, ConvertError, IdentifierFormat, Universe};

/// Parses `STEAM_X:Y:Z`.
pub(crate) fn steam_id(input: &str) -> Result<(Universe, AccountNumber), ConvertError> {
    let mut segments = input
        .strip_prefix("STEAM_")
        .ok_or_else(|| mismatch(input, IdentifierFormat::SteamId))?
        .splitn(3, ':');

    let universe = segments
        .next()
        .and_then(|x| x.parse::<u8>().ok())
        .and_then(Universe::from_digit)
        .ok_or_else(|| mismatch(input, IdentifierFormat::SteamId))?;

    let y = match segments.next() {
        Some("0") => 0,
        Some("1") => 1,
        Some(_) | None => return Err(mismatch(input, IdentifierFormat::SteamId)),
    };

    let z = segments.next().ok_or_else(|| mismatch(input, IdentifierFormat::SteamId))?;
    let z = number(input, IdentifierFormat::SteamId, z)?;

    let account_number = AccountNumber::from_y_z(y, z).ok_or_else(|| ConvertError::Overflow {
        input: input.to_owned(),
    })?;

    Ok((universe, account_number))
}

/// Parses `[U:1:N]`.
pub(crate) fn steam_id3(input: &str) -> Result<AccountNumber, ConvertError> {
    let id = input
        .strip_prefix("[U:1:")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| mismatch(input, IdentifierFormat::SteamId3))?;

    number(input, IdentifierFormat::SteamId3, id).map(AccountNumber::new)
}

/// Parses the raw 64-bit value of a SteamID64.
pub(crate) fn steam_id64(input: &str) -> Result<u64, ConvertError> {
    number(input, IdentifierFormat::SteamId64, input)
}

fn number(input: &str, format: IdentifierFormat, digits: &str) -> Result<u64, ConvertError> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(mismatch(input, format));
    }

    digits.parse::<u64>().map_err(|source| ConvertError::InvalidNumber {
        input: input.to_owned(),
        source,
    })
}

/// `input` was classified as `format`, but doesn't have that format's shape.
fn mismatch(input: &str, format: IdentifierFormat) -> ConvertError {
    tracing::error!(input, %format, "classified SteamID does not match its format");

    ConvertError::Internal {
        input: input.to_owned(),
        format,
    }
}
