use std::num::ParseIntError;

use thiserror::Error;

use crate::IdentifierFormat;

/// Converting a string into a [`ConversionResult`](crate::ConversionResult) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input matched none of the known formats.
    #[error("`{input}` is not a valid SteamID; unrecognized format")]
    Unrecognized {
        /// The rejected input.
        input: String,
    },

    /// The input matched a format, but one of its numeric segments does not fit into a `u64`.
    #[error("`{input}` is not a valid SteamID: {source}")]
    InvalidNumber {
        /// The rejected input.
        input: String,

        /// Why the segment could not be parsed.
        source: ParseIntError,
    },

    /// The input matched a format, but computing its account number overflowed.
    #[error("`{input}` is not a valid SteamID; value too large")]
    Overflow {
        /// The rejected input.
        input: String,
    },

    /// The input is well-formed, but its SteamID64 is outside of `MIN..=MAX`.
    #[error("`{steam_id64}` is out of range for a valid SteamID64")]
    OutOfRange {
        /// The SteamID64 the input corresponds to.
        steam_id64: u64,
    },

    /// The input matched the pattern for `format`, but its segments did not have the shape that
    /// pattern guarantees.
    ///
    /// This is a bug in the classifier or the segment parser, never a problem with the input.
    #[error("bug: `{input}` was classified as {format} but could not be parsed as one")]
    Internal {
        /// The input that was classified.
        input: String,

        /// The format `input` was classified as.
        format: IdentifierFormat,
    },
}

impl ConvertError {
    /// Whether this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
