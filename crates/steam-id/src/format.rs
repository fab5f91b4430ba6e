use std::fmt;
use std::str::FromStr;

use lazy_regex::{regex, Lazy, Regex};
use thiserror::Error;

/// A regex to match SteamIDs in the format of `STEAM_0:1:11101`.
pub static STEAM_ID_REGEX: &Lazy<Regex> = regex!(r"^STEAM_[0-5]:[01]:[0-9]+$");

/// A regex to match SteamIDs in the format of `[U:1:22203]`.
pub static STEAM_ID3_REGEX: &Lazy<Regex> = regex!(r"^\[U:1:[0-9]+\]$");

/// A regex to match SteamIDs in the format of `76561197960287931`.
pub static STEAM_ID64_REGEX: &Lazy<Regex> = regex!(r"^[0-9]{17}$");

/// The textual format of a SteamID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierFormat {
    /// `STEAM_X:Y:Z`
    SteamId,

    /// `[U:1:N]`
    SteamId3,

    /// 17 decimal digits
    SteamId64,

    /// None of the above.
    Invalid,
}

/// Returned by [`IdentifierFormat`]'s [`FromStr`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown SteamID format `{input}`")]
pub struct ParseIdentifierFormatError {
    input: String,
}

impl IdentifierFormat {
    /// The valid formats, in the order they appear in a
    /// [`ConversionResult`](crate::ConversionResult).
    pub const VALID: [Self; 3] = [Self::SteamId, Self::SteamId3, Self::SteamId64];

    /// Determines which format `input` is in.
    ///
    /// The patterns are tried in the order of [`IdentifierFormat::VALID`] and the first match
    /// wins. No whitespace is trimmed.
    pub fn classify(input: &str) -> Self {
        let format = if STEAM_ID_REGEX.is_match(input) {
            Self::SteamId
        } else if STEAM_ID3_REGEX.is_match(input) {
            Self::SteamId3
        } else if STEAM_ID64_REGEX.is_match(input) {
            Self::SteamId64
        } else {
            Self::Invalid
        };

        tracing::trace!(input, %format, "classified SteamID");

        format
    }

    /// Returns the key used for this format in a [`ConversionResult`](crate::ConversionResult).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SteamId => "SteamID",
            Self::SteamId3 => "SteamID3",
            Self::SteamId64 => "SteamID64",
            Self::Invalid => "Invalid",
        }
    }

    /// Whether this is anything but [`IdentifierFormat::Invalid`].
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl fmt::Display for IdentifierFormat {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for IdentifierFormat {
    type Err = ParseIdentifierFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SteamID" => Ok(Self::SteamId),
            "SteamID3" => Ok(Self::SteamId3),
            "SteamID64" => Ok(Self::SteamId64),
            "Invalid" => Ok(Self::Invalid),
            _ => Err(ParseIdentifierFormatError { input: value.to_owned() }),
        }
    }
}
