use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The `X` segment in `STEAM_X:Y:Z`.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Universe {
    /// `0`, also written as "unspecified" in older tools.
    #[default]
    Individual = 0,

    /// `1`, the universe every regular Steam account lives in.
    Public = 1,

    /// `2`
    Beta = 2,

    /// `3`
    Internal = 3,

    /// `4`
    Dev = 4,

    /// `5`, release candidate.
    RC = 5,
}

/// Returned by [`Universe`]'s [`FromStr`] and [`TryFrom`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid SteamID universe `{input}`; expected a digit between 0 and 5 or a universe name")]
pub struct ParseUniverseError {
    input: String,
}

impl Universe {
    /// Every universe, ordered by digit.
    pub const ALL: [Self; 6] = [
        Self::Individual,
        Self::Public,
        Self::Beta,
        Self::Internal,
        Self::Dev,
        Self::RC,
    ];

    /// Returns the universe's digit as it appears in `STEAM_X:Y:Z`.
    pub const fn as_digit(self) -> u8 {
        self as u8
    }

    /// Returns the universe with the given digit, if any.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Individual),
            1 => Some(Self::Public),
            2 => Some(Self::Beta),
            3 => Some(Self::Internal),
            4 => Some(Self::Dev),
            5 => Some(Self::RC),
            _ => None,
        }
    }

    /// Returns the universe's lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Public => "public",
            Self::Beta => "beta",
            Self::Internal => "internal",
            Self::Dev => "dev",
            Self::RC => "rc",
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for Universe {
    type Err = ParseUniverseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "0" | "individual" | "Individual" => Ok(Self::Individual),
            "1" | "public" | "Public" => Ok(Self::Public),
            "2" | "beta" | "Beta" => Ok(Self::Beta),
            "3" | "internal" | "Internal" => Ok(Self::Internal),
            "4" | "dev" | "Dev" => Ok(Self::Dev),
            "5" | "rc" | "RC" => Ok(Self::RC),
            _ => Err(ParseUniverseError { input: value.to_owned() }),
        }
    }
}

impl TryFrom<u8> for Universe {
    type Error = ParseUniverseError;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        Self::from_digit(digit).ok_or_else(|| ParseUniverseError { input: digit.to_string() })
    }
}
