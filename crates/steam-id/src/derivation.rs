//! Per-format derivations that report failures as sentinel values.
//!
//! Each function here takes an arbitrary string and derives one target format from it. Unlike
//! [`Converter::convert()`](crate::Converter::convert), these do **not** check that the result is
//! within [`MIN`](crate::MIN)`..=`[`MAX`](crate::MAX); an input in the target format is returned
//! as-is.

use std::fmt;

use crate::{parse, AccountNumber, IdentifierFormat, Universe};

/// The outcome of deriving a single format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Derived {
    /// The derived representation.
    Rendered(String),

    /// The input was not in a recognized format, or one of its numbers doesn't fit.
    InvalidSteamId,

    /// The input is a SteamID64 smaller than [`BASE`](crate::BASE), so there is no account number
    /// to derive from.
    CannotGenerate,
}

impl Derived {
    /// Sentinel text for [`Derived::InvalidSteamId`].
    pub const INVALID_STEAM_ID: &'static str = "Invalid SteamID";

    /// Sentinel text for [`Derived::CannotGenerate`].
    pub const CANNOT_GENERATE: &'static str = "Cannot Generate SteamID";

    /// Whether the derivation succeeded.
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    /// Returns the derived representation, if any.
    pub fn as_rendered(&self) -> Option<&str> {
        match self {
            Self::Rendered(rendered) => Some(rendered),
            Self::InvalidSteamId | Self::CannotGenerate => None,
        }
    }

    /// Returns the derived representation, if any.
    pub fn into_rendered(self) -> Option<String> {
        match self {
            Self::Rendered(rendered) => Some(rendered),
            Self::InvalidSteamId | Self::CannotGenerate => None,
        }
    }
}

impl fmt::Display for Derived {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rendered(rendered) => fmt.write_str(rendered),
            Self::InvalidSteamId => fmt.write_str(Self::INVALID_STEAM_ID),
            Self::CannotGenerate => fmt.write_str(Self::CANNOT_GENERATE),
        }
    }
}

/// Derives `STEAM_X:Y:Z` from `input`, using `universe` for `X` when generating.
pub fn to_steam_id(input: &str, universe: Universe) -> Derived {
    derive(input, IdentifierFormat::SteamId, |account_number| {
        Some(account_number.to_steam_id(universe))
    })
}

/// Derives `[U:1:N]` from `input`.
pub fn to_steam_id3(input: &str) -> Derived {
    derive(input, IdentifierFormat::SteamId3, |account_number| {
        Some(account_number.to_steam_id3())
    })
}

/// Derives the 17-digit SteamID64 from `input`.
pub fn to_steam_id64(input: &str) -> Derived {
    derive(input, IdentifierFormat::SteamId64, |account_number| {
        account_number
            .to_steam_id64()
            .map(|steam_id64| steam_id64.to_string())
    })
}

fn derive<F>(input: &str, target: IdentifierFormat, render: F) -> Derived
where
    F: FnOnce(AccountNumber) -> Option<String>,
{
    let format = IdentifierFormat::classify(input);

    if format == target {
        return Derived::Rendered(input.to_owned());
    }

    match pivot(input, format) {
        Ok(account_number) => render(account_number).map_or(Derived::InvalidSteamId, Derived::Rendered),
        Err(sentinel) => sentinel,
    }
}

/// Extracts the account number from `input`, mapping failures to their sentinel.
fn pivot(input: &str, format: IdentifierFormat) -> Result<AccountNumber, Derived> {
    let account_number = match format {
        IdentifierFormat::SteamId => parse::steam_id(input).map(|(_, account_number)| account_number),
        IdentifierFormat::SteamId3 => parse::steam_id3(input),
        IdentifierFormat::SteamId64 => {
            let steam_id64 = parse::steam_id64(input).map_err(|_| Derived::InvalidSteamId)?;

            return AccountNumber::from_steam_id64(steam_id64).ok_or(Derived::CannotGenerate);
        }
        IdentifierFormat::Invalid => return Err(Derived::InvalidSteamId),
    };

    account_number.map_err(|error| {
        tracing::debug!(input, %error, "failed to derive SteamID");
        Derived::InvalidSteamId
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered(value: &str) -> Derived {
        Derived::Rendered(value.to_owned())
    }

    #[test]
    fn steam_id() {
        assert_eq!(to_steam_id("[U:1:22203]", Universe::Individual), rendered("STEAM_0:1:11101"));
        assert_eq!(
            to_steam_id("76561197960287931", Universe::Individual),
            rendered("STEAM_0:1:11101"),
        );
        assert_eq!(to_steam_id("76561197960287931", Universe::Public), rendered("STEAM_1:1:11101"));
    }

    #[test]
    fn steam_id_native_is_returned_as_is() {
        assert_eq!(to_steam_id("STEAM_3:1:11101", Universe::Individual), rendered("STEAM_3:1:11101"));
        assert_eq!(to_steam_id3("[U:1:022203]"), rendered("[U:1:022203]"));
        assert_eq!(to_steam_id64("00000000000000001"), rendered("00000000000000001"));
    }

    #[test]
    fn steam_id3() {
        assert_eq!(to_steam_id3("STEAM_0:1:11101"), rendered("[U:1:22203]"));
        assert_eq!(to_steam_id3("STEAM_5:1:11101"), rendered("[U:1:22203]"));
        assert_eq!(to_steam_id3("76561197960287931"), rendered("[U:1:22203]"));
    }

    #[test]
    fn steam_id64() {
        assert_eq!(to_steam_id64("STEAM_0:1:11101"), rendered("76561197960287931"));
        assert_eq!(to_steam_id64("[U:1:22203]"), rendered("76561197960287931"));
    }

    #[test]
    fn no_range_check() {
        // account number 0 is out of range, but still derivable
        assert_eq!(to_steam_id("76561197960265728", Universe::Individual), rendered("STEAM_0:0:0"));
        assert_eq!(to_steam_id64("[U:1:0]"), rendered("76561197960265728"));
        assert_eq!(to_steam_id64("[U:1:4294967296]"), rendered("76561202255233024"));
    }

    #[test]
    fn invalid() {
        for input in ["abc", "STEAM_9:1:1", "1234", "", "[U:1:22203"] {
            assert_eq!(to_steam_id(input, Universe::Individual), Derived::InvalidSteamId);
            assert_eq!(to_steam_id3(input), Derived::InvalidSteamId);
            assert_eq!(to_steam_id64(input), Derived::InvalidSteamId);
        }

        assert_eq!(Derived::InvalidSteamId.to_string(), "Invalid SteamID");
    }

    #[test]
    fn number_too_large() {
        assert_eq!(to_steam_id3("STEAM_0:1:99999999999999999999"), Derived::InvalidSteamId);
        assert_eq!(to_steam_id64("[U:1:18446744073709551615]"), Derived::InvalidSteamId);
    }

    #[test]
    fn cannot_generate() {
        assert_eq!(to_steam_id("76561197960265727", Universe::Individual), Derived::CannotGenerate);
        assert_eq!(to_steam_id3("00000000000000001"), Derived::CannotGenerate);
        assert_eq!(Derived::CannotGenerate.to_string(), "Cannot Generate SteamID");
        assert_eq!(Derived::CannotGenerate.into_rendered(), None);
    }
}
