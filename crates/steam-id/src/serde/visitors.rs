use std::fmt;

use serde::de::{self, Unexpected};

use crate::{IdentifierFormat, Universe};

/// Accepts a universe digit (`0..=5`) or name, as an integer or a string.
#[derive(Debug, Default)]
pub struct VisitUniverse {
    _priv: (),
}

/// Accepts a format name (`SteamID`, `SteamID3`, `SteamID64`, `Invalid`).
#[derive(Debug, Default)]
pub struct VisitIdentifierFormat {
    _priv: (),
}

impl de::Visitor<'_> for VisitUniverse {
    type Value = Universe;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "a SteamID universe (0-5 or a universe name)")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .ok()
            .and_then(Universe::from_digit)
            .ok_or_else(|| de::Error::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map_err(|_| de::Error::invalid_value(Unexpected::Signed(value), &self))
            .and_then(|value| self.visit_u64(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value
            .parse::<Universe>()
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(value), &self))
    }
}

const VARIANTS: &[&str] = &["SteamID", "SteamID3", "SteamID64", "Invalid"];

impl de::Visitor<'_> for VisitIdentifierFormat {
    type Value = IdentifierFormat;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "a SteamID format name")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value
            .parse::<IdentifierFormat>()
            .map_err(|_| de::Error::unknown_variant(value, VARIANTS))
    }
}
