/* Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
 *
 * This library is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this repository.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Conversions between the three textual forms of [Valve's SteamID].
//!
//! | Format    | Example             |
//! |-----------|---------------------|
//! | SteamID   | `STEAM_0:1:11101`   |
//! | SteamID3  | `[U:1:22203]`       |
//! | SteamID64 | `76561197960287931` |
//!
//! Every conversion routes through an [`AccountNumber`], and only identifiers whose 64-bit form
//! lies within [`MIN`]`..=`[`MAX`] convert successfully.
//!
//! ```
//! let ids = steam_id::convert("[U:1:22203]").unwrap();
//!
//! assert_eq!(ids.steam_id(), "STEAM_0:1:11101");
//! assert_eq!(ids.steam_id64(), "76561197960287931");
//! ```
//!
//! [Valve's SteamID]: https://developer.valvesoftware.com/wiki/SteamID

#[macro_use]
extern crate derive_more;

mod account_number;
pub use account_number::AccountNumber;

mod universe;
pub use universe::{ParseUniverseError, Universe};

mod format;
pub use format::{IdentifierFormat, ParseIdentifierFormatError};

mod error;
pub use error::ConvertError;

mod parse;

pub mod derivation;
pub use derivation::Derived;

mod conversion;
pub use conversion::{ConversionIter, ConversionResult};

mod converter;
pub use converter::{Converter, Options};

#[cfg(feature = "serde")]
pub mod serde;


/// Offset between a SteamID64 and its [`AccountNumber`].
pub const BASE: u64 = 0x0110_0001_0000_0000;

/// The smallest SteamID64 that converts successfully.
pub const MIN: u64 = 0x0110_0001_0000_0001;

/// The largest SteamID64 that converts successfully.
pub const MAX: u64 = 0x0110_0001_FFFF_FFFF;

/// Converts `input` into all three textual forms using the default [`Options`].
///
/// Returns [`None`] if `input` is not a recognized format, contains a number that doesn't fit,
/// or is out of range. Use [`Converter::try_convert()`] to find out which.
pub fn convert(input: &str) -> Option<ConversionResult> {
    Converter::new().convert(input)
}

/// Determines which format `input` is in.
///
/// See [`IdentifierFormat::classify()`].
pub fn classify(input: &str) -> IdentifierFormat {
    IdentifierFormat::classify(input)
}
