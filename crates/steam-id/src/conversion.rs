use std::fmt;

use crate::{AccountNumber, IdentifierFormat};

/// All three textual forms of a single, valid SteamID.
///
/// Behaves like an ordered map from format name (`SteamID`, `SteamID3`, `SteamID64`) to the
/// corresponding rendering. Two results compare equal if all three renderings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionResult {
    account_number: AccountNumber,
    steam_id: String,
    steam_id3: String,
    steam_id64: String,
}

impl ConversionResult {
    pub(crate) const fn new(
        account_number: AccountNumber,
        steam_id: String,
        steam_id3: String,
        steam_id64: String,
    ) -> Self {
        Self {
            account_number,
            steam_id,
            steam_id3,
            steam_id64,
        }
    }

    /// The account number all three forms are derived from.
    pub const fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// `STEAM_X:Y:Z`
    pub fn steam_id(&self) -> &str {
        &self.steam_id
    }

    /// `[U:1:N]`
    pub fn steam_id3(&self) -> &str {
        &self.steam_id3
    }

    /// 17 decimal digits
    pub fn steam_id64(&self) -> &str {
        &self.steam_id64
    }

    /// Returns the rendering for `format`, or [`None`] for [`IdentifierFormat::Invalid`].
    pub fn get(&self, format: IdentifierFormat) -> Option<&str> {
        match format {
            IdentifierFormat::SteamId => Some(self.steam_id()),
            IdentifierFormat::SteamId3 => Some(self.steam_id3()),
            IdentifierFormat::SteamId64 => Some(self.steam_id64()),
            IdentifierFormat::Invalid => None,
        }
    }

    /// Returns the rendering for the format called `name`, e.g. `"SteamID64"`.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        name.parse::<IdentifierFormat>()
            .ok()
            .and_then(|format| self.get(format))
    }

    /// Iterates over `(format name, rendering)` pairs, in the order `SteamID`, `SteamID3`,
    /// `SteamID64`.
    pub fn iter(&self) -> ConversionIter<'_> {
        let formats: &'static [IdentifierFormat] = &IdentifierFormat::VALID;

        ConversionIter {
            result: self,
            formats: formats.iter(),
        }
    }

    /// Always `3`.
    pub const fn len(&self) -> usize {
        IdentifierFormat::VALID.len()
    }

    /// Always `false`.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Renders as `[SteamID=…, SteamID3=…, SteamID64=…]`.
impl fmt::Display for ConversionResult {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("[")?;

        for (idx, (name, value)) in self.iter().enumerate() {
            if idx > 0 {
                fmt.write_str(", ")?;
            }

            write!(fmt, "{name}={value}")?;
        }

        fmt.write_str("]")
    }
}

/// Iterator returned by [`ConversionResult::iter()`].
#[derive(Debug, Clone)]
pub struct ConversionIter<'a> {
    result: &'a ConversionResult,
    formats: std::slice::Iter<'static, IdentifierFormat>,
}

impl<'a> Iterator for ConversionIter<'a> {
    type Item = (&'static str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let format = *self.formats.next()?;
        let result: &'a ConversionResult = self.result;

        result.get(format).map(|value| (format.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.formats.size_hint()
    }
}

impl ExactSizeIterator for ConversionIter<'_> {}

impl<'a> IntoIterator for &'a ConversionResult {
    type Item = (&'static str, &'a str);
    type IntoIter = ConversionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn example() -> ConversionResult {
        ConversionResult::new(
            AccountNumber::new(22203),
            String::from("STEAM_0:1:11101"),
            String::from("[U:1:22203]"),
            String::from("76561197960287931"),
        )
    }

    #[test]
    fn iteration_order() {
        let result = example();
        let pairs = result.iter().collect::<Vec<_>>();

        assert_eq!(pairs, [
            ("SteamID", "STEAM_0:1:11101"),
            ("SteamID3", "[U:1:22203]"),
            ("SteamID64", "76561197960287931"),
        ]);

        assert_eq!(result.iter().len(), result.len());
    }

    #[test]
    fn lookup() {
        let result = example();

        assert_eq!(result.get(IdentifierFormat::SteamId3), Some("[U:1:22203]"));
        assert_eq!(result.get(IdentifierFormat::Invalid), None);
        assert_eq!(result.get_by_name("SteamID64"), Some("76561197960287931"));
        assert_eq!(result.get_by_name("steamid64"), None);
        assert_eq!(result.get_by_name("Invalid"), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            example().to_string(),
            "[SteamID=STEAM_0:1:11101, SteamID3=[U:1:22203], SteamID64=76561197960287931]",
        );
    }
}
