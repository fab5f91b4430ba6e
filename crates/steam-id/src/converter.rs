use crate::{
    parse, AccountNumber, ConversionResult, ConvertError, IdentifierFormat, Universe, MAX, MIN,
};

/// Options for a [`Converter`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case", deny_unknown_fields))]
pub struct Options {
    /// The `X` segment used when generating `STEAM_X:Y:Z`.
    ///
    /// Neither SteamID3 nor SteamID64 carries a universe, so a generated SteamID always uses
    /// this value. It defaults to [`Universe::Individual`] (`0`).
    pub generated_universe: Universe,
}

/// Converts SteamIDs between their textual forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Creates a converter with the default [`Options`].
    pub const fn new() -> Self {
        Self {
            options: Options {
                generated_universe: Universe::Individual,
            },
        }
    }

    /// Creates a converter with the given `options`.
    pub const fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options this converter was created with.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Converts `input` into all three textual forms.
    ///
    /// Returns [`None`] if `input` is not a recognized format, contains a number that doesn't fit,
    /// or is out of range. Use [`Converter::try_convert()`] to find out which.
    pub fn convert(&self, input: &str) -> Option<ConversionResult> {
        self.try_convert(input)
            .inspect_err(|error| tracing::debug!(input, %error, "failed to convert SteamID"))
            .ok()
    }

    /// Converts `input` into all three textual forms.
    ///
    /// The form `input` is already in is kept verbatim; the other two are derived from its
    /// [`AccountNumber`].
    pub fn try_convert(&self, input: &str) -> Result<ConversionResult, ConvertError> {
        let format = IdentifierFormat::classify(input);

        let (account_number, steam_id64) = match format {
            IdentifierFormat::SteamId => {
                let (_, account_number) = parse::steam_id(input)?;
                (account_number, checked_steam_id64(input, account_number)?)
            }
            IdentifierFormat::SteamId3 => {
                let account_number = parse::steam_id3(input)?;
                (account_number, checked_steam_id64(input, account_number)?)
            }
            IdentifierFormat::SteamId64 => {
                let steam_id64 = parse::steam_id64(input)?;

                // below `BASE` there is no account number, which makes it out of range as well
                let account_number = AccountNumber::from_steam_id64(steam_id64)
                    .ok_or(ConvertError::OutOfRange { steam_id64 })?;

                (account_number, steam_id64)
            }
            IdentifierFormat::Invalid => {
                return Err(ConvertError::Unrecognized { input: input.to_owned() });
            }
        };

        ensure_in_range(steam_id64)?;

        let universe = self.options.generated_universe;

        Ok(ConversionResult::new(
            account_number,
            native_or(input, format, IdentifierFormat::SteamId, || {
                account_number.to_steam_id(universe)
            }),
            native_or(input, format, IdentifierFormat::SteamId3, || {
                account_number.to_steam_id3()
            }),
            native_or(input, format, IdentifierFormat::SteamId64, || steam_id64.to_string()),
        ))
    }
}

/// Keeps `input` verbatim if it already is in the `target` format.
fn native_or<F>(input: &str, format: IdentifierFormat, target: IdentifierFormat, generate: F) -> String
where
    F: FnOnce() -> String,
{
    if format == target {
        input.to_owned()
    } else {
        generate()
    }
}

fn checked_steam_id64(input: &str, account_number: AccountNumber) -> Result<u64, ConvertError> {
    account_number
        .to_steam_id64()
        .ok_or_else(|| ConvertError::Overflow { input: input.to_owned() })
}

fn ensure_in_range(steam_id64: u64) -> Result<(), ConvertError> {
    if (MIN..=MAX).contains(&steam_id64) {
        Ok(())
    } else {
        Err(ConvertError::OutOfRange { steam_id64 })
    }
}
