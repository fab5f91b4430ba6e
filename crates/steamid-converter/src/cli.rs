//! CLI argument handling.

use std::path::PathBuf;

use clap::Parser;
use steam_id::Universe;

use crate::config::{Config, OutputFormat};

pub fn args() -> Args {
    Args::parse()
}

/// Converts a SteamID between its `STEAM_X:Y:Z`, `[U:1:N]` and SteamID64 forms.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// The SteamID to convert, as `STEAM_X:Y:Z`, `[U:1:N]` or a 17-digit SteamID64.
    ///
    /// A single line is read from stdin if omitted.
    pub input: Option<String>,

    /// Path to the configuration file.
    ///
    /// Will default to `./steamid-converter.toml` if unspecified.
    /// If that file does not exist, default configuration values will be used.
    #[arg(short, long = "config")]
    pub config_path: Option<PathBuf>,

    /// The `X` in generated `STEAM_X:Y:Z` values, as a digit (0-5) or name.
    ///
    /// This takes precedence over the value in the configuration file.
    #[arg(long)]
    pub universe: Option<Universe>,

    /// Print the result as JSON.
    ///
    /// This takes precedence over the value in the configuration file.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Applies any overrides specified as CLI flags to the given config.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(universe) = self.universe {
            config.conversion.generated_universe = universe;
        }

        if self.json {
            config.output.format = OutputFormat::Json;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "steamid-converter",
            "--universe",
            "public",
            "--json",
            "[U:1:22203]",
        ])
        .unwrap();

        let mut config = Config::default();
        args.apply_to_config(&mut config);

        assert_eq!(args.input.as_deref(), Some("[U:1:22203]"));
        assert_eq!(config.conversion.generated_universe, Universe::Public);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn no_overrides() {
        let args = Args::try_parse_from(["steamid-converter"]).unwrap();

        let mut config = Config::default();
        config.conversion.generated_universe = Universe::Beta;
        args.apply_to_config(&mut config);

        assert_eq!(args.input, None);
        assert_eq!(config.conversion.generated_universe, Universe::Beta);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn invalid_universe() {
        assert!(Args::try_parse_from(["steamid-converter", "--universe", "7"]).is_err());
    }
}
