/* Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this repository.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Converts a single SteamID into all of its textual forms.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::{Layer as _, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use self::config::{Config, TracingConfig};

mod cli;
mod config;
mod output;

/// Used if no `--config` is passed and the file exists.
const DEFAULT_CONFIG_PATH: &str = "./steamid-converter.toml";

fn main() -> anyhow::Result<ExitCode> {
    let cli_args = cli::args();
    let mut config = if let Some(config_path) = cli_args.config_path.as_deref() {
        read_and_parse_config_file(config_path)?
    } else if fs::exists(DEFAULT_CONFIG_PATH)? {
        read_and_parse_config_file(Path::new(DEFAULT_CONFIG_PATH))?
    } else {
        Config::default()
    };

    cli_args.apply_to_config(&mut config);

    if config.tracing.enable {
        init_tracing(&config.tracing).context("failed to initialize tracing")?;
    }

    let input = match cli_args.input {
        Some(input) => input,
        None => read_input_line().context("failed to read SteamID from stdin")?,
    };

    if input.is_empty() {
        tracing::warn!("no SteamID to convert");
        return Ok(ExitCode::SUCCESS);
    }

    let result = steam_id::Converter::with_options(config.conversion).convert(&input);

    println!("{}", output::render(result.as_ref(), config.output.format)?);

    Ok(if result.is_some() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn read_and_parse_config_file(path: &Path) -> anyhow::Result<Config> {
    fs::read_to_string(path)
        .context("failed to read configuration file")
        .and_then(|text| toml::from_str(&text).context("failed to parse configuration file"))
}

/// Reads a single line from stdin, without the line terminator.
fn read_input_line() -> io::Result<String> {
    io::stdin()
        .lock()
        .lines()
        .next()
        .transpose()
        .map(Option::unwrap_or_default)
}

fn init_tracing(config: &TracingConfig) -> anyhow::Result<()> {
    assert!(config.enable);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("steam_id=info,steamid_converter=info,warn"));

    let stderr = config.stderr.enable.then(|| {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(config.stderr.ansi)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(stderr.with_filter(env_filter))
        .try_init()?;

    tracing::debug!(?config, "initialized tracing");

    Ok(())
}
