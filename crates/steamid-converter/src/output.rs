//! Rendering of conversion results.

use anyhow::Context;
use steam_id::{ConversionResult, Derived};

use crate::config::OutputFormat;

/// Renders `result` in the given `format`.
///
/// A failed conversion is always rendered as the fixed `Invalid SteamID` message.
pub fn render(result: Option<&ConversionResult>, format: OutputFormat) -> anyhow::Result<String> {
    let Some(result) = result else {
        return Ok(String::from(Derived::INVALID_STEAM_ID));
    };

    match format {
        OutputFormat::Text => Ok(result.to_string()),
        OutputFormat::Json => {
            serde_json::to_string(result).context("failed to serialize conversion result")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text() {
        let result = steam_id::convert("76561197960287931");

        assert_eq!(
            render(result.as_ref(), OutputFormat::Text).unwrap(),
            "[SteamID=STEAM_0:1:11101, SteamID3=[U:1:22203], SteamID64=76561197960287931]",
        );
    }

    #[test]
    fn json() {
        let result = steam_id::convert("STEAM_0:1:11101");

        assert_eq!(
            render(result.as_ref(), OutputFormat::Json).unwrap(),
            r#"{"SteamID":"STEAM_0:1:11101","SteamID3":"[U:1:22203]","SteamID64":"76561197960287931"}"#,
        );
    }

    #[test]
    fn invalid() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(render(None, format).unwrap(), "Invalid SteamID");
        }
    }
}
