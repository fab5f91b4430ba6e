#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// The format results are printed in.
    pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[SteamID=…, SteamID3=…, SteamID64=…]`
    #[default]
    Text,

    /// `{"SteamID":…,"SteamID3":…,"SteamID64":…}`
    Json,
}
