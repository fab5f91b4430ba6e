#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TracingConfig {
    /// Whether to initialize a subscriber at all.
    pub enable: bool,

    /// Configuration for the stderr output.
    pub stderr: StderrConfig,
}

#[derive(Debug, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct StderrConfig {
    /// Whether to emit traces to stderr.
    #[serde(default = "default_true")]
    pub enable: bool,

    /// Whether to include ANSI escape codes for colors.
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for StderrConfig {
    fn default() -> Self {
        Self {
            enable: default_true(),
            ansi: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
