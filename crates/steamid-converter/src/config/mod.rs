//! Runtime configuration, read from a TOML file.

pub mod tracing;
pub use tracing::TracingConfig;

mod output;
pub use output::{OutputConfig, OutputFormat};

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Configuration for [`tracing-subscriber`].
    pub tracing: TracingConfig,

    /// How results are printed.
    pub output: OutputConfig,

    /// Options passed to the [`steam_id::Converter`].
    pub conversion: steam_id::Options,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use steam_id::Universe;

    use super::*;

    #[test]
    fn empty_file() {
        let config = toml::from_str::<Config>("").unwrap();

        assert!(!config.tracing.enable);
        assert!(config.tracing.stderr.enable);
        assert!(config.tracing.stderr.ansi);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.conversion, steam_id::Options::default());
    }

    #[test]
    fn full_file() {
        let config = toml::from_str::<Config>(
            r#"
            [tracing]
            enable = true

            [tracing.stderr]
            ansi = false

            [output]
            format = "json"

            [conversion]
            generated-universe = 1
            "#,
        )
        .unwrap();

        assert!(config.tracing.enable);
        assert!(config.tracing.stderr.enable);
        assert!(!config.tracing.stderr.ansi);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.conversion.generated_universe, Universe::Public);
    }

    #[test]
    fn universe_by_name() {
        let config = toml::from_str::<Config>(
            r#"
            [conversion]
            generated-universe = "beta"
            "#,
        )
        .unwrap();

        assert_eq!(config.conversion.generated_universe, Universe::Beta);
    }

    #[test]
    fn unknown_fields() {
        assert!(toml::from_str::<Config>("verbose = true").is_err());
        assert!(toml::from_str::<Config>("[output]\ncolor = true").is_err());
        assert!(toml::from_str::<Config>("[conversion]\ngenerated-universe = 6").is_err());
    }
}
