//! Trait implementations for the [`serde`] crate.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{AccountNumber, ConversionResult, IdentifierFormat, Universe};

mod visitors;
pub use visitors::{VisitIdentifierFormat, VisitUniverse};

/// Serializes as a map with the keys `SteamID`, `SteamID3` and `SteamID64`, in that order.
impl Serialize for ConversionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }

        map.end()
    }
}

impl Serialize for AccountNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get().serialize(serializer)
    }
}

impl Serialize for IdentifierFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IdentifierFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(VisitIdentifierFormat::default())
    }
}

/// Serializes as the universe's name.
impl Serialize for Universe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

/// Accepts either a digit or a name.
impl<'de> Deserialize<'de> for Universe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(VisitUniverse::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{Converter, IdentifierFormat, Options, Universe};

    #[test]
    fn conversion_result() -> color_eyre::Result<()> {
        let result = crate::convert("[U:1:22203]").expect("valid SteamID");
        let json = serde_json::to_string(&result)?;

        assert_eq!(
            json,
            r#"{"SteamID":"STEAM_0:1:11101","SteamID3":"[U:1:22203]","SteamID64":"76561197960287931"}"#,
        );

        Ok(())
    }

    #[test]
    fn universe() -> color_eyre::Result<()> {
        assert_eq!(serde_json::from_value::<Universe>(json!(1))?, Universe::Public);
        assert_eq!(serde_json::from_value::<Universe>(json!("rc"))?, Universe::RC);
        assert_eq!(serde_json::to_value(Universe::Beta)?, json!("beta"));

        assert!(serde_json::from_value::<Universe>(json!(6)).is_err());
        assert!(serde_json::from_value::<Universe>(json!(-1)).is_err());
        assert!(serde_json::from_value::<Universe>(json!("mars")).is_err());

        Ok(())
    }

    #[test]
    fn identifier_format() -> color_eyre::Result<()> {
        assert_eq!(serde_json::to_value(IdentifierFormat::SteamId3)?, json!("SteamID3"));
        assert_eq!(
            serde_json::from_value::<IdentifierFormat>(json!("SteamID64"))?,
            IdentifierFormat::SteamId64,
        );

        Ok(())
    }

    #[test]
    fn options() -> color_eyre::Result<()> {
        let options = serde_json::from_value::<Options>(json!({ "generated-universe": "public" }))?;
        assert_eq!(options.generated_universe, Universe::Public);

        let options = serde_json::from_value::<Options>(json!({}))?;
        assert_eq!(options, Options::default());

        assert!(serde_json::from_value::<Options>(json!({ "universe": 1 })).is_err());

        let result = Converter::with_options(options)
            .convert("76561197960287931")
            .expect("valid SteamID");

        assert_eq!(result.steam_id(), "STEAM_0:1:11101");

        Ok(())
    }
}
