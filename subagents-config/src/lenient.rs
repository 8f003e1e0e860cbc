//! Deserializers for text settings that environment parsing may have typed
//!
//! figment's `Env` provider turns `SUBAGENTS_SERVER_VERSION=1.0` into a
//! float and `SUBAGENTS_CLAUDE_PATH=true` into a boolean. Text fields accept
//! those scalars back as strings.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use std::path::PathBuf;

struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a scalar value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_char<E: de::Error>(self, value: char) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<String, E> {
        Ok(value.to_string())
    }

    // Debug keeps the fractional part: 1.0 stays "1.0"
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(format!("{value:?}"))
    }
}

/// A `String` field that also accepts numbers and booleans
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(ScalarText)
}

/// An `Option<PathBuf>` field that also accepts numbers and booleans
pub fn optional_path<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PathBuf>, D::Error> {
    struct OptionalPath;

    impl<'de> Visitor<'de> for OptionalPath {
        type Value = Option<PathBuf>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an optional path")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, inner: D) -> Result<Self::Value, D::Error> {
            string(inner).map(|text| Some(PathBuf::from(text)))
        }
    }

    deserializer.deserialize_option(OptionalPath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Settings {
        #[serde(deserialize_with = "string")]
        version: String,
        #[serde(default, deserialize_with = "optional_path")]
        dir: Option<PathBuf>,
    }

    fn parse(toml: &str) -> Settings {
        use figment::providers::{Format, Toml};
        figment::Figment::from(Toml::string(toml)).extract().unwrap()
    }

    #[test]
    fn test_scalars_become_text() {
        assert_eq!(parse("version = 1.0").version, "1.0");
        assert_eq!(parse("version = 2.5").version, "2.5");
        assert_eq!(parse("version = 7").version, "7");
        assert_eq!(parse("version = true").version, "true");
        assert_eq!(parse("version = \"1.0.3\"").version, "1.0.3");
    }

    #[test]
    fn test_optional_path() {
        assert_eq!(parse("version = \"v\"").dir, None);
        assert_eq!(
            parse("version = \"v\"\ndir = 2024").dir,
            Some(PathBuf::from("2024"))
        );
        assert_eq!(
            parse("version = \"v\"\ndir = \"/srv/agents\"").dir,
            Some(PathBuf::from("/srv/agents"))
        );
    }
}
