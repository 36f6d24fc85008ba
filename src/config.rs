//! YAML configuration for card rendering.
//!
//! Every field is optional; an empty file (or no file at all) yields
//! [`Config::default`].
//!
//! ```yaml
//! card:
//!   snippet_max_chars: 120
//!   unknown_date_label: "Date unavailable"
//! glyphs:
//!   full: "*"
//!   half: "+"
//!   empty: "."
//! read_more_base_url: "https://news.example.com/articles/"
//! ```

use crate::card::{CardActions, CardOptions, LinkActions, NoActions};
use crate::error::{CardError, Result};
use crate::format::StarGlyphs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub card: CardOptions,
    pub glyphs: StarGlyphs,
    /// When set, cards link "Read More" to `<base>/<title slug>`.
    pub read_more_base_url: Option<String>,
}

impl Config {
    /// Parse config YAML. Blank input is the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Card actions implied by this config.
    pub fn actions(&self) -> Result<Box<dyn CardActions>> {
        match &self.read_more_base_url {
            Some(base) => Ok(Box::new(LinkActions::parse(base)?)),
            None => Ok(Box::new(NoActions)),
        }
    }
}

/// Load configuration from `path`, or the defaults when `path` is `None`.
///
/// # Arguments
///
/// * `path` - Optional path to a YAML config file
///
/// # Returns
///
/// The parsed [`Config`], with defaults for every field the file omits.
///
/// # Errors
///
/// Returns [`CardError::Io`] if the file cannot be read, or
/// [`CardError::Config`] if it is not valid YAML for [`Config`].
#[instrument(level = "info")]
pub async fn load_config(path: Option<&str>) -> Result<Config> {
    let Some(path) = path else {
        debug!("No config path given; using defaults");
        return Ok(Config::default());
    };

    let yaml = fs::read_to_string(path)
        .await
        .map_err(|source| CardError::Io {
            path: path.to_string(),
            source,
        })?;
    let config = Config::from_yaml(&yaml)?;
    info!(
        path,
        snippet_max_chars = ?config.card.snippet_max_chars,
        links = config.read_more_base_url.is_some(),
        "Loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_item;
    use std::io::Write;

    #[test]
    fn test_blank_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("card:\n  snippet_max_chars: 40\n").unwrap();
        assert_eq!(config.card.snippet_max_chars, Some(40));
        assert_eq!(config.card.unknown_date_label, "Unknown date");
        assert_eq!(config.glyphs, StarGlyphs::default());
        assert_eq!(config.read_more_base_url, None);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
card:
  snippet_max_chars: ~
  unknown_date_label: "Date unavailable"
glyphs:
  full: "*"
  half: "+"
  empty: "."
read_more_base_url: "https://news.example.com/articles/"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.card.snippet_max_chars, None);
        assert_eq!(config.card.unknown_date_label, "Date unavailable");
        assert_eq!(config.glyphs.half, "+");

        let actions = config.actions().unwrap();
        assert!(actions.read_more(&sample_item()).is_some());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Config::from_yaml("card: [unclosed").unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
    }

    #[test]
    fn test_bad_base_url_surfaces_on_actions() {
        let config = Config::from_yaml("read_more_base_url: \"::nope\"").unwrap();
        assert!(matches!(config.actions(), Err(CardError::Url { .. })));
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "glyphs:\n  full: \"#\"").unwrap();

        let config = load_config(file.path().to_str()).await.unwrap();
        assert_eq!(config.glyphs.full, "#");
        assert_eq!(config.glyphs.empty, "☆");
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        let err = load_config(Some("/definitely/not/here.yaml")).await.unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_config_none_is_default() {
        assert_eq!(load_config(None).await.unwrap(), Config::default());
    }
}
