use precis_core::{KeyMode, PrecisError, Ratio};
use precis_render::OutputFormat;
use precis_score::{StopwordFilter, Summarizer};
use precis_source::FetchConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "precis.toml";

/// Settings from `precis.toml`. Command-line flags override them.
///
/// ```toml
/// ratio = 0.3
/// format = "text"
/// key_mode = "folded"
/// extra_stopwords = ["said"]
/// use_stopwords = true
///
/// [fetch]
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ratio: Ratio,
    pub format: OutputFormat,
    pub key_mode: KeyMode,
    pub extra_stopwords: Vec<String>,
    pub use_stopwords: bool,
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ratio: Ratio::DEFAULT,
            format: OutputFormat::Text,
            key_mode: KeyMode::Folded,
            extra_stopwords: Vec::new(),
            use_stopwords: true,
            fetch: FetchConfig::default(),
        }
    }
}

/// `$XDG_CONFIG_HOME/precis/precis.toml` or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("precis").join(FILE_NAME))
}

impl Config {
    /// Load from an explicit path, or from the default location if present.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, PrecisError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, PrecisError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| PrecisError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&raw)
            .map_err(|e| PrecisError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, PrecisError> {
        let config: Self = toml::from_str(raw).map_err(|e| PrecisError::Config(e.to_string()))?;
        config.fetch.validate()?;
        Ok(config)
    }

    pub fn stopword_filter(&self) -> StopwordFilter {
        let base = if self.use_stopwords {
            StopwordFilter::english()
        } else {
            StopwordFilter::none()
        };
        base.with_extra(&self.extra_stopwords)
    }

    pub fn summarizer(&self) -> Summarizer {
        Summarizer::new()
            .with_filter(self.stopword_filter())
            .with_key_mode(self.key_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ratio.get(), 0.3);
        assert!(config.use_stopwords);
    }

    #[test]
    fn full_file_parses() {
        let config = Config::from_toml_str(
            r#"
ratio = 0.5
format = "jsonl"
key_mode = "exact"
extra_stopwords = ["said"]
use_stopwords = false

[fetch]
timeout_secs = 5
user_agent = "test-agent"
"#,
        )
        .unwrap();
        assert_eq!(config.ratio.get(), 0.5);
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert_eq!(config.key_mode, KeyMode::Exact);
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.connect_timeout_secs, 10);
        assert_eq!(config.fetch.user_agent, "test-agent");

        let filter = config.stopword_filter();
        assert!(filter.is_stopword("said"));
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        assert!(matches!(
            Config::from_toml_str("ratio = 1.5"),
            Err(PrecisError::Config(_))
        ));
        assert!(Config::from_toml_str("format = \"xml\"").is_err());
        assert!(Config::from_toml_str("unknown_key = 1").is_err());
        assert!(Config::from_toml_str("[fetch]\ntimeout_secs = 0").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Config::load(Some(tmp.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn loads_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(FILE_NAME);
        fs::write(&path, "ratio = 0.25\n").unwrap();
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.ratio.get(), 0.25);
    }

    proptest! {
        #[test]
        fn ratio_in_file_is_validated(r in -1.0f64..2.0) {
            let parsed = Config::from_toml_str(&format!("ratio = {r:?}"));
            if (0.0..=1.0).contains(&r) {
                prop_assert_eq!(parsed.unwrap().ratio.get(), r);
            } else {
                prop_assert!(parsed.is_err());
            }
        }
    }
}
