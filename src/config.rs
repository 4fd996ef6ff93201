use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level atrous configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtrousConfig {
    /// Transform settings.
    #[serde(default)]
    pub transform: TransformToml,

    /// Signal file settings.
    #[serde(default)]
    pub io: IoToml,

    /// Round-trip check settings.
    #[serde(default)]
    pub roundtrip: RoundtripToml,
}

impl AtrousConfig {
    /// Reads a config file, or returns the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// Either a single wavelet name or one name per axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WaveletToml {
    One(String),
    PerAxis(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformToml {
    #[serde(default = "default_wavelet")]
    pub wavelet: WaveletToml,
    #[serde(default)]
    pub level: Option<usize>,
    #[serde(default)]
    pub start_level: usize,
    #[serde(default)]
    pub axes: Option<Vec<isize>>,
}

impl Default for TransformToml {
    fn default() -> Self {
        Self {
            wavelet: default_wavelet(),
            level: None,
            start_level: 0,
            axes: None,
        }
    }
}

fn default_wavelet() -> WaveletToml {
    WaveletToml::One("db2".to_string())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Column delimiter; whitespace when unset.
    #[serde(default)]
    pub delimiter: Option<char>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundtripToml {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for RoundtripToml {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: AtrousConfig = toml::from_str("").unwrap();
        assert_eq!(config.transform.wavelet, WaveletToml::One("db2".into()));
        assert_eq!(config.transform.level, None);
        assert_eq!(config.transform.start_level, 0);
        assert_eq!(config.io.delimiter, None);
        assert_eq!(config.roundtrip.tolerance, 1e-9);
    }

    #[test]
    fn per_axis_wavelets_and_axes() {
        let config: AtrousConfig = toml::from_str(
            r#"
            [transform]
            wavelet = ["db2", "haar"]
            level = 3
            start_level = 1
            axes = [0, -1]

            [io]
            delimiter = ","
            "#,
        )
        .unwrap();
        assert_eq!(
            config.transform.wavelet,
            WaveletToml::PerAxis(vec!["db2".into(), "haar".into()])
        );
        assert_eq!(config.transform.level, Some(3));
        assert_eq!(config.transform.start_level, 1);
        assert_eq!(config.transform.axes, Some(vec![0, -1]));
        assert_eq!(config.io.delimiter, Some(','));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<AtrousConfig, _> = toml::from_str("[transform]\nmode = \"zero\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_path_means_defaults() {
        let config = AtrousConfig::load(None).unwrap();
        assert_eq!(config.roundtrip.tolerance, 1e-9);
    }
}
