//! Pure conversion functions: TOML config structs and CLI overrides -> crate API config types.

use anyhow::{Context, Result, bail};

use atrous_swt::{SwtConfig, WaveletSelector};

use crate::cli::TransformArgs;
use crate::config::{TransformToml, WaveletToml};

/// Builds a [`WaveletSelector`] from one name or one name per axis.
pub fn parse_wavelets<S: AsRef<str>>(names: &[S]) -> Result<WaveletSelector> {
    match names {
        [] => bail!("at least one wavelet name is required"),
        [one] => WaveletSelector::from_name(one.as_ref())
            .with_context(|| format!("unknown wavelet: {:?}", one.as_ref())),
        many => WaveletSelector::from_names(many).context("unknown wavelet in per-axis list"),
    }
}

/// Resolves the wavelet selector, preferring CLI names over the config file.
pub fn build_selector(transform: &TransformToml, args: &TransformArgs) -> Result<WaveletSelector> {
    if !args.wavelet.is_empty() {
        return parse_wavelets(&args.wavelet);
    }
    match &transform.wavelet {
        WaveletToml::One(name) => parse_wavelets(std::slice::from_ref(name)),
        WaveletToml::PerAxis(names) => parse_wavelets(names),
    }
}

/// Builds an [`SwtConfig`] from the TOML transform section and CLI overrides.
pub fn build_swt_config(transform: &TransformToml, args: &TransformArgs) -> Result<SwtConfig> {
    let selector = build_selector(transform, args)?;
    let mut cfg = SwtConfig::new(selector)
        .with_start_level(args.start_level.unwrap_or(transform.start_level));
    if let Some(level) = args.level.or(transform.level) {
        cfg = cfg.with_level(level);
    }
    Ok(cfg)
}

/// Resolves the axis set, preferring CLI axes over the config file.
///
/// `None` means every axis of the signal.
pub fn resolve_axes(transform: &TransformToml, args: &TransformArgs) -> Option<Vec<isize>> {
    args.axes.clone().or_else(|| transform.axes.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let transform = TransformToml {
            wavelet: WaveletToml::One("haar".into()),
            level: Some(4),
            start_level: 1,
            axes: Some(vec![0]),
        };
        let args = TransformArgs {
            wavelet: vec!["sym4".into()],
            level: Some(2),
            axes: Some(vec![-1]),
            ..TransformArgs::default()
        };
        let cfg = build_swt_config(&transform, &args).unwrap();
        assert_eq!(cfg.wavelet().names(), vec!["sym4".to_string()]);
        assert_eq!(cfg.level(), Some(2));
        assert_eq!(cfg.start_level(), 1);
        assert_eq!(resolve_axes(&transform, &args), Some(vec![-1]));
    }

    #[test]
    fn config_used_without_overrides() {
        let transform = TransformToml {
            wavelet: WaveletToml::PerAxis(vec!["db2".into(), "coif1".into()]),
            ..TransformToml::default()
        };
        let cfg = build_swt_config(&transform, &TransformArgs::default()).unwrap();
        assert_eq!(
            cfg.wavelet().names(),
            vec!["db2".to_string(), "coif1".to_string()]
        );
        assert_eq!(cfg.level(), None);
        assert_eq!(resolve_axes(&transform, &TransformArgs::default()), None);
    }

    #[test]
    fn unknown_wavelet_fails() {
        assert!(parse_wavelets(&["nope"]).is_err());
        assert!(parse_wavelets::<&str>(&[]).is_err());
    }
}
