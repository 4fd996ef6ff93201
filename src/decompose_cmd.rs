//! Decompose command: signal text file -> coefficient JSON.

use anyhow::{Context, Result};
use ndarray::ArrayD;
use tracing::{info, info_span};

use atrous_swt::{LevelCoeffs, swtn};

use crate::cli::{DecomposeArgs, TransformArgs};
use crate::config::AtrousConfig;
use crate::convert;
use crate::signal_io::{CoeffFile, read_signal, write_coeffs};

/// Run the decomposition pipeline.
pub fn run(args: DecomposeArgs) -> Result<()> {
    let _cmd = info_span!("decompose").entered();
    // 1. Load optional TOML config
    let config = AtrousConfig::load(args.transform.config.as_deref())?;

    // 2. Read the signal
    info!(path = %args.input.display(), "reading signal");
    let signal = read_signal(&args.input, config.io.delimiter)?;
    info!(shape = ?signal.shape(), "signal loaded");

    // 3. Decompose
    let (levels, coeffs) = decompose(&signal, &config, &args.transform)?;
    info!(
        n_levels = levels.len(),
        n_bands = levels.first().map_or(0, LevelCoeffs::n_bands),
        "decomposition done"
    );

    // 4. Write coefficients
    let path = args
        .output
        .unwrap_or_else(|| args.input.with_extension("coeffs.json"));
    write_coeffs(&path, &coeffs)?;
    info!(path = %path.display(), "coefficients written");
    Ok(())
}

/// Decomposes `signal` with the config file settings and CLI overrides.
///
/// Returns the levels along with their serializable form.
pub fn decompose(
    signal: &ArrayD<f64>,
    config: &AtrousConfig,
    args: &TransformArgs,
) -> Result<(Vec<LevelCoeffs<f64>>, CoeffFile)> {
    let swt_cfg = convert::build_swt_config(&config.transform, args)?;
    let axes = convert::resolve_axes(&config.transform, args);
    let levels = swtn(signal.view(), &swt_cfg, axes.as_deref()).context("decomposition failed")?;
    let normalized = atrous_swt::normalize_axes(axes.as_deref(), signal.ndim())?;
    let coeffs = CoeffFile::from_levels(
        &levels,
        swt_cfg.wavelet(),
        normalized,
        swt_cfg.start_level(),
    );
    Ok((levels, coeffs))
}
