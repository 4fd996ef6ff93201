//! Roundtrip command: decompose, reconstruct and report the error.

use anyhow::{Context, Result, bail};
use ndarray::{ArrayD, Zip};
use tracing::{info, info_span};

use atrous_swt::iswtn;

use crate::cli::RoundtripArgs;
use crate::config::AtrousConfig;
use crate::decompose_cmd::decompose;
use crate::signal_io::{read_signal, write_signal};

/// Run the round-trip check.
pub fn run(args: RoundtripArgs) -> Result<()> {
    let _cmd = info_span!("roundtrip").entered();
    // 1. Load optional TOML config
    let config = AtrousConfig::load(args.transform.config.as_deref())?;
    let tolerance = args.tolerance.unwrap_or(config.roundtrip.tolerance);

    // 2. Read the signal
    info!(path = %args.input.display(), "reading signal");
    let signal = read_signal(&args.input, config.io.delimiter)?;

    // 3. Decompose and reconstruct
    let (levels, coeffs) = decompose(&signal, &config, &args.transform)?;
    let selector = coeffs.selector()?;
    let axes = coeffs.signed_axes()?;
    let restored = iswtn(&levels, &selector, Some(&axes)).context("reconstruction failed")?;

    // 4. Compare
    let error = max_abs_diff(&signal, &restored);
    info!(n_levels = levels.len(), max_abs_error = error, "round trip done");
    println!("max abs error: {error:e}");

    if let Some(path) = args.output {
        write_signal(&path, &restored, config.io.delimiter)?;
        info!(path = %path.display(), "reconstruction written");
    }
    if error.is_nan() || error > tolerance {
        bail!("round-trip error {error:e} exceeds tolerance {tolerance:e}");
    }
    Ok(())
}

/// Largest absolute element-wise difference.
///
/// `NaN` on shape mismatch or when any difference is `NaN`.
fn max_abs_diff(a: &ArrayD<f64>, b: &ArrayD<f64>) -> f64 {
    if a.shape() != b.shape() {
        return f64::NAN;
    }
    Zip::from(a).and(b).fold(0.0_f64, |acc, &x, &y| {
        let d = (x - y).abs();
        if acc.is_nan() || d <= acc { acc } else { d }
    })
}
