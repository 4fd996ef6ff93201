//! Reconstruct command: coefficient JSON -> signal text file.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use atrous_swt::iswtn;

use crate::cli::ReconstructArgs;
use crate::config::AtrousConfig;
use crate::signal_io::{read_coeffs, write_signal};

/// Run the reconstruction pipeline.
pub fn run(args: ReconstructArgs) -> Result<()> {
    let _cmd = info_span!("reconstruct").entered();
    // 1. Load optional TOML config
    let config = AtrousConfig::load(args.config.as_deref())?;

    // 2. Read coefficients
    info!(path = %args.input.display(), "reading coefficients");
    let file = read_coeffs(&args.input)?;
    if file.levels.is_empty() {
        bail!("coefficient file contains no levels");
    }
    if file.start_level != 0 {
        warn!(
            start_level = file.start_level,
            "decomposition did not start at level 0; reconstruction assumes it did"
        );
    }
    let levels = file.to_levels()?;
    let selector = file.selector()?;
    let axes = file.signed_axes()?;

    // 3. Reconstruct
    let signal = iswtn(&levels, &selector, Some(&axes)).context("reconstruction failed")?;
    info!(shape = ?signal.shape(), "signal reconstructed");

    // 4. Write the signal
    write_signal(&args.output, &signal, config.io.delimiter)?;
    info!(path = %args.output.display(), "signal written");
    Ok(())
}
