//! N-dimensional stationary wavelet decomposition.

use atrous_dwt::{Wavelet, swt_max_level, swt_step_axis};
use ndarray::{ArrayD, ArrayViewD};
use tracing::{debug, debug_span};

use crate::axes::{check_divisible, normalize_axes};
use crate::config::SwtConfig;
use crate::error::SwtError;
use crate::subband::{LevelCoeffs, band_count};

/// Computes a multilevel stationary wavelet decomposition over `axes`.
///
/// `axes = None` transforms every dimension. Levels are returned coarsest
/// first: element 0 holds the deepest level, the last element the finest
/// (dilation `2^start_level`). Each level is computed from the previous
/// level's all-approximation band; the input itself is only read.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SwtError::ZeroDimensional`] and other axis errors | invalid `axes` |
/// | [`SwtError::WaveletCount`] | per-axis wavelets do not match `axes` |
/// | [`SwtError::InvalidLevel`] | explicit level of 0 |
/// | [`SwtError::NoFeasibleLevel`] | automatic level would be 0 |
/// | [`SwtError::LevelTooHigh`] | `2^(start_level + level)` overflows |
/// | [`SwtError::IndivisibleLength`] | an axis length is not a multiple of `2^(start_level + level)` |
///
/// # Example
///
/// ```ignore
/// use atrous_swt::{swtn, SwtConfig, WaveletSelector};
///
/// let config = SwtConfig::new(WaveletSelector::from_name("db2")?).with_level(2);
/// let levels = swtn(image.view().into_dyn(), &config, None)?;
/// let detail = levels[0].get_str("dd");
/// ```
#[tracing::instrument(skip_all, fields(shape = ?data.shape()))]
pub fn swtn(
    data: ArrayViewD<'_, f64>,
    config: &SwtConfig,
    axes: Option<&[isize]>,
) -> Result<Vec<LevelCoeffs<f64>>, SwtError> {
    let axes = normalize_axes(axes, data.ndim())?;
    let wavelets = config.wavelet().for_axes(axes.len())?;
    let level = resolve_level(data.shape(), &axes, &wavelets, config)?;
    let start_level = config.start_level();
    let depth = start_level
        .checked_add(level)
        .ok_or(SwtError::LevelTooHigh(level))?;
    check_divisible(data.shape(), &axes, depth)?;
    debug!(?axes, level, start_level, "decomposing");

    let mut levels: Vec<LevelCoeffs<f64>> = Vec::with_capacity(level);
    for i in start_level..depth {
        let _lvl = debug_span!("level", i).entered();
        let input = levels
            .last()
            .map_or(data.view(), |prev| prev.approximation().view());
        let bands = decompose_level(input, &wavelets, i, &axes)?;
        levels.push(LevelCoeffs::from_bands(axes.len(), bands));
    }
    levels.reverse();
    Ok(levels)
}

/// Chooses the number of levels, validating an explicit request.
fn resolve_level(
    shape: &[usize],
    axes: &[usize],
    wavelets: &[Wavelet],
    config: &SwtConfig,
) -> Result<usize, SwtError> {
    match config.level() {
        Some(0) => Err(SwtError::InvalidLevel(0)),
        Some(level) => Ok(level),
        None => {
            let start_level = config.start_level();
            let max = axes
                .iter()
                .zip(wavelets)
                .map(|(&axis, w)| swt_max_level(shape[axis], w.filter_len()))
                .min()
                .unwrap_or(0);
            match max.saturating_sub(start_level) {
                0 => Err(SwtError::NoFeasibleLevel { max, start_level }),
                level => Ok(level),
            }
        }
    }
}

/// Applies one dilated step along each axis in turn.
///
/// Every band produced so far is split into approximation and detail, so
/// band `idx` becomes `2 * idx` and `2 * idx + 1`. The first axis ends up
/// as the most significant bit of the sub-band index.
fn decompose_level(
    data: ArrayViewD<'_, f64>,
    wavelets: &[Wavelet],
    level: usize,
    axes: &[usize],
) -> Result<Vec<ArrayD<f64>>, SwtError> {
    let mut steps = axes.iter().zip(wavelets);
    let Some((&axis, wavelet)) = steps.next() else {
        return Ok(vec![data.to_owned()]);
    };
    let (a, d) = swt_step_axis(data, wavelet, level, axis)?;
    let mut bands = vec![a, d];
    for (&axis, wavelet) in steps {
        let mut next = Vec::with_capacity(bands.len() * 2);
        for band in &bands {
            let (a, d) = swt_step_axis(band.view(), wavelet, level, axis)?;
            next.push(a);
            next.push(d);
        }
        bands = next;
    }
    debug_assert_eq!(bands.len(), band_count(axes.len()));
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::WaveletSelector;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, IxDyn};

    fn config(name: &str) -> SwtConfig {
        SwtConfig::new(WaveletSelector::from_name(name).unwrap())
    }

    #[test]
    fn haar_level_one_values() {
        let x = Array1::from(vec![1.0, 2.0, 3.0, 4.0]).into_dyn();
        let levels = swtn(x.view(), &config("haar").with_level(1), None).unwrap();
        assert_eq!(levels.len(), 1);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let a = levels[0].get_str("a").unwrap();
        let d = levels[0].get_str("d").unwrap();
        assert_abs_diff_eq!(a[[0]], 3.0 * s, epsilon = 1e-12);
        assert_abs_diff_eq!(d[[3]], 3.0 * s, epsilon = 1e-12);
    }

    #[test]
    fn automatic_level_uses_shortest_axis() {
        let x = ArrayD::<f64>::zeros(IxDyn(&[16, 8]));
        let levels = swtn(x.view(), &config("haar"), None).unwrap();
        // 8 samples with a length-2 filter allow two levels.
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn automatic_level_accounts_for_start_level() {
        let x = ArrayD::<f64>::zeros(IxDyn(&[16]));
        let levels = swtn(x.view(), &config("haar").with_start_level(1), None).unwrap();
        assert_eq!(levels.len(), 2);
        let err = swtn(x.view(), &config("haar").with_start_level(3), None).unwrap_err();
        assert_eq!(
            err,
            SwtError::NoFeasibleLevel {
                max: 3,
                start_level: 3
            }
        );
    }

    #[test]
    fn band_index_puts_first_axis_first() {
        // A signal constant along axis 1 has no detail along that axis.
        let x = ArrayD::from_shape_fn(IxDyn(&[4, 4]), |ix| (ix[0] * ix[0]) as f64);
        let levels = swtn(x.view(), &config("haar").with_level(1), None).unwrap();
        let ad = levels[0].get_str("ad").unwrap();
        let da = levels[0].get_str("da").unwrap();
        assert!(ad.iter().all(|v| v.abs() < 1e-12));
        assert!(da.iter().any(|v| v.abs() > 1e-6));
    }
}
