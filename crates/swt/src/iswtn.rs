//! N-dimensional inverse stationary wavelet transform.

use atrous_dwt::{Wavelet, idwtn};
use ndarray::{ArrayD, ArrayViewD, Axis, Slice, SliceInfoElem};
use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::axes::{check_divisible, dilation, normalize_axes};
use crate::error::SwtError;
use crate::odometer::Odometer;
use crate::selector::WaveletSelector;
use crate::subband::{LevelCoeffs, band_count};

/// Reconstructs a signal from a multilevel N-D decomposition.
///
/// `coeffs` must be ordered coarsest first, as returned by
/// [`swtn`](crate::swtn). `axes = None` means every dimension, in which
/// case the decomposition must span all of them. The decomposition is
/// read through views and left untouched.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SwtError::EmptyDecomposition`] | `coeffs` is empty |
/// | [`SwtError::AxisCountMismatch`] | levels span different axis counts, or `axes` has a different length |
/// | [`SwtError::WaveletCount`] | per-axis wavelets do not match the axis count |
/// | [`SwtError::ShapeMismatch`] | bands differ in shape within or across levels |
/// | [`SwtError::IndivisibleLength`] | an axis length is not a multiple of `2^levels` |
#[tracing::instrument(skip_all, fields(n_levels = coeffs.len()))]
pub fn iswtn(
    coeffs: &[LevelCoeffs<f64>],
    wavelet: &WaveletSelector,
    axes: Option<&[isize]>,
) -> Result<ArrayD<f64>, SwtError> {
    let first = coeffs.first().ok_or(SwtError::EmptyDecomposition)?;
    let n_axes = first.n_axes();
    if let Some(level) = coeffs.iter().find(|l| l.n_axes() != n_axes) {
        return Err(SwtError::AxisCountMismatch {
            found: level.n_axes(),
            requested: n_axes,
        });
    }
    let axes = normalize_axes(axes, first.approximation().ndim())?;
    if axes.len() != n_axes {
        return Err(SwtError::AxisCountMismatch {
            found: n_axes,
            requested: axes.len(),
        });
    }
    let wavelets = wavelet.for_axes(n_axes)?;
    let levels: Vec<Vec<ArrayViewD<'_, f64>>> = coeffs
        .iter()
        .map(|level| level.bands().iter().map(|b| b.view()).collect())
        .collect();
    reconstruct(&levels, &wavelets, &axes)
}

/// Shared inverse engine.
///
/// Each entry of `levels` holds `2^axes.len()` bands in sub-band index
/// order, coarsest level first. Only the approximation band of the first
/// level is used; deeper approximations are rebuilt on the way down.
///
/// At a level with dilation `step`, the samples along each axis split into
/// `step` interleaved sub-grids. Every sub-grid is an ordinary periodized
/// decomposition sampled at its even or odd positions; both phases are
/// inverted, the odd one shifted back by one sample, and the results
/// averaged. Sub-grids are independent and run in parallel.
pub(crate) fn reconstruct(
    levels: &[Vec<ArrayViewD<'_, f64>>],
    wavelets: &[Wavelet],
    axes: &[usize],
) -> Result<ArrayD<f64>, SwtError> {
    let first = levels.first().ok_or(SwtError::EmptyDecomposition)?;
    let expected_bands = band_count(axes.len());
    let reference = first
        .first()
        .ok_or(SwtError::BandCount {
            expected: expected_bands,
            n_axes: axes.len(),
            got: 0,
        })?
        .shape()
        .to_vec();
    for (i, bands) in levels.iter().enumerate() {
        if bands.len() != expected_bands {
            return Err(SwtError::BandCount {
                expected: expected_bands,
                n_axes: axes.len(),
                got: bands.len(),
            });
        }
        if let Some(band) = bands.iter().find(|b| b.shape() != reference.as_slice()) {
            return Err(SwtError::ShapeMismatch {
                level: i,
                expected: reference.clone(),
                got: band.shape().to_vec(),
            });
        }
    }
    let n_levels = levels.len();
    check_divisible(&reference, axes, n_levels)?;
    debug!(?axes, n_levels, shape = ?reference, "reconstructing");

    let mut output = first[0].to_owned();
    for (j, bands) in levels.iter().enumerate() {
        let step = dilation(n_levels - j - 1)?;
        let _lvl = debug_span!("level", j, step).entered();
        let current = output.view();
        let blocks = Odometer::new(axes.len(), step)
            .par_bridge()
            .map(|offsets| -> Result<_, SwtError> {
                let block =
                    merge_sub_grid(current.view(), &bands[1..], &offsets, step, wavelets, axes)?;
                Ok((offsets, block))
            })
            .collect::<Result<Vec<_>, SwtError>>()?;
        for (offsets, block) in blocks {
            let region = strided(output.ndim(), axes, &offsets, step);
            output.slice_mut(region.as_slice()).assign(&block);
        }
    }
    Ok(output)
}

/// Inverts the sub-grid starting at `offsets` for every even/odd phase
/// combination and averages the aligned results.
fn merge_sub_grid(
    approx: ArrayViewD<'_, f64>,
    details: &[ArrayViewD<'_, f64>],
    offsets: &[usize],
    step: usize,
    wavelets: &[Wavelet],
    axes: &[usize],
) -> Result<ArrayD<f64>, SwtError> {
    let mut sum: Option<ArrayD<f64>> = None;
    for phases in Odometer::new(axes.len(), 2) {
        let starts: Vec<usize> = offsets
            .iter()
            .zip(&phases)
            .map(|(&o, &p)| o + p * step)
            .collect();
        let region = strided(approx.ndim(), axes, &starts, 2 * step);
        let mut bands = Vec::with_capacity(details.len() + 1);
        bands.push(approx.slice(region.as_slice()).to_owned());
        bands.extend(details.iter().map(|d| d.slice(region.as_slice()).to_owned()));

        let mut block = idwtn(bands, wavelets, axes)?;
        for (&axis, _) in axes.iter().zip(&phases).filter(|(_, p)| **p == 1) {
            block = roll_forward(&block, axis);
        }
        match sum.as_mut() {
            Some(total) => *total += &block,
            None => sum = Some(block),
        }
    }
    let mut total = sum.ok_or(SwtError::EmptyAxes)?;
    total /= band_count(axes.len()) as f64;
    Ok(total)
}

/// Slice description selecting `start::stride` along each transformed axis
/// and everything along the others.
fn strided(ndim: usize, axes: &[usize], starts: &[usize], stride: usize) -> Vec<SliceInfoElem> {
    let mut region = vec![
        SliceInfoElem::Slice {
            start: 0,
            end: None,
            step: 1,
        };
        ndim
    ];
    for (&axis, &start) in axes.iter().zip(starts) {
        region[axis] = SliceInfoElem::Slice {
            start: start as isize,
            end: None,
            step: stride as isize,
        };
    }
    region
}

/// Circularly shifts `x` forward by one sample along `axis`.
fn roll_forward(x: &ArrayD<f64>, axis: usize) -> ArrayD<f64> {
    let n = x.len_of(Axis(axis));
    let mut out = ArrayD::<f64>::zeros(x.raw_dim());
    if n == 0 {
        return out;
    }
    out.slice_axis_mut(Axis(axis), Slice::from(1..))
        .assign(&x.slice_axis(Axis(axis), Slice::from(..n - 1)));
    out.slice_axis_mut(Axis(axis), Slice::from(..1))
        .assign(&x.slice_axis(Axis(axis), Slice::from(n - 1..)));
    out
}
