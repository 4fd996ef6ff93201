//! Axis-wise transforms on N-dimensional arrays.
//!
//! Each function applies a periodized 1-D kernel to every lane of an array
//! along one axis, leaving the other axes untouched.

use ndarray::{ArrayD, ArrayViewD, Axis, Zip};
use tracing::trace;

use crate::error::DwtError;
use crate::periodic::{analyze_lane, synthesize_lane};
use crate::wavelet::Wavelet;

fn check_axis(ndim: usize, axis: usize) -> Result<(), DwtError> {
    if axis >= ndim {
        return Err(DwtError::AxisOutOfRange { axis, ndim });
    }
    Ok(())
}

/// One undecimated (à-trous) wavelet step along `axis`.
///
/// The filters are dilated by `2^level` without being resampled: the
/// kernel strides over the data with that step. Both outputs have the
/// input's shape.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::AxisOutOfRange`] | `axis >= data.ndim()` |
/// | [`DwtError::EmptyAxis`] | `data` has no samples along `axis` |
/// | [`DwtError::LevelOverflow`] | `2^level` overflows `usize` |
pub fn swt_step_axis(
    data: ArrayViewD<'_, f64>,
    wavelet: &Wavelet,
    level: usize,
    axis: usize,
) -> Result<(ArrayD<f64>, ArrayD<f64>), DwtError> {
    check_axis(data.ndim(), axis)?;
    if data.len_of(Axis(axis)) == 0 {
        return Err(DwtError::EmptyAxis { axis });
    }
    let dilation = u32::try_from(level)
        .ok()
        .and_then(|l| 1usize.checked_shl(l))
        .ok_or(DwtError::LevelOverflow(level))?;
    trace!(axis, level, dilation, wavelet = %wavelet, "swt step");

    let mut approx = ArrayD::<f64>::zeros(data.raw_dim());
    let mut detail = ArrayD::<f64>::zeros(data.raw_dim());
    Zip::from(data.lanes(Axis(axis)))
        .and(approx.lanes_mut(Axis(axis)))
        .and(detail.lanes_mut(Axis(axis)))
        .for_each(|x, a, d| {
            analyze_lane(x, wavelet.dec_lo(), 1, dilation, a);
            analyze_lane(x, wavelet.dec_hi(), 1, dilation, d);
        });
    Ok((approx, detail))
}

/// Single-level decimated periodized DWT along `axis`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::AxisOutOfRange`] | `axis >= data.ndim()` |
/// | [`DwtError::OddLength`] | length along `axis` is zero or odd |
pub fn dwt_axis(
    data: ArrayViewD<'_, f64>,
    wavelet: &Wavelet,
    axis: usize,
) -> Result<(ArrayD<f64>, ArrayD<f64>), DwtError> {
    check_axis(data.ndim(), axis)?;
    let len = data.len_of(Axis(axis));
    if len == 0 || len % 2 != 0 {
        return Err(DwtError::OddLength { len });
    }
    let mut shape = data.shape().to_vec();
    shape[axis] = len / 2;
    let mut approx = ArrayD::<f64>::zeros(shape.clone());
    let mut detail = ArrayD::<f64>::zeros(shape);
    Zip::from(data.lanes(Axis(axis)))
        .and(approx.lanes_mut(Axis(axis)))
        .and(detail.lanes_mut(Axis(axis)))
        .for_each(|x, a, d| {
            analyze_lane(x, wavelet.dec_lo(), 2, 1, a);
            analyze_lane(x, wavelet.dec_hi(), 2, 1, d);
        });
    Ok((approx, detail))
}

/// Single-level periodized inverse DWT along `axis`.
///
/// The output has the inputs' shape with the length along `axis` doubled.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::ShapeMismatch`] | `approx` and `detail` differ in shape |
/// | [`DwtError::AxisOutOfRange`] | `axis >= approx.ndim()` |
/// | [`DwtError::EmptyAxis`] | no coefficients along `axis` |
pub fn idwt_axis(
    approx: ArrayViewD<'_, f64>,
    detail: ArrayViewD<'_, f64>,
    wavelet: &Wavelet,
    axis: usize,
) -> Result<ArrayD<f64>, DwtError> {
    if approx.shape() != detail.shape() {
        return Err(DwtError::ShapeMismatch {
            approx: approx.shape().to_vec(),
            detail: detail.shape().to_vec(),
        });
    }
    check_axis(approx.ndim(), axis)?;
    if approx.len_of(Axis(axis)) == 0 {
        return Err(DwtError::EmptyAxis { axis });
    }
    let mut shape = approx.shape().to_vec();
    shape[axis] *= 2;
    let mut out = ArrayD::<f64>::zeros(shape);
    Zip::from(out.lanes_mut(Axis(axis)))
        .and(approx.lanes(Axis(axis)))
        .and(detail.lanes(Axis(axis)))
        .for_each(|o, a, d| synthesize_lane(a, d, wavelet, o));
    Ok(out)
}

/// Separable single-level inverse DWT over several axes.
///
/// `bands` holds `2^k` equally shaped sub-bands for `k = axes.len()`,
/// indexed by a bitmask in which axis position `p` owns bit `k - 1 - p`
/// (0 = approximation, 1 = detail). Index 0 is the all-approximation band.
/// The last axis is combined first.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::WaveletCount`] | `wavelets.len() != axes.len()` |
/// | [`DwtError::BandCount`] | `bands.len() != 2^axes.len()` |
/// | any [`idwt_axis`] error | shape or axis problems |
pub fn idwtn(
    bands: Vec<ArrayD<f64>>,
    wavelets: &[Wavelet],
    axes: &[usize],
) -> Result<ArrayD<f64>, DwtError> {
    let n_axes = axes.len();
    if wavelets.len() != n_axes {
        return Err(DwtError::WaveletCount {
            expected: n_axes,
            got: wavelets.len(),
        });
    }
    let expected = 1usize << n_axes;
    if bands.len() != expected {
        return Err(DwtError::BandCount {
            expected,
            n_axes,
            got: bands.len(),
        });
    }

    let mut bands = bands;
    for (&axis, wavelet) in axes.iter().zip(wavelets).rev() {
        bands = bands
            .chunks_exact(2)
            .map(|pair| idwt_axis(pair[0].view(), pair[1].view(), wavelet, axis))
            .collect::<Result<Vec<_>, _>>()?;
    }
    // Exactly one band is left once every axis has been merged.
    bands.pop().ok_or(DwtError::BandCount {
        expected,
        n_axes,
        got: 0,
    })
}
