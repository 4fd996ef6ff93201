//! Single-level periodized convolution kernels.
//!
//! Every kernel treats its input as one period of an infinite periodic
//! signal. The analysis kernel computes
//!
//! ```text
//! out[o] = Σ_m f[m] · x[(step·o + (L·dilation)/2 − m·dilation) mod N]
//! ```
//!
//! which is the decimated DWT for `step = 2, dilation = 1` and one à-trous
//! SWT level for `step = 1, dilation = 2^level`. The synthesis kernel is the
//! exact adjoint of the decimated analysis, hence its inverse for
//! orthogonal filter banks.

use ndarray::{ArrayView1, ArrayViewMut1};

use crate::error::DwtError;
use crate::wavelet::Wavelet;

/// Periodized filtering of one lane into `out`.
pub(crate) fn analyze_lane(
    x: ArrayView1<'_, f64>,
    filter: &[f64],
    step: usize,
    dilation: usize,
    mut out: ArrayViewMut1<'_, f64>,
) {
    let n = x.len() as isize;
    let shift = (filter.len() * dilation / 2) as isize;
    for (o, y) in out.iter_mut().enumerate() {
        let base = (step * o) as isize + shift;
        *y = filter
            .iter()
            .enumerate()
            .map(|(m, &f)| f * x[(base - (m * dilation) as isize).rem_euclid(n) as usize])
            .sum();
    }
}

/// Periodized single-level reconstruction of one lane into `out`.
///
/// `out` must be twice as long as `approx` and `detail`.
pub(crate) fn synthesize_lane(
    approx: ArrayView1<'_, f64>,
    detail: ArrayView1<'_, f64>,
    wavelet: &Wavelet,
    mut out: ArrayViewMut1<'_, f64>,
) {
    out.fill(0.0);
    let n = out.len() as isize;
    let half = (wavelet.filter_len() / 2) as isize;
    let taps = wavelet.rec_lo().iter().zip(wavelet.rec_hi()).enumerate();
    for (o, (&a, &d)) in approx.iter().zip(detail.iter()).enumerate() {
        let base = 2 * o as isize + 1 - half;
        for (r, (&lo, &hi)) in taps.clone() {
            let idx = (base + r as isize).rem_euclid(n) as usize;
            out[idx] += lo * a + hi * d;
        }
    }
}

/// Single-level periodized DWT of a 1-D signal.
///
/// Returns `(approximation, detail)`, each half the input length.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::OddLength`] | `x` is empty or has odd length |
pub fn dwt_periodized(x: &[f64], wavelet: &Wavelet) -> Result<(Vec<f64>, Vec<f64>), DwtError> {
    if x.is_empty() || x.len() % 2 != 0 {
        return Err(DwtError::OddLength { len: x.len() });
    }
    let half = x.len() / 2;
    let mut approx = vec![0.0; half];
    let mut detail = vec![0.0; half];
    let view = ArrayView1::from(x);
    analyze_lane(view, wavelet.dec_lo(), 2, 1, ArrayViewMut1::from(&mut approx[..]));
    analyze_lane(view, wavelet.dec_hi(), 2, 1, ArrayViewMut1::from(&mut detail[..]));
    Ok((approx, detail))
}

/// Single-level periodized inverse DWT of a 1-D signal.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::ShapeMismatch`] | `approx` and `detail` differ in length |
/// | [`DwtError::OddLength`] | both inputs are empty |
pub fn idwt_periodized(
    approx: &[f64],
    detail: &[f64],
    wavelet: &Wavelet,
) -> Result<Vec<f64>, DwtError> {
    if approx.len() != detail.len() {
        return Err(DwtError::ShapeMismatch {
            approx: vec![approx.len()],
            detail: vec![detail.len()],
        });
    }
    if approx.is_empty() {
        return Err(DwtError::OddLength { len: 0 });
    }
    let mut out = vec![0.0; 2 * approx.len()];
    synthesize_lane(
        ArrayView1::from(approx),
        ArrayView1::from(detail),
        wavelet,
        ArrayViewMut1::from(&mut out[..]),
    );
    Ok(out)
}
