//! Complex-valued transforms built from the real engine.
//!
//! The transforms are linear, so a complex signal is handled by
//! transforming its real and imaginary parts separately and recombining
//! every array of the result as `re + i·im`. [`SplitParts`] and
//! [`CombineParts`] describe that structural split and merge for each
//! container the transforms accept or return.

use ndarray::{Array, ArrayBase, ArrayD, ArrayViewD, Data, Dimension, Zip};
use num_complex::Complex64;

use crate::config::SwtConfig;
use crate::error::SwtError;
use crate::iswtn::iswtn;
use crate::selector::WaveletSelector;
use crate::subband::{LevelCoeffs, SwtLevel1d, SwtLevel2d};
use crate::swt1d::{iswt, iswt_axis, swt};
use crate::swt2d::{iswt2, swt2};
use crate::swtn::swtn;

/// Splits a complex value into real and imaginary counterparts.
pub trait SplitParts {
    /// Real-valued counterpart of `Self`.
    type Real;

    /// Returns `(re, im)`.
    fn split_parts(&self) -> (Self::Real, Self::Real);
}

/// Rebuilds a complex value from real and imaginary counterparts.
pub trait CombineParts: Sized {
    /// Real-valued counterpart of `Self`.
    type Real;

    /// Combines `re + i·im` element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`SwtError::ComplexPartsMismatch`] if the two parts differ
    /// in structure or shape.
    fn combine_parts(re: Self::Real, im: Self::Real) -> Result<Self, SwtError>;
}

impl<S, D> SplitParts for ArrayBase<S, D>
where
    S: Data<Elem = Complex64>,
    D: Dimension,
{
    type Real = Array<f64, D>;

    fn split_parts(&self) -> (Self::Real, Self::Real) {
        (self.mapv(|c| c.re), self.mapv(|c| c.im))
    }
}

impl<D: Dimension> CombineParts for Array<Complex64, D> {
    type Real = Array<f64, D>;

    fn combine_parts(re: Self::Real, im: Self::Real) -> Result<Self, SwtError> {
        if re.shape() != im.shape() {
            return Err(SwtError::ComplexPartsMismatch);
        }
        Ok(Zip::from(&re)
            .and(&im)
            .map_collect(|&r, &i| Complex64::new(r, i)))
    }
}

impl<T: SplitParts> SplitParts for [T] {
    type Real = Vec<T::Real>;

    fn split_parts(&self) -> (Self::Real, Self::Real) {
        self.iter().map(SplitParts::split_parts).unzip()
    }
}

impl<T: CombineParts> CombineParts for Vec<T> {
    type Real = Vec<T::Real>;

    fn combine_parts(re: Self::Real, im: Self::Real) -> Result<Self, SwtError> {
        if re.len() != im.len() {
            return Err(SwtError::ComplexPartsMismatch);
        }
        re.into_iter()
            .zip(im)
            .map(|(r, i)| T::combine_parts(r, i))
            .collect()
    }
}

impl SplitParts for LevelCoeffs<Complex64> {
    type Real = LevelCoeffs<f64>;

    fn split_parts(&self) -> (Self::Real, Self::Real) {
        let (re, im) = self.bands().split_parts();
        (
            LevelCoeffs::from_bands(self.n_axes(), re),
            LevelCoeffs::from_bands(self.n_axes(), im),
        )
    }
}

impl CombineParts for LevelCoeffs<Complex64> {
    type Real = LevelCoeffs<f64>;

    fn combine_parts(re: Self::Real, im: Self::Real) -> Result<Self, SwtError> {
        if re.n_axes() != im.n_axes() {
            return Err(SwtError::ComplexPartsMismatch);
        }
        let n_axes = re.n_axes();
        let bands = Vec::<ArrayD<Complex64>>::combine_parts(re.into_bands(), im.into_bands())?;
        Ok(LevelCoeffs::from_bands(n_axes, bands))
    }
}

impl SplitParts for SwtLevel1d<Complex64> {
    type Real = SwtLevel1d<f64>;

    fn split_parts(&self) -> (Self::Real, Self::Real) {
        let (a_re, a_im) = self.approximation().split_parts();
        let (d_re, d_im) = self.detail().split_parts();
        (SwtLevel1d::new(a_re, d_re), SwtLevel1d::new(a_im, d_im))
    }
}

impl CombineParts for SwtLevel1d<Complex64> {
    type Real = SwtLevel1d<f64>;

    fn combine_parts(re: Self::Real, im: Self::Real) -> Result<Self, SwtError> {
        let (a_re, d_re) = re.into_parts();
        let (a_im, d_im) = im.into_parts();
        Ok(SwtLevel1d::new(
            ArrayD::<Complex64>::combine_parts(a_re, a_im)?,
            ArrayD::<Complex64>::combine_parts(d_re, d_im)?,
        ))
    }
}

impl SplitParts for SwtLevel2d<Complex64> {
    type Real = SwtLevel2d<f64>;

    fn split_parts(&self) -> (Self::Real, Self::Real) {
        let (a_re, a_im) = self.approximation().split_parts();
        let (h_re, h_im) = self.horizontal().split_parts();
        let (v_re, v_im) = self.vertical().split_parts();
        let (d_re, d_im) = self.diagonal().split_parts();
        (
            SwtLevel2d::new(a_re, h_re, v_re, d_re),
            SwtLevel2d::new(a_im, h_im, v_im, d_im),
        )
    }
}

impl CombineParts for SwtLevel2d<Complex64> {
    type Real = SwtLevel2d<f64>;

    fn combine_parts(re: Self::Real, im: Self::Real) -> Result<Self, SwtError> {
        let (a_re, h_re, v_re, d_re) = re.into_parts();
        let (a_im, h_im, v_im, d_im) = im.into_parts();
        Ok(SwtLevel2d::new(
            ArrayD::<Complex64>::combine_parts(a_re, a_im)?,
            ArrayD::<Complex64>::combine_parts(h_re, h_im)?,
            ArrayD::<Complex64>::combine_parts(v_re, v_im)?,
            ArrayD::<Complex64>::combine_parts(d_re, d_im)?,
        ))
    }
}

/// Runs a real transform on the real and imaginary parts of `input` and
/// recombines the results.
///
/// # Errors
///
/// Propagates the first error from `transform`, or
/// [`SwtError::ComplexPartsMismatch`] if the two results cannot be paired.
pub fn split_complex<I, O, F>(input: &I, transform: F) -> Result<O, SwtError>
where
    I: SplitParts + ?Sized,
    O: CombineParts,
    F: Fn(I::Real) -> Result<O::Real, SwtError>,
{
    let (re, im) = input.split_parts();
    let re = transform(re)?;
    let im = transform(im)?;
    O::combine_parts(re, im)
}

/// Complex counterpart of [`swt`].
///
/// # Errors
///
/// Same as [`swt`].
pub fn swt_complex(
    data: ArrayViewD<'_, Complex64>,
    config: &SwtConfig,
    axis: isize,
) -> Result<Vec<SwtLevel1d<Complex64>>, SwtError> {
    split_complex(&data, |x: ArrayD<f64>| swt(x.view(), config, axis))
}

/// Complex counterpart of [`iswt`].
///
/// # Errors
///
/// Same as [`iswt`].
pub fn iswt_complex(
    coeffs: &[SwtLevel1d<Complex64>],
    wavelet: &WaveletSelector,
) -> Result<ArrayD<Complex64>, SwtError> {
    split_complex(coeffs, |levels: Vec<SwtLevel1d<f64>>| iswt(&levels, wavelet))
}

/// Complex counterpart of [`iswt_axis`].
///
/// # Errors
///
/// Same as [`iswt_axis`].
pub fn iswt_axis_complex(
    coeffs: &[SwtLevel1d<Complex64>],
    wavelet: &WaveletSelector,
    axis: isize,
) -> Result<ArrayD<Complex64>, SwtError> {
    split_complex(coeffs, |levels: Vec<SwtLevel1d<f64>>| {
        iswt_axis(&levels, wavelet, axis)
    })
}

/// Complex counterpart of [`swt2`].
///
/// # Errors
///
/// Same as [`swt2`].
pub fn swt2_complex(
    data: ArrayViewD<'_, Complex64>,
    config: &SwtConfig,
    axes: [isize; 2],
) -> Result<Vec<SwtLevel2d<Complex64>>, SwtError> {
    split_complex(&data, |x: ArrayD<f64>| swt2(x.view(), config, axes))
}

/// Complex counterpart of [`iswt2`].
///
/// # Errors
///
/// Same as [`iswt2`].
pub fn iswt2_complex(
    coeffs: &[SwtLevel2d<Complex64>],
    wavelet: &WaveletSelector,
    axes: [isize; 2],
) -> Result<ArrayD<Complex64>, SwtError> {
    split_complex(coeffs, |levels: Vec<SwtLevel2d<f64>>| {
        iswt2(&levels, wavelet, axes)
    })
}

/// Complex counterpart of [`swtn`].
///
/// # Errors
///
/// Same as [`swtn`].
pub fn swtn_complex(
    data: ArrayViewD<'_, Complex64>,
    config: &SwtConfig,
    axes: Option<&[isize]>,
) -> Result<Vec<LevelCoeffs<Complex64>>, SwtError> {
    split_complex(&data, |x: ArrayD<f64>| swtn(x.view(), config, axes))
}

/// Complex counterpart of [`iswtn`].
///
/// # Errors
///
/// Same as [`iswtn`].
pub fn iswtn_complex(
    coeffs: &[LevelCoeffs<Complex64>],
    wavelet: &WaveletSelector,
    axes: Option<&[isize]>,
) -> Result<ArrayD<Complex64>, SwtError> {
    split_complex(coeffs, |levels: Vec<LevelCoeffs<f64>>| {
        iswtn(&levels, wavelet, axes)
    })
}
