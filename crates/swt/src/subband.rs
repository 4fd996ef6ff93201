//! Sub-band keys and per-level coefficient containers.

use std::fmt;
use std::str::FromStr;

use ndarray::ArrayD;

use crate::error::SwtError;

/// Identifies one sub-band of a `k`-axis decomposition.
///
/// Stored as a bitmask in which axis position `p` (in axis-set order) owns
/// bit `k - 1 - p`; a set bit means detail, a clear bit approximation. The
/// integer order therefore matches the lexicographic order of the textual
/// form: `aa < ad < da < dd`.
///
/// # Example
///
/// ```ignore
/// use atrous_swt::SubbandKey;
///
/// let key: SubbandKey = "ad".parse()?;
/// assert_eq!(key.index(), 1);
/// assert!(key.is_detail(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubbandKey {
    n_axes: usize,
    bits: usize,
}

impl SubbandKey {
    /// Returns the all-approximation key for `n_axes` axes.
    pub fn approximation(n_axes: usize) -> Self {
        Self { n_axes, bits: 0 }
    }

    /// Builds a key from its integer index.
    ///
    /// Returns `None` if `index >= 2^n_axes`.
    pub fn from_index(index: usize, n_axes: usize) -> Option<Self> {
        (index < band_count(n_axes)).then_some(Self {
            n_axes,
            bits: index,
        })
    }

    /// Iterates over all `2^n_axes` keys in index order.
    pub fn all(n_axes: usize) -> impl Iterator<Item = SubbandKey> {
        (0..band_count(n_axes)).map(move |bits| Self { n_axes, bits })
    }

    /// Returns the integer index of the key.
    pub fn index(&self) -> usize {
        self.bits
    }

    /// Returns the number of axes the key spans.
    pub fn n_axes(&self) -> usize {
        self.n_axes
    }

    /// Returns `true` if the axis at position `p` is a detail band.
    pub fn is_detail(&self, p: usize) -> bool {
        p < self.n_axes && self.bits & (1 << (self.n_axes - 1 - p)) != 0
    }

    /// Returns `true` for the all-approximation key.
    pub fn is_approximation(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for SubbandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in 0..self.n_axes {
            f.write_str(if self.is_detail(p) { "d" } else { "a" })?;
        }
        Ok(())
    }
}

impl FromStr for SubbandKey {
    type Err = SwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() >= usize::BITS as usize {
            return Err(SwtError::InvalidSubbandKey(s.to_string()));
        }
        let bits = s.chars().try_fold(0usize, |acc, c| match c {
            'a' => Ok(acc << 1),
            'd' => Ok((acc << 1) | 1),
            _ => Err(SwtError::InvalidSubbandKey(s.to_string())),
        })?;
        Ok(Self {
            n_axes: s.len(),
            bits,
        })
    }
}

/// Number of sub-bands for `n_axes` transformed axes.
pub(crate) fn band_count(n_axes: usize) -> usize {
    1usize << n_axes
}

/// The `2^k` sub-bands of one decomposition level.
///
/// Every band has the shape of the transformed signal. Bands are indexed by
/// [`SubbandKey`]; the textual view (`"ad"`, ...) is available through
/// [`LevelCoeffs::get_str`] and [`LevelCoeffs::iter`].
#[derive(Clone, Debug, PartialEq)]
pub struct LevelCoeffs<T> {
    n_axes: usize,
    bands: Vec<ArrayD<T>>,
}

impl<T> LevelCoeffs<T> {
    /// Creates a level from bands in key-index order.
    ///
    /// Shapes are not compared here; the inverse transforms check them.
    ///
    /// # Errors
    ///
    /// Returns [`SwtError::BandCount`] unless exactly `2^n_axes` bands are
    /// supplied, and [`SwtError::EmptyAxes`] for `n_axes == 0`.
    pub fn new(n_axes: usize, bands: Vec<ArrayD<T>>) -> Result<Self, SwtError> {
        if n_axes == 0 {
            return Err(SwtError::EmptyAxes);
        }
        if n_axes >= usize::BITS as usize || bands.len() != band_count(n_axes) {
            return Err(SwtError::BandCount {
                expected: band_count(n_axes.min(usize::BITS as usize - 1)),
                n_axes,
                got: bands.len(),
            });
        }
        Ok(Self { n_axes, bands })
    }

    /// Crate-internal constructor for bands produced by the forward engine.
    pub(crate) fn from_bands(n_axes: usize, bands: Vec<ArrayD<T>>) -> Self {
        debug_assert_eq!(bands.len(), band_count(n_axes));
        Self { n_axes, bands }
    }

    /// Returns the number of transformed axes.
    pub fn n_axes(&self) -> usize {
        self.n_axes
    }

    /// Returns the number of sub-bands (`2^n_axes`).
    pub fn n_bands(&self) -> usize {
        self.bands.len()
    }

    /// Returns the shape of the all-approximation band.
    pub fn shape(&self) -> &[usize] {
        self.bands[0].shape()
    }

    /// Returns the band for `key`, or `None` if the key spans a different
    /// number of axes.
    pub fn get(&self, key: SubbandKey) -> Option<&ArrayD<T>> {
        if key.n_axes() != self.n_axes {
            return None;
        }
        self.bands.get(key.index())
    }

    /// Returns a mutable band for `key`, e.g. for coefficient thresholding.
    pub fn get_mut(&mut self, key: SubbandKey) -> Option<&mut ArrayD<T>> {
        if key.n_axes() != self.n_axes {
            return None;
        }
        self.bands.get_mut(key.index())
    }

    /// Looks up a band by its textual key, e.g. `"ad"`.
    pub fn get_str(&self, key: &str) -> Option<&ArrayD<T>> {
        key.parse().ok().and_then(|k| self.get(k))
    }

    /// Returns the all-approximation band.
    pub fn approximation(&self) -> &ArrayD<T> {
        &self.bands[0]
    }

    /// Iterates over the `2^k - 1` detail bands with their keys.
    pub fn details(&self) -> impl Iterator<Item = (SubbandKey, &ArrayD<T>)> {
        self.iter().skip(1)
    }

    /// Iterates over every band with its key, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SubbandKey, &ArrayD<T>)> {
        SubbandKey::all(self.n_axes).zip(self.bands.iter())
    }

    /// Returns all keys in index order.
    pub fn keys(&self) -> impl Iterator<Item = SubbandKey> {
        SubbandKey::all(self.n_axes)
    }

    /// Returns the bands in index order.
    pub fn bands(&self) -> &[ArrayD<T>] {
        &self.bands
    }

    /// Consumes the level and returns its bands in index order.
    pub fn into_bands(self) -> Vec<ArrayD<T>> {
        self.bands
    }
}

/// One level of a 1-D stationary decomposition: `(cA, cD)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SwtLevel1d<T> {
    approximation: ArrayD<T>,
    detail: ArrayD<T>,
}

impl<T> SwtLevel1d<T> {
    /// Creates a level from approximation and detail coefficients.
    pub fn new(approximation: ArrayD<T>, detail: ArrayD<T>) -> Self {
        Self {
            approximation,
            detail,
        }
    }

    /// Returns the approximation coefficients (`cA`).
    pub fn approximation(&self) -> &ArrayD<T> {
        &self.approximation
    }

    /// Returns the detail coefficients (`cD`).
    pub fn detail(&self) -> &ArrayD<T> {
        &self.detail
    }

    /// Returns `(approximation, detail)`.
    pub fn into_parts(self) -> (ArrayD<T>, ArrayD<T>) {
        (self.approximation, self.detail)
    }
}

impl<T> TryFrom<LevelCoeffs<T>> for SwtLevel1d<T> {
    type Error = SwtError;

    fn try_from(level: LevelCoeffs<T>) -> Result<Self, Self::Error> {
        if level.n_axes() != 1 {
            return Err(SwtError::AxisCountMismatch {
                found: level.n_axes(),
                requested: 1,
            });
        }
        let [a, d]: [ArrayD<T>; 2] =
            level
                .into_bands()
                .try_into()
                .map_err(|bands: Vec<ArrayD<T>>| SwtError::BandCount {
                    expected: 2,
                    n_axes: 1,
                    got: bands.len(),
                })?;
        Ok(Self::new(a, d))
    }
}

/// One level of a 2-D stationary decomposition with named detail bands.
///
/// | Band | Key |
/// |------|-----|
/// | approximation | `aa` |
/// | horizontal | `da` |
/// | vertical | `ad` |
/// | diagonal | `dd` |
#[derive(Clone, Debug, PartialEq)]
pub struct SwtLevel2d<T> {
    approximation: ArrayD<T>,
    horizontal: ArrayD<T>,
    vertical: ArrayD<T>,
    diagonal: ArrayD<T>,
}

impl<T> SwtLevel2d<T> {
    /// Creates a level from its four bands.
    pub fn new(
        approximation: ArrayD<T>,
        horizontal: ArrayD<T>,
        vertical: ArrayD<T>,
        diagonal: ArrayD<T>,
    ) -> Self {
        Self {
            approximation,
            horizontal,
            vertical,
            diagonal,
        }
    }

    /// Returns the approximation band (`cA`).
    pub fn approximation(&self) -> &ArrayD<T> {
        &self.approximation
    }

    /// Returns the horizontal detail band (`cH`).
    pub fn horizontal(&self) -> &ArrayD<T> {
        &self.horizontal
    }

    /// Returns the vertical detail band (`cV`).
    pub fn vertical(&self) -> &ArrayD<T> {
        &self.vertical
    }

    /// Returns the diagonal detail band (`cD`).
    pub fn diagonal(&self) -> &ArrayD<T> {
        &self.diagonal
    }

    /// Returns `(approximation, horizontal, vertical, diagonal)`.
    pub fn into_parts(self) -> (ArrayD<T>, ArrayD<T>, ArrayD<T>, ArrayD<T>) {
        (
            self.approximation,
            self.horizontal,
            self.vertical,
            self.diagonal,
        )
    }

    /// Returns the bands in key-index order: `aa, ad, da, dd`.
    pub(crate) fn bands_in_key_order(&self) -> [&ArrayD<T>; 4] {
        [
            &self.approximation,
            &self.vertical,
            &self.horizontal,
            &self.diagonal,
        ]
    }
}

impl<T> TryFrom<LevelCoeffs<T>> for SwtLevel2d<T> {
    type Error = SwtError;

    fn try_from(level: LevelCoeffs<T>) -> Result<Self, Self::Error> {
        if level.n_axes() != 2 {
            return Err(SwtError::AxisCountMismatch {
                found: level.n_axes(),
                requested: 2,
            });
        }
        let [aa, ad, da, dd]: [ArrayD<T>; 4] = level
            .into_bands()
            .try_into()
            .map_err(|bands: Vec<ArrayD<T>>| SwtError::BandCount {
                expected: 4,
                n_axes: 2,
                got: bands.len(),
            })?;
        Ok(Self::new(aa, da, ad, dd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    fn filled(v: f64) -> ArrayD<f64> {
        ArrayD::from_elem(IxDyn(&[2, 2]), v)
    }

    #[test]
    fn key_text_round_trip() {
        for n_axes in 1..5 {
            for key in SubbandKey::all(n_axes) {
                let text = key.to_string();
                assert_eq!(text.len(), n_axes);
                assert_eq!(text.parse::<SubbandKey>().unwrap(), key);
            }
        }
    }

    #[test]
    fn key_order_matches_text_order() {
        let names: Vec<String> = SubbandKey::all(2).map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["aa", "ad", "da", "dd"]);
    }

    #[test]
    fn key_detail_bits() {
        let key: SubbandKey = "dad".parse().unwrap();
        assert!(key.is_detail(0));
        assert!(!key.is_detail(1));
        assert!(key.is_detail(2));
        assert!(!key.is_detail(3));
        assert_eq!(key.index(), 0b101);
    }

    #[test]
    fn key_parse_rejects_garbage() {
        assert!(matches!(
            "ax".parse::<SubbandKey>(),
            Err(SwtError::InvalidSubbandKey(_))
        ));
        assert!("".parse::<SubbandKey>().is_err());
    }

    #[test]
    fn from_index_bounds() {
        assert!(SubbandKey::from_index(3, 2).is_some());
        assert!(SubbandKey::from_index(4, 2).is_none());
        assert!(SubbandKey::approximation(3).is_approximation());
    }

    #[test]
    fn level_lookup_by_text_and_key() {
        let level = LevelCoeffs::new(2, (0..4).map(|i| filled(i as f64)).collect()).unwrap();
        assert_eq!(level.get_str("da").unwrap()[[0, 0]], 2.0);
        assert_eq!(level.get("dd".parse().unwrap()).unwrap()[[1, 1]], 3.0);
        assert!(level.get_str("a").is_none());
        assert_eq!(level.approximation()[[0, 0]], 0.0);
        assert_eq!(level.details().count(), 3);
        assert_eq!(level.shape(), &[2, 2]);
    }

    #[test]
    fn level_rejects_wrong_band_count() {
        let err = LevelCoeffs::new(2, vec![filled(0.0); 3]).unwrap_err();
        assert_eq!(
            err,
            SwtError::BandCount {
                expected: 4,
                n_axes: 2,
                got: 3
            }
        );
    }

    #[test]
    fn level_2d_names() {
        let level = LevelCoeffs::new(2, (0..4).map(|i| filled(i as f64)).collect()).unwrap();
        let named = SwtLevel2d::try_from(level).unwrap();
        assert_eq!(named.approximation()[[0, 0]], 0.0);
        assert_eq!(named.vertical()[[0, 0]], 1.0);
        assert_eq!(named.horizontal()[[0, 0]], 2.0);
        assert_eq!(named.diagonal()[[0, 0]], 3.0);
    }

    #[test]
    fn containers_are_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LevelCoeffs<f64>>();
        assert_impl::<SwtLevel1d<f64>>();
        assert_impl::<SwtLevel2d<f64>>();
    }
}
