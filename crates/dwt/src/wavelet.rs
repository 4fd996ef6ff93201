//! Orthogonal wavelet filter banks.

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use crate::error::DwtError;

/// Orthogonal wavelet families with built-in filter banks.
///
/// | Family | Orders | Filter length |
/// |--------|--------|---------------|
/// | [`WaveletFamily::Haar`] | - | 2 |
/// | [`WaveletFamily::Daubechies`] | 1..=4 | `2N` |
/// | [`WaveletFamily::Symlet`] | 2..=4 | `2N` |
/// | [`WaveletFamily::Coiflet`] | 1..=2 | `6N` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaveletFamily {
    /// Haar wavelet (identical to `db1`).
    Haar,
    /// Daubechies wavelet `dbN`.
    Daubechies(u8),
    /// Symlet `symN` (least asymmetric Daubechies).
    Symlet(u8),
    /// Coiflet `coifN`.
    Coiflet(u8),
}

impl fmt::Display for WaveletFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Haar => write!(f, "haar"),
            Self::Daubechies(n) => write!(f, "db{n}"),
            Self::Symlet(n) => write!(f, "sym{n}"),
            Self::Coiflet(n) => write!(f, "coif{n}"),
        }
    }
}

const DB2: [f64; 4] = [
    0.48296291314469025,
    0.836516303737469,
    0.22414386804185735,
    -0.12940952255092145,
];

const DB3: [f64; 6] = [
    0.3326705529509569,
    0.8068915093133388,
    0.4598775021193313,
    -0.13501102001039084,
    -0.08544127388224149,
    0.035226291882100656,
];

const DB4: [f64; 8] = [
    0.23037781330885523,
    0.7148465705525415,
    0.6308807679295904,
    -0.02798376941698385,
    -0.18703481171888114,
    0.030841381835986965,
    0.032883011666982945,
    -0.010597401784997278,
];

const SYM4: [f64; 8] = [
    0.0322231006040427,
    -0.012603967262037833,
    -0.09921954357684722,
    0.29785779560527736,
    0.8037387518059161,
    0.49761866763201545,
    -0.02963552764599851,
    -0.07576571478927333,
];

const COIF1: [f64; 6] = [
    -0.01565572813546454,
    -0.0727326195128539,
    0.38486484686420286,
    0.8525720202122554,
    0.3378976624578092,
    -0.0727326195128539,
];

const COIF2: [f64; 12] = [
    -0.0007205494453645122,
    -0.0018232088707029932,
    0.0056114348193944995,
    0.023680171946334084,
    -0.0594344186464569,
    -0.0764885990783064,
    0.41700518442169254,
    0.8127236354455423,
    0.3861100668211622,
    -0.06737255472196302,
    -0.04146493678175915,
    0.016387336463522112,
];

/// Scaling (reconstruction low-pass) coefficients for a family.
fn scaling_coeffs(family: WaveletFamily) -> Result<Vec<f64>, DwtError> {
    let coeffs = match family {
        WaveletFamily::Haar | WaveletFamily::Daubechies(1) => vec![FRAC_1_SQRT_2; 2],
        WaveletFamily::Daubechies(2) | WaveletFamily::Symlet(2) => DB2.to_vec(),
        WaveletFamily::Daubechies(3) | WaveletFamily::Symlet(3) => DB3.to_vec(),
        WaveletFamily::Daubechies(4) => DB4.to_vec(),
        WaveletFamily::Symlet(4) => SYM4.to_vec(),
        WaveletFamily::Coiflet(1) => COIF1.to_vec(),
        WaveletFamily::Coiflet(2) => COIF2.to_vec(),
        other => return Err(DwtError::UnsupportedWavelet(other.to_string())),
    };
    Ok(coeffs)
}

/// An orthogonal two-channel filter bank.
///
/// Filters follow the usual convention: `rec_lo` holds the scaling
/// coefficients, `dec_lo` is its time reversal, and the high-pass pair is
/// the quadrature mirror `rec_hi[k] = (-1)^k rec_lo[L-1-k]`.
///
/// # Example
///
/// ```ignore
/// use atrous_dwt::Wavelet;
///
/// let w = Wavelet::from_name("db2")?;
/// assert_eq!(w.filter_len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Wavelet {
    family: WaveletFamily,
    dec_lo: Vec<f64>,
    dec_hi: Vec<f64>,
    rec_lo: Vec<f64>,
    rec_hi: Vec<f64>,
}

impl Wavelet {
    /// Builds the filter bank for a wavelet family.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::UnsupportedWavelet`] if the family order has no
    /// built-in coefficients.
    pub fn new(family: WaveletFamily) -> Result<Self, DwtError> {
        let rec_lo = scaling_coeffs(family)?;
        let len = rec_lo.len();
        let rec_hi: Vec<f64> = (0..len)
            .map(|k| {
                let c = rec_lo[len - 1 - k];
                if k % 2 == 0 { c } else { -c }
            })
            .collect();
        let dec_lo = rec_lo.iter().rev().copied().collect();
        let dec_hi = rec_hi.iter().rev().copied().collect();
        Ok(Self {
            family,
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        })
    }

    /// Parses a wavelet from a case-insensitive name.
    ///
    /// # Supported Names
    ///
    /// | Input | Family |
    /// |-------|--------|
    /// | `"haar"` | [`WaveletFamily::Haar`] |
    /// | `"db1"`..`"db4"` | [`WaveletFamily::Daubechies`] |
    /// | `"sym2"`..`"sym4"` | [`WaveletFamily::Symlet`] |
    /// | `"coif1"`, `"coif2"` | [`WaveletFamily::Coiflet`] |
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::UnsupportedWavelet`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, DwtError> {
        let lower = name.trim().to_lowercase();
        let unsupported = || DwtError::UnsupportedWavelet(name.to_string());
        let family = if lower == "haar" {
            WaveletFamily::Haar
        } else if let Some(order) = lower.strip_prefix("coif") {
            WaveletFamily::Coiflet(order.parse().map_err(|_| unsupported())?)
        } else if let Some(order) = lower.strip_prefix("sym") {
            WaveletFamily::Symlet(order.parse().map_err(|_| unsupported())?)
        } else if let Some(order) = lower.strip_prefix("db") {
            WaveletFamily::Daubechies(order.parse().map_err(|_| unsupported())?)
        } else {
            return Err(unsupported());
        };
        Self::new(family).map_err(|_| unsupported())
    }

    /// Returns the wavelet family.
    pub fn family(&self) -> WaveletFamily {
        self.family
    }

    /// Returns the canonical short name, e.g. `"db2"`.
    pub fn name(&self) -> String {
        self.family.to_string()
    }

    /// Returns the filter length (number of taps).
    pub fn filter_len(&self) -> usize {
        self.dec_lo.len()
    }

    /// Returns the decomposition low-pass filter.
    pub fn dec_lo(&self) -> &[f64] {
        &self.dec_lo
    }

    /// Returns the decomposition high-pass filter.
    pub fn dec_hi(&self) -> &[f64] {
        &self.dec_hi
    }

    /// Returns the reconstruction low-pass filter.
    pub fn rec_lo(&self) -> &[f64] {
        &self.rec_lo
    }

    /// Returns the reconstruction high-pass filter.
    pub fn rec_hi(&self) -> &[f64] {
        &self.rec_hi
    }
}

impl fmt::Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.family.fmt(f)
    }
}
