//! Error types for the atrous-dwt crate.

/// Error type for all fallible operations in the atrous-dwt crate.
///
/// Covers unknown wavelet names and the size and shape checks performed
/// before any filtering work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DwtError {
    /// Returned when a wavelet name or family order is not recognized.
    #[error("unsupported wavelet: {0}")]
    UnsupportedWavelet(String),

    /// Returned when a decimated transform receives an empty or odd-length signal.
    #[error("signal length must be even and non-zero, got {len}")]
    OddLength {
        /// Length of the offending signal.
        len: usize,
    },

    /// Returned when a transform axis has no samples.
    #[error("axis {axis} has length zero")]
    EmptyAxis {
        /// Axis with zero length.
        axis: usize,
    },

    /// Returned when an axis index is not smaller than the array dimensionality.
    #[error("axis {axis} out of range for {ndim}-dimensional array")]
    AxisOutOfRange {
        /// Requested axis.
        axis: usize,
        /// Dimensionality of the array.
        ndim: usize,
    },

    /// Returned when the dilation `2^level` does not fit in a `usize`.
    #[error("dilation level {0} is too large")]
    LevelOverflow(usize),

    /// Returned when approximation and detail coefficients disagree in shape.
    #[error("approximation shape {approx:?} does not match detail shape {detail:?}")]
    ShapeMismatch {
        /// Shape of the approximation coefficients.
        approx: Vec<usize>,
        /// Shape of the detail coefficients.
        detail: Vec<usize>,
    },

    /// Returned when a separable inverse gets the wrong number of sub-bands.
    #[error("expected {expected} sub-bands for {n_axes} axes, got {got}")]
    BandCount {
        /// Required number of sub-bands (`2^n_axes`).
        expected: usize,
        /// Number of transformed axes.
        n_axes: usize,
        /// Number of sub-bands supplied.
        got: usize,
    },

    /// Returned when the number of wavelets does not match the number of axes.
    #[error("expected {expected} wavelets, got {got}")]
    WaveletCount {
        /// Number of axes being transformed.
        expected: usize,
        /// Number of wavelets supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unsupported_wavelet() {
        let err = DwtError::UnsupportedWavelet("bior2.2".into());
        assert_eq!(err.to_string(), "unsupported wavelet: bior2.2");
    }

    #[test]
    fn error_odd_length() {
        let err = DwtError::OddLength { len: 7 };
        assert_eq!(
            err.to_string(),
            "signal length must be even and non-zero, got 7"
        );
    }

    #[test]
    fn error_shape_mismatch() {
        let err = DwtError::ShapeMismatch {
            approx: vec![4, 2],
            detail: vec![4, 3],
        };
        assert_eq!(
            err.to_string(),
            "approximation shape [4, 2] does not match detail shape [4, 3]"
        );
    }

    #[test]
    fn error_band_count() {
        let err = DwtError::BandCount {
            expected: 4,
            n_axes: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "expected 4 sub-bands for 2 axes, got 3");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DwtError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DwtError>();
    }
}
