//! Error types for the atrous-swt crate.

use atrous_dwt::DwtError;

/// Error type for all fallible operations in the atrous-swt crate.
///
/// Every variant except [`SwtError::Dwt`] is raised by the eager
/// validation that runs before any transform work, so a failed call never
/// leaves partial output behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwtError {
    /// Returned when an axis lies outside `[-ndim, ndim)`.
    #[error("axis {axis} is out of range for a {ndim}-dimensional array")]
    AxisOutOfRange {
        /// Axis as supplied by the caller.
        axis: isize,
        /// Dimensionality of the data.
        ndim: usize,
    },

    /// Returned when the same axis appears more than once.
    #[error("axes must be unique, got {axes:?}")]
    DuplicateAxes {
        /// Axes as supplied by the caller.
        axes: Vec<isize>,
    },

    /// Returned when an explicit axis set is empty.
    #[error("at least one axis must be transformed")]
    EmptyAxes,

    /// Returned for zero-dimensional input.
    #[error("input data must be at least 1-dimensional")]
    ZeroDimensional,

    /// Returned when the input has fewer dimensions than requested axes.
    #[error("input has {ndim} dimension(s), fewer than the {n_axes} axes requested")]
    TooFewDimensions {
        /// Dimensionality of the data.
        ndim: usize,
        /// Number of axes requested.
        n_axes: usize,
    },

    /// Returned when a per-axis wavelet list has the wrong length.
    #[error("expected {expected} wavelets (one per axis), got {got}")]
    WaveletCount {
        /// Number of transformed axes.
        expected: usize,
        /// Number of wavelets supplied.
        got: usize,
    },

    /// Returned when an explicit decomposition level is zero.
    #[error("decomposition level must be at least 1, got {0}")]
    InvalidLevel(usize),

    /// Returned when no level can be chosen automatically.
    #[error("no feasible decomposition level: maximum is {max}, start level is {start_level}")]
    NoFeasibleLevel {
        /// Maximum level allowed by the shape and filters.
        max: usize,
        /// Requested start level.
        start_level: usize,
    },

    /// Returned when `2^(start_level + level)` overflows.
    #[error("decomposition depth {0} is too large")]
    LevelTooHigh(usize),

    /// Returned when a transformed axis length is not a multiple of the
    /// coarsest dilation.
    #[error("length {len} along axis {axis} is not a positive multiple of {required}")]
    IndivisibleLength {
        /// Transformed axis.
        axis: usize,
        /// Length along that axis.
        len: usize,
        /// Required divisor.
        required: usize,
    },

    /// Returned when sub-band arrays disagree in shape.
    #[error("sub-band shape mismatch at level {level}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Index of the offending level in the decomposition.
        level: usize,
        /// Shape of the reference array.
        expected: Vec<usize>,
        /// Shape of the mismatching array.
        got: Vec<usize>,
    },

    /// Returned when a level holds a number of sub-bands other than `2^k`.
    #[error("expected {expected} sub-bands for {n_axes} axes, got {got}")]
    BandCount {
        /// Required number of sub-bands.
        expected: usize,
        /// Number of transformed axes.
        n_axes: usize,
        /// Number of sub-bands supplied.
        got: usize,
    },

    /// Returned when the inverse is asked for a different number of axes
    /// than the decomposition covers.
    #[error(
        "the decomposition covers {found} axes but {requested} were requested for reconstruction"
    )]
    AxisCountMismatch {
        /// Axes found in the sub-band keys.
        found: usize,
        /// Axes requested by the caller.
        requested: usize,
    },

    /// Returned when an inverse is given no levels.
    #[error("decomposition contains no levels")]
    EmptyDecomposition,

    /// Returned when a textual sub-band key is malformed.
    #[error("invalid sub-band key '{0}'")]
    InvalidSubbandKey(String),

    /// Returned when real and imaginary results cannot be recombined.
    #[error("real and imaginary parts differ in structure")]
    ComplexPartsMismatch,

    /// Wraps an error from the single-axis primitives.
    #[error(transparent)]
    Dwt(#[from] DwtError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_axis_out_of_range() {
        let err = SwtError::AxisOutOfRange { axis: -3, ndim: 2 };
        assert_eq!(
            err.to_string(),
            "axis -3 is out of range for a 2-dimensional array"
        );
    }

    #[test]
    fn error_duplicate_axes() {
        let err = SwtError::DuplicateAxes { axes: vec![0, 0] };
        assert_eq!(err.to_string(), "axes must be unique, got [0, 0]");
    }

    #[test]
    fn error_indivisible_length() {
        let err = SwtError::IndivisibleLength {
            axis: 1,
            len: 6,
            required: 4,
        };
        assert_eq!(
            err.to_string(),
            "length 6 along axis 1 is not a positive multiple of 4"
        );
    }

    #[test]
    fn error_shape_mismatch() {
        let err = SwtError::ShapeMismatch {
            level: 1,
            expected: vec![4, 4],
            got: vec![4, 2],
        };
        assert_eq!(
            err.to_string(),
            "sub-band shape mismatch at level 1: expected [4, 4], got [4, 2]"
        );
    }

    #[test]
    fn error_axis_count_mismatch() {
        let err = SwtError::AxisCountMismatch {
            found: 2,
            requested: 1,
        };
        assert_eq!(
            err.to_string(),
            "the decomposition covers 2 axes but 1 were requested for reconstruction"
        );
    }

    #[test]
    fn error_wraps_dwt() {
        let err: SwtError = DwtError::UnsupportedWavelet("bior1.3".into()).into();
        assert_eq!(err.to_string(), "unsupported wavelet: bior1.3");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SwtError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SwtError>();
    }
}
