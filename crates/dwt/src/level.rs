//! Maximum feasible stationary decomposition depth.

/// Computes the maximum stationary wavelet decomposition level for a
/// signal of length `len` and a filter of length `filter_len`.
///
/// The level `J` is the largest value such that `len` is a multiple of
/// `2^J` and `len / 2^J >= filter_len`. Returns 0 when no level is
/// feasible.
///
/// # Example
///
/// ```ignore
/// use atrous_dwt::swt_max_level;
///
/// assert_eq!(swt_max_level(256, 8), 5);
/// ```
pub fn swt_max_level(len: usize, filter_len: usize) -> usize {
    if len == 0 || filter_len == 0 {
        return 0;
    }
    let divisible = len.trailing_zeros() as usize;
    (1..=divisible)
        .rev()
        .find(|&level| len >> level >= filter_len)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_level_filter8_256() {
        assert_eq!(swt_max_level(256, 8), 5);
    }

    #[test]
    fn max_level_haar_256() {
        assert_eq!(swt_max_level(256, 2), 7);
    }

    #[test]
    fn max_level_limited_by_divisibility() {
        // 24 = 8 * 3: only three halvings are exact.
        assert_eq!(swt_max_level(24, 2), 3);
        assert_eq!(swt_max_level(12, 2), 2);
    }

    #[test]
    fn max_level_odd_length() {
        assert_eq!(swt_max_level(255, 2), 0);
    }

    #[test]
    fn max_level_short_series() {
        assert_eq!(swt_max_level(4, 8), 0);
        assert_eq!(swt_max_level(8, 4), 1);
    }

    #[test]
    fn max_level_degenerate_inputs() {
        assert_eq!(swt_max_level(0, 2), 0);
        assert_eq!(swt_max_level(16, 0), 0);
    }
}
