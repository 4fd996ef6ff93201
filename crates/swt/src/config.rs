//! Forward transform configuration.

use crate::selector::WaveletSelector;

/// Configuration for a stationary wavelet decomposition.
///
/// When `level` is omitted, the deepest level feasible for every
/// transformed axis (see [`atrous_dwt::swt_max_level`]) minus the start
/// level is used. The automatic depth is therefore counted from
/// `start_level`: with a maximum of 4 and `start_level = 1`, three levels
/// are computed. If nothing is left, the decomposition fails with
/// [`SwtError::NoFeasibleLevel`](crate::SwtError::NoFeasibleLevel).
///
/// # Example
///
/// ```ignore
/// use atrous_swt::{SwtConfig, WaveletSelector};
///
/// let config = SwtConfig::new(WaveletSelector::from_name("db2")?)
///     .with_level(3)
///     .with_start_level(1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SwtConfig {
    wavelet: WaveletSelector,
    level: Option<usize>,
    start_level: usize,
}

impl SwtConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `level = None` (auto), `start_level = 0`.
    pub fn new(wavelet: impl Into<WaveletSelector>) -> Self {
        Self {
            wavelet: wavelet.into(),
            level: None,
            start_level: 0,
        }
    }

    /// Sets the number of decomposition levels explicitly.
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the level at which decomposition starts.
    pub fn with_start_level(mut self, start_level: usize) -> Self {
        self.start_level = start_level;
        self
    }

    /// Returns the wavelet selector.
    pub fn wavelet(&self) -> &WaveletSelector {
        &self.wavelet
    }

    /// Returns the explicit number of levels, if set.
    pub fn level(&self) -> Option<usize> {
        self.level
    }

    /// Returns the start level.
    pub fn start_level(&self) -> usize {
        self.start_level
    }
}
