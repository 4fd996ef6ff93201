//! Wavelet-per-axis selection.

use atrous_dwt::Wavelet;

use crate::error::SwtError;

/// Chooses the wavelet applied along each transformed axis.
///
/// Either one wavelet broadcast to every axis, or an explicit list with
/// exactly one wavelet per axis, in axis-set order.
///
/// # Example
///
/// ```ignore
/// use atrous_swt::WaveletSelector;
///
/// let same = WaveletSelector::from_name("db2")?;
/// let mixed = WaveletSelector::from_names(&["db2", "haar"])?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum WaveletSelector {
    /// One wavelet for every axis.
    Single(Wavelet),
    /// One wavelet per axis.
    PerAxis(Vec<Wavelet>),
}

impl WaveletSelector {
    /// Builds a single-wavelet selector from a name.
    ///
    /// # Errors
    ///
    /// Returns [`SwtError::Dwt`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, SwtError> {
        Ok(Self::Single(Wavelet::from_name(name)?))
    }

    /// Builds a per-axis selector from names.
    ///
    /// # Errors
    ///
    /// Returns [`SwtError::Dwt`] if any name is not recognized.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SwtError> {
        let wavelets = names
            .iter()
            .map(|n| Wavelet::from_name(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::PerAxis(wavelets))
    }

    /// Resolves the wavelet for each of `n_axes` axes.
    ///
    /// # Errors
    ///
    /// Returns [`SwtError::WaveletCount`] if a per-axis list does not have
    /// exactly `n_axes` entries.
    pub fn for_axes(&self, n_axes: usize) -> Result<Vec<Wavelet>, SwtError> {
        match self {
            Self::Single(w) => Ok(vec![w.clone(); n_axes]),
            Self::PerAxis(ws) if ws.len() == n_axes => Ok(ws.clone()),
            Self::PerAxis(ws) => Err(SwtError::WaveletCount {
                expected: n_axes,
                got: ws.len(),
            }),
        }
    }

    /// Returns the canonical names, one per entry.
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::Single(w) => vec![w.name()],
            Self::PerAxis(ws) => ws.iter().map(Wavelet::name).collect(),
        }
    }
}

impl From<Wavelet> for WaveletSelector {
    fn from(wavelet: Wavelet) -> Self {
        Self::Single(wavelet)
    }
}

impl From<Vec<Wavelet>> for WaveletSelector {
    fn from(wavelets: Vec<Wavelet>) -> Self {
        Self::PerAxis(wavelets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_broadcasts() {
        let sel = WaveletSelector::from_name("db2").unwrap();
        let ws = sel.for_axes(3).unwrap();
        assert_eq!(ws.len(), 3);
        assert!(ws.iter().all(|w| w.name() == "db2"));
    }

    #[test]
    fn per_axis_exact_count() {
        let sel = WaveletSelector::from_names(&["db2", "haar"]).unwrap();
        let ws = sel.for_axes(2).unwrap();
        assert_eq!(ws[0].name(), "db2");
        assert_eq!(ws[1].name(), "haar");
        assert_eq!(sel.names(), vec!["db2".to_string(), "haar".to_string()]);
    }

    #[test]
    fn per_axis_wrong_count() {
        let sel = WaveletSelector::from_names(&["db2", "haar"]).unwrap();
        assert_eq!(
            sel.for_axes(3).unwrap_err(),
            SwtError::WaveletCount {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn unknown_name() {
        let err = WaveletSelector::from_name("mexh").unwrap_err();
        assert!(matches!(err, SwtError::Dwt(_)));
    }
}
