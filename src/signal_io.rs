//! Signal and coefficient files.
//!
//! Signals are delimited text: one row per line, blank lines and lines
//! starting with `#` skipped. A single row reads as a 1-D signal, several
//! rows as a 2-D one. Coefficients are JSON with one band map per level,
//! keyed by sub-band strings such as `"ad"`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use atrous_swt::{LevelCoeffs, SubbandKey, WaveletSelector};

/// Reads a 1-D or 2-D signal from delimited text.
pub fn read_signal(path: &Path, delimiter: Option<char>) -> Result<ArrayD<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read signal: {}", path.display()))?;
    parse_signal(&text, delimiter).with_context(|| format!("invalid signal: {}", path.display()))
}

fn parse_signal(text: &str, delimiter: Option<char>) -> Result<ArrayD<f64>> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = match delimiter {
            Some(d) => line.split(d).map(str::trim).collect(),
            None => line.split_whitespace().collect(),
        };
        let row = fields
            .iter()
            .map(|f| f.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("line {}: not a number", lineno + 1))?;
        ensure!(
            row.iter().all(|v| v.is_finite()),
            "line {}: non-finite value",
            lineno + 1
        );
        if let Some(first) = rows.first() {
            ensure!(
                row.len() == first.len(),
                "line {}: expected {} values, got {}",
                lineno + 1,
                first.len(),
                row.len()
            );
        }
        rows.push(row);
    }
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if n_rows == 0 || n_cols == 0 {
        bail!("signal is empty");
    }
    let shape: Vec<usize> = if n_rows == 1 {
        vec![n_cols]
    } else {
        vec![n_rows, n_cols]
    };
    let values = rows.into_iter().flatten().collect();
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), values)?)
}

/// Writes a 1-D or 2-D signal as delimited text.
pub fn write_signal(path: &Path, signal: &ArrayD<f64>, delimiter: Option<char>) -> Result<()> {
    let sep = delimiter.map_or_else(|| " ".to_string(), |d| d.to_string());
    let text = match signal.ndim() {
        1 => join_row(signal.iter(), &sep) + "\n",
        2 => signal
            .outer_iter()
            .map(|row| join_row(row.iter(), &sep) + "\n")
            .collect(),
        n => bail!("only 1-D and 2-D signals can be written as text, got {n}-D"),
    };
    std::fs::write(path, text)
        .with_context(|| format!("failed to write signal: {}", path.display()))
}

fn join_row<'a>(values: impl Iterator<Item = &'a f64>, sep: &str) -> String {
    values.map(f64::to_string).collect::<Vec<_>>().join(sep)
}

/// Serialized form of a stationary decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoeffFile {
    /// Wavelet names, one entry or one per transformed axis.
    pub wavelets: Vec<String>,
    /// Transformed axes, normalized.
    pub axes: Vec<usize>,
    /// Shape of every band.
    pub shape: Vec<usize>,
    /// Start level used for the decomposition.
    pub start_level: usize,
    /// Levels, coarsest first; each maps a sub-band key to row-major values.
    pub levels: Vec<BTreeMap<String, Vec<f64>>>,
}

impl CoeffFile {
    /// Captures a decomposition.
    pub fn from_levels(
        levels: &[LevelCoeffs<f64>],
        wavelet: &WaveletSelector,
        axes: Vec<usize>,
        start_level: usize,
    ) -> Self {
        let shape = levels.first().map_or_else(Vec::new, |l| l.shape().to_vec());
        let levels: Vec<BTreeMap<String, Vec<f64>>> = levels
            .iter()
            .map(|level| {
                level
                    .iter()
                    .map(|(key, band)| (key.to_string(), band.iter().copied().collect()))
                    .collect()
            })
            .collect();
        Self {
            wavelets: wavelet.names(),
            axes,
            shape,
            start_level,
            levels,
        }
    }

    /// Rebuilds the wavelet selector.
    pub fn selector(&self) -> Result<WaveletSelector> {
        crate::convert::parse_wavelets(&self.wavelets)
    }

    /// Axes as signed values for the inverse transform.
    pub fn signed_axes(&self) -> Result<Vec<isize>> {
        self.axes
            .iter()
            .map(|&a| isize::try_from(a).with_context(|| format!("axis {a} out of range")))
            .collect()
    }

    /// Rebuilds the per-level coefficient containers.
    pub fn to_levels(&self) -> Result<Vec<LevelCoeffs<f64>>> {
        let n_axes = self.axes.len();
        let n_bands = u32::try_from(n_axes)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .with_context(|| format!("too many axes: {n_axes}"))?;
        self.levels
            .iter()
            .enumerate()
            .map(|(i, bands)| -> Result<LevelCoeffs<f64>> {
                let mut ordered: Vec<Option<ArrayD<f64>>> = vec![None; n_bands];
                for (text, values) in bands {
                    let key: SubbandKey = text.parse()?;
                    ensure!(
                        key.n_axes() == n_axes,
                        "level {i}: key {text:?} does not span {n_axes} axes"
                    );
                    let slot = ordered
                        .get_mut(key.index())
                        .with_context(|| format!("level {i}: unexpected key {text:?}"))?;
                    let band = ArrayD::from_shape_vec(IxDyn(&self.shape), values.clone())
                        .with_context(|| format!("level {i}: band {text:?} has wrong size"))?;
                    *slot = Some(band);
                }
                let bands = ordered
                    .into_iter()
                    .collect::<Option<Vec<_>>>()
                    .with_context(|| format!("level {i}: missing sub-bands"))?;
                Ok(LevelCoeffs::new(n_axes, bands)?)
            })
            .collect()
    }
}

/// Writes a coefficient file as pretty-printed JSON.
pub fn write_coeffs(path: &Path, coeffs: &CoeffFile) -> Result<()> {
    let json = serde_json::to_string_pretty(coeffs).context("failed to serialize coefficients")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write coefficients: {}", path.display()))
}

/// Reads a coefficient file.
pub fn read_coeffs(path: &Path) -> Result<CoeffFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read coefficients: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse coefficients: {}", path.display()))
}
