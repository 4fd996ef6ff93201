//! Axis normalization and validation.

use crate::error::SwtError;

/// Normalizes a possibly negative axis into `[0, ndim)`.
///
/// # Errors
///
/// Returns [`SwtError::AxisOutOfRange`] if `axis` is outside `[-ndim, ndim)`.
pub fn normalize_axis(axis: isize, ndim: usize) -> Result<usize, SwtError> {
    let out_of_range = SwtError::AxisOutOfRange { axis, ndim };
    let ndim_signed = isize::try_from(ndim).map_err(|_| out_of_range.clone())?;
    let resolved = if axis < 0 { axis + ndim_signed } else { axis };
    if (0..ndim_signed).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(out_of_range)
    }
}

/// Resolves an optional axis set into distinct axes in `[0, ndim)`.
///
/// `None` selects every axis in order. Checks run in a fixed order so the
/// reported error is deterministic.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SwtError::ZeroDimensional`] | `ndim == 0` |
/// | [`SwtError::EmptyAxes`] | `axes` is `Some(&[])` |
/// | [`SwtError::DuplicateAxes`] | an axis repeats, before or after normalization |
/// | [`SwtError::TooFewDimensions`] | more axes than dimensions |
/// | [`SwtError::AxisOutOfRange`] | an axis outside `[-ndim, ndim)` |
pub fn normalize_axes(axes: Option<&[isize]>, ndim: usize) -> Result<Vec<usize>, SwtError> {
    if ndim == 0 {
        return Err(SwtError::ZeroDimensional);
    }
    let Some(axes) = axes else {
        return Ok((0..ndim).collect());
    };
    if axes.is_empty() {
        return Err(SwtError::EmptyAxes);
    }
    let duplicate = || SwtError::DuplicateAxes {
        axes: axes.to_vec(),
    };
    if has_duplicates(axes) {
        return Err(duplicate());
    }
    if axes.len() > ndim {
        return Err(SwtError::TooFewDimensions {
            ndim,
            n_axes: axes.len(),
        });
    }
    let resolved = axes
        .iter()
        .map(|&a| normalize_axis(a, ndim))
        .collect::<Result<Vec<_>, _>>()?;
    if has_duplicates(&resolved) {
        return Err(duplicate());
    }
    Ok(resolved)
}

/// Returns `2^depth`.
///
/// # Errors
///
/// Returns [`SwtError::LevelTooHigh`] if the power overflows `usize`.
pub(crate) fn dilation(depth: usize) -> Result<usize, SwtError> {
    u32::try_from(depth)
        .ok()
        .and_then(|d| 1usize.checked_shl(d))
        .ok_or(SwtError::LevelTooHigh(depth))
}

/// Checks that every transformed axis length is a positive multiple of
/// `2^depth`.
///
/// # Errors
///
/// Returns [`SwtError::LevelTooHigh`] if `2^depth` overflows and
/// [`SwtError::IndivisibleLength`] for the first offending axis.
pub(crate) fn check_divisible(shape: &[usize], axes: &[usize], depth: usize) -> Result<(), SwtError> {
    let required = dilation(depth)?;
    for &axis in axes {
        let len = shape[axis];
        if len == 0 || len % required != 0 {
            return Err(SwtError::IndivisibleLength {
                axis,
                len,
                required,
            });
        }
    }
    Ok(())
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].contains(a))
}
