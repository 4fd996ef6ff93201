//! Lazy Cartesian-product index generation.

/// Iterates over every tuple in `[0, radix)^n_digits`, last digit fastest.
///
/// Used for the per-axis offset combinations and the odd/even phase
/// choices of the inverse transform. Tuples are produced one at a time, so
/// the `radix^n_digits` combinations are never materialized together.
#[derive(Clone, Debug)]
pub(crate) struct Odometer {
    radix: usize,
    digits: Vec<usize>,
    done: bool,
}

impl Odometer {
    pub(crate) fn new(n_digits: usize, radix: usize) -> Self {
        Self {
            radix,
            digits: vec![0; n_digits],
            done: radix == 0,
        }
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.digits.clone();
        self.done = true;
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                self.done = false;
                break;
            }
            *digit = 0;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_two_digits() {
        let all: Vec<_> = Odometer::new(2, 2).collect();
        assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn count_is_radix_pow_digits() {
        assert_eq!(Odometer::new(3, 4).count(), 64);
        assert_eq!(Odometer::new(1, 1).count(), 1);
    }

    #[test]
    fn zero_digits_yield_one_empty_tuple() {
        let all: Vec<_> = Odometer::new(0, 5).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn zero_radix_is_empty() {
        assert_eq!(Odometer::new(2, 0).count(), 0);
    }
}
