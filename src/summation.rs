//! Linear accumulation, the first loop analysed in the complexity notes.

use num_traits::{Float, Num};
use tracing::debug;

use crate::{Complexity, Counted, Kbn};

/// Growth class of [`sum`], [`sum_counted`] and [`sum_compensated`]
pub const SUM_COMPLEXITY: Complexity = Complexity::Linear;

/// Adds every value left to right
///
/// # Arguments
///
/// * `values` - The values to accumulate
///
/// # Returns
///
/// * `T` - The sum, zero for an empty slice
///
/// # Examples
///
/// ```
/// # use complexity_examples::sum;
/// assert_eq!(sum(&[1, 2, 3, 4]), 10);
/// assert_eq!(sum::<i64>(&[]), 0);
/// ```
pub fn sum<T: Num + Copy>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Adds every value while tallying the primitive operations of the loop
///
/// Counts 1 for the accumulator, 1 for the index, `n + 1` condition checks,
/// `n` increments and 3 per body (read, add, assign), which is `5n + 3`.
///
/// # Arguments
///
/// * `values` - The values to accumulate
///
/// # Returns
///
/// * `Counted<T>` - The sum with its operation tally
///
/// # Examples
///
/// ```
/// # use complexity_examples::{Counted, sum_counted};
/// assert_eq!(sum_counted(&[1, 2, 3, 4]), Counted::new(10, 23));
/// ```
pub fn sum_counted<T: Num + Copy>(values: &[T]) -> Counted<T> {
    let mut acc = T::zero();
    let mut ops = 1;

    ops += 1;
    let mut index = 0;
    loop {
        ops += 1;
        if index >= values.len() {
            break;
        }
        acc = acc + values[index];
        ops += 3;
        index += 1;
        ops += 1;
    }

    debug!(n = values.len(), ops, "summation complete");
    Counted::new(acc, ops)
}

/// Adds every value with Kahan-Babuska-Neumaier compensation
///
/// Floating point accumulation drops low order bits once the running sum
/// dwarfs the addends; the compensated sum carries those bits separately.
///
/// # Arguments
///
/// * `values` - The values to accumulate
///
/// # Returns
///
/// * `T` - The compensated sum
///
/// # Examples
///
/// ```
/// # use complexity_examples::sum_compensated;
/// assert_eq!(sum_compensated(&[1.0, 1e100, 1.0, -1e100]), 2.0);
/// ```
pub fn sum_compensated<T: Float + Default>(values: &[T]) -> T {
    let mut acc = Kbn::default();
    for &v in values {
        acc += v;
    }
    acc.total()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_sum_integers() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(sum(&[-5_i32, 5, -5]), -5);
        assert_eq!(sum::<u8>(&[]), 0);
    }

    #[test]
    fn test_sum_floats() {
        assert_approx_eq!(sum(&[0.1, 0.2, 0.3]), 0.6, 1e-12);
    }

    #[test]
    fn test_sum_counted_tally() {
        assert_eq!(sum_counted(&[1, 2, 3, 4]), Counted::new(10, 23));
        assert_eq!(sum_counted::<i32>(&[]), Counted::new(0, 3));
        for n in 0..16_u32 {
            let values: alloc::vec::Vec<u32> = (0..n).collect();
            let counted = sum_counted(&values);
            assert_eq!(counted.value, sum(&values));
            assert_eq!(counted.ops, 5 * n as usize + 3);
        }
        assert_eq!(SUM_COMPLEXITY, Complexity::Linear);
    }

    #[test]
    fn test_sum_compensated_recovers_lost_bits() {
        let values = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(sum(&values), 0.0);
        assert_eq!(sum_compensated(&values), 2.0);
    }

    #[test]
    fn test_sum_compensated_large_offsets() {
        let inputs = [
            1_000_000.1,
            1_000_000.2,
            1_000_000.3,
            1_000_000.4,
            1_000_000.5,
        ];
        assert_approx_eq!(sum_compensated(&inputs), 5_000_001.5, 1e-9);
        assert_eq!(sum_compensated::<f32>(&[]), 0.0);
    }
}
