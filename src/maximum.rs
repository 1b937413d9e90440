//! # Running-Maximum Scan
//!
//! The first worked example of the complexity notes: a single left-to-right
//! scan that keeps the largest value seen so far.
//!
//! The scan stops one element early. The loop runs its index from `1` while
//! it is below `n - 1`, so the element at `n - 1` is never inspected. This
//! bound is kept exactly as the annotated analysis counts it; treat it as a
//! probable latent bug in the example rather than intended semantics.

use tracing::{debug, trace};

use crate::{Complexity, Counted, Error, Result};

/// Growth class of [`find_max`] and [`find_max_counted`]
pub const FIND_MAX_COMPLEXITY: Complexity = Complexity::Linear;

// Validates the inputs and returns the element the scan initialises from
#[inline]
fn first_element<T: Copy>(values: &[T], n: usize) -> Result<T> {
    if n > values.len() {
        return Err(Error::CountOutOfBounds {
            count: n,
            len: values.len(),
        });
    }
    values.first().copied().ok_or(Error::EmptySequence)
}

/// Returns the largest of the first `n - 1` values using a linear scan
///
/// The running maximum starts at `values[0]` and is replaced whenever an
/// element at index `1..n - 1` is strictly greater. When `n <= 1` the loop
/// never runs and the first element is returned unchanged.
///
/// # Arguments
///
/// * `values` - The sequence to scan
/// * `n` - The count of elements the scan is bounded by
///
/// # Returns
///
/// * `Result<T>` - The running maximum after the scan, or an error if `values`
///   is empty or `n` exceeds its length
///
/// # Examples
///
/// ```
/// # use complexity_examples::find_max;
/// // The last element is outside the scan bound.
/// assert_eq!(find_max(&[1, 2, 3], 3), Ok(2));
/// assert_eq!(find_max(&[5, 3, 9, 1], 4), Ok(9));
/// assert_eq!(find_max(&[7], 1), Ok(7));
/// ```
pub fn find_max<T: PartialOrd + Copy>(values: &[T], n: usize) -> Result<T> {
    let mut max = first_element(values, n)?;

    for (index, &value) in values.iter().enumerate().take(n.saturating_sub(1)).skip(1) {
        if value > max {
            trace!(index, "running maximum updated");
            max = value;
        }
    }

    Ok(max)
}

/// Runs the same scan as [`find_max`] while tallying primitive operations
///
/// The tally follows the annotated analysis of the loop:
///
/// - 2 for reading and assigning the first element
/// - 1 for initialising the index
/// - 2 per loop-condition check (arithmetic and compare)
/// - 2 per element comparison (read and compare)
/// - 2 per running-maximum update (read and assign)
/// - 2 per index increment (arithmetic and assign)
/// - 1 for the return
///
/// # Arguments
///
/// * `values` - The sequence to scan
/// * `n` - The count of elements the scan is bounded by
///
/// # Returns
///
/// * `Result<Counted<T>>` - The running maximum with its operation tally
///
/// # Examples
///
/// ```
/// # use complexity_examples::{Counted, find_max_counted};
/// assert_eq!(find_max_counted(&[1, 2, 3], 3), Ok(Counted::new(2, 14)));
/// assert_eq!(find_max_counted(&[7], 1), Ok(Counted::new(7, 6)));
/// ```
pub fn find_max_counted<T: PartialOrd + Copy>(values: &[T], n: usize) -> Result<Counted<T>> {
    let mut max = first_element(values, n)?;
    let bound = n.saturating_sub(1);

    let mut index = 1;
    let mut iterations = 0;
    let mut updates = 0;
    while index < bound {
        if values[index] > max {
            trace!(index, "running maximum updated");
            max = values[index];
            updates += 1;
        }
        index += 1;
        iterations += 1;
    }

    let checks = iterations + 1;
    let ops = 2 + 1 + 2 * checks + 2 * iterations + 2 * updates + 2 * iterations + 1;
    debug!(n, iterations, updates, ops, "maximum scan complete");

    Ok(Counted::new(max, ops))
}
