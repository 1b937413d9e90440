//! Nested-loop shapes from the complexity notes and the growth of each.

use alloc::vec::Vec;

use num_traits::{PrimInt, Zero, cast};
use tracing::debug;

use crate::{Complexity, Counted, Error, Result};

/// Growth class of [`product_grid`]
pub const PRODUCT_GRID_COMPLEXITY: Complexity = Complexity::Quadratic;

/// Growth class of [`clear_upper_triangle`]
pub const CLEAR_UPPER_TRIANGLE_COMPLEXITY: Complexity = Complexity::Quadratic;

/// Growth class of [`triangular_iterations`]
pub const TRIANGULAR_ITERATIONS_COMPLEXITY: Complexity = Complexity::Quadratic;

/// Growth class of [`halving_iterations`]
pub const HALVING_ITERATIONS_COMPLEXITY: Complexity = Complexity::Linearithmic;

/// Builds an `n x n` grid with `grid[i][j] = i * j`, tallying primitive operations
///
/// Each `for` loop costs 1 to initialise, 1 per condition check and 1 per
/// increment; each cell costs 3 (multiply, index, assign). In total that is
/// `5n^2 + 4n + 2`.
///
/// # Arguments
///
/// * `n` - The grid side
///
/// # Returns
///
/// * `Result<Counted<Vec<Vec<T>>>>` - The grid with its tally, or
///   [`Error::Overflow`] if a product does not fit `T`
///
/// # Examples
///
/// ```
/// # use complexity_examples::product_grid;
/// let grid = product_grid::<u32>(3).unwrap();
/// assert_eq!(grid.value, [[0, 0, 0], [0, 1, 2], [0, 2, 4]]);
/// assert_eq!(grid.ops, 59);
/// ```
pub fn product_grid<T: PrimInt>(n: usize) -> Result<Counted<Vec<Vec<T>>>> {
    let overflow = || Error::Overflow { n: n as u64 };
    let mut grid = vec![vec![T::zero(); n]; n];
    let mut ops = 0;

    ops += 1;
    for (i, row) in grid.iter_mut().enumerate() {
        ops += 2;
        let i: T = cast(i).ok_or_else(overflow)?;
        ops += 1;
        for (j, cell) in row.iter_mut().enumerate() {
            ops += 2;
            let j: T = cast(j).ok_or_else(overflow)?;
            *cell = i.checked_mul(&j).ok_or_else(overflow)?;
            ops += 3;
        }
        ops += 1;
    }
    ops += 1;

    debug!(n, ops, "product grid built");
    Ok(Counted::new(grid, ops))
}

/// Zeroes the upper triangle of a square grid, diagonal included
///
/// The outer index walks from the last row up to the first and the inner
/// index from the row index to the end of the row, so row `i` clears
/// `n - i` cells.
///
/// # Arguments
///
/// * `grid` - The grid, every row at least as long as the grid is tall
///
/// # Returns
///
/// * `Result<usize>` - The number of cells cleared, `n(n + 1) / 2`, or
///   [`Error::RaggedGrid`] naming the first short row
///
/// # Examples
///
/// ```
/// # use complexity_examples::clear_upper_triangle;
/// let mut grid = vec![vec![1, 2], vec![3, 4]];
/// assert_eq!(clear_upper_triangle(&mut grid), Ok(3));
/// assert_eq!(grid, [[0, 0], [3, 0]]);
/// ```
pub fn clear_upper_triangle<T: Zero>(grid: &mut [Vec<T>]) -> Result<usize> {
    let n = grid.len();
    if let Some((row, cells)) = grid.iter().enumerate().find(|(_, cells)| cells.len() < n) {
        return Err(Error::RaggedGrid {
            row,
            len: cells.len(),
            expected: n,
        });
    }

    let mut cleared = 0;
    for (i, row) in grid.iter_mut().enumerate().rev() {
        for cell in &mut row[i..n] {
            *cell = T::zero();
            cleared += 1;
        }
    }
    Ok(cleared)
}

/// Counts the iterations of `for i in 1..=n { for j in 1..=i { .. } }`
///
/// # Examples
///
/// ```
/// # use complexity_examples::triangular_iterations;
/// assert_eq!(triangular_iterations(4), 10);
/// ```
pub fn triangular_iterations(n: usize) -> usize {
    let mut count = 0;
    for i in 1..=n {
        for _ in 1..=i {
            count += 1;
        }
    }
    count
}

/// Counts the iterations of an outer linear loop around an inner halving loop
///
/// The inner loop starts at `n` and halves while above one, running
/// `floor(log2 n)` times for each of the `n` outer iterations.
///
/// # Examples
///
/// ```
/// # use complexity_examples::halving_iterations;
/// assert_eq!(halving_iterations(8), 24);
/// ```
pub fn halving_iterations(n: usize) -> usize {
    let mut count = 0;
    for _ in 0..n {
        let mut j = n;
        while j > 1 {
            j /= 2;
            count += 1;
        }
    }
    count
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;

    #[test]
    fn test_product_grid_values() {
        let grid = product_grid::<u64>(4).unwrap().value;
        for (i, row) in grid.iter().enumerate() {
            assert_eq!(row.len(), 4);
            for (j, &cell) in row.iter().enumerate() {
                assert_eq!(cell, (i * j) as u64);
            }
        }
    }

    #[test]
    fn test_product_grid_tally() {
        for n in 0..12 {
            let counted = product_grid::<u32>(n).unwrap();
            assert_eq!(counted.ops, 5 * n * n + 4 * n + 2, "n = {n}");
        }
        assert_eq!(product_grid::<u8>(0).unwrap().value.len(), 0);
        assert_eq!(PRODUCT_GRID_COMPLEXITY, Complexity::Quadratic);
    }

    #[test]
    fn test_product_grid_overflow() {
        // 15 * 15 = 225 fits, 16 * 16 does not
        assert!(product_grid::<u8>(16).is_ok());
        assert_eq!(product_grid::<u8>(17), Err(Error::Overflow { n: 17 }));
        assert!(product_grid::<i8>(12).is_ok());
        assert_eq!(product_grid::<i8>(13), Err(Error::Overflow { n: 13 }));
    }

    #[test]
    fn test_clear_upper_triangle() {
        let mut grid = product_grid::<i32>(3).unwrap().value;
        grid.iter_mut().flatten().for_each(|c| *c += 1);
        assert_eq!(clear_upper_triangle(&mut grid), Ok(6));
        assert_eq!(grid, [[0, 0, 0], [1, 0, 0], [1, 3, 0]]);
    }

    #[test]
    fn test_clear_upper_triangle_counts() {
        for n in 0..10 {
            let mut grid = vec![vec![7_u8; n]; n];
            assert_eq!(clear_upper_triangle(&mut grid), Ok(n * (n + 1) / 2));
        }
        assert_eq!(CLEAR_UPPER_TRIANGLE_COMPLEXITY, Complexity::Quadratic);
    }

    #[test]
    fn test_clear_upper_triangle_wide_rows() {
        let mut grid = vec![vec![1, 1, 1], vec![1, 1, 1]];
        assert_eq!(clear_upper_triangle(&mut grid), Ok(3));
        assert_eq!(grid, [[0, 0, 1], [1, 0, 1]]);
    }

    #[test]
    fn test_clear_upper_triangle_ragged() {
        let mut grid = vec![vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]];
        assert_eq!(
            clear_upper_triangle(&mut grid),
            Err(Error::RaggedGrid {
                row: 1,
                len: 2,
                expected: 3
            })
        );
        assert!(grid.iter().flatten().all(|&c| c == 1));
    }

    #[test]
    fn test_triangular_iterations() {
        for n in 0..20 {
            assert_eq!(triangular_iterations(n), n * (n + 1) / 2);
        }
        assert_eq!(TRIANGULAR_ITERATIONS_COMPLEXITY, Complexity::Quadratic);
    }

    #[test]
    fn test_halving_iterations() {
        assert_eq!(halving_iterations(0), 0);
        assert_eq!(halving_iterations(1), 0);
        assert_eq!(halving_iterations(2), 2);
        assert_eq!(halving_iterations(10), 30);
        for n in 1..64_usize {
            assert_eq!(halving_iterations(n), n * n.ilog2() as usize, "n = {n}");
        }
        assert_eq!(HALVING_ITERATIONS_COMPLEXITY, Complexity::Linearithmic);
    }
}
