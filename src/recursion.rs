//! Recursive factorial and Fibonacci, plus a memoised Fibonacci for contrast.

use ahash::RandomState;
use hashbrown::HashMap;
use num_traits::{PrimInt, cast};
use tracing::{debug, trace};

use crate::{Complexity, Counted, Error, Result};

/// Growth class of [`factorial`]
pub const FACTORIAL_COMPLEXITY: Complexity = Complexity::Linear;

/// Growth class of the naive [`fibonacci`]
pub const FIBONACCI_COMPLEXITY: Complexity = Complexity::Exponential;

/// Growth class of a cold [`FibonacciMemo::get`]
pub const FIBONACCI_MEMO_COMPLEXITY: Complexity = Complexity::Linear;

#[inline]
fn overflow(n: u32) -> Error {
    Error::Overflow { n: n.into() }
}

// Small indices always fit any primitive integer
#[inline]
fn base<T: PrimInt>(n: u32) -> Result<T> {
    cast(n).ok_or_else(|| overflow(n))
}

#[inline]
fn bits<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

// n! >= 2^(n - 1), so anything past bits + 1 cannot fit
#[inline]
fn factorial_fits<T: PrimInt>(n: u32) -> bool {
    n <= bits::<T>() + 1
}

// fib(n) >= 2^((n - 2) / 2), so anything past 2 * bits + 3 cannot fit
#[inline]
fn fibonacci_fits<T: PrimInt>(n: u32) -> bool {
    n <= 2 * bits::<T>() + 3
}

fn factorial_inner<T: PrimInt>(n: u32, calls: &mut usize) -> Result<T> {
    *calls += 1;
    if n <= 1 {
        return Ok(T::one());
    }
    let rest: T = factorial_inner(n - 1, calls)?;
    base::<T>(n)?.checked_mul(&rest).ok_or_else(|| overflow(n))
}

/// Computes `n!` recursively
///
/// # Arguments
///
/// * `n` - The input, `0! = 1! = 1`
///
/// # Returns
///
/// * `Result<T>` - The factorial, or [`Error::Overflow`] naming the first `n`
///   whose factorial does not fit `T`. Inputs too large for any factorial to
///   fit `T` are rejected up front and report `n` itself, without recursing.
///
/// # Examples
///
/// ```
/// # use complexity_examples::{Error, factorial};
/// assert_eq!(factorial::<u64>(10), Ok(3_628_800));
/// assert_eq!(factorial::<u8>(6), Err(Error::Overflow { n: 6 }));
/// assert_eq!(factorial::<u64>(1_000_000), Err(Error::Overflow { n: 1_000_000 }));
/// ```
pub fn factorial<T: PrimInt>(n: u32) -> Result<T> {
    factorial_counted(n).map(Counted::into_value)
}

/// Computes `n!` and counts the recursive calls made, `max(n, 1)`
///
/// # Arguments
///
/// * `n` - The input
///
/// # Returns
///
/// * `Result<Counted<T>>` - The factorial with the number of calls
pub fn factorial_counted<T: PrimInt>(n: u32) -> Result<Counted<T>> {
    if !factorial_fits::<T>(n) {
        return Err(overflow(n));
    }
    let mut calls = 0;
    let value = factorial_inner(n, &mut calls)?;
    debug!(n, calls, "factorial complete");
    Ok(Counted::new(value, calls))
}

fn fibonacci_inner<T: PrimInt>(n: u32, calls: &mut usize) -> Result<T> {
    *calls += 1;
    if n <= 1 {
        return base(n);
    }
    let a: T = fibonacci_inner(n - 1, calls)?;
    let b: T = fibonacci_inner(n - 2, calls)?;
    a.checked_add(&b).ok_or_else(|| overflow(n))
}

/// Computes the `n`th Fibonacci number with the doubly recursive definition
///
/// Every call with `n >= 2` spawns two more, so the call tree grows
/// exponentially. See [`FibonacciMemo`] for the linear counterpart.
///
/// # Arguments
///
/// * `n` - The index, `fib(0) = 0` and `fib(1) = 1`
///
/// # Returns
///
/// * `Result<T>` - The Fibonacci number, or [`Error::Overflow`] if it does not fit `T`.
///   Indices too large for the result to fit `T` are rejected without recursing.
///
/// # Examples
///
/// ```
/// # use complexity_examples::fibonacci;
/// let results: Vec<u32> = (0..10).map(|n| fibonacci(n).unwrap()).collect();
/// assert_eq!(results, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn fibonacci<T: PrimInt>(n: u32) -> Result<T> {
    fibonacci_counted(n).map(Counted::into_value)
}

/// Computes the `n`th Fibonacci number and counts the calls made
///
/// The call count is `2 * fib(n + 1) - 1`.
///
/// # Arguments
///
/// * `n` - The index
///
/// # Returns
///
/// * `Result<Counted<T>>` - The Fibonacci number with the number of calls
///
/// # Examples
///
/// ```
/// # use complexity_examples::{Counted, fibonacci_counted};
/// assert_eq!(fibonacci_counted::<u32>(5), Ok(Counted::new(5, 15)));
/// ```
pub fn fibonacci_counted<T: PrimInt>(n: u32) -> Result<Counted<T>> {
    if !fibonacci_fits::<T>(n) {
        return Err(overflow(n));
    }
    let mut calls = 0;
    let value = fibonacci_inner(n, &mut calls)?;
    debug!(n, calls, "fibonacci complete");
    Ok(Counted::new(value, calls))
}

/// Memoised Fibonacci numbers
///
/// Holds every index computed so far, always a contiguous run starting at
/// zero, so each Fibonacci number is computed at most once across calls.
#[derive(Debug, Clone)]
pub struct FibonacciMemo<T> {
    /// Memoised values; the keys are always exactly `0..len`, so `len` is
    /// the next index to compute
    memo: HashMap<u32, T, RandomState>,
}

impl<T: PrimInt> Default for FibonacciMemo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> FibonacciMemo<T> {
    /// Creates an empty memo
    pub fn new() -> Self {
        Self {
            memo: HashMap::with_hasher(RandomState::default()),
        }
    }

    /// Returns the number of memoised indices
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Returns true if nothing has been memoised yet
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Clears the memo
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The memo object
    pub fn reset(&mut self) -> &mut Self {
        self.memo.clear();
        self
    }

    /// Returns the `n`th Fibonacci number, computing any missing indices
    ///
    /// # Arguments
    ///
    /// * `n` - The index
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The Fibonacci number, or [`Error::Overflow`] if it does not fit `T`
    ///
    /// # Examples
    ///
    /// ```
    /// # use complexity_examples::FibonacciMemo;
    /// let mut memo = FibonacciMemo::<u64>::new();
    /// assert_eq!(memo.get(90), Ok(2_880_067_194_370_816_120));
    /// assert_eq!(memo.len(), 91);
    /// ```
    pub fn get(&mut self, n: u32) -> Result<T> {
        self.get_counted(n).map(Counted::into_value)
    }

    /// Returns the `n`th Fibonacci number and how many indices were newly computed
    ///
    /// # Arguments
    ///
    /// * `n` - The index
    ///
    /// # Returns
    ///
    /// * `Result<Counted<T>>` - The Fibonacci number with the count of fresh computations
    pub fn get_counted(&mut self, n: u32) -> Result<Counted<T>> {
        if let Some(&value) = self.memo.get(&n) {
            trace!(n, "fibonacci memo hit");
            return Ok(Counted::new(value, 0));
        }

        // Keys are exactly 0..len
        let start = self.memo.len() as u32;
        let mut computed = 0;
        let mut value = T::zero();
        for k in start..=n {
            value = if k <= 1 {
                base(k)?
            } else {
                let prev = self.memo.get(&(k - 1)).copied();
                let prev2 = self.memo.get(&(k - 2)).copied();
                prev.zip(prev2)
                    .and_then(|(a, b)| a.checked_add(&b))
                    .ok_or_else(|| overflow(k))?
            };
            self.memo.insert(k, value);
            computed += 1;
        }

        debug!(n, computed, "fibonacci memo filled");
        Ok(Counted::new(value, computed))
    }
}
