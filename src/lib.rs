#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod error;
pub use error::{Error, Result};

mod counted;
pub use counted::{Complexity, Counted};

pub mod maximum;
pub use maximum::{find_max, find_max_counted};

pub mod summation;
pub use summation::{sum, sum_compensated, sum_counted};

pub mod recursion;
pub use recursion::{FibonacciMemo, factorial, factorial_counted, fibonacci, fibonacci_counted};

pub mod loops;
pub use loops::{clear_upper_triangle, halving_iterations, product_grid, triangular_iterations};
