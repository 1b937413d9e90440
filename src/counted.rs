use core::fmt;

/// Asymptotic growth classes used to label the worked examples
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    /// `O(1)`
    Constant,
    /// `O(log n)`
    Logarithmic,
    /// `O(n)`
    Linear,
    /// `O(n log n)`
    Linearithmic,
    /// `O(n^2)`
    Quadratic,
    /// `O(2^n)`
    Exponential,
}

impl Complexity {
    /// Returns the big-O notation for the class
    ///
    /// # Returns
    ///
    /// * `&'static str` - The notation, e.g. `O(n log n)`
    pub const fn notation(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n^2)",
            Self::Exponential => "O(2^n)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// A computed value paired with the tally of work spent producing it
///
/// What a unit of `ops` means is documented on each routine returning a
/// `Counted`: primitive operations for the loop examples, calls for the
/// recursive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counted<T> {
    /// The computed value
    pub value: T,
    /// Units of work tallied while computing `value`
    pub ops: usize,
}

impl<T> Counted<T> {
    /// Creates a new `Counted` from a value and its tally
    ///
    /// # Arguments
    ///
    /// * `value` - The computed value
    /// * `ops` - The tally
    ///
    /// # Returns
    ///
    /// * `Self` - The counted value
    pub const fn new(value: T, ops: usize) -> Self {
        Self { value, ops }
    }

    /// Discards the tally and returns the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Maps the value while keeping the tally
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Counted<U> {
        Counted {
            value: f(self.value),
            ops: self.ops,
        }
    }
}
