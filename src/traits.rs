//! Core traits for streaming statistics
//!
//! Every statistic implements [`Univariate`]. Statistics that can be combined
//! across stream segments also implement [`Merge`].

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error during statistic merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Statistics have incompatible configurations
    IncompatibleConfig {
        expected: String,
        found: String,
    },
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::IncompatibleConfig { expected, found } => {
                write!(f, "incompatible config: expected {}, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Error when constructing a windowed structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Window size must be at least one
    ZeroSize,
}

impl core::fmt::Display for WindowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WindowError::ZeroSize => write!(f, "window size must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WindowError {}

/// A running computation over a single numeric stream
///
/// Produces one scalar at any point in time. The trait is object safe, so
/// heterogeneous statistics can live side by side:
///
/// ```
/// # #[cfg(feature = "statistics")] {
/// use rollsum::statistics::{RollingSum, Sum};
/// use rollsum::traits::Univariate;
///
/// let mut stats: Vec<Box<dyn Univariate>> =
///     vec![Box::new(Sum::new()), Box::new(RollingSum::new(2))];
///
/// for x in [1.0, 2.0, 3.0] {
///     for stat in stats.iter_mut() {
///         stat.push(x);
///     }
/// }
///
/// assert_eq!(stats[0].get(), 6.0);
/// assert_eq!(stats[1].get(), 5.0);
/// assert_eq!(stats[1].name(), "rolling_2_sum");
/// # }
/// ```
pub trait Univariate: Debug {
    /// Consume one observation
    fn push(&mut self, x: f64);

    /// Current value of the statistic
    fn get(&self) -> f64;

    /// Descriptive label, e.g. `"sum"`
    fn name(&self) -> String;

    /// Reset to the freshly constructed state, keeping configuration
    fn clear(&mut self);

    /// Number of observations consumed
    fn count(&self) -> u64;

    /// Check if no observation has been consumed
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Consume one observation and return `self` for chaining
    ///
    /// ```
    /// # #[cfg(feature = "statistics")] {
    /// use rollsum::statistics::Sum;
    /// use rollsum::traits::Univariate;
    ///
    /// let mut sum = Sum::new();
    /// assert_eq!(sum.update(1.0).update(2.5).get(), 3.5);
    /// # }
    /// ```
    fn update(&mut self, x: f64) -> &mut Self
    where
        Self: Sized,
    {
        self.push(x);
        self
    }
}

/// Statistics that can absorb another instance
pub trait Merge {
    /// Merge `other` into `self`
    ///
    /// `other` is treated as having seen the stream segment that follows the
    /// one seen by `self`. Returns an error if the two are incompatible.
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = MergeError::IncompatibleConfig {
            expected: "window_size=3".into(),
            found: "window_size=4".into(),
        };
        assert_eq!(
            err.to_string(),
            "incompatible config: expected window_size=3, found window_size=4"
        );
        assert_eq!(WindowError::ZeroSize.to_string(), "window size must be positive");
    }

    #[derive(Debug, Default)]
    struct Last {
        value: f64,
        count: u64,
    }

    impl Univariate for Last {
        fn push(&mut self, x: f64) {
            self.value = x;
            self.count += 1;
        }

        fn get(&self) -> f64 {
            self.value
        }

        fn name(&self) -> String {
            "last".into()
        }

        fn clear(&mut self) {
            *self = Self::default();
        }

        fn count(&self) -> u64 {
            self.count
        }
    }

    #[test]
    fn test_provided_methods() {
        let mut last = Last::default();
        assert!(last.is_empty());

        assert_eq!(last.update(4.0).update(-1.0).get(), -1.0);
        assert_eq!(last.count(), 2);
        assert!(!last.is_empty());

        last.clear();
        assert!(last.is_empty());
    }
}
