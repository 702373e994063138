//! Running and rolling sums
//!
//! [`Sum`] accumulates an unbounded stream. [`RollingSum`] keeps the sum of
//! the last `window_size` values by correcting its total as values leave the
//! window, so both update in O(1).

use crate::traits::{Merge, MergeError, Univariate, WindowError};
use crate::window::Window;

#[cfg(feature = "std")]
use std::{format, string::String};

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Running sum over an unbounded stream
///
/// Uses naive floating-point addition. NaN and infinities propagate
/// through the total with IEEE semantics.
///
/// # Example
///
/// ```
/// use rollsum::statistics::Sum;
/// use rollsum::traits::Univariate;
///
/// let mut sum = Sum::new();
///
/// let outputs: Vec<f64> = [-5.0, -3.0, -1.0, 1.0, 3.0, 5.0]
///     .into_iter()
///     .map(|x| sum.update(x).get())
///     .collect();
///
/// assert_eq!(outputs, vec![-5.0, -8.0, -9.0, -8.0, -5.0, 0.0]);
/// assert_eq!(sum.name(), "sum");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sum {
    total: f64,
    count: u64,
}

impl Sum {
    /// Create a sum starting at zero
    pub fn new() -> Self {
        Self {
            total: 0.0,
            count: 0,
        }
    }
}

impl Univariate for Sum {
    fn push(&mut self, x: f64) {
        self.total += x;
        self.count += 1;
    }

    fn get(&self) -> f64 {
        self.total
    }

    fn name(&self) -> String {
        String::from("sum")
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Merge for Sum {
    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        self.total += other.total;
        self.count += other.count;
        Ok(())
    }
}

impl core::fmt::Display for Sum {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {:.6}", self.name(), self.total)
    }
}

/// Running sum over a sliding window
///
/// Keeps the last `window_size` values in a [`Window`] and a total equal to
/// their sum. When the window is full, each update subtracts the evicted
/// (oldest-inserted) value before adding the new one. Until the window
/// fills it behaves exactly like [`Sum`].
///
/// # Example
///
/// ```
/// use rollsum::statistics::RollingSum;
/// use rollsum::traits::Univariate;
///
/// let mut rolling = RollingSum::new(2);
///
/// let outputs: Vec<f64> = [1.0, -4.0, 3.0, -2.0, 2.0, 1.0]
///     .into_iter()
///     .map(|x| rolling.update(x).get())
///     .collect();
///
/// assert_eq!(outputs, vec![1.0, -3.0, -1.0, 1.0, 0.0, 3.0]);
/// assert_eq!(rolling.name(), "rolling_2_sum");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RollingSum {
    /// Most recent values, oldest first
    window: Window<f64>,
    /// Sum of the values in `window`
    total: f64,
    /// Values seen, including those already evicted
    count: u64,
}

impl RollingSum {
    /// Create a rolling sum over the last `window_size` values
    ///
    /// # Panics
    ///
    /// Panics if window_size is zero
    pub fn new(window_size: usize) -> Self {
        Self {
            window: Window::new(window_size),
            total: 0.0,
            count: 0,
        }
    }

    /// Create a rolling sum, rejecting a zero window size
    pub fn try_new(window_size: usize) -> Result<Self, WindowError> {
        Ok(Self {
            window: Window::try_new(window_size)?,
            total: 0.0,
            count: 0,
        })
    }

    /// Number of values the sum covers once the window is full
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// Values currently inside the window
    pub fn window(&self) -> &Window<f64> {
        &self.window
    }
}

impl Univariate for RollingSum {
    fn push(&mut self, x: f64) {
        if let Some(evicted) = self.window.push(x) {
            self.total -= evicted;
        }
        self.total += x;
        self.count += 1;
    }

    fn get(&self) -> f64 {
        self.total
    }

    fn name(&self) -> String {
        format!("rolling_{}_sum", self.window_size())
    }

    fn clear(&mut self) {
        self.window.clear();
        self.total = 0.0;
        self.count = 0;
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Merge for RollingSum {
    /// Replay the values still in `other`'s window
    ///
    /// The result covers the last `window_size` values of this stream
    /// followed by `other`'s stream.
    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.window_size() != other.window_size() {
            log::debug!(
                "refusing to merge rolling sums of window sizes {} and {}",
                self.window_size(),
                other.window_size()
            );
            return Err(MergeError::IncompatibleConfig {
                expected: format!("window_size={}", self.window_size()),
                found: format!("window_size={}", other.window_size()),
            });
        }

        for &x in other.window.iter() {
            self.push(x);
        }
        // push() counted the replayed values, other.count covers them
        self.count = self.count - other.window.len() as u64 + other.count;
        Ok(())
    }
}

impl core::fmt::Display for RollingSum {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {:.6}", self.name(), self.total)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Sum", 2)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("count", &self.count)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RollingSum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("RollingSum", 3)?;
        state.serialize_field("window", &self.window)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("count", &self.count)?;
        state.end()
    }
}
