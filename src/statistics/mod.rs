//! Running sums for streaming data
//!
//! This module provides sums that are maintained incrementally, one
//! observation at a time, with constant work per update.
//!
//! # Example
//!
//! ```
//! use rollsum::statistics::{RollingSum, Sum};
//! use rollsum::traits::Univariate;
//!
//! let mut total = Sum::new();
//! let mut last_three = RollingSum::new(3);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     total.update(value);
//!     last_three.update(value);
//! }
//!
//! assert_eq!(total.get(), 15.0);
//! assert_eq!(last_three.get(), 12.0);
//! println!("{}", last_three); // rolling_3_sum: 12.000000
//! ```

mod summing;

pub use summing::{RollingSum, Sum};
