//! # Rollsum
//!
//! Incremental univariate sums for Rust.
//!
//! Rollsum maintains running statistics over numeric streams with O(1) work per
//! observation and without revisiting earlier data.
//!
//! ## Features
//!
//! - **Running Sum**: [`Sum`] accumulates an unbounded stream
//! - **Rolling Sum**: [`RollingSum`] tracks the sum of the last `n` values
//! - **Reusable Windows**: [`Window`](window::Window) is a bounded FIFO buffer
//!   for building other windowed statistics
//! - **Polymorphism**: everything implements [`Univariate`](traits::Univariate)
//!
//! ## Quick Start
//!
//! ```rust
//! use rollsum::prelude::*;
//!
//! let mut rolling = RollingSum::new(2);
//! for x in [1.0, -4.0, 3.0] {
//!     println!("{} -> {}", x, rolling.update(x).get());
//! }
//! assert_eq!(rolling.get(), -1.0);
//! ```
//!
//! ## Combining Stream Segments
//!
//! Sums implement the [`Merge`](traits::Merge) trait, so a statistic that saw
//! a later segment of the stream can be folded into one that saw an earlier one:
//!
//! ```rust
//! use rollsum::statistics::RollingSum;
//! use rollsum::traits::{Merge, Univariate};
//!
//! let mut early = RollingSum::new(3);
//! let mut late = RollingSum::new(3);
//!
//! early.update(1.0).update(2.0);
//! late.update(3.0).update(4.0);
//!
//! early.merge(&late).unwrap();
//! assert_eq!(early.get(), 9.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `statistics` (default): [`Sum`] and [`RollingSum`]
//! - `std` (default): Standard library support, otherwise `no_std` + `alloc`
//! - `serde`: Enable serialization
//! - `full`: Enable everything

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits and the window buffer are always available
pub mod traits;
pub mod window;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

pub mod prelude {
    pub use crate::traits::*;
    pub use crate::window::Window;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::{RollingSum, Sum};
}

#[cfg(feature = "statistics")]
pub use statistics::{RollingSum, Sum};
