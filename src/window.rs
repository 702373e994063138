//! Fixed-capacity FIFO window
//!
//! [`Window`] keeps the most recently inserted items and drops the oldest one
//! once it is full. Windowed statistics own one rather than reimplementing the
//! bookkeeping.

use crate::traits::WindowError;
use core::ops::Index;

#[cfg(feature = "std")]
use std::collections::{vec_deque, VecDeque};

#[cfg(not(feature = "std"))]
use alloc::collections::{vec_deque, VecDeque};

/// Bounded FIFO buffer
///
/// Holds at most `capacity` items in insertion order. Pushing into a full
/// window evicts the oldest-inserted item (not the smallest) and hands it
/// back to the caller.
///
/// # Example
///
/// ```
/// use rollsum::window::Window;
///
/// let mut window = Window::new(2);
///
/// assert_eq!(window.push(1), None);
/// assert_eq!(window.push(2), None);
/// assert_eq!(window.push(3), Some(1));
///
/// assert_eq!(window.oldest(), Some(&2));
/// assert_eq!(window.newest(), Some(&3));
/// assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Window<T> {
    /// Maximum number of items retained
    capacity: usize,
    /// Items, oldest at the front
    items: VecDeque<T>,
}

impl<T> Window<T> {
    /// Create an empty window holding at most `capacity` items
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(window) => window,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create an empty window, rejecting a zero capacity
    pub fn try_new(capacity: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            log::warn!("rejecting window with zero capacity");
            return Err(WindowError::ZeroSize);
        }

        Ok(Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        })
    }

    /// Append an item, returning the evicted oldest item if the window was full
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() {
            log::trace!("window full at {}, evicting oldest item", self.capacity);
            self.items.pop_front()
        } else {
            None
        };

        self.items.push_back(item);
        evicted
    }

    /// Maximum number of items the window retains
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the next push will evict
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// First-inserted item still in the window
    pub fn oldest(&self) -> Option<&T> {
        self.items.front()
    }

    /// Most recently inserted item
    pub fn newest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Item at `index`, where 0 is the oldest
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Drop all items, keeping the capacity
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Index<usize> for Window<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Window<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Window<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Window", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("items", &self.items)?;
        state.end()
    }
}
