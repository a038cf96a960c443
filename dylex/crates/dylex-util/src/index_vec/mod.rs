//! IndexVec - A vector indexed by a specific type.
//!
//! [`IndexVec`] is the arena the analyzer uses for records that point at each
//! other, such as the chain of indentation contexts: every record is pushed
//! once, referred to by a typed index, and links to its parent by index
//! instead of by reference. That keeps the chain cycle-free and cheap to
//! clone when a host snapshots analyzer state.
//!
//! # Example
//!
//! ```
//! use dylex_util::index_vec::{IndexVec, Idx};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct FrameId(u32);
//!
//! impl Idx for FrameId {
//!     fn from_usize(idx: usize) -> Self { FrameId(idx as u32) }
//!     fn index(self) -> usize { self.0 as usize }
//! }
//!
//! let mut frames: IndexVec<FrameId, &str> = IndexVec::new();
//! let top = frames.push("top");
//! assert_eq!(frames[top], "top");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IndexVecError, IndexVecResult};

/// Trait for types that can be used as indices
///
/// The type must be convertible to and from `usize`, and
/// `from_usize(i).index() == i` must hold for every index that is handed out.
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert from usize to index type
    ///
    /// # Panics
    ///
    /// Implementations may panic if the usize value is too large to fit
    /// in the index type.
    fn from_usize(idx: usize) -> Self;

    /// Convert index to usize for array indexing
    fn index(self) -> usize;
}

impl Idx for usize {
    #[inline]
    fn from_usize(idx: usize) -> Self {
        idx
    }

    #[inline]
    fn index(self) -> usize {
        self
    }
}

/// A vector indexed by a specific type
///
/// - `I`: The index type (must implement [`Idx`] trait)
/// - `T`: The element type
///
/// Serializes exactly like the underlying `Vec<T>`.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Create an empty IndexVec
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Create an IndexVec with the specified capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Wrap an existing vector; element `n` gets index `n`.
    #[inline]
    pub fn from_raw(raw: Vec<T>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the vector contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Get a slice view of the underlying data
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.raw
    }

    /// Iterate over the values in index order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.raw.iter()
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Push an element and return its typed index
    ///
    /// ```
    /// use dylex_util::index_vec::IndexVec;
    ///
    /// let mut vec: IndexVec<usize, i32> = IndexVec::new();
    /// let idx = vec.push(42);
    /// assert_eq!(vec[idx], 42);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let index = self.raw.len();
        self.raw.push(value);
        I::from_usize(index)
    }

    /// Pop the last element and return it with its index
    ///
    /// Returns `None` if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<(I, T)> {
        self.raw.pop().map(|v| {
            let idx = I::from_usize(self.raw.len());
            (idx, v)
        })
    }

    /// Get a reference to the element at the given index
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }

    /// Get a mutable reference to the element at the given index
    #[inline]
    pub fn get_mut(&mut self, index: I) -> Option<&mut T> {
        self.raw.get_mut(index.index())
    }

    /// Like [`get`](Self::get), but reports the bounds it was checked against.
    pub fn try_get(&self, index: I) -> IndexVecResult<&T> {
        self.raw.get(index.index()).ok_or(IndexVecError::OutOfBounds {
            index: index.index(),
            length: self.raw.len(),
        })
    }

    /// Index of the most recently pushed element
    #[inline]
    pub fn last_index(&self) -> Option<I> {
        self.raw.len().checked_sub(1).map(I::from_usize)
    }

    /// Iterate over (index, value) pairs
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.raw
            .iter()
            .enumerate()
            .map(|(i, v)| (I::from_usize(i), v))
    }

    /// Iterate over indices only
    pub fn indices(&self) -> impl Iterator<Item = I> {
        (0..self.raw.len()).map(I::from_usize)
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw.iter()).finish()
    }
}

impl<I, T: Serialize> Serialize for IndexVec<I, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, I, T: Deserialize<'de>> Deserialize<'de> for IndexVec<I, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_raw)
    }
}

/// Macro to define index types easily
///
/// Generates a newtype wrapper around `u32` implementing [`Idx`]. Extra
/// attributes (for example serde derives) are forwarded to the struct.
///
/// ```
/// use dylex_util::{define_idx, index_vec::IndexVec};
///
/// define_idx!(ScopeId);
///
/// let mut vec: IndexVec<ScopeId, i32> = IndexVec::new();
/// let idx = vec.push(42);
/// assert_eq!(vec[idx], 42);
/// ```
#[macro_export]
macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::index_vec::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize, "Index {} exceeds u32::MAX", idx);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}
