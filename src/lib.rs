//! Strand - generic sequence algorithms over cursors and sentinels.
//!
//! # Quick Start
//!
//! ```
//! use strand::algorithm::{replace_copy_if_range, set_union_range};
//! use strand::cursor::back_inserter;
//!
//! // Uniform access works on arrays, slices, vectors and opted-in types
//! let readings = vec![12, -1, 40, -7];
//! assert_eq!(strand::size(&readings), 4);
//!
//! // Replace negative readings with zero
//! let mut clean: Vec<i32> = Vec::new();
//! replace_copy_if_range(&readings, back_inserter(&mut clean), |r| **r < 0, &0);
//! assert_eq!(clean, [12, 0, 40, 0]);
//!
//! // Union of two sorted inputs
//! let mut all: Vec<i32> = Vec::new();
//! set_union_range(&[1, 2, 2, 4], &[2, 3, 4], back_inserter(&mut all));
//! assert_eq!(all, [1, 2, 2, 3, 4]);
//! ```
//!
//! # Layout
//!
//! - [`concepts`]: capability traits (`Cursor`, `Sentinel`, ...).
//! - [`access`]: `begin`, `end`, `size`, ... resolved per type.
//! - [`cursor`]: concrete cursors, sentinels and output cursors.
//! - [`algorithm`]: the algorithms.
//! - [`scratch`]: temporary buffers for algorithms that want extra memory.

pub mod access;
pub mod algorithm;
pub mod cursor;
pub mod scratch;

pub use strand_concepts as concepts;

pub use access::{begin, cbegin, cend, crbegin, crend, data, empty, end, rbegin, rend, size};
pub use std::convert::identity;
pub use strand_concepts::{
    BidirectionalCursor, Cursor, ForwardCursor, InputCursor, OutputCursor, RandomAccessCursor, Readable, Sentinel,
};
