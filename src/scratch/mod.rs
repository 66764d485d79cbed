//! Scratch memory for algorithms.
//!
//! A [`TemporaryBuffer`] is raw, aligned storage acquired on a best-effort
//! basis; a [`TemporaryVector`] places values into it one at a time.
//! Algorithms that want extra room ask for a buffer, read back how much they
//! were actually given, and degrade gracefully when it is less.
//!
//! ```
//! use strand::scratch::{make_temporary_vector, TemporaryBuffer};
//!
//! let mut buffer = TemporaryBuffer::<String>::new(8);
//! let mut staged = make_temporary_vector(&mut buffer);
//! for word in ["scratch", "space"] {
//!     staged.push(word.to_uppercase());
//! }
//! assert_eq!(staged.as_slice(), ["SCRATCH", "SPACE"]);
//! ```
//!
//! Neither type is `Send` or `Sync`.

mod buffer;
mod vector;

pub use buffer::ScratchConfig;
pub use buffer::TemporaryBuffer;
pub use buffer::MAX_NATURAL_ALIGN;
pub use vector::make_temporary_vector;
pub use vector::CapacityError;
pub use vector::TemporaryVector;
