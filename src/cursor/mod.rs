//! Concrete cursors, sentinels and output cursors.
//!
//! - `SliceCursor`: random access over `&[T]`; what the resolver returns
//!   for shared arrays, slices and vectors.
//! - `SliceCursorMut`: the writable counterpart for `&mut` borrows.
//! - `Reversed`: walks a bidirectional cursor backwards; the synthesized
//!   `rbegin`/`rend`.
//! - `Counted` + `CountDone`: a cursor and a sentinel of different types.
//! - `SliceWriter`, `BackInserter`, `SmallVecInserter`, `Counter`: output
//!   positions.

pub mod counted;
pub mod output;
pub mod reverse;
pub mod slice;
pub mod slice_mut;

pub use counted::counted;
pub use counted::CountDone;
pub use counted::Counted;
pub use output::back_inserter;
pub use output::BackInserter;
pub use output::Counter;
pub use output::SliceWriter;
pub use output::SmallVecInserter;
pub use reverse::make_reversed;
pub use reverse::Reversed;
pub use slice::SliceCursor;
pub use slice_mut::SliceCursorMut;
