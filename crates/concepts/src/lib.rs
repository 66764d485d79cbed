//! Capability traits for sequence traversal.
//!
//! Each trait names one capability a position type can have. Generic code
//! states what it needs as trait bounds and the compiler answers, at build
//! time, whether a given type qualifies. Nothing here is checked at runtime.
//!
//! # Capabilities
//!
//! | Trait | Capability |
//! |-------|------------|
//! | `Cursor` | advance by one position |
//! | `Readable` | read the element at the current position |
//! | `InputCursor` | `Cursor + Readable`, single pass |
//! | `ForwardCursor` | multi-pass, copyable, equality-comparable |
//! | `BidirectionalCursor` | can also step backwards |
//! | `RandomAccessCursor` | constant-time jumps and distances |
//! | `Sentinel<C>` | marks the end of a sequence of `C` positions |
//! | `OutputCursor<T>` | accepts a `T` and moves past it |
//!
//! A cursor and its sentinel need not share a type. Every `ForwardCursor`
//! is a sentinel for itself, which covers the common (bounded) case.

pub mod cursor;
pub mod output;
pub mod sentinel;

pub use cursor::BidirectionalCursor;
pub use cursor::Cursor;
pub use cursor::ForwardCursor;
pub use cursor::InputCursor;
pub use cursor::RandomAccessCursor;
pub use cursor::Readable;
pub use output::OutputCursor;
pub use sentinel::Sentinel;
