//! Output positions.

/// A position that accepts values of type `T`.
///
/// `put` writes the value and moves past it in one step, so an output
/// cursor never needs to be readable or comparable. A single type may
/// accept several value types, e.g. both `T` and `&T` when `T: Clone`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot accept values of type `{T}`",
    label = "not an output cursor for `{T}`"
)]
pub trait OutputCursor<T> {
    /// Write `value` at the current position, then advance.
    fn put(&mut self, value: T);
}
