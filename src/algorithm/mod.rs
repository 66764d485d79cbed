//! Generic algorithms over (cursor, sentinel) pairs.
//!
//! Every algorithm comes in a core form taking cursors and sentinels, and a
//! `_range` form taking whole sequences resolved through
//! [`access`](crate::access). Forms ending in `_by` accept an explicit
//! comparator or predicate plus projections; the others use natural order
//! and [`identity`](std::convert::identity).
//!
//! Algorithms return the final positions they reached in named fields
//! ([`InOut`], [`In1In2Out`]) so callers can continue from where they
//! stopped.

mod copy;
mod merge;
mod replace_copy_if;
mod result;
mod set_union;
mod stable_sort;

pub use copy::copy;
pub use copy::copy_range;
pub use merge::merge;
pub use merge::merge_by;
pub use merge::merge_range;
pub use replace_copy_if::replace_copy_if;
pub use replace_copy_if::replace_copy_if_by;
pub use replace_copy_if::replace_copy_if_range;
pub use replace_copy_if::replace_copy_if_range_by;
pub use result::In1In2Out;
pub use result::InOut;
pub use set_union::set_union;
pub use set_union::set_union_by;
pub use set_union::set_union_range;
pub use set_union::set_union_range_by;
pub use stable_sort::stable_sort;
pub use stable_sort::stable_sort_by;
pub use stable_sort::stable_sort_with;
