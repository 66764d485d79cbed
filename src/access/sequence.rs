/// Opt a user type into the access resolver.
///
/// List the operations the type offers, with the result type of each one
/// that has a type. For every listed operation the macro implements the
/// matching resolved trait in [`strand::access`](crate::access) for the
/// given (borrowed) type, choosing an implementation in this order:
///
/// 1. an inherent method of that name taking `&self`;
/// 2. an impl of the matching trait in [`access::free`](crate::access::free);
/// 3. the synthesized default (`rbegin`, `rend` and `empty` only).
///
/// The choice is made once, at compile time. Listing an operation that has
/// no candidate is a compile error at the macro call.
///
/// A member is chosen by name alone. If its signature does not fit (wrong
/// result type, or a receiver other than `&self`) the macro call fails to
/// compile; it does not fall through to the free form. Rename the member
/// or fix its signature to let the free form apply.
///
/// ```compile_fail
/// use strand::access::free;
/// use strand::cursor::SliceCursor;
///
/// pub struct Odd(Vec<u8>);
///
/// impl Odd {
///     // Not a cursor, yet it shadows the free form below.
///     pub fn begin(&self) -> usize {
///         return 0;
///     }
/// }
///
/// impl<'a> free::Begin for &'a Odd {
///     type Cursor = SliceCursor<'a, u8>;
///     fn begin(self) -> SliceCursor<'a, u8> {
///         return SliceCursor::begin(&self.0);
///     }
/// }
///
/// strand::sequence! {
///     impl ['a] for &'a Odd {
///         fn begin -> SliceCursor<'a, u8>;
///     }
/// }
/// ```
///
/// ```
/// use strand::cursor::SliceCursor;
///
/// pub struct Digits {
///     values: Vec<u8>,
/// }
///
/// impl Digits {
///     pub fn begin(&self) -> SliceCursor<'_, u8> {
///         return SliceCursor::begin(&self.values);
///     }
///
///     pub fn end(&self) -> SliceCursor<'_, u8> {
///         return SliceCursor::end(&self.values);
///     }
///
///     pub fn size(&self) -> usize {
///         return self.values.len();
///     }
/// }
///
/// strand::sequence! {
///     impl ['a] for &'a Digits {
///         fn begin -> SliceCursor<'a, u8>;
///         fn end -> SliceCursor<'a, u8>;
///         fn size;
///         fn empty;
///     }
/// }
///
/// let d = Digits { values: vec![4, 2] };
/// assert_eq!(strand::size(&d), 2);
/// assert!(!strand::empty(&d));
/// ```
#[macro_export]
macro_rules! sequence {
    (impl [$($generics:tt)*] for $ty:ty { $($ops:tt)* }) => {
        $crate::sequence!(@ops [$($generics)*] $ty; $($ops)*);
    };
    (impl for $ty:ty { $($ops:tt)* }) => {
        $crate::sequence!(@ops [] $ty; $($ops)*);
    };

    (@ops [$($generics:tt)*] $ty:ty;) => {};
    (@ops [$($generics:tt)*] $ty:ty; fn begin -> $cursor:ty; $($rest:tt)*) => {
        impl<$($generics)*> $crate::access::Begin for $ty {
            type Cursor = $cursor;

            #[inline]
            fn begin(r: Self) -> Self::Cursor {
                #[allow(unused_imports)]
                use $crate::access::free::Begin as _;
                return r.begin();
            }
        }
        $crate::sequence!(@ops [$($generics)*] $ty; $($rest)*);
    };
    (@ops [$($generics:tt)*] $ty:ty; fn end -> $sentinel:ty; $($rest:tt)*) => {
        impl<$($generics)*> $crate::access::End for $ty {
            type Sentinel = $sentinel;

            #[inline]
            fn end(r: Self) -> Self::Sentinel {
                #[allow(unused_imports)]
                use $crate::access::free::End as _;
                return r.end();
            }
        }
        $crate::sequence!(@ops [$($generics)*] $ty; $($rest)*);
    };
    (@ops [$($generics:tt)*] $ty:ty; fn rbegin -> $cursor:ty; $($rest:tt)*) => {
        impl<$($generics)*> $crate::access::RBegin for $ty {
            type ReverseCursor = $cursor;

            #[inline]
            fn rbegin(r: Self) -> Self::ReverseCursor {
                #[allow(unused_imports)]
                use $crate::access::free::RBegin as _;
                #[allow(unused_imports)]
                use $crate::access::synthesized::ReverseBeginDefault as _;
                return r.rbegin();
            }
        }
        $crate::sequence!(@ops [$($generics)*] $ty; $($rest)*);
    };
    (@ops [$($generics:tt)*] $ty:ty; fn rend -> $sentinel:ty; $($rest:tt)*) => {
        impl<$($generics)*> $crate::access::REnd for $ty {
            type ReverseSentinel = $sentinel;

            #[inline]
            fn rend(r: Self) -> Self::ReverseSentinel {
                #[allow(unused_imports)]
                use $crate::access::free::REnd as _;
                #[allow(unused_imports)]
                use $crate::access::synthesized::ReverseEndDefault as _;
                return r.rend();
            }
        }
        $crate::sequence!(@ops [$($generics)*] $ty; $($rest)*);
    };
    (@ops [$($generics:tt)*] $ty:ty; fn size; $($rest:tt)*) => {
        impl<$($generics)*> $crate::access::Size for $ty {
            #[inline]
            fn size(r: Self) -> usize {
                #[allow(unused_imports)]
                use $crate::access::free::Size as _;
                return r.size();
            }
        }
        $crate::sequence!(@ops [$($generics)*] $ty; $($rest)*);
    };
    (@ops [$($generics:tt)*] $ty:ty; fn empty; $($rest:tt)*) => {
        impl<$($generics)*> $crate::access::Empty for $ty {
            #[inline]
            fn empty(r: Self) -> bool {
                #[allow(unused_imports)]
                use $crate::access::free::Empty as _;
                #[allow(unused_imports)]
                use $crate::access::synthesized::EmptyDefault as _;
                return r.empty();
            }
        }
        $crate::sequence!(@ops [$($generics)*] $ty; $($rest)*);
    };
    (@ops [$($generics:tt)*] $ty:ty; fn data -> $element:ty; $($rest:tt)*) => {
        impl<$($generics)*> $crate::access::Data for $ty {
            type Element = $element;
            type Pointer = *const $element;

            #[inline]
            fn data(r: Self) -> *const $element {
                #[allow(unused_imports)]
                use $crate::access::free::Data as _;
                return r.data();
            }
        }
        $crate::sequence!(@ops [$($generics)*] $ty; $($rest)*);
    };
}
