use std::convert::identity;

use strand_concepts::{InputCursor, OutputCursor, Readable, Sentinel};

use super::{copy, In1In2Out};
use crate::access::Range;

/// Union of two sorted inputs, in natural order.
///
/// Equal elements present in both inputs are written once, taken from the
/// first input. Duplicates within one input that have no partner in the
/// other are all kept.
///
/// ```
/// use strand::algorithm::set_union_range;
/// use strand::cursor::back_inserter;
///
/// let mut out: Vec<i32> = Vec::new();
/// set_union_range(&[1, 3, 5], &[2, 4, 6], back_inserter(&mut out));
/// assert_eq!(out, [1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn set_union<I1, S1, I2, S2, O>(
    first1: I1,
    last1: S1,
    first2: I2,
    last2: S2,
    out: O,
) -> In1In2Out<I1, I2, O>
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor<Item = I1::Item>,
    S2: Sentinel<I2>,
    I1::Item: PartialOrd,
    O: OutputCursor<I1::Item>,
{
    return set_union_by(
        first1,
        last1,
        first2,
        last2,
        out,
        |a: &I1::Item, b: &I1::Item| a < b,
        identity,
        identity,
    );
}

/// Union of two inputs sorted by `comp` over their projected keys.
///
/// Each side has its own projection; both must produce the same key type.
/// Once either side runs out, the rest of the other is copied without
/// further calls to `comp` or the projections.
///
/// Unsorted inputs give an unspecified interleaving, never a crash.
pub fn set_union_by<I1, S1, I2, S2, O, K, C, P1, P2>(
    mut first1: I1,
    last1: S1,
    mut first2: I2,
    last2: S2,
    mut out: O,
    mut comp: C,
    mut proj1: P1,
    mut proj2: P2,
) -> In1In2Out<I1, I2, O>
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor,
    S2: Sentinel<I2>,
    O: OutputCursor<I1::Item> + OutputCursor<I2::Item>,
    C: FnMut(&K, &K) -> bool,
    P1: FnMut(I1::Item) -> K,
    P2: FnMut(I2::Item) -> K,
{
    loop {
        if last1.is_end(&first1) {
            let rest = copy(first2, last2, out);
            return In1In2Out { input1: first1, input2: rest.input, output: rest.output };
        }
        if last2.is_end(&first2) {
            let rest = copy(first1, last1, out);
            return In1In2Out { input1: rest.input, input2: first2, output: rest.output };
        }

        let key1 = proj1(first1.read());
        let key2 = proj2(first2.read());
        if comp(&key1, &key2) {
            <O as OutputCursor<I1::Item>>::put(&mut out, first1.read());
            first1.advance();
        } else if comp(&key2, &key1) {
            <O as OutputCursor<I2::Item>>::put(&mut out, first2.read());
            first2.advance();
        } else {
            <O as OutputCursor<I1::Item>>::put(&mut out, first1.read());
            first1.advance();
            first2.advance();
        }
    }
}

/// [`set_union`] over two whole sequences.
#[inline]
pub fn set_union_range<R1, R2, O>(r1: R1, r2: R2, out: O) -> In1In2Out<R1::Cursor, R2::Cursor, O>
where
    R1: Range,
    R2: Range,
    R1::Cursor: InputCursor,
    R2::Cursor: InputCursor<Item = <R1::Cursor as Readable>::Item>,
    <R1::Cursor as Readable>::Item: PartialOrd,
    O: OutputCursor<<R1::Cursor as Readable>::Item>,
{
    return set_union(R1::begin(r1), R1::end(r1), R2::begin(r2), R2::end(r2), out);
}

/// [`set_union_by`] over two whole sequences.
#[inline]
pub fn set_union_range_by<R1, R2, O, K, C, P1, P2>(
    r1: R1,
    r2: R2,
    out: O,
    comp: C,
    proj1: P1,
    proj2: P2,
) -> In1In2Out<R1::Cursor, R2::Cursor, O>
where
    R1: Range,
    R2: Range,
    R1::Cursor: InputCursor,
    R2::Cursor: InputCursor,
    O: OutputCursor<<R1::Cursor as Readable>::Item> + OutputCursor<<R2::Cursor as Readable>::Item>,
    C: FnMut(&K, &K) -> bool,
    P1: FnMut(<R1::Cursor as Readable>::Item) -> K,
    P2: FnMut(<R2::Cursor as Readable>::Item) -> K,
{
    return set_union_by(
        R1::begin(r1),
        R1::end(r1),
        R2::begin(r2),
        R2::end(r2),
        out,
        comp,
        proj1,
        proj2,
    );
}
