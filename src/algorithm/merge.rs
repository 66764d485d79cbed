use std::convert::identity;

use strand_concepts::{InputCursor, OutputCursor, Readable, Sentinel};

use super::{copy, In1In2Out};
use crate::access::Range;

/// Merge two sorted inputs into one sorted output, keeping every element.
///
/// Stable: among equal elements, those of the first input come first.
#[inline]
pub fn merge<I1, S1, I2, S2, O>(
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
    return merge_by(
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

/// [`merge`] ordered by `comp` over projected keys.
pub fn merge_by<I1, S1, I2, S2, O, K, C, P1, P2>(
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

        if comp(&proj2(first2.read()), &proj1(first1.read())) {
            <O as OutputCursor<I2::Item>>::put(&mut out, first2.read());
            first2.advance();
        } else {
            <O as OutputCursor<I1::Item>>::put(&mut out, first1.read());
            first1.advance();
        }
    }
}

/// [`merge`] over two whole sequences.
#[inline]
pub fn merge_range<R1, R2, O>(r1: R1, r2: R2, out: O) -> In1In2Out<R1::Cursor, R2::Cursor, O>
where
    R1: Range,
    R2: Range,
    R1::Cursor: InputCursor,
    R2::Cursor: InputCursor<Item = <R1::Cursor as Readable>::Item>,
    <R1::Cursor as Readable>::Item: PartialOrd,
    O: OutputCursor<<R1::Cursor as Readable>::Item>,
{
    return merge(R1::begin(r1), R1::end(r1), R2::begin(r2), R2::end(r2), out);
}
