use std::convert::identity;

use strand_concepts::{InputCursor, OutputCursor, Readable, Sentinel};

use super::InOut;
use crate::access::Range;

/// Copy `[first, last)` to `out`, writing `new_value` in place of every
/// element that satisfies `pred`.
///
/// ```
/// use strand::algorithm::replace_copy_if;
/// use strand::cursor::{back_inserter, SliceCursor};
///
/// let data = [1, 2, 3, 4, 5];
/// let mut out: Vec<i32> = Vec::new();
/// replace_copy_if(
///     SliceCursor::begin(&data),
///     SliceCursor::end(&data),
///     back_inserter(&mut out),
///     |x| **x % 2 == 0,
///     &0,
/// );
/// assert_eq!(out, [1, 0, 3, 0, 5]);
/// ```
#[inline]
pub fn replace_copy_if<I, S, O, T, Pred>(
    first: I,
    last: S,
    out: O,
    pred: Pred,
    new_value: &T,
) -> InOut<I, O>
where
    I: InputCursor,
    S: Sentinel<I>,
    T: Clone,
    O: OutputCursor<I::Item> + OutputCursor<T>,
    Pred: FnMut(&I::Item) -> bool,
{
    return replace_copy_if_by(first, last, out, pred, new_value, identity);
}

/// [`replace_copy_if`] testing `pred` against `proj(element)`.
///
/// The element itself, not its projection, is what gets written.
pub fn replace_copy_if_by<I, S, O, T, K, Pred, Proj>(
    mut first: I,
    last: S,
    mut out: O,
    mut pred: Pred,
    new_value: &T,
    mut proj: Proj,
) -> InOut<I, O>
where
    I: InputCursor,
    S: Sentinel<I>,
    T: Clone,
    O: OutputCursor<I::Item> + OutputCursor<T>,
    Pred: FnMut(&K) -> bool,
    Proj: FnMut(I::Item) -> K,
{
    while !last.is_end(&first) {
        if pred(&proj(first.read())) {
            <O as OutputCursor<T>>::put(&mut out, new_value.clone());
        } else {
            <O as OutputCursor<I::Item>>::put(&mut out, first.read());
        }
        first.advance();
    }
    return InOut { input: first, output: out };
}

/// [`replace_copy_if`] over a whole sequence.
#[inline]
pub fn replace_copy_if_range<R, O, T, Pred>(
    r: R,
    out: O,
    pred: Pred,
    new_value: &T,
) -> InOut<R::Cursor, O>
where
    R: Range,
    R::Cursor: InputCursor,
    T: Clone,
    O: OutputCursor<<R::Cursor as Readable>::Item> + OutputCursor<T>,
    Pred: FnMut(&<R::Cursor as Readable>::Item) -> bool,
{
    return replace_copy_if(R::begin(r), R::end(r), out, pred, new_value);
}

/// [`replace_copy_if_by`] over a whole sequence.
#[inline]
pub fn replace_copy_if_range_by<R, O, T, K, Pred, Proj>(
    r: R,
    out: O,
    pred: Pred,
    new_value: &T,
    proj: Proj,
) -> InOut<R::Cursor, O>
where
    R: Range,
    R::Cursor: InputCursor,
    T: Clone,
    O: OutputCursor<<R::Cursor as Readable>::Item> + OutputCursor<T>,
    Pred: FnMut(&K) -> bool,
    Proj: FnMut(<R::Cursor as Readable>::Item) -> K,
{
    return replace_copy_if_by(R::begin(r), R::end(r), out, pred, new_value, proj);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{back_inserter, SliceWriter};

    #[derive(Debug, Clone, PartialEq)]
    struct Reading {
        sensor: &'static str,
        value: i32,
    }

    #[test]
    fn projection_selects_what_the_predicate_sees() {
        let readings = vec![
            Reading { sensor: "a", value: -3 },
            Reading { sensor: "b", value: 7 },
        ];
        let blank = Reading { sensor: "?", value: 0 };
        let mut out: Vec<Reading> = Vec::new();
        replace_copy_if_range_by(
            &readings,
            back_inserter(&mut out),
            |v: &i32| *v < 0,
            &blank,
            |r: &Reading| r.value,
        );
        assert_eq!(out, vec![blank.clone(), readings[1].clone()]);
        assert_eq!(out[0].sensor, "?");
    }

    #[test]
    fn empty_input_writes_nothing() {
        let data: [u8; 0] = [];
        let mut target: [u8; 0] = [];
        let result = replace_copy_if_range(&data, SliceWriter::new(&mut target), |_| true, &9);
        assert_eq!(result.input.position(), 0);
        assert_eq!(result.output.position(), 0);
    }

    #[test]
    fn writes_one_value_per_element() {
        let data = vec![1, 1, 2, 3, 5, 8];
        let mut out: Vec<i32> = Vec::new();
        let result = replace_copy_if_range(&data, back_inserter(&mut out), |x| **x > 2, &0);
        assert_eq!(result.output.len(), 6);
        assert_eq!(out, [1, 1, 2, 0, 0, 0]);
    }
}
