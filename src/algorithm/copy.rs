use strand_concepts::{InputCursor, OutputCursor, Readable, Sentinel};

use super::InOut;
use crate::access::Range;

/// Write every element of `[first, last)` to `out`, in order.
#[inline]
pub fn copy<I, S, O>(mut first: I, last: S, mut out: O) -> InOut<I, O>
where
    I: InputCursor,
    S: Sentinel<I>,
    O: OutputCursor<I::Item>,
{
    while !last.is_end(&first) {
        out.put(first.read());
        first.advance();
    }
    return InOut { input: first, output: out };
}

/// [`copy`] over a whole sequence.
#[inline]
pub fn copy_range<R, O>(r: R, out: O) -> InOut<R::Cursor, O>
where
    R: Range,
    R::Cursor: InputCursor,
    O: OutputCursor<<R::Cursor as Readable>::Item>,
{
    return copy(R::begin(r), R::end(r), out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{back_inserter, counted, SliceCursor, SliceWriter};

    #[test]
    fn copies_in_order() {
        let mut target: Vec<i32> = Vec::new();
        let result = copy_range(&[3, 1, 2], back_inserter(&mut target));
        assert_eq!(result.input.position(), 3);
        assert_eq!(target, vec![3, 1, 2]);
    }

    #[test]
    fn stops_at_a_foreign_sentinel() {
        let data = ['p', 'q', 'r', 's'];
        let mut target = ['-'; 2];
        let (first, last) = counted(SliceCursor::begin(&data), 2);
        let result = copy(first, last, SliceWriter::new(&mut target));
        assert_eq!(result.output.position(), 2);
        assert_eq!(result.input.base().position(), 2);
        assert_eq!(target, ['p', 'q']);
    }
}
