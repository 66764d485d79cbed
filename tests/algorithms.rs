//! Algorithm behavior through the public API.

use std::cell::Cell;

use strand::algorithm::{
    replace_copy_if, replace_copy_if_range, set_union, set_union_by, set_union_range, stable_sort_by,
    In1In2Out,
};
use strand::cursor::{back_inserter, counted, SliceCursor, SliceWriter};
use strand::{begin, end};

#[test]
fn replace_copy_if_replaces_even_values() {
    let input = [1, 2, 3, 4, 5];
    let mut output = [0; 5];
    let result = replace_copy_if(
        begin(&input),
        end(&input),
        SliceWriter::new(&mut output),
        |x| **x % 2 == 0,
        &0,
    );
    assert_eq!(result.input.position(), 5);
    assert_eq!(result.output.position(), 5);
    assert_eq!(output, [1, 0, 3, 0, 5]);
}

#[test]
fn replace_copy_if_on_empty_input() {
    let input: Vec<i32> = Vec::new();
    let mut output: Vec<i32> = Vec::new();
    let result = replace_copy_if_range(&input, back_inserter(&mut output), |_| true, &7);
    assert_eq!(result.input, begin(&input));
    assert!(result.output.is_empty());
}

#[test]
fn replace_copy_if_over_a_counted_range() {
    let input = ["keep", "drop", "keep", "drop"];
    let (first, last) = counted(begin(&input), 3);
    let mut output: Vec<&str> = Vec::new();
    let result = replace_copy_if(first, last, back_inserter(&mut output), |s| **s == "drop", &"-");
    assert_eq!(result.input.remaining(), 0);
    assert_eq!(output, ["keep", "-", "keep"]);
}

#[test]
fn set_union_interleaves_disjoint_inputs() {
    let mut output: Vec<i32> = Vec::new();
    set_union_range(&[1, 3, 5], &[2, 4, 6], back_inserter(&mut output));
    assert_eq!(output, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn set_union_collapses_only_matched_duplicates() {
    let mut output: Vec<i32> = Vec::new();
    set_union_range(&[1, 2, 2, 4], &[2, 3, 4], back_inserter(&mut output));
    assert_eq!(output, [1, 2, 2, 3, 4]);
}

#[test]
fn set_union_with_an_empty_side() {
    let empty: [i32; 0] = [];
    let mut output: Vec<i32> = Vec::new();
    let result = set_union_range(&empty, &[7, 8, 9], back_inserter(&mut output));
    assert_eq!(result.input1.position(), 0);
    assert_eq!(result.input2.position(), 3);
    assert_eq!(output, [7, 8, 9]);

    output.clear();
    set_union_range(&[7, 8, 9], &empty, back_inserter(&mut output));
    assert_eq!(output, [7, 8, 9]);
}

#[test]
fn set_union_stops_comparing_once_a_side_is_exhausted() {
    let calls = Cell::new(0);
    let left = [1];
    let right = [2, 3, 4, 5, 6];
    let mut output: Vec<i32> = Vec::new();
    let In1In2Out { input1, input2, .. } = set_union_by(
        begin(&left),
        end(&left),
        begin(&right),
        end(&right),
        back_inserter(&mut output),
        |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a < b
        },
        |x: &i32| *x,
        |x: &i32| *x,
    );
    assert_eq!(calls.get(), 1);
    assert_eq!(input1.position(), 1);
    assert_eq!(input2.position(), 5);
    assert_eq!(output, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn set_union_with_an_empty_side_never_compares() {
    let calls = Cell::new(0);
    let empty: [i32; 0] = [];
    let full = [3, 4, 5];
    let mut output: Vec<i32> = Vec::new();
    let mut count = |a: &i32, b: &i32| {
        calls.set(calls.get() + 1);
        a < b
    };
    let result = set_union_by(
        begin(&empty),
        end(&empty),
        begin(&full),
        end(&full),
        back_inserter(&mut output),
        &mut count,
        |x: &i32| *x,
        |x: &i32| *x,
    );
    assert_eq!(result.input2.position(), 3);
    set_union_by(
        begin(&full),
        end(&full),
        begin(&empty),
        end(&empty),
        back_inserter(&mut output),
        &mut count,
        |x: &i32| *x,
        |x: &i32| *x,
    );
    assert_eq!(calls.get(), 0);
    assert_eq!(output, [3, 4, 5, 3, 4, 5]);
}

#[test]
fn set_union_accepts_unsorted_input() {
    let mut output: Vec<i32> = Vec::new();
    set_union_range(&[5, 1, 4], &[3, 9, 0], back_inserter(&mut output));
    let mut sorted = output.clone();
    sorted.sort();
    assert_eq!(sorted, [0, 1, 3, 4, 5, 9]);
}

#[test]
fn set_union_mixes_cursor_and_sentinel_types() {
    let left = vec![1, 4, 6, 100, 200];
    let right = [2, 4, 5];
    let (first1, last1) = counted(begin(&left), 3);
    let mut output: Vec<i32> = Vec::new();
    let result = set_union(first1, last1, begin(&right), end(&right), back_inserter(&mut output));
    assert_eq!(result.input1.base().position(), 3);
    assert_eq!(output, [1, 2, 4, 5, 6]);
}

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    name: &'static str,
    age: u32,
}

#[test]
fn stable_sort_by_projected_key() {
    let mut staff = vec![
        Employee { name: "ines", age: 41 },
        Employee { name: "bo", age: 29 },
        Employee { name: "kai", age: 41 },
        Employee { name: "ana", age: 29 },
    ];
    stable_sort_by(&mut staff, |a: &u32, b: &u32| a < b, |e: &Employee| e.age);
    let names: Vec<&str> = staff.iter().map(|e| e.name).collect();
    assert_eq!(names, ["bo", "ana", "ines", "kai"]);
}

#[test]
fn slice_cursor_end_equals_itself() {
    let data = [1, 2];
    assert_eq!(end(&data), SliceCursor::end(&data));
}
