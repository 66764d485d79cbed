//! Scratch buffer and temporary vector.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use strand::scratch::{make_temporary_vector, ScratchConfig, TemporaryBuffer, TemporaryVector, MAX_NATURAL_ALIGN};

#[repr(align(64))]
#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheLine {
    tag: u32,
}

/// Counts how many times values created from one counter were dropped.
#[derive(Debug)]
struct Tracked {
    drops: Rc<Cell<usize>>,
    order: Rc<RefCell<Vec<u32>>>,
    id: u32,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
        self.order.borrow_mut().push(self.id);
    }
}

fn tracked(n: u32, drops: &Rc<Cell<usize>>, order: &Rc<RefCell<Vec<u32>>>) -> Tracked {
    return Tracked { drops: Rc::clone(drops), order: Rc::clone(order), id: n };
}

#[test]
fn over_aligned_elements_land_on_their_alignment() {
    assert!(std::mem::align_of::<CacheLine>() > MAX_NATURAL_ALIGN);
    let mut buffer = TemporaryBuffer::<CacheLine>::new(5);
    assert_eq!(buffer.len(), 5);
    let addr = buffer.data().map_or(1, |p| p.as_ptr() as usize);
    assert_eq!(addr % 64, 0);

    let mut lines = make_temporary_vector(&mut buffer);
    for tag in 0..5 {
        lines.push(CacheLine { tag });
    }
    assert_eq!(lines[4], CacheLine { tag: 4 });
    assert_eq!(&lines[4] as *const CacheLine as usize % 64, 0);
}

#[test]
fn byte_limit_too_small_for_padding_grants_nothing() {
    let config = ScratchConfig::default().with_byte_limit(64 + 62);
    let mut buffer = TemporaryBuffer::<CacheLine>::with_config(3, &config);
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.requested(), 3);
    let vec = TemporaryVector::new(&mut buffer);
    assert_eq!(vec.capacity(), 0);
    assert!(vec.is_empty());
}

#[test]
fn short_grants_are_reported_through_len() {
    let config = ScratchConfig::new().with_byte_limit(3 * std::mem::size_of::<u64>());
    let buffer = TemporaryBuffer::<u64>::with_config(1_000, &config);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn drops_exactly_the_live_elements() {
    let drops = Rc::new(Cell::new(0));
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut buffer = TemporaryBuffer::<Tracked>::new(10);
    {
        let mut vec = make_temporary_vector(&mut buffer);
        for id in 0..3 {
            vec.push(tracked(id, &drops, &order));
        }
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.capacity(), 10);
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 3);
    assert_eq!(*order.borrow(), [0, 1, 2]);
}

#[test]
fn clear_drops_in_order_and_is_idempotent() {
    let drops = Rc::new(Cell::new(0));
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut buffer = TemporaryBuffer::<Tracked>::new(4);
    let mut vec = make_temporary_vector(&mut buffer);
    for id in [7, 8] {
        vec.push(tracked(id, &drops, &order));
    }
    vec.clear();
    assert_eq!(drops.get(), 2);
    assert!(vec.empty());
    vec.clear();
    assert_eq!(drops.get(), 2);

    vec.push(tracked(9, &drops, &order));
    drop(vec);
    assert_eq!(drops.get(), 3);
    assert_eq!(*order.borrow(), [7, 8, 9]);
}

#[test]
fn clear_at_capacity_drops_each_element_once() {
    let drops = Rc::new(Cell::new(0));
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut buffer = TemporaryBuffer::<Tracked>::new(4);
    let mut vec = make_temporary_vector(&mut buffer);
    let capacity = vec.capacity();
    for id in 0..capacity as u32 {
        vec.push(tracked(id, &drops, &order));
    }
    assert_eq!(vec.len(), capacity);
    assert!(vec.try_push(tracked(99, &drops, &order)).is_err());
    // The rejected value came back and was dropped with the error.
    assert_eq!(drops.get(), 1);

    vec.clear();
    assert_eq!(drops.get(), capacity + 1);
    assert_eq!(*order.borrow(), [99, 0, 1, 2, 3]);
    drop(vec);
    assert_eq!(drops.get(), capacity + 1);
}

#[test]
fn buffer_can_back_a_second_vector_after_the_first() {
    let mut buffer = TemporaryBuffer::<String>::new(2);
    {
        let mut first = make_temporary_vector(&mut buffer);
        first.push("one".to_string());
    }
    let mut second = make_temporary_vector(&mut buffer);
    assert!(second.is_empty());
    second.push("two".to_string());
    second[0].push('!');
    assert_eq!(second.as_slice(), ["two!"]);
}

#[test]
#[should_panic(expected = "capacity")]
fn push_past_capacity_panics() {
    let mut buffer = TemporaryBuffer::<u8>::new(1);
    let mut vec = make_temporary_vector(&mut buffer);
    vec.push(1);
    vec.push(2);
}

#[test]
#[should_panic(expected = "out of range")]
fn index_past_len_panics() {
    let mut buffer = TemporaryBuffer::<u8>::new(4);
    let mut vec = make_temporary_vector(&mut buffer);
    vec.push(1);
    let value = vec[1];
    assert_eq!(value, 0);
}

#[test]
fn try_push_hands_the_value_back() {
    let mut buffer = TemporaryBuffer::<Vec<u8>>::new(1);
    let mut vec = make_temporary_vector(&mut buffer);
    assert!(vec.try_push(vec![1]).is_ok());
    let err = vec.try_push(vec![2, 3]).unwrap_err();
    assert_eq!(err.to_string(), "temporary vector is at capacity");
    assert_eq!(err.into_inner(), [2, 3]);
    assert_eq!(vec.size(), 1);
}

#[test]
fn zero_sized_elements() {
    let mut buffer = TemporaryBuffer::<()>::new(3);
    let mut vec = make_temporary_vector(&mut buffer);
    vec.push(());
    vec.push(());
    vec.push(());
    assert!(vec.try_push(()).is_err());
    assert_eq!(strand::size(&vec), 3);
}
