//! Integration test: generation-checked cursors.
//!
//! Cursors step like bidirectional iterators and are dereferenced through
//! the array. Any mutation that invalidates positions (growth, reserve,
//! clear, replacement) must turn later dereferences into `StaleCursor`.

use vectra_array::{ArrayError, Cursor, DynamicArray};

fn collect_via_cursors(a: &DynamicArray<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut c = a.begin();
    while c != a.end() {
        out.push(*a.at_cursor(&c).unwrap());
        c.advance();
    }
    out
}

#[test]
fn walks_begin_to_end_in_order() {
    let a = DynamicArray::from([0, 1, 2, 3, 4]);
    assert_eq!(collect_via_cursors(&a), [0, 1, 2, 3, 4]);
}

#[test]
fn increment_and_decrement_forms() {
    let a = DynamicArray::from([10, 20, 30, 40, 50]);
    let mut it = a.begin();

    assert_eq!(a.at_cursor(&it), Ok(&10));
    assert_eq!(a.at_cursor(it.advance()), Ok(&20));
    assert_eq!(a.at_cursor(&it.post_advance()), Ok(&20));
    assert_eq!(a.at_cursor(&it), Ok(&30));
    assert_eq!(a.at_cursor(it.retreat()), Ok(&20));
    assert_eq!(a.at_cursor(&it.post_retreat()), Ok(&20));
    assert_eq!(a.at_cursor(&it), Ok(&10));
}

#[test]
fn comparisons() {
    let a = DynamicArray::from([1, 2, 3, 4, 5]);
    let it1 = a.begin();
    let it2 = a.begin();
    let mut it3 = a.begin();
    it3.advance().advance();

    assert!(it1 == it2);
    assert!(it1 != it3);
    assert_eq!(it3.index(), 2);
}

#[test]
fn empty_array_begin_equals_end() {
    let empty: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(empty.begin(), empty.end());

    let single = DynamicArray::from([42]);
    assert_ne!(single.begin(), single.end());
    assert_eq!(single.at_cursor(&single.begin()), Ok(&42));
}

#[test]
fn end_and_before_begin_are_out_of_range() {
    let a = DynamicArray::from([1, 2, 3]);
    assert_eq!(
        a.at_cursor(&a.end()),
        Err(ArrayError::OutOfRange { index: 3, len: 3 })
    );
    let mut before = a.begin();
    before.retreat();
    assert!(matches!(
        a.at_cursor(&before),
        Err(ArrayError::OutOfRange { .. })
    ));
}

#[test]
fn write_through_cursor() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let mut c = a.begin();
    c.advance();
    *a.at_cursor_mut(&c).unwrap() = 20;
    assert_eq!(a, [1, 20, 3]);
}

#[test]
fn push_within_capacity_keeps_cursors_valid() {
    let mut a = DynamicArray::with_capacity(8);
    a.push(1);
    let c = a.begin();
    a.push(2);
    a.push(3);
    assert_eq!(a.at_cursor(&c), Ok(&1));
}

#[test]
fn pop_keeps_generation_but_range_shrinks() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let last = a.cursor_at(2);
    a.remove_last();
    assert_eq!(
        a.at_cursor(&last),
        Err(ArrayError::OutOfRange { index: 2, len: 2 })
    );
}

fn assert_stale(a: &DynamicArray<i32>, c: &Cursor) {
    match a.at_cursor(c) {
        Err(ArrayError::StaleCursor {
            cursor_generation,
            current_generation,
        }) => {
            assert_eq!(cursor_generation, c.generation());
            assert_eq!(current_generation, a.generation());
        }
        other => panic!("expected StaleCursor, got {other:?}"),
    }
}

#[test]
fn growth_invalidates() {
    let mut a = DynamicArray::from([1, 2, 3, 4]);
    let c = a.begin();
    a.push(5);
    assert_stale(&a, &c);
}

#[test]
fn reserve_past_capacity_invalidates_but_smaller_reserve_does_not() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let c = a.begin();
    a.reserve(2);
    assert_eq!(a.at_cursor(&c), Ok(&1));
    a.reserve(64);
    assert_stale(&a, &c);
}

#[test]
fn clear_invalidates_even_after_refill() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let c = a.begin();
    a.clear();
    a.push(9);
    assert_stale(&a, &c);
}

#[test]
fn assignment_invalidates_target_cursors() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let b = DynamicArray::from([7, 8, 9]);
    let from_a = a.begin();
    let from_b = b.begin();

    a.clone_from(&b);
    assert_stale(&a, &from_a);
    // The clone has its own storage, so cursors into `b` do not carry over.
    assert_stale(&a, &from_b);
}

#[test]
fn cursors_follow_moved_storage() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let c = a.cursor_at(1);
    let b = a.take();
    assert_eq!(b.at_cursor(&c), Ok(&2));
    assert_stale(&a, &c);
}
