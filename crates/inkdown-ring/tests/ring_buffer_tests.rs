//! Integration tests for the ring buffer

use std::collections::VecDeque;

use inkdown_ring::{RingBuffer, RingBufferError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_zero_capacity_is_rejected() {
    let result = RingBuffer::<i32>::new(0);
    assert_eq!(result.unwrap_err(), RingBufferError::ZeroCapacity);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
fn test_new_buffer_is_empty(#[case] capacity: usize) {
    let buffer = RingBuffer::<i32>::new(capacity).unwrap();
    assert!(buffer.is_empty());
    assert!(!buffer.is_full());
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), capacity);
}

// ============================================================================
// Read / Write
// ============================================================================

#[test]
fn test_reading_empty_buffer_fails() {
    let mut buffer = RingBuffer::<i32>::new(1).unwrap();
    assert_eq!(buffer.read(), Err(RingBufferError::Empty));
}

#[test]
fn test_read_item_just_written() {
    let mut buffer = RingBuffer::new(1).unwrap();
    buffer.write(1).unwrap();
    assert_eq!(buffer.read(), Ok(1));
}

#[test]
fn test_each_item_may_only_be_read_once() {
    let mut buffer = RingBuffer::new(1).unwrap();
    buffer.write(1).unwrap();
    assert_eq!(buffer.read(), Ok(1));
    assert_eq!(buffer.read(), Err(RingBufferError::Empty));
}

#[test]
fn test_items_are_read_in_write_order() {
    let mut buffer = RingBuffer::new(4).unwrap();
    for value in 1..=4 {
        buffer.write(value).unwrap();
    }
    assert!(buffer.is_full());
    for expected in 1..=4 {
        assert_eq!(buffer.read(), Ok(expected));
    }
    assert!(buffer.is_empty());
}

#[test]
fn test_writing_to_full_buffer_fails() {
    let mut buffer = RingBuffer::new(2).unwrap();
    buffer.write(1).unwrap();
    buffer.write(2).unwrap();
    assert_eq!(buffer.write(3), Err(RingBufferError::Full { capacity: 2 }));

    // The rejected write leaves the contents untouched.
    assert_eq!(buffer.read(), Ok(1));
    assert_eq!(buffer.read(), Ok(2));
}

#[test]
fn test_read_wrapped_buffer() {
    let mut buffer = RingBuffer::new(3).unwrap();
    buffer.write(1).unwrap();
    buffer.write(2).unwrap();
    buffer.write(3).unwrap();
    assert_eq!(buffer.read(), Ok(1));
    buffer.write(4).unwrap();

    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.read(), Ok(2));
    assert_eq!(buffer.read(), Ok(3));
    assert_eq!(buffer.read(), Ok(4));
}

#[test]
fn test_len_tracks_wrapped_indices() {
    let mut buffer = RingBuffer::new(3).unwrap();
    buffer.write('a').unwrap();
    buffer.write('b').unwrap();
    buffer.read().unwrap();
    buffer.read().unwrap();
    buffer.write('c').unwrap();
    buffer.write('d').unwrap();
    assert_eq!(buffer.len(), 2);
}

// ============================================================================
// Overwrite
// ============================================================================

#[test]
fn test_overwrite_in_full_buffer_discards_oldest() {
    let mut buffer = RingBuffer::new(2).unwrap();
    buffer.write(1).unwrap();
    buffer.write(2).unwrap();
    assert_eq!(buffer.overwrite(3), Some(1));
    assert_eq!(buffer.read(), Ok(2));
    assert_eq!(buffer.read(), Ok(3));
}

#[test]
fn test_overwrite_acts_like_write_when_not_full() {
    let mut buffer = RingBuffer::new(3).unwrap();
    buffer.write(1).unwrap();
    assert_eq!(buffer.overwrite(2), None);
    assert_eq!(buffer.read(), Ok(1));
    assert_eq!(buffer.read(), Ok(2));
}

#[test]
fn test_repeated_overwrite_keeps_newest_values() {
    let mut buffer = RingBuffer::new(2).unwrap();
    buffer.write(1).unwrap();
    buffer.write(2).unwrap();
    assert_eq!(buffer.overwrite(3), Some(1));
    assert_eq!(buffer.overwrite(4), Some(2));
    assert!(buffer.is_full());
    assert_eq!(buffer.read(), Ok(3));
    assert_eq!(buffer.read(), Ok(4));
}

#[test]
fn test_overwrite_after_partial_read() {
    let mut buffer = RingBuffer::new(3).unwrap();
    buffer.write(1).unwrap();
    buffer.write(2).unwrap();
    buffer.write(3).unwrap();
    assert_eq!(buffer.read(), Ok(1));
    buffer.write(4).unwrap();
    assert_eq!(buffer.overwrite(5), Some(2));
    assert_eq!(buffer.read(), Ok(3));
    assert_eq!(buffer.read(), Ok(4));
    assert_eq!(buffer.read(), Ok(5));
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_empties_buffer() {
    let mut buffer = RingBuffer::new(1).unwrap();
    buffer.write(1).unwrap();
    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.read(), Err(RingBufferError::Empty));
}

#[test]
fn test_clear_full_buffer() {
    let mut buffer = RingBuffer::new(3).unwrap();
    buffer.write(1).unwrap();
    buffer.write(2).unwrap();
    buffer.write(3).unwrap();
    buffer.clear();
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.read(), Err(RingBufferError::Empty));
}

#[test]
fn test_write_after_clear() {
    let mut buffer = RingBuffer::new(2).unwrap();
    buffer.write(1).unwrap();
    buffer.clear();
    buffer.write(2).unwrap();
    assert_eq!(buffer.read(), Ok(2));
}

#[test]
fn test_clear_on_empty_buffer_is_noop() {
    let mut buffer = RingBuffer::<String>::new(2).unwrap();
    buffer.clear();
    assert!(buffer.is_empty());
    buffer.write("x".to_string()).unwrap();
    assert_eq!(buffer.read().as_deref(), Ok("x"));
}

// ============================================================================
// Error display
// ============================================================================

#[test]
fn test_error_messages() {
    assert_eq!(
        RingBufferError::Empty.to_string(),
        "cannot read from an empty buffer"
    );
    assert_eq!(
        RingBufferError::Full { capacity: 4 }.to_string(),
        "cannot write to a full buffer (capacity 4)"
    );
    assert_eq!(
        RingBufferError::ZeroCapacity.to_string(),
        "capacity must be greater than zero"
    );
}

// ============================================================================
// Model check against VecDeque
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Write(u8),
    Overwrite(u8),
    Read,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Write),
        2 => any::<u8>().prop_map(Op::Overwrite),
        4 => Just(Op::Read),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn test_matches_bounded_deque(
        capacity in 1usize..6,
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut buffer = RingBuffer::new(capacity).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(v) => {
                    let result = buffer.write(v);
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(RingBufferError::Full { capacity }));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.push_back(v);
                    }
                }
                Op::Overwrite(v) => {
                    let evicted = if model.len() == capacity {
                        model.pop_front()
                    } else {
                        None
                    };
                    model.push_back(v);
                    prop_assert_eq!(buffer.overwrite(v), evicted);
                }
                Op::Read => {
                    let expected = model.pop_front().ok_or(RingBufferError::Empty);
                    prop_assert_eq!(buffer.read(), expected);
                }
                Op::Clear => {
                    buffer.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(buffer.len(), model.len());
            prop_assert_eq!(buffer.is_empty(), model.is_empty());
            prop_assert_eq!(buffer.is_full(), model.len() == capacity);
        }
    }
}
