use rstest::*;

use crate::{
    ByteBuffer, CharBuffer, ensure_byte_capacity, ensure_capacity, ensure_capacity_in,
    ensure_char_capacity,
};

#[rstest]
#[case(0)]
#[case(1)]
#[case(64)]
fn missing_buffer_is_allocated_empty(#[case] capacity: usize) {
    let buffer = ensure_byte_capacity(None, capacity);
    assert_eq!(buffer.capacity(), capacity);
    assert_eq!(buffer.position(), 0);
    assert!(buffer.storage().iter().all(|&b| b == 0));

    let chars = ensure_char_capacity(None, capacity);
    assert_eq!(chars.capacity(), capacity);
    assert!(chars.storage().iter().all(|&c| c == '\0'));
}

#[rstest]
#[case(5)]
#[case(3)]
#[case(0)]
fn large_enough_buffer_is_returned_as_is(#[case] requested: usize) {
    let mut buffer = ByteBuffer::from(&b"hello"[..]);
    buffer.set_position(2).unwrap();
    buffer.set_limit(4).unwrap();
    let storage = buffer.storage().as_ptr();

    let reused = ensure_byte_capacity(Some(buffer), requested);
    assert_eq!(reused.storage().as_ptr(), storage);
    assert_eq!(reused.position(), 2);
    assert_eq!(reused.limit(), 4);
    assert_eq!(reused.as_bstr(), "ll");
}

#[test]
fn too_small_buffer_is_replaced_without_copying() {
    let mut buffer = ByteBuffer::from(&b"hello"[..]);
    buffer.set_position(3).unwrap();

    let replaced = ensure_byte_capacity(Some(buffer), 6);
    assert_eq!(replaced.capacity(), 6);
    assert_eq!(replaced.position(), 0);
    assert_eq!(replaced.limit(), 6);
    assert_eq!(replaced.storage(), &[0; 6]);
}

#[test]
fn char_buffers_follow_the_same_rule() {
    let chars = CharBuffer::from(&['a', 'b'][..]);
    let kept = ensure_char_capacity(Some(chars), 2);
    assert_eq!(kept.as_slice(), &['a', 'b']);

    let grown = ensure_capacity(Some(kept), 3);
    assert_eq!(grown.as_slice(), &['\0'; 3]);
}

#[test]
fn slot_is_filled_then_reused_then_replaced() {
    let mut slot: Option<ByteBuffer> = None;

    ensure_capacity_in(&mut slot, 4).put_slice(b"ab").unwrap();
    assert_eq!(slot.as_ref().map(ByteBuffer::position), Some(2));

    let reused = ensure_capacity_in(&mut slot, 2);
    assert_eq!(reused.position(), 2);
    assert_eq!(&reused.storage()[..2], b"ab");

    let replaced = ensure_capacity_in(&mut slot, 8);
    assert_eq!(replaced.capacity(), 8);
    assert_eq!(replaced.position(), 0);
    assert!(slot.is_some());
}
