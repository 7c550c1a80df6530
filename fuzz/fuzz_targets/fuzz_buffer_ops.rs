#![no_main]

use arbitrary::Arbitrary;
use fsabuf::{
    ByteBuffer, Charset, Decode, checked_shared_prefix_len, decode_to_string,
    ensure_byte_capacity, shared_prefix_len, try_decode_to_string,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    a: Vec<u8>,
    a_position: u8,
    a_start: u8,
    b: Vec<u8>,
    b_position: u8,
    b_start: u8,
    capacity: u16,
    charset: u8,
}

fn positioned(content: &[u8], position: u8) -> ByteBuffer {
    let mut buffer = ByteBuffer::from(content);
    buffer
        .set_position(usize::from(position).min(content.len()))
        .unwrap();
    buffer
}

fn naive_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn run(input: &Input) {
    let a = positioned(&input.a, input.a_position);
    let b = positioned(&input.b, input.b_position);
    let (a_start, b_start) = (usize::from(input.a_start), usize::from(input.b_start));

    let got = shared_prefix_len(&a, a_start, &b, b_start);
    match (a.as_slice().get(a_start..), b.as_slice().get(b_start..)) {
        (Some(x), Some(y)) => {
            assert_eq!(got, naive_prefix_len(x, y));
            assert_eq!(checked_shared_prefix_len(&a, a_start, &b, b_start), Ok(got));
        }
        _ => {
            assert_eq!(got, 0);
            assert!(checked_shared_prefix_len(&a, a_start, &b, b_start).is_err());
        }
    }
    assert_eq!(shared_prefix_len(&b, b_start, &a, a_start), got);

    let capacity = usize::from(input.capacity);
    let before = a.capacity();
    let ensured = ensure_byte_capacity(Some(a), capacity);
    assert!(ensured.capacity() >= capacity);
    if before >= capacity {
        assert_eq!(ensured.capacity(), before);
    } else {
        assert_eq!(ensured.position(), 0);
    }

    let charset = match input.charset % 5 {
        0 => Charset::Utf8,
        1 => Charset::Utf16Be,
        2 => Charset::Utf16Le,
        3 => Charset::Latin1,
        _ => Charset::Ascii,
    };
    let lossy = decode_to_string(&b, &charset);
    if let Ok(strict) = try_decode_to_string(&b, &charset) {
        assert_eq!(strict, lossy);
    }
    assert_eq!(lossy, charset.decode_lossy(b.as_slice()));
}

fuzz_target!(|input: Input| run(&input));
