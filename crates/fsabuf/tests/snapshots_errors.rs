#![allow(missing_docs)]

use core::fmt::Write;

use fsabuf::{
    ByteBuffer, Charset, checked_shared_prefix_len, ensure_byte_capacity, try_decode_to_string,
};

fn render_errors() -> String {
    let mut out = String::new();
    let mut abc = ByteBuffer::from(&b"abc"[..]);

    writeln!(out, "{}", abc.set_position(7).unwrap_err()).unwrap();
    writeln!(out, "{}", abc.set_limit(9).unwrap_err()).unwrap();
    writeln!(
        out,
        "{}",
        ensure_byte_capacity(None, 2).put_slice(b"xyz").unwrap_err()
    )
    .unwrap();
    writeln!(out, "{}", ByteBuffer::default().get().unwrap_err()).unwrap();
    writeln!(
        out,
        "{}",
        checked_shared_prefix_len(&abc, 5, &abc, 0).unwrap_err()
    )
    .unwrap();
    let bad = ByteBuffer::from(&b"a\xFF"[..]);
    writeln!(
        out,
        "{}",
        try_decode_to_string(&bad, &Charset::Utf8).unwrap_err()
    )
    .unwrap();
    writeln!(out, "{}", "ebcdic".parse::<Charset>().unwrap_err()).unwrap();
    out
}

#[test]
fn snapshot_error_messages() {
    insta::assert_snapshot!(render_errors(), @r"
    position 7 exceeds limit 3
    limit 9 exceeds capacity 3
    buffer overflow: 3 element(s) requested, 2 remaining
    buffer underflow
    offset 5 out of range for 3 remaining element(s)
    malformed UTF-8 input: 1 byte(s) at offset 1
    unsupported charset 'ebcdic'
    ");
}
