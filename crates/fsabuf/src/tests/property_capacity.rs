use alloc::vec::Vec;

use quickcheck::QuickCheck;

use crate::{ByteBuffer, ensure_byte_capacity};

use super::quickcheck_tests;

/// Property: feeding a scratch buffer through a sequence of requests never
/// leaves it smaller than the latest request, keeps it whenever it already
/// fits, and replaces it with an empty buffer of the exact size otherwise.
#[test]
fn capacity_requests_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(requests: Vec<u16>) -> bool {
        let mut scratch: Option<ByteBuffer> = None;
        for request in requests {
            let request = usize::from(request);
            let before = scratch.as_ref().map(|b| (b.capacity(), b.storage().as_ptr()));
            let buffer = ensure_byte_capacity(scratch.take(), request);

            let ok = match before {
                Some((capacity, ptr)) if capacity >= request => {
                    buffer.capacity() == capacity && buffer.storage().as_ptr() == ptr
                }
                _ => {
                    buffer.capacity() == request
                        && buffer.position() == 0
                        && buffer.storage().iter().all(|&b| b == 0)
                }
            };
            if !ok || buffer.capacity() < request {
                return false;
            }
            scratch = Some(buffer);
        }
        true
    }

    QuickCheck::new()
        .tests(quickcheck_tests().min(500))
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}
