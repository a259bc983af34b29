#![no_main]

use idring::RingBuffer;
use libfuzzer_sys::fuzz_target;

// First byte picks the capacity, then each byte pair is one operation.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = (cap as usize % 32) + 1;
    let rb = RingBuffer::new(capacity);

    for pair in ops.chunks_exact(2) {
        let (kind, arg) = (pair[0], pair[1]);
        let (oldest, newest) = rb.bounds();
        match kind % 5 {
            0 => rb.push(arg),
            1 => {
                let id = newest + arg as i64 - 64;
                let result = rb.upsert_by_id(id, arg);
                assert_eq!(result.is_err(), id < oldest);
                if result.is_ok() {
                    assert_eq!(rb.get_by_id(id).unwrap(), Some(arg));
                }
            }
            2 => {
                let id = oldest + arg as i64 - 128;
                let _ = rb.get_by_id(id);
            }
            3 => {
                let newer = rb.get_newer_by_id(newest - arg as i64).unwrap();
                assert!(newer.len() <= capacity);
            }
            _ => {
                let _ = rb.get_by_index(arg as usize);
            }
        }

        let (oldest, newest) = rb.bounds();
        assert!(oldest <= newest + 1);
        assert!(newest - oldest + 1 <= capacity as i64);
        assert_eq!(rb.len(), capacity);
    }
});
