#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Cursor;

use readnum_core::read_scalar_from;

fuzz_target!(|data: &[u8]| {
    // The retry loop must terminate on any finite stream and must never
    // return an out-of-range value.
    let mut stream = Cursor::new(data);
    let mut diag = Vec::new();
    let val: i16 = read_scalar_from(&mut stream, &mut diag);
    let _ = i32::from(val);

    let mut stream = Cursor::new(data);
    let val: u16 = read_scalar_from(&mut stream, &mut diag);
    let _ = u32::from(val);

    let mut stream = Cursor::new(data);
    let val: f32 = read_scalar_from(&mut stream, &mut diag);
    assert!(val.is_nan() || val.is_infinite() || val.abs() <= f32::MAX);
});
