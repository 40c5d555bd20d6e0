#![no_main]
use libfuzzer_sys::fuzz_target;

use readnum_core::convert::{scan_float, scan_signed, scan_unsigned};

fuzz_target!(|data: &[u8]| {
    // The scanners must never panic and must never report a consumed span
    // longer than the input.
    let (_, consumed, _) = scan_signed(data, 0);
    assert!(consumed <= data.len());

    let (_, consumed, _) = scan_unsigned(data, 0);
    assert!(consumed <= data.len());

    let (_, consumed, _) = scan_float(data);
    assert!(consumed <= data.len());

    // Explicit bases, including invalid ones.
    if let Some((&first, rest)) = data.split_first() {
        let _ = scan_signed(rest, first as u32);
        let _ = scan_unsigned(rest, first as u32);
    }
});
