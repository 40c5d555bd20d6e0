#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Cursor;

use readnum_core::{LineBuf, ReadOutcome, read_line};

fuzz_target!(|data: &[u8]| {
    let mut stream = Cursor::new(data);
    let mut buf = LineBuf::new();

    let mut total = 0usize;
    while let ReadOutcome::Line(produced) = read_line(&mut stream, &mut buf) {
        // Stored text excludes the newline and is NUL-terminated once.
        assert_eq!(produced, buf.len() + 1);
        assert!(!buf.contents().contains(&b'\n'));
        assert_eq!(buf.terminated().last(), Some(&0u8));

        // Every line accounts for its content plus at most one newline.
        total += buf.len();
        assert!(total <= data.len());
    }
});
