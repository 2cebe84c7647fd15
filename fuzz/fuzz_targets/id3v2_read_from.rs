#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use podtag::config::{ParseOptions, ParsingMode};

fuzz_target!(|data: Vec<u8>| {
	for mode in [ParsingMode::BestAttempt, ParsingMode::Strict] {
		let _ = podtag::id3::v2::read_from(
			&mut Cursor::new(&data),
			ParseOptions::new().parsing_mode(mode),
		);
	}
});
