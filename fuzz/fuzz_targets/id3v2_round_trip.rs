#![no_main]

use libfuzzer_sys::fuzz_target;
use podtag::config::{ParseOptions, WriteOptions};
use podtag::id3::v2::Id3v2Version;

// Any tag that can be written again must be readable, with the same number of frames
fuzz_target!(|data: &[u8]| {
	let Ok(properties) = podtag::id3::v2::read_from(&mut &data[..], ParseOptions::new()) else {
		return;
	};

	if properties.tag.version() == Id3v2Version::V2 {
		return;
	}

	let mut written = Vec::new();
	let Ok(outcome) = properties.tag.dump_to(&mut written, WriteOptions::new()) else {
		return;
	};

	if !outcome.is_complete() {
		return;
	}

	let reread = podtag::id3::v2::read_from(&mut &written[..], ParseOptions::new())
		.expect("written tags should always be readable");

	assert_eq!(reread.tag.len(), properties.tag.len());
});
