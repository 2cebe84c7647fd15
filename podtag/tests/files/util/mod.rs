use std::fs::File;
use std::io::{Seek as _, Write as _};

/// A few MPEG frames worth of bytes that start with a valid frame sync
pub fn fake_audio(len: usize) -> Vec<u8> {
	let mut audio = vec![0xFF, 0xFB, 0x90, 0x64];
	audio.extend((0..len.saturating_sub(4)).map(|i| (i % 251) as u8));
	audio
}

/// Build an ID3v2 tag by hand, with `body` as its (already encoded) frames and padding
pub fn raw_tag(major: u8, flags: u8, body: &[u8]) -> Vec<u8> {
	let size = body.len() as u32;
	assert!(size <= 0x0FFF_FFFF);

	let mut tag = vec![b'I', b'D', b'3', major, 0, flags];
	tag.extend([
		((size >> 21) & 0x7F) as u8,
		((size >> 14) & 0x7F) as u8,
		((size >> 7) & 0x7F) as u8,
		(size & 0x7F) as u8,
	]);
	tag.extend_from_slice(body);
	tag
}

/// Build an ID3v2.3/ID3v2.4 frame with a plain size
pub fn raw_frame(id: &[u8; 4], content: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend((content.len() as u32).to_be_bytes());
	frame.extend([0, 0]);
	frame.extend_from_slice(content);
	frame
}

/// Create a new temporary file holding `content`
pub fn temp_file(content: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}
