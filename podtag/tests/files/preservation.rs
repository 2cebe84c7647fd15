use crate::util::{fake_audio, raw_frame, raw_tag, temp_file};
use podtag::TextEncoding;
use podtag::config::{ParseOptions, WriteOptions};
use podtag::id3::v2::{Id3v2Tag, Id3v2Version, TextFrameKind, TextInformationFrame};

use std::io::{Cursor, Read, Seek};

fn titled(version: Id3v2Version, title: &str) -> Id3v2Tag {
	Id3v2Tag::new(
		version,
		vec![
			TextInformationFrame::new(
				TextFrameKind::Title,
				TextEncoding::Latin1,
				String::from(title),
			)
			.into(),
		],
	)
}

fn save(tag: &Id3v2Tag, source: &[u8], write_options: WriteOptions) -> Vec<u8> {
	let mut output = Vec::new();
	tag.save_to(&mut Cursor::new(source), &mut output, write_options)
		.unwrap();
	output
}

#[test_log::test]
fn untagged_file() {
	let audio = fake_audio(4096);
	let output = save(&titled(Id3v2Version::V4, "Title"), &audio, WriteOptions::new());

	let end = podtag::id3::v2::locate_tag_end(&mut &output[..]).unwrap();
	assert_eq!(end, 26);
	assert_eq!(&output[end as usize..], audio);
}

#[test_log::test]
fn larger_and_smaller_tags() {
	let audio = fake_audio(1000);
	let original = [
		raw_tag(3, 0, &[raw_frame(b"TIT2", b"\x00A medium sized title"), vec![0; 64]].concat()),
		audio.clone(),
	]
	.concat();

	let long_title = "A much longer title ".repeat(50);
	for title in ["", "x", long_title.as_str()] {
		let tag = titled(Id3v2Version::V3, title);
		let output = save(&tag, &original, WriteOptions::new());

		let properties = podtag::id3::v2::read_from(&mut &output[..], ParseOptions::new()).unwrap();
		assert_eq!(properties.tag, tag);
		assert_eq!(&output[properties.end as usize..], audio);

		// Writing the same tag again is stable
		assert_eq!(save(&tag, &output, WriteOptions::new()), output);
	}
}

#[test_log::test]
fn padding_is_reused() {
	let audio = fake_audio(100);
	let tag = titled(Id3v2Version::V4, "Title");

	let output = save(&tag, &audio, WriteOptions::new().preferred_padding(512));
	assert_eq!(output.len(), 10 + 16 + 512 + 100);

	let output = save(&tag, &output, WriteOptions::new());
	assert_eq!(output.len(), 10 + 16 + 100);
	assert_eq!(&output[26..], audio);
}

#[test_log::test]
fn footer_is_replaced() {
	let audio = fake_audio(100);
	let mut original = raw_tag(4, 0x10, &raw_frame(b"TIT2", b"\x00Old"));
	let footer = [b"3DI".as_slice(), &original[3..10]].concat();
	original.extend(footer);
	original.extend(&audio);

	assert_eq!(
		podtag::id3::v2::locate_tag_end(&mut &original[..]).unwrap(),
		10 + 14 + 10
	);

	let output = save(&titled(Id3v2Version::V4, "New"), &original, WriteOptions::new());
	assert_eq!(&output[10..24], b"TIT2\x00\x00\x00\x04\x00\x00\x00New");
	assert_eq!(&output[24..], audio);
}

#[test_log::test]
fn in_place_file() {
	let audio = fake_audio(512);
	let original = [raw_tag(3, 0, &raw_frame(b"TIT2", b"\x00Old title")), audio.clone()].concat();

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("episode.mp3");
	std::fs::write(&path, &original).unwrap();

	let tag = titled(Id3v2Version::V4, "New title");
	tag.save_to_path(&path, &path, WriteOptions::new()).unwrap();

	let properties = podtag::id3::v2::read_from_path(&path, ParseOptions::new()).unwrap();
	assert_eq!(properties.tag, tag);

	let written = std::fs::read(&path).unwrap();
	assert_eq!(&written[properties.end as usize..], audio);
}

#[test_log::test]
fn file_source() {
	let audio = fake_audio(256);
	let original = raw_tag(3, 0, &raw_frame(b"TPE1", b"\x00Host"));
	let mut file = temp_file(&[original, audio.clone()].concat());

	let tag = titled(Id3v2Version::V3, "Title");
	let mut output = Vec::new();
	tag.save_to(&mut file, &mut output, WriteOptions::new()).unwrap();

	// The source is only read from
	file.rewind().unwrap();
	let mut source = Vec::new();
	file.read_to_end(&mut source).unwrap();
	assert_eq!(&source[..3], b"ID3");
	assert_eq!(&source[10..14], b"TPE1");

	let read = podtag::id3::v2::read_from(&mut &output[..], ParseOptions::new()).unwrap();
	assert_eq!(read.tag, tag);
	assert_eq!(&output[read.end as usize..], audio);
}
