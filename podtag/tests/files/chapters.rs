use crate::util::{fake_audio, raw_tag};
use podtag::TextEncoding;
use podtag::config::{ParseOptions, ParsingMode, WriteOptions};
use podtag::id3::v2::{
	BinaryFrame, ChapterFrame, Frame, Id3v2Tag, Id3v2Version, TableOfContentsFrame, TextFrameKind,
	TextInformationFrame, UrlFrameKind, UrlLinkFrame,
};

use std::io::Cursor;
use std::time::Duration;

fn title(value: &str) -> Frame {
	TextInformationFrame::new(TextFrameKind::Title, TextEncoding::UTF16, String::from(value)).into()
}

fn chapter(index: u64, name: &str) -> ChapterFrame {
	ChapterFrame::new(
		format!("chp{index}"),
		Duration::from_secs(index * 300),
		Duration::from_secs((index + 1) * 300),
		vec![title(name)],
	)
}

fn podcast_tag(version: Id3v2Version) -> Id3v2Tag {
	let toc = TableOfContentsFrame::new(
		String::from("toc"),
		true,
		true,
		vec![String::from("chp0"), String::from("chp1"), String::from("chp2")],
		vec![title("Episode 1")],
	);

	let mut outro = chapter(2, "Outro");
	outro.start_offset = Some(0x1000);
	outro.sub_frames.push(
		UrlLinkFrame::new(
			UrlFrameKind::ArtistWebpage,
			String::from("https://example.com/host"),
		)
		.into(),
	);

	Id3v2Tag::new(
		version,
		vec![
			title("Episode 1"),
			toc.into(),
			chapter(0, "Introduction").into(),
			chapter(1, "Interview").into(),
			outro.into(),
		],
	)
}

macro_rules! generate_chapter_tests {
	($($version:ident),+ $(,)?) => {
		paste::paste! {
			$(
				#[test_log::test]
				fn [<chapters_ $version:lower>]() {
					let tag = podcast_tag(Id3v2Version::$version);

					let mut file = Cursor::new(fake_audio(2048));
					let mut output = Vec::new();
					tag.save_to(&mut file, &mut output, WriteOptions::new()).unwrap();

					let properties = podtag::id3::v2::read_from(
						&mut &output[..],
						ParseOptions::new().parsing_mode(ParsingMode::Strict),
					)
					.unwrap();
					assert_eq!(properties.tag, tag);
					assert_eq!(&output[properties.end as usize..], fake_audio(2048));

					let toc = properties.tag.top_level_toc().unwrap();
					assert!(toc.ordered);
					assert_eq!(toc.child_element_ids.len(), 3);

					let chapters = properties.tag.chapters().collect::<Vec<_>>();
					assert_eq!(chapters.len(), 3);
					for (chapter, id) in chapters.iter().zip(&toc.child_element_ids) {
						assert_eq!(&chapter.element_id, id);
					}

					assert_eq!(chapters[1].start_time, Duration::from_secs(300));
					assert_eq!(chapters[1].start_offset, None);
					assert_eq!(chapters[2].start_offset, Some(0x1000));
					assert_eq!(chapters[2].end_offset, None);
					assert_eq!(chapters[2].sub_frames.len(), 2);
				}
			)+
		}
	};
}

generate_chapter_tests!(V3, V4);

macro_rules! generate_toc_flag_tests {
	($($name:ident => ($top_level:expr, $ordered:expr)),+ $(,)?) => {
		paste::paste! {
			$(
				#[test_log::test]
				fn [<toc_ $name>]() {
					for version in [Id3v2Version::V3, Id3v2Version::V4] {
						for (children, sub_frames) in [
							(Vec::new(), Vec::new()),
							(Vec::new(), vec![title("Contents")]),
							(vec![String::from("chp0"), String::from("chp1")], Vec::new()),
						] {
							let toc = TableOfContentsFrame::new(
								String::from("toc"),
								$top_level,
								$ordered,
								children,
								sub_frames,
							);
							let tag = Id3v2Tag::new(version, vec![toc.into()]);

							let mut bytes = Vec::new();
							tag.dump_to(&mut bytes, WriteOptions::new()).unwrap();

							let properties = podtag::id3::v2::read_from(
								&mut &bytes[..],
								ParseOptions::new().parsing_mode(ParsingMode::Strict),
							)
							.unwrap();
							assert_eq!(properties.tag, tag);
						}
					}
				}
			)+
		}
	};
}

generate_toc_flag_tests! {
	top_level_ordered => (true, true),
	top_level_unordered => (true, false),
	nested_ordered => (false, true),
	nested_unordered => (false, false),
}

#[test_log::test]
fn nested_tables_of_contents() {
	let inner = TableOfContentsFrame::new(
		String::from("part1"),
		false,
		true,
		vec![String::from("chp0")],
		Vec::new(),
	);
	let root = TableOfContentsFrame::new(
		String::from("toc"),
		true,
		false,
		vec![String::from("part1")],
		vec![inner.into(), chapter(0, "Introduction").into()],
	);
	let tag = Id3v2Tag::new(Id3v2Version::V4, vec![root.into()]);

	let mut bytes = Vec::new();
	tag.dump_to(&mut bytes, WriteOptions::new()).unwrap();

	let read = podtag::id3::v2::read_from(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.tag;
	assert_eq!(read, tag);

	let root = read.top_level_toc().unwrap();
	assert!(!root.ordered);
	assert_eq!(root.sub_frames[0].id(), "CTOC");
	assert_eq!(root.sub_frames[1].sub_frames().len(), 1);

	// With no nesting allowed, the root is kept as it was read
	let read = podtag::id3::v2::read_from(
		&mut &bytes[..],
		ParseOptions::new().max_nesting_depth(1),
	)
	.unwrap()
	.tag;
	let Frame::TableOfContents(root) = &read.frames()[0] else {
		panic!("Expected a table of contents");
	};
	assert!(matches!(root.sub_frames[0], Frame::Binary(ref frame) if frame.id() == "CTOC"));
	assert!(matches!(root.sub_frames[1], Frame::Binary(ref frame) if frame.id() == "CHAP"));
}

#[test_log::test]
fn broken_sub_frames_are_discarded() {
	// A chapter whose only sub-frame claims more content than the chapter has
	let content = [
		b"chp0\x00".as_slice(),
		&[0, 0, 0, 0],
		&[0, 0, 0x03, 0xE8],
		&[0xFF; 8],
		b"TIT2\x00\x00\x00\x50\x00\x00\x00Intro",
	]
	.concat();
	let mut frame = b"CHAP".to_vec();
	frame.extend((content.len() as u32).to_be_bytes());
	frame.extend([0, 0]);
	frame.extend(&content);

	let bytes = raw_tag(3, 0, &frame);

	let tag = podtag::id3::v2::read_from(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.tag;
	let chapter = tag.chapters().next().unwrap();
	assert_eq!(chapter.element_id, "chp0");
	assert_eq!(chapter.end_time, Duration::from_secs(1));
	assert!(chapter.sub_frames.is_empty());

	assert!(
		podtag::id3::v2::read_from(
			&mut &bytes[..],
			ParseOptions::new().parsing_mode(ParsingMode::Strict)
		)
		.is_err()
	);
}

#[test_log::test]
fn chapter_sub_frames_keep_unknown_frames() {
	let private = BinaryFrame::new(Id3v2Version::V4, b"PRIV\x00\x00\x00\x03\x00\x00abc".to_vec())
		.unwrap();

	let mut chapter = chapter(0, "Introduction");
	chapter.sub_frames.push(private.into());

	let tag = Id3v2Tag::new(Id3v2Version::V4, vec![chapter.into()]);
	let mut bytes = Vec::new();
	tag.dump_to(&mut bytes, WriteOptions::new()).unwrap();

	let read = podtag::id3::v2::read_from(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.tag;
	assert_eq!(read, tag);

	// Moving the chapter to another version fails as a whole
	let converted = Id3v2Tag::new(Id3v2Version::V3, read.into_frames());
	let mut bytes = Vec::new();
	let outcome = converted.dump_to(&mut bytes, WriteOptions::new()).unwrap();
	assert_eq!(outcome.skipped()[0].id, "CHAP");
	assert_eq!(bytes.len(), 10);
}
