use crate::util::{raw_frame, raw_tag};
use podtag::TextEncoding;
use podtag::config::{ParseOptions, ParsingMode, WriteOptions};
use podtag::error::Id3v2ErrorKind;
use podtag::id3::v2::{
	AttachedPictureFrame, CommentFrame, ExtendedUrlFrame, Frame, FrameSizeMode, Id3v2Tag,
	Id3v2Version, TextFrameKind, TextInformationFrame, UnsynchronizedTextFrame, UrlFrameKind,
	UrlLinkFrame,
};
use podtag::picture::PictureType;

fn strict() -> ParseOptions {
	ParseOptions::new().parsing_mode(ParsingMode::Strict)
}

fn dump(tag: &Id3v2Tag, write_options: WriteOptions) -> Vec<u8> {
	let mut bytes = Vec::new();
	let outcome = tag.dump_to(&mut bytes, write_options).unwrap();
	assert!(outcome.is_complete(), "{:?}", outcome.skipped());
	bytes
}

fn every_frame(encoding: TextEncoding) -> Vec<Frame> {
	vec![
		TextInformationFrame::new(TextFrameKind::Title, encoding, String::from("Ünïcödé title"))
			.into(),
		TextInformationFrame::new(TextFrameKind::LeadArtist, encoding, String::from("Host"))
			.into(),
		UrlLinkFrame::new(
			UrlFrameKind::AudioFileWebpage,
			String::from("https://example.com/ep1"),
		)
		.into(),
		ExtendedUrlFrame::new(
			encoding,
			String::from("Show notes"),
			String::from("https://example.com/ep1/notes"),
		)
		.into(),
		CommentFrame::new(
			encoding,
			*b"eng",
			String::from("Summary"),
			String::from("A short episode"),
		)
		.into(),
		UnsynchronizedTextFrame::new(
			encoding,
			*b"deu",
			String::from("Transcript"),
			String::from("Hallo\nWelt"),
		)
		.into(),
		AttachedPictureFrame::new(
			encoding,
			String::from("image/png"),
			PictureType::CoverFront,
			String::from("Cover"),
			vec![0x89, b'P', b'N', b'G', 0, 0, 1, 2, 3],
		)
		.into(),
	]
}

macro_rules! generate_round_trip_tests {
	($($version:ident => $encoding:ident),+ $(,)?) => {
		paste::paste! {
			$(
				#[test_log::test]
				fn [<round_trip_ $version:lower _ $encoding:lower>]() {
					let tag =
						Id3v2Tag::new(Id3v2Version::$version, every_frame(TextEncoding::$encoding));
					let bytes = dump(&tag, WriteOptions::new());

					let properties = podtag::id3::v2::read_from(&mut &bytes[..], strict()).unwrap();
					assert_eq!(properties.end, bytes.len() as u64);
					assert_eq!(properties.tag, tag);
				}

				#[test_log::test]
				fn [<round_trip_padded_ $version:lower _ $encoding:lower>]() {
					let tag =
						Id3v2Tag::new(Id3v2Version::$version, every_frame(TextEncoding::$encoding));
					let unpadded = dump(&tag, WriteOptions::new());
					let padded = dump(&tag, WriteOptions::new().preferred_padding(1024));
					assert_eq!(padded.len(), unpadded.len() + 1024);

					let properties =
						podtag::id3::v2::read_from(&mut &padded[..], strict()).unwrap();
					assert_eq!(properties.tag, tag);
				}
			)+
		}
	};
}

generate_round_trip_tests! {
	V3 => Latin1,
	V3 => UTF16,
	V4 => Latin1,
	V4 => UTF16,
	V4 => UTF8,
}

#[test_log::test]
fn latin1_title_v3_bytes() {
	let title = TextInformationFrame::new(
		TextFrameKind::Title,
		TextEncoding::Latin1,
		String::from("Hello World"),
	);
	let tag = Id3v2Tag::new(Id3v2Version::V3, vec![title.clone().into()]);

	let bytes = dump(&tag, WriteOptions::new());
	assert_eq!(
		bytes,
		b"ID3\x03\x00\x00\x00\x00\x00\x16TIT2\x00\x00\x00\x0C\x00\x00\x00Hello World"
	);

	let properties = podtag::id3::v2::read_from(&mut &bytes[..], strict()).unwrap();
	assert_eq!(properties.tag.frames(), &[Frame::Text(title)]);
}

#[test_log::test]
fn utf8_in_v3_reads_as_latin1() {
	let title =
		TextInformationFrame::new(TextFrameKind::Title, TextEncoding::UTF8, String::from("é"));
	let tag = Id3v2Tag::new(Id3v2Version::V3, vec![title.into()]);

	let bytes = dump(&tag, WriteOptions::new());
	assert_eq!(&bytes[10..], b"TIT2\x00\x00\x00\x03\x00\x00\x03\xC3\xA9");

	// Encoding byte 3 is only defined for ID3v2.4
	let properties = podtag::id3::v2::read_from(&mut &bytes[..], strict()).unwrap();
	assert_eq!(properties.tag.text(TextFrameKind::Title), Some("Ã©"));
}

#[test_log::test]
fn unknown_frames_are_kept_byte_for_byte() {
	let body = [
		raw_frame(b"TIT2", b"\x00Title"),
		raw_frame(b"TXXX", b"\x00key\x00value"),
		raw_frame(b"PRIV", b"owner\x00\x01\x02\x03"),
		raw_frame(b"WXXX", b"\x00\x00https://example.com"),
	]
	.concat();
	let original = raw_tag(3, 0, &body);

	let properties = podtag::id3::v2::read_from(&mut &original[..], strict()).unwrap();
	let tag = properties.tag;
	assert_eq!(tag.len(), 4);
	assert!(matches!(tag.frames()[1], Frame::Binary(ref frame) if frame.id() == "TXXX"));
	assert!(matches!(
		tag.frames()[2],
		Frame::Binary(ref frame) if frame.content() == b"owner\x00\x01\x02\x03"
	));

	assert_eq!(dump(&tag, WriteOptions::new()), original);
}

#[test_log::test]
fn binary_frames_are_dropped_on_version_change() {
	let body = [raw_frame(b"TIT2", b"\x00Title"), raw_frame(b"PRIV", b"x")].concat();
	let tag = podtag::id3::v2::read_from(&mut &raw_tag(3, 0, &body)[..], strict())
		.unwrap()
		.tag;

	let converted = Id3v2Tag::new(Id3v2Version::V4, tag.into_frames());

	let mut bytes = Vec::new();
	let outcome = converted.dump_to(&mut bytes, WriteOptions::new()).unwrap();
	assert_eq!(outcome.frames_written(), 1);
	assert_eq!(outcome.skipped().len(), 1);
	assert_eq!(outcome.skipped()[0].index, 1);
	assert_eq!(outcome.skipped()[0].id, "PRIV");
	assert!(matches!(
		outcome.skipped()[0].error.id3v2_kind(),
		Some(Id3v2ErrorKind::VersionMismatch {
			frame: Id3v2Version::V3,
			target: Id3v2Version::V4
		})
	));
	assert_eq!(&bytes[..4], b"ID3\x04");

	let err = converted
		.dump_to(&mut Vec::new(), WriteOptions::new().fail_on_frame_error(true))
		.unwrap_err();
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::VersionMismatch { .. })
	));
}

#[test_log::test]
fn read_v2() {
	let body = [
		b"TT2\x00\x00\x03\x00Hi".as_slice(),
		b"COM\x00\x00\x06\x00eng\x00x",
		b"PIC\x00\x00\x05\x00PNG\x03",
		b"\x00\x00\x00\x00",
	]
	.concat();
	let bytes = raw_tag(2, 0, &body);

	let tag = podtag::id3::v2::read_from(&mut &bytes[..], strict()).unwrap().tag;
	assert_eq!(tag.version(), Id3v2Version::V2);
	assert_eq!(tag.len(), 3);
	assert_eq!(tag.text(TextFrameKind::Title), Some("Hi"));

	let Frame::Comment(comment) = &tag.frames()[1] else {
		panic!("Expected a comment frame");
	};
	assert_eq!(&comment.language, b"eng");
	assert_eq!(comment.description, "");
	assert_eq!(comment.content, "x");

	assert!(matches!(tag.frames()[2], Frame::Binary(ref frame) if frame.id() == "PIC"));

	// ID3v2.2 can't be written
	let err = tag.dump_to(&mut Vec::new(), WriteOptions::new()).unwrap_err();
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::UnsupportedTagVersion(Id3v2Version::V2))
	));

	// But its typed frames can be moved to a newer tag
	let converted = Id3v2Tag::new(Id3v2Version::V3, tag.into_frames());
	let mut bytes = Vec::new();
	let outcome = converted.dump_to(&mut bytes, WriteOptions::new()).unwrap();
	assert_eq!(outcome.frames_written(), 2);
	assert_eq!(outcome.skipped()[0].id, "PIC");
}

#[test_log::test]
fn v4_synchsafe_frame_sizes() {
	// 200 bytes of content, as a synch-safe size
	let mut title = b"TIT2\x00\x00\x01\x48\x00\x00\x00".to_vec();
	title.extend([b'a'; 199]);
	let body = [title, raw_frame(b"TALB", b"\x00Show")].concat();
	let bytes = raw_tag(4, 0, &body);

	let tag = podtag::id3::v2::read_from(&mut &bytes[..], strict()).unwrap().tag;
	assert_eq!(tag.len(), 2);
	assert_eq!(tag.text(TextFrameKind::Title).map(str::len), Some(199));
	assert_eq!(tag.text(TextFrameKind::Album), Some("Show"));

	// Forcing plain sizes leaves the first frame running past the end of the tag
	let err = podtag::id3::v2::read_from(
		&mut &bytes[..],
		strict().frame_size_mode(Some(FrameSizeMode::Plain)),
	)
	.unwrap_err();
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::CorruptedFrame { offset: 0 })
	));
}

#[test_log::test]
fn v4_synchsafe_binary_frames_are_rewritten() {
	// 200 bytes of content each, as synch-safe sizes
	let mut title = b"TIT2\x00\x00\x01\x48\x00\x00\x00".to_vec();
	title.extend([b'a'; 199]);
	let mut private = b"PRIV\x00\x00\x01\x48\x00\x00owner\x00".to_vec();
	private.extend([0xFF; 194]);
	let bytes = raw_tag(4, 0, &[title, private.clone()].concat());

	let tag = podtag::id3::v2::read_from(&mut &bytes[..], ParseOptions::new()).unwrap().tag;
	assert_eq!(tag.len(), 2);
	let Frame::Binary(ref binary) = tag.frames()[1] else {
		panic!("Expected a binary frame");
	};
	assert_eq!(binary.size_mode(), FrameSizeMode::Synchsafe);

	// Every frame is written with a plain size, the content of the binary frame is untouched
	let written = dump(&tag, WriteOptions::new());
	assert_eq!(&written[220..230], b"PRIV\x00\x00\x00\xC8\x00\x00");
	assert_eq!(&written[230..], &private[10..]);

	let reread = podtag::id3::v2::read_from(
		&mut &written[..],
		strict().frame_size_mode(Some(FrameSizeMode::Plain)),
	)
	.unwrap()
	.tag;
	assert_eq!(reread.len(), 2);
	assert_eq!(reread.text(TextFrameKind::Title).map(str::len), Some(199));
	let Frame::Binary(ref rewritten) = reread.frames()[1] else {
		panic!("Expected a binary frame");
	};
	assert_eq!(rewritten.id(), "PRIV");
	assert_eq!(rewritten.content(), binary.content());

	// Writing it again changes nothing
	assert_eq!(dump(&reread, WriteOptions::new()), written);
}

#[test_log::test]
fn corrupted_frame_list() {
	let body = [
		raw_frame(b"TIT2", b"\x00Hi"),
		// Claims far more content than the tag holds
		b"TALB\x00\x00\xFF\xFF\x00\x00\x00Show".to_vec(),
	]
	.concat();
	let bytes = raw_tag(3, 0, &body);

	let tag = podtag::id3::v2::read_from(&mut &bytes[..], ParseOptions::new())
		.unwrap()
		.tag;
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.text(TextFrameKind::Title), Some("Hi"));

	let err = podtag::id3::v2::read_from(&mut &bytes[..], strict()).unwrap_err();
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::CorruptedFrame { offset: 13 })
	));
}

#[test_log::test]
fn unsupported_tags() {
	let err = podtag::id3::v2::read_from(&mut &b"\xFF\xFB\x90\x64"[..], ParseOptions::new())
		.unwrap_err();
	assert!(matches!(err.id3v2_kind(), Some(Id3v2ErrorKind::TagNotFound)));

	let err = podtag::id3::v2::read_from(&mut &raw_tag(5, 0, b"")[..], ParseOptions::new())
		.unwrap_err();
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::BadId3v2Version(5, 0))
	));

	// Unsynchronisation
	let bytes = raw_tag(3, 0x80, &raw_frame(b"TIT2", b"\x00Hi"));
	let err = podtag::id3::v2::read_from(&mut &bytes[..], ParseOptions::new()).unwrap_err();
	assert!(matches!(
		err.id3v2_kind(),
		Some(Id3v2ErrorKind::UnsupportedFeature(_))
	));
}
