use super::kind::{TextFrameKind, UrlFrameKind};
use super::slice::{FrameSizeMode, RawFrameRecord, split_frames};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{ErrorKind, PodtagError, Result};
use crate::id3::v2::items::{
	AttachedPictureFrame, BinaryFrame, ChapterFrame, CommentFrame, ExtendedUrlFrame,
	TableOfContentsFrame, TextInformationFrame, UnsynchronizedTextFrame, UrlLinkFrame,
};
use crate::id3::v2::util::upgrade::upgrade_v2;
use crate::id3::v2::{Frame, Id3v2Version};
use crate::macros::id3v2_err;
use crate::util::text::{self, TextEncoding};

use std::io::Read;

use byteorder::ReadBytesExt;

/// Everything a frame needs to know about the tag it was read from
#[derive(Copy, Clone, Debug)]
pub(crate) struct DecodeContext {
	pub(crate) version: Id3v2Version,
	pub(crate) size_mode: FrameSizeMode,
	pub(crate) parse_options: ParseOptions,
	pub(crate) depth: u8,
}

impl DecodeContext {
	pub(crate) fn new(
		version: Id3v2Version,
		size_mode: FrameSizeMode,
		parse_options: ParseOptions,
	) -> Self {
		Self {
			version,
			size_mode,
			parse_options,
			depth: 0,
		}
	}

	fn strict(&self) -> bool {
		self.parse_options.parsing_mode == ParsingMode::Strict
	}

	/// Decode the frames embedded in a `CHAP` or `CTOC` frame
	///
	/// These use the same version and size mode as the tag. Outside of [`ParsingMode::Strict`],
	/// any failure leaves the parent with no sub-frames.
	pub(crate) fn sub_frames(&self, region: &[u8]) -> Result<Vec<Frame>> {
		let nested = Self {
			depth: self.depth.saturating_add(1),
			..*self
		};

		let frames = split_frames(region, self.version, self.size_mode, self.strict())
			.and_then(|records| decode_frames(&records, nested));

		match frames {
			Ok(frames) => Ok(frames),
			Err(err) if self.strict() => Err(err),
			Err(err) => {
				log::warn!("Failed to read sub-frames, discarding them: {err}");
				Ok(Vec::new())
			},
		}
	}
}

pub(crate) fn decode_frames(
	records: &[RawFrameRecord<'_>],
	ctx: DecodeContext,
) -> Result<Vec<Frame>> {
	records.iter().map(|record| decode_frame(record, ctx)).collect()
}

/// Decode a single sliced frame
///
/// Outside of [`ParsingMode::Strict`], this never fails. Frames that can't be decoded become a
/// [`BinaryFrame`].
pub(crate) fn decode_frame(record: &RawFrameRecord<'_>, ctx: DecodeContext) -> Result<Frame> {
	let raw_id = record.id();
	let id = match ctx.version {
		Id3v2Version::V2 => upgrade_v2(&raw_id).unwrap_or(raw_id.as_ref()),
		Id3v2Version::V3 | Id3v2Version::V4 => raw_id.as_ref(),
	};

	let binary =
		|| Frame::Binary(BinaryFrame::from_record(record.version, ctx.size_mode, record.bytes));

	if record.flags() & ctx.version.frame_format_flags() != 0 {
		log::debug!(
			"Frame `{raw_id}` is compressed, encrypted or grouped (flags: {:#06X}), keeping it as-is",
			record.flags()
		);
		return Ok(binary());
	}

	if matches!(id, "CHAP" | "CTOC") && ctx.depth >= ctx.parse_options.max_nesting_depth {
		if ctx.strict() {
			id3v2_err!(@BAIL NestingTooDeep(ctx.parse_options.max_nesting_depth));
		}

		log::warn!("Frame `{id}` is nested too deeply, keeping it as-is");
		return Ok(binary());
	}

	match parse_content(id, record.content(), ctx) {
		Ok(Some(frame)) => Ok(frame),
		Ok(None) => Ok(binary()),
		Err(err) if ctx.strict() => Err(err),
		Err(err) => {
			log::warn!("Failed to decode frame `{raw_id}`, keeping it as-is: {err}");
			Ok(binary())
		},
	}
}

#[rustfmt::skip]
fn parse_content(id: &str, content: &[u8], ctx: DecodeContext) -> Result<Option<Frame>> {
	log::trace!("Parsing frame content for ID: {}", id);

	let version = ctx.version;
	let reader = &mut &*content;

	Ok(match id {
		"WXXX" => Some(Frame::UserUrl(ExtendedUrlFrame::parse(reader, version)?)),
		"COMM" => Some(Frame::Comment(CommentFrame::parse(reader, version)?)),
		"USLT" => Some(Frame::UnsynchronizedText(UnsynchronizedTextFrame::parse(reader, version)?)),
		"CHAP" => Some(Frame::Chapter(ChapterFrame::parse(content, ctx)?)),
		"CTOC" => Some(Frame::TableOfContents(TableOfContentsFrame::parse(content, ctx)?)),
		// ID3v2.2 pictures store a 3 character image format instead of a MIME type
		"APIC" if version != Id3v2Version::V2 => Some(Frame::Picture(AttachedPictureFrame::parse(reader, version)?)),
		i if i.starts_with('T') => match TextFrameKind::from_id(i) {
			Some(kind) => Some(Frame::Text(TextInformationFrame::parse(reader, kind, version)?)),
			None => None,
		},
		i if i.starts_with('W') => match UrlFrameKind::from_id(i) {
			Some(kind) => Some(Frame::Url(UrlLinkFrame::parse(reader, kind)?)),
			None => None,
		},
		// TXXX, PRIV, SYLT, and any unknown frames
		_ => None,
	})
}

pub(in crate::id3::v2) fn read_encoding<R>(
	reader: &mut R,
	version: Id3v2Version,
) -> Result<TextEncoding>
where
	R: Read,
{
	let Ok(byte) = reader.read_u8() else {
		id3v2_err!(@BAIL BadFrameLength);
	};

	Ok(TextEncoding::from_id3v2_byte(byte, version))
}

/// Read a string ended by the terminator `version` uses for `encoding`
pub(in crate::id3::v2) fn read_terminated<R>(
	reader: &mut R,
	encoding: TextEncoding,
	version: Id3v2Version,
) -> Result<String>
where
	R: Read,
{
	text::read_string(reader, encoding, version.terminator(encoding))
		.ok_or_else(|| decode_error(encoding))
}

/// Read the rest of the frame as a string
pub(in crate::id3::v2) fn read_unterminated<R>(
	reader: &mut R,
	encoding: TextEncoding,
) -> Result<String>
where
	R: Read,
{
	text::read_remaining(reader, encoding).ok_or_else(|| decode_error(encoding))
}

fn decode_error(encoding: TextEncoding) -> PodtagError {
	PodtagError::new(ErrorKind::TextDecode(match encoding {
		TextEncoding::Latin1 => "Expected a Latin-1 string",
		TextEncoding::UTF16 => "Expected a UTF-16 string",
		TextEncoding::UTF8 => "Expected a UTF-8 string",
	}))
}
