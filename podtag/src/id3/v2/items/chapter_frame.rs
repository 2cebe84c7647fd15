use crate::config::WriteOptions;
use crate::error::{ErrorKind, PodtagError, Result};
use crate::id3::v2::frame::builder::FrameBuilder;
use crate::id3::v2::frame::content::{DecodeContext, read_terminated};
use crate::id3::v2::{Frame, Id3v2Version};
use crate::macros::id3v2_err;
use crate::util::text::TextEncoding;

use std::time::Duration;

use byteorder::{BigEndian, ReadBytesExt};

const NO_OFFSET: u32 = 0xFFFF_FFFF;

/// A chapter frame (`CHAP`)
///
/// Chapters divide the audio into sections, each with its own frames (usually a title in a
/// [`TextFrameKind::Title`](crate::id3::v2::TextFrameKind::Title) frame, sometimes a link or an image).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChapterFrame {
	/// An identifier for the chapter, unique within the tag
	///
	/// This is what [`TableOfContentsFrame::child_element_ids`](crate::id3::v2::TableOfContentsFrame::child_element_ids)
	/// refers to.
	pub element_id: String,
	/// The start of the chapter, with millisecond precision
	pub start_time: Duration,
	/// The end of the chapter, with millisecond precision
	pub end_time: Duration,
	/// The byte offset of the start of the chapter in the audio, if known
	pub start_offset: Option<u32>,
	/// The byte offset of the end of the chapter in the audio, if known
	pub end_offset: Option<u32>,
	/// The frames describing the chapter
	pub sub_frames: Vec<Frame>,
}

impl ChapterFrame {
	/// Create a new [`ChapterFrame`] with no byte offsets
	pub fn new(
		element_id: String,
		start_time: Duration,
		end_time: Duration,
		sub_frames: Vec<Frame>,
	) -> Self {
		Self {
			element_id,
			start_time,
			end_time,
			start_offset: None,
			end_offset: None,
			sub_frames,
		}
	}

	pub(crate) fn parse(content: &[u8], ctx: DecodeContext) -> Result<Self> {
		let mut reader = content;

		let element_id = read_terminated(&mut reader, TextEncoding::Latin1, ctx.version)?;

		let (Ok(start), Ok(end), Ok(start_offset), Ok(end_offset)) = (
			reader.read_u32::<BigEndian>(),
			reader.read_u32::<BigEndian>(),
			reader.read_u32::<BigEndian>(),
			reader.read_u32::<BigEndian>(),
		) else {
			id3v2_err!(@BAIL BadFrameLength);
		};

		let sub_frames = ctx.sub_frames(reader)?;

		Ok(Self {
			element_id,
			start_time: Duration::from_millis(u64::from(start)),
			end_time: Duration::from_millis(u64::from(end)),
			start_offset: (start_offset != NO_OFFSET).then_some(start_offset),
			end_offset: (end_offset != NO_OFFSET).then_some(end_offset),
			sub_frames,
		})
	}

	/// Convert a [`ChapterFrame`] to a complete frame, header included
	///
	/// # Errors
	///
	/// * `version` is [`Id3v2Version::V2`]
	/// * The element ID contains characters outside of Latin-1
	/// * A time is longer than `u32::MAX` milliseconds
	/// * Any of the sub-frames fail to encode
	pub fn as_bytes(&self, version: Id3v2Version, options: WriteOptions) -> Result<Vec<u8>> {
		let mut builder = FrameBuilder::new(version, "CHAP", options)?;
		builder
			.string(&self.element_id, TextEncoding::Latin1, true)?
			.u32(millis(self.start_time)?)
			.u32(millis(self.end_time)?)
			.u32(self.start_offset.unwrap_or(NO_OFFSET))
			.u32(self.end_offset.unwrap_or(NO_OFFSET));

		for frame in &self.sub_frames {
			builder.bytes(&frame.as_bytes(version, options)?);
		}

		builder.build()
	}
}

fn millis(time: Duration) -> Result<u32> {
	u32::try_from(time.as_millis()).map_err(|_| PodtagError::new(ErrorKind::TooMuchData))
}
