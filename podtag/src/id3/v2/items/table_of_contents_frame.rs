use crate::config::WriteOptions;
use crate::error::{ErrorKind, PodtagError, Result};
use crate::id3::v2::frame::builder::FrameBuilder;
use crate::id3::v2::frame::content::{DecodeContext, read_terminated};
use crate::id3::v2::{Frame, Id3v2Version};
use crate::macros::id3v2_err;
use crate::util::text::TextEncoding;

use byteorder::ReadBytesExt;

const ORDERED: u8 = 0x01;
const TOP_LEVEL: u8 = 0x02;

/// A table of contents frame (`CTOC`)
///
/// A table of contents lists chapters (or other tables of contents) by their element IDs. A tag
/// normally has a single top-level table listing every [`ChapterFrame`](crate::id3::v2::ChapterFrame).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableOfContentsFrame {
	/// An identifier for the table, unique within the tag
	pub element_id: String,
	/// Whether this is the root of the table of contents hierarchy
	pub top_level: bool,
	/// Whether the children are meant to be played in order
	pub ordered: bool,
	/// The element IDs of the children, at most 255
	pub child_element_ids: Vec<String>,
	/// The frames describing the table, usually a title
	pub sub_frames: Vec<Frame>,
}

impl TableOfContentsFrame {
	/// Create a new [`TableOfContentsFrame`]
	pub fn new(
		element_id: String,
		top_level: bool,
		ordered: bool,
		child_element_ids: Vec<String>,
		sub_frames: Vec<Frame>,
	) -> Self {
		Self {
			element_id,
			top_level,
			ordered,
			child_element_ids,
			sub_frames,
		}
	}

	pub(crate) fn parse(content: &[u8], ctx: DecodeContext) -> Result<Self> {
		let mut reader = content;

		let element_id = read_terminated(&mut reader, TextEncoding::Latin1, ctx.version)?;

		let (Ok(flags), Ok(child_count)) = (reader.read_u8(), reader.read_u8()) else {
			id3v2_err!(@BAIL BadFrameLength);
		};

		let mut child_element_ids = Vec::with_capacity(usize::from(child_count));
		for _ in 0..child_count {
			if reader.is_empty() {
				log::debug!(
					"CTOC `{element_id}` lists {child_count} children, found {}",
					child_element_ids.len()
				);
				id3v2_err!(@BAIL BadFrameLength);
			}

			child_element_ids.push(read_terminated(
				&mut reader,
				TextEncoding::Latin1,
				ctx.version,
			)?);
		}

		let sub_frames = ctx.sub_frames(reader)?;

		Ok(Self {
			element_id,
			top_level: flags & TOP_LEVEL == TOP_LEVEL,
			ordered: flags & ORDERED == ORDERED,
			child_element_ids,
			sub_frames,
		})
	}

	/// Convert a [`TableOfContentsFrame`] to a complete frame, header included
	///
	/// # Errors
	///
	/// * `version` is [`Id3v2Version::V2`]
	/// * Any element ID contains characters outside of Latin-1
	/// * There are more than 255 children
	/// * Any of the sub-frames fail to encode
	pub fn as_bytes(&self, version: Id3v2Version, options: WriteOptions) -> Result<Vec<u8>> {
		let child_count = u8::try_from(self.child_element_ids.len())
			.map_err(|_| PodtagError::new(ErrorKind::TooMuchData))?;

		let mut flags = 0;
		if self.top_level {
			flags |= TOP_LEVEL;
		}
		if self.ordered {
			flags |= ORDERED;
		}

		let mut builder = FrameBuilder::new(version, "CTOC", options)?;
		builder
			.string(&self.element_id, TextEncoding::Latin1, true)?
			.u8(flags)
			.u8(child_count);

		for child in &self.child_element_ids {
			builder.string(child, TextEncoding::Latin1, true)?;
		}

		for frame in &self.sub_frames {
			builder.bytes(&frame.as_bytes(version, options)?);
		}

		builder.build()
	}
}
