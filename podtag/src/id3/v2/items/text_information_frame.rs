use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::v2::frame::builder::FrameBuilder;
use crate::id3::v2::frame::content::{read_encoding, read_unterminated};
use crate::id3::v2::{Id3v2Version, TextFrameKind};
use crate::util::text::TextEncoding;

use std::io::Read;

/// An `ID3v2` text frame
///
/// This is used in the frames listed by [`TextFrameKind`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextInformationFrame {
	/// Which text frame this is
	pub kind: TextFrameKind,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text itself
	pub value: String,
}

impl TextInformationFrame {
	/// Create a new [`TextInformationFrame`]
	pub fn new(kind: TextFrameKind, encoding: TextEncoding, value: String) -> Self {
		Self {
			kind,
			encoding,
			value,
		}
	}

	/// Read a [`TextInformationFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The encoding byte is missing
	/// * Unable to decode the text
	pub fn parse<R>(reader: &mut R, kind: TextFrameKind, version: Id3v2Version) -> Result<Self>
	where
		R: Read,
	{
		let encoding = read_encoding(reader, version)?;
		let value = read_unterminated(reader, encoding)?;

		Ok(Self {
			kind,
			encoding,
			value,
		})
	}

	/// Convert a [`TextInformationFrame`] to a complete frame, header included
	///
	/// # Errors
	///
	/// * `version` is [`Id3v2Version::V2`]
	/// * The text cannot be represented in `encoding`
	pub fn as_bytes(&self, version: Id3v2Version, options: WriteOptions) -> Result<Vec<u8>> {
		FrameBuilder::new(version, self.kind.id(), options)?
			.encoding(self.encoding)
			.string(&self.value, self.encoding, false)?
			.build()
	}
}
