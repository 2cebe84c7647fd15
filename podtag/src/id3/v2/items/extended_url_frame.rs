use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::v2::Id3v2Version;
use crate::id3::v2::frame::builder::FrameBuilder;
use crate::id3::v2::frame::content::{read_encoding, read_terminated, read_unterminated};
use crate::util::text::TextEncoding;

use std::io::Read;

/// An extended `ID3v2` URL frame (`WXXX`)
///
/// This is used for URLs with no dedicated frame, told apart by their descriptions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedUrlFrame {
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The description of the URL
	pub description: String,
	/// The URL, always Latin-1
	pub url: String,
}

impl ExtendedUrlFrame {
	/// Create a new [`ExtendedUrlFrame`]
	pub fn new(encoding: TextEncoding, description: String, url: String) -> Self {
		Self {
			encoding,
			description,
			url,
		}
	}

	/// Read an [`ExtendedUrlFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The encoding byte is missing
	/// * Unable to decode the description
	pub fn parse<R>(reader: &mut R, version: Id3v2Version) -> Result<Self>
	where
		R: Read,
	{
		let encoding = read_encoding(reader, version)?;
		let description = read_terminated(reader, encoding, version)?;
		let url = read_unterminated(reader, TextEncoding::Latin1)?;

		Ok(Self {
			encoding,
			description,
			url,
		})
	}

	/// Convert an [`ExtendedUrlFrame`] to a complete frame, header included
	///
	/// # Errors
	///
	/// * `version` is [`Id3v2Version::V2`]
	/// * The description cannot be represented in `encoding`
	/// * The URL contains characters outside of Latin-1
	pub fn as_bytes(&self, version: Id3v2Version, options: WriteOptions) -> Result<Vec<u8>> {
		FrameBuilder::new(version, "WXXX", options)?
			.encoding(self.encoding)
			.string(&self.description, self.encoding, true)?
			.string(&self.url, TextEncoding::Latin1, false)?
			.build()
	}
}
