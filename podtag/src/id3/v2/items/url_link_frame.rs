use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::v2::frame::builder::FrameBuilder;
use crate::id3::v2::frame::content::read_unterminated;
use crate::id3::v2::{Id3v2Version, UrlFrameKind};
use crate::util::text::TextEncoding;

use std::io::Read;

/// An `ID3v2` URL frame
///
/// This is used in the frames listed by [`UrlFrameKind`]. The URL is always Latin-1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UrlLinkFrame {
	/// Which URL frame this is
	pub kind: UrlFrameKind,
	/// The URL
	pub url: String,
}

impl UrlLinkFrame {
	/// Create a new [`UrlLinkFrame`]
	pub fn new(kind: UrlFrameKind, url: String) -> Self {
		Self { kind, url }
	}

	/// Read a [`UrlLinkFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * Reading from the reader fails
	pub fn parse<R>(reader: &mut R, kind: UrlFrameKind) -> Result<Self>
	where
		R: Read,
	{
		let url = read_unterminated(reader, TextEncoding::Latin1)?;
		Ok(Self { kind, url })
	}

	/// Convert an [`UrlLinkFrame`] to a complete frame, header included
	///
	/// # Errors
	///
	/// * `version` is [`Id3v2Version::V2`]
	/// * The URL contains characters outside of Latin-1
	pub fn as_bytes(&self, version: Id3v2Version, options: WriteOptions) -> Result<Vec<u8>> {
		FrameBuilder::new(version, self.kind.id(), options)?
			.string(&self.url, TextEncoding::Latin1, false)?
			.build()
	}
}
