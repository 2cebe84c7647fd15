use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::v2::Id3v2Version;
use crate::macros::{err, id3v2_err};
use crate::util::text::TextEncoding;

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

/// Accumulates a frame's content, then frames it with a header
///
/// Only ID3v2.3 and ID3v2.4 frames can be built. The size is always written as a plain big-endian
/// integer, and the flags are always zero.
#[derive(Debug)]
pub(crate) struct FrameBuilder {
	version: Id3v2Version,
	id: [u8; 4],
	content: Vec<u8>,
	lossy: bool,
}

impl FrameBuilder {
	pub(crate) fn new(version: Id3v2Version, id: &str, options: WriteOptions) -> Result<Self> {
		if version == Id3v2Version::V2 {
			id3v2_err!(@BAIL UnsupportedTagVersion(version));
		}

		let Ok(id_bytes) = <[u8; 4]>::try_from(id.as_bytes()) else {
			id3v2_err!(@BAIL BadFrameId(id.as_bytes().to_vec()));
		};

		Ok(Self {
			version,
			id: id_bytes,
			content: Vec::new(),
			lossy: options.lossy_text_encoding,
		})
	}

	pub(crate) fn u8(&mut self, byte: u8) -> &mut Self {
		self.content.push(byte);
		self
	}

	pub(crate) fn u32(&mut self, value: u32) -> &mut Self {
		self.content.extend_from_slice(&value.to_be_bytes());
		self
	}

	pub(crate) fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
		self.content.extend_from_slice(bytes);
		self
	}

	/// The encoding byte that starts most text-bearing frames
	pub(crate) fn encoding(&mut self, encoding: TextEncoding) -> &mut Self {
		if encoding == TextEncoding::UTF8 && self.version == Id3v2Version::V3 {
			log::warn!(
				"Writing UTF-8 text to an ID3v2.3 frame (`{}`), most readers will decode it as Latin-1",
				String::from_utf8_lossy(&self.id)
			);
		}

		self.u8(encoding.as_id3v2_byte())
	}

	/// Append a string, followed by the terminator for `encoding` if `terminated`
	pub(crate) fn string(
		&mut self,
		text: &str,
		encoding: TextEncoding,
		terminated: bool,
	) -> Result<&mut Self> {
		let terminator = terminated.then(|| self.version.terminator(encoding));
		let encoded = encoding.encode(text, terminator, self.lossy)?;

		self.content.extend(encoded);
		Ok(self)
	}

	pub(crate) fn build(&self) -> Result<Vec<u8>> {
		let Ok(size) = u32::try_from(self.content.len()) else {
			err!(TooMuchData);
		};

		let mut frame = Vec::with_capacity(self.version.frame_header_size() + self.content.len());
		frame.write_all(&self.id)?;
		frame.write_u32::<BigEndian>(size)?;
		frame.write_u16::<BigEndian>(0)?;
		frame.write_all(&self.content)?;

		Ok(frame)
	}
}
