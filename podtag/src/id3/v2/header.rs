use crate::config::ParsingMode;
use crate::error::Result;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::id3v2_err;
use crate::util::text::{StringTerminator, TextEncoding};

use std::io::Read;

/// The size of the tag header, for every version
pub(crate) const TAG_HEADER_SIZE: u32 = 10;

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// Get an `Id3v2Version` from the major version byte of a tag header
	pub fn from_major(major: u8) -> Option<Self> {
		match major {
			2 => Some(Self::V2),
			3 => Some(Self::V3),
			4 => Some(Self::V4),
			_ => None,
		}
	}

	/// The major version byte written to the tag header
	pub fn major(self) -> u8 {
		match self {
			Self::V2 => 2,
			Self::V3 => 3,
			Self::V4 => 4,
		}
	}

	/// The size of a frame header, `6` for ID3v2.2 and `10` otherwise
	pub fn frame_header_size(self) -> usize {
		match self {
			Self::V2 => 6,
			Self::V3 | Self::V4 => 10,
		}
	}

	/// The length of a frame identifier, `3` for ID3v2.2 and `4` otherwise
	pub fn frame_id_len(self) -> usize {
		match self {
			Self::V2 => 3,
			Self::V3 | Self::V4 => 4,
		}
	}

	/// Where the frame size is stored within the frame header
	pub fn frame_size_offset(self) -> usize {
		match self {
			Self::V2 => 3,
			Self::V3 | Self::V4 => 4,
		}
	}

	/// The number of bytes of the frame size field
	pub fn frame_size_len(self) -> usize {
		match self {
			Self::V2 => 3,
			Self::V3 | Self::V4 => 4,
		}
	}

	/// The mask applied to the frame size field when read as a 32-bit big-endian integer
	pub fn frame_size_mask(self) -> u32 {
		match self {
			Self::V2 => 0x00FF_FFFF,
			Self::V3 | Self::V4 => 0xFFFF_FFFF,
		}
	}

	/// The frame header flags that change how the frame content is laid out
	///
	/// These mark compression, encryption, grouping, and (ID3v2.4 only) unsynchronisation and
	/// data length indicators. ID3v2.2 frames have no flags.
	pub(crate) fn frame_format_flags(self) -> u16 {
		match self {
			Self::V2 => 0,
			Self::V3 => 0x00E0,
			Self::V4 => 0x004F,
		}
	}

	/// The terminator used for strings of `encoding` in this version
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::id3::v2::Id3v2Version;
	/// use podtag::{StringTerminator, TextEncoding};
	///
	/// assert_eq!(Id3v2Version::V4.terminator(TextEncoding::UTF8), StringTerminator::Single);
	/// assert_eq!(Id3v2Version::V3.terminator(TextEncoding::UTF8), StringTerminator::Double);
	/// assert_eq!(Id3v2Version::V4.terminator(TextEncoding::UTF16), StringTerminator::Double);
	/// ```
	pub fn terminator(self, encoding: TextEncoding) -> StringTerminator {
		match (self, encoding) {
			(_, TextEncoding::UTF16) | (Self::V2 | Self::V3, TextEncoding::UTF8) => {
				StringTerminator::Double
			},
			_ => StringTerminator::Single,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Id3v2Header {
	pub version: Id3v2Version,
	pub flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut magic = [0; 3];
		if read_fully(reader, &mut magic)? < magic.len() || &magic != b"ID3" {
			id3v2_err!(@BAIL TagNotFound);
		}

		let mut version_and_flags = [0; 3];
		if read_fully(reader, &mut version_and_flags)? < version_and_flags.len() {
			id3v2_err!(@BAIL CorruptedHeader);
		}

		let [major, minor, flags] = version_and_flags;
		let Some(version) = Id3v2Version::from_major(major) else {
			id3v2_err!(@BAIL BadId3v2Version(major, minor));
		};

		let mut size = [0; 4];
		if read_fully(reader, &mut size)? < size.len() {
			id3v2_err!(@BAIL CorruptedTagSize);
		}

		let size = u32::from_be_bytes(size).unsynch();

		let header = Self {
			version,
			flags,
			size,
		};
		header.verify_flags()?;

		log::debug!("Found an {version:?} tag, size: {size}");
		Ok(header)
	}

	fn verify_flags(&self) -> Result<()> {
		if self.flags & 0x80 == 0x80 {
			id3v2_err!(@BAIL UnsupportedFeature("tag unsynchronisation"));
		}

		match self.version {
			// Compression was a flag only used in ID3v2.2. A compression scheme was never decided.
			Id3v2Version::V2 if self.flags & 0x40 == 0x40 => {
				id3v2_err!(@BAIL UnsupportedFeature("ID3v2.2 compression"));
			},
			Id3v2Version::V3 | Id3v2Version::V4 if self.flags & 0x40 == 0x40 => {
				id3v2_err!(@BAIL UnsupportedFeature("extended header"));
			},
			Id3v2Version::V4 if self.has_footer() => {
				id3v2_err!(@BAIL UnsupportedFeature("tag footer"));
			},
			_ => Ok(()),
		}
	}

	pub(crate) fn has_footer(&self) -> bool {
		self.version == Id3v2Version::V4 && self.flags & 0x10 == 0x10
	}
}

/// Locate the end of an existing tag, given only its header
///
/// This is `0` when the reader does not start with a tag. Unlike a full parse, the tag may use
/// any version or feature, since only its extent matters.
pub(crate) fn tag_extent<R>(reader: &mut R) -> Result<u64>
where
	R: Read,
{
	let mut header = [0; TAG_HEADER_SIZE as usize];
	if read_fully(reader, &mut header)? < header.len() || &header[..3] != b"ID3" {
		return Ok(0);
	}

	let size = u32::from_be_bytes([header[6], header[7], header[8], header[9]]).unsynch();
	let footer = if header[3] == 4 && header[5] & 0x10 == 0x10 {
		u64::from(TAG_HEADER_SIZE)
	} else {
		0
	};

	Ok(u64::from(TAG_HEADER_SIZE) + u64::from(size) + footer)
}

/// Read the tag body following a header
///
/// A body shorter than the header claims is an error with [`ParsingMode::Strict`].
pub(crate) fn read_body<R>(
	reader: &mut R,
	header: &Id3v2Header,
	parsing_mode: ParsingMode,
) -> Result<Vec<u8>>
where
	R: Read,
{
	let mut body = Vec::new();
	reader
		.take(u64::from(header.size))
		.read_to_end(&mut body)?;

	if body.len() < header.size as usize {
		if parsing_mode == ParsingMode::Strict {
			id3v2_err!(@BAIL CorruptedTagSize);
		}

		log::warn!(
			"Tag claims a size of {}, only {} bytes available",
			header.size,
			body.len()
		);
	}

	Ok(body)
}

// Like `Read::read_exact`, but reports how much was read instead of failing at EOF
fn read_fully<R>(reader: &mut R, buf: &mut [u8]) -> Result<usize>
where
	R: Read,
{
	let mut read = 0;
	while read < buf.len() {
		match reader.read(&mut buf[read..]) {
			Ok(0) => break,
			Ok(n) => read += n,
			Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {},
			Err(e) => return Err(e.into()),
		}
	}

	Ok(read)
}
