use crate::id3::v2::Id3v2Version;

use std::io::Read;

use byteorder::ReadBytesExt;

/// Errors that can occur while encoding text
#[derive(Copy, Clone, Debug)]
pub struct TextEncodingError {
	encoding: TextEncoding,
	valid_up_to: usize,
}

impl TextEncodingError {
	/// The target text encoding
	pub fn encoding(&self) -> TextEncoding {
		self.encoding
	}

	/// The character index in the provided string up to which the encoding was valid
	pub fn valid_up_to(&self) -> usize {
		self.valid_up_to
	}
}

impl core::fmt::Display for TextEncodingError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let encoding = match self.encoding {
			TextEncoding::Latin1 => "Latin-1",
			TextEncoding::UTF16 => "UTF-16",
			TextEncoding::UTF8 => "UTF-8",
		};

		write!(
			f,
			"invalid {encoding} sequence from index {}",
			self.valid_up_to
		)
	}
}

impl core::error::Error for TextEncodingError {}

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash, Default)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	#[default]
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from the encoding byte of a frame
	///
	/// UTF-8 only exists as of ID3v2.4. Every unknown value, including `0x02` (UTF-16 BE) and
	/// `0x03` outside of ID3v2.4, falls back to Latin-1.
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::TextEncoding;
	/// use podtag::id3::v2::Id3v2Version;
	///
	/// assert_eq!(TextEncoding::from_id3v2_byte(3, Id3v2Version::V4), TextEncoding::UTF8);
	/// assert_eq!(TextEncoding::from_id3v2_byte(3, Id3v2Version::V3), TextEncoding::Latin1);
	/// ```
	pub fn from_id3v2_byte(byte: u8, version: Id3v2Version) -> Self {
		match byte {
			1 => Self::UTF16,
			3 if version == Id3v2Version::V4 => Self::UTF8,
			_ => Self::Latin1,
		}
	}

	/// The encoding byte written at the start of a frame
	pub fn as_id3v2_byte(self) -> u8 {
		self as u8
	}

	pub(crate) fn encode(
		self,
		text: &str,
		terminator: Option<StringTerminator>,
		lossy: bool,
	) -> Result<Vec<u8>, TextEncodingError> {
		let mut out = match self {
			TextEncoding::Latin1 => latin1_encode(text, lossy)?,
			TextEncoding::UTF16 => utf16_encode(text),
			TextEncoding::UTF8 => text.as_bytes().to_vec(),
		};

		if let Some(terminator) = terminator {
			out.extend_from_slice(terminator.as_bytes());
		}

		Ok(out)
	}

	/// Decode a complete string, with any terminator already removed
	pub(crate) fn decode(self, bytes: &[u8]) -> Option<String> {
		match self {
			TextEncoding::Latin1 => Some(bytes.iter().map(|c| char::from(*c)).collect()),
			TextEncoding::UTF8 => String::from_utf8(bytes.to_vec()).ok(),
			TextEncoding::UTF16 => utf16_decode(bytes),
		}
	}
}

/// The terminator used for strings in a frame
///
/// See [`Id3v2Version::terminator`] for which one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringTerminator {
	/// A single `0x00` byte
	Single,
	/// Two `0x00` bytes, searched for in aligned pairs
	Double,
}

impl StringTerminator {
	/// The bytes of the terminator
	pub fn as_bytes(self) -> &'static [u8] {
		match self {
			StringTerminator::Single => &[0],
			StringTerminator::Double => &[0, 0],
		}
	}
}

/// Read up to (and consume) the terminator, returning the bytes before it
///
/// If no terminator is found, everything left in the reader is returned. With
/// [`StringTerminator::Double`], a trailing odd byte is part of the returned bytes.
pub(crate) fn read_to_terminator<R>(reader: &mut R, terminator: StringTerminator) -> Vec<u8>
where
	R: Read,
{
	let mut text_bytes = Vec::new();

	match terminator {
		StringTerminator::Single => {
			while let Ok(byte) = reader.read_u8() {
				if byte == 0 {
					break;
				}

				text_bytes.push(byte)
			}
		},
		StringTerminator::Double => {
			while let Ok(b1) = reader.read_u8() {
				let Ok(b2) = reader.read_u8() else {
					text_bytes.push(b1);
					break;
				};

				if b1 == 0 && b2 == 0 {
					break;
				}

				text_bytes.push(b1);
				text_bytes.push(b2);
			}
		},
	}

	text_bytes
}

/// Read a terminated string
///
/// Returns `None` if the bytes are not valid in `encoding`. The reader is left after the
/// terminator, or at the end if there was none.
pub(crate) fn read_string<R>(
	reader: &mut R,
	encoding: TextEncoding,
	terminator: StringTerminator,
) -> Option<String>
where
	R: Read,
{
	let raw = read_to_terminator(reader, terminator);
	encoding.decode(&raw)
}

/// Read everything left in the reader as a single, unterminated, string
///
/// Trailing nulls are kept, so the string encodes back to the same bytes.
pub(crate) fn read_remaining<R>(reader: &mut R, encoding: TextEncoding) -> Option<String>
where
	R: Read,
{
	let mut raw = Vec::new();
	reader.read_to_end(&mut raw).ok()?;
	encoding.decode(&raw)
}

fn latin1_encode(text: &str, lossy: bool) -> Result<Vec<u8>, TextEncodingError> {
	text.chars()
		.enumerate()
		.map(|(index, c)| match u8::try_from(u32::from(c)) {
			Ok(byte) => Ok(byte),
			Err(_) if lossy => Ok(b'?'),
			Err(_) => Err(TextEncodingError {
				encoding: TextEncoding::Latin1,
				valid_up_to: index,
			}),
		})
		.collect()
}

fn utf16_encode(text: &str) -> Vec<u8> {
	let mut encoded = vec![0xFF, 0xFE];

	for unit in text.encode_utf16() {
		encoded.extend_from_slice(&unit.to_le_bytes());
	}

	encoded
}

fn utf16_decode(bytes: &[u8]) -> Option<String> {
	if bytes.len() % 2 != 0 {
		return None;
	}

	let (content, endianness): (&[u8], fn([u8; 2]) -> u16) = match bytes {
		[0xFF, 0xFE, rest @ ..] => (rest, u16::from_le_bytes),
		[0xFE, 0xFF, rest @ ..] => (rest, u16::from_be_bytes),
		_ => (bytes, u16::from_be_bytes),
	};

	let units = content
		.chunks_exact(2)
		.map(|pair| endianness([pair[0], pair[1]]))
		.collect::<Vec<u16>>();

	String::from_utf16(&units).ok()
}
