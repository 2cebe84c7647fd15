//! Contains the errors that can arise within podtag
//!
//! The primary error is [`PodtagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::id3::v2::Id3v2Version;
pub use crate::util::text::TextEncodingError;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, PodtagError>`
pub type Result<T> = std::result::Result<T, PodtagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Data related errors
	/// A value does not fit in the binary field it is written to
	///
	/// This occurs when a tag is too large for its synch-safe size field, a table of contents has
	/// more than 255 children, or a chapter time exceeds `u32::MAX` milliseconds.
	TooMuchData,

	// Text related errors
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while encoding text
	TextEncode(TextEncodingError),

	// Picture related errors
	/// An [`ImageCodec`](crate::picture::ImageCodec) failed to decode or re-encode an image
	ImageEncoding(String),

	/// Errors that arise while reading/writing ID3v2 tags
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// The types of errors that can occur while interacting with ID3v2 tags
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// The input does not begin with the `ID3` magic
	TagNotFound,
	/// Arises when an invalid ID3v2 version is found
	BadId3v2Version(u8, u8),
	/// The fixed 10 byte tag header could not be read
	CorruptedHeader,
	/// The tag size field could not be read, or the tag body is shorter than it claims
	CorruptedTagSize,
	/// The tag uses a feature that cannot be decoded (extended header, unsynchronisation, footer, ...)
	UnsupportedFeature(&'static str),

	// Frame
	/// A frame header is malformed, or its declared size runs past the end of the tag body
	CorruptedFrame {
		/// The offset of the frame within the tag body
		offset: usize,
	},
	/// Arises when a frame doesn't have enough data
	BadFrameLength,
	/// Arises when a frame ID is not valid for the version it is written to
	BadFrameId(Vec<u8>),
	/// Chapter frames were nested deeper than [`ParseOptions::max_nesting_depth`](crate::config::ParseOptions::max_nesting_depth)
	NestingTooDeep(u8),

	// Writing
	/// Arises when attempting to write a tag of a version that cannot be written
	UnsupportedTagVersion(Id3v2Version),
	/// Arises when an opaque frame is written to a tag of a different version than it was read from
	VersionMismatch {
		/// The version the frame was read from
		frame: Id3v2Version,
		/// The version of the tag being written
		target: Id3v2Version,
	},
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Header
			Self::TagNotFound => write!(f, "No ID3v2 tag found (missing \"ID3\" magic)"),
			Self::BadId3v2Version(major, minor) => write!(
				f,
				"Found an invalid version (v{major}.{minor}), expected any major revision in: (2, \
				 3, 4)"
			),
			Self::CorruptedHeader => write!(f, "Unable to read the tag header"),
			Self::CorruptedTagSize => write!(f, "Tag size is missing or larger than the tag body"),
			Self::UnsupportedFeature(feature) => {
				write!(f, "Encountered an unsupported feature: {feature}")
			},

			// Frame
			Self::CorruptedFrame { offset } => {
				write!(f, "Encountered a corrupted frame at offset {offset}")
			},
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
			Self::NestingTooDeep(depth) => {
				write!(f, "Sub-frames nested deeper than the limit of {depth}")
			},

			// Writing
			Self::UnsupportedTagVersion(version) => {
				write!(f, "Tags of version {version:?} cannot be written")
			},
			Self::VersionMismatch { frame, target } => write!(
				f,
				"Attempted to write a frame read from a {frame:?} tag into a {target:?} tag"
			),
		}
	}
}

/// An error that arises while interacting with an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within podtag
pub struct PodtagError {
	pub(crate) kind: ErrorKind,
}

impl PodtagError {
	/// Create a `PodtagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::error::{ErrorKind, PodtagError};
	///
	/// let too_much_data = PodtagError::new(ErrorKind::TooMuchData);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the [`Id3v2ErrorKind`], if this is an ID3v2 error
	pub fn id3v2_kind(&self) -> Option<&Id3v2ErrorKind> {
		match &self.kind {
			ErrorKind::Id3v2(err) => Some(err.kind()),
			_ => None,
		}
	}
}

impl std::error::Error for PodtagError {}

impl Debug for PodtagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2ErrorKind> for PodtagError {
	fn from(input: Id3v2ErrorKind) -> Self {
		Self::from(Id3v2Error::new(input))
	}
}

impl From<Id3v2Error> for PodtagError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<TextEncodingError> for PodtagError {
	fn from(input: TextEncodingError) -> Self {
		Self {
			kind: ErrorKind::TextEncode(input),
		}
	}
}

impl From<std::io::Error> for PodtagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for PodtagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to write a value too large for its field"
			),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::TextEncode(ref err) => write!(f, "Text encoding: {err}"),
			ErrorKind::ImageEncoding(ref message) => write!(f, "Picture: {message}"),
			ErrorKind::Id3v2(ref err) => write!(f, "{err}"),
		}
	}
}
