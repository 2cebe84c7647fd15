use crate::error::Result;
use crate::id3::v2::{FrameSizeMode, Id3v2Version};
use crate::macros::{err, id3v2_err};

use std::borrow::Cow;

/// A binary fallback for all unknown `ID3v2` frames
///
/// This holds the complete frame, header included, exactly as it was read. It can only be
/// written back to a tag of the same version.
///
/// Written tags always use plain frame sizes, so the size field of a frame read with
/// [`FrameSizeMode::Synchsafe`] is rewritten. Everything else is written as-is.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BinaryFrame {
	version: Id3v2Version,
	size_mode: FrameSizeMode,
	data: Vec<u8>,
}

impl BinaryFrame {
	/// Create a new [`BinaryFrame`] from a complete frame of `version`, with a plain size
	///
	/// # Errors
	///
	/// `data` is shorter than a frame header of `version`
	pub fn new(version: Id3v2Version, data: Vec<u8>) -> Result<Self> {
		Self::with_size_mode(version, FrameSizeMode::Plain, data)
	}

	/// Create a new [`BinaryFrame`] from a complete frame of `version`, with its size stored as
	/// `size_mode` describes
	///
	/// # Errors
	///
	/// `data` is shorter than a frame header of `version`
	pub fn with_size_mode(
		version: Id3v2Version,
		size_mode: FrameSizeMode,
		data: Vec<u8>,
	) -> Result<Self> {
		if data.len() < version.frame_header_size() {
			id3v2_err!(@BAIL BadFrameLength);
		}

		Ok(Self {
			version,
			size_mode,
			data,
		})
	}

	pub(crate) fn from_record(
		version: Id3v2Version,
		size_mode: FrameSizeMode,
		data: &[u8],
	) -> Self {
		Self {
			version,
			size_mode,
			data: data.to_vec(),
		}
	}

	/// Get the ID for the frame
	///
	/// This is 3 characters long for [`Id3v2Version::V2`], 4 otherwise.
	pub fn id(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.data[..self.version.frame_id_len()])
	}

	/// The version of the tag the frame was read from
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// How the size of the frame is stored in [`BinaryFrame::data`]
	pub fn size_mode(&self) -> FrameSizeMode {
		self.size_mode
	}

	/// The frame content, header excluded
	pub fn content(&self) -> &[u8] {
		&self.data[self.version.frame_header_size()..]
	}

	/// The complete frame
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Convert a [`BinaryFrame`] to a byte vec
	///
	/// # Errors
	///
	/// * `version` is not the version the frame was read from
	/// * The frame ID isn't made up of uppercase letters and digits
	pub fn as_bytes(&self, version: Id3v2Version) -> Result<Vec<u8>> {
		if version != self.version {
			id3v2_err!(@BAIL VersionMismatch {
				frame: self.version,
				target: version,
			});
		}

		let id = &self.data[..version.frame_id_len()];
		if !id.iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
			id3v2_err!(@BAIL BadFrameId(id.to_vec()));
		}

		let mut data = self.data.clone();
		if self.size_mode == FrameSizeMode::Synchsafe {
			let Ok(size) = u32::try_from(self.content().len()) else {
				err!(TooMuchData);
			};

			let start = version.frame_size_offset();
			let len = version.frame_size_len();
			data[start..start + len].copy_from_slice(&size.to_be_bytes()[4 - len..]);
		}

		Ok(data)
	}
}
