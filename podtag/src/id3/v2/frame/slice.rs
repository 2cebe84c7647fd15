use crate::error::Result;
use crate::id3::v2::Id3v2Version;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::id3v2_err;

use std::borrow::Cow;

/// How frame sizes are stored in the frame headers
///
/// ID3v2.2 and ID3v2.3 always use [`FrameSizeMode::Plain`]. ID3v2.4 requires
/// [`FrameSizeMode::Synchsafe`], but plain sizes are common in the wild.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameSizeMode {
	/// A plain big-endian integer
	Plain,
	/// A synch-safe integer, see [`SynchsafeInteger`]
	Synchsafe,
}

/// A complete frame (header included) as it appears in a tag body
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawFrameRecord<'a> {
	pub(crate) version: Id3v2Version,
	pub(crate) bytes: &'a [u8],
}

impl<'a> RawFrameRecord<'a> {
	pub(crate) fn id_bytes(&self) -> &'a [u8] {
		&self.bytes[..self.version.frame_id_len()]
	}

	pub(crate) fn id(&self) -> Cow<'a, str> {
		String::from_utf8_lossy(self.id_bytes())
	}

	pub(crate) fn content(&self) -> &'a [u8] {
		&self.bytes[self.version.frame_header_size()..]
	}

	/// The header flags, always `0` for ID3v2.2
	pub(crate) fn flags(&self) -> u16 {
		match self.version {
			Id3v2Version::V2 => 0,
			Id3v2Version::V3 | Id3v2Version::V4 => {
				u16::from_be_bytes([self.bytes[8], self.bytes[9]])
			},
		}
	}
}

/// Split a tag body (or the sub-frame region of a chapter frame) into frames
///
/// Slicing ends when fewer than a frame header's worth of bytes remain, or at the start of padding.
/// A frame with a size of zero, or one that runs past the end of `body`, is an error if `strict`.
/// Otherwise, the frames before it are returned.
pub(crate) fn split_frames(
	body: &[u8],
	version: Id3v2Version,
	size_mode: FrameSizeMode,
	strict: bool,
) -> Result<Vec<RawFrameRecord<'_>>> {
	let header_size = version.frame_header_size();

	let mut frames = Vec::new();
	let mut offset = 0;
	while body.len() - offset >= header_size {
		let header = &body[offset..offset + header_size];

		// Assume we just started reading padding
		if header[0] == 0 {
			log::trace!("Found padding at offset {offset}");
			if body[offset..].iter().any(|b| *b != 0) {
				log::warn!("Padding at offset {offset} contains non-zero bytes, ignoring them");
			}
			break;
		}

		let id = &header[..version.frame_id_len()];
		if strict && !id.iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
			log::debug!("Invalid frame ID at offset {offset}: {id:x?}");
			id3v2_err!(@BAIL CorruptedFrame { offset });
		}

		let size = frame_size(header, version, size_mode);
		let frame_len = header_size + size as usize;

		if size == 0 || frame_len > body.len() - offset {
			if strict {
				id3v2_err!(@BAIL CorruptedFrame { offset });
			}

			log::warn!(
				"Frame `{}` at offset {offset} has an invalid size ({size}), discarding the remaining \
				 {} bytes",
				String::from_utf8_lossy(id),
				body.len() - offset
			);
			break;
		}

		log::trace!(
			"Sliced frame `{}` at offset {offset}, length: {frame_len}",
			String::from_utf8_lossy(id)
		);

		frames.push(RawFrameRecord {
			version,
			bytes: &body[offset..offset + frame_len],
		});
		offset += frame_len;
	}

	Ok(frames)
}

fn frame_size(header: &[u8], version: Id3v2Version, size_mode: FrameSizeMode) -> u32 {
	// The size is read from the four bytes ending at the end of the size field, then masked
	let end = version.frame_size_offset() + version.frame_size_len();
	let size = u32::from_be_bytes([
		header[end - 4],
		header[end - 3],
		header[end - 2],
		header[end - 1],
	]) & version.frame_size_mask();

	match size_mode {
		FrameSizeMode::Plain => size,
		FrameSizeMode::Synchsafe => size.unsynch(),
	}
}
