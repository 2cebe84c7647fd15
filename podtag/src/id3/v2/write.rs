use super::header::tag_extent;
use super::tag::Id3v2Tag;
use super::util::synchsafe::{MAX_SYNCHSAFE, SynchsafeInteger};
use super::Id3v2Version;
use crate::config::WriteOptions;
use crate::error::{PodtagError, Result};
use crate::macros::{err, id3v2_err};

use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, WriteBytesExt};

/// A frame that was left out of a written tag
#[derive(Debug)]
pub struct SkippedFrame {
	/// The position of the frame in [`Id3v2Tag::frames`]
	pub index: usize,
	/// The ID of the frame
	pub id: String,
	/// Why the frame couldn't be written
	pub error: PodtagError,
}

/// The result of writing a tag
///
/// Frames that fail to encode are left out of the tag, unless
/// [`WriteOptions::fail_on_frame_error`] is set.
#[derive(Debug, Default)]
pub struct WriteOutcome {
	frames_written: usize,
	skipped: Vec<SkippedFrame>,
}

impl WriteOutcome {
	/// The number of top-level frames written
	pub fn frames_written(&self) -> usize {
		self.frames_written
	}

	/// The frames that were left out
	pub fn skipped(&self) -> &[SkippedFrame] {
		&self.skipped
	}

	/// Whether every frame was written
	pub fn is_complete(&self) -> bool {
		self.skipped.is_empty()
	}
}

pub(crate) fn write_id3v2<R, W>(
	source: &mut R,
	dest: &mut W,
	tag: &Id3v2Tag,
	write_options: WriteOptions,
) -> Result<WriteOutcome>
where
	R: Read + Seek,
	W: Write,
{
	let (id3v2, outcome) = create_tag(tag, write_options)?;

	source.rewind()?;
	let audio_start = tag_extent(source)?;
	log::debug!("Existing tag ends at {audio_start}");

	source.seek(SeekFrom::Start(audio_start))?;

	dest.write_all(&id3v2)?;
	let copied = std::io::copy(source, dest)?;
	log::debug!("Wrote a {} byte tag, followed by {copied} bytes of audio", id3v2.len());

	Ok(outcome)
}

pub(crate) fn create_tag(
	tag: &Id3v2Tag,
	write_options: WriteOptions,
) -> Result<(Vec<u8>, WriteOutcome)> {
	let version = tag.version();
	if version == Id3v2Version::V2 {
		id3v2_err!(@BAIL UnsupportedTagVersion(version));
	}

	let mut outcome = WriteOutcome::default();

	let mut frames = Vec::new();
	for (index, frame) in tag.frames().iter().enumerate() {
		match frame.as_bytes(version, write_options) {
			Ok(bytes) => {
				frames.extend(bytes);
				outcome.frames_written += 1;
			},
			Err(err) if write_options.fail_on_frame_error => return Err(err),
			Err(err) => {
				log::warn!("Failed to write frame `{}`, skipping: {err}", frame.id());
				outcome.skipped.push(SkippedFrame {
					index,
					id: frame.id().into_owned(),
					error: err,
				});
			},
		}
	}

	if let Some(padding) = write_options.preferred_padding {
		if frames.len() as u64 + u64::from(padding) > u64::from(MAX_SYNCHSAFE) {
			err!(TooMuchData);
		}

		log::trace!("Padding the tag with {padding} bytes");
		frames.resize(frames.len() + padding as usize, 0);
	}

	let Ok(size) = u32::try_from(frames.len()) else {
		err!(TooMuchData);
	};

	let mut id3v2 = Vec::with_capacity(10 + frames.len());
	id3v2.write_all(b"ID3")?;
	id3v2.write_all(&[version.major(), 0, 0])?;
	id3v2.write_u32::<BigEndian>(size.synch()?)?;
	id3v2.extend(frames);

	Ok((id3v2, outcome))
}
