use super::frame::content::{DecodeContext, decode_frames};
use super::frame::slice::{FrameSizeMode, RawFrameRecord, split_frames};
use super::header::{Id3v2Header, TAG_HEADER_SIZE, read_body, tag_extent};
use super::tag::{Id3v2Tag, TagProperties};
use super::Id3v2Version;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read an `ID3v2` tag from the start of `reader`
///
/// # Errors
///
/// * `reader` doesn't start with a tag (`TagNotFound`)
/// * The tag header is malformed, or the tag uses an unsupported version or feature
/// * With [`ParsingMode::Strict`], anything in the tag is malformed
///
/// # Examples
///
/// ```rust
/// use podtag::config::ParseOptions;
/// use podtag::id3::v2::TextFrameKind;
///
/// # fn main() -> podtag::error::Result<()> {
/// let bytes = b"ID3\x04\x00\x00\x00\x00\x00\x0dTIT2\x00\x00\x00\x03\x00\x00\x00Hi";
/// let properties = podtag::id3::v2::read_from(&mut &bytes[..], ParseOptions::new())?;
///
/// assert_eq!(properties.tag.text(TextFrameKind::Title), Some("Hi"));
/// assert_eq!(properties.end, 23);
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<TagProperties>
where
	R: Read,
{
	let header = Id3v2Header::parse(reader)?;
	let body = read_body(reader, &header, parse_options.parsing_mode)?;

	let tag = parse_id3v2(&body, header.version, parse_options)?;

	Ok(TagProperties {
		tag,
		start: 0,
		end: u64::from(TAG_HEADER_SIZE) + body.len() as u64,
	})
}

/// Read an `ID3v2` tag from the start of the file at `path`
///
/// # Errors
///
/// * `path` cannot be opened
/// * See [`read_from`]
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<TagProperties>
where
	P: AsRef<Path>,
{
	let mut reader = BufReader::new(File::open(path)?);
	read_from(&mut reader, parse_options)
}

/// Find where the audio following an `ID3v2` tag begins
///
/// This only looks at the tag header. The result is `0` if `reader` doesn't start with a tag.
///
/// # Errors
///
/// Reading from `reader` fails
///
/// # Examples
///
/// ```rust
/// # fn main() -> podtag::error::Result<()> {
/// let bytes = b"ID3\x04\x00\x00\x00\x00\x01\x00";
/// assert_eq!(podtag::id3::v2::locate_tag_end(&mut &bytes[..])?, 138);
///
/// assert_eq!(podtag::id3::v2::locate_tag_end(&mut &b"\xFF\xFB"[..])?, 0);
/// # Ok(()) }
/// ```
pub fn locate_tag_end<R>(reader: &mut R) -> Result<u64>
where
	R: Read,
{
	tag_extent(reader)
}

pub(crate) fn parse_id3v2(
	body: &[u8],
	version: Id3v2Version,
	parse_options: ParseOptions,
) -> Result<Id3v2Tag> {
	let (records, size_mode) = slice_body(body, version, parse_options)?;
	log::debug!(
		"Found {} frames, frame sizes: {size_mode:?}",
		records.len()
	);

	let ctx = DecodeContext::new(version, size_mode, parse_options);
	let frames = decode_frames(&records, ctx)?;

	Ok(Id3v2Tag::new(version, frames))
}

// ID3v2.4 frame sizes are supposed to be synch-safe, but a lot of software writes plain integers.
// Unless told otherwise, a plain reading is attempted first, and must slice the body cleanly.
fn slice_body(
	body: &[u8],
	version: Id3v2Version,
	parse_options: ParseOptions,
) -> Result<(Vec<RawFrameRecord<'_>>, FrameSizeMode)> {
	let strict = parse_options.parsing_mode == ParsingMode::Strict;

	let size_mode = match (version, parse_options.frame_size_mode) {
		(Id3v2Version::V4, Some(size_mode)) => size_mode,
		(Id3v2Version::V4, None) => match split_frames(body, version, FrameSizeMode::Plain, true) {
			Ok(records) => return Ok((records, FrameSizeMode::Plain)),
			Err(err) => {
				log::debug!(
					"Unable to read plain frame sizes ({err}), retrying with synch-safe sizes"
				);
				FrameSizeMode::Synchsafe
			},
		},
		(Id3v2Version::V2 | Id3v2Version::V3, _) => FrameSizeMode::Plain,
	};

	let records = split_frames(body, version, size_mode, strict)?;
	Ok((records, size_mode))
}
