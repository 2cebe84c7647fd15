use super::write::{self, WriteOutcome};
use super::{
	ChapterFrame, Frame, Id3v2Version, TableOfContentsFrame, TextFrameKind, UrlFrameKind,
};
use crate::config::WriteOptions;
use crate::error::Result;

use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

/// An `ID3v2` tag
///
/// A tag is an ordered list of frames, along with the version its frames are encoded for.
///
/// ## Reading
///
/// See [`read_from`](crate::id3::v2::read_from) and [`read_from_path`](crate::id3::v2::read_from_path).
/// A tag that has been read keeps its original version, and every frame that couldn't be decoded
/// is kept as a [`BinaryFrame`](crate::id3::v2::BinaryFrame).
///
/// ## Writing
///
/// Only [`Id3v2Version::V3`] and [`Id3v2Version::V4`] tags can be written. To convert a tag read
/// from an ID3v2.2 file, create a new tag from its typed frames:
///
/// ```rust
/// use podtag::id3::v2::{Frame, Id3v2Tag, Id3v2Version};
///
/// # fn convert(old: Id3v2Tag) -> Id3v2Tag {
/// let frames = old
/// 	.into_frames()
/// 	.into_iter()
/// 	.filter(|frame| !matches!(frame, Frame::Binary(_)))
/// 	.collect();
/// Id3v2Tag::new(Id3v2Version::V4, frames)
/// # }
/// ```
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct Id3v2Tag {
	version: Id3v2Version,
	frames: Vec<Frame>,
}

impl Id3v2Tag {
	/// Create a new tag of `version`
	pub fn new(version: Id3v2Version, frames: Vec<Frame>) -> Self {
		Self { version, frames }
	}

	/// The version of the tag
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// The frames of the tag, in order
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Take the frames out of the tag
	pub fn into_frames(self) -> Vec<Frame> {
		self.frames
	}

	/// Returns an iterator over the frames of the tag
	pub fn iter(&self) -> impl Iterator<Item = &Frame> {
		self.frames.iter()
	}

	/// The number of top-level frames
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Get the value of the first text frame of `kind`
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::TextEncoding;
	/// use podtag::id3::v2::{Id3v2Tag, Id3v2Version, TextFrameKind, TextInformationFrame};
	///
	/// let title = TextInformationFrame::new(
	/// 	TextFrameKind::Title,
	/// 	TextEncoding::UTF8,
	/// 	String::from("Episode 1"),
	/// );
	/// let tag = Id3v2Tag::new(Id3v2Version::V4, vec![title.into()]);
	///
	/// assert_eq!(tag.text(TextFrameKind::Title), Some("Episode 1"));
	/// assert_eq!(tag.text(TextFrameKind::Album), None);
	/// ```
	pub fn text(&self, kind: TextFrameKind) -> Option<&str> {
		self.frames.iter().find_map(|frame| match frame {
			Frame::Text(text) if text.kind == kind => Some(text.value.as_str()),
			_ => None,
		})
	}

	/// Get the URL of the first URL frame of `kind`
	pub fn url(&self, kind: UrlFrameKind) -> Option<&str> {
		self.frames.iter().find_map(|frame| match frame {
			Frame::Url(url) if url.kind == kind => Some(url.url.as_str()),
			_ => None,
		})
	}

	/// Returns an iterator over the top-level chapter frames
	pub fn chapters(&self) -> impl Iterator<Item = &ChapterFrame> {
		self.frames.iter().filter_map(|frame| match frame {
			Frame::Chapter(chapter) => Some(chapter),
			_ => None,
		})
	}

	/// Returns an iterator over the top-level table of contents frames
	pub fn tables_of_contents(&self) -> impl Iterator<Item = &TableOfContentsFrame> {
		self.frames.iter().filter_map(|frame| match frame {
			Frame::TableOfContents(toc) => Some(toc),
			_ => None,
		})
	}

	/// Get the root of the table of contents hierarchy
	pub fn top_level_toc(&self) -> Option<&TableOfContentsFrame> {
		self.tables_of_contents().find(|toc| toc.top_level)
	}

	/// Write only the tag (header and frames) to `writer`
	///
	/// # Errors
	///
	/// * The tag is [`Id3v2Version::V2`]
	/// * The tag is too large for its size field
	/// * A frame fails to encode, with [`WriteOptions::fail_on_frame_error`]
	/// * Writing to `writer` fails
	pub fn dump_to<W>(&self, writer: &mut W, write_options: WriteOptions) -> Result<WriteOutcome>
	where
		W: Write,
	{
		let (tag, outcome) = write::create_tag(self, write_options)?;
		writer.write_all(&tag)?;

		Ok(outcome)
	}

	/// Write `source` to `dest`, with its tag (if any) replaced by this one
	///
	/// Everything in `source` after its existing tag is copied as-is.
	///
	/// # Errors
	///
	/// * See [`Id3v2Tag::dump_to`]
	/// * Reading from `source` fails
	pub fn save_to<R, W>(
		&self,
		source: &mut R,
		dest: &mut W,
		write_options: WriteOptions,
	) -> Result<WriteOutcome>
	where
		R: Read + Seek,
		W: Write,
	{
		write::write_id3v2(source, dest, self, write_options)
	}

	/// Write the file at `source` to `output`, with its tag replaced by this one
	///
	/// The source is read entirely before `output` is created, so `output` may be the same path.
	///
	/// # Errors
	///
	/// * See [`Id3v2Tag::save_to`]
	/// * Either file cannot be opened
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use podtag::config::{ParseOptions, WriteOptions};
	/// use podtag::id3::v2::{Id3v2Tag, Id3v2Version};
	///
	/// # fn main() -> podtag::error::Result<()> {
	/// let read = podtag::id3::v2::read_from_path("episode.mp3", ParseOptions::new())?;
	///
	/// let tag = Id3v2Tag::new(Id3v2Version::V4, read.tag.into_frames());
	/// let outcome = tag.save_to_path("episode.mp3", "episode_v4.mp3", WriteOptions::new())?;
	/// for skipped in outcome.skipped() {
	/// 	eprintln!("Dropped frame `{}`: {}", skipped.id, skipped.error);
	/// }
	/// # Ok(()) }
	/// ```
	pub fn save_to_path<P, Q>(
		&self,
		source: P,
		output: Q,
		write_options: WriteOptions,
	) -> Result<WriteOutcome>
	where
		P: AsRef<Path>,
		Q: AsRef<Path>,
	{
		let source = std::fs::read(source)?;

		let mut dest = BufWriter::new(File::create(output)?);
		let outcome = self.save_to(&mut Cursor::new(source), &mut dest, write_options)?;
		dest.flush()?;

		Ok(outcome)
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

/// A tag, and where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagProperties {
	/// The tag
	pub tag: Id3v2Tag,
	/// The offset of the tag header
	pub start: u64,
	/// The offset of the first byte after the tag
	pub end: u64,
}
