pub(super) mod builder;
pub(super) mod content;
pub(super) mod kind;
pub(super) mod slice;

use super::items::{
	AttachedPictureFrame, BinaryFrame, ChapterFrame, CommentFrame, ExtendedUrlFrame,
	TableOfContentsFrame, TextInformationFrame, UnsynchronizedTextFrame, UrlLinkFrame,
};
use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::v2::Id3v2Version;

use std::borrow::Cow;

macro_rules! define_frames {
	(
		$(#[$meta:meta])*
		pub enum Frame {
			$(
				$(#[$field_meta:meta])+
				$variant:ident($type:ty),
			)*
		}
	) => {
		$(#[$meta])*
		pub enum Frame {
			$(
				$(#[$field_meta])+
				$variant($type),
			)*
			/// Any frame that wasn't decoded, kept byte for byte
			Binary(BinaryFrame),
		}

		impl Frame {
			/// Convert the frame to its complete encoding, header included
			///
			/// # Errors
			///
			/// * `version` is [`Id3v2Version::V2`]
			/// * The frame content cannot be encoded (see the `as_bytes` method of each frame)
			/// * The frame is a [`BinaryFrame`] of another version
			pub fn as_bytes(
				&self,
				version: Id3v2Version,
				options: WriteOptions,
			) -> Result<Vec<u8>> {
				match self {
					Frame::Binary(frame) => frame.as_bytes(version),
					$(
						Frame::$variant(frame) => frame.as_bytes(version, options),
					)*
				}
			}
		}

		$(
			impl From<$type> for Frame {
				fn from(value: $type) -> Self {
					Frame::$variant(value)
				}
			}
		)*
	}
}

define_frames! {
	/// Represents an `ID3v2` frame
	///
	/// Every frame that cannot be decoded into one of the typed variants is a [`Frame::Binary`],
	/// which preserves its bytes.
	#[non_exhaustive]
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub enum Frame {
		/// Represents a text frame, see [`TextFrameKind`](crate::id3::v2::TextFrameKind)
		Text(TextInformationFrame),
		/// Represents a URL frame, see [`UrlFrameKind`](crate::id3::v2::UrlFrameKind)
		Url(UrlLinkFrame),
		/// Represents a "WXXX" frame
		UserUrl(ExtendedUrlFrame),
		/// Represents a "COMM" frame
		Comment(CommentFrame),
		/// Represents a "USLT" frame
		UnsynchronizedText(UnsynchronizedTextFrame),
		/// Represents a "APIC" frame
		Picture(AttachedPictureFrame),
		/// Represents a "CHAP" frame
		Chapter(ChapterFrame),
		/// Represents a "CTOC" frame
		TableOfContents(TableOfContentsFrame),
	}
}

impl From<BinaryFrame> for Frame {
	fn from(value: BinaryFrame) -> Self {
		Frame::Binary(value)
	}
}

impl Frame {
	/// Get the ID of the frame
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::TextEncoding;
	/// use podtag::id3::v2::{Frame, TextFrameKind, TextInformationFrame};
	///
	/// let frame = Frame::Text(TextInformationFrame::new(
	/// 	TextFrameKind::Title,
	/// 	TextEncoding::UTF8,
	/// 	String::from("Episode 1"),
	/// ));
	/// assert_eq!(frame.id(), "TIT2");
	/// ```
	pub fn id(&self) -> Cow<'_, str> {
		match self {
			Frame::Text(frame) => Cow::Borrowed(frame.kind.id()),
			Frame::Url(frame) => Cow::Borrowed(frame.kind.id()),
			Frame::UserUrl(_) => Cow::Borrowed("WXXX"),
			Frame::Comment(_) => Cow::Borrowed("COMM"),
			Frame::UnsynchronizedText(_) => Cow::Borrowed("USLT"),
			Frame::Picture(_) => Cow::Borrowed("APIC"),
			Frame::Chapter(_) => Cow::Borrowed("CHAP"),
			Frame::TableOfContents(_) => Cow::Borrowed("CTOC"),
			Frame::Binary(frame) => frame.id(),
		}
	}

	/// The frames embedded in a chapter or table of contents frame
	///
	/// This is empty for every other frame.
	pub fn sub_frames(&self) -> &[Frame] {
		match self {
			Frame::Chapter(frame) => &frame.sub_frames,
			Frame::TableOfContents(frame) => &frame.sub_frames,
			_ => &[],
		}
	}
}
