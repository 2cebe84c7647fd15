use crate::config::WriteOptions;
use crate::error::Result;
use crate::id3::v2::Id3v2Version;
use crate::id3::v2::frame::builder::FrameBuilder;
use crate::id3::v2::frame::content::{read_encoding, read_terminated, read_unterminated};
use crate::macros::id3v2_err;
use crate::util::text::TextEncoding;

use std::io::Read;

// Generic struct for a text frame that has a language
//
// This exists to deduplicate some code between `CommentFrame` and `UnsynchronizedTextFrame`
struct LanguageFrame {
	encoding: TextEncoding,
	language: [u8; 3],
	description: String,
	content: String,
}

impl LanguageFrame {
	fn parse<R>(reader: &mut R, version: Id3v2Version) -> Result<Self>
	where
		R: Read,
	{
		let encoding = read_encoding(reader, version)?;

		let mut language = [0; 3];
		if reader.read_exact(&mut language).is_err() {
			id3v2_err!(@BAIL BadFrameLength);
		}

		let description = read_terminated(reader, encoding, version)?;
		let content = read_unterminated(reader, encoding)?;

		Ok(Self {
			encoding,
			language,
			description,
			content,
		})
	}

	fn create_bytes(
		id: &str,
		version: Id3v2Version,
		options: WriteOptions,
		parts: (TextEncoding, [u8; 3], &str, &str),
	) -> Result<Vec<u8>> {
		let (encoding, language, description, content) = parts;

		FrameBuilder::new(version, id, options)?
			.encoding(encoding)
			.bytes(&language)
			.string(description, encoding, true)?
			.string(content, encoding, false)?
			.build()
	}
}

macro_rules! language_frames {
	($($(#[$meta:meta])* $name:ident => $id:literal, $content_doc:literal);+ $(;)?) => {
		$(
			$(#[$meta])*
			#[derive(Clone, Debug, PartialEq, Eq, Hash)]
			pub struct $name {
				/// The encoding of the description and content
				pub encoding: TextEncoding,
				/// ISO-639-2 language code (3 bytes)
				pub language: [u8; 3],
				/// Unique content description
				pub description: String,
				#[doc = $content_doc]
				pub content: String,
			}

			impl $name {
				#[doc = concat!("Create a new [`", stringify!($name), "`]")]
				pub fn new(
					encoding: TextEncoding,
					language: [u8; 3],
					description: String,
					content: String,
				) -> Self {
					Self {
						encoding,
						language,
						description,
						content,
					}
				}

				#[doc = concat!("Read a [`", stringify!($name), "`] from a slice")]
				///
				/// NOTE: This expects the frame header to have already been skipped
				///
				/// # Errors
				///
				/// * The frame is too short to hold an encoding and language
				/// * Unable to decode the text
				pub fn parse<R>(reader: &mut R, version: Id3v2Version) -> Result<Self>
				where
					R: Read,
				{
					let LanguageFrame {
						encoding,
						language,
						description,
						content,
					} = LanguageFrame::parse(reader, version)?;

					Ok(Self {
						encoding,
						language,
						description,
						content,
					})
				}

				#[doc = concat!("Convert a [`", stringify!($name), "`] to a complete frame, header included")]
				///
				/// # Errors
				///
				/// * `version` is [`Id3v2Version::V2`]
				/// * The text cannot be represented in `encoding`
				pub fn as_bytes(
					&self,
					version: Id3v2Version,
					options: WriteOptions,
				) -> Result<Vec<u8>> {
					LanguageFrame::create_bytes(
						$id,
						version,
						options,
						(self.encoding, self.language, &self.description, &self.content),
					)
				}
			}
		)+
	};
}

language_frames! {
	/// An `ID3v2` comment frame (`COMM`)
	///
	/// Similar to `WXXX` frames, comments are told apart by their descriptions.
	CommentFrame => "COMM", "The comment itself";
	/// An `ID3v2` unsynchronized lyrics/text frame (`USLT`)
	///
	/// Podcasts commonly use this for transcripts.
	UnsynchronizedTextFrame => "USLT", "The lyrics or transcript";
}
