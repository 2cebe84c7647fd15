use crate::config::WriteOptions;
use crate::error::{ErrorKind, PodtagError, Result};
use crate::id3::v2::Id3v2Version;
use crate::id3::v2::frame::builder::FrameBuilder;
use crate::id3::v2::frame::content::{read_encoding, read_terminated};
use crate::macros::id3v2_err;
use crate::picture::{ImageCodec, PictureType};
use crate::util::text::TextEncoding;

use std::io::Read;

use byteorder::ReadBytesExt;

/// An `ID3v2` attached picture frame (`APIC`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The MIME type of the image data, always Latin-1
	pub mime_type: String,
	/// What the picture depicts
	pub picture_type: PictureType,
	/// A description of the picture
	pub description: String,
	/// The encoded image
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Create a new [`AttachedPictureFrame`]
	pub fn new(
		encoding: TextEncoding,
		mime_type: String,
		picture_type: PictureType,
		description: String,
		data: Vec<u8>,
	) -> Self {
		Self {
			encoding,
			mime_type,
			picture_type,
			description,
			data,
		}
	}

	/// Create an [`AttachedPictureFrame`] holding `image`, encoded as PNG
	///
	/// # Errors
	///
	/// `codec` fails to encode the image
	pub fn from_image<C>(
		codec: &C,
		image: &C::Image,
		encoding: TextEncoding,
		picture_type: PictureType,
		description: String,
	) -> Result<Self>
	where
		C: ImageCodec,
	{
		let data = codec.encode_png(image).map_err(image_error)?;

		Ok(Self::new(
			encoding,
			String::from("image/png"),
			picture_type,
			description,
			data,
		))
	}

	/// Decode the image data with `codec`
	///
	/// # Errors
	///
	/// `codec` fails to decode the image
	pub fn decode_image<C>(&self, codec: &C) -> Result<C::Image>
	where
		C: ImageCodec,
	{
		codec.decode_image(&self.data).map_err(image_error)
	}

	/// Read an [`AttachedPictureFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * There isn't enough data present
	/// * Unable to decode any of the text
	pub fn parse<R>(reader: &mut R, version: Id3v2Version) -> Result<Self>
	where
		R: Read,
	{
		let encoding = read_encoding(reader, version)?;
		let mime_type = read_terminated(reader, TextEncoding::Latin1, version)?;

		let Ok(picture_type) = reader.read_u8() else {
			id3v2_err!(@BAIL BadFrameLength);
		};
		let picture_type = PictureType::from_u8(picture_type);

		let description = read_terminated(reader, encoding, version)?;

		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;

		Ok(Self {
			encoding,
			mime_type,
			picture_type,
			description,
			data,
		})
	}

	/// Convert an [`AttachedPictureFrame`] to a complete frame, header included
	///
	/// # Errors
	///
	/// * `version` is [`Id3v2Version::V2`]
	/// * The MIME type contains characters outside of Latin-1
	/// * The description cannot be represented in `encoding`
	pub fn as_bytes(&self, version: Id3v2Version, options: WriteOptions) -> Result<Vec<u8>> {
		FrameBuilder::new(version, "APIC", options)?
			.encoding(self.encoding)
			.string(&self.mime_type, TextEncoding::Latin1, true)?
			.u8(self.picture_type.as_u8())
			.string(&self.description, self.encoding, true)?
			.bytes(&self.data)
			.build()
	}
}

fn image_error(err: PodtagError) -> PodtagError {
	match err.kind {
		ErrorKind::ImageEncoding(_) => err,
		_ => PodtagError::new(ErrorKind::ImageEncoding(err.to_string())),
	}
}
