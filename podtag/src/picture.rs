//! Format-agnostic picture handling

use crate::error::Result;

/// The picture type, according to ID3v2 APIC
#[allow(missing_docs)]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PictureType {
	#[default]
	Other,
	Icon,
	OtherIcon,
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
}

impl PictureType {
	/// Get a `u8` from a `PictureType` according to ID3v2 APIC
	pub fn as_u8(self) -> u8 {
		match self {
			Self::Other => 0,
			Self::Icon => 1,
			Self::OtherIcon => 2,
			Self::CoverFront => 3,
			Self::CoverBack => 4,
			Self::Leaflet => 5,
			Self::Media => 6,
			Self::LeadArtist => 7,
			Self::Artist => 8,
			Self::Conductor => 9,
			Self::Band => 10,
			Self::Composer => 11,
			Self::Lyricist => 12,
			Self::RecordingLocation => 13,
			Self::DuringRecording => 14,
			Self::DuringPerformance => 15,
			Self::ScreenCapture => 16,
			Self::BrightFish => 17,
			Self::Illustration => 18,
			Self::BandLogo => 19,
			Self::PublisherLogo => 20,
		}
	}

	/// Get a `PictureType` from a u8 according to ID3v2 APIC
	///
	/// Values outside of the defined range become [`PictureType::Other`].
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			1 => Self::Icon,
			2 => Self::OtherIcon,
			3 => Self::CoverFront,
			4 => Self::CoverBack,
			5 => Self::Leaflet,
			6 => Self::Media,
			7 => Self::LeadArtist,
			8 => Self::Artist,
			9 => Self::Conductor,
			10 => Self::Band,
			11 => Self::Composer,
			12 => Self::Lyricist,
			13 => Self::RecordingLocation,
			14 => Self::DuringRecording,
			15 => Self::DuringPerformance,
			16 => Self::ScreenCapture,
			17 => Self::BrightFish,
			18 => Self::Illustration,
			19 => Self::BandLogo,
			20 => Self::PublisherLogo,
			_ => Self::Other,
		}
	}
}

/// A source of image decoding and PNG encoding
///
/// podtag does not decode images itself. Implement this over an imaging library to convert
/// between an [`AttachedPictureFrame`](crate::id3::v2::AttachedPictureFrame) and in-memory images.
///
/// Errors should be reported with [`ErrorKind::ImageEncoding`](crate::error::ErrorKind::ImageEncoding).
pub trait ImageCodec {
	/// The decoded image
	type Image;

	/// Decode an image from its encoded bytes
	///
	/// # Errors
	///
	/// The bytes are not a supported image
	fn decode_image(&self, data: &[u8]) -> Result<Self::Image>;

	/// Encode an image as PNG
	///
	/// # Errors
	///
	/// The image cannot be encoded
	fn encode_png(&self, image: &Self::Image) -> Result<Vec<u8>>;
}
