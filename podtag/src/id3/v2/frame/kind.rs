use std::fmt::{Display, Formatter};

macro_rules! define_kinds {
	(
		$(#[$meta:meta])*
		pub enum $name:ident {
			$(
				$variant:ident => $id:literal, $description:literal
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
		pub enum $name {
			$(
				#[doc = concat!("`", $id, "`: ", $description)]
				$variant,
			)+
		}

		impl $name {
			/// Every known kind
			pub const ALL: &'static [Self] = &[$(Self::$variant),+];

			/// Get the kind from a 4 character frame ID
			pub fn from_id(id: &str) -> Option<Self> {
				match id {
					$($id => Some(Self::$variant),)+
					_ => None,
				}
			}

			/// The 4 character frame ID
			pub fn id(self) -> &'static str {
				match self {
					$(Self::$variant => $id,)+
				}
			}

			/// A human readable description of the frame
			pub fn description(self) -> &'static str {
				match self {
					$(Self::$variant => $description,)+
				}
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.id())
			}
		}
	};
}

define_kinds! {
	/// The known text information frames
	///
	/// Text frames with any other ID (including `TXXX`) are kept as [`BinaryFrame`](crate::id3::v2::BinaryFrame)s.
	pub enum TextFrameKind {
		Album => "TALB", "Album/Movie/Show title",
		ContentType => "TCON", "Content type",
		Copyright => "TCOP", "Copyright message",
		Date => "TDAT", "Date",
		PlaylistDelay => "TDLY", "Playlist delay",
		EncodedBy => "TENC", "Encoded by",
		Lyricist => "TEXT", "Lyricist/Text writer",
		FileType => "TFLT", "File type",
		Time => "TIME", "Time",
		ContentGroup => "TIT1", "Content group description",
		Title => "TIT2", "Title/songname/content description",
		Subtitle => "TIT3", "Subtitle/Description refinement",
		InitialKey => "TKEY", "Initial key",
		Language => "TLAN", "Language(s)",
		Length => "TLEN", "Length",
		MediaType => "TMED", "Media type",
		OriginalAlbum => "TOAL", "Original album/movie/show title",
		OriginalFilename => "TOFN", "Original filename",
		OriginalLyricist => "TOLY", "Original lyricist(s)/text writer(s)",
		OriginalArtist => "TOPE", "Original artist(s)/performer(s)",
		OriginalReleaseYear => "TORY", "Original release year",
		FileOwner => "TOWN", "File owner/licensee",
		LeadArtist => "TPE1", "Lead performer(s)/Soloist(s)",
		Band => "TPE2", "Band/orchestra/accompaniment",
		Composer => "TCOM", "Composer",
		Conductor => "TPE3", "Conductor/performer refinement",
		Remixer => "TPE4", "Interpreted, remixed, or otherwise modified by",
		PartOfSet => "TPOS", "Part of a set",
		Publisher => "TPUB", "Publisher",
		TrackNumber => "TRCK", "Track number/Position in set",
		RecordingDates => "TRDA", "Recording dates",
		RadioStationName => "TRSN", "Internet radio station name",
		RadioStationOwner => "TRSO", "Internet radio station owner",
		Size => "TSIZ", "Size",
		Isrc => "TSRC", "ISRC (international standard recording code)",
		EncoderSettings => "TSSE", "Software/Hardware and settings used for encoding",
		Year => "TYER", "Year",
	}
}

define_kinds! {
	/// The known URL link frames
	///
	/// URL frames with any other ID (except `WXXX`) are kept as [`BinaryFrame`](crate::id3::v2::BinaryFrame)s.
	pub enum UrlFrameKind {
		CommercialInformation => "WCOM", "Commercial information",
		CopyrightInformation => "WCOP", "Copyright/Legal information",
		AudioFileWebpage => "WOAF", "Official audio file webpage",
		ArtistWebpage => "WOAR", "Official artist/performer webpage",
		AudioSourceWebpage => "WOAS", "Official audio source webpage",
		RadioStationWebpage => "WORS", "Official internet radio station homepage",
		Payment => "WPAY", "Payment",
		PublisherWebpage => "WPUB", "Publishers official webpage",
	}
}
