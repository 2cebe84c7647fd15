use crate::id3::v2::FrameSizeMode;

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use podtag::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> podtag::error::Result<()> {
/// // We only want to read well-formed tags
/// let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let properties = podtag::id3::v2::read_from_path("episode.mp3", parse_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * A frame size runs past the end of the tag - The parser will error and the tag is discarded
	/// * Unable to decode the text of a frame - The parser will error and the tag is discarded
	/// * Chapter sub-frames are malformed - The parser will error and the tag is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// Nothing that was successfully sliced into a frame is ever dropped. Frames that cannot be
	/// decoded are kept as opaque [`BinaryFrame`](crate::id3::v2::BinaryFrame)s, so they survive
	/// a rewrite to the same tag version.
	///
	/// ## Examples of behavior
	///
	/// * A frame size runs past the end of the tag - The frame list ends at the last good frame
	/// * Unable to decode the text of a frame - The frame is kept as opaque data
	/// * Chapter sub-frames are malformed - The chapter is kept with no sub-frames
	#[default]
	BestAttempt,
}

/// Options to control how podtag parses a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) frame_size_mode: Option<FrameSizeMode>,
	pub(crate) max_nesting_depth: u8,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	frame_size_mode: None,
	/// 	max_nesting_depth: 8,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default limit on how deeply chapter frames may contain other chapter frames
	pub const DEFAULT_MAX_NESTING_DEPTH: u8 = 8;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::ParseOptions;
	///
	/// let parse_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			frame_size_mode: None,
			max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// How ID3v2.4 frame sizes are interpreted
	///
	/// ID3v2.4 requires synch-safe frame sizes, but many writers use plain big-endian integers.
	/// With `None` (the default), sizes are first read as plain integers, and the tag is
	/// re-sliced with synch-safe sizes if that fails. Forcing a mode skips that detection.
	///
	/// This has no effect on ID3v2.2 and ID3v2.3 tags, which always use plain sizes.
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::ParseOptions;
	/// use podtag::id3::v2::FrameSizeMode;
	///
	/// // This file was written by an encoder that follows the ID3v2.4 standard
	/// let parse_options = ParseOptions::new().frame_size_mode(Some(FrameSizeMode::Synchsafe));
	/// ```
	pub fn frame_size_mode(&mut self, frame_size_mode: Option<FrameSizeMode>) -> Self {
		self.frame_size_mode = frame_size_mode;
		*self
	}

	/// The maximum depth of nested chapter frames
	///
	/// Chapter (`CHAP`) and table of contents (`CTOC`) frames may contain other frames, including
	/// more chapter frames. A chapter frame found at this depth is not decoded, and is kept as
	/// opaque data (or is an error with [`ParsingMode::Strict`]).
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::ParseOptions;
	///
	/// // Only the top level chapters are of interest
	/// let parse_options = ParseOptions::new().max_nesting_depth(1);
	/// ```
	pub fn max_nesting_depth(&mut self, max_nesting_depth: u8) -> Self {
		self.max_nesting_depth = max_nesting_depth;
		*self
	}
}
