/// Options to control how podtag writes a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) preferred_padding: Option<u32>,
	pub(crate) lossy_text_encoding: bool,
	pub(crate) fail_on_frame_error: bool,
}

impl WriteOptions {
	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			preferred_padding: None,
			lossy_text_encoding: false,
			fail_on_frame_error: false,
		}
	}

	/// Set the padding size in bytes
	///
	/// The padding is appended after the last frame and is included in the tag size. By default,
	/// no padding is written, so the tag size is exactly the size of its frames.
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::WriteOptions;
	///
	/// // Leave some space for a later in-place edit
	/// let options = WriteOptions::new().preferred_padding(1024);
	///
	/// // ...Or no padding at all
	/// let options = WriteOptions::new().preferred_padding(0);
	/// ```
	pub fn preferred_padding(mut self, preferred_padding: u32) -> Self {
		match preferred_padding {
			0 => self.preferred_padding = None,
			_ => self.preferred_padding = Some(preferred_padding),
		}
		self
	}

	/// Whether to replace unencodable characters when writing Latin-1 text
	///
	/// If set to `true`, characters outside of Latin-1 are written as `?`. Otherwise, the frame
	/// fails to encode.
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::WriteOptions;
	///
	/// let options = WriteOptions::new().lossy_text_encoding(true);
	/// ```
	pub fn lossy_text_encoding(mut self, lossy_text_encoding: bool) -> Self {
		self.lossy_text_encoding = lossy_text_encoding;
		self
	}

	/// Whether a frame that fails to encode aborts the whole write
	///
	/// By default, such frames are skipped and reported in the
	/// [`WriteOutcome`](crate::id3::v2::WriteOutcome).
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::config::WriteOptions;
	///
	/// // Refuse to write a partial tag
	/// let options = WriteOptions::new().fail_on_frame_error(true);
	/// ```
	pub fn fail_on_frame_error(mut self, fail_on_frame_error: bool) -> Self {
		self.fail_on_frame_error = fail_on_frame_error;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	/// 	preferred_padding: None,
	/// 	lossy_text_encoding: false,
	/// 	fail_on_frame_error: false,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
