//! Utilities for working with synch-safe integers
//!
//! A synch-safe integer stores 7 bits per byte, leaving the most significant bit of every byte
//! clear. ID3v2 uses them for the tag size, and ID3v2.4 (in theory) for frame sizes.

use crate::error::Result;
use crate::macros::err;

/// The largest value representable in a 4 byte synch-safe integer
pub const MAX_SYNCHSAFE: u32 = 0x0FFF_FFFF;

/// An integer that can be converted to and from synch-safe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synch-safe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in 28 bits
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> podtag::error::Result<()> {
	/// assert_eq!(128_u32.synch()?, 0x0100);
	/// assert_eq!(300_u32.synch()?, 0x022C);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synch-safe integer
	///
	/// The most significant bit of every byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use podtag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// assert_eq!(0x022C_u32.unsynch(), 300);
	/// assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0x0FFF_FFFF);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		if self > MAX_SYNCHSAFE {
			err!(TooMuchData);
		}

		Ok((self & 0x7F)
			| ((self & 0x3F80) << 1)
			| ((self & 0x001F_C000) << 2)
			| ((self & 0x0FE0_0000) << 3))
	}

	fn unsynch(self) -> Self {
		(self & 0x7F)
			| ((self & 0x7F00) >> 1)
			| ((self & 0x007F_0000) >> 2)
			| ((self & 0x7F00_0000) >> 3)
	}
}
