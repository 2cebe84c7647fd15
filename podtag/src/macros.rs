// Shorthand for return Err(PodtagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(PodtagError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(PodtagError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::PodtagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::PodtagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for PodtagError::from(Id3v2ErrorKind::Foo)
//
// Usage:
//
// - id3v2_err!(Variant)
// - id3v2_err!(Variant(..))
// - id3v2_err!(Variant { .. })
//
// or bail:
//
// - id3v2_err!(@BAIL Variant)
macro_rules! id3v2_err {
	(@BAIL $($kind:tt)+) => {
		return Err(id3v2_err!($($kind)+))
	};
	($($kind:tt)+) => {
		crate::error::PodtagError::from(crate::error::Id3v2ErrorKind::$($kind)+)
	};
}

pub(crate) use {err, id3v2_err};
