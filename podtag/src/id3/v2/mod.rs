//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! * Tags of every version can be read, but only ID3v2.3 and ID3v2.4 tags can be written.
//! * Tags using unsynchronisation, an extended header, or a footer are rejected when read.
//! * Frames that aren't decoded into a typed [`Frame`] variant are kept as [`BinaryFrame`]s.
//!
//! See:
//!
//! * [`Id3v2Tag`]
//! * [`Frame`]

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
pub(crate) mod tag;
pub mod util;
pub(crate) mod write;

// Exports

pub use header::Id3v2Version;

pub use read::{locate_tag_end, read_from, read_from_path};
pub use tag::{Id3v2Tag, TagProperties};
pub use write::{SkippedFrame, WriteOutcome};

pub use items::*;

pub use frame::Frame;
pub use frame::kind::{TextFrameKind, UrlFrameKind};
pub use frame::slice::FrameSizeMode;
