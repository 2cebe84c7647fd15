//! Read and write `ID3v2` tags, with a focus on podcast chapters.
//!
//! # Examples
//!
//! ## Reading a tag
//!
//! ```rust,no_run
//! # fn main() -> podtag::error::Result<()> {
//! use podtag::config::ParseOptions;
//! use podtag::id3::v2::{TextFrameKind, read_from_path};
//!
//! let properties = read_from_path("episode.mp3", ParseOptions::new())?;
//!
//! println!("Title: {:?}", properties.tag.text(TextFrameKind::Title));
//! for chapter in properties.tag.chapters() {
//! 	println!("{}: {:?} - {:?}", chapter.element_id, chapter.start_time, chapter.end_time);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing a tag
//!
//! ```rust,no_run
//! # fn main() -> podtag::error::Result<()> {
//! use podtag::TextEncoding;
//! use podtag::config::WriteOptions;
//! use podtag::id3::v2::{
//! 	ChapterFrame, Frame, Id3v2Tag, Id3v2Version, TextFrameKind, TextInformationFrame,
//! };
//! use std::time::Duration;
//!
//! let chapter_title = TextInformationFrame::new(
//! 	TextFrameKind::Title,
//! 	TextEncoding::UTF8,
//! 	String::from("Introduction"),
//! );
//! let chapter = ChapterFrame::new(
//! 	String::from("chp0"),
//! 	Duration::ZERO,
//! 	Duration::from_secs(90),
//! 	vec![chapter_title.into()],
//! );
//!
//! let tag = Id3v2Tag::new(Id3v2Version::V4, vec![Frame::Chapter(chapter)]);
//! tag.save_to_path("episode.mp3", "episode.mp3", WriteOptions::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! Encoding options are set through [`ParseOptions`](config::ParseOptions) and
//! [`WriteOptions`](config::WriteOptions).
//!
//! # Notes on ID3v2.4 frame sizes
//!
//! ID3v2.4 frame sizes should be synch-safe integers, but many writers (including this crate)
//! store plain integers. When reading, both are tried unless a
//! [`FrameSizeMode`](id3::v2::FrameSizeMode) is forced.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod picture;
mod util;

pub use util::text::{StringTerminator, TextEncoding};
