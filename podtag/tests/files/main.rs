#![allow(missing_docs)]

mod chapters;
mod id3v2;
mod preservation;
pub(crate) mod util;
