//! ID3 specific items
//!
//! Only `ID3v2` is supported.

pub mod v2;
