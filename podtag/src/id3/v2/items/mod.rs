mod attached_picture_frame;
mod binary_frame;
mod chapter_frame;
mod extended_url_frame;
mod language_frame;
mod table_of_contents_frame;
mod text_information_frame;
mod url_link_frame;

pub use attached_picture_frame::AttachedPictureFrame;
pub use binary_frame::BinaryFrame;
pub use chapter_frame::ChapterFrame;
pub use extended_url_frame::ExtendedUrlFrame;
pub use language_frame::{CommentFrame, UnsynchronizedTextFrame};
pub use table_of_contents_frame::TableOfContentsFrame;
pub use text_information_frame::TextInformationFrame;
pub use url_link_frame::UrlLinkFrame;
