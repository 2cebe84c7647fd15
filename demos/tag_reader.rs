#![allow(missing_docs)]

use podtag::config::ParseOptions;
use podtag::id3::v2::{Frame, TextFrameKind};

use std::path::Path;

fn print_frames(frames: &[Frame], indent: usize) {
	for frame in frames {
		let pad = "  ".repeat(indent);
		match frame {
			Frame::Text(text) => println!(
				"{pad}{} ({}): {}",
				text.kind,
				text.kind.description(),
				text.value
			),
			Frame::Url(url) => {
				println!("{pad}{} ({}): {}", url.kind, url.kind.description(), url.url)
			},
			Frame::UserUrl(url) => println!("{pad}WXXX [{}]: {}", url.description, url.url),
			Frame::Comment(comment) => println!(
				"{pad}COMM [{}] [{}]: {}",
				String::from_utf8_lossy(&comment.language),
				comment.description,
				comment.content
			),
			Frame::UnsynchronizedText(lyrics) => println!(
				"{pad}USLT [{}] [{}]: {} characters",
				String::from_utf8_lossy(&lyrics.language),
				lyrics.description,
				lyrics.content.chars().count()
			),
			Frame::Picture(picture) => println!(
				"{pad}APIC ({:?}, {}): {} bytes",
				picture.picture_type,
				picture.mime_type,
				picture.data.len()
			),
			Frame::Chapter(chapter) => {
				println!(
					"{pad}CHAP `{}`: {:?} - {:?}",
					chapter.element_id, chapter.start_time, chapter.end_time
				);
				print_frames(&chapter.sub_frames, indent + 1);
			},
			Frame::TableOfContents(toc) => {
				println!(
					"{pad}CTOC `{}` (top level: {}, ordered: {}): {:?}",
					toc.element_id, toc.top_level, toc.ordered, toc.child_element_ids
				);
				print_frames(&toc.sub_frames, indent + 1);
			},
			Frame::Binary(binary) => println!(
				"{pad}{}: {} bytes (undecoded)",
				binary.id(),
				binary.content().len()
			),
			_ => println!("{pad}{}", frame.id()),
		}
	}
}

fn main() {
	env_logger::init();

	let path_str = std::env::args().nth(1).expect("ERROR: No path specified!");
	let path = Path::new(&path_str);

	if !path.is_file() {
		panic!("ERROR: Path is not a file!");
	}

	let properties = podtag::id3::v2::read_from_path(path, ParseOptions::new())
		.expect("ERROR: Failed to read the tag!");
	let tag = &properties.tag;

	println!("--- Tag Information ---");
	println!("Version: {:?}", tag.version());
	println!("Size: {} bytes", properties.end - properties.start);
	println!("Title: {}", tag.text(TextFrameKind::Title).unwrap_or("None"));
	println!("Artist: {}", tag.text(TextFrameKind::LeadArtist).unwrap_or("None"));
	println!("Album: {}", tag.text(TextFrameKind::Album).unwrap_or("None"));
	println!("Chapters: {}", tag.chapters().count());

	println!("--- Frames ---");
	print_frames(tag.frames(), 0);
}
