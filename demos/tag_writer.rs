#![allow(missing_docs)]

use podtag::TextEncoding;
use podtag::config::{ParseOptions, WriteOptions};
use podtag::error::Id3v2ErrorKind;
use podtag::id3::v2::{
	ChapterFrame, Frame, Id3v2Tag, Id3v2Version, TableOfContentsFrame, TextFrameKind,
	TextInformationFrame,
};

use structopt::StructOpt;

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// A chapter, given as `START_MS:END_MS:TITLE`
#[derive(Debug)]
struct ChapterArg {
	start: Duration,
	end: Duration,
	title: String,
}

impl FromStr for ChapterArg {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut parts = s.splitn(3, ':');
		let (Some(start), Some(end), Some(title)) = (parts.next(), parts.next(), parts.next())
		else {
			return Err(format!("Expected `START_MS:END_MS:TITLE`, found `{s}`"));
		};

		let start = start.parse::<u64>().map_err(|e| e.to_string())?;
		let end = end.parse::<u64>().map_err(|e| e.to_string())?;

		Ok(Self {
			start: Duration::from_millis(start),
			end: Duration::from_millis(end),
			title: title.to_owned(),
		})
	}
}

#[derive(Debug, StructOpt)]
#[structopt(name = "tag_writer", about = "A simple podcast tag writer example")]
struct Opt {
	#[structopt(short, long)]
	title: Option<String>,

	#[structopt(short, long)]
	artist: Option<String>,

	#[structopt(short = "A", long)]
	album: Option<String>,

	/// Replaces every chapter in the tag
	#[structopt(short, long)]
	chapter: Vec<ChapterArg>,

	/// The ID3v2 major version to write (3 or 4)
	#[structopt(short = "V", long, default_value = "4")]
	id3_version: u8,

	#[structopt(long, default_value = "0")]
	padding: u32,

	/// Where to write the result, defaults to overwriting the input
	#[structopt(short, long, parse(from_os_str))]
	output: Option<PathBuf>,

	#[structopt(parse(from_os_str))]
	path: PathBuf,
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	if let Opt {
		title: None,
		artist: None,
		album: None,
		..
	} = opt
	{
		if opt.chapter.is_empty() {
			eprintln!("ERROR: No options provided!");
			std::process::exit(1);
		}
	}

	let version = match opt.id3_version {
		3 => Id3v2Version::V3,
		4 => Id3v2Version::V4,
		_ => {
			eprintln!("ERROR: Only ID3v2.3 and ID3v2.4 tags can be written!");
			std::process::exit(1);
		},
	};

	let encoding = match version {
		Id3v2Version::V4 => TextEncoding::UTF8,
		_ => TextEncoding::UTF16,
	};

	let mut frames = match podtag::id3::v2::read_from_path(&opt.path, ParseOptions::new()) {
		Ok(properties) => properties.tag.into_frames(),
		Err(e) if matches!(e.id3v2_kind(), Some(Id3v2ErrorKind::TagNotFound)) => {
			eprintln!("WARN: No tag found, creating a new one");
			Vec::new()
		},
		Err(e) => panic!("ERROR: Failed to read the existing tag: {e}"),
	};

	let mut set_text = |kind: TextFrameKind, value: Option<String>| {
		let Some(value) = value else {
			return;
		};

		frames.retain(|frame| !matches!(frame, Frame::Text(text) if text.kind == kind));
		frames.push(TextInformationFrame::new(kind, encoding, value).into());
	};

	set_text(TextFrameKind::Title, opt.title);
	set_text(TextFrameKind::LeadArtist, opt.artist);
	set_text(TextFrameKind::Album, opt.album);

	if !opt.chapter.is_empty() {
		frames.retain(|frame| !matches!(frame, Frame::Chapter(_) | Frame::TableOfContents(_)));

		let ids = (0..opt.chapter.len())
			.map(|i| format!("chp{i}"))
			.collect::<Vec<_>>();
		let toc =
			TableOfContentsFrame::new(String::from("toc"), true, true, ids.clone(), Vec::new());
		frames.push(toc.into());

		for (id, chapter) in ids.into_iter().zip(opt.chapter) {
			let title = TextInformationFrame::new(TextFrameKind::Title, encoding, chapter.title);
			let chapter = ChapterFrame::new(id, chapter.start, chapter.end, vec![title.into()]);
			frames.push(chapter.into());
		}
	}

	let tag = Id3v2Tag::new(version, frames);
	let outcome = tag
		.save_to_path(
			&opt.path,
			opt.output.as_ref().unwrap_or(&opt.path),
			WriteOptions::new().preferred_padding(opt.padding),
		)
		.expect("ERROR: Failed to write the tag!");

	for skipped in outcome.skipped() {
		eprintln!("WARN: Dropped frame `{}`: {}", skipped.id, skipped.error);
	}

	println!("INFO: Tag successfully updated!");
}
