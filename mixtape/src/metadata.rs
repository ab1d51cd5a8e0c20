//! Reading track metadata out of MP3 files
//!
//! [`read_from_path`] is the one entry point: it consults the ID3v2 tag at the
//! front of the file, falls back to the ID3v1 trailer for anything ID3v2 left
//! unanswered, and (optionally) estimates the duration from the MPEG framing.

use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v1;
use crate::id3::v2::read_text_frame;
use crate::mpeg;

use std::fs::File;
use std::io::Read;
use std::path::Path;

// Tags are searched for within the leading chunk of the file only.
const TAG_SEARCH_BOUNDS: u64 = 65_536;

/// Metadata assembled from a single pass over an MP3 file
///
/// Every field is independent: any subset may be present depending on what the
/// file's tags actually carry. Fields are never empty strings — a tag field
/// that was present but blank is `None` here.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RawMetadata {
	/// Track title (ID3v2 `TIT2`, or the ID3v1 title field)
	pub title: Option<String>,
	/// Track artist (ID3v2 `TPE1`, or the ID3v1 artist field)
	pub artist: Option<String>,
	/// Album title (ID3v2 `TALB`, or the ID3v1 album field)
	pub album: Option<String>,
	/// Release year, only when strictly between 1900 and 2100
	pub year: Option<u32>,
	/// Genre name (ID3v2 `TCON`, or the ID3v1 genre index resolved to a name)
	pub genre: Option<String>,
	/// Estimated duration in seconds, see [`mpeg::estimate_duration`]
	pub duration_secs: Option<u32>,
}

impl RawMetadata {
	/// Whether the file was identified
	///
	/// A file counts as identified when a title *or* an artist was found.
	/// Album, year, genre, and duration never affect this; callers needing
	/// both title and artist must check the fields themselves.
	pub fn is_identified(&self) -> bool {
		self.title.is_some() || self.artist.is_some()
	}
}

/// Read as much metadata as possible from the MP3 file at `path`
///
/// ID3v2 frames win over ID3v1 trailer fields; the trailer is only consulted
/// when at least one of title/artist/album/year is still missing, and then
/// fills in any missing field (including genre). The year is validated to the
/// open interval (1900, 2100); the duration is only computed when
/// [`ParseOptions::read_properties`] is enabled.
///
/// Malformed or absent tag data is never an error — affected fields simply
/// stay `None`, and [`RawMetadata::is_identified`] reports the overall outcome.
///
/// # Errors
///
/// Only an unreadable file (it cannot be opened, or the initial read fails)
/// produces an error; no partial metadata is returned in that case.
///
/// # Examples
///
/// ```rust,no_run
/// use mixtape::config::ParseOptions;
/// use mixtape::metadata;
///
/// # fn main() -> mixtape::error::Result<()> {
/// let meta = metadata::read_from_path("imagine.mp3", ParseOptions::new())?;
///
/// if meta.is_identified() {
/// 	println!(
/// 		"{} - {}",
/// 		meta.artist.as_deref().unwrap_or("?"),
/// 		meta.title.as_deref().unwrap_or("?")
/// 	);
/// }
/// # Ok(()) }
/// ```
pub fn read_from_path(path: impl AsRef<Path>, options: ParseOptions) -> Result<RawMetadata> {
	let path = path.as_ref();

	let mut file = File::open(path)?;
	let mut prefix = Vec::new();
	file.by_ref().take(TAG_SEARCH_BOUNDS).read_to_end(&mut prefix)?;
	drop(file);

	let mut metadata = RawMetadata::default();
	if prefix.len() < 10 {
		return Ok(metadata);
	}

	metadata.title = read_text_frame(&prefix, b"TIT2");
	metadata.artist = read_text_frame(&prefix, b"TPE1");
	metadata.album = read_text_frame(&prefix, b"TALB");
	metadata.genre = read_text_frame(&prefix, b"TCON");

	// ID3v2.4 moved the year into TDRC; older writers still use TYER
	let mut year = read_text_frame(&prefix, b"TDRC");
	if year.is_none() {
		year = read_text_frame(&prefix, b"TYER");
	}

	if metadata.title.is_none()
		|| metadata.artist.is_none()
		|| metadata.album.is_none()
		|| year.is_none()
	{
		// The trailer lives at the end of the file; reopen rather than reuse
		// the consumed prefix handle.
		if let Ok(mut file) = File::open(path) {
			let id3v1 = v1::read::read_from(&mut file);

			metadata.title = metadata.title.or(id3v1.title);
			metadata.artist = metadata.artist.or(id3v1.artist);
			metadata.album = metadata.album.or(id3v1.album);
			year = year.or(id3v1.year);
			// Genre was not part of the trigger set, but once the trailer has
			// been read it backfills all the same.
			metadata.genre = metadata.genre.or_else(|| id3v1.genre.map(String::from));
		}
	}

	metadata.year = year.as_deref().and_then(parse_year);

	if options.read_properties {
		let duration = mpeg::estimate_duration(path);
		if duration > 0 {
			metadata.duration_secs = Some(duration);
		}
	}

	Ok(metadata)
}

// Years are stored as text in both tag formats (and TDRC may carry a full
// timestamp); only the leading 4 characters count, and only within the open
// interval (1900, 2100).
fn parse_year(raw: &str) -> Option<u32> {
	let prefix = raw.chars().take(4).collect::<String>();
	let year = prefix.parse::<u32>().ok()?;

	(year > 1900 && year < 2100).then_some(year)
}
