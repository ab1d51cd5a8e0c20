//! Saving and loading catalogs as delimited text
//!
//! Two sibling formats share the same eight columns
//! (`id,title,artist,album,year,genre,duration,filepath`) and differ only in
//! delimiter and escaping: [`csv`] is conventional quoted CSV, [`txt`] uses a
//! `|||` separator with backslash escapes. Both carry a header line and both
//! accept the legacy seven-column layout without a filepath.

pub mod csv;
pub mod txt;

use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};
use crate::track::Track;

pub(crate) const COLUMNS: [&str; 8] = [
	"id", "title", "artist", "album", "year", "genre", "duration", "filepath",
];

pub(crate) fn track_to_fields(track: &Track) -> [String; 8] {
	[
		track.id.to_string(),
		track.title.clone(),
		track.artist.clone(),
		track.album.clone(),
		track.year.to_string(),
		track.genre.clone(),
		track.duration_secs.to_string(),
		track.file_path.clone(),
	]
}

// Build a track from an unescaped row. `Ok(None)` means the row was skipped.
pub(crate) fn track_from_fields(fields: &[String], parsing_mode: ParsingMode) -> Result<Option<Track>> {
	if fields.len() < 7 {
		parse_mode_choice!(
			parsing_mode,
			STRICT: err!(BadCatalogFile("row is missing columns")),
			DEFAULT: {
				log::warn!("Skipping catalog row with only {} columns", fields.len());
				return Ok(None);
			}
		);
	}

	Ok(Some(Track {
		id: parse_number(&fields[0], parsing_mode)?,
		title: fields[1].clone(),
		artist: fields[2].clone(),
		album: fields[3].clone(),
		year: parse_number(&fields[4], parsing_mode)?,
		genre: fields[5].clone(),
		duration_secs: parse_number(&fields[6], parsing_mode)?,
		file_path: fields.get(7).cloned().unwrap_or_default(),
	}))
}

fn parse_number(field: &str, parsing_mode: ParsingMode) -> Result<u32> {
	if let Ok(value) = field.trim().parse::<u32>() {
		return Ok(value);
	}

	parse_mode_choice!(
		parsing_mode,
		STRICT: err!(BadCatalogFile("numeric column failed to parse")),
		DEFAULT: {
			log::warn!("Unparseable number {field:?} in catalog row, using 0");
			Ok(0)
		}
	)
}

#[cfg(test)]
mod tests {
	use super::track_from_fields;
	use crate::config::ParsingMode;

	fn fields(strs: &[&str]) -> Vec<String> {
		strs.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test_log::test]
	fn full_row() {
		let row = fields(&["3", "One", "Metallica", "Justice", "1988", "Metal", "446", "a/b.mp3"]);
		let track = track_from_fields(&row, ParsingMode::BestAttempt)
			.unwrap()
			.unwrap();

		assert_eq!(track.id, 3);
		assert_eq!(track.title, "One");
		assert_eq!(track.year, 1988);
		assert_eq!(track.duration_secs, 446);
		assert_eq!(track.file_path, "a/b.mp3");
	}

	#[test_log::test]
	fn legacy_row_without_filepath() {
		let row = fields(&["3", "One", "Metallica", "Justice", "1988", "Metal", "446"]);
		let track = track_from_fields(&row, ParsingMode::BestAttempt)
			.unwrap()
			.unwrap();

		assert_eq!(track.file_path, "");
	}

	#[test_log::test]
	fn short_row_is_skipped_or_fatal() {
		let row = fields(&["3", "One"]);

		assert!(track_from_fields(&row, ParsingMode::BestAttempt)
			.unwrap()
			.is_none());
		assert!(track_from_fields(&row, ParsingMode::Strict).is_err());
	}

	#[test_log::test]
	fn bad_number_is_zero_or_fatal() {
		let row = fields(&["x", "One", "Metallica", "Justice", "10cc", "Metal", "446"]);

		let track = track_from_fields(&row, ParsingMode::BestAttempt)
			.unwrap()
			.unwrap();
		assert_eq!(track.id, 0);
		assert_eq!(track.year, 0);

		assert!(track_from_fields(&row, ParsingMode::Strict).is_err());
	}
}
