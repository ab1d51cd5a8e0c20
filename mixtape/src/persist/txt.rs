//! Pipe-delimited catalog files
//!
//! The format predates the CSV exporter and is kept readable: fields joined
//! by a 3-byte `|||` separator, one record per line. Backslash escaping keeps
//! separators and line breaks inside fields from corrupting the structure.

use super::{COLUMNS, track_from_fields, track_to_fields};
use crate::catalog::Catalog;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::err;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub(crate) const FIELD_SEPARATOR: &str = "|||";

// Backslash first, so already-escaped sequences aren't escaped twice.
pub(crate) fn escape_field(field: &str) -> String {
	field
		.replace('\\', "\\\\")
		.replace('\n', "\\n")
		.replace('\r', "\\r")
		.replace("|||", "\\|||")
}

// Split one line into unescaped fields in a single pass.
pub(crate) fn parse_line(line: &str) -> Vec<String> {
	let chars = line.chars().collect::<Vec<_>>();

	let mut fields = Vec::new();
	let mut field = String::new();
	let mut escape_next = false;

	let mut i = 0;
	while i < chars.len() {
		let c = chars[i];

		if escape_next {
			match c {
				// An escaped separator is backslash + "|||"
				'|' if chars.get(i + 1) == Some(&'|') && chars.get(i + 2) == Some(&'|') => {
					field.push_str("|||");
					i += 2;
				},
				'|' => field.push('|'),
				'n' => field.push('\n'),
				'r' => field.push('\r'),
				'\\' => field.push('\\'),
				// An unknown escape stays as written
				other => {
					field.push('\\');
					field.push(other);
				},
			}
			escape_next = false;
		} else if c == '\\' {
			escape_next = true;
		} else if c == '|' && chars.get(i + 1) == Some(&'|') && chars.get(i + 2) == Some(&'|') {
			fields.push(std::mem::take(&mut field));
			i += 2;
		} else {
			field.push(c);
		}

		i += 1;
	}

	// A line ending on a lone backslash keeps it
	if escape_next {
		field.push('\\');
	}
	fields.push(field);

	fields
}

/// Write the catalog in the pipe-delimited format
///
/// # Errors
///
/// Any I/O failure of `writer`.
pub fn save_to<W>(catalog: &Catalog, writer: &mut W) -> Result<()>
where
	W: Write,
{
	writeln!(writer, "{}", COLUMNS.join(FIELD_SEPARATOR))?;

	for track in catalog.tracks() {
		let fields = track_to_fields(track);
		let line = fields
			.iter()
			.map(|field| escape_field(field))
			.collect::<Vec<_>>()
			.join(FIELD_SEPARATOR);
		writeln!(writer, "{line}")?;
	}

	Ok(())
}

/// Write the catalog as a pipe-delimited file at `path`, replacing any existing file
///
/// # Errors
///
/// The file cannot be created or written.
pub fn save_to_path(catalog: &Catalog, path: impl AsRef<Path>) -> Result<()> {
	let mut writer = BufWriter::new(File::create(path)?);
	save_to(catalog, &mut writer)?;
	writer.flush()?;

	Ok(())
}

/// Read a catalog from the pipe-delimited format
///
/// Stored ids are kept; later additions continue past the largest one. Empty
/// lines are ignored. Malformed rows are handled according to
/// [`ParseOptions::parsing_mode`](crate::config::ParseOptions).
///
/// # Errors
///
/// The header line is unrecognized, `reader` fails, or (in
/// [`ParsingMode::Strict`](crate::config::ParsingMode::Strict)) a row is
/// malformed.
pub fn load_from<R>(reader: &mut R, options: ParseOptions) -> Result<Catalog>
where
	R: BufRead,
{
	let mut lines = reader.lines();

	let Some(header) = lines.next().transpose()? else {
		err!(BadCatalogFile("file is empty"));
	};
	if header != COLUMNS.join(FIELD_SEPARATOR) && header != COLUMNS[..7].join(FIELD_SEPARATOR) {
		err!(BadCatalogFile("unrecognized TXT header"));
	}

	let mut catalog = Catalog::new();
	for line in lines {
		let line = line?;
		if line.is_empty() {
			continue;
		}

		let fields = parse_line(&line);
		if let Some(track) = track_from_fields(&fields, options.parsing_mode)? {
			catalog.add_with_id(track);
		}
	}

	Ok(catalog)
}

/// Read a catalog from the pipe-delimited file at `path`
///
/// # Errors
///
/// See [`load_from`]; additionally, the file cannot be opened.
pub fn load_from_path(path: impl AsRef<Path>, options: ParseOptions) -> Result<Catalog> {
	let mut reader = BufReader::new(File::open(path)?);
	load_from(&mut reader, options)
}

#[cfg(test)]
mod tests {
	use super::{escape_field, load_from, parse_line, save_to};
	use crate::catalog::Catalog;
	use crate::config::ParseOptions;
	use crate::track::Track;

	#[test_log::test]
	fn escape_and_parse_are_inverse() {
		for original in [
			"plain",
			"with|pipes||but not three",
			"separator|||inside",
			"back\\slash",
			"line\nbreak\r",
			"\\|||",
		] {
			let escaped = escape_field(original);
			assert!(!escaped.contains('\n'));

			let fields = parse_line(&escaped);
			assert_eq!(fields, [original], "field {original:?} did not survive");
		}
	}

	#[test_log::test]
	fn separator_splits_fields() {
		assert_eq!(parse_line("a|||b|||c"), ["a", "b", "c"]);
		assert_eq!(parse_line("a||||b"), ["a", "|b"]);
	}

	#[test_log::test]
	fn unknown_escape_kept_verbatim() {
		assert_eq!(parse_line("a\\xb"), ["a\\xb"]);
	}

	#[test_log::test]
	fn trailing_backslash_kept() {
		assert_eq!(parse_line("a\\"), ["a\\"]);
	}

	#[test_log::test]
	fn round_trip_with_hostile_fields() {
		let mut catalog = Catalog::new();
		catalog.add(Track {
			title: String::from("no|||really"),
			artist: String::from("A\\B"),
			album: String::from("line\nbreak"),
			year: 1999,
			genre: String::from("Noise"),
			duration_secs: 10,
			file_path: String::from("x|||y.mp3"),
			..Track::default()
		});

		let mut bytes = Vec::new();
		save_to(&catalog, &mut bytes).unwrap();

		let reloaded = load_from(&mut bytes.as_slice(), ParseOptions::new()).unwrap();
		assert_eq!(reloaded.tracks(), catalog.tracks());
	}

	#[test_log::test]
	fn unknown_header_rejected() {
		let data = "id,title,artist,album,year,genre,duration,filepath\n";

		assert!(load_from(&mut data.as_bytes(), ParseOptions::new()).is_err());
	}
}
