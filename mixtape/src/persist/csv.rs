//! Comma-separated catalog files

use super::{COLUMNS, track_from_fields, track_to_fields};
use crate::catalog::Catalog;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::err;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

// Fields containing a delimiter, a quote, or a line break are wrapped in
// double quotes, with embedded quotes doubled.
pub(crate) fn escape_field(field: &str) -> String {
	if field.contains(',') || field.contains('"') || field.contains('\n') {
		let escaped = field.replace('"', "\"\"");
		return format!("\"{escaped}\"");
	}

	field.to_owned()
}

// Split one CSV line into unescaped fields, honoring quoting.
pub(crate) fn parse_line(line: &str) -> Vec<String> {
	let mut fields = Vec::new();
	let mut field = String::new();
	let mut in_quotes = false;

	let mut chars = line.chars().peekable();
	while let Some(c) = chars.next() {
		match c {
			'"' if in_quotes && chars.peek() == Some(&'"') => {
				// A doubled quote inside a quoted field is a literal quote
				chars.next();
				field.push('"');
			},
			'"' => in_quotes = !in_quotes,
			',' if !in_quotes => {
				fields.push(std::mem::take(&mut field));
			},
			_ => field.push(c),
		}
	}
	fields.push(field);

	fields
}

/// Write the catalog as CSV
///
/// # Errors
///
/// Any I/O failure of `writer`.
pub fn save_to<W>(catalog: &Catalog, writer: &mut W) -> Result<()>
where
	W: Write,
{
	writeln!(writer, "{}", COLUMNS.join(","))?;

	for track in catalog.tracks() {
		let fields = track_to_fields(track);
		let line = fields
			.iter()
			.map(|field| escape_field(field))
			.collect::<Vec<_>>()
			.join(",");
		writeln!(writer, "{line}")?;
	}

	Ok(())
}

/// Write the catalog as a CSV file at `path`, replacing any existing file
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

/// Read a catalog from CSV
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
	// The legacy layout has no filepath column
	if header != COLUMNS.join(",") && header != COLUMNS[..7].join(",") {
		err!(BadCatalogFile("unrecognized CSV header"));
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

/// Read a catalog from the CSV file at `path`
///
/// # Errors
///
/// See [`load_from`]; additionally, the file cannot be opened.
pub fn load_from_path(path: impl AsRef<Path>, options: ParseOptions) -> Result<Catalog> {
	let mut reader = BufReader::new(File::open(path)?);
	load_from(&mut reader, options)
}
