//! Guessing track metadata from a file name
//!
//! A fallback for files with no usable tags. Two dot-separated stem layouts
//! are recognized: the archival form
//! `id.title.artist.album.year.genre.duration` produced by older exports, and
//! the plain `title.artist` form. Nothing here touches the file itself.

/// Metadata recovered from a file name
///
/// Title and artist are always present — a name that doesn't yield both is not
/// considered parsed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFileName {
	/// Track title
	pub title: String,
	/// Track artist
	pub artist: String,
	/// Album title, archival form only
	pub album: Option<String>,
	/// Release year, archival form only; not range-checked
	pub year: Option<u32>,
	/// Genre name, archival form only
	pub genre: Option<String>,
	/// Duration in seconds, archival form only
	pub duration_secs: Option<u32>,
}

/// Try to recover metadata from `file_name`
///
/// Directory components and a trailing `.mp3` (any case) are ignored. Returns
/// `None` when the stem has no dot structure or the title/artist part comes
/// out empty.
///
/// # Examples
///
/// ```rust
/// use mixtape::filename::parse_file_name;
///
/// let parsed = parse_file_name("Imagine.John Lennon.mp3").unwrap();
/// assert_eq!(parsed.title, "Imagine");
/// assert_eq!(parsed.artist, "John Lennon");
///
/// let parsed = parse_file_name("7.One.Metallica.Justice.1988.Metal.446.mp3").unwrap();
/// assert_eq!(parsed.year, Some(1988));
///
/// assert_eq!(parse_file_name("recording.mp3"), None);
/// ```
pub fn parse_file_name(file_name: &str) -> Option<ParsedFileName> {
	let base_name = file_name
		.rsplit(['/', '\\'])
		.next()
		.unwrap_or(file_name);

	let stem = match base_name.rfind('.') {
		Some(index) if base_name[index + 1..].eq_ignore_ascii_case("mp3") => &base_name[..index],
		_ => base_name,
	};

	// A leading digit marks the archival form
	if stem.chars().next().is_some_and(|c| c.is_ascii_digit()) {
		let parts = stem.split('.').collect::<Vec<_>>();

		if parts.len() >= 7 {
			return build(parts[1], parts[2], |parsed| {
				parsed.album = non_empty(parts[3]);
				parsed.year = parts[4].parse().ok();
				parsed.genre = non_empty(parts[5]);
				parsed.duration_secs = parts[6].parse().ok();
			});
		}

		if parts.len() >= 3 {
			return build(parts[1], parts[2], |_| {});
		}
	}

	// Plain form: split at the last dot, falling back to the first when the
	// last is the leading character
	let dot_index = match stem.rfind('.') {
		Some(0) | None => stem.find('.')?,
		Some(index) => index,
	};

	build(&stem[..dot_index], &stem[dot_index + 1..], |_| {})
}

fn non_empty(part: &str) -> Option<String> {
	if part.is_empty() {
		return None;
	}

	Some(part.to_owned())
}

fn build(
	title: &str,
	artist: &str,
	fill: impl FnOnce(&mut ParsedFileName),
) -> Option<ParsedFileName> {
	if title.is_empty() || artist.is_empty() {
		return None;
	}

	let mut parsed = ParsedFileName {
		title: title.to_owned(),
		artist: artist.to_owned(),
		album: None,
		year: None,
		genre: None,
		duration_secs: None,
	};
	fill(&mut parsed);

	Some(parsed)
}
