//! The catalog's track record

use crate::metadata::RawMetadata;

/// A single catalog entry
///
/// String fields are empty when unknown; `year` and `duration_secs` are 0 when
/// unknown. This mirrors the catalog file formats, which have no notion of an
/// absent column.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Track {
	/// Catalog-assigned identifier, unique within a [`Catalog`](crate::catalog::Catalog)
	pub id: u32,
	/// Track title
	pub title: String,
	/// Track artist
	pub artist: String,
	/// Album title
	pub album: String,
	/// Release year, 0 when unknown
	pub year: u32,
	/// Genre name
	pub genre: String,
	/// Duration in seconds, 0 when unknown
	pub duration_secs: u32,
	/// Path of the source MP3 file, empty when the entry was typed in by hand
	pub file_path: String,
}

impl Track {
	/// Build a track from the metadata read out of a file
	///
	/// Missing metadata fields become empty/zero. The id is left at 0; adding
	/// the track to a [`Catalog`](crate::catalog::Catalog) assigns a real one.
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::metadata::RawMetadata;
	/// use mixtape::track::Track;
	///
	/// let meta = RawMetadata {
	/// 	title: Some(String::from("Imagine")),
	/// 	artist: Some(String::from("John Lennon")),
	/// 	year: Some(1971),
	/// 	..RawMetadata::default()
	/// };
	///
	/// let track = Track::from_metadata("music/imagine.mp3", meta);
	/// assert_eq!(track.title, "Imagine");
	/// assert_eq!(track.year, 1971);
	/// assert_eq!(track.album, "");
	/// ```
	pub fn from_metadata(file_path: impl Into<String>, metadata: RawMetadata) -> Self {
		Self {
			id: 0,
			title: metadata.title.unwrap_or_default(),
			artist: metadata.artist.unwrap_or_default(),
			album: metadata.album.unwrap_or_default(),
			year: metadata.year.unwrap_or_default(),
			genre: metadata.genre.unwrap_or_default(),
			duration_secs: metadata.duration_secs.unwrap_or_default(),
			file_path: file_path.into(),
		}
	}

	/// The duration as `M:SS` text
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::track::Track;
	///
	/// let track = Track {
	/// 	duration_secs: 185,
	/// 	..Track::default()
	/// };
	/// assert_eq!(track.formatted_duration(), "3:05");
	/// ```
	pub fn formatted_duration(&self) -> String {
		format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
	}

	/// Case-insensitive substring match over title, artist, album, and genre
	///
	/// An empty search term matches every track.
	pub fn matches_search(&self, term: &str) -> bool {
		if term.is_empty() {
			return true;
		}

		let term = term.to_lowercase();

		self.title.to_lowercase().contains(&term)
			|| self.artist.to_lowercase().contains(&term)
			|| self.album.to_lowercase().contains(&term)
			|| self.genre.to_lowercase().contains(&term)
	}
}
