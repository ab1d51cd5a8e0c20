use super::Catalog;
use crate::track::Track;

/// Criteria for [`Catalog::filter`]
///
/// All set criteria must match (they are ANDed); unset criteria match every
/// track. Text criteria are case-insensitive substring matches.
#[derive(Default, Debug, Clone)]
pub struct SearchFilters {
	/// Substring of the title
	pub title: Option<String>,
	/// Substring of the artist
	pub artist: Option<String>,
	/// Substring of the album
	pub album: Option<String>,
	/// Substring of the genre
	pub genre: Option<String>,
	/// Earliest acceptable year
	pub min_year: Option<u32>,
	/// Latest acceptable year
	pub max_year: Option<u32>,
	/// Shortest acceptable duration, in seconds
	pub min_duration_secs: Option<u32>,
	/// Longest acceptable duration, in seconds
	pub max_duration_secs: Option<u32>,
}

impl Catalog {
	/// Tracks matching a free-text search term
	///
	/// See [`Track::matches_search`] for the fields consulted.
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::catalog::Catalog;
	/// use mixtape::track::Track;
	///
	/// let mut catalog = Catalog::new();
	/// catalog.add(Track {
	/// 	title: String::from("Paranoid"),
	/// 	artist: String::from("Black Sabbath"),
	/// 	..Track::default()
	/// });
	///
	/// assert_eq!(catalog.search("sabbath").len(), 1);
	/// assert_eq!(catalog.search("zeppelin").len(), 0);
	/// ```
	pub fn search(&self, term: &str) -> Vec<&Track> {
		self.tracks()
			.iter()
			.filter(|track| track.matches_search(term))
			.collect()
	}

	/// Tracks matching every set criterion in `filters`
	pub fn filter(&self, filters: &SearchFilters) -> Vec<&Track> {
		self.tracks()
			.iter()
			.filter(|track| matches_filters(track, filters))
			.collect()
	}
}

fn contains_insensitive(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_filters(track: &Track, filters: &SearchFilters) -> bool {
	if let Some(title) = &filters.title {
		if !contains_insensitive(&track.title, title) {
			return false;
		}
	}

	if let Some(artist) = &filters.artist {
		if !contains_insensitive(&track.artist, artist) {
			return false;
		}
	}

	if let Some(album) = &filters.album {
		if !contains_insensitive(&track.album, album) {
			return false;
		}
	}

	if let Some(genre) = &filters.genre {
		if !contains_insensitive(&track.genre, genre) {
			return false;
		}
	}

	if let Some(min_year) = filters.min_year {
		if track.year < min_year {
			return false;
		}
	}

	if let Some(max_year) = filters.max_year {
		if track.year > max_year {
			return false;
		}
	}

	if let Some(min_duration) = filters.min_duration_secs {
		if track.duration_secs < min_duration {
			return false;
		}
	}

	if let Some(max_duration) = filters.max_duration_secs {
		if track.duration_secs > max_duration {
			return false;
		}
	}

	true
}
