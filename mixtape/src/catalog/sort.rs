use super::Catalog;
use crate::track::Track;

/// The track field to order by
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortField {
	/// By title, ties broken by artist
	Title,
	/// By artist, ties broken by title
	Artist,
	/// By year, ties broken by title
	Year,
	/// By duration, ties broken by title
	Duration,
}

/// Sort direction
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortOrder {
	/// Smallest first
	Ascending,
	/// Largest first
	Descending,
}

impl Catalog {
	/// Reorder the catalog by the given field
	///
	/// The sort is not stable across equal keys beyond the documented
	/// tie-breakers.
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::catalog::{Catalog, SortField, SortOrder};
	/// use mixtape::track::Track;
	///
	/// let mut catalog = Catalog::new();
	/// catalog.add(Track {
	/// 	title: String::from("Zebra"),
	/// 	..Track::default()
	/// });
	/// catalog.add(Track {
	/// 	title: String::from("Aja"),
	/// 	..Track::default()
	/// });
	///
	/// catalog.sort_by(SortField::Title, SortOrder::Ascending);
	/// assert_eq!(catalog.tracks()[0].title, "Aja");
	/// ```
	pub fn sort_by(&mut self, field: SortField, order: SortOrder) {
		let less = match field {
			SortField::Title => by_title,
			SortField::Artist => by_artist,
			SortField::Year => by_year,
			SortField::Duration => by_duration,
		};

		match order {
			SortOrder::Ascending => shell_sort(&mut self.tracks, less),
			SortOrder::Descending => shell_sort(&mut self.tracks, |a, b| less(b, a)),
		}
	}
}

fn by_title(a: &Track, b: &Track) -> bool {
	if a.title != b.title {
		return a.title < b.title;
	}
	a.artist < b.artist
}

fn by_artist(a: &Track, b: &Track) -> bool {
	if a.artist != b.artist {
		return a.artist < b.artist;
	}
	a.title < b.title
}

fn by_year(a: &Track, b: &Track) -> bool {
	if a.year != b.year {
		return a.year < b.year;
	}
	a.title < b.title
}

fn by_duration(a: &Track, b: &Track) -> bool {
	if a.duration_secs != b.duration_secs {
		return a.duration_secs < b.duration_secs;
	}
	a.title < b.title
}

// Gap-halving shell sort; `less` is a strict ordering.
fn shell_sort<T: Clone>(items: &mut [T], less: impl Fn(&T, &T) -> bool) {
	let n = items.len();

	let mut gap = n / 2;
	while gap > 0 {
		for i in gap..n {
			let temp = items[i].clone();
			let mut j = i;

			while j >= gap && less(&temp, &items[j - gap]) {
				items[j] = items[j - gap].clone();
				j -= gap;
			}

			items[j] = temp;
		}

		gap /= 2;
	}
}

#[cfg(test)]
mod tests {
	use super::{SortField, SortOrder, shell_sort};
	use crate::catalog::Catalog;
	use crate::track::Track;

	fn sample_catalog() -> Catalog {
		let mut catalog = Catalog::new();

		for (title, artist, year, duration) in [
			("Paranoid", "Black Sabbath", 1970, 170),
			("Imagine", "John Lennon", 1971, 183),
			("One", "Metallica", 1988, 446),
			("Aja", "Steely Dan", 1977, 477),
		] {
			catalog.add(Track {
				title: String::from(title),
				artist: String::from(artist),
				year,
				duration_secs: duration,
				..Track::default()
			});
		}

		catalog
	}

	fn titles(catalog: &Catalog) -> Vec<&str> {
		catalog.tracks().iter().map(|t| t.title.as_str()).collect()
	}

	macro_rules! sort_field_tests {
		($($field:ident => $expected:expr;)+) => {
			$(
				paste::paste! {
					#[test_log::test]
					fn [<sort_by_ $field:lower _ascending>]() {
						let mut catalog = sample_catalog();
						catalog.sort_by(SortField::$field, SortOrder::Ascending);

						assert_eq!(titles(&catalog), $expected);
					}

					#[test_log::test]
					fn [<sort_by_ $field:lower _descending>]() {
						let mut catalog = sample_catalog();
						catalog.sort_by(SortField::$field, SortOrder::Descending);

						let mut expected = $expected;
						expected.reverse();
						assert_eq!(titles(&catalog), expected);
					}
				}
			)+
		};
	}

	sort_field_tests! {
		Title => vec!["Aja", "Imagine", "One", "Paranoid"];
		Artist => vec!["Paranoid", "Imagine", "One", "Aja"];
		Year => vec!["Paranoid", "Imagine", "Aja", "One"];
		Duration => vec!["Paranoid", "Imagine", "One", "Aja"];
	}

	#[test_log::test]
	fn title_ties_break_on_artist() {
		let mut catalog = Catalog::new();
		for artist in ["Zazou", "Abba"] {
			catalog.add(Track {
				title: String::from("Intro"),
				artist: String::from(artist),
				..Track::default()
			});
		}

		catalog.sort_by(SortField::Title, SortOrder::Ascending);
		assert_eq!(catalog.tracks()[0].artist, "Abba");
	}

	#[test_log::test]
	fn shell_sort_sorts() {
		let mut values = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
		shell_sort(&mut values, |a, b| a < b);

		assert_eq!(values, (0..10).collect::<Vec<_>>());
	}

	#[test_log::test]
	fn shell_sort_empty_and_single() {
		let mut empty: Vec<u32> = Vec::new();
		shell_sort(&mut empty, |a, b| a < b);
		assert!(empty.is_empty());

		let mut single = vec![42];
		shell_sort(&mut single, |a, b| a < b);
		assert_eq!(single, [42]);
	}
}
