/// The fields of a 128-byte ID3v1 trailer tag
///
/// ID3v1 is a severely limited format, with each field being incredibly small
/// in size. All fields have been commented with their maximum sizes. Padding
/// (NULs or spaces) is already stripped by the reader; a field that was all
/// padding is `None`.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: Option<String>,
	/// Track artist, 30 bytes max
	pub artist: Option<String>,
	/// Album title, 30 bytes max
	pub album: Option<String>,
	/// Release year, 4 ASCII characters
	///
	/// Kept as text; see the [module notes](crate::id3::v1).
	pub year: Option<String>,
	/// The track's genre, resolved through [`GENRES`](crate::id3::v1::GENRES)
	///
	/// An index past the end of the table is treated as no genre.
	pub genre: Option<&'static str>,
}

impl Id3v1Tag {
	/// Whether every field is empty
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.artist.is_none()
			&& self.album.is_none()
			&& self.year.is_none()
			&& self.genre.is_none()
	}
}
