use super::constants::{GENRES, ID3V1_TAG_MARKER};
use super::tag::Id3v1Tag;
use crate::util::text::{latin1_decode, trim_padding};

use std::io::{Read, Seek, SeekFrom};

pub(crate) const ID3V1_TAG_LEN: u64 = 128;

// Read the trailer tag from the last 128 bytes of `reader`.
//
// Anything that prevents the trailer from being read in full (a short file, a
// failed seek) produces an empty tag, never an error.
pub(crate) fn read_from<R>(reader: &mut R) -> Id3v1Tag
where
	R: Read + Seek,
{
	let Ok(file_len) = reader.seek(SeekFrom::End(0)) else {
		return Id3v1Tag::default();
	};

	if file_len < ID3V1_TAG_LEN || reader.seek(SeekFrom::End(-(ID3V1_TAG_LEN as i64))).is_err() {
		return Id3v1Tag::default();
	}

	let mut trailer = [0; 128];
	if reader.read_exact(&mut trailer).is_err() {
		return Id3v1Tag::default();
	}

	parse(&trailer)
}

pub(crate) fn parse(trailer: &[u8; 128]) -> Id3v1Tag {
	if trailer[..3] != ID3V1_TAG_MARKER {
		return Id3v1Tag::default();
	}

	log::debug!("Found an ID3v1 tag, parsing");

	let mut tag = Id3v1Tag {
		title: decode_field(&trailer[3..33]),
		artist: decode_field(&trailer[33..63]),
		album: decode_field(&trailer[63..93]),
		year: decode_field(&trailer[93..97]),
		genre: None,
	};

	let genre_index = trailer[125];
	if usize::from(genre_index) < GENRES.len() {
		tag.genre = Some(GENRES[usize::from(genre_index)]);
	}

	tag
}

fn decode_field(data: &[u8]) -> Option<String> {
	let text = latin1_decode(data);
	let trimmed = trim_padding(&text);

	if trimmed.is_empty() {
		return None;
	}

	Some(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
	use super::{parse, read_from};

	use std::io::Cursor;

	fn trailer(title: &[u8], artist: &[u8], album: &[u8], year: &[u8], genre: u8) -> [u8; 128] {
		let mut bytes = [0_u8; 128];
		bytes[..3].copy_from_slice(b"TAG");
		bytes[3..3 + title.len()].copy_from_slice(title);
		bytes[33..33 + artist.len()].copy_from_slice(artist);
		bytes[63..63 + album.len()].copy_from_slice(album);
		bytes[93..93 + year.len()].copy_from_slice(year);
		bytes[125] = genre;
		bytes
	}

	#[test_log::test]
	fn nul_padded_fields() {
		let tag = parse(&trailer(b"Test Title", b"Test Artist", b"", b"1984", 12));

		assert_eq!(tag.title.as_deref(), Some("Test Title"));
		assert_eq!(tag.artist.as_deref(), Some("Test Artist"));
		assert_eq!(tag.album, None);
		assert_eq!(tag.year.as_deref(), Some("1984"));
		assert_eq!(tag.genre, Some("Other"));
	}

	#[test_log::test]
	fn space_padded_fields() {
		let tag = parse(&trailer(b"Test Title      ", b"   ", b"", b"", 255));

		assert_eq!(tag.title.as_deref(), Some("Test Title"));
		assert_eq!(tag.artist, None);
	}

	#[test_log::test]
	fn genre_table_bounds() {
		assert_eq!(parse(&trailer(b"T", b"", b"", b"", 79)).genre, Some("Hard Rock"));
		assert_eq!(parse(&trailer(b"T", b"", b"", b"", 80)).genre, None);
		assert_eq!(parse(&trailer(b"T", b"", b"", b"", 0)).genre, Some("Blues"));
	}

	#[test_log::test]
	fn missing_marker() {
		let mut bytes = trailer(b"Test Title", b"", b"", b"", 0);
		bytes[..3].copy_from_slice(b"XAG");

		assert!(parse(&bytes).is_empty());
	}

	#[test_log::test]
	fn file_shorter_than_a_trailer() {
		let mut reader = Cursor::new(vec![0_u8; 64]);

		assert!(read_from(&mut reader).is_empty());
	}

	#[test_log::test]
	fn trailer_at_end_of_larger_file() {
		let mut bytes = vec![0xAA_u8; 1000];
		bytes.extend_from_slice(&trailer(b"Imagine", b"John Lennon", b"Imagine", b"1971", 17));

		let tag = read_from(&mut Cursor::new(bytes));

		assert_eq!(tag.title.as_deref(), Some("Imagine"));
		assert_eq!(tag.artist.as_deref(), Some("John Lennon"));
		assert_eq!(tag.genre, Some("Rock"));
	}
}
