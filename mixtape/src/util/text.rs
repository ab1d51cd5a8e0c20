/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}
}

// Decode the content of a text frame, after the encoding selector byte.
//
// Encodings 0 and 3 are both decoded as UTF-8, and encodings 1 and 2 both as
// BOM-or-little-endian UTF-16. Compatibility with existing catalogs is defined
// by this mapping, not by strict ID3v2 conformance.
pub(crate) fn decode_text(encoding: TextEncoding, bytes: &[u8]) -> String {
	match encoding {
		TextEncoding::Latin1 | TextEncoding::UTF8 => utf8_decode_lossy(bytes),
		TextEncoding::UTF16 | TextEncoding::UTF16BE => utf16_decode(bytes),
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| *c as char).collect::<String>()
}

pub(crate) fn utf8_decode_lossy(bytes: &[u8]) -> String {
	String::from_utf8_lossy(bytes).into_owned()
}

// An odd-length payload cannot be a UTF-16 string; it decodes to nothing
// rather than dropping the trailing byte.
pub(crate) fn utf16_decode(bytes: &[u8]) -> String {
	if bytes.is_empty() || bytes.len() % 2 != 0 {
		return String::new();
	}

	let mut units = bytes
		.chunks_exact(2)
		.map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
		.collect::<Vec<u16>>();

	// A leading BOM picks the byte order; without one, little-endian is assumed.
	match units.first() {
		Some(&0xFEFF) => {
			units.remove(0);
		},
		Some(&0xFFFE) => {
			units.remove(0);
			for unit in &mut units {
				*unit = unit.swap_bytes();
			}
		},
		_ => {},
	}

	String::from_utf16_lossy(&units)
}

// ID3v1 fields are padded out with NULs or spaces, and sloppy writers pad on
// both sides.
pub(crate) fn trim_padding(text: &str) -> &str {
	text.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
	use super::TextEncoding;

	const TEST_STRING: &str = "l\u{00f8}ft\u{00a5}";

	#[test_log::test]
	fn utf16_no_bom_defaults_to_little_endian() {
		let le_no_bom = super::utf16_decode(&[
			0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5, 0x00,
		]);

		assert_eq!(le_no_bom, TEST_STRING);
	}

	#[test_log::test]
	fn utf16_bom_picks_byte_order() {
		let be = super::utf16_decode(&[
			0xFE, 0xFF, 0x00, 0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5,
		]);
		let le = super::utf16_decode(&[
			0xFF, 0xFE, 0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5, 0x00,
		]);

		assert_eq!(be, le);
		assert_eq!(be, TEST_STRING);
	}

	#[test_log::test]
	fn utf16_odd_length_decodes_to_nothing() {
		assert_eq!(super::utf16_decode(&[0x6C, 0x00, 0xF8]), "");
	}

	#[test_log::test]
	fn latin1_high_bytes() {
		assert_eq!(super::latin1_decode(&[0x6C, 0xF8, 0x66, 0x74, 0xA5]), TEST_STRING);
	}

	#[test_log::test]
	fn encoding_selector_bytes() {
		assert_eq!(TextEncoding::from_u8(0), Some(TextEncoding::Latin1));
		assert_eq!(TextEncoding::from_u8(1), Some(TextEncoding::UTF16));
		assert_eq!(TextEncoding::from_u8(2), Some(TextEncoding::UTF16BE));
		assert_eq!(TextEncoding::from_u8(3), Some(TextEncoding::UTF8));
		assert_eq!(TextEncoding::from_u8(4), None);
	}

	#[test_log::test]
	fn padding_trim() {
		assert_eq!(super::trim_padding("Test Title\0\0\0"), "Test Title");
		assert_eq!(super::trim_padding("  Test Title  "), "Test Title");
		assert_eq!(super::trim_padding("\0\0"), "");
	}
}
