use super::header::{ID3V2_HEADER_LEN, Id3v2Header};
use super::synchsafe::SynchsafeInteger;
use crate::util::text::{TextEncoding, decode_text};

use byteorder::{BigEndian, ByteOrder};

// Identifier (4) + synchsafe size (4) + flags (2)
const FRAME_HEADER_LEN: usize = 10;

/// Extract the text of the first frame matching `frame_id`
///
/// `data` should hold at least the leading portion of the file (the tag must fit
/// inside it; frames past the end of `data` are unreachable). The frame content
/// is decoded according to its encoding selector byte and returned with
/// surrounding whitespace and NUL terminators removed.
///
/// Returns `None` when `data` carries no ID3v2 header, the header is malformed,
/// or no matching frame with non-empty decodable content is found. The scan
/// never fails on malformed frame data; at worst it finds nothing.
///
/// # Examples
///
/// ```rust
/// use mixtape::id3::v2::read_text_frame;
///
/// // "ID3", v2.4, no flags, 15 bytes of frames
/// let mut tag = vec![b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 15];
/// // "TIT2" frame, 5 content bytes, no flags
/// tag.extend_from_slice(b"TIT2");
/// tag.extend_from_slice(&[0, 0, 0, 5, 0, 0]);
/// // UTF-8 encoding selector, then the title itself
/// tag.push(3);
/// tag.extend_from_slice(b"Song");
///
/// assert_eq!(read_text_frame(&tag, b"TIT2").as_deref(), Some("Song"));
/// assert_eq!(read_text_frame(&tag, b"TPE1"), None);
/// ```
pub fn read_text_frame(data: &[u8], frame_id: &[u8; 4]) -> Option<String> {
	let header = Id3v2Header::parse(data)?;
	let tag_end = ID3V2_HEADER_LEN.saturating_add(header.size as usize);

	log::debug!(
		"Searching {} bytes of ID3v2 frame data for {}",
		header.size,
		String::from_utf8_lossy(frame_id)
	);

	let mut pos = ID3V2_HEADER_LEN;
	while pos + FRAME_HEADER_LEN < data.len() && pos < tag_end {
		let id = &data[pos..pos + 4];
		let frame_size = BigEndian::read_u32(&data[pos + 4..pos + 8]).unsynch() as usize;

		// A zero size is either padding or a corrupt header; nothing beyond it
		// can be walked reliably.
		if frame_size == 0 {
			break;
		}

		if id == frame_id {
			let content_start = pos + FRAME_HEADER_LEN;
			let content_end = std::cmp::min(content_start + frame_size, data.len());
			let content = &data[content_start..content_end];

			if content.len() > 1 {
				if let Some(encoding) = TextEncoding::from_u8(content[0]) {
					let text = decode_text(encoding, &content[1..]);
					if !text.is_empty() {
						// First frame with decodable content wins, even if it
						// trims down to nothing.
						let trimmed = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
						if trimmed.is_empty() {
							return None;
						}

						return Some(trimmed.to_owned());
					}
				}
			}
		}

		pos += FRAME_HEADER_LEN + frame_size;
	}

	None
}
