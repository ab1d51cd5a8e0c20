use super::header::{FrameHeader, verify_frame_sync};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder};

// Frame sync is only searched for in the first chunk of the file; a frame
// starting later than this is not worth a full-file scan.
const FRAME_SEARCH_BOUNDS: u64 = 100_000;

/// Estimate the duration of an MPEG audio file, in whole seconds
///
/// The estimate comes from the bitrate of the *first* valid Layer III frame
/// header found within the leading 100,000 bytes, assuming that bitrate holds
/// for the entire file. For variable-bitrate files the result is approximate
/// by design.
///
/// Returns 0 when the file cannot be read or no valid frame is found — an
/// unknown duration is a normal outcome, not an error.
///
/// # Examples
///
/// ```rust,no_run
/// let duration = mixtape::mpeg::estimate_duration("roundabout.mp3");
/// if duration > 0 {
/// 	println!("{}:{:02}", duration / 60, duration % 60);
/// }
/// ```
pub fn estimate_duration(path: impl AsRef<Path>) -> u32 {
	let Ok(mut file) = File::open(path) else {
		return 0;
	};

	let Ok(metadata) = file.metadata() else {
		return 0;
	};
	let file_size = metadata.len();

	let mut buf = Vec::with_capacity(FRAME_SEARCH_BOUNDS as usize);
	if file.take(FRAME_SEARCH_BOUNDS).read_to_end(&mut buf).is_err() {
		return 0;
	}

	log::debug!("Searching {} bytes for an MPEG frame sync", buf.len());

	let mut pos = 0;
	while pos + 4 < buf.len() {
		if verify_frame_sync([buf[pos], buf[pos + 1]]) {
			let header_data = BigEndian::read_u32(&buf[pos..pos + 4]);
			if let Some(header) = FrameHeader::read(header_data) {
				return ((file_size * 8) / u64::from(header.bitrate)) as u32;
			}
		}

		pos += 1;
	}

	0
}
