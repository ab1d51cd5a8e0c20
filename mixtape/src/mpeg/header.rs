// Layer III bitrates, in kbps. Index 0 is "free" and index 15 reserved;
// neither supports an estimate.
pub(crate) const BITRATES: [u32; 16] = [
	0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
];

// MPEG-1 sample rates in Hz; index 3 is reserved.
pub(crate) const SAMPLE_RATES: [u32; 4] = [44100, 48000, 32000, 0];

pub(crate) fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
	frame_sync[0] == 0xFF && frame_sync[1] >> 5 == 0b111
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct FrameHeader {
	/// Bitrate in bits per second
	pub(crate) bitrate: u32,
	pub(crate) sample_rate: u32,
}

impl FrameHeader {
	// Decode the 4 header bytes starting at the frame sync, packed big-endian.
	pub(crate) fn read(data: u32) -> Option<Self> {
		// Layer III only
		if (data >> 17) & 0b11 != 0b01 {
			return None;
		}

		let bitrate_index = (data >> 12) & 0xF;
		if bitrate_index == 0 || bitrate_index >= 15 {
			return None;
		}
		let bitrate = BITRATES[bitrate_index as usize] * 1000;

		let sample_rate_index = (data >> 10) & 0b11;
		if sample_rate_index == 0b11 {
			return None;
		}
		let sample_rate = SAMPLE_RATES[sample_rate_index as usize];

		Some(FrameHeader {
			bitrate,
			sample_rate,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::{FrameHeader, verify_frame_sync};

	use byteorder::{BigEndian, ByteOrder};

	fn read(bytes: [u8; 4]) -> Option<FrameHeader> {
		FrameHeader::read(BigEndian::read_u32(&bytes))
	}

	#[test_log::test]
	fn frame_sync() {
		assert!(verify_frame_sync([0xFF, 0xFB]));
		assert!(verify_frame_sync([0xFF, 0xE0]));
		assert!(!verify_frame_sync([0xFF, 0x1A]));
		assert!(!verify_frame_sync([0x00, 0xFB]));
	}

	#[test_log::test]
	fn layer_iii_header() {
		// 0xFB = MPEG-1 Layer III, 0x90 = 128 kbps @ 44100 Hz
		let header = read([0xFF, 0xFB, 0x90, 0x64]).unwrap();

		assert_eq!(header.bitrate, 128_000);
		assert_eq!(header.sample_rate, 44_100);
	}

	#[test_log::test]
	fn other_layers_rejected() {
		// 0xFD = Layer II, 0xFF = Layer I
		assert!(read([0xFF, 0xFD, 0x90, 0x64]).is_none());
		assert!(read([0xFF, 0xFF, 0x90, 0x64]).is_none());
	}

	#[test_log::test]
	fn free_and_reserved_bitrates_rejected() {
		assert!(read([0xFF, 0xFB, 0x00, 0x64]).is_none());
		assert!(read([0xFF, 0xFB, 0xF0, 0x64]).is_none());
	}

	#[test_log::test]
	fn reserved_sample_rate_rejected() {
		// 0x9C = 128 kbps with sample rate index 3
		assert!(read([0xFF, 0xFB, 0x9C, 0x64]).is_none());
	}

	#[test_log::test]
	fn bitrate_table_extremes() {
		// 0x10 = 32 kbps, 0xE0 = 320 kbps
		assert_eq!(read([0xFF, 0xFB, 0x10, 0x64]).unwrap().bitrate, 32_000);
		assert_eq!(read([0xFF, 0xFB, 0xE0, 0x64]).unwrap().bitrate, 320_000);
	}
}
