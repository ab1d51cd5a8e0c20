//! MPEG audio framing
//!
//! Only enough of the framing is decoded to estimate a duration: the first
//! valid MPEG-1/2 Layer III frame header fixes the bitrate, and the duration
//! follows from the file size under a constant-bitrate assumption. This is an
//! intentional approximation; it is not a variable-bitrate duration decoder.

pub(crate) mod header;
mod properties;

pub use properties::estimate_duration;
