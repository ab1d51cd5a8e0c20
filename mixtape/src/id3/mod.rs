//! ID3 specific items
//!
//! The two tag generations are unrelated formats that happen to share a name:
//! ID3v2 is a frame list at the *front* of the file, ID3v1 a fixed 128-byte
//! trailer at the *end*. Both are read here; neither is ever written.

pub mod v1;
pub mod v2;
