//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! See also: [`Id3v1Tag`]
//!
//! ## Genres
//!
//! ID3v1 stores the genre in a single byte indexing a fixed name table. Only
//! the 80 canonical names are recognized here, stored in the [`GENRES`]
//! constant; Winamp's later extensions are treated as no genre.
//!
//! ## Years
//!
//! The year field is 4 ASCII characters. It is kept as text at this layer;
//! whether it is a plausible release year is decided by the caller.

pub(crate) mod constants;
pub(crate) mod read;
pub(crate) mod tag;

pub use constants::GENRES;
pub use tag::Id3v1Tag;
