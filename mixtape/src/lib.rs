//! Catalog locally stored MP3 files: read identifying metadata straight out of
//! the file bytes, keep the results in a searchable track list, and save or
//! reload that list as delimited text.
//!
//! # Reading metadata
//!
//! ID3v2 frames are preferred, the ID3v1 trailer fills any gaps, and the
//! duration is estimated from the MPEG framing:
//!
//! ```rust,no_run
//! use mixtape::config::ParseOptions;
//! use mixtape::metadata;
//!
//! # fn main() -> mixtape::error::Result<()> {
//! let meta = metadata::read_from_path("imagine.mp3", ParseOptions::new())?;
//!
//! assert!(meta.is_identified());
//! println!("{:?} by {:?} ({:?}s)", meta.title, meta.artist, meta.duration_secs);
//! # Ok(())
//! # }
//! ```
//!
//! # Keeping a catalog
//!
//! ```rust
//! use mixtape::catalog::{Catalog, SortField, SortOrder};
//! use mixtape::persist;
//! use mixtape::track::Track;
//!
//! # fn main() -> mixtape::error::Result<()> {
//! let mut catalog = Catalog::new();
//! catalog.add(Track {
//! 	title: String::from("Paranoid"),
//! 	artist: String::from("Black Sabbath"),
//! 	year: 1970,
//! 	..Track::default()
//! });
//!
//! catalog.sort_by(SortField::Year, SortOrder::Ascending);
//!
//! let mut saved = Vec::new();
//! persist::csv::save_to(&catalog, &mut saved)?;
//! # Ok(())
//! # }
//! ```
//!
//! Files with no usable tags can still be named: see [`filename`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod filename;
pub mod id3;
pub(crate) mod macros;
pub mod metadata;
pub mod mpeg;
pub mod persist;
pub mod track;
mod util;

pub use metadata::{RawMetadata, read_from_path};
pub use track::Track;
pub use util::text::TextEncoding;
