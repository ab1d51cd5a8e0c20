//! Contains the errors that can arise within mixtape
//!
//! The primary error is [`MixtapeError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Note that the metadata readers treat malformed tag data as missing, not as
//! an error — see [`metadata::read_from_path`](crate::metadata::read_from_path).

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, MixtapeError>`
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Arises when a saved catalog file is unreadable as its declared format
	///
	/// This only occurs for fatal structural problems (ex. a bad header line).
	/// In [`ParsingMode::Strict`](crate::config::ParsingMode::Strict), malformed
	/// rows are promoted to this error as well.
	BadCatalogFile(&'static str),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadCatalogFile(reason) => write!(f, "Catalog file: {reason}"),
			Self::Io(err) => write!(f, "{err}"),
		}
	}
}

/// Errors that could occur within mixtape
pub struct MixtapeError {
	pub(crate) kind: ErrorKind,
}

impl MixtapeError {
	/// Create a `MixtapeError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::error::{ErrorKind, MixtapeError};
	///
	/// let bad_header = MixtapeError::new(ErrorKind::BadCatalogFile("unrecognized header"));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::error::{ErrorKind, MixtapeError};
	///
	/// let bad_header = MixtapeError::new(ErrorKind::BadCatalogFile("unrecognized header"));
	/// if let ErrorKind::BadCatalogFile(_) = bad_header.kind() {
	/// 	eprintln!("The catalog file is damaged");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for MixtapeError {}

impl Debug for MixtapeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl Display for MixtapeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.kind)
	}
}

impl From<std::io::Error> for MixtapeError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}
