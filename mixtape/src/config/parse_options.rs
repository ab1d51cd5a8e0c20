/// The parsing strictness mode
///
/// This only affects the *text* catalog formats (see [`persist`](crate::persist)).
/// The binary metadata readers never error on malformed tag data, regardless of mode —
/// a damaged frame simply leaves its field unfilled.
///
/// # Examples
///
/// ```rust,no_run
/// use mixtape::config::{ParseOptions, ParsingMode};
/// use mixtape::persist;
///
/// # fn main() -> mixtape::error::Result<()> {
/// // We only want to load a catalog file if every row is intact
/// let options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let catalog = persist::csv::load_from_path("catalog.csv", options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * A catalog row with missing columns - The loader will error and the entire file is discarded
	/// * A numeric column that fails to parse - The loader will error and the entire file is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * A catalog row with missing columns - The row is skipped and the loader moves on
	/// * A numeric column that fails to parse - The value becomes 0 and the loader moves on
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// Currently behaves like [`ParsingMode::BestAttempt`] everywhere; reserved for
	/// future recovery paths that `BestAttempt` would still reject.
	Relaxed,
}

/// Options to control how mixtape parses a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_properties: bool,
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_properties: true,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_properties: true,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// Whether or not to read the audio properties
	///
	/// For MP3 input this controls the duration estimate, which costs an extra
	/// bounded read of the file.
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::config::ParseOptions;
	///
	/// // By default, `read_properties` is enabled. Here, we don't want the duration.
	/// let parsing_options = ParseOptions::new().read_properties(false);
	/// ```
	pub fn read_properties(&mut self, read_properties: bool) -> Self {
		self.read_properties = read_properties;
		*self
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mixtape::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}
