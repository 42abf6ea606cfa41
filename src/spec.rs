/*!
# Clustopt: Option Spec.
*/

use crate::{
	EnvArgs,
	Scanner,
	SpecError,
	TokenSource,
};
use std::collections::BTreeSet;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Option Spec.
///
/// This holds the short letters and long names a [`Scanner`] should
/// recognize, and whether or not each requires a value.
///
/// Declaration is builder-style; every method returns an error if the key
/// was previously specified or could never match a token.
///
/// ## Examples
///
/// ```
/// use clustopt::OptionSpec;
///
/// let spec = OptionSpec::new()
///     .with_shortopts("hvo:").unwrap()   // -h, -v, and -o VALUE.
///     .with_longs(["help", "verbose"]).unwrap()
///     .with_long_options(["output"]).unwrap();
///
/// assert_eq!(spec.short('o'), Some(true));
/// assert_eq!(spec.short('h'), Some(false));
/// assert_eq!(spec.short('x'), None);
///
/// assert!(spec.has_long("help"));
/// assert!(spec.long_takes_value("output"));
/// assert!(! spec.long_takes_value("verbose"));
/// ```
pub struct OptionSpec {
	/// # Short Letters (in Declaration Order).
	short: Vec<(char, bool)>,

	/// # All Long Names.
	long: BTreeSet<String>,

	/// # Long Names Requiring Values.
	///
	/// This is always a subset of `long`.
	long_value: BTreeSet<String>,
}

impl OptionSpec {
	#[must_use]
	/// # New (Empty).
	pub const fn new() -> Self {
		Self {
			short: Vec::new(),
			long: BTreeSet::new(),
			long_value: BTreeSet::new(),
		}
	}

	/// # With Short Option.
	///
	/// Add a single short letter, optionally requiring a value.
	///
	/// ## Examples
	///
	/// ```
	/// let spec = clustopt::OptionSpec::new()
	///     .with_short('q', false).unwrap()  // Boolean flag.
	///     .with_short('j', true).unwrap();  // Expects a value.
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the letter was previously specified, or
	/// is a dash, colon, whitespace, or control character.
	pub fn with_short(mut self, key: char, value: bool) -> Result<Self, SpecError> {
		if ! valid_short(key) { Err(SpecError::InvalidShort(key)) }
		else if self.short(key).is_some() { Err(SpecError::DuplicateShort(key)) }
		else {
			self.short.push((key, value));
			Ok(self)
		}
	}

	/// # With Short Options (Getopt String).
	///
	/// Add any number of short letters using the traditional `getopt`
	/// notation, where a colon following a letter means that letter requires
	/// a value.
	///
	/// ## Examples
	///
	/// ```
	/// let spec = clustopt::OptionSpec::new()
	///     .with_shortopts("ab:").unwrap();
	///
	/// assert_eq!(spec.short('a'), Some(false));
	/// assert_eq!(spec.short('b'), Some(true));
	///
	/// // Optional values aren't a thing here.
	/// assert!(clustopt::OptionSpec::new().with_shortopts("ab::").is_err());
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the string starts with or doubles up on
	/// colons, or if any letter is invalid or repeated.
	pub fn with_shortopts(mut self, opts: &str) -> Result<Self, SpecError> {
		let mut chars = opts.chars().peekable();
		while let Some(c) = chars.next() {
			// A colon here has nothing to attach to.
			if c == ':' { return Err(SpecError::InvalidShortOpts(opts.to_owned())); }
			let value = chars.next_if_eq(&':').is_some();
			self = self.with_short(c, value)?;
		}

		Ok(self)
	}

	/// # With Long Option.
	///
	/// Add a long name — without the leading dashes — optionally requiring a
	/// value.
	///
	/// Note that long values are only ever accepted inline, i.e.
	/// `--name=value`.
	///
	/// ## Examples
	///
	/// ```
	/// let spec = clustopt::OptionSpec::new()
	///     .with_long("verbose", false).unwrap() // Boolean flag.
	///     .with_long("output", true).unwrap();  // Expects a value.
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the name was previously specified, is
	/// empty, starts with a dash, or contains `=` or whitespace.
	pub fn with_long(mut self, key: &str, value: bool) -> Result<Self, SpecError> {
		if ! valid_long(key) { Err(SpecError::InvalidLong(key.to_owned())) }
		else if self.long.insert(key.to_owned()) {
			if value { self.long_value.insert(key.to_owned()); }
			Ok(self)
		}
		else { Err(SpecError::DuplicateLong(key.to_owned())) }
	}
}

impl OptionSpec {
	/// # With Long Keys.
	///
	/// Add one or more long names, each paired with its value requirement.
	///
	/// ## Examples
	///
	/// ```
	/// let spec = clustopt::OptionSpec::new()
	///     .with_long_keys([
	///         ("verbose", false), // Boolean flag.
	///         ("output", true),   // Expects a value.
	///     ]).unwrap();
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if any of the names were previously
	/// specified or are invalid.
	pub fn with_long_keys<'a, I: IntoIterator<Item=(&'a str, bool)>>(self, keys: I)
	-> Result<Self, SpecError> {
		keys.into_iter().try_fold(self, |acc, (k, v)| acc.with_long(k, v))
	}

	/// # With Long Options.
	///
	/// Add one or more long names that require values.
	///
	/// ## Errors
	///
	/// This will return an error if any of the names were previously
	/// specified or are invalid.
	pub fn with_long_options<'a, I: IntoIterator<Item=&'a str>>(self, keys: I)
	-> Result<Self, SpecError> {
		keys.into_iter().try_fold(self, |acc, k| acc.with_long(k, true))
	}

	/// # With Long Switches.
	///
	/// Add one or more boolean long names.
	///
	/// ## Errors
	///
	/// This will return an error if any of the names were previously
	/// specified or are invalid.
	pub fn with_longs<'a, I: IntoIterator<Item=&'a str>>(self, keys: I)
	-> Result<Self, SpecError> {
		keys.into_iter().try_fold(self, |acc, k| acc.with_long(k, false))
	}
}

impl OptionSpec {
	#[must_use]
	/// # Short Letter.
	///
	/// Returns `Some(requires_value)` if the letter is known, `None` if not.
	pub fn short(&self, key: char) -> Option<bool> {
		self.short.iter().find_map(|&(k, v)| (k == key).then_some(v))
	}

	/// # Short Letters.
	///
	/// Iterate the declared short letters and their value requirements in
	/// the order they were added.
	pub fn shorts(&self) -> impl ExactSizeIterator<Item=(char, bool)> + '_ {
		self.short.iter().copied()
	}

	#[must_use]
	/// # Known Long Name?
	pub fn has_long(&self, key: &str) -> bool { self.long.contains(key) }

	#[must_use]
	/// # Long Name Requires Value?
	///
	/// This is only ever `true` for known names.
	pub fn long_takes_value(&self, key: &str) -> bool { self.long_value.contains(key) }

	/// # Long Names.
	///
	/// Iterate the declared long names (alphabetically) and their value
	/// requirements.
	pub fn longs(&self) -> impl Iterator<Item=(&str, bool)> + '_ {
		self.long.iter().map(|k| (k.as_str(), self.long_value.contains(k)))
	}

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.short.is_empty() && self.long.is_empty() }
}

impl OptionSpec {
	/// # Parse Tokens.
	///
	/// Return a [`Scanner`] over the tokens. See [`parse`](crate::parse) for
	/// details.
	///
	/// ## Examples
	///
	/// ```
	/// use clustopt::{OptionSpec, ParseResult};
	///
	/// let spec = OptionSpec::new().with_shortopts("ab:").unwrap();
	/// let res: Vec<_> = spec.parse(["-abfoo"]).collect();
	/// assert_eq!(
	///     res,
	///     [
	///         ParseResult::ShortOption('a', String::new()),
	///         ParseResult::ShortOption('b', "foo".to_owned()),
	///     ],
	/// );
	/// ```
	pub fn parse<T: TokenSource>(&self, tokens: T) -> Scanner<'_, T> {
		Scanner::new(tokens, self)
	}

	#[must_use]
	/// # Parse Process Arguments.
	///
	/// Snapshot the process arguments — sans program path — and return a
	/// [`Scanner`] over them.
	pub fn parse_env(&self) -> Scanner<'_, EnvArgs> {
		Scanner::new(crate::args(), self)
	}
}



/// # Valid Short Letter?
fn valid_short(key: char) -> bool {
	! (matches!(key, '-' | ':') || key.is_whitespace() || key.is_control())
}

/// # Valid Long Name?
fn valid_long(key: &str) -> bool {
	! key.is_empty() &&
	! key.starts_with('-') &&
	! key.chars().any(|c| c == '=' || c.is_whitespace() || c.is_control())
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_shortopts() {
		let spec = OptionSpec::new().with_shortopts("ab:cd:").unwrap();
		assert_eq!(
			spec.shorts().collect::<Vec<_>>(),
			[('a', false), ('b', true), ('c', false), ('d', true)],
			"Short letters should keep declaration order.",
		);

		// Same thing, the long way.
		let spec2 = OptionSpec::new()
			.with_short('a', false).unwrap()
			.with_short('b', true).unwrap()
			.with_short('c', false).unwrap()
			.with_short('d', true).unwrap();
		assert_eq!(spec, spec2);

		// Empty is fine.
		assert!(OptionSpec::new().with_shortopts("").unwrap().is_empty());

		// Non-ASCII is fine too.
		assert_eq!(
			OptionSpec::new().with_shortopts("ö:").unwrap().short('ö'),
			Some(true),
		);
	}

	#[test]
	fn t_shortopts_invalid() {
		for bad in [":a", "a::", "ab:::", "::"] {
			assert_eq!(
				OptionSpec::new().with_shortopts(bad),
				Err(SpecError::InvalidShortOpts(bad.to_owned())),
				"Bug: {bad:?} should be rejected.",
			);
		}

		assert_eq!(
			OptionSpec::new().with_shortopts("aba"),
			Err(SpecError::DuplicateShort('a')),
		);
		assert_eq!(
			OptionSpec::new().with_shortopts("a-"),
			Err(SpecError::InvalidShort('-')),
		);
		assert_eq!(
			OptionSpec::new().with_shortopts("a b"),
			Err(SpecError::InvalidShort(' ')),
		);
	}

	#[test]
	fn t_long() {
		// Define keys all together.
		let spec1 = OptionSpec::new()
			.with_long_keys([
				("switch1", false),
				("switch2", false),
				("opt1", true),
				("opt2", true),
			])
			.expect("OptionSpec::with_long_keys failed.");

		// Define them separately.
		let spec2 = OptionSpec::new()
			.with_longs(["switch1", "switch2"])
				.expect("OptionSpec::with_longs failed.")
			.with_long_options(["opt1", "opt2"])
				.expect("OptionSpec::with_long_options failed.");

		assert_eq!(spec1, spec2);

		// Value-takers are a subset of the whole.
		assert!(spec1.long_value.is_subset(&spec1.long));
		assert_eq!(
			spec1.longs().collect::<Vec<_>>(),
			[("opt1", true), ("opt2", true), ("switch1", false), ("switch2", false)],
		);

		// While we're here, let's make sure we can't repeat a key, even with
		// a different value requirement.
		assert_eq!(
			spec2.with_long("switch1", true),
			Err(SpecError::DuplicateLong("switch1".to_owned())),
		);
	}

	#[test]
	fn t_valid_long() {
		for k in ["a", "help", "dry-run", "with_underscore", "Björk", "x1"] {
			assert!(valid_long(k), "Bug: {k:?} should be a valid long name.");
		}

		for k in ["", "-", "-help", "--help", "foo=bar", "=", "two words", "tab\t"] {
			assert!(! valid_long(k), "Bug: {k:?} shouldn't be a valid long name.");
		}
	}

	#[test]
	fn t_valid_short() {
		for c in ('a'..='z').chain('A'..='Z').chain('0'..='9').chain(['?', '=', '_', 'ö']) {
			assert!(valid_short(c), "Bug: {c:?} should be a valid short letter.");
		}

		for c in ['-', ':', ' ', '\t', '\n', '\0'] {
			assert!(! valid_short(c), "Bug: {c:?} shouldn't be a valid short letter.");
		}
	}
}
