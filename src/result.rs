/*!
# Clustopt: Parse Results.
*/

use crate::ParseError;
use std::fmt;



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Parse Result.
///
/// This is the return type for the [`Scanner`](crate::Scanner) iterator. In
/// practice, you'll probably want to use a `match` and take the appropriate
/// action given the classification.
///
/// Option names are stored without their leading dash(es). Values are empty
/// strings when absent, so `--key=` and `--key` look the same here.
pub enum ParseResult {
	/// # Short Option and Value.
	///
	/// The value is empty unless the letter requires one.
	ShortOption(char, String),

	/// # Long Option and Value.
	///
	/// The value is empty unless the name requires one.
	LongOption(String, String),

	/// # Positional Arguments.
	///
	/// This holds every non-option token — including everything after the
	/// `--` terminator — in the order encountered. It is only ever yielded
	/// once, as the final item, and only if non-empty.
	Arguments(Vec<String>),

	/// # Error.
	///
	/// A token could not be classified. Scanning continues regardless; it's
	/// up to you whether or not to bail.
	Error(ParseError),
}

impl fmt::Display for ParseResult {
	/// # Diagnostic Rendering.
	///
	/// ```
	/// use clustopt::{ParseError, ParseResult};
	///
	/// assert_eq!(
	///     ParseResult::ShortOption('v', String::new()).to_string(),
	///     "option '-v'",
	/// );
	/// assert_eq!(
	///     ParseResult::LongOption("out".to_owned(), "a.txt".to_owned()).to_string(),
	///     "option '--out'",
	/// );
	/// assert_eq!(
	///     ParseResult::Arguments(vec!["a".to_owned(), "b c".to_owned()]).to_string(),
	///     r#"arguments ["a", "b c"]"#,
	/// );
	/// assert_eq!(
	///     ParseResult::Error(ParseError::InvalidOption("x".to_owned())).to_string(),
	///     "invalid option -- 'x'",
	/// );
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ShortOption(k, _) => write!(f, "option '-{k}'"),
			Self::LongOption(k, _) => write!(f, "option '--{k}'"),
			Self::Arguments(v) => write!(f, "arguments {v:?}"),
			Self::Error(e) => fmt::Display::fmt(e, f),
		}
	}
}

impl From<ParseError> for ParseResult {
	#[inline]
	fn from(src: ParseError) -> Self { Self::Error(src) }
}

impl ParseResult {
	#[must_use]
	/// # Is Error?
	pub const fn is_error(&self) -> bool { matches!(self, Self::Error(_)) }

	#[must_use]
	/// # Into Error.
	///
	/// Return the inner [`ParseError`], if any.
	pub fn into_error(self) -> Option<ParseError> {
		if let Self::Error(e) = self { Some(e) }
		else { None }
	}

	#[must_use]
	/// # Value.
	///
	/// Return the value attached to a short or long option. Errors and
	/// positional arguments have no value.
	pub fn value(&self) -> Option<&str> {
		match self {
			Self::ShortOption(_, v) | Self::LongOption(_, v) => Some(v.as_str()),
			Self::Arguments(_) | Self::Error(_) => None,
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_helpers() {
		let err = ParseResult::from(ParseError::RequiresArgument("o".to_owned()));
		assert!(err.is_error());
		assert_eq!(err.value(), None);
		assert_eq!(err.to_string(), "option requires an argument -- 'o'");
		assert_eq!(
			err.into_error(),
			Some(ParseError::RequiresArgument("o".to_owned())),
		);

		let opt = ParseResult::LongOption("out".to_owned(), String::new());
		assert!(! opt.is_error());
		assert_eq!(opt.value(), Some(""));
		assert_eq!(opt.into_error(), None);

		let args = ParseResult::Arguments(vec!["-".to_owned()]);
		assert_eq!(args.value(), None);
		assert_eq!(args.to_string(), r#"arguments ["-"]"#);
	}
}
