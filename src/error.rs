/*!
# Clustopt: Errors

There are two kinds of trouble here: [`ParseError`]s, which are _data_ —
yielded in-stream by the [`Scanner`](crate::Scanner) alongside everything
else — and [`SpecError`]s, which are returned by the
[`OptionSpec`](crate::OptionSpec) builder methods when a key could never
match anything.
*/

use std::fmt;
use thiserror::Error;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Parse Error Kind.
///
/// This is the closed set of things that can go wrong with a given token.
pub enum ErrorKind {
	/// # Unknown short letter or unknown/malformed long name.
	InvalidOption,

	/// # A value-taking option received no value.
	RequiresArgument,

	/// # A boolean long option was handed an `=value`.
	UnexpectedArgument,
}

impl fmt::Display for ErrorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ErrorKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidOption => "invalid option",
			Self::RequiresArgument => "option requires an argument",
			Self::UnexpectedArgument => "unexpected argument",
		}
	}
}



#[derive(Debug, Clone, Eq, Hash, PartialEq, Error)]
/// # Parse Error.
///
/// Each variant holds the offending text: a single short letter, a long
/// name (sans dashes), or — for malformed tokens like `--=` — the whole
/// token.
///
/// The [`Display`](fmt::Display) output mirrors the diagnostics GNU `getopt`
/// prints:
///
/// ```
/// use clustopt::ParseError;
///
/// assert_eq!(
///     ParseError::InvalidOption("x".to_owned()).to_string(),
///     "invalid option -- 'x'",
/// );
/// assert_eq!(
///     ParseError::RequiresArgument("output".to_owned()).to_string(),
///     "option requires an argument -- 'output'",
/// );
/// assert_eq!(
///     ParseError::UnexpectedArgument("help".to_owned()).to_string(),
///     "option '--help' doesn't allow an argument",
/// );
/// ```
pub enum ParseError {
	#[error("invalid option -- '{0}'")]
	/// # Invalid Option.
	InvalidOption(String),

	#[error("option requires an argument -- '{0}'")]
	/// # Missing Value.
	RequiresArgument(String),

	#[error("option '--{0}' doesn't allow an argument")]
	/// # Unwanted Value.
	UnexpectedArgument(String),
}

impl ParseError {
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidOption(_) => ErrorKind::InvalidOption,
			Self::RequiresArgument(_) => ErrorKind::RequiresArgument,
			Self::UnexpectedArgument(_) => ErrorKind::UnexpectedArgument,
		}
	}

	#[must_use]
	/// # Offending Text.
	pub fn text(&self) -> &str {
		match self {
			Self::InvalidOption(s)
				| Self::RequiresArgument(s)
				| Self::UnexpectedArgument(s) => s.as_str(),
		}
	}

	#[must_use]
	/// # Into Offending Text.
	pub fn into_text(self) -> String {
		match self {
			Self::InvalidOption(s)
				| Self::RequiresArgument(s)
				| Self::UnexpectedArgument(s) => s,
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Option Spec Error.
///
/// This is returned by the [`OptionSpec`](crate::OptionSpec) builder when a
/// key is repeated or could never match a token.
pub enum SpecError {
	#[error("Duplicate short option: -{0}")]
	/// # Repeated Short Letter.
	DuplicateShort(char),

	#[error("Duplicate long option: --{0}")]
	/// # Repeated Long Name.
	DuplicateLong(String),

	#[error("Invalid short option: {0:?}")]
	/// # Unusable Short Letter.
	InvalidShort(char),

	#[error("Invalid long option: {0:?}")]
	/// # Unusable Long Name.
	InvalidLong(String),

	#[error("Invalid short option string: {0:?}")]
	/// # Malformed Getopt String.
	///
	/// Leading and doubled colons are rejected; optional values (`a::`) are
	/// not supported.
	InvalidShortOpts(String),
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_kind() {
		for (err, kind, text) in [
			(ParseError::InvalidOption("x".to_owned()), ErrorKind::InvalidOption, "x"),
			(ParseError::RequiresArgument("o".to_owned()), ErrorKind::RequiresArgument, "o"),
			(ParseError::UnexpectedArgument("help".to_owned()), ErrorKind::UnexpectedArgument, "help"),
		] {
			assert_eq!(err.kind(), kind, "Kind mismatch for {err:?}.");
			assert_eq!(err.text(), text, "Text mismatch for {err:?}.");
			assert_eq!(err.into_text(), text);
		}
	}

	#[test]
	fn t_display() {
		// Malformed tokens carry the whole token.
		assert_eq!(
			ParseError::InvalidOption("--=".to_owned()).to_string(),
			"invalid option -- '--='",
		);
		assert_eq!(
			SpecError::DuplicateLong("help".to_owned()).to_string(),
			"Duplicate long option: --help",
		);
		assert_eq!(
			SpecError::InvalidShort(':').to_string(),
			"Invalid short option: ':'",
		);
		assert_eq!(ErrorKind::RequiresArgument.to_string(), ErrorKind::RequiresArgument.as_str());
	}
}
