/*!
# Clustopt: Token Sources.

The [`Scanner`](crate::Scanner) doesn't care where its tokens come from so
long as they can be counted and fetched by index. This module provides that
seam, along with an implementation backed by the real process arguments.
*/

use std::{
	ffi::OsString,
	path::Path,
};



/// # Token Source.
///
/// Indexes are zero-based, and the program path is _not_ included; index
/// zero is the first real argument.
///
/// This is implemented for slices, arrays, and vectors of anything
/// string-like, so tests can inject whatever they want:
///
/// ```
/// use clustopt::TokenSource;
///
/// let tokens = ["-v", "file.txt"];
/// assert_eq!(tokens.token_count(), 2);
/// assert_eq!(tokens.token_at(1), Some("file.txt"));
/// assert_eq!(tokens.token_at(2), None);
/// ```
pub trait TokenSource {
	/// # Number of Tokens.
	fn token_count(&self) -> usize;

	/// # Token at Index.
	fn token_at(&self, idx: usize) -> Option<&str>;
}

impl<S: AsRef<str>> TokenSource for [S] {
	#[inline]
	fn token_count(&self) -> usize { self.len() }

	#[inline]
	fn token_at(&self, idx: usize) -> Option<&str> { self.get(idx).map(AsRef::as_ref) }
}

impl<S: AsRef<str>, const N: usize> TokenSource for [S; N] {
	#[inline]
	fn token_count(&self) -> usize { N }

	#[inline]
	fn token_at(&self, idx: usize) -> Option<&str> { self.get(idx).map(AsRef::as_ref) }
}

impl<S: AsRef<str>> TokenSource for Vec<S> {
	#[inline]
	fn token_count(&self) -> usize { self.len() }

	#[inline]
	fn token_at(&self, idx: usize) -> Option<&str> { self.get(idx).map(AsRef::as_ref) }
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
	#[inline]
	fn token_count(&self) -> usize { (**self).token_count() }

	#[inline]
	fn token_at(&self, idx: usize) -> Option<&str> { (**self).token_at(idx) }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Environment Arguments.
///
/// This is a snapshot of [`std::env::args_os`], with the first (program path)
/// entry split off from the rest.
///
/// Arguments that aren't valid UTF-8 are converted lossily (with a warning
/// sent to the [`log`] facade).
///
/// Most of the time you'll just want [`args`](crate::args) or
/// [`OptionSpec::parse_env`](crate::OptionSpec::parse_env).
pub struct EnvArgs {
	/// # Program Path.
	program: Option<String>,

	/// # Everything Else.
	args: Vec<String>,
}

impl<I: IntoIterator<Item=OsString>> From<I> for EnvArgs {
	/// # From Raw.
	///
	/// The first entry is assumed to be the program path.
	fn from(src: I) -> Self {
		let mut iter = src.into_iter().map(stringify);
		let program = iter.next();
		Self {
			program,
			args: iter.collect(),
		}
	}
}

impl TokenSource for EnvArgs {
	#[inline]
	fn token_count(&self) -> usize { self.args.len() }

	#[inline]
	fn token_at(&self, idx: usize) -> Option<&str> { self.args.get(idx).map(String::as_str) }
}

impl EnvArgs {
	#[must_use]
	/// # Program Path.
	///
	/// Return the program path exactly as it was invoked, if the OS provided
	/// one.
	pub fn program(&self) -> Option<&str> { self.program.as_deref() }

	#[must_use]
	/// # Program Name.
	///
	/// Return the file name portion of the program path, e.g. `ls` for
	/// `/usr/bin/ls`.
	///
	/// ## Examples
	///
	/// ```
	/// use clustopt::EnvArgs;
	/// use std::ffi::OsString;
	///
	/// let args = EnvArgs::from([
	///     OsString::from("/usr/bin/ls"),
	///     OsString::from("-la"),
	/// ]);
	/// assert_eq!(args.program_name(), Some("ls"));
	/// ```
	pub fn program_name(&self) -> Option<&str> {
		let program = self.program.as_deref()?;
		Path::new(program).file_name()
			.and_then(|n| n.to_str())
			.or(Some(program))
	}

	#[must_use]
	/// # Arguments.
	pub fn as_slice(&self) -> &[String] { &self.args }
}



/// # Stringify.
///
/// Convert to a `String`, replacing any invalid UTF-8 sequences.
fn stringify(raw: OsString) -> String {
	raw.into_string().unwrap_or_else(|raw| {
		let out = raw.to_string_lossy().into_owned();
		log::warn!("Argument {out:?} contains invalid UTF-8.");
		out
	})
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_slices() {
		let arr = ["-a", "--", "b"];
		let vec: Vec<String> = arr.iter().map(|s| (*s).to_owned()).collect();
		let slice: &[&str] = &arr[..];

		for src in [&arr as &dyn TokenSource, &vec, &slice] {
			assert_eq!(src.token_count(), 3);
			assert_eq!(src.token_at(0), Some("-a"));
			assert_eq!(src.token_at(1), Some("--"));
			assert_eq!(src.token_at(2), Some("b"));
			assert_eq!(src.token_at(3), None);
		}
	}

	#[test]
	fn t_env_args() {
		let args = EnvArgs::from([
			OsString::from("./target/debug/demo"),
			OsString::from("-v"),
			OsString::from("--out=file"),
		]);
		assert_eq!(args.program(), Some("./target/debug/demo"));
		assert_eq!(args.program_name(), Some("demo"));
		assert_eq!(args.token_count(), 2);
		assert_eq!(args.token_at(0), Some("-v"));
		assert_eq!(args.token_at(1), Some("--out=file"));
		assert_eq!(args.as_slice(), ["-v", "--out=file"]);

		// Nothing at all.
		let args = EnvArgs::from(Vec::<OsString>::new());
		assert_eq!(args.program(), None);
		assert_eq!(args.program_name(), None);
		assert_eq!(args.token_count(), 0);
	}

	#[cfg(unix)]
	#[test]
	fn t_env_args_lossy() {
		use std::os::unix::ffi::OsStringExt;

		let args = EnvArgs::from([
			OsString::from("demo"),
			OsString::from_vec(vec![b'-', b'x', 0xFF]),
		]);
		assert_eq!(args.token_at(0), Some("-x\u{FFFD}"));
	}
}
