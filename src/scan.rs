/*!
# Clustopt: Scanner.
*/

use crate::{
	OptionSpec,
	ParseError,
	ParseResult,
	TokenSource,
};
use std::iter::FusedIterator;



#[derive(Debug, Clone)]
/// # Streaming Option Scanner.
///
/// `Scanner` walks a [`TokenSource`] once, left to right, lazily yielding a
/// [`ParseResult`] for each option it comes across. See [`parse`](crate::parse)
/// for the rules.
///
/// Positional arguments are collected along the way and yielded together —
/// last — as a single [`ParseResult::Arguments`]. If you stop iterating
/// early, you won't see them.
///
/// A `Scanner` cannot be rewound; start a new one to parse again.
pub struct Scanner<'s, T> {
	/// # Token Source.
	src: T,

	/// # Option Spec.
	spec: &'s OptionSpec,

	/// # Next Token Index.
	pos: usize,

	/// # Short Cluster in Progress.
	///
	/// The token index and byte offset of the next letter to examine.
	cluster: Option<(usize, usize)>,

	/// # Seen `--`?
	terminated: bool,

	/// # Positional Arguments.
	operands: Vec<String>,
}

impl<'s, T: TokenSource> Scanner<'s, T> {
	#[must_use]
	/// # New.
	pub const fn new(src: T, spec: &'s OptionSpec) -> Self {
		Self {
			src,
			spec,
			pos: 0,
			cluster: None,
			terminated: false,
			operands: Vec::new(),
		}
	}
}

impl<T: TokenSource> Iterator for Scanner<'_, T> {
	type Item = ParseResult;

	fn next(&mut self) -> Option<Self::Item> {
		let out = self.advance();
		if let Some(ParseResult::Error(e)) = &out {
			log::trace!("Parse error: {e}.");
		}
		out
	}
}

impl<T: TokenSource> FusedIterator for Scanner<'_, T> {}

impl<T: TokenSource> Scanner<'_, T> {
	/// # Advance.
	///
	/// Classify tokens until something is worth returning.
	fn advance(&mut self) -> Option<ParseResult> {
		loop {
			// Finish any short cluster we might be in the middle of.
			if let Some((idx, offset)) = self.cluster.take() {
				if let Some(out) = self.next_short(idx, offset) { return Some(out); }
			}

			// Pull the next token, or wrap up if there aren't any.
			let Some(token) = self.src.token_at(self.pos) else {
				if self.operands.is_empty() { return None; }
				return Some(ParseResult::Arguments(std::mem::take(&mut self.operands)));
			};
			let idx = self.pos;
			self.pos += 1;

			// Everything after the terminator is positional.
			if self.terminated { self.operands.push(token.to_owned()); }
			else if token == "--" {
				log::trace!("Token #{idx}: end of options.");
				self.terminated = true;
			}
			else if let Some(rest) = token.strip_prefix("--") {
				return Some(long(self.spec, token, rest));
			}
			// Short letters are processed one at a time, starting after the
			// dash.
			else if 1 < token.len() && token.starts_with('-') {
				self.cluster = Some((idx, 1));
			}
			else { self.operands.push(token.to_owned()); }
		}
	}

	/// # Next Short Letter.
	///
	/// Classify the letter at `offset` within token `idx`, returning `None`
	/// once the cluster is exhausted.
	fn next_short(&mut self, idx: usize, offset: usize) -> Option<ParseResult> {
		let token = self.src.token_at(idx)?;
		let key = token.get(offset..)?.chars().next()?;
		let offset = offset + key.len_utf8();

		let out: ParseResult = match self.spec.short(key) {
			// Unknown letters are reported but don't spoil the rest of the
			// cluster.
			None => {
				self.cluster = Some((idx, offset));
				ParseError::InvalidOption(key.to_string()).into()
			},
			Some(false) => {
				self.cluster = Some((idx, offset));
				ParseResult::ShortOption(key, String::new())
			},
			// Value-takers consume the rest of the cluster, or failing that,
			// the whole of the next token.
			Some(true) => match token.get(offset..) {
				Some(rest) if ! rest.is_empty() => ParseResult::ShortOption(key, rest.to_owned()),
				_ =>
					if let Some(next) = self.src.token_at(self.pos) {
						self.pos += 1;
						ParseResult::ShortOption(key, next.to_owned())
					}
					else { ParseError::RequiresArgument(key.to_string()).into() },
			},
		};

		Some(out)
	}
}



/// # Long Option.
///
/// Classify a `--name` or `--name=value` token. Values are only ever taken
/// inline.
fn long(spec: &OptionSpec, token: &str, rest: &str) -> ParseResult {
	match rest.split_once('=') {
		// A nameless assignment is just garbage.
		Some(("", _)) => ParseError::InvalidOption(token.to_owned()).into(),
		Some((key, value)) =>
			if ! spec.has_long(key) { ParseError::InvalidOption(key.to_owned()).into() }
			else if ! spec.long_takes_value(key) {
				ParseError::UnexpectedArgument(key.to_owned()).into()
			}
			else { ParseResult::LongOption(key.to_owned(), value.to_owned()) },
		None =>
			if ! spec.has_long(rest) { ParseError::InvalidOption(rest.to_owned()).into() }
			else if spec.long_takes_value(rest) {
				ParseError::RequiresArgument(rest.to_owned()).into()
			}
			else { ParseResult::LongOption(rest.to_owned(), String::new()) },
	}
}
