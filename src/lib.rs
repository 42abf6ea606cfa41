/*!
# Clustopt

This crate provides a small, lazy, `getopt`-flavored CLI argument scanner
that understands POSIX-style short-option clustering (`-abc`, `-ofile`,
`-o file`) and GNU-style long options (`--verbose`, `--output=file`).

You declare the short letters and long names your program recognizes — and
which of them require values — in an [`OptionSpec`], then loop through the
[`ParseResult`]s a [`Scanner`] hands back. Mistakes are reported in-stream as
[`ParseError`]s; it's up to you whether one is fatal.

The subsequent validation and handling are left _entirely up to you_. Loop,
match, and proceed however you see fit.



## Rules

* `-abc` is the same as `-a -b -c`, unless one of them requires a value, in which case it takes the rest of the cluster (`-ofile`) or, if it is last, the whole next token (`-o file`).
* Long options only ever take values inline: `--output=file`. `--output file` is a missing value followed by a positional argument.
* The first `--` ends option scanning; everything after it is positional, including a second `--`.
* A lone `-` is positional.
* Positional arguments are collected — wherever they appear — and returned last, all together, as a single [`ParseResult::Arguments`].



## Example

A general setup might look something like the following.

```
use clustopt::{OptionSpec, ParseResult};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    jobs: usize,
    verbose: bool,
    paths: Vec<PathBuf>,
}

let spec = OptionSpec::new()
    .with_shortopts("hvj:")
    .unwrap() // An error will only occur if a key is
              // repeated or contains invalid characters.
    .with_long_keys([
        ("help", false),   // Boolean flag.
        ("verbose", false),
        ("jobs", true),    // Expects a value.
    ])
    .unwrap();

// Loop and handle!
let mut settings = Settings::default();
for arg in spec.parse(["-vj4", "--", "-weird-file-name"]) {
    match arg {
        ParseResult::ShortOption('h', _) => {
            println!("Help Screen Goes Here.");
            return;
        },
        ParseResult::ShortOption('v', _) => { settings.verbose = true; },
        ParseResult::ShortOption('j', v) => {
            settings.jobs = v.parse().expect("Jobs must be a number!");
        },

        // Long options are named by string.
        ParseResult::LongOption(k, v) => match k.as_str() {
            "help" => {
                println!("Help Screen Goes Here.");
                return;
            },
            "verbose" => { settings.verbose = true; },
            "jobs" => { settings.jobs = v.parse().expect("Jobs must be a number!"); },
            _ => {},
        },

        // Everything else, in order.
        ParseResult::Arguments(v) => {
            settings.paths.extend(v.into_iter().map(PathBuf::from));
        },

        // Something went wrong!
        ParseResult::Error(e) => panic!("{e}"),

        // Nothing else is relevant here.
        _ => {},
    }
}

assert!(settings.verbose);
assert_eq!(settings.jobs, 4);
assert_eq!(settings.paths, [PathBuf::from("-weird-file-name")]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod result;
mod scan;
mod source;
mod spec;

pub use error::{
	ErrorKind,
	ParseError,
	SpecError,
};
pub use result::ParseResult;
pub use scan::Scanner;
pub use source::{
	EnvArgs,
	TokenSource,
};
pub use spec::OptionSpec;



/// # Parse Tokens.
///
/// Return a [`Scanner`] that lazily classifies `tokens` according to `spec`.
///
/// `tokens` can be anything implementing [`TokenSource`] — a slice, array,
/// or vector of strings, a reference to one, or an [`EnvArgs`]. The program
/// path should not be included.
///
/// ## Examples
///
/// ```
/// use clustopt::{OptionSpec, ParseError, ParseResult};
///
/// let spec = OptionSpec::new()
///     .with_shortopts("ab:").unwrap()
///     .with_long_options(["foo"]).unwrap();
///
/// let res: Vec<ParseResult> = clustopt::parse(
///     ["file", "-ab", "val", "--foo", "--", "-a"],
///     &spec,
/// ).collect();
///
/// assert_eq!(
///     res,
///     [
///         ParseResult::ShortOption('a', String::new()),
///         ParseResult::ShortOption('b', "val".to_owned()),
///         ParseResult::Error(ParseError::RequiresArgument("foo".to_owned())),
///         ParseResult::Arguments(vec!["file".to_owned(), "-a".to_owned()]),
///     ],
/// );
/// ```
pub fn parse<T: TokenSource>(tokens: T, spec: &OptionSpec) -> Scanner<'_, T> {
	Scanner::new(tokens, spec)
}

#[must_use]
/// # CLI Arguments.
///
/// Return an [`EnvArgs`] snapshot of the process arguments, with the first
/// (program path) entry split off.
pub fn args() -> EnvArgs { EnvArgs::from(std::env::args_os()) }
