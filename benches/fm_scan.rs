/*!
# Benchmark: `clustopt::Scanner`
*/

use brunch::{
	Bench,
	benches,
};
use clustopt::OptionSpec;

/// # Option Spec.
fn spec() -> OptionSpec {
	OptionSpec::new()
		.with_shortopts("kqvx:").unwrap()
		.with_long_keys([("key", true), ("quiet", false)]).unwrap()
}

const TOKENS: [&str; 9] = [
	"-k",
	"--key=val",
	"-x",
	"out",
	"-qvxout",
	"--quiet",
	"/foo/bar",
	"--",
	"/bar/baz",
];

benches!(
	Bench::new("clustopt::OptionSpec::with_shortopts(kqvx:)")
		.run(|| OptionSpec::new().with_shortopts("kqvx:")),

	Bench::spacer(),

	Bench::new("clustopt::parse(..).count()")
		.run_seeded_with(spec, |s| clustopt::parse(TOKENS, &s).count()),

	Bench::new("clustopt::parse(..).collect()")
		.run_seeded_with(spec, |s| clustopt::parse(TOKENS, &s).collect::<Vec<_>>()),
);
