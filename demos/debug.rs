/*!
# Clustopt: Debug

This example parses whatever arguments are fed to it against a fixed spec
and displays the results. Set `RUST_LOG=trace` to watch the scanner work.

```bash
cargo run --example debug -- -vj4 --color=never src -- --not-an-option
```
*/

use clustopt::{
	OptionSpec,
	ParseResult,
};
use std::process::ExitCode;



fn main() -> ExitCode {
	env_logger::init();

	let spec = match OptionSpec::new()
		.with_shortopts("hvj:")
		.and_then(|s| s.with_longs(["help", "verbose"]))
		.and_then(|s| s.with_long_options(["color", "jobs"]))
	{
		Ok(spec) => spec,
		Err(e) => {
			eprintln!("\x1b[1;91mError:\x1b[0m {e}");
			return ExitCode::FAILURE;
		},
	};

	let args = clustopt::args();
	let name = args.program_name().unwrap_or("debug").to_owned();
	for arg in spec.parse(args) {
		match arg {
			ParseResult::Error(e) => {
				eprintln!("\x1b[1;91m{name}:\x1b[0m {e}");
				return ExitCode::FAILURE;
			},
			ParseResult::Arguments(_) => println!("\x1b[2m-----\x1b[0m\n{arg}"),
			_ => println!(
				"\x1b[2m-----\x1b[0m\n{arg} \x1b[2m=\x1b[0m {:?}",
				arg.value().unwrap_or_default(),
			),
		}
	}
	println!("\x1b[2m-----\x1b[0m");

	ExitCode::SUCCESS
}
