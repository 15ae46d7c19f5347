/*!
# Cmdgrammar: Debug

This example parses any arguments fed to it against a gcc-ish option set and
displays the results.

Try something like:
cargo run --example debug -- -I /a -I=/b -O=2 main.c -- -v
*/

use cmdgrammar::{
	CommandLine,
	ConfigSet,
};



fn main() {
	let cli = CommandLine::new([
		":help,h:display this help and exit",
		":verbose,v:print the commands executed",
		"*:include,I=string:add a directory to the include path",
		"*:define,D=string:predefine a macro",
		"opt:optimize,O?int,1:optimization level",
		"!:output,o=string,a.out:place the output into FILE",
	]);

	let mut cli = match cli {
		Ok(cli) => cli.with_banner("Usage: debug [OPTION]... FILE..."),
		Err(e) => {
			println!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	};

	let mut config = ConfigSet::default();
	if let Err(e) = cli.parse_env(&mut config) {
		println!("\x1b[1;91mError:\x1b[0m {e}\n");
		println!("{cli}");
		std::process::exit(e.exit_code());
	}

	if config.get_bool("help") == Some(true) {
		println!("{cli}");
		return;
	}

	println!("\x1b[2mConfig:\x1b[0m");
	for (k, v) in &config {
		println!("  {k}: {v:?}");
	}

	println!("\x1b[2mRemaining:\x1b[0m");
	if cli.remaining().is_empty() {
		println!("  \x1b[91mNo Arguments Passed\x1b[0m");
	}
	for v in cli.remaining() {
		println!("  {v:?}");
	}
}
