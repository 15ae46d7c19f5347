/*!
# Cmdgrammar: Usage.
*/

use crate::{
	CommandLine,
	OptionDesc,
};
use std::{
	fmt,
	io,
};



impl fmt::Display for CommandLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(banner) = self.banner() { writeln!(f, "{banner}")?; }

		let lines: Vec<(String, String)> = self.options().iter()
			.map(|o| (names(o), details(o)))
			.collect();
		let width = lines.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

		for (left, right) in lines {
			if right.is_empty() { writeln!(f, "  {left}")?; }
			else { writeln!(f, "  {left:<width$}  {right}")?; }
		}

		Ok(())
	}
}

impl CommandLine {
	/// # Print Usage.
	///
	/// Write the banner, if any, followed by one line per option (in
	/// declaration order) to `out`.
	///
	/// The same text is available via [`Display`](fmt::Display).
	///
	/// ## Examples
	///
	/// ```
	/// use cmdgrammar::CommandLine;
	///
	/// let cli = CommandLine::new([
	///     ":help,h:display this help and exit",
	///     ":max-count,m=int:stop after NUM matches",
	/// ])
	///     .unwrap()
	///     .with_banner("Usage: grep [OPTION]... PATTERNS [FILE]...");
	///
	/// let mut out = Vec::new();
	/// cli.usage(&mut out).unwrap();
	/// assert_eq!(
	///     String::from_utf8(out).unwrap(),
	///     "Usage: grep [OPTION]... PATTERNS [FILE]...\n\
	///      \x20 -h, --help             display this help and exit\n\
	///      \x20 -m, --max-count=<int>  stop after NUM matches\n",
	/// );
	/// ```
	///
	/// ## Errors
	///
	/// This will bubble up any write errors.
	pub fn usage<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
		write!(out, "{self}")
	}
}



/// # Names Column.
///
/// Short and long names along with an argument placeholder, like
/// `-I, --include=<string>...`.
fn names(opt: &OptionDesc) -> String {
	let mut out = opt.short_name().map_or_else(
		|| String::from("    "),
		|s| format!("-{s}, "),
	);
	out.push_str("--");
	out.push_str(opt.long_name());

	if let Some(kind) = opt.arg_type() {
		if opt.is_argument_optional() {
			out.push_str("[=<");
			out.push_str(kind.as_str());
			out.push_str(">]");
		}
		else {
			out.push_str("=<");
			out.push_str(kind.as_str());
			out.push('>');
		}
	}

	if opt.is_multiple() { out.push_str("..."); }
	out
}

/// # Details Column.
///
/// The help text, along with the default value and whether or not the option
/// is required.
fn details(opt: &OptionDesc) -> String {
	let mut out = opt.help().unwrap_or_default().to_owned();
	let mut push = |s: &str| {
		if ! out.is_empty() { out.push(' '); }
		out.push_str(s);
	};

	if let Some(v) = opt.default_value() { push(&format!("(default: {v})")); }
	if opt.is_required() { push("(required)"); }

	out
}
