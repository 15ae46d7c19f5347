/*!
# Cmdgrammar: Command Line.

This module contains [`CommandLine`], which holds a set of compiled
[`OptionDesc`]s and matches user-supplied arguments against them.
*/

use crate::{
	ArgType,
	CommandLineError,
	ConfigSink,
	ConfigValue,
	OptionDesc,
	SyntaxError,
	SyntaxReason,
};
use std::collections::BTreeSet;



#[derive(Debug, Clone, Default)]
/// # Command Line.
///
/// `CommandLine` is built from a list of option description lines (see
/// [`OptionDesc`] for the syntax). Call [`CommandLine::parse`] to match
/// arguments against them; matched values are written to a [`ConfigSink`],
/// and everything else is kept aside as [`CommandLine::remaining`].
///
/// Matching works like so:
/// * Arguments not starting with a dash, as well as a bare `-`, are remaining arguments;
/// * Everything after a `--` separator is a remaining argument, no questions asked;
/// * `--name` and `-n` look up options by long or short name; either can carry an attached value, like `--name=val` or `-n=val`;
/// * Mandatory arguments are taken from the attached value or, failing that, the next argument (whatever it looks like);
/// * Optional arguments are only ever taken from the attached value, falling back to the default;
/// * Switches (options without arguments) are stored as `true`, and may not have attached values.
///
/// Repeatable options collect every value in order; others keep the last.
///
/// Once everything is matched, required options are checked, and options
/// that weren't given but have defaults get their defaults.
///
/// The first problem found aborts the parse with an error, leaving the sink
/// untouched.
///
/// ## Examples
///
/// ```
/// use cmdgrammar::{CommandLine, ConfigSet};
///
/// let mut cli = CommandLine::new([
///     ":verbose,v:print more stuff",
///     "!:out,o=string:the output file",
///     ":mode?string,fast:how to go about it",
/// ]).unwrap();
///
/// let mut config = ConfigSet::default();
/// cli.parse(["--out", "a.bin", "input.txt", "-v"], &mut config).unwrap();
///
/// assert_eq!(config.get_bool("verbose"), Some(true));
/// assert_eq!(config.get_str("out"), Some("a.bin"));
/// assert_eq!(config.get_str("mode"), Some("fast"));
/// assert_eq!(cli.remaining(), ["input.txt"]);
///
/// // The required --out is missing this time.
/// let mut config = ConfigSet::default();
/// assert!(cli.parse(["--mode=slow"], &mut config).is_err());
/// assert!(config.is_empty());
/// ```
pub struct CommandLine {
	/// # Options (In Declaration Order).
	options: Vec<OptionDesc>,

	/// # Remaining Arguments From the Last Parse.
	remaining: Vec<String>,

	/// # Usage Banner.
	banner: Option<String>,
}

impl<'a> TryFrom<&[&'a str]> for CommandLine {
	type Error = SyntaxError;

	#[inline]
	fn try_from(src: &[&'a str]) -> Result<Self, Self::Error> {
		Self::new(src.iter().copied())
	}
}

/// ## Instantiation and Builder Patterns.
impl CommandLine {
	/// # New.
	///
	/// Compile each of the description lines and return a new instance.
	///
	/// ## Errors
	///
	/// This will return an error if any line fails to compile, or if long or
	/// short names are reused.
	pub fn new<I, S>(lines: I) -> Result<Self, SyntaxError>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let out = Self::default().with_options(lines)?;
		tracing::debug!(options = out.options.len(), "compiled command line");
		Ok(out)
	}

	/// # With Option.
	///
	/// Compile and add a single option.
	///
	/// ## Examples
	///
	/// ```
	/// use cmdgrammar::CommandLine;
	///
	/// let cli = CommandLine::default()
	///     .with_option(":help,h").unwrap()
	///     .with_option(":version,V").unwrap();
	///
	/// // Names have to be unique.
	/// assert!(cli.with_option(":hello,h").is_err());
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the line fails to compile or reuses a
	/// long or short name.
	pub fn with_option<S: AsRef<str>>(mut self, line: S) -> Result<Self, SyntaxError> {
		let line = line.as_ref();
		let opt = OptionDesc::compile(line)?;

		if self.options.iter().any(|o| o.long_name() == opt.long_name()) {
			return Err(SyntaxError::new(
				line,
				SyntaxReason::DuplicateLongName(opt.long_name().to_owned()),
			));
		}

		if let Some(short) = opt.short_name() {
			let shorts: BTreeSet<char> = self.options.iter()
				.filter_map(OptionDesc::short_name)
				.collect();
			if shorts.contains(&short) {
				return Err(SyntaxError::new(line, SyntaxReason::DuplicateShortName(short)));
			}
		}

		self.options.push(opt);
		Ok(self)
	}

	/// # With Options.
	///
	/// Compile and add one or more options.
	///
	/// ## Errors
	///
	/// This will return an error if any line fails to compile or reuses a
	/// long or short name.
	pub fn with_options<I, S>(self, lines: I) -> Result<Self, SyntaxError>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		lines.into_iter().try_fold(self, Self::with_option)
	}

	#[must_use]
	/// # With Banner.
	///
	/// Set the first line of the usage text.
	pub fn with_banner<S: Into<String>>(mut self, banner: S) -> Self {
		self.set_banner(banner);
		self
	}

	/// # Set Banner.
	///
	/// Set the first line of the usage text.
	pub fn set_banner<S: Into<String>>(&mut self, banner: S) {
		self.banner = Some(banner.into());
	}
}

/// ## Getters.
impl CommandLine {
	#[must_use]
	/// # Banner.
	pub fn banner(&self) -> Option<&str> { self.banner.as_deref() }

	#[must_use]
	/// # Options.
	///
	/// Return the compiled options in declaration order.
	pub fn options(&self) -> &[OptionDesc] { &self.options }

	#[must_use]
	/// # Find Option.
	///
	/// Return the option whose long or short name is `name` (without dashes).
	pub fn find(&self, name: &str) -> Option<&OptionDesc> {
		self.options.iter().find(|o| o.matches(name))
	}

	#[must_use]
	/// # Remaining Arguments.
	///
	/// Return the non-option arguments found by the last successful
	/// [`CommandLine::parse`], in order.
	pub fn remaining(&self) -> &[String] { &self.remaining }
}

/// ## Parsing.
impl CommandLine {
	/// # Parse.
	///
	/// Match `args` — sans program name — against the options, writing the
	/// values to `config` and keeping the rest as remaining arguments.
	///
	/// ## Errors
	///
	/// This will return an error for the first unknown option, missing or
	/// invalid argument, unexpected switch value, or missing required option
	/// encountered. Nothing is written to `config` in that case.
	pub fn parse<I, S, C>(&mut self, args: I, config: &mut C)
	-> Result<(), CommandLineError>
	where
		I: IntoIterator<Item=S>,
		S: Into<String>,
		C: ConfigSink + ?Sized,
	{
		self.remaining.clear();

		let mut staged: Vec<(usize, Staged)> = Vec::new();
		// Keys given explicitly; shared keys count once.
		let mut seen: BTreeSet<&str> = BTreeSet::new();
		let mut remaining = Vec::new();

		let mut args = args.into_iter().map(Into::into);
		while let Some(arg) = args.next() {
			// Everything after a separator is passed through as-is.
			if arg == "--" {
				remaining.extend(args.by_ref());
				break;
			}

			let Some(name) = option_name(&arg) else {
				remaining.push(arg);
				continue;
			};
			let (name, attached) = match name.split_once('=') {
				Some((n, v)) => (n, Some(v)),
				None => (name, None),
			};

			let idx = self.options.iter()
				.position(|o| o.matches(name))
				.ok_or_else(|| CommandLineError::UnknownOption(name.to_owned()))?;
			let opt = &self.options[idx];

			let value = match (opt.has_argument(), attached) {
				(false, None) => Staged::Flag,
				(false, Some(v)) => return Err(CommandLineError::UnexpectedArgument {
					option: opt.long_name().to_owned(),
					value: v.to_owned(),
				}),
				(true, Some(v)) => checked(opt, v.to_owned())?,
				(true, None) if opt.is_argument_optional() =>
					Staged::Value(opt.default_value().unwrap_or_default().to_owned()),
				(true, None) => {
					let v = args.next().ok_or_else(||
						CommandLineError::MissingArgument(opt.long_name().to_owned())
					)?;
					checked(opt, v)?
				},
			};

			tracing::trace!(option = opt.long_name(), value = ?value, "matched option");
			seen.insert(opt.config_key());
			staged.push((idx, value));
		}

		// Required options need to have been given, unless they have a
		// fallback.
		if let Some(opt) = self.options.iter().find(|o|
			o.is_required() &&
			! o.has_default_value() &&
			! seen.contains(o.config_key())
		) {
			return Err(CommandLineError::MissingRequired(opt.long_name().to_owned()));
		}

		// Untouched keys with a default get one; the first declared wins.
		for (idx, opt) in self.options.iter().enumerate() {
			if let Some(v) = opt.default_value() {
				if seen.insert(opt.config_key()) {
					staged.push((idx, Staged::Value(v.to_owned())));
				}
			}
		}

		tracing::debug!(
			values = staged.len(),
			remaining = remaining.len(),
			"parsed command line",
		);

		// Commit!
		for (idx, value) in staged {
			let opt = &self.options[idx];
			let key = opt.config_key();
			match (opt.is_multiple(), value) {
				(true, Staged::Flag) => config.append(key, true.to_string()),
				(true, Staged::Value(v)) => config.append(key, v),
				(false, Staged::Flag) => config.set(key, ConfigValue::Bool(true)),
				(false, Staged::Value(v)) => config.set(key, ConfigValue::String(v)),
			}
		}

		self.remaining = remaining;
		Ok(())
	}

	/// # Parse Environment.
	///
	/// Same as [`CommandLine::parse`], but pulls the arguments from
	/// [`std::env::args_os`], skipping the first (program path) entry.
	///
	/// ## Errors
	///
	/// In addition to the usual parse errors, this will return an error if
	/// any argument is not valid UTF-8.
	pub fn parse_env<C>(&mut self, config: &mut C) -> Result<(), CommandLineError>
	where C: ConfigSink + ?Sized {
		let args = std::env::args_os()
			.skip(1)
			.map(|a| a.into_string().map_err(CommandLineError::InvalidUtf8))
			.collect::<Result<Vec<String>, _>>()?;
		self.parse(args, config)
	}
}



#[derive(Debug)]
/// # Staged Value.
///
/// Values are held back until the whole command line checks out.
enum Staged {
	/// # Switch.
	Flag,

	/// # Argument.
	Value(String),
}



/// # Option Name.
///
/// Strip the leading dash(es) from an option-looking argument. A bare `-` is
/// not an option.
fn option_name(arg: &str) -> Option<&str> {
	let name = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
	if name.is_empty() { None }
	else { Some(name) }
}

/// # Check Argument.
fn checked(opt: &OptionDesc, value: String) -> Result<Staged, CommandLineError> {
	if opt.check_argument(&value) { Ok(Staged::Value(value)) }
	else {
		Err(CommandLineError::InvalidArgument {
			option: opt.long_name().to_owned(),
			value,
			kind: opt.arg_type().unwrap_or(ArgType::String),
		})
	}
}
