/*!
# Cmdgrammar: Option Descriptors.
*/

mod grammar;
mod kind;

pub use kind::{
	ArgType,
	ARG_BOOL,
	ARG_DEFAULT,
	ARG_INT,
	ARG_NONE,
	ARG_OPTIONAL,
	ARG_STRING,
};
pub(crate) use kind::parse_bool;

use crate::SyntaxError;
use std::str::FromStr;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Option Descriptor.
///
/// This is the compiled form of one option description line. It is immutable
/// once built; use [`OptionDesc::compile`] (or [`str::parse`]) to make one.
///
/// The full syntax is:
///
/// ```text
/// [!][*][config_key]:long_name[,short_name][=type[,default]|?type,default][:help]
/// ```
///
/// where `type` is one of `int`, `bool`, or `string`.
///
/// * A leading `!` makes the option required; a leading `*` lets it repeat, collecting every value in order. The two can be combined in either order.
/// * `config_key` is the key values are written to. If empty, the long name is used instead.
/// * `=type` declares a mandatory argument, optionally with a default used when the option is absent altogether.
/// * `?type,default` declares an optional argument. The default is used when the option is given without a value, and is required.
/// * Everything after the next `:` (or `|`) is help text, kept verbatim. Use `\:`, `\|`, `\,`, or `\\` to put a literal separator in a default.
///
/// ## Examples
///
/// ```
/// use cmdgrammar::{ArgType, OptionDesc};
///
/// // The classic help switch.
/// let opt = OptionDesc::compile(":help,h:display this help and exit").unwrap();
/// assert_eq!(opt.long_name(), "help");
/// assert_eq!(opt.short_name(), Some('h'));
/// assert!(! opt.has_argument());
///
/// // A gcc-style include path, collected into a list.
/// let opt = OptionDesc::compile("*:include,I=string|include path").unwrap();
/// assert!(opt.is_multiple());
/// assert_eq!(opt.arg_type(), Some(ArgType::String));
/// assert_eq!(opt.help(), Some("include path"));
///
/// // An optional argument needs a default.
/// assert!(OptionDesc::compile(":mode?string").is_err());
/// ```
pub struct OptionDesc {
	/// # Config Key (As Written).
	key: String,

	/// # Long Name.
	long: String,

	/// # Short Name.
	short: Option<char>,

	/// # Help Text.
	help: Option<String>,

	/// # Argument Type.
	kind: Option<ArgType>,

	/// # Argument May Be Omitted.
	optional: bool,

	/// # Accumulate Values.
	multiple: bool,

	/// # Must Be Present.
	required: bool,

	/// # Default Value.
	default: Option<String>,
}

impl FromStr for OptionDesc {
	type Err = SyntaxError;

	#[inline]
	fn from_str(src: &str) -> Result<Self, Self::Err> { Self::compile(src) }
}

impl OptionDesc {
	/// # Compile.
	///
	/// Parse a description line into a descriptor. See [`OptionDesc`] for
	/// the syntax.
	///
	/// ## Errors
	///
	/// This will return a [`SyntaxError`] if the line is malformed, the long
	/// name is missing or invalid, the type is unknown, an optional argument
	/// lacks a default, or the default does not match the declared type.
	pub fn compile(line: &str) -> Result<Self, SyntaxError> {
		grammar::compile(line)
	}
}

/// ## Getters.
impl OptionDesc {
	#[must_use]
	/// # Config Key.
	///
	/// Return the key values for this option are written to. This falls back
	/// to the long name if no key was declared.
	pub fn config_key(&self) -> &str {
		if self.key.is_empty() { &self.long }
		else { &self.key }
	}

	#[must_use]
	/// # Long Name.
	pub fn long_name(&self) -> &str { &self.long }

	#[must_use]
	/// # Short Name.
	pub const fn short_name(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Help Text.
	pub fn help(&self) -> Option<&str> { self.help.as_deref() }

	#[must_use]
	/// # Argument Type.
	///
	/// Return the declared argument type, or `None` for switches.
	pub const fn arg_type(&self) -> Option<ArgType> { self.kind }

	#[must_use]
	/// # Argument Flags.
	///
	/// Return the argument details as a bitwise combination of the `ARG_*`
	/// constants.
	///
	/// ## Examples
	///
	/// ```
	/// use cmdgrammar::{OptionDesc, ARG_DEFAULT, ARG_INT, ARG_OPTIONAL};
	///
	/// let opt = OptionDesc::compile(":level?int,3").unwrap();
	/// assert_eq!(opt.argument_flags(), ARG_OPTIONAL | ARG_INT | ARG_DEFAULT);
	/// ```
	pub const fn argument_flags(&self) -> u8 {
		let mut flags = match self.kind {
			Some(kind) => kind.as_flag(),
			None => return ARG_NONE,
		};
		if self.optional { flags |= ARG_OPTIONAL; }
		if self.default.is_some() { flags |= ARG_DEFAULT; }
		flags
	}

	#[must_use]
	/// # Takes an Argument?
	pub const fn has_argument(&self) -> bool { self.kind.is_some() }

	#[must_use]
	/// # Argument Optional?
	pub const fn is_argument_optional(&self) -> bool { self.optional }

	#[must_use]
	/// # Multiple?
	pub const fn is_multiple(&self) -> bool { self.multiple }

	#[must_use]
	/// # Required?
	pub const fn is_required(&self) -> bool { self.required }

	#[must_use]
	/// # Has Default?
	pub const fn has_default_value(&self) -> bool { self.default.is_some() }

	#[must_use]
	/// # Default Value.
	pub fn default_value(&self) -> Option<&str> { self.default.as_deref() }
}

/// ## Matching.
impl OptionDesc {
	#[must_use]
	/// # Check Argument.
	///
	/// Return `true` if `value` is acceptable for this option's declared
	/// type. Switches accept nothing.
	pub fn check_argument(&self, value: &str) -> bool {
		self.kind.is_some_and(|k| k.check(value))
	}

	#[must_use]
	/// # Matches Name?
	///
	/// Return `true` if `name` (without dashes) is this option's long or
	/// short name.
	pub fn matches(&self, name: &str) -> bool {
		self.long == name ||
		self.short.is_some_and(|s| {
			let mut chars = name.chars();
			chars.next() == Some(s) && chars.next().is_none()
		})
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_config_key() {
		let opt = OptionDesc::compile(":verbose").unwrap();
		assert_eq!(opt.config_key(), "verbose");

		let opt = OptionDesc::compile("inc:include,I=string").unwrap();
		assert_eq!(opt.config_key(), "inc");
		assert_eq!(opt.long_name(), "include");
	}

	#[test]
	fn t_argument_flags() {
		for (line, flags) in [
			(":quiet", ARG_NONE),
			(":count=int", ARG_INT),
			(":count=int,5", ARG_INT | ARG_DEFAULT),
			(":debug?bool,1", ARG_BOOL | ARG_OPTIONAL | ARG_DEFAULT),
			(":name=string", ARG_STRING),
		] {
			let opt = OptionDesc::compile(line).unwrap();
			assert_eq!(opt.argument_flags(), flags, "Bug: wrong flags for {line:?}.");
			assert_eq!(opt.has_argument(), flags != ARG_NONE);
			assert_eq!(opt.is_argument_optional(), 0 != flags & ARG_OPTIONAL);
			assert_eq!(opt.has_default_value(), 0 != flags & ARG_DEFAULT);
		}
	}

	#[test]
	fn t_check_argument() {
		let opt = OptionDesc::compile(":max-count,m=int").unwrap();
		assert!(opt.check_argument("12"));
		assert!(! opt.check_argument("twelve"));

		// Switches take nothing.
		let opt = OptionDesc::compile(":recursive,r").unwrap();
		assert!(! opt.check_argument("1"));
	}

	#[test]
	fn t_matches() {
		let opt = OptionDesc::compile(":include,I=string").unwrap();
		assert!(opt.matches("include"));
		assert!(opt.matches("I"));
		assert!(! opt.matches("i"));
		assert!(! opt.matches("II"));
		assert!(! opt.matches("inc"));
		assert!(! opt.matches(""));

		let opt = OptionDesc::compile(":verbose").unwrap();
		assert!(opt.matches("verbose"));
		assert!(! opt.matches("v"));
	}

	#[test]
	fn t_from_str() {
		let a: OptionDesc = "*:include,I=string:include path".parse().unwrap();
		let b = OptionDesc::compile("*:include,I=string:include path").unwrap();
		assert_eq!(a, b);
		assert!("=unknowntype".parse::<OptionDesc>().is_err());
	}
}
