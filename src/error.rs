/*!
# Cmdgrammar: Errors

There are two families of error here: [`SyntaxError`] for option description
lines that don't compile, and [`CommandLineError`] for user-supplied
arguments that don't match.

The former is a programming mistake and surfaces when the option set is
built; the latter is the user's fault and surfaces during
[`CommandLine::parse`](crate::CommandLine::parse).
*/

use crate::ArgType;
use std::ffi::OsString;
use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Invalid option description {line:?}: {reason}")]
/// # Syntax Error.
///
/// This is returned when an option description line cannot be compiled. It
/// holds a copy of the offending line along with the reason.
pub struct SyntaxError {
	/// # Source Line.
	line: String,

	/// # What Went Wrong.
	reason: SyntaxReason,
}

impl SyntaxError {
	#[must_use]
	/// # New.
	pub fn new(line: &str, reason: SyntaxReason) -> Self {
		Self { line: line.to_owned(), reason }
	}

	#[must_use]
	/// # Source Line.
	///
	/// Return the description line that failed to compile.
	pub fn line(&self) -> &str { &self.line }

	#[must_use]
	/// # Reason.
	pub const fn reason(&self) -> &SyntaxReason { &self.reason }
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Syntax Error Reasons.
pub enum SyntaxReason {
	#[error("missing ':' before the long name")]
	/// # No Long Name Separator.
	MissingSeparator,

	#[error("the long name is empty")]
	/// # Empty Long Name.
	MissingLongName,

	#[error("invalid long name: {0}")]
	/// # Bad Long Name Characters.
	InvalidLongName(String),

	#[error("invalid short name: {0}")]
	/// # Short Name Not One Alphanumeric.
	InvalidShortName(String),

	#[error("unknown argument type: {0}")]
	/// # Type Not int, bool, or string.
	UnknownType(String),

	#[error("both '=' and '?' argument forms given")]
	/// # Mandatory and Optional.
	ConflictingArgument,

	#[error("optional arguments require a default value")]
	/// # Optional Without Default.
	MissingDefault,

	#[error("default value {value:?} is not a valid {kind}")]
	/// # Default Fails Validation.
	InvalidDefault {
		/// # The Default.
		value: String,
		/// # Declared Type.
		kind: ArgType,
	},

	#[error("duplicate long name: --{0}")]
	/// # Long Name Reused.
	DuplicateLongName(String),

	#[error("duplicate short name: -{0}")]
	/// # Short Name Reused.
	DuplicateShortName(char),
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Command Line Error.
///
/// This is returned by [`CommandLine::parse`](crate::CommandLine::parse) on
/// the first problem found. Parsing does not continue after an error.
pub enum CommandLineError {
	#[error("Unknown option: {0}")]
	/// # No Such Option.
	UnknownOption(String),

	#[error("Missing argument for option --{0}.")]
	/// # Mandatory Argument Not Given.
	MissingArgument(String),

	#[error("Invalid argument for option --{option}: {value:?} is not a valid {kind}.")]
	/// # Argument Fails Validation.
	InvalidArgument {
		/// # Long Name.
		option: String,
		/// # Offending Value.
		value: String,
		/// # Declared Type.
		kind: ArgType,
	},

	#[error("Option --{option} does not take an argument (got {value:?}).")]
	/// # Value Given to a Switch.
	UnexpectedArgument {
		/// # Long Name.
		option: String,
		/// # Offending Value.
		value: String,
	},

	#[error("Missing required option --{0}.")]
	/// # Required Option Absent.
	MissingRequired(String),

	#[error("Invalid UTF-8 argument: {0:?}")]
	/// # Invalid UTF-8.
	InvalidUtf8(OsString),
}

impl CommandLineError {
	#[must_use]
	/// # Option Name.
	///
	/// Return the name of the option this error relates to, if any. For
	/// unknown options this is the name as typed, without dashes.
	pub fn option(&self) -> Option<&str> {
		match self {
			Self::UnknownOption(s)
				| Self::MissingArgument(s)
				| Self::MissingRequired(s)
				| Self::InvalidArgument { option: s, .. }
				| Self::UnexpectedArgument { option: s, .. } => Some(s),
			Self::InvalidUtf8(_) => None,
		}
	}

	#[must_use]
	/// # Exit Code.
	///
	/// All command line errors are failures; this is a convenience for
	/// binaries that want to bail with [`std::process::exit`].
	pub const fn exit_code(&self) -> i32 { 1 }
}
