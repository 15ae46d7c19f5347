/*!
# Cmdgrammar: Argument Types.
*/

use std::fmt;



/// # Flag: No Argument.
pub const ARG_NONE: u8 =     0b0000_0000;

/// # Flag: Argument May Be Omitted.
///
/// When set, an option given without an (attached) argument takes its
/// default value instead. Always paired with [`ARG_DEFAULT`].
pub const ARG_OPTIONAL: u8 = 0b0000_0001;

/// # Flag: Integer Argument.
pub const ARG_INT: u8 =      0b0000_0010;

/// # Flag: Boolean Argument.
///
/// Boolean arguments are `0`, `1`, `true`, or `false`, case-insensitively.
pub const ARG_BOOL: u8 =     0b0000_0100;

/// # Flag: String Argument.
pub const ARG_STRING: u8 =   0b0000_1000;

/// # Flag: Has Default.
pub const ARG_DEFAULT: u8 =  0b0001_0000;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Argument Type.
///
/// This is the declared type of an option's argument, used to validate
/// user-supplied values before they are committed.
///
/// ## Examples
///
/// ```
/// use cmdgrammar::ArgType;
///
/// assert!(ArgType::Int.check("-42"));
/// assert!(! ArgType::Int.check("42abc"));
///
/// assert!(ArgType::Bool.check("TRUE"));
/// assert!(! ArgType::Bool.check("yes"));
///
/// assert!(ArgType::String.check("anything at all"));
/// ```
pub enum ArgType {
	/// # Base-10 Signed Integer.
	Int,

	/// # Boolean.
	Bool,

	/// # Anything.
	String,
}

impl fmt::Display for ArgType {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ArgType {
	#[must_use]
	/// # From Grammar Token.
	///
	/// Match one of the type tokens accepted by the description grammar:
	/// `int`, `bool`, or `string`.
	pub fn from_token(token: &str) -> Option<Self> {
		match token {
			"int" => Some(Self::Int),
			"bool" => Some(Self::Bool),
			"string" => Some(Self::String),
			_ => None,
		}
	}

	#[must_use]
	/// # As String Slice.
	///
	/// Return the grammar token for the type.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::Bool => "bool",
			Self::String => "string",
		}
	}

	#[must_use]
	/// # As Flag.
	///
	/// Return the corresponding `ARG_*` flag.
	pub const fn as_flag(self) -> u8 {
		match self {
			Self::Int => ARG_INT,
			Self::Bool => ARG_BOOL,
			Self::String => ARG_STRING,
		}
	}

	#[must_use]
	/// # Check Value.
	///
	/// Return `true` if `value` conforms to the type.
	///
	/// Integers must parse fully as an `i64` with no extraneous characters;
	/// booleans must be one of `0`, `1`, `true`, or `false` (in any case);
	/// strings are always fine.
	pub fn check(self, value: &str) -> bool {
		match self {
			Self::Int => value.parse::<i64>().is_ok(),
			Self::Bool => parse_bool(value).is_some(),
			Self::String => true,
		}
	}
}



#[must_use]
/// # Parse Boolean.
///
/// This is shared with [`ConfigSet::get_bool`](crate::ConfigSet::get_bool)
/// so validation and retrieval agree.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
	match value.as_bytes() {
		b"1" => Some(true),
		b"0" => Some(false),
		v if v.eq_ignore_ascii_case(b"true") => Some(true),
		v if v.eq_ignore_ascii_case(b"false") => Some(false),
		_ => None,
	}
}
