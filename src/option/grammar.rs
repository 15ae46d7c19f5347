/*!
# Cmdgrammar: Description Grammar.
*/

use crate::{
	ArgType,
	SyntaxError,
	SyntaxReason,
};
use super::OptionDesc;



/// # Compile Description Line.
///
/// This is the workhorse behind [`OptionDesc::compile`].
pub(super) fn compile(line: &str) -> Result<OptionDesc, SyntaxError> {
	let err = |reason| SyntaxError::new(line, reason);

	// Leading modifiers, in any order.
	let mut required = false;
	let mut multiple = false;
	let mut rest = line;
	loop {
		match rest.as_bytes() {
			[b'!', ..] => { required = true; },
			[b'*', ..] => { multiple = true; },
			_ => break,
		}
		rest = &rest[1..];
	}

	// The config key runs up to the first colon, which is mandatory.
	let (key, rest) = rest.split_once(':')
		.ok_or_else(|| err(SyntaxReason::MissingSeparator))?;

	// The names run up to the argument or help, whichever comes first.
	let (names, tail) = rest.find(['=', '?', ':', '|'])
		.map_or((rest, ""), |idx| rest.split_at(idx));

	let (long, short) = match names.split_once(',') {
		Some((l, s)) => (l, Some(s)),
		None => (names, None),
	};
	if long.is_empty() { return Err(err(SyntaxReason::MissingLongName)); }
	if ! valid_long(long.as_bytes()) {
		return Err(err(SyntaxReason::InvalidLongName(long.to_owned())));
	}
	let short = match short {
		None => None,
		Some(s) => match s.as_bytes() {
			[b] if b.is_ascii_alphanumeric() => Some(char::from(*b)),
			_ => return Err(err(SyntaxReason::InvalidShortName(s.to_owned()))),
		},
	};

	let mut desc = OptionDesc {
		key: key.to_owned(),
		long: long.to_owned(),
		short,
		help: None,
		kind: None,
		optional: false,
		multiple,
		required,
		default: None,
	};

	match tail.as_bytes().first() {
		Some(b'=' | b'?') => {
			desc.optional = tail.starts_with('?');
			let (decl, help) = split_help(&tail[1..]);
			desc.help = help.map(str::to_owned);

			let (token, default) = match decl.split_once(',') {
				Some((t, d)) => (t, Some(unescape(d))),
				None => (decl, None),
			};

			// "=int?int" and friends.
			if token.contains(['=', '?']) {
				return Err(err(SyntaxReason::ConflictingArgument));
			}
			let kind = ArgType::from_token(token)
				.ok_or_else(|| err(SyntaxReason::UnknownType(token.to_owned())))?;

			match &default {
				Some(value) if ! kind.check(value) => {
					return Err(err(SyntaxReason::InvalidDefault { value: value.clone(), kind }));
				},
				None if desc.optional => return Err(err(SyntaxReason::MissingDefault)),
				_ => {},
			}

			desc.kind = Some(kind);
			desc.default = default;
		},
		Some(_) => { desc.help = Some(tail[1..].to_owned()); },
		None => {},
	}

	Ok(desc)
}



/// # Valid Long Name?
///
/// Long names must start with an ASCII alphanumeric, and may otherwise only
/// contain alphanumerics, `-`, and `_`.
const fn valid_long(mut bytes: &[u8]) -> bool {
	let [b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes else { return false; };
	bytes = rest;
	while let [b'-' | b'_' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes {
		bytes = rest;
	}

	// By process of elimination, everything validated!
	bytes.is_empty()
}

/// # Split Off Help.
///
/// Split the argument declaration from the help text at the first unescaped
/// `:` or `|`.
fn split_help(src: &str) -> (&str, Option<&str>) {
	let mut escaped = false;
	for (idx, b) in src.bytes().enumerate() {
		if escaped { escaped = false; }
		else if b == b'\\' { escaped = true; }
		else if matches!(b, b':' | b'|') {
			return (&src[..idx], Some(&src[idx + 1..]));
		}
	}

	(src, None)
}

/// # Unescape Default.
fn unescape(src: &str) -> String {
	let mut out = String::with_capacity(src.len());
	let mut chars = src.chars();
	while let Some(c) = chars.next() {
		if c == '\\' {
			// A trailing backslash is kept as-is.
			out.push(chars.next().unwrap_or('\\'));
		}
		else { out.push(c); }
	}
	out
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_compile() {
		let opt = compile("!*out:output,o=string,a.out:where to write").unwrap();
		assert_eq!(opt.config_key(), "out");
		assert_eq!(opt.long_name(), "output");
		assert_eq!(opt.short_name(), Some('o'));
		assert_eq!(opt.arg_type(), Some(ArgType::String));
		assert_eq!(opt.default_value(), Some("a.out"));
		assert_eq!(opt.help(), Some("where to write"));
		assert!(opt.is_required());
		assert!(opt.is_multiple());
		assert!(! opt.is_argument_optional());

		// Modifier order doesn't matter.
		let a = compile("*!:x=int").unwrap();
		let b = compile("!*:x=int").unwrap();
		assert_eq!(a, b);

		// Nor does compiling twice.
		assert_eq!(compile(":mode?string,fast").unwrap(), compile(":mode?string,fast").unwrap());
	}

	#[test]
	fn t_compile_plain() {
		let opt = compile(":verbose").unwrap();
		assert_eq!(opt.config_key(), "verbose");
		assert_eq!(opt.short_name(), None);
		assert_eq!(opt.help(), None);
		assert!(! opt.has_argument());
		assert!(! opt.is_required());
		assert!(! opt.is_multiple());
		assert!(! opt.has_default_value());

		let opt = compile(":recursive,r|equivalent to --directories=recurse").unwrap();
		assert_eq!(opt.short_name(), Some('r'));
		assert_eq!(opt.help(), Some("equivalent to --directories=recurse"));
		assert!(! opt.has_argument());
	}

	#[test]
	fn t_compile_optional() {
		let opt = compile(":mode?string,fast").unwrap();
		assert_eq!(opt.config_key(), "mode");
		assert!(opt.is_argument_optional());
		assert_eq!(opt.default_value(), Some("fast"));

		// Empty defaults are still defaults.
		let opt = compile(":suffix?string,").unwrap();
		assert_eq!(opt.default_value(), Some(""));

		assert_eq!(
			compile(":level?int").unwrap_err().reason(),
			&SyntaxReason::MissingDefault,
		);
		assert_eq!(
			compile(":level?int:how loud").unwrap_err().reason(),
			&SyntaxReason::MissingDefault,
		);
	}

	#[test]
	fn t_compile_help() {
		// Help is verbatim, colons and all.
		let opt = compile(":max-count,m=int:stop after NUM matches: see grep(1)").unwrap();
		assert_eq!(opt.help(), Some("stop after NUM matches: see grep(1)"));

		// Escaped separators stay in the default.
		let opt = compile(r":host=string,localhost\:8080:where to connect").unwrap();
		assert_eq!(opt.default_value(), Some("localhost:8080"));
		assert_eq!(opt.help(), Some("where to connect"));

		let opt = compile(r":sep=string,a\,b\\").unwrap();
		assert_eq!(opt.default_value(), Some(r"a,b\"));
	}

	#[test]
	fn t_compile_bad() {
		for (line, reason) in [
			("=unknowntype", SyntaxReason::MissingSeparator),
			("?int", SyntaxReason::MissingSeparator),
			("", SyntaxReason::MissingSeparator),
			("verbose", SyntaxReason::MissingSeparator),
			(":", SyntaxReason::MissingLongName),
			("key:", SyntaxReason::MissingLongName),
			(":=int", SyntaxReason::MissingLongName),
			(":,v", SyntaxReason::MissingLongName),
			(":-verbose", SyntaxReason::InvalidLongName("-verbose".to_owned())),
			(":ver bose", SyntaxReason::InvalidLongName("ver bose".to_owned())),
			(":verbose,", SyntaxReason::InvalidShortName(String::new())),
			(":verbose,vv", SyntaxReason::InvalidShortName("vv".to_owned())),
			(":verbose,-", SyntaxReason::InvalidShortName("-".to_owned())),
			(":x=unknowntype", SyntaxReason::UnknownType("unknowntype".to_owned())),
			(":x=", SyntaxReason::UnknownType(String::new())),
			(":x=float,1.5", SyntaxReason::UnknownType("float".to_owned())),
			(":x=int?int,3", SyntaxReason::ConflictingArgument),
			(":x?int=int", SyntaxReason::ConflictingArgument),
			(":x?int", SyntaxReason::MissingDefault),
			(
				":x=int,abc",
				SyntaxReason::InvalidDefault { value: "abc".to_owned(), kind: ArgType::Int },
			),
			(
				":x?bool,maybe",
				SyntaxReason::InvalidDefault { value: "maybe".to_owned(), kind: ArgType::Bool },
			),
		] {
			let e = compile(line).expect_err(line);
			assert_eq!(e.reason(), &reason, "Bug: wrong reason for {line:?}.");
			assert_eq!(e.line(), line);
		}
	}

	#[test]
	fn t_valid_long() {
		for good in ["a", "help", "max-count", "dry_run", "0day", "Z-_9"] {
			assert!(valid_long(good.as_bytes()), "Bug: {good:?} should be valid.");
		}
		for bad in ["", "-a", "_a", "a b", "a=b", "Björk", "a.b"] {
			assert!(! valid_long(bad.as_bytes()), "Bug: {bad:?} should be invalid.");
		}
	}

	#[test]
	fn t_unescape() {
		assert_eq!(unescape("plain"), "plain");
		assert_eq!(unescape(r"a\:b"), "a:b");
		assert_eq!(unescape(r"a\\b"), r"a\b");
		assert_eq!(unescape("trailing\\"), "trailing\\");
	}
}
