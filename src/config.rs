/*!
# Cmdgrammar: Config Sink.
*/

use crate::option::parse_bool;
use std::collections::{
	btree_map,
	BTreeMap,
};



/// # Config Sink.
///
/// This is the destination for matched option values. [`CommandLine::parse`](crate::CommandLine::parse)
/// only ever writes to it, and only once the whole command line has checked
/// out.
///
/// [`ConfigSet`] is a ready-made in-memory implementation, but anything that
/// can store key/value pairs will do.
pub trait ConfigSink {
	/// # Set Value.
	///
	/// Store `value` under `key`, replacing whatever was there.
	fn set(&mut self, key: &str, value: ConfigValue);

	/// # Append Value.
	///
	/// Add `value` to the end of the list stored under `key`.
	fn append(&mut self, key: &str, value: String);
}



#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
/// # Config Value.
pub enum ConfigValue {
	/// # Switch.
	///
	/// Options without arguments are stored as `Bool(true)`.
	Bool(bool),

	/// # Single Value.
	String(String),

	/// # Repeated Values.
	List(Vec<String>),
}

impl ConfigValue {
	#[must_use]
	/// # Into List.
	///
	/// Convert the value into a list of strings. Scalars become a list of
	/// one; booleans are stringified.
	pub fn into_list(self) -> Vec<String> {
		match self {
			Self::Bool(b) => vec![b.to_string()],
			Self::String(s) => vec![s],
			Self::List(v) => v,
		}
	}
}

impl From<bool> for ConfigValue {
	#[inline]
	fn from(src: bool) -> Self { Self::Bool(src) }
}

impl From<String> for ConfigValue {
	#[inline]
	fn from(src: String) -> Self { Self::String(src) }
}

impl From<&str> for ConfigValue {
	#[inline]
	fn from(src: &str) -> Self { Self::String(src.to_owned()) }
}

impl From<Vec<String>> for ConfigValue {
	#[inline]
	fn from(src: Vec<String>) -> Self { Self::List(src) }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
/// # Config Set.
///
/// A simple ordered key/value store implementing [`ConfigSink`].
///
/// ## Examples
///
/// ```
/// use cmdgrammar::{CommandLine, ConfigSet};
///
/// let mut cli = CommandLine::new([
///     ":verbose,v",
///     "*:include,I=string",
///     ":jobs,j=int,1",
/// ]).unwrap();
///
/// let mut config = ConfigSet::default();
/// cli.parse(["-v", "-I", "/a", "-I=/b", "main.c"], &mut config).unwrap();
///
/// assert_eq!(config.get_bool("verbose"), Some(true));
/// assert_eq!(config.get_int("jobs"), Some(1));
/// assert_eq!(
///     config.get_list("include"),
///     Some(&["/a".to_owned(), "/b".to_owned()][..]),
/// );
/// assert_eq!(cli.remaining(), ["main.c"]);
/// ```
pub struct ConfigSet(BTreeMap<String, ConfigValue>);

impl ConfigSink for ConfigSet {
	fn set(&mut self, key: &str, value: ConfigValue) {
		self.0.insert(key.to_owned(), value);
	}

	fn append(&mut self, key: &str, value: String) {
		let slot = self.0.entry(key.to_owned())
			.or_insert_with(|| ConfigValue::List(Vec::new()));

		// Scalars are promoted to lists.
		let mut list = std::mem::replace(slot, ConfigValue::Bool(false)).into_list();
		list.push(value);
		*slot = ConfigValue::List(list);
	}
}

impl<'a> IntoIterator for &'a ConfigSet {
	type Item = (&'a String, &'a ConfigValue);
	type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl ConfigSet {
	#[must_use]
	/// # Get Value.
	pub fn get(&self, key: &str) -> Option<&ConfigValue> { self.0.get(key) }

	#[must_use]
	/// # Get String.
	///
	/// Return the value under `key` if it is a single string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		match self.0.get(key)? {
			ConfigValue::String(s) => Some(s),
			_ => None,
		}
	}

	#[must_use]
	/// # Get Boolean.
	///
	/// Return the value under `key` as a boolean. Strings are accepted if
	/// they are `0`, `1`, `true`, or `false` (in any case).
	pub fn get_bool(&self, key: &str) -> Option<bool> {
		match self.0.get(key)? {
			ConfigValue::Bool(b) => Some(*b),
			ConfigValue::String(s) => parse_bool(s),
			ConfigValue::List(_) => None,
		}
	}

	#[must_use]
	/// # Get Integer.
	///
	/// Return the value under `key` parsed as an `i64`.
	pub fn get_int(&self, key: &str) -> Option<i64> {
		self.get_str(key)?.parse().ok()
	}

	#[must_use]
	/// # Get List.
	///
	/// Return the values collected under `key` by a repeatable option.
	pub fn get_list(&self, key: &str) -> Option<&[String]> {
		match self.0.get(key)? {
			ConfigValue::List(v) => Some(v.as_slice()),
			_ => None,
		}
	}

	#[must_use]
	/// # Contains Key?
	pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Iterate.
	///
	/// Iterate over the key/value pairs in key order.
	pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> { self.0.iter() }
}
