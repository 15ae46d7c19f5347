/*!
# Cmdgrammar

This crate provides a small declarative command line parser, [`CommandLine`], built from compact one-line option descriptions rather than builder chains or derive macros.

Each option is described by a single line naming its config key, long and short names, argument type, multiplicity, requiredness, default, and help:

```text
[!][*][config_key]:long_name[,short_name][=type[,default]|?type,default][:help]
```

The lines are compiled into [`OptionDesc`]s up front — mistakes surface as a [`SyntaxError`] before any arguments are looked at — and then used to match the actual arguments, validate their values, and write the results into a [`ConfigSink`] like [`ConfigSet`]. Arguments that aren't options are kept aside as [`CommandLine::remaining`].

See the [`OptionDesc`] documentation for the full grammar, and [`CommandLine`] for the matching rules.



## Crate Features

| Feature | Description | Default |
| ------- | ----------- | ------- |
| `serde` | Serialize/deserialize support for [`ConfigSet`] and [`ConfigValue`]. | N |



## Example

```
use cmdgrammar::{CommandLine, ConfigSet};

let mut cli = CommandLine::new([
    ":help,h:display this help and exit",
    ":recursive,r:descend into directories",
    ":max-count,m=int:stop after NUM matches",
    "*pattern:regexp,e=string:use PATTERN for matching",
    ":color?string,auto:when to use color",
])
    .unwrap() // Errors only happen if a line doesn't compile.
    .with_banner("Usage: grep [OPTION]... PATTERNS [FILE]...");

let mut config = ConfigSet::default();
match cli.parse(["-r", "-e", "foo", "--max-count=3", "-e", "bar", "src"], &mut config) {
    Ok(()) if config.get_bool("help") == Some(true) => {
        println!("{cli}");
        return;
    },
    Ok(()) => {},
    Err(e) => {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    },
}

assert_eq!(config.get_bool("recursive"), Some(true));
assert_eq!(config.get_int("max-count"), Some(3));
assert_eq!(config.get_str("color"), Some("auto"));
assert_eq!(
    config.get_list("pattern"),
    Some(&["foo".to_owned(), "bar".to_owned()][..]),
);
assert_eq!(cli.remaining(), ["src"]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod cmdline;
mod config;
mod error;
mod option;
mod usage;

pub use cmdline::CommandLine;
pub use config::{
	ConfigSet,
	ConfigSink,
	ConfigValue,
};
pub use error::{
	CommandLineError,
	SyntaxError,
	SyntaxReason,
};
pub use option::{
	ArgType,
	OptionDesc,
	ARG_BOOL,
	ARG_DEFAULT,
	ARG_INT,
	ARG_NONE,
	ARG_OPTIONAL,
	ARG_STRING,
};
