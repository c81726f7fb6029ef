//! # The cmdspec Library
//!
//! The cmdspec library parses command line arguments against a declarative
//! description of a command, and renders a formatted help text from the same
//! description.
//!
//! A command is described by its name, a description, a list of required
//! (positional) arguments, a list of optional `key=value` arguments, and a
//! map of switches. Parsing classifies every token into one of three forms:
//!
//! - **Required arguments**, positional values kept in input order, for
//!   example `input.txt`
//! - **Optional arguments**, `key=value` pairs behind the optional argument
//!   prefix, for example `--format=text`
//! - **Switches**, single-character keys or long aliases that expand to a
//!   fixed key/value pair, for example `-f` or `--force`
//!
//! The parser is permissive: a token that looks like an option or switch but
//! matches nothing known is kept verbatim as a required value, and it is up
//! to the application to decide whether that is an error. All configuration
//! mistakes (duplicate switch keys, reserved prefixes) instead fail fast at
//! build time with a [`ConfigError`].
//!
//! A typical help text rendered by cmdspec looks like this:
//!
//! ```txt
//! NAME
//!     convert
//!
//! SYNOPSIS
//!     convert <input> [options ... ]
//!
//! DESCRIPTION
//!     Converts an input file to the requested
//!     output format.
//!
//! OPTIONS
//!     <input>
//!         path to the input file
//!     --format=<value> (default 'html')
//!         the output format
//!     -f, --force
//!         Overwrite the output file if it exists.
//! ```
//!
//! # Examples
//!
//! A simple example.
//!
//! ```
//! use cmdspec::{Argument, CommandDetails, CommandParser, OptionalArgument,
//!               SwitchArgument, SwitchMap};
//!
//! let details = CommandDetails::builder("convert")
//!     .description("Converts an input file to the requested output format.")
//!     .required_argument(Argument::new("input", "path to the input file"))
//!     .optional_argument(OptionalArgument::new("format", "the output format", "html"))
//!     .switches(SwitchMap::builder()
//!         .add_switch(SwitchArgument::builder("overwrite", "true")
//!             .key('f')
//!             .alias("force")
//!             .description("Overwrite the output file if it exists.")
//!             .build()?)?
//!         .build())
//!     .build();
//!
//! let parser = CommandParser::new(details);
//! let result = parser.parse(&["input.txt", "--format=text", "-f"]);
//!
//! assert_eq!(["input.txt"], result.required());
//! assert_eq!(Some("text"), result.optional().get("format").map(String::as_str));
//! assert_eq!(Some("true"), result.optional().get("overwrite").map(String::as_str));
//! # Ok::<(), cmdspec::ConfigError>(())
//! ```
//!
//! Rendering the help text for the same command, and flattening a result
//! into a single map.
//!
//! ```
//! use std::io::stdout;
//! use cmdspec::{Argument, CommandDetails, CommandParser, REQUIRED_PREFIX};
//!
//! let details = CommandDetails::builder("lines")
//!     .description("Counts the lines of the input file.")
//!     .required_argument(Argument::new("input", "path to the input file"))
//!     .build();
//! let parser = CommandParser::builder(details)
//!     .display_width(72)
//!     .build()?;
//!
//! parser.display_help(&mut stdout())?;
//!
//! let settings = parser.parse(&["notes.txt"]).to_map(REQUIRED_PREFIX);
//! assert_eq!(Some("notes.txt"), settings.get("required-0").map(String::as_str));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use argument::{Argument, Definition, OptionalArgument};
pub use command::{CommandDetails, CommandDetailsBuilder};
pub use error::{ConfigError, ExitCode};
pub use parser::{CommandParser, ParserBuilder};
pub use result::{ParserResult, REQUIRED_PREFIX};
pub use switch::{SwitchArgument, SwitchBuilder, SwitchMap, SwitchMapBuilder};

mod argument;
mod command;
mod error;
mod format;
mod parser;
mod result;
mod switch;
