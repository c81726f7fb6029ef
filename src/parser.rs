use crate::command::CommandDetails;
use crate::error::ConfigError;
use crate::result::{ParserResult, REQUIRED_PREFIX};

const DEFAULT_DELIMITER: &str = "=";
const DEFAULT_OPTIONAL_ARGUMENT_PREFIX: &str = "--";
const DEFAULT_SWITCH_ARGUMENT_PREFIX: &str = "-";
const DEFAULT_DISPLAY_WIDTH: usize = 50;

/// The command line parser.
///
/// A `CommandParser` is built from a [`CommandDetails`] describing the
/// command and a handful of syntax settings (key/value delimiter, optional
/// argument prefix, switch prefix, display width for help text). It is
/// immutable once built and may be reused across any number of
/// [`parse`](Self::parse) calls, including concurrently from multiple
/// threads.
///
/// # Examples
///
/// With the default syntax:
///
/// ```
/// use cmdspec::{CommandDetails, CommandParser};
///
/// let parser = CommandParser::new(CommandDetails::builder("tool").build());
/// let result = parser.parse(&["input.txt", "--format=text"]);
/// assert_eq!(["input.txt"], result.required());
/// ```
///
/// With a customized syntax:
///
/// ```
/// use cmdspec::{CommandDetails, CommandParser};
///
/// let parser = CommandParser::builder(CommandDetails::builder("tool").build())
///     .key_value_delimiter(":")
///     .optional_argument_prefix("/")
///     .build()?;
/// let result = parser.parse(&["/format:text"]);
/// assert_eq!(Some("text"), result.optional().get("format").map(String::as_str));
/// # Ok::<(), cmdspec::ConfigError>(())
/// ```
pub struct CommandParser {
    details: CommandDetails,
    delimiter: String,
    optional_argument_prefix: String,
    switch_argument_prefix: String,
    display_width: usize,
}

/// A builder struct for [`CommandParser`].
pub struct ParserBuilder {
    details: CommandDetails,
    delimiter: String,
    optional_argument_prefix: String,
    switch_argument_prefix: String,
    display_width: usize,
}

impl ParserBuilder {
    /// Set the delimiter between key and value in an optional argument.
    pub fn key_value_delimiter(mut self, value: &str) -> Self {
        self.delimiter = value.to_owned();
        self
    }

    /// Set the prefix marking optional arguments and long switch aliases.
    pub fn optional_argument_prefix(mut self, value: &str) -> Self {
        self.optional_argument_prefix = value.to_owned();
        self
    }

    /// Set the prefix marking single-character switches.
    pub fn switch_argument_prefix(mut self, value: &str) -> Self {
        self.switch_argument_prefix = value.to_owned();
        self
    }

    /// Set the width of the help text.
    pub fn display_width(mut self, value: usize) -> Self {
        self.display_width = value;
        self
    }

    /// Build the parser.
    ///
    /// # Error
    ///
    /// Returns [`ConfigError::ReservedPrefix`] if the optional argument
    /// prefix was set to [`REQUIRED_PREFIX`].
    pub fn build(self) -> Result<CommandParser, ConfigError> {
        if self.optional_argument_prefix == REQUIRED_PREFIX {
            return Err(ConfigError::ReservedPrefix(self.optional_argument_prefix));
        }
        Ok(CommandParser {
            details: self.details,
            delimiter: self.delimiter,
            optional_argument_prefix: self.optional_argument_prefix,
            switch_argument_prefix: self.switch_argument_prefix,
            display_width: self.display_width,
        })
    }
}

impl CommandParser {
    /// Create a [`ParserBuilder`] to config the parser.
    pub fn builder(details: CommandDetails) -> ParserBuilder {
        ParserBuilder {
            details,
            delimiter: DEFAULT_DELIMITER.to_string(),
            optional_argument_prefix: DEFAULT_OPTIONAL_ARGUMENT_PREFIX.to_string(),
            switch_argument_prefix: DEFAULT_SWITCH_ARGUMENT_PREFIX.to_string(),
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }

    /// Create a parser with the default settings.
    pub fn new(details: CommandDetails) -> CommandParser {
        CommandParser {
            details,
            delimiter: DEFAULT_DELIMITER.to_string(),
            optional_argument_prefix: DEFAULT_OPTIONAL_ARGUMENT_PREFIX.to_string(),
            switch_argument_prefix: DEFAULT_SWITCH_ARGUMENT_PREFIX.to_string(),
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }

    /// Get the key/value delimiter.
    pub fn key_value_delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Get the optional argument prefix.
    pub fn optional_argument_prefix(&self) -> &str {
        &self.optional_argument_prefix
    }

    /// Get the switch argument prefix.
    pub fn switch_argument_prefix(&self) -> &str {
        &self.switch_argument_prefix
    }

    /// Get the width of the help text.
    pub fn display_width(&self) -> usize {
        self.display_width
    }

    pub(crate) fn details(&self) -> &CommandDetails {
        &self.details
    }

    /// Parse the supplied tokens with this parser.
    ///
    /// Each token is trimmed of surrounding whitespace and classified as an
    /// optional argument, a switch, or a required value. Tokens that look
    /// like an optional argument or switch but match nothing known degrade
    /// to required values rather than failing; inspecting the result for
    /// unexpected values is up to the caller.
    pub fn parse<T: AsRef<str>>(&self, args: &[T]) -> ParserResult {
        let switches = self.details.switches();
        let mut result = ParserResult::default();
        for arg in args {
            let s = arg.as_ref().trim();
            if let Some(rest) = s.strip_prefix(&self.optional_argument_prefix) {
                // Split on the first delimiter only; the value keeps any
                // further occurrences verbatim.
                if let Some((key, value)) = rest.split_once(&self.delimiter) {
                    result.add_optional(key, value);
                } else if let Some(sw) = switches.get(rest) {
                    result.add_optional(sw.name(), sw.value());
                } else {
                    result.add_required(s);
                }
            } else if self.is_switch_shaped(s) {
                let key = &s[self.switch_argument_prefix.len()..];
                if let Some(sw) = switches.get(key) {
                    result.add_optional(sw.name(), sw.value());
                } else {
                    result.add_required(s);
                }
            } else {
                result.add_required(s);
            }
        }
        result
    }

    // A switch token is the switch prefix followed by exactly one character.
    fn is_switch_shaped(&self, s: &str) -> bool {
        match s.strip_prefix(&self.switch_argument_prefix) {
            Some(rest) => {
                let mut chars = rest.chars();
                chars.next().is_some() && chars.next().is_none()
            }
            None => false,
        }
    }
}
