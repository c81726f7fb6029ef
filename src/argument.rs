//! Descriptors for the values a command accepts.

/// A named value with a description.
///
/// Used to enumerate the acceptable values of an [`Argument`] or an
/// [`OptionalArgument`] in the rendered help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    name: String,
    description: String,
}

impl Definition {
    /// Create a new `Definition`.
    pub fn new(name: &str, description: &str) -> Definition {
        Definition {
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }

    /// Get the name of the value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description of the value.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A required positional argument.
///
/// Required arguments are identified by their position in the parsed result,
/// not by a flag.
///
/// # Examples
///
/// ```
/// use cmdspec::{Argument, Definition};
///
/// let input = Argument::new("input", "path to the input file");
/// let mode = Argument::with_values("mode", "processing mode", vec![
///     Definition::new("strict", "fail on the first problem"),
///     Definition::new("lenient", "keep going and report at the end"),
/// ]);
/// assert!(!input.has_values());
/// assert!(mode.has_values());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    description: String,
    values: Vec<Definition>,
}

impl Argument {
    /// Create an argument accepting any value.
    pub fn new(name: &str, description: &str) -> Argument {
        Argument {
            name: name.to_owned(),
            description: description.to_owned(),
            values: Vec::new(),
        }
    }

    /// Create an argument with an enumerated set of acceptable values.
    pub fn with_values(name: &str, description: &str, values: Vec<Definition>) -> Argument {
        Argument {
            name: name.to_owned(),
            description: description.to_owned(),
            values,
        }
    }

    /// Get the name of the argument.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description of the argument.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check if the argument has an enumerated set of acceptable values.
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// Get the acceptable values, in the order they were supplied.
    pub fn values(&self) -> &[Definition] {
        &self.values
    }
}

/// An optional `key=value` style argument with a default.
///
/// Whether the default is a member of the enumerated values is the caller's
/// responsibility; it is not enforced.
///
/// # Example
///
/// ```
/// use cmdspec::OptionalArgument;
///
/// let format = OptionalArgument::new("format", "the output format", "html");
/// assert_eq!("html", format.default_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalArgument {
    name: String,
    description: String,
    default_value: String,
    values: Vec<Definition>,
}

impl OptionalArgument {
    /// Create an optional argument accepting any value.
    pub fn new(name: &str, description: &str, default_value: &str) -> OptionalArgument {
        OptionalArgument {
            name: name.to_owned(),
            description: description.to_owned(),
            default_value: default_value.to_owned(),
            values: Vec::new(),
        }
    }

    /// Create an optional argument with an enumerated set of acceptable values.
    pub fn with_values(
        name: &str,
        description: &str,
        default_value: &str,
        values: Vec<Definition>,
    ) -> OptionalArgument {
        OptionalArgument {
            name: name.to_owned(),
            description: description.to_owned(),
            default_value: default_value.to_owned(),
            values,
        }
    }

    /// Get the name of the argument, as written before the delimiter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description of the argument.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the value used when the argument is not supplied.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Check if the argument has an enumerated set of acceptable values.
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// Get the acceptable values, in the order they were supplied.
    pub fn values(&self) -> &[Definition] {
        &self.values
    }
}
