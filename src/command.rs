use crate::argument::{Argument, OptionalArgument};
use crate::switch::SwitchMap;

/// A declarative description of a command's full argument surface.
///
/// The description drives both parsing and help rendering. Argument lists
/// default to empty and the switch map defaults to an empty map, so a
/// minimal command only needs a name.
///
/// # Example
///
/// ```
/// use cmdspec::{Argument, CommandDetails, OptionalArgument};
///
/// let details = CommandDetails::builder("convert")
///     .description("Converts an input file to the requested output format.")
///     .required_argument(Argument::new("input", "path to the input file"))
///     .optional_argument(OptionalArgument::new("format", "the output format", "html"))
///     .build();
/// assert_eq!("convert", details.name());
/// ```
#[derive(Debug, Clone)]
pub struct CommandDetails {
    name: String,
    description: String,
    required: Vec<Argument>,
    optional: Vec<OptionalArgument>,
    switches: SwitchMap,
}

/// A builder struct for [`CommandDetails`].
pub struct CommandDetailsBuilder {
    name: String,
    description: String,
    required: Vec<Argument>,
    optional: Vec<OptionalArgument>,
    switches: SwitchMap,
}

impl CommandDetailsBuilder {
    /// Set the description of the command.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Add a required positional argument. Order of addition is the order
    /// used in the synopsis.
    pub fn required_argument(mut self, argument: Argument) -> Self {
        self.required.push(argument);
        self
    }

    /// Add an optional `key=value` argument.
    pub fn optional_argument(mut self, argument: OptionalArgument) -> Self {
        self.optional.push(argument);
        self
    }

    /// Set the switches of the command.
    pub fn switches(mut self, switches: SwitchMap) -> Self {
        self.switches = switches;
        self
    }

    /// Build the [`CommandDetails`].
    pub fn build(self) -> CommandDetails {
        CommandDetails {
            name: self.name,
            description: self.description,
            required: self.required,
            optional: self.optional,
            switches: self.switches,
        }
    }
}

impl CommandDetails {
    /// Create a [`CommandDetailsBuilder`] for the named command.
    pub fn builder(name: &str) -> CommandDetailsBuilder {
        CommandDetailsBuilder {
            name: name.to_owned(),
            description: String::new(),
            required: Vec::new(),
            optional: Vec::new(),
            switches: SwitchMap::default(),
        }
    }

    /// Get the name of the command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description of the command.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the required arguments, in synopsis order.
    pub fn required_arguments(&self) -> &[Argument] {
        &self.required
    }

    /// Get the optional arguments.
    pub fn optional_arguments(&self) -> &[OptionalArgument] {
        &self.optional
    }

    /// Get the switches.
    pub fn switches(&self) -> &SwitchMap {
        &self.switches
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let details = CommandDetails::builder("tool").build();
        assert_eq!("tool", details.name());
        assert_eq!("", details.description());
        assert!(details.required_arguments().is_empty());
        assert!(details.optional_arguments().is_empty());
        assert!(details.switches().is_empty());
    }

    #[test]
    fn test_required_argument_order() {
        let details = CommandDetails::builder("tool")
            .required_argument(Argument::new("input", "the input"))
            .required_argument(Argument::new("output", "the output"))
            .build();
        let names: Vec<&str> = details.required_arguments().iter().map(|a| a.name()).collect();
        assert_eq!(vec!["input", "output"], names);
    }
}
