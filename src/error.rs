use std::process::exit;

use thiserror::Error;

/// Invalid parser or switch map configuration.
///
/// These errors are raised while the argument surface of a command is being
/// described, never while parsing. A misconfigured description is a
/// programming error and aborts construction immediately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The switch key is already registered, either as a key or as an alias.
    #[error("key already in use: '{0}'")]
    DuplicateKey(char),

    /// The switch alias is already registered, either as a key or as an alias.
    #[error("alias already in use: '{0}'")]
    DuplicateAlias(String),

    /// A [`SwitchArgument`](crate::SwitchArgument) was built with neither
    /// a key nor an alias.
    #[error("a switch must define a key or an alias")]
    MissingKeyAndAlias,

    /// The configured optional argument prefix collides with the prefix
    /// reserved for required arguments in
    /// [`ParserResult::to_map`](crate::ParserResult::to_map).
    #[error("prefix is reserved: '{0}'")]
    ReservedPrefix(String),
}

/// Exit codes for integrating command line applications.
///
/// The parser itself never terminates the process; it reports unrecognized
/// input by falling back to required values. Deciding that such a value is
/// fatal, and picking the matching exit code, is up to the application.
///
/// # Example
///
/// ```no_run
/// use cmdspec::ExitCode;
///
/// ExitCode::MissingArgument.exit_with_message("missing argument <input>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Normal application termination.
    Ok,
    /// General argument error.
    ArgumentError,
    /// Missing a required argument.
    MissingArgument,
    /// Argument is unknown to the application.
    UnknownArgument,
    /// Argument value is illegal.
    IllegalArgumentValue,
    /// General resource error.
    ResourceError,
    /// Failed to read a required input.
    FailedToReadResource,
    /// Failed to locate a required input.
    MissingResource,
    /// The supplied data didn't meet the expectations.
    UnexpectedResourceContents,
    /// An internal error occurred.
    InternalError,
}

impl ExitCode {
    /// Get the process termination code.
    pub fn status(self) -> i32 {
        match self {
            ExitCode::Ok => 0,
            ExitCode::ArgumentError => 10,
            ExitCode::MissingArgument => 11,
            ExitCode::UnknownArgument => 12,
            ExitCode::IllegalArgumentValue => 13,
            ExitCode::ResourceError => 20,
            ExitCode::FailedToReadResource => 21,
            ExitCode::MissingResource => 22,
            ExitCode::UnexpectedResourceContents => 23,
            ExitCode::InternalError => 50,
        }
    }

    /// Quit the application.
    pub fn exit(self) -> ! {
        exit(self.status())
    }

    /// Quit the application with the specified message.
    pub fn exit_with_message(self, message: &str) -> ! {
        println!("{}", message);
        exit(self.status())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exit_code_status() {
        assert_eq!(0, ExitCode::Ok.status());
        assert_eq!(10, ExitCode::ArgumentError.status());
        assert_eq!(11, ExitCode::MissingArgument.status());
        assert_eq!(12, ExitCode::UnknownArgument.status());
        assert_eq!(13, ExitCode::IllegalArgumentValue.status());
        assert_eq!(20, ExitCode::ResourceError.status());
        assert_eq!(21, ExitCode::FailedToReadResource.status());
        assert_eq!(22, ExitCode::MissingResource.status());
        assert_eq!(23, ExitCode::UnexpectedResourceContents.status());
        assert_eq!(50, ExitCode::InternalError.status());
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!("key already in use: 'c'", ConfigError::DuplicateKey('c').to_string());
        assert_eq!("alias already in use: 'copy'",
                   ConfigError::DuplicateAlias("copy".to_string()).to_string());
        assert_eq!("prefix is reserved: 'required-'",
                   ConfigError::ReservedPrefix("required-".to_string()).to_string());
    }
}
