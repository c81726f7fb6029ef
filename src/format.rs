//! Help text rendering.
//!
//! Display-only code: turns the [`CommandDetails`](crate::CommandDetails) a
//! parser was built from into a fixed-width NAME/SYNOPSIS/DESCRIPTION/OPTIONS
//! document. The output sink is any [`Write`] implementation, so tests can
//! capture the emitted text in a buffer.

use std::io::{self, Write};

use crate::parser::CommandParser;

impl CommandParser {
    /// Write a help text for the command to `out`.
    ///
    /// The document contains a NAME section, a SYNOPSIS line listing each
    /// required argument in `<name>` form (plus `[options ... ]` when any
    /// optional arguments or switches exist), the word-wrapped DESCRIPTION,
    /// and an OPTIONS section describing the required arguments, the optional
    /// arguments with their defaults, and the switches.
    ///
    /// # Example
    ///
    /// ```
    /// use cmdspec::{Argument, CommandDetails, CommandParser};
    ///
    /// let parser = CommandParser::new(
    ///     CommandDetails::builder("convert")
    ///         .description("Converts an input file.")
    ///         .required_argument(Argument::new("input", "path to the input file"))
    ///         .build(),
    /// );
    /// let mut out = Vec::new();
    /// parser.display_help(&mut out)?;
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.contains("SYNOPSIS\n\tconvert <input>\n"));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn display_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let details = self.details();
        writeln!(out, "NAME")?;
        writeln!(out, "\t{}", details.name())?;
        writeln!(out)?;
        writeln!(out, "SYNOPSIS")?;
        write!(out, "\t{}", details.name())?;
        for argument in details.required_arguments() {
            write!(out, " <{}>", argument.name())?;
        }
        if !details.optional_arguments().is_empty() || !details.switches().is_empty() {
            write!(out, " [options ... ]")?;
        }
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "DESCRIPTION")?;
        write_wrapped(out, details.description(), "\t", self.display_width())?;
        writeln!(out)?;
        if !details.required_arguments().is_empty()
            || !details.optional_arguments().is_empty()
            || !details.switches().is_empty()
        {
            writeln!(out, "OPTIONS")?;
            self.display_required(out)?;
            self.display_options(out)?;
            self.display_switches(out)?;
        }
        Ok(())
    }

    fn display_required<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for argument in self.details().required_arguments() {
            writeln!(out, "\t<{}>", argument.name())?;
            write_wrapped(out, argument.description(), "\t\t", self.display_width())?;
            if argument.has_values() {
                writeln!(out, "\t\tValues:")?;
                for value in argument.values() {
                    writeln!(out, "\t\t\t'{}'", value.name())?;
                    write_wrapped(out, value.description(), "\t\t\t\t", self.display_width())?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn display_options<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for argument in self.details().optional_arguments() {
            write!(
                out,
                "\t{}{}{}<value>",
                self.optional_argument_prefix(),
                argument.name(),
                self.key_value_delimiter()
            )?;
            if !argument.has_values() {
                write!(out, " (default '{}')", argument.default_value())?;
            }
            writeln!(out)?;
            write_wrapped(out, argument.description(), "\t\t", self.display_width())?;
            if argument.has_values() {
                writeln!(out, "\t\tValues:")?;
                for value in argument.values() {
                    write!(out, "\t\t\t'{}'", value.name())?;
                    if value.name() == argument.default_value() {
                        writeln!(out, " (default)")?;
                    } else {
                        writeln!(out)?;
                    }
                    write_wrapped(out, value.description(), "\t\t\t\t", self.display_width())?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn display_switches<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for switch in self.details().switches().values() {
            write!(out, "\t")?;
            if let Some(key) = switch.key() {
                write!(out, "{}{}", self.switch_argument_prefix(), key)?;
            }
            if let Some(alias) = switch.alias() {
                if switch.key().is_some() {
                    write!(out, ", ")?;
                }
                write!(out, "{}{}", self.optional_argument_prefix(), alias)?;
            }
            writeln!(out)?;
            write_wrapped(out, switch.description(), "\t\t", self.display_width())?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Write `text` to `out`, breaking it into prefixed lines of at most `width`
/// characters.
///
/// Each break happens at the last whitespace at or before the width, or hard
/// at the width when the segment contains no whitespace; the character at the
/// break position is dropped. At least one line is always written, even for
/// empty text.
fn write_wrapped<W: Write>(out: &mut W, text: &str, prefix: &str, width: usize) -> io::Result<()> {
    let mut rest: Vec<char> = text.chars().collect();
    while rest.len() > width {
        let mut i = width;
        while i > 0 && !rest[i].is_whitespace() {
            i -= 1;
        }
        if i == 0 {
            i = width;
        }
        let line: String = rest[..i].iter().collect();
        writeln!(out, "{}{}", prefix, line)?;
        rest.drain(..i + 1);
    }
    let line: String = rest.iter().collect();
    writeln!(out, "{}{}", prefix, line)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::argument::{Argument, Definition, OptionalArgument};
    use crate::command::CommandDetails;
    use crate::switch::{SwitchArgument, SwitchMap};

    fn wrap(text: &str, prefix: &str, width: usize) -> String {
        let mut out = Vec::new();
        write_wrapped(&mut out, text, prefix, width).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render(parser: &CommandParser) -> String {
        let mut out = Vec::new();
        parser.display_help(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!("\thello\n", wrap("hello", "\t", 50));
    }

    #[test]
    fn test_wrap_empty_text_single_line() {
        assert_eq!("\t\n", wrap("", "\t", 50));
    }

    #[test]
    fn test_wrap_breaks_at_last_whitespace() {
        assert_eq!("aaa bbb\nccc ddd\n", wrap("aaa bbb ccc ddd", "", 10));
    }

    #[test]
    fn test_wrap_hard_break_drops_character() {
        // No whitespace within the width: break at the width, dropping the
        // character at the break position.
        assert_eq!("abcde\nghijk\n\n", wrap("abcdefghijkl", "", 5));
    }

    #[test]
    fn test_wrap_exact_width_passes_through() {
        assert_eq!("abcde\n", wrap("abcde", "", 5));
    }

    #[test]
    fn test_help_minimal_command() {
        let parser = CommandParser::new(
            CommandDetails::builder("tool")
                .description("A tool.")
                .build(),
        );
        assert_eq!(
            "NAME\n\ttool\n\nSYNOPSIS\n\ttool\n\nDESCRIPTION\n\tA tool.\n\n",
            render(&parser)
        );
    }

    #[test]
    fn test_help_synopsis_lists_required_and_options() {
        let parser = CommandParser::new(
            CommandDetails::builder("convert")
                .description("Converts files.")
                .required_argument(Argument::new("input", "the input file"))
                .required_argument(Argument::new("output", "the output file"))
                .optional_argument(OptionalArgument::new("format", "the output format", "html"))
                .build(),
        );
        let text = render(&parser);
        assert!(text.contains("SYNOPSIS\n\tconvert <input> <output> [options ... ]\n"));
        assert!(text.contains("OPTIONS\n"));
        assert!(text.contains("\t<input>\n\t\tthe input file\n"));
        assert!(text.contains("\t--format=<value> (default 'html')\n\t\tthe output format\n"));
    }

    #[test]
    fn test_help_switches_alone_trigger_options_marker() {
        let switches = SwitchMap::builder()
            .add_switch(
                SwitchArgument::builder("copy", "true")
                    .key('c')
                    .alias("copy")
                    .description("Turns on copying.")
                    .build()
                    .unwrap(),
            )
            .unwrap()
            .build();
        let parser = CommandParser::new(
            CommandDetails::builder("tool")
                .description("A tool.")
                .switches(switches)
                .build(),
        );
        let text = render(&parser);
        assert!(text.contains("\ttool [options ... ]\n"));
        assert!(text.contains("\t-c, --copy\n\t\tTurns on copying.\n\n"));
    }

    #[test]
    fn test_help_switch_with_alias_only() {
        let switches = SwitchMap::builder()
            .add_switch(
                SwitchArgument::builder("copy", "true")
                    .alias("copy")
                    .description("Turns on copying.")
                    .build()
                    .unwrap(),
            )
            .unwrap()
            .build();
        let parser = CommandParser::new(
            CommandDetails::builder("tool").switches(switches).build(),
        );
        let text = render(&parser);
        assert!(text.contains("\t--copy\n"));
        assert!(!text.contains("\t-c, "));
    }

    #[test]
    fn test_help_enumerated_values_mark_default() {
        let parser = CommandParser::new(
            CommandDetails::builder("convert")
                .description("Converts files.")
                .optional_argument(OptionalArgument::with_values(
                    "format",
                    "the output format",
                    "html",
                    vec![
                        Definition::new("html", "hypertext output"),
                        Definition::new("text", "plain text output"),
                    ],
                ))
                .build(),
        );
        let text = render(&parser);
        // Enumerated values replace the inline default marker.
        assert!(text.contains("\t--format=<value>\n"));
        assert!(!text.contains("(default 'html')"));
        assert!(text.contains("\t\tValues:\n"));
        assert!(text.contains("\t\t\t'html' (default)\n\t\t\t\thypertext output\n"));
        assert!(text.contains("\t\t\t'text'\n\t\t\t\tplain text output\n"));
    }

    #[test]
    fn test_help_required_argument_values() {
        let parser = CommandParser::new(
            CommandDetails::builder("tool")
                .description("A tool.")
                .required_argument(Argument::with_values(
                    "mode",
                    "processing mode",
                    vec![Definition::new("strict", "fail on the first problem")],
                ))
                .build(),
        );
        let text = render(&parser);
        assert!(text.contains("\t<mode>\n\t\tprocessing mode\n\t\tValues:\n"));
        assert!(text.contains("\t\t\t'strict'\n\t\t\t\tfail on the first problem\n\n"));
    }

    #[test]
    fn test_help_description_wrapped_to_display_width() {
        let parser = CommandParser::builder(
            CommandDetails::builder("tool")
                .description("one two three four five")
                .build(),
        )
        .display_width(10)
        .build()
        .unwrap();
        let text = render(&parser);
        assert!(text.contains("DESCRIPTION\n\tone two\n\tthree four\n\tfive\n"));
    }
}
