#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::parse::{CommandLine, StringArray};
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Lists the invocation path followed by one section per non-empty group.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

fn groups<'c, 'a>(cli: &'c CommandLine<'a>) -> [(&'static str, &'c StringArray<'a>); 3] {
    [
        ("Arguments", &cli.args),
        ("Program options", &cli.program_options),
        ("Command options", &cli.cmd_options),
    ]
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format the command line as plain text
    pub fn format(&self, cli: &CommandLine<'_>) -> String {
        let mut output = format!("Executable: {}\n", cli.execfile);

        if cli.token_count() == 0 {
            output.push_str("No arguments\n");
            return output;
        }

        for (title, array) in groups(cli) {
            if array.is_empty() {
                continue;
            }
            output.push_str(&format!("\n{} [{}]\n", title, array.len()));
            for (index, token) in array.iter().enumerate() {
                output.push_str(&format!("  {}: {}\n", index, token));
            }
        }

        output
    }

    /// Write the formatted output to stdout with colors
    pub fn write_to_stdout(&self, cli: &CommandLine<'_>) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_to(&mut stdout, cli)
    }

    /// Write the formatted output to any color-capable writer
    pub fn write_to<W: WriteColor>(&self, out: &mut W, cli: &CommandLine<'_>) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "Executable:")?;
        out.reset()?;
        writeln!(out, " {}", cli.execfile)?;

        if cli.token_count() == 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(out, "No arguments")?;
            out.reset()?;
            return Ok(());
        }

        for (title, array) in groups(cli) {
            if array.is_empty() {
                continue;
            }
            writeln!(out)?;
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "{} [{}]", title, array.len())?;
            out.reset()?;
            writeln!(out)?;

            for (index, token) in array.iter().enumerate() {
                write!(out, "  ")?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(out, "{}:", index)?;
                out.reset()?;
                writeln!(out, " {}", token)?;
            }
        }

        Ok(())
    }
}
