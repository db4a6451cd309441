#![forbid(unsafe_code)]

//! Top-level flow of the `argscope` binary
//!
//! Classify the argument vector, interpret the program options, then print
//! the classification. Exit codes follow [`Outcome`]: 0 ok, 1 user error,
//! 2 fatal error.

use super::args::{ProgramOptions, clap_message};
use crate::config::{ColorOption, Config, OutputFormat};
use crate::diagnostic::{Reporter, Symbols};
use crate::output::{HumanFormatter, JsonFormatter};
use crate::parse::{CommandLine, Outcome, Parser};
use crate::style::Styles;
use clap::error::ErrorKind;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use termcolor::ColorChoice;

/// Run the binary against `argv` (invocation path first)
pub fn run<S: AsRef<str>>(argv: &[S]) -> ExitCode {
    let config = match Config::discover() {
        Ok(config) => config,
        Err(e) => {
            let mut reporter =
                Reporter::stderr(Styles::for_stderr(ColorChoice::Auto), Symbols::default());
            let _ = reporter.error("Config error", &e.to_string());
            return Outcome::Fatal.into();
        }
    };

    let mut reporter = Reporter::stderr(
        Styles::for_stderr(config.output.color.into()),
        config.output.symbols(),
    );

    let parser = Parser::new(config.parse);
    let cli = match parser.parse(argv) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = reporter.parse_error(&e);
            return e.outcome().into();
        }
    };

    let options = match ProgramOptions::from_command_line(&cli) {
        Ok(options) => options,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = reporter.error("Option error", &clap_message(&e));
            return Outcome::User.into();
        }
    };

    let color = options.color.unwrap_or(config.output.color);
    reporter.set_styles(Styles::for_stderr(color.into()));

    let format = options.format.unwrap_or(config.output.format);
    if let Err(e) = print_command_line(&cli, format, color) {
        let _ = reporter.error("Output error", &e.to_string());
        return Outcome::Fatal.into();
    }

    if options.verbose {
        let _ = reporter.info("Classified", &summary(&cli));
    }

    Outcome::Ok.into()
}

fn print_command_line(
    cli: &CommandLine<'_>,
    format: OutputFormat,
    color: ColorOption,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            let choice = match color {
                ColorOption::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
                other => other.into(),
            };
            HumanFormatter::new(choice).write_to_stdout(cli)
        }
        OutputFormat::Json => {
            let line = JsonFormatter::new().format(cli)?;
            io::stdout().write_all(line.as_bytes())
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// One-line count of each group, e.g. "2 arguments, 0 program options, 1 command option"
pub fn summary(cli: &CommandLine<'_>) -> String {
    format!(
        "{}, {}, {}",
        plural(cli.args.len(), "argument"),
        plural(cli.program_options.len(), "program option"),
        plural(cli.cmd_options.len(), "command option")
    )
}
