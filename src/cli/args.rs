#![forbid(unsafe_code)]

//! Interpretation of the program options the classifier collected

use crate::config::{ColorOption, OutputFormat};
use crate::parse::CommandLine;
use clap::Parser;

/// Options recognised before the `--` separator
///
/// Values must be attached with `=` (`--color=never`): the classifier treats
/// a detached value as a positional argument.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "argscope", version, about)]
#[command(
    after_help = "Tokens are split into positional arguments, program options \
(before `--`) and command options (after `--`). The separator may not follow \
a positional argument."
)]
pub struct ProgramOptions {
    /// When to use colors
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorOption>,

    /// How to print the classification
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print a summary line to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ProgramOptions {
    /// Run the program options of `cli` through clap
    pub fn from_command_line(cli: &CommandLine<'_>) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once(cli.execfile).chain(cli.program_options.iter()))
    }
}

/// First line of a rendered clap error, without its `error: ` prefix
pub fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
