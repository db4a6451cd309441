#![forbid(unsafe_code)]

//! JSON output formatter for machine-readable output
//!
//! Emits a single object on one line:
//! `{"type":"command_line","execfile":..,"bare":..,"args":[..],"program_options":[..],"cmd_options":[..]}`

use crate::parse::{CommandLine, StringArray};
use serde::Serialize;

/// JSON output formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JsonFormatter
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format the command line as one JSON line, newline-terminated
    pub fn format(&self, cli: &CommandLine<'_>) -> serde_json::Result<String> {
        let record = CommandLineRecord {
            record_type: "command_line",
            execfile: cli.execfile,
            bare: cli.is_bare(),
            args: &cli.args,
            program_options: &cli.program_options,
            cmd_options: &cli.cmd_options,
        };
        let mut output = serde_json::to_string(&record)?;
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct CommandLineRecord<'c, 'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    execfile: &'a str,
    bare: bool,
    args: &'c StringArray<'a>,
    program_options: &'c StringArray<'a>,
    cmd_options: &'c StringArray<'a>,
}
