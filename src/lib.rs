#![forbid(unsafe_code)]

//! Argscope: scope-aware command-line token classification
//!
//! Splits an argument vector into positional arguments, program options
//! (before `--`) and command options (after `--`) without interpreting any
//! of them. Tokens are borrowed, never copied.
//!
//! ```
//! let argv = ["tool", "-v", "--", "--release", "build"];
//! let cli = argscope::parse(&argv).unwrap();
//!
//! assert_eq!(cli.program_options.as_slice(), &["-v"]);
//! assert_eq!(cli.cmd_options.as_slice(), &["--release"]);
//! assert_eq!(cli.args.as_slice(), &["build"]);
//! ```

pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod parse;
pub mod style;

pub use parse::{CommandLine, Outcome, ParseError, Parser, parse};
pub use style::Styles;
