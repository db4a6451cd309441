#![forbid(unsafe_code)]

//! Single-pass token classifier
//!
//! Walks the argument vector left to right and buckets every token after the
//! invocation path into one of three groups:
//!
//! - tokens not starting with `-` are positional arguments
//! - tokens starting with `-` before the `--` separator are program options
//! - tokens starting with `-` after the separator are command options
//!
//! The separator is consumed, never stored, and may only appear before the
//! first positional argument. Once the scope has switched to command options
//! it never switches back.

use super::error::{ArrayKind, ParseError};
use super::string_array::{DEFAULT_CAPACITY, GrowthPolicy, StringArray};
use serde::Deserialize;

/// The token that switches option scope
pub const SEPARATOR: &str = "--";

/// Storage settings applied to every array the classifier allocates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    pub default_capacity: usize,
    pub growth: GrowthPolicy,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            default_capacity: DEFAULT_CAPACITY,
            growth: GrowthPolicy::Grow,
        }
    }
}

/// Which option group a `-` token currently lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Program,
    Command,
}

/// A classified argument vector
///
/// All tokens are borrowed from the vector passed to [`Parser::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub execfile: &'a str,
    pub args: StringArray<'a>,
    pub cmd_options: StringArray<'a>,
    pub program_options: StringArray<'a>,
}

impl<'a> CommandLine<'a> {
    fn bare(execfile: &'a str) -> Self {
        CommandLine {
            execfile,
            args: StringArray::unallocated(),
            cmd_options: StringArray::unallocated(),
            program_options: StringArray::unallocated(),
        }
    }

    /// True when only the invocation path was given; the three arrays were
    /// never allocated in that case.
    pub fn is_bare(&self) -> bool {
        !self.args.is_allocated()
            && !self.cmd_options.is_allocated()
            && !self.program_options.is_allocated()
    }

    /// Number of classified tokens across all groups
    pub fn token_count(&self) -> usize {
        self.args.len() + self.cmd_options.len() + self.program_options.len()
    }
}

/// Classifier configured with array storage settings
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParseConfig,
}

impl Parser {
    pub fn new(config: ParseConfig) -> Self {
        Parser { config }
    }

    /// Classify `argv`, whose first element is the invocation path
    pub fn parse<'a, S: AsRef<str>>(&self, argv: &'a [S]) -> Result<CommandLine<'a>, ParseError> {
        let Some((execfile, rest)) = argv.split_first() else {
            return Err(ParseError::EmptyArgv);
        };
        let execfile: &'a str = execfile.as_ref();

        if rest.is_empty() {
            tracing::debug!(execfile, "no arguments after invocation path");
            return Ok(CommandLine::bare(execfile));
        }

        let mut cli = CommandLine {
            execfile,
            args: self.allocate(ArrayKind::Args)?,
            cmd_options: self.allocate(ArrayKind::CmdOptions)?,
            program_options: self.allocate(ArrayKind::ProgramOptions)?,
        };

        let mut scope = Scope::Program;
        for token in rest {
            let token: &'a str = token.as_ref();
            if !token.starts_with('-') {
                tracing::trace!(token, "positional argument");
                cli.args
                    .push(token)
                    .map_err(|e| ParseError::from_push(ArrayKind::Args, e))?;
            } else if token == SEPARATOR {
                if let Some(positional) = cli.args.last() {
                    return Err(ParseError::SeparatorAfterPositional {
                        separator: token.to_string(),
                        positional: positional.to_string(),
                    });
                }
                if scope == Scope::Program {
                    tracing::debug!("switching to command option scope");
                }
                scope = Scope::Command;
            } else {
                let (kind, target) = match scope {
                    Scope::Program => (ArrayKind::ProgramOptions, &mut cli.program_options),
                    Scope::Command => (ArrayKind::CmdOptions, &mut cli.cmd_options),
                };
                tracing::trace!(token, group = %kind, "option");
                target
                    .push(token)
                    .map_err(|e| ParseError::from_push(kind, e))?;
            }
        }

        Ok(cli)
    }

    fn allocate<'a>(&self, kind: ArrayKind) -> Result<StringArray<'a>, ParseError> {
        // Zero capacity would be indistinguishable from the bare invocation
        let capacity = self.config.default_capacity.max(1);
        let array = StringArray::with_capacity(capacity, self.config.growth)
            .map_err(|source| ParseError::Allocation {
                array: kind,
                source,
            })?;
        tracing::debug!(group = %kind, capacity = array.capacity(), "allocated");
        Ok(array)
    }
}

/// Classify `argv` with default storage settings
pub fn parse<S: AsRef<str>>(argv: &[S]) -> Result<CommandLine<'_>, ParseError> {
    Parser::default().parse(argv)
}
