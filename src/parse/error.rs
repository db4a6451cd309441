#![forbid(unsafe_code)]

//! Classification failures and the outcome taxonomy built on them

use super::string_array::PushError;
use std::collections::TryReserveError;
use std::fmt;
use std::process::ExitCode;

/// The three groups a token can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    Args,
    CmdOptions,
    ProgramOptions,
}

impl ArrayKind {
    /// Human description used in diagnostics ("CLI arguments", ...)
    pub fn describe(self) -> &'static str {
        match self {
            ArrayKind::Args => "CLI arguments",
            ArrayKind::CmdOptions => "command options",
            ArrayKind::ProgramOptions => "program options",
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Whether a failure is the user's to fix or an internal one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    User,
    Fatal,
}

/// Errors produced while classifying an argument vector
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "Double dash ('{separator}') cannot be specified after the positional argument ('{positional}')."
    )]
    SeparatorAfterPositional {
        separator: String,
        positional: String,
    },

    #[error("Unable to allocate memory for {array}.")]
    Allocation {
        array: ArrayKind,
        #[source]
        source: TryReserveError,
    },

    #[error("Too many {array}: capacity of {capacity} exceeded.")]
    CapacityExceeded { array: ArrayKind, capacity: usize },

    #[error("Argument vector is empty; expected at least the invocation path.")]
    EmptyArgv,
}

impl ParseError {
    pub(crate) fn from_push(array: ArrayKind, err: PushError) -> Self {
        match err {
            PushError::Full { capacity } => ParseError::CapacityExceeded { array, capacity },
            PushError::Alloc(source) => ParseError::Allocation { array, source },
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ParseError::SeparatorAfterPositional { .. } => Severity::User,
            ParseError::Allocation { .. }
            | ParseError::CapacityExceeded { .. }
            | ParseError::EmptyArgv => Severity::Fatal,
        }
    }

    /// Short title shown before the message in diagnostics
    pub fn title(&self) -> &'static str {
        match self {
            ParseError::SeparatorAfterPositional { .. } => "CLI error",
            ParseError::Allocation { .. } | ParseError::CapacityExceeded { .. } => "Memory error",
            ParseError::EmptyArgv => "Internal error",
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.severity() {
            Severity::User => Outcome::User,
            Severity::Fatal => Outcome::Fatal,
        }
    }
}

/// Result of a classification run, as seen by the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    User,
    Fatal,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Ok => 0,
            Outcome::User => 1,
            Outcome::Fatal => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_message_names_both_tokens() {
        let err = ParseError::SeparatorAfterPositional {
            separator: "--".to_string(),
            positional: "build".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Double dash ('--') cannot be specified after the positional argument ('build')."
        );
        assert_eq!(err.severity(), Severity::User);
        assert_eq!(err.title(), "CLI error");
        assert_eq!(err.outcome().code(), 1);
    }

    #[test]
    fn test_capacity_exceeded_is_fatal() {
        let err = ParseError::from_push(ArrayKind::ProgramOptions, PushError::Full { capacity: 5 });
        assert_eq!(
            err,
            ParseError::CapacityExceeded {
                array: ArrayKind::ProgramOptions,
                capacity: 5
            }
        );
        assert_eq!(err.severity(), Severity::Fatal);
        assert_eq!(err.outcome(), Outcome::Fatal);
        assert_eq!(err.outcome().code(), 2);
    }

    #[test]
    fn test_allocation_message_per_array() {
        let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let cases = [
            (
                ArrayKind::Args,
                "Unable to allocate memory for CLI arguments.",
            ),
            (
                ArrayKind::CmdOptions,
                "Unable to allocate memory for command options.",
            ),
            (
                ArrayKind::ProgramOptions,
                "Unable to allocate memory for program options.",
            ),
        ];
        for (array, expected) in cases {
            let err = ParseError::Allocation {
                array,
                source: source.clone(),
            };
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.title(), "Memory error");
        }
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Ok.code(), 0);
        assert_eq!(Outcome::User.code(), 1);
        assert_eq!(Outcome::Fatal.code(), 2);
    }
}
