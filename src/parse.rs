//! Argument vector classification and the storage it fills

pub mod classifier;
pub mod error;
pub mod string_array;

pub use classifier::{CommandLine, ParseConfig, Parser, SEPARATOR, parse};
pub use error::{ArrayKind, Outcome, ParseError, Severity};
pub use string_array::{DEFAULT_CAPACITY, GrowthPolicy, PushError, StringArray};
