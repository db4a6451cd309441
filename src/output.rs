//! Output formatters for classified command lines

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;
