//! Command-line front end: program option interpretation and dispatch

pub mod args;
pub mod logging;
pub mod run;

pub use args::ProgramOptions;
pub use logging::init_tracing;
pub use run::run;
