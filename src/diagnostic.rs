#![forbid(unsafe_code)]

//! Error, information and debug messages for the error stream
//!
//! Lines look like `✖ CLI error: message`, with the symbol coloured and the
//! title bold when styles are active.

use crate::parse::ParseError;
use crate::style::Styles;
use std::io::{self, Write};
use std::panic::Location;

pub const DEFAULT_ERROR_SYMBOL: &str = "✖";
pub const DEFAULT_INFO_SYMBOL: &str = "●";

/// Symbols placed in front of diagnostic titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub error: String,
    pub info: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            error: DEFAULT_ERROR_SYMBOL.to_string(),
            info: DEFAULT_INFO_SYMBOL.to_string(),
        }
    }
}

/// Writes formatted diagnostics to a stream
pub struct Reporter<W: Write> {
    out: W,
    styles: Styles,
    symbols: Symbols,
}

impl Reporter<io::Stderr> {
    pub fn stderr(styles: Styles, symbols: Symbols) -> Self {
        Reporter::new(io::stderr(), styles, symbols)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, styles: Styles, symbols: Symbols) -> Self {
        Reporter {
            out,
            styles,
            symbols,
        }
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    pub fn error(&mut self, title: &str, message: &str) -> io::Result<()> {
        let Styles {
            fore_red,
            reset,
            bold,
            ..
        } = self.styles;
        writeln!(
            self.out,
            "{fore_red}{}{reset}{bold} {title}{reset}: {message}",
            self.symbols.error
        )
    }

    pub fn info(&mut self, title: &str, message: &str) -> io::Result<()> {
        let Styles {
            fore_brblue,
            reset,
            bold,
            ..
        } = self.styles;
        writeln!(
            self.out,
            "{fore_brblue}{}{reset}{bold} {title}{reset}: {message}",
            self.symbols.info
        )
    }

    /// Debug line prefixed with the caller's source location
    #[track_caller]
    pub fn debug(&mut self, message: &str) -> io::Result<()> {
        let location = Location::caller();
        let Styles {
            dim, reset, bold, ..
        } = self.styles;
        writeln!(
            self.out,
            "{dim}{}:{}:{reset}{bold}Debug{reset}: {message}",
            location.file(),
            location.line()
        )
    }

    /// Print a classification failure under its own title
    pub fn parse_error(&mut self, err: &ParseError) -> io::Result<()> {
        self.error(err.title(), &err.to_string())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
