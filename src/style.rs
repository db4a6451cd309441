#![forbid(unsafe_code)]

//! ANSI style strings used when printing diagnostics
//!
//! The five strings are either all escape sequences or all empty. A value is
//! owned by whoever prints diagnostics and starts out inactive.

use std::io::IsTerminal;
use termcolor::ColorChoice;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FORE_RED: &str = "\x1b[31m";
const FORE_BRBLUE: &str = "\x1b[94m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub reset: &'static str,
    pub bold: &'static str,
    pub dim: &'static str,
    pub fore_red: &'static str,
    pub fore_brblue: &'static str,
}

impl Styles {
    /// All styles empty
    pub const fn inactive() -> Self {
        Styles {
            reset: "",
            bold: "",
            dim: "",
            fore_red: "",
            fore_brblue: "",
        }
    }

    /// All styles set to their escape sequences.
    ///
    /// Without the `styles` feature this is the same as [`Styles::inactive`].
    pub const fn active() -> Self {
        if cfg!(feature = "styles") {
            Styles {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
                fore_red: FORE_RED,
                fore_brblue: FORE_BRBLUE,
            }
        } else {
            Styles::inactive()
        }
    }

    pub fn is_active(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Flip every style at once, based on whether `reset` is currently set
    pub fn toggle(&mut self) {
        *self = if self.is_active() {
            Styles::inactive()
        } else {
            Styles::active()
        };
    }

    /// Resolve a colour choice against whether the target stream is a terminal
    ///
    /// `Auto` also honours `NO_COLOR` and `TERM=dumb`.
    pub fn for_choice(choice: ColorChoice, is_terminal: bool) -> Self {
        let enabled = match choice {
            ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                is_terminal
                    && std::env::var_os("NO_COLOR").is_none()
                    && std::env::var("TERM").map_or(true, |term| term != "dumb")
            }
        };
        if enabled {
            Styles::active()
        } else {
            Styles::inactive()
        }
    }

    /// [`Styles::for_choice`] against the process's stderr
    pub fn for_stderr(choice: ColorChoice) -> Self {
        Styles::for_choice(choice, std::io::stderr().is_terminal())
    }
}

impl Default for Styles {
    fn default() -> Self {
        Styles::inactive()
    }
}
