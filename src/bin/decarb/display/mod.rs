mod banner;
mod error;
mod report;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use report::Reporter;

use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Styled output with a progress bar (stderr is a terminal).
    pub interactive: bool,
    /// No status output at all.
    pub quiet: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self {
                interactive: false,
                quiet: true,
            }
        } else {
            self
        }
    }
}
