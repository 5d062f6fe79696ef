//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod import;
mod output;

pub use import::{ImportSummary, generating_file};
pub use output::{Output, Report, TerminalOutput};
