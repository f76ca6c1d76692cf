//! Terminal page
//!
//! Prints each replaced body under a colored header naming its container.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Result;
use colored::*;

use super::Page;

/// Page that prints fragments to stdout
///
/// A failed write (e.g. a closed pipe) is returned as an error rather than
/// aborting the poll task.
pub struct TerminalPage {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Prints to `out` instead of stdout
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Text printed for a body replacement
    fn format_body(container: &str, fragment: &str) -> String {
        let rows = fragment.matches("<tr>").count();
        let header = format!("{} {} ({} row(s))", "▸".cyan(), container.bold(), rows);
        if fragment.is_empty() {
            header
        } else {
            format!("{}\n{}", header, fragment.dimmed())
        }
    }

    fn print(&self, text: &str) -> Result<()> {
        // One write per update keeps concurrent updates from interleaving.
        let mut out = self.out.lock().unwrap();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for TerminalPage {
    fn replace_body(&self, container: &str, fragment: &str) -> Result<()> {
        self.print(&Self::format_body(container, fragment))
    }

    fn navigate(&self, location: &str) -> Result<()> {
        self.print(&format!("{} {}", "→ navigating to".yellow(), location))
    }
}
