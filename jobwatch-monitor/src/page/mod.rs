//! Page layer
//!
//! A page owns the table containers the poller writes into. The poller only
//! ever replaces a container's body wholesale or navigates the page away;
//! implementations decide what that means for their host.
//!
//! All pages are trait objects shared between poll tasks.

mod directory;
mod memory;
mod terminal;

pub use directory::DirectoryPage;
pub use memory::MemoryPage;
pub use terminal::TerminalPage;

use anyhow::Result;

/// Target of rendered fragments
pub trait Page: Send + Sync {
    /// Replaces the table body of `container` with `fragment`
    ///
    /// # Arguments
    /// * `container` - Selector of the table, e.g. `#id_jobs_active`
    /// * `fragment` - Complete new body, possibly empty
    fn replace_body(&self, container: &str, fragment: &str) -> Result<()>;

    /// Moves the page to another location
    ///
    /// After a successful navigation the current page is considered gone and
    /// no further fragments are expected.
    fn navigate(&self, location: &str) -> Result<()>;
}
