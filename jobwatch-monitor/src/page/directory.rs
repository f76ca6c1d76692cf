//! Directory-backed page
//!
//! Each container becomes one file holding its latest body: `#name` maps to
//! `<dir>/name.html`, any other selector to a `%`-prefixed, percent-encoded
//! name so distinct selectors never share a file. Navigation writes the
//! target to `<dir>/location`. Every write goes to its own temporary file
//! which is then renamed over the target, so concurrent updates of the same
//! container never clobber each other and readers never see a half-written
//! body.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use super::Page;

/// Page writing fragments into a directory, e.g. one served statically
#[derive(Debug, Clone)]
pub struct DirectoryPage {
    dir: PathBuf,
}

fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// File stem for a container selector; injective over selectors
fn file_stem(container: &str) -> String {
    if let Some(id) = container.strip_prefix('#') {
        if !id.is_empty() && id.chars().all(is_plain) {
            return id.to_string();
        }
    }

    let mut stem = String::from("%");
    for c in container.chars() {
        if is_plain(c) {
            stem.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(stem, "%{:02X}", byte);
            }
        }
    }
    stem
}

impl DirectoryPage {
    /// Creates the page, creating `dir` if needed
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the body of `container`
    pub fn body_path(&self, container: &str) -> PathBuf {
        self.dir.join(format!("{}.html", file_stem(container)))
    }

    /// File recording the last navigation target
    pub fn location_path(&self) -> PathBuf {
        self.dir.join("location")
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("Failed to create temporary file in {}", self.dir.display()))?;
        tmp.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
        tmp.persist(path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}

impl Page for DirectoryPage {
    fn replace_body(&self, container: &str, fragment: &str) -> Result<()> {
        let path = self.body_path(container);
        debug!("Writing {} bytes to {}", fragment.len(), path.display());
        self.write_atomic(&path, fragment)
    }

    fn navigate(&self, location: &str) -> Result<()> {
        self.write_atomic(&self.location_path(), location)
    }
}
