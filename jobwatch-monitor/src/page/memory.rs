//! In-memory page
//!
//! Keeps every fragment written to each container, and every navigation,
//! behind mutexes so poll tasks can write concurrently.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;

use super::Page;

/// Page that records what was rendered instead of displaying it
#[derive(Debug, Default)]
pub struct MemoryPage {
    bodies: Mutex<HashMap<String, Vec<String>>>,
    locations: Mutex<Vec<String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current body of a container, `None` if it was never written
    pub fn body(&self, container: &str) -> Option<String> {
        let bodies = self.bodies.lock().unwrap();
        bodies.get(container).and_then(|history| history.last().cloned())
    }

    /// Every body written to a container, oldest first
    pub fn history(&self, container: &str) -> Vec<String> {
        let bodies = self.bodies.lock().unwrap();
        bodies.get(container).cloned().unwrap_or_default()
    }

    /// Locations navigated to, oldest first
    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().unwrap().clone()
    }
}

impl Page for MemoryPage {
    fn replace_body(&self, container: &str, fragment: &str) -> Result<()> {
        let mut bodies = self.bodies.lock().unwrap();
        bodies
            .entry(container.to_string())
            .or_default()
            .push(fragment.to_string());
        Ok(())
    }

    fn navigate(&self, location: &str) -> Result<()> {
        let mut locations = self.locations.lock().unwrap();
        locations.push(location.to_string());
        Ok(())
    }
}
