use serde::{Deserialize, Serialize};

/// A named region of a page whose inner HTML the renderer replaces.
///
/// The in-process stand-in for a DOM element: `set_inner_html` swaps the
/// region's markup wholesale, the way a browser script assigns `innerHTML`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    inner_html: String,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the container's inner HTML.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    /// Current inner HTML.
    #[must_use]
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

/// A dashboard page: an ordered collection of named containers.
///
/// Render operations take the page (or a container) as an explicit
/// parameter; there is no process-wide page state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    containers: Vec<(String, Container)>,
}

impl Page {
    /// Create a page with no containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add an empty container with the given id.
    ///
    /// Ids are unique per page; adding an id that already exists is a no-op.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.add_container(id);
        self
    }

    /// Add an empty container with the given id, unless one already exists.
    pub fn add_container(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.contains(&id) {
            self.containers.push((id, Container::new()));
        }
    }

    /// True if a container with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.containers.iter().any(|(name, _)| name == id)
    }

    /// Look up a container by id.
    #[must_use]
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, c)| c)
    }

    /// Look up a container by id for mutation.
    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers
            .iter_mut()
            .find(|(name, _)| name == id)
            .map(|(_, c)| c)
    }

    /// Container ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|(name, _)| name.as_str())
    }
}
