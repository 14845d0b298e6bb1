//! Page-level bookkeeping for inserted resources.
//!
//! The browser keeps loaded scripts alive for the lifetime of the page, so
//! the registry is shared across every loader instance on that page (see
//! [`crate::dom::shared_registry`] for the browser binding). Tests construct
//! their own with [`ScriptRegistry::shared`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Registry shared between loaders on the same page.
pub type SharedRegistry = Rc<RefCell<ScriptRegistry>>;

/// Tracks which resource locations have been inserted into the page and
/// which script loads are still in flight.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    loaded: HashSet<String>,
    inflight: HashSet<String>,
}

impl ScriptRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh registry behind the shared handle type.
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Whether the location finished loading (or was found already present).
    pub fn is_loaded(&self, location: &str) -> bool {
        self.loaded.contains(location)
    }

    /// Whether a load for the location was started and has not settled.
    pub fn is_inflight(&self, location: &str) -> bool {
        self.inflight.contains(location)
    }

    /// Record the start of a load.
    pub fn begin(&mut self, location: &str) {
        self.inflight.insert(location.to_string());
    }

    /// Record successful completion of a load started with [`begin`].
    ///
    /// [`begin`]: ScriptRegistry::begin
    pub fn finish(&mut self, location: &str) {
        self.inflight.remove(location);
        self.loaded.insert(location.to_string());
    }

    /// Record a failed load; the location may be retried later.
    pub fn abort(&mut self, location: &str) {
        self.inflight.remove(location);
    }

    /// Record a location as present without a load, e.g. when its readiness
    /// predicate already holds or a stylesheet was just inserted.
    pub fn mark_loaded(&mut self, location: &str) {
        self.loaded.insert(location.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_finish_moves_inflight_to_loaded() {
        let mut registry = ScriptRegistry::new();
        registry.begin("a.js");
        assert!(registry.is_inflight("a.js"));
        assert!(!registry.is_loaded("a.js"));

        registry.finish("a.js");
        assert!(!registry.is_inflight("a.js"));
        assert!(registry.is_loaded("a.js"));
    }

    #[test]
    fn abort_clears_inflight_without_marking_loaded() {
        let mut registry = ScriptRegistry::new();
        registry.begin("a.js");
        registry.abort("a.js");
        assert!(!registry.is_inflight("a.js"));
        assert!(!registry.is_loaded("a.js"));
    }

    #[test]
    fn shared_handle_is_cloneable_state() {
        let registry = ScriptRegistry::shared();
        let other = Rc::clone(&registry);
        registry.borrow_mut().mark_loaded("x.css");
        assert!(other.borrow().is_loaded("x.css"));
    }
}
