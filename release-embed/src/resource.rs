//! Declarations for externally hosted stylesheets and scripts.

use std::fmt;
use std::rc::Rc;

/// What kind of tag a resource loads through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    /// A stylesheet `<link>`; inserted fire-and-forget.
    Style,
    /// A `<script>`; loaded and awaited in sequence.
    Script,
}

/// One external resource in a load sequence.
///
/// Scripts carry a readiness predicate: a side-effect-free check of whether
/// the resource's effect (typically a global symbol) is already present. The
/// predicate both skips redundant loads and detects completion of a load
/// started by another caller.
#[derive(Clone)]
pub struct LoadableResource {
    location: String,
    kind: ResourceKind,
    ready: Option<Rc<dyn Fn() -> bool>>,
}

impl LoadableResource {
    /// Declare a stylesheet. Stylesheets have no completion signal in this
    /// model, so no predicate is taken.
    pub fn style(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            kind: ResourceKind::Style,
            ready: None,
        }
    }

    /// Declare a script with its readiness predicate.
    pub fn script(location: impl Into<String>, ready: impl Fn() -> bool + 'static) -> Self {
        Self {
            location: location.into(),
            kind: ResourceKind::Script,
            ready: Some(Rc::new(ready)),
        }
    }

    /// The resource's URI.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether this is a style or script resource.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Evaluate the readiness predicate. Styles are never "ready" (they are
    /// tracked by insertion alone).
    pub fn is_ready(&self) -> bool {
        self.ready.as_ref().is_some_and(|ready| ready())
    }
}

impl fmt::Debug for LoadableResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadableResource")
            .field("location", &self.location)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn script_readiness_tracks_the_predicate() {
        let flag = Rc::new(Cell::new(false));
        let probe = flag.clone();
        let script = LoadableResource::script("https://cdn.example/x.js", move || probe.get());

        assert!(!script.is_ready());
        flag.set(true);
        assert!(script.is_ready());
        assert_eq!(script.kind(), ResourceKind::Script);
    }

    #[test]
    fn styles_are_never_ready() {
        let style = LoadableResource::style("https://cdn.example/x.css");
        assert!(!style.is_ready());
        assert_eq!(style.kind(), ResourceKind::Style);
        assert_eq!(style.location(), "https://cdn.example/x.css");
    }
}
