//! Strictly ordered loading of external stylesheets and scripts.

use thiserror::Error;

use crate::registry::SharedRegistry;
use crate::resource::{LoadableResource, ResourceKind};

/// How often to re-check readiness while another caller's load is in flight.
pub const POLL_INTERVAL_MS: u32 = 50;

/// Why a load sequence stopped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The script tag fired its error event (network failure, bad URI, ...).
    #[error("failed to load script {0}")]
    Script(String),
    /// The host page could not be manipulated.
    #[error("page error: {0}")]
    Page(String),
}

/// Where resources are physically inserted and time passes.
///
/// The browser implementation is [`crate::dom::DomHost`]; tests substitute a
/// recording fake.
pub trait ResourceHost {
    /// Insert a stylesheet link. Fire-and-forget: completion is not awaited.
    fn insert_style(&self, location: &str);

    /// Insert a script tag and resolve once it loads or errors.
    fn insert_script(&self, location: &str) -> impl Future<Output = Result<(), LoadError>>;

    /// Suspend for roughly `ms` milliseconds.
    fn delay(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Loads a sequence of [`LoadableResource`]s in declaration order.
///
/// Each script is awaited before the next resource is touched, so scripts
/// with load-order dependencies (a plugin and its host library, say) can be
/// declared in the order they require. Resources already present on the page
/// are skipped; a location another caller is still loading is polled until
/// its readiness predicate holds.
pub struct DependencyLoader<H> {
    host: H,
    registry: SharedRegistry,
}

impl<H: ResourceHost> DependencyLoader<H> {
    /// A loader inserting through `host` and bookkeeping in `registry`.
    pub fn new(host: H, registry: SharedRegistry) -> Self {
        Self { host, registry }
    }

    /// Bring every resource in `resources` onto the page, in order.
    ///
    /// Fails fast: the first script that errors aborts the sequence and the
    /// remaining resources are not touched. A failed location is released in
    /// the registry so a later call may retry it.
    pub async fn ensure_loaded(&self, resources: &[LoadableResource]) -> Result<(), LoadError> {
        for resource in resources {
            match resource.kind() {
                ResourceKind::Style => self.ensure_style(resource.location()),
                ResourceKind::Script => self.ensure_script(resource).await?,
            }
        }
        Ok(())
    }

    fn ensure_style(&self, location: &str) {
        if self.registry.borrow().is_loaded(location) {
            return;
        }
        self.host.insert_style(location);
        self.registry.borrow_mut().mark_loaded(location);
    }

    async fn ensure_script(&self, resource: &LoadableResource) -> Result<(), LoadError> {
        let location = resource.location();
        if resource.is_ready() {
            self.registry.borrow_mut().mark_loaded(location);
            return Ok(());
        }

        let tag_present = {
            let registry = self.registry.borrow();
            registry.is_loaded(location) || registry.is_inflight(location)
        };
        if tag_present {
            // Someone else inserted the tag; wait for its effect to appear.
            while !resource.is_ready() {
                self.host.delay(POLL_INTERVAL_MS).await;
            }
            return Ok(());
        }

        self.registry.borrow_mut().begin(location);
        match self.host.insert_script(location).await {
            Ok(()) => {
                self.registry.borrow_mut().finish(location);
                Ok(())
            }
            Err(err) => {
                self.registry.borrow_mut().abort(location);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ScriptRegistry;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Default)]
    struct HostInner {
        events: RefCell<Vec<String>>,
        failing: RefCell<HashSet<String>>,
        on_script: RefCell<Option<Box<dyn Fn(&str)>>>,
        on_delay: RefCell<Option<Box<dyn Fn()>>>,
    }

    #[derive(Clone, Default)]
    struct FakeHost {
        inner: Rc<HostInner>,
    }

    impl FakeHost {
        fn events(&self) -> Vec<String> {
            self.inner.events.borrow().clone()
        }

        fn fail(&self, location: &str) {
            self.inner.failing.borrow_mut().insert(location.to_string());
        }
    }

    impl ResourceHost for FakeHost {
        fn insert_style(&self, location: &str) {
            self.inner.events.borrow_mut().push(format!("style:{location}"));
        }

        async fn insert_script(&self, location: &str) -> Result<(), LoadError> {
            self.inner
                .events
                .borrow_mut()
                .push(format!("script:{location}"));
            if let Some(hook) = &*self.inner.on_script.borrow() {
                hook(location);
            }
            if self.inner.failing.borrow().contains(location) {
                Err(LoadError::Script(location.to_string()))
            } else {
                Ok(())
            }
        }

        async fn delay(&self, _ms: u32) {
            self.inner.events.borrow_mut().push("delay".into());
            if let Some(hook) = &*self.inner.on_delay.borrow() {
                hook();
            }
        }
    }

    fn loader(host: &FakeHost) -> DependencyLoader<FakeHost> {
        DependencyLoader::new(host.clone(), ScriptRegistry::shared())
    }

    #[test]
    fn loads_styles_and_scripts_in_declaration_order() {
        let host = FakeHost::default();
        let result = block_on(loader(&host).ensure_loaded(&[
            LoadableResource::style("base.css"),
            LoadableResource::script("lib.js", || false),
            LoadableResource::script("plugin.js", || false),
        ]));

        assert_eq!(result, Ok(()));
        assert_eq!(
            host.events(),
            vec!["style:base.css", "script:lib.js", "script:plugin.js"]
        );
    }

    #[test]
    fn ready_script_is_skipped_without_a_request() {
        let host = FakeHost::default();
        let result = block_on(loader(&host).ensure_loaded(&[
            LoadableResource::script("lib.js", || true),
            LoadableResource::script("plugin.js", || false),
        ]));

        assert_eq!(result, Ok(()));
        assert_eq!(host.events(), vec!["script:plugin.js"]);
    }

    #[test]
    fn failing_script_aborts_the_rest_of_the_sequence() {
        let host = FakeHost::default();
        host.fail("lib.js");
        let registry = ScriptRegistry::shared();
        let loader = DependencyLoader::new(host.clone(), Rc::clone(&registry));

        let result = block_on(loader.ensure_loaded(&[
            LoadableResource::script("lib.js", || false),
            LoadableResource::script("plugin.js", || false),
        ]));

        assert_eq!(result, Err(LoadError::Script("lib.js".into())));
        assert_eq!(host.events(), vec!["script:lib.js"]);
        // The failed location is released for retry.
        assert!(!registry.borrow().is_loaded("lib.js"));
        assert!(!registry.borrow().is_inflight("lib.js"));
    }

    #[test]
    fn style_inserts_once_across_repeated_calls() {
        let host = FakeHost::default();
        let registry = ScriptRegistry::shared();
        let loader = DependencyLoader::new(host.clone(), Rc::clone(&registry));
        let sheet = [LoadableResource::style("base.css")];

        block_on(loader.ensure_loaded(&sheet)).unwrap();
        block_on(loader.ensure_loaded(&sheet)).unwrap();

        assert_eq!(host.events(), vec!["style:base.css"]);
    }

    #[test]
    fn inflight_location_is_polled_until_ready() {
        let host = FakeHost::default();
        let registry = ScriptRegistry::shared();
        // Another caller's load is still in flight.
        registry.borrow_mut().begin("lib.js");

        let ready = Rc::new(Cell::new(false));
        let polls = Rc::new(Cell::new(0u32));
        {
            let ready = Rc::clone(&ready);
            let polls = Rc::clone(&polls);
            *host.inner.on_delay.borrow_mut() = Some(Box::new(move || {
                polls.set(polls.get() + 1);
                if polls.get() == 3 {
                    ready.set(true);
                }
            }));
        }

        let probe = Rc::clone(&ready);
        let loader = DependencyLoader::new(host.clone(), registry);
        let result = block_on(
            loader.ensure_loaded(&[LoadableResource::script("lib.js", move || probe.get())]),
        );

        assert_eq!(result, Ok(()));
        assert_eq!(polls.get(), 3);
        // No second tag was inserted for the in-flight location.
        assert_eq!(host.events(), vec!["delay", "delay", "delay"]);
    }

    #[test]
    fn completed_load_is_observed_by_later_calls() {
        let host = FakeHost::default();
        let registry = ScriptRegistry::shared();
        let loader = DependencyLoader::new(host.clone(), Rc::clone(&registry));

        // The script defines its global as a side effect of loading.
        let defined = Rc::new(Cell::new(false));
        {
            let defined = Rc::clone(&defined);
            *host.inner.on_script.borrow_mut() = Some(Box::new(move |_| defined.set(true)));
        }

        let probe = Rc::clone(&defined);
        let script = LoadableResource::script("lib.js", move || probe.get());
        block_on(loader.ensure_loaded(std::slice::from_ref(&script))).unwrap();
        block_on(loader.ensure_loaded(std::slice::from_ref(&script))).unwrap();

        // Second call sees the predicate hold and issues no request.
        assert_eq!(host.events(), vec!["script:lib.js"]);
        assert!(registry.borrow().is_loaded("lib.js"));
    }
}
