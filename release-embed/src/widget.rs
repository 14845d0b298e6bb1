//! Lifecycle management for the third-party release-log viewer widget.
//!
//! The viewer is a script-provided global the page does not compile against,
//! so everything JavaScript-shaped sits behind [`WidgetDriver`] and
//! [`AddressBar`]. The browser implementations live in [`crate::dom`]; tests
//! drive the lifecycle with fakes.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source loaded when the page URL carries no `url` query parameter.
pub const DEFAULT_RELEASES_URL: &str = "/releases/agentplexus-releases.json";

/// Query parameter naming the release-log source to load.
pub const SOURCE_URL_PARAM: &str = "url";

/// Construction options forwarded to the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Show the viewer's own URL input bar.
    pub show_url_bar: bool,
    /// Show the viewer's header row.
    pub show_header: bool,
    /// Show the release-frequency heatmap.
    pub show_heatmap: bool,
    /// Color ramp for the heatmap, low to high.
    pub heatmap_colors: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            show_url_bar: false,
            show_header: true,
            show_heatmap: true,
            heatmap_colors: Vec::new(),
        }
    }
}

/// Why widget construction failed.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The viewer script has not defined its global constructor.
    #[error("release-log viewer constructor is not available")]
    ConstructorMissing,
    /// The constructor threw.
    #[error("release-log viewer construction failed: {0}")]
    Construct(String),
}

/// The widget's JavaScript surface, abstracted for tests.
pub trait WidgetDriver {
    /// Mount point the widget renders into.
    type Container;
    /// Opaque reference to a constructed widget instance.
    type Handle: Clone;

    /// Construct a widget inside `container`. `on_load` is invoked with the
    /// source URL each time the widget finishes loading one.
    fn construct(
        &self,
        container: &Self::Container,
        config: &WidgetConfig,
        on_load: Rc<dyn Fn(&str)>,
    ) -> Result<Self::Handle, WidgetError>;

    /// Ask the instance to load a source URL.
    fn load_url(&self, handle: &Self::Handle, url: &str);

    /// Destroy the instance and release whatever it holds.
    fn destroy(&self, handle: Self::Handle);

    /// Empty the mount point of stale markup.
    fn clear_container(&self, container: &Self::Container);

    /// Run `job` after the current task settles (next macrotask in the
    /// browser). The widget needs its constructor to fully return before it
    /// accepts a load.
    fn defer(&self, job: Box<dyn FnOnce()>);
}

/// How the lifecycle reads and rewrites the page's query string.
pub trait AddressBar {
    /// Value of a query parameter on the current page URL, if present.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Set a query parameter without adding a history entry.
    fn replace_query_param(&self, name: &str, value: &str);
}

struct LifecycleState<H> {
    instance: Option<H>,
    mounted: bool,
}

/// Owns at most one live widget instance for a page visit.
///
/// Cloning shares the underlying state, so an async initialization path and
/// a synchronous cleanup path can hold the same lifecycle. Once
/// [`dismount`](WidgetLifecycle::dismount) runs, late initializations become
/// no-ops instead of leaking an instance into a dead page.
pub struct WidgetLifecycle<D: WidgetDriver, A> {
    driver: Rc<D>,
    address: Rc<A>,
    state: Rc<RefCell<LifecycleState<D::Handle>>>,
}

impl<D: WidgetDriver, A> Clone for WidgetLifecycle<D, A> {
    fn clone(&self) -> Self {
        Self {
            driver: Rc::clone(&self.driver),
            address: Rc::clone(&self.address),
            state: Rc::clone(&self.state),
        }
    }
}

impl<D, A> WidgetLifecycle<D, A>
where
    D: WidgetDriver + 'static,
    A: AddressBar + 'static,
{
    /// A mounted lifecycle with no live instance yet.
    pub fn new(driver: D, address: A) -> Self {
        Self {
            driver: Rc::new(driver),
            address: Rc::new(address),
            state: Rc::new(RefCell::new(LifecycleState {
                instance: None,
                mounted: true,
            })),
        }
    }

    /// Whether a widget instance is currently live.
    pub fn is_live(&self) -> bool {
        self.state.borrow().instance.is_some()
    }

    /// Construct the widget and schedule its initial load.
    ///
    /// Idempotent: a second call while an instance is live does nothing, as
    /// does any call after [`dismount`](WidgetLifecycle::dismount). The
    /// initial source comes from the `url` query parameter, falling back to
    /// [`DEFAULT_RELEASES_URL`]; loads of any other source are written back
    /// to the query string so the page URL stays shareable. Empty load
    /// reports never touch the query string.
    pub fn initialize(
        &self,
        container: &D::Container,
        config: &WidgetConfig,
    ) -> Result<(), WidgetError> {
        {
            let state = self.state.borrow();
            if !state.mounted || state.instance.is_some() {
                return Ok(());
            }
        }

        self.driver.clear_container(container);

        let address = Rc::clone(&self.address);
        let on_load: Rc<dyn Fn(&str)> = Rc::new(move |loaded| {
            if !loaded.is_empty() && loaded != DEFAULT_RELEASES_URL {
                address.replace_query_param(SOURCE_URL_PARAM, loaded);
            }
        });

        let handle = self.driver.construct(container, config, on_load)?;
        self.state.borrow_mut().instance = Some(handle.clone());

        let initial = self
            .address
            .query_param(SOURCE_URL_PARAM)
            .unwrap_or_else(|| DEFAULT_RELEASES_URL.to_string());
        let driver = Rc::clone(&self.driver);
        self.driver
            .defer(Box::new(move || driver.load_url(&handle, &initial)));
        Ok(())
    }

    /// Destroy the live instance, if any. Safe to call repeatedly.
    pub fn teardown(&self) {
        let taken = self.state.borrow_mut().instance.take();
        if let Some(handle) = taken {
            self.driver.destroy(handle);
        }
    }

    /// Tear down and refuse all further initialization. Call when the page
    /// hosting the widget unmounts.
    pub fn dismount(&self) {
        self.state.borrow_mut().mounted = false;
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct DriverInner {
        constructs: Cell<u32>,
        destroys: Cell<u32>,
        clears: Cell<u32>,
        loads: RefCell<Vec<String>>,
        deferred: RefCell<Vec<Box<dyn FnOnce()>>>,
        on_load: RefCell<Option<Rc<dyn Fn(&str)>>>,
    }

    #[derive(Clone, Default)]
    struct FakeDriver {
        inner: Rc<DriverInner>,
    }

    impl FakeDriver {
        fn run_deferred(&self) {
            let jobs: Vec<_> = self.inner.deferred.borrow_mut().drain(..).collect();
            for job in jobs {
                job();
            }
        }

        fn fire_on_load(&self, url: &str) {
            let hook = self.inner.on_load.borrow().clone();
            if let Some(hook) = hook {
                hook(url);
            }
        }
    }

    impl WidgetDriver for FakeDriver {
        type Container = ();
        type Handle = u32;

        fn construct(
            &self,
            _container: &(),
            _config: &WidgetConfig,
            on_load: Rc<dyn Fn(&str)>,
        ) -> Result<u32, WidgetError> {
            self.inner.constructs.set(self.inner.constructs.get() + 1);
            *self.inner.on_load.borrow_mut() = Some(on_load);
            Ok(self.inner.constructs.get())
        }

        fn load_url(&self, _handle: &u32, url: &str) {
            self.inner.loads.borrow_mut().push(url.to_string());
        }

        fn destroy(&self, _handle: u32) {
            self.inner.destroys.set(self.inner.destroys.get() + 1);
        }

        fn clear_container(&self, _container: &()) {
            self.inner.clears.set(self.inner.clears.get() + 1);
        }

        fn defer(&self, job: Box<dyn FnOnce()>) {
            self.inner.deferred.borrow_mut().push(job);
        }
    }

    #[derive(Default)]
    struct AddressInner {
        param: RefCell<Option<String>>,
        rewrites: RefCell<Vec<(String, String)>>,
    }

    #[derive(Clone, Default)]
    struct FakeAddress {
        inner: Rc<AddressInner>,
    }

    impl AddressBar for FakeAddress {
        fn query_param(&self, name: &str) -> Option<String> {
            assert_eq!(name, SOURCE_URL_PARAM);
            self.inner.param.borrow().clone()
        }

        fn replace_query_param(&self, name: &str, value: &str) {
            self.inner
                .rewrites
                .borrow_mut()
                .push((name.to_string(), value.to_string()));
        }
    }

    fn lifecycle() -> (WidgetLifecycle<FakeDriver, FakeAddress>, FakeDriver, FakeAddress) {
        let driver = FakeDriver::default();
        let address = FakeAddress::default();
        let lifecycle = WidgetLifecycle::new(driver.clone(), address.clone());
        (lifecycle, driver, address)
    }

    #[test]
    fn initialize_clears_container_then_constructs() {
        let (lifecycle, driver, _) = lifecycle();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        assert_eq!(driver.inner.clears.get(), 1);
        assert_eq!(driver.inner.constructs.get(), 1);
        assert!(lifecycle.is_live());
    }

    #[test]
    fn initial_load_is_deferred_and_defaults() {
        let (lifecycle, driver, _) = lifecycle();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        // Nothing is loaded until the deferred job runs.
        assert!(driver.inner.loads.borrow().is_empty());
        driver.run_deferred();
        assert_eq!(*driver.inner.loads.borrow(), vec![DEFAULT_RELEASES_URL]);
    }

    #[test]
    fn query_parameter_overrides_the_initial_source() {
        let (lifecycle, driver, address) = lifecycle();
        *address.inner.param.borrow_mut() = Some("https://example.com/feed.json".into());

        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();
        driver.run_deferred();

        assert_eq!(
            *driver.inner.loads.borrow(),
            vec!["https://example.com/feed.json"]
        );
    }

    #[test]
    fn initialize_twice_constructs_once() {
        let (lifecycle, driver, _) = lifecycle();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        assert_eq!(driver.inner.constructs.get(), 1);
        assert_eq!(driver.inner.clears.get(), 1);
    }

    #[test]
    fn teardown_without_initialize_is_a_no_op() {
        let (lifecycle, driver, _) = lifecycle();
        lifecycle.teardown();
        lifecycle.teardown();

        assert_eq!(driver.inner.destroys.get(), 0);
        assert!(!lifecycle.is_live());
    }

    #[test]
    fn teardown_destroys_the_live_instance_once() {
        let (lifecycle, driver, _) = lifecycle();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();
        lifecycle.teardown();
        lifecycle.teardown();

        assert_eq!(driver.inner.destroys.get(), 1);
        assert!(!lifecycle.is_live());
    }

    #[test]
    fn initialize_after_dismount_never_constructs() {
        let (lifecycle, driver, _) = lifecycle();
        lifecycle.dismount();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        assert_eq!(driver.inner.constructs.get(), 0);
        assert!(driver.inner.deferred.borrow().is_empty());
    }

    #[test]
    fn loading_a_custom_source_rewrites_the_query_string() {
        let (lifecycle, driver, address) = lifecycle();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        driver.fire_on_load("https://example.com/feed.json");
        assert_eq!(
            *address.inner.rewrites.borrow(),
            vec![(
                SOURCE_URL_PARAM.to_string(),
                "https://example.com/feed.json".to_string()
            )]
        );
    }

    #[test]
    fn empty_load_report_leaves_the_url_alone() {
        let (lifecycle, driver, address) = lifecycle();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        // The viewer reports before its URL input is populated.
        driver.fire_on_load("");
        assert!(address.inner.rewrites.borrow().is_empty());
    }

    #[test]
    fn loading_the_default_source_leaves_the_url_alone() {
        let (lifecycle, driver, address) = lifecycle();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        driver.fire_on_load(DEFAULT_RELEASES_URL);
        assert!(address.inner.rewrites.borrow().is_empty());
    }

    #[test]
    fn clones_share_the_same_instance() {
        let (lifecycle, driver, _) = lifecycle();
        let other = lifecycle.clone();
        lifecycle.initialize(&(), &WidgetConfig::default()).unwrap();

        assert!(other.is_live());
        other.dismount();
        assert!(!lifecycle.is_live());
        assert_eq!(driver.inner.destroys.get(), 1);
    }
}
