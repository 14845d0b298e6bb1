//! # release-embed
//!
//! Embeds the third-party release-log viewer in a page that does not compile
//! against it. Two concerns, two halves:
//!
//! - [`DependencyLoader`] brings the viewer's external stylesheets and
//!   scripts onto the page in strict declaration order, skipping resources
//!   that are already present and failing fast when one cannot load.
//! - [`WidgetLifecycle`] owns at most one live viewer instance per page
//!   visit: construct once, point it at the source named by the `?url=`
//!   query parameter (or the bundled default), keep the page URL shareable,
//!   and tear down cleanly on navigation.
//!
//! Everything browser-shaped is behind the [`ResourceHost`], [`WidgetDriver`]
//! and [`AddressBar`] traits; [`dom`] provides the wasm implementations.
//!
//! ```rust,ignore
//! let loader = DependencyLoader::new(DomHost, shared_registry());
//! loader.ensure_loaded(&[
//!     LoadableResource::style(VIEWER_CSS),
//!     LoadableResource::script(VIEWER_JS, || global_symbol_defined(WIDGET_GLOBAL)),
//! ]).await?;
//!
//! let lifecycle = WidgetLifecycle::new(ReleaseLogDriver, DomAddressBar);
//! lifecycle.initialize(&container, &WidgetConfig::default())?;
//! ```

#![warn(missing_docs)]

pub mod dom;
pub mod loader;
pub mod registry;
pub mod resource;
pub mod widget;

pub use dom::{
    DomAddressBar, DomHost, ReleaseLogDriver, WIDGET_GLOBAL, global_symbol_defined,
    shared_registry,
};
pub use loader::{DependencyLoader, LoadError, POLL_INTERVAL_MS, ResourceHost};
pub use registry::{ScriptRegistry, SharedRegistry};
pub use resource::{LoadableResource, ResourceKind};
pub use widget::{
    AddressBar, DEFAULT_RELEASES_URL, SOURCE_URL_PARAM, WidgetConfig, WidgetDriver, WidgetError,
    WidgetLifecycle,
};
