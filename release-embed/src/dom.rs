//! Browser bindings: DOM resource host, URL handling, and the JavaScript
//! surface of the release-log viewer.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::loader::{LoadError, ResourceHost};
use crate::registry::{ScriptRegistry, SharedRegistry};
use crate::widget::{WidgetConfig, WidgetDriver, WidgetError};

/// Global constructor the viewer script defines on `window`.
pub const WIDGET_GLOBAL: &str = "ReleaseLogViewer";

/// The viewer mirrors its active source into this input.
const URL_INPUT_SELECTOR: &str = ".rlv-url-input";

thread_local! {
    static REGISTRY: SharedRegistry = ScriptRegistry::shared();
}

/// The page-wide registry. Scripts outlive page components, so all loaders
/// in one browsing context share this.
pub fn shared_registry() -> SharedRegistry {
    REGISTRY.with(Rc::clone)
}

/// Whether a global symbol is defined on `window`.
pub fn global_symbol_defined(name: &str) -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|value| !value.is_undefined())
        .unwrap_or(false)
}

fn js_error(err: JsValue) -> LoadError {
    LoadError::Page(format!("{err:?}"))
}

/// [`ResourceHost`] that inserts real `<link>`/`<script>` tags.
pub struct DomHost;

impl ResourceHost for DomHost {
    fn insert_style(&self, location: &str) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Ok(element) = document.create_element("link") else {
            return;
        };
        let Ok(link) = element.dyn_into::<web_sys::HtmlLinkElement>() else {
            return;
        };
        link.set_rel("stylesheet");
        link.set_href(location);
        if let Some(head) = document.head() {
            let _ = head.append_child(&link);
        }
    }

    async fn insert_script(&self, location: &str) -> Result<(), LoadError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| LoadError::Page("no document".into()))?;
        let script: web_sys::HtmlScriptElement = document
            .create_element("script")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| LoadError::Page("created element was not a script".into()))?;
        script.set_src(location);

        let (tx, rx) = oneshot::channel::<bool>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let settle = |outcome: bool| {
            let tx = Rc::clone(&tx);
            Closure::wrap(Box::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(outcome);
                }
            }) as Box<dyn FnMut()>)
        };
        let onload = settle(true);
        let onerror = settle(false);
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        // The tag stays in the page, so its handlers stay alive with it.
        onload.forget();
        onerror.forget();

        let body = document
            .body()
            .ok_or_else(|| LoadError::Page("no body".into()))?;
        body.append_child(&script).map_err(js_error)?;

        match rx.await {
            Ok(true) => Ok(()),
            _ => Err(LoadError::Script(location.to_string())),
        }
    }

    async fn delay(&self, ms: u32) {
        let (tx, rx) = oneshot::channel::<()>();
        let fire = Closure::once_into_js(move || {
            let _ = tx.send(());
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.unchecked_ref(),
                ms as i32,
            );
        }
        let _ = rx.await;
    }
}

/// [`AddressBar`](crate::widget::AddressBar) over `window.location` and the
/// history API.
pub struct DomAddressBar;

impl crate::widget::AddressBar for DomAddressBar {
    fn query_param(&self, name: &str) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get(name)
    }

    fn replace_query_param(&self, name: &str, value: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(href) = window.location().href() else {
            return;
        };
        let Ok(url) = web_sys::Url::new(&href) else {
            return;
        };
        url.search_params().set(name, value);
        if let Ok(history) = window.history() {
            // replaceState keeps the back button pointing off-page.
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url.href()));
        }
    }
}

fn url_input() -> Option<web_sys::HtmlInputElement> {
    web_sys::window()?
        .document()?
        .query_selector(URL_INPUT_SELECTOR)
        .ok()??
        .dyn_into()
        .ok()
}

fn set_option(
    target: &js_sys::Object,
    key: &str,
    value: &JsValue,
) -> Result<(), WidgetError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(drop)
        .map_err(|err| WidgetError::Construct(format!("{err:?}")))
}

/// [`WidgetDriver`] over the script-provided `ReleaseLogViewer` global.
pub struct ReleaseLogDriver;

impl WidgetDriver for ReleaseLogDriver {
    type Container = web_sys::Element;
    type Handle = JsValue;

    fn construct(
        &self,
        container: &web_sys::Element,
        config: &WidgetConfig,
        on_load: Rc<dyn Fn(&str)>,
    ) -> Result<JsValue, WidgetError> {
        let ctor = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(WIDGET_GLOBAL))
            .map_err(|_| WidgetError::ConstructorMissing)?;
        if ctor.is_undefined() {
            return Err(WidgetError::ConstructorMissing);
        }
        let ctor: js_sys::Function = ctor
            .dyn_into()
            .map_err(|_| WidgetError::ConstructorMissing)?;

        let options = js_sys::Object::new();
        set_option(&options, "showUrlBar", &JsValue::from_bool(config.show_url_bar))?;
        set_option(&options, "showHeader", &JsValue::from_bool(config.show_header))?;
        set_option(&options, "showHeatmap", &JsValue::from_bool(config.show_heatmap))?;
        let colors = js_sys::Array::new();
        for color in &config.heatmap_colors {
            colors.push(&JsValue::from_str(color));
        }
        set_option(&options, "heatmapColors", &colors)?;

        // The viewer's onLoad callback carries no arguments; the active
        // source is read back from the URL input it maintains. The input is
        // empty until the viewer fills it, notably with the bar hidden.
        let loaded = Closure::wrap(Box::new(move || {
            if let Some(input) = url_input() {
                let value = input.value();
                if !value.is_empty() {
                    on_load(&value);
                }
            }
        }) as Box<dyn FnMut()>);
        set_option(&options, "onLoad", loaded.as_ref())?;
        loaded.forget();

        let args = js_sys::Array::of2(container, &options);
        js_sys::Reflect::construct(&ctor, &args)
            .map_err(|err| WidgetError::Construct(format!("{err:?}")))
    }

    fn load_url(&self, handle: &JsValue, url: &str) {
        if let Some(input) = url_input() {
            input.set_value(url);
        }
        if let Ok(load) = js_sys::Reflect::get(handle, &JsValue::from_str("loadUrl"))
            && let Ok(load) = load.dyn_into::<js_sys::Function>()
        {
            let _ = load.call1(handle, &JsValue::from_str(url));
        }
    }

    fn destroy(&self, handle: JsValue) {
        if let Ok(destroy) = js_sys::Reflect::get(&handle, &JsValue::from_str("destroy"))
            && let Ok(destroy) = destroy.dyn_into::<js_sys::Function>()
        {
            let _ = destroy.call0(&handle);
        }
    }

    fn clear_container(&self, container: &web_sys::Element) {
        container.set_inner_html("");
    }

    fn defer(&self, job: Box<dyn FnOnce()>) {
        let fire = Closure::once_into_js(job);
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), 0);
        }
    }
}
