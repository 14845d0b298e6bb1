use leptos::html;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use release_embed::{
    DependencyLoader, DomAddressBar, DomHost, LoadableResource, ReleaseLogDriver, WIDGET_GLOBAL,
    WidgetConfig, WidgetLifecycle, global_symbol_defined, shared_registry,
};

/// Cyan color ramp matching the site palette, low to high activity.
const HEATMAP_COLORS: [&str; 5] = ["#1e293b", "#164e63", "#0e7490", "#06b6d4", "#22d3ee"];

/// Dark-theme overrides for the viewer's own stylesheet.
const VIEWER_THEME_CSS: &str = r#"
#releases-container {
  --rlv-color-text: #e2e8f0;
  --rlv-color-text-muted: #94a3b8;
  --rlv-color-link: #06b6d4;
  --rlv-color-link-hover: #22d3ee;
  --rlv-color-bg: #0a0e1a;
  --rlv-color-bg-white: #0f172a;
  --rlv-color-border: #334155;
  --rlv-color-border-light: #1e293b;
  --rlv-color-focus: #8b5cf6;
  --rlv-color-accent: #8b5cf6;
  --rlv-color-prerelease: #ec4899;
}
#releases-container .rlv-heatmap-legend-cell[data-level="0"] { background: #1e293b; }
#releases-container .rlv-heatmap-legend-cell[data-level="1"] { background: #164e63; }
#releases-container .rlv-heatmap-legend-cell[data-level="2"] { background: #0e7490; }
#releases-container .rlv-heatmap-legend-cell[data-level="3"] { background: #06b6d4; }
#releases-container .rlv-heatmap-legend-cell[data-level="4"] { background: #22d3ee; }
#releases-container .ch-subdomain-bg { fill: #1e293b; }
#releases-container .rlv-footer a { color: #06b6d4; }
#releases-container .rlv-footer a:hover { color: #22d3ee; }
#releases-container .rlv-table th:hover { background: #1e293b; }
"#;

/// Stylesheets plus the charting scripts the viewer builds on. Loaded first;
/// the heatmap tooltip plugin needs `createPopper` aliased before it runs.
fn charting_resources() -> Vec<LoadableResource> {
    vec![
        LoadableResource::style("https://unpkg.com/cal-heatmap/dist/cal-heatmap.css"),
        LoadableResource::style("https://unpkg.com/@grokify/releaselog/dist/releaselog-viewer.css"),
        LoadableResource::script("https://d3js.org/d3.v7.min.js", || {
            global_symbol_defined("d3")
        }),
        LoadableResource::script(
            "https://unpkg.com/@popperjs/core@2/dist/umd/popper.min.js",
            || global_symbol_defined("Popper"),
        ),
    ]
}

fn viewer_resources() -> Vec<LoadableResource> {
    vec![
        LoadableResource::script("https://unpkg.com/cal-heatmap/dist/cal-heatmap.min.js", || {
            global_symbol_defined("CalHeatmap")
        }),
        LoadableResource::script(
            "https://unpkg.com/cal-heatmap/dist/plugins/Tooltip.min.js",
            || global_symbol_defined("Tooltip"),
        ),
        LoadableResource::script(
            "https://unpkg.com/cal-heatmap/dist/plugins/CalendarLabel.min.js",
            || global_symbol_defined("CalendarLabel"),
        ),
        LoadableResource::script(
            "https://unpkg.com/@grokify/releaselog/dist/releaselog-viewer.min.js",
            || global_symbol_defined(WIDGET_GLOBAL),
        ),
    ]
}

/// The cal-heatmap Tooltip plugin calls a bare `createPopper`; Popper's UMD
/// bundle only defines `Popper.createPopper`.
fn alias_create_popper() {
    let global = js_sys::global();
    let Ok(popper) = js_sys::Reflect::get(&global, &JsValue::from_str("Popper")) else {
        return;
    };
    if popper.is_undefined() {
        return;
    }
    if let Ok(create) = js_sys::Reflect::get(&popper, &JsValue::from_str("createPopper")) {
        let _ = js_sys::Reflect::set(&global, &JsValue::from_str("createPopper"), &create);
    }
}

#[component]
pub fn ReleasesPage() -> impl IntoView {
    let container: NodeRef<html::Div> = NodeRef::new();
    let lifecycle = WidgetLifecycle::new(ReleaseLogDriver, DomAddressBar);

    {
        let lifecycle = lifecycle.clone();
        Effect::new(move |_| {
            let Some(element) = container.get() else {
                return;
            };
            let lifecycle = lifecycle.clone();
            spawn_local(async move {
                let loader = DependencyLoader::new(DomHost, shared_registry());
                if let Err(err) = loader.ensure_loaded(&charting_resources()).await {
                    logging::error!("releases: {err}");
                    return;
                }
                alias_create_popper();
                if let Err(err) = loader.ensure_loaded(&viewer_resources()).await {
                    logging::error!("releases: {err}");
                    return;
                }

                let config = WidgetConfig {
                    show_url_bar: false,
                    show_header: true,
                    show_heatmap: true,
                    heatmap_colors: HEATMAP_COLORS.iter().map(|c| c.to_string()).collect(),
                };
                let element: web_sys::Element = element.into();
                if let Err(err) = lifecycle.initialize(&element, &config) {
                    logging::error!("releases: {err}");
                }
            });
        });
    }

    {
        let lifecycle = leptos::__reexports::send_wrapper::SendWrapper::new(lifecycle.clone());
        on_cleanup(move || lifecycle.dismount());
    }

    view! {
        <div class="page releases-page">
            <style>{VIEWER_THEME_CSS}</style>
            <div node_ref=container id="releases-container" class="releases-container"></div>
        </div>
    }
}
