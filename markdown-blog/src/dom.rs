//! Browser-side adapters: HTTP fetching and the reactive content hook.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::content::{ContentDocument, ContentFetcher, FetchError, TextFetcher};

/// [`TextFetcher`] backed by the browser's fetch API.
pub struct HttpTextFetcher;

impl TextFetcher for HttpTextFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|err| FetchError::Network(format!("{err:?}")))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|err| FetchError::Network(format!("{err:?}")))?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        let body = response
            .text()
            .map_err(|err| FetchError::Network(format!("{err:?}")))?;
        let text = JsFuture::from(body)
            .await
            .map_err(|err| FetchError::Network(format!("{err:?}")))?;
        text.as_string()
            .ok_or_else(|| FetchError::Network("response body was not text".into()))
    }
}

/// Fetch Markdown for a reactive identifier and expose the document as a
/// signal.
///
/// Re-runs whenever `identifier` changes; the fetcher's generation tagging
/// guarantees a superseded request can never overwrite the newer one.
pub fn use_markdown_content(
    content_root: impl Into<String>,
    identifier: impl Fn() -> Option<String> + 'static,
) -> ReadSignal<ContentDocument> {
    let (document, set_document) = signal(ContentDocument::default());
    let fetcher = Rc::new(ContentFetcher::new(HttpTextFetcher, content_root));
    fetcher.subscribe(move |doc| set_document.set(doc.clone()));

    Effect::new(move |_| {
        let id = identifier();
        let fetcher = Rc::clone(&fetcher);
        spawn_local(async move {
            fetcher.fetch(id.as_deref()).await;
        });
    });

    document
}
