//! Content fetching for Markdown pages.
//!
//! A [`ContentFetcher`] owns one [`ContentDocument`] and drives it through
//! `Idle -> Loading -> Ready | Failed` as content is requested. Rendering is
//! reactive to these transitions, so results are delivered through the
//! subscription contract rather than a return value.
//!
//! Requests are tagged with a generation counter: when a new identifier is
//! requested before the previous fetch settles, the stale completion is
//! discarded instead of overwriting the newer state.

use std::cell::{Cell, RefCell};

use thiserror::Error;

/// Lifecycle state of a [`ContentDocument`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentState {
    /// No content has been requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The fetch succeeded; `raw_text` is populated.
    Ready,
    /// The fetch failed or the identifier was absent.
    Failed,
}

/// One page's worth of fetched content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentDocument {
    /// The route slug the content was requested for.
    pub identifier: Option<String>,
    /// The fetched body; present only in [`ContentState::Ready`].
    pub raw_text: Option<String>,
    /// Current lifecycle state.
    pub state: ContentState,
}

/// Why a fetch failed. Pages only ever surface the `Failed` state; the
/// variant exists for logging at the page boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
}

/// Retrieves raw text for a URL. Implemented by the wasm HTTP fetcher and by
/// test doubles.
pub trait TextFetcher {
    /// Fetch the body at `url` as text.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

type Subscriber = Box<dyn Fn(&ContentDocument)>;

/// Fetches Markdown content for route slugs and notifies subscribers on
/// every state transition.
///
/// An identifier maps deterministically to `<content_root>/<identifier>.md`.
/// No retry, no caching: each call issues at most one request.
pub struct ContentFetcher<F> {
    fetcher: F,
    content_root: String,
    generation: Cell<u64>,
    document: RefCell<ContentDocument>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl<F: TextFetcher> ContentFetcher<F> {
    /// Create a fetcher resolving identifiers under `content_root`.
    pub fn new(fetcher: F, content_root: impl Into<String>) -> Self {
        Self {
            fetcher,
            content_root: content_root.into(),
            generation: Cell::new(0),
            document: RefCell::new(ContentDocument::default()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the current document.
    pub fn document(&self) -> ContentDocument {
        self.document.borrow().clone()
    }

    /// Register a callback invoked after every state transition.
    pub fn subscribe(&self, subscriber: impl Fn(&ContentDocument) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    fn location_for(&self, identifier: &str) -> String {
        format!(
            "{}/{}.md",
            self.content_root.trim_end_matches('/'),
            identifier
        )
    }

    fn transition(&self, document: ContentDocument) {
        *self.document.borrow_mut() = document.clone();
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&document);
        }
    }

    /// Request content for `identifier`.
    ///
    /// `None` transitions directly to `Failed` without issuing a request.
    /// Otherwise the document moves to `Loading` immediately and settles in
    /// exactly one of `Ready` or `Failed`; a completion that arrives after a
    /// newer request superseded this one is ignored.
    pub async fn fetch(&self, identifier: Option<&str>) {
        // Any new request, including an absent identifier, supersedes what
        // is currently in flight.
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let Some(identifier) = identifier else {
            self.transition(ContentDocument {
                identifier: None,
                raw_text: None,
                state: ContentState::Failed,
            });
            return;
        };

        self.transition(ContentDocument {
            identifier: Some(identifier.to_string()),
            raw_text: None,
            state: ContentState::Loading,
        });

        let url = self.location_for(identifier);
        let result = self.fetcher.fetch_text(&url).await;

        if self.generation.get() != generation {
            // A newer identifier took over while we were suspended.
            return;
        }

        match result {
            Ok(text) => self.transition(ContentDocument {
                identifier: Some(identifier.to_string()),
                raw_text: Some(text),
                state: ContentState::Ready,
            }),
            Err(_) => self.transition(ContentDocument {
                identifier: Some(identifier.to_string()),
                raw_text: None,
                state: ContentState::Failed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;

    /// Answers from a fixed URL -> result table, recording every call.
    #[derive(Default)]
    struct MapFetcher {
        calls: RefCell<Vec<String>>,
        responses: RefCell<HashMap<String, Result<String, FetchError>>>,
    }

    impl MapFetcher {
        fn respond(self, url: &str, result: Result<String, FetchError>) -> Self {
            self.responses.borrow_mut().insert(url.into(), result);
            self
        }
    }

    impl TextFetcher for MapFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
            self.calls.borrow_mut().push(url.to_string());
            self.responses
                .borrow_mut()
                .remove(url)
                .unwrap_or_else(|| Err(FetchError::Network("no response configured".into())))
        }
    }

    /// Completes only when the test resolves the matching channel.
    #[derive(Default)]
    struct PendingFetcher {
        pending: RefCell<HashMap<String, oneshot::Receiver<Result<String, FetchError>>>>,
    }

    impl PendingFetcher {
        fn expect(&self, url: &str) -> oneshot::Sender<Result<String, FetchError>> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().insert(url.into(), rx);
            tx
        }
    }

    impl TextFetcher for PendingFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
            let rx = self
                .pending
                .borrow_mut()
                .remove(url)
                .unwrap_or_else(|| panic!("unexpected fetch for {url}"));
            rx.await
                .unwrap_or_else(|_| Err(FetchError::Network("sender dropped".into())))
        }
    }

    #[test]
    fn success_settles_in_ready_with_body() {
        let fetcher = ContentFetcher::new(
            MapFetcher::default().respond("/blog/hello.md", Ok("# Hello".into())),
            "/blog",
        );
        block_on(fetcher.fetch(Some("hello")));

        let doc = fetcher.document();
        assert_eq!(doc.state, ContentState::Ready);
        assert_eq!(doc.raw_text.as_deref(), Some("# Hello"));
        assert_eq!(doc.identifier.as_deref(), Some("hello"));
    }

    #[test]
    fn error_settles_in_failed_without_body() {
        let fetcher = ContentFetcher::new(
            MapFetcher::default().respond("/blog/gone.md", Err(FetchError::Status(404))),
            "/blog",
        );
        block_on(fetcher.fetch(Some("gone")));

        let doc = fetcher.document();
        assert_eq!(doc.state, ContentState::Failed);
        assert_eq!(doc.raw_text, None);
    }

    #[test]
    fn absent_identifier_fails_without_any_request() {
        let fetcher = ContentFetcher::new(MapFetcher::default(), "/blog");
        block_on(fetcher.fetch(None));

        assert_eq!(fetcher.document().state, ContentState::Failed);
        assert!(fetcher.fetcher.calls.borrow().is_empty());
    }

    #[test]
    fn identifier_maps_to_content_root_location() {
        let fetcher = ContentFetcher::new(
            MapFetcher::default().respond("/blog/post-1.md", Ok("body".into())),
            "/blog/",
        );
        block_on(fetcher.fetch(Some("post-1")));
        assert_eq!(fetcher.fetcher.calls.borrow().as_slice(), ["/blog/post-1.md"]);
    }

    #[test]
    fn subscribers_observe_loading_then_terminal_state() {
        let fetcher = ContentFetcher::new(
            MapFetcher::default().respond("/blog/a.md", Ok("A".into())),
            "/blog",
        );
        let seen: Rc<RefCell<Vec<ContentState>>> = Rc::default();
        let sink = seen.clone();
        fetcher.subscribe(move |doc| sink.borrow_mut().push(doc.state));

        block_on(fetcher.fetch(Some("a")));
        assert_eq!(
            seen.borrow().as_slice(),
            [ContentState::Loading, ContentState::Ready]
        );
    }

    #[test]
    fn stale_completion_never_overwrites_the_newer_request() {
        let fetcher = Rc::new(ContentFetcher::new(PendingFetcher::default(), "/blog"));
        let resolve_a = fetcher.fetcher.expect("/blog/a.md");
        let resolve_b = fetcher.fetcher.expect("/blog/b.md");

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let f = fetcher.clone();
        spawner
            .spawn_local(async move { f.fetch(Some("a")).await })
            .unwrap();
        pool.run_until_stalled();

        let f = fetcher.clone();
        spawner
            .spawn_local(async move { f.fetch(Some("b")).await })
            .unwrap();
        pool.run_until_stalled();

        // "a" resolves late; its result must be discarded.
        resolve_a.send(Ok("A".into())).unwrap();
        pool.run_until_stalled();

        let doc = fetcher.document();
        assert_eq!(doc.state, ContentState::Loading);
        assert_eq!(doc.identifier.as_deref(), Some("b"));
        assert_eq!(doc.raw_text, None);

        resolve_b.send(Ok("B".into())).unwrap();
        pool.run_until_stalled();

        let doc = fetcher.document();
        assert_eq!(doc.state, ContentState::Ready);
        assert_eq!(doc.identifier.as_deref(), Some("b"));
        assert_eq!(doc.raw_text.as_deref(), Some("B"));
    }

    #[test]
    fn rerequesting_discards_prior_text() {
        let fetcher = Rc::new(ContentFetcher::new(PendingFetcher::default(), "/blog"));
        let resolve_a = fetcher.fetcher.expect("/blog/a.md");
        let _resolve_b = fetcher.fetcher.expect("/blog/b.md");

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let f = fetcher.clone();
        spawner
            .spawn_local(async move { f.fetch(Some("a")).await })
            .unwrap();
        resolve_a.send(Ok("A".into())).unwrap();
        pool.run_until_stalled();
        assert_eq!(fetcher.document().state, ContentState::Ready);

        let f = fetcher.clone();
        spawner
            .spawn_local(async move { f.fetch(Some("b")).await })
            .unwrap();
        pool.run_until_stalled();

        let doc = fetcher.document();
        assert_eq!(doc.state, ContentState::Loading);
        assert_eq!(doc.raw_text, None);
    }
}
