//! The pagination widget as a mountable component
//!
//! Mounting spawns one count request and exposes its progress through a
//! `watch` channel. Rendering is always the pure [`render`] of the latest
//! observed [`FetchResult`], so observers re-render by waiting on
//! [`MountedPagination::changed`] and calling [`MountedPagination::render`].
//!
//! ```rust,ignore
//! let query = build_query(&settings.source)?;
//! let mut widget = Pagination::new(query, settings).mount(1);
//! assert!(widget.render().text().contains("Loading..."));
//! let view = widget.settled().await;
//! println!("{}", view.to_html());
//! ```

use crate::config::Settings;
use crate::count::{CountQuery, FetchResult, FETCH_FAILED_MESSAGE};
use crate::view::{render, View};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Unmounted widget: a count source plus settings
#[derive(Clone)]
pub struct Pagination {
    query: Arc<dyn CountQuery>,
    settings: Arc<Settings>,
}

impl Pagination {
    /// Create a widget over `query`
    pub fn new(query: Arc<dyn CountQuery>, settings: impl Into<Arc<Settings>>) -> Self {
        Self {
            query,
            settings: settings.into(),
        }
    }

    /// Settings this widget renders with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mount the widget for `page`, starting its single count request.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(&self, page: u32) -> MountedPagination {
        let (tx, rx) = watch::channel(FetchResult::Loading);
        let query = Arc::clone(&self.query);

        let task = tokio::spawn(async move {
            let outcome = query.count().await;
            if let Err(ref e) = outcome {
                if e.is_transport() {
                    warn!(collection = query.collection(), error = %e, "count request failed");
                } else {
                    debug!(collection = query.collection(), error = %e, "count response rejected");
                }
            }

            if tx.send(FetchResult::from_outcome(outcome)).is_err() {
                debug!(collection = query.collection(), "widget unmounted before count resolved");
            }
        });

        MountedPagination {
            page,
            settings: Arc::clone(&self.settings),
            state: rx,
            task,
        }
    }
}

impl std::fmt::Debug for Pagination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pagination")
            .field("collection", &self.query.collection())
            .field("settings", &self.settings)
            .finish()
    }
}

/// A mounted widget observing its count request
#[derive(Debug)]
pub struct MountedPagination {
    page: u32,
    settings: Arc<Settings>,
    state: watch::Receiver<FetchResult>,
    task: JoinHandle<()>,
}

impl MountedPagination {
    /// Page this widget was mounted for
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Latest observed fetch state
    pub fn state(&self) -> FetchResult {
        self.state.borrow().clone()
    }

    /// Render the latest observed state
    pub fn render(&self) -> View {
        render(&self.state.borrow(), self.page, &self.settings)
    }

    /// Wait for the next state change.
    ///
    /// Returns `false` once no further change can happen.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    /// Wait until the request settles and render the result.
    ///
    /// A fetch task that ends without publishing renders as a failure.
    pub async fn settled(&mut self) -> View {
        let settled = self
            .state
            .wait_for(FetchResult::is_settled)
            .await
            .map(|state| (*state).clone())
            .unwrap_or_else(|_| FetchResult::Error(FETCH_FAILED_MESSAGE.to_string()));
        render(&settled, self.page, &self.settings)
    }

    /// Tear the widget down, dropping any in-flight request
    pub fn unmount(self) {}
}

impl Drop for MountedPagination {
    fn drop(&mut self) {
        self.task.abort();
    }
}
