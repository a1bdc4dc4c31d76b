//! The supplemental-content fetcher.
//!
//! This module provides the [`ExtraFetcher`] type that issues one GET per
//! table row and streams the outcomes to an async consumer.
//!
//! # Lifecycle
//!
//! 1. **Creation**: [`ExtraFetcher::spawn`] resolves every row's `href`,
//!    builds the shared HTTP client, and spawns one background task that
//!    drives all requests with bounded concurrency. Requests are issued once,
//!    here, and never again for the lifetime of the fetcher.
//!
//! 2. **Outcome Reception**: Use [`recv`](ExtraFetcher::recv) to receive
//!    outcomes. Exactly one outcome arrives per row, in completion order.
//!
//! 3. **Completion**: When every request has resolved, the channel closes
//!    and `recv()` returns `None`. Dropping the fetcher earlier aborts the
//!    background task; outcomes that were in flight are discarded silently.

use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use rowboard_core::{FetchConfig, RowItem};

use crate::error::FetchError;
use crate::outcome::FetchOutcome;
use crate::response::ExtraResponse;

/// Default channel capacity for fetch outcomes.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Fetches supplemental content for a set of rows, once.
///
/// `ExtraFetcher` owns a background task that performs one GET per row
/// through a shared [`reqwest::Client`] and sends a [`FetchOutcome`] per row
/// through a tokio mpsc channel for consumption in async code.
///
/// # Examples
///
/// ```no_run
/// use rowboard_core::{FetchConfig, RowItem};
/// use rowboard_fetch::ExtraFetcher;
///
/// # async fn example() -> Result<(), rowboard_fetch::FetchError> {
/// let config = FetchConfig::default();
/// let items = vec![RowItem::new("A", "https://example.com/x")];
///
/// let mut fetcher = ExtraFetcher::spawn(&config, &items)?;
/// while let Some(outcome) = fetcher.recv().await {
///     println!("row {} resolved", outcome.index);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ExtraFetcher {
    /// Outcome receiver for async consumption.
    outcome_rx: mpsc::Receiver<FetchOutcome>,

    /// Handle to the background fetch task.
    ///
    /// Aborted on drop so no request outlives the consumer.
    task: Option<JoinHandle<()>>,

    /// Number of rows this fetcher was spawned for.
    row_count: usize,
}

impl std::fmt::Debug for ExtraFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtraFetcher")
            .field("row_count", &self.row_count)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl ExtraFetcher {
    /// Spawns a fetcher for the given rows.
    ///
    /// This method:
    /// 1. Parses the configured base URL (if any)
    /// 2. Resolves every row's `href` against it
    /// 3. Builds the shared HTTP client
    /// 4. Spawns the background task driving all requests
    ///
    /// Rows whose `href` cannot be resolved to a URL still produce an
    /// outcome, with no content; resolution failures follow the same
    /// silent policy as request failures.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if `config.base_url` is set
    /// but unparseable, or [`FetchError::Client`] if the HTTP client cannot
    /// be built. Per-row failures are never errors.
    pub fn spawn(config: &FetchConfig, items: &[RowItem]) -> Result<Self, FetchError> {
        let base = match config.base_url.as_deref() {
            Some(raw) => {
                Some(Url::parse(raw).map_err(|e| FetchError::invalid_base_url(raw, e))?)
            }
            None => None,
        };

        let client = Client::builder()
            .user_agent(concat!("rowboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let targets: Vec<(usize, Option<Url>)> = items
            .iter()
            .enumerate()
            .map(|(index, item)| (index, resolve_href(base.as_ref(), &item.href)))
            .collect();

        let row_count = targets.len();
        let concurrency = config.concurrency.max(1);
        let (outcome_tx, outcome_rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);

        tracing::debug!(rows = row_count, concurrency, "Starting supplemental fetch");

        let task = tokio::spawn(run_fetch_loop(client, targets, concurrency, outcome_tx));

        Ok(Self {
            outcome_rx,
            task: Some(task),
            row_count,
        })
    }

    /// Receives the next fetch outcome asynchronously.
    ///
    /// Returns `None` once every row has resolved and all outcomes have
    /// been consumed.
    pub async fn recv(&mut self) -> Option<FetchOutcome> {
        self.outcome_rx.recv().await
    }

    /// Returns the number of rows this fetcher was spawned for.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns `true` if requests are still in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ExtraFetcher {
    fn drop(&mut self) {
        // No cancellation contract for in-flight requests: abort the task
        // and let late responses disappear with it.
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Drives all row requests with bounded concurrency.
///
/// Sends one outcome per row; stops early only if the consumer goes away.
async fn run_fetch_loop(
    client: Client,
    targets: Vec<(usize, Option<Url>)>,
    concurrency: usize,
    outcome_tx: mpsc::Sender<FetchOutcome>,
) {
    let client = &client;
    let mut outcomes = futures_util::stream::iter(targets)
        .map(|(index, url)| async move {
            match url {
                Some(url) => FetchOutcome {
                    index,
                    extra: fetch_extra(client, url).await,
                },
                None => FetchOutcome::empty(index),
            }
        })
        .buffer_unordered(concurrency);

    while let Some(outcome) = outcomes.next().await {
        tracing::trace!(index = outcome.index, hit = outcome.has_content(), "Fetch resolved");
        if outcome_tx.send(outcome).await.is_err() {
            tracing::debug!("Outcome channel closed, stopping fetcher");
            break;
        }
    }
}

/// Performs one GET and extracts the supplemental content.
///
/// Every failure mode returns `None`; the distinction is visible only in
/// debug logs.
async fn fetch_extra(client: &Client, url: Url) -> Option<String> {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(error) => {
            tracing::debug!(url = %url, error = %error, "Supplemental fetch failed");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!(url = %url, status = %response.status(), "Supplemental fetch non-success");
        return None;
    }

    match response.bytes().await {
        Ok(body) => ExtraResponse::decode(&body),
        Err(error) => {
            tracing::debug!(url = %url, error = %error, "Failed to read supplemental body");
            None
        }
    }
}

/// Resolves a row's `href` to a URL.
///
/// Absolute locators stand alone; relative locators require a base. An
/// unresolvable locator yields `None`, which downstream becomes an empty
/// outcome for the row.
fn resolve_href(base: Option<&Url>, href: &str) -> Option<Url> {
    let resolved = match base {
        Some(base) => base.join(href).ok(),
        None => Url::parse(href).ok(),
    };

    if resolved.is_none() {
        tracing::debug!(href, "Unresolvable href, row will have no supplemental content");
    }

    resolved
}
