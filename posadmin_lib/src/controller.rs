//! The search-driven list controller.
//!
//! Every list screen owns one controller. It holds the query state (page,
//! raw and debounced search text), fetches pages through a [`PageSource`],
//! and publishes snapshots over a watch channel. The rules it enforces are
//! the same for every screen:
//!
//! - typing only updates the raw text; a fetch happens once the text has
//!   been stable for [`DEBOUNCE_WINDOW`], and only the trailing value counts;
//! - a committed search change resets the page to 1, pagination never
//!   touches the search text;
//! - each outgoing fetch is tagged with a generation number, and a response
//!   from a superseded generation is dropped silently, so a slow page-4
//!   response can never overwrite an already-applied page-5 result;
//! - a failed fetch keeps the previous page of results visible and reports
//!   a recoverable [`ListError`], never a blank screen or a stuck spinner.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use posadmin_api::types::Page;

use crate::error::ListError;
use crate::source::PageSource;

/// Quiescence window before typed search text is acted upon.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// A one-shot user notification attached to a settled search.
///
/// Only fetches caused by a committed search change carry a notice;
/// pagination and refetches stay silent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListNotice {
    ResultsFound(i64),
    NoResults,
}

/// Everything a screen needs to render, published on every state change.
#[derive(Clone, Debug)]
pub struct ListSnapshot<T> {
    /// Search text as typed, for echoing in the input box.
    pub raw_search: String,
    /// The committed (debounced) search text the current result belongs to.
    pub search: String,
    /// Current page, reconciled against the server's `current_page`.
    pub page: i64,
    pub result: Page<T>,
    pub loading: bool,
    pub error: Option<ListError>,
    pub notice: Option<ListNotice>,
}

impl<T> ListSnapshot<T> {
    fn initial() -> Self {
        Self {
            raw_search: String::new(),
            search: String::new(),
            page: 1,
            result: Page::empty(),
            loading: false,
            error: None,
            notice: None,
        }
    }

    /// Display row number for the item at position `i` of the current page.
    pub fn row_number(&self, i: usize) -> i64 {
        self.result.row_number(i)
    }
}

/// Operations the presentation layer may invoke. Cheap to clone; the
/// controller task ends once every handle is dropped.
#[derive(Clone)]
pub struct ListHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl ListHandle {
    /// Records a keystroke. Never fetches directly; the debounce decides.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let _ = self.tx.send(Command::SearchInput(text.into()));
    }

    /// Navigates to `page`. The caller keeps `page` within `1..=last_page`;
    /// the server's reply is reconciled regardless.
    pub fn set_page(&self, page: i64) {
        let _ = self.tx.send(Command::SetPage(page));
    }

    /// Re-issues the fetch for the current page and search, without touching
    /// either. Called after a create/update/delete to resynchronize.
    pub fn refetch(&self) {
        let _ = self.tx.send(Command::Refetch);
    }
}

enum Command {
    SearchInput(String),
    SetPage(i64),
    Refetch,
}

/// Why a fetch was issued; decides page reset and notice behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FetchCause {
    Search,
    Pagination,
    Refetch,
}

struct FetchSettled<T> {
    generation: u64,
    cause: FetchCause,
    outcome: Result<Page<T>, posadmin_api::Error>,
}

/// The controller task. Constructed and detached via [`ListController::spawn`].
pub struct ListController<S: PageSource> {
    source: Arc<S>,
    commands: mpsc::UnboundedReceiver<Command>,
    snapshot: watch::Sender<ListSnapshot<S::Item>>,
    settled_tx: mpsc::UnboundedSender<FetchSettled<S::Item>>,
    settled_rx: mpsc::UnboundedReceiver<FetchSettled<S::Item>>,

    raw_search: String,
    effective_search: String,
    page: i64,
    debounce_deadline: Option<Instant>,
    /// Generation of the most recently issued fetch. A settle carrying any
    /// older generation is stale and gets discarded.
    generation: u64,
    result: Page<S::Item>,
    loading: bool,
    error: Option<ListError>,
    notice: Option<ListNotice>,
}

impl<S: PageSource> ListController<S> {
    /// Starts a controller for `source` and returns the operation handle
    /// plus the snapshot stream. No fetch is issued until the first
    /// operation; screens call `refetch()` on mount.
    pub fn spawn(source: S) -> (ListHandle, watch::Receiver<ListSnapshot<S::Item>>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (snap_tx, snap_rx) = watch::channel(ListSnapshot::initial());
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        let controller = ListController {
            source: Arc::new(source),
            commands: cmd_rx,
            snapshot: snap_tx,
            settled_tx,
            settled_rx,
            raw_search: String::new(),
            effective_search: String::new(),
            page: 1,
            debounce_deadline: None,
            generation: 0,
            result: Page::empty(),
            loading: false,
            error: None,
            notice: None,
        };
        tokio::spawn(controller.run());

        (ListHandle { tx: cmd_tx }, snap_rx)
    }

    async fn run(mut self) {
        loop {
            let deadline = self.debounce_deadline;
            tokio::select! {
                cmd = self.commands.recv() => match cmd {
                    Some(cmd) => self.on_command(cmd),
                    // Every handle dropped: the screen is gone.
                    None => break,
                },
                _ = sleep_until_some(deadline), if deadline.is_some() => {
                    self.on_debounce_expiry();
                }
                settled = self.settled_rx.recv() => {
                    if let Some(settled) = settled {
                        self.on_settled(settled);
                    }
                }
            }
        }
    }

    fn on_command(&mut self, cmd: Command) {
        match cmd {
            Command::SearchInput(text) => {
                // Identical input does not rearm the timer; the text is
                // already stable.
                if text != self.raw_search {
                    self.raw_search = text;
                    self.debounce_deadline = Some(Instant::now() + DEBOUNCE_WINDOW);
                    self.publish();
                }
            }
            Command::SetPage(page) => {
                self.page = page;
                self.issue_fetch(FetchCause::Pagination);
            }
            Command::Refetch => {
                self.issue_fetch(FetchCause::Refetch);
            }
        }
    }

    fn on_debounce_expiry(&mut self) {
        self.debounce_deadline = None;
        if self.raw_search != self.effective_search {
            self.effective_search = self.raw_search.clone();
            // A new search always starts from the first page.
            self.page = 1;
            self.issue_fetch(FetchCause::Search);
        }
    }

    fn issue_fetch(&mut self, cause: FetchCause) {
        self.generation += 1;
        let generation = self.generation;
        self.loading = true;
        self.error = None;
        self.notice = None;
        self.publish();

        let source = Arc::clone(&self.source);
        let settled_tx = self.settled_tx.clone();
        let page = self.page;
        let search = self.effective_search.clone();
        tokio::spawn(async move {
            let outcome = source.fetch_page(page, &search).await;
            let _ = settled_tx.send(FetchSettled {
                generation,
                cause,
                outcome,
            });
        });
    }

    fn on_settled(&mut self, settled: FetchSettled<S::Item>) {
        if settled.generation != self.generation {
            // A newer fetch was issued while this one was in flight. Drop it;
            // the loading flag tracks the newest request, which will settle
            // on its own.
            tracing::debug!(
                stale = settled.generation,
                latest = self.generation,
                "discarding stale list response"
            );
            return;
        }

        match settled.outcome {
            Ok(page) => {
                // The server's current_page is authoritative; it may have
                // clamped an out-of-range request after a delete.
                self.page = page.current_page;
                self.notice = match settled.cause {
                    FetchCause::Search => Some(if page.total == 0 {
                        ListNotice::NoResults
                    } else {
                        ListNotice::ResultsFound(page.total)
                    }),
                    FetchCause::Pagination | FetchCause::Refetch => None,
                };
                self.result = page;
                self.loading = false;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "list fetch failed");
                self.loading = false;
                self.error = Some(ListError::from(e));
                self.notice = None;
                // self.result is left as-is: the previous page stays visible.
            }
        }
        self.publish();
    }

    fn publish(&self) {
        self.snapshot.send_replace(ListSnapshot {
            raw_search: self.raw_search.clone(),
            search: self.effective_search.clone(),
            page: self.page,
            result: self.result.clone(),
            loading: self.loading,
            error: self.error.clone(),
            notice: self.notice,
        });
    }
}

async fn sleep_until_some(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
