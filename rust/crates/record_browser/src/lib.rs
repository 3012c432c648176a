//! Paginated record browser.
//!
//! This crate provides:
//! - RecordBrowser: fetch a collection once, page through it client-side,
//!   and dispatch per-row view/edit/delete actions
//! - Record, RecordSource, Navigator, Confirm: the seams a host (web page,
//!   terminal) plugs its data source, router and prompt into
//!
//! The browser owns no I/O of its own. Fetching and deleting go through a
//! `RecordSource`, navigation through a `Navigator`, and destructive actions
//! are gated by a `Confirm`.

mod routes;

pub use routes::{RowAction, RowRoutes};

use std::fmt::Display;
use std::num::NonZeroUsize;

use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Prompt shown before a row is deleted.
pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this record?";

/// A row with a stable identity.
///
/// Identifiers must be unique within one collection.
pub trait Record {
    type Id: Clone + PartialEq + Display + std::fmt::Debug;

    fn record_id(&self) -> Self::Id;
}

/// Remote backing store for a browser.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    type Record: Record;
    type Error: std::error::Error + 'static;

    /// Fetch the whole collection.
    async fn fetch_all(&self) -> Result<Vec<Self::Record>, Self::Error>;

    /// Delete one record remotely.
    async fn delete(&self, id: &<Self::Record as Record>::Id) -> Result<(), Self::Error>;
}

/// Page-to-page transitions addressed by URL path.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Yes/no gate in front of destructive actions.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Errors from row actions.
#[derive(Error, Debug)]
pub enum BrowserError<E: std::error::Error + 'static> {
    #[error("records are not loaded")]
    NotReady,

    #[error("no record with id {0}")]
    UnknownRecord(String),

    #[error("delete of {0} is already in progress")]
    DeleteInFlight(String),

    #[error("remote delete failed: {0}")]
    Remote(#[source] E),
}

/// Which view the host should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// Deleted remotely and removed from the collection.
    Deleted,
}

/// Client-side paginated view over a collection fetched once.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBrowser<R: Record> {
    state: LoadState,
    records: Vec<R>,
    page: NonZeroUsize,
    routes: RowRoutes,
    delete_prompt: String,
    fetch_started: bool,
    deleting: Vec<R::Id>,
}

impl<R: Record> RecordBrowser<R> {
    /// Create a browser in the `Loading` state on page 1.
    pub fn new(routes: RowRoutes) -> Self {
        Self {
            state: LoadState::Loading,
            records: Vec::new(),
            page: NonZeroUsize::MIN,
            routes,
            delete_prompt: DEFAULT_DELETE_PROMPT.to_string(),
            fetch_started: false,
            deleting: Vec::new(),
        }
    }

    /// Replace the confirmation prompt used by `delete_row`.
    pub fn with_delete_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.delete_prompt = prompt.into();
        self
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Active 1-based page index.
    pub fn page(&self) -> NonZeroUsize {
        self.page
    }

    /// The whole loaded collection (empty unless `Ready`).
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn routes(&self) -> &RowRoutes {
        &self.routes
    }

    pub fn delete_prompt(&self) -> &str {
        &self.delete_prompt
    }

    /// Fetch the collection from `source`.
    ///
    /// Only the first call fetches; later calls return immediately.
    pub async fn initialize<S>(&mut self, source: &S)
    where
        S: RecordSource<Record = R>,
    {
        if !self.begin_fetch() {
            debug!("record browser already initialized, skipping fetch");
            return;
        }
        let result = source.fetch_all().await;
        self.finish_fetch(result);
    }

    /// Claim the single fetch for this browser.
    ///
    /// Returns `true` the first time only. Hosts that drive the fetch
    /// themselves call this, run the request, then `finish_fetch`.
    pub fn begin_fetch(&mut self) -> bool {
        !std::mem::replace(&mut self.fetch_started, true)
    }

    /// Apply the outcome of the fetch.
    ///
    /// Moves `Loading` to `Ready` or `Failed`. Outcomes arriving in any
    /// other state are ignored.
    pub fn finish_fetch<E: Display>(&mut self, result: Result<Vec<R>, E>) {
        self.fetch_started = true;
        if self.state != LoadState::Loading {
            warn!(state = ?self.state, "ignoring fetch result after load completed");
            return;
        }

        match result {
            Ok(records) => {
                debug!(count = records.len(), "records loaded");
                self.records = records;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                error!(error = %e, "failed to fetch records");
                self.records.clear();
                self.state = LoadState::Failed;
            }
        }
    }

    /// Set the active page. Out-of-range pages yield an empty window.
    pub fn select_page(&mut self, page: NonZeroUsize) {
        self.page = page;
    }

    /// Number of pages: `ceil(len / PAGE_SIZE)`, 0 when empty.
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE)
    }

    /// Records on the active page.
    pub fn window(&self) -> &[R] {
        let start = (self.page.get() - 1).saturating_mul(PAGE_SIZE);
        if start >= self.records.len() {
            return &[];
        }
        let end = start.saturating_add(PAGE_SIZE).min(self.records.len());
        &self.records[start..end]
    }

    /// Navigate to the detail view of a row.
    pub fn view_row(&self, navigator: &mut impl Navigator, id: &R::Id) {
        navigator.navigate(&self.routes.path(RowAction::View, id));
    }

    /// Navigate to the edit view of a row.
    pub fn edit_row(&self, navigator: &mut impl Navigator, id: &R::Id) {
        navigator.navigate(&self.routes.path(RowAction::Edit, id));
    }

    /// Delete a row after confirmation.
    ///
    /// The record is removed locally only once the remote delete succeeds.
    pub async fn delete_row<S>(
        &mut self,
        confirm: &mut impl Confirm,
        source: &S,
        id: &R::Id,
    ) -> Result<DeleteOutcome, BrowserError<S::Error>>
    where
        S: RecordSource<Record = R>,
    {
        let Some(id) = self.begin_delete::<S::Error>(confirm, id)? else {
            return Ok(DeleteOutcome::Cancelled);
        };

        let result = source.delete(&id).await;
        self.finish_delete(&id, result.is_ok());
        result.map_err(|e| {
            error!(%id, error = %e, "remote delete failed");
            BrowserError::Remote(e)
        })?;

        info!(%id, remaining = self.records.len(), "record deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Check and confirm a delete, then mark it in flight.
    ///
    /// Returns the id the host must delete remotely, or `None` when the
    /// user declined. Hosts that run the request themselves call this, send
    /// the delete, then `finish_delete`.
    pub fn begin_delete<E: std::error::Error + 'static>(
        &mut self,
        confirm: &mut impl Confirm,
        id: &R::Id,
    ) -> Result<Option<R::Id>, BrowserError<E>> {
        if !self.is_ready() {
            return Err(BrowserError::NotReady);
        }
        if self.position(id).is_none() {
            return Err(BrowserError::UnknownRecord(id.to_string()));
        }
        if self.is_deleting(id) {
            return Err(BrowserError::DeleteInFlight(id.to_string()));
        }
        if !confirm.confirm(&self.delete_prompt) {
            debug!(%id, "delete cancelled");
            return Ok(None);
        }

        self.deleting.push(id.clone());
        Ok(Some(id.clone()))
    }

    /// Settle a delete started with `begin_delete`.
    ///
    /// Removes the record when the remote delete succeeded; otherwise the
    /// collection is left as it was.
    pub fn finish_delete(&mut self, id: &R::Id, deleted: bool) -> Option<R> {
        self.deleting.retain(|pending| pending != id);
        if deleted {
            self.remove_record(id)
        } else {
            None
        }
    }

    /// Whether a delete for `id` is awaiting the remote store.
    pub fn is_deleting(&self, id: &R::Id) -> bool {
        self.deleting.contains(id)
    }

    /// Remove a record by identity, keeping the active page in range.
    pub fn remove_record(&mut self, id: &R::Id) -> Option<R> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);

        let last_page = NonZeroUsize::new(self.page_count()).unwrap_or(NonZeroUsize::MIN);
        if self.page > last_page {
            self.page = last_page;
        }
        Some(removed)
    }

    /// Index of a record in the collection.
    pub fn position(&self, id: &R::Id) -> Option<usize> {
        self.records.iter().position(|r| r.record_id() == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
    }

    impl Record for Row {
        type Id = u32;

        fn record_id(&self) -> u32 {
            self.id
        }
    }

    #[derive(Debug, Error)]
    #[error("{0}")]
    struct FakeError(String);

    #[derive(Default)]
    struct FakeSource {
        rows: Vec<Row>,
        fail_fetch: bool,
        fail_delete: bool,
        fetches: Cell<usize>,
        deleted: RefCell<Vec<u32>>,
    }

    impl FakeSource {
        fn with_rows(n: u32) -> Self {
            Self {
                rows: (0..n).map(|id| Row { id }).collect(),
                ..Default::default()
            }
        }
    }

    impl RecordSource for FakeSource {
        type Record = Row;
        type Error = FakeError;

        async fn fetch_all(&self) -> Result<Vec<Row>, FakeError> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail_fetch {
                return Err(FakeError("HTTP 500".to_string()));
            }
            Ok(self.rows.clone())
        }

        async fn delete(&self, id: &u32) -> Result<(), FakeError> {
            if self.fail_delete {
                return Err(FakeError("HTTP 404".to_string()));
            }
            self.deleted.borrow_mut().push(*id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        paths: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str) {
            self.paths.push(path.to_string());
        }
    }

    struct Answer {
        yes: bool,
        asked: Vec<String>,
    }

    impl Answer {
        fn yes() -> Self {
            Self {
                yes: true,
                asked: Vec::new(),
            }
        }

        fn no() -> Self {
            Self {
                yes: false,
                asked: Vec::new(),
            }
        }
    }

    impl Confirm for Answer {
        fn confirm(&mut self, prompt: &str) -> bool {
            self.asked.push(prompt.to_string());
            self.yes
        }
    }

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn routes() -> RowRoutes {
        RowRoutes::new("/student-view", "/student-edit")
    }

    async fn loaded(n: u32) -> RecordBrowser<Row> {
        let mut browser = RecordBrowser::new(routes());
        browser.initialize(&FakeSource::with_rows(n)).await;
        browser
    }

    #[test]
    fn test_new_browser_is_loading_and_empty() {
        let browser: RecordBrowser<Row> = RecordBrowser::new(routes());

        assert_eq!(browser.state(), LoadState::Loading);
        assert_eq!(browser.page().get(), 1);
        assert_eq!(browser.page_count(), 0);
        assert!(browser.window().is_empty());
    }

    #[tokio::test]
    async fn test_page_count_matches_ceiling() {
        for n in [0u32, 1, 9, 10, 11, 20, 25, 101] {
            let browser = loaded(n).await;
            assert_eq!(browser.page_count(), (n as usize).div_ceil(10), "n = {n}");
        }
    }

    #[tokio::test]
    async fn test_window_never_exceeds_page_size() {
        let mut browser = loaded(37).await;

        for p in 1..=6 {
            browser.select_page(page(p));
            assert!(browser.window().len() <= PAGE_SIZE);
        }
    }

    #[tokio::test]
    async fn test_window_slices_first_and_last_page() {
        let mut browser = loaded(25).await;

        assert_eq!(ids(browser.window()), (0..10).collect::<Vec<_>>());

        browser.select_page(page(3));
        assert_eq!(ids(browser.window()), (20..25).collect::<Vec<_>>());
        assert_eq!(browser.window(), browser.window());
    }

    #[tokio::test]
    async fn test_out_of_range_page_yields_empty_window() {
        let mut browser = loaded(25).await;

        browser.select_page(page(4));
        assert!(browser.window().is_empty());

        browser.select_page(page(usize::MAX));
        assert!(browser.window().is_empty());
    }

    #[tokio::test]
    async fn test_failing_fetch_ends_in_failed_state() {
        let source = FakeSource {
            fail_fetch: true,
            ..FakeSource::with_rows(5)
        };
        let mut browser = RecordBrowser::new(routes());

        browser.initialize(&source).await;

        assert_eq!(browser.state(), LoadState::Failed);
        assert!(browser.window().is_empty());
        assert_eq!(browser.page_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_fetch_is_ready() {
        let browser = loaded(0).await;

        assert_eq!(browser.state(), LoadState::Ready);
        assert_eq!(browser.page_count(), 0);
        assert!(browser.window().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_fetches_once() {
        let source = FakeSource::with_rows(3);
        let mut browser = RecordBrowser::new(routes());

        browser.initialize(&source).await;
        browser.initialize(&source).await;

        assert_eq!(source.fetches.get(), 1);
        assert_eq!(browser.records().len(), 3);
    }

    #[test]
    fn test_late_fetch_result_is_ignored() {
        let mut browser: RecordBrowser<Row> = RecordBrowser::new(routes());

        browser.finish_fetch::<FakeError>(Ok(vec![Row { id: 1 }]));
        browser.finish_fetch(Err(FakeError("late".to_string())));

        assert_eq!(browser.state(), LoadState::Ready);
        assert_eq!(browser.records().len(), 1);
    }

    #[test]
    fn test_begin_fetch_claims_once() {
        let mut browser: RecordBrowser<Row> = RecordBrowser::new(routes());

        assert!(browser.begin_fetch());
        assert!(!browser.begin_fetch());
    }

    #[tokio::test]
    async fn test_view_and_edit_navigate_once_with_id() {
        let browser = loaded(3).await;
        let mut nav = RecordingNavigator::default();

        browser.view_row(&mut nav, &2);
        assert_eq!(nav.paths, vec!["/student-view/2"]);

        browser.edit_row(&mut nav, &2);
        assert_eq!(nav.paths, vec!["/student-view/2", "/student-edit/2"]);
        assert_eq!(browser.records().len(), 3);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let source = FakeSource::with_rows(3);
        let mut browser = RecordBrowser::new(routes());
        browser.initialize(&source).await;
        let mut answer = Answer::no();

        let outcome = browser.delete_row(&mut answer, &source, &1).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(answer.asked, vec![DEFAULT_DELETE_PROMPT]);
        assert!(source.deleted.borrow().is_empty());
        assert_eq!(ids(browser.records()), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_by_identity() {
        let source = FakeSource::with_rows(11);
        let mut browser = RecordBrowser::new(routes());
        browser.initialize(&source).await;
        browser.select_page(page(2));

        let outcome = browser
            .delete_row(&mut Answer::yes(), &source, &10)
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(*source.deleted.borrow(), vec![10]);
        assert_eq!(browser.position(&10), None);
        assert_eq!(browser.page_count(), 1);
        // page 2 no longer exists
        assert_eq!(browser.page().get(), 1);
        assert_eq!(browser.window().len(), 10);
    }

    #[tokio::test]
    async fn test_deleting_last_record_returns_to_first_page() {
        let source = FakeSource::with_rows(1);
        let mut browser = RecordBrowser::new(routes());
        browser.initialize(&source).await;

        browser
            .delete_row(&mut Answer::yes(), &source, &0)
            .await
            .unwrap();

        assert_eq!(browser.page_count(), 0);
        assert_eq!(browser.page().get(), 1);
        assert!(browser.window().is_empty());
    }

    #[tokio::test]
    async fn test_failed_remote_delete_keeps_collection() {
        let source = FakeSource {
            fail_delete: true,
            ..FakeSource::with_rows(4)
        };
        let mut browser = RecordBrowser::new(routes());
        browser.initialize(&source).await;

        let err = browser
            .delete_row(&mut Answer::yes(), &source, &2)
            .await
            .unwrap_err();

        assert!(matches!(err, BrowserError::Remote(_)));
        assert_eq!(err.to_string(), "remote delete failed: HTTP 404");
        assert_eq!(browser.records().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_of_unknown_row_is_rejected_before_prompt() {
        let source = FakeSource::with_rows(2);
        let mut browser = RecordBrowser::new(routes());
        browser.initialize(&source).await;
        let mut answer = Answer::yes();

        let err = browser.delete_row(&mut answer, &source, &99).await.unwrap_err();

        assert!(matches!(err, BrowserError::UnknownRecord(ref id) if id == "99"));
        assert!(answer.asked.is_empty());
    }

    #[tokio::test]
    async fn test_delete_before_load_is_rejected() {
        let source = FakeSource::with_rows(2);
        let mut browser: RecordBrowser<Row> = RecordBrowser::new(routes());

        let err = browser
            .delete_row(&mut Answer::yes(), &source, &0)
            .await
            .unwrap_err();

        assert!(matches!(err, BrowserError::NotReady));
    }

    #[tokio::test]
    async fn test_split_delete_refuses_second_request_while_in_flight() {
        let mut browser = loaded(12).await;
        browser.select_page(page(2));
        let mut answer = Answer::yes();

        let claimed = browser
            .begin_delete::<FakeError>(&mut answer, &11)
            .unwrap();
        assert_eq!(claimed, Some(11));
        assert!(browser.is_deleting(&11));

        let err = browser
            .begin_delete::<FakeError>(&mut answer, &11)
            .unwrap_err();
        assert!(matches!(err, BrowserError::DeleteInFlight(ref id) if id == "11"));
        assert_eq!(answer.asked.len(), 1);
        assert_eq!(browser.records().len(), 12);

        let removed = browser.finish_delete(&11, true);
        assert_eq!(removed, Some(Row { id: 11 }));
        assert!(!browser.is_deleting(&11));
        assert_eq!(browser.page().get(), 2);
        assert_eq!(ids(browser.window()), vec![10]);
    }

    #[tokio::test]
    async fn test_split_delete_failure_releases_the_row() {
        let mut browser = loaded(3).await;

        browser
            .begin_delete::<FakeError>(&mut Answer::yes(), &1)
            .unwrap();
        assert_eq!(browser.finish_delete(&1, false), None);

        assert!(!browser.is_deleting(&1));
        assert_eq!(ids(browser.records()), vec![0, 1, 2]);
        let again = browser.begin_delete::<FakeError>(&mut Answer::yes(), &1);
        assert_eq!(again.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_split_delete_declined_claims_nothing() {
        let mut browser = loaded(3).await;

        let claimed = browser
            .begin_delete::<FakeError>(&mut Answer::no(), &2)
            .unwrap();

        assert_eq!(claimed, None);
        assert!(!browser.is_deleting(&2));
    }

    #[tokio::test]
    async fn test_custom_delete_prompt() {
        let source = FakeSource::with_rows(1);
        let mut browser = RecordBrowser::new(routes()).with_delete_prompt("Delete student?");
        browser.initialize(&source).await;
        let mut answer = Answer::no();

        browser.delete_row(&mut answer, &source, &0).await.unwrap();

        assert_eq!(answer.asked, vec!["Delete student?"]);
    }
}
