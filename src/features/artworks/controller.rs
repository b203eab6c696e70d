//! Artworks Table Controller
//!
//! Wires the paginated catalog fetch to table, selection and prompt state.
//! Every public method is one discrete event handler that runs to
//! completion; the only suspension point is the network future between
//! issuing a fetch and applying its completion.

use tracing::warn;

use crate::domain::artwork::{Artwork, ArtworkPage};
use crate::error::Result;
use crate::services::catalog::PageFetcher;
use crate::state::prompt_state::PromptState;
use crate::state::selection_state::SelectionState;
use crate::state::table_state::{FetchTicket, TableState};

/// Zero-based page event as emitted by paginator widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEvent {
    /// Zero-based page ordinal
    pub page: u32,
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Result committed to the table
    Applied,
    /// Ticket was superseded by a newer fetch; result discarded
    Stale,
    /// Fetch failed; the failure is recorded in the load state
    Failed,
}

/// Controller for the artworks table view.
///
/// Owns the data source and the three state objects the host renders from.
/// Selection is intentionally left untouched when the page changes, so
/// records selected on an earlier page remain selected while off-screen.
pub struct ArtworksController<F> {
    fetcher: F,
    table: TableState,
    selection: SelectionState,
    prompt: PromptState,
}

impl<F: PageFetcher> ArtworksController<F> {
    pub fn new(fetcher: F, page_size: u32) -> Self {
        Self {
            fetcher,
            table: TableState::new(page_size),
            selection: SelectionState::new(),
            prompt: PromptState::default(),
        }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    // ==================== Fetch lifecycle ====================

    /// Issue a fetch for a 1-based page. Rejects out-of-range pages
    /// without touching any state; otherwise marks the table busy and
    /// supersedes any outstanding fetch.
    pub fn issue_fetch(&mut self, page: u32) -> Result<FetchTicket> {
        self.table.validate_page(page)?;
        Ok(self.table.begin_fetch(page))
    }

    /// Apply a completed fetch. Completions whose ticket has been
    /// superseded are discarded, leaving the newer fetch in flight.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<ArtworkPage>,
    ) -> FetchOutcome {
        match outcome {
            Ok(page) => {
                if self.table.apply_page(ticket, page) {
                    FetchOutcome::Applied
                } else {
                    FetchOutcome::Stale
                }
            }
            Err(error) => {
                warn!("fetch for page {} failed: {}", ticket.page(), error);
                if self.table.apply_error(ticket, error.to_string()) {
                    FetchOutcome::Failed
                } else {
                    FetchOutcome::Stale
                }
            }
        }
    }

    /// Issue a fetch, await it, and apply the completion. Suits hosts that
    /// drive one fetch at a time; hosts that spawn overlapping fetches use
    /// [`Self::issue_fetch`] / [`Self::complete_fetch`] directly.
    pub async fn load_page(&mut self, page: u32) -> Result<FetchOutcome> {
        let ticket = self.issue_fetch(page)?;
        let outcome = self
            .fetcher
            .fetch_page(ticket.page(), self.table.page_size())
            .await;
        Ok(self.complete_fetch(ticket, outcome))
    }

    /// Initial mount: load the first page
    pub async fn open(&mut self) -> Result<FetchOutcome> {
        self.load_page(1).await
    }

    /// Refetch the current page (manual retry after a failure)
    pub async fn reload(&mut self) -> Result<FetchOutcome> {
        self.load_page(self.table.page_index()).await
    }

    // ==================== Paginator events ====================

    /// Handle a zero-based paginator event by fetching the corresponding
    /// 1-based page.
    pub async fn on_page_change(&mut self, event: PageEvent) -> Result<FetchOutcome> {
        self.load_page(event.page.saturating_add(1)).await
    }

    // ==================== Selection events ====================

    /// Framework-level selection-change event: replace the selection
    /// wholesale.
    pub fn on_selection_change(&mut self, records: Vec<Artwork>) {
        self.selection.set_selection(records);
    }

    /// Row checkbox event
    pub fn toggle_row(&mut self, record: &Artwork, selected: bool) {
        self.selection.toggle(record, selected);
    }

    /// Header checkbox event: set membership of every row of the current
    /// page at once.
    pub fn toggle_all(&mut self, selected: bool) {
        let rows = self.table.records().to_vec();
        self.selection.toggle_all(&rows, selected);
    }

    // ==================== Prompt events ====================

    /// Show the "select first N rows" prompt
    pub fn open_prompt(&mut self) {
        self.prompt.open();
    }

    pub fn set_prompt_input(&mut self, value: impl Into<String>) {
        self.prompt.set_input(value);
    }

    /// Dismiss the prompt with no selection change
    pub fn cancel_prompt(&mut self) {
        self.prompt.dismiss();
    }

    /// Confirm the prompt: parse the count, replace the selection with the
    /// first N rows of the currently loaded page, then hide the prompt.
    /// Invalid input leaves the prompt open and the selection untouched.
    pub fn confirm_prompt(&mut self) -> Result<()> {
        let count = self.prompt.parse_count()?;
        let picked = SelectionState::first_n(self.table.records(), count);
        self.selection.set_selection(picked);
        self.prompt.dismiss();
        Ok(())
    }
}
