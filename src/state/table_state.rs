//! Table State
//!
//! Pagination and loading state for the artwork table, including the
//! fetch-epoch guard that discards out-of-order responses.

use std::sync::Arc;

use tracing::debug;

use crate::domain::artwork::{Artwork, ArtworkPage};
use crate::error::{Error, Result};

/// Loading state of the table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TableLoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(Arc<str>),
}

impl TableLoadState {
    /// Check if a fetch is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if a page has been applied
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Get the failure message, if the last fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued fetch.
///
/// A completion must present its ticket back to the state; tickets from
/// superseded fetches are discarded, which is what makes rapid paging safe
/// ("last request wins").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    page: u32,
}

impl FetchTicket {
    /// The 1-based page index this fetch targets
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// State for the remotely paginated table.
///
/// All transitions are synchronous and run to completion; the only
/// suspension point sits between [`TableState::begin_fetch`] and the
/// matching [`TableState::apply_page`] / [`TableState::apply_error`], where
/// the caller awaits the network. The busy flag is set by `begin_fetch` and
/// cleared only by the matching completion, never by a stale one.
#[derive(Debug, Clone)]
pub struct TableState {
    /// 1-based page index currently targeted
    page_index: u32,
    page_size: u32,
    total_records: u64,
    /// False until the first page has been applied
    total_known: bool,
    records: Vec<Artwork>,
    load_state: TableLoadState,
    /// Bumped on every issued fetch; stale completions carry an older value
    epoch: u64,
}

impl TableState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
            total_records: 0,
            total_known: false,
            records: Vec::new(),
            load_state: TableLoadState::Idle,
            epoch: 0,
        }
    }

    // ==================== Getters ====================

    /// The 1-based page index currently targeted
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Records of the currently loaded page
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Total record count reported by the remote collection
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn load_state(&self) -> &TableLoadState {
        &self.load_state
    }

    /// True while a fetch is outstanding. The host must not render
    /// interactive content (table rows, paginator) while busy.
    pub fn is_busy(&self) -> bool {
        self.load_state.is_loading()
    }

    /// Number of pages in the remote collection, once the total is known.
    /// An empty collection still counts as one (empty) page so the current
    /// page can always be refetched.
    pub fn total_pages(&self) -> Option<u64> {
        self.total_known
            .then(|| self.total_records.div_ceil(u64::from(self.page_size)).max(1))
    }

    // ==================== Transitions ====================

    /// Check that `page` is inside the defined domain: 1-based, and within
    /// the last page once the total is known. Out-of-range pages are
    /// rejected, not clamped.
    pub fn validate_page(&self, page: u32) -> Result<()> {
        if page == 0 {
            return Err(Error::Invalid {
                message: "page index is 1-based".to_string(),
            });
        }
        if let Some(pages) = self.total_pages() {
            if u64::from(page) > pages {
                return Err(Error::Invalid {
                    message: format!("page {page} is out of range (1..={pages})"),
                });
            }
        }
        Ok(())
    }

    /// Start a fetch for `page`: retarget the page index, mark the table
    /// busy, and supersede any outstanding fetch.
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.epoch += 1;
        self.page_index = page;
        self.load_state = TableLoadState::Loading;
        debug!("fetch {} issued for page {}", self.epoch, page);
        FetchTicket {
            epoch: self.epoch,
            page,
        }
    }

    /// Commit a fetched page. Returns false (and changes nothing) when the
    /// ticket has been superseded by a newer `begin_fetch`.
    pub fn apply_page(&mut self, ticket: FetchTicket, page: ArtworkPage) -> bool {
        if ticket.epoch != self.epoch {
            debug!(
                "discarding stale response for page {} (fetch {})",
                ticket.page, ticket.epoch
            );
            return false;
        }
        self.records = page.records;
        self.total_records = page.total_records;
        self.total_known = true;
        self.load_state = TableLoadState::Ready;
        true
    }

    /// Record a failed fetch. A matching failure clears the busy flag and
    /// becomes the visible error state; a stale failure is discarded so it
    /// cannot clobber a newer in-flight fetch.
    pub fn apply_error(&mut self, ticket: FetchTicket, message: impl Into<Arc<str>>) -> bool {
        if ticket.epoch != self.epoch {
            debug!(
                "discarding stale failure for page {} (fetch {})",
                ticket.page, ticket.epoch
            );
            return false;
        }
        self.load_state = TableLoadState::Error(message.into());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: u64) -> Artwork {
        Artwork {
            id,
            title: format!("Artwork {id}"),
            place_of_origin: None,
            artist_display: None,
            date_start: None,
            date_end: None,
        }
    }

    fn page_of(ids: &[u64], total: u64) -> ArtworkPage {
        ArtworkPage {
            records: ids.iter().copied().map(artwork).collect(),
            total_records: total,
        }
    }

    #[test]
    fn page_size_is_clamped_to_one() {
        let state = TableState::new(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn total_pages_unknown_before_first_apply() {
        let state = TableState::new(10);
        assert_eq!(state.total_pages(), None);
    }

    #[test]
    fn total_pages_rounds_up() {
        let mut state = TableState::new(10);
        let ticket = state.begin_fetch(1);
        state.apply_page(ticket, page_of(&[1, 2, 3], 23));
        assert_eq!(state.total_pages(), Some(3));
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let mut state = TableState::new(10);
        let ticket = state.begin_fetch(1);
        state.apply_page(ticket, page_of(&[], 0));
        assert_eq!(state.total_pages(), Some(1));
        assert!(state.validate_page(1).is_ok());
    }

    #[test]
    fn validate_rejects_page_zero_and_beyond_last() {
        let mut state = TableState::new(10);
        assert!(state.validate_page(0).is_err());
        // Total unknown: anything >= 1 is allowed.
        assert!(state.validate_page(7).is_ok());

        let ticket = state.begin_fetch(1);
        state.apply_page(ticket, page_of(&[1], 23));
        assert!(state.validate_page(3).is_ok());
        assert!(matches!(
            state.validate_page(4),
            Err(Error::Invalid { .. })
        ));
    }

    #[test]
    fn begin_fetch_marks_busy_and_retargets() {
        let mut state = TableState::new(10);
        let ticket = state.begin_fetch(2);
        assert!(state.is_busy());
        assert_eq!(state.page_index(), 2);
        assert_eq!(ticket.page(), 2);
    }

    #[test]
    fn stale_page_is_discarded() {
        let mut state = TableState::new(10);
        let first = state.begin_fetch(2);
        let second = state.begin_fetch(3);

        // First completion arrives after being superseded: discarded, and
        // the table stays busy waiting on the newer fetch.
        assert!(!state.apply_page(first, page_of(&[1, 2], 23)));
        assert!(state.is_busy());
        assert!(state.records().is_empty());

        assert!(state.apply_page(second, page_of(&[21, 22, 23], 23)));
        assert!(!state.is_busy());
        assert_eq!(state.page_index(), 3);
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn matching_error_clears_busy_and_is_visible() {
        let mut state = TableState::new(10);
        let ticket = state.begin_fetch(1);
        assert!(state.apply_error(ticket, "connection refused"));
        assert!(!state.is_busy());
        assert_eq!(state.load_state().error(), Some("connection refused"));
    }

    #[test]
    fn stale_error_does_not_clobber_newer_fetch() {
        let mut state = TableState::new(10);
        let first = state.begin_fetch(1);
        let second = state.begin_fetch(2);

        assert!(!state.apply_error(first, "connection refused"));
        assert!(state.is_busy());

        assert!(state.apply_page(second, page_of(&[11], 23)));
        assert!(state.load_state().is_ready());
    }
}
