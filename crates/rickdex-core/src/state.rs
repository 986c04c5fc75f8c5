//! Browse state and its transition table.
//!
//! [`BrowseState`] is the single owner of everything the browse page can
//! change: pending and committed search text, filters, page cursor, the
//! selected record and the bookkeeping of the most recent fetch. It is
//! updated only through [`BrowseState::dispatch`] (or the named transition
//! methods it forwards to), so every invariant can be tested without a view.

use crate::{
    error::CoreError,
    filter::{FilterChange, FilterSelection},
    record::{CharacterPage, ResultRecord},
    request::{PageCursor, RequestDescriptor},
};

/// One message per state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Replace the pending search text. Does not fetch.
    EditSearchText(String),
    /// Commit the pending text as the name query and go to page 1.
    CommitSearch,
    /// Change one filter dimension and go to page 1.
    SetFilter(FilterChange),
    /// Set every filter dimension to `All` and go to page 1.
    ResetFilters,
    PagePrev,
    PageNext,
    /// Open the detail overlay for a record.
    Select(ResultRecord),
    /// Close the detail overlay.
    Dismiss,
    /// A fetch for this request has been issued.
    FetchStarted(RequestDescriptor),
    /// A fetch finished. Ignored unless `request` is still current.
    FetchResolved {
        request: RequestDescriptor,
        outcome: Result<CharacterPage, CoreError>,
    },
}

/// What the browse page should show for the current request.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// No result for the current request yet.
    Loading,
    /// The fetch failed; carries the raw message.
    Error(String),
    /// The fetch succeeded.
    Populated(CharacterPage),
}

#[derive(Debug, Clone, PartialEq)]
struct Settled {
    request: RequestDescriptor,
    outcome: Result<CharacterPage, CoreError>,
}

/// All mutable state of the browse page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    pending_text: String,
    filters: FilterSelection,
    page: PageCursor,
    total_pages: Option<u32>,
    selected: Option<ResultRecord>,
    in_flight: Option<RequestDescriptor>,
    settled: Option<Settled>,
}

impl BrowseState {
    /// Initial state: page 1, no filters, empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one message.
    pub fn dispatch(self, msg: Msg) -> Self {
        match msg {
            Msg::EditSearchText(text) => self.edit_search_text(text),
            Msg::CommitSearch => self.commit_search(),
            Msg::SetFilter(change) => self.set_filter(change),
            Msg::ResetFilters => self.reset_filters(),
            Msg::PagePrev => self.page_prev(),
            Msg::PageNext => self.page_next(),
            Msg::Select(record) => self.select(record),
            Msg::Dismiss => self.dismiss(),
            Msg::FetchStarted(request) => self.fetch_started(request),
            Msg::FetchResolved { request, outcome } => self.fetch_resolved(request, outcome),
        }
    }

    pub fn edit_search_text(mut self, text: impl Into<String>) -> Self {
        self.pending_text = text.into();
        self
    }

    pub fn commit_search(mut self) -> Self {
        self.filters.name_query = self.pending_text.clone();
        self.page = PageCursor::FIRST;
        log::debug!("search committed: {:?}", self.filters.name_query);
        self
    }

    pub fn set_filter(mut self, change: FilterChange) -> Self {
        self.filters.apply(change);
        self.page = PageCursor::FIRST;
        log::debug!("filter changed: {change:?}");
        self
    }

    pub fn reset_filters(mut self) -> Self {
        self.filters.reset_categories();
        self.page = PageCursor::FIRST;
        self
    }

    pub fn page_prev(mut self) -> Self {
        self.page = self.page.prev();
        self
    }

    pub fn page_next(mut self) -> Self {
        if self.total_pages.is_none() {
            log::debug!("next page ignored: total pages unknown");
        }
        self.page = self.page.next(self.total_pages);
        self
    }

    pub fn select(mut self, record: ResultRecord) -> Self {
        self.selected = Some(record);
        self
    }

    pub fn dismiss(mut self) -> Self {
        self.selected = None;
        self
    }

    pub fn fetch_started(mut self, request: RequestDescriptor) -> Self {
        self.in_flight = Some(request);
        self
    }

    pub fn fetch_resolved(
        mut self,
        request: RequestDescriptor,
        outcome: Result<CharacterPage, CoreError>,
    ) -> Self {
        // A discarded answer still ends its fetch; otherwise returning to
        // that request would wait on a fetch that already finished.
        if self.in_flight.as_ref() == Some(&request) {
            self.in_flight = None;
        }

        if request != self.request() {
            log::debug!("discarding stale response for page {}", request.page);
            return self;
        }

        match &outcome {
            Ok(page) => self.total_pages = Some(page.total_pages),
            Err(err) => log::warn!("character fetch failed: {err}"),
        }

        self.settled = Some(Settled { request, outcome });
        self
    }

    /// The request for the current state. Recomputed on every call.
    pub fn request(&self) -> RequestDescriptor {
        RequestDescriptor::derive(&self.filters, self.page)
    }

    /// Whether the current request has neither been issued nor answered.
    pub fn needs_fetch(&self) -> bool {
        let request = self.request();
        self.in_flight.as_ref() != Some(&request)
            && self.settled.as_ref().map(|s| &s.request) != Some(&request)
    }

    /// Render branch for the current request.
    pub fn render(&self) -> RenderState {
        let request = self.request();
        match &self.settled {
            Some(settled) if settled.request == request => match &settled.outcome {
                Ok(page) => RenderState::Populated(page.clone()),
                Err(err) => RenderState::Error(err.to_string()),
            },
            _ => RenderState::Loading,
        }
    }

    /// Pagination is hidden only when the current request failed.
    pub fn shows_pagination(&self) -> bool {
        !matches!(self.render(), RenderState::Error(_))
    }

    /// "Page: {page} / {total}", once data for the current request exists.
    pub fn page_label(&self) -> Option<String> {
        match self.render() {
            RenderState::Populated(page) => {
                Some(format!("Page: {} / {}", self.page, page.total_pages))
            }
            _ => None,
        }
    }

    pub fn can_page_prev(&self) -> bool {
        self.page.prev() != self.page
    }

    pub fn can_page_next(&self) -> bool {
        self.page.next(self.total_pages) != self.page
    }

    /// Record to show in the detail overlay, unless the page is in error.
    pub fn overlay(&self) -> Option<&ResultRecord> {
        if !self.shows_pagination() {
            return None;
        }
        self.selected.as_ref()
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn page(&self) -> PageCursor {
        self.page
    }

    /// Total pages reported by the most recent successful fetch.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn selected(&self) -> Option<&ResultRecord> {
        self.selected.as_ref()
    }
}
