use shared::Page;

/// Bookkeeping for one filter request's fetched pages.
///
/// Two invariants live here: at most one fetch in flight at a time, and
/// responses started under an older epoch (filters changed while the
/// request was out) are discarded instead of being spliced into the
/// current page list.
#[derive(Debug)]
pub struct Paginator<T> {
    pages: Vec<Page<T>>,
    epoch: u64,
    in_flight: bool,
}

/// Handed out when a fetch starts; must be presented to `complete` or
/// `fail` so stale responses can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub offset: u32,
}

impl<T> Paginator<T> {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            epoch: 0,
            in_flight: false,
        }
    }

    /// Drop all pages and abandon any in-flight fetch. Responses holding a
    /// ticket from before the reset will be ignored on arrival.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.pages.clear();
        self.in_flight = false;
    }

    /// Adopt a cached page list for the current filter request. Also bumps
    /// the epoch so late responses from the previous request are dropped.
    pub fn restore(&mut self, pages: Vec<Page<T>>) {
        self.epoch += 1;
        self.pages = pages;
        self.in_flight = false;
    }

    /// Start the first-page fetch after a `reset`.
    pub fn begin_initial(&mut self) -> FetchTicket {
        self.in_flight = true;
        FetchTicket {
            epoch: self.epoch,
            offset: 0,
        }
    }

    /// Start a background revalidation of the first page while restored
    /// pages stay on screen.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.in_flight = true;
        FetchTicket {
            epoch: self.epoch,
            offset: 0,
        }
    }

    /// Start a next-page fetch. Returns `None` when a fetch is already in
    /// flight or there is nothing further to fetch, making duplicate
    /// scroll-triggered calls a no-op.
    pub fn begin_next(&mut self) -> Option<FetchTicket> {
        if self.in_flight || !self.has_more() {
            return None;
        }
        self.in_flight = true;
        Some(FetchTicket {
            epoch: self.epoch,
            offset: self.next_offset(),
        })
    }

    /// Append a fetched page. Returns `false` (and drops the page) when the
    /// ticket's epoch no longer matches, i.e. the response is stale.
    pub fn complete(&mut self, ticket: FetchTicket, page: Page<T>) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.in_flight = false;
        self.pages.push(page);
        true
    }

    /// Apply a revalidated first page. When it matches the first page
    /// already held, the longer restored list is kept; when the data has
    /// moved underneath, paging restarts from the fresh page. Stale tickets
    /// are rejected as in `complete`.
    pub fn complete_refresh(&mut self, ticket: FetchTicket, page: Page<T>) -> bool
    where
        T: PartialEq,
    {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.in_flight = false;
        if self.pages.first() != Some(&page) {
            self.pages = vec![page];
        }
        true
    }

    /// Record a failed fetch. Returns `false` when the ticket is stale and
    /// the failure belongs to an abandoned request.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Total reported by the server, once the first page has arrived.
    pub fn total(&self) -> Option<u64> {
        self.pages.first().map(|page| page.total)
    }

    pub fn items_fetched(&self) -> u32 {
        self.pages.iter().map(|page| page.items.len() as u32).sum()
    }

    pub fn next_offset(&self) -> u32 {
        self.items_fetched()
    }

    /// Whether the server holds more results beyond what has been fetched.
    /// False until the first page arrives; `is_loading` covers that window.
    pub fn has_more(&self) -> bool {
        match self.total() {
            Some(total) => u64::from(self.items_fetched()) < total,
            None => false,
        }
    }
}

impl<T: Clone> Paginator<T> {
    /// All fetched items in page order, items within a page in server order.
    pub fn flatten(&self) -> Vec<T> {
        self.pages
            .iter()
            .flat_map(|page| page.items.iter().cloned())
            .collect()
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(count: u32, total: u64, offset: u32) -> Page<u32> {
        Page::new((offset..offset + count).collect(), total, offset)
    }

    #[test]
    fn test_three_page_walk_exhausts_at_total() {
        let mut paginator = Paginator::new();
        paginator.reset();

        // Page 1: 50 of 120.
        let ticket = paginator.begin_initial();
        assert!(paginator.complete(ticket, page_of(50, 120, 0)));
        assert_eq!(paginator.items_fetched(), 50);
        assert!(paginator.has_more());

        // Page 2: items 51-100.
        let ticket = paginator.begin_next().unwrap();
        assert_eq!(ticket.offset, 50);
        assert!(paginator.complete(ticket, page_of(50, 120, 50)));
        assert_eq!(paginator.flatten().len(), 100);
        assert!(paginator.has_more());

        // Page 3: the final 20.
        let ticket = paginator.begin_next().unwrap();
        assert_eq!(ticket.offset, 100);
        assert!(paginator.complete(ticket, page_of(20, 120, 100)));
        assert_eq!(paginator.flatten().len(), 120);
        assert!(!paginator.has_more());
        assert!(paginator.begin_next().is_none());
    }

    #[test]
    fn test_at_most_one_next_page_in_flight() {
        let mut paginator = Paginator::new();
        paginator.reset();
        let ticket = paginator.begin_initial();
        assert!(paginator.complete(ticket, page_of(50, 120, 0)));

        let first = paginator.begin_next();
        assert!(first.is_some());
        // Sentinel still visible while the fetch runs: these must no-op.
        assert!(paginator.begin_next().is_none());
        assert!(paginator.begin_next().is_none());

        assert!(paginator.complete(first.unwrap(), page_of(50, 120, 50)));
        assert!(paginator.begin_next().is_some());
    }

    #[test]
    fn test_stale_response_is_discarded_after_reset() {
        let mut paginator = Paginator::new();
        paginator.reset();
        let old_ticket = paginator.begin_initial();

        // Filters changed before request A resolved.
        paginator.reset();
        let new_ticket = paginator.begin_initial();
        assert!(paginator.complete(new_ticket, page_of(10, 10, 0)));

        // A's response arrives late: dropped, not appended to B's pages.
        assert!(!paginator.complete(old_ticket, page_of(50, 120, 0)));
        assert_eq!(paginator.flatten().len(), 10);
    }

    #[test]
    fn test_stale_response_is_discarded_after_restore() {
        let mut paginator = Paginator::new();
        paginator.reset();
        let old_ticket = paginator.begin_initial();

        paginator.restore(vec![page_of(5, 5, 0)]);
        assert!(!paginator.complete(old_ticket, page_of(50, 120, 0)));
        assert_eq!(paginator.items_fetched(), 5);
        assert!(!paginator.in_flight());
    }

    #[test]
    fn test_failure_clears_in_flight_for_current_epoch_only() {
        let mut paginator = Paginator::<u32>::new();
        paginator.reset();
        let ticket = paginator.begin_initial();
        assert!(paginator.fail(ticket));
        assert!(!paginator.in_flight());

        let ticket = paginator.begin_initial();
        paginator.reset();
        assert!(!paginator.fail(ticket));
    }

    #[test]
    fn test_refresh_with_unchanged_first_page_keeps_restored_pages() {
        let mut paginator = Paginator::new();
        paginator.restore(vec![page_of(50, 120, 0), page_of(50, 120, 50)]);

        let ticket = paginator.begin_refresh();
        assert!(paginator.in_flight());
        assert!(paginator.begin_next().is_none());

        assert!(paginator.complete_refresh(ticket, page_of(50, 120, 0)));
        assert_eq!(paginator.items_fetched(), 100);
        assert!(!paginator.in_flight());
    }

    #[test]
    fn test_refresh_with_changed_first_page_restarts_paging() {
        let mut paginator = Paginator::new();
        paginator.restore(vec![page_of(50, 120, 0), page_of(50, 120, 50)]);

        let ticket = paginator.begin_refresh();
        assert!(paginator.complete_refresh(ticket, page_of(50, 90, 0)));
        assert_eq!(paginator.items_fetched(), 50);
        assert_eq!(paginator.total(), Some(90));
        assert!(paginator.has_more());
    }

    #[test]
    fn test_stale_refresh_is_discarded() {
        let mut paginator = Paginator::new();
        paginator.restore(vec![page_of(5, 5, 0)]);
        let ticket = paginator.begin_refresh();

        paginator.reset();
        assert!(!paginator.complete_refresh(ticket, page_of(3, 3, 0)));
    }

    #[test]
    fn test_flatten_preserves_fetch_order() {
        let mut paginator = Paginator::new();
        paginator.reset();
        let ticket = paginator.begin_initial();
        paginator.complete(ticket, page_of(3, 6, 0));
        let ticket = paginator.begin_next().unwrap();
        paginator.complete(ticket, page_of(3, 6, 3));

        assert_eq!(paginator.flatten(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_result_is_terminal() {
        let mut paginator = Paginator::new();
        paginator.reset();
        let ticket = paginator.begin_initial();
        assert!(paginator.complete(ticket, page_of(0, 0, 0)));
        assert!(!paginator.has_more());
        assert!(paginator.begin_next().is_none());
    }

    #[test]
    fn test_no_pages_means_no_more() {
        let paginator: Paginator<u32> = Paginator::new();
        assert!(!paginator.has_more());
        assert_eq!(paginator.total(), None);
        assert_eq!(paginator.next_offset(), 0);
    }
}
