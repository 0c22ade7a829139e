use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use shared::Page;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiError;
use crate::services::cache::QueryCache;

use super::pagination::Paginator;

/// Render snapshot of a paginated query.
#[derive(Clone, PartialEq)]
pub struct InfiniteQueryState<T: PartialEq> {
    /// Fetched pages in fetch order
    pub pages: Rc<Vec<Page<T>>>,
    /// Pages flattened into one render list, memoized on the page list
    pub items: Rc<Vec<T>>,
    /// Server-reported total for the current filter request
    pub total: u64,
    /// First page still outstanding, nothing to show yet
    pub is_loading: bool,
    /// Any request in flight
    pub is_fetching: bool,
    /// Specifically a next-page request in flight
    pub is_fetching_next_page: bool,
    pub has_next_page: bool,
    pub error: Option<ApiError>,
}

pub struct UseInfiniteQueryResult<T: PartialEq> {
    pub state: InfiniteQueryState<T>,
    /// No-op while a fetch is in flight or no further pages exist.
    pub fetch_next_page: Callback<()>,
}

/// Paginated fetching over `fetch(query, offset)` with caching by query
/// value. Changing `query` restores the cached page list when one exists
/// and revalidates the first page in the background (`is_fetching` without
/// `is_loading`), otherwise starts over from offset 0; responses belonging
/// to a superseded query are dropped on arrival.
#[hook]
pub fn use_infinite_query<Q, T, F, Fut>(
    cache: QueryCache<Q, Page<T>>,
    query: Q,
    fetch: F,
) -> UseInfiniteQueryResult<T>
where
    Q: Clone + PartialEq + Eq + Hash + 'static,
    T: Clone + PartialEq + 'static,
    F: Fn(Q, u32) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let paginator = use_mut_ref(Paginator::<T>::new);
    let pages = use_state(|| Rc::new(Vec::<Page<T>>::new()));
    let is_loading = use_state(|| true);
    let is_fetching = use_state(|| false);
    let is_fetching_next_page = use_state(|| false);
    let error = use_state(|| Option::<ApiError>::None);
    let fetch = use_memo((), move |_| fetch);

    // Restore from cache or refetch whenever the filter request changes.
    {
        let paginator = paginator.clone();
        let pages = pages.clone();
        let is_loading = is_loading.clone();
        let is_fetching = is_fetching.clone();
        let is_fetching_next_page = is_fetching_next_page.clone();
        let error = error.clone();
        let cache = cache.clone();
        let fetch = fetch.clone();

        use_effect_with(query.clone(), move |query| {
            let query = query.clone();
            error.set(None);
            is_fetching_next_page.set(false);

            if let Some(cached) = cache.get(&query) {
                // Show the cached pages straight away, then revalidate the
                // first page in the background.
                let ticket = {
                    let mut p = paginator.borrow_mut();
                    p.restore((*cached).clone());
                    p.begin_refresh()
                };
                pages.set(cached);
                is_loading.set(false);
                is_fetching.set(true);

                spawn_local(async move {
                    let result = (*fetch)(query.clone(), ticket.offset).await;
                    match result {
                        Ok(page) => {
                            let snapshot = {
                                let mut p = paginator.borrow_mut();
                                if !p.complete_refresh(ticket, page) {
                                    return;
                                }
                                Rc::new(p.pages().to_vec())
                            };
                            cache.store(query, Rc::clone(&snapshot));
                            pages.set(snapshot);
                            is_fetching.set(false);
                        }
                        Err(e) => {
                            if paginator.borrow_mut().fail(ticket) {
                                is_fetching.set(false);
                                error.set(Some(e));
                            }
                        }
                    }
                });
            } else {
                let ticket = {
                    let mut p = paginator.borrow_mut();
                    p.reset();
                    p.begin_initial()
                };
                pages.set(Rc::new(Vec::new()));
                is_loading.set(true);
                is_fetching.set(true);

                spawn_local(async move {
                    let result = (*fetch)(query.clone(), ticket.offset).await;
                    match result {
                        Ok(page) => {
                            let snapshot = {
                                let mut p = paginator.borrow_mut();
                                if !p.complete(ticket, page) {
                                    return;
                                }
                                Rc::new(p.pages().to_vec())
                            };
                            cache.store(query, Rc::clone(&snapshot));
                            pages.set(snapshot);
                            is_loading.set(false);
                            is_fetching.set(false);
                        }
                        Err(e) => {
                            if paginator.borrow_mut().fail(ticket) {
                                is_loading.set(false);
                                is_fetching.set(false);
                                error.set(Some(e));
                            }
                        }
                    }
                });
            }

            || ()
        });
    }

    let fetch_next_page = {
        let paginator = paginator.clone();
        let pages = pages.clone();
        let is_fetching = is_fetching.clone();
        let is_fetching_next_page = is_fetching_next_page.clone();
        let error = error.clone();
        let cache = cache.clone();
        let fetch = fetch.clone();

        use_callback(query.clone(), move |_, query| {
            let ticket = match paginator.borrow_mut().begin_next() {
                Some(ticket) => ticket,
                None => return,
            };
            is_fetching.set(true);
            is_fetching_next_page.set(true);

            let paginator = paginator.clone();
            let pages = pages.clone();
            let is_fetching = is_fetching.clone();
            let is_fetching_next_page = is_fetching_next_page.clone();
            let error = error.clone();
            let cache = cache.clone();
            let fetch = fetch.clone();
            let query = query.clone();

            spawn_local(async move {
                let result = (*fetch)(query.clone(), ticket.offset).await;
                match result {
                    Ok(page) => {
                        let snapshot = {
                            let mut p = paginator.borrow_mut();
                            if !p.complete(ticket, page) {
                                // Superseded while in flight; the newer
                                // query's effect owns the flags now.
                                return;
                            }
                            Rc::new(p.pages().to_vec())
                        };
                        cache.store(query, Rc::clone(&snapshot));
                        pages.set(snapshot);
                        is_fetching.set(false);
                        is_fetching_next_page.set(false);
                    }
                    Err(e) => {
                        if paginator.borrow_mut().fail(ticket) {
                            is_fetching.set(false);
                            is_fetching_next_page.set(false);
                            error.set(Some(e));
                        }
                    }
                }
            });
        })
    };

    let items = use_memo((*pages).clone(), |pages| {
        pages
            .iter()
            .flat_map(|page| page.items.iter().cloned())
            .collect::<Vec<T>>()
    });

    let (total, has_next_page) = {
        let p = paginator.borrow();
        (p.total().unwrap_or(0), p.has_more())
    };

    let state = InfiniteQueryState {
        pages: (*pages).clone(),
        items,
        total,
        is_loading: *is_loading,
        is_fetching: *is_fetching,
        is_fetching_next_page: *is_fetching_next_page,
        has_next_page,
        error: (*error).clone(),
    };

    UseInfiniteQueryResult {
        state,
        fetch_next_page,
    }
}
