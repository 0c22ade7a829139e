use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

/// In-memory cache of fetched page lists, keyed by filter request value.
/// Owned by the App root so entries survive page re-mounts; written only by
/// the fetching hooks and read back on mount and on filter changes.
pub struct QueryCache<K, V> {
    entries: Rc<RefCell<HashMap<K, Rc<Vec<V>>>>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn get(&self, key: &K) -> Option<Rc<Vec<V>>> {
        self.entries.borrow().get(key).map(Rc::clone)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn store(&self, key: K, pages: Rc<Vec<V>>) {
        self.entries.borrow_mut().insert(key, pages);
    }

    /// Return the cached value for `key`, fetching and storing it first if
    /// absent. The fetcher is only awaited on a miss; if another fetch for
    /// the same key lands while this one is suspended, the entry already in
    /// place wins and this fetch's result is discarded.
    pub async fn fetch_and_store<F, Fut, E>(&self, key: K, fetcher: F) -> Result<Rc<Vec<V>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<V>, E>>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let pages = Rc::new(fetcher().await?);
        if let Some(existing) = self.get(&key) {
            return Ok(existing);
        }
        self.store(key, Rc::clone(&pages));
        Ok(pages)
    }

    pub fn invalidate(&self, key: &K) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K, V> std::fmt::Debug for QueryCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.entries.borrow().len())
            .finish()
    }
}

impl<K, V> Clone for QueryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

// Clones of the same cache compare equal so it can sit in component props.
impl<K, V> PartialEq for QueryCache<K, V> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Page;
    use std::pin::Pin;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn page(n: usize) -> Page<u32> {
        Page::new(vec![0; n], n as u64, 0)
    }

    fn noop_waker() -> Waker {
        fn raw() -> RawWaker {
            fn clone(_: *const ()) -> RawWaker {
                raw()
            }
            fn noop(_: *const ()) {}
            RawWaker::new(std::ptr::null(), &RawWakerVTable::new(clone, noop, noop, noop))
        }
        unsafe { Waker::from_raw(raw()) }
    }

    fn poll<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
        let waker = noop_waker();
        future.poll(&mut Context::from_waker(&waker))
    }

    /// Ready with one page on the second poll; suspends once first.
    struct DeferredFetch {
        polled: bool,
    }

    impl Future for DeferredFetch {
        type Output = Result<Vec<Page<u32>>, ()>;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            if self.polled {
                Poll::Ready(Ok(vec![page(1)]))
            } else {
                self.polled = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[test]
    fn test_value_equal_keys_hit() {
        let cache: QueryCache<String, Page<u32>> = QueryCache::new();
        cache.store("store=coles".to_string(), Rc::new(vec![page(3)]));

        // A freshly built but value-equal key must hit the same entry.
        let hit = cache.get(&"store=coles".to_string()).unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].items.len(), 3);
        assert!(cache.get(&"store=aldi".to_string()).is_none());
    }

    #[test]
    fn test_store_replaces_existing_entry() {
        let cache: QueryCache<String, Page<u32>> = QueryCache::new();
        cache.store("key".to_string(), Rc::new(vec![page(1)]));
        cache.store("key".to_string(), Rc::new(vec![page(1), page(2)]));

        assert_eq!(cache.get(&"key".to_string()).unwrap().len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_evicts() {
        let cache: QueryCache<String, Page<u32>> = QueryCache::new();
        cache.store("key".to_string(), Rc::new(vec![page(1)]));
        cache.invalidate(&"key".to_string());
        assert!(cache.get(&"key".to_string()).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_slow_fetch_keeps_fresher_entry_stored_meanwhile() {
        let cache: QueryCache<String, Page<u32>> = QueryCache::new();
        let mut fetch = Box::pin(
            cache.fetch_and_store("key".to_string(), || DeferredFetch { polled: false }),
        );
        assert!(poll(fetch.as_mut()).is_pending());

        // The page's own hook caches two pages while the fetch is suspended.
        cache.store("key".to_string(), Rc::new(vec![page(1), page(2)]));

        let resolved = match poll(fetch.as_mut()) {
            Poll::Ready(Ok(pages)) => pages,
            _ => panic!("fetch did not resolve"),
        };
        // The late single-page result must not replace the two-page entry.
        assert_eq!(resolved.len(), 2);
        assert_eq!(cache.get(&"key".to_string()).unwrap().len(), 2);
    }

    #[test]
    fn test_clones_share_entries() {
        let cache: QueryCache<String, Page<u32>> = QueryCache::new();
        let alias = cache.clone();
        alias.store("key".to_string(), Rc::new(vec![page(2)]));

        assert!(cache.contains(&"key".to_string()));
        assert_eq!(cache, alias);
        assert_ne!(cache, QueryCache::new());
    }
}
