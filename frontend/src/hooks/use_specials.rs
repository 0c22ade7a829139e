use shared::{Page, Special, SpecialsQuery};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};
use crate::services::cache::QueryCache;
use crate::services::logging::Logger;

use super::use_infinite_query::{use_infinite_query, UseInfiniteQueryResult};

/// Infinite specials listing for the given filter request.
#[hook]
pub fn use_specials_infinite(
    api_client: &ApiClient,
    cache: &QueryCache<SpecialsQuery, Page<Special>>,
    query: SpecialsQuery,
) -> UseInfiniteQueryResult<Special> {
    let api_client = api_client.clone();
    use_infinite_query(cache.clone(), query, move |query: SpecialsQuery, offset| {
        let api_client = api_client.clone();
        async move { api_client.get_specials(&query, offset).await }
    })
}

/// Warm the cache for a filter request before the user commits to it
/// (store tab hover). Does nothing when the first page is already cached.
#[hook]
pub fn use_prefetch_specials(
    api_client: &ApiClient,
    cache: &QueryCache<SpecialsQuery, Page<Special>>,
) -> Callback<SpecialsQuery> {
    let api_client = api_client.clone();
    let cache = cache.clone();

    use_callback((), move |query: SpecialsQuery, _| {
        if cache.contains(&query) {
            return;
        }
        let api_client = api_client.clone();
        let cache = cache.clone();
        spawn_local(async move {
            let result: Result<_, ApiError> = cache
                .fetch_and_store(query.clone(), || async {
                    let page = api_client.get_specials(&query, 0).await?;
                    Ok(vec![page])
                })
                .await;
            if let Err(e) = result {
                Logger::warn("prefetch", &format!("specials prefetch failed: {}", e));
            }
        });
    })
}
