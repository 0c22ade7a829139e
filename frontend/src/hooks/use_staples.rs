use shared::{Page, Staple, StaplesQuery};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::cache::QueryCache;

use super::use_infinite_query::{use_infinite_query, UseInfiniteQueryResult};

/// Infinite cross-store staples listing for the given filter request.
#[hook]
pub fn use_staples_infinite(
    api_client: &ApiClient,
    cache: &QueryCache<StaplesQuery, Page<Staple>>,
    query: StaplesQuery,
) -> UseInfiniteQueryResult<Staple> {
    let api_client = api_client.clone();
    use_infinite_query(cache.clone(), query, move |query: StaplesQuery, offset| {
        let api_client = api_client.clone();
        async move { api_client.get_staples(&query, offset).await }
    })
}
