use shared::StatsResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct StatsState {
    pub stats: Option<StatsResponse>,
    pub loading: bool,
}

/// Header counters (total specials, half-price count, per-store counts,
/// last-updated). Fetched once on mount; the header simply stays empty if
/// the endpoint is unavailable.
#[hook]
pub fn use_stats(api_client: &ApiClient) -> StatsState {
    let stats = use_state(|| Option::<StatsResponse>::None);
    let loading = use_state(|| true);

    {
        let api_client = api_client.clone();
        let stats = stats.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_stats().await {
                    Ok(response) => stats.set(Some(response)),
                    Err(e) => Logger::error("stats", &format!("failed to fetch stats: {}", e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    StatsState {
        stats: (*stats).clone(),
        loading: *loading,
    }
}
