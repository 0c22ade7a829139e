use shared::{CategoryTreeResponse, StapleCategoriesResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Specials category tree, fetched once on mount. Reference data with a
/// long shelf life; no refresh machinery.
#[hook]
pub fn use_category_tree(api_client: &ApiClient) -> Option<CategoryTreeResponse> {
    let tree = use_state(|| Option::<CategoryTreeResponse>::None);

    {
        let api_client = api_client.clone();
        let tree = tree.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_category_tree().await {
                    Ok(response) => tree.set(Some(response)),
                    Err(e) => {
                        Logger::error("categories", &format!("failed to fetch category tree: {}", e))
                    }
                }
            });
            || ()
        });
    }

    (*tree).clone()
}

/// Staples categories with counts, fetched once on mount.
#[hook]
pub fn use_staple_categories(api_client: &ApiClient) -> Option<StapleCategoriesResponse> {
    let categories = use_state(|| Option::<StapleCategoriesResponse>::None);

    {
        let api_client = api_client.clone();
        let categories = categories.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_staple_categories().await {
                    Ok(response) => categories.set(Some(response)),
                    Err(e) => Logger::error(
                        "categories",
                        &format!("failed to fetch staple categories: {}", e),
                    ),
                }
            });
            || ()
        });
    }

    (*categories).clone()
}
