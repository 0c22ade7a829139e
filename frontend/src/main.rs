use shared::{Page, Special, SpecialsQuery, Staple, StaplesQuery};
use yew::prelude::*;

mod components;
mod filters;
mod hooks;
mod pages;
mod services;
mod stores;

use pages::compare::ComparePage;
use pages::specials::SpecialsPage;
use services::api::ApiClient;
use services::cache::QueryCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Specials,
    Compare,
}

#[function_component(App)]
fn app() -> Html {
    let route = use_state(|| Route::Specials);

    // The caches live here, above the pages, so fetched pages survive
    // switching between views and are reused on return.
    let api_client = use_state(ApiClient::new);
    let specials_cache = use_state(QueryCache::<SpecialsQuery, Page<Special>>::new);
    let staples_cache = use_state(QueryCache::<StaplesQuery, Page<Staple>>::new);

    let go_specials = {
        let route = route.clone();
        Callback::from(move |_| route.set(Route::Specials))
    };
    let go_compare = {
        let route = route.clone();
        Callback::from(move |_| route.set(Route::Compare))
    };

    html! {
        <>
            <nav class="top-nav">
                <span class="brand">{"TrolleyWatch"}</span>
                <button
                    class={classes!("nav-link", (*route == Route::Specials).then_some("active"))}
                    onclick={go_specials}
                >
                    {"Specials"}
                </button>
                <button
                    class={classes!("nav-link", (*route == Route::Compare).then_some("active"))}
                    onclick={go_compare}
                >
                    {"Compare"}
                </button>
            </nav>

            <main class="main">
                {match *route {
                    Route::Specials => html! {
                        <SpecialsPage
                            api_client={(*api_client).clone()}
                            cache={(*specials_cache).clone()}
                        />
                    },
                    Route::Compare => html! {
                        <ComparePage
                            api_client={(*api_client).clone()}
                            cache={(*staples_cache).clone()}
                        />
                    },
                }}
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
