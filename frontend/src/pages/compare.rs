use shared::{Page, Staple, StaplesQuery, StaplesSort};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::category_nav::{CategoryItem, CategorySidebar, CategoryTabs};
use crate::components::empty_state::EmptyState;
use crate::components::load_more::LoadMoreTrigger;
use crate::components::staple_card::StapleCard;
use crate::components::store_tabs::StoreTabs;
use crate::filters::{CategorySelection, StaplesFilterAction, StaplesFilterState};
use crate::hooks::use_categories::use_staple_categories;
use crate::hooks::use_debounced_value::{use_debounced_value, SEARCH_DEBOUNCE_MS};
use crate::hooks::use_staples::use_staples_infinite;
use crate::services::api::ApiClient;
use crate::services::cache::QueryCache;
use crate::stores::STORES;

#[derive(Properties, PartialEq)]
pub struct ComparePageProps {
    pub api_client: ApiClient,
    pub cache: QueryCache<StaplesQuery, Page<Staple>>,
}

/// Cross-store price comparison for everyday staples.
#[function_component(ComparePage)]
pub fn compare_page(props: &ComparePageProps) -> Html {
    let filters = use_reducer(StaplesFilterState::default);
    let debounced_search = use_debounced_value(filters.search.clone(), SEARCH_DEBOUNCE_MS);

    let query = use_memo(
        ((*filters).clone(), debounced_search),
        |(state, debounced)| state.to_query(debounced),
    );

    let staples = use_staples_infinite(&props.api_client, &props.cache, (*query).clone());
    let categories = use_staple_categories(&props.api_client);

    let dispatcher = filters.dispatcher();

    let on_store_select = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |slug: Option<String>, _| match slug {
            Some(slug) => dispatcher.dispatch(StaplesFilterAction::ToggleStore(slug)),
            None => dispatcher.dispatch(StaplesFilterAction::AllStores),
        })
    };

    let on_category_select = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |selection: CategorySelection, _| {
            let category = match selection {
                CategorySelection::BySlug(slug) => Some(slug),
                _ => None,
            };
            dispatcher.dispatch(StaplesFilterAction::SelectCategory(category));
        })
    };

    let on_search_input = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(StaplesFilterAction::SetSearch(input.value()));
        })
    };

    let on_sort_change = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let sort = StaplesSort::from_param(&select.value()).unwrap_or_default();
            dispatcher.dispatch(StaplesFilterAction::SetSort(sort));
        })
    };

    let on_clear_filters = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |_: (), _| {
            dispatcher.dispatch(StaplesFilterAction::ClearFilters);
        })
    };

    let on_clear_click = {
        let on_clear_filters = on_clear_filters.clone();
        Callback::from(move |_: MouseEvent| on_clear_filters.emit(()))
    };

    let state = &staples.state;
    let has_active_filters = filters.has_active_filters();

    // Mean savings across the loaded items, cents to whole dollars.
    let average_savings = use_memo(state.items.clone(), |items| {
        if items.is_empty() {
            0.0
        } else {
            let total_cents: i64 = items.iter().filter_map(|item| item.savings_amount).sum();
            (total_cents as f64 / items.len() as f64 / 100.0).round()
        }
    });

    let total_products = categories
        .as_ref()
        .map(|response| response.total_products)
        .unwrap_or(0);

    let category_selection = match &filters.category {
        Some(slug) => CategorySelection::BySlug(slug.clone()),
        None => CategorySelection::None,
    };

    let category_items: Vec<CategoryItem> = categories
        .as_ref()
        .map(|response| {
            response
                .categories
                .iter()
                .map(|category| CategoryItem {
                    selection: CategorySelection::BySlug(category.slug.clone()),
                    name: category.name.clone(),
                    icon: category.icon.clone(),
                    count: category.count,
                })
                .collect()
        })
        .unwrap_or_default();

    html! {
        <div class="page compare-page">
            <header class="page-header compare-header">
                <h1>{"Price Showdown"}</h1>
                <p>{"See who's cheapest, store by store"}</p>
                <div class="stats-strip">
                    <div class="stat">
                        <span class="stat-value">{total_products}</span>
                        <span class="stat-label">{"Products"}</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{STORES.len()}</span>
                        <span class="stat-label">{"Stores Compared"}</span>
                    </div>
                    {if *average_savings > 0.0 {
                        html! {
                            <div class="stat">
                                <span class="stat-value">{format!("${:.0}", *average_savings)}</span>
                                <span class="stat-label">{"Avg Savings"}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </header>

            <StoreTabs
                selected={filters.store.clone()}
                on_select={on_store_select}
            />

            {if !category_items.is_empty() {
                html! {
                    <div class="mobile-only">
                        <CategoryTabs
                            items={category_items.clone()}
                            selected={category_selection.clone()}
                            on_select={on_category_select.clone()}
                        />
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="page-layout">
                {if !category_items.is_empty() {
                    html! {
                        <aside class="desktop-only sidebar">
                            <CategorySidebar
                                items={category_items}
                                selected={category_selection}
                                on_select={on_category_select}
                            />
                        </aside>
                    }
                } else {
                    html! {}
                }}

                <div class="page-content">
                    <div class="filters-row">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search products..."
                            value={filters.search.clone()}
                            oninput={on_search_input}
                        />

                        <select class="filter-select" onchange={on_sort_change}>
                            {for StaplesSort::ALL.iter().map(|sort| {
                                html! {
                                    <option
                                        value={sort.as_param()}
                                        selected={filters.sort == *sort}
                                    >
                                        {sort.label()}
                                    </option>
                                }
                            })}
                        </select>

                        {if has_active_filters {
                            html! {
                                <button class="btn-clear-filters" onclick={on_clear_click}>
                                    {"Clear Filters"}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                    </div>

                    {if let Some(error) = &state.error {
                        html! { <div class="error-banner">{format!("Could not load products: {}", error)}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="results-meta">
                        <p>
                            {if state.is_loading {
                                "Loading...".to_string()
                            } else {
                                format!("Showing {} of {} products", state.items.len(), state.total)
                            }}
                        </p>
                        {if state.is_fetching && !state.is_loading && !state.is_fetching_next_page {
                            html! { <span class="updating-hint">{"Updating..."}</span> }
                        } else {
                            html! {}
                        }}
                    </div>

                    {if state.is_loading {
                        html! { <div class="loading-panel"><div class="spinner" /></div> }
                    } else if !state.items.is_empty() {
                        html! {
                            <>
                                <div class="product-grid">
                                    {for state.items.iter().enumerate().map(|(index, staple)| {
                                        html! {
                                            <StapleCard
                                                key={format!("{}-{}", staple.id, index)}
                                                staple={staple.clone()}
                                            />
                                        }
                                    })}
                                </div>
                                <LoadMoreTrigger
                                    on_load_more={staples.fetch_next_page.clone()}
                                    has_more={state.has_next_page}
                                    is_loading={state.is_fetching_next_page}
                                />
                            </>
                        }
                    } else {
                        html! {
                            <EmptyState
                                has_active_filters={has_active_filters}
                                on_clear_filters={on_clear_filters}
                                filtered_hint="No products match your filters. Try adjusting your search or clearing filters."
                                empty_hint="There are no products available at the moment."
                            />
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
