use shared::{format_updated_date, Page, Special, SpecialsQuery, SpecialsSort};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::category_nav::{CategoryItem, CategorySidebar, CategoryTabs};
use crate::components::empty_state::EmptyState;
use crate::components::filter_chips::FilterChips;
use crate::components::load_more::LoadMoreTrigger;
use crate::components::special_card::SpecialCard;
use crate::components::store_tabs::StoreTabs;
use crate::filters::{CategorySelection, SpecialsFilterAction, SpecialsFilterState};
use crate::hooks::use_categories::use_category_tree;
use crate::hooks::use_debounced_value::{use_debounced_value, SEARCH_DEBOUNCE_MS};
use crate::hooks::use_specials::{use_prefetch_specials, use_specials_infinite};
use crate::hooks::use_stats::use_stats;
use crate::services::api::ApiClient;
use crate::services::cache::QueryCache;

#[derive(Properties, PartialEq)]
pub struct SpecialsPageProps {
    pub api_client: ApiClient,
    pub cache: QueryCache<SpecialsQuery, Page<Special>>,
}

/// This week's discounted offers, filterable by store, category, discount
/// floor and search, with infinite scroll.
#[function_component(SpecialsPage)]
pub fn specials_page(props: &SpecialsPageProps) -> Html {
    let filters = use_reducer(SpecialsFilterState::default);
    let debounced_search = use_debounced_value(filters.search.clone(), SEARCH_DEBOUNCE_MS);

    // The committed request; rebuilt only when a contributing field changes.
    let query = use_memo(
        ((*filters).clone(), debounced_search),
        |(state, debounced)| state.to_query(debounced),
    );

    let specials = use_specials_infinite(&props.api_client, &props.cache, (*query).clone());
    let stats = use_stats(&props.api_client);
    let category_tree = use_category_tree(&props.api_client);
    let prefetch = use_prefetch_specials(&props.api_client, &props.cache);

    let dispatcher = filters.dispatcher();

    let on_store_select = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |slug: Option<String>, _| match slug {
            Some(slug) => dispatcher.dispatch(SpecialsFilterAction::ToggleStore(slug)),
            None => dispatcher.dispatch(SpecialsFilterAction::AllStores),
        })
    };

    // Warm the cache for the hovered store tab with the other filters as-is.
    let on_store_hover = {
        let prefetch = prefetch.clone();
        use_callback((*query).clone(), move |slug: Option<String>, query| {
            let mut prefetch_query = query.clone();
            prefetch_query.store = slug;
            prefetch.emit(prefetch_query);
        })
    };

    let on_category_select = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |selection: CategorySelection, _| {
            dispatcher.dispatch(SpecialsFilterAction::SelectCategory(selection));
        })
    };

    let on_search_input = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(SpecialsFilterAction::SetSearch(input.value()));
        })
    };

    let on_discount_select = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |min_discount: u32, _| {
            dispatcher.dispatch(SpecialsFilterAction::SetMinDiscount(
                min_discount.to_string(),
            ));
        })
    };

    let on_discount_change = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(SpecialsFilterAction::SetMinDiscount(select.value()));
        })
    };

    let on_sort_change = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let sort = SpecialsSort::from_param(&select.value()).unwrap_or_default();
            dispatcher.dispatch(SpecialsFilterAction::SetSort(sort));
        })
    };

    let on_clear_filters = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |_: (), _| {
            dispatcher.dispatch(SpecialsFilterAction::ClearFilters);
        })
    };

    let on_clear_click = {
        let on_clear_filters = on_clear_filters.clone();
        Callback::from(move |_: MouseEvent| on_clear_filters.emit(()))
    };

    let state = &specials.state;
    let has_active_filters = filters.has_active_filters();

    let category_items: Vec<CategoryItem> = category_tree
        .as_ref()
        .map(|tree| {
            tree.categories
                .iter()
                .map(|category| CategoryItem {
                    selection: CategorySelection::ById(category.id),
                    name: category.name.clone(),
                    icon: category.icon.clone(),
                    count: category.count,
                })
                .collect()
        })
        .unwrap_or_default();

    html! {
        <div class="page specials-page">
            <header class="page-header specials-header">
                <h1>{"This Week's Deals"}</h1>
                <p>{"Grab the biggest discounts before they're gone"}</p>
                {if let Some(stats) = &stats.stats {
                    html! {
                        <div class="stats-strip">
                            <div class="stat">
                                <span class="stat-value">{stats.total_specials}</span>
                                <span class="stat-label">{"Total Specials"}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-value">{stats.half_price_count}</span>
                                <span class="stat-label">{"Half Price or Better"}</span>
                            </div>
                            {if let Some(last_updated) = &stats.last_updated {
                                html! {
                                    <div class="stat">
                                        {format!("Updated: {}", format_updated_date(last_updated))}
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    }
                } else if stats.loading {
                    html! { <div class="stats-strip stats-strip-loading" /> }
                } else {
                    html! {}
                }}
            </header>

            <StoreTabs
                selected={filters.store.clone()}
                on_select={on_store_select}
                on_hover={Some(on_store_hover)}
                counts={stats.stats.as_ref().map(|s| s.by_store.clone())}
                total={stats.stats.as_ref().map(|s| s.total_specials)}
            />

            {if !category_items.is_empty() {
                html! {
                    <div class="mobile-only">
                        <CategoryTabs
                            items={category_items.clone()}
                            selected={filters.category.clone()}
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
                                selected={filters.category.clone()}
                                on_select={on_category_select}
                                total_count={category_tree.as_ref().map(|t| t.total_categorized)}
                            />
                        </aside>
                    }
                } else {
                    html! {}
                }}

                <div class="page-content">
                    <FilterChips
                        min_discount={filters.min_discount}
                        on_select={on_discount_select}
                    />

                    <div class="filters-row">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search specials..."
                            value={filters.search.clone()}
                            oninput={on_search_input}
                        />

                        <select class="filter-select" onchange={on_discount_change}>
                            {for crate::components::filter_chips::DISCOUNT_OPTIONS.iter().map(|(value, label)| {
                                html! {
                                    <option
                                        value={value.to_string()}
                                        selected={filters.min_discount == *value}
                                    >
                                        {*label}
                                    </option>
                                }
                            })}
                        </select>

                        <select class="filter-select" onchange={on_sort_change}>
                            {for SpecialsSort::ALL.iter().map(|sort| {
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
                        html! { <div class="error-banner">{format!("Could not load specials: {}", error)}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="results-meta">
                        <p>
                            {if state.is_loading {
                                "Loading...".to_string()
                            } else {
                                format!("Showing {} of {} specials", state.items.len(), state.total)
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
                                    {for state.items.iter().enumerate().map(|(index, special)| {
                                        html! {
                                            <SpecialCard
                                                key={format!("{}-{}", special.id, index)}
                                                special={special.clone()}
                                            />
                                        }
                                    })}
                                </div>
                                <LoadMoreTrigger
                                    on_load_more={specials.fetch_next_page.clone()}
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
                                filtered_hint="No specials match your filters. Try adjusting your search or clearing filters."
                                empty_hint="There are no specials available at the moment. Check back on Wednesday for new deals!"
                            />
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
