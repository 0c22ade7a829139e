use std::collections::HashMap;

use yew::prelude::*;

use crate::stores::{store_class, STORES};

#[derive(Properties, PartialEq)]
pub struct StoreTabsProps {
    pub selected: Option<String>,
    /// Emits the clicked slug, or `None` for "All Stores"; the page decides
    /// whether that toggles the current selection off
    pub on_select: Callback<Option<String>>,
    /// Hover callback used to warm the cache for a store's first page
    #[prop_or_default]
    pub on_hover: Option<Callback<Option<String>>>,
    /// Per-store counts from the stats endpoint
    #[prop_or_default]
    pub counts: Option<HashMap<String, u64>>,
    #[prop_or_default]
    pub total: Option<u64>,
}

/// Store filter tab row: "All Stores" plus one tab per tracked store.
#[function_component(StoreTabs)]
pub fn store_tabs(props: &StoreTabsProps) -> Html {
    let all_selected = props.selected.is_none();

    let on_all_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(None))
    };
    let on_all_hover = props.on_hover.clone().map(|on_hover| {
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    });

    html! {
        <div class="store-tabs">
            <button
                class={classes!("store-tab", all_selected.then_some("selected"))}
                onclick={on_all_click}
                onmouseenter={on_all_hover}
            >
                {"All Stores"}
                {if let Some(total) = props.total {
                    html! { <span class="store-count">{format!("({})", total)}</span> }
                } else {
                    html! {}
                }}
            </button>

            {for STORES.iter().map(|store| {
                let is_selected = props.selected.as_deref() == Some(store.slug);
                let on_click = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(Some(store.slug.to_string())))
                };
                let on_hover = props.on_hover.clone().map(|on_hover| {
                    Callback::from(move |_: MouseEvent| on_hover.emit(Some(store.slug.to_string())))
                });
                let count = props
                    .counts
                    .as_ref()
                    .and_then(|counts| counts.get(store.slug).copied());

                html! {
                    <button
                        class={classes!(
                            "store-tab",
                            store_class(store.slug),
                            is_selected.then_some("selected"),
                        )}
                        onclick={on_click}
                        onmouseenter={on_hover}
                    >
                        {store.name}
                        {if let Some(count) = count {
                            html! { <span class="store-count">{format!("({})", count)}</span> }
                        } else {
                            html! {}
                        }}
                    </button>
                }
            })}
        </div>
    }
}
