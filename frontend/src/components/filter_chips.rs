use yew::prelude::*;

/// Quick minimum-discount options, mirroring the select box.
pub const DISCOUNT_OPTIONS: [(u32, &str); 4] = [
    (0, "All Discounts"),
    (25, "25%+ Off"),
    (50, "50%+ Off (Half Price)"),
    (75, "75%+ Off"),
];

#[derive(Properties, PartialEq)]
pub struct FilterChipsProps {
    pub min_discount: u32,
    pub on_select: Callback<u32>,
}

/// One-tap discount filter chips above the results grid.
#[function_component(FilterChips)]
pub fn filter_chips(props: &FilterChipsProps) -> Html {
    html! {
        <div class="filter-chips">
            {for DISCOUNT_OPTIONS.iter().map(|(value, label)| {
                let is_selected = props.min_discount == *value;
                let on_click = {
                    let on_select = props.on_select.clone();
                    let value = *value;
                    Callback::from(move |_| on_select.emit(value))
                };
                html! {
                    <button
                        class={classes!("filter-chip", is_selected.then_some("selected"))}
                        onclick={on_click}
                    >
                        {*label}
                    </button>
                }
            })}
        </div>
    }
}
