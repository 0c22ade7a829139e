use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    /// Whether any filter is set; decides which message and action to show
    pub has_active_filters: bool,
    pub on_clear_filters: Callback<()>,
    /// Shown when the emptiness is down to the active filters
    pub filtered_hint: AttrValue,
    /// Shown when there is simply nothing to list
    pub empty_hint: AttrValue,
}

/// Zero-results panel. An empty result set is a valid terminal state, not
/// an error; with filters active it offers a way out.
#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let on_clear = {
        let on_clear_filters = props.on_clear_filters.clone();
        Callback::from(move |_| on_clear_filters.emit(()))
    };

    html! {
        <div class="empty-state">
            <div class="empty-state-glyph">{"🔍"}</div>
            <h3>{"No results found"}</h3>
            <p>
                {if props.has_active_filters {
                    props.filtered_hint.clone()
                } else {
                    props.empty_hint.clone()
                }}
            </p>
            {if props.has_active_filters {
                html! {
                    <button class="btn-clear-filters" onclick={on_clear}>
                        {"Clear Filters"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
