use yew::prelude::*;

use crate::filters::CategorySelection;

/// View model shared by the sidebar and the mobile tabs. Pages map their
/// category DTOs into this and translate selections back into actions.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryItem {
    pub selection: CategorySelection,
    pub name: String,
    pub icon: Option<String>,
    pub count: u64,
}

/// Emoji fallback for categories the backend has no icon for.
fn fallback_icon(selection: &CategorySelection) -> &'static str {
    let slug = match selection {
        CategorySelection::BySlug(slug) => slug.as_str(),
        _ => return "📦",
    };
    match slug {
        "fruit" => "🍎",
        "vegetables" => "🥕",
        "meat" => "🍗",
        "seafood" => "🐟",
        "dairy" => "🥛",
        "bakery" => "🍞",
        "deli" => "🥓",
        _ => "📦",
    }
}

fn icon_for(item: &CategoryItem) -> String {
    item.icon
        .clone()
        .unwrap_or_else(|| fallback_icon(&item.selection).to_string())
}

#[derive(Properties, PartialEq)]
pub struct CategoryNavProps {
    pub items: Vec<CategoryItem>,
    pub selected: CategorySelection,
    pub on_select: Callback<CategorySelection>,
    /// Count shown against the "All Products" entry, when known
    #[prop_or_default]
    pub total_count: Option<u64>,
}

/// Desktop category sidebar with counts.
#[function_component(CategorySidebar)]
pub fn category_sidebar(props: &CategoryNavProps) -> Html {
    let all_selected = props.selected.is_none();
    let on_all = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(CategorySelection::None))
    };

    html! {
        <div class="category-sidebar">
            <div class="category-sidebar-header">
                <h2>{"Categories"}</h2>
            </div>

            <button
                class={classes!("category-row", all_selected.then_some("selected"))}
                onclick={on_all}
            >
                <span class="category-icon">{"🏠"}</span>
                <span class="category-name">{"All Products"}</span>
                {if let Some(total) = props.total_count {
                    html! { <span class="category-count">{format!("({})", total)}</span> }
                } else {
                    html! {}
                }}
            </button>

            <div class="category-list">
                {for props.items.iter().map(|item| {
                    let is_selected = props.selected == item.selection;
                    let on_click = {
                        let on_select = props.on_select.clone();
                        let selection = item.selection.clone();
                        Callback::from(move |_| on_select.emit(selection.clone()))
                    };
                    html! {
                        <button
                            class={classes!("category-row", is_selected.then_some("selected"))}
                            onclick={on_click}
                        >
                            <span class="category-icon">{icon_for(item)}</span>
                            <span class="category-name">{&item.name}</span>
                            <span class="category-count">{format!("({})", item.count)}</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

/// Horizontally scrolling category tabs for narrow screens; same data and
/// selection behaviour as the sidebar.
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryNavProps) -> Html {
    let all_selected = props.selected.is_none();
    let on_all = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(CategorySelection::None))
    };

    html! {
        <div class="category-tabs">
            <button
                class={classes!("category-tab", all_selected.then_some("selected"))}
                onclick={on_all}
            >
                <span>{"🏠"}</span>
                <span>{"All"}</span>
            </button>

            {for props.items.iter().map(|item| {
                let is_selected = props.selected == item.selection;
                let on_click = {
                    let on_select = props.on_select.clone();
                    let selection = item.selection.clone();
                    Callback::from(move |_| on_select.emit(selection.clone()))
                };
                html! {
                    <button
                        class={classes!("category-tab", is_selected.then_some("selected"))}
                        onclick={on_click}
                    >
                        <span>{icon_for(item)}</span>
                        <span>{&item.name}</span>
                        <span class="category-count">{format!("({})", item.count)}</span>
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_icon_only_applies_to_slug_selections() {
        assert_eq!(
            fallback_icon(&CategorySelection::BySlug("dairy".to_string())),
            "🥛"
        );
        assert_eq!(
            fallback_icon(&CategorySelection::BySlug("unheard-of".to_string())),
            "📦"
        );
        assert_eq!(fallback_icon(&CategorySelection::ById(7)), "📦");
    }

    #[test]
    fn test_backend_icon_wins_over_fallback() {
        let item = CategoryItem {
            selection: CategorySelection::BySlug("dairy".to_string()),
            name: "Dairy".to_string(),
            icon: Some("🧀".to_string()),
            count: 12,
        };
        assert_eq!(icon_for(&item), "🧀");
    }
}
