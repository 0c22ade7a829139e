use std::rc::Rc;

use shared::{SpecialsQuery, SpecialsSort, StaplesQuery, StaplesSort};
use yew::prelude::*;

/// Search terms shorter than this are not sent to the backend; one or two
/// keystrokes match half the catalogue and are not worth a request.
pub const MIN_SEARCH_LEN: usize = 2;

pub const SPECIALS_PAGE_SIZE: u32 = 50;
pub const STAPLES_PAGE_SIZE: u32 = 50;

/// Category selection as a single tagged value, so a slug selection and an
/// id selection can never both be set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    None,
    BySlug(String),
    ById(i64),
}

impl CategorySelection {
    pub fn is_none(&self) -> bool {
        matches!(self, CategorySelection::None)
    }
}

/// UI filter state for the specials page. Mutated only through reducer
/// actions, so every transition (including clearing) is a single update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecialsFilterState {
    pub store: Option<String>,
    pub category: CategorySelection,
    pub min_discount: u32,
    /// Raw search box text; the committed request uses the debounced copy
    pub search: String,
    pub sort: SpecialsSort,
}

pub enum SpecialsFilterAction {
    /// Select a store, or deselect when it is already the active one
    ToggleStore(String),
    AllStores,
    SelectCategory(CategorySelection),
    /// Raw select-box value; non-numeric input falls back to 0
    SetMinDiscount(String),
    SetSearch(String),
    SetSort(SpecialsSort),
    ClearFilters,
}

impl Reducible for SpecialsFilterState {
    type Action = SpecialsFilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SpecialsFilterAction::ToggleStore(slug) => {
                next.store = if self.store.as_deref() == Some(slug.as_str()) {
                    None
                } else {
                    Some(slug)
                };
            }
            SpecialsFilterAction::AllStores => next.store = None,
            SpecialsFilterAction::SelectCategory(selection) => next.category = selection,
            SpecialsFilterAction::SetMinDiscount(raw) => {
                next.min_discount = raw.trim().parse().unwrap_or(0);
            }
            SpecialsFilterAction::SetSearch(text) => next.search = text,
            SpecialsFilterAction::SetSort(sort) => next.sort = sort,
            SpecialsFilterAction::ClearFilters => next = Self::default(),
        }
        Rc::new(next)
    }
}

impl SpecialsFilterState {
    pub fn has_active_filters(&self) -> bool {
        self.store.is_some()
            || !self.category.is_none()
            || self.min_discount > 0
            || !self.search.is_empty()
    }

    /// Compose the committed filter request. `debounced_search` is the
    /// settled search text, not the raw box contents.
    pub fn to_query(&self, debounced_search: &str) -> SpecialsQuery {
        let (category, category_id) = match &self.category {
            CategorySelection::None => (None, None),
            CategorySelection::BySlug(slug) => (Some(slug.clone()), None),
            CategorySelection::ById(id) => (None, Some(*id)),
        };

        SpecialsQuery {
            store: self.store.clone(),
            category,
            category_id,
            min_discount: self.min_discount,
            search: committed_search(debounced_search),
            sort: self.sort,
            limit: SPECIALS_PAGE_SIZE,
        }
    }
}

/// UI filter state for the compare page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaplesFilterState {
    pub store: Option<String>,
    pub category: Option<String>,
    pub search: String,
    pub sort: StaplesSort,
}

pub enum StaplesFilterAction {
    ToggleStore(String),
    AllStores,
    SelectCategory(Option<String>),
    SetSearch(String),
    SetSort(StaplesSort),
    ClearFilters,
}

impl Reducible for StaplesFilterState {
    type Action = StaplesFilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StaplesFilterAction::ToggleStore(slug) => {
                next.store = if self.store.as_deref() == Some(slug.as_str()) {
                    None
                } else {
                    Some(slug)
                };
            }
            StaplesFilterAction::AllStores => next.store = None,
            StaplesFilterAction::SelectCategory(category) => next.category = category,
            StaplesFilterAction::SetSearch(text) => next.search = text,
            StaplesFilterAction::SetSort(sort) => next.sort = sort,
            StaplesFilterAction::ClearFilters => next = Self::default(),
        }
        Rc::new(next)
    }
}

impl StaplesFilterState {
    pub fn has_active_filters(&self) -> bool {
        self.store.is_some() || self.category.is_some() || !self.search.is_empty()
    }

    pub fn to_query(&self, debounced_search: &str) -> StaplesQuery {
        StaplesQuery {
            store: self.store.clone(),
            category: self.category.clone(),
            search: committed_search(debounced_search),
            sort: self.sort,
            limit: STAPLES_PAGE_SIZE,
        }
    }
}

/// Both pages apply the same minimum-length rule before a search term is
/// included in a request.
fn committed_search(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.chars().count() >= MIN_SEARCH_LEN {
        Some(trimmed.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(
        state: SpecialsFilterState,
        action: SpecialsFilterAction,
    ) -> Rc<SpecialsFilterState> {
        Rc::new(state).reduce(action)
    }

    #[test]
    fn test_clear_filters_resets_everything_in_one_transition() {
        let dirty = SpecialsFilterState {
            store: Some("coles".to_string()),
            category: CategorySelection::BySlug("dairy".to_string()),
            min_discount: 50,
            search: "milk".to_string(),
            sort: SpecialsSort::Price,
        };

        let cleared = reduce(dirty, SpecialsFilterAction::ClearFilters);
        assert_eq!(*cleared, SpecialsFilterState::default());
        assert!(!cleared.has_active_filters());
    }

    #[test]
    fn test_category_id_replaces_slug_selection() {
        let state = SpecialsFilterState {
            category: CategorySelection::BySlug("dairy".to_string()),
            ..Default::default()
        };

        let next = reduce(
            state,
            SpecialsFilterAction::SelectCategory(CategorySelection::ById(7)),
        );
        assert_eq!(next.category, CategorySelection::ById(7));

        let query = next.to_query("");
        assert_eq!(query.category, None);
        assert_eq!(query.category_id, Some(7));
    }

    #[test]
    fn test_non_numeric_discount_falls_back_to_zero() {
        let state = reduce(
            SpecialsFilterState::default(),
            SpecialsFilterAction::SetMinDiscount("banana".to_string()),
        );
        assert_eq!(state.min_discount, 0);

        let state = reduce(
            (*state).clone(),
            SpecialsFilterAction::SetMinDiscount(" 25 ".to_string()),
        );
        assert_eq!(state.min_discount, 25);
    }

    #[test]
    fn test_toggle_store_deselects_active_store() {
        let selected = reduce(
            SpecialsFilterState::default(),
            SpecialsFilterAction::ToggleStore("iga".to_string()),
        );
        assert_eq!(selected.store.as_deref(), Some("iga"));

        let deselected = reduce(
            (*selected).clone(),
            SpecialsFilterAction::ToggleStore("iga".to_string()),
        );
        assert_eq!(deselected.store, None);

        let switched = reduce(
            (*selected).clone(),
            SpecialsFilterAction::ToggleStore("aldi".to_string()),
        );
        assert_eq!(switched.store.as_deref(), Some("aldi"));
    }

    #[test]
    fn test_short_search_is_not_committed() {
        let state = SpecialsFilterState::default();
        assert_eq!(state.to_query("m").search, None);
        assert_eq!(state.to_query("  m  ").search, None);
        assert_eq!(state.to_query("mi").search.as_deref(), Some("mi"));
        assert_eq!(state.to_query(" milk ").search.as_deref(), Some("milk"));
    }

    #[test]
    fn test_raw_search_does_not_leak_into_query() {
        let state = SpecialsFilterState {
            search: "unsettled text".to_string(),
            ..Default::default()
        };
        // Only the debounced copy matters for the request.
        assert_eq!(state.to_query("").search, None);
    }

    #[test]
    fn test_staples_clear_filters() {
        let dirty = StaplesFilterState {
            store: Some("woolworths".to_string()),
            category: Some("bakery".to_string()),
            search: "bread".to_string(),
            sort: StaplesSort::PriceHigh,
        };

        let cleared = Rc::new(dirty).reduce(StaplesFilterAction::ClearFilters);
        assert_eq!(*cleared, StaplesFilterState::default());
    }

    #[test]
    fn test_specials_query_uses_page_size() {
        let query = SpecialsFilterState::default().to_query("");
        assert_eq!(query.limit, SPECIALS_PAGE_SIZE);
        assert_eq!(query.sort, SpecialsSort::Discount);
    }
}
