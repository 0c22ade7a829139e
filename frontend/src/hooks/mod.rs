pub mod pagination;
pub mod use_categories;
pub mod use_debounced_value;
pub mod use_infinite_query;
pub mod use_specials;
pub mod use_staples;
pub mod use_stats;
