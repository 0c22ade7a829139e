pub mod category_nav;
pub mod empty_state;
pub mod filter_chips;
pub mod load_more;
pub mod special_card;
pub mod staple_card;
pub mod store_tabs;

/// Shown in place of a product image that is missing or fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.svg";
