use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One discounted offer at a single store. The same logical product can
/// appear once per store, so render identity is (id, arrival index).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Special {
    pub id: i64,
    pub name: String,
    /// Current shelf price in dollars
    pub price: f64,
    /// Pre-discount price; absent when the store feed did not include one
    #[serde(default)]
    pub was_price: Option<f64>,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    /// Savings in cents
    #[serde(default)]
    pub savings_amount: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    pub store_slug: String,
    pub store_name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// An everyday product tracked across stores for price comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staple {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub was_price: Option<f64>,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    /// Savings versus the dearest store, in cents
    #[serde(default)]
    pub savings_amount: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    pub store_slug: String,
    pub store_name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Wire shape of `GET /api/specials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialsPageResponse {
    pub items: Vec<Special>,
    pub total: u64,
}

/// Wire shape of `GET /api/staples`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaplesPageResponse {
    pub products: Vec<Staple>,
    pub total: u64,
}

/// One fetched batch of results, tagged with the offset it was requested at.
/// The next page starts at `offset + items.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, offset: u32) -> Self {
        Self {
            items,
            total,
            offset,
        }
    }
}

/// Sort orders accepted by the specials endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialsSort {
    #[default]
    Discount,
    Price,
    Name,
}

impl SpecialsSort {
    pub const ALL: [SpecialsSort; 3] = [
        SpecialsSort::Discount,
        SpecialsSort::Price,
        SpecialsSort::Name,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            SpecialsSort::Discount => "discount",
            SpecialsSort::Price => "price",
            SpecialsSort::Name => "name",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "discount" => Some(SpecialsSort::Discount),
            "price" => Some(SpecialsSort::Price),
            "name" => Some(SpecialsSort::Name),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpecialsSort::Discount => "Biggest Discount",
            SpecialsSort::Price => "Lowest Price",
            SpecialsSort::Name => "Name A-Z",
        }
    }
}

/// Sort orders accepted by the staples endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaplesSort {
    #[default]
    Savings,
    PriceLow,
    PriceHigh,
    Name,
}

impl StaplesSort {
    pub const ALL: [StaplesSort; 4] = [
        StaplesSort::Savings,
        StaplesSort::PriceLow,
        StaplesSort::PriceHigh,
        StaplesSort::Name,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            StaplesSort::Savings => "savings",
            StaplesSort::PriceLow => "price_low",
            StaplesSort::PriceHigh => "price_high",
            StaplesSort::Name => "name",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "savings" => Some(StaplesSort::Savings),
            "price_low" => Some(StaplesSort::PriceLow),
            "price_high" => Some(StaplesSort::PriceHigh),
            "name" => Some(StaplesSort::Name),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StaplesSort::Savings => "Biggest Savings",
            StaplesSort::PriceLow => "Price: Low to High",
            StaplesSort::PriceHigh => "Price: High to Low",
            StaplesSort::Name => "Name A-Z",
        }
    }
}

/// Committed filter request for the specials endpoint. Value equality keys
/// the page cache, so every field that changes the result set lives here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecialsQuery {
    pub store: Option<String>,
    /// Category slug; mutually exclusive with `category_id`
    pub category: Option<String>,
    pub category_id: Option<i64>,
    /// Minimum discount percentage, 0 means no floor
    pub min_discount: u32,
    pub search: Option<String>,
    pub sort: SpecialsSort,
    pub limit: u32,
}

impl SpecialsQuery {
    /// Encode as a URL query string for the given page offset. Unset
    /// dimensions are omitted entirely rather than sent as empty values.
    pub fn query_string(&self, offset: u32) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(store) = &self.store {
            serializer.append_pair("store", store);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(category_id) = self.category_id {
            serializer.append_pair("category_id", &category_id.to_string());
        }
        if self.min_discount > 0 {
            serializer.append_pair("min_discount", &self.min_discount.to_string());
        }
        if let Some(search) = &self.search {
            serializer.append_pair("search", search);
        }
        serializer.append_pair("sort", self.sort.as_param());
        serializer.append_pair("offset", &offset.to_string());
        serializer.append_pair("limit", &self.limit.to_string());
        serializer.finish()
    }
}

/// Committed filter request for the staples endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaplesQuery {
    pub store: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: StaplesSort,
    pub limit: u32,
}

impl StaplesQuery {
    pub fn query_string(&self, offset: u32) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(store) = &self.store {
            serializer.append_pair("store", store);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(search) = &self.search {
            serializer.append_pair("search", search);
        }
        serializer.append_pair("sort", self.sort.as_param());
        serializer.append_pair("offset", &offset.to_string());
        serializer.append_pair("limit", &self.limit.to_string());
        serializer.finish()
    }
}

/// A specials category with its product count, from the category tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTreeResponse {
    pub categories: Vec<Category>,
    pub total_categorized: u64,
}

/// A staples category; staples are selected by slug rather than id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StapleCategory {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StapleCategoriesResponse {
    pub categories: Vec<StapleCategory>,
    pub total_products: u64,
}

/// Aggregate counters for the specials header strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_specials: u64,
    pub half_price_count: u64,
    #[serde(default)]
    pub by_store: HashMap<String, u64>,
    /// RFC 3339 timestamp of the last scrape, when known
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Render an RFC 3339 timestamp as a short date like "27 Jun 2025".
/// Falls back to the raw string if it does not parse.
pub fn format_updated_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 42,
            "name": "Tasty Cheese 1kg",
            "price": 8.5,
            "store_slug": "coles",
            "store_name": "Coles"
        }"#;

        let special: Special = serde_json::from_str(json).unwrap();
        assert_eq!(special.id, 42);
        assert_eq!(special.was_price, None);
        assert_eq!(special.discount_percent, None);
        assert_eq!(special.savings_amount, None);
        assert_eq!(special.image_url, None);
        assert_eq!(special.product_url, None);
        assert_eq!(special.category, None);
    }

    #[test]
    fn test_stats_deserializes_without_optional_fields() {
        let json = r#"{"total_specials": 120, "half_price_count": 30}"#;
        let stats: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_specials, 120);
        assert!(stats.by_store.is_empty());
        assert_eq!(stats.last_updated, None);
    }

    #[test]
    fn test_specials_query_omits_unset_dimensions() {
        let query = SpecialsQuery {
            store: None,
            category: None,
            category_id: None,
            min_discount: 0,
            search: None,
            sort: SpecialsSort::Discount,
            limit: 50,
        };

        assert_eq!(query.query_string(0), "sort=discount&offset=0&limit=50");
    }

    #[test]
    fn test_specials_query_includes_set_dimensions() {
        let query = SpecialsQuery {
            store: Some("coles".to_string()),
            category: None,
            category_id: Some(7),
            min_discount: 50,
            search: Some("milk".to_string()),
            sort: SpecialsSort::Price,
            limit: 50,
        };

        assert_eq!(
            query.query_string(100),
            "store=coles&category_id=7&min_discount=50&search=milk&sort=price&offset=100&limit=50"
        );
    }

    #[test]
    fn test_specials_query_encodes_search_text() {
        let query = SpecialsQuery {
            store: None,
            category: None,
            category_id: None,
            min_discount: 0,
            search: Some("full cream milk".to_string()),
            sort: SpecialsSort::Discount,
            limit: 50,
        };

        assert!(query.query_string(0).contains("search=full+cream+milk"));
    }

    #[test]
    fn test_staples_query_string() {
        let query = StaplesQuery {
            store: Some("aldi".to_string()),
            category: Some("dairy".to_string()),
            search: None,
            sort: StaplesSort::PriceLow,
            limit: 50,
        };

        assert_eq!(
            query.query_string(50),
            "store=aldi&category=dairy&sort=price_low&offset=50&limit=50"
        );
    }

    #[test]
    fn test_sort_param_round_trip() {
        for sort in SpecialsSort::ALL {
            assert_eq!(SpecialsSort::from_param(sort.as_param()), Some(sort));
        }
        for sort in StaplesSort::ALL {
            assert_eq!(StaplesSort::from_param(sort.as_param()), Some(sort));
        }
        assert_eq!(SpecialsSort::from_param("unknown"), None);
        assert_eq!(StaplesSort::from_param(""), None);
    }

    #[test]
    fn test_format_updated_date() {
        assert_eq!(
            format_updated_date("2025-06-27T12:00:00+10:00"),
            "27 Jun 2025"
        );
        assert_eq!(format_updated_date("not a date"), "not a date");
    }
}
