/// The fixed roster of tracked stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreInfo {
    pub slug: &'static str,
    pub name: &'static str,
}

pub static STORES: [StoreInfo; 4] = [
    StoreInfo {
        slug: "woolworths",
        name: "Woolworths",
    },
    StoreInfo {
        slug: "coles",
        name: "Coles",
    },
    StoreInfo {
        slug: "aldi",
        name: "ALDI",
    },
    StoreInfo {
        slug: "iga",
        name: "IGA",
    },
];

/// CSS modifier class carrying a store's brand colour; unknown slugs get
/// a neutral badge.
pub fn store_class(slug: &str) -> &'static str {
    match slug {
        "woolworths" => "store-woolworths",
        "coles" => "store-coles",
        "aldi" => "store-aldi",
        "iga" => "store-iga",
        _ => "store-other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_store_has_a_brand_class() {
        for store in STORES {
            assert_ne!(store_class(store.slug), "store-other");
        }
        assert_eq!(store_class("corner-shop"), "store-other");
    }
}
