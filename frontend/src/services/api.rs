use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{
    CategoryTreeResponse, Page, Special, SpecialsPageResponse, SpecialsQuery, Staple,
    StapleCategoriesResponse, StaplesPageResponse, StaplesQuery, StatsResponse,
};
use thiserror::Error;

/// What went wrong talking to the backend. `Network` is a transport
/// failure, `Server` a non-success status, `Decode` an unparseable body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

/// API client for the price-comparison backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server { status, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch one page of specials starting at `offset`.
    pub async fn get_specials(
        &self,
        query: &SpecialsQuery,
        offset: u32,
    ) -> Result<Page<Special>, ApiError> {
        let path = format!("/api/specials?{}", query.query_string(offset));
        let response: SpecialsPageResponse = self.get_json(&path).await?;
        Ok(Page::new(response.items, response.total, offset))
    }

    /// Fetch one page of cross-store staples starting at `offset`.
    pub async fn get_staples(
        &self,
        query: &StaplesQuery,
        offset: u32,
    ) -> Result<Page<Staple>, ApiError> {
        let path = format!("/api/staples?{}", query.query_string(offset));
        let response: StaplesPageResponse = self.get_json(&path).await?;
        Ok(Page::new(response.products, response.total, offset))
    }

    /// Aggregate counters for the specials header strip.
    pub async fn get_stats(&self) -> Result<StatsResponse, ApiError> {
        self.get_json("/api/stats").await
    }

    /// Specials categories with counts, selected by id.
    pub async fn get_category_tree(&self) -> Result<CategoryTreeResponse, ApiError> {
        self.get_json("/api/categories/tree").await
    }

    /// Staples categories with counts, selected by slug.
    pub async fn get_staple_categories(&self) -> Result<StapleCategoriesResponse, ApiError> {
        self.get_json("/api/staples/categories").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_base_url() {
        let client = ApiClient::new();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[wasm_bindgen_test]
    fn test_custom_base_url() {
        let client = ApiClient::with_base_url("https://deals.example".to_string());
        assert_eq!(client.base_url, "https://deals.example");
    }
}
