//! Product catalog operations.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;
use url::form_urlencoded;

use shopwire_core::{Product, ProductId};

use crate::error::Result;
use crate::http::ApiClient;

#[derive(Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct ProductEnvelope {
    product: Product,
}

/// Optional catalog filters.
///
/// Omitted filters never appear in the query string; with no filters at
/// all, the request carries no query string.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Restrict to one category.
    pub category: Option<String>,
    /// Minimum unit price, inclusive.
    pub min_price: Option<Decimal>,
    /// Maximum unit price, inclusive.
    pub max_price: Option<Decimal>,
    /// Free-text search term.
    pub search: Option<String>,
}

impl ProductFilters {
    /// Serialize the present filters as a query string, without the `?`.
    /// Empty when no filter is set.
    fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = &self.category {
            query.append_pair("category", category);
        }
        if let Some(min_price) = &self.min_price {
            query.append_pair("minPrice", &min_price.to_string());
        }
        if let Some(max_price) = &self.max_price {
            query.append_pair("maxPrice", &max_price.to_string());
        }
        if let Some(search) = &self.search {
            query.append_pair("search", search);
        }
        query.finish()
    }
}

/// Product catalog façade.
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    /// Create a products façade over the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List products, optionally filtered.
    ///
    /// No identity is required; the catalog is public.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ApiError`] from the request.
    #[instrument(skip(self))]
    pub async fn list(&self, filters: Option<&ProductFilters>) -> Result<Vec<Product>> {
        let query = filters.map_or_else(String::new, ProductFilters::to_query);
        let path = if query.is_empty() {
            "/api/products".to_string()
        } else {
            format!("/api/products?{query}")
        };
        let envelope: ProductsEnvelope = self.client.get(&path, None).await?;
        Ok(envelope.products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ApiError`]; an unknown id surfaces as the
    /// server's 404.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get(&self, id: &ProductId) -> Result<Product> {
        let envelope: ProductEnvelope = self
            .client
            .get(&format!("/api/products/{id}"), None)
            .await?;
        Ok(envelope.product)
    }
}
