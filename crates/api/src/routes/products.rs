//! Public product routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use demart_core::ProductId;

use crate::db::products::{ProductFilter, ProductSort, StockFilter};
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::services::catalog::CatalogService;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query parameters for GET /api/products.
///
/// `color` takes a comma-separated list; `stock` is `in_stock` or
/// `out_of_stock`; `sort` is `price_low` or `price_high`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_discount: Option<i32>,
    pub stock: Option<String>,
    pub sort: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// One page of products in the shape clients page through.
#[derive(Debug, Serialize)]
pub struct ProductPageResponse {
    pub content: Vec<Product>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl ProductQuery {
    fn into_filter(self) -> Result<ProductFilter> {
        let stock = match self.stock.as_deref() {
            None => None,
            Some("in_stock") => Some(StockFilter::InStock),
            Some("out_of_stock") => Some(StockFilter::OutOfStock),
            Some(other) => {
                return Err(AppError::BadRequest(format!("unknown stock filter: {other}")));
            }
        };

        let sort = match self.sort.as_deref() {
            None => None,
            Some("price_low") => Some(ProductSort::PriceLowToHigh),
            Some("price_high") => Some(ProductSort::PriceHighToLow),
            Some(other) => {
                return Err(AppError::BadRequest(format!("unknown sort order: {other}")));
            }
        };

        let colors = self
            .color
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ProductFilter {
            category: self.category,
            colors,
            size: self.size,
            min_price: self.min_price,
            max_price: self.max_price,
            min_discount: self.min_discount,
            stock,
            sort,
            page_number: self.page_number.unwrap_or(0).max(0),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
        })
    }
}

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<(StatusCode, Json<ProductPageResponse>)> {
    let filter = query.into_filter()?;
    let catalog = CatalogService::new(state.pool());

    let page = catalog.filtered_products(&filter).await?;
    let total_pages = (page.total_elements as u64).div_ceil(filter.page_size as u64) as i64;

    Ok((
        StatusCode::ACCEPTED,
        Json(ProductPageResponse {
            content: page.content,
            page_number: filter.page_number,
            page_size: filter.page_size,
            total_elements: page.total_elements,
            total_pages,
        }),
    ))
}

/// GET /api/products/id/{id}
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Product>)> {
    let catalog = CatalogService::new(state.pool());
    let product = catalog.find_product_by_id(ProductId::new(id)).await?;
    Ok((StatusCode::ACCEPTED, Json(product)))
}

/// Query parameters for GET /api/products/search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/products/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>> {
    let catalog = CatalogService::new(state.pool());
    let products = catalog.search_products(&query.q).await?;
    Ok(Json(products))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_color_list_is_split_and_trimmed() {
        let query = ProductQuery {
            color: Some("red, blue ,green".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.colors, vec!["red", "blue", "green"]);
    }

    #[test]
    fn test_unknown_stock_filter_is_bad_request() {
        let query = ProductQuery {
            stock: Some("backordered".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_filter(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_paging_defaults() {
        let filter = ProductQuery::default().into_filter().unwrap();
        assert_eq!(filter.page_number, 0);
        assert_eq!(filter.page_size, DEFAULT_PAGE_SIZE);
    }
}
