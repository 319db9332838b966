//! Route handlers

use axum::{extract::{Path, Query, State}, http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};
use validator::Validate;

use crate::catalog::RELATED_PRODUCTS_LIMIT;
use crate::domain::{Category, Price, PriceRange, Product, SortKey, VariantField};
use crate::query::{self, Facets, Page, PageLink, SearchOptions, DEFAULT_SUGGESTION_LIMIT, PRODUCTS_PER_PAGE};
use crate::seo::PageMetadata;
use crate::whatsapp::WhatsAppMessage;
use crate::{sitemap, StorefrontError};

use super::{ApiError, AppState};

const MAX_PER_PAGE: usize = 100;
const MAX_SUGGESTIONS: usize = 20;

/// Listing filters. List-valued params are comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub tier: Option<String>,
    pub color: Option<String>,
    pub shape: Option<String>,
    pub size: Option<String>,
    pub in_stock: Option<bool>,
    pub sort: Option<SortKey>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl ListParams {
    pub fn to_options(&self) -> SearchOptions {
        let mut options = SearchOptions::new().categories(split_list(self.category.as_deref()));
        options.query = self.q.clone();
        if self.min_price.is_some() || self.max_price.is_some() {
            options.price_range = Some(PriceRange::new(self.min_price.unwrap_or(0), self.max_price.unwrap_or(u64::MAX)));
        }
        for (field, raw) in [
            (VariantField::Tier, &self.tier),
            (VariantField::Color, &self.color),
            (VariantField::Shape, &self.shape),
            (VariantField::Size, &self.size),
        ] {
            options = options.variant(field, split_list(raw.as_deref()));
        }
        options.in_stock_only = self.in_stock.unwrap_or(false);
        options.sort_by = self.sort;
        options
    }

    fn page(&self) -> usize { self.page.unwrap_or(1).max(1) }
    fn per_page(&self) -> usize { self.per_page.unwrap_or(PRODUCTS_PER_PAGE).clamp(1, MAX_PER_PAGE) }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| s.split(',').map(str::trim).filter(|v| !v.is_empty()).map(str::to_string).collect())
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub page: Page<Product>,
    pub pages: Vec<PageLink>,
    pub facets: Facets,
    pub query: SearchOptions,
}

fn list_response(scope: &[Product], params: &ListParams) -> ProductListResponse {
    let options = params.to_options();
    let results = query::search_and_filter(scope, &options);
    let page = Page::of(&results, params.page(), params.per_page());
    ProductListResponse {
        pages: query::page_window(page.page, page.total_pages),
        page,
        facets: Facets::from_products(scope),
        query: options,
    }
}

#[instrument(name = "handler::list_products", skip(state))]
pub async fn list_products(State(state): State<AppState>, Query(params): Query<ListParams>) -> Json<ProductListResponse> {
    let response = list_response(state.catalog.products(), &params);
    info!(matched = response.page.total_items, "products listed");
    Json(response)
}

#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub category_slug: Option<String>,
    pub savings: Price,
    pub discount_percentage: u64,
    pub order_url: String,
    pub related: Vec<Product>,
    pub metadata: PageMetadata,
    pub structured_data: Value,
}

#[instrument(name = "handler::get_product", skip(state))]
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ProductDetail>, ApiError> {
    let catalog = &state.catalog;
    let product = catalog.product(&id).ok_or_else(|| StorefrontError::ProductNotFound(id.clone()))?;
    Ok(Json(ProductDetail {
        category_slug: catalog.category_for_product(product).map(|c| c.slug().to_string()),
        savings: product.savings(),
        discount_percentage: product.discount_percentage(),
        order_url: state.links.product_url(product),
        related: catalog.related_products(product, RELATED_PRODUCTS_LIMIT),
        metadata: state.seo.product_metadata(product),
        structured_data: state.seo.product_structured_data(product),
        product: product.clone(),
    }))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog.categories().to_vec())
}

#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    pub category: Category,
    #[serde(flatten)]
    pub listing: ProductListResponse,
    pub metadata: PageMetadata,
}

#[instrument(name = "handler::get_category", skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<CategoryDetail>, ApiError> {
    let category = state.catalog.category(&slug).ok_or_else(|| StorefrontError::CategoryNotFound(slug.clone()))?;
    let in_category = state.catalog.products_in_category(&slug)?;
    Ok(Json(CategoryDetail {
        category: category.clone(),
        listing: list_response(&in_category, &params),
        metadata: state.seo.category_metadata(Some(category)),
    }))
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

pub async fn suggestions(State(state): State<AppState>, Query(params): Query<SuggestParams>) -> Json<Vec<String>> {
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT).min(MAX_SUGGESTIONS);
    Json(query::suggestions(state.catalog.products(), &params.q, limit))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind { General, Support }

#[derive(Debug, Deserialize)]
pub struct OrderLinkParams {
    pub product: Option<String>,
    pub kind: Option<LinkKind>,
    pub name: Option<String>,
}

/// `product` wins over `kind`; with neither, a general inquiry.
pub async fn order_link(State(state): State<AppState>, Query(params): Query<OrderLinkParams>) -> Result<Json<Value>, ApiError> {
    let mut message = match (&params.product, &params.kind) {
        (Some(id), _) => {
            let product = state.catalog.product(id).ok_or_else(|| StorefrontError::ProductNotFound(id.clone()))?;
            WhatsAppMessage::product_inquiry(product)
        }
        (None, Some(LinkKind::Support)) => WhatsAppMessage::support(),
        (None, _) => WhatsAppMessage::general_inquiry(),
    };
    if let Some(name) = params.name {
        message = message.from_customer(name);
    }
    Ok(Json(serde_json::json!({ "url": state.links.url(&message) })))
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// Accepts the contact form. Nothing is stored or forwarded.
#[instrument(name = "handler::submit_contact", skip_all)]
pub async fn submit_contact(Json(request): Json<ContactRequest>) -> Result<Json<Value>, ApiError> {
    request.validate()?;
    info!(subject = %request.subject, chars = request.message.len(), "contact form received");
    Ok(Json(serde_json::json!({
        "status": "received",
        "message": "Thank you for your message! We'll get back to you within 24 hours."
    })))
}

pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let entries = sitemap::entries(&state.site_base_url, &state.catalog, state.started_at);
    ([(header::CONTENT_TYPE, "application/xml")], sitemap::render_xml(&entries))
}
