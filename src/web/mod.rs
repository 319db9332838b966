//! HTTP surface
//!
//! Read-only JSON views over the shared catalog, plus `sitemap.xml` and the
//! simulated contact form. Handlers never mutate state.

pub mod handlers;

use std::sync::Arc;

use axum::{http::StatusCode, response::{IntoResponse, Response}, routing::{get, post}, Json, Router};
use chrono::{DateTime, Utc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::seo::Seo;
use crate::whatsapp::OrderLinks;
use crate::StorefrontError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub links: OrderLinks,
    pub seo: Seo,
    pub site_base_url: String,
    /// Reported as `lastmod` for every sitemap entry.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            links: OrderLinks::new(config.whatsapp_number.clone()),
            seo: Seo::new(config.brand_name.clone()),
            site_base_url: config.site_base_url.clone(),
            started_at: Utc::now(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "yatanz-storefront"})) }))
        .route("/sitemap.xml", get(handlers::sitemap_xml))
        .route("/api/v1/products", get(handlers::list_products))
        .route("/api/v1/products/:id", get(handlers::get_product))
        .route("/api/v1/categories", get(handlers::list_categories))
        .route("/api/v1/categories/:slug", get(handlers::get_category))
        .route("/api/v1/suggestions", get(handlers::suggestions))
        .route("/api/v1/order-link", get(handlers::order_link))
        .route("/api/v1/contact", post(handlers::submit_contact))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error body returned by every handler.
pub struct ApiError(StorefrontError);

impl From<StorefrontError> for ApiError {
    fn from(err: StorefrontError) -> Self { Self(err) }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self { Self(StorefrontError::Validation(err)) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StorefrontError::ProductNotFound(_) | StorefrontError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            StorefrontError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "request rejected");
        }
        (status, Json(serde_json::json!({"error": self.0.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let catalog = Catalog::from_json_str(include_str!("../../data/catalog.json")).unwrap();
        router(AppState::new(catalog, &AppConfig::default()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let resp = app().oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_search_products() {
        let (status, body) = get_json("/api/v1/products?q=stand&sort=price-low").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["page"]["items"].as_array().unwrap().iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Umbrella Stand", "Printer Stand"]);
        assert_eq!(body["page"]["total_items"], 2);
    }

    #[tokio::test]
    async fn test_filter_products_by_list_params() {
        let (_, body) = get_json("/api/v1/products?category=Trolleys,Kitchen%20Storage&tier=3%20Tier&in_stock=true").await;
        let ids: Vec<&str> = body["page"]["items"].as_array().unwrap().iter().map(|p| p["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["spice-rack-3", "trolley-3-tier"]);
        let (_, body) = get_json("/api/v1/products?min_price=1000&max_price=1100").await;
        assert_eq!(body["page"]["items"][0]["id"], "umbrella-stand");
        assert_eq!(body["page"]["total_items"], 1);
    }

    #[tokio::test]
    async fn test_huge_page_number_returns_empty_page() {
        let (status, body) = get_json("/api/v1/products?per_page=1&page=18446744073709551615").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["page"]["items"].as_array().unwrap().is_empty());
        assert_eq!(body["page"]["total_pages"], 11);
        assert_eq!(body["pages"].as_array().unwrap().last().unwrap()["page"], 11);
    }

    #[tokio::test]
    async fn test_product_detail_and_not_found() {
        let (status, body) = get_json("/api/v1/products/trolley-3-tier").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category_slug"], "trolleys");
        assert_eq!(body["related"].as_array().unwrap().len(), 1);
        assert_eq!(body["savings"], 500);
        assert!(body["order_url"].as_str().unwrap().starts_with("https://wa.me/919999999999?text="));
        let (status, body) = get_json("/api/v1/products/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_category_page() {
        let (status, body) = get_json("/api/v1/categories/accessories?sort=name").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"]["items"][0]["name"], "Adhesive Hooks");
        assert_eq!(body["metadata"]["title"], "Accessories - Yatanz: Chaos to Class");
        let (status, _) = get_json("/api/v1/categories/garden").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_suggestions_and_order_link() {
        let (_, body) = get_json("/api/v1/suggestions?q=stand").await;
        assert_eq!(body, serde_json::json!(["Umbrella Stand", "Printer Stand"]));
        let (status, body) = get_json("/api/v1/order-link?kind=support&name=Asha").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["url"].as_str().unwrap().ends_with("My%20name%20is%20Asha."));
    }

    #[tokio::test]
    async fn test_contact_validation() {
        let post = |json: &'static str| {
            Request::post("/api/v1/contact").header(header::CONTENT_TYPE, "application/json").body(Body::from(json)).unwrap()
        };
        let ok = app().oneshot(post(r#"{"name":"Asha","email":"asha@example.com","message":"Do you ship to Pune?"}"#)).await.unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        let bad = app().oneshot(post(r#"{"name":"","email":"not-an-email","message":""}"#)).await.unwrap();
        assert_eq!(bad.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_sitemap_xml() {
        let resp = app().oneshot(Request::get("/sitemap.xml").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/xml");
        let body = String::from_utf8(to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();
        assert!(body.contains("<loc>https://yatanz.com/category/trolleys</loc>"));
        assert_eq!(body.matches("<url>").count(), 4 + 4 + 11);
    }
}
