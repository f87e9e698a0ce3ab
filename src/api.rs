//! Product API client.
//!
//! Thin wrapper over the catalog's REST endpoints. Every call raises the
//! shared loading flag before the request goes out and lowers it once the
//! call finishes, whether it succeeded, failed, or was dropped mid-flight.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::error::{ApiError, ApiResult};
use crate::models::{Product, ProductDraft};
use crate::traits::{json_headers, HttpClient, Response};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

/// Lowers the loading flag when dropped.
struct LoadingGuard<'a> {
    flag: &'a watch::Sender<bool>,
}

impl<'a> LoadingGuard<'a> {
    fn raise(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}

/// Client for the product catalog API.
///
/// Cheap to share behind an `Arc`; the loading flag is shared by every call
/// made through the same instance.
pub struct ProductApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
    loading_tx: watch::Sender<bool>,
}

impl ProductApi {
    /// Create a client for `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let (loading_tx, _) = watch::channel(false);
        Self {
            base_url,
            http,
            loading_tx,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Subscribe to the loading flag.
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading_tx.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading_tx.borrow()
    }

    /// `GET /products`
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self.send(Verb::Get, &url, None).await?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let products: Option<Vec<Product>> = response.json()?;
        Ok(products.unwrap_or_default())
    }

    /// `GET /products/{id}`
    pub async fn get_product(&self, id: i64) -> ApiResult<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        let response = self.send(Verb::Get, &url, None).await?;
        Ok(response.json()?)
    }

    /// `GET /products/search?product_code=CODE`
    pub async fn search_by_code(&self, code: &str) -> ApiResult<Product> {
        let url = format!(
            "{}/products/search?product_code={}",
            self.base_url,
            urlencoding::encode(code)
        );
        let response = self.send(Verb::Get, &url, None).await?;
        Ok(response.json()?)
    }

    /// `POST /products`
    pub async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        let url = format!("{}/products", self.base_url);
        let body = serde_json::to_string(draft)?;
        let response = self.send(Verb::Post, &url, Some(body)).await?;
        Ok(response.json()?)
    }

    /// `PUT /products/{id}`
    pub async fn update_product(&self, id: i64, draft: &ProductDraft) -> ApiResult<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        let body = serde_json::to_string(draft)?;
        let response = self.send(Verb::Put, &url, Some(body)).await?;
        Ok(response.json()?)
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        let url = format!("{}/products/{}", self.base_url, id);
        self.send(Verb::Delete, &url, None).await?;
        Ok(())
    }

    async fn send(&self, verb: Verb, url: &str, body: Option<String>) -> ApiResult<Response> {
        let _loading = LoadingGuard::raise(&self.loading_tx);
        debug!("{} {}", verb.as_str(), url);

        let headers = json_headers();
        let body = body.unwrap_or_default();
        let result = match verb {
            Verb::Get => self.http.get(url, &headers).await,
            Verb::Post => self.http.post(url, &body, &headers).await,
            Verb::Put => self.http.put(url, &body, &headers).await,
            Verb::Delete => self.http.delete(url, &headers).await,
        };

        let result = result
            .map_err(ApiError::from)
            .and_then(|response| {
                if response.is_success() {
                    Ok(response)
                } else {
                    Err(ApiError::server(response.status, error_message(&response)))
                }
            });

        if let Err(ref e) = result {
            error!("{} {} failed: {}", verb.as_str(), url, e);
        }
        result
    }
}

/// Pull a readable message out of an error response.
///
/// Prefers a JSON `message` or `error` field, then the raw body, then the
/// status reason phrase.
fn error_message(response: &Response) -> String {
    if let Ok(value) = response.json::<serde_json::Value>() {
        for field in ["message", "error"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    let text = response.text().unwrap_or_default();
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::ErrorOrigin;
    use crate::traits::HttpError;
    use bytes::Bytes;

    const BASE: &str = "http://catalog.test";

    fn product(id: i64, code: &str) -> Product {
        Product {
            id,
            product_code: code.to_string(),
            barcode: code.to_string(),
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
            updated_at: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn api_with(mock: &MockHttpClient) -> ProductApi {
        ProductApi::new(BASE, Arc::new(mock.clone()))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = ProductApi::new("http://x:8080//", Arc::new(MockHttpClient::new()));
        assert_eq!(api.base_url(), "http://x:8080");
    }

    #[tokio::test]
    async fn test_list_products() {
        let mock = MockHttpClient::new();
        let products = vec![product(1, "AAAA-BBBB-CCCC-DDDD"), product(2, "EEEE-FFFF-GGGG-HHHH")];
        mock.set_response("GET", &format!("{BASE}/products"), MockResponse::json(200, &products));

        let api = api_with(&mock);
        let listed = api.list_products().await.unwrap();

        assert_eq!(listed, products);
        assert_eq!(mock.get_requests()[0].url, format!("{BASE}/products"));
    }

    #[tokio::test]
    async fn test_list_products_null_body_is_empty() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            &format!("{BASE}/products"),
            MockResponse::Success(Response::new(200, Bytes::from("null"))),
        );

        let listed = api_with(&mock).list_products().await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            &format!("{BASE}/products/99"),
            MockResponse::json(404, &serde_json::json!({"error": "product not found"})),
        );

        let err = api_with(&mock).get_product(99).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err, ApiError::server(404, "product not found"));
    }

    #[tokio::test]
    async fn test_search_encodes_code() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, &product(5, "AB12-CD34-EF56-GH78")));

        let found = api_with(&mock)
            .search_by_code("AB12 CD34")
            .await
            .unwrap();

        assert_eq!(found.id, 5);
        assert_eq!(
            mock.get_requests()[0].url,
            format!("{BASE}/products/search?product_code=AB12%20CD34")
        );
    }

    #[tokio::test]
    async fn test_create_product_sends_draft() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "POST",
            &format!("{BASE}/products"),
            MockResponse::json(201, &product(10, "AB12-CD34-EF56-GH78")),
        );

        let draft = ProductDraft::for_code("AB12-CD34-EF56-GH78");
        let created = api_with(&mock).create_product(&draft).await.unwrap();
        assert_eq!(created.id, 10);

        let request = &mock.get_requests()[0];
        assert_eq!(request.method, "POST");
        let sent: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["product_code"], "AB12-CD34-EF56-GH78");
        assert_eq!(sent["barcode"], "AB12-CD34-EF56-GH78");
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_update_product_uses_put() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "PUT",
            &format!("{BASE}/products/3"),
            MockResponse::json(200, &product(3, "ZZZZ-ZZZZ-ZZZZ-ZZZZ")),
        );

        let draft = ProductDraft {
            barcode: Some("ZZZZ-ZZZZ-ZZZZ-ZZZZ".to_string()),
            ..Default::default()
        };
        let updated = api_with(&mock).update_product(3, &draft).await.unwrap();
        assert_eq!(updated.product_code, "ZZZZ-ZZZZ-ZZZZ-ZZZZ");
        assert_eq!(mock.count("PUT"), 1);
    }

    #[tokio::test]
    async fn test_delete_product_ignores_body() {
        let mock = MockHttpClient::new();
        mock.set_response("DELETE", &format!("{BASE}/products/4"), MockResponse::status(204));

        api_with(&mock).delete_product(4).await.unwrap();
        assert_eq!(mock.count("DELETE"), 1);
    }

    #[tokio::test]
    async fn test_server_error_uses_reason_phrase_when_body_empty() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::status(503));

        let err = api_with(&mock).delete_product(1).await.unwrap_err();
        assert_eq!(err, ApiError::server(503, "Service Unavailable"));
    }

    #[tokio::test]
    async fn test_transport_error_is_client_origin() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let err = api_with(&mock).list_products().await.unwrap_err();
        assert_eq!(err.origin(), ErrorOrigin::Client);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_client_origin() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from("<html>"),
        )));

        let err = api_with(&mock).get_product(1).await.unwrap_err();
        assert_eq!(err.origin(), ErrorOrigin::Client);
    }

    #[tokio::test]
    async fn test_loading_flag_toggles_around_success() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, &Vec::<Product>::new()));
        let api = api_with(&mock);
        let mut loading = api.loading();

        assert!(!api.is_loading());
        api.list_products().await.unwrap();

        // The receiver saw a change, and the flag settled back to false.
        assert!(loading.has_changed().unwrap());
        assert!(!*loading.borrow_and_update());
        assert!(!api.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_cleared_after_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::status(500));
        let api = api_with(&mock);

        assert!(api.delete_product(1).await.is_err());
        assert!(!api.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_raised_while_in_flight() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, &Vec::<Product>::new()));
        mock.set_latency(std::time::Duration::from_millis(50));
        let api = Arc::new(api_with(&mock));
        let mut loading = api.loading();

        let task = {
            let api = api.clone();
            tokio::spawn(async move { api.list_products().await })
        };

        loading.changed().await.unwrap();
        assert!(*loading.borrow_and_update());

        task.await.unwrap().unwrap();
        assert!(!api.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_cleared_when_call_dropped() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, &Vec::<Product>::new()));
        mock.set_latency(std::time::Duration::from_secs(5));
        let api = api_with(&mock);

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            api.list_products(),
        )
        .await;

        assert!(result.is_err());
        assert!(!api.is_loading());
    }
}
