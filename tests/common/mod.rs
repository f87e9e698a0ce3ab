//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use catalog::adapters::{MockHttpClient, ReqwestHttpClient};
use catalog::api::ProductApi;
use catalog::app::{App, AppMessage};
use catalog::models::Product;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub const MOCK_BASE: &str = "http://catalog.test";

/// A product as the server would return it.
pub fn product(id: i64, code: &str) -> Product {
    Product {
        id,
        product_code: code.to_string(),
        barcode: code.to_string(),
        created_at: "2024-03-01T10:15:00.000Z".to_string(),
        updated_at: "2024-03-01T10:15:00.000Z".to_string(),
    }
}

/// API client talking to a real server (wiremock) over reqwest.
pub fn live_api(base_url: &str) -> ProductApi {
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(5)).unwrap();
    ProductApi::new(base_url, Arc::new(http))
}

/// App wired to a mock transport, with its message receiver taken out.
pub fn mock_app(mock: &MockHttpClient) -> (App, UnboundedReceiver<AppMessage>) {
    let api = ProductApi::new(MOCK_BASE, Arc::new(mock.clone()));
    let mut app = App::new(Arc::new(api));
    let rx = app.message_rx.take().unwrap();
    (app, rx)
}

/// Feed messages to `app` until one matching `done` has been handled.
pub async fn pump_until<F>(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, done: F)
where
    F: Fn(&AppMessage) -> bool,
{
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("message channel closed");
        let finished = done(&msg);
        app.handle_message(msg);
        if finished {
            return;
        }
    }
}
