//! End-to-end controller flows driven through key presses.

mod common;

use catalog::adapters::{MockHttpClient, MockResponse};
use catalog::app::{AlertKind, AppMessage, Dialog, Focus};
use catalog::error::InputError;
use common::{mock_app, product, pump_until, MOCK_BASE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

const CODE: &str = "AB12-CD34-EF56-GH78";

fn press(app: &mut catalog::app::App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut catalog::app::App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn products_url() -> String {
    format!("{}/products", MOCK_BASE)
}

fn is_loaded(msg: &AppMessage) -> bool {
    matches!(
        msg,
        AppMessage::ProductsLoaded(_) | AppMessage::ProductsLoadFailed(_)
    )
}

#[tokio::test]
async fn test_load_then_add_prepends_new_product() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "GET",
        &products_url(),
        MockResponse::json(200, &vec![product(1, "ZZZZ-0000-1111-2222")]),
    );
    mock.set_response("POST", &products_url(), MockResponse::json(201, &product(2, CODE)));
    let (mut app, mut rx) = mock_app(&mock);

    app.activate();
    pump_until(&mut app, &mut rx, is_loaded).await;
    assert_eq!(app.products.len(), 1);

    type_text(&mut app, "ab12cd34ef56gh78");
    assert_eq!(app.product_code, CODE);
    press(&mut app, KeyCode::Enter);
    assert!(app.is_submitting);

    pump_until(&mut app, &mut rx, |m| matches!(m, AppMessage::ProductCreated(_))).await;

    let ids: Vec<i64> = app.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert!(app.product_code.is_empty());
    assert!(!app.is_submitting);
    assert!(matches!(
        app.dialog,
        Some(Dialog::Alert { kind: AlertKind::Success, .. })
    ));

    // Enter closes the success alert.
    press(&mut app, KeyCode::Enter);
    assert!(app.dialog.is_none());
    assert_eq!(mock.count("POST"), 1);
}

#[tokio::test]
async fn test_duplicate_code_never_reaches_the_server() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "GET",
        &products_url(),
        MockResponse::json(200, &vec![product(1, CODE)]),
    );
    let (mut app, mut rx) = mock_app(&mock);

    app.activate();
    pump_until(&mut app, &mut rx, is_loaded).await;

    type_text(&mut app, CODE);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.error_message, Some(InputError::Duplicate.to_string()));
    assert_eq!(mock.count("POST"), 0);

    // Editing the input clears the error.
    press(&mut app, KeyCode::Backspace);
    assert!(app.error_message.is_none());
}

#[tokio::test]
async fn test_delete_from_list_keeps_remaining_order() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "GET",
        &products_url(),
        MockResponse::json(
            200,
            &vec![
                product(3, "CCCC-CCCC-CCCC-CCCC"),
                product(2, "BBBB-BBBB-BBBB-BBBB"),
                product(1, "AAAA-AAAA-AAAA-AAAA"),
            ],
        ),
    );
    mock.set_response(
        "DELETE",
        &format!("{}/products/2", MOCK_BASE),
        MockResponse::status(204),
    );
    let (mut app, mut rx) = mock_app(&mock);

    app.activate();
    pump_until(&mut app, &mut rx, is_loaded).await;

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::List);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(app.dialog, Some(Dialog::ConfirmDelete { .. })));
    assert_eq!(mock.count("DELETE"), 0);

    press(&mut app, KeyCode::Char('y'));
    pump_until(&mut app, &mut rx, |m| {
        matches!(m, AppMessage::ProductDeleted { .. })
    })
    .await;

    let ids: Vec<i64> = app.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert!(matches!(app.dialog, Some(Dialog::Toast { .. })));
}

#[tokio::test]
async fn test_load_failure_shows_inline_error() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::status(503));
    let (mut app, mut rx) = mock_app(&mock);

    app.activate();
    pump_until(&mut app, &mut rx, is_loaded).await;

    assert!(app.products.is_empty());
    assert_eq!(app.error_message.as_deref(), Some("Unable to load products"));
}

#[tokio::test]
async fn test_late_response_after_quit_changes_nothing() {
    let mock = MockHttpClient::new();
    mock.set_response("GET", &products_url(), MockResponse::json(200, &Vec::<()>::new()));
    mock.set_response("POST", &products_url(), MockResponse::json(201, &product(9, CODE)));
    let (mut app, mut rx) = mock_app(&mock);

    app.activate();
    pump_until(&mut app, &mut rx, is_loaded).await;

    mock.set_latency(Duration::from_millis(100));
    type_text(&mut app, CODE);
    press(&mut app, KeyCode::Enter);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);

    tokio::time::sleep(Duration::from_millis(250)).await;
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }

    assert!(app.products.is_empty());
    assert_eq!(app.product_code, CODE);
    assert!(app.dialog.is_none());
}
