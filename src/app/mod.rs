//! Controller state for the catalog screen.
//!
//! [`App`] owns everything the screen shows. User actions either change
//! state directly or spawn an API task; task results come back as
//! [`AppMessage`]s and are applied by [`App::handle_message`] on the event
//! loop, so state is only ever mutated from one place.

mod actions;
mod handlers;
mod keys;
mod messages;
mod teardown;
mod types;

pub use messages::AppMessage;
pub use teardown::{TeardownGate, TeardownListener};
pub use types::{AlertKind, Dialog, Focus, TOAST_DURATION};

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::ProductApi;
use crate::models::Product;

/// Main application state
pub struct App {
    /// Products in display order (newest additions first)
    pub products: Vec<Product>,
    /// Current value of the code input, already formatted
    pub product_code: String,
    /// Inline error shown under the input
    pub error_message: Option<String>,
    /// Mirror of the API loading flag
    pub is_loading: bool,
    /// True while a create call is outstanding
    pub is_submitting: bool,
    /// Active overlay, if any
    pub dialog: Option<Dialog>,
    /// Current focus panel
    pub focus: Focus,
    /// Selected row in the product list
    pub selected: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Tick counter for the spinner animation
    pub tick_count: u64,
    /// Whether the screen must be redrawn
    pub needs_redraw: bool,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    api: Arc<ProductApi>,
    teardown: TeardownGate,
}

impl App {
    pub fn new(api: Arc<ProductApi>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            products: Vec::new(),
            product_code: String::new(),
            error_message: None,
            is_loading: true,
            is_submitting: false,
            dialog: None,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            api,
            teardown: TeardownGate::new(),
        }
    }

    pub fn api(&self) -> &Arc<ProductApi> {
        &self.api
    }

    /// Load the collection and start mirroring the loading flag.
    pub fn activate(&mut self) {
        info!("Activating catalog view against {}", self.api.base_url());
        self.load_products();
        self.subscribe_loading();
    }

    /// Cancel every pending task. Results that still arrive are ignored.
    pub fn deactivate(&mut self) {
        if self.teardown.is_triggered() {
            return;
        }
        info!("Deactivating catalog view");
        self.teardown.trigger();
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_triggered()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.deactivate();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations and expire toasts.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading {
            self.mark_dirty();
        }
        let now = std::time::Instant::now();
        if self.dialog.as_ref().is_some_and(|d| d.is_expired(now)) {
            self.dialog = None;
            self.mark_dirty();
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected)
    }

    /// Keep the selection inside the list after it shrinks.
    pub(crate) fn clamp_selection(&mut self) {
        if self.products.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.products.len() {
            self.selected = self.products.len() - 1;
        }
    }

    /// Run `work` on the runtime and post its message back, unless the
    /// controller is torn down first.
    pub(crate) fn spawn_guarded<F>(&self, work: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let mut listener = self.teardown.listener();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = listener.triggered() => {
                    debug!("Task cancelled by teardown");
                }
                message = work => {
                    if listener.is_triggered() {
                        debug!("Dropping {} after teardown", message.kind());
                    } else {
                        let _ = tx.send(message);
                    }
                }
            }
        });
    }

    fn load_products(&self) {
        let api = self.api.clone();
        self.spawn_guarded(async move {
            match api.list_products().await {
                Ok(products) => AppMessage::ProductsLoaded(products),
                Err(error) => AppMessage::ProductsLoadFailed(error),
            }
        });
    }

    fn subscribe_loading(&self) {
        let mut loading = self.api.loading();
        let mut listener = self.teardown.listener();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let initial = *loading.borrow_and_update();
            if tx.send(AppMessage::LoadingChanged(initial)).is_err() {
                return;
            }
            loop {
                tokio::select! {
                    biased;
                    _ = listener.triggered() => break,
                    changed = loading.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let value = *loading.borrow_and_update();
                        if tx.send(AppMessage::LoadingChanged(value)).is_err() {
                            break;
                        }
                    }
                }
            }
            debug!("Loading subscription closed");
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown.trigger();
    }
}
