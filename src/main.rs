use catalog::adapters::ReqwestHttpClient;
use catalog::api::ProductApi;
use catalog::app::{App, AppMessage};
use catalog::cli::{parse_args, run_cli_command};
use catalog::startup::{init_logging, CatalogConfig};
use catalog::terminal::{install_panic_hook, TerminalManager};
use catalog::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Frame interval for spinner animation and toast expiry.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle CLI-only flags before any initialization
    let api_url = match parse_args(std::env::args()) {
        Ok(command) => match run_cli_command(command) {
            Some(api_url) => api_url,
            None => return Ok(()),
        },
        Err(err) => {
            eprintln!("error: {}\n\nRun with --help for usage.", err);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;
    install_panic_hook();

    let log_path = init_logging(None);
    let config = CatalogConfig::from_env().with_cli_override(api_url);
    info!(
        "Starting catalog {} against {} (timeout {:?}, log {:?})",
        catalog::cli::VERSION,
        config.api_url,
        config.timeout,
        log_path
    );

    let http = ReqwestHttpClient::with_timeout(config.timeout)?;
    let api = Arc::new(ProductApi::new(config.api_url.clone(), Arc::new(http)));
    let mut app = App::new(api);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;

    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    app.deactivate();
    manager.restore()?;

    if let Err(err) = &result {
        error!("Exited with error: {:?}", err);
    } else {
        info!("Exited normally");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    app.activate();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    // Input closed; nothing more can happen
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
