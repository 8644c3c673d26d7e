use std::env;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config;
use crate::dispatcher::Dispatcher;
use crate::extractor::Extractor;
use crate::model::HostAction;
use crate::mpris::spawn_mpris;
use crate::page::{BrowserPage, PageError};

mod bridge;
mod settings;

pub use bridge::Bridge;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Page(#[from] PageError),
}

pub fn run() -> Result<(), BridgeError> {
    let settings = settings::load_settings();

    // An explicit URL on the command line wins over the configured address.
    let url = env::args().nth(1).unwrap_or_else(|| settings.home_url());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(serve(settings, url))
}

async fn serve(settings: config::Settings, url: String) -> Result<(), BridgeError> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<HostAction>();
    let mpris = spawn_mpris(action_tx, &settings.mpris);

    info!(%url, "opening Volumio UI");
    let page = Arc::new(BrowserPage::open(&url, &settings.browser).await?);

    let cancel = CancellationToken::new();
    if discard_early_actions(&mut action_rx) {
        cancel.cancel();
    }
    tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    let bridge = Bridge::new(
        Extractor::new(page.clone(), mpris),
        Dispatcher::new(page.clone()),
        settings.poll_interval(),
    );
    let ticks = bridge.run(&mut action_rx, &cancel).await;
    info!(ticks, "stopping");

    drop(bridge);
    if let Ok(page) = Arc::try_unwrap(page) {
        page.close().await;
    }
    Ok(())
}

/// Actions only count once the page is ready; drop what queued up while it
/// loaded. Returns whether a quit was among them.
fn discard_early_actions(rx: &mut UnboundedReceiver<HostAction>) -> bool {
    let mut quit = false;
    while let Ok(action) = rx.try_recv() {
        debug!(action = %action.name, "dropping action received before page was ready");
        quit |= action.is_quit();
    }
    quit
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("interrupted");
            cancel.cancel();
        }
        Err(e) => warn!("cannot listen for ctrl-c: {e}"),
    }
}
