//! Headless Chromium page driven over the DevTools protocol.

use std::time::Duration;

use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, trace, warn};

use crate::config::BrowserSettings;

use super::{ActionPort, Control, DocumentReader, PageError, Probe, click_script};

const READY_STATE_SCRIPT: &str = "document.readyState";
const READY_POLL: Duration = Duration::from_millis(100);

pub struct BrowserPage {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl BrowserPage {
    /// Launch Chromium, open `url` and wait until the document is interactive.
    pub async fn open(url: &str, settings: &BrowserSettings) -> Result<Self, PageError> {
        let config = browser_config(settings)?;
        let (browser, mut handler) = Browser::launch(config).await?;

        // The CDP connection only makes progress while its handler is polled.
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("cdp handler: {e}");
                }
            }
            trace!("cdp handler finished");
        });

        let page = browser.new_page(url).await?;
        let this = Self {
            browser,
            page,
            handler,
        };
        this.wait_ready(url, Duration::from_millis(settings.ready_timeout_ms))
            .await?;
        info!(url, "page ready");
        Ok(this)
    }

    async fn wait_ready(&self, url: &str, timeout: Duration) -> Result<(), PageError> {
        let started = Instant::now();
        loop {
            let state = self
                .page
                .evaluate(READY_STATE_SCRIPT)
                .await
                .ok()
                .and_then(|r| r.into_value::<String>().ok());
            if matches!(state.as_deref(), Some("interactive" | "complete")) {
                return Ok(());
            }
            if started.elapsed() >= timeout {
                return Err(PageError::NotReady {
                    url: url.to_string(),
                    waited_ms: timeout.as_millis() as u64,
                });
            }
            sleep(READY_POLL).await;
        }
    }

    /// Close the browser and stop the CDP handler.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("failed to close browser: {e}");
        }
        let _ = self.browser.wait().await;
        self.handler.abort();
    }
}

fn browser_config(settings: &BrowserSettings) -> Result<BrowserConfig, PageError> {
    let mut builder = BrowserConfig::builder().launch_timeout(Duration::from_secs(20));
    if !settings.headless {
        builder = builder.with_head();
    }
    if settings.no_sandbox {
        builder = builder.no_sandbox();
    }
    if let Some(path) = &settings.executable {
        builder = builder.chrome_executable(path);
    }
    builder.build().map_err(PageError::Config)
}

impl DocumentReader for BrowserPage {
    async fn try_read(&self, probe: &Probe) -> Option<String> {
        match self.page.evaluate(probe.script()).await {
            Ok(result) => result.into_value::<Option<String>>().ok().flatten(),
            Err(e) => {
                trace!(?probe, "read failed: {e}");
                None
            }
        }
    }
}

impl ActionPort for BrowserPage {
    async fn click(&self, control: Control) -> Result<(), PageError> {
        let found: bool = self.page.evaluate(click_script(control)).await?.into_value()?;
        if found {
            Ok(())
        } else {
            Err(PageError::MissingControl(control))
        }
    }
}
