use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::dispatcher::Dispatcher;
use crate::extractor::Extractor;
use crate::host::{ActionSource, PlayerSink};
use crate::model::HostAction;
use crate::page::{ActionPort, DocumentReader};

/// Extractor and dispatcher sharing one cooperative timeline.
pub struct Bridge<R, S, A> {
    extractor: Extractor<R, S>,
    dispatcher: Dispatcher<A>,
    interval: Duration,
}

impl<R, S, A> Bridge<R, S, A>
where
    R: DocumentReader,
    S: PlayerSink,
    A: ActionPort,
{
    pub fn new(extractor: Extractor<R, S>, dispatcher: Dispatcher<A>, interval: Duration) -> Self {
        Self {
            extractor,
            dispatcher,
            interval,
        }
    }

    /// Poll the page until `cancel` fires, handling host actions between ticks.
    ///
    /// The next tick starts `interval` after the previous one finished, so
    /// ticks never overlap. Returns the number of ticks run.
    pub async fn run<Src: ActionSource>(&self, actions: &mut Src, cancel: &CancellationToken) -> u64 {
        let mut ticks = 0;
        let mut actions_open = true;

        while !cancel.is_cancelled() {
            self.extractor.tick().await;
            ticks += 1;

            let next_tick = sleep(self.interval);
            tokio::pin!(next_tick);
            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return ticks,
                    _ = &mut next_tick => break,
                    action = actions.next_action(), if actions_open => match action {
                        Some(action) => self.handle_action(action, cancel).await,
                        None => {
                            debug!("action source closed; polling only");
                            actions_open = false;
                        }
                    },
                }
            }
        }
        ticks
    }

    async fn handle_action(&self, action: HostAction, cancel: &CancellationToken) {
        if action.is_quit() {
            info!("host asked to quit");
            cancel.cancel();
            return;
        }
        match self.dispatcher.handle(&action).await {
            Ok(Some(control)) => debug!(action = %action.name, control = control.element_id(), "clicked"),
            Ok(None) => {}
            Err(e) => warn!("dispatch failed: {e}"),
        }
    }
}
