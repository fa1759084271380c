use anyhow::{anyhow, Result};
use async_trait::async_trait;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::debug;
use serde::Serialize;
use std::time::Duration;

use crate::config::FlowSnapshot;

/// What one tick produced, handed to every registered observer
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub sequence_id: u64,
    pub slice_index: usize,
    pub iq_samples: usize,
    pub columns: usize,
    /// Ring buffer cursor after the write
    pub cursor: usize,
    /// `cursor / width`, where the scan line is drawn
    pub cursor_fraction: f64,
    pub elapsed: Duration,
    pub parameters: FlowSnapshot,
    /// Projected velocity exceeds what the current PRF can show
    pub velocity_over_max: bool,
}

/// Hook invoked after each successful tick.
///
/// A failing observer is logged and skipped; it never stops the stream.
#[async_trait]
pub trait TickObserver: Send + Sync {
    async fn on_tick(&self, report: &TickReport) -> Result<()>;
}

/// Forwards reports to a crossbeam channel, typically drained by a UI thread
pub struct ChannelObserver {
    tx: Sender<TickReport>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<TickReport>) -> Self {
        Self { tx }
    }

    /// Observer plus the receiving end of a channel holding at most `capacity` reports
    pub fn bounded(capacity: usize) -> (Self, Receiver<TickReport>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl TickObserver for ChannelObserver {
    async fn on_tick(&self, report: &TickReport) -> Result<()> {
        match self.tx.try_send(report.clone()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                debug!("Observer queue full, dropping report {}", report.sequence_id);
                Ok(())
            }
            Err(TrySendError::Disconnected(_)) => Err(anyhow!("Tick report receiver disconnected")),
        }
    }
}
