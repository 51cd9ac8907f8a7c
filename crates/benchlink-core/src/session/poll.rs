use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Session, SessionError};
use crate::protocols::DecodeError;
use crate::transport::Transport;
use crate::{Device, Sample};

/// Counters for one poll run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSummary {
    pub cycles: u64,
    pub decoded: u64,
    pub failed: u64,
}

impl<T: Transport> Session<T> {
    /// Query `device` repeatedly until `cancel` is set.
    ///
    /// Each cycle hands either a timestamped sample or the decode error to
    /// `on_sample`; decode failures skip the cycle and polling continues.
    /// Transport failures end the run and are returned.
    pub fn poll<F>(
        &mut self,
        device: Device,
        cancel: &AtomicBool,
        mut on_sample: F,
    ) -> Result<PollSummary, SessionError>
    where
        F: FnMut(Result<Sample, DecodeError>),
    {
        let mut summary = PollSummary::default();
        let interval = self.config.poll_interval();
        info!(?device, "polling started");

        while !cancel.load(Ordering::Relaxed) {
            summary.cycles += 1;
            match self.query(device) {
                Ok(reading) => {
                    summary.decoded += 1;
                    on_sample(Ok(Sample::now(reading)));
                }
                Err(SessionError::Decode(err)) => {
                    summary.failed += 1;
                    warn!(?device, cycle = summary.cycles, %err, "dropping response");
                    on_sample(Err(err));
                }
                Err(err) => {
                    warn!(?device, cycle = summary.cycles, %err, "polling aborted");
                    return Err(err);
                }
            }
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }

        info!(
            ?device,
            cycles = summary.cycles,
            decoded = summary.decoded,
            failed = summary.failed,
            "polling stopped"
        );
        Ok(summary)
    }
}
