//! Forwarding feature state to tiles on another thread.

use super::consumer::FeatureStateConsumer;
use crate::types::LayeredFeatureStates;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::warn;

/// A consumer that forwards every delivery over a bounded channel.
///
/// Deliveries never block. A delivery the receiver cannot accept (buffer
/// full or receiver gone) is dropped and counted.
#[derive(Clone, Debug)]
pub struct ChannelConsumer {
    sender: Sender<LayeredFeatureStates>,
    dropped: u64,
}

impl ChannelConsumer {
    /// Create a consumer and the receiving end of its channel.
    pub fn bounded(capacity: usize) -> (Self, Receiver<LayeredFeatureStates>) {
        let (sender, receiver) = bounded(capacity);
        (Self { sender, dropped: 0 }, receiver)
    }

    /// Deliveries dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl FeatureStateConsumer for ChannelConsumer {
    fn set_feature_state(&mut self, states: &LayeredFeatureStates) {
        match self.sender.try_send(states.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                warn!(dropped = self.dropped, "Feature state channel full, dropping batch");
            }
            Err(TrySendError::Disconnected(_)) => {
                self.dropped += 1;
                warn!(dropped = self.dropped, "Feature state receiver gone, dropping batch");
            }
        }
    }
}

/// Apply every queued delivery to `tile`, in order. Returns how many were applied.
pub fn drain_into<T>(receiver: &Receiver<LayeredFeatureStates>, tile: &mut T) -> usize
where
    T: FeatureStateConsumer + ?Sized,
{
    let mut applied = 0;
    for states in receiver.try_iter() {
        tile.set_feature_state(&states);
        applied += 1;
    }
    applied
}
