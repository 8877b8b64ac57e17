use tracing::{info, warn};

use super::error::FlowError;
use super::types::FlowOutcome;
use crate::store::CompletionStore;

/// Turns terminal intents into exactly one outcome
///
/// `complete` is the only path that writes to the completion store. After the
/// first outcome both methods return `FlowAlreadyTerminated` and change nothing.
pub struct CompletionRecorder {
    store: Box<dyn CompletionStore>,
    outcome: Option<FlowOutcome>,
}

impl CompletionRecorder {
    pub fn new(store: Box<dyn CompletionStore>) -> Self {
        Self {
            store,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<&FlowOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_terminated(&self) -> bool {
        self.outcome.is_some()
    }

    /// Record the flow as seen and finish it
    ///
    /// A failing store write is logged; the flow still completes.
    pub fn complete(&mut self, identity_key: &str) -> Result<FlowOutcome, FlowError> {
        self.ensure_active(identity_key)?;

        if let Err(e) = self.store.set(identity_key, true) {
            warn!(key = %identity_key, error = %e, "Failed to persist completion flag");
        }

        let outcome = FlowOutcome::Completed {
            key: identity_key.to_string(),
        };
        info!(key = %identity_key, "Welcome flow completed");
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Finish the flow without recording it
    pub fn cancel(&mut self, identity_key: &str) -> Result<FlowOutcome, FlowError> {
        self.ensure_active(identity_key)?;

        let outcome = FlowOutcome::Cancelled {
            key: identity_key.to_string(),
        };
        info!(key = %identity_key, "Welcome flow cancelled");
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    fn ensure_active(&self, identity_key: &str) -> Result<(), FlowError> {
        if self.outcome.is_some() {
            return Err(FlowError::FlowAlreadyTerminated {
                key: identity_key.to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for CompletionRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionRecorder")
            .field("outcome", &self.outcome)
            .finish()
    }
}
