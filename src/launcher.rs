//! Host-side helper that decides whether a welcome flow needs showing
//!
//! The flow core never consults the completion set on its own; the host does,
//! through this launcher, before starting a flow.

use tracing::{debug, info};

use crate::flow::{FlowConfiguration, FlowListener, WelcomeFlow};
use crate::store::{CompletionStore, StoreError};

/// Starts welcome flows against a shared completion store
#[derive(Debug, Clone)]
pub struct WelcomeLauncher<S> {
    store: S,
}

impl<S> WelcomeLauncher<S>
where
    S: CompletionStore + Clone + 'static,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True when the flow with this key has not been completed yet
    pub fn should_show(&self, identity_key: &str) -> Result<bool, StoreError> {
        Ok(!self.store.get(identity_key)?)
    }

    /// Start the flow unless it was already completed
    pub fn launch(
        &self,
        configuration: FlowConfiguration,
        listeners: Vec<Box<dyn FlowListener>>,
    ) -> Result<Option<WelcomeFlow>, StoreError> {
        if !self.should_show(configuration.identity_key())? {
            debug!(key = %configuration.identity_key(), "Welcome flow already completed, not showing");
            return Ok(None);
        }
        Ok(Some(self.launch_forced(configuration, listeners)))
    }

    /// Start the flow regardless of its completion flag
    pub fn launch_forced(
        &self,
        configuration: FlowConfiguration,
        listeners: Vec<Box<dyn FlowListener>>,
    ) -> WelcomeFlow {
        WelcomeFlow::start_with_listeners(configuration, self.store.clone(), listeners)
    }

    /// Forget a completion so the flow shows again
    pub fn reset(&mut self, identity_key: &str) -> Result<(), StoreError> {
        self.store.remove(identity_key)?;
        info!(key = %identity_key, "Welcome flow completion reset");
        Ok(())
    }
}
