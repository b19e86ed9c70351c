//! High-level service facade combining all providers.

use std::sync::Arc;

use crate::model::{CleanedLoad, GarmentLoad, LaundromatId};
use crate::plugin::PluginRegistry;
use crate::ports::{CleaningPort, PortError};

/// Public entry point for dispatching cleaning requests.
pub struct SudsService {
    registry: Arc<PluginRegistry>,
}

impl SudsService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry }
    }

    /// List all available laundromats and their display names.
    #[must_use]
    pub fn laundromats(&self) -> Vec<(LaundromatId, String)> {
        self.registry
            .laundromats()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// Hand out the shared cleaning capability of a laundromat.
    ///
    /// The port is shared, not owned: any number of patrons may bind to the
    /// same instance.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the laundromat is unsupported.
    pub fn cleaning_port(
        &self,
        laundromat: &LaundromatId,
    ) -> Result<Arc<dyn CleaningPort>, PortError> {
        let plugin = self.registry.plugin(laundromat)?;
        Ok(Arc::clone(&plugin.cleaning_port))
    }

    /// Clean a load at the given laundromat.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the laundromat is unsupported or the
    /// provider refuses the load.
    pub async fn clean(
        &self,
        laundromat: &LaundromatId,
        load: &GarmentLoad,
    ) -> Result<CleanedLoad, PortError> {
        tracing::debug!(laundromat = %laundromat.0, "dispatching load to provider");
        let plugin = self.registry.plugin(laundromat)?;
        plugin.cleaning_port.clean(load).await
    }
}
