//! Registry for all laundromat plugins and their ports.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{LaundromatId, LaundromatMeta};
use crate::ports::{CleaningPort, PortError};

/// Ports implementing a provider for a single laundromat.
pub struct LaundromatPlugin {
    /// Static metadata describing the laundromat.
    pub meta: LaundromatMeta,
    /// Implementation doing the actual cleaning.
    pub cleaning_port: Arc<dyn CleaningPort>,
}

/// Registry that resolves plugins by laundromat identifier.
pub struct PluginRegistry {
    plugins: HashMap<LaundromatId, LaundromatPlugin>,
}

impl PluginRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<LaundromatPlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.meta.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Return metadata for all registered laundromats.
    #[must_use]
    pub fn laundromats(&self) -> Vec<LaundromatMeta> {
        self.plugins
            .values()
            .map(|plugin| plugin.meta.clone())
            .collect()
    }

    /// Iterator over laundromat metadata.
    pub fn laundromats_iter(&self) -> impl Iterator<Item = &LaundromatMeta> {
        self.plugins.values().map(|plugin| &plugin.meta)
    }

    /// Look up a plugin for the given laundromat.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::UnsupportedLaundromat`] when no plugin is
    /// registered.
    pub fn plugin(&self, laundromat: &LaundromatId) -> Result<&LaundromatPlugin, PortError> {
        self.plugins
            .get(laundromat)
            .ok_or(PortError::UnsupportedLaundromat)
    }
}
