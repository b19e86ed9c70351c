//! Traits describing provider capabilities and shared helper types.

use async_trait::async_trait;

use crate::model::{CleanedLoad, GarmentLoad, LaundromatMeta, Notification};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while delegating work to a provider.
pub enum PortError {
    /// The requested laundromat has no registered plugin.
    #[error("Unsupported laundromat")]
    UnsupportedLaundromat,
    /// A substituted provider refused the load.
    ///
    /// None of the built-in laundromats ever return this; the variant exists
    /// so a failing implementation can stand in behind [`CleaningPort`]
    /// without touching the requester.
    #[error("Load rejected: {0}")]
    RejectedLoad(String),
}

/// Channel that notifications are delivered to, in call order.
///
/// Implementations decide how a line becomes visible. The CLI prints to
/// stdout; tests record into a buffer.
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification.
    fn notify(&self, note: Notification);
}

#[async_trait]
/// Trait for laundromat-specific cleaning backends.
pub trait CleaningPort: Send + Sync {
    /// Metadata describing the laundromat behind this port.
    fn laundromat(&self) -> &LaundromatMeta;

    /// Clean a load of garments.
    ///
    /// Emits three progress notifications in fixed order (pickup, washing,
    /// return) with a simulated pause between consecutive ones, then returns
    /// the cleaned load. Accepts any load description, the empty one
    /// included.
    ///
    /// # Errors
    ///
    /// Built-in providers never fail; a substituted variant may return a
    /// [`PortError`] to model a refusal.
    async fn clean(&self, load: &GarmentLoad) -> Result<CleanedLoad, PortError>;
}
