//! The requester side of the demo: patrons delegating laundry to a port.

use std::sync::Arc;

use crate::model::{GarmentLoad, Notification};
use crate::ports::{CleaningPort, NotificationSink, PortError};

/// Someone with laundry to hand off.
///
/// A patron never cleans anything themselves: they announce the request,
/// delegate to whatever [`CleaningPort`] they were given, and report once the
/// load comes back. Swapping the port swaps the laundromat without touching
/// this type.
pub struct Patron {
    name: String,
    cleaner: Arc<dyn CleaningPort>,
    sink: Arc<dyn NotificationSink>,
}

impl Patron {
    /// Create a patron bound to a cleaning port and a notification sink.
    #[must_use]
    pub fn new<S: Into<String>>(
        name: S,
        cleaner: Arc<dyn CleaningPort>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            name: name.into(),
            cleaner,
            sink,
        }
    }

    /// The patron's name as used in notifications.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ask the bound laundromat to clean a load and report the outcome.
    ///
    /// Emits a request notification, waits until the port is done, then
    /// emits a receipt notification embedding the cleaned description. Five
    /// notifications reach the sink per call: the two patron lines around
    /// the provider's three progress lines.
    ///
    /// # Errors
    ///
    /// Propagates a [`PortError`] if a substituted provider refuses the
    /// load. No receipt is emitted in that case.
    pub async fn request_cleaning(&self, load: &GarmentLoad) -> Result<(), PortError> {
        self.sink.notify(Notification::Requested {
            patron: self.name.clone(),
            load: load.clone(),
        });

        let cleaned = self.cleaner.clean(load).await?;
        tracing::debug!(patron = %self.name, laundromat = %cleaned.laundromat.0, "load returned");

        self.sink.notify(Notification::Received {
            patron: self.name.clone(),
            cleaned,
        });

        Ok(())
    }
}
