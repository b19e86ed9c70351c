//! Provider implementation for the same-block express service.
//!
//! A drop-in substitute for the corner laundromat: same three-step contract
//! and the same cleaned result, just quicker about it and worded its own way.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use suds_core::{
    model::{CleanedLoad, GarmentLoad, LaundromatId, LaundromatMeta, Notification, Stage},
    plugin::LaundromatPlugin,
    ports::{CleaningPort, NotificationSink, PortError},
};

/// Pause between progress notifications. Express means express.
const DEFAULT_PACE: Duration = Duration::from_millis(300);

/// Cleaning implementation for the express service.
pub struct ExpressCleaningPort {
    sink: Arc<dyn NotificationSink>,
    pace: Duration,
    meta: LaundromatMeta,
}

impl ExpressCleaningPort {
    /// Create a new cleaning port delivering progress to the given sink.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_pace(sink, DEFAULT_PACE)
    }

    /// Create a port with a custom pause between progress notifications.
    #[must_use]
    pub fn with_pace(sink: Arc<dyn NotificationSink>, pace: Duration) -> Self {
        Self {
            sink,
            pace,
            meta: laundromat_meta(),
        }
    }

    fn progress(&self, stage: Stage, message: String) {
        self.sink.notify(Notification::Progress {
            laundromat: self.meta.id.clone(),
            stage,
            message,
        });
    }
}

#[async_trait]
impl CleaningPort for ExpressCleaningPort {
    fn laundromat(&self) -> &LaundromatMeta {
        &self.meta
    }

    async fn clean(&self, load: &GarmentLoad) -> Result<CleanedLoad, PortError> {
        tracing::debug!(pace = ?self.pace, "express service took a load");

        self.progress(Stage::Pickup, format!("Express pickup for {load}!"));
        tokio::time::sleep(self.pace).await;

        self.progress(Stage::Washing, String::from("Quick spin cycle..."));
        tokio::time::sleep(self.pace).await;

        self.progress(Stage::Return, String::from("Back already, clean and folded."));

        Ok(CleanedLoad::from_load(load, self.meta.id.clone()))
    }
}

/// Build the plugin bundle for the express service.
#[must_use]
pub fn plugin(sink: Arc<dyn NotificationSink>) -> LaundromatPlugin {
    LaundromatPlugin {
        meta: laundromat_meta(),
        cleaning_port: Arc::new(ExpressCleaningPort::new(sink)),
    }
}

/// Build the plugin bundle with a custom pause between progress lines.
#[must_use]
pub fn plugin_with_pace(sink: Arc<dyn NotificationSink>, pace: Duration) -> LaundromatPlugin {
    LaundromatPlugin {
        meta: laundromat_meta(),
        cleaning_port: Arc::new(ExpressCleaningPort::with_pace(sink, pace)),
    }
}

fn laundromat_meta() -> LaundromatMeta {
    LaundromatMeta {
        id: LaundromatId(String::from("express")),
        name: String::from("Same-Block Express"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        notes: Mutex<Vec<Notification>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, note: Notification) {
            self.notes.lock().unwrap().push(note);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn same_result_as_any_other_laundromat() {
        let recorder = Arc::new(RecordingSink::default());
        let port =
            ExpressCleaningPort::with_pace(Arc::clone(&recorder) as Arc<dyn NotificationSink>, Duration::ZERO);

        let cleaned = port.clean(&GarmentLoad::new("shirts")).await.unwrap();

        // The cleaned description never depends on which provider ran.
        assert_eq!(cleaned.description, "Cleaned shirts");
        assert_eq!(cleaned.laundromat, LaundromatId(String::from("express")));
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_the_three_stage_order() {
        let recorder = Arc::new(RecordingSink::default());
        let port = ExpressCleaningPort::new(Arc::clone(&recorder) as Arc<dyn NotificationSink>);

        port.clean(&GarmentLoad::new("gym kit")).await.unwrap();

        let stages: Vec<Stage> = recorder
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter_map(Notification::stage)
            .collect();
        assert_eq!(stages, vec![Stage::Pickup, Stage::Washing, Stage::Return]);
    }
}
