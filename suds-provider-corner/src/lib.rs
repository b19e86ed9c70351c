//! Provider implementation for the corner laundromat.
//!
//! The canonical service: unhurried, narrates every step of the errand.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use suds_core::{
    model::{CleanedLoad, GarmentLoad, LaundromatId, LaundromatMeta, Notification, Stage},
    plugin::LaundromatPlugin,
    ports::{CleaningPort, NotificationSink, PortError},
};

/// Pause between progress notifications. Long enough to feel like an errand.
const DEFAULT_PACE: Duration = Duration::from_secs(2);

/// Cleaning implementation for the corner laundromat.
pub struct CornerCleaningPort {
    sink: Arc<dyn NotificationSink>,
    pace: Duration,
    meta: LaundromatMeta,
}

impl CornerCleaningPort {
    /// Create a new cleaning port delivering progress to the given sink.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_pace(sink, DEFAULT_PACE)
    }

    /// Create a port with a custom pause between progress notifications.
    ///
    /// The pause carries no meaning beyond pacing the narration; zero is
    /// fine.
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
impl CleaningPort for CornerCleaningPort {
    fn laundromat(&self) -> &LaundromatMeta {
        &self.meta
    }

    async fn clean(&self, load: &GarmentLoad) -> Result<CleanedLoad, PortError> {
        tracing::debug!(pace = ?self.pace, "corner laundromat took a load");

        self.progress(
            Stage::Pickup,
            format!("Taking {load} to the best laundromat..."),
        );
        tokio::time::sleep(self.pace).await;

        self.progress(Stage::Washing, String::from("Washing clothes..."));
        tokio::time::sleep(self.pace).await;

        self.progress(Stage::Return, String::from("Returning with clean clothes."));

        Ok(CleanedLoad::from_load(load, self.meta.id.clone()))
    }
}

/// Build the plugin bundle for the corner laundromat.
#[must_use]
pub fn plugin(sink: Arc<dyn NotificationSink>) -> LaundromatPlugin {
    LaundromatPlugin {
        meta: laundromat_meta(),
        cleaning_port: Arc::new(CornerCleaningPort::new(sink)),
    }
}

/// Build the plugin bundle with a custom pause between progress lines.
#[must_use]
pub fn plugin_with_pace(sink: Arc<dyn NotificationSink>, pace: Duration) -> LaundromatPlugin {
    LaundromatPlugin {
        meta: laundromat_meta(),
        cleaning_port: Arc::new(CornerCleaningPort::with_pace(sink, pace)),
    }
}

fn laundromat_meta() -> LaundromatMeta {
    LaundromatMeta {
        id: LaundromatId(String::from("corner")),
        name: String::from("Corner Laundromat"),
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

    impl RecordingSink {
        fn stages(&self) -> Vec<Stage> {
            self.notes
                .lock()
                .unwrap()
                .iter()
                .filter_map(Notification::stage)
                .collect()
        }

        fn len(&self) -> usize {
            self.notes.lock().unwrap().len()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, note: Notification) {
            self.notes.lock().unwrap().push(note);
        }
    }

    fn recording_port() -> (Arc<RecordingSink>, CornerCleaningPort) {
        let recorder = Arc::new(RecordingSink::default());
        let sink: Arc<dyn NotificationSink> = Arc::clone(&recorder) as Arc<dyn NotificationSink>;
        (recorder, CornerCleaningPort::with_pace(sink, Duration::ZERO))
    }

    #[tokio::test(start_paused = true)]
    async fn clean_prefixes_the_load_description() {
        let (_recorder, port) = recording_port();

        let cleaned = port.clean(&GarmentLoad::new("shirts")).await.unwrap();

        assert_eq!(cleaned.description, "Cleaned shirts");
        assert_eq!(cleaned.laundromat, LaundromatId(String::from("corner")));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_load_is_cleaned_too() {
        let (_recorder, port) = recording_port();

        let cleaned = port.clean(&GarmentLoad::new("")).await.unwrap();

        assert_eq!(cleaned.description, "Cleaned ");
    }

    #[tokio::test(start_paused = true)]
    async fn narrates_pickup_washing_return_in_order() {
        // Default pace; paused time advances through the sleeps instantly.
        let recorder = Arc::new(RecordingSink::default());
        let port = CornerCleaningPort::new(Arc::clone(&recorder) as Arc<dyn NotificationSink>);

        port.clean(&GarmentLoad::new("towels")).await.unwrap();

        assert_eq!(
            recorder.stages(),
            vec![Stage::Pickup, Stage::Washing, Stage::Return]
        );
        assert_eq!(recorder.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cleaning_twice_gives_the_same_description() {
        let (_recorder, port) = recording_port();
        let load = GarmentLoad::new("shirts");

        let first = port.clean(&load).await.unwrap();
        let second = port.clean(&load).await.unwrap();

        assert_eq!(first.description, second.description);
    }
}
