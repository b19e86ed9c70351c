use suds_core::model::Notification;
use suds_core::ports::NotificationSink;

/// Sink that renders each notification as one stdout line.
pub(crate) struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    #[expect(
        clippy::print_stdout,
        reason = "the ordered notification lines are the program's output"
    )]
    fn notify(&self, note: Notification) {
        println!("{note}");
    }
}
