//! Command line frontend for the suds laundry delegation demo.

mod args;
mod sink;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use suds_core::{
    model::{GarmentLoad, LaundromatId},
    patron::Patron,
    plugin::{LaundromatPlugin, PluginRegistry},
    ports::NotificationSink,
    service::SudsService,
};
use suds_provider_corner as corner;
use suds_provider_express as express;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::sink::ConsoleSink;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let sink: Arc<dyn NotificationSink> = Arc::new(ConsoleSink);
    let pace = cli.pace_ms.map(Duration::from_millis);

    let registry = Arc::new(PluginRegistry::new(build_plugins(&sink, pace)));
    let service = Arc::new(SudsService::new(registry));
    tracing::debug!(
        laundromats = service.laundromats().len(),
        "plugin registry wired"
    );

    if cli.list {
        print_laundromats(&service);
        return Ok(());
    }

    let laundromat = LaundromatId(cli.laundromat.clone());
    let port = service
        .cleaning_port(&laundromat)
        .with_context(|| format!("no laundromat registered as \"{}\"", cli.laundromat))?;

    let patron = Patron::new(cli.name, port, sink);

    for item in &cli.items {
        patron.request_cleaning(&GarmentLoad::new(item.as_str())).await?;
    }

    Ok(())
}

fn build_plugins(sink: &Arc<dyn NotificationSink>, pace: Option<Duration>) -> Vec<LaundromatPlugin> {
    match pace {
        Some(pace) => vec![
            corner::plugin_with_pace(Arc::clone(sink), pace),
            express::plugin_with_pace(Arc::clone(sink), pace),
        ],
        None => vec![
            corner::plugin(Arc::clone(sink)),
            express::plugin(Arc::clone(sink)),
        ],
    }
}

#[expect(clippy::print_stdout, reason = "the listing is the command's output")]
fn print_laundromats(service: &SudsService) {
    let mut laundromats = service.laundromats();
    laundromats.sort_by_key(|(id, _name)| id.0.clone());

    for (id, name) in laundromats {
        println!("{:<10} {name}", id.0);
    }
}

// Notifications go to stdout through the sink; diagnostics stay on stderr so
// the five-line narration is all a pipe ever sees.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
