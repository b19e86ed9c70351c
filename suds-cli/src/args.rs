use clap::Parser;

/// Command line arguments for the suds demo.
#[derive(Debug, Parser)]
#[command(
    name = "suds-cli",
    version,
    about = "Hand your laundry to a laundromat and watch the errand unfold"
)]
pub(crate) struct Cli {
    /// Patron requesting the cleaning
    #[arg(short, long, default_value = "Alex")]
    pub(crate) name: String,

    /// Laundromat to delegate to
    #[arg(short, long, default_value = "corner")]
    pub(crate) laundromat: String,

    /// Override the pause between progress lines, in milliseconds
    #[arg(long)]
    pub(crate) pace_ms: Option<u64>,

    /// List registered laundromats and exit
    #[arg(long)]
    pub(crate) list: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Loads to have washed, one request per item
    #[arg(default_value = "shirts")]
    pub(crate) items: Vec<String>,
}
