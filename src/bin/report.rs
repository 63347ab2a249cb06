use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spendview::{DashboardReport, Error, Palette, ReportOptions, SourceSnapshot, parse_month_token};

/// Print the dashboard report for a snapshot of a user's transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a JSON snapshot of the transaction source.
    #[arg(long)]
    input: String,

    /// The month to break down by category, as MM/YYYY.
    #[arg(long)]
    month: Option<String>,

    /// The year to chart month by month.
    #[arg(long)]
    year: Option<i32>,

    /// How many recent transactions to list.
    #[arg(long, default_value_t = spendview::report::DEFAULT_RECENT_LIMIT)]
    recent: usize,

    /// Comma separated colors for the category breakdown.
    #[arg(long, value_delimiter = ',')]
    palette: Vec<String>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String, Error> {
    let palette = if args.palette.is_empty() {
        Palette::default()
    } else {
        Palette::new(args.palette)?
    };

    let options = ReportOptions {
        recent_limit: args.recent,
        month: args.month.as_deref().map(parse_month_token).transpose()?,
        year: args.year,
        palette,
    };

    let source = SourceSnapshot::from_path(&args.input)?;
    let report = DashboardReport::build(&source, &options)?;

    if args.json {
        report.to_json()
    } else {
        Ok(report.render_text())
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr),
        )
        .init();
}
