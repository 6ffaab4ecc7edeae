use fitness_core::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitreport")]
#[command(about = "Training summaries from fitness sensor readings", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, value_parser = ["text", "json"])]
    format: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = match cli.config {
        Some(path) => (Config::load_from(&path)?, ConfigSource::File(path)),
        None => Config::load()?,
    };

    fitness_core::logging::init_with_level(&config.logging.level);
    source.log();

    let mut options = config.batch_options();
    if let Some(ref format) = cli.format {
        options.format = match format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    tracing::debug!("Running {} sample packages with {:?}", sample_packages().len(), options);

    let outcome = run_batch(sample_packages(), &options)?;

    for line in &outcome.lines {
        println!("{}", line);
    }

    outcome.ensure_success()
}
