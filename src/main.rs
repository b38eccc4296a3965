use clap::{Parser, Subcommand};
use anyhow::Result;
use dotenvy::dotenv;

mod config;
mod export;
mod extraction;
mod output;
mod samples;
mod telemetry;
mod util;

#[derive(Parser)]
#[command(name = "pagetext", about = "Extract the readable text of a web page")]
struct Cli {
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Extract(extraction::ExtractCmd),
    Samples(samples::SamplesCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    let output = output::config::OutputConfig::resolve(cli.json);
    telemetry::config::set_json_mode(output.is_json());

    // initialize logging/tracing (stderr). Respect RUST_LOG and PAGETEXT_LOG_FORMAT
    telemetry::config::init_tracing();
    let cfg = config::ExtractorConfig::from_env();

    match cli.command {
        Commands::Extract(args) => extraction::run(&cfg, args).await?,
        Commands::Samples(args) => samples::run(args)?,
    }

    Ok(())
}
