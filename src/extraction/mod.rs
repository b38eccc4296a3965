use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::config::{DelayWindow, ExtractorConfig};
use crate::export::{ExportFormat, Exporter};
use crate::telemetry::{self};
use crate::telemetry::ops::extract::Phase as ExtractPhase;

pub mod error;
pub mod fallback;
pub mod fetch;
pub mod normalize;
pub mod orchestrator;
pub mod session;
pub mod types;

use fetch::RelayRetriever;
use orchestrator::ExtractionOrchestrator;
use session::Session;
use types::{ExportedFile, ExtractResult, ExtractionMode};

/// pagetext extract <url>
#[derive(Args)]
pub struct ExtractCmd {
    pub url: String,
    #[arg(long, value_enum, default_value_t = ExtractionMode::Content)]
    pub mode: ExtractionMode,
    /// Comma-separated export formats to write, e.g. `json,csv`
    #[arg(long, value_enum, value_delimiter = ',')]
    pub export: Vec<ExportFormat>,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Skip the simulated processing delay
    #[arg(long, default_value_t = false)]
    pub no_delay: bool,
    /// Print the extracted text to stdout
    #[arg(long, default_value_t = false)]
    pub show_body: bool,
}

pub async fn run(cfg: &ExtractorConfig, args: ExtractCmd) -> Result<()> {
    let t0 = Instant::now();
    let log = telemetry::extract();
    let _g = log.root_span_kv([
        ("url", args.url.clone()),
        ("mode", args.mode.as_str().to_string()),
        ("export", format!("{:?}", args.export)),
        ("no_delay", args.no_delay.to_string()),
    ]).entered();

    let delay = if args.no_delay { DelayWindow::NONE } else { cfg.delay };
    let retriever = Arc::new(RelayRetriever::new(cfg)?);
    let session = Session::new(ExtractionOrchestrator::new(retriever, delay));

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() { on_ctrl_c.cancel(); }
    });

    log.info(format!("🔎 Extracting {} ({})", args.url, args.mode.label()));
    let record = match session.extract(&args.url, args.mode, &cancel).await {
        Ok(record) => record,
        Err(err) => {
            log.error(err.to_string());
            return Err(err.into());
        }
    };
    log.record_summary(&record);
    let stats = session.stats();
    log.stats(&stats);

    let mut exports: Vec<ExportedFile> = Vec::new();
    if !args.export.is_empty() {
        let _s = log.span_kv(&ExtractPhase::Export, [("out_dir", args.out_dir.display().to_string())]).entered();
        let exporter = Exporter::local();
        let current = session.current();
        for format in &args.export {
            let Some(export) = exporter.export(*format, current.as_ref())? else { continue };
            let path = export.write_to(&args.out_dir)?;
            log.info_kv("💾 export written", [("format", format.as_str().to_string()), ("path", path.display().to_string())]);
            exports.push(ExportedFile { format: format.as_str(), path: path.display().to_string() });
        }
    }

    let json = telemetry::config::json_mode();
    if prints_body(&args, json) {
        println!("{}", record.body);
    }

    if json {
        let result = ExtractResult { record, stats, exports };
        log.result(&result, Some(t0.elapsed()))?;
    }
    Ok(())
}

/// The body goes to stdout only in text mode; the JSON envelope already carries it.
fn prints_body(args: &ExtractCmd, json: bool) -> bool {
    args.show_body && !json
}
