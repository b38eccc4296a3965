use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::extraction::fallback::{self, GENERIC_SAMPLE, SAMPLE_RULES};
use crate::telemetry::{self};
use crate::telemetry::ops::samples::Phase as SamplesPhase;

/// pagetext samples [--host HOST]
#[derive(Args)]
pub struct SamplesCmd {
    /// Show the sample this host would fall back to
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SampleRow {
    pub sample: &'static str,
    pub matches: Vec<&'static str>,
    pub title: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SampleChoice {
    pub host: String,
    pub sample: &'static str,
    pub title: String,
    pub word_count: usize,
    pub char_count: usize,
    pub paragraph_count: usize,
}

pub fn run(args: SamplesCmd) -> Result<()> {
    let log = telemetry::samples();
    let _g = log.root_span_kv([("host", format!("{:?}", args.host))]).entered();

    match args.host {
        Some(host) => {
            let _s = log.span(&SamplesPhase::Select).entered();
            let choice = choose(&host);
            log.info(format!("🧪 {} → {} ({}) words={} chars={} paragraphs={}",
                choice.host, choice.sample, choice.title, choice.word_count, choice.char_count, choice.paragraph_count));
            if telemetry::config::json_mode() { log.result(&choice, None)?; }
        }
        None => {
            let _s = log.span(&SamplesPhase::List).entered();
            let rows = list();
            log.info("🧪 Fallback samples (first match wins):");
            for row in &rows {
                log.info(format!("  {} matches={:?} title={}", row.sample, row.matches, row.title));
            }
            if telemetry::config::json_mode() { log.result(&rows, None)?; }
        }
    }
    Ok(())
}

fn choose(host: &str) -> SampleChoice {
    let content = fallback::select(host);
    SampleChoice {
        host: host.to_string(),
        sample: fallback::sample_name(host),
        title: content.title,
        word_count: content.word_count,
        char_count: content.char_count,
        paragraph_count: content.paragraph_count,
    }
}

fn list() -> Vec<SampleRow> {
    let mut rows: Vec<SampleRow> = SAMPLE_RULES
        .iter()
        .map(|r| SampleRow { sample: r.name, matches: r.needles.to_vec(), title: r.title.to_string() })
        .collect();
    rows.push(SampleRow { sample: GENERIC_SAMPLE, matches: vec!["*"], title: "Contenido de <host>".to_string() });
    rows
}
