use anyhow::Result;
use serde::Serialize;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{info, debug, warn, error, Span};

use crate::extraction::types::{ExtractionRecord, ExtractionStats};
use crate::output::types::Meta;

use super::emit;

pub trait PhaseSpan {
    fn name(&self) -> &'static str;
    fn span(&self) -> Span;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseSpan;
    fn root_span() -> Span;
}

pub struct LogCtx<O: OpMarker> {
    pub(crate) json: bool,
    pub(crate) _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    fn op_name(&self) -> &'static str { O::NAME }

    pub fn root_span(&self) -> Span { O::root_span() }

    pub fn root_span_kv<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.root_span();
        let details = kv_to_string(fields);
        if details.is_empty() {
            info!(op = %self.op_name(), "start");
        } else {
            info!(op = %self.op_name(), details = %details, "start");
        }
        span
    }

    pub fn span(&self, ph: &O::Phase) -> Span { ph.span() }

    pub fn span_kv<'a, T>(&self, ph: &O::Phase, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.span(ph);
        let details = kv_to_string(fields);
        if details.is_empty() {
            debug!(op = %self.op_name(), phase = ph.name(), "span_start");
        } else {
            debug!(op = %self.op_name(), phase = ph.name(), details = %details, "span_start");
        }
        span
    }

    pub fn info(&self, msg: impl AsRef<str>) { if self.json { info!(op = %self.op_name(), "{}", msg.as_ref()); } else { info!("{}", msg.as_ref()); } }
    pub fn error(&self, msg: impl AsRef<str>) { if self.json { error!(op = %self.op_name(), "{}", msg.as_ref()); } else { error!("{}", msg.as_ref()); } }

    pub fn info_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(kv);
        if self.json { info!(op = %self.op_name(), details = %details, "{}", msg); }
        else { info!("{} {}", msg, details); }
    }

    pub fn warn_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(kv);
        if self.json { warn!(op = %self.op_name(), details = %details, "{}", msg); }
        else { warn!("{} {}", msg, details); }
    }

    pub fn result<T: Serialize>(&self, result: &T, elapsed: Option<Duration>) -> Result<()> {
        let meta = elapsed.map(|d| Meta { duration_ms: Some(d.as_millis()) });
        emit::print_result(self.op_name(), result, meta)
    }
}

// Extract-specific helpers on the typed context
impl LogCtx<crate::telemetry::ops::extract::Extract> {
    pub fn record_summary(&self, record: &ExtractionRecord) {
        let source = if record.accepted { "page" } else { "sample" };
        if self.json {
            info!(op = %self.op_name(), source, words = record.word_count, chars = record.char_count, paragraphs = record.paragraph_count, title = %record.title, "record");
        } else {
            info!("✅ {}: source={} words={} chars={} paragraphs={}", record.title, source, record.word_count, record.char_count, record.paragraph_count);
        }
    }

    pub fn stats(&self, stats: &ExtractionStats) {
        if self.json { info!(op = %self.op_name(), pages = stats.total_pages, words = stats.total_words, chars = stats.total_chars, paragraphs = stats.total_paragraphs, "stats"); }
        else { info!("📊 Stats: pages={} words={} chars={} paragraphs={}", stats.total_pages, stats.total_words, stats.total_chars, stats.total_paragraphs); }
    }
}

fn kv_to_string<'a, T>(kv: T) -> String
where
    T: IntoIterator<Item = (&'a str, String)>,
{
    let mut parts: Vec<String> = Vec::new();
    for (k, v) in kv { parts.push(format!("{}={}", k, v)); }
    parts.join(" ")
}
