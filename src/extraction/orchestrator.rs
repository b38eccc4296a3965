use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::DelayWindow;
use crate::telemetry::{self};
use crate::telemetry::ops::extract::Phase as ExtractPhase;
use crate::util::time::capture_now;

use super::error::ExtractError;
use super::fetch::{RawFetchOutcome, Retriever};
use super::types::{ExtractionRecord, ExtractionRequest, NormalizedContent};
use super::{fallback, normalize};

/// Sequences one extraction: delay, retrieval, normalization, fallback.
pub struct ExtractionOrchestrator {
    retriever: Arc<dyn Retriever>,
    delay: DelayWindow,
}

impl ExtractionOrchestrator {
    pub fn new(retriever: Arc<dyn Retriever>, delay: DelayWindow) -> Self {
        Self { retriever, delay }
    }

    pub async fn run(&self, request: &ExtractionRequest, cancel: &CancellationToken) -> Result<ExtractionRecord, ExtractError> {
        let log = telemetry::extract();

        let wait = self.delay.sample();
        let delay_span = log.span_kv(&ExtractPhase::Delay, [("ms", wait.as_millis().to_string())]);
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExtractError::Cancelled),
            _ = tokio::time::sleep(wait).instrument(delay_span) => {}
        }

        let fetch_span = log.span_kv(&ExtractPhase::Fetch, [("url", request.url.to_string())]);
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExtractError::Cancelled),
            outcome = self.retriever.retrieve(&request.url).instrument(fetch_span) => outcome,
        };

        let content = match outcome {
            RawFetchOutcome::Html(html) => {
                let bytes = html.len();
                match normalize_off_thread(html).await? {
                    Some(content) => {
                        log.info_kv("📄 extracted page text", [("chars", content.char_count.to_string()), ("html_bytes", bytes.to_string())]);
                        content
                    }
                    None => {
                        log.info_kv("↩️ page text below threshold, using sample", [("html_bytes", bytes.to_string())]);
                        fallback_for(request)
                    }
                }
            }
            RawFetchOutcome::Failed(err) => {
                log.warn_kv("↩️ retrieval failed, using sample", [("error", err.to_string())]);
                fallback_for(request)
            }
        };

        Ok(ExtractionRecord::from_content(request, content, capture_now()))
    }
}

async fn normalize_off_thread(html: String) -> Result<Option<NormalizedContent>, ExtractError> {
    let span = telemetry::extract().span(&ExtractPhase::Normalize);
    tokio::task::spawn_blocking(move || span.in_scope(|| normalize::normalize_html(&html)))
        .await
        .map_err(|e| ExtractError::Unexpected(e.to_string()))
}

fn fallback_for(request: &ExtractionRequest) -> NormalizedContent {
    let host = request.host();
    let log = telemetry::extract();
    let _s = log.span_kv(&ExtractPhase::Fallback, [("host", host.to_string()), ("sample", fallback::sample_name(host).to_string())]).entered();
    fallback::select(host)
}
