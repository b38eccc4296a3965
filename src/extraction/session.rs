use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

use crate::telemetry::{self};
use crate::telemetry::ops::extract::Phase as ExtractPhase;

use super::error::ExtractError;
use super::orchestrator::ExtractionOrchestrator;
use super::types::{ExtractionMode, ExtractionRecord, ExtractionRequest, ExtractionStats};

/// Holds at most one record. Writers swap the whole value under the lock.
#[derive(Default)]
pub struct RecordSlot {
    inner: Mutex<Option<ExtractionRecord>>,
}

impl RecordSlot {
    pub fn replace(&self, record: ExtractionRecord) {
        *self.lock() = Some(record);
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn get(&self) -> Option<ExtractionRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ExtractionRecord>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// One user's extraction state: the record slot plus the in-flight flag.
pub struct Session {
    orchestrator: ExtractionOrchestrator,
    slot: RecordSlot,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ExtractError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ExtractError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl Session {
    pub fn new(orchestrator: ExtractionOrchestrator) -> Self {
        Self { orchestrator, slot: RecordSlot::default(), in_flight: AtomicBool::new(false) }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Validate, run, and store one extraction. The previous record is dropped
    /// once validation passes, so a cancelled run leaves the slot empty.
    pub async fn extract(&self, raw_url: &str, mode: ExtractionMode, cancel: &CancellationToken) -> Result<ExtractionRecord, ExtractError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        let log = telemetry::extract();

        let request = {
            let _s = log.span_kv(&ExtractPhase::Validate, [("url", raw_url.to_string()), ("mode", mode.as_str().to_string())]).entered();
            ExtractionRequest::new(raw_url, mode)?
        };

        self.slot.clear();
        let record = self.orchestrator.run(&request, cancel).await?;

        let _s = log.span(&ExtractPhase::Store).entered();
        self.slot.replace(record.clone());
        Ok(record)
    }

    pub fn current(&self) -> Option<ExtractionRecord> {
        self.slot.get()
    }

    pub fn clear(&self) {
        self.slot.clear();
    }

    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats::from_record(self.slot.get().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::DelayWindow;
    use crate::extraction::fetch::{FetchError, MockRetriever};

    fn session(mock: Arc<MockRetriever>, delay: DelayWindow) -> Session {
        Session::new(ExtractionOrchestrator::new(mock, delay))
    }

    #[tokio::test]
    async fn invalid_url_never_reaches_retrieval() {
        let mock = Arc::new(MockRetriever::new());
        let s = session(mock.clone(), DelayWindow::NONE);

        let err = s.extract("not a url", ExtractionMode::Content, &CancellationToken::new()).await.unwrap_err();

        assert!(matches!(err, ExtractError::InvalidUrl { .. }));
        assert!(mock.calls().is_empty());
        assert!(!s.is_busy());
    }

    #[tokio::test]
    async fn validation_failure_keeps_previous_record() {
        let mock = Arc::new(MockRetriever::new());
        let s = session(mock, DelayWindow::NONE);
        s.extract("https://github.com/x/y", ExtractionMode::Content, &CancellationToken::new()).await.unwrap();

        assert!(s.extract("", ExtractionMode::Content, &CancellationToken::new()).await.is_err());
        assert!(s.current().is_some());
    }

    #[tokio::test]
    async fn stores_record_and_reports_stats() {
        let mock = Arc::new(MockRetriever::new());
        mock.push_failure(FetchError::MissingContents);
        let s = session(mock, DelayWindow::NONE);
        assert_eq!(s.stats(), ExtractionStats::default());

        let record = s.extract("https://example.org/page", ExtractionMode::Articles, &CancellationToken::new()).await.unwrap();

        assert_eq!(s.current(), Some(record.clone()));
        let stats = s.stats();
        assert_eq!(stats.total_pages, 1);
        assert_eq!(stats.total_words, record.word_count);
        assert_eq!(stats.total_chars, record.char_count);
        assert_eq!(stats.total_paragraphs, record.paragraph_count);

        s.clear();
        assert!(s.current().is_none());
        assert_eq!(s.stats().total_pages, 0);
    }

    #[tokio::test]
    async fn next_extraction_replaces_record() {
        let mock = Arc::new(MockRetriever::new());
        let s = session(mock, DelayWindow::NONE);
        s.extract("https://github.com/a/b", ExtractionMode::Content, &CancellationToken::new()).await.unwrap();
        s.extract("https://www.cisco.com/", ExtractionMode::Content, &CancellationToken::new()).await.unwrap();

        assert_eq!(s.current().unwrap().title, "CCNA - Introduction to Networks");
    }

    #[tokio::test]
    async fn second_extraction_while_in_flight_is_refused() {
        let mock = Arc::new(MockRetriever::new());
        let s = session(mock, DelayWindow { min_ms: 200, max_ms: 200 });
        let cancel = CancellationToken::new();

        let (first, second) = tokio::join!(
            s.extract("https://example.org/a", ExtractionMode::Content, &cancel),
            async {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                s.extract("https://example.org/b", ExtractionMode::Content, &cancel).await
            }
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(ExtractError::Busy)));
        assert_eq!(s.current().unwrap().url, "https://example.org/a");
    }

    #[tokio::test]
    async fn cancellation_leaves_slot_empty_and_releases_flag() {
        let mock = Arc::new(MockRetriever::new());
        let s = session(mock, DelayWindow { min_ms: 5_000, max_ms: 5_000 });
        s.slot.replace(crate::extraction::types::ExtractionRecord {
            url: "https://old.example".into(),
            title: "old".into(),
            body: "old".into(),
            word_count: 1,
            char_count: 3,
            paragraph_count: 1,
            extracted_at: chrono::Utc::now(),
            mode: ExtractionMode::Content,
            accepted: false,
        });
        let cancel = CancellationToken::new();

        let (res, _) = tokio::join!(
            s.extract("https://example.org/a", ExtractionMode::Content, &cancel),
            async {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                cancel.cancel();
            }
        );

        assert!(matches!(res, Err(ExtractError::Cancelled)));
        assert!(s.current().is_none());
        assert!(!s.is_busy());
    }
}
