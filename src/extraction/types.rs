use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::ExtractError;

/// What the caller asked to extract. Recorded on the result; extraction itself
/// treats every mode the same way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    #[default]
    Content,
    Educational,
    Articles,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Content => "content",
            ExtractionMode::Educational => "educational",
            ExtractionMode::Articles => "articles",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExtractionMode::Content => "Todo el contenido",
            ExtractionMode::Educational => "Contenido educativo",
            ExtractionMode::Articles => "Solo artículos",
        }
    }
}

/// A validated extraction request. `raw` is kept verbatim for the record.
#[derive(Clone, Debug)]
pub struct ExtractionRequest {
    pub raw: String,
    pub url: Url,
    pub mode: ExtractionMode,
}

impl ExtractionRequest {
    pub fn new(raw: &str, mode: ExtractionMode) -> Result<Self, ExtractError> {
        if raw.trim().is_empty() {
            return Err(ExtractError::EmptyUrl);
        }
        let url = Url::parse(raw).map_err(|_| ExtractError::InvalidUrl { input: raw.to_string() })?;
        Ok(Self { raw: raw.to_string(), url, mode })
    }

    /// Host used to pick fallback content; empty for host-less URLs.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NormalizedContent {
    pub title: String,
    pub body: String,
    pub word_count: usize,
    pub char_count: usize,
    pub paragraph_count: usize,
    pub accepted: bool,
}

/// The single result shown to the user and fed to the exporters.
/// Field names on the wire follow the export format consumers already read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub url: String,
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    #[serde(rename = "charCount")]
    pub char_count: usize,
    #[serde(rename = "paragraphs")]
    pub paragraph_count: usize,
    #[serde(rename = "extractedAt", serialize_with = "crate::util::time::serialize_millis")]
    pub extracted_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub mode: ExtractionMode,
    #[serde(rename = "extracted")]
    pub accepted: bool,
}

impl ExtractionRecord {
    pub fn from_content(request: &ExtractionRequest, content: NormalizedContent, extracted_at: DateTime<Utc>) -> Self {
        Self {
            url: request.raw.clone(),
            title: content.title,
            body: content.body,
            word_count: content.word_count,
            char_count: content.char_count,
            paragraph_count: content.paragraph_count,
            extracted_at,
            mode: request.mode,
            accepted: content.accepted,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub total_pages: usize,
    pub total_words: usize,
    pub total_chars: usize,
    pub total_paragraphs: usize,
}

impl ExtractionStats {
    pub fn from_record(record: Option<&ExtractionRecord>) -> Self {
        match record {
            None => Self::default(),
            Some(r) => Self {
                total_pages: 1,
                total_words: r.word_count,
                total_chars: r.char_count,
                total_paragraphs: r.paragraph_count,
            },
        }
    }
}

// Result envelope types
#[derive(Serialize)]
pub struct ExportedFile { pub format: &'static str, pub path: String }

#[derive(Serialize)]
pub struct ExtractResult {
    pub record: ExtractionRecord,
    pub stats: ExtractionStats,
    pub exports: Vec<ExportedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_blank_and_malformed_input() {
        assert!(matches!(ExtractionRequest::new("   ", ExtractionMode::Content), Err(ExtractError::EmptyUrl)));
        match ExtractionRequest::new("not a url", ExtractionMode::Content) {
            Err(ExtractError::InvalidUrl { input }) => assert_eq!(input, "not a url"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn request_keeps_raw_input_and_host() {
        let req = ExtractionRequest::new("https://www.netacad.com/courses/ccna", ExtractionMode::Educational).unwrap();
        assert_eq!(req.raw, "https://www.netacad.com/courses/ccna");
        assert_eq!(req.host(), "www.netacad.com");

        let hostless = ExtractionRequest::new("mailto:someone@example.org", ExtractionMode::Content).unwrap();
        assert_eq!(hostless.host(), "");
    }

    #[test]
    fn stats_are_zero_without_a_record() {
        assert_eq!(ExtractionStats::from_record(None), ExtractionStats::default());
    }

    #[test]
    fn record_uses_export_field_names() {
        let record = ExtractionRecord {
            url: "https://example.org".into(),
            title: "t".into(),
            body: "b".into(),
            word_count: 1,
            char_count: 1,
            paragraph_count: 1,
            extracted_at: Utc::now(),
            mode: ExtractionMode::Articles,
            accepted: false,
        };
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(v["content"], "b");
        assert_eq!(v["wordCount"], 1);
        assert_eq!(v["paragraphs"], 1);
        assert_eq!(v["type"], "articles");
        assert!(v.get("extractedAt").is_some());
    }
}
