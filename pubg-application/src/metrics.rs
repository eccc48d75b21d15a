use std::sync::atomic::{AtomicU64, Ordering};

use pubg_domain::DecodeSummary;

#[derive(Debug, Default)]
pub struct DecodeMetrics {
    requests: AtomicU64,
    documents: AtomicU64,
    fatal: AtomicU64,
    skipped: AtomicU64,
    events: AtomicU64,
    unknown: AtomicU64,
    invalid: AtomicU64,
}

impl DecodeMetrics {
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_document(&self) {
        self.documents.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fatal(&self) {
        self.fatal.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_events(&self, summary: &DecodeSummary) {
        self.events
            .fetch_add(summary.events as u64, Ordering::Relaxed);
        self.unknown
            .fetch_add(summary.unknown as u64, Ordering::Relaxed);
        self.invalid
            .fetch_add(summary.invalid as u64, Ordering::Relaxed);
    }

    pub fn events(&self) -> u64 {
        self.events.load(Ordering::Relaxed)
    }

    pub fn invalid(&self) -> u64 {
        self.invalid.load(Ordering::Relaxed)
    }

    pub fn render_summary(&self) -> String {
        let requests = self.requests.load(Ordering::Relaxed);
        let documents = self.documents.load(Ordering::Relaxed);
        let fatal = self.fatal.load(Ordering::Relaxed);
        let skipped = self.skipped.load(Ordering::Relaxed);
        let events = self.events.load(Ordering::Relaxed);
        let unknown = self.unknown.load(Ordering::Relaxed);
        let invalid = self.invalid.load(Ordering::Relaxed);

        format!(
            "requests: {}\n\
documents decoded: {}\n\
fatal decode failures: {}\n\
skipped resources: {}\n\
events decoded: {}\n\
unknown events: {}\n\
invalid events: {}\n",
            requests, documents, fatal, skipped, events, unknown, invalid
        )
    }
}
