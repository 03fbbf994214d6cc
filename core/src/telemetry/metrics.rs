use serde::Serialize;
use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

/// Counters since the recorder was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub calculations: usize,
    pub rejections: usize,
    pub panels_processed: u64,
    pub panels_rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_calculation(&self, panels: u64, rejected: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.calculations += 1;
            metrics.panels_processed += panels;
            metrics.panels_rejected += rejected;
        }
    }

    pub fn record_rejection(&self, rejected: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejections += 1;
            metrics.panels_rejected += rejected;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
