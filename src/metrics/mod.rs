//! Runtime counters surfaced as periodic structured log snapshots.

use std::time::Duration;

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Accumulated counters for one runtime session.
#[derive(Debug, Default, Clone)]
pub struct RuntimeMetrics {
    events: u64,
    frames: u64,
    layout_passes: u64,
    nodes_laid_out: u64,
    static_lines: u64,
}

impl RuntimeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_event(&mut self) {
        self.events = self.events.saturating_add(1);
    }

    pub fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    /// Record one layout pass and the number of nodes it positioned.
    pub fn record_layout(&mut self, node_count: usize) {
        self.layout_passes = self.layout_passes.saturating_add(1);
        self.nodes_laid_out = self.nodes_laid_out.saturating_add(node_count as u64);
    }

    pub fn record_static_lines(&mut self, count: usize) {
        if count > 0 {
            self.static_lines = self.static_lines.saturating_add(count as u64);
        }
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            events: self.events,
            frames: self.frames,
            layout_passes: self.layout_passes,
            nodes_laid_out: self.nodes_laid_out,
            static_lines: self.static_lines,
        }
    }
}

/// Point-in-time view of the runtime counters.
#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub events: u64,
    pub frames: u64,
    pub layout_passes: u64,
    pub nodes_laid_out: u64,
    pub static_lines: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("events".to_string(), json!(self.events));
        map.insert("frames".to_string(), json!(self.frames));
        map.insert("layout_passes".to_string(), json!(self.layout_passes));
        map.insert("nodes_laid_out".to_string(), json!(self.nodes_laid_out));
        map.insert("static_lines".to_string(), json!(self.static_lines));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "runtime_metrics".to_string(),
            self.as_fields(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_carries_all_counters() {
        let mut metrics = RuntimeMetrics::new();
        metrics.record_event();
        metrics.record_frame();
        metrics.record_layout(7);
        metrics.record_layout(3);
        metrics.record_static_lines(2);
        metrics.record_static_lines(0);

        let snapshot = metrics.snapshot(Duration::from_millis(1500));
        assert_eq!(snapshot.uptime_ms, 1500);
        assert_eq!(snapshot.events, 1);
        assert_eq!(snapshot.frames, 1);
        assert_eq!(snapshot.layout_passes, 2);
        assert_eq!(snapshot.nodes_laid_out, 10);
        assert_eq!(snapshot.static_lines, 2);
    }

    #[test]
    fn snapshot_event_has_metrics_target() {
        let metrics = RuntimeMetrics::new();
        let event = metrics
            .snapshot(Duration::from_secs(1))
            .to_log_event("weft::runtime.metrics");
        assert_eq!(event.target, "weft::runtime.metrics");
        assert_eq!(event.message, "runtime_metrics");
        assert!(event.fields.contains_key("frames"));
    }
}
