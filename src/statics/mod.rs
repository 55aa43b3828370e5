//! Accumulation buffer for static output regions.
//!
//! Static regions emit content that scrolls away above the dynamic UI (log
//! lines, completed work). Each key is accepted once; re-rendering the same
//! region on later frames is a no-op, so already-emitted lines are never
//! duplicated. The buffer is owned by the runtime and passed into rendering
//! explicitly rather than living in ambient global state.

use std::collections::HashMap;

/// Per-session buffer of accepted static lines, keyed by region.
#[derive(Debug, Default)]
pub struct StaticBuffer {
    lines: Vec<String>,
    keys: HashMap<String, usize>,
}

impl StaticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `lines` for `key`. Returns the number of lines accepted:
    /// zero when the key has already been appended.
    pub fn append(&mut self, key: &str, lines: &[String]) -> usize {
        if self.keys.contains_key(key) {
            return 0;
        }
        self.lines.extend_from_slice(lines);
        self.keys.insert(key.to_string(), self.lines.len());
        lines.len()
    }

    /// All accepted lines, newline-joined.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of accepted lines across all keys.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.keys.clear();
    }
}
