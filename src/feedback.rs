//! Bounded feedback log narrating each action's outcome, newest line first.

use std::collections::VecDeque;

use crate::config::DEFAULT_LOG_CAP;

/// Append-only text sink bounded by total character count. When an append
/// would exceed the cap, the oldest lines are evicted; a single line longer
/// than the cap is truncated.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    lines: VecDeque<String>,
    cap: usize,
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAP)
    }
}

impl FeedbackLog {
    pub fn new(cap: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            cap,
        }
    }

    /// Total characters held, counting one separator per additional line.
    fn total_chars(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        chars + self.lines.len().saturating_sub(1)
    }

    /// Append a narration line as the newest entry.
    pub fn push(&mut self, line: impl Into<String>) {
        let mut line = line.into();
        if line.chars().count() > self.cap {
            line = line.chars().take(self.cap).collect();
        }
        self.lines.push_front(line);
        while self.total_chars() > self.cap && self.lines.len() > 1 {
            self.lines.pop_back();
        }
    }

    /// Lines from newest to oldest.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.lines.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The log as one text block, newest line first.
    pub fn render(&self) -> String {
        self.lines.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
    }
}
