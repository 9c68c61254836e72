//! Captured log buffer
//!
//! The sink is the console's only write path for log lines. It can be fed
//! from any thread; every operation takes the buffer lock for the length of
//! one append or one snapshot and nothing else.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use devcon_core_types::Severity;

use crate::model::LogEntry;

#[derive(Debug, Default)]
struct SinkState {
    entries: VecDeque<LogEntry>,
    next_seq: u64,
    pending: bool,
}

/// Ordered, append-only buffer of formatted log entries
///
/// Entries keep arrival order and are never reordered or deduplicated. With
/// a capacity set, the oldest entries are evicted once the buffer is full;
/// by default the buffer is unbounded.
#[derive(Debug, Default)]
pub struct LogSink {
    state: Mutex<SinkState>,
    capacity: Option<NonZeroUsize>,
}

impl LogSink {
    /// Create an unbounded sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that keeps at most `capacity` entries
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            state: Mutex::default(),
            capacity: Some(capacity),
        }
    }

    /// Create a sink from an optional bound (`None` = unbounded, `Some(0)`
    /// is treated as unbounded too)
    pub fn bounded(capacity: Option<usize>) -> Self {
        match capacity.and_then(NonZeroUsize::new) {
            Some(cap) => Self::with_capacity(cap),
            None => Self::new(),
        }
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    // The buffer is append-only, so a panic while the lock was held cannot
    // leave it half-updated.
    fn state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a message
    pub fn ingest(&self, severity: Severity, message: &str) {
        self.ingest_with_context(severity, message, None);
    }

    /// Append a message followed by optional context such as a stack trace
    pub fn ingest_with_context(&self, severity: Severity, message: &str, context: Option<&str>) {
        let text = LogEntry::format_text(message, context);
        let received_at = Utc::now();

        let mut state = self.state();
        let entry = LogEntry {
            seq: state.next_seq,
            severity,
            text,
            received_at,
        };
        state.next_seq += 1;
        if let Some(cap) = self.capacity {
            while state.entries.len() >= cap.get() {
                state.entries.pop_front();
            }
        }
        state.entries.push_back(entry);
        state.pending = true;
    }

    /// Snapshot of all retained entries in arrival order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.state().entries.iter().cloned().collect()
    }

    /// Entries whose sequence number is greater than or equal to `seq`
    pub fn entries_since(&self, seq: u64) -> Vec<LogEntry> {
        let state = self.state();
        // Retained entries have consecutive sequence numbers.
        let first = state.entries.front().map_or(state.next_seq, |e| e.seq);
        let skip = usize::try_from(seq.saturating_sub(first)).unwrap_or(usize::MAX);
        state.entries.iter().skip(skip).cloned().collect()
    }

    /// Sequence number the next entry will get
    pub fn next_seq(&self) -> u64 {
        self.state().next_seq
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    /// True if entries arrived since the last acknowledgement
    pub fn has_pending_updates(&self) -> bool {
        self.state().pending
    }

    /// Mark all current entries as seen
    pub fn acknowledge_updates(&self) {
        self.state().pending = false;
    }
}
