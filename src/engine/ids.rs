use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of workflow document ids.
///
/// Injected into the engine so id assignment is reproducible under test.
/// Node ids are not drawn from here; they are assigned per graph by the
/// assembler and only need to be unique within one workflow.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Default id scheme: wall-clock milliseconds plus a process-local counter,
/// `workflow_<millis>_<n>`. Collision-free within one process lifetime even
/// for same-millisecond calls.
#[derive(Debug, Default)]
pub struct TimestampIds {
    counter: AtomicU64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("workflow_{}_{}", millis, seq)
    }
}

/// Deterministic ids `workflow_1`, `workflow_2`, ... for reproducible runs.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("workflow_{}", seq)
    }
}
