use serde::Serialize;

/// Ordered, append-only record of snapshots taken at algorithm-defined
/// checkpoints.
///
/// Entries are full copies frozen at append time; nothing hands out `&mut`
/// into recorded state, so a replay consumer sees exactly what the
/// algorithm saw.  A log can be sealed with a terminal failure marker, after
/// which further appends are rejected.
#[derive(Debug, Clone, Serialize)]
pub struct StepLog<S> {
    entries: Vec<S>,
    failure: Option<String>,
}

impl<S> StepLog<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            failure: None,
        }
    }

    /// Append a snapshot.  Panics if the log was sealed by [`StepLog::fail`].
    pub fn push(&mut self, snapshot: S) {
        assert!(self.failure.is_none(), "step log is sealed");
        self.entries.push(snapshot);
    }

    /// Seal the log with a terminal failure marker.  The entries recorded
    /// up to this point stay readable.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.failure = Some(reason.into());
    }

    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    pub fn last(&self) -> Option<&S> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

impl<S> Default for StepLog<S> {
    fn default() -> Self {
        Self::new()
    }
}
