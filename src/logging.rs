use crate::metadata::FilterMetadata;

/// Request-bound logger for filter dispatch.
///
/// Borrowed from the request being dispatched, so it cannot outlive it.
/// Every event carries the request ID and the wrapper's fingerprint.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DispatchLog<'a> {
    request_id: &'a str,
    metadata: &'a FilterMetadata,
}

impl<'a> DispatchLog<'a> {
    pub(crate) fn new(request_id: &'a str, metadata: &'a FilterMetadata) -> Self {
        Self {
            request_id,
            metadata,
        }
    }

    /// Logs the outcome of matching resolved candidates.
    pub(crate) fn matched(&self, stage: &'static str, resolved: usize, matched: usize) {
        tracing::debug!(
            request_id = %self.request_id,
            filter = %self.metadata,
            stage,
            resolved,
            matched,
            "matched action filters"
        );
    }

    /// Logs the start of a single filter invocation.
    pub(crate) fn invoking(&self, stage: &'static str, position: usize) {
        tracing::trace!(
            request_id = %self.request_id,
            filter = %self.metadata,
            stage,
            position,
            "invoking action filter"
        );
    }
}
