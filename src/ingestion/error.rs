#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpIssueReason {
    MalformedJson,
    UnexpectedShape,
    EmptyFragment,
}

/// A fragment of a dump file that could not be used, recorded and skipped.
#[derive(Debug, Clone)]
pub struct DumpIssue {
    pub fragment_index: usize,
    pub reason: DumpIssueReason,
    pub message: String,
}

impl DumpIssue {
    pub fn new(
        fragment_index: usize,
        reason: DumpIssueReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            fragment_index,
            reason,
            message: message.into(),
        }
    }
}
