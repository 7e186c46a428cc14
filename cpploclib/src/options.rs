//! Options that control how a tally reacts to its inputs.

/// What to do when a qualifying file cannot be opened or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreadablePolicy {
    /// Stop the whole tally with an error (default)
    #[default]
    Abort,
    /// Log a warning, record the file as skipped and keep going
    Skip,
}

impl UnreadablePolicy {
    /// Whether an unreadable file ends the tally.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Abort)
    }
}
