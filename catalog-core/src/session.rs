//! Edit-session state machine - NO I/O, just state transitions.
//!
//! Tracks whether a submit would create a new record or update an existing
//! one. The actual submit (validation, gateway call, cache update) is
//! performed by catalog-client; this module only answers "which mode are
//! we in, and against which cache position".

/// Add-vs-edit mode while a form is being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    /// Submitting creates a new record.
    #[default]
    Idle,
    /// Submitting updates the record at `index` in the local cache.
    Editing {
        /// Cache position of the record being modified.
        index: usize,
    },
}

impl EditSession {
    /// Create a new session in the Idle state.
    pub fn new() -> Self {
        Self::Idle
    }

    /// Start editing the record at `index`. Valid from any state; starting
    /// a new edit simply retargets the session.
    pub fn begin_edit(self, index: usize) -> Self {
        Self::Editing { index }
    }

    /// A submit went through; the session returns to Idle.
    ///
    /// Failed submits do not call this - the session keeps its state so
    /// the operator can retry.
    pub fn complete(self) -> Self {
        Self::Idle
    }

    /// Check if an existing record is being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// The cache index under edit, if any.
    pub fn editing_index(&self) -> Option<usize> {
        match self {
            Self::Editing { index } => Some(*index),
            Self::Idle => None,
        }
    }

    /// Label for the UI's submit control in this state.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Idle => "Add Book",
            Self::Editing { .. } => "Update Book",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_idle() {
        let session = EditSession::new();
        assert!(!session.is_editing());
        assert_eq!(session.editing_index(), None);
    }

    #[test]
    fn begin_edit_targets_an_index() {
        let session = EditSession::new().begin_edit(3);
        assert!(session.is_editing());
        assert_eq!(session.editing_index(), Some(3));
    }

    #[test]
    fn begin_edit_retargets_an_open_session() {
        let session = EditSession::new().begin_edit(1).begin_edit(4);
        assert_eq!(session.editing_index(), Some(4));
    }

    #[test]
    fn complete_returns_to_idle() {
        let session = EditSession::new().begin_edit(2).complete();
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn complete_in_idle_stays_idle() {
        assert_eq!(EditSession::new().complete(), EditSession::Idle);
    }

    #[test]
    fn action_label_follows_mode() {
        assert_eq!(EditSession::new().action_label(), "Add Book");
        assert_eq!(EditSession::new().begin_edit(0).action_label(), "Update Book");
    }
}
