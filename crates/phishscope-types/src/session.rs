use crate::models::AnalysisBatch;

/// Lifecycle state of one fetch-and-analyze attempt.
///
/// Exactly one state holds at any time; results and an error message never
/// coexist. `Idle` is only ever the initial state — once an attempt has been
/// triggered the session moves between `Loading` and the two terminal states.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// No attempt has been triggered yet.
    Idle,
    /// A request is in flight. Re-triggering in this state is a no-op.
    Loading,
    /// The last attempt completed and the whole batch normalized.
    Succeeded(AnalysisBatch),
    /// The last attempt failed. `message` is the fixed user-safe text;
    /// diagnostic detail never travels through this state.
    Failed { message: String },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Succeeded(_) | SessionState::Failed { .. })
    }

    /// The normalized batch, if the last attempt succeeded.
    pub fn batch(&self) -> Option<&AnalysisBatch> {
        match self {
            SessionState::Succeeded(batch) => Some(batch),
            _ => None,
        }
    }

    /// The user-facing failure message, if the last attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SessionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Short name for logging and debugging.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Loading => "loading",
            SessionState::Succeeded(_) => "succeeded",
            SessionState::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(!SessionState::Idle.is_loading());
        assert!(SessionState::Loading.is_loading());
        assert!(!SessionState::Loading.is_terminal());
        assert!(
            SessionState::Failed {
                message: "x".to_string()
            }
            .is_terminal()
        );
        assert!(SessionState::Succeeded(AnalysisBatch::new(vec![])).is_terminal());
    }

    #[test]
    fn test_accessors_are_state_exclusive() {
        let succeeded = SessionState::Succeeded(AnalysisBatch::new(vec![]));
        assert!(succeeded.batch().is_some());
        assert!(succeeded.error_message().is_none());

        let failed = SessionState::Failed {
            message: "boom".to_string(),
        };
        assert!(failed.batch().is_none());
        assert_eq!(failed.error_message(), Some("boom"));
    }
}
