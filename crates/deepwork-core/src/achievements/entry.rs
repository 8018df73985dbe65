use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One confirmed deep-work session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// The goal the user set for the session.
    pub goal_text: String,
    pub completed_at: DateTime<Utc>,
}

impl Achievement {
    pub fn new(goal_text: impl Into<String>, completed_at: DateTime<Utc>) -> Self {
        Self {
            goal_text: goal_text.into(),
            completed_at,
        }
    }

    /// An achievement completed right now.
    pub fn now(goal_text: impl Into<String>) -> Self {
        Self::new(goal_text, Utc::now())
    }
}
