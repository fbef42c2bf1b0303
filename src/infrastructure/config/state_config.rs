use serde::{Deserialize, Serialize};

use crate::domain::entities::DateRange;

/// Session state remembered between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Start of the last loaded range (`YYYY-MM-DD`).
    #[serde(default)]
    pub last_start_date: Option<String>,

    /// End of the last loaded range (`YYYY-MM-DD`).
    #[serde(default)]
    pub last_end_date: Option<String>,
}

impl StateConfig {
    #[must_use]
    pub fn with_range(range: DateRange) -> Self {
        Self {
            last_start_date: Some(range.start_param()),
            last_end_date: Some(range.end_param()),
        }
    }
}
