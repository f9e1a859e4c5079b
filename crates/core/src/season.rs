//! Calendar-month to season resolution.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the four seasons, bucketed by calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Resolve a calendar month (1-12) to its season.
    ///
    /// Dec-Feb is winter, Mar-May spring, Jun-Aug summer, Sep-Nov
    /// autumn. Months outside 1-12 fail with a validation error.
    pub fn for_month(month: u32) -> CoreResult<Self> {
        match month {
            12 | 1 | 2 => Ok(Season::Winter),
            3..=5 => Ok(Season::Spring),
            6..=8 => Ok(Season::Summer),
            9..=11 => Ok(Season::Autumn),
            other => Err(CoreError::Validation(format!(
                "month must be between 1 and 12, got {other}"
            ))),
        }
    }

    /// The lowercase label used in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
