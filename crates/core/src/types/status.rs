//! Order status lifecycle.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a valid [`OrderStatus`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid status {value:?}: must be one of NEW, PROCESSING, COMPLETED, CANCELLED")]
pub struct ParseOrderStatusError {
    value: String,
}

/// Lifecycle status of an [`Order`](crate::entities::Order).
///
/// Orders start [`New`](Self::New) and move freely between the non-terminal
/// states. [`Completed`](Self::Completed) and [`Cancelled`](Self::Cancelled)
/// are terminal: once reached, the only accepted write is re-asserting the
/// same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Freshly created, the creation default.
    #[default]
    New,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All valid statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::New,
        Self::Processing,
        Self::Completed,
        Self::Cancelled,
    ];

    /// The wire representation (matches the serde encoding).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether no transition to a different status is permitted from here.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Self::New),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseOrderStatusError {
                value: s.to_owned(),
            }),
        }
    }
}
