//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Room errors
/// - 2xxx: Room type errors
/// - 3xxx: Reference data errors
/// - 4xxx..9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Room errors (1xxx)
    Room,
    /// Room type errors (2xxx)
    RoomType,
    /// Reference data errors (3xxx)
    Reference,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Room,
            2000..3000 => Self::RoomType,
            3000..4000 => Self::Reference,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Room => "room",
            Self::RoomType => "room_type",
            Self::Reference => "reference",
            Self::System => "system",
        }
    }

    /// Whether errors in this category are caused by user input
    /// and can be fixed by correcting a form
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::System)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
