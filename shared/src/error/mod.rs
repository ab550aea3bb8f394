//! Unified error system
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Room errors
//! - 2xxx: Room type errors
//! - 3xxx: Reference data errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::RoomNotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::RoomNumberExists, "Room 101 already exists");
//!
//! // Create an error with details
//! let err = AppError::validation("Capacity must be positive")
//!     .with_detail("field", "capacity");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
