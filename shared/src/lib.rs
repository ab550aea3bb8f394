//! Shared types for hotel room administration
//!
//! Domain models, the unified error system, query/paging types and
//! small utilities used by every crate in the workspace.

pub mod error;
pub mod models;
pub mod query;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use query::{ListQuery, PaginatedResponse, SortDirection};
