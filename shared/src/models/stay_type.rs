//! Stay Type Model

use serde::{Deserialize, Serialize};

/// Stay type entity (nightly, day use, long stay...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create stay type payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayTypeCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Update stay type payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StayTypeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
