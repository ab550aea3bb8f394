//! Area Model

use serde::{Deserialize, Serialize};

/// Area entity (building, wing, floor section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub floor: Option<i32>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create area payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub floor: Option<i32>,
}

/// Update area payload; `floor: Some(None)` clears the floor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub floor: Option<Option<i32>>,
    pub is_active: Option<bool>,
}
