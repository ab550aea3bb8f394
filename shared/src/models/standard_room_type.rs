//! Standard Room Type Model

use serde::{Deserialize, Serialize};

/// Standard room type entity (catalogue of base room categories: single, double, suite...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRoomType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Number of guests a room of this type sleeps by default
    pub default_capacity: u32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create standard room type payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRoomTypeCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub default_capacity: u32,
}

/// Update standard room type payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardRoomTypeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub default_capacity: Option<u32>,
}
