//! Amenity Model

use serde::{Deserialize, Serialize};

/// Amenity entity (Wi-Fi, minibar, safe...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create amenity payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Update amenity payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmenityUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
