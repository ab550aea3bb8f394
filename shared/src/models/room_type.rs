//! Room Type Configuration Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room type configuration entity (sellable room type with price and amenities)
///
/// When `standard_room_type_id` is set, `allowed_capacity` mirrors the
/// standard type's `default_capacity` and is kept in sync on change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub standard_room_type_id: Option<String>,
    pub base_price: Decimal,
    pub allowed_capacity: u32,
    /// Included amenity names
    #[serde(default)]
    pub amenities: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl RoomTypeConfig {
    /// Whether capacity is inherited from a standard room type
    pub fn is_capacity_locked(&self) -> bool {
        self.standard_room_type_id.is_some()
    }
}

/// Create room type payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeConfigCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub standard_room_type_id: Option<String>,
    pub base_price: Decimal,
    pub allowed_capacity: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Update room type payload
///
/// `standard_room_type_id`: `None` leaves the binding unchanged,
/// `Some(None)` unbinds, `Some(Some(id))` binds to another standard type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeConfigUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub standard_room_type_id: Option<Option<String>>,
    pub base_price: Option<Decimal>,
    pub allowed_capacity: Option<u32>,
    pub amenities: Option<Vec<String>>,
}
