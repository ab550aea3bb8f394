//! Room Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room housekeeping / occupancy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Occupied,
    Reserved,
    Dirty,
    CleaningInProgress,
    UnderMaintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 6] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Reserved,
        RoomStatus::Dirty,
        RoomStatus::CleaningInProgress,
        RoomStatus::UnderMaintenance,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Reserved => "Reserved",
            RoomStatus::Dirty => "Dirty",
            RoomStatus::CleaningInProgress => "Cleaning in progress",
            RoomStatus::UnderMaintenance => "Under maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Room entity
///
/// `room_type`, `stay_type`, `area`, `amenities` and `view_type_name` are
/// denormalized copies of reference-data names, kept in sync by cascades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub number: String,
    pub room_type: String,
    pub stay_type: String,
    pub capacity: u32,
    pub price: Decimal,
    pub area: String,
    pub amenities: Vec<String>,
    pub status: RoomStatus,
    pub view_type_id: Option<String>,
    pub view_type_name: Option<String>,
    pub meal_plan_code: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    /// Soft delete marker (Unix millis)
    pub deleted_at: Option<i64>,
    pub deletion_reason: Option<String>,
}

impl Room {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Create room payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomCreate {
    pub number: String,
    pub room_type: String,
    pub stay_type: String,
    pub capacity: u32,
    pub price: Decimal,
    pub area: String,
    pub amenities: Vec<String>,
    pub status: Option<RoomStatus>,
    pub view_type_id: Option<String>,
    pub view_type_name: Option<String>,
    pub meal_plan_code: Option<String>,
    pub image_url: Option<String>,
}

/// Update room payload
///
/// Optional reference fields use `Option<Option<_>>`: `Some(None)` clears.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub number: Option<String>,
    pub room_type: Option<String>,
    pub stay_type: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<Decimal>,
    pub area: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub status: Option<RoomStatus>,
    pub view_type_id: Option<Option<String>>,
    pub view_type_name: Option<Option<String>>,
    pub meal_plan_code: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}
