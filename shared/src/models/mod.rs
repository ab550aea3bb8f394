//! Data models
//!
//! Reference data (standard room types, room types, stay types, amenities,
//! areas, view types, meal plans) and the rooms that denormalize it.
//! All IDs are `PREFIX-NNN` strings, all timestamps Unix millis.

pub mod amenity;
pub mod area;
pub mod meal_plan;
pub mod room;
pub mod room_type;
pub mod standard_room_type;
pub mod stay_type;
pub mod view_type;

// Re-exports
pub use amenity::*;
pub use area::*;
pub use meal_plan::*;
pub use room::*;
pub use room_type::*;
pub use standard_room_type::*;
pub use stay_type::*;
pub use view_type::*;
