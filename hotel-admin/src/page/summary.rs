//! Room card display model

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{MealPlan, Room, RoomViewType};

/// What a room card shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSummary {
    pub id: String,
    pub number: String,
    pub room_type: String,
    pub status: String,
    pub capacity: u32,
    pub area: String,
    pub base_price: Decimal,
    /// Nightly price after the view surcharge
    pub effective_price: Decimal,
    pub view: Option<String>,
    pub meal_plan: Option<String>,
    pub amenities: String,
    pub image_url: Option<String>,
}

impl RoomSummary {
    /// `view_type` and `meal_plan` are the records the room references, when they exist
    pub fn build(room: &Room, view_type: Option<&RoomViewType>, meal_plan: Option<&MealPlan>) -> Self {
        let effective_price = view_type
            .map(|vt| vt.surcharge.apply_to(room.price))
            .unwrap_or(room.price);

        let meal_plan = match (meal_plan, room.meal_plan_code.as_deref()) {
            (Some(plan), _) => Some(format!("{} ({})", plan.name, plan.code)),
            (None, Some(code)) => Some(code.to_string()),
            (None, None) => None,
        };

        Self {
            id: room.id.clone(),
            number: room.number.clone(),
            room_type: room.room_type.clone(),
            status: room.status.label().to_string(),
            capacity: room.capacity,
            area: room.area.clone(),
            base_price: room.price,
            effective_price,
            view: room.view_type_name.clone(),
            meal_plan,
            amenities: room.amenities.join(", "),
            image_url: room.image_url.clone(),
        }
    }
}
