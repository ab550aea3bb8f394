//! Usage queries for reference records
//!
//! The only place that answers "is this record still referenced". Each
//! function composes reads across [`AdminStores`] and returns a
//! [`UsageReport`] that the owning store consumes on delete. Only active
//! rooms count: soft-deleted rooms are frozen audit records.

use shared::models::{
    Amenity, Area, MealPlan, Room, RoomTypeConfig, RoomViewType, StandardRoomType, StayType,
};

use crate::core::AdminStores;
use crate::db::repository::{ReferenceRecord, UsageReport};

fn room_label(room: &Room) -> String {
    format!("Room {}", room.number)
}

fn room_type_label(room_type: &RoomTypeConfig) -> String {
    format!("Room type {}", room_type.name)
}

fn add_rooms(report: &mut UsageReport, stores: &AdminStores, predicate: impl Fn(&Room) -> bool) {
    for room in stores.rooms.active().filter(|r| predicate(r)) {
        report.add("room", room.id.clone(), room_label(room));
    }
}

/// Room types bound to it and rooms typed with its name, unless a room
/// type configuration owns that name
pub fn standard_room_type(stores: &AdminStores, record: &StandardRoomType) -> UsageReport {
    let mut report = UsageReport::new(StandardRoomType::KIND, record.name.clone());
    for room_type in stores
        .room_types
        .all()
        .iter()
        .filter(|rt| rt.standard_room_type_id.as_deref() == Some(record.id.as_str()))
    {
        report.add("room type", room_type.id.clone(), room_type_label(room_type));
    }
    if stores.room_types.find_by_name(&record.name).is_none() {
        add_rooms(&mut report, stores, |r| r.room_type == record.name);
    }
    report
}

pub fn room_type(stores: &AdminStores, record: &RoomTypeConfig) -> UsageReport {
    let mut report = UsageReport::new(RoomTypeConfig::KIND, record.name.clone());
    add_rooms(&mut report, stores, |r| r.room_type == record.name);
    report
}

/// Rooms and room types listing the amenity
pub fn amenity(stores: &AdminStores, record: &Amenity) -> UsageReport {
    let mut report = UsageReport::new(Amenity::KIND, record.name.clone());
    add_rooms(&mut report, stores, |r| r.amenities.contains(&record.name));
    for room_type in stores
        .room_types
        .all()
        .iter()
        .filter(|rt| rt.amenities.contains(&record.name))
    {
        report.add("room type", room_type.id.clone(), room_type_label(room_type));
    }
    report
}

pub fn area(stores: &AdminStores, record: &Area) -> UsageReport {
    let mut report = UsageReport::new(Area::KIND, record.name.clone());
    add_rooms(&mut report, stores, |r| r.area == record.name);
    report
}

pub fn stay_type(stores: &AdminStores, record: &StayType) -> UsageReport {
    let mut report = UsageReport::new(StayType::KIND, record.name.clone());
    add_rooms(&mut report, stores, |r| r.stay_type == record.name);
    report
}

/// Informational: deleting a view type clears it on these rooms
pub fn view_type(stores: &AdminStores, record: &RoomViewType) -> UsageReport {
    let mut report = UsageReport::new(RoomViewType::KIND, record.name.clone());
    add_rooms(&mut report, stores, |r| {
        r.view_type_id.as_deref() == Some(record.id.as_str())
    });
    report
}

/// Informational: deleting a meal plan clears it on these rooms
pub fn meal_plan(stores: &AdminStores, record: &MealPlan) -> UsageReport {
    let mut report = UsageReport::new(MealPlan::KIND, record.name.clone());
    add_rooms(&mut report, stores, |r| {
        r.meal_plan_code.as_deref() == Some(record.code.as_str())
    });
    report
}
