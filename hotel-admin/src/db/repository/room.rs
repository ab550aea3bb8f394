//! Room Catalog

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Room, RoomCreate, RoomStatus, RoomUpdate};
use shared::query::SortDirection;
use shared::util::{now_millis, parse_sequence, sequential_id};
use std::cmp::Ordering;

use crate::db::Storage;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_name_list,
    validate_non_negative, validate_optional_text, validate_positive, validate_required_text,
};

const STORAGE_KEY: &str = "rooms";
const ID_PREFIX: &str = "RM";

/// Room list sort fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomSortField {
    Number,
    Price,
    Type,
    Status,
    Area,
    ViewType,
    MealPlan,
    Capacity,
}

/// Room list filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomFilter {
    /// Case-insensitive substring over number, room type and area
    pub search: Option<String>,
    pub status: Option<RoomStatus>,
    pub room_type: Option<String>,
    pub area: Option<String>,
    pub stay_type: Option<String>,
    pub view_type_id: Option<String>,
    pub meal_plan_code: Option<String>,
    pub min_capacity: Option<u32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: Option<RoomSortField>,
    #[serde(default)]
    pub direction: SortDirection,
    #[serde(default)]
    pub include_deleted: bool,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        if room.is_deleted() && !self.include_deleted {
            return false;
        }
        if let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            let hit = room.number.to_lowercase().contains(&needle)
                || room.room_type.to_lowercase().contains(&needle)
                || room.area.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if self.status.is_some_and(|s| s != room.status) {
            return false;
        }
        if self.room_type.as_ref().is_some_and(|t| *t != room.room_type) {
            return false;
        }
        if self.area.as_ref().is_some_and(|a| *a != room.area) {
            return false;
        }
        if self.stay_type.as_ref().is_some_and(|s| *s != room.stay_type) {
            return false;
        }
        if self
            .view_type_id
            .as_ref()
            .is_some_and(|v| room.view_type_id.as_ref() != Some(v))
        {
            return false;
        }
        if self
            .meal_plan_code
            .as_ref()
            .is_some_and(|m| room.meal_plan_code.as_ref() != Some(m))
        {
            return false;
        }
        if self.min_capacity.is_some_and(|c| room.capacity < c) {
            return false;
        }
        if self.min_price.is_some_and(|p| room.price < p) {
            return false;
        }
        if self.max_price.is_some_and(|p| room.price > p) {
            return false;
        }
        true
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Numeric room numbers compare by value ("9" < "10"), others as text
fn number_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => text_cmp(a, b),
    }
}

fn compare_rooms(field: RoomSortField, a: &Room, b: &Room) -> Ordering {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    match field {
        RoomSortField::Number => number_cmp(&a.number, &b.number),
        RoomSortField::Price => a.price.cmp(&b.price),
        RoomSortField::Type => text_cmp(&a.room_type, &b.room_type),
        RoomSortField::Status => a.status.cmp(&b.status),
        RoomSortField::Area => text_cmp(&a.area, &b.area),
        RoomSortField::ViewType => text_cmp(&opt(&a.view_type_name), &opt(&b.view_type_name)),
        RoomSortField::MealPlan => text_cmp(&opt(&a.meal_plan_code), &opt(&b.meal_plan_code)),
        RoomSortField::Capacity => a.capacity.cmp(&b.capacity),
    }
}

/// Owns the room collection
pub struct RoomCatalog {
    rooms: Vec<Room>,
    last_seq: u64,
    storage: Storage,
}

impl RoomCatalog {
    pub fn load(storage: Storage) -> AppResult<Self> {
        let rooms: Vec<Room> = storage.load(STORAGE_KEY)?;
        let highest = rooms
            .iter()
            .filter_map(|r| parse_sequence(ID_PREFIX, &r.id))
            .max()
            .unwrap_or(0);
        let last_seq = storage.sequence(STORAGE_KEY)?.max(highest);

        tracing::debug!(count = rooms.len(), "Room catalog loaded");
        Ok(Self {
            rooms,
            last_seq,
            storage,
        })
    }

    /// Rooms matching `filter`, sorted when a sort field is set
    pub fn list(&self, filter: &RoomFilter) -> Vec<Room> {
        let mut items: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();

        if let Some(field) = filter.sort {
            items.sort_by(|a, b| filter.direction.apply(compare_rooms(field, a, b)));
        }
        items
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Active room with the given number
    pub fn find_by_number(&self, number: &str) -> Option<&Room> {
        let number = number.trim();
        self.active().find(|r| r.number == number)
    }

    /// Rooms not soft-deleted, insertion order
    pub fn active(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| !r.is_deleted())
    }

    /// Every room including soft-deleted ones
    pub fn all(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn create(&mut self, data: RoomCreate) -> AppResult<Room> {
        let seq = self.last_seq + 1;
        let now = now_millis();
        let room = Room {
            id: sequential_id(ID_PREFIX, seq),
            number: data.number.trim().to_string(),
            room_type: data.room_type,
            stay_type: data.stay_type,
            capacity: data.capacity,
            price: data.price,
            area: data.area,
            amenities: data.amenities,
            status: data.status.unwrap_or(RoomStatus::Available),
            view_type_id: data.view_type_id,
            view_type_name: data.view_type_name,
            meal_plan_code: data.meal_plan_code,
            image_url: data.image_url,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            deletion_reason: None,
        };

        self.validate(&room)?;

        self.rooms.push(room.clone());
        if let Err(e) = self.storage.save_with_sequence(STORAGE_KEY, &self.rooms, seq) {
            self.rooms.pop();
            return Err(e.into());
        }
        self.last_seq = seq;

        tracing::info!(id = %room.id, number = %room.number, "Room created");
        Ok(room)
    }

    /// Merge `data` into the room; `Ok(None)` when it does not exist
    pub fn update(&mut self, id: &str, data: RoomUpdate) -> AppResult<Option<Room>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let previous = self.rooms[index].clone();
        if previous.is_deleted() {
            return Err(deleted_error(&previous));
        }

        let mut room = previous.clone();
        if let Some(number) = data.number {
            room.number = number.trim().to_string();
        }
        if let Some(room_type) = data.room_type {
            room.room_type = room_type;
        }
        if let Some(stay_type) = data.stay_type {
            room.stay_type = stay_type;
        }
        if let Some(capacity) = data.capacity {
            room.capacity = capacity;
        }
        if let Some(price) = data.price {
            room.price = price;
        }
        if let Some(area) = data.area {
            room.area = area;
        }
        if let Some(amenities) = data.amenities {
            room.amenities = amenities;
        }
        if let Some(status) = data.status {
            room.status = status;
        }
        if let Some(view_type_id) = data.view_type_id {
            room.view_type_id = view_type_id;
        }
        if let Some(view_type_name) = data.view_type_name {
            room.view_type_name = view_type_name;
        }
        if let Some(meal_plan_code) = data.meal_plan_code {
            room.meal_plan_code = meal_plan_code;
        }
        if let Some(image_url) = data.image_url {
            room.image_url = image_url;
        }
        room.updated_at = now_millis().max(previous.updated_at);

        self.validate(&room)?;
        self.commit(index, previous, room.clone())?;

        tracing::info!(id, number = %room.number, "Room updated");
        Ok(Some(room))
    }

    /// Soft delete with an audit reason
    pub fn remove(&mut self, id: &str, reason: &str) -> AppResult<Option<Room>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let previous = self.rooms[index].clone();
        if previous.is_deleted() {
            return Err(deleted_error(&previous));
        }
        validate_required_text(reason, "reason", MAX_NOTE_LEN)?;

        let now = now_millis().max(previous.updated_at);
        let mut room = previous.clone();
        room.deleted_at = Some(now);
        room.deletion_reason = Some(reason.trim().to_string());
        room.updated_at = now;

        self.commit(index, previous, room.clone())?;

        tracing::info!(id, number = %room.number, reason, "Room removed");
        Ok(Some(room))
    }

    /// Write a status without transition checks
    pub fn set_status(&mut self, id: &str, status: RoomStatus) -> AppResult<Option<Room>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let previous = self.rooms[index].clone();
        if previous.is_deleted() {
            return Err(deleted_error(&previous));
        }

        let mut room = previous.clone();
        room.status = status;
        room.updated_at = now_millis().max(previous.updated_at);
        self.commit(index, previous.clone(), room.clone())?;

        tracing::info!(id, from = ?previous.status, to = ?status, "Room status changed");
        Ok(Some(room))
    }

    /// Apply `mutate` to every active room matching `predicate`, persisting once.
    ///
    /// Returns the number of rooms touched.
    pub fn update_matching(
        &mut self,
        predicate: impl Fn(&Room) -> bool,
        mut mutate: impl FnMut(&mut Room),
    ) -> AppResult<usize> {
        let snapshot = self.rooms.clone();
        let now = now_millis();
        let mut touched = 0;

        for room in self.rooms.iter_mut().filter(|r| !r.is_deleted()) {
            if predicate(&*room) {
                mutate(room);
                room.updated_at = now.max(room.updated_at);
                touched += 1;
            }
        }

        if touched == 0 {
            return Ok(0);
        }
        if let Err(e) = self.storage.save(STORAGE_KEY, &self.rooms) {
            self.rooms = snapshot;
            return Err(e.into());
        }

        tracing::debug!(touched, "Rooms updated in bulk");
        Ok(touched)
    }

    /// Field constraints plus number uniqueness among other active rooms
    pub fn validate(&self, room: &Room) -> AppResult<()> {
        check_room_fields(room)?;
        if self
            .active()
            .any(|other| other.id != room.id && other.number == room.number)
        {
            return Err(number_taken(&room.number));
        }
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r.id == id)
    }

    fn commit(&mut self, index: usize, previous: Room, room: Room) -> AppResult<()> {
        self.rooms[index] = room;
        if let Err(e) = self.storage.save(STORAGE_KEY, &self.rooms) {
            self.rooms[index] = previous;
            return Err(e.into());
        }
        Ok(())
    }
}

pub(crate) fn number_taken(number: &str) -> AppError {
    AppError::with_message(
        ErrorCode::RoomNumberExists,
        format!("Room number {number} already exists"),
    )
    .with_detail("field", "number")
}

fn deleted_error(room: &Room) -> AppError {
    AppError::with_message(
        ErrorCode::RoomAlreadyDeleted,
        format!("Room {} has been removed", room.number),
    )
    .with_detail("id", room.id.clone())
}

/// Single-room field constraints
fn check_room_fields(room: &Room) -> AppResult<()> {
    if room.number.trim().is_empty() {
        return Err(AppError::new(ErrorCode::RoomNumberRequired).with_detail("field", "number"));
    }
    validate_required_text(&room.number, "number", MAX_SHORT_TEXT_LEN)?;
    if room.amenities.is_empty() {
        return Err(
            AppError::new(ErrorCode::RoomAmenitiesRequired).with_detail("field", "amenities")
        );
    }
    validate_name_list(&room.amenities, "amenities")?;
    validate_required_text(&room.room_type, "room_type", MAX_NAME_LEN)?;
    validate_required_text(&room.stay_type, "stay_type", MAX_NAME_LEN)?;
    validate_required_text(&room.area, "area", MAX_NAME_LEN)?;
    validate_positive(room.capacity, "capacity")?;
    validate_non_negative(room.price, "price")?;
    validate_optional_text(&room.image_url, "image_url", MAX_URL_LEN)
}
