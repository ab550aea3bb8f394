//! Reference record trait and its implementations for every
//! reference-data kind.

use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Amenity, AmenityCreate, AmenityUpdate, Area, AreaCreate, AreaUpdate, MealPlan,
    MealPlanCreate, MealPlanUpdate, RoomTypeConfig, RoomTypeConfigCreate, RoomTypeConfigUpdate,
    RoomViewType, RoomViewTypeCreate, RoomViewTypeUpdate, StandardRoomType,
    StandardRoomTypeCreate, StandardRoomTypeUpdate, StayType, StayTypeCreate, StayTypeUpdate,
    SurchargeType,
};
use std::cmp::Ordering;

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_name_list, validate_non_negative,
    validate_percentage, validate_positive, validate_required_text, validate_text_len,
};

/// Value a record is sorted by
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(Decimal),
}

impl SortKey {
    /// Text compares case-insensitively, then by case; mixed kinds compare equal
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// A reference-data record kind managed by a
/// [`ReferenceStore`](super::ReferenceStore)
pub trait ReferenceRecord: Clone + Serialize + DeserializeOwned {
    type Create;
    type Update;

    /// Human-readable kind ("standard room type")
    const KIND: &'static str;
    /// Durable storage key of the collection
    const STORAGE_KEY: &'static str;
    /// Id prefix (`SRT` -> `SRT-001`)
    const ID_PREFIX: &'static str;
    const NOT_FOUND: ErrorCode;
    const NAME_EXISTS: ErrorCode;
    const IN_USE: ErrorCode;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn created_at(&self) -> i64;
    fn updated_at(&self) -> i64;
    fn set_updated_at(&mut self, ts: i64);

    fn from_create(id: String, data: Self::Create, now: i64) -> Self;

    /// Merge a partial update; timestamps are handled by the store
    fn apply_update(&mut self, data: Self::Update);

    /// Field-level constraints of a single record
    fn validate(&self) -> AppResult<()>;

    /// Numeric sort fields of this kind
    fn numeric_field(&self, _field: &str) -> Option<Decimal> {
        None
    }

    /// Uniqueness rules beyond the name, checked against every other record
    fn check_conflicts<'a>(&self, _others: impl Iterator<Item = &'a Self>) -> AppResult<()>
    where
        Self: 'a,
    {
        Ok(())
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::Text(self.name().to_string())),
            other => self.numeric_field(other).map(SortKey::Number),
        }
    }

    /// Case-insensitive substring match over name and description
    fn matches_search(&self, needle_lower: &str) -> bool {
        self.name().to_lowercase().contains(needle_lower)
            || self.description().to_lowercase().contains(needle_lower)
    }
}

macro_rules! record_accessors {
    () => {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn created_at(&self) -> i64 {
            self.created_at
        }

        fn updated_at(&self) -> i64 {
            self.updated_at
        }

        fn set_updated_at(&mut self, ts: i64) {
            self.updated_at = ts;
        }
    };
}

fn validate_name_and_description(name: &str, description: &str) -> AppResult<()> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_text_len(description, "description", MAX_NOTE_LEN)
}

// ── Standard room type ──────────────────────────────────────────────

impl ReferenceRecord for StandardRoomType {
    type Create = StandardRoomTypeCreate;
    type Update = StandardRoomTypeUpdate;

    const KIND: &'static str = "standard room type";
    const STORAGE_KEY: &'static str = "standard_room_types";
    const ID_PREFIX: &'static str = "SRT";
    const NOT_FOUND: ErrorCode = ErrorCode::StandardRoomTypeNotFound;
    const NAME_EXISTS: ErrorCode = ErrorCode::StandardRoomTypeNameExists;
    const IN_USE: ErrorCode = ErrorCode::StandardRoomTypeInUse;

    record_accessors!();

    fn from_create(id: String, data: Self::Create, now: i64) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            description: data.description,
            default_capacity: data.default_capacity,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: Self::Update) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(capacity) = data.default_capacity {
            self.default_capacity = capacity;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_name_and_description(&self.name, &self.description)?;
        validate_positive(self.default_capacity, "default_capacity")
    }

    fn numeric_field(&self, field: &str) -> Option<Decimal> {
        match field {
            "default_capacity" => Some(Decimal::from(self.default_capacity)),
            _ => None,
        }
    }
}

// ── Room type configuration ─────────────────────────────────────────

impl ReferenceRecord for RoomTypeConfig {
    type Create = RoomTypeConfigCreate;
    type Update = RoomTypeConfigUpdate;

    const KIND: &'static str = "room type";
    const STORAGE_KEY: &'static str = "room_types";
    const ID_PREFIX: &'static str = "RT";
    const NOT_FOUND: ErrorCode = ErrorCode::RoomTypeNotFound;
    const NAME_EXISTS: ErrorCode = ErrorCode::RoomTypeNameExists;
    const IN_USE: ErrorCode = ErrorCode::RoomTypeInUse;

    record_accessors!();

    fn from_create(id: String, data: Self::Create, now: i64) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            description: data.description,
            standard_room_type_id: data.standard_room_type_id,
            base_price: data.base_price,
            allowed_capacity: data.allowed_capacity,
            amenities: data.amenities,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: Self::Update) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(binding) = data.standard_room_type_id {
            self.standard_room_type_id = binding;
        }
        if let Some(price) = data.base_price {
            self.base_price = price;
        }
        if let Some(capacity) = data.allowed_capacity {
            self.allowed_capacity = capacity;
        }
        if let Some(amenities) = data.amenities {
            self.amenities = amenities;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_name_and_description(&self.name, &self.description)?;
        validate_non_negative(self.base_price, "base_price")?;
        validate_positive(self.allowed_capacity, "allowed_capacity")?;
        validate_name_list(&self.amenities, "amenities")
    }

    fn numeric_field(&self, field: &str) -> Option<Decimal> {
        match field {
            "base_price" => Some(self.base_price),
            "allowed_capacity" => Some(Decimal::from(self.allowed_capacity)),
            _ => None,
        }
    }
}

// ── Stay type ───────────────────────────────────────────────────────

impl ReferenceRecord for StayType {
    type Create = StayTypeCreate;
    type Update = StayTypeUpdate;

    const KIND: &'static str = "stay type";
    const STORAGE_KEY: &'static str = "stay_types";
    const ID_PREFIX: &'static str = "ST";
    const NOT_FOUND: ErrorCode = ErrorCode::StayTypeNotFound;
    const NAME_EXISTS: ErrorCode = ErrorCode::StayTypeNameExists;
    const IN_USE: ErrorCode = ErrorCode::StayTypeInUse;

    record_accessors!();

    fn from_create(id: String, data: Self::Create, now: i64) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            description: data.description,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: Self::Update) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(active) = data.is_active {
            self.is_active = active;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_name_and_description(&self.name, &self.description)
    }
}

// ── Amenity ─────────────────────────────────────────────────────────

impl ReferenceRecord for Amenity {
    type Create = AmenityCreate;
    type Update = AmenityUpdate;

    const KIND: &'static str = "amenity";
    const STORAGE_KEY: &'static str = "amenities";
    const ID_PREFIX: &'static str = "AM";
    const NOT_FOUND: ErrorCode = ErrorCode::AmenityNotFound;
    const NAME_EXISTS: ErrorCode = ErrorCode::AmenityNameExists;
    const IN_USE: ErrorCode = ErrorCode::AmenityInUse;

    record_accessors!();

    fn from_create(id: String, data: Self::Create, now: i64) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            description: data.description,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: Self::Update) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(active) = data.is_active {
            self.is_active = active;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_name_and_description(&self.name, &self.description)
    }
}

// ── Area ────────────────────────────────────────────────────────────

impl ReferenceRecord for Area {
    type Create = AreaCreate;
    type Update = AreaUpdate;

    const KIND: &'static str = "area";
    const STORAGE_KEY: &'static str = "areas";
    const ID_PREFIX: &'static str = "AR";
    const NOT_FOUND: ErrorCode = ErrorCode::AreaNotFound;
    const NAME_EXISTS: ErrorCode = ErrorCode::AreaNameExists;
    const IN_USE: ErrorCode = ErrorCode::AreaInUse;

    record_accessors!();

    fn from_create(id: String, data: Self::Create, now: i64) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            description: data.description,
            floor: data.floor,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: Self::Update) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(floor) = data.floor {
            self.floor = floor;
        }
        if let Some(active) = data.is_active {
            self.is_active = active;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_name_and_description(&self.name, &self.description)
    }

    fn numeric_field(&self, field: &str) -> Option<Decimal> {
        match field {
            "floor" => self.floor.map(Decimal::from),
            _ => None,
        }
    }
}

// ── View type ───────────────────────────────────────────────────────

impl ReferenceRecord for RoomViewType {
    type Create = RoomViewTypeCreate;
    type Update = RoomViewTypeUpdate;

    const KIND: &'static str = "view type";
    const STORAGE_KEY: &'static str = "view_types";
    const ID_PREFIX: &'static str = "VT";
    const NOT_FOUND: ErrorCode = ErrorCode::ViewTypeNotFound;
    const NAME_EXISTS: ErrorCode = ErrorCode::ViewTypeNameExists;
    const IN_USE: ErrorCode = ErrorCode::ViewTypeInUse;

    record_accessors!();

    fn from_create(id: String, data: Self::Create, now: i64) -> Self {
        Self {
            id,
            name: data.name.trim().to_string(),
            description: data.description,
            surcharge: data.surcharge,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: Self::Update) {
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(surcharge) = data.surcharge {
            self.surcharge = surcharge;
        }
        if let Some(active) = data.is_active {
            self.is_active = active;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_name_and_description(&self.name, &self.description)?;
        match self.surcharge.surcharge_type {
            SurchargeType::FixedAmount => validate_non_negative(self.surcharge.value, "surcharge"),
            SurchargeType::Percentage => validate_percentage(self.surcharge.value, "surcharge"),
        }
    }

    fn numeric_field(&self, field: &str) -> Option<Decimal> {
        match field {
            "surcharge" => Some(self.surcharge.value),
            _ => None,
        }
    }
}

// ── Meal plan ───────────────────────────────────────────────────────

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

impl ReferenceRecord for MealPlan {
    type Create = MealPlanCreate;
    type Update = MealPlanUpdate;

    const KIND: &'static str = "meal plan";
    const STORAGE_KEY: &'static str = "meal_plans";
    const ID_PREFIX: &'static str = "MP";
    const NOT_FOUND: ErrorCode = ErrorCode::MealPlanNotFound;
    const NAME_EXISTS: ErrorCode = ErrorCode::MealPlanNameExists;
    const IN_USE: ErrorCode = ErrorCode::MealPlanInUse;

    record_accessors!();

    fn from_create(id: String, data: Self::Create, now: i64) -> Self {
        Self {
            id,
            code: normalize_code(&data.code),
            name: data.name.trim().to_string(),
            description: data.description,
            price_per_person: data.price_per_person,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: Self::Update) {
        if let Some(code) = data.code {
            self.code = normalize_code(&code);
        }
        if let Some(name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(price) = data.price_per_person {
            self.price_per_person = price;
        }
        if let Some(active) = data.is_active {
            self.is_active = active;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_name_and_description(&self.name, &self.description)?;
        validate_required_text(&self.code, "code", MAX_SHORT_TEXT_LEN)?;
        validate_non_negative(self.price_per_person, "price_per_person")
    }

    fn numeric_field(&self, field: &str) -> Option<Decimal> {
        match field {
            "price_per_person" => Some(self.price_per_person),
            _ => None,
        }
    }

    fn check_conflicts<'a>(&self, mut others: impl Iterator<Item = &'a Self>) -> AppResult<()>
    where
        Self: 'a,
    {
        if others.any(|other| other.code == self.code) {
            return Err(AppError::with_message(
                ErrorCode::MealPlanNameExists,
                format!("Meal plan code '{}' already exists", self.code),
            )
            .with_detail("field", "code"));
        }
        Ok(())
    }

    fn matches_search(&self, needle_lower: &str) -> bool {
        self.code.to_lowercase().contains(needle_lower)
            || self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}
