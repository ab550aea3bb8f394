//! Transient page state
//!
//! Nothing here is persisted; it lives as long as the page does.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    MealPlanCreate, Room, RoomCreate, RoomStatus, RoomTypeConfigCreate, RoomUpdate,
    RoomViewTypeCreate, StandardRoomTypeCreate,
};

use crate::db::repository::RoomFilter;

/// Page section (tab)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Rooms,
    StandardRoomTypes,
    RoomTypes,
    StayTypes,
    Amenities,
    Areas,
    ViewTypes,
    MealPlans,
}

/// Open modal, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    CreateRoom,
    EditRoom(String),
    RoomDetails(String),
    ConfirmDelete(String),
    MasterData,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Error,
}

/// User-facing message from the last action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Info,
            message: message.into(),
            code: None,
        }
    }

    pub fn error(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            level: AlertLevel::Error,
            message: message.into(),
            code: Some(code),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == AlertLevel::Error
    }
}

impl From<&AppError> for Alert {
    fn from(err: &AppError) -> Self {
        Alert::error(err.message.clone(), err.code)
    }
}

/// In-progress room create/edit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomForm {
    pub number: String,
    pub room_type: String,
    pub stay_type: String,
    pub capacity: u32,
    pub price: Decimal,
    pub area: String,
    pub amenities: Vec<String>,
    /// Initial status on create; ignored on edit
    pub status: RoomStatus,
    pub view_type_id: Option<String>,
    pub meal_plan_code: Option<String>,
    pub image_url: Option<String>,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            number: String::new(),
            room_type: String::new(),
            stay_type: String::new(),
            capacity: 1,
            price: Decimal::ZERO,
            area: String::new(),
            amenities: Vec::new(),
            status: RoomStatus::Available,
            view_type_id: None,
            meal_plan_code: None,
            image_url: None,
        }
    }
}

impl RoomForm {
    pub fn from_room(room: &Room) -> Self {
        Self {
            number: room.number.clone(),
            room_type: room.room_type.clone(),
            stay_type: room.stay_type.clone(),
            capacity: room.capacity,
            price: room.price,
            area: room.area.clone(),
            amenities: room.amenities.clone(),
            status: room.status,
            view_type_id: room.view_type_id.clone(),
            meal_plan_code: room.meal_plan_code.clone(),
            image_url: room.image_url.clone(),
        }
    }

    /// Add the amenity if missing, remove it otherwise
    pub fn toggle_amenity(&mut self, name: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == name) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(name.to_string());
        }
    }

    pub(crate) fn to_create(&self, view_type_name: Option<String>) -> RoomCreate {
        RoomCreate {
            number: self.number.trim().to_string(),
            room_type: self.room_type.clone(),
            stay_type: self.stay_type.clone(),
            capacity: self.capacity,
            price: self.price,
            area: self.area.clone(),
            amenities: self.amenities.clone(),
            status: Some(self.status),
            view_type_id: self.view_type_id.clone(),
            view_type_name,
            meal_plan_code: self.meal_plan_code.clone(),
            image_url: self.image_url.clone().filter(|u| !u.trim().is_empty()),
        }
    }

    pub(crate) fn to_update(&self, view_type_name: Option<String>) -> RoomUpdate {
        RoomUpdate {
            number: Some(self.number.trim().to_string()),
            room_type: Some(self.room_type.clone()),
            stay_type: Some(self.stay_type.clone()),
            capacity: Some(self.capacity),
            price: Some(self.price),
            area: Some(self.area.clone()),
            amenities: Some(self.amenities.clone()),
            // status moves only through status actions
            status: None,
            view_type_id: Some(self.view_type_id.clone()),
            view_type_name: Some(view_type_name),
            meal_plan_code: Some(self.meal_plan_code.clone()),
            image_url: Some(self.image_url.clone().filter(|u| !u.trim().is_empty())),
        }
    }
}

/// Master-data form: `editing` holds the id of the record being edited
#[derive(Debug, Clone, PartialEq)]
pub enum MasterDataForm {
    StandardRoomType {
        editing: Option<String>,
        data: StandardRoomTypeCreate,
    },
    RoomType {
        editing: Option<String>,
        data: RoomTypeConfigCreate,
    },
    ViewType {
        editing: Option<String>,
        data: RoomViewTypeCreate,
    },
    MealPlan {
        editing: Option<String>,
        data: MealPlanCreate,
    },
}

impl MasterDataForm {
    pub fn section(&self) -> Section {
        match self {
            MasterDataForm::StandardRoomType { .. } => Section::StandardRoomTypes,
            MasterDataForm::RoomType { .. } => Section::RoomTypes,
            MasterDataForm::ViewType { .. } => Section::ViewTypes,
            MasterDataForm::MealPlan { .. } => Section::MealPlans,
        }
    }
}

/// Page state
#[derive(Debug, Clone)]
pub struct PageState {
    pub section: Section,
    pub filter: RoomFilter,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
    pub selected_room: Option<String>,
    pub modal: Modal,
    pub room_form: Option<RoomForm>,
    pub master_form: Option<MasterDataForm>,
    pub alert: Option<Alert>,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            section: Section::Rooms,
            filter: RoomFilter::default(),
            page: 1,
            page_size: page_size.max(1),
            selected_room: None,
            modal: Modal::Closed,
            room_form: None,
            master_form: None,
            alert: None,
        }
    }
}
