//! Room page controller
//!
//! Derives the visible room list from [`PageState`] and the catalog, and
//! runs every room flow (form, status actions, delete). Reference-data
//! flows live in [`super::master_data`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Room, RoomStatus};
use shared::query::{PaginatedResponse, SortDirection, total_pages};

use super::state::{Alert, Modal, PageState, RoomForm, Section};
use super::summary::RoomSummary;
use crate::core::AdminStores;
use crate::db::repository::{RoomFilter, RoomSortField};

/// One-way status actions offered on a room card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAction {
    StartCleaning,
    FinishCleaning,
    StartMaintenance,
}

impl StatusAction {
    pub const ALL: [StatusAction; 3] = [
        StatusAction::StartCleaning,
        StatusAction::FinishCleaning,
        StatusAction::StartMaintenance,
    ];

    pub fn from_status(self) -> RoomStatus {
        match self {
            StatusAction::StartCleaning => RoomStatus::Dirty,
            StatusAction::FinishCleaning => RoomStatus::CleaningInProgress,
            StatusAction::StartMaintenance => RoomStatus::Available,
        }
    }

    pub fn to_status(self) -> RoomStatus {
        match self {
            StatusAction::StartCleaning => RoomStatus::CleaningInProgress,
            StatusAction::FinishCleaning => RoomStatus::Available,
            StatusAction::StartMaintenance => RoomStatus::UnderMaintenance,
        }
    }

    /// Actions offered for a room in `status`
    pub fn available_for(status: RoomStatus) -> Vec<StatusAction> {
        Self::ALL
            .into_iter()
            .filter(|a| a.from_status() == status)
            .collect()
    }

    pub fn for_transition(from: RoomStatus, to: RoomStatus) -> Option<StatusAction> {
        Self::ALL
            .into_iter()
            .find(|a| a.from_status() == from && a.to_status() == to)
    }
}

/// Page-level controller over the admin stores
pub struct RoomPageController<'a> {
    pub(super) stores: &'a mut AdminStores,
    pub(super) state: PageState,
}

impl<'a> RoomPageController<'a> {
    pub fn new(stores: &'a mut AdminStores, page_size: u32) -> Self {
        Self {
            stores,
            state: PageState::new(page_size),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn stores(&self) -> &AdminStores {
        self.stores
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.state.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.state.alert = None;
    }

    pub fn set_section(&mut self, section: Section) {
        self.state.section = section;
    }

    // ── Filter / sort / paging ──────────────────────────────────────

    /// Replace the whole filter; resets to page 1
    pub fn set_filter(&mut self, filter: RoomFilter) {
        self.state.filter = filter;
        self.state.page = 1;
    }

    /// Edit the filter in place; resets to page 1
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut RoomFilter)) {
        edit(&mut self.state.filter);
        self.state.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.update_filter(|f| f.search = Some(search).filter(|s| !s.trim().is_empty()));
    }

    pub fn set_status_filter(&mut self, status: Option<RoomStatus>) {
        self.update_filter(|f| f.status = status);
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(RoomFilter::default());
    }

    /// Sort by `field`; choosing the current field again flips the direction
    pub fn sort_by(&mut self, field: RoomSortField) {
        self.update_filter(|f| {
            if f.sort == Some(field) {
                f.direction = f.direction.toggled();
            } else {
                f.sort = Some(field);
                f.direction = SortDirection::Asc;
            }
        });
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.state.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.state.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.page.saturating_sub(1));
    }

    // ── Derived views ───────────────────────────────────────────────

    pub fn filtered_rooms(&self) -> Vec<Room> {
        self.stores.rooms.list(&self.state.filter)
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.filtered_rooms().len() as u64, self.state.page_size)
    }

    /// The visible page, clamped into range
    pub fn current_page(&self) -> PaginatedResponse<Room> {
        PaginatedResponse::from_items(self.filtered_rooms(), self.state.page, self.state.page_size)
    }

    /// Card models for the visible page
    pub fn current_page_summaries(&self) -> Vec<RoomSummary> {
        self.current_page()
            .data
            .iter()
            .map(|room| self.summarize(room))
            .collect()
    }

    pub fn summarize(&self, room: &Room) -> RoomSummary {
        let view_type = room
            .view_type_id
            .as_deref()
            .and_then(|id| self.stores.view_types.get_by_id(id));
        let meal_plan = room.meal_plan_code.as_deref().and_then(|code| {
            self.stores.meal_plans.all().iter().find(|mp| mp.code == code)
        });
        RoomSummary::build(room, view_type, meal_plan)
    }

    /// Active rooms per status, every status present
    pub fn status_counts(&self) -> BTreeMap<RoomStatus, usize> {
        let mut counts: BTreeMap<RoomStatus, usize> =
            RoomStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for room in self.stores.rooms.active() {
            *counts.entry(room.status).or_default() += 1;
        }
        counts
    }

    // ── Selection / modal ───────────────────────────────────────────

    pub fn select_room(&mut self, id: &str) -> AppResult<()> {
        self.active_room(id)?;
        self.state.selected_room = Some(id.to_string());
        Ok(())
    }

    pub fn selected_room(&self) -> Option<&Room> {
        self.state
            .selected_room
            .as_deref()
            .and_then(|id| self.stores.rooms.get_by_id(id))
    }

    pub fn open_room_details(&mut self, id: &str) -> AppResult<()> {
        self.select_room(id)?;
        self.state.modal = Modal::RoomDetails(id.to_string());
        Ok(())
    }

    /// Close any modal and drop unsaved form values
    pub fn close_modal(&mut self) {
        self.state.modal = Modal::Closed;
        self.state.room_form = None;
        self.state.master_form = None;
    }

    // ── Room form ───────────────────────────────────────────────────

    pub fn open_create_room(&mut self) {
        self.state.room_form = Some(RoomForm::default());
        self.state.modal = Modal::CreateRoom;
        self.state.alert = None;
    }

    /// Open the edit form pre-filled from the room
    pub fn open_edit_room(&mut self, id: &str) -> AppResult<()> {
        let form = RoomForm::from_room(self.active_room(id)?);
        self.state.room_form = Some(form);
        self.state.modal = Modal::EditRoom(id.to_string());
        self.state.selected_room = Some(id.to_string());
        self.state.alert = None;
        Ok(())
    }

    pub fn room_form(&self) -> Option<&RoomForm> {
        self.state.room_form.as_ref()
    }

    pub fn room_form_mut(&mut self) -> Option<&mut RoomForm> {
        self.state.room_form.as_mut()
    }

    /// Choose the form's room type, filling capacity and price from its configuration
    pub fn choose_room_type(&mut self, name: &str) {
        let config = self.stores.room_types.find_by_name(name).cloned();
        let standard = self.stores.standard_room_types.find_by_name(name).cloned();
        let Some(form) = self.state.room_form.as_mut() else {
            return;
        };

        form.room_type = name.to_string();
        if let Some(config) = config {
            form.capacity = config.allowed_capacity;
            form.price = config.base_price;
        } else if let Some(standard) = standard {
            form.capacity = standard.default_capacity;
        }
    }

    /// Validate and commit the open room form
    ///
    /// On failure the alert is set, the modal stays open and nothing is written.
    pub fn submit_room_form(&mut self) -> AppResult<Room> {
        let result = self.commit_room_form();
        match &result {
            Ok(room) => {
                self.state.modal = Modal::Closed;
                self.state.room_form = None;
                self.state.selected_room = Some(room.id.clone());
                self.state.alert = Some(Alert::info(format!("Room {} saved", room.number)));
            }
            Err(e) => {
                tracing::warn!(code = %e.code, error = %e, "Room form rejected");
                self.state.alert = Some(Alert::from(e));
            }
        }
        result
    }

    fn commit_room_form(&mut self) -> AppResult<Room> {
        let editing = match &self.state.modal {
            Modal::CreateRoom => None,
            Modal::EditRoom(id) => Some(id.clone()),
            _ => return Err(AppError::with_message(ErrorCode::InvalidRequest, "No room form is open")),
        };
        let form = self
            .state
            .room_form
            .clone()
            .ok_or_else(|| AppError::with_message(ErrorCode::InvalidRequest, "No room form is open"))?;

        let number = form.number.trim();
        if number.is_empty() {
            return Err(AppError::new(ErrorCode::RoomNumberRequired).with_detail("field", "number"));
        }
        if self
            .stores
            .rooms
            .find_by_number(number)
            .is_some_and(|r| Some(&r.id) != editing.as_ref())
        {
            return Err(crate::db::repository::room::number_taken(number));
        }
        if form.amenities.is_empty() {
            return Err(
                AppError::new(ErrorCode::RoomAmenitiesRequired).with_detail("field", "amenities")
            );
        }

        let view_type_name = match form.view_type_id.as_deref() {
            Some(id) => Some(self.stores.view_types.require(id)?.name.clone()),
            None => None,
        };
        if let Some(code) = form.meal_plan_code.as_deref()
            && !self.stores.meal_plans.all().iter().any(|mp| mp.code == code)
        {
            return Err(AppError::with_message(
                ErrorCode::MealPlanNotFound,
                format!("Meal plan {code} not found"),
            )
            .with_detail("field", "meal_plan_code"));
        }

        match editing {
            None => self.stores.rooms.create(form.to_create(view_type_name)),
            Some(id) => self
                .stores
                .rooms
                .update(&id, form.to_update(view_type_name))?
                .ok_or_else(|| room_not_found(&id)),
        }
    }

    // ── Status actions ──────────────────────────────────────────────

    /// Move a room to `target` if a status action allows it
    pub fn change_room_status(&mut self, id: &str, target: RoomStatus) -> AppResult<Room> {
        let result = self.apply_status_change(id, target);
        if let Err(e) = &result {
            self.state.alert = Some(Alert::from(e));
        }
        result
    }

    pub fn apply_status_action(&mut self, id: &str, action: StatusAction) -> AppResult<Room> {
        let current = self.active_room(id)?.status;
        if current != action.from_status() {
            let err = invalid_transition(current, action.to_status());
            self.state.alert = Some(Alert::from(&err));
            return Err(err);
        }
        self.change_room_status(id, action.to_status())
    }

    fn apply_status_change(&mut self, id: &str, target: RoomStatus) -> AppResult<Room> {
        let current = self.active_room(id)?.status;
        if StatusAction::for_transition(current, target).is_none() {
            tracing::warn!(id, from = ?current, to = ?target, "Status transition rejected");
            return Err(invalid_transition(current, target));
        }
        self.stores
            .rooms
            .set_status(id, target)?
            .ok_or_else(|| room_not_found(id))
    }

    // ── Delete ──────────────────────────────────────────────────────

    pub fn request_delete_room(&mut self, id: &str) -> AppResult<()> {
        self.active_room(id)?;
        self.state.modal = Modal::ConfirmDelete(id.to_string());
        Ok(())
    }

    /// Soft-delete the room awaiting confirmation
    pub fn confirm_delete_room(&mut self, reason: &str) -> AppResult<Room> {
        let Modal::ConfirmDelete(id) = self.state.modal.clone() else {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                "No room deletion is awaiting confirmation",
            ));
        };

        match self.stores.rooms.remove(&id, reason) {
            Ok(Some(room)) => {
                self.state.modal = Modal::Closed;
                if self.state.selected_room.as_deref() == Some(id.as_str()) {
                    self.state.selected_room = None;
                }
                self.state.page = self.state.page.min(self.total_pages());
                self.state.alert = Some(Alert::info(format!("Room {} removed", room.number)));
                Ok(room)
            }
            Ok(None) => {
                self.state.modal = Modal::Closed;
                let err = room_not_found(&id);
                self.state.alert = Some(Alert::from(&err));
                Err(err)
            }
            Err(e) => {
                self.state.alert = Some(Alert::from(&e));
                Err(e)
            }
        }
    }

    fn active_room(&self, id: &str) -> AppResult<&Room> {
        let room = self
            .stores
            .rooms
            .get_by_id(id)
            .ok_or_else(|| room_not_found(id))?;
        if room.is_deleted() {
            return Err(AppError::with_message(
                ErrorCode::RoomAlreadyDeleted,
                format!("Room {} has been removed", room.number),
            ));
        }
        Ok(room)
    }
}

fn room_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::RoomNotFound, format!("Room {id} not found"))
        .with_detail("id", id)
}

fn invalid_transition(from: RoomStatus, to: RoomStatus) -> AppError {
    AppError::with_message(
        ErrorCode::InvalidStatusTransition,
        format!("Cannot change status from {from} to {to}"),
    )
    .with_detail("from", from.label())
    .with_detail("to", to.label())
}
