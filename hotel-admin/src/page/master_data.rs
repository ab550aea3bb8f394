//! Reference-data flows of the room page
//!
//! Every mutation validates first, then writes the reference record, then
//! cascades the change into rooms (and room types where they copy it).
//! Deletes consult [`crate::services::usage`] and come back as
//! [`RemoveOutcome`]; an in-use refusal is also shown as an alert.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Amenity, AmenityCreate, AmenityUpdate, Area, AreaCreate, AreaUpdate, MealPlan,
    MealPlanCreate, MealPlanUpdate, RoomTypeConfig, RoomTypeConfigCreate, RoomTypeConfigUpdate,
    RoomViewType, RoomViewTypeCreate, RoomViewTypeUpdate, StandardRoomType,
    StandardRoomTypeCreate, StandardRoomTypeUpdate, StayType, StayTypeCreate, StayTypeUpdate,
};

use super::controller::RoomPageController;
use super::state::{Alert, MasterDataForm, Modal};
use crate::db::repository::{RemoveOutcome, UsageReport};
use crate::services::usage;

impl RoomPageController<'_> {
    // ── Master-data form ────────────────────────────────────────────

    pub fn open_master_form(&mut self, form: MasterDataForm) {
        self.state.section = form.section();
        self.state.master_form = Some(form);
        self.state.modal = Modal::MasterData;
        self.state.alert = None;
    }

    pub fn master_form_mut(&mut self) -> Option<&mut MasterDataForm> {
        self.state.master_form.as_mut()
    }

    /// Create or update the record in the open master-data form
    ///
    /// Edits submit every form field, so an unchanged field is rewritten
    /// with its current value.
    pub fn submit_master_form(&mut self) -> AppResult<()> {
        let Some(form) = self.state.master_form.clone() else {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                "No master-data form is open",
            ));
        };

        let result = match form {
            MasterDataForm::StandardRoomType { editing: None, data } => {
                self.create_standard_room_type(data).map(|_| ())
            }
            MasterDataForm::StandardRoomType { editing: Some(id), data } => self
                .update_standard_room_type(
                    &id,
                    StandardRoomTypeUpdate {
                        name: Some(data.name),
                        description: Some(data.description),
                        default_capacity: Some(data.default_capacity),
                    },
                )
                .and_then(|r| r.map(|_| ()).ok_or_else(|| not_found("standard room type", &id))),
            MasterDataForm::RoomType { editing: None, data } => {
                self.create_room_type(data).map(|_| ())
            }
            MasterDataForm::RoomType { editing: Some(id), data } => {
                let bound = data.standard_room_type_id.is_some();
                self.update_room_type(
                    &id,
                    RoomTypeConfigUpdate {
                        name: Some(data.name),
                        description: Some(data.description),
                        standard_room_type_id: Some(data.standard_room_type_id),
                        base_price: Some(data.base_price),
                        // bound capacity is read-only in the form
                        allowed_capacity: (!bound).then_some(data.allowed_capacity),
                        amenities: Some(data.amenities),
                    },
                )
                .and_then(|r| r.map(|_| ()).ok_or_else(|| not_found("room type", &id)))
            }
            MasterDataForm::ViewType { editing: None, data } => {
                self.create_view_type(data).map(|_| ())
            }
            MasterDataForm::ViewType { editing: Some(id), data } => self
                .update_view_type(
                    &id,
                    RoomViewTypeUpdate {
                        name: Some(data.name),
                        description: Some(data.description),
                        surcharge: Some(data.surcharge),
                        is_active: None,
                    },
                )
                .and_then(|r| r.map(|_| ()).ok_or_else(|| not_found("view type", &id))),
            MasterDataForm::MealPlan { editing: None, data } => {
                self.create_meal_plan(data).map(|_| ())
            }
            MasterDataForm::MealPlan { editing: Some(id), data } => self
                .update_meal_plan(
                    &id,
                    MealPlanUpdate {
                        code: Some(data.code),
                        name: Some(data.name),
                        description: Some(data.description),
                        price_per_person: Some(data.price_per_person),
                        is_active: None,
                    },
                )
                .and_then(|r| r.map(|_| ()).ok_or_else(|| not_found("meal plan", &id))),
        };

        match &result {
            Ok(()) => {
                self.state.master_form = None;
                self.state.modal = Modal::Closed;
            }
            Err(e) => self.state.alert = Some(Alert::from(e)),
        }
        result
    }

    // ── Standard room types ─────────────────────────────────────────

    pub fn create_standard_room_type(
        &mut self,
        data: StandardRoomTypeCreate,
    ) -> AppResult<StandardRoomType> {
        let result = self.stores.standard_room_types.create(data);
        self.alert_on_error(result)
    }

    /// Capacity changes flow into bound room types and their rooms;
    /// a rename flows into rooms typed with the old name
    pub fn update_standard_room_type(
        &mut self,
        id: &str,
        data: StandardRoomTypeUpdate,
    ) -> AppResult<Option<StandardRoomType>> {
        let result = self.apply_standard_room_type_update(id, data);
        self.alert_on_error(result)
    }

    fn apply_standard_room_type_update(
        &mut self,
        id: &str,
        data: StandardRoomTypeUpdate,
    ) -> AppResult<Option<StandardRoomType>> {
        let Some(previous) = self.stores.standard_room_types.get_by_id(id).cloned() else {
            return Ok(None);
        };
        let Some(updated) = self.stores.standard_room_types.update(id, data)? else {
            return Ok(None);
        };

        // rooms typed with a name a room type configuration owns follow that configuration
        if updated.name != previous.name && !self.room_type_owns(&previous.name) {
            self.rename_room_type_on_rooms(&previous.name, &updated.name)?;
        }
        if updated.default_capacity != previous.default_capacity {
            let capacity = updated.default_capacity;
            let bound: Vec<RoomTypeConfig> = self
                .stores
                .room_types
                .all()
                .iter()
                .filter(|rt| rt.standard_room_type_id.as_deref() == Some(id))
                .cloned()
                .collect();
            for room_type in &bound {
                self.stores.room_types.update(
                    &room_type.id,
                    RoomTypeConfigUpdate {
                        allowed_capacity: Some(capacity),
                        ..Default::default()
                    },
                )?;
            }

            let own_name = (!self.room_type_owns(&updated.name)).then(|| updated.name.clone());
            let names: Vec<String> = bound.into_iter().map(|rt| rt.name).chain(own_name).collect();
            let touched = self
                .stores
                .rooms
                .update_matching(|r| names.contains(&r.room_type), |r| r.capacity = capacity)?;
            tracing::info!(id, capacity, rooms = touched, "Standard room type capacity cascaded");
        }
        Ok(Some(updated))
    }

    pub fn delete_standard_room_type(
        &mut self,
        id: &str,
    ) -> AppResult<RemoveOutcome<StandardRoomType>> {
        let report = match self.stores.standard_room_types.get_by_id(id) {
            Some(record) => usage::standard_room_type(self.stores, record),
            None => UsageReport::unused(),
        };
        let result = self.stores.standard_room_types.remove(id, &report);
        self.present_outcome(result)
    }

    // ── Room types ──────────────────────────────────────────────────

    /// Capacity of a type bound to a standard room type is taken from it
    pub fn create_room_type(&mut self, data: RoomTypeConfigCreate) -> AppResult<RoomTypeConfig> {
        let result = self.apply_room_type_create(data);
        self.alert_on_error(result)
    }

    fn apply_room_type_create(
        &mut self,
        mut data: RoomTypeConfigCreate,
    ) -> AppResult<RoomTypeConfig> {
        if let Some(srt_id) = data.standard_room_type_id.as_deref() {
            data.allowed_capacity = self.stores.standard_room_types.require(srt_id)?.default_capacity;
        }
        self.stores.room_types.create(data)
    }

    /// Derives capacity from the binding, rejects explicit capacity edits
    /// while bound, then cascades rename and capacity into rooms
    pub fn update_room_type(
        &mut self,
        id: &str,
        data: RoomTypeConfigUpdate,
    ) -> AppResult<Option<RoomTypeConfig>> {
        let result = self.apply_room_type_update(id, data);
        self.alert_on_error(result)
    }

    fn apply_room_type_update(
        &mut self,
        id: &str,
        mut data: RoomTypeConfigUpdate,
    ) -> AppResult<Option<RoomTypeConfig>> {
        let Some(previous) = self.stores.room_types.get_by_id(id).cloned() else {
            return Ok(None);
        };

        let binding = data
            .standard_room_type_id
            .clone()
            .unwrap_or_else(|| previous.standard_room_type_id.clone());
        if let Some(srt_id) = binding.as_deref() {
            let derived = self.stores.standard_room_types.require(srt_id)?.default_capacity;
            if let Some(requested) = data.allowed_capacity
                && requested != derived
            {
                tracing::warn!(id, requested, derived, "Capacity edit rejected, room type is bound");
                return Err(AppError::with_message(
                    ErrorCode::RoomTypeCapacityLocked,
                    format!(
                        "Capacity of room type '{}' comes from its standard room type ({derived})",
                        previous.name
                    ),
                )
                .with_detail("field", "allowed_capacity"));
            }
            data.allowed_capacity = Some(derived);
        }

        let Some(updated) = self.stores.room_types.update(id, data)? else {
            return Ok(None);
        };

        if updated.name != previous.name {
            self.rename_room_type_on_rooms(&previous.name, &updated.name)?;
        }
        if updated.allowed_capacity != previous.allowed_capacity {
            let capacity = updated.allowed_capacity;
            let name = updated.name.clone();
            let touched = self
                .stores
                .rooms
                .update_matching(|r| r.room_type == name, |r| r.capacity = capacity)?;
            tracing::info!(id, capacity, rooms = touched, "Room type capacity cascaded");
        }
        Ok(Some(updated))
    }

    pub fn delete_room_type(&mut self, id: &str) -> AppResult<RemoveOutcome<RoomTypeConfig>> {
        let report = match self.stores.room_types.get_by_id(id) {
            Some(record) => usage::room_type(self.stores, record),
            None => UsageReport::unused(),
        };
        let result = self.stores.room_types.remove(id, &report);
        self.present_outcome(result)
    }

    fn room_type_owns(&self, name: &str) -> bool {
        self.stores.room_types.find_by_name(name).is_some()
    }

    fn rename_room_type_on_rooms(&mut self, from: &str, to: &str) -> AppResult<usize> {
        let to = to.to_string();
        let touched = self
            .stores
            .rooms
            .update_matching(|r| r.room_type == from, |r| r.room_type = to.clone())?;
        tracing::info!(from, to = %to, rooms = touched, "Room type rename cascaded");
        Ok(touched)
    }

    // ── View types ──────────────────────────────────────────────────

    pub fn create_view_type(&mut self, data: RoomViewTypeCreate) -> AppResult<RoomViewType> {
        let result = self.stores.view_types.create(data);
        self.alert_on_error(result)
    }

    /// A rename is copied onto every room pointing at the view type
    pub fn update_view_type(
        &mut self,
        id: &str,
        data: RoomViewTypeUpdate,
    ) -> AppResult<Option<RoomViewType>> {
        let result = self.apply_view_type_update(id, data);
        self.alert_on_error(result)
    }

    fn apply_view_type_update(
        &mut self,
        id: &str,
        data: RoomViewTypeUpdate,
    ) -> AppResult<Option<RoomViewType>> {
        let Some(updated) = self.stores.view_types.update(id, data)? else {
            return Ok(None);
        };
        let name = updated.name.clone();
        let touched = self.stores.rooms.update_matching(
            |r| r.view_type_id.as_deref() == Some(id) && r.view_type_name.as_ref() != Some(&name),
            |r| r.view_type_name = Some(name.clone()),
        )?;
        if touched > 0 {
            tracing::info!(id, rooms = touched, "View type rename cascaded");
        }
        Ok(Some(updated))
    }

    /// Deleting a view type clears it on every room that used it
    pub fn delete_view_type(&mut self, id: &str) -> AppResult<RemoveOutcome<RoomViewType>> {
        let affected = self
            .stores
            .view_types
            .get_by_id(id)
            .map(|record| usage::view_type(self.stores, record));
        let result = self.apply_view_type_delete(id, affected.as_ref());
        let result = self.present_outcome(result);
        self.report_cleared(&result, affected.as_ref());
        result
    }

    fn apply_view_type_delete(
        &mut self,
        id: &str,
        affected: Option<&UsageReport>,
    ) -> AppResult<RemoveOutcome<RoomViewType>> {
        let outcome = self.stores.view_types.remove(id, &UsageReport::unused())?;
        if outcome.is_removed() {
            let touched = self.stores.rooms.update_matching(
                |r| r.view_type_id.as_deref() == Some(id),
                |r| {
                    r.view_type_id = None;
                    r.view_type_name = None;
                },
            )?;
            let expected = affected.map_or(0, UsageReport::count);
            tracing::info!(id, rooms = touched, expected, "View type cleared from rooms");
        }
        Ok(outcome)
    }

    // ── Meal plans ──────────────────────────────────────────────────

    pub fn create_meal_plan(&mut self, data: MealPlanCreate) -> AppResult<MealPlan> {
        let result = self.stores.meal_plans.create(data);
        self.alert_on_error(result)
    }

    /// A code change is copied onto every room using the old code
    pub fn update_meal_plan(
        &mut self,
        id: &str,
        data: MealPlanUpdate,
    ) -> AppResult<Option<MealPlan>> {
        let result = self.apply_meal_plan_update(id, data);
        self.alert_on_error(result)
    }

    fn apply_meal_plan_update(
        &mut self,
        id: &str,
        data: MealPlanUpdate,
    ) -> AppResult<Option<MealPlan>> {
        let Some(previous) = self.stores.meal_plans.get_by_id(id).cloned() else {
            return Ok(None);
        };
        let Some(updated) = self.stores.meal_plans.update(id, data)? else {
            return Ok(None);
        };
        if updated.code != previous.code {
            let code = updated.code.clone();
            let touched = self.stores.rooms.update_matching(
                |r| r.meal_plan_code.as_deref() == Some(previous.code.as_str()),
                |r| r.meal_plan_code = Some(code.clone()),
            )?;
            tracing::info!(id, from = %previous.code, to = %updated.code, rooms = touched, "Meal plan code cascaded");
        }
        Ok(Some(updated))
    }

    /// Deleting a meal plan clears its code on every room that used it
    pub fn delete_meal_plan(&mut self, id: &str) -> AppResult<RemoveOutcome<MealPlan>> {
        let affected = self
            .stores
            .meal_plans
            .get_by_id(id)
            .map(|record| usage::meal_plan(self.stores, record));
        let result = self.apply_meal_plan_delete(id, affected.as_ref());
        let result = self.present_outcome(result);
        self.report_cleared(&result, affected.as_ref());
        result
    }

    fn apply_meal_plan_delete(
        &mut self,
        id: &str,
        affected: Option<&UsageReport>,
    ) -> AppResult<RemoveOutcome<MealPlan>> {
        let outcome = self.stores.meal_plans.remove(id, &UsageReport::unused())?;
        if let RemoveOutcome::Removed(plan) = &outcome {
            let touched = self.stores.rooms.update_matching(
                |r| r.meal_plan_code.as_deref() == Some(plan.code.as_str()),
                |r| r.meal_plan_code = None,
            )?;
            let expected = affected.map_or(0, UsageReport::count);
            tracing::info!(id, rooms = touched, expected, "Meal plan cleared from rooms");
        }
        Ok(outcome)
    }

    // ── Amenities ───────────────────────────────────────────────────

    pub fn create_amenity(&mut self, data: AmenityCreate) -> AppResult<Amenity> {
        let result = self.stores.amenities.create(data);
        self.alert_on_error(result)
    }

    /// A rename is copied into room and room type amenity lists
    pub fn update_amenity(&mut self, id: &str, data: AmenityUpdate) -> AppResult<Option<Amenity>> {
        let result = self.apply_amenity_update(id, data);
        self.alert_on_error(result)
    }

    fn apply_amenity_update(
        &mut self,
        id: &str,
        data: AmenityUpdate,
    ) -> AppResult<Option<Amenity>> {
        let Some(previous) = self.stores.amenities.get_by_id(id).cloned() else {
            return Ok(None);
        };
        let Some(updated) = self.stores.amenities.update(id, data)? else {
            return Ok(None);
        };
        if updated.name == previous.name {
            return Ok(Some(updated));
        }

        let (from, to) = (previous.name.as_str(), updated.name.as_str());
        let renamed = |list: &[String]| -> Vec<String> {
            list.iter()
                .map(|a| if a == from { to.to_string() } else { a.clone() })
                .collect()
        };

        let room_types: Vec<RoomTypeConfig> = self
            .stores
            .room_types
            .all()
            .iter()
            .filter(|rt| rt.amenities.iter().any(|a| a == from))
            .cloned()
            .collect();
        for room_type in &room_types {
            self.stores.room_types.update(
                &room_type.id,
                RoomTypeConfigUpdate {
                    amenities: Some(renamed(&room_type.amenities)),
                    ..Default::default()
                },
            )?;
        }
        let touched = self.stores.rooms.update_matching(
            |r| r.amenities.iter().any(|a| a == from),
            |r| r.amenities = renamed(&r.amenities),
        )?;
        tracing::info!(from, to, rooms = touched, room_types = room_types.len(), "Amenity rename cascaded");
        Ok(Some(updated))
    }

    pub fn delete_amenity(&mut self, id: &str) -> AppResult<RemoveOutcome<Amenity>> {
        let report = match self.stores.amenities.get_by_id(id) {
            Some(record) => usage::amenity(self.stores, record),
            None => UsageReport::unused(),
        };
        let result = self.stores.amenities.remove(id, &report);
        self.present_outcome(result)
    }

    // ── Areas ───────────────────────────────────────────────────────

    pub fn create_area(&mut self, data: AreaCreate) -> AppResult<Area> {
        let result = self.stores.areas.create(data);
        self.alert_on_error(result)
    }

    pub fn update_area(&mut self, id: &str, data: AreaUpdate) -> AppResult<Option<Area>> {
        let result = self.apply_area_update(id, data);
        self.alert_on_error(result)
    }

    fn apply_area_update(&mut self, id: &str, data: AreaUpdate) -> AppResult<Option<Area>> {
        let Some(previous) = self.stores.areas.get_by_id(id).cloned() else {
            return Ok(None);
        };
        let Some(updated) = self.stores.areas.update(id, data)? else {
            return Ok(None);
        };
        if updated.name != previous.name {
            let name = updated.name.clone();
            let touched = self
                .stores
                .rooms
                .update_matching(|r| r.area == previous.name, |r| r.area = name.clone())?;
            tracing::info!(id, rooms = touched, "Area rename cascaded");
        }
        Ok(Some(updated))
    }

    pub fn delete_area(&mut self, id: &str) -> AppResult<RemoveOutcome<Area>> {
        let report = match self.stores.areas.get_by_id(id) {
            Some(record) => usage::area(self.stores, record),
            None => UsageReport::unused(),
        };
        let result = self.stores.areas.remove(id, &report);
        self.present_outcome(result)
    }

    // ── Stay types ──────────────────────────────────────────────────

    pub fn create_stay_type(&mut self, data: StayTypeCreate) -> AppResult<StayType> {
        let result = self.stores.stay_types.create(data);
        self.alert_on_error(result)
    }

    pub fn update_stay_type(
        &mut self,
        id: &str,
        data: StayTypeUpdate,
    ) -> AppResult<Option<StayType>> {
        let result = self.apply_stay_type_update(id, data);
        self.alert_on_error(result)
    }

    fn apply_stay_type_update(
        &mut self,
        id: &str,
        data: StayTypeUpdate,
    ) -> AppResult<Option<StayType>> {
        let Some(previous) = self.stores.stay_types.get_by_id(id).cloned() else {
            return Ok(None);
        };
        let Some(updated) = self.stores.stay_types.update(id, data)? else {
            return Ok(None);
        };
        if updated.name != previous.name {
            let name = updated.name.clone();
            let touched = self.stores.rooms.update_matching(
                |r| r.stay_type == previous.name,
                |r| r.stay_type = name.clone(),
            )?;
            tracing::info!(id, rooms = touched, "Stay type rename cascaded");
        }
        Ok(Some(updated))
    }

    pub fn delete_stay_type(&mut self, id: &str) -> AppResult<RemoveOutcome<StayType>> {
        let report = match self.stores.stay_types.get_by_id(id) {
            Some(record) => usage::stay_type(self.stores, record),
            None => UsageReport::unused(),
        };
        let result = self.stores.stay_types.remove(id, &report);
        self.present_outcome(result)
    }

    // ── Alerts ──────────────────────────────────────────────────────

    fn alert_on_error<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        if let Err(e) = &result {
            tracing::warn!(code = %e.code, error = %e, "Reference data change rejected");
            self.state.alert = Some(Alert::from(e));
        }
        result
    }

    /// Info alert naming how many rooms a cascading delete cleared
    fn report_cleared<T>(
        &mut self,
        result: &AppResult<RemoveOutcome<T>>,
        affected: Option<&UsageReport>,
    ) {
        if let (Ok(RemoveOutcome::Removed(_)), Some(report)) = (result, affected)
            && report.is_in_use()
        {
            let rooms = match report.count() {
                1 => "1 room".to_string(),
                n => format!("{n} rooms"),
            };
            self.state.alert = Some(Alert::info(format!(
                "{} '{}' removed and cleared from {rooms}",
                report.kind, report.name
            )));
        }
    }

    fn present_outcome<T>(&mut self, result: AppResult<RemoveOutcome<T>>) -> AppResult<RemoveOutcome<T>> {
        match &result {
            Ok(RemoveOutcome::InUse(report)) => {
                let code = in_use_code(&report.kind);
                self.state.alert = Some(Alert::error(report.reason(), code));
            }
            Ok(RemoveOutcome::Removed(_)) => self.state.alert = None,
            Ok(RemoveOutcome::NotFound) => {}
            Err(e) => self.state.alert = Some(Alert::from(e)),
        }
        result
    }
}

fn in_use_code(kind: &str) -> ErrorCode {
    use crate::db::repository::ReferenceRecord;
    match kind {
        k if k == StandardRoomType::KIND => StandardRoomType::IN_USE,
        k if k == RoomTypeConfig::KIND => RoomTypeConfig::IN_USE,
        k if k == Amenity::KIND => Amenity::IN_USE,
        k if k == Area::KIND => Area::IN_USE,
        k if k == StayType::KIND => StayType::IN_USE,
        k if k == RoomViewType::KIND => RoomViewType::IN_USE,
        k if k == MealPlan::KIND => MealPlan::IN_USE,
        _ => ErrorCode::ValidationFailed,
    }
}

fn not_found(kind: &str, id: &str) -> AppError {
    AppError::with_message(ErrorCode::NotFound, format!("{kind} {id} not found")).with_detail("id", id)
}
