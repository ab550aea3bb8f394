//! 管理端状态 - 所有集合的唯一所有者

use shared::error::AppResult;
use shared::models::{
    Amenity, Area, MealPlan, RoomTypeConfig, RoomViewType, StandardRoomType, StayType,
};

use crate::db::Storage;
use crate::db::repository::{ReferenceStore, RoomCatalog};

/// Every store of the admin, loaded from one [`Storage`]
///
/// Constructed once per process and handed to the controller by `&mut`.
pub struct AdminStores {
    pub standard_room_types: ReferenceStore<StandardRoomType>,
    pub room_types: ReferenceStore<RoomTypeConfig>,
    pub stay_types: ReferenceStore<StayType>,
    pub amenities: ReferenceStore<Amenity>,
    pub areas: ReferenceStore<Area>,
    pub view_types: ReferenceStore<RoomViewType>,
    pub meal_plans: ReferenceStore<MealPlan>,
    pub rooms: RoomCatalog,
}

impl AdminStores {
    pub fn open(storage: Storage) -> AppResult<Self> {
        let stores = Self {
            standard_room_types: ReferenceStore::load(storage.clone())?,
            room_types: ReferenceStore::load(storage.clone())?,
            stay_types: ReferenceStore::load(storage.clone())?,
            amenities: ReferenceStore::load(storage.clone())?,
            areas: ReferenceStore::load(storage.clone())?,
            view_types: ReferenceStore::load(storage.clone())?,
            meal_plans: ReferenceStore::load(storage.clone())?,
            rooms: RoomCatalog::load(storage)?,
        };
        tracing::info!(summary = %stores.inventory(), "Admin stores opened");
        Ok(stores)
    }

    /// In-memory stores (for testing)
    pub fn in_memory() -> AppResult<Self> {
        Self::open(Storage::open_in_memory()?)
    }

    /// One-line record counts
    pub fn inventory(&self) -> String {
        format!(
            "standard_room_types={} room_types={} stay_types={} amenities={} areas={} view_types={} meal_plans={} rooms={}",
            self.standard_room_types.len(),
            self.room_types.len(),
            self.stay_types.len(),
            self.amenities.len(),
            self.areas.len(),
            self.view_types.len(),
            self.meal_plans.len(),
            self.rooms.len(),
        )
    }
}
