//! Default reference data for a fresh database
//!
//! Each store is seeded only when it is empty, so edits and deletions made
//! by the operator survive restarts. Failures are collected per record
//! instead of aborting the whole run.

use rust_decimal::Decimal;
use shared::models::{
    AmenityCreate, AreaCreate, MealPlanCreate, RoomViewTypeCreate, StandardRoomTypeCreate,
    StayTypeCreate, Surcharge,
};

use crate::core::AdminStores;
use crate::db::repository::{ReferenceRecord, ReferenceStore};

/// Result of a seeding run
#[derive(Debug, Default)]
pub struct SeedReport {
    pub inserted: usize,
    pub errors: Vec<String>,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

fn seed_store<T: ReferenceRecord>(
    store: &mut ReferenceStore<T>,
    defaults: Vec<T::Create>,
    report: &mut SeedReport,
) {
    if !store.is_empty() {
        return;
    }
    for data in defaults {
        match store.create(data) {
            Ok(_) => report.inserted += 1,
            Err(e) => {
                tracing::warn!(kind = T::KIND, error = %e, "Seed record rejected");
                report.errors.push(format!("{}: {}", T::KIND, e));
            }
        }
    }
}

fn standard_room_types() -> Vec<StandardRoomTypeCreate> {
    [
        ("Single Room", "One single bed", 1),
        ("Double Room", "One double bed", 2),
        ("Twin Room", "Two single beds", 2),
        ("Family Room", "Space for a family of four", 4),
        ("Suite", "Separate living area", 3),
    ]
    .into_iter()
    .map(|(name, description, capacity)| StandardRoomTypeCreate {
        name: name.into(),
        description: description.into(),
        default_capacity: capacity,
    })
    .collect()
}

fn stay_types() -> Vec<StayTypeCreate> {
    [
        ("Nightly", "Standard overnight stay"),
        ("Day Use", "Check-in and check-out on the same day"),
        ("Long Stay", "Weekly or monthly stay"),
    ]
    .into_iter()
    .map(|(name, description)| StayTypeCreate {
        name: name.into(),
        description: description.into(),
    })
    .collect()
}

fn amenities() -> Vec<AmenityCreate> {
    ["Wi-Fi", "Air Conditioning", "Television", "Minibar", "Safe"]
        .into_iter()
        .map(|name| AmenityCreate {
            name: name.into(),
            description: String::new(),
        })
        .collect()
}

fn areas() -> Vec<AreaCreate> {
    vec![
        AreaCreate {
            name: "Main Building".into(),
            description: String::new(),
            floor: Some(1),
        },
        AreaCreate {
            name: "Garden Wing".into(),
            description: String::new(),
            floor: Some(0),
        },
    ]
}

fn view_types() -> Vec<RoomViewTypeCreate> {
    vec![
        RoomViewTypeCreate {
            name: "City View".into(),
            description: String::new(),
            surcharge: Surcharge::none(),
        },
        RoomViewTypeCreate {
            name: "Garden View".into(),
            description: String::new(),
            surcharge: Surcharge::fixed(Decimal::new(10, 0)),
        },
        RoomViewTypeCreate {
            name: "Sea View".into(),
            description: String::new(),
            surcharge: Surcharge::percentage(Decimal::new(15, 0)),
        },
    ]
}

fn meal_plans() -> Vec<MealPlanCreate> {
    [
        ("RO", "Room Only", 0),
        ("BB", "Bed & Breakfast", 12),
        ("HB", "Half Board", 30),
        ("FB", "Full Board", 45),
    ]
    .into_iter()
    .map(|(code, name, price)| MealPlanCreate {
        code: code.into(),
        name: name.into(),
        description: String::new(),
        price_per_person: Decimal::new(price, 0),
    })
    .collect()
}

/// Insert defaults into every empty reference store
pub fn seed_defaults(stores: &mut AdminStores) -> SeedReport {
    let mut report = SeedReport::default();

    seed_store(&mut stores.standard_room_types, standard_room_types(), &mut report);
    seed_store(&mut stores.stay_types, stay_types(), &mut report);
    seed_store(&mut stores.amenities, amenities(), &mut report);
    seed_store(&mut stores.areas, areas(), &mut report);
    seed_store(&mut stores.view_types, view_types(), &mut report);
    seed_store(&mut stores.meal_plans, meal_plans(), &mut report);

    if report.inserted > 0 {
        tracing::info!(inserted = report.inserted, "Default reference data seeded");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fills_empty_stores_once() {
        let mut stores = AdminStores::in_memory().unwrap();
        let report = seed_defaults(&mut stores);
        assert!(report.is_clean());
        assert_eq!(report.inserted, 5 + 3 + 5 + 2 + 3 + 4);
        assert_eq!(
            stores
                .standard_room_types
                .find_by_name("Family Room")
                .unwrap()
                .default_capacity,
            4
        );
        assert_eq!(stores.meal_plans.all()[1].code, "BB");

        let again = seed_defaults(&mut stores);
        assert_eq!(again.inserted, 0);
        assert_eq!(stores.standard_room_types.len(), 5);
    }
}
