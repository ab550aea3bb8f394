use hotel_admin::page::{MasterDataForm, Modal, Section};
use hotel_admin::services::seed_defaults;
use hotel_admin::{AdminStores, ErrorCode, RemoveOutcome, RoomPageController, RoomSortField, StatusAction};
use rust_decimal::Decimal;
use shared::models::{
    AmenityUpdate, AreaUpdate, MealPlanUpdate, RoomCreate, RoomStatus, RoomTypeConfigCreate,
    RoomTypeConfigUpdate, RoomViewTypeCreate, RoomViewTypeUpdate, StandardRoomTypeUpdate,
    StayTypeUpdate, Surcharge,
};

fn seeded() -> AdminStores {
    let mut stores = AdminStores::in_memory().unwrap();
    assert!(seed_defaults(&mut stores).is_clean());
    stores
}

fn room(number: &str) -> RoomCreate {
    RoomCreate {
        number: number.into(),
        room_type: "Double Room".into(),
        stay_type: "Nightly".into(),
        capacity: 2,
        price: Decimal::new(100, 0),
        area: "Main Building".into(),
        amenities: vec!["Wi-Fi".into()],
        ..Default::default()
    }
}

#[test]
fn test_seventeen_rooms_make_three_pages() {
    let mut stores = seeded();
    for n in 1..=17 {
        stores.rooms.create(room(&format!("{}", 100 + n))).unwrap();
    }

    let mut page = RoomPageController::new(&mut stores, 8);
    assert_eq!(page.filtered_rooms().len(), 17);
    assert_eq!(page.total_pages(), 3);

    page.go_to_page(3);
    let last = page.current_page();
    assert_eq!(last.page, 3);
    assert_eq!(last.data.len(), 1);
    assert!(!last.has_next());

    // out-of-range requests are clamped
    page.go_to_page(9);
    assert_eq!(page.state().page, 3);
    page.next_page();
    assert_eq!(page.state().page, 3);

    // filter changes go back to the first page
    page.sort_by(RoomSortField::Number);
    assert_eq!(page.state().page, 1);
    assert_eq!(page.current_page().data[0].number, "101");

    page.sort_by(RoomSortField::Number);
    assert_eq!(page.current_page().data[0].number, "117");
}

#[test]
fn test_status_filter_returns_matching_subset() {
    let mut stores = seeded();
    let a = stores.rooms.create(room("101")).unwrap();
    stores.rooms.create(room("102")).unwrap();
    let c = stores.rooms.create(room("103")).unwrap();
    stores.rooms.set_status(&a.id, RoomStatus::Dirty).unwrap();
    stores.rooms.set_status(&c.id, RoomStatus::Dirty).unwrap();

    let mut page = RoomPageController::new(&mut stores, 8);
    page.set_status_filter(Some(RoomStatus::Dirty));
    let dirty = page.filtered_rooms();
    assert_eq!(dirty.len(), 2);
    assert!(dirty.iter().all(|r| r.status == RoomStatus::Dirty));

    let counts = page.status_counts();
    assert_eq!(counts[&RoomStatus::Dirty], 2);
    assert_eq!(counts[&RoomStatus::Available], 1);
    assert_eq!(counts[&RoomStatus::Occupied], 0);
}

#[test]
fn test_deleting_view_type_clears_rooms() {
    let mut stores = seeded();
    let sea = stores
        .view_types
        .all()
        .iter()
        .find(|vt| vt.name == "Sea View")
        .cloned()
        .unwrap();
    for number in ["201", "202"] {
        stores
            .rooms
            .create(RoomCreate {
                view_type_id: Some(sea.id.clone()),
                view_type_name: Some(sea.name.clone()),
                ..room(number)
            })
            .unwrap();
    }
    stores.rooms.create(room("203")).unwrap();

    let mut page = RoomPageController::new(&mut stores, 8);
    let outcome = page.delete_view_type(&sea.id).unwrap();
    assert!(outcome.is_removed());
    let alert = page.alert().unwrap();
    assert!(!alert.is_error());
    assert_eq!(alert.message, "view type 'Sea View' removed and cleared from 2 rooms");

    let stores = page.stores();
    assert!(stores.view_types.get_by_id(&sea.id).is_none());
    assert!(
        stores
            .rooms
            .active()
            .all(|r| r.view_type_id.is_none() && r.view_type_name.is_none())
    );
}

#[test]
fn test_view_type_rename_and_surcharge_price() {
    let mut stores = seeded();
    let mut page = RoomPageController::new(&mut stores, 8);
    let lake = page
        .create_view_type(RoomViewTypeCreate {
            name: "Lake View".into(),
            description: String::new(),
            surcharge: Surcharge::percentage(Decimal::new(10, 0)),
        })
        .unwrap();

    page.open_create_room();
    {
        let form = page.room_form_mut().unwrap();
        form.number = "301".into();
        form.stay_type = "Nightly".into();
        form.area = "Garden Wing".into();
        form.amenities = vec!["Safe".into()];
        form.view_type_id = Some(lake.id.clone());
    }
    page.choose_room_type("Family Room");
    assert_eq!(page.room_form().unwrap().capacity, 4);
    page.room_form_mut().unwrap().price = Decimal::new(150, 0);
    let created = page.submit_room_form().unwrap();
    assert_eq!(created.view_type_name.as_deref(), Some("Lake View"));
    assert_eq!(page.state().modal, Modal::Closed);
    assert_eq!(page.state().selected_room.as_deref(), Some(created.id.as_str()));

    page.update_view_type(
        &lake.id,
        RoomViewTypeUpdate {
            name: Some("Lakeside".into()),
            ..Default::default()
        },
    )
    .unwrap();
    let room = page.stores().rooms.get_by_id(&created.id).unwrap().clone();
    assert_eq!(room.view_type_name.as_deref(), Some("Lakeside"));

    let summary = page.summarize(&room);
    assert_eq!(summary.effective_price, Decimal::new(165, 0));
}

#[test]
fn test_room_form_validation_sets_alert_and_commits_nothing() {
    let mut stores = seeded();
    stores.rooms.create(room("101")).unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);

    page.open_create_room();
    let err = page.submit_room_form().unwrap_err();
    assert_eq!(err.code, ErrorCode::RoomNumberRequired);
    assert_eq!(page.state().modal, Modal::CreateRoom);
    assert!(page.alert().unwrap().is_error());

    page.room_form_mut().unwrap().number = "101".into();
    let err = page.submit_room_form().unwrap_err();
    assert_eq!(err.code, ErrorCode::RoomNumberExists);

    page.room_form_mut().unwrap().number = "102".into();
    let err = page.submit_room_form().unwrap_err();
    assert_eq!(err.code, ErrorCode::RoomAmenitiesRequired);
    assert_eq!(page.stores().rooms.len(), 1);
}

#[test]
fn test_edit_room_keeps_own_number() {
    let mut stores = seeded();
    let existing = stores.rooms.create(room("101")).unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);

    page.open_edit_room(&existing.id).unwrap();
    assert_eq!(page.room_form().unwrap().number, "101");
    page.room_form_mut().unwrap().price = Decimal::new(110, 0);
    let updated = page.submit_room_form().unwrap();
    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.price, Decimal::new(110, 0));
    assert!(!page.alert().unwrap().is_error());
}

#[test]
fn test_status_actions_follow_housekeeping_flow() {
    let mut stores = seeded();
    let r = stores.rooms.create(room("101")).unwrap();
    stores.rooms.set_status(&r.id, RoomStatus::Dirty).unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);

    let err = page.change_room_status(&r.id, RoomStatus::Available).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStatusTransition);

    let cleaning = page
        .apply_status_action(&r.id, StatusAction::StartCleaning)
        .unwrap();
    assert_eq!(cleaning.status, RoomStatus::CleaningInProgress);
    let done = page
        .change_room_status(&r.id, RoomStatus::Available)
        .unwrap();
    assert_eq!(done.status, RoomStatus::Available);

    let err = page
        .apply_status_action(&r.id, StatusAction::FinishCleaning)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
    let maintenance = page
        .apply_status_action(&r.id, StatusAction::StartMaintenance)
        .unwrap();
    assert_eq!(maintenance.status, RoomStatus::UnderMaintenance);

    // maintenance is one-way at this layer
    let err = page
        .change_room_status(&r.id, RoomStatus::Available)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
    assert!(StatusAction::available_for(RoomStatus::UnderMaintenance).is_empty());
    assert_eq!(
        page.stores().rooms.get_by_id(&r.id).unwrap().status,
        RoomStatus::UnderMaintenance
    );
}

#[test]
fn test_edit_form_does_not_change_status() {
    let mut stores = seeded();
    let r = stores.rooms.create(room("101")).unwrap();
    stores.rooms.set_status(&r.id, RoomStatus::Dirty).unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);

    page.open_edit_room(&r.id).unwrap();
    {
        let form = page.room_form_mut().unwrap();
        form.status = RoomStatus::Available;
        form.price = Decimal::new(120, 0);
    }
    let updated = page.submit_room_form().unwrap();
    assert_eq!(updated.status, RoomStatus::Dirty);
    assert_eq!(updated.price, Decimal::new(120, 0));
}

#[test]
fn test_confirm_delete_room() {
    let mut stores = seeded();
    let r = stores.rooms.create(room("101")).unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);

    assert!(page.confirm_delete_room("no request").is_err());

    page.request_delete_room(&r.id).unwrap();
    assert_eq!(page.state().modal, Modal::ConfirmDelete(r.id.clone()));
    let err = page.confirm_delete_room("  ").unwrap_err();
    assert_eq!(err.code, ErrorCode::RequiredField);

    let removed = page.confirm_delete_room("Converted to storage").unwrap();
    assert_eq!(removed.deletion_reason.as_deref(), Some("Converted to storage"));
    assert!(page.filtered_rooms().is_empty());
    assert_eq!(page.state().modal, Modal::Closed);
}

#[test]
fn test_standard_room_type_capacity_cascades() {
    let mut stores = seeded();
    let double = stores
        .standard_room_types
        .find_by_name("Double Room")
        .cloned()
        .unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);

    let deluxe = page
        .create_room_type(RoomTypeConfigCreate {
            name: "Deluxe Double".into(),
            description: String::new(),
            standard_room_type_id: Some(double.id.clone()),
            base_price: Decimal::new(140, 0),
            allowed_capacity: 9,
            amenities: vec!["Wi-Fi".into(), "Minibar".into()],
        })
        .unwrap();
    assert_eq!(deluxe.allowed_capacity, 2);

    page.open_create_room();
    {
        let form = page.room_form_mut().unwrap();
        form.number = "401".into();
        form.stay_type = "Nightly".into();
        form.area = "Main Building".into();
        form.amenities = vec!["Wi-Fi".into()];
    }
    page.choose_room_type("Deluxe Double");
    assert_eq!(page.room_form().unwrap().price, Decimal::new(140, 0));
    let deluxe_room = page.submit_room_form().unwrap();

    let err = page
        .update_room_type(
            &deluxe.id,
            RoomTypeConfigUpdate {
                allowed_capacity: Some(5),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RoomTypeCapacityLocked);

    page.update_standard_room_type(
        &double.id,
        StandardRoomTypeUpdate {
            default_capacity: Some(3),
            ..Default::default()
        },
    )
    .unwrap();
    let stores = page.stores();
    assert_eq!(stores.room_types.get_by_id(&deluxe.id).unwrap().allowed_capacity, 3);
    assert_eq!(stores.rooms.get_by_id(&deluxe_room.id).unwrap().capacity, 3);
}

#[test]
fn test_room_type_rename_and_unbind() {
    let mut stores = seeded();
    let suite = stores.standard_room_types.find_by_name("Suite").cloned().unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);
    let royal = page
        .create_room_type(RoomTypeConfigCreate {
            name: "Royal Suite".into(),
            description: String::new(),
            standard_room_type_id: Some(suite.id.clone()),
            base_price: Decimal::new(500, 0),
            allowed_capacity: 0,
            amenities: vec![],
        })
        .unwrap();

    page.open_create_room();
    {
        let form = page.room_form_mut().unwrap();
        form.number = "501".into();
        form.stay_type = "Nightly".into();
        form.area = "Main Building".into();
        form.amenities = vec!["Safe".into()];
    }
    page.choose_room_type("Royal Suite");
    let r = page.submit_room_form().unwrap();

    page.update_room_type(
        &royal.id,
        RoomTypeConfigUpdate {
            name: Some("Presidential Suite".into()),
            standard_room_type_id: Some(None),
            allowed_capacity: Some(6),
            ..Default::default()
        },
    )
    .unwrap();

    let room = page.stores().rooms.get_by_id(&r.id).unwrap();
    assert_eq!(room.room_type, "Presidential Suite");
    assert_eq!(room.capacity, 6);

    let outcome = page.delete_room_type(&royal.id).unwrap();
    assert!(matches!(outcome, RemoveOutcome::InUse(_)));
    assert_eq!(page.alert().unwrap().code, Some(ErrorCode::RoomTypeInUse));
}

#[test]
fn test_in_use_reference_delete_is_refused() {
    let mut stores = seeded();
    stores.rooms.create(room("101")).unwrap();
    let garden_id = stores.areas.find_by_name("Garden Wing").unwrap().id.clone();
    let main_id = stores.areas.find_by_name("Main Building").unwrap().id.clone();
    let wifi_id = stores.amenities.find_by_name("Wi-Fi").unwrap().id.clone();
    let double_id = stores.standard_room_types.find_by_name("Double Room").unwrap().id.clone();
    let nightly_id = stores.stay_types.find_by_name("Nightly").unwrap().id.clone();
    let day_use_id = stores.stay_types.find_by_name("Day Use").unwrap().id.clone();
    let mut page = RoomPageController::new(&mut stores, 8);

    let outcome = page.delete_area(&main_id).unwrap();
    let RemoveOutcome::InUse(report) = outcome else {
        panic!("expected refusal");
    };
    assert!(report.reason().contains("Room 101"));
    assert_eq!(page.alert().unwrap().code, Some(ErrorCode::AreaInUse));
    assert_eq!(page.stores().areas.len(), 2);

    assert!(page.delete_area(&garden_id).unwrap().is_removed());
    assert_eq!(page.stores().areas.len(), 1);

    assert!(!page.delete_amenity(&wifi_id).unwrap().is_removed());
    assert!(!page.delete_standard_room_type(&double_id).unwrap().is_removed());
    assert_eq!(page.delete_area("AR-999").unwrap(), RemoveOutcome::NotFound);

    let RemoveOutcome::InUse(report) = page.delete_stay_type(&nightly_id).unwrap() else {
        panic!("expected refusal");
    };
    assert_eq!(report.count(), 1);
    assert_eq!(page.alert().unwrap().code, Some(ErrorCode::StayTypeInUse));
    assert!(page.stores().stay_types.get_by_id(&nightly_id).is_some());
    assert!(page.delete_stay_type(&day_use_id).unwrap().is_removed());
}

#[test]
fn test_standard_room_type_change_skips_configured_name() {
    let mut stores = seeded();
    let double = stores
        .standard_room_types
        .find_by_name("Double Room")
        .cloned()
        .unwrap();
    let mut page = RoomPageController::new(&mut stores, 8);

    // unbound configuration sharing the standard type's name
    page.create_room_type(RoomTypeConfigCreate {
        name: "Double Room".into(),
        description: String::new(),
        standard_room_type_id: None,
        base_price: Decimal::new(90, 0),
        allowed_capacity: 5,
        amenities: vec![],
    })
    .unwrap();

    page.open_create_room();
    {
        let form = page.room_form_mut().unwrap();
        form.number = "201".into();
        form.stay_type = "Nightly".into();
        form.area = "Main Building".into();
        form.amenities = vec!["Wi-Fi".into()];
    }
    page.choose_room_type("Double Room");
    let r = page.submit_room_form().unwrap();
    assert_eq!(r.capacity, 5);

    page.update_standard_room_type(
        &double.id,
        StandardRoomTypeUpdate {
            name: Some("Queen Room".into()),
            default_capacity: Some(3),
            ..Default::default()
        },
    )
    .unwrap();

    let room = page.stores().rooms.get_by_id(&r.id).unwrap();
    assert_eq!(room.room_type, "Double Room");
    assert_eq!(room.capacity, 5);
    assert!(page.delete_standard_room_type(&double.id).unwrap().is_removed());
}

#[test]
fn test_rename_cascades_into_rooms() {
    let mut stores = seeded();
    let r = stores
        .rooms
        .create(RoomCreate {
            meal_plan_code: Some("BB".into()),
            ..room("101")
        })
        .unwrap();
    let main_id = stores.areas.find_by_name("Main Building").unwrap().id.clone();
    let wifi_id = stores.amenities.find_by_name("Wi-Fi").unwrap().id.clone();
    let bb_id = stores
        .meal_plans
        .all()
        .iter()
        .find(|mp| mp.code == "BB")
        .unwrap()
        .id
        .clone();
    let nightly_id = stores.stay_types.find_by_name("Nightly").unwrap().id.clone();
    let mut page = RoomPageController::new(&mut stores, 8);

    page.update_area(
        &main_id,
        AreaUpdate {
            name: Some("North Tower".into()),
            ..Default::default()
        },
    )
    .unwrap();
    page.update_amenity(
        &wifi_id,
        AmenityUpdate {
            name: Some("Wireless Internet".into()),
            ..Default::default()
        },
    )
    .unwrap();
    page.update_meal_plan(
        &bb_id,
        MealPlanUpdate {
            code: Some("bnb".into()),
            ..Default::default()
        },
    )
    .unwrap();
    page.update_stay_type(
        &nightly_id,
        StayTypeUpdate {
            name: Some("Overnight".into()),
            ..Default::default()
        },
    )
    .unwrap();

    let room = page.stores().rooms.get_by_id(&r.id).unwrap();
    assert_eq!(room.area, "North Tower");
    assert_eq!(room.amenities, vec!["Wireless Internet"]);
    assert_eq!(room.meal_plan_code.as_deref(), Some("BNB"));
    assert_eq!(room.stay_type, "Overnight");

    assert!(page.delete_meal_plan(&bb_id).unwrap().is_removed());
    assert!(page.stores().rooms.get_by_id(&r.id).unwrap().meal_plan_code.is_none());
    assert_eq!(
        page.alert().unwrap().message,
        "meal plan 'Bed & Breakfast' removed and cleared from 1 room"
    );
}

#[test]
fn test_master_form_flow() {
    let mut stores = seeded();
    let mut page = RoomPageController::new(&mut stores, 8);

    page.open_master_form(MasterDataForm::ViewType {
        editing: None,
        data: RoomViewTypeCreate {
            name: "City View".into(),
            description: String::new(),
            surcharge: Surcharge::none(),
        },
    });
    assert_eq!(page.state().section, Section::ViewTypes);
    let err = page.submit_master_form().unwrap_err();
    assert_eq!(err.code, ErrorCode::ViewTypeNameExists);
    assert_eq!(page.state().modal, Modal::MasterData);

    if let Some(MasterDataForm::ViewType { data, .. }) = page.master_form_mut() {
        data.name = "Pool View".into();
    }
    page.submit_master_form().unwrap();
    assert_eq!(page.state().modal, Modal::Closed);
    assert!(page.stores().view_types.find_by_name("Pool View").is_some());
}
