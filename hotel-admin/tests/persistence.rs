use hotel_admin::services::seed_defaults;
use hotel_admin::{AdminStores, Config, RoomFilter, Storage, UsageReport};
use rust_decimal::Decimal;
use shared::models::{RoomCreate, RoomStatus};

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy());
    let path = config.db_path();

    let room_id = {
        let mut stores = AdminStores::open(Storage::open(&path).unwrap()).unwrap();
        seed_defaults(&mut stores);
        let twin = stores.standard_room_types.find_by_name("Twin Room").unwrap().id.clone();
        stores
            .standard_room_types
            .remove(&twin, &UsageReport::unused())
            .unwrap();

        let room = stores
            .rooms
            .create(RoomCreate {
                number: "101".into(),
                room_type: "Double Room".into(),
                stay_type: "Nightly".into(),
                capacity: 2,
                price: Decimal::new(9950, 2),
                area: "Main Building".into(),
                amenities: vec!["Wi-Fi".into(), "Safe".into()],
                status: Some(RoomStatus::Reserved),
                ..Default::default()
            })
            .unwrap();
        room.id
    };

    let mut stores = AdminStores::open(Storage::open(&path).unwrap()).unwrap();
    assert_eq!(stores.standard_room_types.len(), 4);
    assert!(stores.standard_room_types.find_by_name("Twin Room").is_none());

    let room = stores.rooms.get_by_id(&room_id).unwrap();
    assert_eq!(room.price, Decimal::new(9950, 2));
    assert_eq!(room.status, RoomStatus::Reserved);
    assert_eq!(stores.rooms.list(&RoomFilter::default()).len(), 1);

    // a second seeding run leaves operator changes alone
    assert_eq!(seed_defaults(&mut stores).inserted, 0);
    assert_eq!(stores.standard_room_types.len(), 4);
}
