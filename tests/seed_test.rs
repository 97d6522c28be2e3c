mod common;

use hotel_reservations::{seed_sample_data, SeedReport};

#[test]
fn test_seed_sample_data_only_fills_empty_collections() {
    let (_temp_dir, svc) = common::service();
    svc.create_hotel("H1", "Hotel Azul", 2).unwrap();

    let report = seed_sample_data(&svc).unwrap();

    assert_eq!(report.hotels, 0);
    assert_eq!(report.customers, 2);
    // H100 was not seeded, so no sample reservation either
    assert_eq!(report.reservations, 0);
    assert_eq!(svc.list_hotels().unwrap().len(), 1);

    let (_temp_dir, fresh) = common::service();
    let report = seed_sample_data(&fresh).unwrap();
    assert_eq!((report.hotels, report.customers, report.reservations), (2, 2, 1));
    assert_eq!(fresh.get_reservation("R100").unwrap().room, 1);

    let again = seed_sample_data(&fresh).unwrap();
    assert_eq!(again, SeedReport::default());
}
