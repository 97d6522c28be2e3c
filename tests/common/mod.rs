#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use hotel_reservations::{JsonStore, LocalStorage, ReservationService};
use tempfile::TempDir;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// A service over a fresh temporary data directory. Keep the `TempDir`
/// alive for the whole test.
pub fn service() -> (TempDir, ReservationService<LocalStorage>) {
    let temp_dir = TempDir::new().unwrap();
    let svc = ReservationService::new(JsonStore::new(LocalStorage::new(temp_dir.path())))
        .with_clock(fixed_time);
    (temp_dir, svc)
}

/// Hotel H1 with 2 rooms and customers C1, C2.
pub fn seeded_service() -> (TempDir, ReservationService<LocalStorage>) {
    let (temp_dir, svc) = service();
    svc.create_hotel("H1", "Hotel Azul", 2).unwrap();
    svc.create_customer("C1", "Benja", "b@example.com").unwrap();
    svc.create_customer("C2", "Carla", "c@example.com").unwrap();
    (temp_dir, svc)
}
