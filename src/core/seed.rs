use crate::core::service::ReservationService;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// What [`seed_sample_data`] wrote, per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub hotels: usize,
    pub customers: usize,
    pub reservations: usize,
}

/// 為空的集合寫入範例資料；已有資料的集合保持不變
pub fn seed_sample_data<S: Storage>(svc: &ReservationService<S>) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    if svc.list_hotels()?.is_empty() {
        svc.create_hotel("H100", "Hotel Centro", 5)?;
        svc.create_hotel("H200", "Hotel Norte", 3)?;
        report.hotels = 2;
    }

    if svc.list_customers()?.is_empty() {
        svc.create_customer("C100", "Alice Doe", "alice@example.com")?;
        svc.create_customer("C200", "Bob Roe", "bob@example.com")?;
        report.customers = 2;
    }

    let sample_refs_present = svc.get_hotel("H100").is_ok() && svc.get_customer("C100").is_ok();
    if sample_refs_present && svc.list_reservations()?.is_empty() {
        svc.create_reservation("R100", "H100", "C100", 1)?;
        report.reservations = 1;
    }

    tracing::info!(
        "Seeded {} hotel(s), {} customer(s), {} reservation(s)",
        report.hotels,
        report.customers,
        report.reservations
    );
    Ok(report)
}
