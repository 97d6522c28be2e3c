pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MemoryStorage};
pub use config::AppConfig;
pub use crate::core::seed::{seed_sample_data, SeedReport};
pub use crate::core::service::{DeletePolicy, ReservationService};
pub use crate::core::store::JsonStore;
pub use domain::model::{
    Customer, CustomerUpdate, Hotel, HotelUpdate, Reservation, ReservationStatus,
};
pub use domain::ports::Storage;
pub use utils::error::{EntityKind, ReservationError, Result};
