use crate::core::store::JsonStore;
use crate::domain::model::{Customer, Hotel, Reservation};
use crate::domain::ports::Storage;
use crate::utils::error::{EntityKind, ReservationError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const HOTELS: &str = "hotels.json";
pub const CUSTOMERS: &str = "customers.json";
pub const RESERVATIONS: &str = "reservations.json";

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// What happens to reservations when the hotel or customer they point at
/// is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Delete without looking at reservations; references may dangle.
    #[default]
    Allow,
    /// Refuse with a conflict while an active reservation references the entity.
    Restrict,
    /// Cancel the active reservations referencing the entity, then delete it.
    ///
    /// The reservations file is written first. If writing the entity file
    /// then fails, the reservations stay cancelled and the entity remains.
    #[cfg_attr(feature = "cli", value(name = "cascade_cancel"))]
    CascadeCancel,
}

/// Business operations for hotels, customers and reservations.
///
/// Each call loads the collections it needs, validates, mutates in memory and
/// writes the affected collection back. Validation always happens before the
/// first write, so a failed call leaves every file untouched.
pub struct ReservationService<S: Storage> {
    store: JsonStore<S>,
    clock: Clock,
    delete_policy: DeletePolicy,
}

impl<S: Storage> ReservationService<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        Self {
            store,
            clock: Arc::new(Utc::now),
            delete_policy: DeletePolicy::default(),
        }
    }

    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    pub fn store(&self) -> &JsonStore<S> {
        &self.store
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub(crate) fn load_hotels(&self) -> Result<Vec<Hotel>> {
        self.store.load(HOTELS)
    }

    pub(crate) fn save_hotels(&self, hotels: &[Hotel]) -> Result<()> {
        self.store.save(HOTELS, hotels)
    }

    pub(crate) fn load_customers(&self) -> Result<Vec<Customer>> {
        self.store.load(CUSTOMERS)
    }

    pub(crate) fn save_customers(&self, customers: &[Customer]) -> Result<()> {
        self.store.save(CUSTOMERS, customers)
    }

    pub(crate) fn load_reservations(&self) -> Result<Vec<Reservation>> {
        self.store.load(RESERVATIONS)
    }

    pub(crate) fn save_reservations(&self, reservations: &[Reservation]) -> Result<()> {
        self.store.save(RESERVATIONS, reservations)
    }

    /// 依刪除策略處理引用 `id` 的預約；必須在移除實體之前呼叫
    pub(crate) fn apply_delete_policy<F>(
        &self,
        entity: EntityKind,
        id: &str,
        references: F,
    ) -> Result<()>
    where
        F: Fn(&Reservation) -> bool,
    {
        match self.delete_policy {
            DeletePolicy::Allow => Ok(()),
            DeletePolicy::Restrict => {
                let reservations = self.load_reservations()?;
                let active = reservations
                    .iter()
                    .filter(|r| r.is_active() && references(r))
                    .count();
                if active > 0 {
                    return Err(ReservationError::conflict(format!(
                        "{} {} is referenced by {} active reservation(s)",
                        entity, id, active
                    )));
                }
                Ok(())
            }
            DeletePolicy::CascadeCancel => {
                let mut reservations = self.load_reservations()?;
                let mut cancelled = 0;
                for reservation in reservations
                    .iter_mut()
                    .filter(|r| r.is_active() && references(r))
                {
                    reservation.cancel();
                    cancelled += 1;
                }
                if cancelled > 0 {
                    self.save_reservations(&reservations)?;
                    tracing::info!(
                        "Cancelled {} active reservation(s) of {} {}",
                        cancelled,
                        entity,
                        id
                    );
                }
                Ok(())
            }
        }
    }
}
