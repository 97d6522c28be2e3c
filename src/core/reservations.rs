use crate::core::service::ReservationService;
use crate::domain::model::{Reservation, ReservationStatus};
use crate::domain::ports::Storage;
use crate::utils::error::{EntityKind, ReservationError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range};

impl<S: Storage> ReservationService<S> {
    /// Book `room` of `hotel_id` for `customer_id`.
    ///
    /// Checks run in a fixed order: reservation id, then hotel and customer
    /// existence, then the room range, then occupancy by another active
    /// reservation.
    pub fn create_reservation(
        &self,
        id: &str,
        hotel_id: &str,
        customer_id: &str,
        room: u32,
    ) -> Result<Reservation> {
        validate_non_empty_string("reservation id", id)?;
        let mut reservations = self.load_reservations()?;
        if reservations.iter().any(|r| r.id == id) {
            return Err(ReservationError::validation(format!(
                "Reservation {} already exists",
                id
            )));
        }

        let hotel = self.get_hotel(hotel_id)?;
        self.get_customer(customer_id)?;

        validate_range("room", room, 1, hotel.rooms)?;

        if let Some(holder) = reservations.iter().find(|r| r.occupies(hotel_id, room)) {
            return Err(ReservationError::conflict(format!(
                "Room {} of hotel {} is already held by reservation {}",
                room, hotel_id, holder.id
            )));
        }

        let reservation = Reservation {
            id: id.to_string(),
            hotel_id: hotel_id.to_string(),
            customer_id: customer_id.to_string(),
            room,
            status: ReservationStatus::Active,
            created_at: Some(self.now()),
        };
        reservations.push(reservation.clone());
        self.save_reservations(&reservations)?;

        tracing::info!(
            "Created reservation {} (hotel {}, room {}, customer {})",
            reservation.id,
            hotel_id,
            room,
            customer_id
        );
        Ok(reservation)
    }

    /// Cancelling twice is a no-op; the record stays in storage.
    pub fn cancel_reservation(&self, id: &str) -> Result<Reservation> {
        let mut reservations = self.load_reservations()?;
        let reservation = reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Reservation, id))?;

        if !reservation.is_active() {
            tracing::debug!("Reservation {} already cancelled", id);
            return Ok(reservation.clone());
        }

        reservation.cancel();
        let cancelled = reservation.clone();
        self.save_reservations(&reservations)?;

        tracing::info!(
            "Cancelled reservation {}, room {} of hotel {} is free",
            id,
            cancelled.room,
            cancelled.hotel_id
        );
        Ok(cancelled)
    }

    pub fn get_reservation(&self, id: &str) -> Result<Reservation> {
        self.load_reservations()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Reservation, id))
    }

    /// Active and cancelled reservations, in storage order.
    pub fn list_reservations(&self) -> Result<Vec<Reservation>> {
        self.load_reservations()
    }
}
