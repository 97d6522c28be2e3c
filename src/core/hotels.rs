use crate::core::service::ReservationService;
use crate::domain::model::{Hotel, HotelUpdate};
use crate::domain::ports::Storage;
use crate::utils::error::{EntityKind, ReservationError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number};

fn validate_hotel_fields(name: &str, rooms: u32) -> Result<()> {
    validate_non_empty_string("hotel name", name)?;
    validate_positive_number("rooms", rooms, 1)
}

impl<S: Storage> ReservationService<S> {
    pub fn create_hotel(&self, id: &str, name: &str, rooms: u32) -> Result<Hotel> {
        validate_non_empty_string("hotel id", id)?;
        validate_hotel_fields(name, rooms)?;

        let mut hotels = self.load_hotels()?;
        if hotels.iter().any(|h| h.id == id) {
            return Err(ReservationError::validation(format!(
                "Hotel {} already exists",
                id
            )));
        }

        let hotel = Hotel {
            id: id.to_string(),
            name: name.to_string(),
            rooms,
        };
        hotels.push(hotel.clone());
        self.save_hotels(&hotels)?;

        tracing::info!("Created hotel {} ({} rooms)", hotel.id, hotel.rooms);
        Ok(hotel)
    }

    pub fn get_hotel(&self, id: &str) -> Result<Hotel> {
        self.load_hotels()?
            .into_iter()
            .find(|h| h.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Hotel, id))
    }

    pub fn list_hotels(&self) -> Result<Vec<Hotel>> {
        self.load_hotels()
    }

    /// Rooms are not checked against existing reservations: shrinking a hotel
    /// only narrows the range accepted by later bookings.
    pub fn update_hotel(&self, id: &str, update: HotelUpdate) -> Result<Hotel> {
        let mut hotels = self.load_hotels()?;
        let current = hotels
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Hotel, id))?;

        let name = update.name.unwrap_or_else(|| current.name.clone());
        let rooms = update.rooms.unwrap_or(current.rooms);
        validate_hotel_fields(&name, rooms)?;

        current.name = name;
        current.rooms = rooms;
        let updated = current.clone();
        self.save_hotels(&hotels)?;

        tracing::info!("Updated hotel {}", id);
        Ok(updated)
    }

    pub fn delete_hotel(&self, id: &str) -> Result<Hotel> {
        let mut hotels = self.load_hotels()?;
        let index = hotels
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Hotel, id))?;

        self.apply_delete_policy(EntityKind::Hotel, id, |r| r.hotel_id == id)?;

        let removed = hotels.remove(index);
        self.save_hotels(&hotels)?;

        tracing::info!("Deleted hotel {}", id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::MemoryStorage;
    use crate::core::service::ReservationService;
    use crate::core::store::JsonStore;
    use crate::domain::model::HotelUpdate;
    use crate::utils::error::ReservationError;

    fn service() -> ReservationService<MemoryStorage> {
        ReservationService::new(JsonStore::new(MemoryStorage::new()))
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let svc = service();

        for (id, name, rooms) in [("", "Azul", 2), ("H1", "", 2), ("H1", "Azul", 0)] {
            let result = svc.create_hotel(id, name, rooms);
            assert!(matches!(result, Err(ReservationError::ValidationError { .. })));
        }
        assert!(svc.list_hotels().unwrap().is_empty());
    }

    #[test]
    fn test_partial_update_keeps_unset_fields() {
        let svc = service();
        svc.create_hotel("H1", "Azul", 2).unwrap();

        let updated = svc
            .update_hotel(
                "H1",
                HotelUpdate {
                    rooms: Some(8),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Azul");
        assert_eq!(updated.rooms, 8);
    }

    #[test]
    fn test_invalid_update_leaves_record_unchanged() {
        let svc = service();
        svc.create_hotel("H1", "Azul", 2).unwrap();

        let result = svc.update_hotel("H1", HotelUpdate::new("Azul", 0));
        assert!(matches!(result, Err(ReservationError::ValidationError { .. })));
        assert_eq!(svc.get_hotel("H1").unwrap().rooms, 2);
    }
}
