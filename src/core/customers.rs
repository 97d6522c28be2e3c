use crate::core::service::ReservationService;
use crate::domain::model::{Customer, CustomerUpdate};
use crate::domain::ports::Storage;
use crate::utils::error::{EntityKind, ReservationError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string};

fn validate_customer_fields(name: &str, email: &str) -> Result<()> {
    validate_non_empty_string("customer name", name)?;
    validate_email("email", email)
}

impl<S: Storage> ReservationService<S> {
    pub fn create_customer(&self, id: &str, name: &str, email: &str) -> Result<Customer> {
        validate_non_empty_string("customer id", id)?;
        validate_customer_fields(name, email)?;

        let mut customers = self.load_customers()?;
        if customers.iter().any(|c| c.id == id) {
            return Err(ReservationError::validation(format!(
                "Customer {} already exists",
                id
            )));
        }

        let customer = Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };
        customers.push(customer.clone());
        self.save_customers(&customers)?;

        tracing::info!("Created customer {}", customer.id);
        Ok(customer)
    }

    pub fn get_customer(&self, id: &str) -> Result<Customer> {
        self.load_customers()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Customer, id))
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        self.load_customers()
    }

    pub fn update_customer(&self, id: &str, update: CustomerUpdate) -> Result<Customer> {
        let mut customers = self.load_customers()?;
        let current = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Customer, id))?;

        let name = update.name.unwrap_or_else(|| current.name.clone());
        let email = update.email.unwrap_or_else(|| current.email.clone());
        validate_customer_fields(&name, &email)?;

        current.name = name;
        current.email = email;
        let updated = current.clone();
        self.save_customers(&customers)?;

        tracing::info!("Updated customer {}", id);
        Ok(updated)
    }

    pub fn delete_customer(&self, id: &str) -> Result<Customer> {
        let mut customers = self.load_customers()?;
        let index = customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ReservationError::not_found(EntityKind::Customer, id))?;

        self.apply_delete_policy(EntityKind::Customer, id, |r| r.customer_id == id)?;

        let removed = customers.remove(index);
        self.save_customers(&customers)?;

        tracing::info!("Deleted customer {}", id);
        Ok(removed)
    }
}
