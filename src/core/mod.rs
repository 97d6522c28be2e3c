pub mod customers;
pub mod hotels;
pub mod reservations;
pub mod seed;
pub mod service;
pub mod store;
