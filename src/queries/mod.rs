//! PostgreSQL statements, one module per collection.

pub mod appointments;
pub mod contact;
pub mod feedback;
pub mod prescriptions;
pub mod users;
