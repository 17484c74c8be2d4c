pub mod appointments;
pub mod contact;
pub mod feedback;
pub mod prescriptions;
pub mod sessions;
pub mod users;
pub mod views;
