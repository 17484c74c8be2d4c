pub mod appointments;
pub mod contact;
pub mod cookies;
pub mod doctors;
pub mod feedback;
pub mod patients;
pub mod prescriptions;
pub mod sessions;
pub mod users;
