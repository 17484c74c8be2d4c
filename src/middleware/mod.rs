pub mod session;

pub use session::{DoctorSession, PatientSession, Session, session_middleware};
