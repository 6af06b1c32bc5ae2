pub mod doctor;
pub mod enums;

pub use doctor::{Doctor, NewDoctor};
pub use enums::{DoctorGroup, ShiftCode};
