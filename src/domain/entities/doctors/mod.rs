//! 리뷰 대상인 의사 엔티티

pub mod doctor;

pub use doctor::{Doctor, DoctorProfileUpdate, DoctorProps, DoctorSnapshot};
