//! 관리자 DTO

pub mod verification_decision;

pub use verification_decision::VerificationDecision;
