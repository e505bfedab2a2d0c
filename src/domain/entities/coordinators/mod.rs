//! 리뷰 대상인 코디네이터(상담실장) 엔티티

pub mod coordinator;

pub use coordinator::{Coordinator, CoordinatorProps, CoordinatorSnapshot};
