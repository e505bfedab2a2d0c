//! 리뷰 DTO

pub mod request;
pub mod response;

pub use request::{CreateReviewRequest, GetReviewsQuery, RatingsInput, UpdateReviewRequest};
pub use response::ReviewListResponse;
