//! # 리뷰 요청 DTO
//!
//! 평점은 JSON 숫자(`f64`)로 받아 [`Rating`](crate::domain::value_objects::Rating)
//! 값 객체가 범위/정수 여부를 검사합니다. `4.5` 같은 값은 `NotInteger`로 거절됩니다.

pub mod create_review_request;
pub mod review_query;
pub mod update_review_request;

pub use create_review_request::{CreateReviewRequest, RatingsInput};
pub use review_query::GetReviewsQuery;
pub use update_review_request::UpdateReviewRequest;
