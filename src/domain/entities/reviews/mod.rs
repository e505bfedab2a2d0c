//! 리뷰 엔티티
//!
//! 리뷰는 코디네이터 또는 의사 중 하나를 대상으로 하며, 다섯 가지 항목 평점
//! (전문성, 소통능력, 책임감, 협업능력, 친절도)을 가집니다.

pub mod review;

pub use review::{
    ANONYMOUS_AUTHOR, Review, ReviewProps, ReviewRatings, ReviewSnapshot, ReviewTarget,
    TargetType,
};
