pub mod review_response;

pub use review_response::ReviewListResponse;
