//! 코디네이터/의사 디렉터리 검색 DTO

pub mod directory_query;

pub use directory_query::{CoordinatorSearchQuery, DirectoryListResponse, DoctorSearchQuery};
