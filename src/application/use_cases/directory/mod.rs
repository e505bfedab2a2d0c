//! 코디네이터/의사 공개 디렉터리 검색

pub mod search_directory;

pub use search_directory::{SearchCoordinatorsUseCase, SearchDoctorsUseCase};
