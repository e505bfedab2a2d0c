//! # Core Module
//!
//! - [`errors`]: 전역 에러 타입 `AppError`와 HTTP 응답 매핑
//! - [`container`]: 저장소/서비스/유스케이스 조립 (`AppContainer`)
//!
//! 의존성은 시작 시 한 번 명시적으로 조립되며, 핸들러는
//! `web::Data<AppContainer>`로 받아 씁니다.

pub mod container;
pub mod errors;

pub use container::{AppContainer, Repositories};
pub use errors::*;
