//! # Application Layer
//!
//! 도메인 객체, 저장소, 도메인 서비스를 엮어 하나의 요청을 처리하는 유스케이스들입니다.
//! 핸들러는 요청 DTO(와 인증된 `User`)를 넘겨 `execute`를 호출하고, 유스케이스는
//! 결과 엔티티 또는 구체적인 `AppError`를 돌려줍니다.
//!
//! 모든 의존성은 생성자로 주입되며 [`AppContainer`](crate::core::container::AppContainer)가
//! 프로세스 시작 시 한 번 조립합니다.

pub mod use_cases;

pub use use_cases::*;
