//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 헤더 또는 `auth-token` 쿠키의 JWT 검증
//! - 사용자 ID를 request extension에 저장
//! - 필수(Required)/선택(Optional) 인증 모드
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new().service(
//!     web::scope("/reviews")
//!         .wrap(AuthMiddleware::required())
//!         .route("", web::post().to(create_review)),
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
