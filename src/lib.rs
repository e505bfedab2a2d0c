//! 병원 직원 리뷰 서비스
//!
//! 인증된 병원 직원이 코디네이터(실장)와 의사에 대한 평가를 남기고 열람하는 서비스입니다.
//! 의료인 면허번호 또는 사업자등록번호로 가입하며, 관리자 승인(또는 자동 승인 정책)을
//! 거쳐야 리뷰를 쓸 수 있고, 리뷰를 한 건 이상 써야 다른 리뷰를 볼 수 있습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Routes/Handlers │ ← REST API (/api/v1), 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Use Cases     │ ← application: 가입, 로그인, 리뷰 작성/열람/수정, 심사, 검색
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Domain      │ ← 값 객체, 엔티티, 저장소 트레이트, 도메인 서비스
//! └─────────────────┘
//!          ▲
//!          │
//! ┌─────────────────┐
//! │ Infrastructure  │ ← repositories(MongoDB/메모리), caching(Redis), services(JWT, bcrypt)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use hospital_review_service::core::{AppContainer, Repositories};
//!
//! let container = AppContainer::from_config(Repositories::in_memory());
//! let user = container.register_user.execute(request).await?;
//! ```

pub mod application;
pub mod caching;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
