//! # Domain Layer Module
//!
//! 병원 직원 리뷰 서비스의 도메인 계층입니다. 프레임워크나 저장소에 의존하지 않는
//! 비즈니스 규칙이 모두 여기에 있습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── value_objects - 자기 검증 값 객체 (ID, 이메일, 면허/사업자번호, 평점)
//! ├── entities      - User / Coordinator / Doctor / Review 애그리게이트
//! ├── repositories  - 영속성 계약 (trait)
//! ├── services      - 인증 확인, 리뷰 열람 게이트, 인증 정책
//! ├── dto           - 요청/응답 객체
//! └── models        - 인증 요청 컨텍스트, 토큰 클레임
//!      │
//!      ▼
//! Application Layer (use cases)
//!      │
//!      ▼
//! Infrastructure Layer (MongoDB / Redis / in-memory 구현)
//! ```
//!
//! ## 생성 규칙
//!
//! 값 객체와 엔티티는 검증하는 팩토리(`create`)로만 만들어집니다. 검증에 실패하면
//! 객체는 만들어지지 않고 [`errors::DomainError`]의 구체적인 변형이 반환됩니다.
//!
//! ```rust,ignore
//! use crate::domain::value_objects::{BusinessNumber, Rating};
//!
//! let number = BusinessNumber::create("123-45-67891")?;
//! assert_eq!(number.formatted(), "123-45-67891");
//!
//! assert!(Rating::create(4.5).is_err());
//! ```
//!
//! 엔티티는 서로를 직접 참조하지 않고 식별자만 들고 있습니다. 리뷰가 가리키는
//! 코디네이터/의사는 저장소 조회로 확인합니다.

pub mod dto;
pub mod entities;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod value_objects;
