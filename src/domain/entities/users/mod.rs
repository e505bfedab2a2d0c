//! Users Entity Module
//!
//! 가입한 병원 직원(또는 관리자)을 표현하는 `User` 엔티티를 정의합니다.
//!
//! # 주요 구성 요소
//!
//! - **역할**: `ADMIN` | `HOSPITAL_STAFF`
//! - **인증 상태**: `PENDING` → `VERIFIED` | `REJECTED`
//! - **인증 수단**: 의사 면허번호 또는 사업자등록번호 (최대 하나)
//!
//! 역할과 인증 상태는 서로 독립적인 축입니다. 관리자라도 인증되지 않았다면
//! 리뷰를 작성하거나 열람할 수 없습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserProps};
//!
//! let mut user = User::create(UserProps::new_staff(email, password_hash, "홍길동", "서울병원"))?;
//! user.verify()?;
//! assert!(user.is_verified());
//! ```

pub mod user;

pub use user::{User, UserProps, UserRole, UserSnapshot, VerificationStatus};
