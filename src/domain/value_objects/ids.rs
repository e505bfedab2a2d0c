//! 엔티티 식별자 값 객체
//!
//! `UserId`, `CoordinatorId`, `DoctorId`, `ReviewId` 는 모두 같은 규칙을 따릅니다.
//!
//! - 값이 주어지지 않으면 새 UUID v4 문자열(36자)을 생성합니다.
//! - 값이 주어지면 `^[0-9a-fA-F-]{36}$` 형식이어야 하며, 주어진 문자열을 그대로 보존합니다.
//!
//! ```rust,ignore
//! let generated = UserId::generate();
//! let parsed = UserId::from_string("550e8400-e29b-41d4-a716-446655440000")?;
//! assert_eq!(parsed.value(), "550e8400-e29b-41d4-a716-446655440000");
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F-]{36}$").expect("valid id pattern"));

fn is_valid_id(value: &str) -> bool {
    ID_PATTERN.is_match(value)
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// 값이 없으면 새 식별자를 생성하고, 있으면 형식을 검증합니다.
            pub fn create(value: Option<&str>) -> DomainResult<Self> {
                match value {
                    Some(value) => Self::from_string(value),
                    None => Ok(Self::generate()),
                }
            }

            /// 새 랜덤 식별자
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// 기존 식별자 문자열을 검증하여 복원합니다.
            pub fn from_string(value: &str) -> DomainResult<Self> {
                if !is_valid_id(value) {
                    return Err(DomainError::InvalidFormat { field: $field });
                }
                Ok(Self(value.to_string()))
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_string(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// 사용자 식별자
    UserId,
    "user id"
);
entity_id!(
    /// 코디네이터(실장) 식별자
    CoordinatorId,
    "coordinator id"
);
entity_id!(
    /// 의사 식별자
    DoctorId,
    "doctor id"
);
entity_id!(
    /// 리뷰 식별자
    ReviewId,
    "review id"
);
