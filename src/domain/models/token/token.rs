use serde::{Deserialize, Serialize};

/// JWT 클레임
///
/// `sub`은 사용자 ID 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
