//! # 토큰 서비스
//!
//! 로그인 성공 시 발급하는 불투명 베어러 토큰을 다룹니다.
//! 유스케이스와 미들웨어는 [`TokenIssuer`] 트레이트에만 의존하며, 기본 구현은
//! HS256 서명 JWT를 쓰는 [`JwtTokenService`]입니다.
//!
//! | 클레임 | 의미 |
//! |--------|------|
//! | `sub` | 사용자 ID |
//! | `iat` | 발급 시각 (UNIX 초) |
//! | `exp` | 만료 시각 (기본 발급 후 7일) |

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenClaims;
use crate::domain::value_objects::UserId;

/// 토큰 발급/검증 기능
pub trait TokenIssuer: Send + Sync {
    fn generate_token(&self, user_id: &UserId) -> AppResult<String>;

    /// 유효한 토큰이면 사용자 ID를, 아니면 `AuthenticationError`를 돌려줍니다.
    fn verify_token(&self, token: &str) -> AppResult<UserId>;

    fn expiration_seconds(&self) -> i64;
}

pub struct JwtTokenService {
    secret: String,
    expiration_hours: i64,
}

impl JwtTokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET` / `JWT_EXPIRATION_HOURS` 설정으로 생성
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    fn decode_claims(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }
}

impl TokenIssuer for JwtTokenService {
    fn generate_token(&self, user_id: &UserId) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.value().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn verify_token(&self, token: &str) -> AppResult<UserId> {
        let claims = self.decode_claims(token)?;
        UserId::from_string(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("토큰 subject 형식 오류".to_string()))
    }

    fn expiration_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }
}

/// `Authorization: Bearer <token>` 헤더에서 토큰 부분만 꺼냅니다.
pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
        })
}
