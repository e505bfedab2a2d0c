//! # Configuration Module
//!
//! 환경 변수 기반 설정입니다. 모든 설정 구조체는 상태를 가지지 않는 단위 구조체이며,
//! 연관 함수가 호출될 때마다 환경 변수를 읽고 기본값으로 보완합니다.
//!
//! `main`에서 `PROFILE`(dev/prod)에 따라 `.env.dev` / `.env.prod` 파일을 먼저 로드합니다.
//!
//! | 구조체 | 환경 변수 | 기본값 |
//! |--------|-----------|--------|
//! | [`Environment`] | `ENVIRONMENT` | production |
//! | [`PasswordConfig`] | `BCRYPT_COST` | 환경별 (4 / 4 / 10 / 12) |
//! | [`ServerConfig`] | `HOST`, `PORT` | 0.0.0.0, 8080 |
//! | [`StorageConfig`] | `STORAGE_BACKEND` | mongodb |
//! | [`DatabaseConfig`] | `MONGODB_URI`, `DATABASE_NAME` | mongodb://localhost:27017, hospital_review_dev |
//! | [`CacheConfig`] | `REDIS_URL` | redis://localhost:6379 |
//! | [`RateLimitConfig`] | `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE` | 100, 200 |
//! | [`JwtConfig`] | `JWT_SECRET`, `JWT_EXPIRATION_HOURS` | 개발용 키, 168 (7일) |
//! | [`VerificationConfig`] | `VERIFICATION_POLICY` | manual |
//! | [`AdminSeedConfig`] | `ADMIN_EMAIL`, `ADMIN_PASSWORD`, `ADMIN_NAME`, `ADMIN_HOSPITAL_NAME` | 없음 (둘 다 있어야 생성) |

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
