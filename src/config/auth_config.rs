//! 토큰, 인증 쿠키, 가입 인증 정책 설정

use std::env;

use super::Environment;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "hospital-review-dev-secret".to_string()
        })
    }

    /// 토큰 유효 시간. 기본 7일.
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .filter(|h: &i64| *h > 0)
            .unwrap_or(168)
    }
}

/// 로그인 시 내려주는 HTTP-only 쿠키
pub struct AuthCookieConfig;

impl AuthCookieConfig {
    pub const NAME: &'static str = "auth-token";

    /// 운영 환경에서만 `Secure` 속성을 붙입니다.
    pub fn secure() -> bool {
        Environment::current().is_production()
    }
}

/// 가입 직후 자동 승인 정책 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationPolicyKind {
    /// 인증 제공자가 확인하면 즉시 `VERIFIED`
    Auto,
    /// 관리자 승인 전까지 `PENDING`
    Manual,
}

impl VerificationPolicyKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "auto" | "provider" => VerificationPolicyKind::Auto,
            _ => VerificationPolicyKind::Manual,
        }
    }
}

pub struct VerificationConfig;

impl VerificationConfig {
    pub fn policy() -> VerificationPolicyKind {
        VerificationPolicyKind::from_str(
            &env::var("VERIFICATION_POLICY").unwrap_or_else(|_| "manual".to_string()),
        )
    }
}

/// 시작 시 만들 관리자 계정
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
    pub hospital_name: String,
}

/// `ADMIN_EMAIL` / `ADMIN_PASSWORD`가 모두 있을 때만 관리자 계정을 준비합니다.
pub struct AdminSeedConfig;

impl AdminSeedConfig {
    pub fn load() -> Option<AdminSeed> {
        Self::from_values(
            env::var("ADMIN_EMAIL").ok(),
            env::var("ADMIN_PASSWORD").ok(),
            env::var("ADMIN_NAME").ok(),
            env::var("ADMIN_HOSPITAL_NAME").ok(),
        )
    }

    pub fn from_values(
        email: Option<String>,
        password: Option<String>,
        name: Option<String>,
        hospital_name: Option<String>,
    ) -> Option<AdminSeed> {
        let email = email.filter(|v| !v.trim().is_empty());
        let password = password.filter(|v| !v.is_empty());

        match (email, password) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email: email.trim().to_string(),
                password,
                name: name.unwrap_or_else(|| "관리자".to_string()),
                hospital_name: hospital_name.unwrap_or_else(|| "운영팀".to_string()),
            }),
            (None, None) => None,
            _ => {
                log::warn!("ADMIN_EMAIL and ADMIN_PASSWORD must both be set, skipping admin seed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_policy_parsing() {
        assert_eq!(VerificationPolicyKind::from_str("auto"), VerificationPolicyKind::Auto);
        assert_eq!(VerificationPolicyKind::from_str("AUTO"), VerificationPolicyKind::Auto);
        assert_eq!(VerificationPolicyKind::from_str("manual"), VerificationPolicyKind::Manual);
        // 알 수 없는 값은 안전한 쪽(수동 심사)으로
        assert_eq!(VerificationPolicyKind::from_str("yes"), VerificationPolicyKind::Manual);
    }

    #[test]
    fn test_admin_seed_requires_email_and_password() {
        let seed = AdminSeedConfig::from_values(
            Some(" root@hospital.kr ".to_string()),
            Some("change-me-please".to_string()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(seed.email, "root@hospital.kr");
        assert_eq!(seed.name, "관리자");
        assert_eq!(seed.hospital_name, "운영팀");

        assert!(AdminSeedConfig::from_values(Some("root@hospital.kr".into()), None, None, None).is_none());
        assert!(AdminSeedConfig::from_values(None, Some("pw".into()), None, None).is_none());
        assert!(AdminSeedConfig::from_values(None, None, None, None).is_none());
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 168);
        }
    }
}
