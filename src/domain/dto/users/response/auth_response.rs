use serde::Serialize;

use crate::domain::entities::users::{User, UserSnapshot};

/// 회원가입 응답
///
/// 인증 정책에 따라 `user.verificationStatus`가 `PENDING` 또는 `VERIFIED`일 수 있습니다.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub user: UserSnapshot,
    pub message: String,
}

impl RegisterResponse {
    pub fn from_user(user: &User) -> Self {
        let message = if user.is_verified() {
            "회원가입이 완료되었습니다"
        } else {
            "회원가입이 접수되었습니다. 관리자 인증 후 리뷰를 작성할 수 있습니다"
        };

        Self {
            user: user.to_snapshot(),
            message: message.to_string(),
        }
    }
}

/// 로그인 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserSnapshot,
    pub token: String,
    pub token_type: String,
    /// 초 단위 만료 시간
    pub expires_in: i64,
}
