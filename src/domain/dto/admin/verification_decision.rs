use serde::{Deserialize, Serialize};

/// 가입 인증 심사 결정
///
/// 경로(`/admin/users/{id}/verify`, `/admin/users/{id}/reject`)에서 결정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationDecision {
    Approve,
    Reject,
}

impl VerificationDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationDecision::Approve => "approve",
            VerificationDecision::Reject => "reject",
        }
    }
}
