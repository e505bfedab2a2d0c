//! 가입 인증 수단
//!
//! 사용자는 의사 면허번호 또는 사업자등록번호 중 최대 하나를 인증 수단으로 가집니다.

use serde::{Deserialize, Serialize};

use super::{BusinessNumber, MedicalLicenseNumber};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum VerificationCredential {
    MedicalLicense(MedicalLicenseNumber),
    BusinessNumber(BusinessNumber),
}

impl VerificationCredential {
    /// 인증 종류 문자열 (`medical` | `business`)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MedicalLicense(_) => "medical",
            Self::BusinessNumber(_) => "business",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::MedicalLicense(license) => license.value(),
            Self::BusinessNumber(number) => number.value(),
        }
    }
}
