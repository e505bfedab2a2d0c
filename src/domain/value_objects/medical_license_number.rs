//! 의사 면허번호 값 객체 (숫자 5~6자리)

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

static LICENSE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,6}$").expect("valid license pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MedicalLicenseNumber(String);

impl MedicalLicenseNumber {
    pub fn create(value: &str) -> DomainResult<Self> {
        if value.is_empty() {
            return Err(DomainError::EmptyValue {
                field: "medical license number",
            });
        }

        if !LICENSE_PATTERN.is_match(value) {
            return Err(DomainError::InvalidFormat {
                field: "medical license number",
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MedicalLicenseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MedicalLicenseNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<MedicalLicenseNumber> for String {
    fn from(license: MedicalLicenseNumber) -> Self {
        license.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_and_six_digit_licenses() {
        assert_eq!(MedicalLicenseNumber::create("12345").unwrap().value(), "12345");
        assert_eq!(MedicalLicenseNumber::create("123456").unwrap().value(), "123456");
    }

    #[test]
    fn test_invalid_licenses() {
        assert!(matches!(
            MedicalLicenseNumber::create(""),
            Err(DomainError::EmptyValue { .. })
        ));
        for bad in ["1234", "1234567", "12a45", "12-345"] {
            assert!(
                matches!(
                    MedicalLicenseNumber::create(bad),
                    Err(DomainError::InvalidFormat { .. })
                ),
                "{bad}"
            );
        }
    }
}
