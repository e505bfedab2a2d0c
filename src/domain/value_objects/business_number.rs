//! 사업자등록번호 값 객체
//!
//! 하이픈을 제거한 10자리 숫자이며, 국세청 검증번호 규칙을 통과해야 합니다.
//!
//! | 단계 | 계산 |
//! |------|------|
//! | 1 | 앞 9자리에 가중치 `[1,3,7,1,3,7,1,3,5]` 를 곱해 합산 |
//! | 2 | 9번째 자리 × 5 의 십의 자리(`floor(d9 * 5 / 10)`)를 더함 |
//! | 3 | `(10 - 합 % 10) % 10` 이 10번째 자리와 같아야 함 |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

const FIELD: &str = "business number";
const WEIGHTS: [u32; 9] = [1, 3, 7, 1, 3, 7, 1, 3, 5];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BusinessNumber(String);

impl BusinessNumber {
    pub fn create(value: &str) -> DomainResult<Self> {
        if value.is_empty() {
            return Err(DomainError::EmptyValue { field: FIELD });
        }

        let cleaned: String = value.chars().filter(|c| *c != '-').collect();

        let digits: Vec<u32> = cleaned.chars().filter_map(|c| c.to_digit(10)).collect();
        if cleaned.len() != 10 || digits.len() != 10 {
            return Err(DomainError::InvalidFormat { field: FIELD });
        }

        if !Self::checksum_matches(&digits) {
            return Err(DomainError::InvalidChecksum { field: FIELD });
        }

        Ok(Self(cleaned))
    }

    fn checksum_matches(digits: &[u32]) -> bool {
        let weighted: u32 = digits
            .iter()
            .zip(WEIGHTS.iter())
            .map(|(digit, weight)| digit * weight)
            .sum();
        let sum = weighted + (digits[8] * 5) / 10;
        let check = (10 - sum % 10) % 10;

        check == digits[9]
    }

    /// 하이픈 없는 10자리 숫자
    pub fn value(&self) -> &str {
        &self.0
    }

    /// `XXX-XX-XXXXX` 표시 형식
    pub fn formatted(&self) -> String {
        format!("{}-{}-{}", &self.0[0..3], &self.0[3..5], &self.0[5..10])
    }
}

impl fmt::Display for BusinessNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl TryFrom<String> for BusinessNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<BusinessNumber> for String {
    fn from(number: BusinessNumber) -> Self {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers_with_and_without_hyphens() {
        for (raw, digits) in [
            ("123-45-67891", "1234567891"),
            ("2208162517", "2208162517"),
            ("120-81-47521", "1208147521"),
        ] {
            let number = BusinessNumber::create(raw).unwrap();
            assert_eq!(number.value(), digits);
            assert_eq!(
                number.formatted(),
                format!("{}-{}-{}", &digits[0..3], &digits[3..5], &digits[5..])
            );
        }
    }

    #[test]
    fn test_corrupted_check_digit_rejected() {
        assert_eq!(
            BusinessNumber::create("123-45-67890"),
            Err(DomainError::InvalidChecksum { field: FIELD })
        );
        assert_eq!(
            BusinessNumber::create("2208162518"),
            Err(DomainError::InvalidChecksum { field: FIELD })
        );
    }

    #[test]
    fn test_wrong_shape_rejected() {
        assert_eq!(
            BusinessNumber::create(""),
            Err(DomainError::EmptyValue { field: FIELD })
        );
        for bad in ["123456789", "12345678901", "12345a7891", "123 45 67891"] {
            assert_eq!(
                BusinessNumber::create(bad),
                Err(DomainError::InvalidFormat { field: FIELD }),
                "{bad}"
            );
        }
    }
}
