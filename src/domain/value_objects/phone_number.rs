//! 전화번호 값 객체
//!
//! 하이픈과 공백을 제거한 숫자열로 저장하며, 국내 휴대전화(`01[016789]` + 7~8자리)
//! 또는 유선전화(`0[2-6]` + 7~9자리) 형식만 허용합니다.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(01[016789][0-9]{7,8}|0[2-6][0-9]{7,9})$").expect("valid phone pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn create(value: &str) -> DomainResult<Self> {
        if value.is_empty() {
            return Err(DomainError::EmptyValue { field: "phone number" });
        }

        let cleaned: String = value
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();

        if !PHONE_PATTERN.is_match(&cleaned) {
            return Err(DomainError::InvalidFormat { field: "phone number" });
        }

        Ok(Self(cleaned))
    }

    /// 숫자만 남긴 원본 값
    pub fn value(&self) -> &str {
        &self.0
    }

    /// 하이픈을 넣은 표시용 문자열
    ///
    /// 서울 지역번호(`02`)는 2자리, 그 외(휴대전화 포함)는 3자리 접두를 쓰고,
    /// 마지막 4자리를 분리합니다. 가운데 자리가 3~4자리가 아니면 원본을 돌려줍니다.
    pub fn formatted(&self) -> String {
        let prefix_len = if self.0.starts_with("02") { 2 } else { 3 };
        let middle_len = self.0.len().saturating_sub(prefix_len + 4);

        if !(3..=4).contains(&middle_len) {
            return self.0.clone();
        }

        let (prefix, rest) = self.0.split_at(prefix_len);
        let (middle, last) = rest.split_at(middle_len);
        format!("{}-{}-{}", prefix, middle, last)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}
