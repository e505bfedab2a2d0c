//! 평점 값 객체 (1~5 정수)

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// 수치 입력을 검증합니다. 범위 검사가 정수 검사보다 먼저입니다.
    pub fn create(value: f64) -> DomainResult<Self> {
        if !(MIN_RATING as f64..=MAX_RATING as f64).contains(&value) {
            return Err(DomainError::OutOfRange {
                field: "rating",
                min: MIN_RATING,
                max: MAX_RATING,
            });
        }

        if value.fract() != 0.0 {
            return Err(DomainError::NotInteger { field: "rating" });
        }

        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(DomainError::OutOfRange {
                field: "rating",
                min: MIN_RATING,
                max: MAX_RATING,
            });
        }
        Ok(Self(value as u8))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_only_one_through_five() {
        for r in -3..=9i64 {
            let result = Rating::try_from(r);
            assert_eq!(result.is_ok(), (1..=5).contains(&r), "rating {r}");
        }
        assert_eq!(Rating::create(3.0).unwrap().value(), 3);
    }

    #[test]
    fn test_fractional_rating_rejected() {
        assert_eq!(
            Rating::create(3.5),
            Err(DomainError::NotInteger { field: "rating" })
        );
    }

    #[test]
    fn test_out_of_range_checked_before_integer() {
        assert!(matches!(
            Rating::create(5.5),
            Err(DomainError::OutOfRange { .. })
        ));
        assert!(matches!(
            Rating::create(f64::NAN),
            Err(DomainError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<Rating>("0").is_err());
        assert!(serde_json::from_str::<Rating>("2.5").is_err());
    }
}
