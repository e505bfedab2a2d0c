//! Review Entity Implementation

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CoordinatorId, DoctorId, Rating, ReviewId, UserId};

pub const MIN_TITLE_LENGTH: usize = 5;
pub const MIN_CONTENT_LENGTH: usize = 20;

/// 익명 리뷰 스냅샷에서 작성자 ID 대신 쓰는 값
pub const ANONYMOUS_AUTHOR: &str = "anonymous";

/// 리뷰 대상 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    #[default]
    Coordinator,
    Doctor,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Coordinator => "coordinator",
            TargetType::Doctor => "doctor",
        }
    }

    pub fn from_string(value: &str) -> Option<Self> {
        match value {
            "coordinator" => Some(TargetType::Coordinator),
            "doctor" => Some(TargetType::Doctor),
            _ => None,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 리뷰 대상 참조
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReviewTarget {
    Coordinator(CoordinatorId),
    Doctor(DoctorId),
}

impl ReviewTarget {
    /// 종류와 ID 문자열로 대상 참조를 만듭니다.
    pub fn parse(target_type: TargetType, id: &str) -> DomainResult<Self> {
        Ok(match target_type {
            TargetType::Coordinator => ReviewTarget::Coordinator(CoordinatorId::from_string(id)?),
            TargetType::Doctor => ReviewTarget::Doctor(DoctorId::from_string(id)?),
        })
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            ReviewTarget::Coordinator(_) => TargetType::Coordinator,
            ReviewTarget::Doctor(_) => TargetType::Doctor,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ReviewTarget::Coordinator(id) => id.value(),
            ReviewTarget::Doctor(id) => id.value(),
        }
    }
}

/// 다섯 항목 평점
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRatings {
    /// 전문성
    pub professionalism: Rating,
    /// 소통능력
    pub communication: Rating,
    /// 책임감
    pub responsibility: Rating,
    /// 협업능력
    pub cooperation: Rating,
    /// 친절도
    pub kindness: Rating,
}

impl ReviewRatings {
    pub fn values(&self) -> [u8; 5] {
        [
            self.professionalism.value(),
            self.communication.value(),
            self.responsibility.value(),
            self.cooperation.value(),
            self.kindness.value(),
        ]
    }

    /// 다섯 항목의 산술 평균
    pub fn average(&self) -> f64 {
        let values = self.values();
        values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
    }
}

#[derive(Debug, Clone)]
pub struct ReviewProps {
    pub id: Option<ReviewId>,
    pub target: ReviewTarget,
    pub author_id: UserId,
    pub ratings: ReviewRatings,
    pub overall_rating: Option<Rating>,
    pub work_year: Option<i32>,
    pub work_duration: Option<String>,
    pub title: String,
    pub content: String,
    pub is_anonymous: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    id: ReviewId,
    target: ReviewTarget,
    author_id: UserId,
    ratings: ReviewRatings,
    overall_rating: Option<Rating>,
    work_year: Option<i32>,
    work_duration: Option<String>,
    title: String,
    content: String,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Review {
    pub fn create(props: ReviewProps) -> DomainResult<Self> {
        validate_text(&props.title, &props.content)?;

        let created_at = props.created_at.unwrap_or_else(Utc::now);

        Ok(Self {
            id: props.id.unwrap_or_else(ReviewId::generate),
            target: props.target,
            author_id: props.author_id,
            ratings: props.ratings,
            overall_rating: props.overall_rating,
            work_year: props.work_year,
            work_duration: props.work_duration,
            title: props.title,
            content: props.content,
            is_anonymous: props.is_anonymous,
            created_at,
            updated_at: props.updated_at.unwrap_or(created_at),
        })
    }

    pub fn id(&self) -> &ReviewId {
        &self.id
    }

    pub fn target(&self) -> &ReviewTarget {
        &self.target
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn ratings(&self) -> &ReviewRatings {
        &self.ratings
    }

    pub fn overall_rating(&self) -> Option<Rating> {
        self.overall_rating
    }

    pub fn work_year(&self) -> Option<i32> {
        self.work_year
    }

    pub fn work_duration(&self) -> Option<&str> {
        self.work_duration.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn average_rating(&self) -> f64 {
        self.ratings.average()
    }

    pub fn can_be_edited_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    /// 제목/본문/평점 교체. 길이 규칙을 어기면 아무것도 바꾸지 않습니다.
    pub fn update(&mut self, title: String, content: String, ratings: ReviewRatings) -> DomainResult<()> {
        validate_text(&title, &content)?;

        self.title = title;
        self.content = content;
        self.ratings = ratings;
        self.updated_at = Utc::now().max(self.updated_at);
        Ok(())
    }

    pub fn to_snapshot(&self) -> ReviewSnapshot {
        ReviewSnapshot {
            id: self.id.value().to_string(),
            target_id: self.target.id().to_string(),
            target_type: self.target.target_type(),
            author_id: if self.is_anonymous {
                ANONYMOUS_AUTHOR.to_string()
            } else {
                self.author_id.value().to_string()
            },
            ratings: self.ratings,
            overall_rating: self.overall_rating,
            average_rating: self.average_rating(),
            work_year: self.work_year,
            work_duration: self.work_duration.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            is_anonymous: self.is_anonymous,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn validate_text(title: &str, content: &str) -> DomainResult<()> {
    if title.chars().count() < MIN_TITLE_LENGTH {
        return Err(DomainError::TooShort {
            field: "review title",
            min: MIN_TITLE_LENGTH,
        });
    }
    if content.chars().count() < MIN_CONTENT_LENGTH {
        return Err(DomainError::TooShort {
            field: "review content",
            min: MIN_CONTENT_LENGTH,
        });
    }
    Ok(())
}

/// 리뷰 공개 스냅샷. 익명 리뷰는 `authorId`가 `"anonymous"`로 가려집니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSnapshot {
    pub id: String,
    pub target_id: String,
    pub target_type: TargetType,
    pub author_id: String,
    pub ratings: ReviewRatings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<Rating>,
    pub average_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_duration: Option<String>,
    pub title: String,
    pub content: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
