//! Coordinator Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CoordinatorId, Email, PhoneNumber};

#[derive(Debug, Clone)]
pub struct CoordinatorProps {
    pub id: Option<CoordinatorId>,
    pub name: String,
    pub hospital_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<PhoneNumber>,
    pub email: Option<Email>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CoordinatorProps {
    pub fn new(name: impl Into<String>, hospital_name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            hospital_name: hospital_name.into(),
            position: None,
            department: None,
            phone_number: None,
            email: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// 코디네이터 엔티티
///
/// 이름과 소속 병원은 필수이며, 직책/부서/연락처는 선택입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinator {
    id: CoordinatorId,
    name: String,
    hospital_name: String,
    position: Option<String>,
    department: Option<String>,
    phone_number: Option<PhoneNumber>,
    email: Option<Email>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Coordinator {
    pub fn create(props: CoordinatorProps) -> DomainResult<Self> {
        let name = required(&props.name, "name")?;
        let hospital_name = required(&props.hospital_name, "hospital name")?;

        let created_at = props.created_at.unwrap_or_else(Utc::now);

        Ok(Self {
            id: props.id.unwrap_or_else(CoordinatorId::generate),
            name,
            hospital_name,
            position: props.position,
            department: props.department,
            phone_number: props.phone_number,
            email: props.email,
            created_at,
            updated_at: props.updated_at.unwrap_or(created_at),
        })
    }

    pub fn id(&self) -> &CoordinatorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hospital_name(&self) -> &str {
        &self.hospital_name
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_number.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 이름/소속 병원 변경. 주어진 값만 바꾸며, 빈 문자열이면 아무것도 바꾸지 않고 실패합니다.
    pub fn update_profile(
        &mut self,
        name: Option<&str>,
        hospital_name: Option<&str>,
    ) -> DomainResult<()> {
        let name = name.map(|n| required(n, "name")).transpose()?;
        let hospital_name = hospital_name
            .map(|h| required(h, "hospital name"))
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(hospital_name) = hospital_name {
            self.hospital_name = hospital_name;
        }
        self.touch();
        Ok(())
    }

    /// 주어진 연락처만 교체합니다.
    pub fn update_contact_info(&mut self, email: Option<Email>, phone_number: Option<PhoneNumber>) {
        if let Some(email) = email {
            self.email = Some(email);
        }
        if let Some(phone_number) = phone_number {
            self.phone_number = Some(phone_number);
        }
        self.touch();
    }

    /// 직책은 항상 교체하고, 부서는 주어진 경우에만 교체합니다.
    pub fn update_position(&mut self, position: impl Into<String>, department: Option<String>) {
        self.position = Some(position.into());
        if let Some(department) = department {
            self.department = Some(department);
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    pub fn to_snapshot(&self) -> CoordinatorSnapshot {
        CoordinatorSnapshot {
            id: self.id.value().to_string(),
            name: self.name.clone(),
            hospital_name: self.hospital_name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            phone_number: self.phone_number.as_ref().map(|p| p.value().to_string()),
            email: self.email.as_ref().map(|e| e.value().to_string()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub(crate) fn required(value: &str, field: &'static str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyValue { field });
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorSnapshot {
    pub id: String,
    pub name: String,
    pub hospital_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn coordinator() -> Coordinator {
        let mut props = CoordinatorProps::new("박실장", "강남성형외과");
        props.created_at = Some(Utc::now() - Duration::hours(1));
        Coordinator::create(props).unwrap()
    }

    #[test]
    fn test_create_requires_name_and_hospital() {
        assert_eq!(
            Coordinator::create(CoordinatorProps::new("", "병원")),
            Err(DomainError::EmptyValue { field: "name" })
        );
        assert_eq!(
            Coordinator::create(CoordinatorProps::new("이름", " ")),
            Err(DomainError::EmptyValue {
                field: "hospital name"
            })
        );
    }

    #[test]
    fn test_update_position_keeps_department_when_absent() {
        let mut c = coordinator();
        c.update_position("실장", Some("상담팀".to_string()));
        c.update_position("팀장", None);

        assert_eq!(c.position(), Some("팀장"));
        assert_eq!(c.department(), Some("상담팀"));
    }

    #[test]
    fn test_update_contact_info_bumps_updated_at() {
        let mut c = coordinator();
        let before = c.updated_at();

        c.update_contact_info(
            Some(Email::create("PARK@clinic.kr").unwrap()),
            Some(PhoneNumber::create("010-1111-2222").unwrap()),
        );

        assert!(c.updated_at() > before);
        let snapshot = c.to_snapshot();
        assert_eq!(snapshot.email.as_deref(), Some("park@clinic.kr"));
        assert_eq!(snapshot.phone_number.as_deref(), Some("01011112222"));
    }

    #[test]
    fn test_invalid_profile_update_does_not_mutate() {
        let mut c = coordinator();
        let before = c.clone();

        assert!(c.update_profile(Some("새이름"), Some("")).is_err());
        assert_eq!(c, before);

        c.update_profile(Some("새이름"), None).unwrap();
        assert_eq!(c.name(), "새이름");
        assert_eq!(c.hospital_name(), "강남성형외과");
    }
}
