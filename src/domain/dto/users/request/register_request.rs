use serde::Deserialize;
use validator::Validate;

/// 병원 직원 회원가입 요청
///
/// `verification_type`은 `"medical"` 또는 `"business"`이며, 종류에 맞는 번호가
/// 함께 와야 합니다. 조합 검사는 가입 유스케이스가 담당합니다.
///
/// ```json
/// {
///   "email": "nurse@hospital.co.kr",
///   "password": "password123",
///   "name": "김간호",
///   "hospitalName": "서울중앙병원",
///   "verificationType": "business",
///   "businessNumber": "123-45-67891",
///   "verificationDocuments": ["uploads/license.pdf"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "병원 이름은 1-100자 사이여야 합니다"))]
    pub hospital_name: String,

    #[validate(length(min = 1, message = "인증 방식을 선택해주세요"))]
    pub verification_type: String,

    pub medical_license_number: Option<String>,

    pub business_number: Option<String>,

    /// 업로드된 증빙 서류 경로 목록
    #[serde(default)]
    pub verification_documents: Vec<String>,
}
