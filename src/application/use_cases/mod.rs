//! | 유스케이스 | 입력 | 결과 |
//! |-----------|------|------|
//! | [`RegisterUserUseCase`] | `RegisterUserRequest` | 저장된 `User` (`PENDING` 또는 `VERIFIED`) |
//! | [`LoginUserUseCase`] | `LoginRequest` | `User` + 토큰 |
//! | [`CreateReviewUseCase`] | `CreateReviewRequest`, 작성자 | 저장된 `Review` |
//! | [`GetReviewsUseCase`] | `GetReviewsQuery`, 열람자 | `Vec<Review>` |
//! | [`UpdateReviewUseCase`] | 리뷰 ID, `UpdateReviewRequest`, 작성자 | 수정된 `Review` |
//! | [`ReviewUserVerificationUseCase`] | 대상 사용자 ID, 결정, 관리자 | 갱신된 `User` |
//! | [`SeedAdminUseCase`] | `AdminSeed` 설정 | 새 관리자 또는 `None` |
//! | [`SearchCoordinatorsUseCase`] / [`SearchDoctorsUseCase`] | 검색 쿼리 | 목록 |

pub mod admin;
pub mod auth;
pub mod directory;
pub mod review;

pub use admin::{ReviewUserVerificationUseCase, SeedAdminUseCase};
pub use auth::{LoginResult, LoginUserUseCase, RegisterUserUseCase};
pub use directory::{SearchCoordinatorsUseCase, SearchDoctorsUseCase};
pub use review::{CreateReviewUseCase, GetReviewsUseCase, UpdateReviewUseCase};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::entities::coordinators::{Coordinator, CoordinatorProps};
    use crate::domain::entities::users::{User, UserProps, UserRole};
    use crate::domain::value_objects::Email;

    /// 테스트용 병원 직원 (비밀번호 해시는 더미 값)
    pub(crate) fn staff(email: &str, verified: bool) -> User {
        let props = UserProps::new_staff(
            Email::create(email).unwrap(),
            "$2b$04$placeholder".to_string(),
            "테스트 직원",
            "테스트병원",
        );
        let mut user = User::create(props).unwrap();
        if verified {
            user.verify().unwrap();
        }
        user
    }

    pub(crate) fn admin(email: &str) -> User {
        let mut props = UserProps::new_staff(
            Email::create(email).unwrap(),
            "$2b$04$placeholder".to_string(),
            "관리자",
            "본사",
        );
        props.role = UserRole::Admin;
        let mut user = User::create(props).unwrap();
        user.verify().unwrap();
        user
    }

    pub(crate) fn coordinator(name: &str) -> Coordinator {
        Coordinator::create(CoordinatorProps::new(name, "서울중앙병원")).unwrap()
    }
}
