//! 인증된 요청 주체
//!
//! `AuthMiddleware`가 토큰 검증에 성공하면 요청 확장에 저장하며, 핸들러는 추출자로 꺼내 씁니다.
//! 토큰에는 사용자 ID만 담기므로, 역할이나 인증 상태가 필요하면 저장소에서 `User`를 다시 읽습니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

/// 선택적 인증 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
