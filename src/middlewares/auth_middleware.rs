//! JWT 인증 미들웨어
//!
//! 요청의 토큰을 검증하고 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 확장에 넣습니다. 토큰은 `Authorization: Bearer <token>` 헤더를 먼저 보고,
//! 없으면 `auth-token` 쿠키를 봅니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 토큰이 없거나 유효하지 않으면 401
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 토큰이 유효할 때만 사용자 정보를 넣고, 아니면 익명으로 진행
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    use super::*;
    use crate::config::{AuthCookieConfig, VerificationPolicyKind};
    use crate::core::container::{verification_policy, AppContainer, Repositories};
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::domain::value_objects::UserId;
    use crate::services::auth::{JwtTokenService, PasswordService};

    fn container() -> AppContainer {
        AppContainer::new(
            Repositories::in_memory(),
            PasswordService::new(4),
            Arc::new(JwtTokenService::new("middleware-secret", 1)),
            verification_policy(VerificationPolicyKind::Manual),
        )
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id.to_string())
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.user_id.to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(container())).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/p/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_accepts_bearer_and_cookie() {
        let container = container();
        let user_id = UserId::generate();
        let token = container.token_issuer.generate_token(&user_id).unwrap();

        let app = test::init_service(
            App::new().app_data(web::Data::new(container)).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/p/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, user_id.value().as_bytes());

        let req = test::TestRequest::get()
            .uri("/p/me")
            .cookie(Cookie::new(AuthCookieConfig::NAME, token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, user_id.value().as_bytes());
    }

    #[actix_web::test]
    async fn test_optional_passes_invalid_token_as_anonymous() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(container())).service(
                web::scope("/o")
                    .wrap(AuthMiddleware::optional())
                    .route("/who", web::get().to(maybe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/o/who")
            .insert_header((header::AUTHORIZATION, "Bearer garbage"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous".as_bytes());
    }
}
