//! AuthMiddleware 인증 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::config::AuthCookieConfig;
use crate::core::container::AppContainer;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::{AuthMode, AuthenticatedUser};
use crate::services::auth::{extract_bearer_token, TokenIssuer};

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let auth_result = match req.app_data::<web::Data<AppContainer>>() {
                Some(container) => authenticate(&req, container.token_issuer.as_ref()),
                None => Err(AppError::InternalError(
                    "AppContainer가 등록되지 않았습니다".to_string(),
                )),
            };

            match (mode, auth_result) {
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "유효한 인증 토큰이 필요합니다",
                        "code": "AUTHENTICATION_ERROR"
                    }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                (_, Ok(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Authorization 헤더, 없으면 인증 쿠키에서 토큰을 찾아 검증합니다.
fn authenticate(req: &ServiceRequest, token_issuer: &dyn TokenIssuer) -> AppResult<AuthenticatedUser> {
    let header_token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(|h| extract_bearer_token(h).map(str::to_string));

    let token = match header_token {
        Some(token) => token?,
        None => req
            .cookie(AuthCookieConfig::NAME)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 없습니다".to_string()))?,
    };

    let user_id = token_issuer.verify_token(&token)?;
    Ok(AuthenticatedUser { user_id })
}
