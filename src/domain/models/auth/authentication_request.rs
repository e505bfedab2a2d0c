//! 인증 미들웨어 동작 모드

/// 토큰이 없거나 잘못되었을 때의 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 401로 즉시 거절
    Required,
    /// 익명 요청으로 계속 진행
    Optional,
}
