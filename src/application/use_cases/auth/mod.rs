//! 회원가입/로그인 유스케이스

pub mod login_user;
pub mod register_user;

pub use login_user::{LoginResult, LoginUserUseCase};
pub use register_user::RegisterUserUseCase;
