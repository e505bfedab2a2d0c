//! 면허번호/사업자번호 인증 제공자 구현
//!
//! 실제 보건의료인 면허 조회나 국세청 사업자 상태 조회 API가 연결될 자리입니다.
//! 현재는 [`StubVerificationProvider`]만 제공합니다.

pub mod stub_provider;

pub use stub_provider::StubVerificationProvider;
