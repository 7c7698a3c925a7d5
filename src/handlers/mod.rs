//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                   ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 작성 규칙
//!
//! - 반환 타입은 `AppResult<HttpResponse>`; 에러는 `?`로 전파하면
//!   `AppError`의 `ResponseError` 구현이 상태 코드를 결정합니다.
//! - 서비스는 `web::Data<UserService>`로 주입받습니다.
//! - 성공 본문은 `Representation::negotiate`로 선택한 표현으로 렌더링합니다.
//!
//! ## 모듈 구성
//!
//! - [`users`] - 사용자 리소스 엔드포인트

pub mod users;
