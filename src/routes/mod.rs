//! API 라우트 설정 모듈
//!
//! 사용자 리소스 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Features
//!
//! - `/api/users` 스코프 아래 사용자 리소스 라우트
//! - JSON 본문 파싱 실패를 400(빈 본문)으로 통일하는 `JsonConfig`
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;

/// 모든 라우트를 설정합니다
///
/// 핸들러가 사용하는 `web::Data<UserService>`는 호출 측에서 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 리소스 라우트를 설정합니다
///
/// - `GET|HEAD /api/users/{id}` - 사용자 조회
/// - `GET /api/users` - 목록 조회
/// - `POST /api/users` - 생성
/// - `PUT /api/users/{id}` - 업서트
/// - `PATCH /api/users/{id}` - 부분 갱신
/// - `DELETE /api/users/{id}` - 삭제
/// - `OPTIONS /api/users` - 허용 메서드
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"login":"johndoe","firstName":"John"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .app_data(json_config())
            .service(handlers::users::get_users_options)
            .service(handlers::users::get_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user_by_id)
            .service(handlers::users::upsert_user)
            .service(handlers::users::partially_update_user)
            .service(handlers::users::delete_user),
    );
}

/// 본문 파싱 실패(형식 오류, 잘못된 Content-Type 등)는 모두 400으로 응답합니다.
///
/// `{"login": 5}`처럼 필드 타입이 맞지 않는 본문도 바인딩 실패로 보고 400입니다.
/// 422는 바인딩에 성공한 DTO의 검증 실패에만 사용합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("요청 본문 파싱 실패: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_resource_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "storage": { "type": "in-memory", "users": 42 }
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    let (status, storage) = match service.count_users().await {
        Ok(users) => ("healthy", json!({ "type": "in-memory", "users": users })),
        Err(e) => {
            log::error!("헬스체크 저장소 조회 실패: {}", e);
            ("degraded", json!({ "type": "in-memory", "error": e.to_string() }))
        }
    };

    HttpResponse::Ok().json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": storage
    }))
}
