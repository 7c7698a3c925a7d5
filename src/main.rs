//! 사용자 리소스 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 서비스를 초기화합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_resource_service::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig,
};
use user_resource_service::repositories::users::InMemoryUserRepository;
use user_resource_service::routes::configure_all_routes;
use user_resource_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 리소스 서비스 시작중...");

    let user_service = web::Data::new(UserService::new(Arc::new(
        InMemoryUserRepository::new(),
    )));

    info!("✅ 사용자 서비스 초기화 완료 (in-memory 저장소)");

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("Rate Limiting 설정이 유효하지 않습니다: {:?}", rate_limit_config);
            std::io::Error::other("invalid rate limit configuration")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 stderr로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename {
        Some(filename) => {
            if let Err(e) = dotenv::from_filename(filename) {
                eprintln!("{} 파일 로드 실패 (profile={}): {}", filename, profile, e);
            }
        }
        None => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`에 맞는 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=user_resource_service::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    info!("Current environment: {:?}", environment);
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽으며, 사용자 리소스가 쓰는
/// 모든 메서드와 `X-Pagination`/`Location` 응답 헤더 노출을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![
            header::HeaderName::from_static("x-pagination"),
            header::LOCATION,
        ])
        .max_age(3600)
}
