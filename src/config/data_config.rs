//! 서버 및 리소스 설정 관리 모듈
//!
//! 서버 바인딩, 요청 제한, CORS, 페이지네이션 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터
    ///
    /// `RUST_LOG`가 설정되지 않았을 때 `env_logger`에 전달됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .map(|value| {
                value.parse::<u64>().unwrap_or_else(|e| {
                    log::error!(
                        "RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용",
                        e,
                        Self::DEFAULT_PER_SECOND
                    );
                    Self::DEFAULT_PER_SECOND
                })
            })
            .unwrap_or(Self::DEFAULT_PER_SECOND);

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .map(|value| {
                value.parse::<u32>().unwrap_or_else(|e| {
                    log::error!(
                        "RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용",
                        e,
                        Self::DEFAULT_BURST_SIZE
                    );
                    Self::DEFAULT_BURST_SIZE
                })
            })
            .unwrap_or(Self::DEFAULT_BURST_SIZE);

        let config = Self {
            per_second,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS`(쉼표 구분)에서 허용 Origin 목록을 읽습니다.
    ///
    /// 설정되지 않았거나 비어 있으면 로컬 개발용 Origin을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    fn parse_origins(raw: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            origins
        }
    }
}

/// 목록 조회 페이지네이션 규칙
pub struct PaginationConfig;

impl PaginationConfig {
    pub const DEFAULT_PAGE_NUMBER: u32 = 1;
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 20;
}
