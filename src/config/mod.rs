//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 구조체로 중앙집중식 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting, CORS, 페이지네이션 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, RateLimitConfig};
//!
//! let env = Environment::current();
//! let bind_address = ServerConfig::bind_address();
//! let rate_limit = RateLimitConfig::from_env();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! # 프로파일 (.env.dev / .env.prod 선택)
//! export PROFILE="dev"
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 요청 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS (쉼표 구분)
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.example.com"
//! ```

pub mod data_config;

pub use data_config::*;
