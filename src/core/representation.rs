//! # Representation Negotiation
//!
//! `Accept` 헤더를 기준으로 응답 표현(JSON / XML)을 선택하고 본문을 렌더링합니다.
//!
//! | Accept | 선택 |
//! |--------|------|
//! | `application/json`, `application/*`, `*/*` | JSON |
//! | `application/xml`, `text/xml` | XML |
//! | 헤더 없음 / 매칭 실패 | JSON |
//!
//! 에러 응답은 항상 JSON이며 이 모듈을 거치지 않습니다.

use actix_web::http::header::{Accept, Header};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder};
use serde::Serialize;

use crate::core::errors::{AppResult, ErrorContext};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// 응답 본문 표현 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    #[default]
    Json,
    Xml,
}

impl Representation {
    /// 요청의 `Accept` 헤더를 품질(q) 순서로 검사하여 표현을 결정합니다.
    pub fn negotiate(req: &HttpRequest) -> Self {
        let Ok(accept) = Accept::parse(req) else {
            return Self::default();
        };

        for mime in accept.ranked() {
            match mime.essence_str() {
                "application/json" | "application/*" | "*/*" => return Representation::Json,
                "application/xml" | "text/xml" => return Representation::Xml,
                _ => continue,
            }
        }

        Self::default()
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Representation::Json => JSON_CONTENT_TYPE,
            Representation::Xml => XML_CONTENT_TYPE,
        }
    }

    /// 값을 직렬화하여 응답 본문으로 설정합니다.
    ///
    /// `root`는 XML 표현의 루트 요소 이름으로만 사용됩니다.
    pub fn render<T: Serialize>(
        &self,
        mut builder: HttpResponseBuilder,
        root: &str,
        value: &T,
    ) -> AppResult<HttpResponse> {
        let body = match self {
            Representation::Json => {
                serde_json::to_string(value).context("JSON 직렬화 실패")?
            }
            Representation::Xml => quick_xml::se::to_string_with_root(root, value)
                .with_context(|| format!("XML 직렬화 실패 ({})", root))?,
        };

        Ok(builder.content_type(self.content_type()).body(body))
    }
}
