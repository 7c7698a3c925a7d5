//! # User Resource HTTP Handlers
//!
//! 사용자 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 요청 추출, 표현 협상, 상태 코드와 헤더 구성만 담당하고
//! 비즈니스 규칙은 [`UserService`]에 위임합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET`, `HEAD` | `/api/users/{id}` | 사용자 조회 | 200 / 404 |
//! | `GET` | `/api/users?pageNumber=&pageSize=` | 목록 조회 (`X-Pagination`) | 200 |
//! | `POST` | `/api/users` | 사용자 생성 | 201 / 400 / 422 |
//! | `PUT` | `/api/users/{id}` | 업서트 | 201 / 204 / 400 / 422 |
//! | `PATCH` | `/api/users/{id}` | JSON Patch 부분 갱신 | 204 / 400 / 404 / 422 |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 | 204 / 404 |
//! | `OPTIONS` | `/api/users` | 허용 메서드 조회 | 200 |
//!
//! ## 요청 본문
//!
//! 본문은 `web::Json<Option<T>>`로 추출합니다. JSON `null` 본문은 `None`이 되어 400으로,
//! 파싱 실패는 라우트에 등록된 `JsonConfig` 에러 핸들러를 거쳐 400으로 처리됩니다.
//!
//! ## 응답 표현
//!
//! 성공 응답 본문은 `Accept` 헤더에 따라 JSON 또는 XML로 렌더링됩니다
//! ([`Representation`]). 에러 본문은 항상 JSON입니다.
//!
//! ```bash
//! curl -i http://localhost:8080/api/users?pageNumber=2&pageSize=5
//! curl -i -H "Accept: application/xml" http://localhost:8080/api/users/{id}
//! curl -i -X PATCH http://localhost:8080/api/users/{id} \
//!   -H "Content-Type: application/json-patch+json" \
//!   -d '[{"op":"replace","path":"/login","value":"johnny"}]'
//! ```

use actix_web::http::{header, Method};
use actix_web::{delete, get, patch, post, put, route, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::representation::Representation;
use crate::domain::dto::common::{PageRequest, PaginationHeader};
use crate::domain::dto::users::request::{PatchOperation, UserCreateDto, UserUpdateDto};
use crate::domain::dto::users::response::{UpsertedUserDto, UserDtoArray, UserXml};
use crate::services::users::{UpsertOutcome, UserService};
use crate::utils::string_utils::deserialize_lenient_i64;

pub const PAGINATION_HEADER: &str = "X-Pagination";
pub const ALLOWED_METHODS: &str = "POST, GET, OPTIONS";

/// 목록 조회 쿼리 파라미터
///
/// 정수로 해석할 수 없는 값은 무시되고 기본값이 사용됩니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page_number: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page_size: Option<i64>,
}

/// ID로 사용자 조회 (`GET`, `HEAD`)
///
/// `HEAD` 요청은 본문 없이 협상된 `Content-Type`과 200만 반환합니다.
#[route("/{user_id}", method = "GET", method = "HEAD")]
pub async fn get_user_by_id(
    req: HttpRequest,
    user_id: web::Path<Uuid>,
    service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    let user = service.find_user(user_id.into_inner()).await?;
    let representation = Representation::negotiate(&req);

    if *req.method() == Method::HEAD {
        return Ok(HttpResponse::Ok()
            .content_type(representation.content_type())
            .finish());
    }

    match representation {
        Representation::Json => representation.render(HttpResponse::Ok(), "UserDto", &user),
        Representation::Xml => {
            representation.render(HttpResponse::Ok(), "UserDto", &UserXml::from(&user))
        }
    }
}

/// 사용자 목록 페이지 조회
///
/// `X-Pagination` 헤더에 이전/다음 페이지의 절대 링크와 페이지 메타데이터를 담습니다.
#[get("")]
pub async fn get_users(
    req: HttpRequest,
    query: web::Query<UserListQuery>,
    service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let request = PageRequest::normalized(query.page_number, query.page_size);
    let page = service.list_users(request).await?;

    let base_url = req
        .url_for_static("get_users")
        .context("목록 링크 생성 실패")?;
    let pagination = PaginationHeader::for_page(&page, |page_number| {
        let mut url = base_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("pageNumber", &page_number.to_string())
            .append_pair("pageSize", &page.page_size.to_string());
        url.to_string()
    });
    let pagination = serde_json::to_string(&pagination).context("페이지네이션 헤더 직렬화 실패")?;

    let mut builder = HttpResponse::Ok();
    builder.insert_header((PAGINATION_HEADER, pagination));

    let representation = Representation::negotiate(&req);
    match representation {
        Representation::Json => representation.render(builder, "ArrayOfUserDto", &page.items),
        Representation::Xml => representation.render(
            builder,
            "ArrayOfUserDto",
            &UserDtoArray::new(&page.items),
        ),
    }
}

/// 사용자 생성
///
/// 성공 시 201과 함께 `Location` 헤더(조회 URL)와 새 ID를 본문으로 반환합니다.
#[post("")]
pub async fn create_user(
    req: HttpRequest,
    payload: web::Json<Option<UserCreateDto>>,
    service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    let request = payload
        .into_inner()
        .ok_or_else(|| AppError::BadRequest("사용자 생성 요청 본문이 비어 있습니다".to_string()))?;

    let user_id = service.create_user(request).await?;

    created_at_user(&req, user_id, "guid", &user_id)
}

/// 사용자 업서트
///
/// 존재하던 사용자를 갱신하면 204, 요청 ID로 새로 생성하면 201과 `{"guid": id}` 본문을 반환합니다.
#[put("/{user_id}")]
pub async fn upsert_user(
    req: HttpRequest,
    user_id: web::Path<Uuid>,
    payload: web::Json<Option<UserUpdateDto>>,
    service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    let user_id = user_id.into_inner();
    let request = payload
        .into_inner()
        .ok_or_else(|| AppError::BadRequest("사용자 갱신 요청 본문이 비어 있습니다".to_string()))?;

    match service.upsert_user(user_id, request).await? {
        UpsertOutcome::Created => created_at_user(
            &req,
            user_id,
            "UpsertedUserDto",
            &UpsertedUserDto { guid: user_id },
        ),
        UpsertOutcome::Updated => Ok(HttpResponse::NoContent().finish()),
    }
}

/// JSON Patch로 사용자 부분 갱신
#[patch("/{user_id}")]
pub async fn partially_update_user(
    user_id: web::Path<Uuid>,
    payload: web::Json<Option<Vec<PatchOperation>>>,
    service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    let operations = payload
        .into_inner()
        .ok_or_else(|| AppError::BadRequest("패치 문서가 비어 있습니다".to_string()))?;

    service
        .patch_user(user_id.into_inner(), &operations)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<Uuid>,
    service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    service.delete_user(user_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// 컬렉션에서 허용되는 메서드 목록
#[route("", method = "OPTIONS")]
pub async fn get_users_options() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .finish()
}

/// 201 Created 응답: `Location`은 조회 엔드포인트, 본문은 `root` 아래의 `body`
fn created_at_user<T: Serialize>(
    req: &HttpRequest,
    user_id: Uuid,
    root: &str,
    body: &T,
) -> AppResult<HttpResponse> {
    let location = req
        .url_for("get_user_by_id", [user_id.to_string()])
        .with_context(|| format!("사용자 {} 조회 링크 생성 실패", user_id))?;

    let mut builder = HttpResponse::Created();
    builder.insert_header((header::LOCATION, location.to_string()));

    Representation::negotiate(req).render(builder, root, body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::domain::entities::users::UserEntity;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::routes::configure_all_routes;

    fn user(login: &str) -> UserEntity {
        UserEntity {
            id: Uuid::new_v4(),
            login: login.to_string(),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
        }
    }

    fn service_with(users: Vec<UserEntity>) -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(
            InMemoryUserRepository::with_users(users),
        )))
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data($service.clone())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_user_by_id() {
        let existing = user("john");
        let service = service_with(vec![existing.clone()]);
        let app = app!(service);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", existing.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["login"], "john");
        assert_eq!(body["fullName"], "Doe John");
    }

    #[actix_web::test]
    async fn test_get_missing_or_malformed_id_is_not_found() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get()
            .uri("/api/users/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_head_sets_content_type_without_body() {
        let existing = user("john");
        let service = service_with(vec![existing.clone()]);
        let app = app!(service);

        let req = test::TestRequest::default()
            .method(Method::HEAD)
            .uri(&format!("/api/users/{}", existing.id))
            .insert_header((header::ACCEPT, "application/xml"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml; charset=utf-8"
        );
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn test_get_user_as_xml() {
        let existing = user("john");
        let service = service_with(vec![existing.clone()]);
        let app = app!(service);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", existing.id))
            .insert_header((header::ACCEPT, "application/xml"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let xml = std::str::from_utf8(&body).unwrap();
        assert!(xml.starts_with("<UserDto>"));
        assert!(xml.contains("<login>john</login>"));
    }

    #[actix_web::test]
    async fn test_get_users_pagination_header() {
        let users = (0..25).map(|i| user(&format!("user{:02}", i))).collect();
        let service = service_with(users);
        let app = app!(service);

        let req = test::TestRequest::get()
            .uri("/api/users?pageNumber=2&pageSize=10")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let header_value = resp
            .headers()
            .get(PAGINATION_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let pagination: Value = serde_json::from_str(&header_value).unwrap();

        assert_eq!(pagination["totalCount"], 25);
        assert_eq!(pagination["pageSize"], 10);
        assert_eq!(pagination["currentPage"], 2);
        assert_eq!(pagination["totalPages"], 3);
        let previous = pagination["previousPageLink"].as_str().unwrap();
        let next = pagination["nextPageLink"].as_str().unwrap();
        assert!(previous.starts_with("http://"));
        assert!(previous.ends_with("/api/users?pageNumber=1&pageSize=10"));
        assert!(next.ends_with("/api/users?pageNumber=3&pageSize=10"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 10);
        assert_eq!(body[0]["login"], "user10");
    }

    #[actix_web::test]
    async fn test_get_users_normalizes_query() {
        let service = service_with(vec![user("only")]);
        let app = app!(service);

        let req = test::TestRequest::get()
            .uri("/api/users?pageNumber=0&pageSize=100")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let pagination: Value =
            serde_json::from_slice(resp.headers().get(PAGINATION_HEADER).unwrap().as_bytes())
                .unwrap();
        assert_eq!(pagination["currentPage"], 1);
        assert_eq!(pagination["pageSize"], 20);
        assert!(pagination["previousPageLink"].is_null());
        assert!(pagination["nextPageLink"].is_null());

        let req = test::TestRequest::get()
            .uri("/api/users?pageNumber=abc&pageSize=")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let pagination: Value =
            serde_json::from_slice(resp.headers().get(PAGINATION_HEADER).unwrap().as_bytes())
                .unwrap();
        assert_eq!(pagination["currentPage"], 1);
        assert_eq!(pagination["pageSize"], 10);
    }

    #[actix_web::test]
    async fn test_create_user() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"login": "ivan"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let id: Uuid = test::read_body_json(resp).await;
        assert!(location.ends_with(&format!("/api/users/{}", id)));

        let created = service.find_user(id).await.unwrap();
        assert_eq!(created.login, "ivan");
        assert_eq!(created.first_name.as_deref(), Some("John"));
        assert_eq!(created.last_name.as_deref(), Some("Doe"));
    }

    #[actix_web::test]
    async fn test_create_user_bad_request_and_unprocessable() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("null")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"firstName": "NoLogin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["Login"].is_array());

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"login": "john.doe"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"Login": ["Login should contain only letters or digits"]}));
    }

    #[actix_web::test]
    async fn test_upsert_user_creates_then_updates() {
        let service = service_with(vec![]);
        let app = app!(service);
        let id = Uuid::new_v4();

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(json!({"login": "created"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(resp.headers().contains_key(header::LOCATION));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"guid": id}));

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(json!({"login": "updated", "lastName": "Smith"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let stored = service.find_user(id).await.unwrap();
        assert_eq!(stored.login, "updated");
        assert_eq!(stored.last_name.as_deref(), Some("Smith"));
        assert_eq!(stored.first_name, None);
    }

    #[actix_web::test]
    async fn test_upsert_and_create_bodies_differ_in_xml() {
        let service = service_with(vec![]);
        let app = app!(service);
        let id = Uuid::new_v4();

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .insert_header((header::ACCEPT, "application/xml"))
            .set_json(json!({"login": "created"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            format!("<UpsertedUserDto><guid>{}</guid></UpsertedUserDto>", id)
        );

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header((header::ACCEPT, "application/xml"))
            .set_json(json!({"login": "posted"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = test::read_body(resp).await;
        let xml = std::str::from_utf8(&body).unwrap();
        assert!(xml.starts_with("<guid>"));
        assert!(!xml.contains("UpsertedUserDto"));
    }

    #[actix_web::test]
    async fn test_get_user_as_xml_omits_missing_names() {
        let mut existing = user("john");
        existing.first_name = None;
        existing.last_name = Some(String::new());
        let service = service_with(vec![existing.clone()]);
        let app = app!(service);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", existing.id))
            .insert_header((header::ACCEPT, "application/xml"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        let xml = std::str::from_utf8(&body).unwrap();
        assert!(!xml.contains("firstName"));
        assert!(xml.contains("lastName"));

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", existing.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["firstName"].is_null());
        assert_eq!(body["lastName"], "");
    }

    #[actix_web::test]
    async fn test_mistyped_body_field_is_bad_request() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"login": 5}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(test::read_body(resp).await.is_empty());
        assert_eq!(service.count_users().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_upsert_user_rejections() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", Uuid::nil()))
            .set_json(json!({"login": "nobody"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", Uuid::new_v4()))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("null")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", Uuid::new_v4()))
            .set_json(json!({"login": "bad login"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_delete_user() {
        let existing = user("john");
        let service = service_with(vec![existing.clone()]);
        let app = app!(service);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", existing.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", existing.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", Uuid::nil()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_partially_update_user() {
        let existing = user("john");
        let service = service_with(vec![existing.clone()]);
        let app = app!(service);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}", existing.id))
            .insert_header((header::CONTENT_TYPE, "application/json-patch+json"))
            .set_payload(r#"[{"op": "replace", "path": "/login", "value": "johnny"}]"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let patched = service.find_user(existing.id).await.unwrap();
        assert_eq!(patched.login, "johnny");
        assert_eq!(patched.first_name.as_deref(), Some("John"));
    }

    #[actix_web::test]
    async fn test_partially_update_user_failures() {
        let existing = user("john");
        let service = service_with(vec![existing.clone()]);
        let app = app!(service);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}", existing.id))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("null")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}", Uuid::new_v4()))
            .set_json(json!([{"op": "replace", "path": "/login", "value": "x"}]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}", existing.id))
            .set_json(json!([{"op": "replace", "path": "/email", "value": "x@y.z"}]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["Patch"].is_array());

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}", existing.id))
            .set_json(json!([{"op": "replace", "path": "/login", "value": "not valid"}]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(service.find_user(existing.id).await.unwrap().login, "john");
    }

    #[actix_web::test]
    async fn test_options_lists_allowed_methods() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/users")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ALLOW).unwrap(),
            "POST, GET, OPTIONS"
        );
    }
}
