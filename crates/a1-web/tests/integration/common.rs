use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use a1_core::testutil::{menu_body, page_body, settings_body};
use a1_web::config::SiteConfig;
use a1_web::routes;
use a1_web::state::AppState;

/// `(content-type, body)` of every lead the fake CMS received.
pub type Captured = Arc<Mutex<Vec<(String, Vec<u8>)>>>;

pub struct TestApp {
    pub router: Router,
    pub leads: Captured,
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    pub async fn post(&self, uri: &str, content_type: &str, body: Vec<u8>) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }
}

async fn read(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn home_sections() -> serde_json::Value {
    json!([
        {"id": 4, "section_key": "jobs", "sort_order": 5, "title": "Open Roles"},
        {"id": 3, "section_key": "testimonials", "sort_order": 4, "title": "Client Stories"},
        {"id": 9, "section_key": "mysteryWidget", "sort_order": 3, "title": "Hidden"},
        {"id": 2, "section_key": "stats", "sort_order": 2, "title": "By the numbers",
         "meta": {"items": [{"label": "Placements", "value": "1200"}]}},
        {"id": 7, "section_key": "stats", "sort_order": 2, "title": "By the numbers",
         "meta": {"items": [{"label": "Placements", "value": "9999"}]}},
        {"id": 1, "section_key": "hero", "sort_order": 1, "title": "Welcome",
         "meta": {"badge": "Trusted recruiters",
                  "heading": {"headingTitle": "Hire", "headinghighlight": "Top Talent"}}}
    ])
}

fn service_sections() -> serde_json::Value {
    json!([
        {"id": 1, "section_key": "hero", "sort_order": 1, "title": "Staffing Solutions",
         "meta": {"description": "Flexible teams", "ctaPrimary": "Talk to us"}},
        {"id": 2, "section_key": "service", "sort_order": 2, "title": "Contract Staffing",
         "meta": {"description": "Short term", "features": ["Vetted talent"]}},
        {"id": 3, "section_key": "service", "sort_order": 3, "title": "Permanent Hiring",
         "meta": {"description": "Long term", "features": []}}
    ])
}

async fn cms_page(Path(slug): Path<String>) -> Response {
    match slug.as_str() {
        "home" => axum::Json(page_body("Home", home_sections())).into_response(),
        "about" => axum::Json(page_body("About", json!([]))).into_response(),
        "staffing" => axum::Json(page_body("Staffing", service_sections())).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn cms_jobs(Query(query): Query<HashMap<String, String>>) -> Response {
    let page: i64 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: i64 = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(6);
    axum::Json(json!({
        "data": [{
            "id": 11,
            "title": format!("Rust Engineer p{page}"),
            "company_name": "Ferris Labs",
            "location": "Remote",
            "salary_min": 120000,
            "salary_max": 150000,
            "currency": "USD",
            "is_featured": true,
            "skills": ["Rust", "Tokio"],
            "created_at": "2020-01-01T00:00:00Z"
        }],
        "total": 14,
        "page": page,
        "limit": limit
    }))
    .into_response()
}

async fn cms_blog(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => axum::Json(json!({
            "id": 1,
            "title": "Remote hiring playbook",
            "author": "Grace",
            "badge": "Hiring",
            "created_at": "2025-03-04T10:00:00Z",
            "plain_description": "<p>Start with outcomes</p><script>steal()</script>"
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_fake_cms() -> (String, Captured) {
    let captured: Captured = Arc::default();
    let sink = captured.clone();

    let app = Router::new()
        .route("/pages/slug/{slug}", get(cms_page))
        .route("/menus/findAllWebsiteMenu", get(|| async { axum::Json(menu_body()) }))
        .route(
            "/website-settings",
            get(|| async { axum::Json(settings_body("A1 Selectors")) }),
        )
        .route(
            "/testimonials",
            get(|| async {
                axum::Json(json!([
                    {"id": 1, "message": "They found our CTO in a week.",
                     "author_name": "Jane Doe", "author_designation": "CEO", "company": "Acme"}
                ]))
            }),
        )
        .route("/jobs", get(cms_jobs))
        .route(
            "/blogs",
            get(|| async {
                axum::Json(json!({
                    "status": true,
                    "message": "ok",
                    "result": [
                        {"id": 1, "title": "Remote hiring playbook", "badge": "Hiring",
                         "description": "How to hire remotely"},
                        {"id": 2, "title": "Salary trends", "description": "What pays in 2025"}
                    ]
                }))
            }),
        )
        .route("/blogs/{id}", get(cms_blog))
        .route(
            "/leads/contact",
            post(move |headers: HeaderMap, body: Bytes| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    sink.lock().unwrap().push((content_type, body.to_vec()));
                    StatusCode::CREATED
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}"), captured)
}

fn app_for(config: SiteConfig, leads: Captured) -> TestApp {
    let state = AppState::new(config).expect("valid test config");
    TestApp {
        router: routes::router(Arc::new(state)),
        leads,
    }
}

/// Router wired to a fake CMS serving a small site.
pub async fn setup_test_app() -> TestApp {
    let (base, leads) = spawn_fake_cms().await;
    let mut config = SiteConfig::new(base);
    config.jobs_per_page = 5;
    app_for(config, leads)
}

/// Router whose CMS cannot be reached.
pub fn setup_offline_app() -> TestApp {
    let mut config = SiteConfig::new("http://127.0.0.1:9");
    config.cms_timeout = Duration::from_secs(1);
    app_for(config, Captured::default())
}
