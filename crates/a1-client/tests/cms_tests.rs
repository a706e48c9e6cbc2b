//! ReqwestCms against a throwaway axum server standing in for the CMS.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use a1_client::ReqwestCms;
use a1_core::error::AppError;
use a1_core::models::{LeadSubmission, ResumeFile};
use a1_core::traits::{CmsSource, LeadSink};
use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};

type Captured = Arc<Mutex<Vec<(String, Vec<u8>)>>>;

async fn spawn_fake_cms() -> anyhow::Result<(String, Captured)> {
    let captured: Captured = Arc::default();
    let sink = captured.clone();

    let app = Router::new()
        .route(
            "/pages/slug/home",
            get(|| async {
                axum::Json(serde_json::json!({
                    "data": {"result": {"title": "Home", "sections": []}}
                }))
            }),
        )
        .route("/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "late"
            }),
        )
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

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{addr}"), captured))
}

fn lead() -> LeadSubmission {
    LeadSubmission {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        source: "Website – jobseekers Page".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn fetch_returns_body() {
    let (base, _) = spawn_fake_cms().await.unwrap();
    let cms = ReqwestCms::new(&base).unwrap();

    let body = cms.fetch("/pages/slug/home").await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["result"]["title"], "Home");
}

#[tokio::test]
async fn non_success_maps_to_status_error() {
    let (base, _) = spawn_fake_cms().await.unwrap();
    let cms = ReqwestCms::new(&base).unwrap();

    match cms.fetch("/boom").await {
        Err(AppError::Status {
            status_code,
            endpoint,
        }) => {
            assert_eq!(status_code, 500);
            assert_eq!(endpoint, "/boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    let missing = cms.fetch("/pages/slug/missing").await.unwrap_err();
    assert!(missing.is_not_found());
}

#[tokio::test]
async fn slow_cms_times_out() {
    let (base, _) = spawn_fake_cms().await.unwrap();
    let cms = ReqwestCms::with_timeout(&base, Duration::from_secs(1)).unwrap();

    let err = cms.fetch("/slow").await.unwrap_err();
    assert!(matches!(err, AppError::Timeout(1)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_cms_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    let cms = ReqwestCms::new(&format!("http://{addr}")).unwrap();
    let err = cms.fetch("/menus/findAllWebsiteMenu").await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn lead_without_resume_is_json() {
    let (base, captured) = spawn_fake_cms().await.unwrap();
    let cms = ReqwestCms::new(&base).unwrap();

    cms.submit(&lead(), None).await.unwrap();

    let captured = captured.lock().unwrap();
    let (content_type, body) = &captured[0];
    assert!(content_type.starts_with("application/json"));
    let json: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(json["first_name"], "Ada");
    assert_eq!(json["source"], "Website – jobseekers Page");
}

#[tokio::test]
async fn lead_with_resume_is_multipart() {
    let (base, captured) = spawn_fake_cms().await.unwrap();
    let cms = ReqwestCms::new(&base).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"%PDF-1.4 resume").unwrap();
    let resume = ResumeFile {
        file_name: "ada.pdf".into(),
        content_type: "application/pdf".into(),
        bytes: tokio::fs::read(file.path()).await.unwrap(),
    };

    cms.submit(&lead(), Some(resume)).await.unwrap();

    let captured = captured.lock().unwrap();
    let (content_type, body) = &captured[0];
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(body);
    assert!(body.contains("name=\"first_name\""));
    assert!(body.contains("Ada"));
    assert!(body.contains("name=\"resume\"; filename=\"ada.pdf\""));
    assert!(body.contains("%PDF-1.4 resume"));
}
