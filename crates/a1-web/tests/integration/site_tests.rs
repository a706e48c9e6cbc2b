use axum::http::StatusCode;

use crate::integration::common::{setup_offline_app, setup_test_app};

// ---------------------------------------------------------------------------
// CMS pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_renders_arranged_sections() {
    let app = setup_test_app().await;
    let (status, html) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Top Talent"));
    assert!(html.contains("1200"));
    assert!(!html.contains("9999"), "duplicate stats section rendered");
    assert!(!html.contains("Hidden"), "unknown section rendered");

    let hero = html.find("Top Talent").unwrap();
    let stats = html.find("1200").unwrap();
    let testimonials = html.find("Client Stories").unwrap();
    let jobs = html.find("Open Roles").unwrap();
    assert!(hero < stats && stats < testimonials && testimonials < jobs);
}

#[tokio::test]
async fn home_renders_chrome_from_cms() {
    let app = setup_test_app().await;
    let (_, html) = app.get("/").await;

    assert!(html.contains("<title>Home | A1</title>"));
    assert!(html.contains("team@example.com"));
    let home = html.find(">Home<").unwrap();
    let services = html.find("<summary>Services</summary>").unwrap();
    assert!(home < services);
    let exec = html.find("Executive Search").unwrap();
    let staffing = html.find(">Staffing<").unwrap();
    assert!(exec < staffing);
}

#[tokio::test]
async fn home_loads_testimonials_and_jobs() {
    let app = setup_test_app().await;
    let (_, html) = app.get("/?page=2").await;

    assert!(html.contains("They found our CTO in a week."));
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("Rust Engineer p2"));
    assert!(html.contains("USD 120k - 150k"));
    assert!(html.contains("<span class=\"current\">2</span>"));
    assert!(html.contains("href=\"/?page=3\""));
}

#[tokio::test]
async fn unknown_slug_renders_not_found() {
    let app = setup_test_app().await;
    let (status, html) = app.get("/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("<title>Page Not Found</title>"));
    assert!(html.contains("A1 Selectors"), "chrome still rendered");
}

#[tokio::test]
async fn empty_page_renders_chrome_only() {
    let app = setup_test_app().await;
    let (status, html) = app.get("/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("site-nav"));
    assert!(html.contains("site-footer"));
    assert!(!html.contains("class=\"section"));
}

#[tokio::test]
async fn offline_cms_falls_back_to_defaults() {
    let app = setup_offline_app();
    let (status, html) = app.get("/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("TalentConnect"));
}

#[tokio::test]
async fn service_page_renders_hero_and_blocks() {
    let app = setup_test_app().await;
    let (status, html) = app.get("/services/staffing").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Staffing Solutions"));
    assert!(html.contains("Talk to us"));
    assert!(html.contains("Vetted talent"));
    assert_eq!(html.matches("service-block reverse").count(), 1);

    let (status, html) = app.get("/services/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("No data found"));
}

// ---------------------------------------------------------------------------
// Blogs and jobs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blogs_are_filtered() {
    let app = setup_test_app().await;

    let (status, html) = app.get("/blogs?q=SALARY").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Salary trends"));
    assert!(!html.contains("Remote hiring playbook"));

    let (_, html) = app.get("/blogs?category=Hiring").await;
    assert!(html.contains("Remote hiring playbook"));
    assert!(!html.contains("Salary trends"));
}

#[tokio::test]
async fn blog_detail_and_missing_blog() {
    let app = setup_test_app().await;

    let (status, html) = app.get("/blogs/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Start with outcomes"));
    assert!(!html.contains("steal()"));
    assert!(html.contains("/assets/placeholder.svg"));

    let (status, html) = app.get("/blogs/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Blog not found."));

    let (status, _) = app.get("/blogs/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn jobs_page_clamps_page_number() {
    let app = setup_test_app().await;
    let (status, html) = app.get("/jobs?page=0").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Rust Engineer p1"));
    assert!(html.contains("<span class=\"current\">1</span>"));
    assert!(html.contains("href=\"/jobs?page=3\""));
    assert!(!html.contains("href=\"/jobs?page=4\""));
}

#[tokio::test]
async fn malformed_page_query_falls_back_to_first_page() {
    let app = setup_test_app().await;

    let (status, html) = app.get("/?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Rust Engineer p1"));
    assert!(html.contains("<span class=\"current\">1</span>"));

    let (status, html) = app.get("/jobs?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Rust Engineer p1"));
    assert!(html.contains("<span class=\"current\">1</span>"));
}

// ---------------------------------------------------------------------------
// Lead forms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_form_forwards_json_lead() {
    let app = setup_test_app().await;
    let (status, html) = app
        .post(
            "/contact",
            "application/x-www-form-urlencoded",
            b"first_name=Ada&email=ada%40example.com&company_name=Acme".to_vec(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("banner-success"));

    let leads = app.leads.lock().unwrap().clone();
    assert_eq!(leads.len(), 1);
    assert!(leads[0].0.starts_with("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&leads[0].1).unwrap();
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["company_name"], "Acme");
    assert_eq!(body["source"], "Website – Contact Page");
}

#[tokio::test]
async fn contact_form_rejects_missing_email() {
    let app = setup_test_app().await;
    let (status, html) = app
        .post(
            "/contact",
            "application/x-www-form-urlencoded",
            b"first_name=Ada".to_vec(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("banner-error"));
    assert!(html.contains("email is required"));
    assert!(app.leads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn jobseeker_form_forwards_resume_as_multipart() {
    let app = setup_test_app().await;
    let boundary = "a1testboundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"first_name\"\r\n\r\nGrace\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"email\"\r\n\r\ngrace@example.com\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n%PDF-1.4 resume\r\n\
         --{b}--\r\n",
        b = boundary
    );
    let (status, html) = app
        .post(
            "/jobseekers",
            &format!("multipart/form-data; boundary={boundary}"),
            body.into_bytes(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("banner-success"));

    let leads = app.leads.lock().unwrap().clone();
    assert_eq!(leads.len(), 1);
    assert!(leads[0].0.starts_with("multipart/form-data"));
    let sent = String::from_utf8_lossy(&leads[0].1);
    assert!(sent.contains("cv.pdf"));
    assert!(sent.contains("%PDF-1.4 resume"));
    assert!(sent.contains("Website – jobseekers Page"));
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_page_plan_is_arranged() {
    let app = setup_test_app().await;
    let (status, body) = app.get("/api/pages/home").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let ids: Vec<i64> = json["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 9, 3, 4]);
    assert_eq!(json["sections"][2]["kind"], "unknown(mysteryWidget)");
    assert_eq!(json["meta_title"], "Home | A1");
}

#[tokio::test]
async fn api_page_plan_missing_page_is_404() {
    let app = setup_test_app().await;
    let (status, body) = app.get("/api/pages/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn api_leads_validate_and_forward() {
    let app = setup_test_app().await;

    let (status, body) = app
        .post(
            "/api/leads",
            "application/json",
            br#"{"first_name": "Ada", "email": "not-an-email"}"#.to_vec(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "validation_error");

    let (status, _) = app
        .post(
            "/api/leads",
            "application/json",
            br#"{"first_name": "Ada", "email": "ada@example.com"}"#.to_vec(),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let leads = app.leads.lock().unwrap().clone();
    let sent: serde_json::Value = serde_json::from_slice(&leads[0].1).unwrap();
    assert_eq!(sent["source"], "API");
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_200() {
    let app = setup_offline_app();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn stylesheet_and_openapi_are_served() {
    let app = setup_offline_app();

    let (status, css) = app.get("/assets/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(css.contains(".section-head"));

    let (status, doc) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc.contains("/api/pages/{slug}"));
    assert!(doc.contains("/api/leads"));
}
