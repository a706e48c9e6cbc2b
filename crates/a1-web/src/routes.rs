use std::sync::Arc;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Form, Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use chrono::Utc;
use serde::Deserialize;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use a1_core::error::AppError;
use a1_core::models::ResumeFile;

use crate::dto::{ErrorResponse, HealthResponse, LeadRequest, LeadResponse, PagePlanResponse};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::loader::{JobsWindow, load_section_env};
use crate::render::{self, Banner, SiteChrome};
use crate::state::AppState;
use crate::styles::{PLACEHOLDER_SVG, SITE_CSS};

/// Upper bound for any request body, resume uploads included.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub const CONTACT_SOURCE: &str = "Website – Contact Page";
pub const JOBSEEKER_SOURCE: &str = "Website – jobseekers Page";
pub const API_SOURCE: &str = "API";

const LEAD_THANKS: &str = "Thank you! Our team will get back to you shortly.";
const LEAD_FAILED: &str = "We could not send your details right now. Please try again later.";

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    let site = Router::new()
        .route("/", get(home))
        .route("/{slug}", get(page))
        .route("/services/{slug}", get(service_page))
        .route("/blogs", get(blogs))
        .route("/blogs/{id}", get(blog))
        .route("/jobs", get(jobs))
        .route("/contact", get(contact).post(submit_contact))
        .route("/jobseekers", get(jobseekers).post(submit_jobseeker))
        .route("/assets/site.css", get(stylesheet))
        .route("/assets/placeholder.svg", get(placeholder))
        .nest_service("/static", static_files);

    let api = Router::new()
        .route("/api/pages/{slug}", get(page_plan))
        .route("/api/leads", post(create_lead))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    site.merge(api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

fn html(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

// ---------------------------------------------------------------------------
// CMS pages
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Job listing page, for pages with a jobs section. Kept raw so a
    /// malformed value falls back to page 1 instead of rejecting the request.
    pub page: Option<String>,
}

impl PageQuery {
    /// Requested page number, at least 1.
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1)
    }
}

async fn home(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    render_cms_page(&state, "home", "/".to_string(), query).await
}

async fn page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let jobs_path = format!("/{slug}");
    render_cms_page(&state, &slug, jobs_path, query).await
}

async fn render_cms_page(
    state: &AppState,
    slug: &str,
    jobs_path: String,
    query: PageQuery,
) -> Response {
    let (page, chrome) = tokio::join!(state.site.page(slug), state.site.chrome());
    let chrome = SiteChrome::from_chrome(chrome, Utc::now());

    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => return html(StatusCode::NOT_FOUND, render::render_not_found(chrome)),
        Err(e) => {
            tracing::error!(slug = %slug, error = %e, "Page fetch failed");
            return html(StatusCode::NOT_FOUND, render::render_not_found(chrome));
        }
    };

    let jobs = JobsWindow {
        page: query.page_number(),
        per_page: state.config.jobs_per_page,
        path: jobs_path,
    };
    let env = load_section_env(&state.site, &page, state.images.clone(), jobs).await;
    html(StatusCode::OK, render::render_page(&page, chrome, &env))
}

async fn service_page(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let (page, chrome) = tokio::join!(state.site.service_page(&slug), state.site.chrome());
    let chrome = SiteChrome::from_chrome(chrome, Utc::now());
    let status = if page.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    html(
        status,
        render::render_service_page(page.as_ref(), chrome, &state.images),
    )
}

// ---------------------------------------------------------------------------
// Blogs
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

async fn blogs(State(state): State<Arc<AppState>>, Query(query): Query<BlogQuery>) -> Response {
    let (blogs, chrome) = tokio::join!(state.site.blogs(), state.site.chrome());
    let chrome = SiteChrome::from_chrome(chrome, Utc::now());
    let body = render::render_blogs(
        blogs.into_ready(),
        query.q.as_deref().unwrap_or(""),
        query.category.as_deref().unwrap_or("All"),
        chrome,
        &state.images,
    );
    html(StatusCode::OK, body)
}

async fn blog(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let chrome_fut = state.site.chrome();
    let (blog, chrome) = match id.parse::<i64>() {
        Ok(id) => tokio::join!(state.site.blog(id), chrome_fut),
        Err(_) => (Ok(None), chrome_fut.await),
    };
    let chrome = SiteChrome::from_chrome(chrome, Utc::now());

    let blog = blog.unwrap_or_else(|e| {
        tracing::error!(id = %id, error = %e, "Blog fetch failed");
        None
    });
    let status = if blog.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    html(status, render::render_blog(blog, chrome, &state.images))
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

async fn jobs(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    let page = query.page_number();
    let (jobs, chrome) = tokio::join!(
        state.site.jobs(page, state.config.jobs_per_page),
        state.site.chrome()
    );
    let now = Utc::now();
    let chrome = SiteChrome::from_chrome(chrome, now);
    html(
        StatusCode::OK,
        render::render_jobs_page(jobs.into_ready(), chrome, now),
    )
}

// ---------------------------------------------------------------------------
// Lead forms
// ---------------------------------------------------------------------------

async fn chrome(state: &AppState) -> SiteChrome {
    SiteChrome::from_chrome(state.site.chrome().await, Utc::now())
}

/// Status and banner for the outcome of a lead submission.
fn lead_outcome(result: Result<(), AppError>) -> (StatusCode, Banner) {
    match result {
        Ok(()) => (StatusCode::OK, Banner::Success(LEAD_THANKS.to_string())),
        Err(AppError::InvalidLead(reason)) => (StatusCode::BAD_REQUEST, Banner::Error(reason)),
        Err(e) => {
            tracing::error!(error = %e, "Lead submission failed");
            (StatusCode::BAD_GATEWAY, Banner::Error(LEAD_FAILED.to_string()))
        }
    }
}

async fn contact(State(state): State<Arc<AppState>>) -> Response {
    html(StatusCode::OK, render::render_contact(chrome(&state).await, None))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LeadRequest>,
) -> Response {
    let lead = form.into_lead(CONTACT_SOURCE);
    let (result, chrome) = tokio::join!(state.site.submit_lead(&lead, None), chrome(&state));
    let (status, banner) = lead_outcome(result);
    html(status, render::render_contact(chrome, Some(banner)))
}

async fn jobseekers(State(state): State<Arc<AppState>>) -> Response {
    html(
        StatusCode::OK,
        render::render_jobseekers(chrome(&state).await, None),
    )
}

async fn submit_jobseeker(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let (status, banner) = match read_jobseeker_form(multipart).await {
        Ok((form, resume)) => {
            let lead = form.into_lead(JOBSEEKER_SOURCE);
            lead_outcome(state.site.submit_lead(&lead, resume).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Malformed job-seeker form");
            (
                StatusCode::BAD_REQUEST,
                Banner::Error("The form could not be read. Please try again.".to_string()),
            )
        }
    };
    html(status, render::render_jobseekers(chrome(&state).await, Some(banner)))
}

/// Text fields plus the optional `resume` file part.
async fn read_jobseeker_form(
    mut multipart: Multipart,
) -> Result<(LeadRequest, Option<ResumeFile>), axum::extract::multipart::MultipartError> {
    let mut form = LeadRequest::default();
    let mut resume = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "resume" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field.bytes().await?;
            // Browsers send an empty part when no file was chosen.
            if !file_name.is_empty() && !bytes.is_empty() {
                resume = Some(ResumeFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field.text().await?;
            form.set_field(&name, value);
        }
    }

    Ok((form, resume))
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

async fn placeholder() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/pages/{slug}",
    params(("slug" = String, Path, description = "CMS page slug")),
    responses(
        (status = 200, description = "Arranged and dispatched sections", body = PagePlanResponse),
        (status = 404, description = "No such page", body = ErrorResponse),
        (status = 502, description = "CMS unavailable", body = ErrorResponse),
    ),
    tag = "pages"
)]
pub async fn page_plan(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<axum::Json<PagePlanResponse>, ApiError> {
    let page = state
        .site
        .page(&slug)
        .await?
        .ok_or_else(|| AppError::DataAbsent(format!("page '{slug}'")))?;
    Ok(axum::Json(PagePlanResponse::from(&page)))
}

#[utoipa::path(
    post,
    path = "/api/leads",
    request_body = LeadRequest,
    responses(
        (status = 201, description = "Lead forwarded to the CMS", body = LeadResponse),
        (status = 400, description = "Invalid lead", body = ErrorResponse),
        (status = 502, description = "CMS rejected or unreachable", body = ErrorResponse),
    ),
    tag = "leads"
)]
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<LeadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let lead = body.into_lead(API_SOURCE);
    state.site.submit_lead(&lead, None).await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(LeadResponse {
            status: "accepted".to_string(),
            message: LEAD_THANKS.to_string(),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, axum::Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(String::from),
        }
    }

    #[test]
    fn test_page_number_is_lenient() {
        assert_eq!(query(None).page_number(), 1);
        assert_eq!(query(Some("3")).page_number(), 3);
        assert_eq!(query(Some(" 2 ")).page_number(), 2);
        assert_eq!(query(Some("abc")).page_number(), 1);
        assert_eq!(query(Some("")).page_number(), 1);
        assert_eq!(query(Some("0")).page_number(), 1);
        assert_eq!(query(Some("-4")).page_number(), 1);
    }
}
