use std::time::Duration;

use a1_core::error::AppError;
use a1_core::models::{LeadSubmission, ResumeFile};
use a1_core::traits::{CmsSource, LeadSink};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use url::Url;

const LEADS_ENDPOINT: &str = "/leads/contact";

/// CMS transport over reqwest.
///
/// Endpoints are joined onto the base URL verbatim, so `/pages/slug/home`
/// against `https://cms.example.com/api` requests
/// `https://cms.example.com/api/pages/slug/home`.
#[derive(Clone)]
pub struct ReqwestCms {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl ReqwestCms {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid CMS base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::ConfigError(format!(
                "CMS base URL scheme '{}' is not allowed (only http/https)",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("a1-site/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<String, AppError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                AppError::NetworkError(format!("Connection failed: {e}"))
            } else {
                AppError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                endpoint = %endpoint,
                status = status.as_u16(),
                "CMS returned non-success status"
            );
            return Err(AppError::Status {
                status_code: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to read response body: {e}")))
    }
}

impl CmsSource for ReqwestCms {
    async fn fetch(&self, endpoint: &str) -> Result<String, AppError> {
        let request = self.client.get(self.url(endpoint));
        self.send(request, endpoint).await
    }
}

impl LeadSink for ReqwestCms {
    async fn submit(
        &self,
        lead: &LeadSubmission,
        resume: Option<ResumeFile>,
    ) -> Result<(), AppError> {
        let request = self.client.post(self.url(LEADS_ENDPOINT));
        let request = match resume {
            Some(file) => request.multipart(lead_form(lead, file)?),
            None => request.json(lead),
        };
        self.send(request, LEADS_ENDPOINT).await?;
        Ok(())
    }
}

fn lead_form(lead: &LeadSubmission, resume: ResumeFile) -> Result<Form, AppError> {
    let form = lead
        .fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| {
            form.text(name, value.to_string())
        });

    let part = Part::bytes(resume.bytes)
        .file_name(resume.file_name)
        .mime_str(&resume.content_type)
        .map_err(|e| AppError::InvalidLead(format!("Invalid resume content type: {e}")))?;

    Ok(form.part("resume", part))
}
