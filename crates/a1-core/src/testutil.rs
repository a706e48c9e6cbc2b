//! Test utilities: handwritten mocks of the CMS transport traits.
//!
//! Mocks use `Arc<Mutex<_>>` so tests can assert on recorded calls after
//! handing a clone to the code under test.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AppError;
use crate::models::{LeadSubmission, ResumeFile};
use crate::traits::{CmsSource, LeadSink};

// ---------------------------------------------------------------------------
// MockCms
// ---------------------------------------------------------------------------

/// Serves canned bodies per endpoint and records every call.
///
/// Endpoints with no canned response answer with a 404 status error.
#[derive(Clone, Default)]
pub struct MockCms {
    responses: Arc<Mutex<HashMap<String, Result<String, AppError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

impl MockCms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, endpoint: &str, body: serde_json::Value) -> Self {
        self.set_json(endpoint, body);
        self
    }

    pub fn with_error(self, endpoint: &str, error: AppError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Err(error));
        self
    }

    /// Sleep this long inside every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the canned body for an endpoint after construction.
    pub fn set_json(&self, endpoint: &str, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Ok(body.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == endpoint)
            .count()
    }
}

impl CmsSource for MockCms {
    async fn fetch(&self, endpoint: &str) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(endpoint.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let responses = self.responses.lock().unwrap();
        match responses.get(endpoint) {
            Some(response) => response.clone(),
            None => Err(AppError::Status {
                status_code: 404,
                endpoint: endpoint.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// MockLeadSink
// ---------------------------------------------------------------------------

/// Records submitted leads; optionally fails every submission.
#[derive(Clone, Default)]
pub struct MockLeadSink {
    submitted: Arc<Mutex<Vec<(LeadSubmission, Option<ResumeFile>)>>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MockLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(error: AppError) -> Self {
        Self {
            submitted: Arc::default(),
            error: Arc::new(Mutex::new(Some(error))),
        }
    }

    pub fn submitted(&self) -> Vec<(LeadSubmission, Option<ResumeFile>)> {
        self.submitted.lock().unwrap().clone()
    }
}

impl LeadSink for MockLeadSink {
    async fn submit(
        &self,
        lead: &LeadSubmission,
        resume: Option<ResumeFile>,
    ) -> Result<(), AppError> {
        if let Some(err) = self.error.lock().unwrap().clone() {
            return Err(err);
        }
        self.submitted.lock().unwrap().push((lead.clone(), resume));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A `{data:{result:Page}}` body with the given sections.
pub fn page_body(title: &str, sections: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "result": {
                "id": 1,
                "title": title,
                "meta_title": format!("{title} | A1"),
                "meta_description": format!("{title} page"),
                "sections": sections
            }
        }
    })
}

/// A `{status,message,result}` settings body.
pub fn settings_body(site_name: &str) -> serde_json::Value {
    serde_json::json!({
        "status": true,
        "message": "ok",
        "result": {"site_name": site_name, "email": "team@example.com"}
    })
}

/// A two-level menu, deliberately out of order.
pub fn menu_body() -> serde_json::Value {
    serde_json::json!({
        "result": [
            {"id": 2, "title": "Services", "url": "/services", "position": 2, "children": [
                {"id": 21, "title": "Staffing", "url": "/services/staffing", "position": 2},
                {"id": 20, "title": "Executive Search", "url": "/services/executive-search", "position": 1}
            ]},
            {"id": 1, "title": "Home", "url": "/", "position": 1, "children": []}
        ]
    })
}
