use std::future::Future;

use crate::error::AppError;
use crate::models::{LeadSubmission, ResumeFile};

/// Fetches raw JSON bodies from the CMS.
///
/// `endpoint` is a path relative to the CMS base URL, including any query
/// string (e.g. `/jobs?page=2&limit=6`).
pub trait CmsSource: Send + Sync + Clone {
    fn fetch(&self, endpoint: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Forwards captured leads to the CMS.
pub trait LeadSink: Send + Sync + Clone {
    /// Submit a lead, as multipart when a resume is attached.
    fn submit(
        &self,
        lead: &LeadSubmission,
        resume: Option<ResumeFile>,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}
