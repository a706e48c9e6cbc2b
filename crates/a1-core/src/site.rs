//! `SiteService`: the one facade renderers and routes use to read the CMS.
//!
//! Page-level reads return `Result<Option<T>, AppError>` so the caller can
//! tell "nothing here" (render 404) apart from "CMS unreachable". Chrome and
//! secondary reads return [`Loaded<T>`] and never fail the page.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::cache::{CachePolicy, CmsCache};
use crate::error::AppError;
use crate::menu::sorted_menu;
use crate::models::{
    Blog, JobList, LeadSubmission, MenuEnvelope, MenuItem, Page, PageEnvelope, ResumeFile,
    StatusEnvelope, Testimonial, WebsiteSettings,
};
use crate::traits::{CmsSource, LeadSink};

/// Outcome of a fetch whose failure must not break the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Ready(T),
    Failed(String),
}

impl<T> Loaded<T> {
    /// Wrap a result, logging the failure at `warn`.
    pub fn from_result(result: Result<T, AppError>, what: &str) -> Self {
        match result {
            Ok(value) => Loaded::Ready(value),
            Err(e) => {
                tracing::warn!(what = %what, error = %e, "CMS fetch failed, using fallback");
                Loaded::Failed(e.to_string())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Loaded::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loaded::Ready(value) => Some(value),
            Loaded::Failed(_) => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            Loaded::Ready(value) => Some(value),
            Loaded::Failed(_) => None,
        }
    }
}

impl<T: Default> Loaded<T> {
    /// The value, or `T::default()` after a failure.
    pub fn unwrap_or_default(self) -> T {
        self.into_ready().unwrap_or_default()
    }
}

/// Navigation and footer data, loaded together for every page.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub menu: Loaded<Vec<MenuItem>>,
    pub settings: Loaded<WebsiteSettings>,
}

impl Chrome {
    /// Chrome with no CMS data at all; renders with defaults.
    pub fn fallback() -> Self {
        Self {
            menu: Loaded::Ready(Vec::new()),
            settings: Loaded::Ready(WebsiteSettings::default()),
        }
    }
}

/// CMS read facade over a transport `S` and a lead sink `L`.
#[derive(Clone)]
pub struct SiteService<S, L> {
    cms: CmsCache<S>,
    leads: L,
}

impl<S: CmsSource, L: LeadSink> SiteService<S, L> {
    pub fn new(source: S, leads: L, revalidate: Duration) -> Self {
        Self {
            cms: CmsCache::new(source, revalidate),
            leads,
        }
    }

    /// Page by slug, always fresh. `Ok(None)` when the CMS has no such page.
    pub async fn page(&self, slug: &str) -> Result<Option<Page>, AppError> {
        self.page_with(slug, CachePolicy::NoStore).await
    }

    /// Service page by slug, served from the revalidation window.
    ///
    /// Any failure collapses to `None`.
    pub async fn service_page(&self, slug: &str) -> Option<Page> {
        match self.page_with(slug, CachePolicy::Revalidate).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(slug = %slug, error = %e, "Service page fetch failed");
                None
            }
        }
    }

    async fn page_with(&self, slug: &str, policy: CachePolicy) -> Result<Option<Page>, AppError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Ok(None);
        }
        let endpoint = format!("/pages/slug/{slug}");
        let envelope: Result<PageEnvelope, AppError> = self.cms.fetch_json(&endpoint, policy).await;
        match envelope {
            Ok(envelope) => Ok(envelope.into_page()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Menu tree, sorted by position at every level.
    pub async fn menu(&self) -> Loaded<Vec<MenuItem>> {
        let result = self
            .get::<MenuEnvelope>("/menus/findAllWebsiteMenu")
            .await
            .map(|envelope| sorted_menu(envelope.result));
        Loaded::from_result(result, "menu")
    }

    pub async fn settings(&self) -> Loaded<WebsiteSettings> {
        let result = self
            .get::<StatusEnvelope<WebsiteSettings>>("/website-settings")
            .await
            .and_then(|envelope| envelope.into_result("website settings"));
        Loaded::from_result(result, "website settings")
    }

    /// Menu and settings, fetched concurrently.
    pub async fn chrome(&self) -> Chrome {
        let (menu, settings) = tokio::join!(self.menu(), self.settings());
        Chrome { menu, settings }
    }

    /// One page of job listings. `page` is clamped to at least 1.
    pub async fn jobs(&self, page: i64, limit: i64) -> Loaded<JobList> {
        let page = page.max(1);
        let limit = limit.max(1);
        let result = self
            .get::<JobList>(&format!("/jobs?page={page}&limit={limit}"))
            .await;
        Loaded::from_result(result, "jobs")
    }

    pub async fn testimonials(&self) -> Loaded<Vec<Testimonial>> {
        Loaded::from_result(self.get("/testimonials").await, "testimonials")
    }

    pub async fn blogs(&self) -> Loaded<Vec<Blog>> {
        let result = self
            .get::<StatusEnvelope<Vec<Blog>>>("/blogs")
            .await
            .and_then(|envelope| envelope.into_result("blogs"));
        Loaded::from_result(result, "blogs")
    }

    /// Single blog post. `Ok(None)` when the CMS has no such post.
    pub async fn blog(&self, id: i64) -> Result<Option<Blog>, AppError> {
        match self.get::<Option<Blog>>(&format!("/blogs/{id}")).await {
            Ok(Some(blog)) if blog.id != 0 || !blog.title.is_empty() => Ok(Some(blog)),
            Ok(_) => Ok(None),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Validate and forward a lead.
    pub async fn submit_lead(
        &self,
        lead: &LeadSubmission,
        resume: Option<ResumeFile>,
    ) -> Result<(), AppError> {
        lead.validate()?;
        self.leads.submit(lead, resume).await?;
        tracing::info!(source = %lead.source, "Lead submitted");
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.cms.fetch_json(endpoint, CachePolicy::NoStore).await
    }
}
