//! Secondary CMS reads a page needs before it can be rendered.

use a1_core::models::Page;
use a1_core::section::SectionKind;
use a1_core::site::SiteService;
use a1_core::traits::{CmsSource, LeadSink};
use chrono::Utc;

use crate::format::ImageUrls;
use crate::render::sections::SectionEnv;

/// Which slice of the job listing a page shows.
#[derive(Debug, Clone)]
pub struct JobsWindow {
    pub page: i64,
    pub per_page: i64,
    /// Path pagination links point back to.
    pub path: String,
}

/// Fetch testimonials and jobs, but only for sections present on `page`.
///
/// Both reads run concurrently; a failed read leaves its section empty.
pub async fn load_section_env<S: CmsSource, L: LeadSink>(
    site: &SiteService<S, L>,
    page: &Page,
    images: ImageUrls,
    jobs: JobsWindow,
) -> SectionEnv {
    let wants_testimonials = page.first_of(&SectionKind::Testimonials).is_some();
    let wants_jobs = page.first_of(&SectionKind::Jobs).is_some();

    let (testimonials, listing) = tokio::join!(
        async {
            if wants_testimonials {
                site.testimonials().await.unwrap_or_default()
            } else {
                Vec::new()
            }
        },
        async {
            if wants_jobs {
                site.jobs(jobs.page.max(1), jobs.per_page).await.into_ready()
            } else {
                None
            }
        },
    );

    SectionEnv {
        images,
        now: Utc::now(),
        testimonials,
        jobs: listing,
        jobs_path: jobs.path,
    }
}
