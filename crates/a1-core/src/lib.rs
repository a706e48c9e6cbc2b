pub mod cache;
pub mod dispatch;
pub mod error;
pub mod lenient;
pub mod menu;
pub mod models;
pub mod section;
pub mod site;
pub mod traits;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use cache::{CachePolicy, CmsCache};
pub use dispatch::{PlannedSection, arrange_sections, plan_sections, resolve_kind};
pub use error::AppError;
pub use models::{
    Blog, Job, JobList, LeadSubmission, MenuItem, Page, ResumeFile, Section, Testimonial,
    WebsiteSettings,
};
pub use section::SectionKind;
pub use site::{Chrome, Loaded, SiteService};
pub use traits::{CmsSource, LeadSink};
