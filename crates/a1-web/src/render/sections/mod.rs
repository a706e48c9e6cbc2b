//! One component per section kind, plus the dispatcher that picks it.

mod content;
mod faq;
mod hero;
mod jobs;
mod metrics;
mod people;
mod service;
mod showcase;

use a1_client::sanitize_html;
use a1_core::dispatch::resolve_kind;
use a1_core::models::{JobList, Section, Testimonial};
use a1_core::section::SectionKind;
use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::format::ImageUrls;

pub use content::{ContentLayout, ContentSection};
pub use faq::FaqSection;
pub use hero::{HeroSection, SliderSection};
pub use jobs::{JobCard, JobsSection, Pagination};
pub use metrics::{StatsSection, TimelineSection, UspSection};
pub use people::{LeadershipSection, TestimonialsSection, ValuesSection};
pub use service::{ServiceBlock, ServiceHero};
pub use showcase::{ClientsLogoSlider, SolutionsSection, WhyChooseSection};

/// Everything a section may need besides its own record.
#[derive(Debug, Clone)]
pub struct SectionEnv {
    pub images: ImageUrls,
    pub now: DateTime<Utc>,
    /// Testimonial records; empty when the fetch failed or was not needed.
    pub testimonials: Vec<Testimonial>,
    /// Current page of job listings, if the page has a jobs section.
    pub jobs: Option<JobList>,
    /// Base path for job pagination links.
    pub jobs_path: String,
}

/// Render one arranged section. Unknown keys render nothing.
pub fn section_view(section: Section, env: &SectionEnv) -> AnyView {
    let images = env.images.clone();
    match resolve_kind(&section) {
        SectionKind::Hero => view! { <HeroSection section=section images=images /> }.into_any(),
        SectionKind::Stats => view! { <StatsSection section=section /> }.into_any(),
        SectionKind::Timeline => view! { <TimelineSection section=section /> }.into_any(),
        SectionKind::Values => view! { <ValuesSection section=section /> }.into_any(),
        SectionKind::Leadership => {
            view! { <LeadershipSection section=section images=images /> }.into_any()
        }
        SectionKind::Slider => view! { <SliderSection section=section images=images /> }.into_any(),
        SectionKind::UspItems => view! { <UspSection section=section /> }.into_any(),
        SectionKind::ClientsLogoSlider => {
            view! { <ClientsLogoSlider section=section images=images /> }.into_any()
        }
        SectionKind::Testimonials => view! {
            <TestimonialsSection
                section=section
                testimonials=env.testimonials.clone()
                images=images
            />
        }
        .into_any(),
        SectionKind::WhyChoose => view! { <WhyChooseSection section=section /> }.into_any(),
        SectionKind::Solutions => view! { <SolutionsSection section=section /> }.into_any(),
        SectionKind::Faq => view! { <FaqSection section=section /> }.into_any(),
        SectionKind::Jobs => match env.jobs.clone() {
            Some(jobs) => view! {
                <JobsSection
                    title=section.title.clone()
                    jobs=jobs
                    now=env.now
                    base_path=env.jobs_path.clone()
                />
            }
            .into_any(),
            None => view! { "" }.into_any(),
        },
        SectionKind::LeftImageRightContent => view! {
            <ContentSection section=section images=images layout=ContentLayout::ImageLeft />
        }
        .into_any(),
        SectionKind::RightImageLeftContent => view! {
            <ContentSection section=section images=images layout=ContentLayout::ImageRight />
        }
        .into_any(),
        SectionKind::MiddleContent => view! {
            <ContentSection section=section images=images layout=ContentLayout::Centered />
        }
        .into_any(),
        SectionKind::Service => {
            view! { <ServiceBlock section=section images=images index=0 /> }.into_any()
        }
        SectionKind::Unknown(_) => view! { "" }.into_any(),
    }
}

/// Badge, heading and lead paragraph shared by most sections.
///
/// With `html` set, the title is CMS markup and goes through the sanitizer
/// instead of being escaped.
#[component]
pub fn SectionHeader(
    badge: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    #[prop(optional)] html: bool,
) -> impl IntoView {
    let badge = badge.filter(|b| !b.trim().is_empty());
    let title = title.filter(|t| !t.trim().is_empty());
    let subtitle = subtitle.filter(|s| !s.trim().is_empty());
    if badge.is_none() && title.is_none() && subtitle.is_none() {
        return view! { "" }.into_any();
    }

    view! {
        <div class="section-head">
            {badge.map(|badge| view! { <span class="badge">{badge}</span> })}
            {title.map(|title| {
                if html {
                    view! { <h2 inner_html=sanitize_html(&title)></h2> }.into_any()
                } else {
                    view! { <h2>{title}</h2> }.into_any()
                }
            })}
            {subtitle.map(|subtitle| view! { <p>{subtitle}</p> })}
        </div>
    }
    .into_any()
}
