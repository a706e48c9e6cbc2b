use a1_core::models::{Job, JobList};
use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::format::{posted, salary};
use crate::render::icons::Icon;

/// One listing with pay, age and skills.
#[component]
pub fn JobCard(job: Job, now: DateTime<Utc>) -> impl IntoView {
    let pay = salary(&job);
    let age = posted(&job.created_at, now);
    let class = if job.is_featured {
        "card job-card featured"
    } else {
        "card job-card"
    };

    view! {
        <article class=class>
            {job.is_featured.then(|| view! { <span class="badge">"Featured"</span> })}
            <h3>{job.title}</h3>
            <p class="highlight">{job.company_name}</p>
            <div class="job-meta">
                <span><Icon name="map-pin" />{job.location}</span>
                <span><Icon name="briefcase" />{job.employment_type}</span>
                <span><Icon name="globe" />{job.work_mode}</span>
                <span><Icon name="dollar-sign" />{pay}</span>
                <span><Icon name="clock" />{age}</span>
            </div>
            <p class="muted">{job.description}</p>
            {(!job.skills.is_empty()).then(|| view! {
                <div class="skills">
                    {job
                        .skills
                        .into_iter()
                        .map(|skill| view! { <span class="skill">{skill}</span> })
                        .collect::<Vec<_>>()}
                </div>
            })}
        </article>
    }
}

/// Numbered page links. Renders nothing for a single page.
#[component]
pub fn Pagination(page: i64, total_pages: i64, base_path: String) -> impl IntoView {
    if total_pages <= 1 {
        return view! { "" }.into_any();
    }
    let link = move |n: i64| format!("{base_path}?page={n}");

    view! {
        <nav class="pagination" aria-label="Pagination">
            {(page > 1).then(|| view! { <a href=link(page - 1)>"Previous"</a> })}
            {(1..=total_pages)
                .map(|n| {
                    if n == page {
                        view! { <span class="current">{n}</span> }.into_any()
                    } else {
                        view! { <a href=link(n)>{n}</a> }.into_any()
                    }
                })
                .collect::<Vec<_>>()}
            {(page < total_pages).then(|| view! { <a href=link(page + 1)>"Next"</a> })}
        </nav>
    }
    .into_any()
}

/// Current page of listings followed by pagination.
#[component]
pub fn JobsSection(
    title: Option<String>,
    jobs: JobList,
    now: DateTime<Utc>,
    base_path: String,
) -> impl IntoView {
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "Latest Jobs".to_string());
    let total_pages = jobs.total_pages();
    let page = jobs.page.max(1);

    view! {
        <section class="section">
            <div class="container">
                <div class="section-head">
                    <h2>{title}</h2>
                    <p>{format!("{} open positions", jobs.total)}</p>
                </div>
                {if jobs.data.is_empty() {
                    view! { <p class="muted">"No jobs available right now."</p> }.into_any()
                } else {
                    view! {
                        <div class="grid grid-2">
                            {jobs
                                .data
                                .into_iter()
                                .map(|job| view! { <JobCard job=job now=now /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
                <Pagination page=page total_pages=total_pages base_path=base_path />
            </div>
        </section>
    }
}
