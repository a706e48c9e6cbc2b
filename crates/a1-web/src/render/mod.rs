//! Server-side HTML for every public page.
//!
//! Handlers fetch first, then call one of the `render_*` functions here;
//! rendering itself never touches the network.

pub mod document;
pub mod icons;
pub mod sections;

use a1_client::{plain_text, sanitize_html};
use a1_core::models::{Blog, JobList, MenuItem, Page, WebsiteSettings};
use a1_core::section::SectionKind;
use a1_core::site::Chrome;
use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::format::{ImageUrls, long_date};
use document::Document;
use icons::Icon;
use sections::{JobsSection, SectionEnv, ServiceBlock, ServiceHero, section_view};

/// Menu, settings and copyright year shared by every page.
#[derive(Debug, Clone, Default)]
pub struct SiteChrome {
    pub menu: Vec<MenuItem>,
    pub settings: WebsiteSettings,
    pub year: i32,
}

impl SiteChrome {
    /// Failed chrome fetches fall back to an empty menu and default settings.
    pub fn from_chrome(chrome: Chrome, now: DateTime<Utc>) -> Self {
        Self {
            menu: chrome.menu.unwrap_or_default(),
            settings: chrome.settings.unwrap_or_default(),
            year: now.year(),
        }
    }
}

/// Outcome message shown above a lead form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

#[component]
fn BannerView(banner: Option<Banner>) -> impl IntoView {
    match banner {
        Some(Banner::Success(msg)) => {
            view! { <div class="banner banner-success" role="status">{msg}</div> }.into_any()
        }
        Some(Banner::Error(msg)) => {
            view! { <div class="banner banner-error" role="alert">{msg}</div> }.into_any()
        }
        None => view! { "" }.into_any(),
    }
}

fn into_document(view: impl RenderHtml) -> String {
    format!("<!DOCTYPE html>\n{}", view.to_html())
}

/// A CMS page: every arranged section in order, between the chrome.
pub fn render_page(page: &Page, chrome: SiteChrome, env: &SectionEnv) -> String {
    let title = page.display_title().to_string();
    let description = page.display_description().to_string();
    let body = page
        .arranged_sections()
        .iter()
        .cloned()
        .map(|section| section_view(section, env))
        .collect::<Vec<_>>();

    into_document(view! {
        <Document title=title description=description chrome=chrome>
            {body}
        </Document>
    })
}

pub fn render_not_found(chrome: SiteChrome) -> String {
    into_document(view! {
        <Document
            title="Page Not Found".to_string()
            description="Page not found".to_string()
            chrome=chrome
        >
            <section class="not-found">
                <div class="container">
                    <h1>"404"</h1>
                    <p class="muted">"The page you are looking for does not exist."</p>
                    <a class="btn" href="/">"Back to Home"</a>
                </div>
            </section>
        </Document>
    })
}

/// Service page: the first hero as banner, then alternating service blocks.
/// `None` renders the "No data found" notice.
pub fn render_service_page(
    page: Option<&Page>,
    chrome: SiteChrome,
    images: &ImageUrls,
) -> String {
    let Some(page) = page else {
        return into_document(view! {
            <Document
                title="No data found".to_string()
                description=String::new()
                chrome=chrome
            >
                <section class="not-found">
                    <div class="container"><p class="muted">"No data found"</p></div>
                </section>
            </Document>
        });
    };

    let title = page.display_title().to_string();
    let description = page.display_description().to_string();
    let hero = page.first_of(&SectionKind::Hero).cloned().map(|section| {
        view! { <ServiceHero section=section images=images.clone() /> }
    });
    let blocks = page
        .all_of(&SectionKind::Service)
        .cloned()
        .enumerate()
        .map(|(index, section)| {
            view! { <ServiceBlock section=section images=images.clone() index=index /> }
        })
        .collect::<Vec<_>>();

    into_document(view! {
        <Document title=title description=description chrome=chrome>
            {hero}
            {blocks}
        </Document>
    })
}

fn blog_card(blog: Blog, images: &ImageUrls) -> impl IntoView + use<> {
    let image = images.blog(blog.image_url.as_deref());
    let href = format!("/blogs/{}", blog.id);
    let category = blog.category().to_string();
    let summary = plain_text(blog.description.as_deref().unwrap_or(""));
    let date = long_date(&blog.created_at);
    let alt = blog.title.clone();

    view! {
        <article class="card blog-card">
            <img src=image alt=alt />
            <span class="badge">{category}</span>
            <h3><a href=href.clone()>{blog.title}</a></h3>
            <p class="muted">{summary}</p>
            <div class="job-meta">
                <span><Icon name="user" />{blog.author}</span>
                <span><Icon name="clock" />{date}</span>
            </div>
            <a class="highlight" href=href>"Read more" <Icon name="arrow-right" /></a>
        </article>
    }
}

/// Blog index filtered by search text and category.
///
/// `blogs` is `None` when the list could not be loaded.
pub fn render_blogs(
    blogs: Option<Vec<Blog>>,
    query: &str,
    category: &str,
    chrome: SiteChrome,
    images: &ImageUrls,
) -> String {
    let category = if category.trim().is_empty() {
        "All"
    } else {
        category.trim()
    };
    let loaded = blogs.is_some();
    let blogs = blogs.unwrap_or_default();

    let mut categories = vec!["All".to_string()];
    for blog in &blogs {
        if !categories.iter().any(|c| c == blog.category()) {
            categories.push(blog.category().to_string());
        }
    }
    let chips = categories
        .into_iter()
        .map(|c| {
            let class = if c == category { "chip active" } else { "chip" };
            let href = if query.trim().is_empty() {
                format!("/blogs?category={c}")
            } else {
                format!("/blogs?q={}&category={c}", query.trim())
            };
            view! { <a class=class href=href>{c}</a> }
        })
        .collect::<Vec<_>>();

    let cards = blogs
        .into_iter()
        .filter(|blog| blog.matches(query, category))
        .map(|blog| blog_card(blog, images))
        .collect::<Vec<_>>();
    let empty = if !loaded {
        Some("Blogs are unavailable right now.")
    } else if cards.is_empty() {
        Some("No articles match your search.")
    } else {
        None
    };
    let query = query.to_string();
    let category = category.to_string();

    into_document(view! {
        <Document
            title="Blogs".to_string()
            description="Career advice and hiring insights".to_string()
            chrome=chrome
        >
            <section class="section">
                <div class="container">
                    <div class="section-head">
                        <span class="badge">"Insights"</span>
                        <h2>"Career Advice & Hiring Insights"</h2>
                    </div>
                    <form class="filters" method="get" action="/blogs">
                        <input type="search" name="q" value=query placeholder="Search articles" />
                        <input type="hidden" name="category" value=category />
                        <button class="btn" type="submit">"Search"</button>
                    </form>
                    <div class="filters">{chips}</div>
                    {empty.map(|msg| view! { <p class="muted">{msg}</p> })}
                    <div class="grid grid-3">{cards}</div>
                </div>
            </section>
        </Document>
    })
}

/// Single article. `None` renders "Blog not found."
pub fn render_blog(blog: Option<Blog>, chrome: SiteChrome, images: &ImageUrls) -> String {
    let Some(blog) = blog else {
        return into_document(view! {
            <Document
                title="Blog not found".to_string()
                description=String::new()
                chrome=chrome
            >
                <section class="not-found">
                    <div class="container">
                        <p class="muted">"Blog not found."</p>
                        <a class="btn" href="/blogs">"Back to Blogs"</a>
                    </div>
                </section>
            </Document>
        });
    };

    let image = images.blog(blog.image_url.as_deref());
    let body = sanitize_html(
        blog.plain_description
            .as_deref()
            .or(blog.description.as_deref())
            .unwrap_or(""),
    );
    let description = plain_text(blog.description.as_deref().unwrap_or(""));
    let category = blog.category().to_string();
    let date = long_date(&blog.created_at);
    let title = blog.title.clone();
    let alt = blog.title.clone();

    into_document(view! {
        <Document title=title description=description chrome=chrome>
            <section class="section">
                <article class="container article">
                    <a class="highlight" href="/blogs">"← Back to Blogs"</a>
                    <span class="badge">{category}</span>
                    <h1>{blog.title}</h1>
                    <div class="job-meta">
                        <span><Icon name="user" />{blog.author}</span>
                        <span><Icon name="clock" />{date}</span>
                    </div>
                    <img src=image alt=alt />
                    <div inner_html=body></div>
                </article>
            </section>
        </Document>
    })
}

/// Standalone job board. `None` when the listing could not be loaded.
pub fn render_jobs_page(
    jobs: Option<JobList>,
    chrome: SiteChrome,
    now: DateTime<Utc>,
) -> String {
    let listing = match jobs {
        Some(jobs) => view! {
            <JobsSection
                title=Some("Browse Jobs".to_string())
                jobs=jobs
                now=now
                base_path="/jobs".to_string()
            />
        }
        .into_any(),
        None => view! {
            <section class="section">
                <div class="container">
                    <p class="muted">"Jobs are unavailable right now."</p>
                </div>
            </section>
        }
        .into_any(),
    };

    into_document(view! {
        <Document
            title="Jobs".to_string()
            description="Open positions".to_string()
            chrome=chrome
        >
            {listing}
        </Document>
    })
}

#[component]
fn Field(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input type=kind name=name required=required />
        </label>
    }
}

/// Employer enquiry form.
pub fn render_contact(chrome: SiteChrome, banner: Option<Banner>) -> String {
    let phone = chrome.settings.contact_number().to_string();
    let email = chrome.settings.email().to_string();
    let address = chrome.settings.address().to_string();

    into_document(view! {
        <Document
            title="Contact".to_string()
            description="Tell us about the talent you need".to_string()
            chrome=chrome
        >
            <section class="section">
                <div class="container grid grid-2">
                    <div>
                        <span class="badge">"Contact Us"</span>
                        <h1>"Let's find your next hire"</h1>
                        <ul class="points">
                            <li><Icon name="phone" />{phone}</li>
                            <li><Icon name="mail" />{email}</li>
                            <li><Icon name="map-pin" />{address}</li>
                        </ul>
                    </div>
                    <div class="card">
                        <BannerView banner=banner />
                        <form class="form" method="post" action="/contact">
                            <Field label="First name" name="first_name" required=true />
                            <Field label="Last name" name="last_name" />
                            <Field label="Email" name="email" kind="email" required=true />
                            <Field label="Phone" name="phone" kind="tel" />
                            <Field label="Company" name="company_name" />
                            <Field label="Role to hire" name="role_to_hire" />
                            <label>
                                "Requirements"
                                <textarea name="requirements" rows="5"></textarea>
                            </label>
                            <button class="btn" type="submit">"Send enquiry"</button>
                        </form>
                    </div>
                </div>
            </section>
        </Document>
    })
}

/// Job-seeker registration form with CV upload.
pub fn render_jobseekers(chrome: SiteChrome, banner: Option<Banner>) -> String {
    into_document(view! {
        <Document
            title="Job Seekers".to_string()
            description="Upload your CV and get matched with great roles".to_string()
            chrome=chrome
        >
            <section class="section">
                <div class="container grid grid-2">
                    <div>
                        <span class="badge">"Job Seekers"</span>
                        <h1>"Upload your CV"</h1>
                        <p class="muted">
                            "Share your details and our recruiters will match you with the right roles."
                        </p>
                    </div>
                    <div class="card">
                        <BannerView banner=banner />
                        <form
                            class="form"
                            method="post"
                            action="/jobseekers"
                            enctype="multipart/form-data"
                        >
                            <Field label="First name" name="first_name" required=true />
                            <Field label="Last name" name="last_name" />
                            <Field label="Email" name="email" kind="email" required=true />
                            <Field label="Phone" name="phone" kind="tel" />
                            <Field label="Desired role" name="role_to_hire" />
                            <label>
                                "About you"
                                <textarea name="requirements" rows="5"></textarea>
                            </label>
                            <label>
                                "Resume"
                                <input type="file" name="resume" accept=".pdf,.doc,.docx" />
                            </label>
                            <button class="btn" type="submit">"Submit"</button>
                        </form>
                    </div>
                </div>
            </section>
        </Document>
    })
}

#[cfg(test)]
mod tests {
    use a1_core::models::{Job, Section, Testimonial};
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn images() -> ImageUrls {
        ImageUrls::new("https://api.example.com", Some("https://cdn.example.com"))
    }

    fn env() -> SectionEnv {
        SectionEnv {
            images: images(),
            now: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
            testimonials: Vec::new(),
            jobs: None,
            jobs_path: "/".into(),
        }
    }

    fn section(
        id: i64,
        key: &str,
        sort_order: i64,
        title: &str,
        meta: serde_json::Value,
    ) -> Section {
        Section {
            id,
            section_key: key.into(),
            sort_order,
            title: Some(title.into()),
            meta,
            ..Default::default()
        }
    }

    fn stats(id: i64, sort_order: i64, value: &str) -> Section {
        section(
            id,
            "stats",
            sort_order,
            "By the numbers",
            json!({"items": [{"label": "Placements", "value": value}]}),
        )
    }

    #[test]
    fn test_page_renders_sections_in_order_once() {
        let page = Page::new(
            "About",
            vec![
                section(
                    1,
                    "middleContent",
                    2,
                    "Our story",
                    json!({"content": "<p>Founded in 2010.</p>"}),
                ),
                stats(2, 1, "500"),
                stats(3, 1, "999"),
            ],
        );
        let html = render_page(&page, SiteChrome::default(), &env());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("500"));
        assert!(!html.contains("999"), "duplicate section rendered");
        let stats_at = html.find("Placements").unwrap();
        let story_at = html.find("Founded in 2010.").unwrap();
        assert!(stats_at < story_at);
    }

    #[test]
    fn test_unknown_section_renders_nothing() {
        let page = Page::new(
            "Home",
            vec![
                section(1, "mysteryWidget", 1, "Secret block", json!({})),
                stats(2, 2, "42"),
            ],
        );
        let html = render_page(&page, SiteChrome::default(), &env());
        assert!(!html.contains("Secret block"));
        assert!(html.contains("42"));
    }

    #[test]
    fn test_empty_page_renders_chrome_only() {
        let page = Page::new("Empty", Vec::new());
        let html = render_page(&page, SiteChrome::default(), &env());
        assert!(html.contains("site-nav"));
        assert!(html.contains("site-footer"));
        assert!(!html.contains("class=\"section"));
    }

    #[test]
    fn test_page_title_prefers_meta_title() {
        let mut page = Page::new("About", Vec::new());
        page.meta_title = Some("About A1".into());
        page.meta_description = Some("Who we are".into());
        let html = render_page(&page, SiteChrome::default(), &env());
        assert!(html.contains("<title>About A1</title>"));
        assert!(html.contains("Who we are"));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found(SiteChrome::default());
        assert!(html.contains("<title>Page Not Found</title>"));
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn test_menu_children_render_as_dropdown() {
        let chrome = SiteChrome {
            menu: vec![MenuItem {
                title: "Services".into(),
                children: vec![MenuItem {
                    title: "Staffing".into(),
                    slug: Some("staffing".into()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_not_found(chrome);
        assert!(html.contains("<summary>Services</summary>"));
        assert!(html.contains("Staffing"));
    }

    #[test]
    fn test_footer_uses_settings_and_year() {
        let chrome = SiteChrome {
            settings: WebsiteSettings {
                site_name: Some("A1 Selectors".into()),
                social_linkedin: Some("linkedin.com/company/a1".into()),
                ..Default::default()
            },
            year: 2031,
            ..Default::default()
        };
        let html = render_not_found(chrome);
        assert!(html.contains("2031 A1 Selectors"));
        assert!(html.contains("https://linkedin.com/company/a1"));
        assert!(html.contains("href=\"/jobseekers\""));
    }

    #[test]
    fn test_service_page_without_data() {
        let html = render_service_page(None, SiteChrome::default(), &images());
        assert!(html.contains("No data found"));
    }

    #[test]
    fn test_service_page_alternates_blocks() {
        let page = Page::new(
            "Staffing",
            vec![
                section(1, "hero", 1, "Staffing Solutions", json!({"description": "Fast hires"})),
                section(2, "service", 2, "Contract", json!({"features": ["Vetted"]})),
                section(3, "service", 3, "Permanent", json!({})),
            ],
        );
        let html = render_service_page(Some(&page), SiteChrome::default(), &images());
        assert!(html.contains("Staffing Solutions"));
        assert!(html.contains("Fast hires"));
        assert!(html.contains("Vetted"));
        assert_eq!(html.matches("service-block reverse").count(), 1);
    }

    fn blog(id: i64, title: &str, badge: Option<&str>) -> Blog {
        Blog {
            id,
            title: title.into(),
            badge: badge.map(Into::into),
            image_url: Some("/uploads/blog.png".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blogs_filter_by_query_and_category() {
        let blogs = vec![
            blog(1, "Hiring in 2025", Some("Hiring")),
            blog(2, "Remote work tips", None),
        ];
        let html = render_blogs(
            Some(blogs.clone()),
            "remote",
            "All",
            SiteChrome::default(),
            &images(),
        );
        assert!(html.contains("Remote work tips"));
        assert!(!html.contains("Hiring in 2025"));

        let html = render_blogs(Some(blogs), "", "General", SiteChrome::default(), &images());
        assert!(html.contains("Remote work tips"));
        assert!(html.contains("https://api.example.com/uploads/blog.png"));
    }

    #[test]
    fn test_blog_detail_is_sanitised() {
        let mut post = blog(7, "Interview prep", None);
        post.plain_description = Some("<p>Be ready</p><script>alert(1)</script>".into());
        let html = render_blog(Some(post), SiteChrome::default(), &images());
        assert!(html.contains("Be ready"));
        assert!(!html.contains("alert(1)"));

        let html = render_blog(None, SiteChrome::default(), &images());
        assert!(html.contains("Blog not found."));
    }

    #[test]
    fn test_jobs_page_paginates() {
        let jobs = JobList {
            data: vec![Job {
                title: "Rust Engineer".into(),
                created_at: "2025-03-09T08:00:00Z".into(),
                ..Default::default()
            }],
            total: 25,
            page: 2,
            limit: 10,
        };
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let html = render_jobs_page(Some(jobs), SiteChrome::default(), now);
        assert!(html.contains("Rust Engineer"));
        assert!(html.contains("1 day ago"));
        assert!(html.contains("Not disclosed"));
        assert!(html.contains("href=\"/jobs?page=3\""));
        assert!(html.contains("<span class=\"current\">2</span>"));
    }

    #[test]
    fn test_contact_banner() {
        let html = render_contact(
            SiteChrome::default(),
            Some(Banner::Error("email is required".into())),
        );
        assert!(html.contains("banner-error"));
        assert!(html.contains("email is required"));

        let html = render_jobseekers(SiteChrome::default(), None);
        assert!(html.contains("multipart/form-data"));
        assert!(!html.contains("banner"));
    }

    #[test]
    fn test_testimonials_title_renders_as_markup() {
        let page = Page::new(
            "Home",
            vec![section(
                1,
                "testimonials",
                1,
                "What <span class=\"text-teal\">clients</span> say<script>x()</script>",
                json!({}),
            )],
        );
        let mut env = env();
        env.testimonials = vec![Testimonial {
            id: 1,
            message: "Great hires.".into(),
            author_name: "Jane Doe".into(),
            author_designation: "CTO".into(),
            ..Default::default()
        }];
        let html = render_page(&page, SiteChrome::default(), &env);

        assert!(html.contains("What <span class=\"text-teal\">clients</span> say"));
        assert!(!html.contains("&lt;span"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_usp_title_renders_as_markup() {
        let page = Page::new(
            "Home",
            vec![section(
                1,
                "usp_items",
                1,
                "Why <strong>A1</strong>",
                json!({"usp_items": [{"label": "Reach", "finalNumber": 40}]}),
            )],
        );
        let html = render_page(&page, SiteChrome::default(), &env());
        assert!(html.contains("Why <strong>A1</strong>"));
        assert!(html.contains("Reach"));
    }

    #[test]
    fn test_slider_shows_title_and_sub_title() {
        let mut slider = section(
            1,
            "slider",
            1,
            "Hire <span class=\"text-teal\">faster</span>",
            json!({}),
        );
        slider.sub_title = Some("Across <em>every</em> sector".into());
        slider.images = vec!["/uploads/one.jpg".into(), "/uploads/two.jpg".into()];
        let page = Page::new("Home", vec![slider]);
        let html = render_page(&page, SiteChrome::default(), &env());

        assert!(html.contains("Hire <span class=\"text-teal\">faster</span>"));
        assert!(html.contains("Across <em>every</em> sector"));
        assert!(html.contains("slide active"));
    }
}
