//! Display formatting shared by the renderers.

use a1_core::models::Job;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Served by the site itself when the CMS has no image.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Resolves CMS image references to absolute URLs.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    api_base: String,
    image_base: String,
}

impl ImageUrls {
    /// `image_base` defaults to the API base, where the CMS serves uploads.
    pub fn new(api_base: &str, image_base: Option<&str>) -> Self {
        let api_base = api_base.trim_end_matches('/').to_string();
        let image_base = image_base
            .map(|b| b.trim_end_matches('/').to_string())
            .unwrap_or_else(|| api_base.clone());
        Self {
            api_base,
            image_base,
        }
    }

    /// Section upload: absolute URLs pass through, bare names resolve under
    /// `/uploads/sections/`.
    pub fn section(&self, image: Option<&str>) -> String {
        match image.map(str::trim).filter(|i| !i.is_empty()) {
            None => PLACEHOLDER_IMAGE.to_string(),
            Some(image) if is_absolute(image) => image.to_string(),
            Some(image) => format!(
                "{}/uploads/sections/{}",
                self.image_base,
                image.trim_start_matches('/')
            ),
        }
    }

    /// Like [`section`](Self::section) but `None` when there is no image.
    pub fn section_opt(&self, image: Option<&str>) -> Option<String> {
        image
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(|i| self.section(Some(i)))
    }

    /// Blog cover: `image_url` is a path on the API host.
    pub fn blog(&self, image_url: Option<&str>) -> String {
        match image_url.map(str::trim).filter(|i| !i.is_empty()) {
            None => PLACEHOLDER_IMAGE.to_string(),
            Some(image) if is_absolute(image) => image.to_string(),
            Some(image) if image.starts_with('/') => format!("{}{image}", self.api_base),
            Some(image) => format!("{}/{image}", self.api_base),
        }
    }

    /// Avatars and logos are either absolute or relative to the API host.
    pub fn asset(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        if is_absolute(path) {
            Some(path.to_string())
        } else {
            Some(format!("{}/{}", self.api_base, path.trim_start_matches('/')))
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// `"{currency} {min}k - {max}k"`, or `Not disclosed` if a bound is missing.
pub fn salary(job: &Job) -> String {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) if min != 0.0 && max != 0.0 => {
            let currency = job.currency.as_deref().unwrap_or("").trim();
            format!("{currency} {}k - {}k", amount(min), amount(max))
                .trim_start()
                .to_string()
        }
        _ => "Not disclosed".to_string(),
    }
}

fn amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Whole days since `created_at`: `Today`, `1 day ago`, `N days ago`.
pub fn posted(created_at: &str, now: DateTime<Utc>) -> String {
    let Some(created) = parse_timestamp(created_at) else {
        return "Recently".to_string();
    };
    match (now - created).num_days() {
        days if days <= 0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        days => format!("{days} days ago"),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Long date for blog cards, e.g. `March 4, 2025`; raw input if unparseable.
pub fn long_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Accent colour for a company value, keyed by its title.
pub fn value_color(title: &str) -> &'static str {
    match title.trim() {
        "Excellence" => "emerald",
        "Integrity" => "blue",
        "Innovation" => "purple",
        "Partnership" => "orange",
        _ => "gray",
    }
}

/// Colour class for a themed feature card.
pub fn theme_color(theme: Option<&str>) -> &'static str {
    match theme.map(str::trim).unwrap_or("") {
        "blue" => "blue",
        "emerald" | "green" => "emerald",
        "purple" | "violet" => "purple",
        "orange" | "amber" => "orange",
        "teal" | "cyan" => "teal",
        "rose" | "red" | "pink" => "rose",
        _ => "teal",
    }
}
