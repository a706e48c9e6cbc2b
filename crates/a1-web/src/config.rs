use std::path::PathBuf;
use std::time::Duration;

use a1_core::error::AppError;
use url::Url;

/// Site configuration, built once at startup and passed down.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// CMS API base URL (`A1_API_URL`).
    pub api_url: String,
    /// Optional base for section images (`A1_IMAGE_URL`).
    pub image_url: Option<String>,
    pub port: u16,
    pub cms_timeout: Duration,
    /// Revalidation window of the service-page lookup.
    pub revalidate: Duration,
    pub jobs_per_page: i64,
    pub static_dir: PathBuf,
}

impl SiteConfig {
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    pub const DEFAULT_REVALIDATE_SECS: u64 = 60;
    pub const DEFAULT_JOBS_PER_PAGE: i64 = 6;

    /// Config for a given CMS URL with every other value at its default.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            image_url: None,
            port: Self::DEFAULT_PORT,
            cms_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            revalidate: Duration::from_secs(Self::DEFAULT_REVALIDATE_SECS),
            jobs_per_page: Self::DEFAULT_JOBS_PER_PAGE,
            static_dir: PathBuf::from("static"),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = get("A1_API_URL").ok_or_else(|| {
            AppError::ConfigError("A1_API_URL not set. Required to reach the CMS.".into())
        })?;
        validate_http_url("A1_API_URL", &api_url)?;

        let image_url = get("A1_IMAGE_URL");
        if let Some(image_url) = &image_url {
            validate_http_url("A1_IMAGE_URL", image_url)?;
        }

        let port = parse_or("A1_PORT", get("A1_PORT"), Self::DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            "A1_CMS_TIMEOUT_SECS",
            get("A1_CMS_TIMEOUT_SECS"),
            Self::DEFAULT_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "A1_CMS_TIMEOUT_SECS must be at least 1".into(),
            ));
        }
        let revalidate_secs = parse_or(
            "A1_REVALIDATE_SECS",
            get("A1_REVALIDATE_SECS"),
            Self::DEFAULT_REVALIDATE_SECS,
        )?;
        let jobs_per_page = parse_or(
            "A1_JOBS_PER_PAGE",
            get("A1_JOBS_PER_PAGE"),
            Self::DEFAULT_JOBS_PER_PAGE,
        )?;
        if jobs_per_page < 1 {
            return Err(AppError::ConfigError(
                "A1_JOBS_PER_PAGE must be at least 1".into(),
            ));
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            image_url: image_url.map(|u| u.trim_end_matches('/').to_string()),
            port,
            cms_timeout: Duration::from_secs(timeout_secs),
            revalidate: Duration::from_secs(revalidate_secs),
            jobs_per_page,
            static_dir: get("A1_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
        })
    }
}

fn validate_http_url(key: &str, raw: &str) -> Result<(), AppError> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::ConfigError(format!("Invalid {key} '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::ConfigError(format!(
            "Invalid {key} '{raw}': scheme '{scheme}' is not http/https"
        ))),
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("Invalid {key} '{raw}': expected a number"))
        }),
    }
}
