use a1_client::ReqwestCms;
use a1_core::error::AppError;
use a1_core::site::SiteService;

use crate::config::SiteConfig;
use crate::format::ImageUrls;

/// The CMS facade as wired in production: one client for reads and leads.
pub type Site = SiteService<ReqwestCms, ReqwestCms>;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub site: Site,
    pub config: SiteConfig,
    pub images: ImageUrls,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self, AppError> {
        let cms = ReqwestCms::with_timeout(&config.api_url, config.cms_timeout)?;
        let site = SiteService::new(cms.clone(), cms, config.revalidate);
        let images = ImageUrls::new(&config.api_url, config.image_url.as_deref());
        Ok(Self {
            site,
            config,
            images,
        })
    }
}
