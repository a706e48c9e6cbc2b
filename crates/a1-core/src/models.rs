use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::dispatch::arrange_sections;
use crate::error::AppError;
use crate::lenient;
use crate::section::SectionKind;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// A CMS page: metadata plus the raw list of sections authored for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Sections as the CMS sent them (possibly with duplicates, unordered).
    /// Private so every change goes through [`Page::set_sections`], which
    /// resets `arranged`.
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    sections: Vec<Section>,
    /// Deduplicated, ordered view of `sections`, computed on first access.
    #[serde(skip)]
    arranged: OnceLock<Vec<Section>>,
}

impl Page {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            sections,
            ..Default::default()
        }
    }

    /// Sections as the CMS sent them.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Replace the raw sections and drop the memoised arrangement.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.arranged = OnceLock::new();
    }

    /// Sections deduplicated and in render order.
    ///
    /// Memoised per `Page` value: repeated calls return the same slice
    /// without re-running the arrangement.
    pub fn arranged_sections(&self) -> &[Section] {
        self.arranged
            .get_or_init(|| arrange_sections(Some(self.sections.as_slice())))
    }

    /// Browser title: `meta_title`, then `title`, then `"Page"`.
    pub fn display_title(&self) -> &str {
        non_blank(self.meta_title.as_deref())
            .or_else(|| non_blank(Some(&self.title)))
            .unwrap_or("Page")
    }

    /// Meta description, empty when the CMS provides none.
    pub fn display_description(&self) -> &str {
        self.meta_description.as_deref().unwrap_or("")
    }

    /// First section of the given kind, in render order.
    pub fn first_of(&self, kind: &SectionKind) -> Option<&Section> {
        self.arranged_sections().iter().find(|s| &s.kind() == kind)
    }

    /// All sections of the given kind, in render order.
    pub fn all_of<'a>(&'a self, kind: &'a SectionKind) -> impl Iterator<Item = &'a Section> + 'a {
        self.arranged_sections()
            .iter()
            .filter(move |s| &s.kind() == kind)
    }
}

/// One CMS-authored content block belonging to a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub section_key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub sort_order: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub images: Vec<String>,
    /// Key-specific payload; see [`crate::section`] for the typed projections.
    #[serde(default)]
    pub meta: serde_json::Value,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        SectionKind::from_key(&self.section_key)
    }

    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Project `meta` onto a typed shape.
    ///
    /// Returns `None` when `meta` is absent or does not fit `T`; callers render
    /// nothing in that case.
    pub fn meta_as<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        if self.meta.is_null() {
            return None;
        }
        match serde_json::from_value(self.meta.clone()) {
            Ok(meta) => Some(meta),
            Err(e) => {
                tracing::debug!(
                    section_id = self.id,
                    section_key = %self.section_key,
                    error = %e,
                    "Section meta does not match expected shape"
                );
                None
            }
        }
    }
}

/// `{ data: { result: Page } }`
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub data: Option<PageEnvelopeData>,
}

#[derive(Debug, Deserialize)]
pub struct PageEnvelopeData {
    #[serde(default)]
    pub result: Option<Page>,
}

impl PageEnvelope {
    pub fn into_page(self) -> Option<Page> {
        self.data.and_then(|d| d.result)
    }
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub position: Option<i64>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Link target, `#` when the CMS has none.
    pub fn href(&self) -> &str {
        non_blank(self.url.as_deref()).unwrap_or("#")
    }
}

/// `{ result: [MenuItem] }`
#[derive(Debug, Deserialize)]
pub struct MenuEnvelope {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub result: Vec<MenuItem>,
}

// ---------------------------------------------------------------------------
// Website settings
// ---------------------------------------------------------------------------

pub const DEFAULT_SITE_NAME: &str = "TalentConnect";
pub const DEFAULT_SITE_TAGLINE: &str =
    "Connecting exceptional talent with outstanding opportunities.";
pub const DEFAULT_CONTACT_NUMBER: &str = "+1 (555) 123-4567";
pub const DEFAULT_EMAIL: &str = "hello@talentconnect.com";
pub const DEFAULT_ADDRESS: &str = "123 Business Ave, Suite 100";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteSettings {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub social_facebook: Option<String>,
    #[serde(default)]
    pub social_instagram: Option<String>,
    #[serde(default)]
    pub social_linkedin: Option<String>,
}

impl WebsiteSettings {
    pub fn site_name(&self) -> &str {
        non_blank(self.site_name.as_deref()).unwrap_or(DEFAULT_SITE_NAME)
    }

    pub fn tagline(&self) -> &str {
        non_blank(self.meta_description.as_deref()).unwrap_or(DEFAULT_SITE_TAGLINE)
    }

    pub fn contact_number(&self) -> &str {
        non_blank(self.contact_number.as_deref()).unwrap_or(DEFAULT_CONTACT_NUMBER)
    }

    pub fn email(&self) -> &str {
        non_blank(self.email.as_deref()).unwrap_or(DEFAULT_EMAIL)
    }

    pub fn address(&self) -> &str {
        non_blank(self.address.as_deref()).unwrap_or(DEFAULT_ADDRESS)
    }

    /// Social profile links as `(network, https URL)`, only for configured ones.
    pub fn social_links(&self) -> Vec<(&'static str, String)> {
        [
            ("facebook", self.social_facebook.as_deref()),
            ("instagram", self.social_instagram.as_deref()),
            ("linkedin", self.social_linkedin.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, handle)| {
            non_blank(handle).map(|h| (network, format!("https://{h}")))
        })
        .collect()
    }
}

/// `{ status, message, result }`
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope<T> {
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    pub status: bool,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub message: String,
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> StatusEnvelope<T> {
    /// The payload, if the CMS reported success and included one.
    pub fn into_result(self, what: &str) -> Result<T, AppError> {
        match (self.status, self.result) {
            (true, Some(result)) => Ok(result),
            (false, _) => Err(AppError::DataAbsent(format!(
                "{what}: CMS reported failure ({})",
                self.message
            ))),
            (true, None) => Err(AppError::DataAbsent(format!("{what}: missing result"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub employment_type: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub work_mode: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub created_at: String,
}

/// `{ data: [Job], total, page, limit }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobList {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub data: Vec<Job>,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub total: i64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub page: i64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub limit: i64,
}

impl JobList {
    /// `ceil(total / limit)`, zero when there is nothing to page through.
    pub fn total_pages(&self) -> i64 {
        if self.limit <= 0 || self.total <= 0 {
            return 0;
        }
        (self.total + self.limit - 1) / self.limit
    }
}

// ---------------------------------------------------------------------------
// Blogs
// ---------------------------------------------------------------------------

pub const DEFAULT_BLOG_CATEGORY: &str = "General";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub created_at: String,
    #[serde(default)]
    pub description: Option<String>,
    /// HTML body shown on the detail page.
    #[serde(default)]
    pub plain_description: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Blog {
    /// Category used for filtering; uncategorised posts count as `General`.
    pub fn category(&self) -> &str {
        non_blank(self.badge.as_deref()).unwrap_or(DEFAULT_BLOG_CATEGORY)
    }

    /// Case-insensitive match of `query` against title or description.
    pub fn matches(&self, query: &str, category: &str) -> bool {
        let query = query.trim().to_lowercase();
        let matches_search = query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query);
        let matches_category =
            category.is_empty() || category == "All" || self.category() == category;
        matches_search && matches_category
    }
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub author_name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub author_designation: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Up to two upper-cased initials from the author's name.
    pub fn initials(&self) -> String {
        self.author_name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

/// Contact/lead form payload, in the CMS wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub role_to_hire: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub source: String,
}

impl LeadSubmission {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::InvalidLead("first name is required".into()));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::InvalidLead("email is required".into()));
        }
        if !email.contains('@') {
            return Err(AppError::InvalidLead(format!(
                "'{email}' is not an email address"
            )));
        }
        Ok(())
    }

    /// Text fields as `(name, value)` pairs, in wire order.
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("company_name", self.company_name.as_str()),
            ("role_to_hire", self.role_to_hire.as_str()),
            ("requirements", self.requirements.as_str()),
            ("source", self.source.as_str()),
        ]
    }
}

/// A CV attached to a job-seeker lead.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_unwraps_result() {
        let json = r#"{"data": {"result": {"title": "About", "sections": [
            {"id": 1, "section_key": "hero", "sort_order": 1, "title": "Hi"}
        ]}}}"#;
        let page = serde_json::from_str::<PageEnvelope>(json)
            .unwrap()
            .into_page()
            .unwrap();
        assert_eq!(page.title, "About");
        assert_eq!(page.sections().len(), 1);
    }

    #[test]
    fn test_page_envelope_without_result() {
        let env: PageEnvelope = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(env.into_page().is_none());
        let env: PageEnvelope = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert!(env.into_page().is_none());
    }

    #[test]
    fn test_set_sections_resets_arrangement() {
        let section = |id: i64, key: &str, sort_order: i64| Section {
            id,
            section_key: key.into(),
            sort_order,
            ..Default::default()
        };
        let mut page = Page::new("Home", vec![section(1, "hero", 1)]);
        assert_eq!(page.arranged_sections().len(), 1);

        page.set_sections(vec![section(3, "faq", 2), section(2, "stats", 1)]);
        let ids: Vec<i64> = page.arranged_sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_page_null_sections_is_empty() {
        let page: Page = serde_json::from_str(r#"{"title": "x", "sections": null}"#).unwrap();
        assert!(page.sections().is_empty());
        assert!(page.arranged_sections().is_empty());
    }

    #[test]
    fn test_display_title_fallbacks() {
        let mut page = Page::new("About us", vec![]);
        assert_eq!(page.display_title(), "About us");
        page.meta_title = Some("About | A1".into());
        assert_eq!(page.display_title(), "About | A1");
        assert_eq!(Page::default().display_title(), "Page");
    }

    #[test]
    fn test_settings_defaults_and_socials() {
        let settings = WebsiteSettings {
            site_name: Some("A1 Selectors".into()),
            social_linkedin: Some("linkedin.com/company/a1".into()),
            social_facebook: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(settings.site_name(), "A1 Selectors");
        assert_eq!(settings.email(), DEFAULT_EMAIL);
        assert_eq!(
            settings.social_links(),
            vec![("linkedin", "https://linkedin.com/company/a1".to_string())]
        );
    }

    #[test]
    fn test_status_envelope() {
        let ok: StatusEnvelope<WebsiteSettings> =
            serde_json::from_str(r#"{"status": true, "message": "ok", "result": {"email": "a@b.c"}}"#)
                .unwrap();
        assert_eq!(ok.into_result("settings").unwrap().email(), "a@b.c");

        let failed: StatusEnvelope<WebsiteSettings> =
            serde_json::from_str(r#"{"status": false, "message": "boom", "result": {}}"#).unwrap();
        assert!(failed.into_result("settings").unwrap_err().is_not_found());
    }

    #[test]
    fn test_job_list_total_pages() {
        let list = JobList {
            total: 13,
            limit: 6,
            ..Default::default()
        };
        assert_eq!(list.total_pages(), 3);
        assert_eq!(JobList::default().total_pages(), 0);
    }

    #[test]
    fn test_blog_filtering() {
        let blog = Blog {
            title: "Remote hiring in 2026".into(),
            description: Some("How teams hire across time zones".into()),
            badge: None,
            ..Default::default()
        };
        assert!(blog.matches("REMOTE", "All"));
        assert!(blog.matches("time zones", "General"));
        assert!(!blog.matches("remote", "Tech Trends"));
        assert!(!blog.matches("salary", ""));
    }

    #[test]
    fn test_testimonial_initials() {
        let t = Testimonial {
            author_name: "maria  del carmen".into(),
            ..Default::default()
        };
        assert_eq!(t.initials(), "MD");
        assert_eq!(Testimonial::default().initials(), "");
    }

    #[test]
    fn test_lead_validation() {
        let mut lead = LeadSubmission {
            first_name: "Ada".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        assert!(lead.validate().is_ok());
        lead.email = "ada.example.com".into();
        assert!(matches!(lead.validate(), Err(AppError::InvalidLead(_))));
        lead.email = "ada@example.com".into();
        lead.first_name = " ".into();
        assert!(lead.validate().is_err());
    }

    #[test]
    fn test_menu_href_fallback() {
        let item = MenuItem {
            title: "Home".into(),
            url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(item.href(), "#");
    }
}
