//! Section kinds and their typed `meta` projections.
//!
//! Every CMS section carries a `section_key` discriminant and a free-form
//! `meta` object whose shape depends on that key. [`SectionKind`] is the
//! closed set of keys this site knows how to render; the structs below are
//! the projections of `meta` for each kind. All fields are optional or
//! defaulted so partially-authored sections still parse.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Discriminant of a CMS section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Stats,
    Timeline,
    Values,
    Leadership,
    Slider,
    UspItems,
    ClientsLogoSlider,
    Testimonials,
    WhyChoose,
    Solutions,
    Faq,
    Jobs,
    LeftImageRightContent,
    MiddleContent,
    RightImageLeftContent,
    Service,
    Unknown(String),
}

impl SectionKind {
    /// Static lookup from `section_key` to kind.
    pub fn from_key(key: &str) -> Self {
        match key {
            "hero" => Self::Hero,
            "stats" => Self::Stats,
            "timeline" => Self::Timeline,
            "values" => Self::Values,
            "leadership" => Self::Leadership,
            "slider" => Self::Slider,
            "usp_items" => Self::UspItems,
            "clientsLogoSlider" => Self::ClientsLogoSlider,
            "testimonials" => Self::Testimonials,
            "why_choose" => Self::WhyChoose,
            "solutions" => Self::Solutions,
            "faq" => Self::Faq,
            "jobs" => Self::Jobs,
            "leftImageRightContent" => Self::LeftImageRightContent,
            "middleContent" => Self::MiddleContent,
            "rightImageLeftContent" => Self::RightImageLeftContent,
            "service" => Self::Service,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The CMS key for this kind.
    pub fn key(&self) -> &str {
        match self {
            Self::Hero => "hero",
            Self::Stats => "stats",
            Self::Timeline => "timeline",
            Self::Values => "values",
            Self::Leadership => "leadership",
            Self::Slider => "slider",
            Self::UspItems => "usp_items",
            Self::ClientsLogoSlider => "clientsLogoSlider",
            Self::Testimonials => "testimonials",
            Self::WhyChoose => "why_choose",
            Self::Solutions => "solutions",
            Self::Faq => "faq",
            Self::Jobs => "jobs",
            Self::LeftImageRightContent => "leftImageRightContent",
            Self::MiddleContent => "middleContent",
            Self::RightImageLeftContent => "rightImageLeftContent",
            Self::Service => "service",
            Self::Unknown(key) => key,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(key) => write!(f, "unknown({key})"),
            known => f.write_str(known.key()),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(default, rename = "headingTitle")]
    pub title: Option<String>,
    #[serde(default, rename = "headingsubtitle")]
    pub subtitle: Option<String>,
    #[serde(default, rename = "headinghighlight")]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Call-to-action button. The CMS uses both `link` and `url` for the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, alias = "url")]
    pub link: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
}

impl Cta {
    /// Label and non-blank target, or `None` when the button cannot render.
    pub fn parts(&self) -> Option<(&str, &str)> {
        let label = self.label.as_deref().filter(|l| !l.trim().is_empty())?;
        let link = self.link.as_deref().filter(|l| !l.trim().is_empty())?;
        Some((label, link))
    }

    pub fn is_outline(&self) -> bool {
        self.variant.as_deref() == Some("outline")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconItem {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
}

// ---------------------------------------------------------------------------
// Per-kind meta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroMeta {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub heading: Option<Heading>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub points: Vec<Point>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub ctas: Vec<Cta>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsMeta {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub items: Vec<StatItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineMeta {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub items: Vec<TimelineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuesMeta {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub items: Vec<IconItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadershipMeta {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub members: Vec<Leader>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderMeta {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub cta: Vec<Cta>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UspItem {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "finalNumber", deserialize_with = "lenient::opt_i64")]
    pub final_number: Option<i64>,
    #[serde(default)]
    pub colors: Option<String>,
    #[serde(default)]
    pub icon_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UspMeta {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub heading: Option<Heading>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub usp_items: Vec<UspItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientItem {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub colors: Option<String>,
    #[serde(default)]
    pub icon_key: Option<String>,
}

impl ClientItem {
    pub fn has_logo(&self) -> bool {
        self.logo.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientsMeta {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub client_items: Vec<ClientItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsMeta {
    #[serde(default)]
    pub colors: Option<String>,
}

/// `why_choose` nests everything one level down, under `meta.header`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhyChooseMeta {
    #[serde(default)]
    pub header: WhyChooseBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhyChooseBody {
    #[serde(default)]
    pub header: WhyChooseHeader,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub stats: Vec<StatItem>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub features: Vec<ThemedFeature>,
    #[serde(default)]
    pub cta: Option<Cta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhyChooseHeader {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub title: SplitTitle,
    #[serde(default)]
    pub subtitle: Option<String>,
}

/// A heading split around a highlighted middle part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitTitle {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub prefix: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub highlight: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemedFeature {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionsMeta {
    #[serde(default)]
    pub header: SolutionsHeader,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub specializations: Vec<Specialization>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub solutions: Vec<IconItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionsHeader {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub count: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqMeta {
    /// HTML heading; sanitised before rendering.
    #[serde(default)]
    pub faq_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub faq_items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkCta {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub url: String,
}

impl LinkCta {
    pub fn is_valid(&self) -> bool {
        !self.url.trim().is_empty() && !self.label.trim().is_empty()
    }
}

/// Shared by `leftImageRightContent`, `middleContent` and
/// `rightImageLeftContent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentMeta {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    /// HTML body: the first `<p>` is the description, each `<span>` a bullet.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "ctaPrimary")]
    pub cta_primary: Option<LinkCta>,
    #[serde(default, rename = "ctaSecondary")]
    pub cta_secondary: Option<LinkCta>,
    #[serde(default)]
    pub heading: Option<Heading>,
    #[serde(default, rename = "rightsectiondescription")]
    pub side_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub points: Vec<Point>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub ctas: Vec<Cta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceMeta {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub features: Vec<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default, rename = "ctaPrimary")]
    pub cta_primary: Option<String>,
    #[serde(default, rename = "ctaSecondary")]
    pub cta_secondary: Option<String>,
}
