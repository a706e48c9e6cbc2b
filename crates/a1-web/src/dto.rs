use serde::{Deserialize, Serialize};

use a1_core::dispatch::PlannedSection;
use a1_core::models::{LeadSubmission, Page};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SectionPlanResponse {
    pub id: i64,
    pub section_key: String,
    /// Renderer chosen for the section, `unknown(<key>)` when none applies.
    pub kind: String,
    pub sort_order: i64,
    pub title: Option<String>,
}

impl From<PlannedSection> for SectionPlanResponse {
    fn from(p: PlannedSection) -> Self {
        Self {
            id: p.id,
            section_key: p.section_key,
            kind: p.kind,
            sort_order: p.sort_order,
            title: p.title,
        }
    }
}

/// A page after de-duplication and ordering, without rendering.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PagePlanResponse {
    pub title: String,
    pub meta_title: Option<String>,
    pub sections: Vec<SectionPlanResponse>,
}

impl From<&Page> for PagePlanResponse {
    fn from(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            meta_title: page.meta_title.clone(),
            sections: a1_core::plan_sections(page.arranged_sections())
                .into_iter()
                .map(SectionPlanResponse::from)
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

/// Lead payload accepted by the JSON API and both site forms.
///
/// Every field defaults to empty so that missing values reach validation
/// instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LeadRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub role_to_hire: String,
    pub requirements: String,
    /// Defaults to the caller's source tag when omitted.
    pub source: Option<String>,
}

impl LeadRequest {
    /// Set a text field by its form name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "first_name" => self.first_name = value,
            "last_name" => self.last_name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "company_name" => self.company_name = value,
            "role_to_hire" => self.role_to_hire = value,
            "requirements" => self.requirements = value,
            _ => {}
        }
    }

    pub fn into_lead(self, default_source: &str) -> LeadSubmission {
        LeadSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company_name: self.company_name,
            role_to_hire: self.role_to_hire,
            requirements: self.requirements,
            source: self
                .source
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| default_source.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LeadResponse {
    pub status: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Health / errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
