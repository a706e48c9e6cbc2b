//! Section dispatch: turns a page's raw section list into the deduplicated,
//! ordered sequence the renderers walk.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::Section;
use crate::section::SectionKind;

/// Identity of a logical section. Two records sharing all three parts are
/// the same section as far as rendering is concerned.
type SectionIdentity<'a> = (&'a str, i64, Option<&'a str>);

fn identity(section: &Section) -> SectionIdentity<'_> {
    (
        section.section_key.as_str(),
        section.sort_order,
        section.title.as_deref(),
    )
}

/// Deduplicate and order a page's sections.
///
/// The first record seen for a `(section_key, sort_order, title)` identity
/// wins; later records with the same identity are dropped even when their
/// `meta` differs. The survivors are sorted by `sort_order`, then `id`.
/// A missing list yields an empty one.
pub fn arrange_sections(sections: Option<&[Section]>) -> Vec<Section> {
    let Some(sections) = sections else {
        return Vec::new();
    };

    let mut seen: HashSet<SectionIdentity<'_>> = HashSet::with_capacity(sections.len());
    let mut arranged: Vec<Section> = sections
        .iter()
        .filter(|s| seen.insert(identity(s)))
        .cloned()
        .collect();

    arranged.sort_by_key(|s| (s.sort_order, s.id));
    arranged
}

/// Descriptor of one arranged section, as exposed by the JSON API and CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedSection {
    pub id: i64,
    pub section_key: String,
    /// Kind label, `unknown(<key>)` for keys with no renderer.
    pub kind: String,
    pub sort_order: i64,
    pub title: Option<String>,
    pub renderable: bool,
}

impl From<&Section> for PlannedSection {
    fn from(section: &Section) -> Self {
        let kind = section.kind();
        Self {
            id: section.id,
            section_key: section.section_key.clone(),
            renderable: kind.is_known(),
            kind: kind.to_string(),
            sort_order: section.sort_order,
            title: section.title.clone(),
        }
    }
}

/// Describe an already-arranged section list.
pub fn plan_sections(arranged: &[Section]) -> Vec<PlannedSection> {
    arranged.iter().map(PlannedSection::from).collect()
}

/// Resolve the kind a renderer should use, logging keys nobody renders.
pub fn resolve_kind(section: &Section) -> SectionKind {
    let kind = section.kind();
    if let SectionKind::Unknown(key) = &kind {
        tracing::warn!(
            section_id = section.id,
            section_key = %key,
            "No renderer for section key, skipping"
        );
    }
    kind
}
