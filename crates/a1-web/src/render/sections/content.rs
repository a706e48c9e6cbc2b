use a1_client::{parse_rich_content, sanitize_html};
use a1_core::models::Section;
use a1_core::section::{ContentMeta, LinkCta};
use leptos::prelude::*;

use super::hero::{CtaRow, cta_buttons};
use crate::format::ImageUrls;
use crate::render::icons::Icon;

/// Where the image sits relative to the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayout {
    ImageLeft,
    ImageRight,
    Centered,
}

impl ContentLayout {
    fn class(self) -> &'static str {
        match self {
            Self::ImageLeft => "section content-block",
            Self::ImageRight => "section content-block reverse",
            Self::Centered => "section content-block centered",
        }
    }
}

fn link_button(cta: Option<LinkCta>, class: &'static str) -> Option<impl IntoView + use<>> {
    cta.filter(LinkCta::is_valid)
        .map(|cta| view! { <a class=class href=cta.url>{cta.label}</a> })
}

/// Image-and-copy block shared by the three content section kinds.
#[component]
pub fn ContentSection(
    section: Section,
    images: ImageUrls,
    layout: ContentLayout,
) -> impl IntoView {
    let meta = section.meta_as::<ContentMeta>().unwrap_or_default();
    let title = section.title.as_deref().map(sanitize_html);
    let rich = meta
        .content
        .as_deref()
        .map(parse_rich_content)
        .unwrap_or_default();
    let image = images
        .section_opt(meta.image.as_deref())
        .or_else(|| images.section_opt(section.image.as_deref()));
    let alt = section.title.clone().unwrap_or_default();

    // Only the image-right layout carries heading, points and CTA rows.
    let extras = (layout == ContentLayout::ImageRight).then(|| {
        let heading = meta.heading.clone().unwrap_or_default();
        let points: Vec<String> = meta.points.iter().filter_map(|p| p.text.clone()).collect();
        let buttons = cta_buttons(&meta.ctas);
        let side = meta.side_description.clone();
        view! {
            {heading.title.map(|t| view! {
                <h3>{t}" "<span class="highlight">{heading.highlight}</span></h3>
            })}
            {heading.subtitle.map(|s| view! { <p class="muted">{s}</p> })}
            {(!points.is_empty()).then(|| view! {
                <ul class="points">
                    {points
                        .into_iter()
                        .map(|text| view! {
                            <li><Icon name="check" class="icon tone-teal" />{text}</li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            })}
            {side.map(|s| view! { <p>{s}</p> })}
            <CtaRow buttons=buttons />
        }
    });

    let primary = link_button(meta.cta_primary, "btn");
    let secondary = link_button(meta.cta_secondary, "btn btn-outline");
    let has_links = primary.is_some() || secondary.is_some();

    let copy = view! {
        <div class="copy">
            {meta.badge.map(|b| view! { <span class="badge">{b}</span> })}
            {title.map(|html| view! { <h2 inner_html=html></h2> })}
            {section.sub_title.map(|s| view! { <p class="muted">{s}</p> })}
            {rich.description.map(|d| view! { <p>{d}</p> })}
            {(!rich.bullets.is_empty()).then(|| view! {
                <ul class="bullets">
                    {rich
                        .bullets
                        .into_iter()
                        .map(|b| view! {
                            <li><Icon name="check" class="icon tone-teal" />{b}</li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            })}
            {extras}
            {has_links.then(|| view! { <div class="btn-row">{primary}{secondary}</div> })}
        </div>
    };
    let media = image.map(|src| view! { <div class="media"><img src=src alt=alt /></div> });
    let inner = match layout {
        ContentLayout::Centered => "container",
        _ => "container grid grid-2",
    };

    view! {
        <section class=layout.class()>
            <div class=inner>
                {media}
                {copy}
            </div>
        </section>
    }
}
