use a1_core::models::Section;
use a1_core::section::{StatsMeta, TimelineMeta, UspMeta};
use leptos::prelude::*;

use super::SectionHeader;
use crate::render::icons::Icon;

/// Figures grid. Renders nothing without items.
#[component]
pub fn StatsSection(section: Section) -> impl IntoView {
    let items = section
        .meta_as::<StatsMeta>()
        .map(|m| m.items)
        .unwrap_or_default();
    if items.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="section section-alt">
            <div class="container">
                <SectionHeader
                    badge=Some("Stats".to_string())
                    title=section.title
                    subtitle=section.sub_title
                />
                <div class="grid grid-4">
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <div class="card">
                                <p class="stat-value">{item.value}</p>
                                <h3>{item.label}</h3>
                                <p class="muted">{item.description}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Unique selling points with headline numbers.
///
/// Renders nothing when there is neither a heading nor any item.
#[component]
pub fn UspSection(section: Section) -> impl IntoView {
    let Some(meta) = section.meta_as::<UspMeta>() else {
        return view! { "" }.into_any();
    };
    let heading = meta.heading.unwrap_or_default();
    let title = heading.title.or(section.title);
    if title.is_none() && meta.usp_items.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    badge=meta.badge
                    title=title
                    subtitle=heading.subtitle
                    html=true
                />
                <div class="grid grid-4">
                    {meta
                        .usp_items
                        .into_iter()
                        .map(|item| {
                            let icon = item.icon_key.unwrap_or_else(|| "award".to_string());
                            view! {
                                <div class="card" data-key=item.key data-tone=item.colors>
                                    <Icon name=icon class="icon icon-lg tone-teal" />
                                    {item.final_number.map(|n| view! {
                                        <p class="stat-value">{n}"+"</p>
                                    })}
                                    <h3>{item.label}</h3>
                                    {item.description.map(|d| view! { <p class="muted">{d}</p> })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Company history. Renders nothing without items.
#[component]
pub fn TimelineSection(section: Section) -> impl IntoView {
    let items = section
        .meta_as::<TimelineMeta>()
        .map(|m| m.items)
        .unwrap_or_default();
    if items.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="section">
            <div class="container">
                <SectionHeader badge=None title=section.title subtitle=section.sub_title />
                <div class="timeline">
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <div class="timeline-item">
                                <span class="timeline-year">{item.year}</span>
                                <h3>{item.title}</h3>
                                <p class="muted">{item.description}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
