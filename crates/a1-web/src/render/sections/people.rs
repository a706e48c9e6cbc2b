use a1_core::models::{Section, Testimonial};
use a1_core::section::{LeadershipMeta, ValuesMeta};
use leptos::prelude::*;

use super::SectionHeader;
use crate::format::{ImageUrls, value_color};
use crate::render::icons::Icon;

/// Leadership team cards. Renders nothing without members.
#[component]
pub fn LeadershipSection(section: Section, images: ImageUrls) -> impl IntoView {
    let members = section
        .meta_as::<LeadershipMeta>()
        .map(|m| m.members)
        .unwrap_or_default();
    if members.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="section section-alt">
            <div class="container">
                <SectionHeader badge=None title=section.title subtitle=section.sub_title />
                <div class="grid grid-3">
                    {members
                        .into_iter()
                        .map(|member| {
                            let photo = images.section_opt(member.image.as_deref());
                            let alt = member.name.clone();
                            view! {
                                <div class="card leader">
                                    {photo.map(|src| view! { <img src=src alt=alt /> })}
                                    <h3>{member.name}</h3>
                                    <p class="highlight">{member.role}</p>
                                    {member.bio.map(|bio| view! { <p class="muted">{bio}</p> })}
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

/// Company values, each tinted by its title.
#[component]
pub fn ValuesSection(section: Section) -> impl IntoView {
    let items = section
        .meta_as::<ValuesMeta>()
        .map(|m| m.items)
        .unwrap_or_default();
    if items.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="section">
            <div class="container">
                <SectionHeader badge=None title=section.title subtitle=section.sub_title />
                <div class="grid grid-4">
                    {items
                        .into_iter()
                        .map(|item| {
                            let color = value_color(&item.title);
                            let icon = item.icon.unwrap_or_else(|| "heart".to_string());
                            view! {
                                <div class=format!("card value-{color}")>
                                    <Icon name=icon class=tone_class(color) />
                                    <h3>{item.title}</h3>
                                    <p class="muted">{item.description}</p>
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

fn tone_class(color: &str) -> &'static str {
    match color {
        "emerald" => "icon icon-lg tone-emerald",
        "blue" => "icon icon-lg tone-blue",
        "purple" => "icon icon-lg tone-purple",
        "orange" => "icon icon-lg tone-orange",
        _ => "icon icon-lg",
    }
}

/// Client quotes. Renders nothing when no testimonials were loaded.
#[component]
pub fn TestimonialsSection(
    section: Section,
    testimonials: Vec<Testimonial>,
    images: ImageUrls,
) -> impl IntoView {
    if testimonials.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="section section-alt">
            <div class="container">
                <SectionHeader
                    badge=None
                    title=section.title
                    subtitle=section.sub_title
                    html=true
                />
                <div class="grid grid-3">
                    {testimonials
                        .into_iter()
                        .map(|t| {
                            let avatar = images.asset(t.avatar.as_deref());
                            let initials = t.initials();
                            let alt = t.author_name.clone();
                            let byline = match t.company.as_deref().filter(|c| !c.trim().is_empty()) {
                                Some(company) => format!("{}, {company}", t.author_designation),
                                None => t.author_designation.clone(),
                            };
                            view! {
                                <figure class="card">
                                    <Icon name="quote" class="icon icon-lg tone-teal" />
                                    <blockquote>{t.message}</blockquote>
                                    <figcaption class="points">
                                        {match avatar {
                                            Some(src) => view! {
                                                <img class="avatar" src=src alt=alt />
                                            }
                                            .into_any(),
                                            None => view! {
                                                <span class="initials">{initials}</span>
                                            }
                                            .into_any(),
                                        }}
                                        <div>
                                            <strong>{t.author_name}</strong>
                                            <p class="muted">{byline}</p>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
