use a1_client::sanitize_html;
use a1_core::models::Section;
use a1_core::section::{ClientItem, ClientsMeta, SolutionsMeta, WhyChooseMeta};
use leptos::prelude::*;

use super::SectionHeader;
use super::hero::{CtaRow, cta_buttons};
use crate::format::{ImageUrls, theme_color};
use crate::render::icons::Icon;

fn client_chip(client: ClientItem, images: &ImageUrls) -> impl IntoView + use<> {
    let logo = client
        .has_logo()
        .then(|| images.section_opt(client.logo.as_deref()))
        .flatten();
    let icon = client.icon_key.unwrap_or_else(|| "startup".to_string());
    let alt = client.name.clone();
    view! {
        <div class="client" data-tone=client.colors>
            {match logo {
                Some(src) => view! { <img src=src alt=alt /> }.into_any(),
                None => view! { <Icon name=icon class="icon icon-lg tone-teal" /> }.into_any(),
            }}
            <span>{client.name}</span>
        </div>
    }
}

/// Scrolling client strip. The list is emitted twice so the marquee loops.
#[component]
pub fn ClientsLogoSlider(section: Section, images: ImageUrls) -> impl IntoView {
    let clients = section
        .meta_as::<ClientsMeta>()
        .map(|m| m.client_items)
        .unwrap_or_default();
    if clients.is_empty() {
        return view! { "" }.into_any();
    }

    let title = section.title.as_deref().map(sanitize_html);
    let chips = |items: &[ClientItem]| {
        items
            .iter()
            .cloned()
            .map(|client| client_chip(client, &images))
            .collect::<Vec<_>>()
    };
    let first = chips(&clients);
    let second = chips(&clients);

    view! {
        <section class="section">
            <div class="container">
                {title.map(|html| view! { <h2 class="section-head" inner_html=html></h2> })}
                <div class="marquee">
                    <div class="marquee-track">{first}{second}</div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Split heading, stat strip and themed feature cards.
#[component]
pub fn WhyChooseSection(section: Section) -> impl IntoView {
    let Some(meta) = section.meta_as::<WhyChooseMeta>() else {
        return view! { "" }.into_any();
    };
    let body = meta.header;
    let header = body.header;
    let buttons = body
        .cta
        .as_ref()
        .map(std::slice::from_ref)
        .map(cta_buttons)
        .unwrap_or_default();

    view! {
        <section class="section section-alt">
            <div class="container">
                <div class="section-head">
                    {header.badge.map(|badge| view! { <span class="badge">{badge}</span> })}
                    <h2>
                        {header.title.prefix}" "
                        <span class="highlight">{header.title.highlight}</span>" "
                        {header.title.suffix}
                    </h2>
                    {header.subtitle.map(|s| view! { <p>{s}</p> })}
                </div>
                {(!body.stats.is_empty()).then(|| view! {
                    <div class="grid grid-4">
                        {body
                            .stats
                            .into_iter()
                            .map(|stat| view! {
                                <div class="card">
                                    <p class="stat-value">{stat.value}</p>
                                    <p class="muted">{stat.label}</p>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                })}
                <div class="grid grid-3">
                    {body
                        .features
                        .into_iter()
                        .map(|feature| {
                            let tone = format!("tone-{}", theme_color(feature.theme.as_deref()));
                            let icon = feature.icon.unwrap_or_else(|| "check".to_string());
                            view! {
                                <div class="card">
                                    <span class=tone><Icon name=icon class="icon icon-lg" /></span>
                                    <h3>{feature.title}</h3>
                                    <p class="muted">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <CtaRow buttons=buttons />
            </div>
        </section>
    }
    .into_any()
}

/// Specialisation cards with role counts, then a list of solutions.
#[component]
pub fn SolutionsSection(section: Section) -> impl IntoView {
    let Some(meta) = section.meta_as::<SolutionsMeta>() else {
        return view! { "" }.into_any();
    };

    view! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    badge=meta.header.badge
                    title=meta.header.title.or(section.title)
                    subtitle=meta.header.subtitle
                />
                <div class="grid grid-3">
                    {meta
                        .specializations
                        .into_iter()
                        .map(|specialization| {
                            let icon = specialization.icon.unwrap_or_else(|| "briefcase".to_string());
                            let link = specialization.link.filter(|l| !l.trim().is_empty());
                            view! {
                                <div class="card">
                                    <Icon name=icon class="icon icon-lg tone-teal" />
                                    <h3>{specialization.title}</h3>
                                    <p class="muted">{specialization.description}</p>
                                    <p class="highlight">{specialization.count}</p>
                                    {link.map(|href| view! {
                                        <a class="highlight" href=href>
                                            "Learn more" <Icon name="arrow-right" />
                                        </a>
                                    })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                {(!meta.solutions.is_empty()).then(|| view! {
                    <ul class="points grid grid-2">
                        {meta
                            .solutions
                            .into_iter()
                            .map(|item| {
                                let icon = item.icon.unwrap_or_else(|| "check".to_string());
                                view! {
                                    <li>
                                        <Icon name=icon class="icon tone-teal" />
                                        <div>
                                            <strong>{item.title}</strong>
                                            <p class="muted">{item.description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                })}
            </div>
        </section>
    }
    .into_any()
}
