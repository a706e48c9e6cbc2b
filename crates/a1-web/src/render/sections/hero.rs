use a1_client::sanitize_html;
use a1_core::models::Section;
use a1_core::section::{Cta, HeroMeta, SliderMeta};
use leptos::prelude::*;

use crate::format::ImageUrls;
use crate::render::icons::Icon;

/// Label, target and outline flag of every renderable CTA.
pub(crate) fn cta_buttons(ctas: &[Cta]) -> Vec<(String, String, bool)> {
    ctas.iter()
        .filter_map(|cta| {
            cta.parts()
                .map(|(label, link)| (label.to_string(), link.to_string(), cta.is_outline()))
        })
        .collect()
}

#[component]
pub(crate) fn CtaRow(buttons: Vec<(String, String, bool)>) -> impl IntoView {
    if buttons.is_empty() {
        return view! { "" }.into_any();
    }
    view! {
        <div class="btn-row">
            {buttons
                .into_iter()
                .map(|(label, link, outline)| {
                    let class = if outline { "btn btn-outline" } else { "btn" };
                    view! { <a class=class href=link>{label}</a> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Landing banner. Renders nothing without `meta`.
#[component]
pub fn HeroSection(section: Section, images: ImageUrls) -> impl IntoView {
    let Some(meta) = section.meta_as::<HeroMeta>() else {
        return view! { "" }.into_any();
    };

    let image = images
        .section_opt(meta.image.as_deref())
        .or_else(|| images.section_opt(section.image.as_deref()));
    let heading = meta.heading.unwrap_or_default();
    let buttons = cta_buttons(&meta.ctas);
    let points: Vec<(String, String)> = meta
        .points
        .into_iter()
        .filter_map(|p| p.text.map(|text| (p.icon.unwrap_or_default(), text)))
        .collect();

    view! {
        <section class="hero">
            <div class="container grid grid-2">
                <div>
                    {meta.badge.map(|badge| view! {
                        <span class="badge"><Icon name="briefcase" />{badge}</span>
                    })}
                    <h1>
                        <span>{heading.title}</span>
                        <span class="highlight">{heading.highlight}</span>
                        <span>{heading.subtitle}</span>
                    </h1>
                    {meta.description.map(|d| view! { <p class="muted">{d}</p> })}
                    {(!points.is_empty()).then(|| view! {
                        <ul class="points">
                            {points
                                .into_iter()
                                .map(|(icon, text)| view! {
                                    <li><Icon name=icon class="icon tone-teal" />{text}</li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    })}
                    <CtaRow buttons=buttons />
                </div>
                {image.map(|src| view! {
                    <div class="media"><img src=src alt="" /></div>
                })}
            </div>
        </section>
    }
    .into_any()
}

/// Image carousel. Without scripting the first slide is shown; the rest are
/// present for the stylesheet to cycle. Renders nothing without images.
#[component]
pub fn SliderSection(section: Section, images: ImageUrls) -> impl IntoView {
    if section.images.is_empty() {
        return view! { "" }.into_any();
    }
    let meta = section.meta_as::<SliderMeta>().unwrap_or_default();
    let slides: Vec<String> = section
        .images
        .iter()
        .map(|image| images.section(Some(image)))
        .collect();
    let buttons = cta_buttons(&meta.cta);
    let title = section
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(sanitize_html);
    let sub_title = section
        .sub_title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(sanitize_html);

    view! {
        <section class="section">
            <div class="container">
                {(title.is_some() || sub_title.is_some()).then(|| view! {
                    <div class="section-head">
                        {title.map(|html| view! { <h1 inner_html=html></h1> })}
                        {sub_title.map(|html| view! { <p inner_html=html></p> })}
                    </div>
                })}
                <div class="slider">
                    {slides
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            let class = if i == 0 { "slide active" } else { "slide" };
                            view! {
                                <div class=class>
                                    <img src=src alt=format!("Slide {}", i + 1) />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                {meta.caption.map(|c| view! { <p class="muted">{c}</p> })}
                <CtaRow buttons=buttons />
            </div>
        </section>
    }
    .into_any()
}
