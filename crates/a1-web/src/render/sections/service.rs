use a1_core::models::Section;
use a1_core::section::ServiceMeta;
use leptos::prelude::*;

use crate::format::ImageUrls;
use crate::render::icons::Icon;

/// Where service CTA buttons lead.
const SERVICE_CTA_HREF: &str = "/contact";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Banner at the top of a service page, fed by its `hero` section.
#[component]
pub fn ServiceHero(section: Section, images: ImageUrls) -> impl IntoView {
    let meta = section.meta_as::<ServiceMeta>().unwrap_or_default();
    let image = images
        .section_opt(meta.hero_image.as_deref())
        .or_else(|| images.section_opt(section.image.as_deref()));
    let alt = section.title.clone().unwrap_or_default();
    let description = non_blank(Some(meta.description));
    let primary = non_blank(meta.cta_primary);
    let secondary = non_blank(meta.cta_secondary);

    view! {
        <section class="hero">
            <div class="container grid grid-2">
                <div>
                    {non_blank(section.sub_title).map(|badge| view! {
                        <span class="badge"><Icon name="briefcase" />{badge}</span>
                    })}
                    <h1>{section.title}</h1>
                    {description.map(|d| view! { <p class="muted">{d}</p> })}
                    <div class="btn-row">
                        {primary.map(|label| view! {
                            <a class="btn" href=SERVICE_CTA_HREF>
                                {label}<Icon name="arrow-right" />
                            </a>
                        })}
                        {secondary.map(|label| view! {
                            <a class="btn btn-outline" href=SERVICE_CTA_HREF>{label}</a>
                        })}
                    </div>
                </div>
                {image.map(|src| view! { <img src=src alt=alt /> })}
            </div>
        </section>
    }
}

/// One feature block; odd indices put the icon on the right.
#[component]
pub fn ServiceBlock(section: Section, images: ImageUrls, index: usize) -> impl IntoView {
    let meta = section.meta_as::<ServiceMeta>().unwrap_or_default();
    let image = images.section_opt(meta.hero_image.as_deref());
    let alt = section.title.clone().unwrap_or_default();
    let icon = meta.icon.unwrap_or_else(|| "code".to_string());
    let class = if index % 2 == 1 {
        "section service-block reverse"
    } else {
        "section service-block"
    };

    view! {
        <div class=class>
            <div class="container grid grid-2">
                <div class="media">
                    {match image {
                        Some(src) => view! { <img src=src alt=alt /> }.into_any(),
                        None => view! {
                            <div class="card"><Icon name=icon class="icon icon-lg tone-blue" /></div>
                        }
                        .into_any(),
                    }}
                </div>
                <div>
                    <h3>{section.title}</h3>
                    <p class="muted">{meta.description}</p>
                    <ul class="bullets">
                        {meta
                            .features
                            .into_iter()
                            .map(|feature| view! {
                                <li><Icon name="check-circle" class="icon tone-blue" />{feature}</li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
