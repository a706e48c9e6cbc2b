use a1_client::sanitize_html;
use a1_core::models::Section;
use a1_core::section::FaqMeta;
use leptos::prelude::*;

use crate::render::icons::Icon;

/// Icon and tone cycled across questions.
const FAQ_ACCENTS: [(&str, &str); 4] = [
    ("help-circle", "tone-teal"),
    ("briefcase", "tone-blue"),
    ("users", "tone-purple"),
    ("shield", "tone-orange"),
];

/// Accordion of questions; the first one starts expanded.
#[component]
pub fn FaqSection(section: Section) -> impl IntoView {
    let meta = section.meta_as::<FaqMeta>().unwrap_or_default();
    if meta.faq_items.is_empty() {
        return view! { "" }.into_any();
    }
    let title = meta
        .faq_title
        .as_deref()
        .or(section.title.as_deref())
        .map(sanitize_html);

    view! {
        <section class="section faq">
            <div class="container">
                {title.map(|html| view! { <h2 class="section-head" inner_html=html></h2> })}
                {meta
                    .faq_items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let (icon, tone) = FAQ_ACCENTS[i % FAQ_ACCENTS.len()];
                        view! {
                            <details open={i == 0}>
                                <summary>
                                    <span class=tone><Icon name=icon /></span>
                                    {item.question}
                                </summary>
                                <p class="muted">{item.answer}</p>
                            </details>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}
