//! Page shell: `<head>`, navigation and footer around every page.

use a1_core::models::{MenuItem, WebsiteSettings};
use leptos::prelude::*;

use super::SiteChrome;
use crate::render::icons::Icon;

/// Footer quick links: `(label, href)`.
const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Post a Job", "/contact"),
    ("Browse Jobs", "/jobs"),
    ("Upload CV", "/jobseekers"),
    ("Career Advice", "/blogs"),
];

#[component]
pub fn Document(
    title: String,
    description: String,
    chrome: SiteChrome,
    children: Children,
) -> impl IntoView {
    let site_name = chrome.settings.site_name().to_string();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                <link rel="stylesheet" href="/assets/site.css" />
            </head>
            <body>
                <Navigation site_name=site_name menu=chrome.menu />
                <main>{children()}</main>
                <Footer settings=chrome.settings year=chrome.year />
            </body>
        </html>
    }
}

fn menu_entry(item: MenuItem) -> AnyView {
    if item.children.is_empty() {
        let href = item.href().to_string();
        return view! { <li><a href=href>{item.title}</a></li> }.into_any();
    }
    view! {
        <li>
            <details>
                <summary>{item.title}</summary>
                <ul class="submenu">
                    {item.children.into_iter().map(menu_entry).collect::<Vec<_>>()}
                </ul>
            </details>
        </li>
    }
    .into_any()
}

/// Top bar with the CMS menu; items with children open as dropdowns.
#[component]
pub fn Navigation(site_name: String, menu: Vec<MenuItem>) -> impl IntoView {
    view! {
        <header class="site-nav">
            <div class="container">
                <a class="brand" href="/">{site_name}</a>
                <nav aria-label="Main">
                    <ul class="menu">
                        {menu.into_iter().map(menu_entry).collect::<Vec<_>>()}
                        <li><a class="btn" href="/contact">"Contact Us"</a></li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer(settings: WebsiteSettings, year: i32) -> impl IntoView {
    let site_name = settings.site_name().to_string();
    let tagline = settings.tagline().to_string();
    let phone = settings.contact_number().to_string();
    let email = settings.email().to_string();
    let address = settings.address().to_string();
    let socials = settings.social_links();
    let mailto = format!("mailto:{email}");
    let tel = format!("tel:{phone}");
    let copyright = format!("© {year} {site_name}. All rights reserved.");

    view! {
        <footer class="site-footer">
            <div class="container grid grid-3">
                <div>
                    <h4>{site_name}</h4>
                    <p>{tagline}</p>
                    {(!socials.is_empty()).then(|| view! {
                        <div class="socials">
                            {socials
                                .into_iter()
                                .map(|(network, href)| view! {
                                    <a href=href rel="noopener" aria-label=network>{network}</a>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    })}
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <ul>
                        {FOOTER_LINKS
                            .iter()
                            .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <ul>
                        <li><Icon name="phone" /><a href=tel>{phone}</a></li>
                        <li><Icon name="mail" /><a href=mailto>{email}</a></li>
                        <li><Icon name="map-pin" />{address}</li>
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">{copyright}</div>
        </footer>
    }
}
