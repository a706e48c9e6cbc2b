//! Inline SVG icons, looked up by the icon names the CMS stores.
//!
//! The CMS uses icon-library names in any casing (`CheckCircle2`,
//! `check-circle`, `briefcase`); lookup ignores case and separators.

use leptos::prelude::*;

/// Renders a 24x24 stroke icon.
#[component]
pub fn Icon(
    /// CMS icon name; unknown names fall back to a check mark
    #[prop(into)]
    name: String,
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=icon_path(&name)></path>
        </svg>
    }
}

/// Path data for an icon name.
pub fn icon_path(name: &str) -> &'static str {
    let key: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match key.as_str() {
        "briefcase" | "briefcasebusiness" => ICON_BRIEFCASE,
        "users" | "users2" | "usersround" | "team" => ICON_USERS,
        "user" | "usercheck" => ICON_USER,
        "star" | "sparkles" => ICON_STAR,
        "award" | "trophy" | "medal" => ICON_AWARD,
        "target" | "crosshair" => ICON_TARGET,
        "zap" | "bolt" | "lightning" => ICON_ZAP,
        "shield" | "shieldcheck" | "lock" => ICON_SHIELD,
        "trendingup" | "chart" | "barchart" | "linechart" => ICON_TRENDING,
        "globe" | "globe2" | "world" => ICON_GLOBE,
        "mappin" | "location" => ICON_MAP_PIN,
        "clock" | "timer" => ICON_CLOCK,
        "mail" | "email" => ICON_MAIL,
        "phone" | "phonecall" => ICON_PHONE,
        "building" | "building2" | "enterprise" | "startup" | "company" => ICON_BUILDING,
        "heart" | "handshake" | "heartpulse" => ICON_HEART,
        "search" => ICON_SEARCH,
        "arrowright" | "chevronright" => ICON_ARROW_RIGHT,
        "rocket" => ICON_ROCKET,
        "code" | "laptop" | "cpu" => ICON_CODE,
        "dollarsign" | "banknote" | "wallet" => ICON_DOLLAR,
        "quote" => ICON_QUOTE,
        "helpcircle" | "circlehelp" | "question" => ICON_HELP,
        _ => ICON_CHECK_CIRCLE,
    }
}

pub const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4 12 14.01l-3-3";
pub const ICON_BRIEFCASE: &str =
    "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16";
pub const ICON_USERS: &str = "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";
pub const ICON_USER: &str = "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z";
pub const ICON_STAR: &str =
    "m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";
pub const ICON_AWARD: &str = "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.21 13.89 7 23l5-3 5 3-1.21-9.12";
pub const ICON_TARGET: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z";
pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";
pub const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4";
pub const ICON_TRENDING: &str = "m23 6-9.5 9.5-5-5L1 18M17 6h6v6";
pub const ICON_GLOBE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";
pub const ICON_MAP_PIN: &str =
    "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z";
pub const ICON_CLOCK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2";
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6";
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z";
pub const ICON_BUILDING: &str = "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18zM6 12H4a2 2 0 0 0-2 2v8h4M18 9h2a2 2 0 0 1 2 2v11h-4M10 6h4M10 10h4M10 14h4M10 18h4";
pub const ICON_HEART: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78L12 21.23l8.84-8.84a5.5 5.5 0 0 0 0-7.78z";
pub const ICON_SEARCH: &str = "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zM21 21l-4.35-4.35";
pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";
pub const ICON_ROCKET: &str = "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09zM12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z";
pub const ICON_CODE: &str = "m16 18 6-6-6-6M8 6l-6 6 6 6";
pub const ICON_DOLLAR: &str = "M12 1v22M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6";
pub const ICON_QUOTE: &str = "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .01-1 1.03V20c0 1 0 1 1 1zM15 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z";
pub const ICON_HELP: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3M12 17h.01";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_separators() {
        assert_eq!(icon_path("Briefcase"), ICON_BRIEFCASE);
        assert_eq!(icon_path("map-pin"), ICON_MAP_PIN);
        assert_eq!(icon_path("TrendingUp"), ICON_TRENDING);
        assert_eq!(icon_path("icon_that_does_not_exist"), ICON_CHECK_CIRCLE);
        assert_eq!(icon_path(""), ICON_CHECK_CIRCLE);
    }
}
